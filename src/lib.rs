//! A context menu widget for [`iced`], generic over a host-supplied context.
//!
//! The widget is split the same way an Elm-style application is: a
//! [`State`] driven by [`Event`]s, a [`subscription()`] declaring the input
//! streams it observes, and a [`view()`] entry point producing the overlay.
//! Opening is deferred by one runtime turn so the press that requests a menu
//! is never also the press that dismisses it.
//!
//! # Example
//! ```no_run
//! use iced::widget::{stack, text};
//! use iced::{Element, Subscription, Task};
//! use iced_context_menu::{self as context_menu, Item, Style};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Menu(context_menu::Event<u32>),
//!     Remove(u32),
//! }
//!
//! struct App {
//!     menu: context_menu::State<u32>,
//! }
//!
//! impl App {
//!     fn new() -> (Self, Task<Message>) {
//!         let (menu, measure) = context_menu::State::new();
//!
//!         (Self { menu }, measure.map(Message::Menu))
//!     }
//!
//!     fn update(&mut self, message: Message) -> Task<Message> {
//!         match message {
//!             Message::Menu(event) => self.menu.update(event).map(Message::Menu),
//!             Message::Remove(_) => Task::none(),
//!         }
//!     }
//!
//!     fn view(&self) -> Element<'_, Message> {
//!         let base = context_menu::attach(text("Right-click me"), 1, Message::Menu);
//!
//!         let menu = context_menu::view(
//!             &self.menu,
//!             &Style::default(),
//!             |id| vec![vec![Item::new("Remove").on_select(Message::Remove(*id))]],
//!             Message::Menu,
//!         );
//!
//!         stack![base, menu].into()
//!     }
//!
//!     fn subscription(&self) -> Subscription<Message> {
//!         context_menu::subscription().map(Message::Menu)
//!     }
//! }
//!
//! fn main() -> iced::Result {
//!     iced::application("Demo", App::update, App::view)
//!         .subscription(App::subscription)
//!         .run_with(App::new)
//! }
//! ```

pub mod geometry;

mod item;
mod state;
mod style;
mod view;

pub use item::{Item, ItemGroup, ANNOTATION_HEIGHT, ANNOTATION_OVERLAP, ITEM_HEIGHT};
pub use state::{subscription, Event, State};
pub use style::{Direction, Overflow, Style};
pub use view::{attach, view};
