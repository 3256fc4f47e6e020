//! The context-menu state machine.
//!
//! [`State`] is the single mutable value of the widget. It is driven
//! exclusively by [`Event`]s: the host feeds it the runtime's pointer and
//! window streams through [`subscription`], and the widget's own messages
//! through [`State::update`]. The view layer only ever reads a snapshot.

use iced::event::{self, Status};
use iced::{mouse, window, Point, Size, Subscription, Task};

/// An event driving the context-menu [`State`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event<C> {
    /// The host requested a menu for the given context.
    ///
    /// The actual open is deferred by one runtime turn; see [`State::update`].
    OpenRequested(C),
    /// A deferred open arrived and the menu commits to opening.
    Opened(C),
    /// The menu was asked to close.
    Dismissed,
    /// The pointer moved. Tracked in every state, so the next open knows
    /// where to anchor.
    PointerMoved(Point),
    /// Any pointer button was pressed somewhere.
    PointerPressed,
    /// The viewport was resized or measured.
    ViewportResized(Size),
    /// The pointer entered an item, identified by its `(group, item)` index
    /// pair.
    HoverEntered((usize, usize)),
    /// The pointer left the item with the given index pair.
    ///
    /// The leave carries its index because a single pointer move can deliver
    /// the enter for the new item before the leave for the old one; a leave
    /// must only clear a hover it still owns.
    HoverLeft((usize, usize)),
}

#[derive(Debug)]
struct OpenMenu<C> {
    trigger: Point,
    context: C,
    hovered: Option<(usize, usize)>,
}

/// The state of a context-menu widget.
///
/// Create it with [`State::new`] at application start and keep exactly one
/// per widget instance.
#[derive(Debug)]
pub struct State<C> {
    open: Option<OpenMenu<C>>,
    pointer: Point,
    viewport: Size,
}

impl<C> Default for State<C> {
    fn default() -> Self {
        Self {
            open: None,
            pointer: Point::ORIGIN,
            // Sentinel until the first measurement; overflow logic must not
            // clamp against a viewport that was never observed.
            viewport: Size::INFINITY,
        }
    }
}

impl<C> State<C>
where
    C: Send + 'static,
{
    /// Creates a closed [`State`] along with a one-time [`Task`] measuring
    /// the current viewport.
    pub fn new() -> (Self, Task<Event<C>>) {
        (
            Self::default(),
            window::get_latest()
                .and_then(window::get_size)
                .map(Event::ViewportResized),
        )
    }

    /// Processes an [`Event`] and returns the follow-up [`Task`].
    ///
    /// [`Event::OpenRequested`] does not open the menu synchronously: the
    /// pointer press that triggers an open is also seen by the
    /// dismiss-on-press handling of the same press, which would close the
    /// menu on the spot. Instead the open is re-issued as [`Event::Opened`]
    /// through a [`Task`], which the runtime delivers on a later turn,
    /// strictly after the originating press. Pending opens are never
    /// cancelled; when several requests race, whichever [`Event::Opened`]
    /// the runtime delivers last wins.
    pub fn update(&mut self, event: Event<C>) -> Task<Event<C>> {
        match event {
            Event::OpenRequested(context) => {
                return Task::done(Event::Opened(context));
            }
            Event::Opened(context) => {
                log::debug!("opening context menu at {:?}", self.pointer);

                self.open = Some(OpenMenu {
                    trigger: self.pointer,
                    context,
                    hovered: None,
                });
            }
            Event::Dismissed | Event::PointerPressed => {
                if self.open.take().is_some() {
                    log::debug!("context menu dismissed");
                }
            }
            Event::PointerMoved(position) => {
                self.pointer = position;
            }
            Event::ViewportResized(size) => {
                self.viewport = size;
            }
            Event::HoverEntered(index) => {
                if let Some(open) = &mut self.open {
                    log::trace!("context menu hover: {index:?}");
                    open.hovered = Some(index);
                }
            }
            Event::HoverLeft(index) => {
                if let Some(open) = &mut self.open {
                    if open.hovered == Some(index) {
                        open.hovered = None;
                    }
                }
            }
        }

        Task::none()
    }
}

impl<C> State<C> {
    /// Returns whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns the context the menu is currently open for.
    pub fn context(&self) -> Option<&C> {
        self.open.as_ref().map(|open| &open.context)
    }

    /// Returns the trigger point of the currently open menu.
    pub fn trigger(&self) -> Option<Point> {
        self.open.as_ref().map(|open| open.trigger)
    }

    /// Returns the `(group, item)` index pair of the hovered item.
    pub fn hovered(&self) -> Option<(usize, usize)> {
        self.open.as_ref().and_then(|open| open.hovered)
    }

    /// Returns the last observed pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the last observed viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The open context, trigger point, and hovered index, if any.
    pub(crate) fn open_parts(&self) -> Option<(&C, Point, Option<(usize, usize)>)> {
        self.open
            .as_ref()
            .map(|open| (&open.context, open.trigger, open.hovered))
    }
}

/// The runtime streams a context menu needs to observe: pointer moves,
/// pointer presses, and window resizes.
///
/// Feed the produced [`Event`]s to [`State::update`]. Events are forwarded
/// regardless of whether a widget captured them; dismiss-on-press must see
/// presses that landed on other widgets.
pub fn subscription<C>() -> Subscription<Event<C>>
where
    C: Send + 'static,
{
    event::listen_with(filter::<C>)
}

fn filter<C>(event: iced::Event, _status: Status, _window: window::Id) -> Option<Event<C>> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Event::PointerMoved(position))
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Event::PointerPressed),
        iced::Event::Window(window::Event::Resized(size)) => Some(Event::ViewportResized(size)),
        _ => None,
    }
}
