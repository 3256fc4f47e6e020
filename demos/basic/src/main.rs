//! A small file-list application with a per-row context menu.

use iced::widget::{column, container, stack, text};
use iced::{Color, Element, Fill, Subscription, Task};
use iced_context_menu::{self as context_menu, Item, Style};

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application("Context Menu - Basic", App::update, App::view)
        .subscription(App::subscription)
        .run_with(App::new)
}

struct FileRow {
    name: String,
    protected: bool,
}

struct App {
    menu: context_menu::State<usize>,
    files: Vec<FileRow>,
    last_action: String,
}

#[derive(Debug, Clone)]
enum Message {
    Menu(context_menu::Event<usize>),
    Open(usize),
    Rename(usize),
    Delete(usize),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (menu, measure) = context_menu::State::new();

        let files = vec![
            FileRow {
                name: "notes.txt".to_owned(),
                protected: false,
            },
            FileRow {
                name: "report-final.pdf".to_owned(),
                protected: false,
            },
            FileRow {
                name: "system.cfg".to_owned(),
                protected: true,
            },
        ];

        (
            Self {
                menu,
                files,
                last_action: String::new(),
            },
            measure.map(Message::Menu),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(event) => return self.menu.update(event).map(Message::Menu),
            Message::Open(index) => {
                self.last_action = format!("Opened {}", self.files[index].name);
            }
            Message::Rename(index) => {
                self.last_action = format!("Renamed {}", self.files[index].name);
            }
            Message::Delete(index) => {
                let file = self.files.remove(index);
                self.last_action = format!("Deleted {}", file.name);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let rows = column(self.files.iter().enumerate().map(|(index, file)| {
            context_menu::attach(
                container(text(&file.name)).width(Fill).padding(8),
                index,
                Message::Menu,
            )
        }))
        .spacing(2);

        let base = container(
            column![
                text("Right-click a file").size(20),
                rows,
                text(&self.last_action),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Fill)
        .height(Fill);

        let menu = context_menu::view(
            &self.menu,
            &Style::default(),
            |&index| self.menu_items(index),
            Message::Menu,
        );

        stack![base, menu].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        context_menu::subscription().map(Message::Menu)
    }

    fn menu_items(&self, index: usize) -> Vec<Vec<Item<'_, Message>>> {
        let protected = self.files[index].protected;
        let icon_color = Color::from_rgb(0.2, 0.4, 0.8);

        vec![
            vec![
                Item::new("Open")
                    .icon(
                        |color, size| text("▸").size(size).color(color).into(),
                        icon_color,
                    )
                    .on_select(Message::Open(index)),
                Item::new("Rename…")
                    .shortcut("F2")
                    .on_select(Message::Rename(index)),
            ],
            vec![Item::annotated(
                "Delete",
                if protected {
                    "Protected files cannot be deleted"
                } else {
                    "Cannot be undone"
                },
            )
            .disabled(protected)
            .on_select(Message::Delete(index))],
        ]
    }
}
