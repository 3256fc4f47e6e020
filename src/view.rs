//! Rendering of the menu overlay.
//!
//! [`view`] produces a viewport-filling layer that the host stacks over its
//! base view in exactly one place, typically with [`iced::widget::stack`].
//! The layer itself handles no events; dismissal and pointer tracking arrive
//! through [`subscription`](crate::subscription).

use iced::widget::{column, container, mouse_area, row, text, Space};
use iced::{alignment, Background, Border, Element, Length, Padding};

use crate::geometry;
use crate::item::{Content, Item, ItemGroup};
use crate::state::{Event, State};
use crate::style::Style;

/// Makes `content` open a context menu for `context` on right-press.
///
/// The press is captured by the produced element, so widgets underneath never
/// observe it. `lift` maps the widget's [`Event`] into the host's message
/// type.
pub fn attach<'a, C, Message>(
    content: impl Into<Element<'a, Message>>,
    context: C,
    lift: impl Fn(Event<C>) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    mouse_area(content)
        .on_right_press(lift(Event::OpenRequested(context)))
        .into()
}

/// Renders the context menu for the current [`State`].
///
/// `items` maps the open context to the grouped menu items; it is only called
/// while the menu is open. Produces an empty element while the menu is closed
/// or when no non-empty group remains, a positioned menu otherwise.
pub fn view<'a, C, Message>(
    state: &State<C>,
    style: &Style,
    items: impl FnOnce(&C) -> Vec<ItemGroup<'a, Message>>,
    lift: impl Fn(Event<C>) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some((context, trigger, hovered)) = state.open_parts() else {
        return closed();
    };

    let mut groups = items(context);
    groups.retain(|group| !group.is_empty());

    if groups.is_empty() {
        return closed();
    }

    let heights: Vec<Vec<f32>> = groups
        .iter()
        .map(|group| group.iter().map(|item| item.height).collect())
        .collect();

    let height = geometry::menu_height(style, &heights);
    let viewport = state.viewport();
    let x = geometry::resolve_x(
        style.direction,
        style.overflow_x,
        viewport.width,
        style.width,
        trigger.x,
    );
    let y = geometry::resolve_y(style.overflow_y, viewport.height, height, trigger.y);

    let style = *style;
    let mut entries: Vec<Element<'a, Message>> = Vec::new();

    for (g, group) in groups.into_iter().enumerate() {
        if g > 0 {
            entries.push(partition(&style));
        }

        for (i, item) in group.into_iter().enumerate() {
            entries.push(entry(item, (g, i), hovered, &style, &lift));
        }
    }

    let menu = container(column(entries))
        .width(Length::Fixed(style.width))
        .padding(style.container_padding)
        .style(move |_theme| container::Style {
            background: Some(style.background.into()),
            border: Border {
                color: style.border_color,
                width: style.border_width,
                radius: style.corner_radius.into(),
            },
            ..container::Style::default()
        });

    container(menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: y,
            right: 0.0,
            bottom: 0.0,
            left: x,
        })
        .into()
}

fn closed<'a, Message: 'a>() -> Element<'a, Message> {
    Space::new(Length::Shrink, Length::Shrink).into()
}

fn partition<'a, Message: 'a>(style: &Style) -> Element<'a, Message> {
    let color = style.partition_color;
    let width = style.partition_width;

    container(
        container(Space::new(Length::Fill, Length::Fixed(width)))
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(color.into()),
                ..container::Style::default()
            }),
    )
    .width(Length::Fill)
    .padding([style.partition_margin, 0.0])
    .into()
}

fn entry<'a, C, Message>(
    item: Item<'a, Message>,
    index: (usize, usize),
    hovered: Option<(usize, usize)>,
    style: &Style,
    lift: &impl Fn(Event<C>) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let interactive = item.is_interactive();

    let Item {
        height,
        icon,
        content,
        shortcut,
        disabled,
        on_select,
    } = item;

    let muted = style.disabled_color;

    let icon_cell: Element<'a, Message> = match icon {
        Some(icon) => {
            let color = if disabled { muted } else { icon.color };

            (icon.render)(color, style.icon_size)
        }
        None => Space::new(style.icon_size, style.icon_size).into(),
    };

    let content_cell: Element<'a, Message> = match content {
        Content::Text(label) => text(label)
            .size(style.font_size)
            .font(style.font)
            .color(if disabled { muted } else { style.text_color })
            .into(),
        Content::Annotated { label, annotation } => column(vec![
            text(label)
                .size(style.font_size)
                .font(style.font)
                .color(if disabled { muted } else { style.text_color })
                .into(),
            text(annotation)
                .size(style.annotation_font_size)
                .font(style.font)
                .color(if disabled { muted } else { style.annotation_color })
                .into(),
        ])
        .into(),
        Content::Custom(render) => render(disabled),
    };

    let mut cells: Vec<Element<'a, Message>> = vec![
        container(icon_cell)
            .width(Length::Fixed(style.icon_size))
            .into(),
        container(content_cell).width(Length::Fill).into(),
    ];

    if let Some(shortcut) = shortcut {
        cells.push(
            text(shortcut)
                .size(style.font_size)
                .font(style.font)
                .color(if disabled { muted } else { style.shortcut_color })
                .into(),
        );
    }

    let highlight: Option<Background> = if hovered == Some(index) && !disabled {
        Some(style.hover_color.into())
    } else {
        None
    };

    let line = container(
        row(cells)
            .spacing(8.0)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .padding([0.0, 4.0])
    .align_y(alignment::Vertical::Center)
    .style(move |_theme| container::Style {
        background: highlight,
        ..container::Style::default()
    });

    if !interactive {
        // Disabled items get no wiring at all; hover and presses fall through.
        return line.into();
    }

    let mut area = mouse_area(line)
        .on_enter(lift(Event::HoverEntered(index)))
        .on_exit(lift(Event::HoverLeft(index)))
        .interaction(style.cursor);

    if let Some(message) = on_select {
        area = area.on_press(message);
    }

    area.into()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use iced::Point;

    use super::*;

    fn no_items(_: &u8) -> Vec<ItemGroup<'static, ()>> {
        unreachable!("the item producer must not run while the menu is closed");
    }

    fn open<C: Send + 'static>(state: &mut State<C>, context: C) {
        let _ = state.update(Event::PointerMoved(Point::new(40.0, 40.0)));
        let _ = state.update(Event::Opened(context));
    }

    #[test]
    fn producer_is_not_called_while_closed() {
        let state: State<u8> = State::default();

        let _ = view(&state, &Style::default(), no_items, |_| ());
    }

    #[test]
    fn entries_follow_the_interactive_predicate() {
        let mut state: State<()> = State::default();
        open(&mut state, ());

        let enabled_seen = Rc::new(Cell::new(None));
        let disabled_seen = Rc::new(Cell::new(None));

        let enabled_flag = Rc::clone(&enabled_seen);
        let disabled_flag = Rc::clone(&disabled_seen);
        let _ = view(
            &state,
            &Style::default(),
            move |_| {
                let plain = Item::new("Copy").on_select(());
                assert!(plain.is_interactive());

                let muted = Item::new("Paste").on_select(()).disabled(true);
                assert!(!muted.is_interactive());

                vec![vec![
                    Item::custom(move |disabled| {
                        enabled_flag.set(Some(disabled));
                        Space::new(0.0, 0.0).into()
                    })
                    .on_select(()),
                    Item::custom(move |disabled| {
                        disabled_flag.set(Some(disabled));
                        Space::new(0.0, 0.0).into()
                    })
                    .disabled(true),
                    plain,
                    muted,
                ]]
            },
            |_| (),
        );

        assert_eq!(enabled_seen.get(), Some(false));
        assert_eq!(disabled_seen.get(), Some(true));
    }
}
