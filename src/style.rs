//! Styling for context menus.

use iced::{mouse, Color, Font};

/// The side of the trigger point a menu prefers to open towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Open with the menu's right edge at the trigger point.
    LeftOfPointer,
    /// Open with the menu's left edge at the trigger point.
    #[default]
    RightOfPointer,
}

/// The strategy applied when a menu would overflow the viewport on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Keep the menu anchored to its preferred side and clamp it into view.
    #[default]
    Shift,
    /// Flip the menu to the opposite side of the trigger point.
    Mirror,
}

/// The appearance of a context menu.
///
/// A fresh [`Style`] is supplied on every render call; it is never stored by
/// the widget.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// The fixed width of the menu.
    pub width: f32,
    /// The preferred horizontal opening [`Direction`].
    pub direction: Direction,
    /// The horizontal [`Overflow`] policy.
    pub overflow_x: Overflow,
    /// The vertical [`Overflow`] policy.
    pub overflow_y: Overflow,
    /// The background [`Color`] of the menu container.
    pub background: Color,
    /// The border [`Color`] of the menu container.
    pub border_color: Color,
    /// The border width of the menu container.
    pub border_width: f32,
    /// The corner radius of the menu container.
    pub corner_radius: f32,
    /// The inner padding of the menu container.
    pub container_padding: f32,
    /// The [`Color`] of the partition between item groups.
    pub partition_color: Color,
    /// The thickness of the partition between item groups.
    pub partition_width: f32,
    /// The vertical margin above and below a partition.
    pub partition_margin: f32,
    /// The text [`Color`] of enabled items.
    pub text_color: Color,
    /// The muted [`Color`] used for every region of a disabled item.
    pub disabled_color: Color,
    /// The [`Color`] of annotation lines.
    pub annotation_color: Color,
    /// The [`Color`] of shortcut labels.
    pub shortcut_color: Color,
    /// The background [`Color`] of the hovered item.
    pub hover_color: Color,
    /// The [`Font`] used for all menu text.
    pub font: Font,
    /// The text size of item labels and shortcut labels.
    pub font_size: f32,
    /// The text size of annotation lines.
    pub annotation_font_size: f32,
    /// The width and height of the icon region of an item.
    pub icon_size: f32,
    /// The mouse cursor shown over enabled items.
    pub cursor: mouse::Interaction,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: 240.0,
            direction: Direction::default(),
            overflow_x: Overflow::default(),
            overflow_y: Overflow::default(),
            background: Color::from_rgb(0.98, 0.98, 0.98),
            border_color: Color::from_rgb(0.8, 0.8, 0.8),
            border_width: 1.0,
            corner_radius: 6.0,
            container_padding: 4.0,
            partition_color: Color::from_rgb(0.85, 0.85, 0.85),
            partition_width: 1.0,
            partition_margin: 4.0,
            text_color: Color::from_rgb(0.1, 0.1, 0.1),
            disabled_color: Color::from_rgb(0.6, 0.6, 0.6),
            annotation_color: Color::from_rgb(0.45, 0.45, 0.45),
            shortcut_color: Color::from_rgb(0.45, 0.45, 0.45),
            hover_color: Color::from_rgba(0.5, 0.5, 0.5, 0.25),
            font: Font::DEFAULT,
            font_size: 14.0,
            annotation_font_size: 11.0,
            icon_size: 16.0,
            cursor: mouse::Interaction::Pointer,
        }
    }
}
