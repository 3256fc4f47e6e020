//! Menu items and item groups.
//!
//! # Example
//! ```no_run
//! use iced_context_menu::Item;
//!
//! #[derive(Clone)]
//! enum Message {
//!     Copy,
//!     Delete,
//! }
//!
//! let copy = Item::new("Copy").shortcut("Ctrl+C").on_select(Message::Copy);
//! let delete = Item::annotated("Delete", "Cannot be undone")
//!     .on_select(Message::Delete);
//! ```

use iced::{Color, Element};

/// The minimum (and default) height of a menu item row.
pub const ITEM_HEIGHT: f32 = 28.0;

/// The height of the annotation block of an annotated item.
pub const ANNOTATION_HEIGHT: f32 = 14.0;

/// The vertical overlap between the label and annotation blocks.
pub const ANNOTATION_OVERLAP: f32 = 4.0;

/// An ordered run of items rendered together, separated from neighboring
/// groups by a partition.
pub type ItemGroup<'a, Message> = Vec<Item<'a, Message>>;

/// The content region of an [`Item`].
pub(crate) enum Content<'a, Message> {
    /// A plain text label.
    Text(String),
    /// A text label with a smaller annotation line underneath.
    Annotated {
        /// The main label.
        label: String,
        /// The annotation line.
        annotation: String,
    },
    /// Host-supplied content, informed of the item's disabled state.
    Custom(Box<dyn Fn(bool) -> Element<'a, Message> + 'a>),
}

/// The icon region of an [`Item`].
pub(crate) struct Icon<'a, Message> {
    pub(crate) render: Box<dyn Fn(Color, f32) -> Element<'a, Message> + 'a>,
    pub(crate) color: Color,
}

/// A single entry of a context menu.
///
/// Items are immutable values configured through chained builder calls; each
/// call consumes the item and returns the reconfigured one. They are built
/// fresh by the item producer on every render pass and never stored by the
/// widget.
pub struct Item<'a, Message> {
    pub(crate) height: f32,
    pub(crate) icon: Option<Icon<'a, Message>>,
    pub(crate) content: Content<'a, Message>,
    pub(crate) shortcut: Option<String>,
    pub(crate) disabled: bool,
    pub(crate) on_select: Option<Message>,
}

impl<'a, Message> Item<'a, Message> {
    /// Creates an item with a plain text label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_content(Content::Text(label.into()))
    }

    /// Creates an item with a label and a smaller annotation line underneath.
    ///
    /// The item height is derived from the label and annotation blocks, which
    /// overlap by [`ANNOTATION_OVERLAP`].
    pub fn annotated(label: impl Into<String>, annotation: impl Into<String>) -> Self {
        let mut item = Self::with_content(Content::Annotated {
            label: label.into(),
            annotation: annotation.into(),
        });
        item.height = ITEM_HEIGHT + ANNOTATION_HEIGHT - ANNOTATION_OVERLAP;

        item
    }

    /// Creates an item with custom content.
    ///
    /// The closure receives the item's disabled state and returns the content
    /// to render.
    pub fn custom(content: impl Fn(bool) -> Element<'a, Message> + 'a) -> Self {
        Self::with_content(Content::Custom(Box::new(content)))
    }

    fn with_content(content: Content<'a, Message>) -> Self {
        Self {
            height: ITEM_HEIGHT,
            icon: None,
            content,
            shortcut: None,
            disabled: false,
            on_select: None,
        }
    }

    /// Sets the icon of the item.
    ///
    /// The closure receives the color and size to render at; disabled items
    /// have their icon recolored to the style's muted tone.
    pub fn icon(mut self, render: impl Fn(Color, f32) -> Element<'a, Message> + 'a, color: Color) -> Self {
        self.icon = Some(Icon {
            render: Box::new(render),
            color,
        });
        self
    }

    /// Sets the shortcut label shown at the trailing edge of the item.
    pub fn shortcut(mut self, label: impl Into<String>) -> Self {
        self.shortcut = Some(label.into());
        self
    }

    /// Sets whether the item is disabled.
    ///
    /// Disabled items render every region in the style's muted color and
    /// receive no hover or selection wiring.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the height of the item, clamped to [`ITEM_HEIGHT`].
    pub fn height(mut self, height: f32) -> Self {
        self.height = height.max(ITEM_HEIGHT);
        self
    }

    /// Sets the message produced when the item is selected.
    pub fn on_select(mut self, message: Message) -> Self {
        self.on_select = Some(message);
        self
    }

    /// Returns whether the item is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns whether the item reacts to hover and selection.
    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_minimum_height() {
        let item: Item<'_, ()> = Item::new("Copy");

        assert_eq!(item.height, ITEM_HEIGHT);
        assert!(!item.disabled);
        assert!(item.on_select.is_none());
    }

    #[test]
    fn annotated_item_derives_height() {
        let item: Item<'_, ()> = Item::annotated("Delete", "Cannot be undone");

        assert_eq!(item.height, ITEM_HEIGHT + ANNOTATION_HEIGHT - ANNOTATION_OVERLAP);
    }

    #[test]
    fn height_is_clamped_to_minimum() {
        let item: Item<'_, ()> = Item::new("Copy").height(4.0);

        assert_eq!(item.height, ITEM_HEIGHT);

        let tall: Item<'_, ()> = Item::new("Copy").height(64.0);

        assert_eq!(tall.height, 64.0);
    }

    #[test]
    fn disabled_item_is_not_interactive() {
        let item: Item<'_, ()> = Item::new("Paste").on_select(()).disabled(true);

        assert!(item.is_disabled());
        assert!(!item.is_interactive());
    }

    #[test]
    fn builder_configures_all_regions() {
        let item: Item<'_, ()> = Item::new("Cut")
            .icon(|_, _| iced::widget::Space::new(0.0, 0.0).into(), Color::BLACK)
            .shortcut("Ctrl+X")
            .on_select(());

        assert!(item.icon.is_some());
        assert_eq!(item.shortcut.as_deref(), Some("Ctrl+X"));
        assert!(item.is_interactive());
    }
}
