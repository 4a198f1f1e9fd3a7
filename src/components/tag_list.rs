//! TagList Component
//!
//! Renders labels as chips, either in a responsive grid or a wrapping row.

use gpui::{App, IntoElement, RenderOnce, Window};

use crate::constants::{BREAKPOINT_LG, BREAKPOINT_MD, GRID_COLS_LG, GRID_COLS_MD, GRID_COLS_NARROW};
use crate::domain::LayoutVariant;
use crate::render::painter;
use crate::view::{Node, Role};

/// Number of grid columns for a viewport width in pixels
pub fn grid_columns(viewport_width: f32) -> usize {
    if viewport_width >= BREAKPOINT_LG {
        GRID_COLS_LG
    } else if viewport_width >= BREAKPOINT_MD {
        GRID_COLS_MD
    } else {
        GRID_COLS_NARROW
    }
}

/// Ordered chip collection
#[derive(IntoElement)]
pub struct TagList {
    labels: Vec<String>,
    variant: LayoutVariant,
}

impl TagList {
    /// Create a tag list; labels keep their order and duplicates
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            variant: LayoutVariant::default(),
        }
    }

    /// Set the layout variant
    pub fn variant(mut self, variant: LayoutVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Render into the visual tree. Empty input yields an empty container.
    pub fn tree(&self) -> Node {
        Node::new(Role::TagList {
            variant: self.variant,
        })
        .children(
            self.labels
                .iter()
                .map(|label| Node::text(Role::Chip, label.as_str())),
        )
    }
}

impl RenderOnce for TagList {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        painter::paint(&self.tree(), f32::from(window.viewport_size().width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [LayoutVariant; 2] = [LayoutVariant::Grid, LayoutVariant::Inline];

    #[test]
    fn renders_every_label_once_in_order() {
        let labels = ["Rust", "Go", "Rust", "", "TypeScript"];
        for variant in BOTH {
            let tree = TagList::new(labels).variant(variant).tree();
            assert_eq!(tree.labels_of(&Role::Chip), labels.to_vec());
            assert_eq!(tree.children.len(), labels.len());
        }
    }

    #[test]
    fn variant_only_changes_container() {
        let labels = ["a", "b", "c"];
        let grid = TagList::new(labels).variant(LayoutVariant::Grid).tree();
        let inline = TagList::new(labels).variant(LayoutVariant::Inline).tree();

        assert_ne!(grid.role, inline.role);
        assert_eq!(grid.children, inline.children);
    }

    #[test]
    fn empty_input_renders_empty_container() {
        let tree = TagList::new(Vec::<String>::new()).tree();
        assert_eq!(
            tree.role,
            Role::TagList {
                variant: LayoutVariant::Grid
            }
        );
        assert!(tree.children.is_empty());
    }

    #[test]
    fn grid_columns_follow_breakpoints() {
        assert_eq!(grid_columns(375.0), 2);
        assert_eq!(grid_columns(767.9), 2);
        assert_eq!(grid_columns(768.0), 3);
        assert_eq!(grid_columns(1023.0), 3);
        assert_eq!(grid_columns(1024.0), 4);
        assert_eq!(grid_columns(1920.0), 4);
    }
}
