//! Painter - gpui Backend
//!
//! Translates the visual tree into gpui elements using the section palette.

use gpui::{
    AnyElement, ClickEvent, FontWeight, InteractiveElement, IntoElement, ObjectFit, ParentElement,
    SharedString, StatefulInteractiveElement, Styled, StyledImage, div, img, prelude::*, px,
};

use crate::components::grid_columns;
use crate::constants::{AVATAR_SIZE, BREAKPOINT_MD, CONTENT_MAX_WIDTH};
use crate::domain::LayoutVariant;
use crate::theme::colors::AboutColors;
use crate::theme::typography::Typography;
use crate::view::{ContactKind, Node, Role};

/// Paint a node and its subtree for the given viewport width
pub fn paint(node: &Node, viewport_width: f32) -> AnyElement {
    let wide = viewport_width >= BREAKPOINT_MD;
    let text: SharedString = node.text.clone().unwrap_or_default().into();
    let children = || {
        node.children
            .iter()
            .map(|child| paint(child, viewport_width))
            .collect::<Vec<_>>()
    };

    match &node.role {
        Role::Section { background } => {
            let bg = AboutColors::parse(background).unwrap_or_else(|| {
                tracing::warn!(%background, "unsupported background color, using default");
                AboutColors::section_default_bg()
            });
            div()
                .w_full()
                .py(px(64.0))
                .px_4()
                .bg(bg)
                .flex()
                .justify_center()
                .children(children())
                .into_any_element()
        }
        Role::Container => div()
            .w_full()
            .max_w(px(CONTENT_MAX_WIDTH))
            .flex()
            .flex_col()
            .gap(px(48.0))
            .children(children())
            .into_any_element(),
        Role::Card => div()
            .bg(AboutColors::card_bg())
            .border_1()
            .border_color(AboutColors::card_border())
            .rounded_xl()
            .p_8()
            .flex()
            .when(wide, |el| el.flex_row())
            .when(!wide, |el| el.flex_col().items_center())
            .gap_6()
            .children(children())
            .into_any_element(),
        Role::AvatarImage { src, alt } => {
            tracing::debug!(%src, %alt, "painting avatar image");
            img(src.clone())
                .size(px(AVATAR_SIZE))
                .flex_none()
                .rounded_full()
                .border_4()
                .border_color(AboutColors::avatar_border())
                .object_fit(ObjectFit::Cover)
                .into_any_element()
        }
        Role::AvatarFallback => div()
            .size(px(AVATAR_SIZE))
            .flex_none()
            .rounded_full()
            .bg(AboutColors::avatar_fallback_bg())
            .border_4()
            .border_color(AboutColors::avatar_border())
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(Typography::TEXT_4XL))
            .font_weight(FontWeight::BOLD)
            .text_color(AboutColors::text_muted())
            .child(text)
            .into_any_element(),
        Role::Info => div()
            .flex_1()
            .flex()
            .flex_col()
            .when(!wide, |el| el.items_center())
            .children(children())
            .into_any_element(),
        Role::Name => div()
            .mb_2()
            .text_size(px(if wide {
                Typography::TEXT_4XL
            } else {
                Typography::TEXT_3XL
            }))
            .font_weight(FontWeight::BOLD)
            .text_color(AboutColors::text_primary())
            .child(text)
            .into_any_element(),
        Role::Title => div()
            .mb_4()
            .text_size(px(Typography::TEXT_XL))
            .font_weight(FontWeight::MEDIUM)
            .text_color(AboutColors::text_secondary())
            .child(text)
            .into_any_element(),
        Role::Description => div()
            .mb_6()
            .text_size(px(Typography::TEXT_LG))
            .line_height(gpui::relative(Typography::LEADING_RELAXED))
            .text_color(AboutColors::text_muted())
            .child(text)
            .into_any_element(),
        Role::Contacts => div()
            .flex()
            .when(wide, |el| el.flex_row())
            .when(!wide, |el| el.flex_col())
            .gap_4()
            .text_size(px(Typography::TEXT_SM))
            .text_color(AboutColors::text_muted())
            .children(children())
            .into_any_element(),
        Role::Contact { contact, href } => paint_contact(*contact, href.clone(), text),
        Role::TechBlock => div()
            .flex()
            .flex_col()
            .gap_6()
            .children(children())
            .into_any_element(),
        Role::TechHeading => div()
            .w_full()
            .flex()
            .justify_center()
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(FontWeight::BOLD)
            .text_color(AboutColors::text_primary())
            .child(text)
            .into_any_element(),
        Role::TagList { variant } => paint_tag_list(node, *variant, viewport_width),
        Role::Chip => chip(text).into_any_element(),
    }
}

fn chip(label: SharedString) -> gpui::Div {
    div()
        .px_3()
        .py_1()
        .rounded_full()
        .border_1()
        .border_color(AboutColors::chip_border())
        .bg(AboutColors::chip_bg())
        .text_size(px(Typography::TEXT_SM))
        .font_weight(FontWeight::MEDIUM)
        .text_color(AboutColors::chip_text())
        .child(label)
}

fn paint_contact(kind: ContactKind, href: Option<String>, label: SharedString) -> AnyElement {
    let row = div()
        .id(kind.key())
        .flex()
        .items_center()
        .gap_2()
        .child(kind.glyph())
        .child(label);

    match href {
        Some(href) => row
            .cursor_pointer()
            .hover(|s| s.text_color(AboutColors::text_primary()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                tracing::info!(%href, "opening contact link");
                cx.open_url(&href);
            })
            .into_any_element(),
        None => row.into_any_element(),
    }
}

/// Split labels into grid rows of `columns` cells. The last row is padded
/// with `None` so every row has the same number of cells.
pub fn grid_rows<T: Clone>(labels: &[T], columns: usize) -> Vec<Vec<Option<T>>> {
    let columns = columns.max(1);
    labels
        .chunks(columns)
        .map(|row| {
            let mut cells: Vec<Option<T>> = row.iter().cloned().map(Some).collect();
            cells.resize(columns, None);
            cells
        })
        .collect()
}

fn paint_tag_list(node: &Node, variant: LayoutVariant, viewport_width: f32) -> AnyElement {
    let labels: Vec<SharedString> = node
        .children
        .iter()
        .map(|chip| chip.text.clone().unwrap_or_default().into())
        .collect();

    match variant {
        LayoutVariant::Inline => div()
            .flex()
            .flex_wrap()
            .gap_2()
            .children(labels.into_iter().map(chip))
            .into_any_element(),
        LayoutVariant::Grid => {
            let rows = grid_rows(&labels, grid_columns(viewport_width))
                .into_iter()
                .map(|row| {
                    div().flex().gap_3().children(row.into_iter().map(|cell| match cell {
                        Some(label) => chip(label).flex_1().flex().justify_center(),
                        // keeps cell widths equal on the last row
                        None => div().flex_1(),
                    }))
                });
            div()
                .flex()
                .flex_col()
                .gap_3()
                .children(rows)
                .into_any_element()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(rows: &[Vec<Option<&'static str>>]) -> Vec<&'static str> {
        rows.iter().flatten().flatten().copied().collect()
    }

    #[test]
    fn grid_rows_keep_every_label_in_order() {
        let labels = ["Go", "Rust", "Go", "Deno", "SQL"];
        for columns in [2, 3, 4] {
            let rows = grid_rows(&labels, columns);
            assert_eq!(rows.len(), labels.len().div_ceil(columns));
            assert!(rows.iter().all(|row| row.len() == columns));
            assert_eq!(flatten(&rows), labels.to_vec());
        }
    }

    #[test]
    fn grid_rows_pad_only_the_last_row() {
        let rows = grid_rows(&["a", "b", "c", "d", "e"], 3);
        assert_eq!(
            rows,
            vec![
                vec![Some("a"), Some("b"), Some("c")],
                vec![Some("d"), Some("e"), None],
            ]
        );

        let rows = grid_rows(&["a", "b", "c", "d", "e"], 4);
        assert_eq!(rows[1], vec![Some("e"), None, None, None]);

        let rows = grid_rows(&["a", "b", "c", "d"], 2);
        assert!(rows.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn grid_rows_of_empty_input() {
        assert!(grid_rows::<&str>(&[], 4).is_empty());
    }
}
