//! About Section Library
//!
//! Renders an "About Me" page section (identity card plus technology chips)
//! from a declarative [`domain::SectionConfig`]. Components build a
//! backend-neutral [`view::Node`] tree, which is painted with gpui or
//! exported as HTML or JSON.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod render;
pub mod theme;
pub mod utils;
pub mod view;
