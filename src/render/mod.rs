//! Render - Visual Tree Backends

pub mod html;
pub mod json;
pub mod painter;
