//! View - Rendered Visual Tree

pub mod node;

pub use node::{ContactKind, Node, Role};
