//! Domain - Section Data Model

pub mod profile;

pub use profile::{Identity, LayoutVariant, SectionConfig, present};
