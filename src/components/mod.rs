//! Components - About Section UI Components
//!
//! Pure components: each builds a visual tree from its inputs and paints it
//! through the gpui backend. No I/O, no shared state.

pub mod about_section;
pub mod identity_card;
pub mod tag_list;

pub use about_section::AboutSection;
pub use identity_card::{IdentityCard, fallback_glyph};
pub use tag_list::{TagList, grid_columns};
