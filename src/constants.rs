//! UI Constants
//!
//! Centralized constants shared by the components and both render backends.

/// Section background used when the configuration leaves it unset
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0f172a";

/// Profile link bases; usernames are appended verbatim
pub const GITHUB_PROFILE_BASE: &str = "https://github.com/";
pub const LINKEDIN_PROFILE_BASE: &str = "https://linkedin.com/in/";

/// Glyph shown in place of an avatar when the name has no visible character
pub const FALLBACK_GLYPH: &str = "?";

/// Grid breakpoints (viewport width in pixels)
pub const BREAKPOINT_MD: f32 = 768.0;
pub const BREAKPOINT_LG: f32 = 1024.0;

/// Grid column counts per breakpoint
pub const GRID_COLS_NARROW: usize = 2;
pub const GRID_COLS_MD: usize = 3;
pub const GRID_COLS_LG: usize = 4;

/// Maximum content width inside the section
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

/// Avatar diameter in pixels
pub const AVATAR_SIZE: f32 = 128.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Default config file name inside the platform config directory
pub const DEFAULT_CONFIG_FILE: &str = "about.toml";
