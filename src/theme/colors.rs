//! Colors - About Section Palette

use gpui::{Rgba, rgb};

use crate::constants::DEFAULT_BACKGROUND_COLOR;

/// Dark gray-scale palette - All colors are accessed via associated functions
pub struct AboutColors;

impl AboutColors {
    // Card
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0x111827) }
    /// Card and avatar border
    pub fn card_border() -> Rgba { rgb(0x1f2937) }
    /// Avatar ring
    pub fn avatar_border() -> Rgba { rgb(0x374151) }
    /// Fallback avatar fill
    pub fn avatar_fallback_bg() -> Rgba { rgb(0x1f2937) }

    // Text
    /// Headings
    pub fn text_primary() -> Rgba { rgb(0xffffff) }
    /// Subheading
    pub fn text_secondary() -> Rgba { rgb(0xd1d5db) }
    /// Body text and contact affordances
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }

    // Chips
    /// Chip background
    pub fn chip_bg() -> Rgba { rgb(0x1f2937) }
    /// Chip text
    pub fn chip_text() -> Rgba { rgb(0xe5e7eb) }
    /// Chip border
    pub fn chip_border() -> Rgba { rgb(0x374151) }

    /// Section background used when the configured color cannot be parsed
    pub fn section_default_bg() -> Rgba {
        Self::parse(DEFAULT_BACKGROUND_COLOR).unwrap_or_else(|| rgb(0x0f172a))
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` color string
    pub fn parse(value: &str) -> Option<Rgba> {
        Rgba::try_from(value.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(color: Rgba) -> [u8; 4] {
        [color.r, color.g, color.b, color.a].map(|c| (c * 255.0).round() as u8)
    }

    #[test]
    fn parses_hex_colors() {
        let parsed = AboutColors::parse(" #0f172a ").expect("hex color");
        assert_eq!(channels(parsed), [0x0f, 0x17, 0x2a, 0xff]);
        assert!(AboutColors::parse("#fff").is_some());
    }

    #[test]
    fn rejects_non_hex_colors() {
        assert!(AboutColors::parse("linear-gradient(red, blue)").is_none());
        assert!(AboutColors::parse("").is_none());
    }

    #[test]
    fn default_background_matches_constant() {
        assert_eq!(channels(AboutColors::section_default_bg()), [0x0f, 0x17, 0x2a, 0xff]);
    }
}
