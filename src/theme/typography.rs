//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_4XL: f32 = 36.0;

    // Line heights
    pub const LEADING_RELAXED: f32 = 1.625;
}
