//! Glyphs shared across panels for visual hierarchy

/// Separator and indicator characters
pub struct Separators;

impl Separators {
    /// Bullet point
    pub const BULLET: &'static str = "•";

    /// Diamond (for branding)
    pub const DIAMOND: &'static str = "◆";

    /// Filled circle (status indicator)
    pub const CIRCLE_FILLED: &'static str = "●";

    /// Empty circle
    pub const CIRCLE_EMPTY: &'static str = "○";

    /// Triangle up (price gain)
    pub const TRIANGLE_UP: &'static str = "▲";

    /// Triangle down (price loss)
    pub const TRIANGLE_DOWN: &'static str = "▼";

    /// Direction marker for a signed change
    pub fn change_arrow(change: f64) -> &'static str {
        if change >= 0.0 {
            Self::TRIANGLE_UP
        } else {
            Self::TRIANGLE_DOWN
        }
    }
}
