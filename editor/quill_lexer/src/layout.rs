//! Line-to-screen conversion.

/// Font size and line spacing used to turn a line number into a vertical
/// screen offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub font_size: f32,
    pub line_spacing: f32,
}

impl LayoutConfig {
    pub const DEFAULT_FONT_SIZE: f32 = 64.0;
    pub const DEFAULT_LINE_SPACING: f32 = 1.0;

    pub const fn new(font_size: f32, line_spacing: f32) -> Self {
        Self {
            font_size,
            line_spacing,
        }
    }

    /// Vertical offset of `line`: `-line * font_size * line_spacing`, with
    /// line 0 at positive zero.
    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "line numbers beyond 2^24 lose sub-pixel precision only"
    )]
    pub fn line_y(&self, line: usize) -> f32 {
        0.0 - line as f32 * self.font_size * self.line_spacing
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FONT_SIZE, Self::DEFAULT_LINE_SPACING)
    }
}
