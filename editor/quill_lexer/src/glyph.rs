//! Glyph advance widths consumed by the lexer's layout tracking.
//!
//! The glyph atlas that rasterizes fonts lives outside this crate. The
//! lexer only needs one number per byte: how far the pen moves after
//! drawing it. [`GlyphMetrics`] is that seam.

/// Number of entries in a [`GlyphMetricsTable`]. Bytes at or above this
/// value are measured as [`FALLBACK_GLYPH`].
pub const GLYPH_METRICS_CAPACITY: usize = 128;

/// Glyph substituted for bytes outside the metrics table.
pub const FALLBACK_GLYPH: u8 = b'?';

/// Horizontal advance width lookup, keyed by byte value.
pub trait GlyphMetrics {
    /// Pen advance after drawing `byte`, in pixels.
    ///
    /// Must be total: bytes the source has no glyph for are redirected to a
    /// fallback rather than faulting.
    fn advance(&self, byte: u8) -> f32;
}

/// Fixed-size advance table covering the ASCII range.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMetricsTable {
    advances: [f32; GLYPH_METRICS_CAPACITY],
}

impl GlyphMetricsTable {
    /// Table where every glyph has zero width.
    pub fn new() -> Self {
        Self {
            advances: [0.0; GLYPH_METRICS_CAPACITY],
        }
    }

    /// Table where every glyph advances by `advance` (a monospace font).
    pub fn monospace(advance: f32) -> Self {
        Self {
            advances: [advance; GLYPH_METRICS_CAPACITY],
        }
    }

    pub fn from_advances(advances: [f32; GLYPH_METRICS_CAPACITY]) -> Self {
        Self { advances }
    }

    /// Set the advance for `byte`.
    ///
    /// Returns `false` and leaves the table untouched when `byte` is outside
    /// the table; such bytes always measure as [`FALLBACK_GLYPH`].
    pub fn set(&mut self, byte: u8, advance: f32) -> bool {
        match self.advances.get_mut(byte as usize) {
            Some(slot) => {
                *slot = advance;
                true
            }
            None => false,
        }
    }

    /// Index used to measure `byte`, after fallback redirection.
    #[inline]
    pub fn glyph_index(byte: u8) -> usize {
        let index = byte as usize;
        if index < GLYPH_METRICS_CAPACITY {
            index
        } else {
            FALLBACK_GLYPH as usize
        }
    }
}

impl Default for GlyphMetricsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphMetrics for GlyphMetricsTable {
    #[inline]
    fn advance(&self, byte: u8) -> f32 {
        self.advances[Self::glyph_index(byte)]
    }
}
