//! Character bitmap buffer

use super::GlyphSource;
use crate::traits::MatrixSurface;

/// Capacity of the per-character column buffer
pub const GLYPH_COLUMNS: usize = 15;

/// Columns of the character currently being drawn
///
/// Holds the glyph followed by its inter-character spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    cols: [u8; GLYPH_COLUMNS],
    len: usize,
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new()
    }
}

impl Glyph {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            cols: [0; GLYPH_COLUMNS],
            len: 0,
        }
    }

    /// Number of valid columns
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no columns
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Valid columns
    pub fn columns(&self) -> &[u8] {
        &self.cols[..self.len]
    }

    /// Column `i`, or 0 past the end
    pub fn column(&self, i: usize) -> u8 {
        self.columns().get(i).copied().unwrap_or(0)
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Load `code` plus `spacing` blank columns
    ///
    /// Spacing is truncated when the buffer is full. The result is reversed
    /// when `reversed` is set so right-to-left traversal reads the columns
    /// in drawing order.
    pub fn load<S: MatrixSurface + ?Sized>(
        &mut self,
        source: &GlyphSource<'_>,
        surface: &mut S,
        code: u8,
        spacing: u8,
        reversed: bool,
    ) -> usize {
        let mut len = source.resolve(surface, code, &mut self.cols);
        let pad = (spacing as usize).min(GLYPH_COLUMNS - len);
        self.cols[len..len + pad].fill(0);
        len += pad;
        self.len = len;

        if reversed {
            self.cols[..len].reverse();
        }
        len
    }
}
