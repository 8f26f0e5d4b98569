//! Character resolution
//!
//! A zone looks up glyphs in its own user character table first and falls
//! back to the surface font.

mod glyph;
mod user_chars;

pub use glyph::{Glyph, GLYPH_COLUMNS};
pub use user_chars::{UserChar, UserChars, MAX_USER_CHARS};

use crate::traits::{FontData, MatrixSurface};

/// Per-zone glyph source: user overrides plus an optional font selection
#[derive(Debug, Clone, Default)]
pub struct GlyphSource<'a> {
    user: UserChars<'a>,
    font: Option<FontData>,
}

impl<'a> GlyphSource<'a> {
    /// Create a source using the surface's built-in font and no overrides
    pub const fn new() -> Self {
        Self {
            user: UserChars::new(),
            font: None,
        }
    }

    /// Font selected for this zone (`None` = surface default)
    pub fn font(&self) -> Option<FontData> {
        self.font
    }

    /// Select the font for this zone
    pub fn set_font(&mut self, font: Option<FontData>) {
        self.font = font;
    }

    /// User character overrides
    pub fn user_chars(&self) -> &UserChars<'a> {
        &self.user
    }

    /// Mutable access to the user character overrides
    pub fn user_chars_mut(&mut self) -> &mut UserChars<'a> {
        &mut self.user
    }

    /// Resolve `code` into `buf`, returning the number of columns written
    ///
    /// User overrides win over the font. The zone font is selected on the
    /// surface before delegating so zones with different fonts can share it.
    pub fn resolve<S: MatrixSurface + ?Sized>(
        &self,
        surface: &mut S,
        code: u8,
        buf: &mut [u8],
    ) -> usize {
        if let Some(len) = self.user.copy_glyph(code, buf) {
            return len;
        }

        surface.set_font(self.font);
        surface.get_char(code, buf).min(buf.len())
    }
}
