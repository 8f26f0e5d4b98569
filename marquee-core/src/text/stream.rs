//! Glyph stream over a zone's text

use super::{text_len, CharCursor, Traversal};
use crate::font::{Glyph, GlyphSource, GLYPH_COLUMNS};
use crate::traits::MatrixSurface;

/// Text of a zone together with the state needed to draw it glyph by glyph
#[derive(Debug, Clone)]
pub struct TextStream<'a> {
    text: Option<&'a [u8]>,
    cursor: CharCursor,
    glyph: Glyph,
    source: GlyphSource<'a>,
    spacing: u8,
}

impl Default for TextStream<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TextStream<'a> {
    /// Create a stream with no text and one column of spacing
    pub const fn new() -> Self {
        Self {
            text: None,
            cursor: CharCursor::new(),
            glyph: Glyph::new(),
            source: GlyphSource::new(),
            spacing: 1,
        }
    }

    /// The text, if any
    pub fn text(&self) -> Option<&'a [u8]> {
        self.text
    }

    /// Replace the text
    pub fn set_text(&mut self, text: Option<&'a [u8]>) {
        self.text = text;
        self.cursor = CharCursor::new();
        self.glyph.clear();
    }

    /// Blank columns drawn after each character
    pub fn spacing(&self) -> u8 {
        self.spacing
    }

    /// Set the blank columns drawn after each character
    pub fn set_spacing(&mut self, spacing: u8) {
        self.spacing = spacing;
    }

    /// Glyph source used for lookups
    pub fn source(&self) -> &GlyphSource<'a> {
        &self.source
    }

    /// Mutable glyph source
    pub fn source_mut(&mut self) -> &mut GlyphSource<'a> {
        &mut self.source
    }

    /// Columns of the most recently fetched character
    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    /// Check if the last character has been fetched
    pub fn is_end_of_text(&self) -> bool {
        self.cursor.is_end_of_text()
    }

    /// Load the first character in the direction of travel
    ///
    /// Returns the number of columns loaded, 0 when there is no text.
    pub fn fetch_first<S: MatrixSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        traversal: Traversal,
    ) -> usize {
        let code = self
            .text
            .and_then(|text| self.cursor.first(text, traversal));
        self.load(surface, code)
    }

    /// Load the next character
    ///
    /// Returns 0 once the end of text has been reached.
    pub fn fetch_next<S: MatrixSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let code = match self.text {
            Some(text) => self.cursor.next(text),
            None => None,
        };
        self.load(surface, code)
    }

    fn load<S: MatrixSurface + ?Sized>(&mut self, surface: &mut S, code: Option<u8>) -> usize {
        match code {
            Some(code) => {
                let reversed = self.cursor.traversal() == Traversal::Backward;
                self.glyph
                    .load(&self.source, surface, code, self.spacing, reversed)
            }
            None => {
                self.glyph.clear();
                0
            }
        }
    }

    /// Width of the whole text in columns
    ///
    /// Spacing is counted between characters, not after the last one.
    pub fn measure<S: MatrixSurface + ?Sized>(&self, surface: &mut S) -> u16 {
        let Some(text) = self.text else {
            return 0;
        };

        let mut buf = [0u8; GLYPH_COLUMNS];
        let mut width: u16 = 0;
        for (i, &code) in text[..text_len(text)].iter().enumerate() {
            if i > 0 {
                width = width.saturating_add(self.spacing as u16);
            }
            let cols = self.source.resolve(surface, code, &mut buf);
            width = width.saturating_add(cols as u16);
        }
        width
    }
}
