//! Drawing context handed to the effects

use rand::rngs::SmallRng;

use super::{Scratch, SpriteData};
use crate::text::{TextAlign, TextLimits, TextStream, Traversal};
use crate::traits::{Control, MatrixSurface, Transform};

/// Geometry of the zone being animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Area {
    pub start: i16,
    pub end: i16,
    pub limits: TextLimits,
    pub align: TextAlign,
    pub inverted: bool,
}

/// Everything an effect needs to draw one frame of one zone
///
/// All column writes are clipped to the zone.
pub(crate) struct Frame<'f, 'a, S: MatrixSurface + ?Sized> {
    pub surface: &'f mut S,
    pub area: Area,
    pub text: &'f mut TextStream<'a>,
    pub scratch: &'f mut Scratch,
    pub rng: &'f mut SmallRng,
    /// Sprite for the current motion, if the effect is a sprite
    pub sprite: Option<SpriteData>,
}

impl<'f, 'a, S: MatrixSurface + ?Sized> Frame<'f, 'a, S> {
    pub fn start(&self) -> i16 {
        self.area.start
    }

    pub fn end(&self) -> i16 {
        self.area.end
    }

    /// Raw value of an unlit column
    pub fn empty_bar(&self) -> u8 {
        if self.area.inverted {
            0xff
        } else {
            0x00
        }
    }

    /// Raw value of a fully lit column
    pub fn light_bar(&self) -> u8 {
        !self.empty_bar()
    }

    /// Convert between pixel data and raw column values
    pub fn data_bar(&self, data: u8) -> u8 {
        data ^ self.empty_bar()
    }

    fn in_zone(&self, col: i16) -> bool {
        col >= self.area.start && col <= self.area.end
    }

    /// Write a raw column value
    pub fn put(&mut self, col: i16, raw: u8) {
        if self.in_zone(col) {
            self.surface.set_column(col as u16, raw);
        }
    }

    /// Write pixel data to a column
    pub fn put_data(&mut self, col: i16, data: u8) {
        let raw = self.data_bar(data);
        self.put(col, raw);
    }

    pub fn blank(&mut self, col: i16) {
        let raw = self.empty_bar();
        self.put(col, raw);
    }

    pub fn light(&mut self, col: i16) {
        let raw = self.light_bar();
        self.put(col, raw);
    }

    /// Pixel data of a column, 0 outside the zone
    pub fn data(&self, col: i16) -> u8 {
        if self.in_zone(col) {
            self.data_bar(self.surface.get_column(col as u16))
        } else {
            0
        }
    }

    /// Keep only the pixels of `col` selected by `mask`
    pub fn mask(&mut self, col: i16, mask: u8) {
        let data = self.data(col) & mask;
        self.put_data(col, data);
    }

    /// Light the pixels of `col` selected by `bits`
    pub fn merge(&mut self, col: i16, bits: u8) {
        let data = self.data(col) | bits;
        self.put_data(col, data);
    }

    /// Blank the whole zone
    pub fn clear_zone(&mut self) {
        let (start, end) = (self.area.start as u16, self.area.end as u16);
        self.surface.clear(start, end);
        if self.area.inverted {
            self.surface.transform(start, end, Transform::Invert);
        }
    }

    /// Shift the whole zone, bringing in unlit pixels
    pub fn shift(&mut self, op: Transform) {
        let (start, end) = (self.area.start as u16, self.area.end as u16);
        if self.area.inverted {
            self.surface.transform(start, end, Transform::Invert);
            self.surface.transform(start, end, op);
            self.surface.transform(start, end, Transform::Invert);
        } else {
            self.surface.transform(start, end, op);
        }
    }

    pub fn control(&mut self, ctl: Control) {
        self.surface
            .control(self.area.start as u16, self.area.end as u16, ctl);
    }

    /// Draw the whole text at its resting position
    ///
    /// Only the text columns and their spacing are written.
    pub fn common_print(&mut self) {
        let mut col = self.area.limits.first_column();
        let mut cols = self.text.fetch_first(self.surface, Traversal::Forward);

        while cols > 0 && col >= self.area.start {
            for i in 0..cols {
                let data = self.text.glyph().column(i);
                self.put_data(col, data);
                col -= 1;
            }
            cols = self.text.fetch_next(self.surface);
        }
    }

    /// Visible text columns as `(low, high)`, `None` for empty text
    pub fn span(&self) -> Option<(i16, i16)> {
        let limits = &self.area.limits;
        let high = limits.first_column().min(self.area.end);
        let low = limits.last_column().max(self.area.start);
        (low <= high).then_some((low, high))
    }

    /// Number of visible text columns
    pub fn span_len(&self) -> i16 {
        self.span().map_or(0, |(low, high)| high - low + 1)
    }

    /// Column `k` of the text in sweep order
    ///
    /// Right aligned text is swept from its right edge, everything else
    /// from the left.
    pub fn sweep_col(&self, k: i16) -> i16 {
        match (self.span(), self.area.align) {
            (Some((low, _)), TextAlign::Right) => low + k,
            (Some((_, high)), _) => high - k,
            (None, _) => self.area.start - 1,
        }
    }

    /// Apply `mask_for(col)` to every column of the zone
    pub fn mask_zone(&mut self, mask_for: impl Fn(i16) -> u8) {
        for col in self.area.start..=self.area.end {
            self.mask(col, mask_for(col));
        }
    }
}
