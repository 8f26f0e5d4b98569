//! In-memory surface used by unit tests

use crate::traits::{Control, FontData, MatrixSurface, Transform};

pub const MOCK_COLUMNS: usize = 32;

/// Column buffer with a tiny built-in font
///
/// `H` is 4 columns wide and `I` is 3, every other printable code is a
/// 3-column box. A selected font table makes every glyph `font[0]` columns
/// of solid pixels.
#[derive(Debug, Clone)]
pub struct MockSurface {
    pub cols: [u8; MOCK_COLUMNS],
    pub wrap: bool,
    pub intensity: u8,
    pub font: Option<FontData>,
    pub updates_off: u32,
    pub updates_on: u32,
    pub writes: u32,
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            cols: [0; MOCK_COLUMNS],
            wrap: false,
            intensity: 0,
            font: None,
            updates_off: 0,
            updates_on: 0,
            writes: 0,
        }
    }

    pub fn get(&self, col: u16) -> u8 {
        self.cols[col as usize]
    }

    pub fn range(&self, start: u16, end: u16) -> &[u8] {
        &self.cols[start as usize..=end as usize]
    }
}

pub fn glyph(code: u8) -> &'static [u8] {
    match code {
        b'H' => &[0x7f, 0x08, 0x08, 0x7f],
        b'I' => &[0x41, 0x7f, 0x41],
        b' ' => &[0x00, 0x00],
        b'.' => &[0x40],
        0x20..=0x7e => &[0x3e, 0x41, 0x3e],
        _ => &[],
    }
}

impl MatrixSurface for MockSurface {
    fn column_count(&self) -> u16 {
        MOCK_COLUMNS as u16
    }

    fn get_column(&self, col: u16) -> u8 {
        self.cols.get(col as usize).copied().unwrap_or(0)
    }

    fn set_column(&mut self, col: u16, value: u8) {
        self.writes += 1;
        if let Some(c) = self.cols.get_mut(col as usize) {
            *c = value;
        }
    }

    fn transform(&mut self, start: u16, end: u16, op: Transform) {
        let range = &mut self.cols[start as usize..=end as usize];
        match op {
            Transform::ShiftLeft => {
                let out = range[range.len() - 1];
                range.rotate_right(1);
                range[0] = if self.wrap { out } else { 0 };
            }
            Transform::ShiftRight => {
                let out = range[0];
                range.rotate_left(1);
                let last = range.len() - 1;
                range[last] = if self.wrap { out } else { 0 };
            }
            Transform::ShiftUp => {
                for c in range.iter_mut() {
                    let top = *c & 1;
                    *c >>= 1;
                    if self.wrap {
                        *c |= top << 7;
                    }
                }
            }
            Transform::ShiftDown => {
                for c in range.iter_mut() {
                    let bottom = *c >> 7;
                    *c <<= 1;
                    if self.wrap {
                        *c |= bottom;
                    }
                }
            }
            Transform::FlipLeftRight => range.reverse(),
            Transform::FlipUpDown => range.iter_mut().for_each(|c| *c = c.reverse_bits()),
            Transform::Invert => range.iter_mut().for_each(|c| *c = !*c),
        }
    }

    fn clear(&mut self, start: u16, end: u16) {
        self.cols[start as usize..=end as usize].fill(0);
    }

    fn control(&mut self, _start: u16, _end: u16, ctl: Control) {
        match ctl {
            Control::WrapAround(on) => self.wrap = on,
            Control::Intensity(level) => self.intensity = level,
            Control::Shutdown(_) => {}
        }
    }

    fn update(&mut self, enabled: bool) {
        if enabled {
            self.updates_on += 1;
        } else {
            self.updates_off += 1;
        }
    }

    fn set_font(&mut self, font: Option<FontData>) {
        self.font = font;
    }

    fn get_char(&mut self, code: u8, buf: &mut [u8]) -> usize {
        if let Some(font) = self.font {
            let width = font.first().copied().unwrap_or(0) as usize;
            let len = width.min(buf.len());
            buf[..len].fill(0xff);
            return len;
        }
        let g = glyph(code);
        let len = g.len().min(buf.len());
        buf[..len].copy_from_slice(&g[..len]);
        len
    }
}
