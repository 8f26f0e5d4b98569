//! Font table lookup
//!
//! A table starts with the first and last character code it covers,
//! followed by one entry per code in between: the column count, then that
//! many columns.

use marquee_core::traits::FontData;

use super::SYSTEM_FONT;

/// Font table parsing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Table shorter than its header
    MissingHeader,
    /// Last code before the first code
    InvalidRange,
    /// An entry runs past the end of the table
    Truncated,
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FontError::MissingHeader => write!(f, "font table has no header"),
            FontError::InvalidRange => write!(f, "font code range is empty"),
            FontError::Truncated => write!(f, "font table is truncated"),
        }
    }
}

/// Validated view of a font table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontTable {
    data: FontData,
}

impl FontTable {
    /// Check every entry of `data` and wrap it
    pub fn parse(data: FontData) -> Result<Self, FontError> {
        let [first, last, entries @ ..] = data else {
            return Err(FontError::MissingHeader);
        };
        let (first, last) = (*first, *last);
        if last < first {
            return Err(FontError::InvalidRange);
        }

        let mut offset = 0usize;
        for _ in first..=last {
            let width = *entries.get(offset).ok_or(FontError::Truncated)? as usize;
            offset += 1 + width;
            if offset > entries.len() {
                return Err(FontError::Truncated);
            }
        }
        Ok(Self { data })
    }

    /// The built-in font
    pub fn system() -> Self {
        Self { data: SYSTEM_FONT }
    }

    /// Raw table
    pub fn data(&self) -> FontData {
        self.data
    }

    /// First character code in the table
    pub fn first_code(&self) -> u8 {
        self.data[0]
    }

    /// Last character code in the table
    pub fn last_code(&self) -> u8 {
        self.data[1]
    }

    /// Columns of `code`, `None` if the table does not cover it
    pub fn glyph(&self, code: u8) -> Option<&'static [u8]> {
        if code < self.first_code() || code > self.last_code() {
            return None;
        }

        let data = self.data;
        let mut offset = 2usize;
        for _ in self.first_code()..code {
            offset += 1 + *data.get(offset)? as usize;
        }
        let width = *data.get(offset)? as usize;
        data.get(offset + 1..offset + 1 + width)
    }

    /// Copy the columns of `code` into `buf`, returning the count copied
    pub fn copy_glyph(&self, code: u8, buf: &mut [u8]) -> usize {
        match self.glyph(code) {
            Some(cols) => {
                let len = cols.len().min(buf.len());
                buf[..len].copy_from_slice(&cols[..len]);
                len
            }
            None => 0,
        }
    }
}
