//! User-defined character overrides
//!
//! Each entry maps a character code to a column bitmap in the same layout
//! as a font table entry: the first byte is the column count, the
//! remaining bytes are the columns.

use heapless::Vec;

use crate::error::MarqueeError;

/// Maximum number of user characters per zone
pub const MAX_USER_CHARS: usize = 16;

/// A single user character slot
///
/// A slot with code 0 is free and may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserChar<'a> {
    /// Character code replaced by this bitmap
    pub code: u8,
    /// Column count followed by the columns
    pub data: &'a [u8],
}

impl<'a> UserChar<'a> {
    /// Check if this slot is free
    pub const fn is_free(&self) -> bool {
        self.code == 0
    }

    /// The bitmap columns, limited to the declared column count
    pub fn columns(&self) -> &'a [u8] {
        match self.data.split_first() {
            Some((&width, rest)) => &rest[..rest.len().min(width as usize)],
            None => &[],
        }
    }
}

/// Fixed-capacity table of user characters
#[derive(Debug, Clone, Default)]
pub struct UserChars<'a> {
    slots: Vec<UserChar<'a>, MAX_USER_CHARS>,
}

impl<'a> UserChars<'a> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of allocated slots, including freed ones
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of defined characters
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_free()).count()
    }

    /// Check if no characters are defined
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the bitmap defined for `code`
    pub fn get(&self, code: u8) -> Option<&'a [u8]> {
        if code == 0 {
            return None;
        }
        self.slots.iter().find(|s| s.code == code).map(|s| s.data)
    }

    /// Define or replace the bitmap for `code`
    ///
    /// Replaces an existing definition in place, otherwise reuses a freed
    /// slot, otherwise allocates a new one.
    pub fn add(&mut self, code: u8, data: &'a [u8]) -> Result<(), MarqueeError> {
        if code == 0 {
            return Err(MarqueeError::ReservedCharCode);
        }

        let entry = UserChar { code, data };

        // First, try to find existing entry for this code
        if let Some(slot) = self.slots.iter_mut().find(|s| s.code == code) {
            *slot = entry;
            return Ok(());
        }

        // Otherwise, reuse a freed slot
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_free()) {
            *slot = entry;
            return Ok(());
        }

        self.slots
            .push(entry)
            .map_err(|_| MarqueeError::UserCharsFull)
    }

    /// Remove the definition for `code`
    ///
    /// The slot stays allocated and is reused by the next [`add`](Self::add).
    pub fn remove(&mut self, code: u8) -> Result<(), MarqueeError> {
        if code == 0 {
            return Err(MarqueeError::ReservedCharCode);
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.code == code)
            .ok_or(MarqueeError::CharNotFound)?;
        *slot = UserChar { code: 0, data: &[] };
        Ok(())
    }

    /// Copy the columns for `code` into `buf`
    ///
    /// Returns `None` when `code` has no user definition.
    pub fn copy_glyph(&self, code: u8, buf: &mut [u8]) -> Option<usize> {
        if code == 0 {
            return None;
        }
        let entry = self.slots.iter().find(|s| s.code == code)?;
        let cols = entry.columns();
        let len = cols.len().min(buf.len());
        buf[..len].copy_from_slice(&cols[..len]);
        Some(len)
    }
}
