//! Matrix surface trait
//!
//! Column 0 is the right-most column of the chained display, so columns
//! further to the left have higher indices. Each column is one byte and
//! bit 0 is the top row.

/// Number of pixel rows in a column
pub const ROW_COUNT: u8 = 8;

/// Font table handed through to the surface's glyph lookup
///
/// The engine never parses font tables itself, it only selects one.
pub type FontData = &'static [u8];

/// Block transforms applied to a column range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transform {
    /// Move every column one step towards the higher column index
    ShiftLeft,
    /// Move every column one step towards column 0
    ShiftRight,
    /// Move every row up one pixel
    ShiftUp,
    /// Move every row down one pixel
    ShiftDown,
    /// Mirror the range left to right
    FlipLeftRight,
    /// Mirror every column top to bottom
    FlipUpDown,
    /// Invert every pixel
    Invert,
}

/// Device controls applied to a column range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Whether shifted-out data re-enters at the other side
    WrapAround(bool),
    /// LED brightness (0-15)
    Intensity(u8),
    /// Blank the modules without losing their contents
    Shutdown(bool),
}

/// Trait for the shared column buffer of a chained matrix display
///
/// Implementations own the physical (or virtual) pixel buffer. All column
/// arguments are absolute column indices. Ranges are inclusive.
pub trait MatrixSurface {
    /// Total number of columns across all modules
    fn column_count(&self) -> u16;

    /// Read a column
    ///
    /// Returns 0 for columns outside the display.
    fn get_column(&self, col: u16) -> u8;

    /// Write a column
    ///
    /// Writes outside the display are ignored.
    fn set_column(&mut self, col: u16, value: u8);

    /// Apply a block transform to the columns `start..=end`
    ///
    /// Shifts honour the wraparound control of the range.
    fn transform(&mut self, start: u16, end: u16, op: Transform);

    /// Clear the columns `start..=end`
    fn clear(&mut self, start: u16, end: u16);

    /// Apply a device control to the columns `start..=end`
    fn control(&mut self, start: u16, end: u16, ctl: Control);

    /// Suspend (`false`) or resume (`true`) pushing the buffer to the device
    ///
    /// Changes made while suspended become visible together on resume.
    fn update(&mut self, enabled: bool);

    /// Select the font used by [`get_char`](Self::get_char)
    ///
    /// `None` selects the surface's built-in font.
    fn set_font(&mut self, font: Option<FontData>);

    /// Look up a glyph in the current font
    ///
    /// Copies at most `buf.len()` columns into `buf` and returns the number
    /// copied. Unknown codes return 0.
    fn get_char(&mut self, code: u8, buf: &mut [u8]) -> usize;
}

/// Helper operations built on top of [`MatrixSurface`]
pub trait MatrixSurfaceExt: MatrixSurface {
    /// Clear the entire display
    fn clear_all(&mut self) {
        let count = self.column_count();
        if count > 0 {
            self.clear(0, count - 1);
        }
    }

    /// Check whether every column in `start..=end` holds `value`
    fn range_is(&self, start: u16, end: u16, value: u8) -> bool {
        (start..=end).all(|col| self.get_column(col) == value)
    }
}

// Blanket implementation for all MatrixSurface types
impl<T: MatrixSurface + ?Sized> MatrixSurfaceExt for T {}
