//! Column buffer surface

use heapless::Vec;
use marquee_core::config::MODULE_COLUMNS;
use marquee_core::traits::{Control, FontData, MatrixSurface, Transform};

use crate::font::{FontError, FontTable};

/// Longest supported module chain
pub const MAX_MODULES: usize = 32;

/// Device state of one 8x8 module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModuleState {
    /// LED brightness (0-15)
    pub intensity: u8,
    /// Display blanked, contents kept
    pub shutdown: bool,
}

impl Default for ModuleState {
    fn default() -> Self {
        Self {
            intensity: 7,
            shutdown: false,
        }
    }
}

/// Virtual display of `COLUMNS` columns
///
/// Every change is latched immediately while updates are enabled. While
/// they are suspended the latched frame keeps its last contents.
#[derive(Debug, Clone)]
pub struct MatrixBuffer<const COLUMNS: usize> {
    columns: [u8; COLUMNS],
    shown: [u8; COLUMNS],
    modules: Vec<ModuleState, MAX_MODULES>,
    wraparound: bool,
    auto_update: bool,
    flushes: u32,
    font: Option<FontTable>,
}

impl<const COLUMNS: usize> Default for MatrixBuffer<COLUMNS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLUMNS: usize> MatrixBuffer<COLUMNS> {
    /// Create a blank display with updates enabled and the system font
    pub fn new() -> Self {
        let module_count = COLUMNS.div_ceil(MODULE_COLUMNS as usize).min(MAX_MODULES);
        let mut modules = Vec::new();
        for _ in 0..module_count {
            let _ = modules.push(ModuleState::default());
        }

        Self {
            columns: [0; COLUMNS],
            shown: [0; COLUMNS],
            modules,
            wraparound: false,
            auto_update: true,
            flushes: 0,
            font: None,
        }
    }

    /// Column buffer as last written
    pub fn columns(&self) -> &[u8; COLUMNS] {
        &self.columns
    }

    /// Frame last pushed to the modules
    pub fn shown(&self) -> &[u8; COLUMNS] {
        &self.shown
    }

    /// Number of times the frame was pushed to the modules
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Check if changes are pushed as they are made
    pub fn is_auto_update(&self) -> bool {
        self.auto_update
    }

    pub fn is_wraparound(&self) -> bool {
        self.wraparound
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// State of module `m`, module 0 holding columns 0-7
    pub fn module(&self, m: usize) -> Option<ModuleState> {
        self.modules.get(m).copied()
    }

    /// Check if pixel `row` of `col` is lit in the shown frame
    ///
    /// Shut down modules show nothing.
    pub fn pixel(&self, col: u16, row: u8) -> bool {
        let module = col as usize / MODULE_COLUMNS as usize;
        if self.modules.get(module).map_or(true, |m| m.shutdown) {
            return false;
        }
        let bit = 1u8.checked_shl(row as u32).unwrap_or(0);
        self.shown.get(col as usize).map_or(false, |&c| c & bit != 0)
    }

    /// Select a font table, checking it first
    ///
    /// A rejected table leaves the current font in place.
    pub fn try_set_font(&mut self, font: FontData) -> Result<(), FontError> {
        self.font = Some(FontTable::parse(font)?);
        Ok(())
    }

    /// Current font table
    pub fn font(&self) -> FontTable {
        self.font.unwrap_or(FontTable::system())
    }

    fn flush(&mut self) {
        self.shown = self.columns;
        self.flushes = self.flushes.wrapping_add(1);
    }

    fn changed(&mut self) {
        if self.auto_update {
            self.flush();
        }
    }

    /// Columns of `start..=end` that exist on the display
    fn span(&self, start: u16, end: u16) -> Option<(usize, usize)> {
        let end = (end as usize).min(COLUMNS.checked_sub(1)?);
        let start = start as usize;
        (start <= end).then_some((start, end))
    }

    fn modules_in(&mut self, start: u16, end: u16) -> &mut [ModuleState] {
        let per = MODULE_COLUMNS as usize;
        let count = self.modules.len();
        let first = (start as usize / per).min(count);
        let last = (end as usize / per + 1).min(count);
        if first >= last {
            return &mut [];
        }
        &mut self.modules[first..last]
    }
}

impl<const COLUMNS: usize> MatrixSurface for MatrixBuffer<COLUMNS> {
    fn column_count(&self) -> u16 {
        COLUMNS.min(u16::MAX as usize) as u16
    }

    fn get_column(&self, col: u16) -> u8 {
        self.columns.get(col as usize).copied().unwrap_or(0)
    }

    fn set_column(&mut self, col: u16, value: u8) {
        if let Some(c) = self.columns.get_mut(col as usize) {
            *c = value;
            self.changed();
        }
    }

    fn transform(&mut self, start: u16, end: u16, op: Transform) {
        let Some((start, end)) = self.span(start, end) else {
            return;
        };
        let wrap = self.wraparound;
        let range = &mut self.columns[start..=end];
        let last = range.len() - 1;

        match op {
            Transform::ShiftLeft => {
                let out = range[last];
                range.rotate_right(1);
                range[0] = if wrap { out } else { 0 };
            }
            Transform::ShiftRight => {
                let out = range[0];
                range.rotate_left(1);
                range[last] = if wrap { out } else { 0 };
            }
            Transform::ShiftUp => {
                for c in range.iter_mut() {
                    *c = if wrap { c.rotate_right(1) } else { *c >> 1 };
                }
            }
            Transform::ShiftDown => {
                for c in range.iter_mut() {
                    *c = if wrap { c.rotate_left(1) } else { *c << 1 };
                }
            }
            Transform::FlipLeftRight => range.reverse(),
            Transform::FlipUpDown => range.iter_mut().for_each(|c| *c = c.reverse_bits()),
            Transform::Invert => range.iter_mut().for_each(|c| *c = !*c),
        }
        self.changed();
    }

    fn clear(&mut self, start: u16, end: u16) {
        if let Some((start, end)) = self.span(start, end) {
            self.columns[start..=end].fill(0);
            self.changed();
        }
    }

    fn control(&mut self, start: u16, end: u16, ctl: Control) {
        match ctl {
            Control::WrapAround(on) => self.wraparound = on,
            Control::Intensity(level) => {
                let level = level.min(15);
                self.modules_in(start, end)
                    .iter_mut()
                    .for_each(|m| m.intensity = level);
            }
            Control::Shutdown(on) => {
                self.modules_in(start, end)
                    .iter_mut()
                    .for_each(|m| m.shutdown = on);
            }
        }
    }

    fn update(&mut self, enabled: bool) {
        self.auto_update = enabled;
        if enabled {
            self.flush();
        }
    }

    fn set_font(&mut self, font: Option<FontData>) {
        self.font = font.and_then(|data| FontTable::parse(data).ok());
    }

    fn get_char(&mut self, code: u8, buf: &mut [u8]) -> usize {
        self.font().copy_glyph(code, buf)
    }
}
