//! Configuration type definitions

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::effects::TextEffect;
use crate::error::MarqueeError;
use crate::text::TextAlign;
use crate::zone::DEFAULT_INTENSITY;

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum zones per config
pub const MAX_ZONES: usize = 8;

/// Columns per matrix module
pub const MODULE_COLUMNS: u16 = 8;

/// Animation settings of one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneSettings {
    /// Text alignment
    pub align: TextAlign,
    /// Effect used to bring the text in
    pub effect_in: TextEffect,
    /// Effect used to take the text out
    pub effect_out: TextEffect,
    /// Frame interval (ms)
    pub speed_ms: u16,
    /// Time the text stays up between the effects (ms)
    pub pause_ms: u16,
    /// Blank columns between characters
    pub char_spacing: u8,
    /// Swap lit and unlit pixels
    pub inverted: bool,
    /// LED brightness (0-15)
    pub intensity: u8,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            align: TextAlign::Left,
            effect_in: TextEffect::Print,
            effect_out: TextEffect::NoEffect,
            speed_ms: 10,
            pause_ms: 100,
            char_spacing: 1,
            inverted: false,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Column range and settings of one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneLayout {
    /// First (right-most) column
    pub start: u16,
    /// Last (left-most) column
    pub end: u16,
    /// Animation settings
    pub settings: ZoneSettings,
}

impl ZoneLayout {
    /// Zone covering the modules `first..=last`
    pub fn modules(first: u16, last: u16) -> Option<Self> {
        let start = first.checked_mul(MODULE_COLUMNS)?;
        let end = last
            .checked_add(1)?
            .checked_mul(MODULE_COLUMNS)?
            .checked_sub(1)?;
        Some(Self {
            start,
            end,
            settings: ZoneSettings::default(),
        })
    }

    /// Check if two layouts share a column
    pub fn overlaps(&self, other: &ZoneLayout) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Complete display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Data format version
    pub version: u8,
    /// Zone layouts, by zone index
    pub zones: Vec<ZoneLayout, MAX_ZONES>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    /// Create a config with no zones
    pub const fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            zones: Vec::new(),
        }
    }

    /// Single zone covering `columns` columns
    pub fn single_zone(columns: u16) -> Self {
        let mut config = Self::new();
        if columns > 0 {
            let _ = config.zones.push(ZoneLayout {
                start: 0,
                end: columns - 1,
                settings: ZoneSettings::default(),
            });
        }
        config
    }

    /// Check the layouts against a display of `column_count` columns and
    /// `zone_count` zones
    pub fn validate(&self, column_count: u16, zone_count: usize) -> Result<(), MarqueeError> {
        if self.zones.len() > zone_count {
            return Err(MarqueeError::ZoneOutOfRange);
        }

        for (i, zone) in self.zones.iter().enumerate() {
            if zone.start > zone.end || zone.end >= column_count {
                return Err(MarqueeError::InvalidColumnRange);
            }
            if self.zones[..i].iter().any(|other| other.overlaps(zone)) {
                return Err(MarqueeError::ZoneOverlap);
            }
        }
        Ok(())
    }
}
