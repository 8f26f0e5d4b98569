//! Error types for zone and display configuration

use core::fmt;

/// Errors returned by configuration operations
///
/// A failed operation leaves the display and its zones unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarqueeError {
    /// Zone index is not below the number of zones
    ZoneOutOfRange,
    /// Zone has not been placed on the display
    ZoneNotPlaced,
    /// Column range is reversed or extends past the display
    InvalidColumnRange,
    /// Column range overlaps another configured zone
    ZoneOverlap,
    /// Character code 0 is reserved as the text terminator
    ReservedCharCode,
    /// No user character with this code is defined
    CharNotFound,
    /// User character table has no free slot
    UserCharsFull,
}

impl fmt::Display for MarqueeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MarqueeError::ZoneOutOfRange => "zone index out of range",
            MarqueeError::ZoneNotPlaced => "zone not placed",
            MarqueeError::InvalidColumnRange => "invalid column range",
            MarqueeError::ZoneOverlap => "zone overlaps another zone",
            MarqueeError::ReservedCharCode => "character code 0 is reserved",
            MarqueeError::CharNotFound => "user character not defined",
            MarqueeError::UserCharsFull => "user character table full",
        };
        f.write_str(msg)
    }
}
