//! Text traversal and layout

mod cursor;
mod layout;
mod stream;

pub use cursor::{text_len, CharCursor, Traversal};
pub use layout::TextLimits;
pub use stream::TextStream;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal placement of text inside its zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextAlign {
    /// Anchor the first column at the zone's left edge
    #[default]
    Left,
    /// Centre the text in the zone
    Center,
    /// Anchor the last column at the zone's right edge
    Right,
}
