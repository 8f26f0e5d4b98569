//! Hardware-agnostic zone animation engine for LED matrix text displays
//!
//! This crate contains all animation logic that does not depend on a
//! specific matrix driver:
//!
//! - Display surface capability trait (column buffer, transforms, glyphs)
//! - Font resolution with per-zone user character overrides
//! - Text cursor and layout calculation
//! - Zone state machine and tick gating
//! - Effect library (print, scroll, wipe, scan, sprites and friends)
//! - Multi-zone orchestrator
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod display;
pub mod effects;
pub mod error;
pub mod font;
pub mod text;
pub mod traits;
pub mod zone;

#[cfg(test)]
mod testing;

pub use display::Marquee;
pub use effects::{SpriteData, TextEffect};
pub use error::MarqueeError;
pub use text::TextAlign;
pub use traits::MatrixSurface;
pub use zone::{FsmState, Zone};
