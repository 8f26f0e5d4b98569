//! In-memory matrix display
//!
//! [`MatrixBuffer`] behaves like a chain of MAX72xx-driven 8x8 modules
//! without the SPI link: the column buffer is latched into a "shown" frame
//! whenever the device would be refreshed.

mod buffer;

pub use buffer::{MatrixBuffer, ModuleState, MAX_MODULES};
