//! Configuration types
//!
//! Zone layouts and animation settings, storable as postcard binary data
//! when the `serde` feature is enabled.

#[cfg(feature = "serde")]
pub mod codec;
pub mod types;

pub use types::*;
