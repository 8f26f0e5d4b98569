//! Display surface abstraction
//!
//! The animation engine never talks to a matrix driver directly. Everything
//! it draws goes through [`MatrixSurface`], which a driver crate implements
//! for its column buffer.

mod surface;

pub use surface::{Control, FontData, MatrixSurface, MatrixSurfaceExt, Transform, ROW_COUNT};
