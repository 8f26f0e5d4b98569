//! Reference surface implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! marquee-core:
//!
//! - In-memory column buffer behaving like chained MAX72xx modules
//! - Font table parsing and lookup
//! - A built-in proportional ASCII font

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod matrix;

pub use font::{FontError, FontTable, SYSTEM_FONT};
pub use matrix::{MatrixBuffer, ModuleState};
