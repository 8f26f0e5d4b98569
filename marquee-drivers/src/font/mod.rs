//! Font tables for the reference surface

mod system;
mod table;

pub use system::SYSTEM_FONT;
pub use table::{FontError, FontTable};
