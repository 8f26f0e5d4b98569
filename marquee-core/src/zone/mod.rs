//! Zones and their animation state machine
//!
//! A zone is a contiguous column range of the shared display that runs its
//! own entry, pause and exit animation.

mod runner;
mod state;

pub use runner::{Zone, DEFAULT_INTENSITY, MAX_INTENSITY};
pub use state::{FsmState, Motion};
