//! Effect library
//!
//! Every effect draws one frame per call and returns the zone's next state.
//! Entering always starts at [`FsmState::Initialise`] and must end at
//! [`FsmState::Pause`]. Exiting starts at `Pause` and must end at
//! [`FsmState::End`]. Progress between frames lives in the zone's
//! [`Scratch`] so several zones can run the same effect at once.

mod band;
mod blinds;
mod diag;
mod dissolve;
mod frame;
mod grow;
mod print;
mod random;
mod scan;
mod scroll;
mod slice;
mod sprite;
mod wipe;

pub(crate) use frame::{Area, Frame};
pub use sprite::{SpriteData, SpriteKind, PACMAN, PACMAN_GHOST, ROCKET};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::MatrixSurface;
use crate::zone::{FsmState, Motion};

/// Text transition effects
///
/// Any effect can be used to bring text in or take it out. Where an
/// effect names a direction it is the direction the text moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextEffect {
    /// Finish immediately, leaving the display as it is
    NoEffect,
    /// Show or clear the text in one frame
    #[default]
    Print,
    /// Columns fly in from the right one at a time
    Slice,
    /// Reveal or hide one column per frame
    Wipe,
    /// Wipe with a lit bar on the moving edge
    WipeCursor,
    /// Reveal from the centre outwards, hide from the edges inwards
    Opening,
    /// Opening with lit bars on the moving edges
    OpeningCursor,
    /// Reveal from the edges inwards, hide from the centre outwards
    Closing,
    /// Closing with lit bars on the moving edges
    ClosingCursor,
    /// Venetian blinds close over the zone and open on the new content
    Blinds,
    /// Checkerboard dissolve through a fully lit zone
    Dissolve,
    /// Pixels appear or disappear one at a time in random order
    Random,
    /// Text moves up through the zone
    ScrollUp,
    /// Text moves down through the zone
    ScrollDown,
    /// Text moves from right to left
    ScrollLeft,
    /// Text moves from left to right
    ScrollRight,
    /// Text moves diagonally up and left
    ScrollUpLeft,
    /// Text moves diagonally up and right
    ScrollUpRight,
    /// Text moves diagonally down and left
    ScrollDownLeft,
    /// Text moves diagonally down and right
    ScrollDownRight,
    /// A single visible column sweeps across the text
    ScanHoriz,
    /// A single visible row sweeps through the text
    ScanVert,
    /// Text grows from the bottom up and shrinks from the top down
    GrowUp,
    /// Text grows from the top down and shrinks from the bottom up
    GrowDown,
    /// An animated sprite leads the text in or eats it up
    Sprite(SpriteKind),
}

/// Per-zone progress of the running effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Scratch {
    /// No effect has started
    #[default]
    Idle,
    /// Frames drawn along the sweep order (wipe, horizontal scan)
    Sweep { pos: i16 },
    /// Frames drawn by the opening/closing band
    Band { step: i16 },
    /// Row-based frame counter (vertical scroll, diagonal, grow, vertical scan)
    Rows { step: u8 },
    /// Column in flight for the slice effect
    Slice(slice::SliceRun),
    /// Columns pushed by the horizontal scroll
    Scroll(scroll::ScrollRun),
    /// Blind width and direction
    Blinds { width: u8, closing: bool },
    /// Dissolve frame number
    Dissolve { step: u8 },
    /// Pixels already revealed or hidden, one byte per column mod 8
    Random { mask: [u8; 8] },
    /// Sprite position and animation frame
    Sprite(sprite::SpriteRun),
}

/// Resumable two-phase effect
pub(crate) trait Effect {
    /// Draw the next entering frame
    ///
    /// Called first with `Initialise`; returns `Pause` when the text is
    /// fully shown.
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState;

    /// Draw the next exiting frame
    ///
    /// Called first with `Pause`; returns `End` when the text is gone.
    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState;
}

fn play<E: Effect, S: MatrixSurface + ?Sized>(
    effect: &E,
    motion: Motion,
    state: FsmState,
    fx: &mut Frame<'_, '_, S>,
) -> FsmState {
    match motion {
        Motion::Entering => effect.enter(state, fx),
        Motion::Exiting => effect.exit(state, fx),
    }
}

/// Run one frame of `effect` for the given motion
pub(crate) fn step<S: MatrixSurface + ?Sized>(
    effect: TextEffect,
    motion: Motion,
    state: FsmState,
    fx: &mut Frame<'_, '_, S>,
) -> FsmState {
    use band::Band;
    use diag::Diagonal;
    use grow::Grow;
    use scan::{ScanHoriz, ScanVert};
    use scroll::{HScroll, VScroll};
    use wipe::Wipe;

    match effect {
        TextEffect::NoEffect => FsmState::End,
        TextEffect::Print => play(&print::Print, motion, state, fx),
        TextEffect::Slice => play(&slice::Slice, motion, state, fx),
        TextEffect::Wipe => play(&Wipe { cursor: false }, motion, state, fx),
        TextEffect::WipeCursor => play(&Wipe { cursor: true }, motion, state, fx),
        TextEffect::Opening => play(&Band::opening(false), motion, state, fx),
        TextEffect::OpeningCursor => play(&Band::opening(true), motion, state, fx),
        TextEffect::Closing => play(&Band::closing(false), motion, state, fx),
        TextEffect::ClosingCursor => play(&Band::closing(true), motion, state, fx),
        TextEffect::Blinds => play(&blinds::Blinds, motion, state, fx),
        TextEffect::Dissolve => play(&dissolve::Dissolve, motion, state, fx),
        TextEffect::Random => play(&random::Random, motion, state, fx),
        TextEffect::ScrollUp => play(&VScroll { up: true }, motion, state, fx),
        TextEffect::ScrollDown => play(&VScroll { up: false }, motion, state, fx),
        TextEffect::ScrollLeft => play(&HScroll { left: true }, motion, state, fx),
        TextEffect::ScrollRight => play(&HScroll { left: false }, motion, state, fx),
        TextEffect::ScrollUpLeft => play(&Diagonal::new(true, true), motion, state, fx),
        TextEffect::ScrollUpRight => play(&Diagonal::new(true, false), motion, state, fx),
        TextEffect::ScrollDownLeft => play(&Diagonal::new(false, true), motion, state, fx),
        TextEffect::ScrollDownRight => play(&Diagonal::new(false, false), motion, state, fx),
        TextEffect::ScanHoriz => play(&ScanHoriz, motion, state, fx),
        TextEffect::ScanVert => play(&ScanVert, motion, state, fx),
        TextEffect::GrowUp => play(&Grow { up: true }, motion, state, fx),
        TextEffect::GrowDown => play(&Grow { up: false }, motion, state, fx),
        TextEffect::Sprite(_) => play(&sprite::Sprite, motion, state, fx),
    }
}
