//! Slice
//!
//! Entering, each lit column of the text travels in from the zone's right
//! edge, one column step per frame, until it reaches its resting place.
//! Blank columns are placed without travelling. Exiting, the left-most lit
//! column travels out through the zone's left edge, one at a time.

use super::{Effect, Frame, Scratch};
use crate::text::Traversal;
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

/// Progress of a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SliceRun {
    /// Next column of the current glyph
    col: usize,
    /// Resting column for the glyph column in flight
    target: i16,
    /// Current position of the column in flight, `None` before it appears
    pos: Option<i16>,
}

pub(crate) struct Slice;

impl Slice {
    fn slice_in<S: MatrixSurface + ?Sized>(
        mut state: FsmState,
        run: &mut SliceRun,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        loop {
            match state {
                FsmState::GetNextChar => {
                    if fx.text.fetch_next(fx.surface) == 0 {
                        return FsmState::Pause;
                    }
                    run.col = 0;
                    state = FsmState::PutChar;
                }
                FsmState::PutChar => {
                    if run.target < fx.start() {
                        return FsmState::Pause;
                    }
                    if run.col >= fx.text.glyph().len() {
                        state = FsmState::GetNextChar;
                        continue;
                    }

                    let data = fx.text.glyph().column(run.col);
                    if data == 0 {
                        // nothing to see travelling
                        run.col += 1;
                        run.target -= 1;
                        continue;
                    }

                    let pos = match run.pos {
                        Some(pos) => {
                            fx.blank(pos);
                            pos + 1
                        }
                        None => fx.start(),
                    };
                    fx.put_data(pos, data);

                    if pos >= run.target {
                        run.col += 1;
                        run.target -= 1;
                        run.pos = None;
                    } else {
                        run.pos = Some(pos);
                    }
                    return FsmState::PutChar;
                }
                _ => return FsmState::Pause,
            }
        }
    }

    /// Highest lit column in the zone
    fn leftmost_lit<S: MatrixSurface + ?Sized>(fx: &Frame<'_, '_, S>) -> Option<i16> {
        (fx.start()..=fx.end()).rev().find(|&col| fx.data(col) != 0)
    }
}

impl Effect for Slice {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        let mut state = state;
        if state == FsmState::Initialise {
            if fx.text.fetch_first(fx.surface, Traversal::Forward) == 0 {
                return FsmState::End;
            }
            *fx.scratch = Scratch::Slice(SliceRun {
                col: 0,
                target: fx.area.limits.first_column(),
                pos: None,
            });
            state = FsmState::PutChar;
        }

        let Scratch::Slice(mut run) = *fx.scratch else {
            return FsmState::Pause;
        };
        let next = Self::slice_in(state, &mut run, fx);
        *fx.scratch = Scratch::Slice(run);
        next
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            *fx.scratch = Scratch::Slice(SliceRun::default());
        }
        let Scratch::Slice(mut run) = *fx.scratch else {
            return FsmState::End;
        };

        let pos = match run.pos.or_else(|| Self::leftmost_lit(fx)) {
            Some(pos) => pos,
            None => return FsmState::End,
        };

        let data = fx.data(pos);
        fx.blank(pos);
        if pos < fx.end() {
            fx.put_data(pos + 1, data);
            run.pos = Some(pos + 1);
        } else {
            run.pos = None;
        }
        *fx.scratch = Scratch::Slice(run);

        if run.pos.is_none() && Self::leftmost_lit(fx).is_none() {
            FsmState::End
        } else {
            FsmState::PutChar
        }
    }
}
