//! Opening and closing bands
//!
//! The text span is split at its centre. Opening reveals a band growing
//! out of the centre and hides from the edges inwards. Closing reveals
//! from the edges inwards and hides a band growing out of the centre.
//! Band positions count from the span's left edge.

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

pub(crate) struct Band {
    /// Band grows from the centre while entering
    opening: bool,
    cursor: bool,
}

impl Band {
    pub fn opening(cursor: bool) -> Self {
        Self { opening: true, cursor }
    }

    pub fn closing(cursor: bool) -> Self {
        Self {
            opening: false,
            cursor,
        }
    }

    /// Advance the band counter, starting over on `first`
    fn next_step<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, first: bool) -> Option<i16> {
        if first {
            *fx.scratch = Scratch::Band { step: 0 };
        }
        let Scratch::Band { step } = *fx.scratch else {
            return None;
        };
        let step = step + 1;
        *fx.scratch = Scratch::Band { step };
        Some(step)
    }

    /// Draw the frame where only positions `lo..=hi` are hidden or shown
    ///
    /// With `inside` set the band `lo..=hi` is visible and the rest hidden,
    /// otherwise the band is hidden and the rest visible. Returns whether
    /// any part of the text is still hidden.
    fn draw<S: MatrixSurface + ?Sized>(
        &self,
        fx: &mut Frame<'_, '_, S>,
        lo: i16,
        hi: i16,
        inside: bool,
    ) -> bool {
        let Some((_, high)) = fx.span() else {
            return false;
        };
        let len = fx.span_len();
        let col = |p: i16| high - p;

        fx.common_print();
        let mut hidden = false;
        for p in 0..len {
            let in_band = p >= lo && p <= hi;
            if in_band != inside {
                fx.blank(col(p));
                hidden = true;
            }
        }

        if self.cursor && hidden {
            if inside {
                // bars just outside the visible band
                fx.light(col(lo - 1));
                fx.light(col(hi + 1));
            } else {
                // bars on the edges of the hidden band
                fx.light(col(lo));
                fx.light(col(hi));
            }
        }
        hidden
    }
}

impl Effect for Band {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        let Some(step) = Self::next_step(fx, state == FsmState::Initialise) else {
            return FsmState::Pause;
        };
        let len = fx.span_len();
        let half = (len + 1) / 2;

        let hidden = if self.opening {
            let m = half - step;
            self.draw(fx, m, len - 1 - m, true)
        } else {
            self.draw(fx, step, len - 1 - step, false)
        };

        if hidden {
            FsmState::PutChar
        } else {
            FsmState::Pause
        }
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        let Some(step) = Self::next_step(fx, state == FsmState::Pause) else {
            return FsmState::End;
        };
        let len = fx.span_len();
        let half = (len + 1) / 2;

        let visible = if self.opening {
            // hide from the edges inwards
            self.draw(fx, step, len - 1 - step, true) && step <= len - 1 - step
        } else {
            // hide from the centre outwards
            let m = half - step;
            self.draw(fx, m, len - 1 - m, false) && m > 0
        };

        if visible {
            FsmState::PutChar
        } else {
            fx.clear_zone();
            FsmState::End
        }
    }
}
