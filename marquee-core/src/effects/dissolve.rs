//! Checkerboard dissolve
//!
//! Four frames: half the pixels light up, the rest follow, then the new
//! content appears under a checkerboard which finally drops away.

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

pub(crate) struct Dissolve;

fn checker(col: i16, odd: bool) -> u8 {
    if (col & 1 == 1) == odd {
        0xaa
    } else {
        0x55
    }
}

impl Dissolve {
    fn frame<S: MatrixSurface + ?Sized>(
        fx: &mut Frame<'_, '_, S>,
        reveal: impl Fn(&mut Frame<'_, '_, S>),
    ) -> Option<bool> {
        let Scratch::Dissolve { step } = *fx.scratch else {
            return None;
        };

        match step {
            0 | 1 => {
                for col in fx.start()..=fx.end() {
                    fx.merge(col, checker(col, step == 0));
                }
            }
            2 => {
                reveal(fx);
                for col in fx.start()..=fx.end() {
                    fx.merge(col, checker(col, false));
                }
            }
            _ => reveal(fx),
        }

        *fx.scratch = Scratch::Dissolve { step: step + 1 };
        Some(step >= 3)
    }
}

impl Effect for Dissolve {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Dissolve { step: 0 };
        }

        let next = Self::frame(fx, |fx| {
            fx.clear_zone();
            fx.common_print();
        });
        match next {
            Some(false) => FsmState::PutChar,
            _ => FsmState::Pause,
        }
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            *fx.scratch = Scratch::Dissolve { step: 0 };
        }

        match Self::frame(fx, |fx| fx.clear_zone()) {
            Some(false) => FsmState::PutChar,
            _ => FsmState::End,
        }
    }
}
