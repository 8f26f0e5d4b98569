//! Column wipe
//!
//! Text is revealed one column per frame in sweep order and hidden again
//! in the same order. The cursor variant lights the column about to change.

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

pub(crate) struct Wipe {
    pub cursor: bool,
}

impl Effect for Wipe {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Sweep { pos: 0 };
        }

        let Scratch::Sweep { pos } = *fx.scratch else {
            return FsmState::Pause;
        };
        let shown = pos + 1;
        let len = fx.span_len();

        fx.common_print();
        for k in shown..len {
            let col = fx.sweep_col(k);
            fx.blank(col);
        }
        *fx.scratch = Scratch::Sweep { pos: shown };

        if shown >= len {
            return FsmState::Pause;
        }
        if self.cursor {
            let col = fx.sweep_col(shown);
            fx.light(col);
        }
        FsmState::PutChar
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            *fx.scratch = Scratch::Sweep { pos: 0 };
        }

        let Scratch::Sweep { pos } = *fx.scratch else {
            return FsmState::End;
        };
        let hidden = pos + 1;
        let len = fx.span_len();

        for k in 0..hidden.min(len) {
            let col = fx.sweep_col(k);
            fx.blank(col);
        }
        *fx.scratch = Scratch::Sweep { pos: hidden };

        if hidden >= len {
            return FsmState::End;
        }
        if self.cursor {
            let col = fx.sweep_col(hidden);
            fx.light(col);
        }
        FsmState::PutChar
    }
}
