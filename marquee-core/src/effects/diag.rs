//! Diagonal scrolling
//!
//! Vertical scroll combined with a one-column horizontal shift per row.

use super::{Effect, Frame, Scratch};
use crate::traits::{Control, MatrixSurface, Transform, ROW_COUNT};
use crate::zone::FsmState;

pub(crate) struct Diagonal {
    up: bool,
    left: bool,
}

impl Diagonal {
    pub fn new(up: bool, left: bool) -> Self {
        Self { up, left }
    }

    /// Move the zone one step along the direction of travel
    fn advance<S: MatrixSurface + ?Sized>(&self, fx: &mut Frame<'_, '_, S>) {
        fx.shift(if self.up {
            Transform::ShiftUp
        } else {
            Transform::ShiftDown
        });
        fx.shift(if self.left {
            Transform::ShiftLeft
        } else {
            Transform::ShiftRight
        });
    }

    /// Move the zone one step against the direction of travel
    fn retreat<S: MatrixSurface + ?Sized>(&self, fx: &mut Frame<'_, '_, S>) {
        fx.shift(if self.up {
            Transform::ShiftDown
        } else {
            Transform::ShiftUp
        });
        fx.shift(if self.left {
            Transform::ShiftRight
        } else {
            Transform::ShiftLeft
        });
    }
}

impl Effect for Diagonal {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            fx.control(Control::WrapAround(false));
            *fx.scratch = Scratch::Rows { step: 0 };
        }
        let Scratch::Rows { step } = *fx.scratch else {
            return FsmState::Pause;
        };

        fx.clear_zone();
        fx.common_print();
        for _ in step..ROW_COUNT - 1 {
            self.retreat(fx);
        }

        if step >= ROW_COUNT - 1 {
            return FsmState::Pause;
        }
        *fx.scratch = Scratch::Rows { step: step + 1 };
        FsmState::PutChar
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            fx.control(Control::WrapAround(false));
            *fx.scratch = Scratch::Rows { step: 0 };
        }
        let Scratch::Rows { step } = *fx.scratch else {
            return FsmState::End;
        };

        self.advance(fx);
        let step = step + 1;
        *fx.scratch = Scratch::Rows { step };

        if step >= ROW_COUNT {
            fx.clear_zone();
            FsmState::End
        } else {
            FsmState::PutChar
        }
    }
}
