//! Grow up and down
//!
//! Rows of the text are revealed one per frame from the bottom (up) or the
//! top (down), and hidden from the opposite side when exiting.

use super::{Effect, Frame, Scratch};
use crate::traits::{MatrixSurface, ROW_COUNT};
use crate::zone::FsmState;

pub(crate) struct Grow {
    pub up: bool,
}

impl Grow {
    /// Mask with `rows` rows visible on the growing side
    fn visible(&self, rows: u8) -> u8 {
        let hidden = ROW_COUNT.saturating_sub(rows) as u32;
        if self.up {
            0xffu8.checked_shl(hidden).unwrap_or(0)
        } else {
            0xffu8.checked_shr(hidden).unwrap_or(0)
        }
    }

    /// Mask with the first `rows` rows removed from the shrinking side
    fn remaining(&self, rows: u8) -> u8 {
        let rows = rows as u32;
        if self.up {
            // top rows go first
            0xffu8.checked_shl(rows).unwrap_or(0)
        } else {
            0xffu8.checked_shr(rows).unwrap_or(0)
        }
    }
}

impl Effect for Grow {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Rows { step: 0 };
        }
        let Scratch::Rows { step } = *fx.scratch else {
            return FsmState::Pause;
        };
        let rows = step + 1;
        *fx.scratch = Scratch::Rows { step: rows };

        let mask = self.visible(rows);
        fx.common_print();
        fx.mask_zone(|_| mask);

        if rows >= ROW_COUNT {
            FsmState::Pause
        } else {
            FsmState::PutChar
        }
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            *fx.scratch = Scratch::Rows { step: 0 };
        }
        let Scratch::Rows { step } = *fx.scratch else {
            return FsmState::End;
        };
        let rows = step + 1;
        *fx.scratch = Scratch::Rows { step: rows };

        let mask = self.remaining(rows);
        fx.common_print();
        fx.mask_zone(|_| mask);

        if rows >= ROW_COUNT {
            FsmState::End
        } else {
            FsmState::PutChar
        }
    }
}
