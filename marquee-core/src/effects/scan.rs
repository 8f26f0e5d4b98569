//! Horizontal and vertical scans
//!
//! A single column (horizontal) or a single row (vertical) of the text is
//! visible at a time. After the sweep the whole text appears when
//! entering, or the zone is left blank when exiting.

use super::{Effect, Frame, Scratch};
use crate::traits::{MatrixSurface, ROW_COUNT};
use crate::zone::FsmState;

pub(crate) struct ScanHoriz;

pub(crate) struct ScanVert;

impl ScanHoriz {
    /// Show only sweep column `pos`; past the end show `full` or nothing
    fn frame<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, full: bool) -> Option<bool> {
        let Scratch::Sweep { pos } = *fx.scratch else {
            return None;
        };
        let len = fx.span_len();

        fx.common_print();
        let done = pos >= len;
        if !(done && full) {
            for k in 0..len {
                if done || k != pos {
                    let col = fx.sweep_col(k);
                    fx.blank(col);
                }
            }
        }

        *fx.scratch = Scratch::Sweep { pos: pos + 1 };
        Some(done)
    }
}

impl Effect for ScanHoriz {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Sweep { pos: 0 };
        }
        match Self::frame(fx, true) {
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
            *fx.scratch = Scratch::Sweep { pos: 0 };
        }
        match Self::frame(fx, false) {
            Some(false) => FsmState::PutChar,
            _ => FsmState::End,
        }
    }
}

impl ScanVert {
    /// Show only row `row` of the text, or everything when `None`
    fn show_row<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, row: Option<u8>) {
        fx.common_print();
        if let Some(row) = row {
            let bits = 1u8.checked_shl(row as u32).unwrap_or(0);
            fx.mask_zone(|_| bits);
        }
    }
}

impl Effect for ScanVert {
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
        *fx.scratch = Scratch::Rows { step: step + 1 };

        if step < ROW_COUNT {
            Self::show_row(fx, Some(step));
            FsmState::PutChar
        } else {
            Self::show_row(fx, None);
            FsmState::Pause
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
        *fx.scratch = Scratch::Rows { step: step + 1 };

        if step < ROW_COUNT {
            Self::show_row(fx, Some(ROW_COUNT - 1 - step));
            FsmState::PutChar
        } else {
            fx.clear_zone();
            FsmState::End
        }
    }
}
