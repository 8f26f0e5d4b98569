//! Venetian blinds

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

/// Columns per blind
const BLINDS_SIZE: u8 = 4;

pub(crate) struct Blinds;

impl Blinds {
    /// Light the first `width` columns of every blind
    fn draw_blinds<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, width: u8) {
        for col in fx.start()..=fx.end() {
            if (((col - fx.start()) % BLINDS_SIZE as i16) as u8) < width {
                fx.light(col);
            }
        }
    }

    /// Draw one frame; `reveal` draws the content that the blinds open on
    ///
    /// Returns `true` once the blinds are fully open again.
    fn frame<S: MatrixSurface + ?Sized>(
        fx: &mut Frame<'_, '_, S>,
        reveal: impl Fn(&mut Frame<'_, '_, S>),
    ) -> Option<bool> {
        let Scratch::Blinds { width, closing } = *fx.scratch else {
            return None;
        };

        if closing {
            let width = width + 1;
            Self::draw_blinds(fx, width);
            *fx.scratch = Scratch::Blinds {
                width,
                closing: width < BLINDS_SIZE,
            };
            return Some(false);
        }

        let width = width.saturating_sub(1);
        reveal(fx);
        Self::draw_blinds(fx, width);
        *fx.scratch = Scratch::Blinds {
            width,
            closing: false,
        };
        Some(width == 0)
    }
}

impl Effect for Blinds {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Blinds {
                width: 0,
                closing: true,
            };
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
            *fx.scratch = Scratch::Blinds {
                width: 0,
                closing: true,
            };
        }

        match Self::frame(fx, |fx| fx.clear_zone()) {
            Some(false) => FsmState::PutChar,
            _ => FsmState::End,
        }
    }
}
