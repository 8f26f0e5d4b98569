//! Static print

use super::{Effect, Frame};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

/// Whole text in one frame
pub(crate) struct Print;

impl Effect for Print {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        _state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        fx.common_print();
        FsmState::Pause
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        _state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        fx.clear_zone();
        FsmState::End
    }
}
