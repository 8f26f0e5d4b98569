//! Horizontal and vertical scrolling
//!
//! Both use the surface's shift transform on the zone with wraparound
//! disabled, so shifted-out pixels are lost and blanks come in.

use super::{Effect, Frame, Scratch};
use crate::text::Traversal;
use crate::traits::{Control, MatrixSurface, Transform, ROW_COUNT};
use crate::zone::FsmState;

/// Progress of a horizontal scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ScrollRun {
    /// Next column of the current glyph
    col: usize,
    /// Columns pushed into the zone so far
    pushed: i16,
    /// Blank columns still to push after the text
    filler: i16,
}

/// Text scrolls in from one side and out through the other
pub(crate) struct HScroll {
    /// Text moves towards the left (higher column index)
    pub left: bool,
}

impl HScroll {
    /// Shift the zone one column and put `data` in the vacated column
    fn push<S: MatrixSurface + ?Sized>(&self, fx: &mut Frame<'_, '_, S>, data: u8) {
        if self.left {
            fx.shift(Transform::ShiftLeft);
            let col = fx.start();
            fx.put_data(col, data);
        } else {
            fx.shift(Transform::ShiftRight);
            let col = fx.end();
            fx.put_data(col, data);
        }
    }

    /// Blank columns needed after `pushed` columns to rest at the print position
    fn filler<S: MatrixSurface + ?Sized>(&self, fx: &Frame<'_, '_, S>, pushed: i16) -> i16 {
        let first = fx.area.limits.first_column();
        if self.left {
            first - (fx.start() + pushed - 1)
        } else {
            fx.end() - first
        }
    }

    fn scroll_in<S: MatrixSurface + ?Sized>(
        &self,
        mut state: FsmState,
        run: &mut ScrollRun,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        loop {
            match state {
                FsmState::GetNextChar => {
                    if fx.text.fetch_next(fx.surface) == 0 {
                        run.filler = self.filler(fx, run.pushed);
                        state = FsmState::PutFiller;
                    } else {
                        run.col = 0;
                        state = FsmState::PutChar;
                    }
                }
                FsmState::PutChar => {
                    // the last glyph's trailing spacing would push the text past its place
                    if self.left && run.pushed >= fx.area.limits.width as i16 {
                        run.filler = self.filler(fx, run.pushed);
                        state = FsmState::PutFiller;
                        continue;
                    }
                    let data = fx.text.glyph().column(run.col);
                    self.push(fx, data);
                    run.col += 1;
                    run.pushed += 1;
                    if run.col >= fx.text.glyph().len() {
                        return FsmState::GetNextChar;
                    }
                    return FsmState::PutChar;
                }
                FsmState::PutFiller => {
                    if run.filler <= 0 {
                        return FsmState::Pause;
                    }
                    self.push(fx, 0);
                    run.filler -= 1;
                    if run.filler == 0 {
                        return FsmState::Pause;
                    }
                    return FsmState::PutFiller;
                }
                _ => return FsmState::Pause,
            }
        }
    }
}

impl Effect for HScroll {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        let mut state = state;
        if state == FsmState::Initialise {
            fx.control(Control::WrapAround(false));
            let traversal = if self.left {
                Traversal::Forward
            } else {
                Traversal::Backward
            };
            if fx.text.fetch_first(fx.surface, traversal) == 0 {
                return FsmState::End;
            }
            *fx.scratch = Scratch::Scroll(ScrollRun::default());
            state = FsmState::PutChar;
        }

        let Scratch::Scroll(mut run) = *fx.scratch else {
            return FsmState::Pause;
        };
        let next = self.scroll_in(state, &mut run, fx);
        *fx.scratch = Scratch::Scroll(run);
        next
    }

    fn exit<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Pause {
            fx.control(Control::WrapAround(false));
            *fx.scratch = Scratch::Scroll(ScrollRun::default());
        }
        let Scratch::Scroll(mut run) = *fx.scratch else {
            return FsmState::End;
        };

        self.push(fx, 0);
        run.pushed += 1;
        *fx.scratch = Scratch::Scroll(run);

        let width = fx.end() - fx.start() + 1;
        let blank = (fx.start()..=fx.end()).all(|col| fx.data(col) == 0);
        if blank || run.pushed >= width {
            FsmState::End
        } else {
            FsmState::PutFiller
        }
    }
}

/// Text scrolls in from the top or bottom edge
pub(crate) struct VScroll {
    /// Text moves up
    pub up: bool,
}

impl VScroll {
    /// Shift that moves text in the scroll direction
    fn forward(&self) -> Transform {
        if self.up {
            Transform::ShiftUp
        } else {
            Transform::ShiftDown
        }
    }

    fn backward(&self) -> Transform {
        if self.up {
            Transform::ShiftDown
        } else {
            Transform::ShiftUp
        }
    }
}

impl Effect for VScroll {
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
            fx.shift(self.backward());
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

        fx.shift(self.forward());
        let step = step + 1;
        *fx.scratch = Scratch::Rows { step };

        if step >= ROW_COUNT {
            FsmState::End
        } else {
            FsmState::PutChar
        }
    }
}
