//! Random pixels
//!
//! An 8x8 pixel mask repeats across the zone. Each frame one more pixel of
//! the mask is picked at random, so the text appears (or disappears) in
//! 64 frames.

use rand::Rng;

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

/// Random picks before falling back to the first free pixel
const MAX_RETRIES: u16 = 1000;

pub(crate) struct Random;

/// Mark one more pixel of `mask`, returning `true` once all are marked
fn pick_pixel(mask: &mut [u8; 8], rng: &mut impl Rng) -> bool {
    let mut placed = false;
    for _ in 0..MAX_RETRIES {
        let col = rng.gen_range(0..8usize);
        let bit = 1u8 << rng.gen_range(0..8u8);
        if mask[col] & bit == 0 {
            mask[col] |= bit;
            placed = true;
            break;
        }
    }

    if !placed {
        if let Some(byte) = mask.iter_mut().find(|b| **b != 0xff) {
            *byte |= 1 << byte.trailing_ones();
        }
    }

    mask.iter().all(|&b| b == 0xff)
}

impl Random {
    fn frame<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, hiding: bool) -> Option<bool> {
        let Scratch::Random { mut mask } = *fx.scratch else {
            return None;
        };

        let done = pick_pixel(&mut mask, fx.rng);
        *fx.scratch = Scratch::Random { mask };

        let start = fx.start();
        fx.common_print();
        fx.mask_zone(|col| {
            let m = mask[((col - start) % 8) as usize];
            if hiding {
                !m
            } else {
                m
            }
        });
        Some(done)
    }
}

impl Effect for Random {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            *fx.scratch = Scratch::Random { mask: [0; 8] };
        }

        match Self::frame(fx, false) {
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
            *fx.scratch = Scratch::Random { mask: [0; 8] };
        }

        match Self::frame(fx, true) {
            Some(false) => FsmState::PutChar,
            _ => FsmState::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_pixel_fills_mask_in_64_steps() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut mask = [0u8; 8];
        let mut steps = 0;
        while !pick_pixel(&mut mask, &mut rng) {
            steps += 1;
            assert!(steps < 64);
        }
        assert_eq!(steps, 63);
        assert_eq!(mask, [0xff; 8]);
    }

    #[test]
    fn test_pick_pixel_on_full_mask() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut mask = [0xff; 8];
        assert!(pick_pixel(&mut mask, &mut rng));
    }
}
