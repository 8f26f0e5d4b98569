//! Animated sprites
//!
//! Entering, the sprite travels from the zone's left edge to its right edge
//! and the text appears behind it. Exiting, the sprite travels back from
//! the right edge, facing the other way, and eats the text. Animation
//! frames bounce between the first and the last frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Effect, Frame, Scratch};
use crate::traits::MatrixSurface;
use crate::zone::FsmState;

/// Sprite bitmap: `frames` frames of `width` columns each, frame after frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpriteData {
    /// Column data
    pub data: &'static [u8],
    /// Columns per frame
    pub width: u8,
    /// Number of animation frames
    pub frames: u8,
}

impl SpriteData {
    /// Create sprite data
    pub const fn new(data: &'static [u8], width: u8, frames: u8) -> Self {
        Self {
            data,
            width,
            frames,
        }
    }

    /// Check that the data holds every frame
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.frames > 0
            && self.data.len() >= self.width as usize * self.frames as usize
    }

    /// Column `i` of frame `frame`
    pub fn column(&self, frame: u8, i: u8) -> u8 {
        let idx = frame as usize * self.width as usize + i as usize;
        self.data.get(idx).copied().unwrap_or(0)
    }
}

/// Which sprite a [`TextEffect::Sprite`](super::TextEffect::Sprite) uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpriteKind {
    /// Gobbling pacman
    #[default]
    Pacman,
    /// Ghost pursued by a pacman
    PacmanGhost,
    /// Rocket with flickering exhaust
    Rocket,
    /// Sprite data set on the zone
    User,
}

impl SpriteKind {
    /// Built-in data for this sprite, `None` for [`SpriteKind::User`]
    pub fn builtin(&self) -> Option<SpriteData> {
        match self {
            SpriteKind::Pacman => Some(PACMAN),
            SpriteKind::PacmanGhost => Some(PACMAN_GHOST),
            SpriteKind::Rocket => Some(ROCKET),
            SpriteKind::User => None,
        }
    }
}

static PACMAN_DATA: [u8; 32] = [
    0x00, 0x81, 0xc3, 0xe7, 0xff, 0x7e, 0x7e, 0x3c, //
    0x00, 0x42, 0xe7, 0xe7, 0xff, 0xff, 0x7e, 0x3c, //
    0x24, 0x66, 0xe7, 0xff, 0xff, 0xff, 0x7e, 0x3c, //
    0x3c, 0x7e, 0xff, 0xff, 0xff, 0xff, 0x7e, 0x3c, //
];

static PACMAN_GHOST_DATA: [u8; 72] = [
    0x00, 0x81, 0xc3, 0xe7, 0xff, 0x7e, 0x7e, 0x3c, 0x00, //
    0x00, 0x00, 0xfe, 0x7b, 0xf3, 0x7f, 0xfb, 0x73, 0xfe, //
    0x00, 0x42, 0xe7, 0xe7, 0xff, 0xff, 0x7e, 0x3c, 0x00, //
    0x00, 0x00, 0xfe, 0x7b, 0xf3, 0x7f, 0xfb, 0x73, 0xfe, //
    0x24, 0x66, 0xe7, 0xff, 0xff, 0xff, 0x7e, 0x3c, 0x00, //
    0x00, 0x00, 0xfe, 0x7b, 0xf3, 0x7f, 0xfb, 0x73, 0xfe, //
    0x3c, 0x7e, 0xff, 0xff, 0xff, 0xff, 0x7e, 0x3c, 0x00, //
    0x00, 0x00, 0xfe, 0x7b, 0xf3, 0x7f, 0xfb, 0x73, 0xfe, //
];

static ROCKET_DATA: [u8; 22] = [
    0x18, 0x24, 0x42, 0x81, 0x99, 0x18, 0x99, 0x18, 0xa5, 0x5a, 0x81, //
    0x18, 0x24, 0x42, 0x81, 0x18, 0x99, 0x18, 0x99, 0x24, 0x42, 0x99, //
];

/// Gobbling pacman, 4 frames of 8 columns
pub const PACMAN: SpriteData = SpriteData::new(&PACMAN_DATA, 8, 4);

/// Pacman chasing a ghost, 4 frames of 18 columns
pub const PACMAN_GHOST: SpriteData = SpriteData::new(&PACMAN_GHOST_DATA, 18, 4);

/// Rocket, 2 frames of 11 columns
pub const ROCKET: SpriteData = SpriteData::new(&ROCKET_DATA, 11, 2);

/// Position and animation frame of a travelling sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpriteRun {
    sprite: SpriteData,
    /// Leading column of the sprite
    pos: i16,
    frame: u8,
    forward: bool,
}

impl SpriteRun {
    fn new(sprite: SpriteData, pos: i16) -> Self {
        Self {
            sprite,
            pos,
            frame: 0,
            forward: true,
        }
    }

    fn next_frame(&mut self) {
        let last = self.sprite.frames.saturating_sub(1);
        if last == 0 {
            return;
        }
        if self.forward {
            self.frame += 1;
            if self.frame >= last {
                self.forward = false;
            }
        } else {
            self.frame = self.frame.saturating_sub(1);
            if self.frame == 0 {
                self.forward = true;
            }
        }
    }
}

pub(crate) struct Sprite;

impl Sprite {
    fn start_run<S: MatrixSurface + ?Sized>(fx: &mut Frame<'_, '_, S>, pos: i16) -> bool {
        match fx.sprite.filter(SpriteData::is_valid) {
            Some(sprite) => {
                *fx.scratch = Scratch::Sprite(SpriteRun::new(sprite, pos));
                true
            }
            None => false,
        }
    }
}

impl Effect for Sprite {
    fn enter<S: MatrixSurface + ?Sized>(
        &self,
        state: FsmState,
        fx: &mut Frame<'_, '_, S>,
    ) -> FsmState {
        if state == FsmState::Initialise {
            let pos = fx.end() + 1;
            if !Self::start_run(fx, pos) {
                return FsmState::End;
            }
        }
        let Scratch::Sprite(mut run) = *fx.scratch else {
            return FsmState::Pause;
        };
        let width = run.sprite.width as i16;

        // sprite covers pos..pos + width, moving towards column 0
        run.pos -= 1;
        fx.common_print();
        for i in 0..run.sprite.width {
            let data = run.sprite.column(run.frame, i);
            fx.put_data(run.pos + i as i16, data);
        }
        for col in fx.start()..run.pos {
            fx.blank(col);
        }
        run.next_frame();
        *fx.scratch = Scratch::Sprite(run);

        if run.pos + width <= fx.start() {
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
            let pos = fx.start() - 1;
            if !Self::start_run(fx, pos) {
                return FsmState::End;
            }
        }
        let Scratch::Sprite(mut run) = *fx.scratch else {
            return FsmState::End;
        };
        let width = run.sprite.width as i16;

        // sprite covers pos - width..=pos, mirrored, moving away from column 0
        run.pos += 1;
        fx.common_print();
        for i in 0..run.sprite.width {
            let data = run.sprite.column(run.frame, i);
            fx.put_data(run.pos - i as i16, data);
        }
        for col in fx.start()..=run.pos - width {
            fx.blank(col);
        }
        run.next_frame();
        *fx.scratch = Scratch::Sprite(run);

        if run.pos - width >= fx.end() {
            FsmState::End
        } else {
            FsmState::PutChar
        }
    }
}
