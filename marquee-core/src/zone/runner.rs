//! Zone animation runner
//!
//! Each call to [`Zone::animate`] draws at most one frame. Time is passed in
//! by the caller as a free-running millisecond counter that may wrap.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{FsmState, Motion};
use crate::effects::{self, Area, Frame, Scratch, SpriteData, TextEffect};
use crate::error::MarqueeError;
use crate::text::{TextAlign, TextLimits, TextStream};
use crate::traits::{Control, FontData, MatrixSurface, Transform};

/// Brightest LED intensity accepted by the surface
pub const MAX_INTENSITY: u8 = 15;

/// Intensity applied to new zones
pub const DEFAULT_INTENSITY: u8 = MAX_INTENSITY / 2;

/// Default frame interval in milliseconds
const DEFAULT_SPEED_MS: u16 = 10;

/// Default pause in milliseconds
const DEFAULT_PAUSE_MS: u16 = 10 * DEFAULT_SPEED_MS;

/// A column range of the display running its own animation
#[derive(Debug, Clone)]
pub struct Zone<'a> {
    start: u16,
    end: u16,
    stream: TextStream<'a>,
    align: TextAlign,
    effect_in: TextEffect,
    effect_out: TextEffect,
    speed_ms: u16,
    pause_ms: u16,
    inverted: bool,
    intensity: u8,
    sprite_in: Option<SpriteData>,
    sprite_out: Option<SpriteData>,
    state: FsmState,
    motion: Motion,
    last_run_ms: u32,
    suspended: bool,
    limits: TextLimits,
    scratch: Scratch,
    rng: SmallRng,
}

impl<'a> Zone<'a> {
    /// Create an idle zone covering columns `start..=end`
    pub fn new(start: u16, end: u16) -> Self {
        Self {
            start,
            end,
            stream: TextStream::new(),
            align: TextAlign::Left,
            effect_in: TextEffect::Print,
            effect_out: TextEffect::NoEffect,
            speed_ms: DEFAULT_SPEED_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            inverted: false,
            intensity: DEFAULT_INTENSITY,
            sprite_in: None,
            sprite_out: None,
            state: FsmState::End,
            motion: Motion::Entering,
            last_run_ms: 0,
            suspended: false,
            limits: TextLimits::default(),
            scratch: Scratch::Idle,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// First (right-most) column
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Last (left-most) column
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of columns
    pub fn width(&self) -> u16 {
        self.end - self.start + 1
    }

    /// Check if the columns `start..=end` share a column with this zone
    pub fn overlaps(&self, start: u16, end: u16) -> bool {
        start <= self.end && self.start <= end
    }

    pub(crate) fn set_columns(&mut self, start: u16, end: u16) {
        self.start = start;
        self.end = end;
    }

    /// Text shown by the zone
    pub fn text(&self) -> Option<&'a [u8]> {
        self.stream.text()
    }

    /// Show `text`; takes effect at the next reset
    pub fn set_text(&mut self, text: &'a str) {
        self.stream.set_text(Some(text.as_bytes()));
    }

    /// Show raw character codes, for fonts with codes above 127
    pub fn set_text_bytes(&mut self, text: &'a [u8]) {
        self.stream.set_text(Some(text));
    }

    /// Remove the text; the zone completes immediately from then on
    pub fn clear_text(&mut self) {
        self.stream.set_text(None);
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Entry and exit effects
    pub fn effects(&self) -> (TextEffect, TextEffect) {
        (self.effect_in, self.effect_out)
    }

    pub fn set_effects(&mut self, effect_in: TextEffect, effect_out: TextEffect) {
        self.effect_in = effect_in;
        self.effect_out = effect_out;
    }

    /// Milliseconds between frames
    pub fn speed(&self) -> u16 {
        self.speed_ms
    }

    pub fn set_speed(&mut self, speed_ms: u16) {
        self.speed_ms = speed_ms;
    }

    /// Milliseconds the text stays on display between entering and exiting
    pub fn pause(&self) -> u16 {
        self.pause_ms
    }

    pub fn set_pause(&mut self, pause_ms: u16) {
        self.pause_ms = pause_ms;
    }

    /// Blank columns between characters
    pub fn char_spacing(&self) -> u8 {
        self.stream.spacing()
    }

    pub fn set_char_spacing(&mut self, spacing: u8) {
        self.stream.set_spacing(spacing);
    }

    /// Lit and unlit pixels are swapped
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_invert(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Font used for this zone, `None` for the surface default
    pub fn font(&self) -> Option<FontData> {
        self.stream.source().font()
    }

    pub fn set_font(&mut self, font: Option<FontData>) {
        self.stream.source_mut().set_font(font);
    }

    /// Replace the glyph for `code` in this zone
    ///
    /// `data[0]` is the column count, followed by the columns.
    pub fn add_char(&mut self, code: u8, data: &'a [u8]) -> Result<(), MarqueeError> {
        self.stream.source_mut().user_chars_mut().add(code, data)
    }

    /// Restore the font glyph for `code`
    pub fn del_char(&mut self, code: u8) -> Result<(), MarqueeError> {
        self.stream.source_mut().user_chars_mut().remove(code)
    }

    /// Sprites used by [`SpriteKind::User`](crate::effects::SpriteKind::User)
    pub fn set_sprite_data(&mut self, entering: Option<SpriteData>, exiting: Option<SpriteData>) {
        self.sprite_in = entering;
        self.sprite_out = exiting;
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Set the LED brightness of the zone's columns (clamped to 15)
    pub fn set_intensity<S: MatrixSurface + ?Sized>(&mut self, surface: &mut S, level: u8) {
        self.intensity = level.min(MAX_INTENSITY);
        surface.control(self.start, self.end, Control::Intensity(self.intensity));
    }

    /// Seed the generator used by the random effect
    pub fn set_random_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Check if the animation has completed
    pub fn is_done(&self) -> bool {
        self.state == FsmState::End
    }

    /// Text placement computed when the animation started
    pub fn limits(&self) -> TextLimits {
        self.limits
    }

    /// Freeze (`true`) or continue the animation
    pub fn suspend(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Restart the animation from the beginning at the next tick
    pub fn reset(&mut self) {
        self.state = FsmState::Initialise;
        self.motion = Motion::Entering;
        self.scratch = Scratch::Idle;
    }

    /// Blank the zone's columns
    pub fn clear<S: MatrixSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.start, self.end);
        if self.inverted {
            surface.transform(self.start, self.end, Transform::Invert);
        }
    }

    /// Calculate the text placement for the current text and settings
    ///
    /// Returns `true` when the text fits the zone.
    pub fn calc_text_limits<S: MatrixSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let width = self.stream.measure(surface);
        self.limits = TextLimits::calculate(self.start, self.end, width, self.align);
        self.limits.fits()
    }

    /// Draw the next frame if it is due
    ///
    /// Returns `true` once the animation has completed.
    pub fn animate<S: MatrixSurface + ?Sized>(&mut self, surface: &mut S, now_ms: u32) -> bool {
        if self.state == FsmState::End {
            return true;
        }
        if self.stream.text().is_none() {
            self.state = FsmState::End;
            return true;
        }

        let elapsed = now_ms.wrapping_sub(self.last_run_ms);
        if self.suspended
            || elapsed < u32::from(self.speed_ms)
            || (self.state == FsmState::Pause && elapsed < u32::from(self.pause_ms))
        {
            return false;
        }
        self.last_run_ms = now_ms;

        if self.state == FsmState::Initialise {
            if !self.calc_text_limits(surface) {
                debug!("zone text overflows by {}", self.limits.width - self.width());
            }
            self.clear(surface);
            self.motion = Motion::Entering;
        }

        let (effect, sprite) = match self.motion {
            Motion::Entering => (self.effect_in, self.sprite_in),
            Motion::Exiting => (self.effect_out, self.sprite_out),
        };
        let sprite = match effect {
            TextEffect::Sprite(kind) => kind.builtin().or(sprite),
            _ => None,
        };

        let previous = self.state;
        let mut fx = Frame {
            surface,
            area: Area {
                start: self.start as i16,
                end: self.end as i16,
                limits: self.limits,
                align: self.align,
                inverted: self.inverted,
            },
            text: &mut self.stream,
            scratch: &mut self.scratch,
            rng: &mut self.rng,
            sprite,
        };
        self.state = effects::step(effect, self.motion, previous, &mut fx);
        self.motion = self.motion.after(self.state);

        if self.state != previous {
            trace!("zone {} state {} -> {}", self.start, previous, self.state);
        }

        self.state == FsmState::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSurface;

    fn printing_zone() -> Zone<'static> {
        let mut zone = Zone::new(0, 15);
        zone.set_text("HI");
        zone.set_speed(50);
        zone.set_pause(200);
        zone.reset();
        zone
    }

    #[test]
    fn test_new_zone_is_done() {
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(0, 7);
        assert!(zone.is_done());
        assert!(zone.animate(&mut surface, 1_000));
        assert_eq!(surface.writes, 0);
    }

    #[test]
    fn test_no_text_completes_without_drawing() {
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(0, 7);
        zone.reset();
        assert!(zone.animate(&mut surface, 1_000));
        assert_eq!(zone.state(), FsmState::End);
        assert_eq!(surface.writes, 0);
        assert_eq!(surface.cols, [0; 32]);
    }

    #[test]
    fn test_frame_waits_for_speed() {
        let mut surface = MockSurface::new();
        let mut zone = printing_zone();

        assert!(!zone.animate(&mut surface, 49));
        assert_eq!(zone.state(), FsmState::Initialise);
        assert_eq!(surface.writes, 0);

        assert!(!zone.animate(&mut surface, 50));
        assert_eq!(zone.state(), FsmState::Pause);
        let drawn = surface.cols;

        // not yet due
        assert!(!zone.animate(&mut surface, 90));
        assert_eq!(surface.cols, drawn);
    }

    #[test]
    fn test_pause_holds_text() {
        let mut surface = MockSurface::new();
        let mut zone = printing_zone();
        zone.animate(&mut surface, 100);
        assert_eq!(zone.state(), FsmState::Pause);

        assert!(!zone.animate(&mut surface, 299));
        assert_eq!(zone.state(), FsmState::Pause);
        assert_eq!(zone.motion(), Motion::Exiting);

        // exit effect defaults to no effect
        assert!(zone.animate(&mut surface, 300));
        assert!(surface.range(0, 15).iter().any(|&c| c != 0));
    }

    #[test]
    fn test_clock_wraparound() {
        let mut surface = MockSurface::new();
        let mut zone = printing_zone();
        zone.animate(&mut surface, u32::MAX - 100);
        assert_eq!(zone.state(), FsmState::Pause);

        // 250ms later, past the counter wrap
        assert!(zone.animate(&mut surface, 149));
    }

    #[test]
    fn test_suspend_freezes_animation() {
        let mut surface = MockSurface::new();
        let mut zone = printing_zone();
        zone.suspend(true);
        assert!(!zone.animate(&mut surface, 1_000));
        assert_eq!(zone.state(), FsmState::Initialise);
        assert_eq!(surface.writes, 0);

        zone.suspend(false);
        zone.animate(&mut surface, 1_000);
        assert_eq!(zone.state(), FsmState::Pause);
    }

    #[test]
    fn test_reset_restarts() {
        let mut surface = MockSurface::new();
        let mut zone = printing_zone();
        zone.animate(&mut surface, 100);
        zone.animate(&mut surface, 400);
        assert!(zone.is_done());

        zone.reset();
        assert_eq!(zone.state(), FsmState::Initialise);
        assert_eq!(zone.motion(), Motion::Entering);
    }

    #[test]
    fn test_inverted_clear() {
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(2, 5);
        zone.set_invert(true);
        zone.clear(&mut surface);
        assert_eq!(surface.range(2, 5), &[0xff; 4]);
        assert_eq!(surface.get(1), 0);
        assert_eq!(surface.get(6), 0);
    }

    #[test]
    fn test_intensity_clamped() {
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(0, 7);
        assert_eq!(zone.intensity(), DEFAULT_INTENSITY);
        zone.set_intensity(&mut surface, 40);
        assert_eq!(zone.intensity(), MAX_INTENSITY);
        assert_eq!(surface.intensity, MAX_INTENSITY);
    }

    #[test]
    fn test_text_limits_follow_alignment() {
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(8, 23);
        zone.set_text("HI");
        zone.set_align(TextAlign::Right);
        assert!(zone.calc_text_limits(&mut surface));
        assert_eq!(zone.limits().first_column(), 15);

        zone.set_text("HIHIHI");
        assert!(!zone.calc_text_limits(&mut surface));
    }

    #[test]
    fn test_user_char_replaces_font_glyph() {
        static BAR: [u8; 3] = [2, 0xff, 0xff];
        let mut surface = MockSurface::new();
        let mut zone = Zone::new(0, 15);
        zone.set_text("H");
        zone.add_char(b'H', &BAR).unwrap();
        zone.reset();
        zone.animate(&mut surface, 100);
        assert_eq!(surface.range(14, 15), &[0xff, 0xff]);
        assert_eq!(surface.get(13), 0);

        zone.del_char(b'H').unwrap();
        assert!(zone.calc_text_limits(&mut surface));
        assert_eq!(zone.limits().width, 4);
    }

    #[test]
    fn test_overlap() {
        let zone = Zone::new(8, 15);
        assert!(zone.overlaps(0, 8));
        assert!(zone.overlaps(15, 20));
        assert!(!zone.overlaps(0, 7));
        assert!(!zone.overlaps(16, 31));
    }
}
