//! Multi-zone display orchestrator
//!
//! [`Marquee`] owns the surface and a fixed number of zones. Every call to
//! [`Marquee::animate`] gives each configured zone the chance to draw one
//! frame, with device updates held back until all zones are done.

use crate::config::{DisplayConfig, MODULE_COLUMNS};
use crate::effects::{SpriteData, TextEffect};
use crate::error::MarqueeError;
use crate::text::{text_len, TextAlign};
use crate::traits::{Control, FontData, MatrixSurface, MatrixSurfaceExt};
use crate::zone::Zone;

/// Upper bound on frames drawn by [`Marquee::print`]
const MAX_PRINT_FRAMES: usize = 8;

/// Text animation controller for a chained matrix display
pub struct Marquee<'a, S: MatrixSurface, const ZONES: usize> {
    surface: S,
    zones: [Zone<'a>; ZONES],
    assigned: [bool; ZONES],
    last_now_ms: u32,
}

impl<'a, S: MatrixSurface, const ZONES: usize> Marquee<'a, S, ZONES> {
    /// Create a controller for `surface`
    ///
    /// A single-zone display gets one zone spanning every column. With more
    /// zones each one must be placed with [`set_zone_columns`] before it
    /// animates.
    ///
    /// [`set_zone_columns`]: Self::set_zone_columns
    pub fn new(surface: S) -> Self {
        let last = surface.column_count().saturating_sub(1);
        let zones = core::array::from_fn(|i| {
            let mut zone = Zone::new(0, last);
            zone.set_random_seed(i as u64 + 1);
            zone
        });
        let assigned = core::array::from_fn(|i| ZONES == 1 && i == 0 && surface.column_count() > 0);

        Self {
            surface,
            zones,
            assigned,
            last_now_ms: 0,
        }
    }

    /// Get access to the underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get mutable access to the underlying surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of zones
    pub fn zone_count(&self) -> usize {
        ZONES
    }

    /// Zone `z`, if it exists
    pub fn zone(&self, z: usize) -> Option<&Zone<'a>> {
        self.zones.get(z)
    }

    /// Mutable zone `z`, if it exists
    pub fn zone_mut(&mut self, z: usize) -> Option<&mut Zone<'a>> {
        self.zones.get_mut(z)
    }

    fn zone_checked(&mut self, z: usize) -> Result<&mut Zone<'a>, MarqueeError> {
        self.zones.get_mut(z).ok_or(MarqueeError::ZoneOutOfRange)
    }

    /// Zone `z` must exist and be placed; an unplaced zone still spans the display
    fn check_placed(&self, z: usize) -> Result<(), MarqueeError> {
        match self.assigned.get(z) {
            Some(true) => Ok(()),
            Some(false) => Err(MarqueeError::ZoneNotPlaced),
            None => Err(MarqueeError::ZoneOutOfRange),
        }
    }

    /// Place zone `z` on the columns `start..=end`
    ///
    /// The range must lie on the display and must not overlap another
    /// placed zone.
    pub fn set_zone_columns(&mut self, z: usize, start: u16, end: u16) -> Result<(), MarqueeError> {
        if z >= ZONES {
            return Err(MarqueeError::ZoneOutOfRange);
        }
        if start > end || end >= self.surface.column_count() {
            return Err(MarqueeError::InvalidColumnRange);
        }
        let overlap = self
            .zones
            .iter()
            .zip(self.assigned.iter())
            .enumerate()
            .any(|(i, (zone, &placed))| i != z && placed && zone.overlaps(start, end));
        if overlap {
            return Err(MarqueeError::ZoneOverlap);
        }

        self.zones[z].set_columns(start, end);
        self.assigned[z] = true;
        debug!("zone {} placed on columns {}..={}", z, start, end);
        Ok(())
    }

    /// Place zone `z` on the modules `first..=last`
    pub fn set_zone_modules(
        &mut self,
        z: usize,
        first: u16,
        last: u16,
    ) -> Result<(), MarqueeError> {
        let start = first
            .checked_mul(MODULE_COLUMNS)
            .ok_or(MarqueeError::InvalidColumnRange)?;
        let end = last
            .checked_add(1)
            .and_then(|m| m.checked_mul(MODULE_COLUMNS))
            .map(|c| c - 1)
            .ok_or(MarqueeError::InvalidColumnRange)?;
        self.set_zone_columns(z, start, end)
    }

    /// Check if zone `z` has been placed on the display
    pub fn is_zone_placed(&self, z: usize) -> bool {
        self.assigned.get(z).copied().unwrap_or(false)
    }

    /// Draw the next due frame of every placed zone
    ///
    /// Returns `true` if any zone has completed its animation.
    pub fn animate(&mut self, now_ms: u32) -> bool {
        self.last_now_ms = now_ms;
        self.surface.update(false);

        let mut done = false;
        for (zone, &placed) in self.zones.iter_mut().zip(self.assigned.iter()) {
            if placed {
                done |= zone.animate(&mut self.surface, now_ms);
            }
        }

        self.surface.update(true);
        done
    }

    /// Check if zone `z` has completed its animation
    ///
    /// Returns `false` for a zone that does not exist.
    pub fn zone_status(&self, z: usize) -> bool {
        self.zones.get(z).map_or(false, Zone::is_done)
    }

    /// Restart the animation of zone `z`
    pub fn reset(&mut self, z: usize) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.reset();
        Ok(())
    }

    /// Restart every zone
    pub fn reset_all(&mut self) {
        self.zones.iter_mut().for_each(Zone::reset);
    }

    /// Freeze or continue zone `z`
    pub fn suspend(&mut self, z: usize, suspended: bool) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.suspend(suspended);
        Ok(())
    }

    /// Freeze or continue every zone
    pub fn suspend_all(&mut self, suspended: bool) {
        self.zones.iter_mut().for_each(|zone| zone.suspend(suspended));
    }

    /// Blank the columns of zone `z`
    pub fn clear(&mut self, z: usize) -> Result<(), MarqueeError> {
        self.check_placed(z)?;
        self.zones[z].clear(&mut self.surface);
        Ok(())
    }

    /// Blank the whole display
    pub fn clear_all(&mut self) {
        self.surface.clear_all();
    }

    /// Blank (`true`) or restore the whole display without losing its contents
    pub fn shutdown(&mut self, on: bool) {
        let count = self.surface.column_count();
        if count > 0 {
            self.surface.control(0, count - 1, Control::Shutdown(on));
        }
    }

    /// Apply `f` to every zone
    pub fn for_each_zone(&mut self, f: impl FnMut(&mut Zone<'a>)) {
        self.zones.iter_mut().for_each(f);
    }

    pub fn set_text(&mut self, z: usize, text: &'a str) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_text(text);
        Ok(())
    }

    pub fn set_align(&mut self, z: usize, align: TextAlign) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_align(align);
        Ok(())
    }

    pub fn set_effects(
        &mut self,
        z: usize,
        effect_in: TextEffect,
        effect_out: TextEffect,
    ) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_effects(effect_in, effect_out);
        Ok(())
    }

    pub fn set_speed(&mut self, z: usize, speed_ms: u16) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_speed(speed_ms);
        Ok(())
    }

    pub fn set_pause(&mut self, z: usize, pause_ms: u16) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_pause(pause_ms);
        Ok(())
    }

    pub fn set_char_spacing(&mut self, z: usize, spacing: u8) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_char_spacing(spacing);
        Ok(())
    }

    pub fn set_invert(&mut self, z: usize, inverted: bool) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_invert(inverted);
        Ok(())
    }

    pub fn set_font(&mut self, z: usize, font: Option<FontData>) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_font(font);
        Ok(())
    }

    pub fn set_sprite_data(
        &mut self,
        z: usize,
        entering: Option<SpriteData>,
        exiting: Option<SpriteData>,
    ) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.set_sprite_data(entering, exiting);
        Ok(())
    }

    /// Set the brightness of zone `z`
    pub fn set_intensity(&mut self, z: usize, level: u8) -> Result<(), MarqueeError> {
        self.check_placed(z)?;
        self.zones[z].set_intensity(&mut self.surface, level);
        Ok(())
    }

    /// Set the brightness of every placed zone
    pub fn set_intensity_all(&mut self, level: u8) {
        for (zone, &placed) in self.zones.iter_mut().zip(self.assigned.iter()) {
            if placed {
                zone.set_intensity(&mut self.surface, level);
            }
        }
    }

    /// Replace the glyph for `code` in zone `z`
    pub fn add_char(&mut self, z: usize, code: u8, data: &'a [u8]) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.add_char(code, data)
    }

    /// Restore the font glyph for `code` in zone `z`
    pub fn del_char(&mut self, z: usize, code: u8) -> Result<(), MarqueeError> {
        self.zone_checked(z)?.del_char(code)
    }

    /// Set everything needed to animate `text` in zone `z` and restart it
    #[allow(clippy::too_many_arguments)]
    pub fn display_zone_text(
        &mut self,
        z: usize,
        text: &'a str,
        align: TextAlign,
        speed_ms: u16,
        pause_ms: u16,
        effect_in: TextEffect,
        effect_out: TextEffect,
    ) -> Result<(), MarqueeError> {
        let zone = self.zone_checked(z)?;
        zone.set_text(text);
        zone.set_align(align);
        zone.set_speed(speed_ms);
        zone.set_pause(pause_ms);
        zone.set_effects(effect_in, effect_out);
        zone.reset();
        Ok(())
    }

    /// Animate `text` in zone 0
    pub fn display_text(
        &mut self,
        text: &'a str,
        align: TextAlign,
        speed_ms: u16,
        pause_ms: u16,
        effect_in: TextEffect,
        effect_out: TextEffect,
    ) -> Result<(), MarqueeError> {
        self.display_zone_text(0, text, align, speed_ms, pause_ms, effect_in, effect_out)
    }

    /// Scroll `text` through zone 0 without stopping
    pub fn display_scroll(
        &mut self,
        text: &'a str,
        align: TextAlign,
        effect: TextEffect,
        speed_ms: u16,
    ) -> Result<(), MarqueeError> {
        self.display_zone_text(0, text, align, speed_ms, 0, effect, effect)
    }

    /// Show `text` in zone 0 straight away
    ///
    /// Switches zone 0 to a static print in its current alignment and draws
    /// it before returning. Returns the number of characters printed.
    pub fn print(&mut self, text: &'a str) -> Result<usize, MarqueeError> {
        self.check_placed(0)?;
        let align = self.zones[0].align();
        self.display_text(text, align, 0, 0, TextEffect::Print, TextEffect::NoEffect)?;

        let now = self.last_now_ms;
        for _ in 0..MAX_PRINT_FRAMES {
            self.animate(now);
            if self.zone_status(0) {
                break;
            }
        }
        Ok(text_len(text.as_bytes()))
    }

    /// Place and configure zones from `config`
    ///
    /// Nothing changes when the configuration does not fit the display.
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), MarqueeError> {
        config.validate(self.surface.column_count(), ZONES)?;

        self.assigned = [false; ZONES];
        for (z, layout) in config.zones.iter().enumerate() {
            self.set_zone_columns(z, layout.start, layout.end)?;

            let settings = &layout.settings;
            let zone = &mut self.zones[z];
            zone.set_align(settings.align);
            zone.set_effects(settings.effect_in, settings.effect_out);
            zone.set_speed(settings.speed_ms);
            zone.set_pause(settings.pause_ms);
            zone.set_char_spacing(settings.char_spacing);
            zone.set_invert(settings.inverted);
            zone.set_intensity(&mut self.surface, settings.intensity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ZoneLayout, ZoneSettings};
    use crate::testing::MockSurface;
    use crate::zone::FsmState;

    #[test]
    fn test_single_zone_spans_display() {
        let marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        assert!(marquee.is_zone_placed(0));
        let zone = marquee.zone(0).unwrap();
        assert_eq!((zone.start(), zone.end()), (0, 31));
    }

    #[test]
    fn test_zone_placement() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        assert!(!marquee.is_zone_placed(0));

        marquee.set_zone_modules(0, 0, 1).unwrap();
        assert_eq!(
            marquee.set_zone_columns(1, 15, 20),
            Err(MarqueeError::ZoneOverlap)
        );
        assert_eq!(
            marquee.set_zone_columns(1, 16, 32),
            Err(MarqueeError::InvalidColumnRange)
        );
        assert_eq!(
            marquee.set_zone_columns(1, 20, 16),
            Err(MarqueeError::InvalidColumnRange)
        );
        assert_eq!(
            marquee.set_zone_columns(2, 16, 31),
            Err(MarqueeError::ZoneOutOfRange)
        );
        marquee.set_zone_modules(1, 2, 3).unwrap();

        // moving a zone over its own old columns is fine
        marquee.set_zone_columns(0, 2, 15).unwrap();
        let zone = marquee.zone(1).unwrap();
        assert_eq!((zone.start(), zone.end()), (16, 31));
    }

    #[test]
    fn test_invalid_zone_index() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        assert_eq!(marquee.set_text(1, "HI"), Err(MarqueeError::ZoneOutOfRange));
        assert_eq!(marquee.reset(3), Err(MarqueeError::ZoneOutOfRange));
        assert_eq!(marquee.clear(1), Err(MarqueeError::ZoneOutOfRange));
        assert!(!marquee.zone_status(1));
        assert!(marquee.zone(1).is_none());
    }

    #[test]
    fn test_animate_brackets_updates() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        marquee
            .display_text("HI", TextAlign::Left, 10, 100, TextEffect::Wipe, TextEffect::Wipe)
            .unwrap();

        marquee.animate(100);
        marquee.animate(200);
        assert_eq!(marquee.surface().updates_off, 2);
        assert_eq!(marquee.surface().updates_on, 2);
    }

    #[test]
    fn test_animate_reports_any_done() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        marquee.set_zone_columns(0, 0, 15).unwrap();
        marquee.set_zone_columns(1, 16, 31).unwrap();
        marquee
            .display_zone_text(
                0,
                "I",
                TextAlign::Left,
                10,
                0,
                TextEffect::Print,
                TextEffect::NoEffect,
            )
            .unwrap();
        marquee
            .display_zone_text(1, "HI", TextAlign::Left, 10, 0, TextEffect::Wipe, TextEffect::Wipe)
            .unwrap();

        assert!(!marquee.animate(100));
        assert_eq!(marquee.surface().updates_off, 1);
        assert_eq!(marquee.surface().updates_on, 1);

        // zone 0 finishes while zone 1 is still wiping
        assert!(marquee.animate(200));
        assert!(marquee.zone_status(0));
        assert!(!marquee.zone_status(1));
        assert_eq!(marquee.surface().updates_off, 2);
        assert_eq!(marquee.surface().updates_on, 2);

        // one zone at End, the other mid-wipe
        assert!(marquee.animate(300));
        assert_eq!(marquee.zone(0).unwrap().state(), FsmState::End);
        assert!(!marquee.zone_status(1));
        assert_eq!(marquee.surface().updates_off, 3);
        assert_eq!(marquee.surface().updates_on, 3);

        // text drawn only inside each zone
        assert_eq!(marquee.surface().range(13, 15), &[0x41, 0x7f, 0x41]);
        assert_eq!(marquee.surface().get(31), 0x7f);
    }

    #[test]
    fn test_unplaced_zone_is_skipped() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        marquee.set_text(0, "HI").unwrap();
        marquee.reset(0).unwrap();
        assert!(!marquee.animate(100));
        assert_eq!(marquee.zone(0).unwrap().state(), FsmState::Initialise);
        assert_eq!(marquee.surface().writes, 0);
    }

    fn two_zones_with_text() -> Marquee<'static, MockSurface, 2> {
        let mut marquee = Marquee::new(MockSurface::new());
        marquee.set_zone_columns(0, 16, 31).unwrap();
        marquee
            .display_zone_text(
                0,
                "HI",
                TextAlign::Left,
                0,
                1000,
                TextEffect::Print,
                TextEffect::NoEffect,
            )
            .unwrap();
        marquee.animate(100);
        assert_eq!(marquee.surface().range(28, 31), &[0x7f, 0x08, 0x08, 0x7f]);
        marquee
    }

    #[test]
    fn test_clear_unplaced_zone_is_rejected() {
        let mut marquee = two_zones_with_text();
        let before = marquee.surface().cols;

        assert_eq!(marquee.clear(1), Err(MarqueeError::ZoneNotPlaced));
        assert_eq!(marquee.surface().cols, before);
        assert_eq!(marquee.clear(2), Err(MarqueeError::ZoneOutOfRange));
    }

    #[test]
    fn test_intensity_unplaced_zone_is_rejected() {
        let mut marquee = two_zones_with_text();
        marquee.set_intensity(0, 5).unwrap();

        assert_eq!(marquee.set_intensity(1, 2), Err(MarqueeError::ZoneNotPlaced));
        assert_eq!(marquee.surface().intensity, 5);
        assert_eq!(marquee.zone(0).unwrap().intensity(), 5);
    }

    #[test]
    fn test_print_needs_zone_0_placed() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        marquee.set_zone_columns(1, 16, 31).unwrap();

        assert_eq!(marquee.print("HI"), Err(MarqueeError::ZoneNotPlaced));
        assert_eq!(marquee.surface().writes, 0);
        assert!(marquee.zone(0).unwrap().text().is_none());
    }

    #[test]
    fn test_print_draws_immediately() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        assert_eq!(marquee.print("HI"), Ok(2));
        assert!(marquee.zone_status(0));
        assert_eq!(marquee.surface().range(28, 31), &[0x7f, 0x08, 0x08, 0x7f]);
    }

    #[test]
    fn test_print_keeps_zone_alignment() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        marquee.set_align(0, TextAlign::Right).unwrap();

        assert_eq!(marquee.print("HI"), Ok(2));
        assert_eq!(marquee.zone(0).unwrap().align(), TextAlign::Right);
        assert_eq!(
            marquee.surface().range(0, 7),
            &[0x41, 0x7f, 0x41, 0x00, 0x7f, 0x08, 0x08, 0x7f]
        );
        assert!(marquee.surface().range(8, 31).iter().all(|&c| c == 0));
    }

    #[test]
    fn test_suspend_all() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        marquee
            .display_text("HI", TextAlign::Left, 10, 100, TextEffect::Print, TextEffect::Print)
            .unwrap();
        marquee.suspend_all(true);
        marquee.animate(100);
        assert_eq!(marquee.zone(0).unwrap().state(), FsmState::Initialise);

        marquee.suspend_all(false);
        marquee.animate(200);
        assert_eq!(marquee.zone(0).unwrap().state(), FsmState::Pause);
    }

    #[test]
    fn test_intensity() {
        let mut marquee: Marquee<'_, MockSurface, 1> = Marquee::new(MockSurface::new());
        marquee.set_intensity(0, 3).unwrap();
        assert_eq!(marquee.surface().intensity, 3);
        marquee.set_intensity_all(99);
        assert_eq!(marquee.surface().intensity, 15);
        assert_eq!(marquee.zone(0).unwrap().intensity(), 15);
    }

    #[test]
    fn test_apply_config() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        let mut config = DisplayConfig::new();
        let mut right = ZoneLayout::modules(0, 0).unwrap();
        right.settings = ZoneSettings {
            align: TextAlign::Center,
            speed_ms: 40,
            intensity: 2,
            ..ZoneSettings::default()
        };
        config.zones.push(right).unwrap();
        config.zones.push(ZoneLayout::modules(1, 3).unwrap()).unwrap();

        marquee.apply_config(&config).unwrap();
        assert!(marquee.is_zone_placed(0));
        assert!(marquee.is_zone_placed(1));
        let zone = marquee.zone(0).unwrap();
        assert_eq!((zone.start(), zone.end()), (0, 7));
        assert_eq!(zone.align(), TextAlign::Center);
        assert_eq!(zone.speed(), 40);
        assert_eq!(zone.intensity(), 2);
        let zone = marquee.zone(1).unwrap();
        assert_eq!((zone.start(), zone.end()), (8, 31));
    }

    #[test]
    fn test_apply_config_rejects_bad_layout() {
        let mut marquee: Marquee<'_, MockSurface, 2> = Marquee::new(MockSurface::new());
        marquee.set_zone_columns(0, 0, 7).unwrap();

        let mut config = DisplayConfig::new();
        config.zones.push(ZoneLayout::modules(0, 1).unwrap()).unwrap();
        config.zones.push(ZoneLayout::modules(1, 2).unwrap()).unwrap();
        assert_eq!(marquee.apply_config(&config), Err(MarqueeError::ZoneOverlap));

        // previous placement kept
        assert!(marquee.is_zone_placed(0));
        assert_eq!(marquee.zone(0).unwrap().end(), 7);
    }
}
