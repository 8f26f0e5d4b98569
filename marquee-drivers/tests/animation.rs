//! Whole animations on the reference buffer and system font

use marquee_core::config::{DisplayConfig, ZoneLayout, ZoneSettings};
use marquee_core::traits::MatrixSurface;
use marquee_core::{FsmState, Marquee, MarqueeError, TextAlign, TextEffect};
use marquee_drivers::{FontTable, MatrixBuffer, SYSTEM_FONT};

type Display<'a, const Z: usize> = Marquee<'a, MatrixBuffer<32>, Z>;

/// Columns `text` occupies when printed left aligned from column 31
fn printed(text: &str) -> [u8; 32] {
    let font = FontTable::parse(SYSTEM_FONT).unwrap();
    let mut cols = [0u8; 32];
    let mut col = 31usize;
    for (i, &code) in text.as_bytes().iter().enumerate() {
        if i > 0 {
            col -= 1;
        }
        for &data in font.glyph(code).unwrap() {
            cols[col] = data;
            col -= 1;
        }
    }
    cols
}

fn run_until<const Z: usize>(
    display: &mut Display<'_, Z>,
    now: &mut u32,
    z: usize,
    target: FsmState,
) {
    let mut frames = 0;
    while display.zone(z).unwrap().state() != target {
        *now += 100;
        display.animate(*now);
        frames += 1;
        assert!(frames < 1_000, "zone {} never reached {:?}", z, target);
    }
}

#[test]
fn test_print_uses_system_font() {
    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display.print("Hi").unwrap();
    assert_eq!(display.surface().columns(), &printed("Hi"));
    assert_eq!(display.surface().shown(), &printed("Hi"));
}

#[test]
fn test_scroll_left_comes_to_rest() {
    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display
        .display_text(
            "Hi",
            TextAlign::Left,
            10,
            500,
            TextEffect::ScrollLeft,
            TextEffect::ScrollLeft,
        )
        .unwrap();

    let mut now = 0;
    run_until(&mut display, &mut now, 0, FsmState::Pause);
    assert_eq!(display.surface().columns(), &printed("Hi"));
    assert!(!display.surface().is_wraparound());

    run_until(&mut display, &mut now, 0, FsmState::End);
    assert_eq!(display.surface().shown(), &[0u8; 32]);
}

#[test]
fn test_frames_latched_once_per_call() {
    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display
        .display_text("Hi", TextAlign::Center, 10, 100, TextEffect::Dissolve, TextEffect::Dissolve)
        .unwrap();

    for call in 1..=6 {
        display.animate(call * 100);
        assert_eq!(display.surface().flush_count(), call);
        assert_eq!(display.surface().shown(), display.surface().columns());
    }
}

#[test]
fn test_zones_animate_independently() {
    let mut display: Display<'_, 2> = Marquee::new(MatrixBuffer::new());
    display.set_zone_modules(0, 0, 1).unwrap();
    display.set_zone_modules(1, 2, 3).unwrap();
    display
        .display_zone_text(0, "12", TextAlign::Right, 10, 0, TextEffect::Wipe, TextEffect::Wipe)
        .unwrap();
    display
        .display_zone_text(
            1,
            "Hi",
            TextAlign::Left,
            10,
            10_000,
            TextEffect::Print,
            TextEffect::GrowUp,
        )
        .unwrap();

    let mut now = 0;
    run_until(&mut display, &mut now, 0, FsmState::End);
    assert!(display.zone_status(0));
    assert!(!display.zone_status(1));

    // wiped out, zone 1 still holding its text
    assert!(display.surface().columns()[..16].iter().all(|&c| c == 0));
    assert_eq!(display.surface().columns()[16..], printed("Hi")[16..]);
}

#[test]
fn test_inverted_print() {
    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display.set_invert(0, true).unwrap();
    display.print("Hi").unwrap();

    let expected = printed("Hi").map(|c| !c);
    assert_eq!(display.surface().columns(), &expected);
}

#[test]
fn test_zone_font_and_user_chars() {
    static BLOCKS: [u8; 8] = [b'A', b'B', 2, 0xff, 0xff, 2, 0x18, 0x18];
    static HEART: [u8; 6] = [5, 0x0c, 0x1e, 0x3c, 0x1e, 0x0c];

    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display.set_font(0, Some(&BLOCKS)).unwrap();
    display.add_char(0, b'B', &HEART).unwrap();
    display.print("AB").unwrap();

    let cols = display.surface().columns();
    assert_eq!(&cols[30..], &[0xff, 0xff]);
    assert_eq!(cols[29], 0);
    assert_eq!(&cols[24..29], &[0x0c, 0x1e, 0x3c, 0x1e, 0x0c]);
}

#[test]
fn test_config_drives_layout() {
    let mut config = DisplayConfig::new();
    let mut zone = ZoneLayout::modules(0, 3).unwrap();
    zone.settings = ZoneSettings {
        effect_in: TextEffect::Sprite(Default::default()),
        intensity: 12,
        ..ZoneSettings::default()
    };
    config.zones.push(zone).unwrap();

    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display.apply_config(&config).unwrap();
    assert_eq!(display.surface().module(3).unwrap().intensity, 12);

    display.set_text(0, "Hi").unwrap();
    display.reset(0).unwrap();
    let mut now = 0;
    run_until(&mut display, &mut now, 0, FsmState::Pause);
    assert_eq!(display.surface().columns(), &printed("Hi"));
    assert_eq!(display.surface().column_count(), 32);
}

#[test]
fn test_shutdown_keeps_contents() {
    let mut display: Display<'_, 1> = Marquee::new(MatrixBuffer::new());
    display.print("Hi").unwrap();
    display.shutdown(true);
    assert!((0..4).all(|m| display.surface().module(m).unwrap().shutdown));
    assert!(!display.surface().pixel(31, 0));

    display.shutdown(false);
    assert!(display.surface().pixel(31, 0));
    assert_eq!(display.surface().columns(), &printed("Hi"));
}

#[test]
fn test_unplaced_zone_leaves_others_alone() {
    let mut display: Display<'_, 2> = Marquee::new(MatrixBuffer::new());
    assert_eq!(display.print("Hi"), Err(MarqueeError::ZoneNotPlaced));
    assert_eq!(display.surface().columns(), &[0u8; 32]);

    display.set_zone_modules(0, 2, 3).unwrap();
    display
        .display_zone_text(
            0,
            "Hi",
            TextAlign::Left,
            10,
            10_000,
            TextEffect::Print,
            TextEffect::NoEffect,
        )
        .unwrap();
    let mut now = 0;
    run_until(&mut display, &mut now, 0, FsmState::Pause);
    assert_eq!(display.surface().columns(), &printed("Hi"));

    assert_eq!(display.clear(1), Err(MarqueeError::ZoneNotPlaced));
    assert_eq!(display.set_intensity(1, 2), Err(MarqueeError::ZoneNotPlaced));
    assert_eq!(display.surface().columns(), &printed("Hi"));
    assert_eq!(display.surface().module(3).unwrap().intensity, 7);
}
