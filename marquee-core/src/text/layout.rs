//! Text placement inside a zone
//!
//! Column indices grow towards the display's left edge, so the left limit
//! of a zone is its `end` column and the right limit is its `start`.

use super::TextAlign;

/// Computed text placement for one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLimits {
    /// Left bound of the laid out text
    pub left: i16,
    /// Right bound of the laid out text
    pub right: i16,
    /// Text width in columns, including inter-character spacing
    pub width: u16,
    /// Text is wider than the zone
    pub overflow: bool,
    /// Column holding the first text column
    first: i16,
}

impl TextLimits {
    /// Lay out `width` columns of text in the zone `start..=end`
    pub fn calculate(start: u16, end: u16, width: u16, align: TextAlign) -> Self {
        let start = start as i16;
        let end = end as i16;
        let zone_width = end - start + 1;
        let w = width.min(i16::MAX as u16) as i16;
        let fits = w <= zone_width;

        let (left, right, first) = if !fits {
            (end, start, end)
        } else {
            match align {
                TextAlign::Left => (end, (end - w).max(start), end),
                TextAlign::Right => ((start + w).min(end), start, start + w - 1),
                TextAlign::Center => {
                    let right = start + (zone_width - w) / 2;
                    let left = (right + w).min(end);
                    (left, right, left)
                }
            }
        };

        Self {
            left,
            right,
            width,
            overflow: !fits,
            first,
        }
    }

    /// Check if the text fits the zone
    pub fn fits(&self) -> bool {
        !self.overflow
    }

    /// Column of the first (left-most) text column
    pub fn first_column(&self) -> i16 {
        self.first
    }

    /// Column of the last (right-most) text column
    ///
    /// Lies outside the zone when the text overflows.
    pub fn last_column(&self) -> i16 {
        self.first - self.width.min(i16::MAX as u16) as i16 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_example() {
        let limits = TextLimits::calculate(0, 15, 8, TextAlign::Center);
        assert!(limits.fits());
        assert_eq!(limits.right, 4);
        assert_eq!(limits.left, 12);
        assert_eq!(limits.first_column(), 12);
        assert_eq!(limits.last_column(), 5);
    }

    #[test]
    fn test_left_and_right() {
        let left = TextLimits::calculate(8, 23, 5, TextAlign::Left);
        assert_eq!((left.left, left.right), (23, 18));
        assert_eq!((left.first_column(), left.last_column()), (23, 19));

        let right = TextLimits::calculate(8, 23, 5, TextAlign::Right);
        assert_eq!((right.left, right.right), (13, 8));
        assert_eq!((right.first_column(), right.last_column()), (12, 8));
    }

    #[test]
    fn test_full_width_text_stays_in_zone() {
        for align in [TextAlign::Left, TextAlign::Center, TextAlign::Right] {
            let limits = TextLimits::calculate(0, 7, 8, align);
            assert!(limits.fits());
            assert_eq!(limits.first_column(), 7);
            assert_eq!(limits.last_column(), 0);
        }
    }

    #[test]
    fn test_overflow_clamps_to_zone() {
        let limits = TextLimits::calculate(0, 7, 20, TextAlign::Right);
        assert!(!limits.fits());
        assert_eq!((limits.left, limits.right), (7, 0));
        assert_eq!(limits.first_column(), 7);
    }

    fn any_align() -> impl Strategy<Value = TextAlign> {
        prop_oneof![
            Just(TextAlign::Left),
            Just(TextAlign::Center),
            Just(TextAlign::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_fitting_text_is_bounded(
            start in 0u16..200,
            zone_width in 1u16..120,
            align in any_align(),
            width_seed in any::<u16>(),
        ) {
            let end = start + zone_width - 1;
            let width = width_seed % (zone_width + 1);
            let limits = TextLimits::calculate(start, end, width, align);

            prop_assert!(limits.fits());
            prop_assert!(limits.right >= start as i16);
            prop_assert!(limits.left <= end as i16);
            prop_assert!(limits.left - limits.right <= width as i16);
            prop_assert!(limits.first_column() <= end as i16);
            prop_assert!(limits.last_column() >= start as i16);

            match align {
                TextAlign::Left => prop_assert_eq!(limits.left, end as i16),
                TextAlign::Right => prop_assert_eq!(limits.right, start as i16),
                TextAlign::Center => {
                    let right_gap = limits.right - start as i16;
                    let left_gap = end as i16 - limits.left;
                    prop_assert!((right_gap - left_gap).abs() <= 1);
                }
            }
        }

        #[test]
        fn prop_overflowing_text_spans_zone(
            start in 0u16..200,
            zone_width in 1u16..120,
            extra in 1u16..500,
            align in any_align(),
        ) {
            let end = start + zone_width - 1;
            let limits = TextLimits::calculate(start, end, zone_width + extra, align);

            prop_assert!(!limits.fits());
            prop_assert_eq!(limits.left, end as i16);
            prop_assert_eq!(limits.right, start as i16);
        }
    }
}
