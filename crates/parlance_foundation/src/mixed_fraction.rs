//! Whole-plus-proper-fraction decomposition of decimal values.
//!
//! Used to turn e.g. `4.75` into "four and three quarters" for speech, by
//! testing a fixed list of candidate denominators for closeness.

use crate::util::{is_whole, round_to_i64, WHOLE_FRACTION_ACCURACY};

/// A decimal value decomposed into sign, whole part and a proper fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixedFraction {
    /// True when the original number was negative.
    pub negative: bool,
    /// The whole part, always non-negative.
    pub whole: i64,
    /// The numerator, always non-negative; zero when the number is whole.
    pub numerator: u32,
    /// The denominator; `1` when the numerator is zero, otherwise `> 1`.
    pub denominator: u32,
}

impl MixedFraction {
    /// The denominators tried by default, in order of preference.
    pub const DEFAULT_DENOMINATORS: [u32; 19] = [
        2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    ];

    /// Decomposes `number` into a mixed fraction using the given denominators.
    ///
    /// Each candidate denominator (all must be `> 1`) is tried in order; the
    /// first one whose scaled fractional part lands within tolerance of a
    /// whole numerator wins. E.g. `4.500002` becomes whole `4`, numerator
    /// `1`, denominator `2`.
    ///
    /// Returns `None` when the magnitude does not fit a 64-bit integer, or
    /// when no candidate denominator yields a close enough approximation.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn of(number: f64, denominators: &[u32]) -> Option<Self> {
        if !number.is_finite() || number.abs() >= i64::MAX as f64 {
            return None; // number is too large to fit
        }
        if is_whole(number, WHOLE_FRACTION_ACCURACY) {
            return Some(Self {
                negative: number < 0.0,
                whole: round_to_i64(number.abs()),
                numerator: 0,
                denominator: 1,
            });
        }

        let number_fraction = (number % 1.0).abs();
        for &denominator in denominators {
            let numerator = number_fraction * f64::from(denominator);
            if is_whole(numerator, WHOLE_FRACTION_ACCURACY) {
                return Some(Self {
                    negative: number < 0.0,
                    whole: number.abs().trunc() as i64,
                    numerator: u32::try_from(round_to_i64(numerator)).ok()?,
                    denominator,
                });
            }
        }

        None
    }
}
