//! Binary fixed-point time encoding
//!
//! Represents time as a signed 64-bit count of 1/2^N seconds. Conversions
//! to and from floating point reduce to shifts and masks, which keeps the
//! innermost solver loops at raw-integer speed.
//!
//! Unit-count conversions round-trip through the decoded double view; for
//! this strategy they are a known precision trade-off, not an exact path.
//! Prefer [`DecimalEncoding`](crate::time::DecimalEncoding) when exact
//! decimal counts (e.g. exact milliseconds) matter more than shift speed.

use crate::time::encoding::{TimeEncoding, MIN_SENTINEL_REGION};
use crate::time::units::TimeUnit;

/// Fixed-point encoding with `N` fractional bits (1 tick = 2^-N seconds)
///
/// `N` must leave room for the integer part: constant evaluation rejects
/// `N` of 63 or more.
///
/// # Example
/// ```
/// use grid_simulator_core_rs::time::{BinaryEncoding, TimeEncoding};
///
/// // One tick of a 4-fractional-bit encoding is 1/16 s
/// assert_eq!(BinaryEncoding::<4>::to_f64(1), 0.0625);
/// assert_eq!(BinaryEncoding::<4>::convert(1.5), 24);
/// ```
pub struct BinaryEncoding<const N: u32>;

impl<const N: u32> BinaryEncoding<N> {
    const FRAC_MASK: i64 = (1i64 << N) - 1;
    const MULTIPLIER: f64 = (1i64 << N) as f64;
    const DIVISOR: f64 = 1.0 / Self::MULTIPLIER;
}

impl<const N: u32> TimeEncoding for BinaryEncoding<N> {
    type Base = i64;

    /// Split the seconds value into integer and fractional parts and
    /// reassemble as `(int << N) + round(frac * 2^N)`
    ///
    /// Inputs in the negative sentinel region saturate to `min_val`; values
    /// whose encoding would overflow the raw range saturate at either end.
    fn convert(seconds: f64) -> i64 {
        if seconds <= MIN_SENTINEL_REGION {
            return Self::min_val();
        }
        let int_part = seconds.trunc();
        let frac = seconds - int_part;
        let raw = ((int_part as i128) << N) + (frac * Self::MULTIPLIER).round() as i128;
        raw.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    fn to_f64(raw: i64) -> f64 {
        (raw >> N) as f64 + (raw & Self::FRAC_MASK) as f64 * Self::DIVISOR
    }

    fn zero_val() -> i64 {
        0
    }

    /// One tick, i.e. 2^-N seconds
    fn epsilon() -> i64 {
        1
    }

    fn min_val() -> i64 {
        i64::MIN
    }

    fn max_val() -> i64 {
        i64::MAX
    }

    /// Whole seconds, truncated toward negative infinity (arithmetic shift)
    fn seconds(raw: i64) -> i64 {
        raw >> N
    }

    fn to_count(raw: i64, unit: TimeUnit) -> i64 {
        (Self::to_f64(raw) * unit.count_forward()) as i64
    }

    fn from_count(count: i64, unit: TimeUnit) -> i64 {
        Self::convert(count as f64 * unit.count_reverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_whole_and_fractional_parts() {
        assert_eq!(BinaryEncoding::<4>::convert(1.0), 16);
        assert_eq!(BinaryEncoding::<4>::convert(2.3125), 37);
        assert_eq!(BinaryEncoding::<4>::to_f64(37), 2.3125);
    }

    #[test]
    fn negative_values_use_arithmetic_shift() {
        let raw = BinaryEncoding::<4>::convert(-1.5);
        assert_eq!(raw, -24);
        assert_eq!(BinaryEncoding::<4>::to_f64(raw), -1.5);
        // Floor semantics: -1.5 s holds -2 whole seconds under >>
        assert_eq!(BinaryEncoding::<4>::seconds(raw), -2);
    }

    #[test]
    fn sentinel_region_saturates_to_min() {
        assert_eq!(BinaryEncoding::<4>::convert(-1e12), i64::MIN);
        assert_eq!(BinaryEncoding::<4>::convert(-2e12), i64::MIN);
        assert!(BinaryEncoding::<4>::convert(-0.999e12) > i64::MIN);
    }

    #[test]
    fn oversized_inputs_saturate_to_max() {
        assert_eq!(BinaryEncoding::<40>::convert(1e10), i64::MAX);
    }
}
