//! Decimal fixed-point time encoding
//!
//! Represents time as a signed 64-bit count of 10^-N seconds. Decimal
//! durations with up to N fractional digits (exact milliseconds, exact
//! nanoseconds) encode without floating-point error, and unit-count
//! conversions against power-of-ten units are exact integer multiplies and
//! divides whenever the unit's exponent is comparable to N.

use crate::time::encoding::{TimeEncoding, MIN_SENTINEL_REGION};
use crate::time::units::{TimeUnit, FAC10, FAC10F};

/// Fixed-point encoding with `N` decimal fractional digits
/// (1 tick = 10^-N seconds)
///
/// `N` may range from 0 to 15; constant evaluation rejects anything larger.
///
/// # Example
/// ```
/// use grid_simulator_core_rs::time::{DecimalEncoding, TimeEncoding};
///
/// // Three decimal digits: 1.250 s is exactly raw 1250
/// assert_eq!(DecimalEncoding::<3>::convert(1.250), 1250);
/// assert_eq!(DecimalEncoding::<3>::to_f64(1250), 1.250);
/// ```
pub struct DecimalEncoding<const N: u32>;

impl<const N: u32> DecimalEncoding<N> {
    /// Integer ticks per second
    const I_FACTOR: i64 = FAC10[N as usize];
    const D_FACTOR: f64 = FAC10F[N as usize];
    const DDIV_FACTOR: f64 = 1.0 / Self::D_FACTOR;
}

impl<const N: u32> TimeEncoding for DecimalEncoding<N> {
    type Base = i64;

    /// Round the scaled value to the nearest tick
    ///
    /// Inputs in the negative sentinel region saturate to `min_val`; the
    /// saturating float-to-int cast clamps encodes beyond the raw range.
    fn convert(seconds: f64) -> i64 {
        if seconds > MIN_SENTINEL_REGION {
            (seconds * Self::D_FACTOR).round() as i64
        } else {
            Self::min_val()
        }
    }

    /// Integer-divide for the whole seconds, real-divide the remainder
    ///
    /// Exact for any value carrying at most N decimal digits.
    fn to_f64(raw: i64) -> f64 {
        (raw / Self::I_FACTOR) as f64 + (raw % Self::I_FACTOR) as f64 * Self::DDIV_FACTOR
    }

    fn zero_val() -> i64 {
        0
    }

    /// One tick, i.e. 10^-N seconds
    fn epsilon() -> i64 {
        1
    }

    fn min_val() -> i64 {
        i64::MIN
    }

    fn max_val() -> i64 {
        i64::MAX
    }

    /// Whole seconds, truncated toward zero (integer division)
    fn seconds(raw: i64) -> i64 {
        raw / Self::I_FACTOR
    }

    /// Exact integer scaling when the unit is a power of ten, the literal
    /// whole-second multipliers for minutes/hours/days
    fn to_count(raw: i64, unit: TimeUnit) -> i64 {
        match unit.decimal_exponent() {
            Some(exp) if N >= exp => raw / FAC10[(N - exp) as usize],
            Some(exp) => raw * FAC10[(exp - N) as usize],
            None => raw / (Self::I_FACTOR * unit.seconds_per_unit()),
        }
    }

    fn from_count(count: i64, unit: TimeUnit) -> i64 {
        match unit.decimal_exponent() {
            Some(exp) if N >= exp => count * FAC10[(N - exp) as usize],
            Some(exp) => count / FAC10[(exp - N) as usize],
            None => count * unit.seconds_per_unit() * Self::I_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_decimals_are_exact() {
        assert_eq!(DecimalEncoding::<3>::convert(8.2), 8200);
        assert_eq!(DecimalEncoding::<3>::to_f64(8200), 8.2);
        assert_eq!(DecimalEncoding::<9>::convert(0.000000001), 1);
    }

    #[test]
    fn nanosecond_counts_are_exact_at_n9() {
        let raw = DecimalEncoding::<9>::convert(1.000000001);
        assert_eq!(raw, 1_000_000_001);
        assert_eq!(
            DecimalEncoding::<9>::to_count(raw, TimeUnit::Nanoseconds),
            1_000_000_001
        );
    }

    #[test]
    fn sentinel_region_saturates_to_min() {
        assert_eq!(DecimalEncoding::<9>::convert(-1e12), i64::MIN);
        assert_eq!(DecimalEncoding::<9>::convert(-5e15), i64::MIN);
    }

    #[test]
    fn negative_seconds_truncate_toward_zero() {
        let raw = DecimalEncoding::<3>::convert(-1.5);
        assert_eq!(raw, -1500);
        assert_eq!(DecimalEncoding::<3>::seconds(raw), -1);
    }
}
