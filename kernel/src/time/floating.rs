//! Floating passthrough time encoding
//!
//! The raw value is the seconds value itself. The sentinels are oversized
//! literal constants rather than the platform's true numeric extremes, so
//! ordinary arithmetic against a "far future" or "far past" sentinel cannot
//! silently overflow into an ordinary-looking value.

use crate::time::encoding::TimeEncoding;
use crate::time::units::TimeUnit;

/// Identity encoding over `f64` seconds
///
/// # Example
/// ```
/// use grid_simulator_core_rs::time::{DoubleEncoding, TimeEncoding};
///
/// assert_eq!(DoubleEncoding::convert(2.5), 2.5);
/// assert_eq!(DoubleEncoding::seconds(2.5), 2);
/// ```
pub struct DoubleEncoding;

impl TimeEncoding for DoubleEncoding {
    type Base = f64;

    fn convert(seconds: f64) -> f64 {
        seconds
    }

    fn to_f64(raw: f64) -> f64 {
        raw
    }

    fn zero_val() -> f64 {
        0.0
    }

    fn epsilon() -> f64 {
        1e-86
    }

    fn min_val() -> f64 {
        -1.456e47
    }

    fn max_val() -> f64 {
        1e49
    }

    /// Whole seconds, truncated toward zero
    fn seconds(raw: f64) -> i64 {
        raw as i64
    }

    fn to_count(raw: f64, unit: TimeUnit) -> i64 {
        (raw * unit.count_forward()) as i64
    }

    fn from_count(count: i64, unit: TimeUnit) -> f64 {
        count as f64 * unit.count_reverse()
    }
}
