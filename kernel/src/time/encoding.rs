//! Encoding strategy contract
//!
//! A time encoding is a stateless policy that maps between a real number of
//! seconds and a raw backing value (a signed integer for the fixed-point
//! strategies, a real for the passthrough strategy). The policy also reports
//! the four sentinel raw values and converts to/from integer counts in a
//! named unit.
//!
//! The strategy is chosen once at build time; every call site works through
//! [`SimTime`](crate::time::SimTime), which is generic over the policy, so
//! the choice never appears in solver or scheduler code.

use std::ops::{Add, Rem, Sub};

use crate::time::units::TimeUnit;

/// Raw backing value of a time encoding
///
/// Covers exactly the arithmetic the generic wrapper performs directly on
/// raw codes: addition, subtraction, remainder, ordering, and scaling by an
/// integer factor. Implemented for `i64` (fixed-point strategies) and `f64`
/// (passthrough strategy).
pub trait RawValue:
    Copy + PartialEq + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Rem<Output = Self>
{
    /// True when the representation is an integer type, in which case raw
    /// remainder and integer scaling are exact
    const INTEGRAL: bool;

    /// Multiply the raw code by an integer factor
    fn mul_int(self, rhs: i64) -> Self;

    /// Divide the raw code by an integer factor
    fn div_int(self, rhs: i64) -> Self;
}

impl RawValue for i64 {
    const INTEGRAL: bool = true;

    fn mul_int(self, rhs: i64) -> Self {
        self * rhs
    }

    fn div_int(self, rhs: i64) -> Self {
        self / rhs
    }
}

impl RawValue for f64 {
    const INTEGRAL: bool = false;

    fn mul_int(self, rhs: i64) -> Self {
        self * rhs as f64
    }

    fn div_int(self, rhs: i64) -> Self {
        self / rhs as f64
    }
}

/// A time encoding strategy
///
/// All operations are total: out-of-range inputs saturate to the min/max
/// sentinels and granularity loss is silent. No operation fails.
///
/// # Contract
///
/// - `convert` and `to_f64` round-trip within the encoding's granularity
/// - `zero_val()` encodes 0 seconds; `epsilon()` is the smallest positive
///   representable increment; `min_val()`/`max_val()` order below/above
///   every ordinary value
/// - `to_count`/`from_count` use the strategy's own rounding rule; callers
///   must not assume a uniform rule across strategies
pub trait TimeEncoding {
    /// The raw representation backing a time value
    type Base: RawValue;

    /// Encode a real number of seconds
    fn convert(seconds: f64) -> Self::Base;

    /// Decode a raw value to a real number of seconds
    fn to_f64(raw: Self::Base) -> f64;

    /// The raw encoding of zero seconds
    fn zero_val() -> Self::Base;

    /// The smallest representable positive increment (one tick)
    fn epsilon() -> Self::Base;

    /// The raw sentinel standing in for "effectively negative infinity"
    fn min_val() -> Self::Base;

    /// The raw sentinel standing in for "effectively positive infinity"
    fn max_val() -> Self::Base;

    /// Whole seconds in the raw value (strategy-specific truncation)
    fn seconds(raw: Self::Base) -> i64;

    /// Integer count of the given unit contained in the raw value
    fn to_count(raw: Self::Base, unit: TimeUnit) -> i64;

    /// Encode an integer count of the given unit
    fn from_count(count: i64, unit: TimeUnit) -> Self::Base;
}

/// Inputs at or below this many seconds are treated as being in the
/// "no meaningful time" sentinel region and saturate to `min_val`
pub(crate) const MIN_SENTINEL_REGION: f64 = -1e12;
