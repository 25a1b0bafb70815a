//! Generic time value wrapper
//!
//! [`SimTime`] is the one time type the rest of the simulator interacts
//! with. It owns a single raw encoded value under one compile-time-selected
//! [`TimeEncoding`] and exposes an arithmetic and comparison surface that is
//! indistinguishable from plain real-number time at every call site.
//!
//! # Asymmetric arithmetic
//!
//! Multiplication and division are deliberately type-aware and
//! order-sensitive:
//!
//! - `time * scalar` and `time / scalar` produce a **time**
//! - `scalar * time` and `scalar / time` produce a plain **f64**: writing
//!   the scalar first is the documented way to mean "this scalar multiplied
//!   by the numeric value of this time" without creating a new time value
//! - `time / time` is a dimensionless ratio and produces a plain **f64**
//!
//! Addition and subtraction mix freely with `f64` on either side and always
//! produce a time.
//!
//! # Identity
//!
//! Two time values are equal iff their raw encodings are equal. Comparisons
//! against a plain `f64` first encode the number under the same strategy,
//! so they agree with time-to-time comparisons exactly. Identity is *not*
//! defined on the decoded view: decoding can map distinct near-sentinel raw
//! values onto the same double.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::time::encoding::{RawValue, TimeEncoding};
use crate::time::units::TimeUnit;

/// A simulation time value under the encoding strategy `E`
///
/// A pure value type: no identity beyond its raw encoded value, no shared
/// state, `Copy`. Concurrent reads need no synchronization; mutating the
/// same instance from two threads is the owner's responsibility to
/// serialize.
///
/// # Example
/// ```
/// use grid_simulator_core_rs::time::{DecimalEncoding, SimTime};
///
/// type Time = SimTime<DecimalEncoding<9>>;
///
/// let step = Time::new(0.001);
/// let mut now = Time::zero();
/// for _ in 0..250 {
///     now += step;
/// }
/// // Exact decimal arithmetic: no drift after 250 millisecond steps
/// assert_eq!(now, 0.25);
/// ```
pub struct SimTime<E: TimeEncoding> {
    timecode: E::Base,
    _encoding: PhantomData<E>,
}

impl<E: TimeEncoding> SimTime<E> {
    fn from_raw(timecode: E::Base) -> Self {
        Self {
            timecode,
            _encoding: PhantomData,
        }
    }

    /// Create a time value from a real number of seconds
    ///
    /// # Example
    /// ```
    /// use grid_simulator_core_rs::time::{DecimalEncoding, SimTime};
    ///
    /// let t = SimTime::<DecimalEncoding<3>>::new(1.250);
    /// assert_eq!(t.time_code(), 1250);
    /// ```
    pub fn new(seconds: f64) -> Self {
        Self::from_raw(E::convert(seconds))
    }

    /// Create a time value from an integer count of a named unit
    ///
    /// # Example
    /// ```
    /// use grid_simulator_core_rs::time::{DecimalEncoding, SimTime};
    /// use grid_simulator_core_rs::TimeUnit;
    ///
    /// let t = SimTime::<DecimalEncoding<9>>::from_count(250, TimeUnit::Milliseconds);
    /// assert_eq!(t, 0.25);
    /// ```
    pub fn from_count(count: i64, unit: TimeUnit) -> Self {
        Self::from_raw(E::from_count(count, unit))
    }

    /// The zero sentinel
    pub fn zero() -> Self {
        Self::from_raw(E::zero_val())
    }

    /// The smallest representable positive increment (one tick)
    pub fn epsilon() -> Self {
        Self::from_raw(E::epsilon())
    }

    /// The minimum representable value; stands in for "effectively
    /// negative infinity"
    pub fn min_val() -> Self {
        Self::from_raw(E::min_val())
    }

    /// The maximum representable value; stands in for "never" / "infinite
    /// time" in scheduler code
    pub fn max_val() -> Self {
        Self::from_raw(E::max_val())
    }

    /// Whole seconds, truncated per the strategy's rule
    ///
    /// The binary strategy truncates toward negative infinity (arithmetic
    /// shift); the decimal and floating strategies truncate toward zero.
    pub fn seconds(&self) -> i64 {
        E::seconds(self.timecode)
    }

    /// Integer count of the given unit, using the strategy's own
    /// rounding/truncation rule
    ///
    /// Callers must not assume a uniform rounding rule across strategies:
    /// the decimal strategy scales power-of-ten units exactly, the others
    /// truncate through the decoded double view.
    pub fn to_count(&self, unit: TimeUnit) -> i64 {
        E::to_count(self.timecode, unit)
    }

    /// The decoded value as a real number of seconds
    pub fn to_f64(&self) -> f64 {
        E::to_f64(self.timecode)
    }

    /// The underlying raw encoded value
    pub fn time_code(&self) -> E::Base {
        self.timecode
    }

    /// Overwrite the raw encoded value directly
    ///
    /// Expert-only escape hatch: bypasses all `convert` normalization. The
    /// caller is responsible for supplying a value consistent with the
    /// compiled-in strategy.
    pub fn set_time_code(&mut self, timecode: E::Base) {
        self.timecode = timecode;
    }

    /// Build a time value from a raw encoded value
    ///
    /// Same caveat as [`SimTime::set_time_code`]: no normalization is
    /// applied.
    pub fn from_time_code(timecode: E::Base) -> Self {
        Self::from_raw(timecode)
    }
}

impl<E: TimeEncoding> Clone for SimTime<E> {
    fn clone(&self) -> Self {
        Self::from_raw(self.timecode)
    }
}

impl<E: TimeEncoding> Copy for SimTime<E> {}

impl<E: TimeEncoding> Default for SimTime<E> {
    /// Default-construct to the strategy's zero sentinel
    fn default() -> Self {
        Self::zero()
    }
}

impl<E: TimeEncoding> fmt::Debug for SimTime<E>
where
    E::Base: fmt::Debug,
{
    /// Renders the decoded seconds next to the raw code; the decoded view
    /// is computed on demand rather than stored
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimTime")
            .field("timecode", &self.timecode)
            .field("seconds", &E::to_f64(self.timecode))
            .finish()
    }
}

impl<E: TimeEncoding> From<f64> for SimTime<E> {
    fn from(seconds: f64) -> Self {
        Self::new(seconds)
    }
}

impl<E: TimeEncoding> From<SimTime<E>> for f64 {
    fn from(t: SimTime<E>) -> f64 {
        t.to_f64()
    }
}

// --- serde: the raw encoding is the canonical serialized form ---

impl<E: TimeEncoding> Serialize for SimTime<E>
where
    E::Base: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.timecode.serialize(serializer)
    }
}

impl<'de, E: TimeEncoding> Deserialize<'de> for SimTime<E>
where
    E::Base: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_raw(E::Base::deserialize(deserializer)?))
    }
}

// --- comparisons: defined on the raw encoded value ---

impl<E: TimeEncoding> PartialEq for SimTime<E> {
    fn eq(&self, other: &Self) -> bool {
        self.timecode == other.timecode
    }
}

impl<E: TimeEncoding> PartialOrd for SimTime<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.timecode.partial_cmp(&other.timecode)
    }
}

impl<E: TimeEncoding> PartialEq<f64> for SimTime<E> {
    /// The number is encoded under the same strategy before comparing
    fn eq(&self, other: &f64) -> bool {
        self.timecode == E::convert(*other)
    }
}

impl<E: TimeEncoding> PartialOrd<f64> for SimTime<E> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.timecode.partial_cmp(&E::convert(*other))
    }
}

impl<E: TimeEncoding> PartialEq<SimTime<E>> for f64 {
    fn eq(&self, other: &SimTime<E>) -> bool {
        E::convert(*self) == other.timecode
    }
}

impl<E: TimeEncoding> PartialOrd<SimTime<E>> for f64 {
    fn partial_cmp(&self, other: &SimTime<E>) -> Option<Ordering> {
        E::convert(*self).partial_cmp(&other.timecode)
    }
}

// --- additive arithmetic: raw value addition, time on either side ---

impl<E: TimeEncoding> Add for SimTime<E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.timecode + rhs.timecode)
    }
}

impl<E: TimeEncoding> Sub for SimTime<E> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.timecode - rhs.timecode)
    }
}

impl<E: TimeEncoding> Add<f64> for SimTime<E> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self + Self::new(rhs)
    }
}

impl<E: TimeEncoding> Sub<f64> for SimTime<E> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self - Self::new(rhs)
    }
}

impl<E: TimeEncoding> Add<SimTime<E>> for f64 {
    type Output = SimTime<E>;

    fn add(self, rhs: SimTime<E>) -> SimTime<E> {
        SimTime::new(self) + rhs
    }
}

impl<E: TimeEncoding> Sub<SimTime<E>> for f64 {
    type Output = SimTime<E>;

    fn sub(self, rhs: SimTime<E>) -> SimTime<E> {
        SimTime::new(self) - rhs
    }
}

impl<E: TimeEncoding> AddAssign for SimTime<E> {
    fn add_assign(&mut self, rhs: Self) {
        self.timecode = self.timecode + rhs.timecode;
    }
}

impl<E: TimeEncoding> SubAssign for SimTime<E> {
    fn sub_assign(&mut self, rhs: Self) {
        self.timecode = self.timecode - rhs.timecode;
    }
}

impl<E: TimeEncoding> AddAssign<f64> for SimTime<E> {
    fn add_assign(&mut self, rhs: f64) {
        *self += Self::new(rhs);
    }
}

impl<E: TimeEncoding> SubAssign<f64> for SimTime<E> {
    fn sub_assign(&mut self, rhs: f64) {
        *self -= Self::new(rhs);
    }
}

// --- scaling: integer factors act on the raw value (exact for the
// fixed-point strategies), real factors re-encode through seconds ---

impl<E: TimeEncoding> Mul<i64> for SimTime<E> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::from_raw(self.timecode.mul_int(rhs))
    }
}

impl<E: TimeEncoding> Div<i64> for SimTime<E> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self::from_raw(self.timecode.div_int(rhs))
    }
}

impl<E: TimeEncoding> Mul<f64> for SimTime<E> {
    type Output = Self;

    /// Precision is bounded by the strategy's `convert`, not by raw-value
    /// scaling
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.to_f64() * rhs)
    }
}

impl<E: TimeEncoding> Div<f64> for SimTime<E> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.to_f64() / rhs)
    }
}

impl<E: TimeEncoding> MulAssign<i64> for SimTime<E> {
    fn mul_assign(&mut self, rhs: i64) {
        self.timecode = self.timecode.mul_int(rhs);
    }
}

impl<E: TimeEncoding> DivAssign<i64> for SimTime<E> {
    fn div_assign(&mut self, rhs: i64) {
        self.timecode = self.timecode.div_int(rhs);
    }
}

impl<E: TimeEncoding> MulAssign<f64> for SimTime<E> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<E: TimeEncoding> DivAssign<f64> for SimTime<E> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// --- the asymmetric surface: scalar-first multiplication, division by a
// time, and time/time ratios are plain numbers, never times ---

impl<E: TimeEncoding> Mul<SimTime<E>> for f64 {
    type Output = f64;

    /// A scalar written first multiplies the *numeric value* of the time
    /// and yields a plain number
    fn mul(self, rhs: SimTime<E>) -> f64 {
        self * rhs.to_f64()
    }
}

impl<E: TimeEncoding> Div<SimTime<E>> for f64 {
    type Output = f64;

    /// Ratio semantics: a number divided by a time is a plain number
    fn div(self, rhs: SimTime<E>) -> f64 {
        self / rhs.to_f64()
    }
}

impl<E: TimeEncoding> Div for SimTime<E> {
    type Output = f64;

    /// The ratio of two durations is dimensionless, never a time
    fn div(self, rhs: Self) -> f64 {
        self.to_f64() / rhs.to_f64()
    }
}

// --- modulo ---

impl<E: TimeEncoding> Rem for SimTime<E> {
    type Output = Self;

    /// Exact integer remainder on raw values for the fixed-point
    /// strategies; real-valued remainder re-encoded for the passthrough
    /// strategy
    fn rem(self, rhs: Self) -> Self {
        if <E::Base as RawValue>::INTEGRAL {
            Self::from_raw(self.timecode % rhs.timecode)
        } else {
            Self::new(self.to_f64() % rhs.to_f64())
        }
    }
}

impl<E: TimeEncoding> RemAssign for SimTime<E> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}
