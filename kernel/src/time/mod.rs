//! Generic simulation-time representation
//!
//! A family of interchangeable numeric encodings for "time" used by the
//! solver, the event scheduler, and the data-recording subsystem. Three
//! build-time strategies trade exactness against raw speed:
//!
//! - [`DecimalEncoding`]: decimal fixed-point, for exact decimal durations
//!   (milliseconds, nanoseconds) that binary floating point cannot
//!   represent exactly
//! - [`BinaryEncoding`]: binary fixed-point, with shift-and-mask
//!   conversions for the innermost solver loops
//! - [`DoubleEncoding`]: floating passthrough, where the raw value *is*
//!   the seconds value
//!
//! All three satisfy one contract, [`TimeEncoding`], and every call site
//! works through the generic wrapper [`SimTime`], so the compiled-in
//! choice is invisible to the rest of the simulator. Long-running
//! simulations stay numerically stable and scheduler comparisons stay
//! deterministic because the fixed-point strategies do exact integer
//! arithmetic on raw codes.
//!
//! # Critical Invariants
//!
//! 1. Equality and ordering are defined on the raw encoding, never on the
//!    decoded double view
//! 2. Saturation, not failure: out-of-range inputs clamp to the
//!    min/max sentinels silently
//! 3. The scalar-first arithmetic asymmetry (see [`SimTime`]) is by
//!    design and must hold under every strategy

pub mod binary;
pub mod decimal;
pub mod encoding;
pub mod floating;
pub mod representation;
pub mod units;

pub use binary::BinaryEncoding;
pub use decimal::DecimalEncoding;
pub use encoding::{RawValue, TimeEncoding};
pub use floating::DoubleEncoding;
pub use representation::SimTime;
pub use units::{TimeUnit, FAC10, FAC10F};

/// The simulation-wide time type, selected at build time
///
/// Exactly one encoding strategy backs `CoreTime`; the feature precedence
/// is `double-time` > `binary-time` > `decimal-time` (the default,
/// nanosecond-resolution decimal fixed point).
#[cfg(feature = "double-time")]
pub type CoreTime = SimTime<DoubleEncoding>;

/// The simulation-wide time type, selected at build time
///
/// Binary fixed point with 20 fractional bits (about a microsecond of
/// resolution) for shift-speed conversions in the hot solver loops.
#[cfg(all(feature = "binary-time", not(feature = "double-time")))]
pub type CoreTime = SimTime<BinaryEncoding<20>>;

/// The simulation-wide time type, selected at build time
///
/// Decimal fixed point with nine fractional digits: exact nanosecond
/// arithmetic, the default strategy.
#[cfg(not(any(feature = "binary-time", feature = "double-time")))]
pub type CoreTime = SimTime<DecimalEncoding<9>>;
