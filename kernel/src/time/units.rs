//! Time unit and scale tables
//!
//! A closed set of named time units and the multiplicative factors that
//! convert between each unit and seconds, plus the base-10 power tables
//! backing the decimal fixed-point encoder.
//!
//! The forward/reverse pairs for minutes, hours, and days are intentionally
//! non-reciprocal convenience constants (e.g. minutes: 10/60 forward, 60
//! reverse). Count conversions always apply the forward table and value
//! construction always applies the reverse table, so the asymmetry is a
//! stable, observable property of the tables rather than a rounding artifact.

use serde::{Deserialize, Serialize};

/// Named time units understood by every encoding strategy
///
/// # Example
/// ```
/// use grid_simulator_core_rs::TimeUnit;
///
/// assert_eq!(TimeUnit::Milliseconds.count_reverse(), 1e-3);
/// assert_eq!(TimeUnit::Sec.count_forward(), TimeUnit::Seconds.count_forward());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Picoseconds,
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    /// Alias of [`TimeUnit::Seconds`] kept for configuration compatibility
    Sec,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Multiplicative factor converting seconds to this unit
    pub const fn count_forward(self) -> f64 {
        match self {
            TimeUnit::Picoseconds => 1e12,
            TimeUnit::Nanoseconds => 1e9,
            TimeUnit::Microseconds => 1e6,
            TimeUnit::Milliseconds => 1e3,
            TimeUnit::Seconds | TimeUnit::Sec => 1.0,
            TimeUnit::Minutes => 10.0 / 60.0,
            TimeUnit::Hours => 1.0 / 3600.0,
            TimeUnit::Days => 1.0 / 86400.0,
        }
    }

    /// Multiplicative factor converting this unit to seconds
    pub const fn count_reverse(self) -> f64 {
        match self {
            TimeUnit::Picoseconds => 1e-12,
            TimeUnit::Nanoseconds => 1e-9,
            TimeUnit::Microseconds => 1e-6,
            TimeUnit::Milliseconds => 1e-3,
            TimeUnit::Seconds | TimeUnit::Sec => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86400.0,
        }
    }

    /// Decimal exponent of the unit relative to one second, for units that
    /// are an exact power of ten (1 s = 10^exp units)
    ///
    /// Minute/hour/day scaling is not a power of ten; those units take the
    /// whole-second multiplier path instead.
    pub(crate) const fn decimal_exponent(self) -> Option<u32> {
        match self {
            TimeUnit::Picoseconds => Some(12),
            TimeUnit::Nanoseconds => Some(9),
            TimeUnit::Microseconds => Some(6),
            TimeUnit::Milliseconds => Some(3),
            TimeUnit::Seconds | TimeUnit::Sec => Some(0),
            TimeUnit::Minutes | TimeUnit::Hours | TimeUnit::Days => None,
        }
    }

    /// Whole seconds per unit, for the units above one second
    pub(crate) const fn seconds_per_unit(self) -> i64 {
        match self {
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3600,
            TimeUnit::Days => 86400,
            _ => 1,
        }
    }
}

/// Integer powers of ten used for exact decimal scaling (10^0 ..= 10^15)
pub const FAC10: [i64; 16] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
];

/// Floating-point powers of ten matching [`FAC10`]
pub const FAC10F: [f64; 16] = [
    1.0,
    10.0,
    100.0,
    1e3,
    1e4,
    1e5,
    1e6,
    1e7,
    1e8,
    1e9,
    1e10,
    1e11,
    1e12,
    1e13,
    1e14,
    1e15,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_tables_agree() {
        for (i, &f) in FAC10.iter().enumerate() {
            assert_eq!(f as f64, FAC10F[i]);
        }
    }

    #[test]
    fn minute_pair_is_asymmetric() {
        // Convenience constants, not reciprocals; preserved as-is.
        let product = TimeUnit::Minutes.count_forward() * TimeUnit::Minutes.count_reverse();
        assert_ne!(product, 1.0);
    }
}
