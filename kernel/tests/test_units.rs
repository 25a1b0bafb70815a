//! Tests for the unit/scale tables and unit-count conversions

use grid_simulator_core_rs::time::{BinaryEncoding, DecimalEncoding, DoubleEncoding, SimTime};
use grid_simulator_core_rs::TimeUnit;

#[test]
fn test_forward_table_values() {
    assert_eq!(TimeUnit::Picoseconds.count_forward(), 1e12);
    assert_eq!(TimeUnit::Nanoseconds.count_forward(), 1e9);
    assert_eq!(TimeUnit::Microseconds.count_forward(), 1e6);
    assert_eq!(TimeUnit::Milliseconds.count_forward(), 1e3);
    assert_eq!(TimeUnit::Seconds.count_forward(), 1.0);
    assert_eq!(TimeUnit::Sec.count_forward(), 1.0);
    assert_eq!(TimeUnit::Minutes.count_forward(), 10.0 / 60.0);
    assert_eq!(TimeUnit::Hours.count_forward(), 1.0 / 3600.0);
    assert_eq!(TimeUnit::Days.count_forward(), 1.0 / 86400.0);
}

#[test]
fn test_reverse_table_values() {
    assert_eq!(TimeUnit::Picoseconds.count_reverse(), 1e-12);
    assert_eq!(TimeUnit::Nanoseconds.count_reverse(), 1e-9);
    assert_eq!(TimeUnit::Microseconds.count_reverse(), 1e-6);
    assert_eq!(TimeUnit::Milliseconds.count_reverse(), 1e-3);
    assert_eq!(TimeUnit::Seconds.count_reverse(), 1.0);
    assert_eq!(TimeUnit::Sec.count_reverse(), 1.0);
    assert_eq!(TimeUnit::Minutes.count_reverse(), 60.0);
    assert_eq!(TimeUnit::Hours.count_reverse(), 3600.0);
    assert_eq!(TimeUnit::Days.count_reverse(), 86400.0);
}

#[test]
fn test_nanosecond_exactness_at_n9() {
    // Exact integer scaling: no rounding loss through any double view
    let t = SimTime::<DecimalEncoding<9>>::new(1.000000001);
    assert_eq!(t.to_count(TimeUnit::Nanoseconds), 1_000_000_001);
}

#[test]
fn test_decimal_count_scaling_across_exponents() {
    type T9 = SimTime<DecimalEncoding<9>>;

    let t = T9::new(1.5);
    // Unit exponent below N: exact integer divide
    assert_eq!(t.to_count(TimeUnit::Milliseconds), 1500);
    assert_eq!(t.to_count(TimeUnit::Microseconds), 1_500_000);
    assert_eq!(t.to_count(TimeUnit::Seconds), 1);
    // Unit exponent above N: exact integer multiply
    assert_eq!(t.to_count(TimeUnit::Picoseconds), 1_500_000_000_000);

    // Whole-second multiplier path
    let h = T9::new(7200.0);
    assert_eq!(h.to_count(TimeUnit::Hours), 2);
    assert_eq!(h.to_count(TimeUnit::Minutes), 120);
    let d = T9::new(86400.0 * 3.0);
    assert_eq!(d.to_count(TimeUnit::Days), 3);
}

#[test]
fn test_decimal_count_round_trip() {
    type T3 = SimTime<DecimalEncoding<3>>;

    for count in [0_i64, 1, -250, 999, 12_345] {
        let t = T3::from_count(count, TimeUnit::Milliseconds);
        assert_eq!(t.to_count(TimeUnit::Milliseconds), count);
    }

    // Units above one second go through the literal multipliers
    let t = T3::from_count(90, TimeUnit::Minutes);
    assert_eq!(t.time_code(), 90 * 60 * 1000);
    assert_eq!(t.to_count(TimeUnit::Minutes), 90);
    assert_eq!(t.to_count(TimeUnit::Hours), 1);
}

#[test]
fn test_minute_factor_asymmetry_is_preserved() {
    // The minutes forward/reverse pair is a non-reciprocal convenience
    // constant: counts produced through the double view are scaled by
    // 10/60, not 1/60. The exact-integer decimal path is unaffected.
    let t = SimTime::<DoubleEncoding>::new(60.0);
    assert_eq!(t.to_count(TimeUnit::Minutes), 10);

    let b = SimTime::<BinaryEncoding<4>>::new(60.0);
    assert_eq!(b.to_count(TimeUnit::Minutes), 10);

    let d = SimTime::<DecimalEncoding<3>>::new(60.0);
    assert_eq!(d.to_count(TimeUnit::Minutes), 1);
}

#[test]
fn test_binary_counts_round_trip_through_double_view() {
    type B20 = SimTime<BinaryEncoding<20>>;

    // A value representable exactly in both encodings survives the trip
    let t = B20::from_count(500, TimeUnit::Milliseconds);
    assert_eq!(t.to_f64(), 0.5);
    assert_eq!(t.to_count(TimeUnit::Milliseconds), 500);

    // Sub-tick precision is lost silently: a documented trade-off
    let fine = B20::from_count(3, TimeUnit::Nanoseconds);
    assert_eq!(fine.time_code(), 0);
}

#[test]
fn test_double_counts_scale_through_tables() {
    let t = SimTime::<DoubleEncoding>::new(0.25);
    assert_eq!(t.to_count(TimeUnit::Milliseconds), 250);
    assert_eq!(t.to_count(TimeUnit::Microseconds), 250_000);

    let back = SimTime::<DoubleEncoding>::from_count(250, TimeUnit::Milliseconds);
    assert_eq!(back.time_code(), 0.25);
}

#[test]
fn test_sec_alias_matches_seconds() {
    let t = SimTime::<DecimalEncoding<3>>::new(42.75);
    assert_eq!(t.to_count(TimeUnit::Sec), t.to_count(TimeUnit::Seconds));
    assert_eq!(
        SimTime::<DecimalEncoding<3>>::from_count(42, TimeUnit::Sec),
        SimTime::<DecimalEncoding<3>>::from_count(42, TimeUnit::Seconds)
    );
}
