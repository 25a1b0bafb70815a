//! Property tests for the encoding strategies
//!
//! Round-trip, exactness, and sentinel properties over generated inputs,
//! plus the serde form (the raw encoding is the canonical serialized
//! representation).

use proptest::prelude::*;

use grid_simulator_core_rs::time::{
    BinaryEncoding, DecimalEncoding, DoubleEncoding, SimTime, TimeEncoding,
};
use grid_simulator_core_rs::CoreTime;

proptest! {
    /// Decoding any in-range decimal raw value and re-encoding it is the
    /// identity: decimal durations carry no floating error.
    #[test]
    fn decimal_raw_round_trip_is_exact(raw in -1_000_000_000_000_000i64..1_000_000_000_000_000i64) {
        let decoded = DecimalEncoding::<9>::to_f64(raw);
        prop_assert_eq!(DecimalEncoding::<9>::convert(decoded), raw);
    }

    /// Values with at most N decimal digits encode to exactly the scaled
    /// integer.
    #[test]
    fn decimal_short_decimals_encode_exactly(millis in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let seconds = millis as f64 / 1e3;
        prop_assert_eq!(DecimalEncoding::<3>::convert(seconds), millis);
    }

    /// Binary round trips within one tick of granularity.
    #[test]
    fn binary_round_trip_within_granularity(x in -1.0e6f64..1.0e6) {
        let decoded = BinaryEncoding::<4>::to_f64(BinaryEncoding::<4>::convert(x));
        prop_assert!((decoded - x).abs() <= 1.0 / 16.0);
    }

    /// Binary raw codes decode and re-encode to themselves.
    #[test]
    fn binary_raw_round_trip_is_exact(raw in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let decoded = BinaryEncoding::<4>::to_f64(raw);
        prop_assert_eq!(BinaryEncoding::<4>::convert(decoded), raw);
    }

    /// The passthrough encoding is the identity.
    #[test]
    fn double_encoding_is_identity(x in -1.0e12f64..1.0e12) {
        prop_assert_eq!(DoubleEncoding::convert(x), x);
        prop_assert_eq!(DoubleEncoding::to_f64(x), x);
    }

    /// Every ordinary value sits strictly between the min and max
    /// sentinels, under every strategy.
    #[test]
    fn sentinels_bound_ordinary_values(x in -1.0e9f64..1.0e9) {
        let d = SimTime::<DecimalEncoding<9>>::new(x);
        prop_assert!(SimTime::<DecimalEncoding<9>>::min_val() < d);
        prop_assert!(d < SimTime::<DecimalEncoding<9>>::max_val());

        let b = SimTime::<BinaryEncoding<4>>::new(x);
        prop_assert!(SimTime::<BinaryEncoding<4>>::min_val() < b);
        prop_assert!(b < SimTime::<BinaryEncoding<4>>::max_val());

        let f = SimTime::<DoubleEncoding>::new(x);
        prop_assert!(SimTime::<DoubleEncoding>::min_val() < f);
        prop_assert!(f < SimTime::<DoubleEncoding>::max_val());
    }

    /// Comparisons against plain numbers agree from either side.
    #[test]
    fn comparisons_with_numbers_are_symmetric(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
        let t = SimTime::<DecimalEncoding<9>>::new(x);
        prop_assert_eq!(t == y, y == t);
        prop_assert_eq!(t < y, y > t);
        prop_assert_eq!(t <= y, y >= t);
    }

    /// Integer-scalar scaling is exact raw arithmetic for the fixed-point
    /// strategies.
    #[test]
    fn integer_scaling_is_exact(millis in -1_000_000i64..1_000_000, factor in 1i64..1000) {
        let t = SimTime::<DecimalEncoding<3>>::from_time_code(millis);
        prop_assert_eq!((t * factor).time_code(), millis * factor);
        prop_assert_eq!((t * factor / factor).time_code(), millis);
    }

    /// Addition on raw codes matches real addition within granularity.
    #[test]
    fn addition_matches_real_arithmetic(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let sum = SimTime::<DecimalEncoding<9>>::new(a) + SimTime::<DecimalEncoding<9>>::new(b);
        prop_assert!((sum.to_f64() - (a + b)).abs() < 2e-9);
    }
}

#[test]
fn test_serde_preserves_the_raw_encoding() {
    let t = CoreTime::new(1.000000001);
    let json = serde_json::to_string(&t).expect("serialize");
    assert_eq!(json, "1000000001");

    let back: CoreTime = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, t);
    assert_eq!(back.time_code(), t.time_code());
}

#[test]
fn test_serde_round_trips_sentinels() {
    for t in [
        CoreTime::zero(),
        CoreTime::epsilon(),
        CoreTime::min_val(),
        CoreTime::max_val(),
    ] {
        let json = serde_json::to_string(&t).expect("serialize");
        let back: CoreTime = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, t);
    }
}

#[test]
fn test_near_sentinel_raws_share_a_decoded_view() {
    // Distinct raw codes near the extremes can decode to the same double;
    // identity stays on the raw encoding regardless.
    let a = SimTime::<DecimalEncoding<9>>::from_time_code(i64::MAX);
    let b = SimTime::<DecimalEncoding<9>>::from_time_code(i64::MAX - 1);
    assert_eq!(a.to_f64(), b.to_f64());
    assert_ne!(a, b);
}
