//! Integration tests for MixedFraction
//!
//! Tests the denominator-candidate decomposition used for speech-friendly
//! fraction rendering.

use parlance_foundation::MixedFraction;

#[test]
fn four_and_a_half() {
    let frac = MixedFraction::of(4.5, &[2]).unwrap();
    assert!(!frac.negative);
    assert_eq!(frac.whole, 4);
    assert_eq!(frac.numerator, 1);
    assert_eq!(frac.denominator, 2);
}

#[test]
fn near_integer_has_zero_numerator() {
    let frac = MixedFraction::of(7.00001, &MixedFraction::DEFAULT_DENOMINATORS).unwrap();
    assert_eq!(frac.whole, 7);
    assert_eq!(frac.numerator, 0);
    assert_eq!(frac.denominator, 1);
}

#[test]
fn magnitude_beyond_i64_is_rejected() {
    assert_eq!(
        MixedFraction::of(2.0 * i64::MAX as f64, &MixedFraction::DEFAULT_DENOMINATORS),
        None
    );
}

#[test]
fn default_denominators_cover_twentieths() {
    let frac = MixedFraction::of(0.55, &MixedFraction::DEFAULT_DENOMINATORS).unwrap();
    assert_eq!(frac.whole, 0);
    assert_eq!(frac.numerator, 11);
    assert_eq!(frac.denominator, 20);
}

#[test]
fn no_tolerable_denominator_yields_none() {
    assert_eq!(MixedFraction::of(0.123_456_789, &[2, 3, 4, 5]), None);
}

#[test]
fn sign_is_carried_separately() {
    let frac = MixedFraction::of(-1.75, &MixedFraction::DEFAULT_DENOMINATORS).unwrap();
    assert!(frac.negative);
    assert_eq!(frac.whole, 1);
    assert_eq!(frac.numerator, 3);
    assert_eq!(frac.denominator, 4);
}
