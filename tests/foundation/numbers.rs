//! Integration tests for the Number value type
//!
//! Tests the integer fast path, decimal fallback on overflow, and ordinal
//! flag propagation.

use parlance_foundation::Number;

// =============================================================================
// Representation
// =============================================================================

#[test]
fn integer_and_decimal_are_distinct_variants() {
    let i = Number::integer(3);
    let d = Number::decimal(3.0);
    assert!(i.is_integer());
    assert!(d.is_decimal());
    assert_ne!(i, d);
    assert_eq!(i.integer_value(), Some(3));
    assert_eq!(i.decimal_value(), None);
    assert_eq!(d.decimal_value(), Some(3.0));
}

#[test]
fn arithmetic_prefers_integers() {
    let n = Number::integer(23)
        .multiply_i64(1000)
        .plus(&Number::integer(405));
    assert_eq!(n, Number::integer(23405));
}

#[test]
fn overflow_promotes_transparently() {
    let n = Number::integer(i64::MAX).multiply(&Number::integer(3));
    assert!(n.is_decimal());
    let n = Number::integer(i64::MAX).plus(&Number::integer(1));
    assert!(n.is_decimal());
}

#[test]
fn inexact_division_becomes_decimal() {
    let n = Number::integer(3).divide(&Number::integer(4));
    assert_eq!(n, Number::decimal(0.75));
    let n = Number::integer(16).divide(&Number::integer(4));
    assert_eq!(n, Number::integer(4));
}

// =============================================================================
// Ordinal flag
// =============================================================================

#[test]
fn ordinal_is_orthogonal_to_magnitude() {
    let n = Number::integer(3).with_ordinal(true);
    assert!(n.is_ordinal());
    assert_eq!(n.integer_value(), Some(3));
    assert!(!n.with_ordinal(false).is_ordinal());
}

#[test]
fn ordinal_propagates_through_arithmetic() {
    let n = Number::integer(764).with_ordinal(true).multiply_i64(1_000_000);
    assert!(n.is_ordinal());
    let n = Number::integer(5).with_ordinal(true).divide_i64(2);
    assert!(n.is_ordinal());
}

// =============================================================================
// Comparisons
// =============================================================================

#[test]
fn comparisons_respect_active_variant() {
    assert!(Number::integer(999).less_than(1000.0));
    assert!(!Number::integer(1000).less_than(1000.0));
    assert!(Number::decimal(0.5).less_than(1.0));
    assert!(Number::integer(21).more_than(20.0));
    assert!(Number::integer(0).is_zero());
    assert!(Number::decimal(0.0).is_zero());
    assert!(!Number::decimal(0.1).is_zero());
}

#[test]
fn equals_integer_rejects_decimals() {
    assert!(Number::integer(7).equals_i64(7));
    assert!(!Number::decimal(7.0).equals_i64(7));
    assert!(!Number::integer(7).equals_i64(8));
}
