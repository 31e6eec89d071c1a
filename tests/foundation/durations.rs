//! Integration tests for the Duration value type
//!
//! Tests bucket independence, fractional unit conversion and calendar
//! offset application.

use chrono::{NaiveDate, NaiveDateTime};
use parlance_foundation::{Duration, Number, TimeUnit};
use proptest::prelude::*;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

// =============================================================================
// Buckets
// =============================================================================

#[test]
fn units_land_in_their_buckets() {
    assert_eq!(
        Duration::ZERO.plus_int(5, TimeUnit::Seconds),
        Duration::of(5_000_000_000, 0, 0, 0)
    );
    assert_eq!(
        Duration::ZERO.plus_int(3, TimeUnit::Weeks),
        Duration::of(0, 21, 0, 0)
    );
    assert_eq!(
        Duration::ZERO.plus_int(2, TimeUnit::Centuries),
        Duration::of(0, 0, 0, 200)
    );
    assert_eq!(
        Duration::ZERO.plus_int(7, TimeUnit::Months),
        Duration::of(0, 0, 7, 0)
    );
}

#[test]
fn number_variants_route_to_int_or_float_path() {
    let exact = Duration::ZERO.plus_number(&Number::integer(3), TimeUnit::Minutes);
    assert_eq!(exact.nanos, 180_000_000_000);

    let fractional = Duration::ZERO.plus_number(&Number::decimal(1.2), TimeUnit::Days);
    assert_eq!(fractional.days, 1);
    assert_eq!(fractional.nanos, 17_280_000_000_000);
}

#[test]
fn fractional_remainders_never_truncate() {
    // half a month becomes one month minus ~15.218 days
    let d = Duration::ZERO.plus_f64(0.5, TimeUnit::Months);
    assert_eq!((d.months, d.days), (1, -15));
    assert_ne!(d.nanos, 0);

    // a quarter year is exactly three months
    let d = Duration::ZERO.plus_f64(0.25, TimeUnit::Years);
    assert_eq!(d, Duration::of(0, 0, 3, 0));
}

proptest! {
    #[test]
    fn plus_is_pairwise_additive(
        a1 in -1_000_000_000i64..1_000_000_000,
        d1 in -100_000i64..100_000,
        m1 in -100_000i64..100_000,
        y1 in -100_000i64..100_000,
        a2 in -1_000_000_000i64..1_000_000_000,
        d2 in -100_000i64..100_000,
        m2 in -100_000i64..100_000,
        y2 in -100_000i64..100_000,
    ) {
        let sum = Duration::of(a1, d1, m1, y1).plus(&Duration::of(a2, d2, m2, y2));
        prop_assert_eq!(sum, Duration::of(a1 + a2, d1 + d2, m1 + m2, y1 + y2));
    }
}

// =============================================================================
// Calendar application
// =============================================================================

#[test]
fn offsets_apply_bucket_by_bucket() {
    let d = Duration::ZERO
        .plus_int(90, TimeUnit::Minutes)
        .plus_int(2, TimeUnit::Days)
        .plus_int(1, TimeUnit::Months);
    assert_eq!(
        d.apply_as_offset(at(2021, 4, 28, 10, 0, 0)),
        Some(at(2021, 5, 30, 11, 30, 0))
    );
}

#[test]
fn negative_offsets_go_backwards() {
    let d = Duration::ZERO.plus_int(-2, TimeUnit::Weeks);
    assert_eq!(
        d.apply_as_offset(at(2021, 4, 28, 10, 0, 0)),
        Some(at(2021, 4, 14, 10, 0, 0))
    );
}

#[test]
fn unrepresentable_offset_is_none() {
    let d = Duration::ZERO.plus_int(3_000_000_000, TimeUnit::Years);
    assert_eq!(d.apply_as_offset(at(2021, 4, 28, 10, 0, 0)), None);
}
