//! Swedish extraction scenarios.

use chrono::NaiveTime;
use parlance::{Duration, Number, Parser};

use crate::{date, wednesday};

fn parser() -> Parser {
    Parser::for_locale("sv").unwrap()
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn compound_number_words_split() {
    let p = parser();
    assert_eq!(
        p.extract_number("tjugoett").first(),
        Some(Number::integer(21))
    );
    assert_eq!(
        p.extract_number("femhundra").first(),
        Some(Number::integer(500))
    );
    assert_eq!(
        p.extract_number("femtiofem").first(),
        Some(Number::integer(55))
    );
}

#[test]
fn milliard_words_keep_their_real_values() {
    let p = parser();
    // Swedish is long scale with distinct milliard words: miljard = 10^9
    assert_eq!(
        p.extract_number("en miljard").first(),
        Some(Number::integer(1_000_000_000))
    );
    assert_eq!(
        p.extract_number("tva biljoner").first(),
        Some(Number::integer(2_000_000_000_000))
    );
}

#[test]
fn thousands_fold_into_long_scale_groups() {
    let n = parser().extract_number("tre tusen").first();
    assert_eq!(n, Some(Number::integer(3000)));
}

#[test]
fn article_fractions() {
    let n = parser().extract_number("en femtedel").first();
    assert_eq!(n, Some(Number::decimal(0.2)));

    let n = parser().extract_number("tva tredjedelar").first();
    assert_eq!(n, Some(Number::decimal(2.0 / 3.0)));
}

#[test]
fn decimal_comma() {
    let n = parser().extract_number("tva komma fem").first();
    assert_eq!(n, Some(Number::decimal(2.5)));
}

// =============================================================================
// Durations
// =============================================================================

#[test]
fn unit_phrases_accumulate() {
    let d = parser()
        .extract_duration("tre minuter och fem sekunder")
        .first();
    assert_eq!(d, Some(Duration::of(185_000_000_000, 0, 0, 0)));
}

#[test]
fn article_counts_as_one() {
    let d = parser().extract_duration("en timme").first();
    assert_eq!(d, Some(Duration::of(3_600_000_000_000, 0, 0, 0)));
}

// =============================================================================
// Date/times
// =============================================================================

#[test]
fn halv_means_half_past_the_next_hour() {
    let dt = parser()
        .extract_date_time("halv atta", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
}

#[test]
fn quarter_to_and_past() {
    let p = parser();
    let dt = p
        .extract_date_time("kvart i elva", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(10, 45, 0).unwrap());

    let dt = p
        .extract_date_time("kvart over sju", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 15, 0).unwrap());
}

#[test]
fn klockan_prefixes_hours() {
    let dt = parser()
        .extract_date_time("klockan tio", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
}

#[test]
fn relative_days() {
    let p = parser();
    let dt = p.extract_date_time("imorgon", wednesday()).first().unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));

    let dt = p
        .extract_date_time("nasta torsdag", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));
}

#[test]
fn relative_durations() {
    let dt = parser()
        .extract_date_time("tva veckor sedan", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 14));
}

#[test]
fn absolute_dates() {
    let dt = parser()
        .extract_date_time("den 4 februari 2023", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2023, 2, 4));
}
