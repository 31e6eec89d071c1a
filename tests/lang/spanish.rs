//! Spanish extraction scenarios.

use chrono::NaiveTime;
use parlance::{Duration, Number, Parser};

use crate::{date, wednesday};

fn parser() -> Parser {
    Parser::for_locale("es").unwrap()
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn tens_with_joining_word() {
    let p = parser();
    assert_eq!(
        p.extract_number("treinta y cinco").first(),
        Some(Number::integer(35))
    );
    assert_eq!(
        p.extract_number("veintitres").first(),
        Some(Number::integer(23))
    );
}

#[test]
fn irregular_hundreds() {
    let p = parser();
    assert_eq!(
        p.extract_number("quinientos").first(),
        Some(Number::integer(500))
    );
    assert_eq!(
        p.extract_number("ciento veinte").first(),
        Some(Number::integer(120))
    );
}

#[test]
fn thousands_groups() {
    let n = parser().extract_number("dos mil veinticuatro").first();
    assert_eq!(n, Some(Number::integer(2024)));
}

#[test]
fn long_scale_values_are_configured_directly() {
    // Spanish "billón" is a million millions
    let n = parser().extract_number("dos billones").first();
    assert_eq!(n, Some(Number::integer(2_000_000_000_000)));
}

#[test]
fn gendered_articles_make_fraction_numerators() {
    let n = parser().extract_number("un quinto").first();
    assert_eq!(n, Some(Number::decimal(0.2)));

    let n = parser().extract_number("dos tercios").first();
    assert_eq!(n, Some(Number::decimal(2.0 / 3.0)));
}

#[test]
fn comma_is_the_decimal_point() {
    let n = parser().extract_number("veintiuno coma cuatro").first().unwrap();
    assert!(n.is_decimal());
    assert!((n.as_f64() - 21.4).abs() < 1e-9);
}

// =============================================================================
// Durations
// =============================================================================

#[test]
fn unit_phrases_accumulate() {
    let d = parser()
        .extract_duration("tres minutos y cinco segundos")
        .first();
    assert_eq!(d, Some(Duration::of(185_000_000_000, 0, 0, 0)));
}

#[test]
fn article_counts_as_one() {
    // "un" is filler, so the unit alone counts as one
    let d = parser().extract_duration("un minuto").first();
    assert_eq!(d, Some(Duration::of(60_000_000_000, 0, 0, 0)));
}

// =============================================================================
// Date/times
// =============================================================================

#[test]
fn manana_is_tomorrow_and_morning() {
    let p = parser();
    let dt = p.extract_date_time("manana", wednesday()).first().unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));

    // after a time, it instead reads as the morning
    let dt = p
        .extract_date_time("a las siete de la manana", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());
}

#[test]
fn compound_anteayer_goes_two_days_back() {
    let dt = parser()
        .extract_date_time("anteayer", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 26));
}

#[test]
fn pasado_manana_goes_two_days_forward() {
    let dt = parser()
        .extract_date_time("pasado manana", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 30));
}

#[test]
fn minutes_after_the_hour() {
    let p = parser();
    let dt = p
        .extract_date_time("las seis y cuarto", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(6, 15, 0).unwrap());

    let dt = p
        .extract_date_time("las siete menos cuarto", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(6, 45, 0).unwrap());
}

#[test]
fn afternoon_phrase_corrects_the_hour() {
    let dt = parser()
        .extract_date_time("a las siete de la tarde", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(19, 0, 0).unwrap());
}

#[test]
fn relative_durations() {
    let p = parser();
    let dt = p
        .extract_date_time("hace dos semanas", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 14));

    let dt = p
        .extract_date_time("dentro tres dias", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 5, 1));
}

#[test]
fn numeric_date_order_follows_the_preference() {
    let p = parser();
    let dt = p
        .extract_date_time("1/2/2024", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2024, 2, 1));

    let dt = p
        .extract_date_time("1/2/2024", wednesday())
        .prefer_month_before_day(true)
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2024, 1, 2));
}

#[test]
fn absolute_date_with_month_name() {
    let dt = parser()
        .extract_date_time("el 4 de febrero de 2023", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2023, 2, 4));
}
