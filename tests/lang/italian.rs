//! Italian extraction scenarios.

use chrono::NaiveTime;
use parlance::{Duration, Number, Parser};

use crate::{date, wednesday};

fn parser() -> Parser {
    Parser::for_locale("it").unwrap()
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn compound_number_words_split() {
    let p = parser();
    assert_eq!(
        p.extract_number("ventitre").first(),
        Some(Number::integer(23))
    );
    assert_eq!(
        p.extract_number("duemilaventuno").first(),
        Some(Number::integer(2021))
    );
    assert_eq!(
        p.extract_number("seicentoquarantadue").first(),
        Some(Number::integer(642))
    );
}

#[test]
fn multiplier_words_carry_their_own_scale() {
    let p = parser();
    assert_eq!(
        p.extract_number("tre milioni").first(),
        Some(Number::integer(3_000_000))
    );
    assert_eq!(
        p.extract_number("due miliardi").first(),
        Some(Number::integer(2_000_000_000))
    );
}

#[test]
fn comma_is_the_decimal_point() {
    let n = parser().extract_number("due virgola cinque").first();
    assert_eq!(n, Some(Number::decimal(2.5)));
}

#[test]
fn ordinal_denominators_make_fractions() {
    let n = parser().extract_number("tre quarti").first();
    assert_eq!(n, Some(Number::decimal(0.75)));

    let n = parser().extract_number("un quinto").first();
    assert_eq!(n, Some(Number::decimal(0.2)));
}

#[test]
fn suffix_multipliers() {
    let n = parser().extract_number("una dozzina").first();
    assert_eq!(n, Some(Number::integer(12)));

    let n = parser().extract_number("sedici mezzi").first();
    assert_eq!(n, Some(Number::integer(8)));
}

#[test]
fn sign_words() {
    let n = parser().extract_number("meno venti").first();
    assert_eq!(n, Some(Number::integer(-20)));
}

// =============================================================================
// Durations
// =============================================================================

#[test]
fn unit_phrases_accumulate() {
    let d = parser()
        .extract_duration("tre minuti e cinque secondi")
        .first();
    assert_eq!(d, Some(Duration::of(185_000_000_000, 0, 0, 0)));
}

#[test]
fn coarse_units() {
    let d = parser().extract_duration("due settimane").first();
    assert_eq!(d, Some(Duration::of(0, 14, 0, 0)));
}

// =============================================================================
// Date/times
// =============================================================================

#[test]
fn noon_and_midnight_words() {
    let p = parser();
    let dt = p
        .extract_date_time("mezzogiorno", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());

    // the split form works too
    let dt = p
        .extract_date_time("mezza notte", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
}

#[test]
fn repeatable_tomorrow_adders() {
    let p = parser();
    let dt = p
        .extract_date_time("dopodomani", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 30));

    let dt = p
        .extract_date_time("dopo dopo domani", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 5, 1));
}

#[test]
fn yesterday_with_trailing_adder() {
    let p = parser();
    let dt = p.extract_date_time("ieri", wednesday()).first().unwrap();
    assert_eq!(dt.date(), date(2021, 4, 27));

    let dt = p
        .extract_date_time("ieri l'altro", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 26));
}

#[test]
fn hours_with_fractional_minutes() {
    let p = parser();
    let dt = p
        .extract_date_time("alle sette e mezza", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());

    let dt = p
        .extract_date_time("alle due e tre quarti", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(2, 45, 0).unwrap());
}

#[test]
fn postponed_relative_indicators() {
    let p = parser();
    let dt = p
        .extract_date_time("giovedi prossimo", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));

    let dt = p
        .extract_date_time("due settimane fa", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 14));
}

#[test]
fn tuesday_wins_over_march_for_mar() {
    let dt = parser()
        .extract_date_time("mar", wednesday())
        .first()
        .unwrap();
    // the next Tuesday relative to Wednesday is six days ahead... but a
    // bare weekday with no indicator resolves within the current week
    assert_eq!(dt.date(), date(2021, 4, 27));
}

#[test]
fn absolute_dates_in_day_month_year_order() {
    let dt = parser()
        .extract_date_time("4 febbraio 2023", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2023, 2, 4));
}
