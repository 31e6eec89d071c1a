//! English extraction scenarios.

use chrono::{NaiveTime, Timelike};
use parlance::{Duration, Number, Parser};

use crate::{date, wednesday};

fn parser() -> Parser {
    Parser::for_locale("en").unwrap()
}

fn seconds(n: i64) -> Duration {
    Duration::of(n * 1_000_000_000, 0, 0, 0)
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn compound_integer_phrase() {
    let n = parser()
        .extract_number("twenty three thousand four hundred and five")
        .first();
    assert_eq!(n, Some(Number::integer(23405)));
}

#[test]
fn hundreds_with_filler() {
    let n = parser().extract_number("one hundred and twelve").first();
    assert_eq!(n, Some(Number::integer(112)));
}

#[test]
fn fraction_from_suffix_words() {
    let n = parser().extract_number("three quarters").first();
    assert_eq!(n, Some(Number::decimal(0.75)));
}

#[test]
fn fraction_keeps_integerness_when_exact() {
    let n = parser().extract_number("sixteen quarters").first();
    assert_eq!(n, Some(Number::integer(4)));
}

#[test]
fn ordinal_denominator_fraction() {
    let n = parser().extract_number("one fifth").first();
    assert_eq!(n, Some(Number::decimal(0.2)));
}

#[test]
fn sign_words_negate() {
    let n = parser().extract_number("minus twelve").first();
    assert_eq!(n, Some(Number::integer(-12)));
}

#[test]
fn raw_digits_and_ordinal_suffix() {
    let n = parser().extract_number("1207").first();
    assert_eq!(n, Some(Number::integer(1207)));

    let n = parser()
        .extract_number("57378th")
        .prefer_ordinal(true)
        .first();
    assert_eq!(n, Some(Number::integer(57378).with_ordinal(true)));
}

#[test]
fn ordinal_preference_flips_ambiguous_words() {
    let ordinal = parser()
        .extract_number("third")
        .prefer_ordinal(true)
        .first();
    assert_eq!(ordinal, Some(Number::integer(3).with_ordinal(true)));

    // the bare-article fraction ("a third" = 1/3) belongs to the
    // ordinal-preferring grammar; with fractions preferred the article is
    // skipped and the ordinal word stands alone
    let n = parser()
        .extract_number("a third")
        .prefer_ordinal(true)
        .first();
    assert_eq!(n, Some(Number::decimal(1.0 / 3.0)));

    let n = parser().extract_number("a third").first();
    assert_eq!(n, Some(Number::integer(3).with_ordinal(true)));
}

#[test]
fn decimal_point_phrases() {
    let n = parser().extract_number("two point five").first();
    assert_eq!(n, Some(Number::decimal(2.5)));

    let n = parser().extract_number("point three").first().unwrap();
    assert!(n.is_decimal());
    assert!((n.as_f64() - 0.3).abs() < 1e-9);
}

#[test]
fn fraction_separator_divides() {
    let n = parser().extract_number("twenty divided by four").first();
    assert_eq!(n, Some(Number::integer(5)));
}

#[test]
fn division_by_zero_is_not_a_fraction() {
    let n = parser().extract_number("twenty divided by zero").first();
    assert_eq!(n, Some(Number::integer(20)));
}

#[test]
fn suffix_multiplier_with_article() {
    let n = parser().extract_number("a dozen").first();
    assert_eq!(n, Some(Number::integer(12)));
}

#[test]
fn year_style_two_groups() {
    let n = parser().extract_number("nineteen eighty four").first();
    assert_eq!(n, Some(Number::integer(1984)));

    let n = parser().extract_number("nineteen oh two").first();
    assert_eq!(n, Some(Number::integer(1902)));
}

#[test]
fn hundred_suffix_years() {
    let n = parser().extract_number("twenty six hundred").first();
    assert_eq!(n, Some(Number::integer(2600)));
}

#[test]
fn comma_separated_raw_thousands() {
    let n = parser().extract_number("123,045,006").first();
    assert_eq!(n, Some(Number::integer(123_045_006)));
}

#[test]
fn big_mixed_scale_phrase() {
    let n = parser()
        .extract_number(
            "twenty 5 billion, 1 hundred and sixty four million, seven thousand and nineteen",
        )
        .first();
    assert_eq!(n, Some(Number::integer(25_164_007_019)));
}

#[test]
fn long_scale_remaps_multipliers() {
    let n = parser()
        .extract_number("one hundred and twenty million")
        .short_scale(false)
        .first();
    assert_eq!(n, Some(Number::integer(120_000_000)));

    let n = parser()
        .extract_number("thirteen thousand billion")
        .short_scale(false)
        .first();
    assert_eq!(n, Some(Number::integer(13_000_000_000_000_000)));
}

#[test]
fn equal_multiplier_repeats_are_rejected() {
    // "thousand thousand" must not read as 10^6
    let n = parser().extract_number("one thousand thousand").first();
    assert_eq!(n, Some(Number::integer(1000)));
}

#[test]
fn integer_only_mode_suppresses_fractions() {
    let n = parser()
        .extract_number("three quarters")
        .integer_only(true)
        .first();
    assert_eq!(n, Some(Number::integer(3)));

    let n = parser()
        .extract_number("two point five")
        .integer_only(true)
        .first();
    assert_eq!(n, Some(Number::integer(2)));
}

// =============================================================================
// Durations
// =============================================================================

#[test]
fn minutes_and_seconds() {
    let d = parser()
        .extract_duration("three minutes and five seconds")
        .first();
    assert_eq!(d, Some(seconds(185)));
}

#[test]
fn raw_number_with_symbol_unit() {
    let d = parser().extract_duration("18s").first();
    assert_eq!(d, Some(seconds(18)));
}

#[test]
fn bare_symbol_needs_a_number() {
    assert_eq!(parser().extract_duration("s").first(), None);
    assert_eq!(parser().extract_duration("hello ms world").first(), None);
}

#[test]
fn fractional_counts() {
    let d = parser().extract_duration("half an hour").first();
    assert_eq!(d, Some(seconds(1800)));
}

#[test]
fn separator_and_article_words() {
    let d = parser().extract_duration("a couple of hours").first();
    assert_eq!(d, Some(seconds(7200)));
}

#[test]
fn coarse_units_stay_in_their_buckets() {
    let d = parser().extract_duration("two weeks").first();
    assert_eq!(d, Some(Duration::of(0, 14, 0, 0)));

    let d = parser().extract_duration("one month and two years").first();
    assert_eq!(d, Some(Duration::of(0, 0, 1, 2)));

    let d = parser().extract_duration("three billion years").first();
    assert_eq!(d, Some(Duration::of(0, 0, 0, 3_000_000_000)));
}

#[test]
fn trailing_filler_is_not_consumed() {
    let d = parser().extract_duration("ten and weeks and counting").first();
    assert_eq!(d, Some(Duration::of(0, 70, 0, 0)));
}

#[test]
fn scale_changes_counted_nanoseconds() {
    let d = parser()
        .extract_duration("one billion nanoseconds")
        .first();
    assert_eq!(d, Some(seconds(1)));

    let d = parser()
        .extract_duration("one billion nanoseconds")
        .short_scale(false)
        .first();
    assert_eq!(d, Some(seconds(1000)));
}

// =============================================================================
// Date/times
// =============================================================================

#[test]
fn next_weekday_is_the_nearest_future_occurrence() {
    // now is Wednesday 2021-04-28; Thursday is the very next day
    let dt = parser()
        .extract_date_time("next thursday", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));
}

#[test]
fn next_same_weekday_is_a_week_ahead() {
    let dt = parser()
        .extract_date_time("next wednesday", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 5, 5));
}

#[test]
fn relative_day_words() {
    let p = parser();
    let dt = p.extract_date_time("yesterday", wednesday()).first().unwrap();
    assert_eq!(dt.date(), date(2021, 4, 27));

    let dt = p
        .extract_date_time("the day after tomorrow", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 30));
}

#[test]
fn relative_durations_with_indicators() {
    let p = parser();
    let dt = p
        .extract_date_time("in three days", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 5, 1));

    let dt = p
        .extract_date_time("two weeks ago", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 14));
}

#[test]
fn special_minutes_before_the_hour() {
    let p = parser();
    let dt = p
        .extract_date_time("half past seven", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());

    let dt = p
        .extract_date_time("quarter to six in the evening", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(17, 45, 0).unwrap());
}

#[test]
fn am_pm_edge_cases() {
    let p = parser();
    let dt = p.extract_date_time("12 am", wednesday()).first().unwrap();
    assert_eq!(dt.time().hour(), 0);

    let dt = p.extract_date_time("3 pm", wednesday()).first().unwrap();
    assert_eq!(dt.time().hour(), 15);

    let dt = p
        .extract_date_time("ten o'clock", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
}

#[test]
fn absolute_dates_with_month_names() {
    let p = parser();
    let dt = p
        .extract_date_time("4th of february 2023", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2023, 2, 4));

    let dt = p
        .extract_date_time("february the 1st 2100", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2100, 2, 1));
}

#[test]
fn bc_years_are_negative() {
    let dt = parser()
        .extract_date_time("june 3 1000 bc", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(-1000, 6, 3));
}

#[test]
fn numeric_date_order_follows_the_preference() {
    let p = parser();
    let dt = p
        .extract_date_time("1/2/2024", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2024, 2, 1)); // day before month by default

    let dt = p
        .extract_date_time("1/2/2024", wednesday())
        .prefer_month_before_day(true)
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2024, 1, 2));
}

#[test]
fn relative_months_add_a_year_when_coinciding() {
    let p = parser();
    let dt = p
        .extract_date_time("next september", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 9, 28));

    // April is the current month: "next april" is a full year ahead
    let dt = p
        .extract_date_time("next april", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2022, 4, 28));
}

#[test]
fn date_and_time_combine_in_either_order() {
    let p = parser();
    let dt = p
        .extract_date_time("tomorrow at 8:30", wednesday())
        .first()
        .unwrap();
    assert_eq!(dt.date(), date(2021, 4, 29));
    assert_eq!(dt.time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
}
