//! German extraction scenarios (numbers and durations only).

use parlance::{Duration, Number, Parser};

use crate::wednesday;

fn parser() -> Parser {
    Parser::for_locale("de").unwrap()
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn unit_before_tens_compounds() {
    let p = parser();
    assert_eq!(
        p.extract_number("dreiundzwanzig").first(),
        Some(Number::integer(23))
    );
    assert_eq!(
        p.extract_number("zweihundertfunfundvierzig").first(),
        Some(Number::integer(245))
    );
}

#[test]
fn year_pronunciation_compounds() {
    let p = parser();
    assert_eq!(
        p.extract_number("siebzehnhundert").first(),
        Some(Number::integer(1700))
    );
    assert_eq!(
        p.extract_number("neunzehnhundertvierundachtzig").first(),
        Some(Number::integer(1984))
    );
}

#[test]
fn plain_groups_and_multipliers() {
    let p = parser();
    assert_eq!(
        p.extract_number("eine million").first(),
        Some(Number::integer(1_000_000))
    );
    assert_eq!(
        p.extract_number("zwei milliarden").first(),
        Some(Number::integer(2_000_000_000))
    );
    assert_eq!(
        p.extract_number("vier tausend sechs").first(),
        Some(Number::integer(4006))
    );
}

#[test]
fn decimal_comma() {
    let n = parser().extract_number("zwei komma funf").first();
    assert_eq!(n, Some(Number::decimal(2.5)));
}

#[test]
fn ordinal_denominators_make_fractions() {
    let p = parser();
    assert_eq!(
        p.extract_number("drei viertel").first(),
        Some(Number::decimal(0.75))
    );
    assert_eq!(
        p.extract_number("zwei drittel").first(),
        Some(Number::decimal(2.0 / 3.0))
    );
}

#[test]
fn ordinals_when_preferred() {
    let n = parser()
        .extract_number("dritte")
        .prefer_ordinal(true)
        .first();
    assert_eq!(n, Some(Number::integer(3).with_ordinal(true)));
}

// =============================================================================
// Durations
// =============================================================================

#[test]
fn unit_phrases_accumulate() {
    let d = parser()
        .extract_duration("drei minuten und funf sekunden")
        .first();
    assert_eq!(d, Some(Duration::of(185_000_000_000, 0, 0, 0)));
}

#[test]
fn compound_counts_apply_to_units() {
    let d = parser().extract_duration("dreiundzwanzig stunden").first();
    assert_eq!(d, Some(Duration::of(23 * 3_600_000_000_000, 0, 0, 0)));
}

#[test]
fn coarse_units() {
    let d = parser().extract_duration("zwei wochen").first();
    assert_eq!(d, Some(Duration::of(0, 14, 0, 0)));
}

// =============================================================================
// Date/times are not supported
// =============================================================================

#[test]
fn date_time_extraction_returns_nothing() {
    let dt = parser()
        .extract_date_time("drei minuten", wednesday())
        .first();
    assert_eq!(dt, None);
}
