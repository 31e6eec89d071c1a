//! Shared date/time extraction helpers: am/pm and BC/AD markers, weekday
//! and month resolution, relative-indicator handling.
//!
//! The weekday/month helpers use congruence-preserving modular offsets that
//! always land on a future (or past, for negated indicators) occurrence,
//! adding a full cycle when the named weekday or month equals the current
//! one.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use parlance_foundation::{Duration, Number};
use parlance_lexer::TokenStream;

/// Hours in a day.
pub const HOURS_IN_DAY: i64 = 24;
/// Days in a week.
pub const DAYS_IN_WEEK: i64 = 7;
/// Months in a year.
pub const MONTHS_IN_YEAR: i64 = 12;

/// Whether a moment-of-day hour falls in the afternoon.
#[must_use]
pub fn is_moment_of_day_pm(moment_of_day: i64) -> bool {
    moment_of_day >= 12
}

/// Sets the month, clamping the day of month to the last valid day of the
/// target month when needed (e.g. January 31st -> February 28th).
#[must_use]
pub fn with_month_coerced(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    date.with_month(month).or_else(|| {
        let first = NaiveDate::from_ymd_opt(date.year(), month, 1)?;
        let last_day = days_in_month(first);
        date.with_day(last_day)?.with_month(month)
    })
}

/// Sets the year, clamping February 29th to the 28th on non-leap years.
#[must_use]
pub fn with_year_coerced(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| date.with_day(28)?.with_year(year))
}

/// The number of days in the month `date` falls in.
fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

/// Parses an am/pm marker; `Some(false)` for am, `Some(true)` for pm.
pub fn ampm(ts: &mut TokenStream) -> Option<bool> {
    before_or_after_marker(ts, "ampm")
}

/// Parses a BC/AD marker; `Some(false)` for BC, `Some(true)` for AD.
pub fn bcad(ts: &mut TokenStream) -> Option<bool> {
    before_or_after_marker(ts, "bcad")
}

/// Shared am/pm & BC/AD parsing over the category scheme
/// `<prefix>_before`, `_after`, `_identifier`, `_before_combined`,
/// `_after_combined`.
///
/// A combined word ("pm", "ad") answers on its own; a bare before/after word
/// ("a", "p", "b") needs an identifier word ("m", "c") to follow, possibly
/// after ignorable tokens.
fn before_or_after_marker(ts: &mut TokenStream, prefix: &str) -> Option<bool> {
    ts.move_position_forward_by(1);
    let result = if ts.get(-1).has_category(&format!("{prefix}_before")) {
        false
    } else if ts.get(-1).has_category(&format!("{prefix}_after")) {
        true
    } else if ts.get(-1).has_category(&format!("{prefix}_before_combined")) {
        return Some(false);
    } else if ts.get(-1).has_category(&format!("{prefix}_after_combined")) {
        return Some(true);
    } else {
        // nothing related here (even if an identifier might match alone)
        ts.move_position_forward_by(-1);
        return None;
    };

    // can't use index_of_without_category: some ignorables are identifiers
    let identifier = format!("{prefix}_identifier");
    let found_identifier = ts.try_or_skip_category("ignore", true, |ts| {
        if ts.get(0).has_category(&identifier) {
            Some(true)
        } else {
            None
        }
    });
    if found_identifier.is_some() {
        ts.move_position_forward_by(1);
        Some(result)
    } else {
        ts.move_position_forward_by(-1);
        None
    }
}

/// Parses a month name, returning its 1-based month number.
pub fn month_name(ts: &mut TokenStream) -> Option<i64> {
    if ts.get(0).has_category("month_name") {
        let month = ts.get(0).number().and_then(Number::integer_value)?;
        ts.move_position_forward_by(1);
        Some(month)
    } else {
        None
    }
}

/// Parses a weekday name, returning its 0-based day number (Monday = 0).
pub fn day_of_week(ts: &mut TokenStream) -> Option<i64> {
    if ts.get(0).has_category("day_of_week") {
        let day = ts.get(0).number().and_then(Number::integer_value)?;
        ts.move_position_forward_by(1);
        Some(day)
    } else {
        None
    }
}

/// Parses a second count, also consuming a following "seconds" unit word.
pub fn second(
    ts: &mut TokenStream,
    extract_integer_in_range: impl FnOnce(&mut TokenStream, i64, i64) -> Option<i64>,
) -> Option<i64> {
    minute_or_second(ts, "1 SECONDS", extract_integer_in_range)
}

/// Parses a minute count, also consuming a following "minutes" unit word.
pub fn minute(
    ts: &mut TokenStream,
    extract_integer_in_range: impl FnOnce(&mut TokenStream, i64, i64) -> Option<i64>,
) -> Option<i64> {
    minute_or_second(ts, "1 MINUTES", extract_integer_in_range)
}

/// Parses an integer in `[0, 59]`, skipping the unit word said after the
/// count, e.g. "twenty four minutes".
pub fn minute_or_second(
    ts: &mut TokenStream,
    duration_category: &str,
    extract_integer_in_range: impl FnOnce(&mut TokenStream, i64, i64) -> Option<i64>,
) -> Option<i64> {
    let number = extract_integer_in_range(ts, 0, 59)?;

    if ts
        .get(0)
        .duration_unit()
        .is_some_and(|unit| unit.category == duration_category)
    {
        ts.move_position_forward_by(1);
    }

    Some(number)
}

/// Parses a word meaning "today"; the day offset is zero.
pub fn relative_today(ts: &mut TokenStream) -> Option<i64> {
    if ts.get(0).has_category("today") {
        ts.move_position_forward_by(1);
        Some(0) // no offset
    } else {
        None
    }
}

/// Parses a relative weekday phrase ("next Thursday", "two Sundays ago"),
/// returning the signed day offset from today.
pub fn relative_day_of_week_duration(
    ts: &mut TokenStream,
    now: NaiveDateTime,
    mut extract_integer_in_range: impl FnMut(&mut TokenStream, i64, i64) -> Option<i64>,
) -> Option<i64> {
    relative_indicator_duration(
        ts,
        |ts| {
            let number = match extract_integer_in_range(ts, 1, i64::from(i32::MAX)) {
                // an explicit repeat count is optional, e.g. "next thursday"
                None => 1,
                Some(number) => {
                    // found a count, e.g. "in two ..."
                    ts.move_position_forward_by(
                        ts.index_of_without_category("date_time_ignore", 0),
                    );
                    number
                }
            };
            if ts.get(0).has_category("day_of_week") {
                let named = ts.get(0).number().and_then(Number::integer_value)?;
                let days_difference =
                    named - i64::from(now.weekday().num_days_from_monday());
                let days_offset = (days_difference + DAYS_IN_WEEK) % DAYS_IN_WEEK
                    // add a week when the named day is today
                    + if days_difference == 0 { DAYS_IN_WEEK } else { 0 }
                    // further weeks when an explicit count was given
                    + (number - 1) * DAYS_IN_WEEK;
                ts.move_position_forward_by(1);
                Some(days_offset)
            } else {
                None
            }
        },
        |days_offset| {
            if days_offset % DAYS_IN_WEEK == 0 {
                // congruency modulo a week is 0: minus keeps it
                -days_offset
            } else {
                // keep congruency modulo a week, accounting for extra weeks
                2 * (days_offset % DAYS_IN_WEEK) - DAYS_IN_WEEK - days_offset
            }
        },
    )
}

/// Parses a relative month phrase ("next september", "january ago"),
/// returning the signed month offset from now as a duration.
pub fn relative_month_duration(ts: &mut TokenStream, now: NaiveDateTime) -> Option<Duration> {
    let months = relative_indicator_duration(
        ts,
        |ts| {
            if ts.get(0).has_category("month_name") {
                let named = ts.get(0).number().and_then(Number::integer_value)?;
                let months_difference = named - i64::from(now.month());
                let months_offset = (months_difference + MONTHS_IN_YEAR) % MONTHS_IN_YEAR
                    // add a year when the named month is the current one
                    + if months_difference == 0 { MONTHS_IN_YEAR } else { 0 };
                ts.move_position_forward_by(1);
                Some(months_offset)
            } else {
                None
            }
        },
        |months_offset| {
            if months_offset == MONTHS_IN_YEAR {
                -MONTHS_IN_YEAR
            } else {
                // keep congruency modulo a year
                months_offset - MONTHS_IN_YEAR
            }
        },
    )?;

    Some(Duration::of(0, 0, months, 0))
}

/// Wraps a duration-ish extractor with relative-indicator handling.
///
/// A pre-positioned indicator ("in", "next") or post-positioned one
/// ("ago", "later") gives the result a sign; a negative indicator maps the
/// result through `opposite_duration`. Without any indicator the phrase is
/// not relative, so the position is restored and `None` returned.
pub fn relative_indicator_duration<T>(
    ts: &mut TokenStream,
    duration_extractor: impl FnOnce(&mut TokenStream) -> Option<T>,
    opposite_duration: impl FnOnce(T) -> T,
) -> Option<T> {
    let original_position = ts.position();

    let mut relative_indicator = 0; // 0 = not found, otherwise the sign
    if ts.get(0).has_category("pre_relative_indicator") {
        // a relative indicator before, e.g. "in", "next"
        relative_indicator = if ts.get(0).has_category("negative") {
            -1
        } else {
            1
        };
        ts.move_position_forward_by(ts.index_of_without_category("date_time_ignore", 1));
    }

    let Some(result) = duration_extractor(ts) else {
        // no duration found, e.g. "in six hello"
        ts.set_position(original_position);
        return None;
    };

    let next_not_ignore = ts.index_of_without_category("date_time_ignore", 0);
    if relative_indicator == 0 && ts.get(next_not_ignore).has_category("post_relative_indicator")
    {
        // a relative indicator after, e.g. "two weeks ago"
        relative_indicator = if ts.get(next_not_ignore).has_category("negative") {
            -1
        } else {
            1
        };
        ts.move_position_forward_by(next_not_ignore + 1);
    }

    match relative_indicator {
        // no relative indicator, this is not a relative phrase, e.g. "six months"
        0 => {
            ts.set_position(original_position);
            None
        }
        -1 => Some(opposite_duration(result)),
        _ => Some(result),
    }
}
