//! Duration phrase parsing: numbers followed by duration-unit words,
//! accumulated one unit group at a time.

use parlance_foundation::{Duration, Number};
use parlance_lexer::TokenStream;

/// Extracts a duration at the current position (no words are skipped, not
/// even ignorable ones, before the first group).
///
/// `extract_number_no_ordinal` tries to extract a non-ordinal number at the
/// current stream position; it is called before every unit word, so it
/// should not prefer ordinal numbers.
///
/// Returns the accumulated duration, or `None` (with the position restored)
/// when no duration starts here.
pub fn duration(
    ts: &mut TokenStream,
    mut extract_number_no_ordinal: impl FnMut(&mut TokenStream) -> Option<Number>,
) -> Option<Duration> {
    let original_position = ts.position();
    let first_number = extract_number_no_ordinal(ts);
    let Some(mut result) = duration_after_optional_number(ts, first_number.as_ref()) else {
        // duration not found at the current position
        ts.set_position(original_position);
        return None;
    };

    // found a duration, try to expand it with more groups
    let mut position_last_duration_found = ts.position();
    while !ts.finished() {
        let number = extract_number_no_ordinal(ts);
        let group = duration_after_optional_number(ts, number.as_ref());

        match group {
            Some(group) => {
                position_last_duration_found = ts.position();
                result = result.plus(&group); // another duration group, accumulate
            }
            None if number.is_none() && ts.get(0).has_category("ignore") => {
                ts.move_position_forward_by(1); // skip this ignorable word
            }
            None => break,
        }
    }

    ts.set_position(position_last_duration_found);
    Some(result)
}

/// Parses the unit word (possibly preceded by a separator like "of") that
/// completes one duration group, given the number that preceded it, if any.
fn duration_after_optional_number(
    ts: &mut TokenStream,
    number: Option<&Number>,
) -> Option<Duration> {
    match number {
        None => {
            let (restricted, multiplier) = {
                let unit = ts.get(0).duration_unit()?;
                (unit.restricted_after_number, unit.multiplier)
            };
            if restricted {
                // found a unit that requires a number before it, but there
                // is none, e.g. the bare symbols s, ms, h
                None
            } else {
                // a unit without a number counts as one, e.g. "a second"
                ts.move_position_forward_by(1);
                Some(multiplier)
            }
        }
        Some(number) => {
            let mut next_not_ignore = ts.index_of_without_category("ignore", 0);
            if ts.get(next_not_ignore).has_category("duration_separator") {
                // a separator like "of" after the number, e.g. a couple of hours
                next_not_ignore = ts.index_of_without_category("ignore", next_not_ignore + 1);
            }

            // if the number is not followed by a unit word this is not a
            // duration at all, e.g. fifteen people
            let multiplier = ts.get(next_not_ignore).duration_unit()?.multiplier;
            ts.move_position_forward_by(next_not_ignore + 1);
            Some(multiplier.multiply_number(number))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_foundation::TimeUnit;
    use parlance_lexer::{DurationUnit, Token};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn unit(value: &str, key: &str, amount: i64, time_unit: TimeUnit, restricted: bool) -> Token {
        Token::plain(value, " ", 0).with_duration_unit(Arc::new(DurationUnit {
            category: key.to_string(),
            multiplier: Duration::ZERO.plus_int(amount, time_unit),
            restricted_after_number: restricted,
        }))
    }

    fn minutes() -> Token {
        unit("minutes", "1 MINUTES", 1, TimeUnit::Minutes, false)
    }

    fn seconds() -> Token {
        unit("seconds", "1 SECONDS", 1, TimeUnit::Seconds, false)
    }

    fn word(value: &str, categories: &[&str]) -> Token {
        let set: HashSet<String> = categories.iter().map(ToString::to_string).collect();
        Token::matched(value, " ", 0, Arc::new(set))
    }

    fn digit(value: &str, n: i64) -> Token {
        let set: HashSet<String> =
            ["number", "digit"].iter().map(ToString::to_string).collect();
        Token::numeric(value, " ", 0, Arc::new(set), Number::integer(n))
    }

    fn simple_number(ts: &mut TokenStream) -> Option<Number> {
        let n = *ts.get(0).number()?;
        ts.move_position_forward_by(1);
        Some(n)
    }

    #[test]
    fn number_and_unit_groups_accumulate() {
        let mut ts = TokenStream::new(vec![
            digit("three", 3),
            minutes(),
            word("and", &["ignore"]),
            digit("five", 5),
            seconds(),
        ]);
        let d = duration(&mut ts, simple_number).unwrap();
        assert_eq!(d, Duration::of(185_000_000_000, 0, 0, 0));
        assert_eq!(ts.position(), 5);
    }

    #[test]
    fn unit_without_number_counts_as_one() {
        let mut ts = TokenStream::new(vec![minutes(), seconds()]);
        let d = duration(&mut ts, simple_number).unwrap();
        assert_eq!(d, Duration::of(61_000_000_000, 0, 0, 0));
    }

    #[test]
    fn restricted_unit_needs_a_number() {
        let s = unit("s", "1 SECONDS", 1, TimeUnit::Seconds, true);
        let mut ts = TokenStream::new(vec![s]);
        assert_eq!(duration(&mut ts, simple_number), None);
        assert_eq!(ts.position(), 0);

        let s = unit("s", "1 SECONDS", 1, TimeUnit::Seconds, true);
        let mut ts = TokenStream::new(vec![digit("18", 18), s]);
        let d = duration(&mut ts, simple_number).unwrap();
        assert_eq!(d, Duration::of(18_000_000_000, 0, 0, 0));
    }

    #[test]
    fn separator_word_is_skipped_after_number() {
        let of = word("of", &["duration_separator"]);
        let hours = unit("hours", "1 HOURS", 1, TimeUnit::Hours, false);
        let mut ts = TokenStream::new(vec![digit("couple", 2), of, hours]);
        let d = duration(&mut ts, simple_number).unwrap();
        assert_eq!(d, Duration::of(7_200_000_000_000, 0, 0, 0));
    }

    #[test]
    fn trailing_ignorables_are_rewound() {
        let mut ts = TokenStream::new(vec![
            digit("ten", 10),
            minutes(),
            word("and", &["ignore"]),
            word("because", &[]),
        ]);
        let d = duration(&mut ts, simple_number).unwrap();
        assert_eq!(d, Duration::of(600_000_000_000, 0, 0, 0));
        assert_eq!(ts.position(), 2); // "and because" not consumed
    }

    #[test]
    fn number_without_unit_is_not_a_duration() {
        let mut ts = TokenStream::new(vec![digit("fifteen", 15), word("people", &[])]);
        assert_eq!(duration(&mut ts, simple_number), None);
        assert_eq!(ts.position(), 0);
    }
}
