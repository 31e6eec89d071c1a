//! Shared number-extraction primitives.
//!
//! All functions either consume the tokens of a complete match or restore
//! the stream position they started from and return `None`.

use parlance_foundation::Number;
use parlance_lexer::{Token, TokenStream};

/// Whether this token is a number parsed directly from digits.
#[must_use]
pub fn is_raw_number(token: &Token) -> bool {
    token.has_category("number") && token.has_category("raw")
}

fn integer_of(token: &Token) -> Option<i64> {
    token.number().and_then(Number::integer_value)
}

/// Runs `number_fn` and accepts the result only if it is an integer within
/// `[from_inclusive, to_inclusive]`; otherwise rewinds and returns `None`.
pub fn extract_one_integer_in_range(
    ts: &mut TokenStream,
    from_inclusive: i64,
    to_inclusive: i64,
    number_fn: impl FnOnce(&mut TokenStream) -> Option<Number>,
) -> Option<i64> {
    let original_position = ts.position();
    match number_fn(ts).as_ref().and_then(Number::integer_value) {
        Some(value) if (from_inclusive..=to_inclusive).contains(&value) => Some(value),
        _ => {
            ts.set_position(original_position);
            None
        }
    }
}

/// Parses an optional sign word before a number, e.g. "minus twelve".
pub fn sign_before_number(
    ts: &mut TokenStream,
    number_fn: impl FnOnce(&mut TokenStream) -> Option<Number>,
) -> Option<Number> {
    if ts.get(0).has_category("sign") {
        let negative = ts.get(0).has_category("negative");
        ts.move_position_forward_by(1);

        match number_fn(ts) {
            None => {
                ts.move_position_forward_by(-1); // rewind over the sign
                None
            }
            Some(n) => Some(n.multiply_i64(if negative { -1 } else { 1 })),
        }
    } else {
        number_fn(ts)
    }
}

/// Parses a big raw number (usually `>= 1000`), e.g. "1207", "57378th".
pub fn number_big_raw(ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
    if !is_raw_number(ts.get(0)) {
        return None; // nothing was found
    }
    let ordinal = ts.get(1).has_category("ordinal_suffix");
    if !allow_ordinal && ordinal {
        return None; // do not allow e.g. 1500th if ordinals are disallowed
    }
    let number = *ts.get(0).number()?;
    ts.move_position_forward_by(if ordinal { 2 } else { 1 });
    Some(number.with_ordinal(ordinal))
}

/// Reads as many number groups as possible (e.g. 123 billion + 45 million +
/// 6 thousand + 78), summing successive groups.
///
/// Ignorable filler is skipped between groups once at least one group was
/// found. Stops at the first failed attempt, or right after a group that
/// ended in an ordinal word.
pub fn number_made_of_groups(
    ts: &mut TokenStream,
    mut get_number_group: impl FnMut(&mut TokenStream, f64) -> Option<Number>,
) -> Option<Number> {
    let mut groups: Option<Number> = None;
    let mut last_multiplier = f64::MAX;
    loop {
        let group = ts.try_or_skip_category("ignore", groups.is_some(), |ts| {
            get_number_group(ts, last_multiplier)
        });

        let Some(group) = group else {
            // either nothing else was found or the next multiplier is not
            // smaller than the last one
            break;
        };
        groups = Some(match groups {
            None => group,
            Some(so_far) => so_far.plus(&group), // e.g. seven hundred thousand + thirteen
        });

        if group.is_ordinal() {
            groups = groups.map(|g| g.with_ordinal(true));
            break; // ordinal numbers terminate at the ordinal group
        }
        last_multiplier = group.as_f64();
    }
    groups
}

/// Parses one short-scale group: a number below 1000 followed by an
/// optional multiplier word (thousand/million/...), e.g. "thirteen billion".
///
/// `last_multiplier` enforces strictly decreasing multiplier magnitude
/// across repeated group calls; an equal or larger repeat is rejected.
pub fn number_group_short_scale(
    ts: &mut TokenStream,
    allow_ordinal: bool,
    last_multiplier: f64,
) -> Option<Number> {
    number_group_with(ts, allow_ordinal, last_multiplier, number_less_than_1000)
}

/// [`number_group_short_scale`] with an explicit sub-thousand parser, for
/// languages whose numbers below 1000 follow a different word order.
pub fn number_group_with(
    ts: &mut TokenStream,
    allow_ordinal: bool,
    last_multiplier: f64,
    below_thousand: impl FnOnce(&mut TokenStream, bool) -> Option<Number>,
) -> Option<Number> {
    if last_multiplier < 1000.0 {
        return None; // prevent two numbers smaller than 1000 next to each other
    }

    let original_position = ts.position();
    let group_value = below_thousand(ts, allow_ordinal); // e.g. one hundred and twelve
    if group_value.as_ref().is_some_and(Number::is_ordinal) {
        // ordinal numbers can't be followed by a multiplier
        return group_value;
    }

    let next_not_ignore = if group_value.is_none() {
        0 // do not skip ahead if nothing was matched so far
    } else {
        ts.index_of_without_category("ignore", 0)
    };
    let ordinal = ts.get(next_not_ignore).has_category("ordinal");
    if ts.get(next_not_ignore).has_category("multiplier") && (allow_ordinal || !ordinal) {
        // prevent an ordinal multiplier if allow_ordinal is false
        let Some(multiplier) = ts.get(next_not_ignore).number().copied() else {
            ts.set_position(original_position);
            return None;
        };
        if multiplier.less_than(last_multiplier) {
            ts.move_position_forward_by(next_not_ignore + 1);
            return Some(match group_value {
                // the multiplier alone, e.g. a million
                None => multiplier.with_ordinal(ordinal),
                // number smaller than 1000 followed by a multiplier
                Some(group_value) => multiplier.multiply(&group_value).with_ordinal(ordinal),
            });
        }
    } else {
        // no multiplier for this last number group, e.g. one hundred and two
        return group_value;
    }

    // multiplier not smaller than the previous one, reset
    ts.set_position(original_position);
    None
}

/// Parses one long-scale group: up to two sub-thousand-group pairs folded
/// together before the multiplier, with short-scale multiplier magnitudes
/// remapped onto their long-scale equivalents.
///
/// For languages whose configuration already carries true long-scale values
/// (with distinct milliard-style words), use
/// [`number_group_long_scale_with`] and an identity remap instead.
pub fn number_group_long_scale(
    ts: &mut TokenStream,
    allow_ordinal: bool,
    last_multiplier: f64,
) -> Option<Number> {
    number_group_long_scale_with(ts, allow_ordinal, last_multiplier, |n| {
        short_multiplier_to_long_scale(n)
    })
}

/// [`number_group_long_scale`] with an explicit multiplier remap function.
pub fn number_group_long_scale_with(
    ts: &mut TokenStream,
    allow_ordinal: bool,
    last_multiplier: f64,
    remap_multiplier: impl Fn(&Number) -> Number,
) -> Option<Number> {
    if last_multiplier < 1_000_000.0 {
        return None; // prevent two numbers smaller than a million next to each other
    }

    let original_position = ts.position();
    let mut first = number_group_short_scale(ts, allow_ordinal, 1_000_000.0);
    if let Some(f) = first {
        if f.is_ordinal() || f.less_than(1000.0) {
            // nothing follows an ordinal number; the group does not end with
            // a thousand multiplier
            return first;
        }

        let next_not_ignore = ts.index_of_without_category("ignore", 0);
        ts.move_position_forward_by(next_not_ignore);
        match number_less_than_1000(ts, allow_ordinal) {
            None => ts.move_position_forward_by(-next_not_ignore),
            Some(second) => {
                let folded = f.plus(&second);
                if second.is_ordinal() {
                    return Some(folded.with_ordinal(true)); // nothing else follows
                }
                first = Some(folded);
            }
        }
    } else {
        // there is no number, or the number is followed by a multiplier
        // which is not thousand
        first = number_less_than_1000(ts, allow_ordinal);
        if first.as_ref().is_some_and(Number::is_ordinal) {
            return first;
        }

        if first.is_none() && is_raw_number(ts.get(0)) && ts.get(0).number()?.less_than(1_000_000.0)
        {
            // maybe a raw number smaller than 1000000, e.g. 785743
            let number = *ts.get(0).number()?;
            if ts.get(1).has_category("ordinal_suffix") {
                if !allow_ordinal {
                    return None;
                }
                ts.move_position_forward_by(2);
                return Some(number.with_ordinal(true));
            }
            ts.move_position_forward_by(1);
            first = Some(number); // raw number group, e.g. 123042 million
        }
    }

    let next_not_ignore = ts.index_of_without_category("ignore", 0);
    let ordinal = ts.get(next_not_ignore).has_category("ordinal");
    if ts.get(next_not_ignore).has_category("multiplier")
        && (allow_ordinal || !ordinal)
        && ts.get(next_not_ignore).number().is_some_and(|n| n.more_than(1000.0))
    {
        // prevent an ordinal multiplier if allow_ordinal is false;
        // prevent a thousand multiplier (e.g. in one thousand thousand)
        let Some(short_multiplier) = ts.get(next_not_ignore).number().copied() else {
            ts.set_position(original_position);
            return None;
        };
        let multiplier = remap_multiplier(&short_multiplier);
        if multiplier.less_than(last_multiplier) {
            ts.move_position_forward_by(next_not_ignore + 1);
            return Some(match first {
                // the multiplier alone, e.g. a million
                None => multiplier.with_ordinal(ordinal),
                // e.g. thirteen thousand billion
                Some(first) => multiplier.multiply(&first).with_ordinal(ordinal),
            });
        }
    } else {
        // no multiplier for this last group; also here if the multiplier is
        // ordinal but allow_ordinal is false
        return first;
    }

    // multiplier not smaller than the previous one, reset
    ts.set_position(original_position);
    None
}

/// Remaps a short-scale multiplier magnitude onto its long-scale value
/// (billion 10^9 -> 10^12, trillion 10^12 -> 10^18, ...).
#[must_use]
pub fn short_multiplier_to_long_scale(short_scale_multiplier: &Number) -> Number {
    match short_scale_multiplier.integer_value() {
        Some(1_000_000_000) => Number::integer(1_000_000_000_000),
        Some(1_000_000_000_000) => Number::integer(1_000_000_000_000_000_000),
        Some(1_000_000_000_000_000) => Number::decimal(1e24),
        Some(1_000_000_000_000_000_000) => Number::decimal(1e30),
        _ => *short_scale_multiplier, // e.g. million, same in both scales
    }
}

/// Accumulates at most one each of hundred/ten/digit across consecutive
/// (optionally ignore-separated) number words, e.g. "one hundred and twelve".
///
/// Setting a slot twice ends the number; an ordinal word is always the
/// grammatical end; zero is disallowed right after a ten or a hundred.
#[allow(clippy::too_many_lines)]
pub fn number_less_than_1000(ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
    let mut hundred: i64 = -1;
    let mut ten: i64 = -1;
    let mut digit: i64 = -1;
    let mut ordinal = false;
    let mut first_iteration = true;
    loop {
        let next_not_ignore = if first_iteration {
            first_iteration = false;
            0 // do not skip ahead if nothing was matched so far
        } else {
            ts.index_of_without_category("ignore", 0)
        };

        if !allow_ordinal && ts.get(next_not_ignore).has_category("ordinal") {
            break; // prevent ordinal numbers if allow_ordinal is false
        }

        if ts.get(next_not_ignore).has_category("digit") {
            if digit < 0
                && (!ts.get(next_not_ignore).is_number_equal_to(0) || (ten < 0 && hundred < 0))
            {
                // do not allow zero after ten or hundred, e.g. twenty zero
                match integer_of(ts.get(next_not_ignore)) {
                    Some(value) => digit = value,
                    None => break,
                }
            } else {
                break; // unexpected double digit
            }
        } else if ts.get(next_not_ignore).has_category("teen") {
            if ten < 0 && digit < 0 {
                match integer_of(ts.get(next_not_ignore)) {
                    Some(value) => {
                        ten = value;
                        // the teen contains the digit too; park the digit
                        // slot at 0 to prevent a double digit
                        digit = 0;
                    }
                    None => break,
                }
            } else {
                break; // unexpected double ten or ten after digit
            }
        } else if ts.get(next_not_ignore).has_category("tens") {
            if ten < 0 && digit < 0 {
                match integer_of(ts.get(next_not_ignore)) {
                    Some(value) => ten = value,
                    None => break,
                }
            } else {
                break; // unexpected double ten or ten after digit
            }
        } else if ts.get(next_not_ignore).has_category("hundred") {
            if hundred < 0 && ten < 0 {
                if digit < 0 {
                    hundred = 100; // e.g. a hundred
                } else if digit == 0 {
                    break; // do not allow e.g. zero hundred
                } else {
                    hundred = digit * 100; // e.g. three hundred
                    digit = -1; // reset digit for e.g. four hundred and nine
                }
            } else {
                break; // unexpected double hundred
            }
        } else if is_raw_number(ts.get(next_not_ignore)) {
            // raw number, e.g. 192
            let Some(raw_number) = integer_of(ts.get(next_not_ignore)) else {
                // a decimal raw number happens only for absurdly long digit
                // runs, surely not less than 1000
                break;
            };

            if !allow_ordinal && ts.get(next_not_ignore + 1).has_category("ordinal_suffix") {
                break; // do not allow ordinal if allow_ordinal is false
            }

            if raw_number < 10 {
                if digit < 0 {
                    digit = raw_number;
                } else {
                    break; // unexpected double digit
                }
            } else if raw_number < 100 {
                if ten < 0 && digit < 0 {
                    ten = raw_number;
                    digit = 0; // the raw value contains the digit too
                } else {
                    break; // unexpected double ten or ten after digit
                }
            } else if raw_number < 1000 {
                if hundred < 0 && ten < 0 && digit < 0 {
                    hundred = raw_number;
                    ten = 0; // the raw value contains the ten and digit too
                    digit = 0;
                } else {
                    break; // unexpected double hundred
                }
            } else {
                break; // raw number is too big, not smaller than 1000
            }

            // reached only if the raw number was accepted
            ordinal = ts.get(next_not_ignore + 1).has_category("ordinal_suffix");
            if ordinal {
                ts.move_position_forward_by(next_not_ignore + 2);
                break; // raw number followed by st/nd/rd/th ends it, e.g. 407th
            }
        } else {
            break; // random token encountered, number is terminated
        }

        ts.move_position_forward_by(next_not_ignore + 1);
        if ts.get(-1).has_category("ordinal") {
            // ordinal number encountered, nothing else can follow
            ordinal = true;
            break;
        }
    }

    if hundred < 0 && ten < 0 && digit < 0 {
        None
    } else {
        Some(
            Number::integer(hundred.max(0) + ten.max(0) + digit.max(0)).with_ordinal(ordinal),
        )
    }
}
