//! English number and date/time extraction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use parlance_extract::{datetime_utils, duration_utils, number_utils};
use parlance_foundation::{util, Duration, Number, Result};
use parlance_lexer::{Token, TokenStream, Tokenizer};

/// The embedded English tokenizer configuration.
pub const CONFIG_JSON: &str = include_str!("../config/en-us/tokenizer.json");

/// Builds the English tokenizer.
///
/// # Errors
///
/// Fails when the embedded configuration does not validate.
pub fn tokenizer() -> Result<Tokenizer> {
    Tokenizer::from_json("en", CONFIG_JSON)
}

/// English number extraction: short or long scale, ordinals, fractions,
/// decimal points, suffix multipliers and year-style phrasings.
pub struct EnglishNumberExtractor {
    short_scale: bool,
}

impl EnglishNumberExtractor {
    /// Creates an extractor using the given scale for large number names.
    #[must_use]
    pub fn new(short_scale: bool) -> Self {
        Self { short_scale }
    }

    /// Extracts one number, preferring the ordinal interpretation of
    /// ambiguous words ("third" -> 3rd rather than 1/3).
    pub fn number_prefer_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts) // first try e.g. dozen
            .or_else(|| self.number_sign_point(ts, true));

        // maybe there is a valid denominator (number may be None, e.g. "a tenth")
        self.divide_by_denominator_if_possible(ts, number)
    }

    /// Extracts one number, preferring the fraction interpretation of
    /// ambiguous words ("third" -> 1/3 rather than 3rd).
    pub fn number_prefer_fraction(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts) // first try e.g. dozen
            .or_else(|| self.number_sign_point(ts, false));

        match number {
            // maybe an ordinal number?
            None => self.number_sign_point(ts, true),
            // maybe there is a valid denominator?
            // note that e.g. "a couple halves" ends up here, but that's valid
            Some(_) => self.divide_by_denominator_if_possible(ts, number),
        }
    }

    /// Extracts one number, never consuming ordinal words. Used by duration
    /// and date/time parsing.
    pub fn number_no_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, false));

        self.divide_by_denominator_if_possible(ts, number)
    }

    /// Extracts one number in integer-only mode: no decimal points and no
    /// fractions, only whole values and integer suffix multipliers.
    pub fn number_must_be_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier_integer(ts)
            .or_else(|| number_utils::sign_before_number(ts, |ts| self.number_integer(ts, true)))?;

        // e.g. "two dozen" is still an integer
        match self.number_suffix_multiplier_integer(ts) {
            None => Some(number),
            Some(multiplier) => Some(number.multiply(&multiplier)),
        }
    }

    /// Turns a just-parsed number into a fraction when an ordinal
    /// denominator or a suffix multiplier follows it.
    fn divide_by_denominator_if_possible(
        &self,
        ts: &mut TokenStream,
        number_to_edit: Option<Number>,
    ) -> Option<Number> {
        let Some(number_to_edit) = number_to_edit else {
            // no numerator; "a" plus an ordinal still makes a fraction,
            // e.g. "a tenth"
            if ts.get(0).is_value("a") {
                let original_position = ts.position();
                ts.move_position_forward_by(1);

                if let Some(denominator) = self.number_integer(ts, true) {
                    if denominator.is_ordinal() && denominator.more_than(2.0) {
                        return Some(Number::integer(1).divide(&denominator));
                    }
                }
                // missing or invalid denominator, e.g. "a hello", "a four"
                ts.set_position(original_position);
            }
            return None;
        };

        // a number directly followed by an ordinal number is a fraction,
        // but only if it is not already ordinal or decimal (a huge long
        // scale integer is decimal; assume no fraction ever follows one)
        if !number_to_edit.is_ordinal()
            && !number_to_edit.is_decimal()
            && !ts.get(0).has_category("ignore")
        {
            let original_position = ts.position();
            match self.number_integer(ts, true) {
                None => {
                    // no denominator: maybe a suffix multiplier, e.g. half, dozen
                    if ts.get(0).has_category("suffix_multiplier") {
                        ts.move_position_forward_by(1);

                        if let Some(multiplier) = ts.get(-1).number().copied() {
                            if let Some(d) = multiplier.decimal_value() {
                                let reciprocal = 1.0 / d;
                                #[allow(clippy::cast_possible_truncation)]
                                if (reciprocal as i64) as f64 == reciprocal {
                                    // an exact fraction: divide by the integer
                                    // reciprocal to keep integerness, so that
                                    // e.g. "sixteen quarters" is 4, not 4.0
                                    return Some(
                                        number_to_edit.divide_i64(reciprocal as i64),
                                    );
                                }
                            }
                            return Some(number_to_edit.multiply(&multiplier));
                        }
                    }
                }
                Some(denominator)
                    if denominator.is_ordinal() && denominator.more_than(2.0) =>
                {
                    // valid denominator, e.g. "one fifth"
                    return Some(number_to_edit.divide(&denominator));
                }
                Some(_) => {
                    // invalid denominator, e.g. "three two", "four second"
                    ts.set_position(original_position);
                }
            }
        }
        Some(number_to_edit)
    }

    /// A bare suffix multiplier, optionally preceded by "a": "dozen",
    /// "a quarter".
    fn number_suffix_multiplier(&self, ts: &mut TokenStream) -> Option<Number> {
        if ts.get(0).has_category("suffix_multiplier") {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied()
        } else if ts.get(0).is_value("a") && ts.get(1).has_category("suffix_multiplier") {
            ts.move_position_forward_by(2); // also skip "a", e.g. "a dozen"
            ts.get(-1).number().copied()
        } else {
            None
        }
    }

    /// Like [`Self::number_suffix_multiplier`] but only for integer-valued
    /// multipliers (dozen and score, but not half or percent).
    fn number_suffix_multiplier_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        let integer_suffix =
            |t: &Token| t.has_category("suffix_multiplier") && t.number().is_some_and(Number::is_integer);
        if integer_suffix(ts.get(0)) {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied()
        } else if ts.get(0).is_value("a") && integer_suffix(ts.get(1)) {
            ts.move_position_forward_by(2);
            ts.get(-1).number().copied()
        } else {
            None
        }
    }

    fn number_sign_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        number_utils::sign_before_number(ts, |ts| self.number_point(ts, allow_ordinal))
    }

    /// An integer possibly followed by a decimal point ("twenty one point
    /// four five") or a fraction separator ("twenty divided by a hundred").
    #[allow(clippy::cast_possible_wrap)]
    pub fn number_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let n = self.number_integer(ts, allow_ordinal);
        if n.as_ref().is_some_and(Number::is_ordinal) {
            return n; // no point or fraction separator after an ordinal number
        }

        if ts.get(0).has_category("point") {
            if !ts.get(1).has_category("digit_after_point")
                && (!number_utils::is_raw_number(ts.get(1))
                    || ts.get(2).has_category("ordinal_suffix"))
            {
                // a point with no digits after it is not part of the number;
                // also stop before ordinal raw numbers, e.g. "point 2nd"
                return n;
            }

            ts.move_position_forward_by(1);
            let mut value = n.unwrap_or_else(|| Number::decimal(0.0)); // "point five"

            let mut magnitude = 0.1;
            if ts.get(0).value().len() > 1 && number_utils::is_raw_number(ts.get(0)) {
                // a whole run of raw digits after the point, e.g. .0123
                let digits: Vec<i64> = ts
                    .get(0)
                    .value()
                    .bytes()
                    .map(|b| i64::from(b - b'0'))
                    .collect();
                for digit in digits {
                    #[allow(clippy::cast_precision_loss)]
                    {
                        value = value.plus_f64(digit as f64 * magnitude);
                    }
                    magnitude /= 10.0;
                }
                ts.move_position_forward_by(1);
            } else {
                // read digits one token at a time, e.g. point one six 5 one
                loop {
                    if ts.get(0).has_category("digit_after_point")
                        || (ts.get(0).value().len() == 1
                            && number_utils::is_raw_number(ts.get(0))
                            && !ts.get(1).has_category("ordinal_suffix"))
                    {
                        let digit = ts.get(0).number().copied()?;
                        value = value.plus(&digit.multiply_f64(magnitude));
                        magnitude /= 10.0;
                    } else {
                        break; // reached a word that is not a valid digit
                    }
                    ts.move_position_forward_by(1);
                }
            }
            return Some(value);
        } else if let Some(value) = n {
            if ts.get(0).has_category("fraction_separator") {
                // a fraction, e.g. "twenty divided by one hundred"
                let original_position = ts.position();
                ts.move_position_forward_by(1);
                if ts.get(0).has_category("fraction_separator_secondary") {
                    ts.move_position_forward_by(1); // e.g. "by" after "divided"
                }

                match self.number_integer(ts, false) {
                    Some(denominator) if !denominator.is_zero() => {
                        return Some(value.divide(&denominator));
                    }
                    // not a fraction, or division by zero
                    _ => ts.set_position(original_position),
                }
            }
        }

        n
    }

    /// An integer made of number groups, year phrasings ("nineteen oh
    /// two"), "xx hundred" forms and comma-separated raw thousands.
    pub fn number_integer(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let n = number_utils::number_made_of_groups(ts, |ts, last_multiplier| {
            if self.short_scale {
                number_utils::number_group_short_scale(ts, allow_ordinal, last_multiplier)
            } else {
                number_utils::number_group_long_scale(ts, allow_ordinal, last_multiplier)
            }
        });
        let Some(mut n) = n else {
            // try big raw numbers (>= 1000), e.g. 1207
            return number_utils::number_big_raw(ts, allow_ordinal);
        };
        if n.is_ordinal() {
            return Some(n); // the ordinal word comes last, e.g. million twelfth
        }

        if n.less_than(21.0) && n.more_than(9.0) && !ts.get(-1).has_category("raw") {
            // years from 1001 to 2099 in two-group form, e.g. "nineteen
            // eighty four" (xx-hundred is handled below instead)
            if let Some(second_group) = self.number_year_second_group(ts, allow_ordinal) {
                return Some(
                    n.multiply_i64(100)
                        .plus(&second_group)
                        .with_ordinal(second_group.is_ordinal()),
                );
            }
        }

        if n.less_than(100.0) {
            let next_not_ignore = ts.index_of_without_category("ignore", 0);
            if ts.get(next_not_ignore).has_category("hundred") {
                // numbers suffixed by hundred, e.g. twenty six hundred -> 2600
                let ordinal = ts.get(next_not_ignore).has_category("ordinal");
                if allow_ordinal || !ordinal {
                    ts.move_position_forward_by(next_not_ignore + 1);
                    return Some(n.multiply_i64(100).with_ordinal(ordinal));
                }
            }
        }

        if n.less_than(1000.0)
            && number_utils::is_raw_number(ts.get(-1))
            && ts.get(0).has_category("thousand_separator")
            && ts.get(1).value().len() == 3
            && number_utils::is_raw_number(ts.get(1))
        {
            // comma-separated raw thousands, e.g. 123,045,006
            let original_position = ts.position() - 1;

            while ts.get(0).has_category("thousand_separator")
                && ts.get(1).value().len() == 3
                && number_utils::is_raw_number(ts.get(1))
            {
                let Some(chunk) = ts.get(1).number().copied() else {
                    break;
                };
                n = n.multiply_i64(1000).plus(&chunk);
                ts.move_position_forward_by(2); // no ignored words in between
            }

            if ts.get(0).has_category("ordinal_suffix") {
                if allow_ordinal {
                    ts.move_position_forward_by(1);
                    return Some(n.with_ordinal(true)); // e.g. 20,056,789th
                }
                ts.set_position(original_position);
                return None;
            }
        }

        Some(n) // e.g. six million, three hundred and twenty seven
    }

    /// The last two digits of a year: "oh five" -> 05, "nineteen" -> 19,
    /// "eighty two" -> 82, "41" -> 41.
    fn number_year_second_group(
        &self,
        ts: &mut TokenStream,
        allow_ordinal: bool,
    ) -> Option<Number> {
        // use next_not_ignore to skip e.g. the dash in (nineteen)-oh-two
        let next_not_ignore = ts.index_of_without_category("ignore", 0);

        if ts.get(next_not_ignore).is_number_equal_to(0) {
            let digit_index = ts.index_of_without_category("ignore", next_not_ignore + 1);
            let ordinal = ts.get(digit_index).has_category("ordinal");
            if ts
                .get(digit_index)
                .number()
                .is_some_and(|n| n.less_than(10.0))
                && (allow_ordinal || !ordinal)
            {
                // oh/nought/zero/0 + digit, e.g. (sixteen) oh one -> (16)01
                let digit = ts.get(digit_index).number().copied()?;
                ts.move_position_forward_by(digit_index + 1);
                return Some(digit.with_ordinal(ordinal));
            }
        } else if ts.get(next_not_ignore).has_category("teen") {
            // teen, e.g. (twenty) thirteen -> (20)13
            let ordinal = ts.get(next_not_ignore).has_category("ordinal");
            if !allow_ordinal && ordinal {
                return None;
            }
            let teen = ts.get(next_not_ignore).number().copied()?;
            ts.move_position_forward_by(next_not_ignore + 1);
            return Some(teen.with_ordinal(ordinal));
        } else if ts.get(next_not_ignore).value().len() == 2
            && number_utils::is_raw_number(ts.get(next_not_ignore))
        {
            // raw two-digit number, e.g. (twenty) 41 -> (20)41
            let ordinal = ts.get(next_not_ignore + 1).has_category("ordinal_suffix");
            if !allow_ordinal && ordinal {
                return None;
            }
            let raw = ts.get(next_not_ignore).number().copied()?;
            ts.move_position_forward_by(next_not_ignore + if ordinal { 2 } else { 1 });
            return Some(raw.with_ordinal(ordinal));
        } else if ts.get(next_not_ignore).has_category("tens") {
            // tens (+ digit), e.g. (nineteen) eighty four -> (19)84
            let tens = ts.get(next_not_ignore).number().copied()?;
            if ts.get(next_not_ignore).has_category("ordinal") {
                if allow_ordinal {
                    // nothing follows an ordinal, e.g. (twenty) twentieth
                    ts.move_position_forward_by(next_not_ignore + 1);
                    return Some(tens.with_ordinal(true));
                }
                return None;
            }
            ts.move_position_forward_by(next_not_ignore + 1);

            let digit_index = ts.index_of_without_category("ignore", 0);
            let ordinal = ts.get(digit_index).has_category("ordinal");
            if ts.get(digit_index).has_category("digit") && (allow_ordinal || !ordinal) {
                let digit = ts.get(digit_index).number().copied()?;
                ts.move_position_forward_by(digit_index + 1);
                return Some(tens.plus(&digit).with_ordinal(ordinal));
            }
            // the digit is optional, e.g. (seventeen) fifty -> (17)50
            return Some(tens);
        }

        None // invalid second year group
    }
}

/// English date/time extraction, resolved against a reference "now".
pub struct EnglishDateTimeExtractor {
    prefer_month_before_day: bool,
    now: NaiveDateTime,
    numbers: EnglishNumberExtractor,
}

impl EnglishDateTimeExtractor {
    /// Creates an extractor resolving relative phrases against `now`.
    #[must_use]
    pub fn new(short_scale: bool, prefer_month_before_day: bool, now: NaiveDateTime) -> Self {
        Self {
            prefer_month_before_day,
            now,
            numbers: EnglishNumberExtractor::new(short_scale),
        }
    }

    fn integer_in_range(
        &self,
        ts: &mut TokenStream,
        from: i64,
        to: i64,
        allow_ordinal: bool,
    ) -> Option<i64> {
        // fractions are disallowed: / separates day/month/year instead
        number_utils::extract_one_integer_in_range(ts, from, to, |ts| {
            number_utils::sign_before_number(ts, |ts| {
                self.numbers.number_integer(ts, allow_ordinal)
            })
        })
    }

    /// Extracts one date/time at the current position.
    ///
    /// Natural language allows both date-then-time and time-then-date;
    /// both orders are tried and the longer match wins.
    pub fn date_time(&self, ts: &mut TokenStream) -> Option<NaiveDateTime> {
        ts.first_which_uses_most_tokens(&mut [
            &mut |ts: &mut TokenStream| self.date_time_ordered(ts, false),
            &mut |ts: &mut TokenStream| self.date_time_ordered(ts, true),
        ])
    }

    fn date_time_ordered(&self, ts: &mut TokenStream, time_first: bool) -> Option<NaiveDateTime> {
        let mut date: Option<NaiveDate> = None;
        let mut time: Option<NaiveTime> = None;

        if !time_first {
            // special days first, since they may use duration-related words
            date = self.relative_special_day(ts);

            if date.is_none() {
                // then durations, since otherwise numbers would be
                // interpreted as date days
                let duration = self
                    .relative_duration(ts)
                    .or_else(|| datetime_utils::relative_month_duration(ts, self.now));
                match duration {
                    None => date = self.date(ts),
                    Some(d) if d.nanos == 0 && d.days != 0 => {
                        // the duration names a day and no time, so a time can follow
                        date = Some(d.apply_as_offset(self.now)?.date());
                    }
                    Some(d) if d.nanos != 0 && d.days == 0 && d.months == 0 && d.years == 0 => {
                        // the duration names a time, so a date could follow
                        time = Some(d.apply_as_offset(self.now)?.time());
                    }
                    // mixed date and time, or units >= month: nothing can follow
                    Some(d) => return d.apply_as_offset(self.now),
                }
            }
        }

        if time.is_none() {
            let have_date = date.is_some();
            time = ts.try_or_skip_datetime_ignore(have_date, |ts| self.time_with_ampm(ts));
        }

        if date.is_none() && time.is_some() {
            // try to extract a date after the time
            let original_position = ts.position();
            let duration = ts.try_or_skip_datetime_ignore(true, |ts| self.relative_duration(ts));
            match duration {
                None => {
                    date = ts.try_or_skip_datetime_ignore(true, |ts| {
                        self.relative_special_day(ts).or_else(|| self.date(ts))
                    });
                }
                Some(d) if d.nanos == 0 && d.days != 0 => {
                    date = Some(d.apply_as_offset(self.now)?.date());
                }
                Some(_) => ts.set_position(original_position),
            }
        }

        match (date, time) {
            (None, None) => None,
            (None, Some(time)) => Some(NaiveDateTime::new(self.now.date(), time)),
            (Some(date), None) => Some(NaiveDateTime::new(date, self.now.time())),
            (Some(date), Some(time)) => Some(NaiveDateTime::new(date, time)),
        }
    }

    /// A time with an optional am/pm marker or moment-of-day word on
    /// either side.
    #[allow(clippy::cast_sign_loss)]
    pub fn time_with_ampm(&self, ts: &mut TokenStream) -> Option<NaiveTime> {
        let mut time = self.time(ts);
        let pm: Option<bool>;
        if time.is_none() {
            // maybe a moment of day (not am/pm though) precedes the time?
            let moment_of_day = self.moment_of_day(ts)?;

            time = ts.try_or_skip_datetime_ignore(true, |ts| self.time(ts));
            match time {
                // a moment of day without a specific time
                None => return NaiveTime::from_hms_opt(moment_of_day as u32, 0, 0),
                // the moment of day determines am/pm
                Some(_) => pm = Some(datetime_utils::is_moment_of_day_pm(moment_of_day)),
            }
        } else {
            // found a time, now look for am/pm or a moment of day
            pm = ts.try_or_skip_datetime_ignore(true, |ts| {
                datetime_utils::ampm(ts).or_else(|| {
                    self.moment_of_day(ts)
                        .map(datetime_utils::is_moment_of_day_pm)
                })
            });
        }

        let mut time = time?;
        if time.hour() != 0 {
            // am/pm must not do anything after 0 (e.g. 0pm)
            if let Some(pm) = pm {
                if !pm && time.hour() == 12 {
                    // 12 AM is midnight
                    time = time.with_hour(0)?;
                } else if pm && !datetime_utils::is_moment_of_day_pm(i64::from(time.hour())) {
                    // the time must be in the afternoon but is not: correct it
                    time = time.with_hour((time.hour() + 12) % 24)?;
                }
            }
        }
        Some(time)
    }

    /// A plain time: hour, then optionally o'clock, or minutes and seconds.
    #[allow(clippy::cast_sign_loss)]
    pub fn time(&self, ts: &mut TokenStream) -> Option<NaiveTime> {
        let original_position = ts.position();
        let special_minute = self.special_minute(ts);

        // try a normal hour and noon/midnight-like words
        let hour = self.noon_midnight_like(ts).or_else(|| self.hour(ts));
        let Some(hour) = hour else {
            ts.set_position(original_position);
            return None;
        };
        if let Some(special_minute) = special_minute {
            // a special minute can only be used together with an hour
            return if special_minute < 0 {
                // e.g. quarter to six
                NaiveTime::from_hms_opt(
                    ((hour + 24 - 1) % 24) as u32,
                    (60 + special_minute) as u32,
                    0,
                )
            } else {
                // e.g. half past seven
                NaiveTime::from_hms_opt(hour as u32, special_minute as u32, 0)
            };
        }
        let mut result = NaiveTime::from_hms_opt(hour as u32, 0, 0)?;

        if self.o_clock(ts) {
            return Some(result); // e.g. ten o'clock
        }

        let minute = ts.try_or_skip_datetime_ignore(true, |ts| {
            datetime_utils::minute(ts, |ts, from, to| self.integer_in_range(ts, from, to, false))
        });
        let Some(minute) = minute else {
            return Some(result);
        };
        result = result.with_minute(minute as u32)?;

        let second = ts.try_or_skip_datetime_ignore(true, |ts| {
            datetime_utils::second(ts, |ts, from, to| self.integer_in_range(ts, from, to, false))
        });
        let Some(second) = second else {
            return Some(result);
        };
        result.with_second(second as u32)
    }

    /// A date: optional weekday, day, month (name or number), BC/AD marker
    /// and year, with the configured day/month preference for all-numeric
    /// forms.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::too_many_lines)]
    pub fn date(&self, ts: &mut TokenStream) -> Option<NaiveDate> {
        let mut result = self.now.date();

        let day_of_week = datetime_utils::day_of_week(ts);
        let first_num = ts.try_or_skip_datetime_ignore(day_of_week.is_some(), |ts| {
            self.integer_in_range(ts, 1, 31, true)
        });

        if first_num.is_none() {
            if let Some(day_of_week) = day_of_week {
                let delta = day_of_week - i64::from(result.weekday().num_days_from_monday());
                return result.checked_add_signed(chrono::Duration::days(delta));
            }
        }

        // set the month to January before setting the day below: January
        // has 31 days, so with_day always succeeds, and the month is
        // overwritten or reset afterwards anyway
        let month_name = ts.try_or_skip_datetime_ignore(first_num.is_some(), |ts| {
            datetime_utils::month_name(ts)
        });
        if let Some(month_name) = month_name {
            result = result.with_month(1)?;

            let day = match first_num {
                None => ts
                    .try_or_skip_datetime_ignore(true, |ts| self.integer_in_range(ts, 1, 31, true))
                    .unwrap_or(1),
                Some(first_num) => first_num,
            };
            result = result.with_day(day as u32)?;

            // set the month after the day, coercing the day of month into
            // the month's number of days if needed
            result = datetime_utils::with_month_coerced(result, month_name as u32)?;
        } else {
            match first_num {
                None => {
                    result = result.with_month(1)?.with_day(1)?;
                }
                Some(first_num) => {
                    let second_num_max = if first_num <= 12 { 31 } else { 12 };
                    let second_num = ts.try_or_skip_datetime_ignore(true, |ts| {
                        self.integer_in_range(ts, 1, second_num_max, true)
                    });

                    match second_num {
                        None => {
                            return if self.prefer_month_before_day && first_num <= 12 {
                                let base = result.with_month(1)?.with_day(1)?;
                                datetime_utils::with_month_coerced(base, first_num as u32)
                            } else {
                                let original_month = result.month();
                                let base = result.with_month(1)?.with_day(first_num as u32)?;
                                datetime_utils::with_month_coerced(base, original_month)
                            };
                        }
                        Some(second_num) => {
                            let (day, month) = if (self.prefer_month_before_day
                                || second_num > 12)
                                && first_num <= 12
                            {
                                (second_num, first_num)
                            } else {
                                // second_num is surely <= 12 here because of
                                // second_num_max
                                (first_num, second_num)
                            };
                            let base = result.with_month(1)?.with_day(day as u32)?;
                            result = datetime_utils::with_month_coerced(base, month as u32)?;
                        }
                    }
                }
            }
        }
        let day_or_month_found = first_num.is_some() || month_name.is_some();

        // the era marker might also come before the year
        let mut bcad = ts.try_or_skip_datetime_ignore(day_or_month_found, |ts| self.bcad(ts));

        let year = ts.try_or_skip_datetime_ignore(day_or_month_found && bcad.is_none(), |ts| {
            self.integer_in_range(ts, 0, 262_142, false)
        });
        let Some(year) = year else {
            return day_or_month_found.then_some(result);
        };

        if bcad.is_none() {
            bcad = self.bcad(ts);
        }
        let signed_year = (year as i32) * if bcad == Some(false) { -1 } else { 1 };
        datetime_utils::with_year_coerced(result, signed_year)
    }

    /// A BC/AD marker, also consuming a trailing era word ("before the
    /// common era").
    fn bcad(&self, ts: &mut TokenStream) -> Option<bool> {
        let bcad = datetime_utils::bcad(ts);
        if bcad == Some(false) {
            let next_not_ignore = ts.index_of_without_category("date_time_ignore", 0);
            if ts.get(next_not_ignore).has_category("bcad_era") {
                ts.move_position_forward_by(next_not_ignore + 1);
            }
        }
        bcad
    }

    fn noon_midnight_like(&self, ts: &mut TokenStream) -> Option<i64> {
        self.noon_midnight_like_or_moment_of_day(ts, "noon_midnight_like")
    }

    fn moment_of_day(&self, ts: &mut TokenStream) -> Option<i64> {
        // noon and midnight are part of moment_of_day, so they are included
        self.noon_midnight_like_or_moment_of_day(ts, "moment_of_day")
    }

    fn noon_midnight_like_or_moment_of_day(
        &self,
        ts: &mut TokenStream,
        category: &str,
    ) -> Option<i64> {
        let original_position = ts.position();

        let mut relative_indicator = 0; // 0 = not found, otherwise the sign
        if ts.get(0).has_category("pre_special_hour") {
            // a word that usually comes before special hours, e.g. this, after
            if ts.get(0).has_category("pre_relative_indicator") {
                relative_indicator = if ts.get(0).has_category("negative") {
                    -1
                } else {
                    1
                };
                // only skip to the next non-ignorable with a relative indicator
                ts.move_position_forward_by(
                    ts.index_of_without_category("date_time_ignore", 1),
                );
            } else {
                ts.move_position_forward_by(1);
            }
        }

        if ts.get(0).has_category(category) {
            // a special hour, e.g. midnight, evening, lunchtime
            let hour = ts.get(0).number().and_then(Number::integer_value);
            ts.move_position_forward_by(1);
            if let Some(hour) = hour {
                return Some((hour + 24 + relative_indicator) % 24);
            }
        }

        // no special hour found
        ts.set_position(original_position);
        None
    }

    fn hour(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        // skip words that usually come before hours, e.g. "at"
        ts.move_position_forward_by(ts.index_of_without_category("pre_hour", 0));

        let Some(number) = self.integer_in_range(ts, 0, 24, false) else {
            // no number, or not a valid hour, e.g. "at twenty six"
            ts.set_position(original_position);
            return None;
        };

        Some(number % 24) // transform 24 into 0
    }

    /// Minutes phrased before the hour: "quarter past", "ten to".
    /// Negative values mean minutes before the hour.
    fn special_minute(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        ts.move_position_forward_by(ts.index_of_without_category("pre_hour", 0));

        if let Some(number) = self.numbers.number_no_ordinal(ts) {
            let minutes = if let Some(d) =
                number.decimal_value().filter(|d| *d > 0.0 && *d < 1.0)
            {
                // e.g. "three quarters past one"
                Some(util::round_to_i64(d * 60.0))
            } else {
                // e.g. "ten to eleven"
                number.integer_value().filter(|i| *i > 1 && *i < 60)
            };

            if let Some(minutes) = minutes {
                let result = ts.try_or_skip_datetime_ignore(true, |ts| {
                    if ts.get(0).has_category("special_minute_after") {
                        ts.move_position_forward_by(1);
                        Some(minutes) // e.g. half past twelve
                    } else if ts.get(0).has_category("special_minute_before") {
                        ts.move_position_forward_by(1);
                        Some(-minutes) // e.g. quarter to eleven
                    } else {
                        None
                    }
                });
                if result.is_some() {
                    return result;
                }
            }
        }

        ts.set_position(original_position);
        None
    }

    fn o_clock(&self, ts: &mut TokenStream) -> bool {
        if ts.get(0).has_category("pre_oclock") {
            let next_not_ignore = ts.index_of_without_category("date_time_ignore", 1);
            if ts.get(next_not_ignore).has_category("post_oclock") {
                ts.move_position_forward_by(next_not_ignore + 1);
                return true;
            }
        } else if ts.get(0).has_category("oclock_combined") {
            ts.move_position_forward_by(1);
            return true;
        }
        false
    }

    fn relative_special_day(&self, ts: &mut TokenStream) -> Option<NaiveDate> {
        let days = self
            .relative_yesterday(ts)
            .or_else(|| datetime_utils::relative_today(ts))
            .or_else(|| self.relative_tomorrow(ts))
            .or_else(|| {
                datetime_utils::relative_day_of_week_duration(ts, self.now, |ts, from, to| {
                    self.integer_in_range(ts, from, to, false)
                })
            })?;
        self.now
            .date()
            .checked_add_signed(chrono::Duration::days(days))
    }

    fn relative_yesterday(&self, ts: &mut TokenStream) -> Option<i64> {
        if ts.get(0).has_category("day_adder_the")
            && ts.get(1).has_category("day_adder_day")
            && ts.get(2).has_category("day_adder_before")
            && ts.get(3).has_category("yesterday")
        {
            ts.move_position_forward_by(4);
            return Some(-2); // e.g. the day before yesterday
        }

        // "the" is optional
        if ts.get(0).has_category("day_adder_day")
            && ts.get(1).has_category("day_adder_before")
            && ts.get(2).has_category("yesterday")
        {
            ts.move_position_forward_by(3);
            return Some(-2); // e.g. day before yesterday
        }

        if ts.get(0).has_category("yesterday") {
            ts.move_position_forward_by(1);
            return Some(-1);
        }
        None
    }

    fn relative_tomorrow(&self, ts: &mut TokenStream) -> Option<i64> {
        if ts.get(0).has_category("day_adder_the")
            && ts.get(1).has_category("day_adder_day")
            && ts.get(2).has_category("day_adder_after")
            && ts.get(3).has_category("tomorrow")
        {
            ts.move_position_forward_by(4);
            return Some(2); // e.g. the day after tomorrow
        }

        // "the" is optional
        if ts.get(0).has_category("day_adder_day")
            && ts.get(1).has_category("day_adder_after")
            && ts.get(2).has_category("tomorrow")
        {
            ts.move_position_forward_by(3);
            return Some(2); // e.g. day after tomorrow
        }

        if ts.get(0).has_category("tomorrow") {
            ts.move_position_forward_by(1);
            return Some(1);
        }
        None
    }

    fn relative_duration(&self, ts: &mut TokenStream) -> Option<Duration> {
        datetime_utils::relative_indicator_duration(
            ts,
            |ts| duration_utils::duration(ts, |ts| self.numbers.number_no_ordinal(ts)),
            |duration| duration.multiply_i64(-1),
        )
    }
}
