//! Swedish number and date/time extraction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use parlance_extract::{datetime_utils, duration_utils, number_utils};
use parlance_foundation::{util, Duration, Number, Result};
use parlance_lexer::{TokenStream, Tokenizer};

/// The embedded Swedish tokenizer configuration.
pub const CONFIG_JSON: &str = include_str!("../config/sv-se/tokenizer.json");

/// Builds the Swedish tokenizer.
///
/// # Errors
///
/// Fails when the embedded configuration does not validate.
pub fn tokenizer() -> Result<Tokenizer> {
    Tokenizer::from_json("sv", CONFIG_JSON)
}

/// Swedish number extraction.
///
/// Swedish only supports the long scale, and its configuration carries the
/// real magnitudes for the milliard-style words ("miljard" is 10^9), so the
/// long-scale group parser runs with an identity multiplier remap. The
/// articles "en"/"ett" need special care: "en" is ignorable filler except
/// before a multiplier or a fraction, while "ett" is the digit one.
pub struct SwedishNumberExtractor;

impl SwedishNumberExtractor {
    /// Creates an extractor. The short/long scale preference is ignored,
    /// since Swedish numbers are long scale only.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts one number, preferring the ordinal interpretation.
    pub fn number_prefer_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, true));
        self.divide_by_denominator_if_possible(ts, number)
    }

    /// Extracts one number, preferring the fraction interpretation.
    pub fn number_prefer_fraction(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, false));

        match self.divide_by_denominator_if_possible(ts, number) {
            // maybe an ordinal number?
            None => self.number_sign_point(ts, true),
            number => number,
        }
    }

    /// Extracts one number, never consuming ordinal words.
    pub fn number_no_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, false));
        self.divide_by_denominator_if_possible(ts, number)
    }

    /// Extracts one number in integer-only mode.
    pub fn number_must_be_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier_integer(ts)
            .or_else(|| number_utils::sign_before_number(ts, |ts| self.number_integer(ts, true)))?;

        match self.number_suffix_multiplier_integer(ts) {
            None => Some(number),
            Some(multiplier) => Some(number.multiply(&multiplier)),
        }
    }

    fn divide_by_denominator_if_possible(
        &self,
        ts: &mut TokenStream,
        number_to_edit: Option<Number>,
    ) -> Option<Number> {
        let Some(number_to_edit) = number_to_edit else {
            // "en femtedel" (a fifth): the article is the numerator
            if ts.get(0).is_value("en") || ts.get(0).is_value("ett") {
                let original_position = ts.position();
                ts.move_position_forward_by(1);

                if let Some(denominator) = self.number_integer(ts, true) {
                    if denominator.is_ordinal() && denominator.more_than(2.0) {
                        return Some(Number::integer(1).divide(&denominator));
                    }
                }
                ts.set_position(original_position);
            }
            return None;
        };

        if !number_to_edit.is_ordinal()
            && !number_to_edit.is_decimal()
            && !ts.get(0).has_category("ignore")
        {
            let original_position = ts.position();
            match self.number_integer(ts, true) {
                None => {
                    // no denominator: maybe a custom multiplier, e.g.
                    // halv (=0.5), dussin (=12)
                    if ts.get(0).has_category("suffix_multiplier") {
                        ts.move_position_forward_by(1);

                        if let Some(multiplier) = ts.get(-1).number().copied() {
                            if let Some(d) = multiplier.decimal_value() {
                                let reciprocal = 1.0 / d;
                                #[allow(clippy::cast_possible_truncation)]
                                if (reciprocal as i64) as f64 == reciprocal {
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
                    // valid denominator, e.g. "tva tredjedelar"
                    return Some(number_to_edit.divide(&denominator));
                }
                Some(_) => ts.set_position(original_position),
            }
        }
        Some(number_to_edit)
    }

    fn number_suffix_multiplier(&self, ts: &mut TokenStream) -> Option<Number> {
        if ts.get(0).has_category("suffix_multiplier") {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied()
        } else if (ts.get(0).is_value("en") || ts.get(0).is_value("ett"))
            && ts.get(1).has_category("suffix_multiplier")
        {
            ts.move_position_forward_by(2); // also skip the article, e.g. "en halv"
            ts.get(-1).number().copied()
        } else {
            None
        }
    }

    fn number_suffix_multiplier_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        let integer_suffix = |t: &parlance_lexer::Token| {
            t.has_category("suffix_multiplier") && t.number().is_some_and(Number::is_integer)
        };
        if integer_suffix(ts.get(0)) {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied()
        } else if (ts.get(0).is_value("en") || ts.get(0).is_value("ett"))
            && integer_suffix(ts.get(1))
        {
            ts.move_position_forward_by(2);
            ts.get(-1).number().copied()
        } else {
            None
        }
    }

    fn number_sign_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        number_utils::sign_before_number(ts, |ts| self.number_point(ts, allow_ordinal))
    }

    /// An integer possibly followed by "komma" digits or a fraction
    /// separator.
    pub fn number_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let n = self.number_integer(ts, allow_ordinal);
        if n.as_ref().is_some_and(Number::is_ordinal) {
            return n;
        }

        if ts.get(0).has_category("point") {
            if !ts.get(1).has_category("digit_after_point")
                && (!number_utils::is_raw_number(ts.get(1))
                    || ts.get(2).has_category("ordinal_suffix"))
            {
                return n;
            }

            ts.move_position_forward_by(1);
            let mut value = n.unwrap_or_else(|| Number::decimal(0.0));

            let mut magnitude = 0.1;
            if ts.get(0).value().len() > 1
                && number_utils::is_raw_number(ts.get(0))
                && ts.get(0).value().bytes().all(|b| b.is_ascii_digit())
            {
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
                        break;
                    }
                    ts.move_position_forward_by(1);
                }
            }
            return Some(value);
        } else if let Some(value) = n {
            if ts.get(0).has_category("fraction_separator") {
                let original_position = ts.position();
                ts.move_position_forward_by(1);
                if ts.get(0).has_category("fraction_separator_secondary") {
                    ts.move_position_forward_by(1);
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

    /// An integer made of long-scale groups, "xx hundra" year forms and
    /// space-separated raw thousands.
    pub fn number_integer(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        if ts.get(0).has_category("ignore")
            && (!(ts.get(0).is_value("en") || ts.get(0).is_value("ett"))
                || ts.get(1).has_category("ignore"))
        {
            // the articles "en"/"ett" may start a number ("en miljard"),
            // other ignorable words may not
            return None;
        }

        // Swedish uses the long scale, with true milliard-word values
        let n = number_utils::number_made_of_groups(ts, |ts, last_multiplier| {
            number_utils::number_group_long_scale_with(ts, allow_ordinal, last_multiplier, |n| *n)
        });
        let Some(mut n) = n else {
            return number_utils::number_big_raw(ts, allow_ordinal);
        };
        if n.is_ordinal() {
            return Some(n);
        }

        if n.less_than(100.0) {
            let next_not_ignore = ts.index_of_without_category("ignore", 0);
            if ts.get(next_not_ignore).has_category("hundred") {
                // year-style hundreds, e.g. "tjugosex hundra" -> 2600
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
            let original_position = ts.position() - 1;

            while ts.get(0).has_category("thousand_separator")
                && ts.get(1).value().len() == 3
                && number_utils::is_raw_number(ts.get(1))
            {
                let Some(chunk) = ts.get(1).number().copied() else {
                    break;
                };
                n = n.multiply_i64(1000).plus(&chunk);
                ts.move_position_forward_by(2);
            }

            if ts.get(0).has_category("ordinal_suffix") {
                if allow_ordinal {
                    ts.move_position_forward_by(1);
                    return Some(n.with_ordinal(true));
                }
                ts.set_position(original_position);
                return None;
            }
        }

        Some(n)
    }
}

impl Default for SwedishNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Swedish date/time extraction, resolved against a reference "now".
///
/// Mostly parallel with English, with one idiosyncrasy: "halv åtta" means
/// half past the *next* hour, i.e. 7:30, handled as a negative special
/// minute without a separator word.
pub struct SwedishDateTimeExtractor {
    prefer_month_before_day: bool,
    now: NaiveDateTime,
    numbers: SwedishNumberExtractor,
}

impl SwedishDateTimeExtractor {
    /// Creates an extractor resolving relative phrases against `now`.
    #[must_use]
    pub fn new(prefer_month_before_day: bool, now: NaiveDateTime) -> Self {
        Self {
            prefer_month_before_day,
            now,
            numbers: SwedishNumberExtractor::new(),
        }
    }

    fn integer_in_range(
        &self,
        ts: &mut TokenStream,
        from: i64,
        to: i64,
        allow_ordinal: bool,
    ) -> Option<i64> {
        number_utils::extract_one_integer_in_range(ts, from, to, |ts| {
            number_utils::sign_before_number(ts, |ts| {
                self.numbers.number_integer(ts, allow_ordinal)
            })
        })
    }

    /// Extracts one date/time at the current position; both orders are
    /// tried and the longer match wins.
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
            date = self.relative_special_day(ts);

            if date.is_none() {
                let duration = self
                    .relative_duration(ts)
                    .or_else(|| datetime_utils::relative_month_duration(ts, self.now));
                match duration {
                    None => date = self.date(ts),
                    Some(d) if d.nanos == 0 && d.days != 0 => {
                        date = Some(d.apply_as_offset(self.now)?.date());
                    }
                    Some(d) if d.nanos != 0 && d.days == 0 && d.months == 0 && d.years == 0 => {
                        time = Some(d.apply_as_offset(self.now)?.time());
                    }
                    Some(d) => return d.apply_as_offset(self.now),
                }
            }
        }

        if time.is_none() {
            let have_date = date.is_some();
            time = ts.try_or_skip_datetime_ignore(have_date, |ts| self.time_with_ampm(ts));
        }

        if date.is_none() && time.is_some() {
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

    #[allow(clippy::cast_sign_loss)]
    fn time_with_ampm(&self, ts: &mut TokenStream) -> Option<NaiveTime> {
        let mut time = self.time(ts);
        let pm: Option<bool>;
        if time.is_none() {
            let moment_of_day = self.moment_of_day(ts)?;

            time = ts.try_or_skip_datetime_ignore(true, |ts| self.time(ts));
            match time {
                None => return NaiveTime::from_hms_opt(moment_of_day as u32, 0, 0),
                Some(_) => pm = Some(datetime_utils::is_moment_of_day_pm(moment_of_day)),
            }
        } else {
            pm = ts.try_or_skip_datetime_ignore(true, |ts| {
                datetime_utils::ampm(ts).or_else(|| {
                    self.moment_of_day(ts)
                        .map(datetime_utils::is_moment_of_day_pm)
                })
            });
        }

        let mut time = time?;
        if time.hour() != 0 {
            if let Some(pm) = pm {
                if !pm && time.hour() == 12 {
                    time = time.with_hour(0)?;
                } else if pm && !datetime_utils::is_moment_of_day_pm(i64::from(time.hour())) {
                    time = time.with_hour((time.hour() + 12) % 24)?;
                }
            }
        }
        Some(time)
    }

    #[allow(clippy::cast_sign_loss)]
    fn time(&self, ts: &mut TokenStream) -> Option<NaiveTime> {
        let original_position = ts.position();
        let special_minute = self.special_minute(ts);

        let hour = self.noon_midnight_like(ts).or_else(|| self.hour(ts));
        let Some(hour) = hour else {
            ts.set_position(original_position);
            return None;
        };
        if let Some(special_minute) = special_minute {
            return if special_minute < 0 {
                // e.g. "kvart i sex", "halv åtta"
                NaiveTime::from_hms_opt(
                    ((hour + 24 - 1) % 24) as u32,
                    (60 + special_minute) as u32,
                    0,
                )
            } else {
                // e.g. "kvart över sju"
                NaiveTime::from_hms_opt(hour as u32, special_minute as u32, 0)
            };
        }
        let mut result = NaiveTime::from_hms_opt(hour as u32, 0, 0)?;

        let minute = ts.try_or_skip_datetime_ignore(true, |ts| {
            datetime_utils::minute(ts, |ts, from, to| {
                self.integer_in_range(ts, from, to, false)
            })
        });
        let Some(minute) = minute else {
            return Some(result);
        };
        result = result.with_minute(minute as u32)?;

        let second = ts.try_or_skip_datetime_ignore(true, |ts| {
            datetime_utils::second(ts, |ts, from, to| {
                self.integer_in_range(ts, from, to, false)
            })
        });
        let Some(second) = second else {
            return Some(result);
        };
        result.with_second(second as u32)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::too_many_lines)]
    fn date(&self, ts: &mut TokenStream) -> Option<NaiveDate> {
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

    /// A BC/AD marker, also consuming a trailing era word.
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
        self.noon_midnight_like_or_moment_of_day(ts, "moment_of_day")
    }

    fn noon_midnight_like_or_moment_of_day(
        &self,
        ts: &mut TokenStream,
        category: &str,
    ) -> Option<i64> {
        let original_position = ts.position();

        let mut relative_indicator = 0;
        if ts.get(0).has_category("pre_special_hour") {
            if ts.get(0).has_category("pre_relative_indicator") {
                relative_indicator = if ts.get(0).has_category("negative") {
                    -1
                } else {
                    1
                };
                ts.move_position_forward_by(
                    ts.index_of_without_category("date_time_ignore", 1),
                );
            } else {
                ts.move_position_forward_by(1);
            }
        }

        if ts.get(0).has_category(category) {
            let hour = ts.get(0).number().and_then(Number::integer_value);
            ts.move_position_forward_by(1);
            if let Some(hour) = hour {
                return Some((hour + 24 + relative_indicator) % 24);
            }
        }

        ts.set_position(original_position);
        None
    }

    fn hour(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        // skip words that usually come before hours, e.g. "klockan"
        ts.move_position_forward_by(ts.index_of_without_category("pre_hour", 0));

        let Some(number) = self.integer_in_range(ts, 0, 24, false) else {
            ts.set_position(original_position);
            return None;
        };

        Some(number % 24)
    }

    /// Minutes phrased before the hour: "kvart i", "kvart över", and the
    /// separator-less "halv" which counts towards the next hour.
    fn special_minute(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        ts.move_position_forward_by(ts.index_of_without_category("pre_hour", 0));

        if let Some(number) = self.numbers.number_no_ordinal(ts) {
            let minutes = if let Some(d) =
                number.decimal_value().filter(|d| *d > 0.0 && *d < 1.0)
            {
                Some(util::round_to_i64(d * 60.0))
            } else {
                number.integer_value().filter(|i| *i > 1 && *i < 60)
            };

            if let Some(minutes) = minutes {
                let result = ts.try_or_skip_datetime_ignore(true, |ts| {
                    if ts.get(0).has_category("special_minute_after") {
                        ts.move_position_forward_by(1);
                        Some(minutes) // e.g. kvart över sju
                    } else if ts.get(0).has_category("special_minute_before") {
                        ts.move_position_forward_by(1);
                        Some(-minutes) // e.g. kvart i elva
                    } else {
                        None
                    }
                });
                if result.is_some() {
                    return result;
                }
                if ts.get(-1).has_category("special_minute_next_hour") {
                    // "halv åtta" is half past the next hour, i.e. 7:30
                    return Some(-(60 - minutes));
                }
            }
        }

        ts.set_position(original_position);
        None
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
            return Some(-2);
        }

        if ts.get(0).has_category("day_adder_day")
            && ts.get(1).has_category("day_adder_before")
            && ts.get(2).has_category("yesterday")
        {
            ts.move_position_forward_by(3);
            return Some(-2); // e.g. dagen före igår
        }

        if ts.get(0).has_category("yesterday") {
            ts.move_position_forward_by(1);
            return Some(-1); // e.g. igår
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
            return Some(2);
        }

        if ts.get(0).has_category("day_adder_day")
            && ts.get(1).has_category("day_adder_after")
            && ts.get(2).has_category("tomorrow")
        {
            ts.move_position_forward_by(3);
            return Some(2); // e.g. dagen efter imorgon
        }

        if ts.get(0).has_category("tomorrow") {
            ts.move_position_forward_by(1);
            return Some(1); // e.g. imorgon
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
