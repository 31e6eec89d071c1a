//! Italian number and date/time extraction.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use parlance_extract::{datetime_utils, duration_utils, number_utils};
use parlance_foundation::{util, Duration, Number, Result};
use parlance_lexer::{TokenStream, Tokenizer};

/// The embedded Italian tokenizer configuration.
pub const CONFIG_JSON: &str = include_str!("../config/it-it/tokenizer.json");

/// Builds the Italian tokenizer.
///
/// # Errors
///
/// Fails when the embedded configuration does not validate.
pub fn tokenizer() -> Result<Tokenizer> {
    Tokenizer::from_json("it", CONFIG_JSON)
}

/// Italian number extraction.
///
/// Italian has a single scale ("miliardo" carries its own value), compound
/// number words handled by the tokenizer ("ventitre" -> venti tre), and no
/// bare-article suffix multipliers.
pub struct ItalianNumberExtractor;

impl ItalianNumberExtractor {
    /// Creates an extractor. Italian supports a single number scale.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts one number, preferring the ordinal interpretation.
    pub fn number_prefer_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, true))?;
        Some(self.divide_by_denominator_if_possible(ts, number))
    }

    /// Extracts one number, preferring the fraction interpretation.
    pub fn number_prefer_fraction(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, false));

        match number {
            // maybe an ordinal number?
            None => self.number_sign_point(ts, true),
            Some(number) => Some(self.divide_by_denominator_if_possible(ts, number)),
        }
    }

    /// Extracts one number, never consuming ordinal words.
    pub fn number_no_ordinal(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier(ts)
            .or_else(|| self.number_sign_point(ts, false))?;
        Some(self.divide_by_denominator_if_possible(ts, number))
    }

    /// Extracts one number in integer-only mode.
    pub fn number_must_be_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        let number = self
            .number_suffix_multiplier_integer(ts)
            .or_else(|| number_utils::sign_before_number(ts, |ts| self.number_integer(ts, true)))?;

        match self.number_suffix_multiplier_integer(ts) {
            None => Some(number),
            // e.g. "doppia dozzina" is still an integer
            Some(multiplier) => Some(number.multiply(&multiplier)),
        }
    }

    fn divide_by_denominator_if_possible(
        &self,
        ts: &mut TokenStream,
        number_to_edit: Number,
    ) -> Number {
        // a number directly followed by an ordinal number is a fraction,
        // but only if it is not already ordinal or decimal
        if !number_to_edit.is_ordinal()
            && !number_to_edit.is_decimal()
            && !ts.get(0).has_category("ignore")
        {
            let original_position = ts.position();
            match self.number_integer(ts, true) {
                None => {
                    // no denominator: maybe a suffix multiplier, e.g.
                    // mezzo (=0.5), dozzina (=12)
                    if ts.get(0).has_category("suffix_multiplier") {
                        ts.move_position_forward_by(1);

                        if let Some(multiplier) = ts.get(-1).number().copied() {
                            if let Some(d) = multiplier.decimal_value() {
                                let reciprocal = 1.0 / d;
                                #[allow(clippy::cast_possible_truncation)]
                                if (reciprocal as i64) as f64 == reciprocal {
                                    // an exact fraction: divide by the integer
                                    // reciprocal, so "sedici mezzi" is 8, not 8.0
                                    return number_to_edit.divide_i64(reciprocal as i64);
                                }
                            }
                            return number_to_edit.multiply(&multiplier);
                        }
                    }
                }
                Some(denominator)
                    if denominator.is_ordinal() && denominator.more_than(2.0) =>
                {
                    // valid denominator, e.g. "un quinto"
                    return number_to_edit.divide(&denominator);
                }
                Some(_) => {
                    // invalid denominator, e.g. "sei primi"
                    ts.set_position(original_position);
                }
            }
        }
        number_to_edit
    }

    fn number_suffix_multiplier(&self, ts: &mut TokenStream) -> Option<Number> {
        if ts.get(0).has_category("suffix_multiplier") {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied() // e.g. dozzina, mezzo, percento
        } else {
            None
        }
    }

    fn number_suffix_multiplier_integer(&self, ts: &mut TokenStream) -> Option<Number> {
        if ts.get(0).has_category("suffix_multiplier")
            && ts.get(0).number().is_some_and(Number::is_integer)
        {
            ts.move_position_forward_by(1);
            ts.get(-1).number().copied()
        } else {
            None
        }
    }

    fn number_sign_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        number_utils::sign_before_number(ts, |ts| self.number_point(ts, allow_ordinal))
    }

    /// An integer possibly followed by "virgola" digits or a fraction
    /// separator. Italian numbers cannot start with a bare "virgola".
    pub fn number_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let n = self.number_integer(ts, allow_ordinal)?;
        if n.is_ordinal() {
            return Some(n); // nothing follows an ordinal number
        }
        let mut value = n;

        if ts.get(0).has_category("point") {
            if !ts.get(1).has_category("digit_after_point")
                && (!number_utils::is_raw_number(ts.get(1))
                    || ts.get(2).has_category("ordinal_suffix"))
            {
                // a comma at the end of the number is not part of it
                return Some(value);
            }
            ts.move_position_forward_by(1);

            let mut magnitude = 0.1;
            if ts.get(0).value().len() > 1
                && number_utils::is_raw_number(ts.get(0))
                && ts.get(0).value().bytes().all(|b| b.is_ascii_digit())
            {
                // a whole run of raw digits after the comma, e.g. ,0123
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
                // read digits one token at a time, e.g. virgola uno sei 5
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
        } else if ts.get(0).has_category("fraction_separator") {
            // a fraction, e.g. "venti diviso cento"
            let mut separator_length = 1;
            if ts.get(1).has_category("fraction_separator_secondary") {
                separator_length = 2;
            }

            ts.move_position_forward_by(separator_length);
            match self.number_integer(ts, false) {
                Some(denominator) if !denominator.is_zero() => {
                    return Some(value.divide(&denominator));
                }
                _ => ts.move_position_forward_by(-separator_length), // not a fraction
            }
        }

        Some(value)
    }

    /// An integer made of short-scale groups plus raw-thousands forms.
    pub fn number_integer(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        if ts.get(0).has_category("ignore") {
            return None; // do not eat ignored words at the beginning
        }

        let n = number_utils::number_made_of_groups(ts, |ts, last_multiplier| {
            number_utils::number_group_short_scale(ts, allow_ordinal, last_multiplier)
        });
        let Some(mut n) = n else {
            // try big raw numbers (>= 1000), e.g. 1207
            return number_utils::number_big_raw(ts, allow_ordinal);
        };
        if n.is_ordinal() {
            return Some(n); // the ordinal word comes last, e.g. milionesimo
        }

        if n.less_than(1000.0)
            && number_utils::is_raw_number(ts.get(-1))
            && ts.get(0).has_category("thousand_separator")
            && ts.get(1).value().len() == 3
            && number_utils::is_raw_number(ts.get(1))
        {
            // dot-separated raw thousands, e.g. 123.045.006
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

impl Default for ItalianNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Italian date/time extraction, resolved against a reference "now".
///
/// Differences from English: minutes phrased after the hour ("e un
/// quarto"), split "mezzo giorno"/"mezza notte" forms, repeatable
/// "dopo"/"altro" day adders, and "mar" doubling as both Tuesday and March
/// (resolved in favor of Tuesday).
pub struct ItalianDateTimeExtractor {
    now: NaiveDateTime,
    numbers: ItalianNumberExtractor,
}

impl ItalianDateTimeExtractor {
    /// Creates an extractor resolving relative phrases against `now`.
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            numbers: ItalianNumberExtractor::new(),
        }
    }

    fn integer_in_range(&self, ts: &mut TokenStream, from: i64, to: i64) -> Option<i64> {
        // fractions are disallowed: / separates day/month/year instead
        number_utils::extract_one_integer_in_range(ts, from, to, |ts| {
            number_utils::sign_before_number(ts, |ts| self.numbers.number_integer(ts, false))
        })
    }

    /// Extracts one date/time at the current position; both date-then-time
    /// and time-then-date orders are tried and the longer match wins.
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

    /// A time with an optional moment-of-day word on either side.
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
        if pm == Some(true) && !datetime_utils::is_moment_of_day_pm(i64::from(time.hour())) {
            // the time must be in the afternoon but is not: correct it
            time = time.with_hour((time.hour() + 12) % 24)?;
        }
        Some(time)
    }

    /// A plain time: hour, then minutes (special or plain) and seconds.
    #[allow(clippy::cast_sign_loss)]
    fn time(&self, ts: &mut TokenStream) -> Option<NaiveTime> {
        // try both a normal hour and "mezzogiorno"/"mezzanotte"
        let hour = self.noon_midnight_like(ts).or_else(|| self.hour(ts))?;
        let mut result = NaiveTime::from_hms_opt(hour as u32, 0, 0)?;

        let minute = ts.try_or_skip_datetime_ignore(true, |ts| {
            self.special_minute(ts).or_else(|| {
                datetime_utils::minute(ts, |ts, from, to| self.integer_in_range(ts, from, to))
            })
        });
        let Some(minute) = minute else {
            return Some(result);
        };
        result = result.with_minute(minute as u32)?;

        let second = ts.try_or_skip_datetime_ignore(true, |ts| {
            datetime_utils::second(ts, |ts, from, to| self.integer_in_range(ts, from, to))
        });
        let Some(second) = second else {
            return Some(result);
        };
        result.with_second(second as u32)
    }

    /// A date in day, month, year order (Italian has no month-first form).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn date(&self, ts: &mut TokenStream) -> Option<NaiveDate> {
        let mut result = self.now.date();

        let day_of_week = self.day_of_week(ts);
        let day = ts.try_or_skip_datetime_ignore(day_of_week.is_some(), |ts| {
            self.integer_in_range(ts, 1, 31)
        });

        match day {
            None => {
                if let Some(day_of_week) = day_of_week {
                    let delta =
                        day_of_week - i64::from(result.weekday().num_days_from_monday());
                    return result.checked_add_signed(chrono::Duration::days(delta));
                }
                result = result.with_month(1)?.with_day(1)?;
            }
            Some(day) => {
                result = result.with_month(1)?.with_day(day as u32)?;
            }
        }

        let month = ts.try_or_skip_datetime_ignore(day.is_some(), |ts| {
            datetime_utils::month_name(ts)
                .or_else(|| self.integer_in_range(ts, 1, 12))
        });
        match month {
            None => {
                if day.is_some() {
                    // put the month back to the current one for e.g. "il 22"
                    return datetime_utils::with_month_coerced(result, self.now.date().month());
                }
            }
            Some(month) => {
                result = datetime_utils::with_month_coerced(result, month as u32)?;
            }
        }

        // if the month is missing then the day is too, otherwise we would
        // have returned above
        let year = ts.try_or_skip_datetime_ignore(month.is_some(), |ts| {
            self.integer_in_range(ts, 0, 262_142)
        });
        let Some(year) = year else {
            return month.is_some().then_some(result);
        };

        let bcad = datetime_utils::bcad(ts);
        let signed_year = (year as i32) * if bcad == Some(false) { -1 } else { 1 };
        datetime_utils::with_year_coerced(result, signed_year)
    }

    fn day_of_week(&self, ts: &mut TokenStream) -> Option<i64> {
        if ts.get(0).is_value("mar") {
            // "mar" is also the abbreviation for March; Tuesday wins here
            ts.move_position_forward_by(1);
            Some(1)
        } else {
            datetime_utils::day_of_week(ts)
        }
    }

    /// A fractional minute phrase after the hour, e.g. "e tre quarti".
    fn special_minute(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        if let Some(number) = self.numbers.number_no_ordinal(ts) {
            if let Some(d) = number.decimal_value().filter(|d| *d > 0.0 && *d < 1.0) {
                return Some(util::round_to_i64(d * 60.0));
            }
        }

        ts.set_position(original_position);
        None
    }

    fn noon_midnight_like(&self, ts: &mut TokenStream) -> Option<i64> {
        self.noon_midnight_like_or_moment_of_day(ts, "noon_midnight_like")
    }

    fn moment_of_day(&self, ts: &mut TokenStream) -> Option<i64> {
        // noon and midnight are part of moment_of_day too
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
            // a word that usually comes before special hours, e.g. questo, dopo
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
            // a special hour, e.g. mezzanotte, sera, pranzo
            let hour = ts.get(0).number().and_then(Number::integer_value);
            ts.move_position_forward_by(1);
            if let Some(hour) = hour {
                return Some((hour + 24 + relative_indicator) % 24);
            }
        }

        // sometimes e.g. "mezzogiorno" is split into "mezzo giorno"
        if ts.get(0).value().starts_with("mezz") {
            if ts.get(1).value().starts_with("giorn") {
                ts.move_position_forward_by(2);
                return Some(12 + relative_indicator);
            } else if ts.get(1).value().starts_with("nott") {
                ts.move_position_forward_by(2);
                return Some((24 + relative_indicator) % 24);
            }
        }

        // no special hour found
        ts.set_position(original_position);
        None
    }

    fn hour(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        // skip words that usually come before hours, e.g. alle, ore
        ts.move_position_forward_by(ts.index_of_without_category("pre_hour", 0));

        let Some(number) = self.integer_in_range(ts, 0, 24) else {
            // no number, or not a valid hour, e.g. "le ventisei"
            ts.set_position(original_position);
            return None;
        };

        Some(number % 24) // transform 24 into 0
    }

    fn relative_special_day(&self, ts: &mut TokenStream) -> Option<NaiveDate> {
        let days = self
            .relative_yesterday(ts)
            .or_else(|| datetime_utils::relative_today(ts))
            .or_else(|| self.relative_tomorrow(ts))
            .or_else(|| {
                datetime_utils::relative_day_of_week_duration(ts, self.now, |ts, from, to| {
                    self.integer_in_range(ts, from, to)
                })
            })?;
        self.now
            .date()
            .checked_add_signed(chrono::Duration::days(days))
    }

    /// "ieri", "altro ieri", "ieri l'altro": each adder goes one day
    /// further back.
    fn relative_yesterday(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        // collect as many adders ("altro") before "ieri" as possible
        let mut day_count = 0;
        while ts.get(0).has_category("yesterday_adder") {
            day_count += 1;
            ts.move_position_forward_by(ts.index_of_without_category("date_time_ignore", 1));
        }

        if !ts.get(0).has_category("yesterday") {
            ts.set_position(original_position);
            return None;
        }
        ts.move_position_forward_by(1);
        day_count += 1;

        // with no adder before, one may still follow, e.g. "ieri l'altro"
        let next_not_ignore = ts.index_of_without_category("date_time_ignore", 0);
        if day_count == 1 && ts.get(next_not_ignore).has_category("yesterday_adder") {
            day_count += 1;
            ts.move_position_forward_by(next_not_ignore + 1);
        }

        Some(-day_count)
    }

    /// "domani", "dopo domani", "dopo dopo domani": each adder goes one
    /// day further forward.
    fn relative_tomorrow(&self, ts: &mut TokenStream) -> Option<i64> {
        let original_position = ts.position();

        let mut day_count = 0;
        while ts.get(0).has_category("tomorrow_adder") {
            day_count += 1;
            ts.move_position_forward_by(ts.index_of_without_category("date_time_ignore", 1));
        }

        if !ts.get(0).has_category("tomorrow") {
            ts.set_position(original_position);
            return None;
        }
        ts.move_position_forward_by(1);
        day_count += 1;

        Some(day_count)
    }

    fn relative_duration(&self, ts: &mut TokenStream) -> Option<Duration> {
        datetime_utils::relative_indicator_duration(
            ts,
            |ts| duration_utils::duration(ts, |ts| self.numbers.number_no_ordinal(ts)),
            |duration| duration.multiply_i64(-1),
        )
    }
}
