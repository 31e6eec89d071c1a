//! German number and duration extraction (partial language support).
//!
//! German numbers put the unit before the tens ("dreiundzwanzig" is
//! three-and-twenty), so this module carries its own below-thousand parser
//! and plugs it into the shared group machinery. The compound words
//! themselves ("dreiundzwanzig", "siebzehnhundert") are split by the
//! tokenizer's compound-word decomposition. There is no German date/time
//! extractor.

use parlance_extract::number_utils;
use parlance_foundation::{Number, Result};
use parlance_lexer::{TokenStream, Tokenizer};

/// The embedded German tokenizer configuration.
pub const CONFIG_JSON: &str = include_str!("../config/de-de/tokenizer.json");

/// Builds the German tokenizer.
///
/// # Errors
///
/// Fails when the embedded configuration does not validate.
pub fn tokenizer() -> Result<Tokenizer> {
    Tokenizer::from_json("de", CONFIG_JSON)
}

/// German number extraction.
///
/// The configuration carries real long-scale values ("Milliarde" is 10^9),
/// so groups multiply by the configured value directly.
pub struct GermanNumberExtractor;

impl GermanNumberExtractor {
    /// Creates an extractor. German numbers are long scale only.
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
        let number_to_edit = number_to_edit?;

        // a number directly followed by an ordinal number is a fraction,
        // e.g. "zwei drittel"
        if !number_to_edit.is_ordinal()
            && !number_to_edit.is_decimal()
            && !ts.get(0).has_category("ignore")
        {
            let original_position = ts.position();
            match self.number_integer(ts, true) {
                None => {
                    // no denominator: maybe a suffix multiplier, e.g.
                    // halb (=0.5), dutzend (=12)
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

    /// An integer possibly followed by "komma" digits. German numbers
    /// cannot start with a bare "komma".
    pub fn number_point(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let n = self.number_integer(ts, allow_ordinal)?;
        if n.is_ordinal() {
            return Some(n);
        }
        let mut value = n;

        if ts.get(0).has_category("point") {
            if !ts.get(1).has_category("digit_after_point")
                && (!number_utils::is_raw_number(ts.get(1))
                    || ts.get(2).has_category("ordinal_suffix"))
            {
                return Some(value);
            }
            ts.move_position_forward_by(1);

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
        } else if ts.get(0).has_category("fraction_separator") {
            // a fraction, e.g. "zwanzig geteilt durch hundert"
            let original_position = ts.position();
            ts.move_position_forward_by(1);
            if ts.get(0).has_category("fraction_separator_secondary") {
                ts.move_position_forward_by(1);
            }

            match self.number_integer(ts, false) {
                Some(denominator) if !denominator.is_zero() => {
                    return Some(value.divide(&denominator));
                }
                _ => ts.set_position(original_position),
            }
        }

        Some(value)
    }

    /// An integer made of groups, "siebzehnhundert" year forms and
    /// dot-separated raw thousands.
    pub fn number_integer(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        if ts.get(0).has_category("ignore") {
            return None;
        }

        let n = number_utils::number_made_of_groups(ts, |ts, last_multiplier| {
            number_utils::number_group_with(ts, allow_ordinal, last_multiplier, |ts, ordinal| {
                self.number_less_than_1000(ts, ordinal)
            })
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
                // year-style hundreds, e.g. "siebzehnhundert" -> 1700
                let ordinal = ts.get(next_not_ignore).has_category("ordinal");
                if allow_ordinal || !ordinal {
                    ts.move_position_forward_by(next_not_ignore + 1);
                    let mut year = n.multiply_i64(100);
                    if ordinal {
                        return Some(year.with_ordinal(true));
                    }

                    // the sub-century part of a year may follow, e.g.
                    // "neunzehnhundert vierundachtzig" -> 1984
                    let saved_position = ts.position();
                    ts.move_position_forward_by(ts.index_of_without_category("ignore", 0));
                    match self.number_less_than_1000(ts, allow_ordinal) {
                        Some(rest) if rest.less_than(100.0) => {
                            let rest_ordinal = rest.is_ordinal();
                            year = year.plus(&rest).with_ordinal(rest_ordinal);
                        }
                        _ => ts.set_position(saved_position),
                    }
                    return Some(year);
                }
            }
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

    /// A German number below 1000: an optional hundreds part, then a unit
    /// and tens in German order ("drei und zwanzig"), a teen, a ten or a
    /// digit. The "und" between unit and tens is ignorable filler.
    #[allow(clippy::too_many_lines)]
    fn number_less_than_1000(&self, ts: &mut TokenStream, allow_ordinal: bool) -> Option<Number> {
        let mut hundred: i64 = -1;
        let mut rest: i64 = -1;
        let mut ordinal = false;
        let mut found = false;

        let digit_value = |ts: &TokenStream, ahead: isize| {
            ts.get(ahead).number().and_then(Number::integer_value)
        };

        // the hundreds part, e.g. "drei hundert", bare "hundert", or a raw
        // number from 100 to 999
        if ts.get(0).has_category("digit")
            && ts.get(1).has_category("hundred")
            && !(ts.get(0).has_category("ordinal") && !allow_ordinal)
        {
            let hundreds_ordinal = ts.get(1).has_category("ordinal");
            if allow_ordinal || !hundreds_ordinal {
                if let Some(digit) = digit_value(ts, 0) {
                    if digit != 0 {
                        hundred = digit * 100;
                        ordinal = hundreds_ordinal;
                        found = true;
                        ts.move_position_forward_by(2);
                    }
                }
            }
        } else if ts.get(0).has_category("hundred") {
            let hundreds_ordinal = ts.get(0).has_category("ordinal");
            if allow_ordinal || !hundreds_ordinal {
                hundred = 100; // e.g. "hundert" alone
                ordinal = hundreds_ordinal;
                found = true;
                ts.move_position_forward_by(1);
            }
        }

        if ordinal {
            // nothing follows an ordinal hundreds part, e.g. dreihundertste
            return Some(Number::integer(hundred).with_ordinal(true));
        }

        // the rest: "drei und zwanzig", a teen, a ten or a digit
        let next = if found {
            ts.index_of_without_category("ignore", 0)
        } else {
            0
        };
        let token = ts.get(next);
        if !allow_ordinal && token.has_category("ordinal") {
            // prevent ordinal numbers if they are not allowed
        } else if token.has_category("digit") {
            let digit_ordinal = token.has_category("ordinal");
            let digit = digit_value(ts, next);

            // a tens word may follow the unit, joined by "und"
            let tens_index = ts.index_of_without_category("ignore", next + 1);
            let tens_token = ts.get(tens_index);
            let tens_usable = tens_token.has_category("tens")
                && !digit_ordinal
                && (allow_ordinal || !tens_token.has_category("ordinal"));
            if tens_usable {
                if let (Some(digit), Some(tens)) = (digit, digit_value(ts, tens_index)) {
                    if digit != 0 {
                        rest = tens + digit; // e.g. drei und zwanzig
                        ordinal = tens_token.has_category("ordinal");
                        ts.move_position_forward_by(tens_index + 1);
                    }
                }
            }
            if rest < 0 {
                if let Some(digit) = digit {
                    if digit != 0 || !found {
                        // a plain unit; zero is not allowed after hundreds
                        rest = digit;
                        ordinal = digit_ordinal;
                        ts.move_position_forward_by(next + 1);
                    }
                }
            }
        } else if token.has_category("teen") || token.has_category("tens") {
            let token_ordinal = token.has_category("ordinal");
            if allow_ordinal || !token_ordinal {
                if let Some(value) = digit_value(ts, next) {
                    rest = value; // e.g. siebzehn, neunzig
                    ordinal = token_ordinal;
                    ts.move_position_forward_by(next + 1);
                }
            }
        } else if number_utils::is_raw_number(token) && !found {
            if let Some(raw) = digit_value(ts, next) {
                if raw < 1000 {
                    let raw_ordinal = ts.get(next + 1).has_category("ordinal_suffix");
                    if allow_ordinal || !raw_ordinal {
                        rest = raw; // e.g. 192
                        ordinal = raw_ordinal;
                        ts.move_position_forward_by(next + if raw_ordinal { 2 } else { 1 });
                    }
                }
            }
        }

        if hundred < 0 && rest < 0 {
            None
        } else {
            Some(
                Number::integer(hundred.max(0) + rest.max(0)).with_ordinal(ordinal),
            )
        }
    }
}

impl Default for GermanNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}
