//! Parameter builders for the three extraction entry points.
//!
//! Each builder carries an utterance plus the configuration knobs for one
//! kind of extraction, and exposes the three driver shapes: `first`,
//! `mixed_with_text` and `possible_intervals`.

use chrono::NaiveDateTime;
use parlance_foundation::{Duration, Number};

use crate::driver::{
    parse_first, parse_mixed_with_text, parse_possible_intervals, MatchedRange, TextOrValue,
};
use crate::parser::{DateTimeOptions, DurationOptions, NumberOptions};
use crate::registry::Parser;

/// Parameters for extracting numbers from an utterance.
///
/// Defaults: short scale, prefer fractions over ordinals, decimals and
/// fractions allowed.
pub struct ExtractNumberParams<'p> {
    parser: &'p Parser,
    utterance: String,
    options: NumberOptions,
}

impl<'p> ExtractNumberParams<'p> {
    pub(crate) fn new(parser: &'p Parser, utterance: String) -> Self {
        Self {
            parser,
            utterance,
            options: NumberOptions::default(),
        }
    }

    /// Selects short-scale (billion = 10^9) or long-scale naming.
    #[must_use]
    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.options.short_scale = short_scale;
        self
    }

    /// Prefers the ordinal interpretation of ambiguous words.
    #[must_use]
    pub fn prefer_ordinal(mut self, prefer_ordinal: bool) -> Self {
        self.options.prefer_ordinal = prefer_ordinal;
        self
    }

    /// Suppresses decimal-point and fraction parsing.
    #[must_use]
    pub fn integer_only(mut self, integer_only: bool) -> Self {
        self.options.integer_only = integer_only;
        self
    }

    /// The first number in the utterance, longest match winning on ties.
    #[must_use]
    pub fn first(&self) -> Option<Number> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_first(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_number_at(ts, &self.options)
        })
    }

    /// All numbers in the utterance, interleaved with the remaining text.
    #[must_use]
    pub fn mixed_with_text(&self) -> Vec<TextOrValue<Number>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_mixed_with_text(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_number_at(ts, &self.options)
        })
    }

    /// Every interval of the utterance where a number can be parsed.
    #[must_use]
    pub fn possible_intervals(&self) -> Vec<MatchedRange<Number>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_possible_intervals(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_number_at(ts, &self.options)
        })
    }
}

/// Parameters for extracting durations from an utterance.
pub struct ExtractDurationParams<'p> {
    parser: &'p Parser,
    utterance: String,
    options: DurationOptions,
}

impl<'p> ExtractDurationParams<'p> {
    pub(crate) fn new(parser: &'p Parser, utterance: String) -> Self {
        Self {
            parser,
            utterance,
            options: DurationOptions::default(),
        }
    }

    /// Selects short-scale (billion = 10^9) or long-scale naming.
    #[must_use]
    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.options.short_scale = short_scale;
        self
    }

    /// The first duration in the utterance.
    #[must_use]
    pub fn first(&self) -> Option<Duration> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_first(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_duration_at(ts, &self.options)
        })
    }

    /// All durations in the utterance, interleaved with the remaining text.
    #[must_use]
    pub fn mixed_with_text(&self) -> Vec<TextOrValue<Duration>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_mixed_with_text(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_duration_at(ts, &self.options)
        })
    }

    /// Every interval of the utterance where a duration can be parsed.
    #[must_use]
    pub fn possible_intervals(&self) -> Vec<MatchedRange<Duration>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_possible_intervals(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_duration_at(ts, &self.options)
        })
    }
}

/// Parameters for extracting date/times from an utterance.
///
/// Defaults: short scale, day before month for all-numeric dates.
pub struct ExtractDateTimeParams<'p> {
    parser: &'p Parser,
    utterance: String,
    options: DateTimeOptions,
}

impl<'p> ExtractDateTimeParams<'p> {
    pub(crate) fn new(parser: &'p Parser, utterance: String, now: NaiveDateTime) -> Self {
        Self {
            parser,
            utterance,
            options: DateTimeOptions::new(now),
        }
    }

    /// Selects short-scale (billion = 10^9) or long-scale naming.
    #[must_use]
    pub fn short_scale(mut self, short_scale: bool) -> Self {
        self.options.short_scale = short_scale;
        self
    }

    /// Reads "1/2" as February 1st rather than January 2nd.
    #[must_use]
    pub fn prefer_month_before_day(mut self, prefer_month_before_day: bool) -> Self {
        self.options.prefer_month_before_day = prefer_month_before_day;
        self
    }

    /// The first date/time in the utterance.
    #[must_use]
    pub fn first(&self) -> Option<NaiveDateTime> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_first(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_date_time_at(ts, &self.options)
        })
    }

    /// All date/times in the utterance, interleaved with the remaining text.
    #[must_use]
    pub fn mixed_with_text(&self) -> Vec<TextOrValue<NaiveDateTime>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_mixed_with_text(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_date_time_at(ts, &self.options)
        })
    }

    /// Every interval of the utterance where a date/time can be parsed.
    #[must_use]
    pub fn possible_intervals(&self) -> Vec<MatchedRange<NaiveDateTime>> {
        let mut ts = self.parser.language_parser().tokenize(&self.utterance);
        parse_possible_intervals(&mut ts, |ts| {
            self.parser
                .language_parser()
                .extract_date_time_at(ts, &self.options)
        })
    }
}
