//! The shared interface of per-language parsers, and its implementations.

use chrono::NaiveDateTime;
use parlance_extract::duration_utils;
use parlance_foundation::{Duration, Number, Result};
use parlance_lang::{de, en, es, it, sv};
use parlance_lexer::{TokenStream, Tokenizer};

/// Options for number extraction.
#[derive(Clone, Copy, Debug)]
pub struct NumberOptions {
    /// Use short-scale naming for large numbers (billion = 10^9). Ignored
    /// by languages that only support one scale.
    pub short_scale: bool,
    /// Prefer the ordinal interpretation of ambiguous words.
    pub prefer_ordinal: bool,
    /// Suppress decimal-point and fraction parsing entirely.
    pub integer_only: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            short_scale: true,
            prefer_ordinal: false,
            integer_only: false,
        }
    }
}

/// Options for duration extraction.
#[derive(Clone, Copy, Debug)]
pub struct DurationOptions {
    /// Use short-scale naming for large numbers in counts.
    pub short_scale: bool,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self { short_scale: true }
    }
}

/// Options for date/time extraction.
#[derive(Clone, Copy, Debug)]
pub struct DateTimeOptions {
    /// Use short-scale naming for large numbers in counts.
    pub short_scale: bool,
    /// Read "1/2" as February 1st rather than January 2nd.
    pub prefer_month_before_day: bool,
    /// The reference instant that relative phrases resolve against.
    pub now: NaiveDateTime,
}

impl DateTimeOptions {
    /// Creates default options resolving against the given instant.
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            short_scale: true,
            prefer_month_before_day: false,
            now,
        }
    }
}

/// One per-language parser: a tokenizer plus the three extraction entry
/// points, each attempting one extraction at the stream's current position.
pub trait LanguageParser {
    /// The tokenizer configured for this language.
    fn tokenizer(&self) -> &Tokenizer;

    /// Attempts one number extraction at the current position.
    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number>;

    /// Attempts one duration extraction at the current position.
    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        options: &DurationOptions,
    ) -> Option<Duration>;

    /// Attempts one date/time extraction at the current position. Returns
    /// `None` for languages without date/time support.
    fn extract_date_time_at(
        &self,
        ts: &mut TokenStream,
        options: &DateTimeOptions,
    ) -> Option<NaiveDateTime>;

    /// Tokenizes an utterance into a fresh stream.
    fn tokenize(&self, utterance: &str) -> TokenStream {
        TokenStream::new(self.tokenizer().tokenize(utterance))
    }
}

/// English parser.
pub struct EnglishParser {
    tokenizer: Tokenizer,
}

impl EnglishParser {
    /// Loads the English configuration.
    ///
    /// # Errors
    ///
    /// Fails when the embedded configuration does not validate.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: en::tokenizer()?,
        })
    }
}

impl LanguageParser for EnglishParser {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number> {
        let extractor = en::EnglishNumberExtractor::new(options.short_scale);
        if options.integer_only {
            extractor.number_must_be_integer(ts)
        } else if options.prefer_ordinal {
            extractor.number_prefer_ordinal(ts)
        } else {
            extractor.number_prefer_fraction(ts)
        }
    }

    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        options: &DurationOptions,
    ) -> Option<Duration> {
        let extractor = en::EnglishNumberExtractor::new(options.short_scale);
        duration_utils::duration(ts, |ts| extractor.number_no_ordinal(ts))
    }

    fn extract_date_time_at(
        &self,
        ts: &mut TokenStream,
        options: &DateTimeOptions,
    ) -> Option<NaiveDateTime> {
        en::EnglishDateTimeExtractor::new(
            options.short_scale,
            options.prefer_month_before_day,
            options.now,
        )
        .date_time(ts)
    }
}

/// Italian parser.
pub struct ItalianParser {
    tokenizer: Tokenizer,
}

impl ItalianParser {
    /// Loads the Italian configuration.
    ///
    /// # Errors
    ///
    /// Fails when the embedded configuration does not validate.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: it::tokenizer()?,
        })
    }
}

impl LanguageParser for ItalianParser {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number> {
        let extractor = it::ItalianNumberExtractor::new();
        if options.integer_only {
            extractor.number_must_be_integer(ts)
        } else if options.prefer_ordinal {
            extractor.number_prefer_ordinal(ts)
        } else {
            extractor.number_prefer_fraction(ts)
        }
    }

    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        _options: &DurationOptions,
    ) -> Option<Duration> {
        let extractor = it::ItalianNumberExtractor::new();
        duration_utils::duration(ts, |ts| extractor.number_no_ordinal(ts))
    }

    fn extract_date_time_at(
        &self,
        ts: &mut TokenStream,
        options: &DateTimeOptions,
    ) -> Option<NaiveDateTime> {
        it::ItalianDateTimeExtractor::new(options.now).date_time(ts)
    }
}

/// Spanish parser.
pub struct SpanishParser {
    tokenizer: Tokenizer,
}

impl SpanishParser {
    /// Loads the Spanish configuration.
    ///
    /// # Errors
    ///
    /// Fails when the embedded configuration does not validate.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: es::tokenizer()?,
        })
    }
}

impl LanguageParser for SpanishParser {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number> {
        let extractor = es::SpanishNumberExtractor::new();
        if options.integer_only {
            extractor.number_must_be_integer(ts)
        } else if options.prefer_ordinal {
            extractor.number_prefer_ordinal(ts)
        } else {
            extractor.number_prefer_fraction(ts)
        }
    }

    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        _options: &DurationOptions,
    ) -> Option<Duration> {
        let extractor = es::SpanishNumberExtractor::new();
        duration_utils::duration(ts, |ts| extractor.number_no_ordinal(ts))
    }

    fn extract_date_time_at(
        &self,
        ts: &mut TokenStream,
        options: &DateTimeOptions,
    ) -> Option<NaiveDateTime> {
        es::SpanishDateTimeExtractor::new(options.prefer_month_before_day, options.now)
            .date_time(ts)
    }
}

/// Swedish parser.
pub struct SwedishParser {
    tokenizer: Tokenizer,
}

impl SwedishParser {
    /// Loads the Swedish configuration.
    ///
    /// # Errors
    ///
    /// Fails when the embedded configuration does not validate.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: sv::tokenizer()?,
        })
    }
}

impl LanguageParser for SwedishParser {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number> {
        let extractor = sv::SwedishNumberExtractor::new();
        if options.integer_only {
            extractor.number_must_be_integer(ts)
        } else if options.prefer_ordinal {
            extractor.number_prefer_ordinal(ts)
        } else {
            extractor.number_prefer_fraction(ts)
        }
    }

    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        _options: &DurationOptions,
    ) -> Option<Duration> {
        let extractor = sv::SwedishNumberExtractor::new();
        duration_utils::duration(ts, |ts| extractor.number_no_ordinal(ts))
    }

    fn extract_date_time_at(
        &self,
        ts: &mut TokenStream,
        options: &DateTimeOptions,
    ) -> Option<NaiveDateTime> {
        sv::SwedishDateTimeExtractor::new(options.prefer_month_before_day, options.now)
            .date_time(ts)
    }
}

/// German parser (partial: numbers and durations only).
pub struct GermanParser {
    tokenizer: Tokenizer,
}

impl GermanParser {
    /// Loads the German configuration.
    ///
    /// # Errors
    ///
    /// Fails when the embedded configuration does not validate.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: de::tokenizer()?,
        })
    }
}

impl LanguageParser for GermanParser {
    fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn extract_number_at(&self, ts: &mut TokenStream, options: &NumberOptions) -> Option<Number> {
        let extractor = de::GermanNumberExtractor::new();
        if options.integer_only {
            extractor.number_must_be_integer(ts)
        } else if options.prefer_ordinal {
            extractor.number_prefer_ordinal(ts)
        } else {
            extractor.number_prefer_fraction(ts)
        }
    }

    fn extract_duration_at(
        &self,
        ts: &mut TokenStream,
        _options: &DurationOptions,
    ) -> Option<Duration> {
        let extractor = de::GermanNumberExtractor::new();
        duration_utils::duration(ts, |ts| extractor.number_no_ordinal(ts))
    }

    fn extract_date_time_at(
        &self,
        _ts: &mut TokenStream,
        _options: &DateTimeOptions,
    ) -> Option<NaiveDateTime> {
        None // German date/time extraction is not supported
    }
}
