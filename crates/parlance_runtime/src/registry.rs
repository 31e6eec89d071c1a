//! Locale resolution and the closed set of registered languages.

use parlance_foundation::{Error, Result};

use crate::params::{ExtractDateTimeParams, ExtractDurationParams, ExtractNumberParams};
use crate::parser::{
    EnglishParser, GermanParser, ItalianParser, LanguageParser, SpanishParser, SwedishParser,
};

/// The closed set of supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    /// English (full support).
    English,
    /// Italian (full support).
    Italian,
    /// Spanish (full support).
    Spanish,
    /// Swedish (full support).
    Swedish,
    /// German (numbers and durations only).
    German,
}

/// Supported locale strings and the languages they map to.
const SUPPORTED_LOCALES: [(&str, Lang); 10] = [
    ("en", Lang::English),
    ("en-us", Lang::English),
    ("en-gb", Lang::English),
    ("it", Lang::Italian),
    ("it-it", Lang::Italian),
    ("es", Lang::Spanish),
    ("es-es", Lang::Spanish),
    ("sv", Lang::Swedish),
    ("sv-se", Lang::Swedish),
    ("de", Lang::German),
];

/// Resolves a locale string to a registered language.
///
/// Tries the full locale first ("en-US"), then the base language ("en"),
/// then any registered locale sharing the base language.
fn resolve_locale(locale: &str) -> Option<Lang> {
    let normalized = locale.trim().to_lowercase().replace('_', "-");

    // first try the full locale name, e.g. en-us
    if let Some(&(_, lang)) = SUPPORTED_LOCALES
        .iter()
        .find(|(supported, _)| *supported == normalized)
    {
        return Some(lang);
    }

    // then try only the base language, e.g. en
    let base = normalized.split('-').next()?;
    SUPPORTED_LOCALES
        .iter()
        .find(|(supported, _)| supported.split('-').next() == Some(base))
        .map(|&(_, lang)| lang)
}

/// A parser for a resolved locale: the language-facing entry point of the
/// library.
///
/// Construction fails for unsupported locales and for configuration
/// problems; a constructed parser never fails, it only reports "nothing
/// found" through empty extraction results.
pub struct Parser {
    lang: Lang,
    inner: Box<dyn LanguageParser + Send + Sync>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").field("lang", &self.lang).finish_non_exhaustive()
    }
}

impl Parser {
    /// Builds the parser registered for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`parlance_foundation::ErrorKind::UnsupportedLocale`] when
    /// no language is registered for the locale, or a configuration error
    /// when the language tables fail to load.
    pub fn for_locale(locale: &str) -> Result<Self> {
        let lang =
            resolve_locale(locale).ok_or_else(|| Error::unsupported_locale(locale))?;
        let inner: Box<dyn LanguageParser + Send + Sync> = match lang {
            Lang::English => Box::new(EnglishParser::new()?),
            Lang::Italian => Box::new(ItalianParser::new()?),
            Lang::Spanish => Box::new(SpanishParser::new()?),
            Lang::Swedish => Box::new(SwedishParser::new()?),
            Lang::German => Box::new(GermanParser::new()?),
        };
        Ok(Self { lang, inner })
    }

    /// The language this parser was resolved to.
    #[must_use]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// The underlying language parser.
    #[must_use]
    pub fn language_parser(&self) -> &(dyn LanguageParser + Send + Sync) {
        self.inner.as_ref()
    }

    /// Starts a number extraction over `utterance`.
    #[must_use]
    pub fn extract_number(&self, utterance: impl Into<String>) -> ExtractNumberParams<'_> {
        ExtractNumberParams::new(self, utterance.into())
    }

    /// Starts a duration extraction over `utterance`.
    #[must_use]
    pub fn extract_duration(&self, utterance: impl Into<String>) -> ExtractDurationParams<'_> {
        ExtractDurationParams::new(self, utterance.into())
    }

    /// Starts a date/time extraction over `utterance`, resolving relative
    /// phrases against `now`.
    #[must_use]
    pub fn extract_date_time(
        &self,
        utterance: impl Into<String>,
        now: chrono::NaiveDateTime,
    ) -> ExtractDateTimeParams<'_> {
        ExtractDateTimeParams::new(self, utterance.into(), now)
    }
}
