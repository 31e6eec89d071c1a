//! Error types for Parlance.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Errors only arise while constructing a language instance: an unsupported
//! locale or a malformed configuration table. Failing to find a number,
//! duration or date/time in an utterance is never an error; extractors
//! communicate "nothing found here" by returning `None`.

use thiserror::Error;

/// The main error type for Parlance operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unsupported locale error.
    #[must_use]
    pub fn unsupported_locale(locale: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedLocale(locale.into()))
    }

    /// Creates a configuration parse error.
    #[must_use]
    pub fn config_parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigParse {
            language: language.into(),
            message: message.into(),
        })
    }

    /// Creates a configuration validation error.
    #[must_use]
    pub fn config_invalid(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid {
            language: language.into(),
            message: message.into(),
        })
    }

    /// Creates an invalid time unit error.
    #[must_use]
    pub fn invalid_time_unit(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTimeUnit(value.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No extractor pair is registered for the requested locale.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// A per-language configuration table could not be deserialized.
    #[error("configuration for language {language} could not be parsed: {message}")]
    ConfigParse {
        /// The language whose configuration failed to load.
        language: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A per-language configuration table was well-formed but inconsistent.
    #[error("configuration for language {language} is invalid: {message}")]
    ConfigInvalid {
        /// The language whose configuration failed validation.
        language: String,
        /// Description of the inconsistency.
        message: String,
    },

    /// A duration word was declared with an unknown calendar unit.
    #[error("invalid time unit: {0}")]
    InvalidTimeUnit(String),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
