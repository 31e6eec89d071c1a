//! JSON-backed per-language tokenizer tables.
//!
//! Configuration is data, not code: word lists, category tables and
//! duration-word tables, deserialized once when a language instance is
//! constructed and shared read-only across all parses afterwards.

use std::collections::BTreeMap;

use parlance_foundation::{Error, Number, Result};
use serde::Deserialize;

/// One group of surface forms sharing a category set.
#[derive(Clone, Debug, Deserialize)]
pub struct WordMatch {
    /// The categories every listed value carries.
    pub categories: Vec<String>,
    /// The normalized surface forms.
    pub values: Vec<String>,
}

/// A numeric value as it appears in a configuration file.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum ConfigNumber {
    /// An exact integer value.
    Integer(i64),
    /// A decimal value (e.g. `0.5` for "half").
    Decimal(f64),
}

impl From<ConfigNumber> for Number {
    fn from(value: ConfigNumber) -> Self {
        match value {
            ConfigNumber::Integer(i) => Number::integer(i),
            ConfigNumber::Decimal(d) => Number::decimal(d),
        }
    }
}

/// One group of number words sharing a category set.
#[derive(Clone, Debug, Deserialize)]
pub struct NumberMapping {
    /// The categories every listed word carries.
    pub categories: Vec<String>,
    /// Normalized surface form to numeric value.
    pub values: BTreeMap<String, ConfigNumber>,
}

/// The full per-language tokenizer configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenizerConfig {
    /// Code points treated as whitespace between tokens.
    pub spaces: String,
    /// Code points split off as standalone one-character words (punctuation).
    pub characters_as_word: String,
    /// Words in this category can stack into compound words ("dreiund...").
    #[serde(default)]
    pub compound_word_piece_category: Option<String>,
    /// Categories attached to tokens parsed directly from digit runs.
    pub raw_number_categories: Vec<String>,
    /// Suffixes stripped (one at a time) before retrying an exact match.
    #[serde(default)]
    pub plural_endings: Vec<String>,
    /// Plain word-to-category matches.
    pub word_matches: Vec<WordMatch>,
    /// Number words with their values.
    pub number_mappings: Vec<NumberMapping>,
    /// `"<multiplier> <UNIT>"` keys to the words that mean that amount,
    /// e.g. `"1 MINUTES": ["minute", "min"]`.
    #[serde(default)]
    pub duration_words: BTreeMap<String, Vec<String>>,
    /// The subset of duration words that require a preceding number.
    #[serde(default)]
    pub duration_restrict_after_number: Vec<String>,
}

impl TokenizerConfig {
    /// Deserializes a configuration from its JSON source.
    ///
    /// # Errors
    ///
    /// Returns [`parlance_foundation::ErrorKind::ConfigParse`] when the JSON
    /// is malformed; table-consistency problems surface later, when a
    /// [`crate::Tokenizer`] is built from the config.
    pub fn from_json(language: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config_parse(language, e.to_string()))
    }
}
