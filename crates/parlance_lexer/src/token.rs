//! The lexical unit produced by the tokenizer.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parlance_foundation::{Duration, Number};

/// A word's association with a duration unit.
///
/// Attached to a token when its normalized form appears in the language's
/// duration-word table (e.g. "minute", "hr"). A word can carry this overlay
/// in addition to ordinary category matches, since e.g. a word meaning
/// "second" is both a generic category match and a duration unit.
#[derive(Clone, Debug)]
pub struct DurationUnit {
    /// The raw table key this word mapped to, e.g. `"1 MINUTES"`.
    pub category: String,
    /// How much one of this word is worth, e.g. one minute.
    pub multiplier: Duration,
    /// Whether this word only counts when preceded by a number (e.g. the
    /// bare symbols "s", "h" should not match on their own).
    pub restricted_after_number: bool,
}

/// An immutable token: a word or symbol plus everything the per-language
/// tables know about it.
///
/// A token with no categories, number or duration unit is "plain" text the
/// extractors cannot do anything with. Categories and the numeric value are
/// fixed at construction by the tokenizer.
#[derive(Clone, Debug)]
pub struct Token {
    value: String,
    spaces_following: String,
    position_in_original: usize,
    categories: Arc<HashSet<String>>,
    number: Option<Number>,
    duration: Option<Arc<DurationUnit>>,
}

static EMPTY_CATEGORIES: Lazy<Arc<HashSet<String>>> = Lazy::new(|| Arc::new(HashSet::new()));

static EMPTY_TOKEN: Lazy<Token> = Lazy::new(|| Token {
    value: String::new(),
    spaces_following: String::new(),
    position_in_original: 0,
    categories: Arc::clone(&EMPTY_CATEGORIES),
    number: None,
    duration: None,
});

impl Token {
    /// A plain token with no semantics attached.
    #[must_use]
    pub fn plain(
        value: impl Into<String>,
        spaces_following: impl Into<String>,
        position_in_original: usize,
    ) -> Self {
        Self {
            value: value.into(),
            spaces_following: spaces_following.into(),
            position_in_original,
            categories: Arc::clone(&EMPTY_CATEGORIES),
            number: None,
            duration: None,
        }
    }

    /// A token that matched the word-category table.
    #[must_use]
    pub fn matched(
        value: impl Into<String>,
        spaces_following: impl Into<String>,
        position_in_original: usize,
        categories: Arc<HashSet<String>>,
    ) -> Self {
        Self {
            categories,
            ..Self::plain(value, spaces_following, position_in_original)
        }
    }

    /// A token that resolved to a number, raw or from the number-word table.
    #[must_use]
    pub fn numeric(
        value: impl Into<String>,
        spaces_following: impl Into<String>,
        position_in_original: usize,
        categories: Arc<HashSet<String>>,
        number: Number,
    ) -> Self {
        Self {
            categories,
            number: Some(number),
            ..Self::plain(value, spaces_following, position_in_original)
        }
    }

    /// Returns this token with a duration-unit association attached.
    #[must_use]
    pub fn with_duration_unit(mut self, duration: Arc<DurationUnit>) -> Self {
        self.duration = Some(duration);
        self
    }

    /// The sentinel empty token returned for out-of-range stream access.
    ///
    /// Every query on it answers "no match", so extractors can look ahead
    /// without bounds checks.
    #[must_use]
    pub fn empty() -> &'static Token {
        &EMPTY_TOKEN
    }

    /// The surface text of this token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The whitespace that followed this token in the original string.
    #[must_use]
    pub fn spaces_following(&self) -> &str {
        &self.spaces_following
    }

    /// Byte offset in the original string at which [`Self::value`] starts.
    #[must_use]
    pub fn position_in_original(&self) -> usize {
        self.position_in_original
    }

    /// Case-insensitive comparison with a surface value.
    #[must_use]
    pub fn is_value(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }

    /// Whether this token carries the given semantic category.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// The number this token resolved to, if any.
    #[must_use]
    pub fn number(&self) -> Option<&Number> {
        self.number.as_ref()
    }

    /// Whether this token resolved to exactly the given integer.
    #[must_use]
    pub fn is_number_equal_to(&self, integer: i64) -> bool {
        self.number.is_some_and(|n| n.equals_i64(integer))
    }

    /// The duration unit this token is associated with, if any.
    #[must_use]
    pub fn duration_unit(&self) -> Option<&DurationUnit> {
        self.duration.as_deref()
    }
}
