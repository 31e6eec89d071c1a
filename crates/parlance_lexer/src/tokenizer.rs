//! Turns raw text into tokens using per-language configuration tables.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parlance_foundation::{Duration, Error, Number, Result, TimeUnit};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizerConfig;
use crate::token::{DurationUnit, Token};

/// The configuration-driven tokenizer.
///
/// Splits text on configured whitespace (plus standalone characters and
/// digit runs), then resolves each word against the language's number-word,
/// word-category and duration-word tables, falling back to plural-ending
/// stripping and greedy compound-word decomposition.
pub struct Tokenizer {
    spaces: HashSet<char>,
    characters_as_word: HashSet<char>,
    raw_number_categories: Arc<HashSet<String>>,
    plural_endings: Vec<String>,
    word_matches: HashMap<String, Arc<HashSet<String>>>,
    number_mappings: HashMap<String, (Arc<HashSet<String>>, Number)>,
    compound_word_pieces: Vec<String>,
    duration_mappings: HashMap<String, Arc<DurationUnit>>,
}

impl Tokenizer {
    /// Builds a tokenizer from a deserialized configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a duration key is not
    /// `"<integer> <UNIT>"`, or when a restrict-after-number entry does not
    /// appear in the duration table.
    pub fn from_config(language: &str, config: TokenizerConfig) -> Result<Self> {
        let compound_category = config.compound_word_piece_category;
        let mut compound_word_pieces = Vec::new();

        let mut word_matches = HashMap::new();
        for word_match in config.word_matches {
            let is_compound_piece = compound_category
                .as_ref()
                .is_some_and(|c| word_match.categories.contains(c));
            let categories: Arc<HashSet<String>> =
                Arc::new(word_match.categories.into_iter().collect());
            for value in word_match.values {
                if is_compound_piece {
                    compound_word_pieces.push(value.clone());
                }
                word_matches.insert(value, Arc::clone(&categories));
            }
        }

        let mut number_mappings = HashMap::new();
        for mapping in config.number_mappings {
            let is_compound_piece = compound_category
                .as_ref()
                .is_some_and(|c| mapping.categories.contains(c));
            let categories: Arc<HashSet<String>> =
                Arc::new(mapping.categories.into_iter().collect());
            for (word, value) in mapping.values {
                if is_compound_piece {
                    compound_word_pieces.push(word.clone());
                }
                number_mappings.insert(word, (Arc::clone(&categories), Number::from(value)));
            }
        }

        let restricted: HashSet<&String> = config.duration_restrict_after_number.iter().collect();
        for word in &restricted {
            if !config.duration_words.values().any(|ws| ws.contains(word)) {
                return Err(Error::config_invalid(
                    language,
                    format!("restrict-after-number word not in duration table: {word}"),
                ));
            }
        }

        let mut duration_mappings = HashMap::new();
        for (key, words) in &config.duration_words {
            let mut parts = key.split(' ');
            let (multiplier, unit) = match (parts.next(), parts.next(), parts.next()) {
                (Some(multiplier), Some(unit), None) => (multiplier, unit),
                _ => {
                    return Err(Error::config_invalid(
                        language,
                        format!("duration key is not \"<integer> <UNIT>\": {key}"),
                    ))
                }
            };
            let multiplier: i64 = multiplier.parse().map_err(|_| {
                Error::config_invalid(
                    language,
                    format!("duration multiplier is not an integer: {key}"),
                )
            })?;
            let unit: TimeUnit = unit.parse()?;
            let multiplier = Duration::ZERO.plus_int(multiplier, unit);

            for word in words {
                duration_mappings.insert(
                    word.clone(),
                    Arc::new(DurationUnit {
                        category: key.clone(),
                        multiplier,
                        restricted_after_number: restricted.contains(word),
                    }),
                );
            }
        }

        // longer pieces are tried first, so that e.g. "femtiofem" splits
        // into femtio+fem rather than fem+tio+fem
        compound_word_pieces.sort_by_key(|piece| std::cmp::Reverse(piece.len()));

        Ok(Self {
            spaces: config.spaces.chars().collect(),
            characters_as_word: config.characters_as_word.chars().collect(),
            raw_number_categories: Arc::new(config.raw_number_categories.into_iter().collect()),
            plural_endings: config.plural_endings,
            word_matches,
            number_mappings,
            compound_word_pieces,
            duration_mappings,
        })
    }

    /// Builds a tokenizer straight from JSON configuration source.
    ///
    /// # Errors
    ///
    /// Propagates deserialization and validation errors.
    pub fn from_json(language: &str, json: &str) -> Result<Self> {
        Self::from_config(language, TokenizerConfig::from_json(language, json)?)
    }

    /// Splits `s` into tokens, resolving each against the language tables.
    #[must_use]
    pub fn tokenize(&self, s: &str) -> Vec<Token> {
        let chars: Vec<(usize, char)> = s.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(s.len(), |&(b, _)| b);
        let mut tokens = Vec::new();

        // the spaces at the beginning are put in a separate token
        let mut i = 0;
        while i < chars.len() && self.spaces.contains(&chars[i].1) {
            i += 1;
        }
        if i != 0 {
            tokens.push(Token::plain("", &s[..byte_at(i)], 0));
        }

        let mut begin = i;
        while i < chars.len() {
            // token values are either a single character from the
            // characters_as_word set, a run of digits, or an arbitrary
            // string not containing any spaces
            let mut token_is_digits = false;
            let mut needs_cleaning = true;
            while i < chars.len() {
                let c = chars[i].1;
                if self.spaces.contains(&c) {
                    break; // current character is a space
                } else if self.characters_as_word.contains(&c) {
                    if i == begin {
                        needs_cleaning = false; // do not normalize single characters
                        i += 1;
                    }
                    break; // standalone-word character, stop
                } else if c.is_ascii_digit() {
                    if i == begin {
                        token_is_digits = true;
                        i += 1;
                        while i < chars.len() && chars[i].1.is_ascii_digit() {
                            i += 1; // collect as many digits as possible
                        }
                    }
                    break; // found a digit, stop
                }
                i += 1;
            }
            let position_in_original = byte_at(begin);
            let value = &s[byte_at(begin)..byte_at(i)];
            begin = i;

            while i < chars.len() && self.spaces.contains(&chars[i].1) {
                i += 1; // collect as many spaces as possible
            }
            let spaces_following = &s[byte_at(begin)..byte_at(i)];
            begin = i;

            self.push_token_from_value(
                &mut tokens,
                value,
                position_in_original,
                spaces_following,
                token_is_digits,
                needs_cleaning,
            );
        }
        tokens
    }

    fn push_token_from_value(
        &self,
        tokens: &mut Vec<Token>,
        value: &str,
        position_in_original: usize,
        spaces_following: &str,
        token_is_digits: bool,
        needs_cleaning: bool,
    ) {
        if token_is_digits {
            // the run might be too long to fit an i64; fall back to a float,
            // and if even that is not finite this is not a number
            let number = value
                .parse::<i64>()
                .ok()
                .map(Number::integer)
                .or_else(|| {
                    value
                        .parse::<f64>()
                        .ok()
                        .filter(|d| d.is_finite())
                        .map(Number::decimal)
                });
            if let Some(number) = number {
                tokens.push(Token::numeric(
                    value,
                    spaces_following,
                    position_in_original,
                    Arc::clone(&self.raw_number_categories),
                    number,
                ));
                return;
            }
        }

        let clean = if needs_cleaning {
            clean_value(value)
        } else {
            value.to_string()
        };

        let mut token =
            self.token_from_value_exact(&clean, value, position_in_original, spaces_following);
        if token.is_none() {
            if let Some(stripped) = self.remove_plural_ending(&clean) {
                token = self.token_from_value_exact(
                    &stripped,
                    value,
                    position_in_original,
                    spaces_following,
                );
            }
        }

        if token.is_none() {
            if let Some(compound) =
                self.tokenize_compound_word(&clean, spaces_following, position_in_original)
            {
                if !compound.is_empty() {
                    // pieces come back innermost-first, reverse before adding
                    tokens.extend(compound.into_iter().rev());
                    return;
                }
            }
        }

        tokens.push(token.unwrap_or_else(|| {
            Token::plain(value, spaces_following, position_in_original)
        }));
    }

    fn token_from_value_exact(
        &self,
        clean: &str,
        value: &str,
        position_in_original: usize,
        spaces_following: &str,
    ) -> Option<Token> {
        let matched = if let Some((categories, number)) = self.number_mappings.get(clean) {
            Some(Token::numeric(
                value,
                spaces_following,
                position_in_original,
                Arc::clone(categories),
                *number,
            ))
        } else {
            self.word_matches.get(clean).map(|categories| {
                Token::matched(
                    value,
                    spaces_following,
                    position_in_original,
                    Arc::clone(categories),
                )
            })
        };

        if let Some(duration) = self.duration_mappings.get(clean) {
            // a word can be both a table match and a duration unit; merge the
            // duration onto the matched token, or let it stand alone
            return Some(match matched {
                Some(token) => token.with_duration_unit(Arc::clone(duration)),
                None => Token::plain(value, spaces_following, position_in_original)
                    .with_duration_unit(Arc::clone(duration)),
            });
        }

        matched
    }

    fn remove_plural_ending(&self, value: &str) -> Option<String> {
        for plural_ending in &self.plural_endings {
            if let Some(stripped) = value.strip_suffix(plural_ending.as_str()) {
                return Some(stripped.to_string());
            }
        }
        None
    }

    /// Decomposes a compound word (e.g. "twentytwo" into "twenty" and "two")
    /// by greedily stripping known pieces from the front.
    ///
    /// Returns the pieces in reverse parse order (innermost first), or
    /// `None` when no full decomposition into known pieces exists.
    fn tokenize_compound_word(
        &self,
        clean: &str,
        spaces_following: &str,
        position_in_original: usize,
    ) -> Option<Vec<Token>> {
        if clean.is_empty() {
            return Some(Vec::new());
        }

        for piece in &self.compound_word_pieces {
            if let Some(rest) = clean.strip_prefix(piece.as_str()) {
                if let Some(mut rest_tokens) = self.tokenize_compound_word(
                    rest,
                    spaces_following,
                    position_in_original + piece.len(),
                ) {
                    let spaces = if rest_tokens.is_empty() {
                        spaces_following
                    } else {
                        ""
                    };
                    let token = self.token_from_value_exact(
                        piece,
                        piece,
                        position_in_original,
                        spaces,
                    )?;
                    rest_tokens.push(token);
                    return Some(rest_tokens); // reverse order: first pieces added last
                }
            }
        }

        None
    }
}

/// NFKD-normalizes, drops combining marks and lowercases a word.
fn clean_value(value: &str) -> String {
    value
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
