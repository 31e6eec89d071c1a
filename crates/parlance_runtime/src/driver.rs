//! The generic extraction driver.
//!
//! Given a tokenized utterance and an extractor that attempts one match at
//! the stream's current position, the driver finds the first match, all
//! matches interleaved with literal text, or all possible match intervals.

use parlance_lexer::TokenStream;
use tracing::debug;

/// One element of a [`parse_mixed_with_text`] result: either literal text
/// the extractor could not interpret, or an extracted value.
#[derive(Clone, Debug, PartialEq)]
pub enum TextOrValue<T> {
    /// Literal text between matches.
    Text(String),
    /// An extracted value.
    Value(T),
}

impl<T> TextOrValue<T> {
    /// The extracted value, if this element is one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Text(_) => None,
            Self::Value(v) => Some(v),
        }
    }

    /// The literal text, if this element is one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Value(_) => None,
        }
    }
}

/// A `[start, end)` byte range of the utterance where a value was parsed.
///
/// `is_largest_possible` is true only when the range is not contained in
/// any other range produced for the same utterance.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedRange<T> {
    /// Byte offset where the matched text starts.
    pub start: usize,
    /// Byte offset one past the end of the matched text.
    pub end: usize,
    /// The parsed value.
    pub value: T,
    /// Whether no other produced range contains this one.
    pub is_largest_possible: bool,
}

/// Finds the value starting at the lowest position in the stream.
///
/// When several matches start at the same position the longest one wins,
/// since the extractor imposes no limit on how many tokens it consumes.
pub fn parse_first<T>(
    ts: &mut TokenStream,
    mut extract: impl FnMut(&mut TokenStream) -> Option<T>,
) -> Option<T> {
    while !ts.finished() {
        if let Some(result) = extract(ts) {
            debug!(position = ts.position(), "extraction matched");
            return Some(result);
        }

        // nothing found here, try the next position
        ts.move_position_forward_by(1);
    }

    None // nothing was found at any position
}

/// Parses all values in the stream, greedily from the start, interleaving
/// them with the literal text the extractor could not interpret.
pub fn parse_mixed_with_text<T>(
    ts: &mut TokenStream,
    mut extract: impl FnMut(&mut TokenStream) -> Option<T>,
) -> Vec<TextOrValue<T>> {
    let mut result = Vec::new();
    let mut current_text = String::new();

    while !ts.finished() {
        match extract(ts) {
            None => {
                // no value here: the token and its spaces are literal text
                current_text.push_str(ts.get(0).value());
                current_text.push_str(ts.get(0).spaces_following());
                ts.move_position_forward_by(1);
            }
            Some(value) => {
                if !current_text.is_empty() {
                    result.push(TextOrValue::Text(std::mem::take(&mut current_text)));
                }
                result.push(TextOrValue::Value(value));
                // the spaces after the matched tokens go with the following text
                current_text.push_str(ts.get(-1).spaces_following());
            }
        }
    }

    if !current_text.is_empty() {
        result.push(TextOrValue::Text(current_text)); // leftover text
    }

    result
}

/// Parses every interval of the stream where a value can be extracted.
///
/// For each start offset the extractor is retried over progressively
/// shorter token windows (by shrinking the stream's soft bound), which
/// keeps the enumeration `O(n * k^2)` where `k` is the typically-small
/// maximum match length. Ranges are sorted by start and then by reversed
/// end.
pub fn parse_possible_intervals<T>(
    ts: &mut TokenStream,
    mut extract: impl FnMut(&mut TokenStream) -> Option<T>,
) -> Vec<MatchedRange<T>> {
    let token_count = ts.token_count();
    let mut ranges = Vec::new();

    let mut max_end_so_far = 0;
    for start in 0..token_count {
        // parse up to the whole stream (set before reading the start token)
        ts.set_token_count(token_count);
        ts.set_position(start);
        let start_in_original = ts.get(0).position_in_original();

        // try all possible match lengths from this start position
        loop {
            ts.set_position(start);
            let Some(value) = extract(ts) else {
                // nothing in this window, so nothing in any smaller one
                break;
            };
            if ts.position() == start {
                break; // a match always consumes at least one token
            }

            ranges.push(MatchedRange {
                start: start_in_original,
                end: ts.get(-1).position_in_original() + ts.get(-1).value().len(),
                value,
                // the longest range from here, reaching further right than
                // ever observed, is contained in no other range
                is_largest_possible: ts.token_count() == token_count
                    && ts.position() > max_end_so_far,
            });

            max_end_so_far = max_end_so_far.max(ts.position());
            ts.set_token_count(ts.position() - 1); // retry over a smaller window
        }
    }

    debug!(ranges = ranges.len(), "interval enumeration finished");
    ranges
}
