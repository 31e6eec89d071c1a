//! A rewindable cursor over a tokenized utterance.

use crate::token::Token;

/// A cursor over an immutable token list, with an independently adjustable
/// soft end bound.
///
/// One instance covers one parse attempt over one utterance. Backtracking is
/// explicit: extractors save the integer [`position`](Self::position) before
/// a speculative sub-parse and restore it with
/// [`set_position`](Self::set_position) when the sub-parse fails. The soft
/// [`token_count`](Self::token_count) bound lets a driver retry extraction
/// over progressively shorter windows of the same token list.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
    token_count: usize,
}

impl TokenStream {
    /// Creates a stream positioned at the start of `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let token_count = tokens.len();
        Self {
            tokens,
            position: 0,
            token_count,
        }
    }

    /// The current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute position (used to restore a
    /// previously saved checkpoint).
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// The soft end bound: one past the last visible token.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Sets the soft end bound, clamped to the underlying token list length.
    pub fn set_token_count(&mut self, token_count: usize) {
        self.token_count = token_count.min(self.tokens.len());
    }

    /// The length of the underlying token list, ignoring the soft bound.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// The token at `position + ahead_by`, or the empty sentinel token when
    /// that index falls outside `[0, token_count)`. Never panics.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn get(&self, ahead_by: isize) -> &Token {
        let index = self.position as isize + ahead_by;
        if index >= 0 && (index as usize) < self.token_count {
            &self.tokens[index as usize]
        } else {
            Token::empty() // empty token to allow reducing checks
        }
    }

    /// Adjusts the cursor by `delta`, which may be negative (rewinding).
    ///
    /// No bounds clamping: callers only rewind to previously saved positions.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_position_forward_by(&mut self, delta: isize) {
        self.position = (self.position as isize + delta) as usize;
    }

    /// Whether the cursor is at or past the soft end bound.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.position >= self.token_count
    }

    /// Finds the first token without `category`, scanning forward from
    /// `position + start_from_ahead_by` (clamped to the stream start).
    ///
    /// Returns the found token's offset relative to `position`, or the
    /// offset one past the last visible token if every remaining token has
    /// the category.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn index_of_without_category(&self, category: &str, start_from_ahead_by: isize) -> isize {
        let start = (self.position as isize + start_from_ahead_by).max(0) as usize;
        for i in start..self.token_count {
            if !self.tokens[i].has_category(category) {
                return i as isize - self.position as isize;
            }
        }
        self.token_count as isize - self.position as isize
    }

    /// Calls `f`; on `None`, skips one token and retries, as long as the
    /// token just skipped carried `category` and the stream is not finished.
    ///
    /// When `do_try_skipping` is false, this is just `f`. On exhaustion the
    /// original position is restored and `None` is returned. This is the
    /// single generic "best-effort skip over filler" combinator used by
    /// every extractor layer.
    pub fn try_or_skip_category<T>(
        &mut self,
        category: &str,
        do_try_skipping: bool,
        mut f: impl FnMut(&mut TokenStream) -> Option<T>,
    ) -> Option<T> {
        if !do_try_skipping {
            return f(self);
        }

        let original_position = self.position;
        loop {
            if let Some(result) = f(self) {
                return Some(result);
            }
            self.move_position_forward_by(1);
            // note: the category test applies to the token just skipped
            if !(self.get(-1).has_category(category) && !self.finished()) {
                break;
            }
        }

        // found nothing, restore position
        self.position = original_position;
        None
    }

    /// [`Self::try_or_skip_category`] over the `date_time_ignore` category.
    pub fn try_or_skip_datetime_ignore<T>(
        &mut self,
        do_try_skipping: bool,
        f: impl FnMut(&mut TokenStream) -> Option<T>,
    ) -> Option<T> {
        self.try_or_skip_category("date_time_ignore", do_try_skipping, f)
    }

    /// Runs each supplier from the same starting position and keeps the
    /// result of whichever advanced the stream furthest.
    ///
    /// Ties keep the earlier supplier's result; the final position is the
    /// winning supplier's end position, or the starting position when no
    /// supplier both succeeded and advanced.
    pub fn first_which_uses_most_tokens<T>(
        &mut self,
        suppliers: &mut [&mut dyn FnMut(&mut TokenStream) -> Option<T>],
    ) -> Option<T> {
        let original_position = self.position;
        let mut best_result: Option<T> = None;
        let mut best_position = original_position;

        for supplier in suppliers.iter_mut() {
            self.position = original_position;
            let result = supplier(self);
            if result.is_some() && self.position > best_position {
                best_result = result;
                best_position = self.position;
            }
        }

        self.position = best_position;
        best_result
    }
}
