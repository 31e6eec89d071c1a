//! Integration tests for TokenStream
//!
//! Covers the sentinel out-of-range token, the soft end bound, the
//! skip-over-filler combinator, and the longest-match selection rule.

use parlance_lexer::{Token, TokenStream};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn word(value: &str, categories: &[&str]) -> Token {
    let set: HashSet<String> = categories.iter().map(ToString::to_string).collect();
    Token::matched(value, " ", 0, Arc::new(set))
}

fn stream_of(categories_per_token: &[&[&str]]) -> TokenStream {
    TokenStream::new(
        categories_per_token
            .iter()
            .enumerate()
            .map(|(i, cats)| word(&format!("w{i}"), cats))
            .collect(),
    )
}

// =============================================================================
// Sentinel and bounds
// =============================================================================

#[test]
fn out_of_range_access_answers_no_match() {
    let ts = stream_of(&[&["digit"]]);
    assert!(!ts.get(-5).has_category("digit"));
    assert!(!ts.get(5).has_category("digit"));
    assert!(ts.get(5).number().is_none());
    assert_eq!(ts.get(5).value(), "");
}

#[test]
fn token_count_clamps_to_list_length() {
    let mut ts = stream_of(&[&[], &[], &[]]);
    ts.set_token_count(10);
    assert_eq!(ts.token_count(), 3);
    ts.set_token_count(1);
    assert!(!ts.finished());
    ts.move_position_forward_by(1);
    assert!(ts.finished());
}

// =============================================================================
// Longest-match invariant
// =============================================================================

#[test]
fn supplier_advancing_furthest_wins() {
    let mut ts = stream_of(&[&[], &[], &[], &[]]);
    let result = ts.first_which_uses_most_tokens(&mut [
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(2);
            Some(2)
        },
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(3);
            Some(3)
        },
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(1);
            Some(1)
        },
    ]);
    assert_eq!(result, Some(3));
    assert_eq!(ts.position(), 3);
}

#[test]
fn ties_keep_the_earlier_supplier() {
    let mut ts = stream_of(&[&[], &[]]);
    let result = ts.first_which_uses_most_tokens(&mut [
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(2);
            Some("first")
        },
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(2);
            Some("second")
        },
    ]);
    assert_eq!(result, Some("first"));
}

#[test]
fn non_advancing_success_does_not_win() {
    let mut ts = stream_of(&[&[], &[]]);
    let result = ts.first_which_uses_most_tokens(&mut [
        &mut |_: &mut TokenStream| Some("stationary"),
        &mut |ts: &mut TokenStream| {
            ts.move_position_forward_by(1);
            Some("moving")
        },
    ]);
    assert_eq!(result, Some("moving"));
    assert_eq!(ts.position(), 1);
}

proptest! {
    /// The longest-match rule holds for arbitrary pairs of advances.
    #[test]
    fn longest_match_for_arbitrary_advances(p1 in 1usize..8, p2 in 1usize..8) {
        let plain: Vec<&[&str]> = vec![&[]; 8];
        let mut ts = stream_of(&plain);
        let result = ts.first_which_uses_most_tokens(&mut [
            &mut |ts: &mut TokenStream| { ts.move_position_forward_by(p1 as isize); Some(1) },
            &mut |ts: &mut TokenStream| { ts.move_position_forward_by(p2 as isize); Some(2) },
        ]);
        if p2 > p1 {
            prop_assert_eq!(result, Some(2));
            prop_assert_eq!(ts.position(), p2);
        } else {
            prop_assert_eq!(result, Some(1));
            prop_assert_eq!(ts.position(), p1);
        }
    }
}

// =============================================================================
// Rewind idempotence
// =============================================================================

proptest! {
    /// A failing try_or_skip never moves the cursor, whatever the token
    /// categories are.
    #[test]
    fn failed_skip_restores_position(
        categories in proptest::collection::vec(
            proptest::sample::select(vec!["ignore", "digit", "other"]),
            0..10,
        ),
        start in 0usize..10,
    ) {
        let tokens: Vec<&[&str]> = categories
            .iter()
            .map(|c| match *c {
                "ignore" => &["ignore"][..],
                "digit" => &["digit"][..],
                _ => &[][..],
            })
            .collect();
        let mut ts = stream_of(&tokens);
        let start = start.min(categories.len());
        ts.set_position(start);

        let result: Option<()> = ts.try_or_skip_category("ignore", true, |_| None);
        prop_assert_eq!(result, None);
        prop_assert_eq!(ts.position(), start);
    }
}

#[test]
fn skip_consumes_only_leading_filler() {
    let mut ts = stream_of(&[&["ignore"], &["ignore"], &["digit"], &["ignore"]]);
    let result = ts.try_or_skip_category("ignore", true, |ts| {
        if ts.get(0).has_category("digit") {
            ts.move_position_forward_by(1);
            Some(())
        } else {
            None
        }
    });
    assert_eq!(result, Some(()));
    assert_eq!(ts.position(), 3); // trailing filler untouched
}

#[test]
fn skip_disabled_calls_through_once() {
    let mut ts = stream_of(&[&["ignore"], &["digit"]]);
    let result: Option<()> = ts.try_or_skip_category("ignore", false, |ts| {
        ts.get(0).has_category("digit").then(|| ())
    });
    assert_eq!(result, None);
    assert_eq!(ts.position(), 0);
}
