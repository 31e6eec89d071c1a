//! Integration tests for the tokenizer over the English configuration
//!
//! Exercises word-table lookup, digit runs, plural stripping, duration
//! overlays and offset bookkeeping on the real English tables.

use parlance_lang::en;

#[test]
fn words_resolve_through_the_tables() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("twenty three");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].has_category("tens"));
    assert!(tokens[0].is_number_equal_to(20));
    assert!(tokens[1].has_category("digit"));
    assert!(tokens[1].is_number_equal_to(3));
}

#[test]
fn case_and_diacritics_are_normalized() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("TWENTY Thr\u{00e9}e");
    assert!(tokens[0].is_number_equal_to(20));
    assert!(tokens[1].is_number_equal_to(3));
    // the surface form is preserved
    assert_eq!(tokens[0].value(), "TWENTY");
}

#[test]
fn digit_runs_split_from_suffixes() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("57378th");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_number_equal_to(57378));
    assert!(tokens[0].has_category("raw"));
    assert!(tokens[1].has_category("ordinal_suffix"));
}

#[test]
fn punctuation_becomes_standalone_tokens() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("1,500");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[1].has_category("thousand_separator"));
    assert!(tokens[2].is_number_equal_to(500));
}

#[test]
fn plural_endings_are_stripped_for_lookup() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("five minutes");
    let unit = tokens[1].duration_unit().unwrap();
    assert_eq!(unit.category, "1 MINUTES");
    assert!(!unit.restricted_after_number);
}

#[test]
fn duration_words_can_also_be_ordinary_matches() {
    let tokenizer = en::tokenizer().unwrap();
    // "second" is the ordinal two and a duration unit at the same time
    let tokens = tokenizer.tokenize("second");
    assert!(tokens[0].has_category("ordinal"));
    assert!(tokens[0].is_number_equal_to(2));
    assert_eq!(tokens[0].duration_unit().unwrap().category, "1 SECONDS");
}

#[test]
fn bare_symbols_are_restricted_duration_units() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("ms");
    assert!(tokens[0].duration_unit().unwrap().restricted_after_number);
}

#[test]
fn offsets_and_spacing_are_preserved() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("  ten  past six");
    assert_eq!(tokens[0].value(), ""); // leading spaces token
    assert_eq!(tokens[0].spaces_following(), "  ");
    assert_eq!(tokens[1].value(), "ten");
    assert_eq!(tokens[1].position_in_original(), 2);
    assert_eq!(tokens[1].spaces_following(), "  ");
    assert_eq!(tokens[2].position_in_original(), 7);
    assert_eq!(tokens[3].position_in_original(), 12);
}

#[test]
fn unknown_words_are_plain_tokens() {
    let tokenizer = en::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("hello flibbertigibbet");
    for token in &tokens {
        assert!(token.number().is_none());
        assert!(token.duration_unit().is_none());
    }
}

#[test]
fn compound_words_decompose_in_the_german_tables() {
    let tokenizer = parlance_lang::de::tokenizer().unwrap();
    let tokens = tokenizer.tokenize("dreiundzwanzig");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[0].is_number_equal_to(3));
    assert!(tokens[1].has_category("ignore")); // the joining "und"
    assert!(tokens[2].is_number_equal_to(20));
}
