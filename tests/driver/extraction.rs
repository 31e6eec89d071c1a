//! Driver shape tests over the English parser.

use parlance::{Number, Parser, TextOrValue};

fn parser() -> Parser {
    Parser::for_locale("en-US").unwrap()
}

// =============================================================================
// first
// =============================================================================

#[test]
fn first_scans_past_unparseable_text() {
    let n = parser()
        .extract_number("i will buy twenty three apples")
        .first();
    assert_eq!(n, Some(Number::integer(23)));
}

#[test]
fn first_returns_none_when_nothing_matches() {
    assert_eq!(parser().extract_number("hello how are you").first(), None);
    assert_eq!(parser().extract_duration("hello world").first(), None);
}

#[test]
fn first_takes_the_longest_match_at_the_earliest_offset() {
    // "two hundred" must win over just "two"
    let n = parser().extract_number("two hundred apples").first();
    assert_eq!(n, Some(Number::integer(200)));
}

// =============================================================================
// mixed with text
// =============================================================================

#[test]
fn values_interleave_with_literal_text() {
    let parts = parser()
        .extract_number("wake me at seven and buy 2 apples")
        .mixed_with_text();

    let values: Vec<&Number> = parts.iter().filter_map(TextOrValue::value).collect();
    assert_eq!(values, vec![&Number::integer(7), &Number::integer(2)]);

    let text: String = parts
        .iter()
        .filter_map(TextOrValue::text)
        .collect::<Vec<_>>()
        .join("|");
    // text after a value starts with the spaces that followed the match
    assert_eq!(text, "wake me at | and buy | apples");
}

#[test]
fn all_text_when_nothing_matches() {
    let parts = parser().extract_number("no digits here").mixed_with_text();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].text(), Some("no digits here"));
}

// =============================================================================
// possible intervals
// =============================================================================

#[test]
fn intervals_enumerate_shrinking_windows() {
    let ranges = parser()
        .extract_number("two hundred")
        .possible_intervals();

    // [two hundred], [two], [hundred]
    assert_eq!(ranges.len(), 3);

    assert_eq!(ranges[0].value, Number::integer(200));
    assert_eq!((ranges[0].start, ranges[0].end), (0, 11));
    assert!(ranges[0].is_largest_possible);

    assert_eq!(ranges[1].value, Number::integer(2));
    assert_eq!((ranges[1].start, ranges[1].end), (0, 3));
    assert!(!ranges[1].is_largest_possible);

    assert_eq!(ranges[2].value, Number::integer(100));
    assert_eq!((ranges[2].start, ranges[2].end), (4, 11));
    assert!(!ranges[2].is_largest_possible);
}

#[test]
fn intervals_are_sorted_by_start_then_reversed_end() {
    let ranges = parser()
        .extract_number("one two three")
        .possible_intervals();
    for pair in ranges.windows(2) {
        assert!(
            pair[0].start < pair[1].start
                || (pair[0].start == pair[1].start && pair[0].end >= pair[1].end)
        );
    }
}

#[test]
fn disjoint_matches_are_both_largest() {
    let ranges = parser()
        .extract_number("seven cats and twelve dogs")
        .possible_intervals();
    let largest: Vec<_> = ranges.iter().filter(|r| r.is_largest_possible).collect();
    assert_eq!(largest.len(), 2);
    assert_eq!(largest[0].value, Number::integer(7));
    assert_eq!(largest[1].value, Number::integer(12));
}

// =============================================================================
// construction errors
// =============================================================================

#[test]
fn unsupported_locale_is_a_construction_error() {
    let err = Parser::for_locale("zz-ZZ").unwrap_err();
    assert!(format!("{err}").contains("zz-ZZ"));
}
