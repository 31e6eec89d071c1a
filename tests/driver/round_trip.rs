//! Render-then-extract round trip.
//!
//! A small English number renderer generates phrases for sampled integers;
//! extracting the phrase must give the integer back. This exercises the
//! tokenizer, the group parsers and the driver against each other across
//! the whole sub-million range.

use parlance::{Number, Parser};
use proptest::prelude::*;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn under_hundred(n: i64) -> String {
    if n < 20 {
        ONES[usize::try_from(n).unwrap()].to_string()
    } else {
        let tens = TENS[usize::try_from(n / 10).unwrap()];
        if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{tens} {}", ONES[usize::try_from(n % 10).unwrap()])
        }
    }
}

fn under_thousand(n: i64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds == 0 {
        under_hundred(rest)
    } else if rest == 0 {
        format!("{} hundred", ONES[usize::try_from(hundreds).unwrap()])
    } else {
        format!(
            "{} hundred and {}",
            ONES[usize::try_from(hundreds).unwrap()],
            under_hundred(rest)
        )
    }
}

/// Renders `n` (below one million) the way a person would say it.
fn render(n: i64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let thousands = n / 1000;
    let rest = n % 1000;
    let mut parts = Vec::new();
    if thousands > 0 {
        parts.push(format!("{} thousand", under_thousand(thousands)));
    }
    if rest > 0 {
        if thousands > 0 && rest < 100 {
            parts.push("and".to_string());
        }
        parts.push(under_thousand(rest));
    }
    parts.join(" ")
}

#[test]
fn renderer_sanity() {
    assert_eq!(render(0), "zero");
    assert_eq!(render(21), "twenty one");
    assert_eq!(render(405), "four hundred and five");
    assert_eq!(render(23405), "twenty three thousand four hundred and five");
    assert_eq!(render(700_013), "seven hundred thousand and thirteen");
}

proptest! {
    #[test]
    fn extracting_a_rendered_integer_gives_it_back(n in 0i64..1_000_000) {
        let parser = Parser::for_locale("en").unwrap();
        let phrase = render(n);
        let extracted = parser.extract_number(&phrase).first();
        prop_assert_eq!(extracted, Some(Number::integer(n)));
    }
}

#[test]
fn boundary_values_round_trip() {
    let parser = Parser::for_locale("en").unwrap();
    for n in [0, 1, 19, 20, 99, 100, 101, 999, 1000, 1001, 10_000, 999_999] {
        let phrase = render(n);
        assert_eq!(
            parser.extract_number(&phrase).first(),
            Some(Number::integer(n)),
            "failed for {n}: {phrase}"
        );
    }
}
