//! Integration tests for Layer 3: per-language extractors
//!
//! One module per language, driven through the locale-resolved parser
//! facade so that tokenizer, extractor and driver are exercised together.

mod english;
mod german;
mod italian;
mod spanish;
mod swedish;

use chrono::{NaiveDate, NaiveDateTime};

/// Wednesday, April 28th 2021, 10:00.
pub fn wednesday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 4, 28)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
