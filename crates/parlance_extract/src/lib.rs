//! Language-agnostic backtracking extraction primitives.
//!
//! These are shared, language-parameterized routines, not a single state
//! machine: per-language extractors compose them with their own category
//! tables and irregularities. Correctness rests on a consistent
//! checkpoint/rewind discipline: every routine either consumes the tokens
//! of a complete match or restores the stream position it started from.
//!
//! - [`number_utils`] - Grouped short/long-scale number parsing, sign
//!   handling, bounded integer extraction
//! - [`duration_utils`] - Number-plus-unit duration phrase accumulation
//! - [`datetime_utils`] - Weekday/month resolution, am/pm and BC/AD
//!   markers, relative-indicator handling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod datetime_utils;
pub mod duration_utils;
pub mod number_utils;
