//! Locale registry, parser facade and extraction driver for Parlance.
//!
//! This crate provides:
//! - [`LanguageParser`] - The shared interface of every per-language parser
//! - [`Parser`] - A parser resolved from a locale string
//! - [`ExtractNumberParams`]/[`ExtractDurationParams`]/[`ExtractDateTimeParams`] -
//!   Parameter builders exposing the extraction driver (`first`,
//!   `mixed_with_text`, `possible_intervals`)
//! - [`Repl`] - A small interactive loop for trying extractions out

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod params;
pub mod parser;
pub mod registry;
pub mod repl;

pub use driver::{MatchedRange, TextOrValue};
pub use params::{ExtractDateTimeParams, ExtractDurationParams, ExtractNumberParams};
pub use parser::{DateTimeOptions, DurationOptions, LanguageParser, NumberOptions};
pub use registry::Parser;
pub use repl::Repl;
