//! Core value types for the Parlance extraction engine.
//!
//! This crate provides:
//! - [`Number`] - Exact-when-possible numeric values with an ordinal flag
//! - [`MixedFraction`] - Whole-plus-proper-fraction decomposition of decimals
//! - [`Duration`] - Calendar-aware durations with independent unit buckets
//! - [`TimeUnit`] - The closed set of calendar units durations are built from
//! - [`Error`] - Construction-time error types (unsupported locale, bad config)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod duration;
pub mod error;
pub mod mixed_fraction;
pub mod number;
pub mod util;

pub use duration::{Duration, TimeUnit};
pub use error::{Error, ErrorKind, Result};
pub use mixed_fraction::MixedFraction;
pub use number::Number;
