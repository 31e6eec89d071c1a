//! Parlance - Natural-language number, duration and date/time extraction
//!
//! This crate re-exports all layers of the Parlance system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: parlance_runtime    — Locale registry, extraction driver, REPL
//! Layer 3: parlance_lang       — Per-language extractors + configuration
//! Layer 2: parlance_extract    — Shared backtracking extraction primitives
//! Layer 1: parlance_lexer      — Tokenizer, tokens, rewindable token stream
//! Layer 0: parlance_foundation — Core values (Number, Duration, Error)
//! ```

pub use parlance_extract as extract;
pub use parlance_foundation as foundation;
pub use parlance_lang as lang;
pub use parlance_lexer as lexer;
pub use parlance_runtime as runtime;

pub use parlance_foundation::{Duration, Error, ErrorKind, MixedFraction, Number, TimeUnit};
pub use parlance_runtime::{MatchedRange, Parser, TextOrValue};
