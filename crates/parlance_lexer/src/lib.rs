//! Tokenizer and token stream for the Parlance extraction engine.
//!
//! This crate provides:
//! - [`Token`] - A word (or symbol) with its semantic categories, optional
//!   numeric value and optional duration-unit association
//! - [`TokenStream`] - A rewindable cursor over a tokenized utterance, the
//!   backbone of all speculative backtracking parsing
//! - [`Tokenizer`] - Turns raw text into tokens using per-language tables
//! - [`TokenizerConfig`] - The JSON-backed per-language tables themselves

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod token;
pub mod token_stream;
pub mod tokenizer;

pub use config::TokenizerConfig;
pub use token::{DurationUnit, Token};
pub use token_stream::TokenStream;
pub use tokenizer::Tokenizer;
