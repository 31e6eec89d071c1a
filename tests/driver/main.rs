//! Integration tests for Layer 4: the extraction driver
//!
//! Tests the three driver shapes (first, mixed-with-text, possible
//! intervals) and the render-then-extract round trip over sampled
//! integers.

mod extraction;
mod round_trip;
