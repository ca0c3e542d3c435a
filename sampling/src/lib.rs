//! Deterministic randomness for exercising bit codecs.
//!
//! Every [`source::Source`] is seeded explicitly so that test runs and
//! benches are reproducible.

pub mod distributions;
pub mod source;
