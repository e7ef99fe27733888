//! Text-statistics algorithms over character and word sequences.
//!
//! This crate provides two independent, side-effect-free components:
//! - A bigram-frequency next-character predictor
//! - A TF-IDF corpus scorer
//!
//! Both are pure computations: each call builds its own frequency tables
//! from the input, combines them into a result, and returns. No state is
//! shared between calls or between the two components.

/// Core text-statistics algorithms.
///
/// This module exposes the bigram predictor and the TF-IDF scorer while
/// keeping shared counting primitives alongside them.
pub mod algo;
