//! Top-level module for the text-statistics algorithms.
//!
//! This crate provides two unrelated frequency-based computations:
//! - Adjacent-character-pair counting and next-character prediction (`bigram`)
//! - Term-frequency / inverse-document-frequency corpus scoring (`tfidf`)

/// Adjacent-character-pair frequency model (`BigramModel`).
///
/// Handles pair counting over a single string and deterministic
/// next-character prediction from the highest-frequency successor.
pub mod bigram;

/// Insertion-ordered term counter (`TermFrequency`).
///
/// Tracks per-document term occurrence counts and derives the
/// probability distribution used as the term-frequency vector.
pub mod term_frequency;

/// TF-IDF corpus scoring.
///
/// Normalization, corpus-wide document-frequency and IDF tables,
/// and the per-document combination of both.
pub mod tfidf;
