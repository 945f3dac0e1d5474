//! Spelling suggestion system for Spellrank.
//!
//! This module provides the weighted edit distance, bounded-radius candidate
//! generation, normalized vocabularies, and the corrector that ranks
//! vocabulary words for a possibly misspelled input.

pub mod candidates;
pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod normalize;

// Re-export commonly used types
pub use candidates::*;
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use normalize::*;
