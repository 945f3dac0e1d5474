//! # Spellrank
//!
//! Spelling suggestions ranked by a weighted edit distance.
//!
//! ## Features
//!
//! - Weighted insert/delete/replace edit distance
//! - Vocabulary normalization (lowercasing, diacritic folding)
//! - Optional bounded-radius candidate restriction
//! - Parallel scoring across a worker pool with tie-aware top-k ranking
//!
//! ```
//! use std::sync::Arc;
//! use spellrank::spelling::{CorrectorConfig, SpellingCorrector, Vocabulary};
//!
//! let vocabulary = Arc::new(Vocabulary::from_tokens(["house", "mouse", "horse"]));
//! let corrector = SpellingCorrector::new(vocabulary, CorrectorConfig::default()).unwrap();
//! let result = corrector.suggest("hause").unwrap();
//! assert_eq!(result.suggestions[0].word, "house");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod parallel_search;
pub mod source;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellrankError};
    pub use crate::parallel_search::{ParallelSearchConfig, ParallelSearchEngine, ScoredWord};
    pub use crate::spelling::{
        CandidateGenerator, CorrectionResult, CorrectorConfig, EditDistance, SpellingCorrector,
        Vocabulary, VocabularySource,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
