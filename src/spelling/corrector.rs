//! Spelling corrector that ties vocabulary, metric and parallel search together.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};
use crate::parallel_search::{ParallelSearchConfig, ParallelSearchEngine, ScoredWord, SearchMetrics};
use crate::spelling::candidates::CandidateGenerator;
use crate::spelling::dictionary::Vocabulary;
use crate::spelling::levenshtein::EditDistance;
use crate::spelling::normalize::normalize;

/// What to do when candidate restriction leaves no vocabulary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRestrictionPolicy {
    /// Search the full vocabulary instead.
    FullScan,
    /// Report an empty vocabulary error to the caller.
    Error,
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Cost of inserting one character.
    pub insert_weight: f64,
    /// Cost of deleting one character.
    pub delete_weight: f64,
    /// Cost of replacing one character; `insert_weight + delete_weight` when unset.
    pub replace_weight: Option<f64>,
    /// Minimum number of suggestions to return.
    pub n_suggestions: usize,
    /// Edit radius used for candidate restriction.
    ///
    /// Generation cost grows by a factor of about `54 * len` per unit of
    /// radius; 3 and above is slow and memory hungry for long words.
    pub n_editions: usize,
    /// Whether to restrict the search to generated candidates.
    pub use_candidate_restriction: bool,
    /// Behavior when restriction yields no vocabulary words.
    pub empty_restriction: EmptyRestrictionPolicy,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            insert_weight: 1.0,
            delete_weight: 1.0,
            replace_weight: None,
            n_suggestions: 5,
            n_editions: 2,
            use_candidate_restriction: false,
            empty_restriction: EmptyRestrictionPolicy::FullScan,
        }
    }
}

impl CorrectorConfig {
    /// Build the metric described by the weights.
    pub fn metric(&self) -> Result<EditDistance> {
        EditDistance::validated(self.insert_weight, self.delete_weight, self.replace_weight)
    }

    pub fn validate(&self) -> Result<()> {
        self.metric()?;
        if self.n_suggestions == 0 {
            return Err(SpellrankError::configuration(
                "n_suggestions must be at least 1",
            ));
        }
        CandidateGenerator::new(self.n_editions)?;
        Ok(())
    }
}

/// How the search space was chosen for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SearchStrategy {
    /// Every vocabulary word was scored.
    FullScan,
    /// Only vocabulary words within the edit radius were scored.
    Restricted { radius: usize, candidates: usize },
    /// Restriction produced nothing and the full vocabulary was scored.
    FullScanFallback { radius: usize },
}

/// Result of spelling correction for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Word as typed.
    pub original: String,
    /// Word after normalization, as compared against the vocabulary.
    pub normalized: String,
    /// How the search space was chosen.
    pub strategy: SearchStrategy,
    /// Number of vocabulary words scored.
    pub searched: usize,
    /// Ranked suggestions, closest first.
    pub suggestions: Vec<ScoredWord>,
}

impl CorrectionResult {
    /// The closest suggestion.
    pub fn best(&self) -> Option<&ScoredWord> {
        self.suggestions.first()
    }

    /// Whether the word itself is a vocabulary member.
    pub fn is_known(&self) -> bool {
        self.best()
            .is_some_and(|s| s.distance == 0.0 && s.word == self.normalized)
    }
}

/// Suggests vocabulary words for possibly misspelled input.
pub struct SpellingCorrector {
    vocabulary: Arc<Vocabulary>,
    metric: EditDistance,
    generator: CandidateGenerator,
    engine: ParallelSearchEngine,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with default search settings.
    pub fn new(vocabulary: Arc<Vocabulary>, config: CorrectorConfig) -> Result<Self> {
        Self::with_search_config(vocabulary, config, ParallelSearchConfig::default())
    }

    /// Create a corrector, validating every setting up front.
    pub fn with_search_config(
        vocabulary: Arc<Vocabulary>,
        config: CorrectorConfig,
        search_config: ParallelSearchConfig,
    ) -> Result<Self> {
        config.validate()?;
        let metric = config.metric()?;
        let generator = CandidateGenerator::new(config.n_editions)?;
        let engine = ParallelSearchEngine::new(search_config)?;

        Ok(SpellingCorrector {
            vocabulary,
            metric,
            generator,
            engine,
            config,
        })
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn metric(&self) -> &EditDistance {
        &self.metric
    }

    /// Rank vocabulary words for `word`.
    pub fn suggest(&self, word: &str) -> Result<CorrectionResult> {
        let normalized = normalize(word);

        let (restricted, strategy) = if self.config.use_candidate_restriction {
            self.restrict(&normalized)?
        } else {
            (None, SearchStrategy::FullScan)
        };
        let search_space = restricted.as_ref().unwrap_or(self.vocabulary.as_ref());

        let suggestions = self.engine.search(
            &normalized,
            search_space,
            &self.metric,
            self.config.n_suggestions,
        )?;

        Ok(CorrectionResult {
            original: word.to_string(),
            normalized,
            strategy,
            searched: search_space.len(),
            suggestions,
        })
    }

    /// Shrink the vocabulary to words within the edit radius of `word`.
    ///
    /// The word itself is kept as a candidate so an exact match is found at
    /// every radius. `None` means the full vocabulary is searched.
    fn restrict(&self, word: &str) -> Result<(Option<Vocabulary>, SearchStrategy)> {
        let radius = self.generator.radius();
        let mut candidates = self.generator.generate(word);
        candidates.insert(word.to_string());

        let restricted = self.vocabulary.restricted(&candidates);
        log::debug!(
            "restricted {word:?} to {} of {} words ({} candidates, radius {radius})",
            restricted.len(),
            self.vocabulary.len(),
            candidates.len()
        );

        if !restricted.is_empty() {
            let strategy = SearchStrategy::Restricted {
                radius,
                candidates: restricted.len(),
            };
            return Ok((Some(restricted), strategy));
        }

        match self.config.empty_restriction {
            EmptyRestrictionPolicy::FullScan => {
                log::warn!(
                    "no vocabulary word within {radius} edits of {word:?}, scanning full vocabulary"
                );
                Ok((None, SearchStrategy::FullScanFallback { radius }))
            }
            EmptyRestrictionPolicy::Error => Err(SpellrankError::empty_vocabulary(format!(
                "no vocabulary word within {radius} edits of {word:?}"
            ))),
        }
    }

    /// Metrics of the underlying search engine.
    pub fn metrics(&self) -> SearchMetrics {
        self.engine.metrics()
    }
}
