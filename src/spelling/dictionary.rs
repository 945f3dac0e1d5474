//! Vocabulary management for spelling suggestions.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};
use regex::Regex;

use crate::spelling::normalize::normalize;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Where a vocabulary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// Free text, tokenized on word boundaries.
    FromCorpus(String),
    /// One raw word per entry.
    FromTokens(Vec<String>),
}

/// An immutable set of normalized words with their occurrence counts.
///
/// Members are kept sorted so partitions of the vocabulary are reproducible.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Sorted, deduplicated members
    words: Vec<String>,
    /// Occurrences per member in the originating source
    frequencies: AHashMap<String, u32>,
}

impl Vocabulary {
    /// Build a vocabulary from either source kind.
    pub fn build(source: VocabularySource) -> Self {
        match source {
            VocabularySource::FromCorpus(text) => Self::from_corpus(&text),
            VocabularySource::FromTokens(tokens) => Self::from_tokens(tokens),
        }
    }

    /// Create a vocabulary from a list of raw tokens.
    ///
    /// Blank tokens are skipped; variants that normalize to the same word
    /// collapse into one member.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_normalized(tokens.into_iter().map(|token| normalize(token.as_ref())))
    }

    /// Create a vocabulary from a corpus of text.
    pub fn from_corpus(text: &str) -> Self {
        let normalized = normalize(text);
        Self::from_normalized(
            WORD_PATTERN
                .find_iter(&normalized)
                .map(|m| m.as_str().to_string()),
        )
    }

    fn from_normalized(words: impl Iterator<Item = String>) -> Self {
        let mut frequencies: AHashMap<String, u32> = AHashMap::new();
        for word in words.filter(|word| !word.is_empty()) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
        Self::from_frequencies(frequencies)
    }

    fn from_frequencies(frequencies: AHashMap<String, u32>) -> Self {
        let mut words: Vec<String> = frequencies.keys().cloned().collect();
        words.sort_unstable();
        Vocabulary { words, frequencies }
    }

    /// Keep only members that appear in `candidates`.
    pub fn restricted(&self, candidates: &AHashSet<String>) -> Vocabulary {
        let frequencies = candidates
            .iter()
            .filter_map(|word| {
                self.frequencies
                    .get(word)
                    .map(|&count| (word.clone(), count))
            })
            .collect();
        Self::from_frequencies(frequencies)
    }

    /// All members, sorted.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership; the argument is normalized first.
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(&normalize(word))
    }

    /// Occurrences of a word in the source, or 0 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.frequencies
            .get(&normalize(word))
            .copied()
            .unwrap_or(0)
    }

    /// Get the most frequent members, most frequent first.
    pub fn most_frequent_words(&self, limit: usize) -> Vec<(String, u32)> {
        let mut word_freq: Vec<(String, u32)> = self
            .frequencies
            .iter()
            .map(|(word, freq)| (word.clone(), *freq))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}
