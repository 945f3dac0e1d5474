//! Bounded-radius candidate generation.
//!
//! Candidates are every string reachable from a word by 1..=radius single
//! character edits (insertion, deletion, replacement) over `'a'..='z'`. The
//! generator knows nothing about a vocabulary; callers intersect the result
//! with one to shrink the search space.

use ahash::AHashSet;

use crate::error::{Result, SpellrankError};

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Radius from which generation gets expensive. Each round multiplies the
/// candidate count by roughly `54 * len`, so a ten letter word at radius 3
/// yields on the order of 10^8 strings.
pub const EXPENSIVE_RADIUS: usize = 3;

/// Generates all strings within a bounded number of edits of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateGenerator {
    radius: usize,
}

impl CandidateGenerator {
    /// Create a generator; a radius of zero is rejected.
    pub fn new(radius: usize) -> Result<Self> {
        if radius == 0 {
            return Err(SpellrankError::configuration(
                "edit radius (n_editions) must be at least 1",
            ));
        }

        let generator = CandidateGenerator { radius };
        if generator.is_expensive() {
            log::warn!(
                "edit radius {radius} generates candidates exponentially in word length; \
                 expect high memory use for long words"
            );
        }
        Ok(generator)
    }

    /// Whether this radius is at or beyond [`EXPENSIVE_RADIUS`].
    pub fn is_expensive(&self) -> bool {
        self.radius >= EXPENSIVE_RADIUS
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Union of every round's edits, starting from `word` alone.
    pub fn generate(&self, word: &str) -> AHashSet<String> {
        let mut candidates = AHashSet::new();
        let mut frontier = vec![word.to_string()];

        for round in 1..=self.radius {
            let mut next = AHashSet::new();
            for seed in &frontier {
                next.extend(Self::single_edits(seed));
            }

            frontier = next
                .iter()
                .filter(|edit| !candidates.contains(*edit))
                .cloned()
                .collect();
            candidates.extend(next);

            log::trace!(
                "candidate round {round} for {word:?}: {} new, {} total",
                frontier.len(),
                candidates.len()
            );
            if frontier.is_empty() {
                break;
            }
        }

        candidates
    }

    /// Generate all strings one edit away from `word`.
    pub fn single_edits(word: &str) -> AHashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let mut edits = AHashSet::with_capacity(len * 53 + 26);

        // Deletions
        for i in 0..len {
            let mut new_word = chars.clone();
            new_word.remove(i);
            edits.insert(new_word.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for ch in ALPHABET {
                if ch != chars[i] {
                    let mut new_word = chars.clone();
                    new_word[i] = ch;
                    edits.insert(new_word.into_iter().collect());
                }
            }
        }

        // Insertions, including after the last character
        for i in 0..=len {
            for ch in ALPHABET {
                let mut new_word = chars.clone();
                new_word.insert(i, ch);
                edits.insert(new_word.into_iter().collect());
            }
        }

        edits
    }
}
