//! Merging and ranking of per-chunk distance results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};
use crate::parallel_search::search_task::TaskResult;

/// A vocabulary word paired with its distance to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The suggested word.
    pub word: String,
    /// Weighted edit distance from the query.
    pub distance: f64,
}

impl ScoredWord {
    pub fn new(word: String, distance: f64) -> Self {
        ScoredWord { word, distance }
    }

    /// Ascending distance, then lexicographic word order.
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Flatten task results into one collection, failing on the first error.
///
/// A failed chunk aborts the merge: dropping it would silently change the
/// minimum distance and its tie count.
pub fn merge(results: Vec<TaskResult>) -> Result<Vec<ScoredWord>> {
    let capacity = results
        .iter()
        .map(|r| r.scored.as_ref().map_or(0, Vec::len))
        .sum();
    let mut merged = Vec::with_capacity(capacity);

    for result in results {
        match result.scored {
            Ok(scored) => merged.extend(scored),
            Err(e) => {
                return Err(SpellrankError::compute(format!(
                    "task {} (chunk {}) failed: {e}",
                    result.task_id, result.chunk
                )));
            }
        }
    }

    Ok(merged)
}

/// Sort ascending and keep `max(k, tie_count)` entries.
///
/// `tie_count` is the number of entries sharing the minimum distance, so every
/// minimum-distance word is returned even when that exceeds `k`.
pub fn rank(mut scored: Vec<ScoredWord>, k: usize) -> Result<Vec<ScoredWord>> {
    if scored.is_empty() {
        return Err(SpellrankError::empty_vocabulary(
            "cannot rank suggestions against zero candidate words",
        ));
    }

    scored.sort_by(ScoredWord::ranking_order);

    let min_distance = scored[0].distance;
    let tie_count = scored
        .iter()
        .take_while(|s| s.distance == min_distance)
        .count();

    scored.truncate(k.max(tie_count));
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pairs: &[(&str, f64)]) -> Vec<ScoredWord> {
        pairs
            .iter()
            .map(|(w, d)| ScoredWord::new(w.to_string(), *d))
            .collect()
    }

    fn words(ranked: &[ScoredWord]) -> Vec<&str> {
        ranked.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_and_truncates() {
        let ranked = rank(scored(&[("dog", 6.0), ("cat", 0.0), ("cot", 2.0)]), 2).unwrap();
        assert_eq!(words(&ranked), vec!["cat", "cot"]);
    }

    #[test]
    fn test_rank_keeps_all_minimum_ties() {
        let ranked = rank(
            scored(&[("cot", 1.0), ("bat", 1.0), ("hat", 1.0), ("dog", 3.0)]),
            1,
        )
        .unwrap();
        assert_eq!(words(&ranked), vec!["bat", "cot", "hat"]);
    }

    #[test]
    fn test_rank_ties_beyond_minimum_are_cut() {
        let ranked = rank(
            scored(&[("a", 0.0), ("c", 1.0), ("b", 1.0), ("d", 1.0)]),
            2,
        )
        .unwrap();
        assert_eq!(words(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_rank_fewer_entries_than_k() {
        let ranked = rank(scored(&[("b", 2.0), ("a", 1.0)]), 10).unwrap();
        assert_eq!(words(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_rank_empty_fails() {
        let err = rank(Vec::new(), 5).unwrap_err();
        assert!(matches!(err, SpellrankError::EmptyVocabulary(_)));
    }

    #[test]
    fn test_merge_propagates_failure() {
        let ok = TaskResult {
            task_id: "t0".to_string(),
            chunk: 0,
            scored: Ok(scored(&[("cat", 0.0)])),
            execution_time: std::time::Duration::ZERO,
        };
        let failed = TaskResult::failure("t1".to_string(), 1, SpellrankError::compute("boom"));

        let err = merge(vec![ok, failed]).unwrap_err();
        assert!(matches!(err, SpellrankError::Compute(_)));
        assert!(err.to_string().contains("chunk 1"));
    }

    #[test]
    fn test_merge_flattens() {
        let a = TaskResult {
            task_id: "a".to_string(),
            chunk: 0,
            scored: Ok(scored(&[("x", 1.0)])),
            execution_time: std::time::Duration::ZERO,
        };
        let b = TaskResult {
            task_id: "b".to_string(),
            chunk: 1,
            scored: Ok(scored(&[("y", 2.0), ("z", 3.0)])),
            execution_time: std::time::Duration::ZERO,
        };
        assert_eq!(merge(vec![a, b]).unwrap().len(), 3);
    }
}
