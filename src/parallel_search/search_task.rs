//! Search task definitions for parallel execution.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::error::{Result, SpellrankError};
use crate::parallel_search::merger::ScoredWord;
use crate::spelling::levenshtein::EditDistance;

/// One contiguous chunk of the vocabulary to score against a word.
#[derive(Debug, Clone)]
pub struct SearchTask {
    /// Unique identifier for this task.
    pub task_id: String,

    /// Position of this chunk among the search's partitions.
    pub chunk: usize,

    /// Member indices covered by this task.
    pub range: Range<usize>,
}

impl SearchTask {
    /// Create a new search task.
    pub fn new(chunk: usize, range: Range<usize>) -> Self {
        let task_id = format!("chunk{}_{}", chunk, uuid::Uuid::new_v4());
        Self {
            task_id,
            chunk,
            range,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Score every member of this chunk against `word`.
    pub fn execute(self, word: &str, members: &[String], metric: &EditDistance) -> TaskResult {
        let start = Instant::now();
        let scored = Self::score_chunk(word, members, self.range.clone(), metric);

        TaskResult {
            task_id: self.task_id,
            chunk: self.chunk,
            scored,
            execution_time: start.elapsed(),
        }
    }

    fn score_chunk(
        word: &str,
        members: &[String],
        range: Range<usize>,
        metric: &EditDistance,
    ) -> Result<Vec<ScoredWord>> {
        let chunk = members.get(range.clone()).ok_or_else(|| {
            SpellrankError::compute(format!(
                "chunk {range:?} out of bounds for {} members",
                members.len()
            ))
        })?;

        chunk
            .iter()
            .map(|candidate| {
                let distance = metric.distance(word, candidate);
                if distance.is_finite() {
                    Ok(ScoredWord::new(candidate.clone(), distance))
                } else {
                    Err(SpellrankError::compute(format!(
                        "non-finite distance between {word:?} and {candidate:?}"
                    )))
                }
            })
            .collect()
    }
}

/// Result of executing a search task.
#[derive(Debug)]
pub struct TaskResult {
    /// Task ID this result belongs to.
    pub task_id: String,

    /// Chunk position of the task.
    pub chunk: usize,

    /// Scored members, or the error that stopped the task.
    pub scored: Result<Vec<ScoredWord>>,

    /// Execution time for this task.
    pub execution_time: Duration,
}

impl TaskResult {
    /// Create a failed task result.
    pub fn failure(task_id: String, chunk: usize, error: SpellrankError) -> Self {
        Self {
            task_id,
            chunk,
            scored: Err(error),
            execution_time: Duration::ZERO,
        }
    }

    pub fn is_success(&self) -> bool {
        self.scored.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<String> {
        ["bat", "cat", "cot", "dog"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_task_scores_its_range_only() {
        let task = SearchTask::new(1, 1..3);
        assert_eq!(task.len(), 2);
        assert!(task.task_id.starts_with("chunk1_"));

        let result = task.execute("cat", &members(), &EditDistance::default());
        assert!(result.is_success());

        let scored = result.scored.unwrap();
        assert_eq!(
            scored,
            vec![
                ScoredWord::new("cat".to_string(), 0.0),
                ScoredWord::new("cot".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_range_fails() {
        let result = SearchTask::new(0, 2..9).execute("cat", &members(), &EditDistance::default());
        assert!(matches!(result.scored, Err(SpellrankError::Compute(_))));
    }

    #[test]
    fn test_non_finite_distance_fails() {
        let metric = EditDistance::with_replace(f64::MAX, f64::MAX, f64::MAX).unwrap();
        let result = SearchTask::new(0, 0..1).execute("bat", &["cats".to_string()], &metric);
        assert!(!result.is_success());
    }
}
