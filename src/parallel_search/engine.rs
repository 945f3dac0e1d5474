//! Main parallel search engine implementation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, SpellrankError};
use crate::parallel_search::config::ParallelSearchConfig;
use crate::parallel_search::merger::{self, ScoredWord};
use crate::parallel_search::metrics::{SearchMetrics, SearchMetricsCollector, Timer};
use crate::parallel_search::partition::partition;
use crate::parallel_search::search_task::{SearchTask, TaskResult};
use crate::spelling::dictionary::Vocabulary;
use crate::spelling::levenshtein::EditDistance;

/// Scores a word against a vocabulary on a fixed pool of worker threads.
///
/// The vocabulary is split into one contiguous chunk per worker. Workers
/// only read shared data, and `search` blocks until every chunk reports.
pub struct ParallelSearchEngine {
    /// Configuration for the engine.
    config: ParallelSearchConfig,

    /// Thread pool for parallel execution.
    thread_pool: ThreadPool,

    /// Metrics collector.
    metrics: SearchMetricsCollector,
}

impl ParallelSearchEngine {
    /// Create a new parallel search engine.
    pub fn new(config: ParallelSearchConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_count())
            .thread_name(|i| format!("spellrank-search-{i}"))
            .build()
            .map_err(|e| SpellrankError::compute(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            config,
            thread_pool,
            metrics: SearchMetricsCollector::new(),
        })
    }

    /// Number of worker threads in the pool.
    pub fn worker_count(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Rank vocabulary members by distance to `word`.
    ///
    /// Returns at least `k` entries (fewer only when the vocabulary is
    /// smaller) and never drops a word tied at the minimum distance.
    pub fn search(
        &self,
        word: &str,
        vocabulary: &Vocabulary,
        metric: &EditDistance,
        k: usize,
    ) -> Result<Vec<ScoredWord>> {
        let timer = Timer::start();
        let result = self.execute_search(word, vocabulary, metric, k);

        if self.config.enable_metrics {
            let returned = result.as_ref().map_or(0, |ranked| ranked.len() as u64);
            self.metrics.record_search(
                timer.elapsed(),
                result.is_ok(),
                vocabulary.len() as u64,
                returned,
            );
        }

        result
    }

    fn execute_search(
        &self,
        word: &str,
        vocabulary: &Vocabulary,
        metric: &EditDistance,
        k: usize,
    ) -> Result<Vec<ScoredWord>> {
        if k == 0 {
            return Err(SpellrankError::invalid_argument(
                "number of suggestions must be at least 1",
            ));
        }
        if vocabulary.is_empty() {
            return Err(SpellrankError::empty_vocabulary(format!(
                "no candidate words to compare with {word:?}"
            )));
        }

        let tasks = self.create_search_tasks(vocabulary.len());
        log::debug!(
            "scoring {word:?} against {} words in {} chunks",
            vocabulary.len(),
            tasks.len()
        );

        let results = self.execute_tasks_parallel(tasks, word, vocabulary.words(), metric)?;
        let merged = merger::merge(results)?;
        merger::rank(merged, k)
    }

    /// Create one task per vocabulary partition.
    fn create_search_tasks(&self, len: usize) -> Vec<SearchTask> {
        partition(len, self.worker_count())
            .into_iter()
            .enumerate()
            .map(|(chunk, range)| SearchTask::new(chunk, range))
            .collect()
    }

    /// Execute tasks in parallel and wait for all of them.
    fn execute_tasks_parallel(
        &self,
        tasks: Vec<SearchTask>,
        word: &str,
        members: &[String],
        metric: &EditDistance,
    ) -> Result<Vec<TaskResult>> {
        let num_tasks = tasks.len();
        let (tx, rx) = crossbeam_channel::bounded(num_tasks);

        self.thread_pool.scope(|scope| {
            for task in tasks {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let task_id = task.task_id.clone();
                    let chunk = task.chunk;
                    let result = panic::catch_unwind(AssertUnwindSafe(|| {
                        task.execute(word, members, metric)
                    }))
                    .unwrap_or_else(|payload| {
                        TaskResult::failure(
                            task_id,
                            chunk,
                            SpellrankError::compute(format!(
                                "worker panicked: {}",
                                panic_message(payload.as_ref())
                            )),
                        )
                    });
                    let _ = tx.send(result);
                });
            }
        });

        // Drop the original sender so the receiver knows when all tasks are done
        drop(tx);

        let results: Vec<TaskResult> = rx.iter().collect();
        if results.len() != num_tasks {
            return Err(SpellrankError::compute(format!(
                "only {} of {num_tasks} partitions reported",
                results.len()
            )));
        }

        for result in &results {
            log::trace!(
                "task {} finished in {:?}",
                result.task_id,
                result.execution_time
            );
        }

        Ok(results)
    }

    /// Get current metrics snapshot.
    pub fn metrics(&self) -> SearchMetrics {
        self.metrics.snapshot()
    }

    /// Reset metrics.
    pub fn reset_metrics(&self) {
        self.metrics.reset();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}
