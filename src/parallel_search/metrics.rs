//! Metrics collection for parallel search operations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collected during parallel search operations.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMetrics {
    /// Total number of searches executed.
    pub total_searches: u64,

    /// Number of successful searches.
    pub successful_searches: u64,

    /// Number of failed searches.
    pub failed_searches: u64,

    /// Total execution time across all searches.
    pub total_execution_time: Duration,

    /// Average execution time per search.
    pub avg_execution_time: Duration,

    /// Maximum execution time observed.
    pub max_execution_time: Duration,

    /// Total vocabulary words scored.
    pub total_words_evaluated: u64,

    /// Total suggestions returned.
    pub total_suggestions_returned: u64,
}

/// Lock-free collector shared by every search on an engine.
#[derive(Debug)]
pub struct SearchMetricsCollector {
    total_searches: AtomicU64,
    successful_searches: AtomicU64,
    failed_searches: AtomicU64,
    total_execution_nanos: AtomicU64,
    max_execution_nanos: AtomicU64,
    total_words_evaluated: AtomicU64,
    total_suggestions_returned: AtomicU64,
}

impl SearchMetricsCollector {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            total_searches: AtomicU64::new(0),
            successful_searches: AtomicU64::new(0),
            failed_searches: AtomicU64::new(0),
            total_execution_nanos: AtomicU64::new(0),
            max_execution_nanos: AtomicU64::new(0),
            total_words_evaluated: AtomicU64::new(0),
            total_suggestions_returned: AtomicU64::new(0),
        }
    }

    /// Record a search execution.
    pub fn record_search(
        &self,
        execution_time: Duration,
        success: bool,
        words_evaluated: u64,
        suggestions_returned: u64,
    ) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);

        if success {
            self.successful_searches.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_searches.fetch_add(1, Ordering::Relaxed);
        }

        let nanos = execution_time.as_nanos() as u64;
        self.total_execution_nanos
            .fetch_add(nanos, Ordering::Relaxed);
        self.max_execution_nanos.fetch_max(nanos, Ordering::Relaxed);

        self.total_words_evaluated
            .fetch_add(words_evaluated, Ordering::Relaxed);
        self.total_suggestions_returned
            .fetch_add(suggestions_returned, Ordering::Relaxed);
    }

    /// Get the current metrics snapshot.
    pub fn snapshot(&self) -> SearchMetrics {
        let total_searches = self.total_searches.load(Ordering::Relaxed);
        let total_nanos = self.total_execution_nanos.load(Ordering::Relaxed);

        let avg_nanos = if total_searches > 0 {
            total_nanos / total_searches
        } else {
            0
        };

        SearchMetrics {
            total_searches,
            successful_searches: self.successful_searches.load(Ordering::Relaxed),
            failed_searches: self.failed_searches.load(Ordering::Relaxed),
            total_execution_time: Duration::from_nanos(total_nanos),
            avg_execution_time: Duration::from_nanos(avg_nanos),
            max_execution_time: Duration::from_nanos(
                self.max_execution_nanos.load(Ordering::Relaxed),
            ),
            total_words_evaluated: self.total_words_evaluated.load(Ordering::Relaxed),
            total_suggestions_returned: self.total_suggestions_returned.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        for counter in [
            &self.total_searches,
            &self.successful_searches,
            &self.failed_searches,
            &self.total_execution_nanos,
            &self.max_execution_nanos,
            &self.total_words_evaluated,
            &self.total_suggestions_returned,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl Default for SearchMetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple wall-clock timer.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time without stopping.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
