//! Parallel ranked search over a vocabulary.
//!
//! This module provides functionality to:
//! - Partition a vocabulary into contiguous per-worker chunks
//! - Score every chunk against a word on a thread pool
//! - Merge chunk results and select the top-k with tie inclusion
//! - Monitor performance metrics

pub mod config;
pub mod engine;
pub mod merger;
pub mod metrics;
pub mod partition;
pub mod search_task;

pub use config::ParallelSearchConfig;
pub use engine::ParallelSearchEngine;
pub use merger::{ScoredWord, merge, rank};
pub use metrics::{SearchMetrics, SearchMetricsCollector};
pub use partition::partition;
pub use search_task::{SearchTask, TaskResult};
