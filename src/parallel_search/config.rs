//! Configuration for parallel search operations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};

/// Configuration for the parallel search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSearchConfig {
    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Whether to enable metrics collection.
    pub enable_metrics: bool,
}

impl Default for ParallelSearchConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            enable_metrics: true,
        }
    }
}

impl ParallelSearchConfig {
    /// Create a config with a fixed number of worker threads.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            thread_pool_size: Some(threads),
            ..Default::default()
        }
    }

    /// Number of workers the engine will run.
    pub fn worker_count(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(SpellrankError::configuration(
                "thread_pool_size must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParallelSearchConfig::default();
        assert!(config.worker_count() > 0);
        assert!(config.enable_metrics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_threads() {
        let config = ParallelSearchConfig::with_threads(3);
        assert_eq!(config.worker_count(), 3);
        assert!(ParallelSearchConfig::with_threads(0).validate().is_err());
    }
}
