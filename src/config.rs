//! Application configuration loaded from YAML.
//!
//! ```yaml
//! source:
//!   url_collection: https://example.com/words.txt
//! corrector:
//!   n_suggestions: 5
//!   use_candidate_restriction: true
//! search:
//!   thread_pool_size: 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};
use crate::parallel_search::ParallelSearchConfig;
use crate::source::SourceConfig;
use crate::spelling::corrector::CorrectorConfig;

/// Top-level configuration; every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellrankConfig {
    pub source: SourceConfig,
    pub corrector: CorrectorConfig,
    pub search: ParallelSearchConfig,
}

impl SpellrankConfig {
    /// Load from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpellrankError::configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate corrector and search settings.
    ///
    /// The source is validated separately when it is loaded, since the CLI
    /// may supply it after the file is read.
    pub fn validate(&self) -> Result<()> {
        self.corrector.validate()?;
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceFormat;
    use crate::spelling::corrector::EmptyRestrictionPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
source:
  url_collection: https://example.com/words.txt
  format: corpus
corrector:
  insert_weight: 1.5
  delete_weight: 0.5
  replace_weight: 1.0
  n_suggestions: 3
  n_editions: 1
  use_candidate_restriction: true
  empty_restriction: error
search:
  thread_pool_size: 4
  enable_metrics: false
"#;
        let config = SpellrankConfig::from_yaml(yaml).unwrap();

        assert_eq!(
            config.source.url_collection.as_deref(),
            Some("https://example.com/words.txt")
        );
        assert_eq!(config.source.format, SourceFormat::Corpus);
        assert_eq!(config.corrector.insert_weight, 1.5);
        assert_eq!(config.corrector.replace_weight, Some(1.0));
        assert_eq!(config.corrector.n_suggestions, 3);
        assert!(config.corrector.use_candidate_restriction);
        assert_eq!(
            config.corrector.empty_restriction,
            EmptyRestrictionPolicy::Error
        );
        assert_eq!(config.search.thread_pool_size, Some(4));
        assert!(!config.search.enable_metrics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = SpellrankConfig::from_yaml("source:\n  path: words.txt\n").unwrap();
        assert_eq!(config.corrector, CorrectorConfig::default());
        assert_eq!(config.search, ParallelSearchConfig::default());
        assert_eq!(config.source.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = SpellrankConfig::from_yaml("corrector:\n  n_suggestions: 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SpellrankError::Configuration(_))
        ));

        assert!(matches!(
            SpellrankConfig::from_yaml("corrector:\n  n_suggestions: many\n"),
            Err(SpellrankError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "corrector:\n  n_editions: 3").unwrap();
        file.flush().unwrap();

        let config = SpellrankConfig::load(file.path()).unwrap();
        assert_eq!(config.corrector.n_editions, 3);

        assert!(SpellrankConfig::load("/nonexistent/spellrank.yaml").is_err());
    }
}
