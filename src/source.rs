//! Loading vocabularies from an external word list.
//!
//! A source is either a URL fetched over HTTP or a local file. Failures are
//! reported as [`SpellrankError::SourceFetch`] so a run can abort at startup
//! instead of searching an empty vocabulary.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};
use crate::spelling::dictionary::{Vocabulary, VocabularySource};

/// How the fetched text is turned into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// One word per line.
    Tokens,
    /// Free text tokenized on word boundaries.
    Corpus,
}

/// Where the vocabulary comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of a newline-delimited word list.
    pub url_collection: Option<String>,
    /// Local file holding a word list or corpus.
    pub path: Option<PathBuf>,
    /// Interpretation of the fetched text.
    pub format: SourceFormat,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url_collection: None,
            path: None,
            format: SourceFormat::Tokens,
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    /// Exactly one of `url_collection` or `path` must be set.
    pub fn validate(&self) -> Result<()> {
        match (&self.url_collection, &self.path) {
            (Some(_), Some(_)) => Err(SpellrankError::configuration(
                "set either url_collection or path for the vocabulary source, not both",
            )),
            (None, None) => Err(SpellrankError::configuration(
                "no vocabulary source configured (url_collection or path)",
            )),
            (Some(url), None) if url.trim().is_empty() => Err(SpellrankError::configuration(
                "url_collection is empty",
            )),
            _ => Ok(()),
        }
    }
}

/// Fetch the raw text and wrap it in the configured source kind.
pub fn load_source(config: &SourceConfig) -> Result<VocabularySource> {
    config.validate()?;

    let text = match (&config.url_collection, &config.path) {
        (Some(url), _) => fetch_url(url, Duration::from_secs(config.timeout_secs))?,
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            SpellrankError::source_fetch(format!("failed to read {}: {e}", path.display()))
        })?,
        (None, None) => {
            return Err(SpellrankError::configuration(
                "no vocabulary source configured (url_collection or path)",
            ));
        }
    };

    Ok(parse_source(text, config.format))
}

/// Fetch the source and build a non-empty vocabulary from it.
pub fn load_vocabulary(config: &SourceConfig) -> Result<Vocabulary> {
    let vocabulary = Vocabulary::build(load_source(config)?);
    if vocabulary.is_empty() {
        return Err(SpellrankError::source_fetch(
            "vocabulary source contained no usable words",
        ));
    }

    log::info!("loaded vocabulary with {} words", vocabulary.len());
    Ok(vocabulary)
}

/// Interpret raw text according to `format`.
pub fn parse_source(text: String, format: SourceFormat) -> VocabularySource {
    match format {
        SourceFormat::Tokens => VocabularySource::FromTokens(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        ),
        SourceFormat::Corpus => VocabularySource::FromCorpus(text),
    }
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    log::info!("fetching vocabulary from {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SpellrankError::source_fetch(format!("failed to create HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| SpellrankError::source_fetch(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SpellrankError::source_fetch(format!(
            "{url} returned status {status}"
        )));
    }

    response
        .text()
        .map_err(|e| SpellrankError::source_fetch(format!("failed to read body from {url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_config(file: &NamedTempFile, format: SourceFormat) -> SourceConfig {
        SourceConfig {
            path: Some(file.path().to_path_buf()),
            format,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_requires_one_source() {
        assert!(SourceConfig::default().validate().is_err());

        let both = SourceConfig {
            url_collection: Some("http://localhost/words.txt".to_string()),
            path: Some(PathBuf::from("words.txt")),
            ..Default::default()
        };
        assert!(matches!(
            both.validate(),
            Err(SpellrankError::Configuration(_))
        ));

        let blank = SourceConfig {
            url_collection: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_parse_tokens() {
        let source = parse_source("cat\r\n\ndog\n  bat  \n".to_string(), SourceFormat::Tokens);
        assert_eq!(
            source,
            VocabularySource::FromTokens(vec![
                "cat".to_string(),
                "dog".to_string(),
                "bat".to_string()
            ])
        );
    }

    #[test]
    fn test_load_vocabulary_from_token_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Café").unwrap();
        writeln!(file, "cafe").unwrap();
        writeln!(file, "maçã").unwrap();
        file.flush().unwrap();

        let vocab = load_vocabulary(&file_config(&file, SourceFormat::Tokens)).unwrap();
        assert_eq!(vocab.words(), ["cafe".to_string(), "maca".to_string()]);
    }

    #[test]
    fn test_load_vocabulary_from_corpus_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The cat sat. The dog ran!").unwrap();
        file.flush().unwrap();

        let vocab = load_vocabulary(&file_config(&file, SourceFormat::Corpus)).unwrap();
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.frequency("the"), 2);
    }

    #[test]
    fn test_missing_file_is_fetch_error() {
        let config = SourceConfig {
            path: Some(PathBuf::from("/nonexistent/spellrank/words.txt")),
            ..Default::default()
        };
        assert!(matches!(
            load_vocabulary(&config),
            Err(SpellrankError::SourceFetch(_))
        ));
    }

    #[test]
    fn test_blank_file_is_fetch_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();
        file.flush().unwrap();

        assert!(matches!(
            load_vocabulary(&file_config(&file, SourceFormat::Tokens)),
            Err(SpellrankError::SourceFetch(_))
        ));
    }

    #[test]
    fn test_unreachable_url_is_fetch_error() {
        let config = SourceConfig {
            url_collection: Some("http://127.0.0.1:1/words.txt".to_string()),
            timeout_secs: 2,
            ..Default::default()
        };
        assert!(matches!(
            load_vocabulary(&config),
            Err(SpellrankError::SourceFetch(_))
        ));
    }
}
