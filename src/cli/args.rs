//! Command line argument parsing for Spellrank CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SpellrankConfig;
use crate::source::SourceFormat;

/// Spellrank - weighted edit-distance spelling suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "spellrank")]
#[command(about = "Suggest likely intended words using a weighted edit distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellrankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLRANK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellrankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestArgs),

    /// Read words from standard input and print suggestions for each
    Interactive(InteractiveArgs),

    /// Compute the weighted edit distance between two words
    Distance(DistanceArgs),

    /// List strings within an edit radius of a word
    Candidates(CandidatesArgs),
}

/// Vocabulary source overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SourceOptions {
    /// URL of a newline-delimited word list
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Local word list or corpus file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// How to read the source text
    #[arg(long, value_name = "FORMAT")]
    pub source_format: Option<SourceFormat>,
}

/// Weight overrides for the edit distance
#[derive(Args, Debug, Clone, Default)]
pub struct WeightOptions {
    /// Cost of inserting a character
    #[arg(long)]
    pub insert_weight: Option<f64>,

    /// Cost of deleting a character
    #[arg(long)]
    pub delete_weight: Option<f64>,

    /// Cost of replacing a character (default: insert + delete)
    #[arg(long)]
    pub replace_weight: Option<f64>,
}

/// Ranking overrides
#[derive(Args, Debug, Clone, Default)]
pub struct RankingOptions {
    /// Minimum number of suggestions to return
    #[arg(short = 'n', long = "suggestions")]
    pub n_suggestions: Option<usize>,

    /// Edit radius used by --restrict (3 or more is slow for long words)
    #[arg(short, long)]
    pub radius: Option<usize>,

    /// Only rank vocabulary words within the edit radius
    #[arg(long)]
    pub restrict: bool,

    /// Number of worker threads (default: CPU count)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub weights: WeightOptions,

    #[command(flatten)]
    pub ranking: RankingOptions,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Prompt shown before each word
    #[arg(long, default_value = "word> ")]
    pub prompt: String,

    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub weights: WeightOptions,

    #[command(flatten)]
    pub ranking: RankingOptions,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source word
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target word
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Print the filled dynamic-programming grid
    #[arg(long)]
    pub grid: bool,

    #[command(flatten)]
    pub weights: WeightOptions,
}

/// Arguments for candidate generation
#[derive(Parser, Debug, Clone)]
pub struct CandidatesArgs {
    /// Word to edit
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of edits
    #[arg(short, long, default_value = "1")]
    pub radius: usize,

    /// Maximum number of candidates to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl SourceOptions {
    /// Apply these overrides to a loaded configuration.
    pub fn apply(&self, config: &mut SpellrankConfig) {
        if let Some(url) = &self.url {
            config.source.url_collection = Some(url.clone());
            config.source.path = None;
        }
        if let Some(file) = &self.file {
            config.source.path = Some(file.clone());
            config.source.url_collection = None;
        }
        if let Some(format) = self.source_format {
            config.source.format = format;
        }
    }
}

impl WeightOptions {
    pub fn apply(&self, config: &mut SpellrankConfig) {
        if let Some(weight) = self.insert_weight {
            config.corrector.insert_weight = weight;
        }
        if let Some(weight) = self.delete_weight {
            config.corrector.delete_weight = weight;
        }
        if let Some(weight) = self.replace_weight {
            config.corrector.replace_weight = Some(weight);
        }
    }
}

impl RankingOptions {
    pub fn apply(&self, config: &mut SpellrankConfig) {
        if let Some(n) = self.n_suggestions {
            config.corrector.n_suggestions = n;
        }
        if let Some(radius) = self.radius {
            config.corrector.n_editions = radius;
        }
        if self.restrict {
            config.corrector.use_candidate_restriction = true;
        }
        if let Some(threads) = self.threads {
            config.search.thread_pool_size = Some(threads);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest() {
        let args = SpellrankArgs::try_parse_from([
            "spellrank",
            "suggest",
            "helo",
            "wrld",
            "--file",
            "words.txt",
            "-n",
            "3",
            "--restrict",
            "--insert-weight",
            "0.5",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 1);
        let Command::Suggest(suggest) = args.command else {
            panic!("expected suggest command");
        };
        assert_eq!(suggest.words, vec!["helo", "wrld"]);

        let mut config = SpellrankConfig::default();
        suggest.source.apply(&mut config);
        suggest.weights.apply(&mut config);
        suggest.ranking.apply(&mut config);

        assert_eq!(config.source.path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.corrector.n_suggestions, 3);
        assert_eq!(config.corrector.insert_weight, 0.5);
        assert!(config.corrector.use_candidate_restriction);
    }

    #[test]
    fn test_url_and_file_conflict() {
        let result = SpellrankArgs::try_parse_from([
            "spellrank",
            "suggest",
            "word",
            "--url",
            "http://example.com",
            "--file",
            "words.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let args =
            SpellrankArgs::try_parse_from(["spellrank", "-q", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args =
            SpellrankArgs::try_parse_from(["spellrank", "-vvv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn test_parse_distance_with_grid() {
        let args = SpellrankArgs::try_parse_from([
            "spellrank",
            "--format",
            "json",
            "distance",
            "kitten",
            "sitting",
            "--grid",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        let Command::Distance(distance) = args.command else {
            panic!("expected distance command");
        };
        assert!(distance.grid);
        assert_eq!(distance.target, "sitting");
    }
}
