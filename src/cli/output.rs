//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellrankArgs};
use crate::error::Result;
use crate::spelling::corrector::{CorrectionResult, SearchStrategy};

/// Result structure for a distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub distance: f64,
    pub grid: Option<String>,
}

/// Result structure for candidate generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidatesResult {
    pub word: String,
    pub radius: usize,
    pub total: usize,
    pub candidates: Vec<String>,
}

/// Result structure for one suggestion run.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub result: CorrectionResult,
    pub duration_ms: u64,
}

/// Anything the CLI can print.
pub trait Report: Serialize {
    /// Human-readable rendering.
    fn render_human(&self, verbosity: u8) -> String;
}

impl Report for DistanceResult {
    fn render_human(&self, _verbosity: u8) -> String {
        let mut out = format!(
            "distance({:?}, {:?}) = {}",
            self.source,
            self.target,
            format_distance(self.distance)
        );
        if let Some(grid) = &self.grid {
            out.push('\n');
            out.push_str(grid.trim_end());
        }
        out
    }
}

impl Report for CandidatesResult {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = String::new();
        if verbosity > 0 {
            out.push_str(&format!(
                "{} candidates within {} edit(s) of {:?}",
                self.total, self.radius, self.word
            ));
            if self.candidates.len() < self.total {
                out.push_str(&format!(" (showing {})", self.candidates.len()));
            }
            out.push('\n');
        }
        out.push_str(&self.candidates.join("\n"));
        out
    }
}

impl Report for SuggestionReport {
    fn render_human(&self, verbosity: u8) -> String {
        let result = &self.result;
        let mut out = String::new();

        if verbosity > 1 {
            let strategy = match &result.strategy {
                SearchStrategy::FullScan => "full scan".to_string(),
                SearchStrategy::Restricted { radius, .. } => format!("restricted (radius {radius})"),
                SearchStrategy::FullScanFallback { radius } => {
                    format!("full scan (nothing within radius {radius})")
                }
            };
            out.push_str(&format!(
                "{:?} -> {:?}: {} searched, {strategy}, {} ms\n",
                result.original, result.normalized, result.searched, self.duration_ms
            ));
        } else if verbosity > 0 {
            out.push_str(&format!("{}:\n", result.original));
        }

        let lines: Vec<String> = result
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{:>3}. {} ({})", i + 1, s.word, format_distance(s.distance)))
            .collect();
        out.push_str(&lines.join("\n"));
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(result: &T, args: &SpellrankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.render_human(args.verbosity()));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellrankArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Integral distances print without a fraction.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.2}")
    }
}
