//! Command implementations for Spellrank CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellrankConfig;
use crate::error::{Result, SpellrankError};
use crate::source::load_vocabulary;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellrankArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args.clone(), &args),
        Command::Interactive(interactive_args) => run_interactive(interactive_args.clone(), &args),
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Candidates(candidates_args) => list_candidates(candidates_args.clone(), &args),
    }
}

/// Load the configuration file if given, otherwise start from defaults.
fn load_config(cli_args: &SpellrankArgs) -> Result<SpellrankConfig> {
    match &cli_args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            SpellrankConfig::load(path)
        }
        None => Ok(SpellrankConfig::default()),
    }
}

/// Build a corrector from config file plus command line overrides.
fn build_corrector(
    source: &SourceOptions,
    weights: &WeightOptions,
    ranking: &RankingOptions,
    cli_args: &SpellrankArgs,
) -> Result<SpellingCorrector> {
    let mut config = load_config(cli_args)?;
    source.apply(&mut config);
    weights.apply(&mut config);
    ranking.apply(&mut config);
    config.validate()?;

    let vocabulary = Arc::new(load_vocabulary(&config.source)?);
    SpellingCorrector::with_search_config(vocabulary, config.corrector, config.search)
}

fn suggest_one(corrector: &SpellingCorrector, word: &str) -> Result<SuggestionReport> {
    let start_time = Instant::now();
    let result = corrector.suggest(word)?;

    Ok(SuggestionReport {
        result,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Suggest corrections for each word on the command line.
fn suggest_words(args: SuggestArgs, cli_args: &SpellrankArgs) -> Result<()> {
    let corrector = build_corrector(&args.source, &args.weights, &args.ranking, cli_args)?;

    for word in &args.words {
        let report = suggest_one(&corrector, word)?;
        output_result(&report, cli_args)?;
    }

    Ok(())
}

/// Prompt for words until a blank line or end of input.
fn run_interactive(args: InteractiveArgs, cli_args: &SpellrankArgs) -> Result<()> {
    let corrector = build_corrector(&args.source, &args.weights, &args.ranking, cli_args)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if cli_args.output_format == OutputFormat::Human {
            print!("{}", args.prompt);
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            break;
        }

        match suggest_one(&corrector, word) {
            Ok(report) => output_result(&report, cli_args)?,
            // The user can simply try another word.
            Err(e @ SpellrankError::EmptyVocabulary(_)) => eprintln!("{e}"),
            Err(e) => return Err(e),
        }
    }

    let metrics = corrector.metrics();
    log::info!(
        "{} searches, average {:?}",
        metrics.total_searches,
        metrics.avg_execution_time
    );
    Ok(())
}

/// Compute a single weighted distance.
fn compute_distance(args: DistanceArgs, cli_args: &SpellrankArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    args.weights.apply(&mut config);
    let metric = config.corrector.metric()?;

    let grid = metric.grid(&args.source, &args.target);
    let result = DistanceResult {
        distance: grid.distance(),
        grid: args.grid.then(|| grid.to_string()),
        source: args.source,
        target: args.target,
    };

    output_result(&result, cli_args)
}

/// Print candidates within the requested edit radius.
fn list_candidates(args: CandidatesArgs, cli_args: &SpellrankArgs) -> Result<()> {
    let generator = CandidateGenerator::new(args.radius)?;
    let word = normalize(&args.word);

    let mut candidates: Vec<String> = generator.generate(&word).into_iter().collect();
    candidates.sort_unstable();
    let total = candidates.len();
    if let Some(limit) = args.limit {
        candidates.truncate(limit);
    }

    output_result(
        &CandidatesResult {
            word,
            radius: args.radius,
            total,
            candidates,
        },
        cli_args,
    )
}
