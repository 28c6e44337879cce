//! `anchored-ratio`: scores how closely a candidate rewrite of a text agrees
//! with a reference rewrite, anchored to the original.

#![forbid(unsafe_code)]

mod batch;
mod telemetry;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use conflict_metrics::{AnchoredScorer, ScoringSettings};
use tracing::info;

use crate::telemetry::{LogFormat, TelemetryBuilder};

#[derive(Parser)]
#[command(
    name = "anchored-ratio",
    version,
    about = "Base-anchored agreement between two rewrites of a text"
)]
struct Cli {
    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one candidate against one reference
    Score {
        #[arg(long)]
        original: PathBuf,
        #[arg(long)]
        candidate: PathBuf,
        #[arg(long)]
        reference: PathBuf,
        /// Print the per-block breakdown as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Score a JSONL file of {original, candidate, reference} records
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Defaults to stdout
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[derive(Args)]
struct ScoringArgs {
    /// Credit near-identical lines by character similarity
    #[arg(long)]
    fuzzy: bool,
    /// Settings file (toml, json or yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ScoringArgs {
    fn scorer(&self) -> Result<AnchoredScorer> {
        let mut settings = ScoringSettings::load(self.config.as_deref())
            .context("Failed to load scoring settings")?;
        if self.fuzzy {
            settings.use_line_levenshtein = true;
        }
        Ok(AnchoredScorer::from_settings(&settings))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    TelemetryBuilder::new()
        .with_log_level(level)
        .with_format(cli.log_format)
        .init()?;

    match cli.command {
        Commands::Score {
            original,
            candidate,
            reference,
            json,
            scoring,
        } => score(&scoring.scorer()?, &original, &candidate, &reference, json),
        Commands::Batch {
            input,
            output,
            scoring,
        } => batch(&scoring.scorer()?, &input, output.as_deref()),
    }
}

fn score(
    scorer: &AnchoredScorer,
    original: &Path,
    candidate: &Path,
    reference: &Path,
    json: bool,
) -> Result<()> {
    let original = read_text(original)?;
    let candidate = read_text(candidate)?;
    let reference = read_text(reference)?;

    let breakdown = scorer.try_breakdown(&original, &candidate, &reference)?;
    info!(
        ratio = breakdown.ratio,
        strategy = breakdown.strategy,
        "Scored candidate"
    );

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &breakdown)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{:.6}", breakdown.ratio)?;
    }
    Ok(())
}

fn batch(scorer: &AnchoredScorer, input: &Path, output: Option<&Path>) -> Result<()> {
    let file = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let reader = BufReader::new(file);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            batch::score_records(scorer, reader, BufWriter::new(file))?;
        }
        None => {
            batch::score_records(scorer, reader, io::stdout().lock())?;
        }
    }
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
