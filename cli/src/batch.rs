//! Scoring of JSON Lines files holding one comparison per line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use conflict_metrics::AnchoredScorer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// One input record.
#[derive(Debug, Deserialize)]
pub struct BatchRecord {
    /// Caller-chosen identifier echoed in the output; defaults to the line number.
    #[serde(default)]
    pub id: Option<Value>,
    /// Base text.
    pub original: String,
    /// Rewrite being evaluated.
    pub candidate: String,
    /// Rewrite it is evaluated against.
    pub reference: String,
}

/// One output record.
#[derive(Debug, Serialize)]
pub struct BatchScore {
    /// Identifier of the input record.
    pub id: Value,
    /// Agreement ratio in `[0, 1]`.
    pub score: f64,
}

/// Scores every record of `reader`, writing one result line per record.
///
/// Blank lines are skipped. Returns the number of records scored.
///
/// # Errors
///
/// Fails on the first unreadable or malformed line, or on an input that
/// exceeds the scorer's line limit.
pub fn score_records<R: BufRead, W: Write>(
    scorer: &AnchoredScorer,
    reader: R,
    mut writer: W,
) -> Result<usize> {
    let mut scored = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: BatchRecord = serde_json::from_str(&line)
            .with_context(|| format!("Invalid record on line {line_no}"))?;
        let score = scorer
            .try_score(&record.original, &record.candidate, &record.reference)
            .with_context(|| format!("Failed to score line {line_no}"))?;
        debug!(line = line_no, score, "Scored record");

        let result = BatchScore {
            id: record.id.unwrap_or_else(|| Value::from(line_no)),
            score,
        };
        serde_json::to_writer(&mut writer, &result)?;
        writeln!(writer)?;
        scored += 1;
    }

    writer.flush()?;
    info!(records = scored, "Batch scored");
    Ok(scored)
}
