//! Errors raised at the fallible edges of the crate.

use config::ConfigError;
use thiserror::Error;

/// Errors that can occur while configuring or running a checked comparison.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// One of the three texts exceeds the configured line limit.
    #[error("{input} text has {lines} lines (max {limit})")]
    InputTooLarge {
        /// Which input was rejected: `original`, `candidate` or `reference`.
        input: &'static str,
        /// Line count after splitting.
        lines: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Settings could not be loaded or deserialized.
    #[error("Invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),
}
