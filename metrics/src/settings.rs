//! Scoring settings loaded through the `config` crate.
//!
//! Settings are layered: built-in defaults, then an optional file (format
//! chosen by extension), then `CONFLICT_METRICS__*` environment variables,
//! e.g. `CONFLICT_METRICS__LINE_MODE=verbatim`.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::MetricsError;
use crate::lines::LineMode;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "CONFLICT_METRICS";

/// Settings for an [`AnchoredScorer`](crate::AnchoredScorer).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScoringSettings {
    /// Line normalization applied to all three texts (default: `skip_blank`)
    #[serde(default)]
    pub line_mode: LineMode,

    /// Credit near-identical lines by character similarity (default: false)
    #[serde(default = "default_false")]
    pub use_line_levenshtein: bool,

    /// Ignore very frequent lines when seeding diff matches (default: true)
    #[serde(default = "default_true")]
    pub autojunk: bool,

    /// Refuse inputs longer than this many lines (default: unlimited)
    #[serde(default)]
    pub max_input_lines: Option<usize>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            line_mode: LineMode::default(),
            use_line_levenshtein: default_false(),
            autojunk: default_true(),
            max_input_lines: None,
        }
    }
}

impl ScoringSettings {
    /// Loads settings from defaults, an optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Config`] if the file cannot be read or a value
    /// does not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, MetricsError> {
        let mut builder = Config::builder()
            .set_default("line_mode", LineMode::default().as_str())?
            .set_default("use_line_levenshtein", default_false())?
            .set_default("autojunk", default_true())?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}
