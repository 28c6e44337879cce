//! Splitting raw text into line sequences.

use serde::{Deserialize, Serialize};

/// Normalization rule applied when a text is split into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// Every line is kept, including blank ones.
    Verbatim,
    /// Empty and whitespace-only lines are dropped before diffing.
    #[default]
    SkipBlank,
}

impl LineMode {
    /// Returns the configuration name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::SkipBlank => "skip_blank",
        }
    }
}

/// Splits `text` into lines according to `mode`.
///
/// Both `\n` and `\r\n` terminate a line; a trailing terminator does not
/// produce an empty last line, and an empty text has no lines.
#[must_use]
pub fn split_lines(text: &str, mode: LineMode) -> Vec<&str> {
    match mode {
        LineMode::Verbatim => text.lines().collect(),
        LineMode::SkipBlank => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect(),
    }
}
