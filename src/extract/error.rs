//! Extraction pipeline errors.

use crate::snapshot::SelectorError;

/// Terminal outcomes of an export attempt.
///
/// Missing or malformed optional content never shows up here; it is
/// filtered out along the way. Only exhausting every strategy is an error.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported source: '{0}' (supported: chatgpt, claude, gemini)")]
    UnsupportedSource(String),

    #[error("No conversation found: no {platform} turns matched any extraction strategy")]
    NoTurnsFound { platform: String },

    #[error("No conversation found: {turns} {platform} turns found but no question/answer pairs")]
    NoPairsProduced { platform: String, turns: usize },

    #[error("Invalid selector: {0}")]
    Selector(#[from] SelectorError),
}

impl ExportError {
    /// Whether the page simply held no usable conversation.
    pub fn is_no_conversation(&self) -> bool {
        matches!(self, Self::NoTurnsFound { .. } | Self::NoPairsProduced { .. })
    }
}
