//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Thresholds used while normalizing turns and resolving titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Assistant turns must be longer than this many UTF-16 units
    /// (filters loading placeholders and empty responses)
    pub min_assistant_chars: usize,
    /// User turns must be longer than this many UTF-16 units
    pub min_user_chars: usize,
    /// Maximum consecutive newlines kept by content cleanup
    pub max_consecutive_newlines: usize,
    /// Titles must be longer than this many UTF-16 units
    pub title_min_chars: usize,
    /// Titles must be shorter than this many UTF-16 units
    pub title_max_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_assistant_chars: 10,
            min_user_chars: 0,
            max_consecutive_newlines: 2,
            title_min_chars: 3,
            title_max_chars: 200,
        }
    }
}
