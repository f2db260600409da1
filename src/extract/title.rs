//! Best-effort conversation title lookup.

use crate::snapshot::{Document, Selector};

use super::config::ExtractionConfig;
use super::fallback::first_success;
use super::platform::Platform;
use super::transforms::text_len;

/// Picks a title from platform locators, or synthesizes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleResolver {
    min_chars: usize,
    max_chars: usize,
}

impl TitleResolver {
    /// Accept titles whose trimmed length (UTF-16 units) lies strictly between the bounds.
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.title_min_chars, config.title_max_chars)
    }

    /// Try each locator in order; within a locator, each match in document order.
    pub fn resolve(&self, doc: &dyn Document, platform: Platform, locators: &[Selector]) -> String {
        first_success("title", locators, |selector| {
            doc.select(None, selector).into_iter().find_map(|node| {
                let text = doc.text_content(node);
                let text = text.trim();
                let len = text_len(text);
                (len > self.min_chars && len < self.max_chars).then(|| text.to_string())
            })
        })
        .unwrap_or_else(|| fallback_title(platform))
    }
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

/// `"<Platform> Chat Export"` with the platform id's first letter capitalized.
pub fn fallback_title(platform: Platform) -> String {
    let id = platform.id();
    let mut chars = id.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} Chat Export", capitalized)
}
