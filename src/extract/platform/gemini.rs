//! Gemini (gemini.google.com).
//!
//! Turns are `user-query` and `model-response` custom elements; like
//! Claude, order comes from rendered position.

use super::{selectors, ContentResolver, ParityFallback, Platform, SegregatedSource, TurnExtractor};
use crate::extract::config::ExtractionConfig;
use crate::extract::types::RawTurns;
use crate::snapshot::{Document, Selector, SelectorError};

const USER_TURNS: &str = "user-query";
const USER_CONTENT: &[&str] = &[".query-text"];
const ASSISTANT_TURNS: &str = "model-response";
const ASSISTANT_CONTENT: &[&str] = &["message-content .markdown", "message-content"];
const FALLBACK_TURNS: &str = ".query-content, .response-content";
const TITLE: &[&str] = &[
    ".conversation-title",
    "[data-test-id=\"conversation-title\"]",
    "title",
];

/// Extractor for Gemini conversations.
#[derive(Debug, Clone)]
pub struct GeminiExtractor {
    source: SegregatedSource,
    title: Vec<Selector>,
}

impl GeminiExtractor {
    pub fn new(_config: &ExtractionConfig) -> Result<Self, SelectorError> {
        let fallback = ParityFallback::new(FALLBACK_TURNS, ContentResolver::container_only())?;
        Ok(Self {
            source: SegregatedSource::new(
                Platform::Gemini,
                (USER_TURNS, ContentResolver::new(USER_CONTENT)?),
                (ASSISTANT_TURNS, ContentResolver::new(ASSISTANT_CONTENT)?),
                fallback,
            )?,
            title: selectors(TITLE)?,
        })
    }
}

impl TurnExtractor for GeminiExtractor {
    fn platform(&self) -> Platform {
        Platform::Gemini
    }

    fn extract(&self, doc: &dyn Document) -> RawTurns {
        self.source.extract(doc)
    }

    fn title_locators(&self) -> &[Selector] {
        &self.title
    }
}
