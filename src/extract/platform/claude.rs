//! Claude (claude.ai).
//!
//! User and assistant messages use unrelated markup, so each role needs its
//! own query and the rendered position restores conversational order.

use super::{selectors, ContentResolver, ParityFallback, Platform, SegregatedSource, TurnExtractor};
use crate::extract::config::ExtractionConfig;
use crate::extract::types::RawTurns;
use crate::snapshot::{Document, Selector, SelectorError};

const USER_TURNS: &str = "[data-testid=\"user-message\"]";
const USER_CONTENT: &[&str] = &[".whitespace-pre-wrap"];
const ASSISTANT_TURNS: &str = ".font-claude-message";
const ASSISTANT_CONTENT: &[&str] = &[".standard-markdown", ".progressive-markdown", ".grid-cols-1"];
const FALLBACK_TURNS: &str = "[data-test-render-count]";
const TITLE: &[&str] = &["[data-testid=\"chat-menu-trigger\"]", "header h1", "title"];

/// Extractor for Claude conversations.
#[derive(Debug, Clone)]
pub struct ClaudeExtractor {
    source: SegregatedSource,
    title: Vec<Selector>,
}

impl ClaudeExtractor {
    pub fn new(_config: &ExtractionConfig) -> Result<Self, SelectorError> {
        let fallback = ParityFallback::new(FALLBACK_TURNS, ContentResolver::new(ASSISTANT_CONTENT)?)?;
        Ok(Self {
            source: SegregatedSource::new(
                Platform::Claude,
                (USER_TURNS, ContentResolver::new(USER_CONTENT)?),
                (ASSISTANT_TURNS, ContentResolver::new(ASSISTANT_CONTENT)?),
                fallback,
            )?,
            title: selectors(TITLE)?,
        })
    }
}

impl TurnExtractor for ClaudeExtractor {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn extract(&self, doc: &dyn Document) -> RawTurns {
        self.source.extract(doc)
    }

    fn title_locators(&self) -> &[Selector] {
        &self.title
    }
}
