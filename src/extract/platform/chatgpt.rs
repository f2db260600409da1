//! ChatGPT (chatgpt.com, chat.openai.com).
//!
//! Every message element carries `data-message-author-role`, and the
//! elements appear in conversational order. Code blocks render a
//! "Copy code" button inside the message, which cleanup removes.

use super::{selectors, InterleavedSource, ParityFallback, Platform, TurnExtractor};
use crate::extract::config::ExtractionConfig;
use crate::extract::content::ContentResolver;
use crate::extract::transforms::ContentCleaner;
use crate::extract::types::RawTurns;
use crate::snapshot::{Document, Selector, SelectorError};

const TURNS: &str = "[data-message-author-role]";
const ROLE_ATTR: &str = "data-message-author-role";
const CONTENT: &[&str] = &[".markdown", ".whitespace-pre-wrap", "[class*=\"prose\"]"];
const FALLBACK_TURNS: &str = "article";
const BOILERPLATE: &[&str] = &["Copy code"];
const TITLE: &[&str] = &[
    "[data-testid=\"conversation-title\"]",
    "nav a[aria-current=\"page\"]",
    "title",
];

/// Extractor for ChatGPT conversations.
#[derive(Debug, Clone)]
pub struct ChatGptExtractor {
    source: InterleavedSource,
    title: Vec<Selector>,
}

impl ChatGptExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, SelectorError> {
        let cleaner = ContentCleaner::new(
            BOILERPLATE.iter().copied(),
            config.max_consecutive_newlines,
        );
        let content = ContentResolver::new(CONTENT)?.with_cleaner(cleaner);
        let fallback = ParityFallback::new(FALLBACK_TURNS, content.clone())?;
        Ok(Self {
            source: InterleavedSource::new(
                Platform::ChatGpt,
                TURNS,
                ROLE_ATTR,
                "assistant",
                content,
                fallback,
            )?,
            title: selectors(TITLE)?,
        })
    }
}

impl TurnExtractor for ChatGptExtractor {
    fn platform(&self) -> Platform {
        Platform::ChatGpt
    }

    fn extract(&self, doc: &dyn Document) -> RawTurns {
        self.source.extract(doc)
    }

    fn title_locators(&self) -> &[Selector] {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::types::{Role, Turn};
    use crate::snapshot::SnapshotDocument;

    fn extract(json: &str) -> RawTurns {
        let doc = SnapshotDocument::from_json(json).unwrap();
        ChatGptExtractor::new(&ExtractionConfig::default())
            .unwrap()
            .extract(&doc)
    }

    #[test]
    fn reads_roles_from_attribute_in_document_order() {
        let raw = extract(
            r#"{ "root": { "tag": "main", "children": [
                { "tag": "div", "attrs": { "data-message-author-role": "user" }, "children": [
                    { "tag": "div", "attrs": { "class": "whitespace-pre-wrap" }, "children": ["What is Rust?"] }
                ] },
                { "tag": "div", "attrs": { "data-message-author-role": "assistant" }, "children": [
                    { "tag": "div", "attrs": { "class": "markdown prose" }, "children": ["A systems language."] }
                ] },
                { "tag": "div", "attrs": { "data-message-author-role": "tool" }, "children": ["tool output"] }
            ] } }"#,
        );
        assert_eq!(
            raw,
            RawTurns::Ordered(vec![
                Turn::new(Role::User, "What is Rust?"),
                Turn::new(Role::Assistant, "A systems language."),
                Turn::new(Role::User, "tool output"),
            ])
        );
    }

    #[test]
    fn strips_copy_code_affordance() {
        let raw = extract(
            r#"{ "root": { "tag": "main", "children": [
                { "tag": "div", "attrs": { "data-message-author-role": "assistant" }, "children": [
                    { "tag": "div", "attrs": { "class": "markdown" }, "children": [
                        { "tag": "p", "children": ["Run this:\n\n\n"] },
                        { "tag": "pre", "children": [
                            { "tag": "span", "children": ["bash"] },
                            { "tag": "button", "children": ["Copy code"] },
                            { "tag": "code", "children": ["cargo run"] }
                        ] }
                    ] }
                ] }
            ] } }"#,
        );
        assert_eq!(
            raw,
            RawTurns::Ordered(vec![Turn::new(Role::Assistant, "Run this:\n\nbashcargo run")])
        );
    }

    #[test]
    fn falls_back_to_alternating_articles() {
        let raw = extract(
            r#"{ "root": { "tag": "main", "children": [
                { "tag": "article", "children": ["Question"] },
                { "tag": "article", "children": [
                    { "tag": "div", "attrs": { "class": "markdown" }, "children": ["Answer text"] }
                ] }
            ] } }"#,
        );
        assert_eq!(
            raw,
            RawTurns::Ordered(vec![
                Turn::new(Role::User, "Question"),
                Turn::new(Role::Assistant, "Answer text"),
            ])
        );
    }
}
