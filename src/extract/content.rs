//! Content resolution for a single turn container.
//!
//! Each platform lists inner locators from the most specific markup-bearing
//! container to the most generic. The first locator that yields non-empty
//! text wins; the container's own text is always the last resort.

use std::fmt;

use crate::snapshot::{Document, NodeId, Selector, SelectorError};

use super::fallback::first_success;
use super::transforms::ContentCleaner;

/// Where to look for a turn's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Elements inside the container matching a selector.
    Inner(Selector),
    /// The container's full text.
    Container,
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner(selector) => write!(f, "{}", selector),
            Self::Container => f.write_str("<container>"),
        }
    }
}

/// Resolves the best available text for a turn container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResolver {
    locators: Vec<Locator>,
    cleaner: Option<ContentCleaner>,
}

impl ContentResolver {
    /// Build a resolver from inner selectors in priority order.
    ///
    /// The container itself is appended as the final locator.
    pub fn new(inner: &[&str]) -> Result<Self, SelectorError> {
        let mut locators = inner
            .iter()
            .map(|s| Selector::parse(s).map(Locator::Inner))
            .collect::<Result<Vec<_>, _>>()?;
        locators.push(Locator::Container);
        Ok(Self {
            locators,
            cleaner: None,
        })
    }

    /// A resolver that only reads the container's own text.
    pub fn container_only() -> Self {
        Self {
            locators: vec![Locator::Container],
            cleaner: None,
        }
    }

    /// Apply platform-specific cleanup to resolved content.
    pub fn with_cleaner(mut self, cleaner: ContentCleaner) -> Self {
        self.cleaner = Some(cleaner);
        self
    }

    pub fn locators(&self) -> &[Locator] {
        &self.locators
    }

    /// Resolve the text of `container`; empty when nothing yields text.
    pub fn resolve(&self, doc: &dyn Document, container: NodeId) -> String {
        let text = first_success("content", &self.locators, |locator| {
            let text = match locator {
                Locator::Inner(selector) => doc
                    .select(Some(container), selector)
                    .into_iter()
                    .map(|node| doc.text_content(node).trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                Locator::Container => doc.text_content(container).trim().to_string(),
            };
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_default();

        match &self.cleaner {
            Some(cleaner) => cleaner.clean(&text),
            None => text,
        }
    }
}
