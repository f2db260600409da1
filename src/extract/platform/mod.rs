//! Per-platform turn extraction strategies.
//!
//! Each supported chat application renders conversations with its own
//! markup. A [`TurnExtractor`] knows where one platform keeps its turns,
//! how to tell their roles apart and where to find a title.
//!
//! Two structural shapes cover all platforms:
//! - [`InterleavedSource`]: one query returns every turn in conversational
//!   order, each element naming its role in an attribute
//! - [`SegregatedSource`]: one query per role; elements carry a rendered
//!   position that the order reconciler uses to interleave them
//!
//! Both fall back to a [`ParityFallback`] query when the primary query
//! finds no elements.

mod chatgpt;
mod claude;
mod gemini;

pub use chatgpt::ChatGptExtractor;
pub use claude::ClaudeExtractor;
pub use gemini::GeminiExtractor;

use std::fmt;
use std::str::FromStr;

use crate::snapshot::{Document, NodeId, Selector, SelectorError};

use super::config::ExtractionConfig;
use super::content::ContentResolver;
use super::error::ExportError;
use super::fallback::first_success;
use super::types::{RawTurns, Role, Turn};

/// A supported chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    ChatGpt,
    Claude,
    Gemini,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Platform; 3] = [Platform::ChatGpt, Platform::Claude, Platform::Gemini];

    /// Identifier used on the command line and in exported records.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
        }
    }

    /// Hosts serving this platform's chat UI.
    pub fn hosts(&self) -> &'static [&'static str] {
        match self {
            Self::ChatGpt => &["chatgpt.com", "chat.openai.com"],
            Self::Claude => &["claude.ai"],
            Self::Gemini => &["gemini.google.com"],
        }
    }

    /// Pick the platform serving `url`.
    pub fn detect(url: &str) -> Result<Self, ExportError> {
        let host = host_of(url);
        Self::ALL
            .into_iter()
            .find(|p| {
                p.hosts()
                    .iter()
                    .any(|h| host == *h || host.ends_with(&format!(".{}", h)))
            })
            .ok_or_else(|| ExportError::UnsupportedSource(url.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| ExportError::UnsupportedSource(s.to_string()))
    }
}

/// Lowercased host part of a URL, without port or credentials.
fn host_of(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    host.to_ascii_lowercase()
}

/// Extracts raw turns and knows where a platform keeps its title.
pub trait TurnExtractor {
    /// The platform this extractor reads.
    fn platform(&self) -> Platform;

    /// Find turns in `doc`. Returns an empty result when nothing is found.
    fn extract(&self, doc: &dyn Document) -> RawTurns;

    /// Title locators in priority order.
    fn title_locators(&self) -> &[Selector];
}

/// Build the extractor for `platform`.
pub fn extractor_for(
    platform: Platform,
    config: &ExtractionConfig,
) -> Result<Box<dyn TurnExtractor>, SelectorError> {
    Ok(match platform {
        Platform::ChatGpt => Box::new(ChatGptExtractor::new(config)?),
        Platform::Claude => Box::new(ClaudeExtractor::new(config)?),
        Platform::Gemini => Box::new(GeminiExtractor::new(config)?),
    })
}

/// Parse a list of selectors.
pub(crate) fn selectors(list: &[&str]) -> Result<Vec<Selector>, SelectorError> {
    list.iter().map(|s| Selector::parse(s)).collect()
}

/// Extraction strategies tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Primary,
    Parity,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Parity => f.write_str("parity fallback"),
        }
    }
}

/// Heuristic fallback: a broad query whose matches alternate user/assistant.
///
/// Even indices are user turns, odd indices assistant turns. Document order
/// is taken as conversational order; no positions are reported.
#[derive(Debug, Clone)]
pub struct ParityFallback {
    query: Selector,
    content: ContentResolver,
}

impl ParityFallback {
    pub fn new(query: &str, content: ContentResolver) -> Result<Self, SelectorError> {
        Ok(Self {
            query: Selector::parse(query)?,
            content,
        })
    }

    pub fn extract(&self, doc: &dyn Document) -> Vec<Turn> {
        doc.select(None, &self.query)
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let role = if index % 2 == 0 {
                    Role::User
                } else {
                    Role::Assistant
                };
                Turn::new(role, self.content.resolve(doc, node))
            })
            .collect()
    }
}

/// Run the primary strategy, then the parity fallback, keeping the first
/// non-empty result.
fn extract_with_fallback(
    platform: Platform,
    primary: impl Fn() -> RawTurns,
    fallback: &ParityFallback,
    doc: &dyn Document,
) -> RawTurns {
    first_success(
        "turns",
        [Strategy::Primary, Strategy::Parity],
        |strategy| {
            let turns = match strategy {
                Strategy::Primary => primary(),
                Strategy::Parity => RawTurns::Ordered(fallback.extract(doc)),
            };
            if turns.is_empty() {
                return None;
            }
            if *strategy == Strategy::Parity {
                tracing::warn!(
                    platform = %platform,
                    turns = turns.len(),
                    "Primary turn selectors matched nothing; using alternating-role fallback"
                );
            }
            Some(turns)
        },
    )
    .unwrap_or_default()
}

/// Source where one query yields every turn in conversational order.
#[derive(Debug, Clone)]
pub struct InterleavedSource {
    platform: Platform,
    turns: Selector,
    role_attr: &'static str,
    assistant_value: &'static str,
    content: ContentResolver,
    fallback: ParityFallback,
}

impl InterleavedSource {
    pub fn new(
        platform: Platform,
        turns: &str,
        role_attr: &'static str,
        assistant_value: &'static str,
        content: ContentResolver,
        fallback: ParityFallback,
    ) -> Result<Self, SelectorError> {
        Ok(Self {
            platform,
            turns: Selector::parse(turns)?,
            role_attr,
            assistant_value,
            content,
            fallback,
        })
    }

    /// Role named by the element; anything but the assistant value is a user turn.
    fn role_of(&self, doc: &dyn Document, node: NodeId) -> Role {
        match doc.attr(node, self.role_attr) {
            Some(value) if value.trim().eq_ignore_ascii_case(self.assistant_value) => {
                Role::Assistant
            }
            _ => Role::User,
        }
    }

    pub fn extract(&self, doc: &dyn Document) -> RawTurns {
        extract_with_fallback(
            self.platform,
            || {
                RawTurns::Ordered(
                    doc.select(None, &self.turns)
                        .into_iter()
                        .map(|node| Turn::new(self.role_of(doc, node), self.content.resolve(doc, node)))
                        .collect(),
                )
            },
            &self.fallback,
            doc,
        )
    }
}

/// Source with separate user and assistant queries ordered by position.
#[derive(Debug, Clone)]
pub struct SegregatedSource {
    platform: Platform,
    user: Selector,
    assistant: Selector,
    user_content: ContentResolver,
    assistant_content: ContentResolver,
    fallback: ParityFallback,
}

impl SegregatedSource {
    pub fn new(
        platform: Platform,
        (user, user_content): (&str, ContentResolver),
        (assistant, assistant_content): (&str, ContentResolver),
        fallback: ParityFallback,
    ) -> Result<Self, SelectorError> {
        Ok(Self {
            platform,
            user: Selector::parse(user)?,
            assistant: Selector::parse(assistant)?,
            user_content,
            assistant_content,
            fallback,
        })
    }

    fn collect(
        doc: &dyn Document,
        query: &Selector,
        role: Role,
        content: &ContentResolver,
    ) -> Vec<Turn> {
        doc.select(None, query)
            .into_iter()
            .map(|node| {
                let text = content.resolve(doc, node);
                match doc.top(node) {
                    Some(top) => Turn::positioned(role, text, top),
                    None => {
                        tracing::debug!(?role, "Turn element has no rendered position");
                        Turn::new(role, text)
                    }
                }
            })
            .collect()
    }

    pub fn extract(&self, doc: &dyn Document) -> RawTurns {
        extract_with_fallback(
            self.platform,
            || RawTurns::Positioned {
                user: Self::collect(doc, &self.user, Role::User, &self.user_content),
                assistant: Self::collect(
                    doc,
                    &self.assistant,
                    Role::Assistant,
                    &self.assistant_content,
                ),
            },
            &self.fallback,
            doc,
        )
    }
}
