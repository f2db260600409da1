//! Data structures flowing through the extraction pipeline.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::platform::Platform;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversational contribution as found in the page.
///
/// `content` is the untrimmed candidate text. `position` is only set by
/// sources whose document order does not match conversational order; the
/// order reconciler consumes it and clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub position: Option<f64>,
}

impl Turn {
    /// A turn whose place in the conversation is its document order.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            position: None,
        }
    }

    /// A turn ordered by its vertical rendered position.
    pub fn positioned(role: Role, content: impl Into<String>, position: f64) -> Self {
        Self {
            role,
            content: content.into(),
            position: Some(position),
        }
    }
}

/// Output of a turn extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTurns {
    /// Turns already in conversational order.
    Ordered(Vec<Turn>),
    /// Role-segregated collections that still need ordering by position.
    Positioned {
        user: Vec<Turn>,
        assistant: Vec<Turn>,
    },
}

impl RawTurns {
    /// Total number of turns found.
    pub fn len(&self) -> usize {
        match self {
            Self::Ordered(turns) => turns.len(),
            Self::Positioned { user, assistant } => user.len() + assistant.len(),
        }
    }

    /// Whether no turns were found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RawTurns {
    fn default() -> Self {
        Self::Ordered(Vec::new())
    }
}

/// A normalized turn: role plus trimmed, non-empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One question with its (possibly multi-part) answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QAPair {
    pub question: String,
    pub answer: String,
}

impl QAPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The finished transcript handed to the output sink.
///
/// Serializes with the key order `title, platform, exportDate, sessions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    title: String,
    platform: String,
    #[serde(serialize_with = "serialize_export_date")]
    export_date: DateTime<Utc>,
    sessions: Vec<QAPair>,
}

impl ExportRecord {
    /// Compose a record from the pipeline outputs.
    pub fn assemble(
        title: impl Into<String>,
        platform: Platform,
        export_date: DateTime<Utc>,
        sessions: Vec<QAPair>,
    ) -> Self {
        Self {
            title: title.into(),
            platform: platform.id().to_string(),
            export_date,
            sessions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn export_date(&self) -> DateTime<Utc> {
        self.export_date
    }

    pub fn sessions(&self) -> &[QAPair] {
        &self.sessions
    }

    /// Pretty-printed JSON, the format downstream consumers expect.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2026-10-17T09:30:00.000Z`.
fn serialize_export_date<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
