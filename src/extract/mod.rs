//! Transcript extraction from rendered chat pages.
//!
//! Turns a page [`Document`] into an [`ExportRecord`] of question/answer
//! pairs. The pipeline runs once, synchronously, over a static snapshot:
//!
//! ```text
//! TurnExtractor ──(per turn)──> ContentResolver
//!       │
//!       ├─ positioned? ──> order::reconcile
//!       v
//! TurnNormalizer ──> Pairer ──> ExportRecord <── TitleResolver
//! ```
//!
//! # Module Structure
//!
//! - [`platform`] - Per-platform extractors and the structural shapes they share
//! - [`content`] - Content locators and resolution
//! - [`order`] - Position-based order reconstruction
//! - [`transforms`] - Content cleanup and turn normalization
//! - [`pairing`] - Question/answer folding
//! - [`title`] - Title lookup with synthesized fallback
//! - [`types`] - Data structures for turns, pairs and export records

pub mod config;
pub mod content;
mod error;
pub mod fallback;
pub mod order;
pub mod pairing;
pub mod platform;
pub mod title;
pub mod transforms;
mod types;

pub use config::ExtractionConfig;
pub use error::ExportError;
pub use platform::{extractor_for, Platform, TurnExtractor};
pub use types::{ExportRecord, Message, QAPair, RawTurns, Role, Turn};

use chrono::{DateTime, Utc};

use crate::snapshot::Document;
use pairing::pair_messages;
use title::TitleResolver;
use transforms::TurnNormalizer;

/// Runs the full extraction pipeline for one platform.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExtractionConfig,
}

impl Exporter {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Export the conversation in `doc`, stamped with the current time.
    pub fn export(&self, doc: &dyn Document, platform: Platform) -> Result<ExportRecord, ExportError> {
        self.export_at(doc, platform, Utc::now())
    }

    /// Export the conversation in `doc` with an explicit export date.
    ///
    /// For an unchanged document and date the result is identical on every
    /// call.
    pub fn export_at(
        &self,
        doc: &dyn Document,
        platform: Platform,
        exported_at: DateTime<Utc>,
    ) -> Result<ExportRecord, ExportError> {
        let extractor = extractor_for(platform, &self.config)?;

        let raw = extractor.extract(doc);
        if raw.is_empty() {
            return Err(ExportError::NoTurnsFound {
                platform: platform.id().to_string(),
            });
        }
        let found = raw.len();

        let turns = match raw {
            RawTurns::Ordered(turns) => turns,
            RawTurns::Positioned { user, assistant } => order::reconcile(user, assistant),
        };

        let messages = TurnNormalizer::from_config(&self.config).normalize(turns);
        let sessions = pair_messages(&messages);
        if sessions.is_empty() {
            return Err(ExportError::NoPairsProduced {
                platform: platform.id().to_string(),
                turns: found,
            });
        }

        let title =
            TitleResolver::from_config(&self.config).resolve(doc, platform, extractor.title_locators());

        tracing::info!(
            platform = %platform,
            turns = found,
            messages = messages.len(),
            pairs = sessions.len(),
            title = %title,
            "Extracted conversation"
        );

        Ok(ExportRecord::assemble(title, platform, exported_at, sessions))
    }
}
