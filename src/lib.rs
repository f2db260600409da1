//! chatx - Chat Transcript Exporter
//!
//! Extracts the conversation from a rendered ChatGPT, Claude or Gemini page
//! snapshot and folds it into question/answer pairs.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod extract;
pub mod sink;
pub mod snapshot;

pub use config::Config;
pub use extract::{ExportError, ExportRecord, Exporter, Platform, QAPair};
pub use snapshot::{Document, SnapshotDocument};
