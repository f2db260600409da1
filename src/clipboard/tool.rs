//! CopyTool trait and related error types.

use super::result::CopyMethod;

/// A system clipboard tool that accepts text on stdin.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run here (right OS, binary on PATH).
    fn is_available(&self) -> bool;

    /// Try to copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a single tool invocation.
///
/// `NotFound` lets the orchestrator move on silently; `Failed` is kept as
/// the reason reported when no later tool succeeds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyToolError {
    #[error("{0}")]
    Failed(String),

    #[error("tool not found")]
    NotFound,
}
