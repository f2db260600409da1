//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    method: CopyMethod,
    size_bytes: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, size_bytes: usize) -> Self {
        Self { method, size_bytes }
    }

    /// Which tool performed the copy.
    pub fn method(&self) -> CopyMethod {
        self.method
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied {} bytes of JSON to clipboard (via {})",
            self.size_bytes,
            self.method.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }
}
