//! Hand-off of a finished export to the clipboard or the console.
//!
//! The record is serialized once. If the clipboard cannot take it, the same
//! text goes to the console instead so nothing is lost and extraction never
//! has to run again.

use std::io::{self, Write};

use crate::clipboard::{ClipboardError, Copy, CopyResult};

/// Where the serialized export ended up.
#[derive(Debug)]
pub enum Delivery {
    /// Copied to the system clipboard.
    Clipboard(CopyResult),
    /// Written to the console; `reason` is set when the clipboard failed.
    Console { reason: Option<ClipboardError> },
}

impl Delivery {
    /// Whether the clipboard was attempted and failed.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Console { reason: Some(_) })
    }
}

/// Deliver `json` to the clipboard when `copy` is given, else to `console`.
pub fn deliver<W: Write>(json: &str, copy: Option<&Copy>, console: &mut W) -> io::Result<Delivery> {
    let reason = match copy {
        Some(copy) => match copy.text(json) {
            Ok(result) => return Ok(Delivery::Clipboard(result)),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable; writing export to console");
                Some(e)
            }
        },
        None => None,
    };

    console.write_all(json.as_bytes())?;
    if !json.ends_with('\n') {
        console.write_all(b"\n")?;
    }
    console.flush()?;
    Ok(Delivery::Console { reason })
}
