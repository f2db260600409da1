//! Export command handler.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use chatx::clipboard::Copy;
use chatx::sink::{deliver, Delivery};
use chatx::{Config, Exporter, Platform, SnapshotDocument};

/// Extract the conversation from `snapshot` and hand it to the sink.
///
/// The JSON goes to the clipboard unless `--stdout` was given, the config
/// disables it, or stdout is not a terminal (piped output wants the data).
pub fn handle(snapshot: &Path, platform: Option<Platform>, stdout: bool) -> Result<()> {
    let config = Config::load()?;

    let doc = SnapshotDocument::load(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;

    let platform = match platform {
        Some(p) => p,
        None => {
            let url = doc
                .url()
                .context("Snapshot has no URL; pass --platform to choose one")?;
            Platform::detect(url)?
        }
    };
    tracing::debug!(platform = %platform, "Selected platform");

    let record = Exporter::new(config.extraction.clone()).export(&doc, platform)?;
    let json = record.to_json_pretty()?;

    let use_clipboard = !stdout && config.output.clipboard && atty::is(atty::Stream::Stdout);
    let copy = use_clipboard.then(Copy::new);
    let delivery = deliver(&json, copy.as_ref(), &mut io::stdout().lock())?;

    let summary = format!(
        "Exported {} Q&A pairs from {}: {}",
        record.sessions().len(),
        record.platform(),
        record.title()
    );
    match delivery {
        Delivery::Clipboard(result) => {
            eprintln!("{}", summary);
            eprintln!("{}", result.message());
        }
        Delivery::Console { reason: Some(e) } => {
            eprintln!("{}", summary);
            eprintln!("Could not copy to clipboard ({}); the JSON is printed above.", e);
        }
        Delivery::Console { reason: None } => eprintln!("{}", summary),
    }
    Ok(())
}
