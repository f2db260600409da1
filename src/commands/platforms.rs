//! Supported platform listing.

use anyhow::Result;

use chatx::Platform;

/// Print each platform id with the hosts it is detected from.
pub fn handle() -> Result<()> {
    for platform in Platform::ALL {
        println!("{:<8} {}", platform.id(), platform.hosts().join(", "));
    }
    Ok(())
}
