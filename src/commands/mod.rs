//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod export;
pub mod platforms;
