//! Integration tests for chatx.

mod cli_test;
mod export_test;
mod helpers;
mod pipeline_test;
