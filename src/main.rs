//! chatx binary entry point.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatx::cli::{Cli, Commands, ConfigCommand};

/// Environment variable holding the log filter (e.g. `chatx=debug`).
const LOG_ENV: &str = "CHATX_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatx=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Export {
            snapshot,
            platform,
            stdout,
        } => commands::export::handle(&snapshot, platform, stdout),
        Commands::Platforms => commands::platforms::handle(),
        Commands::Config(ConfigCommand::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommand::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
