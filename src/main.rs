//! blockterm - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

/// Log to stderr. RUST_LOG wins over the configured level.
fn init_logging(cli: &Cli) {
    let fallback = commands::load_config(cli.config.as_deref())
        .map(|config| config.log.level)
        .unwrap_or_else(|_| blockterm::config::default_log_level());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Replay { events, plain } => commands::replay::handle(&events, plain, config),
        Commands::Document { events } => commands::document::handle(&events, config),
        Commands::Copy {
            events,
            start,
            end,
            clipboard,
        } => commands::copy::handle(&events, start, end, clipboard, config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Path => commands::config::handle_path(config),
        },
    }
}
