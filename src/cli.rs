//! CLI definitions for blockterm
//!
//! Kept apart from main.rs so the argument structure can be unit tested
//! without running any command.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "blockterm")]
#[command(about = "Replay shell server events as styled command blocks")]
#[command(
    long_about = "blockterm - Terminal output styling and block selection.

Reads newline-delimited JSON server events (command_start, command_end,
output, screen_row_update, history), parses ANSI escape sequences in the
output into styled segments and groups them into command blocks.

QUICK START:
    blockterm replay session.ndjson          Print blocks with colors
    blockterm document session.ndjson        Show the global offset index
    blockterm copy session.ndjson --start 0 --end 20
                                             Print the text of a range

Pass '-' as the events file to read from stdin."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/blockterm/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print command blocks with their styles
    #[command(long_about = "Apply every event in the file and print the resulting blocks.

Each block prints its '$ command' header, its committed output and any
active-screen rows, followed by its status. Colors are written with ANSI
escapes unless --plain is given or NO_COLOR is set.

EXAMPLES:
    blockterm replay session.ndjson
    cat session.ndjson | blockterm replay - --plain")]
    Replay {
        /// Newline-delimited JSON events, or '-' for stdin
        #[arg(help = "Events file (NDJSON), or '-' for stdin")]
        events: PathBuf,
        /// Print text without styles
        #[arg(long, help = "Print text without ANSI styling")]
        plain: bool,
    },

    /// Print the global document index
    #[command(long_about = "Print the global document built from the blocks.

Lists each header and output segment with its block index and the global
character range it occupies, then the total length.

EXAMPLE:
    blockterm document session.ndjson")]
    Document {
        /// Newline-delimited JSON events, or '-' for stdin
        #[arg(help = "Events file (NDJSON), or '-' for stdin")]
        events: PathBuf,
    },

    /// Extract the text of a global range
    #[command(long_about = "Extract copy text for a global character range.

The range is clamped to the document. Headers are copied without their
'$ ' prefix. With --clipboard the text goes to the system clipboard
instead of stdout.

EXAMPLES:
    blockterm copy session.ndjson --start 0 --end 40
    blockterm copy session.ndjson --start 5 --end 9 --clipboard")]
    Copy {
        /// Newline-delimited JSON events, or '-' for stdin
        #[arg(help = "Events file (NDJSON), or '-' for stdin")]
        events: PathBuf,
        /// First global offset of the range
        #[arg(long, help = "Global start offset (inclusive)")]
        start: usize,
        /// End global offset of the range (exclusive)
        #[arg(long, help = "Global end offset (exclusive)")]
        end: usize,
        /// Copy to the system clipboard
        #[arg(long, help = "Copy to the system clipboard instead of printing")]
        clipboard: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

EXAMPLE:
    blockterm config show")]
    Show,
    /// Print the config file location
    #[command(long_about = "Print the path of the configuration file.

EXAMPLE:
    blockterm config path")]
    Path,
}
