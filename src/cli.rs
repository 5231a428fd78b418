//! Command-line interface for par-jsonview.
//!
//! This module handles CLI argument parsing and the config-bootstrap
//! subcommand; rendering itself lives in the library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use par_jsonview_config::{Config, LogLevel};

/// par-jsonview - styled JSON previews and thumbnails for the terminal
#[derive(Parser)]
#[command(name = "par-jsonview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file to render (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Render in thumbnail mode: tight indents, text booleans, line budget
    #[arg(long)]
    pub thumbnail: bool,

    /// Force the light-background palette
    #[arg(long)]
    pub light: bool,

    /// Disable ANSI styling (plain text output)
    #[arg(long)]
    pub no_color: bool,

    /// Logging verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file and print its path
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Runtime options passed from CLI to the renderer host.
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Input file; `None` means stdin.
    pub file: Option<PathBuf>,
    /// Thumbnail mode requested.
    pub thumbnail: bool,
    /// Force the light palette over the configured one.
    pub light: bool,
    /// Suppress ANSI styling.
    pub no_color: bool,
    /// Log level override from `--log-level`.
    pub log_level: Option<LogLevel>,
}

/// Result of CLI processing.
pub enum CliResult {
    /// Continue with normal rendering, with the collected runtime options.
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed or argument error).
    Exit(i32),
}

/// Process CLI arguments and handle subcommands.
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig { force }) = cli.command {
        return init_config(force);
    }

    let log_level = match cli.log_level.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<LogLevel>() {
            Ok(level) => Some(level),
            Err(err) => {
                eprintln!("par-jsonview: {err}");
                return CliResult::Exit(2);
            }
        },
    };

    CliResult::Continue(RuntimeOptions {
        file: cli.file,
        thumbnail: cli.thumbnail,
        light: cli.light,
        no_color: cli.no_color,
        log_level,
    })
}

/// Write the default config file unless one already exists.
fn init_config(force: bool) -> CliResult {
    let path = Config::config_path();
    if path.exists() && !force {
        eprintln!(
            "par-jsonview: config already exists at {} (use --force to overwrite)",
            path.display()
        );
        return CliResult::Exit(1);
    }

    match Config::default().save() {
        Ok(()) => {
            println!("{}", path.display());
            CliResult::Exit(0)
        }
        Err(err) => {
            eprintln!("par-jsonview: could not write config: {err:#}");
            CliResult::Exit(1)
        }
    }
}
