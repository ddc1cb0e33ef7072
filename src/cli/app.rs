//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use super::commands;
use super::session::{GlobalOpts, Session};
use rategate::{PromptOutcome, VERSION};
use rategate::output::OutputMode;

/// rategate - Decide when to ask users for a review
#[derive(Parser, Debug)]
#[command(
    name = "rategate",
    version,
    about = "Decide when an app may ask its users for a review",
    long_about = "Decide when an app may ask its users for a review.\n\n\
                  Points accumulate as users hit qualifying events.\n\
                  A prompt is allowed once per build, after enough points,\n\
                  and after a cooldown counted in calendar months."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.rategate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State file (default: from config, else ~/.rategate/state.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(long, global = true, hide = true, value_name = "RFC3339")]
    pub now: Option<DateTime<Utc>>,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show the stored state and the current decision
    Status,

    /// Print whether the prompt may be shown (exit code 1 when not)
    Check,

    /// Manage earned points
    Points {
        /// Points operation
        #[command(subcommand)]
        action: PointsAction,
    },

    /// Ask the configured prompt on the terminal if eligible
    Ask {
        /// Skip the asker prompt and request the review directly
        #[arg(long)]
        direct: bool,
    },

    /// Record the answer to a prompt shown elsewhere
    Answer {
        /// accept or decline
        outcome: PromptOutcome,
    },

    /// Mark the prompt as just shown for the running build
    Reset,

    /// Manage the out-of-band "show the prompt somewhere" flag
    Remote {
        /// Flag operation
        #[command(subcommand)]
        action: RemoteAction,
    },

    /// Show version
    Version,
}

/// Points operations
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum PointsAction {
    /// Add points (negative values remove, never below zero)
    Add {
        /// Number of points
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

/// Remote flag operations
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    /// Set the flag
    On,
    /// Clear the flag
    Off,
    /// Print the flag
    Show,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let opts = GlobalOpts {
        config: cli.config,
        state: cli.state,
        now: cli.now,
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(&opts.config_path(), force, output_mode),
        Some(Command::Status) => commands::status(&Session::open(&opts)?, output_mode),
        Some(Command::Check) => commands::check(&Session::open(&opts)?, output_mode),
        Some(Command::Points {
            action: PointsAction::Add { amount },
        }) => commands::add_points(&Session::open(&opts)?, amount, output_mode),
        Some(Command::Ask { direct }) => commands::ask(&Session::open(&opts)?, direct, output_mode),
        Some(Command::Answer { outcome }) => {
            commands::answer(&Session::open(&opts)?, outcome, output_mode)
        },
        Some(Command::Reset) => commands::reset(&Session::open(&opts)?, output_mode),
        Some(Command::Remote { action }) => commands::remote(&Session::open(&opts)?, action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("rategate v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rategate v{VERSION}");
                println!("\nRun 'rategate --help' for usage");
                println!("Run 'rategate init' to get started");
            }
            Ok(())
        },
    }
}
