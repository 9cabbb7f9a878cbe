//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use ncc_quiz::config::Config;
use ncc_quiz::output::OutputMode;
use ncc_quiz::storage::Backend;

/// ncc-quiz - quizzes and a leaderboard for institutions and cadets
#[derive(Parser, Debug)]
#[command(
    name = "ncc-quiz",
    version,
    about = "Quizzes and a persistent leaderboard for institutions and cadets",
    long_about = "Institutions author quizzes, cadets attempt them, and every score\n\
                  feeds a leaderboard. All state lives in one data file that is\n\
                  rewritten after every change."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/ncc-quiz/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where the registry is stored
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Data file path
    #[arg(long, env = "NCC_QUIZ_DATA")]
    pub data: Option<PathBuf>,

    /// Data file format: json, toml
    #[arg(long)]
    pub backend: Option<Backend>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, env = "NCC_QUIZ_BIND")]
        bind: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "NCC_QUIZ_PORT")]
        port: Option<u16>,

        /// Request worker threads
        #[arg(long)]
        workers: Option<usize>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Print the leaderboard
    Leaderboard {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Show registry counts
    Status {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Show version
    Version,
}

/// Load config from `--config` or the default location, then apply store flags
fn load_config(path: Option<&PathBuf>, store: StoreArgs) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    config.override_storage(store.data, store.backend);
    Ok(config)
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

    match cli.command {
        Some(Command::Serve {
            bind,
            port,
            workers,
            store,
        }) => {
            let mut config = load_config(cli.config.as_ref(), store)?;
            config.override_server(bind, port, workers);
            commands::serve(&config)
        },
        Some(Command::Leaderboard { store }) => {
            let config = load_config(cli.config.as_ref(), store)?;
            commands::leaderboard(&config, output_mode)
        },
        Some(Command::Status { store }) => {
            let config = load_config(cli.config.as_ref(), store)?;
            commands::status(&config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("ncc-quiz v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ncc-quiz v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'ncc-quiz --help' for usage");
                println!("Run 'ncc-quiz serve' to start the server");
            }
            Ok(())
        },
    }
}
