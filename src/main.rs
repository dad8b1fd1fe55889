//! Wordle Assistant - CLI
//!
//! Type guesses, mark letter colors and get candidate words from a solver
//! service, in a TUI or on the plain command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use wordle_assistant::{
    commands::{run_query, run_simple},
    config::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, SolverConfig},
    logging::{self, LogConfig, LogLevel},
    submission::{HttpSolver, StatusNames},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant: enter guesses, mark colors, get candidate words from a solver service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver service endpoint
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Status names sent to the solver: tags (absent/present/correct) or colors (gray/yellow/green)
    #[arg(long, global = true, value_enum, default_value_t = StatusNames::Tags)]
    status_names: StatusNames,

    /// Log verbosity (RUST_LOG overrides)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Append logs to this file (required for logging in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type 'crane gy--g' per guess)
    Simple,

    /// Ask the solver about a single guess
    Query {
        /// The guessed word
        word: String,

        /// Feedback pattern, e.g. GY--G or 🟩🟨⬜⬜🟩
        #[arg(default_value = "-----")]
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal; only log there when writing to a file
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        logging::init(&LogConfig {
            level: cli.log_level,
            file: cli.log_file.clone(),
        })?;
    }

    let config = SolverConfig::new(cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_status_names(cli.status_names);
    let solver = HttpSolver::new(&config).context("Invalid solver configuration")?;
    info!(url = %solver.url(), "using solver service");

    match command {
        Commands::Play => run_play_command(solver),
        Commands::Simple => run_simple(solver, config.timeout),
        Commands::Query { word, pattern } => run_query(&solver, &word, &pattern).map(|_| ()),
    }
}

fn run_play_command(solver: HttpSolver) -> Result<()> {
    use wordle_assistant::interactive::{App, run_tui};

    let label = solver.url().to_string();
    let app = App::new(solver, label);
    run_tui(app)
}
