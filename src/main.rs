//! Pattern Guess - CLI
//!
//! Mastermind-style game with TUI and text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pattern_guess::{
    commands::{evaluate_codes, run_simple},
    game::{GameConfig, Session},
    help::loader::load_or_default,
    output::print_evaluation,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pattern_guess",
    about = "Crack the hidden pattern of four colors in nine rows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Plain text file to show as help instead of the built-in text
    #[arg(long, global = true)]
    help_file: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Seed for solution generation (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line input, no TUI)
    Simple,

    /// Score a guess against a given solution
    Evaluate {
        /// Solution colors, e.g. "red,blue,green,yellow"
        #[arg(short, long)]
        solution: String,

        /// Guess colors, e.g. "red green blue black"
        #[arg(short, long)]
        guess: String,
    },
}

/// Set up `env_logger`
///
/// The TUI owns the terminal, so it logs nothing to stderr unless `RUST_LOG`
/// asks for it. A log file always captures `info` and above.
fn init_logging(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        ),
    };
    builder.init();
    Ok(())
}

fn build_session(seed: Option<u64>) -> Result<Session> {
    let config = GameConfig::default();
    let session = match seed {
        Some(seed) => Session::with_seed(config, seed)?,
        None => Session::new(config)?,
    };
    Ok(session)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let default_filter = match command {
        Commands::Play => "off",
        Commands::Simple | Commands::Evaluate { .. } => "warn",
    };
    init_logging(cli.log_file.as_deref(), default_filter)?;

    match command {
        Commands::Play => run_play_command(cli.help_file.as_deref(), cli.seed),
        Commands::Simple => run_simple_command(cli.help_file.as_deref(), cli.seed),
        Commands::Evaluate { solution, guess } => run_evaluate_command(&solution, &guess),
    }
}

fn run_evaluate_command(solution: &str, guess: &str) -> Result<()> {
    let result = evaluate_codes(solution, guess)?;
    print_evaluation(&result);
    Ok(())
}

fn run_simple_command(help_file: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let help_text = load_or_default(help_file);
    let mut session = build_session(seed)?;
    let stats = run_simple(&mut session, &help_text)?;
    info!(
        "Text session ended: {} of {} games won",
        stats.games_won, stats.total_games
    );
    Ok(())
}

fn run_play_command(help_file: Option<&Path>, seed: Option<u64>) -> Result<()> {
    use pattern_guess::interactive::{App, run_tui};

    let help_text = load_or_default(help_file);
    let session = build_session(seed)?;
    run_tui(App::new(session, help_text))
}
