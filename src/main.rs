//! Numberle - CLI
//!
//! Guess the hidden equation in a full-screen TUI or a plain console loop,
//! and inspect equations or corpora from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use numberle::{
    commands::{check_equation, corpus_lines, run_simple, verify_corpus},
    equations::source_from_arg,
    interactive::{App, run_tui},
    output::{print_check_result, print_verify_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Numberle: guess the hidden 7-character arithmetic equation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Equation corpus: 'embedded' (default) or path to file
    #[arg(short, long, global = true, default_value = "embedded")]
    equations: String,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (console game without TUI)
    Simple {
        /// Print the secret equation at the start of each game
        #[arg(long)]
        reveal: bool,
    },

    /// Check whether an equation would be accepted as a guess
    Check {
        /// The equation to check
        equation: String,

        /// Score the equation against this secret
        #[arg(long)]
        against: Option<String>,
    },

    /// Verify every entry of the equation corpus
    Verify,
}

fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "Logging initialized");
    } else if tui {
        // Writing to stderr would corrupt the alternate screen
        tracing_subscriber::registry().with(env_filter).init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli.equations, cli.seed),
        Commands::Simple { reveal } => run_simple_command(&cli.equations, cli.seed, reveal),
        Commands::Check { equation, against } => run_check_command(&equation, against.as_deref()),
        Commands::Verify => run_verify_command(&cli.equations),
    }
}

fn run_play_command(equations: &str, seed: Option<u64>) -> Result<()> {
    let corpus = source_from_arg(equations).load()?;
    let app = App::new(corpus, make_rng(seed))?;
    run_tui(app)
}

fn run_simple_command(equations: &str, seed: Option<u64>, reveal: bool) -> Result<()> {
    let source = source_from_arg(equations);
    let mut rng = make_rng(seed);
    let stats = run_simple(source.as_ref(), &mut rng, reveal)?;
    tracing::info!(games = stats.games, won = stats.won, "Console session finished");
    Ok(())
}

fn run_check_command(equation: &str, against: Option<&str>) -> Result<()> {
    let result = check_equation(equation, against).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_verify_command(equations: &str) -> Result<()> {
    let lines = corpus_lines(equations)?;
    let report = verify_corpus(&lines, true);
    print_verify_result(&report);

    if !report.is_clean() {
        bail!(
            "{} invalid and {} duplicated entries",
            report.invalid.len(),
            report.duplicates.len()
        );
    }
    Ok(())
}
