//! Clusters - CLI
//!
//! Word-grouping puzzle with TUI and CLI modes. Find four groups of four
//! words that share something in common.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clusters::{
    commands::{decode_source, encode_file, list_puzzles, run_simple, run_simulation},
    config::{DEFAULT_MAX_MISTAKES, GameConfig},
    logging::{LogConfig, init_logging},
    output::{
        print_decode_result, print_encode_result, print_puzzle_list, print_simulation_result,
    },
    puzzles::loader::resolve,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "clusters",
    about = "Find four groups of four words that share something in common",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: built-in number (default 1), JSON file, encoded options, or play link
    #[arg(short, long, global = true, default_value = "1")]
    puzzle: String,

    /// Incorrect guesses allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_MISTAKES)]
    max_mistakes: usize,

    /// How long a correct guess stays highlighted, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    reveal_delay_ms: u64,

    /// Fixed shuffle seed for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// List the built-in puzzles and their share parameters
    List,

    /// Validate an authored puzzle file and print its share parameter
    Encode {
        /// JSON file with `words`, `names`, `author` and `title`
        file: PathBuf,
    },

    /// Turn a shared puzzle back into editable JSON for remixing
    Decode {
        /// Built-in number, JSON file, encoded options, or play link
        source: String,
    },

    /// Play many games with a random guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file);
    let log_config = if matches!(command, Commands::Play) {
        log_config.file_only()
    } else {
        log_config
    };
    init_logging(&log_config).context("failed to open log file")?;

    let config = GameConfig::new(cli.max_mistakes, cli.reveal_delay_ms, cli.seed);
    info!(?config, puzzle = %cli.puzzle, "starting");

    match command {
        Commands::Play => run_play_command(&cli.puzzle, config),
        Commands::Simple => run_simple_command(&cli.puzzle, &config),
        Commands::List => run_list_command(),
        Commands::Encode { file } => run_encode_command(&file),
        Commands::Decode { source } => run_decode_command(&source),
        Commands::Simulate { count } => run_simulate_command(&cli.puzzle, &config, count),
    }
}

fn run_play_command(source: &str, config: GameConfig) -> Result<()> {
    use clusters::interactive::{App, run_tui};

    let puzzle = resolve(source).with_context(|| format!("could not load puzzle '{source}'"))?;
    let app = App::new(&puzzle, config);
    run_tui(app)
}

fn run_simple_command(source: &str, config: &GameConfig) -> Result<()> {
    let puzzle = resolve(source).with_context(|| format!("could not load puzzle '{source}'"))?;
    run_simple(&puzzle, config)
}

fn run_list_command() -> Result<()> {
    let listings = list_puzzles()?;
    print_puzzle_list(&listings);
    Ok(())
}

fn run_encode_command(file: &Path) -> Result<()> {
    let result =
        encode_file(file).with_context(|| format!("could not encode '{}'", file.display()))?;
    print_encode_result(&result);
    Ok(())
}

fn run_decode_command(source: &str) -> Result<()> {
    let result =
        decode_source(source).with_context(|| format!("could not decode '{source}'"))?;
    print_decode_result(&result);
    Ok(())
}

fn run_simulate_command(source: &str, config: &GameConfig, count: usize) -> Result<()> {
    let puzzle = resolve(source).with_context(|| format!("could not load puzzle '{source}'"))?;
    let result = run_simulation(&puzzle, config, count);
    print_simulation_result(&result);
    Ok(())
}
