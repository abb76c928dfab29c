//! Wordle Engine - CLI
//!
//! Play Wordle, let a solver strategy play it, or filter candidates by hand.

use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_engine::{
    commands::{filter_words, parse_pairs, run_play, run_simulation, solve_word},
    config::{GameConfig, WordListSource},
    core::Word,
    game::Scoreboard,
    output::{print_filter_result, print_simulation_report, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle feedback scoring, candidate filtering and solver strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: `only_matched_patterns` (default) or `entropy`
    #[arg(short, long, global = true, default_value = "only_matched_patterns")]
    strategy: String,

    /// Guess dictionary file, one word per line (requires --solutions)
    #[arg(long, global = true, requires = "solutions")]
    guesses: Option<PathBuf>,

    /// Solution dictionary file, one word per line (requires --guesses)
    #[arg(long, global = true, requires = "guesses")]
    solutions: Option<PathBuf>,

    /// Opening guess used by the solver
    #[arg(long, global = true, default_value = wordle_engine::config::DEFAULT_OPENING)]
    opening: String,

    /// Guesses played automatically at the start of every game
    #[arg(short, long, global = true, value_delimiter = ',')]
    initial: Vec<String>,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = wordle_engine::config::MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible solution draws
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against a random word (default)
    Play,

    /// Let the solver play a number of random games
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Let the solver play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// List guess-dictionary words compatible with observed feedback
    Filter {
        /// Observations as GUESS=FEEDBACK, e.g. crane=WWCWC
        pairs: Vec<String>,

        /// Maximum number of candidates to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let source = WordListSource::from_paths(cli.guesses.clone(), cli.solutions.clone())
        .context("--guesses and --solutions must be given together")?;
    let lists = WordLists::load(&source).context("failed to load word lists")?;

    let config = game_config(&cli, &lists)?;
    let strategy: StrategyType = cli.strategy.parse()?;
    let solver = Solver::new(strategy, lists.solutions(), config.opening.clone());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut scoreboard = Scoreboard::new();
            run_play(
                &solver,
                &lists,
                &config,
                &mut scoreboard,
                &mut io::stdin().lock(),
                &mut rng,
            )
        }
        Commands::Simulate { count } => {
            let mut scoreboard = Scoreboard::new();
            let report = run_simulation(
                &solver,
                &lists,
                &config,
                count,
                &mut scoreboard,
                &mut rng,
                true,
            )?;
            print_simulation_report(&report, config.max_guesses);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let target = Word::new(word.trim())
                .with_context(|| format!("invalid target word '{word}'"))?;
            if !lists.solutions().contains(&target) {
                bail!("{target} is not in the solution list");
            }

            let result = solve_word(&solver, &lists, &config, target, &mut rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Filter { pairs, limit } => {
            let history = parse_pairs(&pairs)?;
            let result = filter_words(history, lists.guesses());
            print_filter_result(&result, limit);
            Ok(())
        }
    }
}

/// Build the game settings from the command line
fn game_config(cli: &Cli, lists: &WordLists) -> Result<GameConfig> {
    ensure!(cli.max_guesses > 0, "--max-guesses must be at least 1");

    let config = GameConfig {
        max_guesses: cli.max_guesses,
        ..GameConfig::default()
    }
    .with_opening(&cli.opening)
    .with_context(|| format!("invalid opening word '{}'", cli.opening))?
    .with_initial_guesses(&cli.initial)
    .context("invalid initial guess")?;

    for guess in std::iter::once(&config.opening).chain(&config.initial_guesses) {
        if !lists.is_valid(guess.text()) {
            bail!("{guess} is not in the guess dictionary");
        }
    }

    Ok(config)
}
