//! Interactive game against a random solution
//!
//! The player types guesses; the solver is only consulted for hints.

use crate::config::GameConfig;
use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, GuessError, Scoreboard};
use crate::output::{print_game_over, print_game_state, print_summaries};
use crate::solver::{Solver, Strategy};
use crate::wordlists::WordLists;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Scoreboard mode for games played by a person
pub const USER_MODE: &str = "user";

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if the solution list is empty or reading input fails.
pub fn run_play<S: Strategy, B: BufRead, R: Rng + ?Sized>(
    solver: &Solver<S>,
    lists: &WordLists,
    config: &GameConfig,
    scoreboard: &mut Scoreboard,
    input: &mut B,
    rng: &mut R,
) -> Result<()> {
    println!("\n{}", "Wordle".bright_green().bold());
    println!(
        "Guess the {WORD_LENGTH}-letter word in {} tries.",
        config.max_guesses
    );
    println!("Commands: 'hint' for a suggestion, 'quit' to exit\n");

    loop {
        let Some(mut game) = Game::random(lists, config, rng) else {
            bail!("the solution list is empty");
        };
        if !game.history().is_empty() {
            print_game_state(&game);
        }

        while game.status() == GameStatus::InProgress {
            let Some(line) = read_line(input, &format!("Guess {}", game.turn()))? else {
                return Ok(());
            };

            match line.to_ascii_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "hint" => {
                    match solver.next_guess(game.history(), rng) {
                        Ok(word) => println!("💡 Try {}", word.to_string().bright_yellow()),
                        Err(e) => println!("No hint available: {e}"),
                    }
                    continue;
                }
                _ => {}
            }

            match game.submit(&line) {
                Ok(_) => print_game_state(&game),
                Err(GuessError::Invalid(word)) => {
                    println!("❌ '{word}' is not a valid guess, try again");
                }
                Err(GuessError::GameOver) => break,
            }
        }

        print_game_over(&game);
        if let Some(outcome) = game.outcome() {
            scoreboard.record(USER_MODE, outcome);
            print_summaries(&scoreboard.summaries());
        }

        match read_line(input, "Enter 'quit' to quit, anything else to play again")? {
            Some(answer) if !answer.eq_ignore_ascii_case("quit") => {}
            _ => return Ok(()),
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
