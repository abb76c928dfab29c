//! Display functions for command results

use super::formatters::{create_progress_bar, plural_guesses, tile_row};
use crate::commands::{FilterResult, SimulationReport, SolveResult};
use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, LetterBoard, ModeSummary};
use colored::Colorize;

/// Print the board so far, empty rows for the guesses left, and the letter summary
pub fn print_game_state(game: &Game<'_>) {
    println!();
    for (word, feedback) in game.history() {
        println!(
            "    {}   {}",
            tile_row(word, *feedback),
            feedback.to_string().bright_black()
        );
    }
    for _ in 0..game.guesses_left() {
        println!("    {}", " _ ".repeat(WORD_LENGTH).bright_black());
    }

    let board = LetterBoard::from_history(game.history());
    println!();
    println!("  {} {}", "Correct:  ".green().bold(), board.correct);
    println!("  {} {}", "Misplaced:".yellow().bold(), board.misplaced);
    println!("  {} {}", "Wrong:    ".bright_black().bold(), board.wrong);
    println!("  {} {}", "Unused:   ".bold(), board.unused);
    println!();
}

/// Print the end-of-game message
pub fn print_game_over(game: &Game<'_>) {
    let guesses = game.history().len();
    match game.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "🎉 Correct! You found {} in {guesses} {}",
                game.solution(),
                plural_guesses(guesses)
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Out of guesses. The word was {}", game.solution())
                .red()
                .bold()
        ),
        GameStatus::InProgress => {}
    }
}

/// Print per-mode statistics, best mode first
pub fn print_summaries(summaries: &[ModeSummary]) {
    if summaries.is_empty() {
        return;
    }

    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!(
        "  {:<24} {:>6} {:>9} {:>12}",
        "Mode", "Games", "Win rate", "Avg guesses"
    );
    for summary in summaries {
        println!(
            "  {:<24} {:>6} {:>9} {:>12.2}",
            summary.mode,
            summary.games,
            format!("{:.2}", summary.win_rate),
            summary.average_guesses
        );
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            tile_row(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!("  Worst case: {} candidates", metrics.max_partition);
            }
        }
    }

    let guesses = result.steps.len();
    println!();
    if result.outcome.win {
        println!(
            "{}",
            format!("✅ Solved in {guesses} {}!", plural_guesses(guesses))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {guesses} {}", plural_guesses(guesses))
                .red()
                .bold()
        );
    }
}

/// Print the report of a simulation run
pub fn print_simulation_report(report: &SimulationReport, max_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        report.mode.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance".bright_cyan().bold());
    println!("  Games played:        {}", report.games);
    println!(
        "  Won:                 {} {}",
        report.wins,
        format!("({:.1}%)", report.win_rate() * 100.0).green()
    );
    if !report.missed.is_empty() {
        println!(
            "  Lost:                {} {}",
            report.missed.len(),
            format!("({:.1}%)", (1.0 - report.win_rate()) * 100.0).red()
        );
    }
    println!(
        "  Average when won:    {}",
        format!("{:.3}", report.average_guesses_when_won())
            .bright_yellow()
            .bold()
    );
    if let Some(summary) = &report.summary {
        println!("  Average overall:     {:.3}", summary.average_guesses);
    }
    println!(
        "  Total time:          {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = report.distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=max_guesses {
        let count = report.distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses}: {} {count:4}", bar.green());
    }

    if !report.missed.is_empty() {
        println!("\n😰 {}", "Missed Words".yellow().bold());
        for word in report.missed.iter().take(10) {
            println!("  {}", word.to_string().yellow());
        }
    }
}

/// Print the candidates that survive a filter, up to `limit`
pub fn print_filter_result(result: &FilterResult<'_>, limit: usize) {
    for (word, feedback) in &result.history {
        println!("  {}", tile_row(word, *feedback));
    }

    println!();
    for position in 0..WORD_LENGTH {
        let forbidden = result.exclusions.forbidden_at(position);
        if !forbidden.is_empty() {
            println!("  Position {}: not {}", position + 1, forbidden);
        }
    }
    if !result.exclusions.legitimate().is_empty() {
        println!("  In the word: {}", result.exclusions.legitimate());
    }

    println!(
        "\n{} candidates remain",
        result.candidates.len().to_string().bright_yellow().bold()
    );
    for word in result.candidates.iter().take(limit) {
        println!("  • {word}");
    }
    if result.candidates.len() > limit {
        println!("  … and {} more", result.candidates.len() - limit);
    }
}
