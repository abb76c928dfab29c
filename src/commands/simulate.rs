//! Batch simulation: the solver plays many random games
//!
//! Each game draws a uniformly random solution, is played to the end by
//! `solve_word`, and is recorded on the scoreboard under the strategy's name.

use super::solve::{SolveError, solve_word};
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{ModeSummary, Scoreboard};
use crate::solver::{Solver, Strategy};
use crate::wordlists::WordLists;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Aggregate results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub mode: &'static str,
    pub games: usize,
    pub wins: usize,
    /// Number of won games by guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Solutions the solver failed to find, in play order
    pub missed: Vec<Word>,
    /// Scoreboard entry for the strategy after this run
    pub summary: Option<ModeSummary>,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    /// Mean guesses over won games only
    #[must_use]
    pub fn average_guesses_when_won(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(n, count)| n * count).sum();
        total as f64 / self.wins as f64
    }
}

/// Play `count` random games and record each on `scoreboard`
///
/// # Errors
///
/// Returns `SolveError` if the solution list is empty or a game cannot be
/// played to the end.
pub fn run_simulation<S: Strategy, R: Rng + ?Sized>(
    solver: &Solver<S>,
    lists: &WordLists,
    config: &GameConfig,
    count: usize,
    scoreboard: &mut Scoreboard,
    rng: &mut R,
    show_progress: bool,
) -> Result<SimulationReport, SolveError> {
    let mode = solver.strategy().name();

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let mut report = SimulationReport {
        mode,
        games: 0,
        wins: 0,
        distribution: BTreeMap::new(),
        missed: Vec::new(),
        summary: None,
        duration: Duration::ZERO,
    };

    let start = Instant::now();

    for game in 0..count {
        let target = lists
            .solutions()
            .choose(rng)
            .ok_or(SolveError::NoSolutions)?
            .clone();

        let result = solve_word(solver, lists, config, target, rng)?;
        let outcome = result.outcome;

        scoreboard.record(mode, outcome);
        report.games += 1;
        if outcome.win {
            report.wins += 1;
            *report.distribution.entry(outcome.num_guesses).or_insert(0) += 1;
        } else {
            log::info!("missed {}", result.target);
            report.missed.push(result.target);
        }

        if game % 10 == 0 {
            pb.set_message(format!("Win rate: {:.1}%", report.win_rate() * 100.0));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    report.duration = start.elapsed();
    report.summary = scoreboard.summary(mode);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, OnlyMatchedPatterns};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_adds_up() {
        let lists = WordLists::embedded();
        let opening = Word::new("crane").unwrap();
        let solver = Solver::new(OnlyMatchedPatterns, lists.solutions(), opening);
        let mut scoreboard = Scoreboard::new();
        let mut rng = StdRng::seed_from_u64(42);

        let report = run_simulation(
            &solver,
            &lists,
            &GameConfig::default(),
            20,
            &mut scoreboard,
            &mut rng,
            false,
        )
        .unwrap();

        assert_eq!(report.games, 20);
        assert_eq!(report.wins + report.missed.len(), 20);
        assert_eq!(report.distribution.values().sum::<usize>(), report.wins);
        assert!(report.distribution.keys().all(|&n| (1..=6).contains(&n)));
        assert_eq!(report.mode, "only_matched_patterns");

        let summary = report.summary.unwrap();
        assert_eq!(summary.games, 20);
        assert_eq!(summary.wins, report.wins);
    }

    #[test]
    fn scoreboard_accumulates_across_runs() {
        let lists = WordLists::embedded();
        let opening = Word::new("crane").unwrap();
        let solver = Solver::new(EntropyStrategy, lists.solutions(), opening);
        let mut scoreboard = Scoreboard::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2 {
            run_simulation(
                &solver,
                &lists,
                &GameConfig::default(),
                3,
                &mut scoreboard,
                &mut rng,
                false,
            )
            .unwrap();
        }

        assert_eq!(scoreboard.summary("entropy").unwrap().games, 6);
    }

    #[test]
    fn empty_solution_list_is_an_error() {
        let lists = WordLists::new(vec![Word::new("crane").unwrap()], Vec::new());
        let opening = Word::new("crane").unwrap();
        let solver = Solver::new(OnlyMatchedPatterns, lists.solutions(), opening);
        let mut scoreboard = Scoreboard::new();
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_simulation(
            &solver,
            &lists,
            &GameConfig::default(),
            1,
            &mut scoreboard,
            &mut rng,
            false,
        );
        assert!(matches!(result, Err(SolveError::NoSolutions)));
    }

    #[test]
    fn averages_handle_empty_runs() {
        let report = SimulationReport {
            mode: "entropy",
            games: 0,
            wins: 0,
            distribution: BTreeMap::new(),
            missed: Vec::new(),
            summary: None,
            duration: Duration::ZERO,
        };
        assert!(report.win_rate().abs() < f64::EPSILON);
        assert!(report.average_guesses_when_won().abs() < f64::EPSILON);
    }
}
