//! Per-mode game statistics

use super::GameOutcome;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ModeRecord {
    games: usize,
    wins: usize,
    total_guesses: usize,
}

/// Aggregate results for one mode
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSummary {
    pub mode: String,
    pub games: usize,
    pub wins: usize,
    /// Fraction of games won, in `[0, 1]`
    pub win_rate: f64,
    /// Mean guesses over every game, won or lost
    pub average_guesses: f64,
}

/// In-memory statistics keyed by mode name
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    records: FxHashMap<String, ModeRecord>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game to the statistics for `mode`
    pub fn record(&mut self, mode: &str, outcome: GameOutcome) {
        let record = self.records.entry(mode.to_string()).or_default();
        record.games += 1;
        record.wins += usize::from(outcome.win);
        record.total_guesses += outcome.num_guesses;
    }

    /// Total games recorded across all modes
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.records.values().map(|r| r.games).sum()
    }

    /// One summary per mode, best first
    ///
    /// Sorted by win rate (descending), then average guesses (ascending),
    /// then mode name.
    #[must_use]
    pub fn summaries(&self) -> Vec<ModeSummary> {
        let mut summaries: Vec<ModeSummary> = self
            .records
            .iter()
            .map(|(mode, record)| {
                let games = record.games as f64;
                ModeSummary {
                    mode: mode.clone(),
                    games: record.games,
                    wins: record.wins,
                    win_rate: record.wins as f64 / games,
                    average_guesses: record.total_guesses as f64 / games,
                }
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.win_rate
                .total_cmp(&a.win_rate)
                .then_with(|| a.average_guesses.total_cmp(&b.average_guesses))
                .then_with(|| a.mode.cmp(&b.mode))
        });
        summaries
    }

    /// Summary for a single mode, if any games were recorded for it
    #[must_use]
    pub fn summary(&self, mode: &str) -> Option<ModeSummary> {
        self.summaries().into_iter().find(|s| s.mode == mode)
    }
}
