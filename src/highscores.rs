//! Process-wide game statistics
//!
//! High score, games played and cumulative score. Owned by the session and
//! handed to the simulation tick by reference; persisted through
//! [`crate::persistence::HighScoreStore`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Best score ever seen (never decreases)
    pub high_score: u64,
    /// Restarts since launch
    pub games_played: u32,
    /// Sum of final scores of every finished run
    pub total_score: u64,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously stored high score
    pub fn with_high_score(high_score: u64) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    /// Fold a finished run into the stats. Returns true on a new record.
    pub fn record_game_over(&mut self, score: u64) -> bool {
        self.total_score += score;
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Count a restart
    pub fn record_restart(&mut self) {
        self.games_played += 1;
    }

    /// Mean final score per game played, once at least one restart happened
    pub fn average_score(&self) -> Option<f64> {
        (self.games_played > 0).then(|| self.total_score as f64 / self.games_played as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_raises_high_score_only_when_beaten() {
        let mut stats = GameStats::with_high_score(10);
        assert!(!stats.record_game_over(10));
        assert_eq!(stats.high_score, 10);
        assert!(stats.record_game_over(11));
        assert_eq!(stats.high_score, 11);
        assert!(!stats.record_game_over(3));
        assert_eq!(stats.high_score, 11);
        assert_eq!(stats.total_score, 24);
    }

    #[test]
    fn test_average_requires_games_played() {
        let mut stats = GameStats::new();
        stats.record_game_over(8);
        assert_eq!(stats.average_score(), None);
        stats.record_restart();
        stats.record_game_over(4);
        stats.record_restart();
        assert_eq!(stats.average_score(), Some(6.0));
    }
}
