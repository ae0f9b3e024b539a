//! In-memory statistics for one run of the program

use super::state::{GameState, GameStatus, MAX_ATTEMPTS};

/// Results across the games played in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
    /// Wins by guess count; index 0 is unused
    pub distribution: [usize; MAX_ATTEMPTS + 1],
    pub current_streak: usize,
    pub best_streak: usize,
}

impl SessionStats {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, game: &GameState<'_>) {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.played += 1;
                self.won += 1;
                self.distribution[game.attempts_used()] += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            GameStatus::Lost => {
                self.played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}
