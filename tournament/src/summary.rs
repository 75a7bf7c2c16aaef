use std::fmt;
use std::time::Duration;

use cozy_chess::Color;

use crate::outcome::GameOutcome;

/// Tally of finished games. Player 1 plays White and player 2 plays Black.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStatistics {
    pub white_wins: u32,
    pub draws: u32,
    pub black_wins: u32,
    pub elapsed: Duration,
}

impl GameStatistics {
    /// Counts a finished game. Aborted games are ignored.
    pub fn record_game(&mut self, game: &GameOutcome) {
        if game.is_aborted() {
            return;
        }
        match game.winner() {
            Some(Color::White) => self.white_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
    }

    #[inline]
    pub fn games(&self) -> u32 {
        self.white_wins + self.draws + self.black_wins
    }
}

impl fmt::Display for GameStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----------")?;
        writeln!(f, "Player 1 wins: {}", self.white_wins)?;
        writeln!(f, "Player 2 wins: {}", self.black_wins)?;
        writeln!(f, "Draws / stalemates: {}", self.draws)?;
        writeln!(f, "Completed in {:.2} seconds", self.elapsed.as_secs_f64())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::{Outcome, Termination};

    fn game(outcome: Option<Outcome>) -> GameOutcome {
        GameOutcome {
            outcome,
            plies: 10,
            final_fen: String::new(),
        }
    }

    #[test]
    fn test_record_game() {
        let mut stats = GameStatistics::default();
        stats.record_game(&game(Some(Outcome::decisive(Color::White))));
        stats.record_game(&game(Some(Outcome::decisive(Color::Black))));
        stats.record_game(&game(Some(Outcome::decisive(Color::Black))));
        stats.record_game(&game(Some(Outcome::draw(Termination::Stalemate))));
        stats.record_game(&game(None));

        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.black_wins, 2);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.games(), 4);
    }

    #[test]
    fn test_report() {
        let stats = GameStatistics {
            white_wins: 3,
            draws: 1,
            black_wins: 2,
            elapsed: Duration::from_millis(1500),
        };
        let report = stats.to_string();
        assert!(report.contains("Player 1 wins: 3"));
        assert!(report.contains("Player 2 wins: 2"));
        assert!(report.contains("Draws / stalemates: 1"));
        assert!(report.contains("Completed in 1.50 seconds"));
    }
}
