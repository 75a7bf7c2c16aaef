use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use agents::{Agent, AgentError};
use cozy_chess::Color;
use utils::Position;

use crate::outcome::GameOutcome;
use crate::summary::GameStatistics;
use crate::viewer::Viewer;

/// Observer notified after every finished game.
pub trait Progress {
    fn game_finished(&mut self, completed: usize, total: usize);
}

pub struct NoProgress;

impl Progress for NoProgress {
    fn game_finished(&mut self, _completed: usize, _total: usize) {}
}

/// Plays one agent as White against another as Black.
pub struct Arena {
    white: Agent,
    black: Agent,
    stop: Arc<AtomicBool>,
}

impl Arena {
    pub fn new(mut white: Agent, mut black: Agent) -> Self {
        white.set_side(Color::White);
        black.set_side(Color::Black);
        Self {
            white,
            black,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checked between games. Setting it lets the current game finish and starts no more.
    pub fn with_stop_flag(self, stop: Arc<AtomicBool>) -> Self {
        Self { stop, ..self }
    }

    /// Plays a game from the starting position until it is over, or until `viewer`
    /// asks to quit.
    pub fn play_one(
        &mut self,
        mut viewer: Option<&mut (dyn Viewer + '_)>,
    ) -> Result<GameOutcome, AgentError> {
        let mut position = Position::new();

        while !position.is_game_over() {
            if viewer.as_ref().is_some_and(|viewer| viewer.quit_requested()) {
                log::info!("Game stopped after {} plies", position.ply());
                return Ok(GameOutcome {
                    outcome: None,
                    plies: position.ply(),
                    final_fen: position.fen(),
                });
            }

            let player = match position.side_to_move() {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            player.play(&mut position)?;

            if let Some(viewer) = viewer.as_mut() {
                viewer.update(&position);
            }
        }

        let outcome = position.outcome();
        log::info!(
            "{} vs {} = {}: {}",
            self.white.kind(),
            self.black.kind(),
            outcome.map_or_else(|| "*".to_string(), |outcome| outcome.to_string()),
            position.fen()
        );

        Ok(GameOutcome {
            outcome,
            plies: position.ply(),
            final_fen: position.fen(),
        })
    }

    /// Plays `games` games and tallies the results. Stops early, counting only the
    /// games that finished, once the viewer or the stop flag asks for it.
    pub fn compare_agents(
        &mut self,
        games: usize,
        progress: &mut dyn Progress,
        mut viewer: Option<&mut dyn Viewer>,
    ) -> Result<GameStatistics, AgentError> {
        let start = Instant::now();
        let mut stats = GameStatistics::default();

        for game in 0..games {
            if self.stop.load(Ordering::Relaxed) {
                log::info!("Stopping after {} of {} games", game, games);
                break;
            }

            let outcome = self.play_one(viewer.as_deref_mut())?;
            if outcome.is_aborted() {
                break;
            }

            stats.record_game(&outcome);
            progress.game_finished(game + 1, games);
        }

        stats.elapsed = start.elapsed();
        Ok(stats)
    }
}
