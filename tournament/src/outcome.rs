use cozy_chess::Color;
use utils::Outcome;

/// Result of one arena game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    /// `None` when the game was stopped before it finished.
    pub outcome: Option<Outcome>,
    pub plies: usize,
    pub final_fen: String,
}

impl GameOutcome {
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.outcome.is_none()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(|outcome| outcome.winner)
    }

    pub fn result(&self) -> &'static str {
        self.outcome.map_or("*", |outcome| outcome.result())
    }
}
