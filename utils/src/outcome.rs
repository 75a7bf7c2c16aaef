use std::fmt;

use cozy_chess::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// How a finished game ended. `winner` is only set for checkmate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    pub winner: Option<Color>,
}

impl Outcome {
    pub fn decisive(winner: Color) -> Self {
        Self {
            termination: Termination::Checkmate,
            winner: Some(winner),
        }
    }

    pub fn draw(termination: Termination) -> Self {
        Self {
            termination,
            winner: None,
        }
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Result in PGN notation.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.result(), self.termination)
    }
}
