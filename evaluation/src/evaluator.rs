use cozy_chess::Color;
use utils::Position;

use crate::piece_values::material_balance;
use crate::pst::positional_score;
use crate::scores::MATE_SCORE;

pub const DEFAULT_MATERIAL_COEFFICIENT: f32 = 1.0;
pub const DEFAULT_POSITIONAL_COEFFICIENT: f32 = 6.0;

/// Static evaluation of a position, positive when White stands better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    pub material_coefficient: f32,
    pub positional_coefficient: f32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MATERIAL_COEFFICIENT, DEFAULT_POSITIONAL_COEFFICIENT)
    }
}

impl Evaluator {
    pub fn new(material_coefficient: f32, positional_coefficient: f32) -> Self {
        Self {
            material_coefficient,
            positional_coefficient,
        }
    }

    /// Scores `position` for the search running on behalf of `side`.
    ///
    /// A checkmate scores `+MATE_SCORE` when `side` is Black and `-MATE_SCORE` when it is
    /// White, whichever king is mated. Stalemate, insufficient material and fivefold
    /// repetition score exactly zero. Anything else blends material balance with the
    /// positional score of `side`'s own pieces.
    pub fn heuristic(&self, position: &Position, side: Color) -> f32 {
        let no_moves = !position.has_legal_moves();

        if no_moves && position.is_check() {
            return match side {
                Color::Black => MATE_SCORE,
                Color::White => -MATE_SCORE,
            };
        }
        if no_moves || position.is_insufficient_material() || position.is_fivefold_repetition() {
            return 0.0;
        }

        self.material_coefficient * material_balance(position)
            + self.positional_coefficient * positional_score(position, side)
    }
}
