use cozy_chess::{Color, Piece};
use utils::Position;

pub const PAWN_WEIGHT: f32 = 1.0;
pub const KNIGHT_WEIGHT: f32 = 3.1;
pub const BISHOP_WEIGHT: f32 = 3.2;
pub const ROOK_WEIGHT: f32 = 4.5;
pub const QUEEN_WEIGHT: f32 = 9.0;

const WEIGHTED_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

/// Material weight of a piece. The king carries no material weight.
#[inline(always)]
pub fn piece_weight(piece: Piece) -> f32 {
    match piece {
        Piece::Pawn => PAWN_WEIGHT,
        Piece::Knight => KNIGHT_WEIGHT,
        Piece::Bishop => BISHOP_WEIGHT,
        Piece::Rook => ROOK_WEIGHT,
        Piece::Queen => QUEEN_WEIGHT,
        Piece::King => 0.0,
    }
}

#[inline(always)]
fn side_material(position: &Position, color: Color) -> f32 {
    let mut material = 0.0;
    for piece in WEIGHTED_PIECES {
        material += piece_weight(piece) * position.pieces(piece, color).len() as f32;
    }
    material
}

/// Weighted material of both sides together.
pub fn material_count(position: &Position) -> f32 {
    side_material(position, Color::White) + side_material(position, Color::Black)
}

/// White material minus Black material.
pub fn material_balance(position: &Position) -> f32 {
    side_material(position, Color::White) - side_material(position, Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_material() {
        let position = Position::new();
        assert_eq!(material_balance(&position), 0.0);
        // 2 * (8 + 2 * 3.1 + 2 * 3.2 + 2 * 4.5 + 9)
        assert!((material_count(&position) - 77.2).abs() < 1e-4);
    }

    #[test]
    fn test_balance_favors_white() {
        // White is a rook up
        let position = Position::from_fen("4k3/pppp4/8/8/8/8/PPPP4/R3K3 w - - 0 1").unwrap();
        assert!((material_balance(&position) - ROOK_WEIGHT).abs() < 1e-6);
        assert!((material_count(&position) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_king_is_weightless() {
        let position = Position::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert_eq!(material_count(&position), 0.0);
        assert_eq!(piece_weight(Piece::King), 0.0);
    }
}
