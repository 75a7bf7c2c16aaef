use cozy_chess::{BitBoard, Color, Piece};
use utils::Position;

/// Tables are written from White's point of view, indexed a1..h8.
pub struct PSTRefs<'a> {
    pub pawn: &'a [f32; 64],
    pub knight: &'a [f32; 64],
    pub bishop: &'a [f32; 64],
    pub queen: &'a [f32; 64],
    pub king: &'a [f32; 64],
}

#[inline(always)]
pub fn sum_pst(bitboard: BitBoard, table: &[f32; 64]) -> f32 {
    let mut total = 0.0;
    for sq in bitboard {
        total += table[sq as usize];
    }
    total
}

pub fn get_pst(color: Color) -> PSTRefs<'static> {
    match color {
        Color::White => PSTRefs {
            pawn: &WHITE_PAWN_PST,
            knight: &WHITE_KNIGHT_PST,
            bishop: &WHITE_BISHOP_PST,
            queen: &WHITE_QUEEN_PST,
            king: &WHITE_KING_PST,
        },
        Color::Black => PSTRefs {
            pawn: &BLACK_PAWN_PST,
            knight: &BLACK_KNIGHT_PST,
            bishop: &BLACK_BISHOP_PST,
            queen: &BLACK_QUEEN_PST,
            king: &BLACK_KING_PST,
        },
    }
}

/// Positional value of `color`'s pawns, knights, bishops, queens and king, in pawns.
///
/// Rooks have no table. White sums count up, Black sums count down, so the value is
/// already from White's point of view.
pub fn positional_score(position: &Position, color: Color) -> f32 {
    let pst = get_pst(color);

    let mut total = 0.0;
    total += sum_pst(position.pieces(Piece::Pawn, color), pst.pawn);
    total += sum_pst(position.pieces(Piece::Knight, color), pst.knight);
    total += sum_pst(position.pieces(Piece::Bishop, color), pst.bishop);
    total += sum_pst(position.pieces(Piece::Queen, color), pst.queen);
    total += sum_pst(position.pieces(Piece::King, color), pst.king);

    match color {
        Color::White => total / 1000.0,
        Color::Black => -total / 1000.0,
    }
}

// Flip ranks so a Black piece reads the square White would see from its own side.
const fn mirror_pst(source: &[f32; 64]) -> [f32; 64] {
    let mut table = [0.0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[i ^ 56];
        i += 1;
    }
    table
}

// - Rewards advancing, penalizes leaving d2/e2 unmoved
pub const WHITE_PAWN_PST: [f32; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 1: a1..h1
    5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0, // RANK 2
    5.0, -5.0, -10.0, 0.0, 0.0, -10.0, -5.0, 5.0, // RANK 3
    0.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 0.0, // RANK 4
    5.0, 5.0, 10.0, 25.0, 25.0, 10.0, 5.0, 5.0, // RANK 5
    10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0, // RANK 6
    50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, // RANK 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 8
];
const BLACK_PAWN_PST: [f32; 64] = mirror_pst(&WHITE_PAWN_PST);

pub const WHITE_KNIGHT_PST: [f32; 64] = [
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // RANK 1: a1..h1
    -40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0, // RANK 2
    -30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0, // RANK 3
    -30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0, // RANK 4
    -30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0, // RANK 5
    -30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0, // RANK 6
    -40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0, // RANK 7
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // RANK 8
];
const BLACK_KNIGHT_PST: [f32; 64] = mirror_pst(&WHITE_KNIGHT_PST);

pub const WHITE_BISHOP_PST: [f32; 64] = [
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // RANK 1: a1..h1
    -10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0, // RANK 2
    -10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0, // RANK 3
    -10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0, // RANK 4
    -10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0, // RANK 5
    -10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0, // RANK 6
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 7
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // RANK 8
];
const BLACK_BISHOP_PST: [f32; 64] = mirror_pst(&WHITE_BISHOP_PST);

pub const WHITE_QUEEN_PST: [f32; 64] = [
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // RANK 1: a1..h1
    -10.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 2
    -10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // RANK 3
    0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // RANK 4
    -5.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // RANK 5
    -10.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // RANK 6
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 7
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // RANK 8
];
const BLACK_QUEEN_PST: [f32; 64] = mirror_pst(&WHITE_QUEEN_PST);

// - Middlegame shelter: stay castled behind the pawns
pub const WHITE_KING_PST: [f32; 64] = [
    20.0, 30.0, 10.0, 0.0, 0.0, 10.0, 30.0, 20.0, // RANK 1: a1..h1
    20.0, 20.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0, // RANK 2
    -10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0, // RANK 3
    -20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0, // RANK 4
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 5
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 6
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 7
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 8
];
const BLACK_KING_PST: [f32; 64] = mirror_pst(&WHITE_KING_PST);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_symmetric() {
        let position = Position::new();
        let white = positional_score(&position, Color::White);
        let black = positional_score(&position, Color::Black);

        // Pawns 10, knights -80, bishops -20, queen -5, king 0
        assert!((white - -0.095).abs() < 1e-6);
        assert!((white + black).abs() < 1e-6);
    }

    #[test]
    fn test_mirror_flips_ranks() {
        // e2 for White is e7 for Black
        assert_eq!(BLACK_PAWN_PST[52], WHITE_PAWN_PST[12]);
        assert_eq!(BLACK_KING_PST[62], WHITE_KING_PST[6]);
    }

    #[test]
    fn test_rooks_are_ignored() {
        let bare = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let with_rooks = Position::from_fen("4k3/8/8/8/3R4/8/8/R3K2R w - - 0 1").unwrap();
        assert_eq!(
            positional_score(&bare, Color::White),
            positional_score(&with_rooks, Color::White)
        );
    }

    #[test]
    fn test_centralized_knight_scores_higher() {
        let rim = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        let center = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        assert!(positional_score(&center, Color::White) > positional_score(&rim, Color::White));
    }
}
