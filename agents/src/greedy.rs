use cozy_chess::{Board, Move, Piece};
use utils::{is_capture, is_en_passant};

/// Material a move wins, ranked by piece type: pawn 1 up to king 6. Zero for quiet
/// moves. En passant counts as a pawn.
pub fn material_gained(board: &Board, mv: Move) -> u8 {
    if !is_capture(board, mv) {
        return 0;
    }
    if is_en_passant(board, mv) {
        return piece_rank(Piece::Pawn);
    }
    board.piece_on(mv.to).map_or(0, piece_rank)
}

#[inline(always)]
fn piece_rank(piece: Piece) -> u8 {
    piece as u8 + 1
}

/// First move with the strictly largest gain, or `None` when nothing captures.
pub(crate) fn greediest(board: &Board, moves: &[Move]) -> Option<Move> {
    let mut best = None;
    let mut max_gain = 0;
    for &mv in moves {
        let gain = material_gained(board, mv);
        if gain > max_gain {
            max_gain = gain;
            best = Some(mv);
        }
    }
    best
}
