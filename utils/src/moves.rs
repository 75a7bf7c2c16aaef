use arrayvec::ArrayVec;
use cozy_chess::{Board, Move, Piece};

/// Upper bound on the number of legal moves in any reachable chess position.
pub const MAX_MOVES: usize = 218;

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Check if a move is a real capture (enemy piece on destination, or en passant).
/// Castling is represented by cozy-chess as "king captures rook" and is not a capture.
#[inline(always)]
pub fn is_capture(board: &Board, mv: Move) -> bool {
    board.colors(!board.side_to_move()).has(mv.to) || is_en_passant(board, mv)
}

/// A pawn moving diagonally onto an empty square can only be an en passant capture.
#[inline(always)]
pub fn is_en_passant(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::Pawn)
        && mv.from.file() != mv.to.file()
        && board.piece_on(mv.to).is_none()
}

/// Check if there are any legal moves in the position.
#[inline(always)]
pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|moves| !moves.is_empty())
}

/// Collect all legal moves, in generation order.
#[inline(always)]
pub fn collect_legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}
