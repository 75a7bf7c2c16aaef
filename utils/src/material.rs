use cozy_chess::{BitBoard, Board, Color, Piece};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;
const DARK_SQUARES_MASK: u64 = !LIGHT_SQUARES_MASK;

/// Check if a specific color lacks the material to ever deliver checkmate.
///
/// A lone knight only fails to mate when the defender has nothing but king and queens
/// to block with. Bishops fail when every bishop on the board shares one square color
/// and there are no pawns or knights to help.
pub fn side_has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.colors(color);
    let theirs = board.colors(!color);

    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !(ours & heavy).is_empty() {
        return false;
    }

    let knights = board.pieces(Piece::Knight);
    if !(ours & knights).is_empty() {
        let blockers = theirs & !board.pieces(Piece::King) & !board.pieces(Piece::Queen);
        return ours.len() <= 2 && blockers.is_empty();
    }

    let bishops = board.pieces(Piece::Bishop);
    if !(ours & bishops).is_empty() {
        let same_color = (bishops & BitBoard(LIGHT_SQUARES_MASK)).is_empty()
            || (bishops & BitBoard(DARK_SQUARES_MASK)).is_empty();
        return same_color && board.pieces(Piece::Pawn).is_empty() && knights.is_empty();
    }

    true
}

/// Neither side can possibly checkmate.
pub fn has_insufficient_material(board: &Board) -> bool {
    side_has_insufficient_material(board, Color::White)
        && side_has_insufficient_material(board, Color::Black)
}
