use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, EnPassantMode};
use utils::Position;

/// Polyglot Zobrist key of a position.
///
/// cozy-chess hashes with its own keys, so the position goes through FEN into shakmaty,
/// whose 64-bit Zobrist hash uses the Polyglot random table.
pub fn polyglot_key(position: &Position) -> Option<u64> {
    let fen: Fen = position.fen().parse().ok()?;
    let pos: Chess = fen.into_position(CastlingMode::Standard).ok()?;
    Some(pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0)
}
