use cozy_chess::util::{display_uci_move, parse_uci_move};
use cozy_chess::{BitBoard, Board, Color, FenParseError, Move, MoveParseError, Piece};

use crate::material::has_insufficient_material;
use crate::moves::{collect_legal_moves, has_legal_moves, is_capture, MoveList};
use crate::outcome::{Outcome, Termination};

const SEVENTY_FIVE_MOVES_PLIES: u16 = 150;
const FIVEFOLD: usize = 5;

/// A game in progress: the current board plus everything needed to take moves back.
///
/// `push` and `pop` must be paired. Every `pop` restores the exact board, hash and
/// halfmove clock that existed before the matching `push`, so a single instance can be
/// threaded by `&mut` through a whole search tree.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    undo_stack: Vec<Board>,
    // One entry per position in the game, including the current one.
    hashes: Vec<u64>,
    // cozy-chess caps its own clock at 100 plies; the 75-move rule needs more.
    halfmove_clocks: Vec<u16>,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            hashes: vec![board.hash()],
            halfmove_clocks: vec![board.halfmove_clock() as u16],
            board,
            undo_stack: Vec::with_capacity(256),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        Ok(Self::from_board(fen.parse()?))
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Plies played since this position was created.
    #[inline(always)]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clocks[self.halfmove_clocks.len() - 1]
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        self.board.colored_pieces(color, piece)
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn legal_moves(&self) -> MoveList {
        collect_legal_moves(&self.board)
    }

    #[inline(always)]
    pub fn has_legal_moves(&self) -> bool {
        has_legal_moves(&self.board)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Plays a legal move. Panics if `mv` is illegal; validate external input first.
    pub fn push(&mut self, mv: Move) {
        let resets_clock = is_capture(&self.board, mv) || self.board.piece_on(mv.from) == Some(Piece::Pawn);
        let clock = if resets_clock { 0 } else { self.halfmove_clock() + 1 };

        let previous = self.board.clone();
        self.board.play(mv);

        self.undo_stack.push(previous);
        self.hashes.push(self.board.hash());
        self.halfmove_clocks.push(clock);
    }

    /// Takes back the last pushed move.
    pub fn pop(&mut self) {
        let previous = self
            .undo_stack
            .pop()
            .expect("pop called without a matching push");
        self.board = previous;
        self.hashes.pop();
        self.halfmove_clocks.pop();
    }

    pub fn parse_uci(&self, text: &str) -> Result<Move, MoveParseError> {
        parse_uci_move(&self.board, text)
    }

    /// Standard UCI text for a move in this position (castling as `e1g1`).
    pub fn format_uci(&self, mv: Move) -> String {
        display_uci_move(&self.board, mv).to_string()
    }

    #[inline(always)]
    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !has_legal_moves(&self.board)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_moves(&self.board)
    }

    pub fn is_insufficient_material(&self) -> bool {
        has_insufficient_material(&self.board)
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock() >= SEVENTY_FIVE_MOVES_PLIES && has_legal_moves(&self.board)
    }

    /// The current position has occurred five times since the last capture or pawn move.
    pub fn is_fivefold_repetition(&self) -> bool {
        let current = self.hash();
        let window = self.halfmove_clock() as usize + 1;
        self.hashes
            .iter()
            .rev()
            .take(window)
            .filter(|&&hash| hash == current)
            .count()
            >= FIVEFOLD
    }

    /// Ends the game without any claim: checkmate, insufficient material, stalemate,
    /// the 75-move rule or fivefold repetition, checked in that order.
    pub fn outcome(&self) -> Option<Outcome> {
        let has_moves = has_legal_moves(&self.board);

        if !has_moves && self.is_check() {
            return Some(Outcome::decisive(!self.side_to_move()));
        }
        if self.is_insufficient_material() {
            return Some(Outcome::draw(Termination::InsufficientMaterial));
        }
        if !has_moves {
            return Some(Outcome::draw(Termination::Stalemate));
        }
        if self.halfmove_clock() >= SEVENTY_FIVE_MOVES_PLIES {
            return Some(Outcome::draw(Termination::SeventyFiveMoves));
        }
        if self.is_fivefold_repetition() {
            return Some(Outcome::draw(Termination::FivefoldRepetition));
        }
        None
    }

    #[inline(always)]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}
