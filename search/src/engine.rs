use cozy_chess::{Color, Move};
use evaluation::scores::{NEG_INFINITY, POS_INFINITY};
use utils::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` only when the searched node was a leaf.
    pub best_move: Option<Move>,
    pub score: f32,
}

impl SearchResult {
    #[inline(always)]
    pub fn leaf(score: f32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Depth-limited game-tree search. White maximizes, Black minimizes.
///
/// `position` is mutated during the search but always handed back in the state it was
/// received in.
pub trait SearchEngine {
    fn name(&self) -> &'static str;

    fn search(
        &mut self,
        position: &mut Position,
        side: Color,
        depth: u8,
        alpha: f32,
        beta: f32,
    ) -> SearchResult;

    /// Nodes visited by the last call to `search`.
    fn nodes(&self) -> u64;

    fn search_root(&mut self, position: &mut Position, side: Color, depth: u8) -> SearchResult {
        self.search(position, side, depth, NEG_INFINITY, POS_INFINITY)
    }
}
