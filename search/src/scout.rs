use cozy_chess::Color;
use evaluation::Evaluator;
use utils::Position;

use crate::engine::{SearchEngine, SearchResult};
use crate::move_ordering::order_moves;

/// Principal variation search.
///
/// Moves are ordered by the material balance they leave behind. The first move gets the
/// full window; every later one is probed with a window of width one and only searched
/// again with the full window when the probe lands strictly inside `(alpha, beta)`.
///
/// No transposition table is kept; every node is searched from scratch.
pub struct ScoutPvs {
    evaluator: Evaluator,
    nodes: u64,
}

impl Default for ScoutPvs {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl ScoutPvs {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Window used to probe every move after the first.
    #[inline(always)]
    fn null_window(alpha: f32, beta: f32) -> (f32, f32) {
        if alpha.is_finite() {
            (alpha, alpha + 1.0)
        } else if beta.is_finite() {
            (beta - 1.0, beta)
        } else {
            (alpha, beta)
        }
    }

    fn scout(
        &mut self,
        position: &mut Position,
        side: Color,
        depth: u8,
        mut alpha: f32,
        mut beta: f32,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || position.is_game_over() {
            return SearchResult::leaf(self.evaluator.heuristic(position, side));
        }

        let ordered = order_moves(position, side);
        if ordered.is_empty() {
            unreachable!("no legal moves in a position that is not game over: {}", position.fen());
        }

        let mut best_move = None;
        let mut best_score = match side {
            Color::White => f32::NEG_INFINITY,
            Color::Black => f32::INFINITY,
        };

        for (mv, _) in ordered {
            position.push(mv);
            let score = if best_move.is_none() {
                self.scout(position, !side, depth - 1, alpha, beta).score
            } else {
                let (lower, upper) = Self::null_window(alpha, beta);
                let probe = self.scout(position, !side, depth - 1, lower, upper).score;
                if alpha < probe && probe < beta {
                    self.scout(position, !side, depth - 1, alpha, beta).score
                } else {
                    probe
                }
            };
            position.pop();

            match side {
                Color::White if score > best_score => {
                    best_score = score;
                    best_move = Some(mv);
                    alpha = alpha.max(score);
                }
                Color::Black if score < best_score => {
                    best_score = score;
                    best_move = Some(mv);
                    beta = beta.min(score);
                }
                _ => {}
            }

            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }
}

impl SearchEngine for ScoutPvs {
    fn name(&self) -> &'static str {
        "scout"
    }

    fn search(
        &mut self,
        position: &mut Position,
        side: Color,
        depth: u8,
        alpha: f32,
        beta: f32,
    ) -> SearchResult {
        self.nodes = 0;
        let result = self.scout(position, side, depth, alpha, beta);

        log::debug!(
            "{} depth {} score {:.3} nodes {}",
            self.name(),
            depth,
            result.score,
            self.nodes
        );
        result
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
