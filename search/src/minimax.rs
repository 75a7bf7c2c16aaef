use cozy_chess::Color;
use evaluation::Evaluator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use utils::Position;

use crate::engine::{SearchEngine, SearchResult};

/// Plain alpha-beta minimax. Moves are shuffled at every node so that equally scored
/// moves are picked at random.
pub struct AlphaBetaMinimax {
    evaluator: Evaluator,
    rng: StdRng,
    nodes: u64,
}

impl Default for AlphaBetaMinimax {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl AlphaBetaMinimax {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move shuffling.
    pub fn with_seed(evaluator: Evaluator, seed: u64) -> Self {
        Self {
            evaluator,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    fn alpha_beta(
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

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            unreachable!("no legal moves in a position that is not game over: {}", position.fen());
        }
        moves.shuffle(&mut self.rng);

        let mut best_move = None;

        if side == Color::White {
            let mut best_score = f32::NEG_INFINITY;
            for mv in moves {
                position.push(mv);
                let score = self.alpha_beta(position, !side, depth - 1, alpha, beta).score;
                position.pop();

                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                    alpha = alpha.max(best_score);
                }
                if beta <= alpha {
                    break;
                }
            }
            SearchResult {
                best_move,
                score: best_score,
            }
        } else {
            let mut best_score = f32::INFINITY;
            for mv in moves {
                position.push(mv);
                let score = self.alpha_beta(position, !side, depth - 1, alpha, beta).score;
                position.pop();

                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                    beta = beta.min(best_score);
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
}

impl SearchEngine for AlphaBetaMinimax {
    fn name(&self) -> &'static str {
        "minimax"
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
        let result = self.alpha_beta(position, side, depth, alpha, beta);

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
