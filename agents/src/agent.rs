use std::sync::Arc;

use book::OpeningBook;
use cozy_chess::{Color, Move};
use evaluation::{material_count, Evaluator};
use rand::seq::SliceRandom;
use search::{AlphaBetaMinimax, ScoutPvs, SearchEngine};
use thiserror::Error;
use utils::Position;

use crate::config::AgentConfig;
use crate::greedy::greediest;
use crate::kind::AgentKind;

/// Below this much material on the board the searching agents look deeper.
pub const ENDGAME_MATERIAL_THRESHOLD: f32 = 15.0;
pub const ENDGAME_DEPTH_EXTENSION: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("no legal moves in {0}")]
    NoLegalMoves(String),
    #[error("search found no move, the game is already over in {0}")]
    GameOver(String),
}

enum Policy {
    Random,
    Greedy,
    Minimax(AlphaBetaMinimax),
    Scout(ScoutPvs),
}

/// A player for one side of the board.
pub struct Agent {
    side: Color,
    depth: u8,
    book: Arc<OpeningBook>,
    policy: Policy,
}

impl Agent {
    pub fn random(side: Color) -> Self {
        Self {
            side,
            depth: 0,
            book: Arc::new(OpeningBook::empty()),
            policy: Policy::Random,
        }
    }

    pub fn greedy(side: Color, book: Arc<OpeningBook>) -> Self {
        Self {
            side,
            depth: 0,
            book,
            policy: Policy::Greedy,
        }
    }

    pub fn minimax(side: Color, depth: u8, evaluator: Evaluator, book: Arc<OpeningBook>) -> Self {
        Self {
            side,
            depth,
            book,
            policy: Policy::Minimax(AlphaBetaMinimax::new(evaluator)),
        }
    }

    pub fn scout(side: Color, depth: u8, evaluator: Evaluator, book: Arc<OpeningBook>) -> Self {
        Self {
            side,
            depth,
            book,
            policy: Policy::Scout(ScoutPvs::new(evaluator)),
        }
    }

    pub fn from_kind(
        kind: AgentKind,
        side: Color,
        config: &AgentConfig,
        book: Arc<OpeningBook>,
    ) -> Self {
        match kind {
            AgentKind::Random => Self::random(side),
            AgentKind::Greedy => Self::greedy(side, book),
            AgentKind::Minimax => Self::minimax(side, config.depth, config.evaluator, book),
            AgentKind::Scout => Self::scout(side, config.depth, config.evaluator, book),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self.policy {
            Policy::Random => AgentKind::Random,
            Policy::Greedy => AgentKind::Greedy,
            Policy::Minimax(_) => AgentKind::Minimax,
            Policy::Scout(_) => AgentKind::Scout,
        }
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search depth for `position`, extended once material runs low.
    pub fn search_depth(&self, position: &Position) -> u8 {
        if material_count(position) < ENDGAME_MATERIAL_THRESHOLD {
            self.depth.saturating_add(ENDGAME_DEPTH_EXTENSION)
        } else {
            self.depth
        }
    }

    /// Decides on a move without playing it. `position` is restored before returning.
    pub fn choose_move(&mut self, position: &mut Position) -> Result<Move, AgentError> {
        let legal = position.legal_moves();
        if legal.is_empty() {
            return Err(AgentError::NoLegalMoves(position.fen()));
        }

        if !matches!(self.policy, Policy::Random) {
            if let Some(mv) = self.book.weighted_choice(position) {
                log::debug!(
                    "{} ({:?}) book move {}",
                    self.kind(),
                    self.side,
                    position.format_uci(mv)
                );
                return Ok(mv);
            }
        }

        let depth = self.search_depth(position);
        let side = self.side;
        let kind = self.kind();
        let result = match &mut self.policy {
            Policy::Random => {
                let mv = random_move(position, &legal)?;
                log::debug!("{} ({:?}) chose {}", kind, side, position.format_uci(mv));
                return Ok(mv);
            }
            Policy::Greedy => {
                let mv = match greediest(position.board(), &legal) {
                    Some(mv) => mv,
                    None => random_move(position, &legal)?,
                };
                log::debug!("{} ({:?}) chose {}", kind, side, position.format_uci(mv));
                return Ok(mv);
            }
            Policy::Minimax(engine) => engine.search_root(position, side, depth),
            Policy::Scout(engine) => engine.search_root(position, side, depth),
        };

        let mv = result
            .best_move
            .ok_or_else(|| AgentError::GameOver(position.fen()))?;
        log::debug!(
            "{} ({:?}) searched depth {} and chose {} with score {:.3}",
            kind,
            side,
            depth,
            position.format_uci(mv),
            result.score
        );
        Ok(mv)
    }

    /// Chooses a move and plays it on `position`.
    pub fn play(&mut self, position: &mut Position) -> Result<Move, AgentError> {
        let mv = self.choose_move(position)?;
        position.push(mv);
        Ok(mv)
    }
}

fn random_move(position: &Position, legal: &[Move]) -> Result<Move, AgentError> {
    legal
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or_else(|| AgentError::NoLegalMoves(position.fen()))
}
