use std::sync::Arc;

use agents::{Agent, AgentError, AgentKind};
use ahash::AHashMap;
use book::OpeningBook;
use cozy_chess::{Color, Move};
use evaluation::Evaluator;
use thiserror::Error;
use utils::Position;

use crate::commands::{Request, Response};

pub const MINIMAX_DEPTH: u8 = 3;
pub const SCOUT_DEPTH: u8 = 4;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Illegal move")]
    IllegalMove(String),
    #[error("Invalid move: {0}")]
    InvalidMove(String),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// One game against the computer. Each client gets its own session.
pub struct GameSession {
    position: Position,
    agents: AHashMap<AgentKind, Agent>,
    current: AgentKind,
}

impl GameSession {
    pub fn new(evaluator: Evaluator, book: Arc<OpeningBook>) -> Self {
        let mut agents = AHashMap::new();
        agents.insert(AgentKind::Random, Agent::random(Color::Black));
        agents.insert(AgentKind::Greedy, Agent::greedy(Color::Black, book.clone()));
        agents.insert(
            AgentKind::Minimax,
            Agent::minimax(Color::Black, MINIMAX_DEPTH, evaluator, book.clone()),
        );
        agents.insert(
            AgentKind::Scout,
            Agent::scout(Color::Black, SCOUT_DEPTH, evaluator, book),
        );

        Self {
            position: Position::new(),
            agents,
            current: AgentKind::Scout,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn current_agent(&self) -> AgentKind {
        self.current
    }

    fn select_agent(&mut self, agent: Option<AgentKind>) {
        if let Some(kind) = agent {
            if kind != self.current {
                log::debug!("Switching agent from {} to {}", self.current, kind);
            }
            self.current = kind;
        }
    }

    fn result(&self) -> Option<String> {
        self.position
            .outcome()
            .map(|outcome| outcome.result().to_string())
    }

    pub fn new_game(&mut self, agent: Option<AgentKind>) -> Response {
        self.select_agent(agent);
        self.position = Position::new();
        Response::Board {
            board: self.position.fen(),
        }
    }

    /// Plays the human's move. The position is untouched unless the move is legal.
    pub fn submit_move(
        &mut self,
        text: &str,
        agent: Option<AgentKind>,
    ) -> Result<Response, SessionError> {
        self.select_agent(agent);

        let legal = self
            .position
            .legal_moves()
            .into_iter()
            .find(|&mv| self.position.format_uci(mv) == text);
        let Some(mv) = legal else {
            return Err(match text.parse::<Move>() {
                Ok(_) => SessionError::IllegalMove(text.to_string()),
                Err(e) => SessionError::InvalidMove(format!("{} ({:?})", text, e)),
            });
        };

        self.position.push(mv);
        let result = self.result();
        Ok(Response::Moved {
            board: self.position.fen(),
            mv: text.to_string(),
            game_over: result.is_some(),
            result,
        })
    }

    /// The current agent moves for whichever side is to move, unless the game is over.
    pub fn bot_move(&mut self, agent: Option<AgentKind>) -> Result<Response, SessionError> {
        self.select_agent(agent);

        if !self.position.is_game_over() {
            let side = self.position.side_to_move();
            if let Some(agent) = self.agents.get_mut(&self.current) {
                agent.set_side(side);
                agent.play(&mut self.position)?;
            }
        }

        let result = self.result();
        Ok(Response::BotMoved {
            board: self.position.fen(),
            game_over: result.is_some(),
            result,
        })
    }

    pub fn legal_moves(&self) -> Vec<String> {
        self.position
            .legal_moves()
            .into_iter()
            .map(|mv| self.position.format_uci(mv))
            .collect()
    }

    pub fn handle(&mut self, request: &Request) -> Option<Response> {
        let response = match request {
            Request::NewGame { agent } => Ok(self.new_game(*agent)),
            Request::Move { mv, agent } => self.submit_move(mv, *agent),
            Request::BotMove { agent } => self.bot_move(*agent),
            Request::LegalMoves => Ok(Response::LegalMoves {
                legal_moves: self.legal_moves(),
            }),
            Request::Quit => return None,
            Request::Unknown(line) => {
                log::debug!("Unknown command: {}", line);
                return None;
            }
        };

        Some(response.unwrap_or_else(|e| {
            log::debug!("Request failed: {}", e);
            Response::Error {
                error: e.to_string(),
                board: self.position.fen(),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Evaluator::default(), Arc::new(OpeningBook::empty()))
    }

    #[test]
    fn test_new_game() {
        let mut session = session();
        let response = session.handle(&Request::NewGame {
            agent: Some(AgentKind::Greedy),
        });
        assert_eq!(
            response,
            Some(Response::Board {
                board: Position::new().fen()
            })
        );
        assert_eq!(session.current_agent(), AgentKind::Greedy);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut session = session();
        let before = session.position().fen();

        let response = session.handle(&Request::Move {
            mv: "e2e5".to_string(),
            agent: None,
        });
        assert_eq!(
            response,
            Some(Response::Error {
                error: "Illegal move".to_string(),
                board: before.clone(),
            })
        );
        assert_eq!(session.position().fen(), before);
        assert_eq!(session.position().ply(), 0);

        let garbage = session.handle(&Request::Move {
            mv: "zz".to_string(),
            agent: None,
        });
        assert!(matches!(garbage, Some(Response::Error { .. })));
        assert_eq!(session.position().ply(), 0);
    }

    #[test]
    fn test_move_then_bot() {
        let mut session = session();
        let response = session.submit_move("e2e4", Some(AgentKind::Random)).unwrap();
        match response {
            Response::Moved {
                mv,
                game_over,
                result,
                ..
            } => {
                assert_eq!(mv, "e2e4");
                assert!(!game_over);
                assert_eq!(result, None);
            }
            other => panic!("unexpected response {:?}", other),
        }

        session.bot_move(None).unwrap();
        assert_eq!(session.position().ply(), 2);
        assert_eq!(session.position().side_to_move(), Color::White);
    }

    #[test]
    fn test_bot_plays_side_to_move() {
        let mut session = session();
        session.bot_move(Some(AgentKind::Greedy)).unwrap();
        assert_eq!(session.position().ply(), 1);
        assert_eq!(session.position().side_to_move(), Color::Black);
    }

    #[test]
    fn test_game_over_reports_result() {
        let mut session = session();
        for mv in ["f2f3", "e7e5", "g2g4"] {
            session.submit_move(mv, None).unwrap();
        }
        let response = session.submit_move("d8h4", None).unwrap();
        assert_eq!(
            response,
            Response::Moved {
                board: session.position().fen(),
                mv: "d8h4".to_string(),
                game_over: true,
                result: Some("0-1".to_string()),
            }
        );

        // The bot has nothing to do once the game is over
        let response = session.bot_move(None).unwrap();
        assert!(matches!(response, Response::BotMoved { game_over: true, .. }));
        assert_eq!(session.position().ply(), 4);
    }

    #[test]
    fn test_legal_moves_use_standard_castling() {
        let mut session = session();
        for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
            session.submit_move(mv, None).unwrap();
        }
        let legal = session.legal_moves();
        assert!(legal.contains(&"e1g1".to_string()));
        assert!(!legal.contains(&"e1h1".to_string()));

        session.submit_move("e1g1", None).unwrap();
        assert_eq!(session.position().ply(), 7);
    }

    #[test]
    fn test_quit_and_unknown_have_no_response() {
        let mut session = session();
        assert_eq!(session.handle(&Request::Quit), None);
        assert_eq!(session.handle(&Request::Unknown("hello".to_string())), None);
    }
}
