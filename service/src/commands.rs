use agents::AgentKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Reset the board, optionally switching agent.
    NewGame { agent: Option<AgentKind> },
    /// A move from the human player, in UCI notation.
    Move {
        mv: String,
        agent: Option<AgentKind>,
    },
    /// Ask the current agent to move.
    BotMove { agent: Option<AgentKind> },
    LegalMoves,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Board {
        board: String,
    },
    Moved {
        board: String,
        #[serde(rename = "move")]
        mv: String,
        game_over: bool,
        result: Option<String>,
    },
    BotMoved {
        board: String,
        game_over: bool,
        result: Option<String>,
    },
    LegalMoves {
        legal_moves: Vec<String>,
    },
    Error {
        error: String,
        board: String,
    },
}
