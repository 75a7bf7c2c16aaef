use agents::AgentKind;

use super::commands::Request;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> Request {
        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            return Request::Unknown(input.to_string());
        };

        match command {
            "new" => Request::NewGame {
                agent: decode_agent(words.next()),
            },
            "move" => match words.next() {
                Some(mv) => Request::Move {
                    mv: mv.to_string(),
                    agent: decode_agent(words.next()),
                },
                None => Request::Unknown(input.to_string()),
            },
            "bot" => Request::BotMove {
                agent: decode_agent(words.next()),
            },
            "legal" => Request::LegalMoves,
            "quit" => Request::Quit,

            _ => Request::Unknown(input.to_string()),
        }
    }
}

// Unknown names keep the current agent.
fn decode_agent(word: Option<&str>) -> Option<AgentKind> {
    let word = word?;
    match word.parse() {
        Ok(kind) => Some(kind),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}
