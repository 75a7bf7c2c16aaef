use super::commands::Response;

pub struct Encoder {}

impl Encoder {
    /// One JSON object per line.
    pub fn encode(&self, response: &Response) -> String {
        serde_json::to_string(response).unwrap_or_else(|e| {
            log::error!("Failed to encode {:?}: {}", response, e);
            format!("{{\"error\":\"{}\"}}", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board() {
        let response = Response::Board {
            board: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        };
        assert_eq!(
            Encoder {}.encode(&response),
            r#"{"board":"8/8/8/8/8/8/8/8 w - - 0 1"}"#
        );
    }

    #[test]
    fn test_moved_uses_move_key() {
        let response = Response::Moved {
            board: "fen".to_string(),
            mv: "e2e4".to_string(),
            game_over: false,
            result: None,
        };
        assert_eq!(
            Encoder {}.encode(&response),
            r#"{"board":"fen","move":"e2e4","game_over":false,"result":null}"#
        );
    }

    #[test]
    fn test_finished_game() {
        let response = Response::BotMoved {
            board: "fen".to_string(),
            game_over: true,
            result: Some("0-1".to_string()),
        };
        assert_eq!(
            Encoder {}.encode(&response),
            r#"{"board":"fen","game_over":true,"result":"0-1"}"#
        );
    }

    #[test]
    fn test_legal_moves_and_error() {
        let legal = Response::LegalMoves {
            legal_moves: vec!["a2a3".to_string(), "a2a4".to_string()],
        };
        assert_eq!(
            Encoder {}.encode(&legal),
            r#"{"legal_moves":["a2a3","a2a4"]}"#
        );

        let error = Response::Error {
            error: "Illegal move".to_string(),
            board: "fen".to_string(),
        };
        assert_eq!(
            Encoder {}.encode(&error),
            r#"{"error":"Illegal move","board":"fen"}"#
        );
    }
}
