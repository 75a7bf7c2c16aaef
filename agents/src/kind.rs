use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Random,
    Greedy,
    Minimax,
    Scout,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Random,
        AgentKind::Greedy,
        AgentKind::Minimax,
        AgentKind::Scout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Greedy => "greedy",
            AgentKind::Minimax => "minimax",
            AgentKind::Scout => "scout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent '{0}', expected one of: random, greedy, minimax, scout")]
pub struct ParseAgentKindError(pub String);

impl FromStr for AgentKind {
    type Err = ParseAgentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAgentKindError(s.to_string()))
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in AgentKind::ALL {
            assert_eq!(kind.to_string().parse::<AgentKind>(), Ok(kind));
        }
        assert_eq!("Scout".parse::<AgentKind>(), Ok(AgentKind::Scout));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "stockfish".parse::<AgentKind>().unwrap_err();
        assert_eq!(err, ParseAgentKindError("stockfish".to_string()));
    }
}
