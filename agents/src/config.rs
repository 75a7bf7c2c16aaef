use std::path::PathBuf;
use std::sync::Arc;

use book::{BookError, OpeningBook};
use evaluation::Evaluator;

pub const DEFAULT_DEPTH: u8 = 3;
pub const DEFAULT_BOOK: &str = "gm2001.bin";

/// Parameters shared by every agent built from one configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub depth: u8,
    pub evaluator: Evaluator,
    /// Polyglot book consulted before searching. `None` plays without a book.
    pub book_path: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluator: Evaluator::default(),
            book_path: Some(PathBuf::from(DEFAULT_BOOK)),
        }
    }
}

impl AgentConfig {
    pub fn without_book(self) -> Self {
        Self {
            book_path: None,
            ..self
        }
    }

    pub fn with_depth(self, depth: u8) -> Self {
        Self { depth, ..self }
    }

    pub fn load_book(&self) -> Result<Arc<OpeningBook>, BookError> {
        match &self.book_path {
            Some(path) => Ok(Arc::new(OpeningBook::load(path)?)),
            None => Ok(Arc::new(OpeningBook::empty())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!(config.book_path, Some(PathBuf::from("gm2001.bin")));
        assert_eq!(config.evaluator, Evaluator::new(1.0, 6.0));
    }

    #[test]
    fn test_without_book_loads_empty() {
        let book = AgentConfig::default().without_book().load_book().unwrap();
        assert!(book.is_empty());
    }
}
