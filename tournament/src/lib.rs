mod arena;
mod outcome;
mod summary;
mod viewer;

pub use arena::{Arena, NoProgress, Progress};
pub use outcome::GameOutcome;
pub use summary::GameStatistics;
pub use viewer::{render_board, TerminalViewer, Viewer};
