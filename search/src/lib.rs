mod engine;
mod minimax;
mod move_ordering;
mod scout;

pub use engine::{SearchEngine, SearchResult};
pub use minimax::AlphaBetaMinimax;
pub use move_ordering::order_moves;
pub use scout::ScoutPvs;
