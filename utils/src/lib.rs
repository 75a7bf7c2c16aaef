pub mod material;
pub mod moves;
mod outcome;
mod position;

pub use moves::{is_capture, is_en_passant, MoveList, MAX_MOVES};
pub use outcome::{Outcome, Termination};
pub use position::Position;
