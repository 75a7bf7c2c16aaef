mod evaluator;
pub mod piece_values;
pub mod pst;
pub mod scores;

pub use evaluator::Evaluator;
pub use piece_values::{material_balance, material_count, piece_weight};
pub use pst::positional_score;
