// Score bounds and special values for the search.
pub const POS_INFINITY: f32 = f32::INFINITY;
pub const NEG_INFINITY: f32 = f32::NEG_INFINITY;

/// Reserved magnitude for a checkmate. Dominates any material or positional score.
pub const MATE_SCORE: f32 = 500.0;
