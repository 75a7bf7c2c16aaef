use cozy_chess::{Color, Move};
use evaluation::material_balance;
use utils::Position;

/// Legal moves paired with the material balance one ply later, best first for `side`.
///
/// White sorts descending, Black ascending. The sort is stable so equal balances keep
/// generation order.
pub fn order_moves(position: &mut Position, side: Color) -> Vec<(Move, f32)> {
    let mut scored: Vec<(Move, f32)> = position
        .legal_moves()
        .into_iter()
        .map(|mv| {
            position.push(mv);
            let balance = material_balance(position);
            position.pop();
            (mv, balance)
        })
        .collect();

    match side {
        Color::White => scored.sort_by(|a, b| b.1.total_cmp(&a.1)),
        Color::Black => scored.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }
    scored
}
