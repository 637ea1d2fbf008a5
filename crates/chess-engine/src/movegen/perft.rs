//! Leaf counting over the legal move tree.
//!
//! The counts are compared against published reference numbers to find
//! move generation bugs; `perft_divide` narrows a mismatch to a root move.

use super::make_move;
use crate::Position;

/// Counts the leaves of the legal move tree `depth` plies below `position`.
///
/// The last ply is not played out: the legal move count is used directly.
pub fn perft(position: &Position, depth: u32) -> u64 {
    let moves = position.legal_moves();
    match depth {
        0 => 1,
        1 => moves.len() as u64,
        _ => moves
            .iter()
            .map(|&m| perft(&make_move(position, m), depth - 1))
            .sum(),
    }
}

/// Leaf counts below each root move, as `(uci, nodes)` sorted by move text.
///
/// A root move counts as a single leaf at depth 1 or less.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .legal_moves()
        .iter()
        .map(|&m| {
            let nodes = perft(&make_move(position, m), depth.saturating_sub(1));
            tracing::trace!(mv = %m, nodes, "divide");
            (m.to_uci(), nodes)
        })
        .collect();
    results.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    results
}
