//! Perft (performance test) for move generation correctness verification.

use crate::game::Game;

/// Count the number of leaf nodes at the given depth, from the side to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.all_legal_moves(game.turn());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = game.clone();
        child.commit(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown.
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .all_legal_moves(game.turn())
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            child.commit(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
