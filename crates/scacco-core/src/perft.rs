//! Perft (performance test) for move generation correctness verification.

use crate::game::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves (bulk-counting optimization: no recursive apply). Deeper
/// counts apply each move and undo it afterwards, so every perft run also
/// exercises the apply/undo round trip; the game is returned to its
/// starting state.
pub fn perft(game: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        game.apply(mv);
        nodes += perft(game, depth - 1);
        game.undo();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(origin-destination, node_count)` pairs sorted
/// alphabetically.
pub fn divide(game: &mut GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                game.apply(mv);
                let nodes = perft(game, depth - 1);
                game.undo();
                nodes
            };
            (format!("{}{}", mv.source(), mv.dest()), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
