use anyhow::{Context, Result};
use tracing::info;

use scacco_core::{GameState, perft};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let max_depth: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("depth must be a number")?,
        None => 4,
    };

    let mut game = GameState::new();
    for depth in 1..=max_depth {
        let nodes = perft(&mut game, depth);
        info!(depth, nodes, "perft");
    }
    Ok(())
}
