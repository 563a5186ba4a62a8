//! Grid2048 Demo Runner
//!
//! Auto-plays one seeded session with a fixed corner strategy, then
//! replays the recorded moves to verify determinism.
//!
//! Usage: `grid2048 [config.json]`

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use grid2048::{
    Direction, EngineConfig, GameEventData, GameState, VERSION, replay_session, step,
};

/// Corner strategy: first legal direction in this order wins.
const PREFERENCE: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Grid2048 Engine v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => EngineConfig::default(),
    };
    config.validate().context("Invalid configuration")?;

    info!(
        "Board {}x{}, seed {}, move cap {}",
        config.board_size, config.board_size, config.seed, config.max_moves
    );

    demo_session(&config)
}

/// Play one session to the end (or the move cap) and verify it by replay.
fn demo_session(config: &EngineConfig) -> Result<()> {
    info!("=== Starting Demo Session ===");

    let mut state = config.new_session()?;
    let mut history: Vec<Direction> = Vec::new();

    while !state.terminal && state.moves < config.max_moves {
        let Some(direction) = choose_direction(&state) else {
            break;
        };

        let (next, result) = step(&state, direction);
        history.push(direction);

        for event in result.events.iter().filter(|e| e.is_milestone()) {
            match &event.data {
                GameEventData::TargetReached { tile } => {
                    info!("Reached {} after {} moves", tile, event.moves);
                }
                GameEventData::GameOver { score, highest_tile } => {
                    info!("Game over: score {}, highest tile {}", score, highest_tile);
                }
                _ => {}
            }
        }

        if next.moves % 100 == 0 && next.moves != state.moves {
            info!(
                "Move {}: score {}, highest tile {}, {} empty",
                next.moves,
                next.score,
                next.highest_tile(),
                next.grid.empty_cells().len()
            );
        }

        state = next;
    }

    if !state.terminal {
        warn!("Stopped at move cap {} before the game ended", config.max_moves);
    }

    info!("=== Session Results ===");
    println!("{}", state.grid);
    info!(
        "Score: {}  Moves: {}  Highest: {}  Won: {}",
        state.score,
        state.moves,
        state.highest_tile(),
        state.victory
    );

    let hash = state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));
    debug!("Final snapshot: {}", serde_json::to_string(&state)?);

    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay_session(config.board_size, config.seed, &history);
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
        Ok(())
    } else {
        anyhow::bail!("DETERMINISM FAILURE: Hashes differ!")
    }
}

fn choose_direction(state: &GameState) -> Option<Direction> {
    let legal = state.legal_directions();
    PREFERENCE.into_iter().find(|dir| legal.contains(dir))
}
