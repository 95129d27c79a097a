//! Breakout headless runner
//!
//! Drives the simulation at its fixed rate without a window, optionally
//! steering the paddle under the ball, and prints a JSON summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use breakout::sim::{GameEvent, GamePhase, GameState, TickInput};
use breakout::{FixedStepDriver, GameConfig};

#[derive(Debug, Parser)]
#[command(name = "breakout", about = "Run the Breakout simulation headless")]
struct Args {
    /// RNG seed for serve directions after a reset
    #[arg(long, default_value_t = 0xB1E4_0A7)]
    seed: u64,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,

    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the paddle centered under the ball
    #[arg(long)]
    autopilot: bool,
}

/// End-of-run report
#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    collisions: u64,
    bricks_destroyed: u64,
    restarts: u64,
    level_complete: bool,
    final_score: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    // One nominal tick of wall time per frame
    let mut driver = FixedStepDriver::new(config.dt());
    let frame_time = driver.dt();

    let mut state = GameState::new(config, args.seed);
    let mut summary = Summary {
        seed: args.seed,
        ..Default::default()
    };

    for _ in 0..args.ticks {
        let input = TickInput {
            pointer_x: args.autopilot.then_some(state.ball.pos.x),
            // Serve again after every reset
            start: state.phase == GamePhase::NotStarted,
            ..Default::default()
        };
        let hits = driver.advance(&mut state, frame_time, &input);
        summary.collisions += hits.len() as u64;

        for event in state.drain_events() {
            match event {
                GameEvent::BrickDestroyed { .. } => summary.bricks_destroyed += 1,
                GameEvent::Restarted { .. } => summary.restarts += 1,
                GameEvent::LevelComplete => summary.level_complete = true,
                GameEvent::CollisionChanged(kind) => log::trace!("Last thing collided: {}", kind),
                _ => {}
            }
        }
        if summary.level_complete {
            break;
        }
    }
    summary.ticks = state.time_ticks;
    summary.final_score = state.score;

    let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
    println!("{}", json);
    Ok(())
}
