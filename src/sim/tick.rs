//! Fixed timestep simulation tick
//!
//! Each tick moves the ball along its heading. If the new position collides,
//! the heading is reflected, the move is rolled back, and the ball is moved
//! again from where it started using the new heading.

use glam::Vec2;

use super::collision::{Collision, Wall, detect};
use super::reflect::{paddle_offset, paddle_reflection, reflect_direction};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::DISPLACEMENT_TOLERANCE;
use crate::heading_to_unit;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x position; the paddle centers on it
    pub pointer_x: Option<f32>,
    /// Start the game (click)
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Ball movement for one tick
#[inline]
pub fn displacement(direction: f32, speed: f32, dt: f32) -> Vec2 {
    heading_to_unit(direction) * speed * dt
}

/// A tick never moves the ball farther than `speed * dt` (plus rounding)
#[inline]
pub fn within_displacement_bound(delta: Vec2, speed: f32, dt: f32) -> bool {
    delta.length() <= speed * dt + DISPLACEMENT_TOLERANCE
}

/// Advance the game state by one fixed timestep.
///
/// Returns the collision resolved during this tick, if any.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<Collision> {
    apply_commands(state, input);

    if state.phase != GamePhase::Running {
        return None;
    }

    // Bricks may have been removed outside the engine
    complete_level_if_cleared(state);
    if state.phase != GamePhase::Running {
        return None;
    }

    state.time_ticks += 1;
    step_ball(state, dt)
}

/// Apply pointer and lifecycle commands without advancing time
pub fn apply_commands(state: &mut GameState, input: &TickInput) {
    if let Some(x) = input.pointer_x {
        state.set_paddle_x(x);
    }

    if input.start {
        if let Err(e) = state.start() {
            log::warn!("Start ignored: {}", e);
        }
    }

    // Handle pause toggle
    if input.pause {
        let toggled = match state.phase {
            GamePhase::Paused => state.resume(),
            _ => state.pause(),
        };
        if let Err(e) = toggled {
            log::warn!("Pause toggle ignored: {}", e);
        }
    }
}

/// Move the ball and resolve at most one collision
fn step_ball(state: &mut GameState, dt: f32) -> Option<Collision> {
    let speed = state.ball.speed;
    let delta = displacement(state.ball.direction, speed, dt);
    debug_assert!(
        within_displacement_bound(delta, speed, dt),
        "ball moved {} px in one tick, limit is {}",
        delta.length(),
        speed * dt
    );

    let start = state.ball.pos;
    state.ball.pos = start + delta;

    let collision = detect(state)?;
    record_collision(state, &collision);

    let direction = match collision {
        Collision::Wall(Wall::Bottom) => {
            log::info!("Ball lost at tick {}", state.time_ticks);
            state.reset();
            return Some(collision);
        }
        Collision::Paddle => {
            let offset = paddle_offset(state.ball.pos.x, &state.paddle);
            paddle_reflection(state.ball.direction, offset)
        }
        _ => reflect_direction(state.ball.direction, &collision).unwrap_or(state.ball.direction),
    };

    // Roll back and redo the move with the reflected heading
    state.ball.direction = direction;
    let delta = displacement(direction, speed, dt);
    debug_assert!(within_displacement_bound(delta, speed, dt));
    state.ball.pos = start + delta;

    if let Collision::Brick { id, .. } = collision {
        if let Some(brick) = state.bricks.hit(id) {
            let points = brick.kind.points();
            state.score += points as u64;
            state.events.push(GameEvent::BrickDestroyed { id, points });
            complete_level_if_cleared(state);
        }
    }

    Some(collision)
}

fn record_collision(state: &mut GameState, collision: &Collision) {
    let kind = collision.kind();
    log::debug!(
        "Tick {}: hit {} at ({:.1}, {:.1}) heading {}",
        state.time_ticks,
        kind,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.direction
    );
    if state.last_collision != Some(kind) {
        state.events.push(GameEvent::CollisionChanged(kind));
    }
    state.last_collision = Some(kind);
}

/// running -> level-complete once the last brick is gone
fn complete_level_if_cleared(state: &mut GameState) {
    if state.phase == GamePhase::Running && state.bricks.all_destroyed() {
        state.phase = GamePhase::LevelComplete;
        state.events.push(GameEvent::LevelComplete);
        log::info!(
            "Level complete at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }
}
