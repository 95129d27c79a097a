//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by brick id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod reflect;
pub mod state;
pub mod tick;

pub use collision::{BrickFace, Collision, CollisionKind, Wall, detect};
pub use rect::Rect;
pub use reflect::{paddle_offset, paddle_reflection, reflect_direction};
pub use state::{
    Ball, Brick, BrickId, BrickKind, Bricks, CommandRejected, GameEvent, GamePhase, GameState,
    Paddle,
};
pub use tick::{TickInput, apply_commands, displacement, tick, within_displacement_bound};
