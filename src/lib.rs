//! Breakout - a deterministic brick-breaking simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, motion, lifecycle)
//! - `config`: Data-driven game dimensions and tuning
//! - `driver`: Fixed timestep accumulator for wall-clock hosts

pub mod config;
pub mod driver;
pub mod sim;

pub use config::{BrickLayout, GameConfig};
pub use driver::FixedStepDriver;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate
    pub const FRAMES_PER_SECOND: u32 = 40;
    /// Maximum ticks the driver runs per host frame
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap the driver will try to catch up on (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's bottom edge and the bottom wall
    pub const PADDLE_BOTTOM_GAP: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 3.0;
    /// Constant ball speed (pixels/s)
    pub const BALL_SPEED: f32 = 200.0;
    /// Heading of the very first serve (degrees clockwise from up)
    pub const BALL_INITIAL_DIRECTION: f32 = 290.0;
    /// Resting ball sits this many radii above the paddle
    pub const BALL_REST_RADII: f32 = 3.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_GAP: f32 = 10.0;
    pub const BRICK_ORIGIN_X: f32 = 10.0;
    pub const BRICK_ORIGIN_Y: f32 = 50.0;
    pub const BRICK_ROWS: u32 = 1;
    pub const BRICK_COLUMNS: u32 = 3;

    /// Paddle deflection at the very edge of the paddle (degrees)
    pub const PADDLE_DEFLECTION: f32 = 80.0;
    /// Rounding slack allowed on the per-tick displacement length
    pub const DISPLACEMENT_TOLERANCE: f32 = 0.01;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360
    if d >= 360.0 { 0.0 } else { d }
}

/// Unit vector for a heading measured clockwise from straight up.
///
/// Screen coordinates: y grows downward, so "up" is `(0, -1)`.
#[inline]
pub fn heading_to_unit(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-20.0), 340.0);
        assert_eq!(normalize_degrees(430.0), 70.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        let tiny = normalize_degrees(-1e-6);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_heading_to_unit() {
        let up = heading_to_unit(0.0);
        assert!(up.x.abs() < 1e-6 && (up.y + 1.0).abs() < 1e-6);

        let right = heading_to_unit(90.0);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);

        let down = heading_to_unit(180.0);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
    }

    proptest::proptest! {
        #[test]
        fn prop_normalized_heading_in_range(d in -100_000.0f32..100_000.0) {
            let n = normalize_degrees(d);
            proptest::prop_assert!((0.0..360.0).contains(&n));
        }
    }
}
