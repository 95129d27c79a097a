//! Game dimensions and tuning
//!
//! Loaded from JSON; any missing field falls back to the defaults in `consts`.

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::*;

/// Grid placement of the brick field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: u32,
    pub columns: u32,
    /// Top-left corner of the first brick
    pub origin_x: f32,
    pub origin_y: f32,
    /// Space between neighbouring bricks (both axes)
    pub gap: f32,
    pub brick_width: f32,
    pub brick_height: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            origin_x: BRICK_ORIGIN_X,
            origin_y: BRICK_ORIGIN_Y,
            gap: BRICK_GAP,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
        }
    }
}

impl BrickLayout {
    /// Total number of bricks this layout produces
    pub fn count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Timing ===
    /// Nominal tick rate; `dt` is derived from it
    pub frames_per_second: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Constant ball speed (pixels/s)
    pub ball_speed: f32,
    /// Heading of the first serve (degrees clockwise from up)
    pub initial_direction: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Bricks ===
    pub bricks: BrickLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            frames_per_second: FRAMES_PER_SECOND,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            initial_direction: BALL_INITIAL_DIRECTION,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            bricks: BrickLayout::default(),
        }
    }
}

impl GameConfig {
    /// Fixed tick duration in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.frames_per_second as f32
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("malformed game config")?;
        let defaulted = defaulted_fields(&value);
        if !defaulted.is_empty() {
            log::warn!("Config fields missing, using defaults: {}", defaulted.join(", "));
        }
        let config: Self = serde_json::from_value(value).context("malformed game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("loading config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.frames_per_second > 0, "frames_per_second must be positive");
        ensure!(
            self.arena_width > 0.0 && self.arena_height > 0.0,
            "arena must have positive size, got {}x{}",
            self.arena_width,
            self.arena_height
        );
        ensure!(self.ball_radius > 0.0, "ball_radius must be positive");
        ensure!(self.ball_speed > 0.0, "ball_speed must be positive");
        ensure!(
            self.paddle_width > 0.0 && self.paddle_height > 0.0,
            "paddle must have positive size"
        );
        if self.paddle_width > self.arena_width {
            bail!(
                "paddle ({}) is wider than the arena ({})",
                self.paddle_width,
                self.arena_width
            );
        }
        ensure!(self.bricks.count() > 0, "brick layout is empty");
        ensure!(
            self.bricks.brick_width > 0.0 && self.bricks.brick_height > 0.0,
            "bricks must have positive size"
        );
        Ok(())
    }
}

/// Dotted names of the fields `json` leaves out (one level into sections)
pub fn defaulted_fields(json: &Value) -> Vec<String> {
    let Ok(Value::Object(defaults)) = serde_json::to_value(GameConfig::default()) else {
        return Vec::new();
    };
    let empty = Map::new();
    let given = json.as_object().unwrap_or(&empty);

    let mut missing = Vec::new();
    for (key, default) in &defaults {
        match (given.get(key), default) {
            (None, _) => missing.push(key.clone()),
            (Some(Value::Object(section)), Value::Object(section_defaults)) => {
                missing.extend(
                    section_defaults
                        .keys()
                        .filter(|k| !section.contains_key(*k))
                        .map(|k| format!("{}.{}", key, k)),
                );
            }
            _ => {}
        }
    }
    missing
}
