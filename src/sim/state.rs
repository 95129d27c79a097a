//! Game state and core simulation types
//!
//! `GameState` is the single simulation context: it owns the entities, the
//! lifecycle phase and the seeded RNG. Nothing in the simulation is global.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::rect::Rect;
use crate::config::{BrickLayout, GameConfig};
use crate::consts::*;
use crate::normalize_degrees;

/// Lifecycle phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting above the paddle, waiting for start
    NotStarted,
    /// Active gameplay, ticks advance the ball
    Running,
    /// Frozen in place, ticks are ignored
    Paused,
    /// Every brick destroyed
    LevelComplete,
}

/// Outward notifications for the view, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    /// A brick was removed from play
    BrickDestroyed { id: BrickId, points: u32 },
    /// The surface classification differs from the previous collision
    CollisionChanged(CollisionKind),
    /// Last live brick destroyed
    LevelComplete,
    /// Ball crossed the bottom wall and the game was reset
    Restarted { direction: f32 },
}

/// Why a lifecycle command was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRejected {
    AlreadyRunning,
    NotRunning,
    NotPaused,
    LevelComplete,
}

impl fmt::Display for CommandRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CommandRejected::AlreadyRunning => "game is already running",
            CommandRejected::NotRunning => "game is not running",
            CommandRejected::NotPaused => "game is not paused",
            CommandRejected::LevelComplete => "level is already complete",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CommandRejected {}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Heading in degrees, clockwise from straight up, kept in [0, 360)
    pub direction: f32,
    /// Pixels per second
    pub speed: f32,
}

impl Ball {
    /// Bounding square used by every overlap test
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.pos.x + self.rect.size.x / 2.0
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BrickKind {
    #[default]
    Standard,
}

impl BrickKind {
    pub fn points(&self) -> u32 {
        match self {
            BrickKind::Standard => 10,
        }
    }

    /// Hits needed to destroy
    pub fn hits(&self) -> u8 {
        match self {
            BrickKind::Standard => 1,
        }
    }
}

/// Stable handle to a brick slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrickId(pub u32);

/// A brick entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub kind: BrickKind,
    pub rect: Rect,
    pub hp: u8,
    pub alive: bool,
}

/// Fixed-size brick arena. Destroyed bricks keep their slot with `alive`
/// cleared, so ids stay valid for the whole level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bricks {
    slots: Vec<Brick>,
}

impl Bricks {
    /// Standard bricks at the given rectangles, ids in iteration order
    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        let slots = rects
            .into_iter()
            .enumerate()
            .map(|(i, rect)| {
                let kind = BrickKind::Standard;
                Brick {
                    id: BrickId(i as u32),
                    kind,
                    rect,
                    hp: kind.hits(),
                    alive: true,
                }
            })
            .collect();
        Self { slots }
    }

    /// Row-major grid of bricks
    pub fn from_layout(layout: &BrickLayout) -> Self {
        let step_x = layout.brick_width + layout.gap;
        let step_y = layout.brick_height + layout.gap;
        Self::from_rects((0..layout.rows).flat_map(|row| {
            (0..layout.columns).map(move |col| {
                Rect::new(
                    layout.origin_x + col as f32 * step_x,
                    layout.origin_y + row as f32 * step_y,
                    layout.brick_width,
                    layout.brick_height,
                )
            })
        }))
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.slots.get(id.0 as usize)
    }

    /// Bricks still in play, in id order
    pub fn live(&self) -> impl Iterator<Item = &Brick> {
        self.slots.iter().filter(|b| b.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Number of slots, destroyed ones included
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Apply one hit. Returns the brick if this hit destroyed it.
    pub fn hit(&mut self, id: BrickId) -> Option<Brick> {
        let brick = self.slots.get_mut(id.0 as usize).filter(|b| b.alive)?;
        brick.hp = brick.hp.saturating_sub(1);
        if brick.hp == 0 {
            brick.alive = false;
            Some(*brick)
        } else {
            None
        }
    }

    /// Remove a brick from play regardless of its remaining hits.
    /// Returns false if it was already destroyed.
    pub fn destroy(&mut self, id: BrickId) -> bool {
        match self.slots.get_mut(id.0 as usize) {
            Some(brick) if brick.alive => {
                brick.hp = 0;
                brick.alive = false;
                true
            }
            _ => false,
        }
    }

    /// True when no live brick remains
    pub fn all_destroyed(&self) -> bool {
        debug_assert!(
            !self.slots.is_empty(),
            "all_destroyed queried on a brick field that never had bricks"
        );
        !self.slots.iter().any(|b| b.alive)
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Playable area: (0, 0) to (width, height)
    pub arena: Vec2,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Bricks,
    /// Points for bricks destroyed this level
    pub score: u64,
    /// Classification of the most recent collision
    pub last_collision: Option<CollisionKind>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending notifications for the view
    pub events: Vec<GameEvent>,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game in the not-started phase
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let arena = Vec2::new(config.arena_width, config.arena_height);
        let ball = Ball {
            pos: Vec2::ZERO,
            radius: config.ball_radius,
            direction: normalize_degrees(config.initial_direction),
            speed: config.ball_speed,
        };
        let paddle = Paddle {
            rect: Rect::new(0.0, 0.0, config.paddle_width, config.paddle_height),
        };
        let bricks = Bricks::from_layout(&config.bricks);

        let mut state = Self {
            config,
            arena,
            phase: GamePhase::NotStarted,
            ball,
            paddle,
            bricks,
            score: 0,
            last_collision: None,
            time_ticks: 0,
            events: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.place_for_serve();
        state
    }

    /// Paddle centered at the bottom, ball resting above it
    fn place_for_serve(&mut self) {
        self.paddle.rect.pos = Vec2::new(
            (self.arena.x - self.paddle.width()) / 2.0,
            self.paddle_rest_y(),
        );
        self.ball.pos = self.ball_rest_pos();
    }

    fn paddle_rest_y(&self) -> f32 {
        self.arena.y - self.paddle.rect.size.y - PADDLE_BOTTOM_GAP
    }

    /// Where the ball waits before the game starts
    pub fn ball_rest_pos(&self) -> Vec2 {
        Vec2::new(
            self.paddle.center_x(),
            self.paddle.rect.pos.y - BALL_REST_RADII * self.ball.radius,
        )
    }

    /// Move the paddle so its center follows the pointer, clamped so the
    /// whole paddle stays inside the arena. Before the game starts the
    /// ball rides along. Ignored while paused or after the level is done.
    pub fn set_paddle_x(&mut self, pointer_x: f32) {
        match self.phase {
            GamePhase::NotStarted | GamePhase::Running => self.place_paddle(pointer_x),
            GamePhase::Paused | GamePhase::LevelComplete => {
                log::trace!("Pointer ignored while {:?}", self.phase);
            }
        }
    }

    fn place_paddle(&mut self, center_x: f32) {
        let max_x = (self.arena.x - self.paddle.width()).max(0.0);
        self.paddle.rect.pos.x = (center_x - self.paddle.width() / 2.0).clamp(0.0, max_x);

        if self.phase == GamePhase::NotStarted {
            self.ball.pos = self.ball_rest_pos();
        }
    }

    /// Host window resized: re-anchor the paddle to the new bottom edge and
    /// pull the ball back inside the new bounds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Vec2::new(width, height);
        self.paddle.rect.pos.y = self.paddle_rest_y();
        let center = self.paddle.center_x();
        self.place_paddle(center);

        let r = self.ball.radius;
        let max = (self.arena - Vec2::splat(r)).max(Vec2::splat(r));
        self.ball.pos = self.ball.pos.clamp(Vec2::splat(r), max);
        log::debug!("Arena resized to {}x{}", width, height);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// not-started -> running
    pub fn start(&mut self) -> Result<(), CommandRejected> {
        match self.phase {
            GamePhase::NotStarted => {
                self.phase = GamePhase::Running;
                self.events.push(GameEvent::Started);
                log::info!("Game started, direction {}", self.ball.direction);
                Ok(())
            }
            GamePhase::LevelComplete => Err(CommandRejected::LevelComplete),
            GamePhase::Running | GamePhase::Paused => Err(CommandRejected::AlreadyRunning),
        }
    }

    /// running -> paused
    pub fn pause(&mut self) -> Result<(), CommandRejected> {
        if self.phase != GamePhase::Running {
            return Err(CommandRejected::NotRunning);
        }
        self.phase = GamePhase::Paused;
        self.events.push(GameEvent::Paused);
        log::info!("Game paused at tick {}", self.time_ticks);
        Ok(())
    }

    /// paused -> running, positions untouched
    pub fn resume(&mut self) -> Result<(), CommandRejected> {
        if self.phase != GamePhase::Paused {
            return Err(CommandRejected::NotPaused);
        }
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Resumed);
        log::info!("Game resumed at tick {}", self.time_ticks);
        Ok(())
    }

    /// Back to not-started: fresh brick field, paddle centered, ball resting,
    /// new serve direction drawn from the seeded RNG.
    pub fn reset(&mut self) {
        let direction = self.random_serve_direction();

        self.bricks = Bricks::from_layout(&self.config.bricks);
        self.ball.direction = direction;
        self.place_for_serve();
        self.score = 0;
        self.last_collision = None;
        self.phase = GamePhase::NotStarted;
        self.events.push(GameEvent::Restarted { direction });

        log::info!(
            "Game reset: {} bricks, serve direction {}",
            self.bricks.total(),
            direction
        );
    }

    /// One of {-50, -40, ..., 40} degrees, normalized
    fn random_serve_direction(&mut self) -> f32 {
        let step: i32 = self.rng.random_range(0..10);
        normalize_degrees((step * 10 - 50) as f32)
    }
}
