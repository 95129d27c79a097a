//! Collision detection against walls, bricks and the paddle
//!
//! Every test uses the ball's bounding square. Exactly one collision is
//! reported per pass, in fixed priority order: walls (left, right, upper,
//! bottom), then live bricks in id order, then the paddle. A ball touching
//! a brick and the paddle at once is always a brick hit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Ball, BrickId, Bricks, GameState};

/// Arena edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Upper,
    Bottom,
}

/// Which face of a brick was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickFace {
    /// Top or bottom face (parallel to the x axis): vertical motion flips
    XAxis,
    /// Left or right face (parallel to the y axis): horizontal motion flips
    YAxis,
}

/// Result of a detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall(Wall),
    /// The struck brick; the engine removes it while resolving the tick
    Brick { id: BrickId, face: BrickFace },
    Paddle,
}

/// Flat surface classification, for diagnostics and notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    LeftWall,
    RightWall,
    UpperWall,
    BottomWall,
    Paddle,
    BrickXAxis,
    BrickYAxis,
}

impl Collision {
    pub fn kind(&self) -> CollisionKind {
        match self {
            Collision::Wall(Wall::Left) => CollisionKind::LeftWall,
            Collision::Wall(Wall::Right) => CollisionKind::RightWall,
            Collision::Wall(Wall::Upper) => CollisionKind::UpperWall,
            Collision::Wall(Wall::Bottom) => CollisionKind::BottomWall,
            Collision::Paddle => CollisionKind::Paddle,
            Collision::Brick {
                face: BrickFace::XAxis,
                ..
            } => CollisionKind::BrickXAxis,
            Collision::Brick {
                face: BrickFace::YAxis,
                ..
            } => CollisionKind::BrickYAxis,
        }
    }
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::LeftWall => "left wall",
            CollisionKind::RightWall => "right wall",
            CollisionKind::UpperWall => "upper wall",
            CollisionKind::BottomWall => "bottom wall",
            CollisionKind::Paddle => "paddle",
            CollisionKind::BrickXAxis => "brick (x-axis face)",
            CollisionKind::BrickYAxis => "brick (y-axis face)",
        }
    }
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the ball's current position against the whole scene
pub fn detect(state: &GameState) -> Option<Collision> {
    let ball = &state.ball;
    if let Some(wall) = wall_collision(ball, state.arena.x, state.arena.y) {
        return Some(Collision::Wall(wall));
    }
    if let Some((id, face)) = brick_collision(ball, &state.bricks) {
        return Some(Collision::Brick { id, face });
    }
    if ball.bounds().overlaps(&state.paddle.rect) {
        return Some(Collision::Paddle);
    }
    None
}

/// First wall the ball touches, checked left, right, upper, bottom
pub fn wall_collision(ball: &Ball, width: f32, height: f32) -> Option<Wall> {
    let Ball { pos, radius, .. } = *ball;
    if pos.x - radius <= 0.0 {
        Some(Wall::Left)
    } else if pos.x + radius >= width {
        Some(Wall::Right)
    } else if pos.y - radius <= 0.0 {
        Some(Wall::Upper)
    } else if pos.y + radius >= height {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// First live brick the ball overlaps, with the face it struck
pub fn brick_collision(ball: &Ball, bricks: &Bricks) -> Option<(BrickId, BrickFace)> {
    let bounds = ball.bounds();
    bricks
        .live()
        .find(|brick| bounds.overlaps(&brick.rect))
        .map(|brick| (brick.id, struck_face(&bounds, &brick.rect)))
}

/// The face is the one the ball penetrates least: a shallow vertical
/// overlap means the ball came through the top or bottom face.
fn struck_face(ball: &Rect, brick: &Rect) -> BrickFace {
    let depth = brick.overlap_depth(ball);
    if depth.x < depth.y {
        BrickFace::YAxis
    } else {
        BrickFace::XAxis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 1)
    }

    fn ball_at(state: &mut GameState, x: f32, y: f32) {
        state.ball.pos = Vec2::new(x, y);
    }

    #[test]
    fn test_resting_ball_collides_with_nothing() {
        assert_eq!(detect(&state()), None);
    }

    #[test]
    fn test_walls() {
        let mut state = state();
        ball_at(&mut state, 3.0, 200.0);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Left)));
        ball_at(&mut state, 397.0, 200.0);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Right)));
        ball_at(&mut state, 200.0, 2.5);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Upper)));
        ball_at(&mut state, 200.0, 497.0);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Bottom)));
        ball_at(&mut state, 3.01, 200.0);
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_wall_priority_in_corner() {
        let mut state = state();
        // Top-left corner: left is checked first
        ball_at(&mut state, 1.0, 1.0);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Left)));
        // Bottom-right corner: right before bottom
        ball_at(&mut state, 399.0, 499.0);
        assert_eq!(detect(&state), Some(Collision::Wall(Wall::Right)));
    }

    #[test]
    fn test_brick_faces() {
        let mut state = state();
        // Brick 0 spans x 10..50, y 50..65. Coming up into its bottom face.
        ball_at(&mut state, 30.0, 67.0);
        assert_eq!(
            detect(&state),
            Some(Collision::Brick {
                id: BrickId(0),
                face: BrickFace::XAxis
            })
        );
        // Coming in from the right side of brick 0, vertically centered
        ball_at(&mut state, 52.0, 57.5);
        assert_eq!(
            detect(&state),
            Some(Collision::Brick {
                id: BrickId(0),
                face: BrickFace::YAxis
            })
        );
    }

    #[test]
    fn test_destroyed_brick_is_ignored() {
        let mut state = state();
        ball_at(&mut state, 30.0, 67.0);
        state.bricks.destroy(BrickId(0));
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_paddle() {
        let mut state = state();
        // Paddle top is at y = 488
        ball_at(&mut state, 200.0, 486.0);
        assert_eq!(detect(&state), Some(Collision::Paddle));
        ball_at(&mut state, 200.0, 484.0);
        assert_eq!(detect(&state), None);
    }

    #[test]
    fn test_brick_beats_paddle() {
        let mut state = state();
        state.bricks = Bricks::from_rects([Rect::new(180.0, 470.0, 40.0, 15.0)]);
        // Overlaps the brick's bottom and the paddle's top at once
        state.paddle.rect.pos.y = 488.0;
        ball_at(&mut state, 200.0, 486.0);
        assert!(matches!(detect(&state), Some(Collision::Brick { .. })));
    }

    #[test]
    fn test_kind_names() {
        let hit = Collision::Brick {
            id: BrickId(2),
            face: BrickFace::YAxis,
        };
        assert_eq!(hit.kind(), CollisionKind::BrickYAxis);
        assert_eq!(Collision::Wall(Wall::Upper).kind().to_string(), "upper wall");
    }
}
