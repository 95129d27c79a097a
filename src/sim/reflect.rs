//! Direction changes after an impact
//!
//! Headings are degrees clockwise from straight up. Mirroring across a
//! vertical surface is `360 - d`, across a horizontal surface `180 - d`.

use super::collision::{BrickFace, Collision, Wall};
use super::state::Paddle;
use crate::consts::PADDLE_DEFLECTION;
use crate::normalize_degrees;

/// New heading after striking a wall or brick face.
///
/// Returns `None` for the bottom wall (the game resets instead) and for the
/// paddle, whose rule depends on where the ball landed; see
/// [`paddle_reflection`].
pub fn reflect_direction(direction: f32, collision: &Collision) -> Option<f32> {
    let d = match collision {
        Collision::Wall(Wall::Left | Wall::Right)
        | Collision::Brick {
            face: BrickFace::YAxis,
            ..
        } => 360.0 - direction,
        Collision::Wall(Wall::Upper)
        | Collision::Brick {
            face: BrickFace::XAxis,
            ..
        } => 180.0 - direction,
        Collision::Wall(Wall::Bottom) | Collision::Paddle => return None,
    };
    Some(normalize_degrees(d))
}

/// Where along the paddle the ball landed: 0 at the center, about -1 / +1
/// at the left / right edges (slightly beyond for corner hits).
pub fn paddle_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    (ball_x - paddle.center_x()) / (paddle.width() / 2.0)
}

/// Heading after a paddle bounce. The ball always leaves upward:
/// anything in (90, 180) becomes 80 and anything in [180, 270) becomes 280.
pub fn paddle_reflection(direction: f32, offset: f32) -> f32 {
    let d = normalize_degrees(180.0 - direction + offset * PADDLE_DEFLECTION);
    if d > 90.0 && d < 180.0 {
        80.0
    } else if (180.0..270.0).contains(&d) {
        280.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::BrickId;

    fn paddle() -> Paddle {
        Paddle {
            rect: Rect::new(150.0, 488.0, 100.0, 10.0),
        }
    }

    #[test]
    fn test_side_walls_mirror_horizontally() {
        let left = Collision::Wall(Wall::Left);
        assert_eq!(reflect_direction(290.0, &left), Some(70.0));
        let right = Collision::Wall(Wall::Right);
        assert_eq!(reflect_direction(70.0, &right), Some(290.0));
    }

    #[test]
    fn test_upper_wall_mirrors_vertically() {
        let upper = Collision::Wall(Wall::Upper);
        assert_eq!(reflect_direction(10.0, &upper), Some(170.0));
        // 180 - 340 = -160 -> 200
        assert_eq!(reflect_direction(340.0, &upper), Some(200.0));
    }

    #[test]
    fn test_brick_faces() {
        let x_face = Collision::Brick {
            id: BrickId(0),
            face: BrickFace::XAxis,
        };
        let y_face = Collision::Brick {
            id: BrickId(0),
            face: BrickFace::YAxis,
        };
        assert_eq!(reflect_direction(30.0, &x_face), Some(150.0));
        assert_eq!(reflect_direction(30.0, &y_face), Some(330.0));
    }

    #[test]
    fn test_bottom_and_paddle_have_no_table_entry() {
        assert_eq!(reflect_direction(180.0, &Collision::Wall(Wall::Bottom)), None);
        assert_eq!(reflect_direction(180.0, &Collision::Paddle), None);
    }

    #[test]
    fn test_paddle_offset() {
        let paddle = paddle();
        assert_eq!(paddle_offset(200.0, &paddle), 0.0);
        assert_eq!(paddle_offset(250.0, &paddle), 1.0);
        assert_eq!(paddle_offset(150.0, &paddle), -1.0);
        assert!(paddle_offset(252.0, &paddle) > 1.0);
    }

    #[test]
    fn test_paddle_center_hit() {
        // 180 - 200 = -20 -> 340, already upward
        assert_eq!(paddle_reflection(200.0, 0.0), 340.0);
    }

    #[test]
    fn test_paddle_edge_hit_clamps_right() {
        // 180 - 170 + 1.0 * 80 = 90 stays; push past it with a corner hit
        // 180 - 170 + 1.1 * 80 = 98 -> forced to 80
        assert_eq!(paddle_reflection(170.0, 1.1), 80.0);
    }

    #[test]
    fn test_paddle_edge_hit_clamps_left() {
        // 180 - 190 - 1.0 * 80 = -90 -> 270 stays
        assert_eq!(paddle_reflection(190.0, -1.0), 270.0);
        // 180 - 200 - 1.1 * 80 = -108 -> 252 -> forced to 280
        assert_eq!(paddle_reflection(200.0, -1.1), 280.0);
    }

    proptest::proptest! {
        #[test]
        fn prop_paddle_bounce_goes_up(
            direction in 90.0f32..270.0,
            offset in -1.2f32..1.2,
        ) {
            let d = paddle_reflection(direction, offset);
            proptest::prop_assert!((0.0..360.0).contains(&d));
            // Upward headings: [0, 90] or [270, 360)
            proptest::prop_assert!(d <= 90.0 || d >= 270.0, "heading {}", d);
        }
    }
}
