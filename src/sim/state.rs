//! Ball and pane state
//!
//! Plain data; the tick in `sim::tick` is the only thing that mutates a ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center in pane coordinates (origin top-left, y down)
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    radius: f32,
}

impl Ball {
    /// Ball tucked into the top-left corner, moving down-right
    pub fn new(radius: f32) -> Self {
        Self::with_velocity(radius, Vec2::from(BALL_START_VELOCITY))
    }

    pub fn with_velocity(radius: f32, vel: Vec2) -> Self {
        Self {
            pos: Vec2::splat(radius),
            vel,
            radius,
        }
    }

    /// Radius is fixed for the lifetime of the ball
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

/// Size of the pane the ball bounces in
///
/// A pane that has not been laid out yet is `Surface::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest center coordinate on each axis that keeps a ball of `radius` inside
    pub fn max_center(&self, radius: f32) -> Vec2 {
        Vec2::new(self.width - radius, self.height - radius)
    }

    /// Whether `center` lies inside the reachable box for `radius`
    pub fn contains(&self, center: Vec2, radius: f32) -> bool {
        let max = self.max_center(radius);
        center.x >= radius && center.x <= max.x && center.y >= radius && center.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball_starts_in_corner() {
        let ball = Ball::new(20.0);
        assert_eq!(ball.pos, Vec2::new(20.0, 20.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
        assert_eq!(ball.radius(), 20.0);
    }

    #[test]
    fn test_surface_contains() {
        let surface = Surface::new(100.0, 100.0);
        assert!(surface.contains(Vec2::new(20.0, 20.0), 20.0));
        assert!(surface.contains(Vec2::new(80.0, 80.0), 20.0));
        assert!(!surface.contains(Vec2::new(81.0, 50.0), 20.0));
        assert!(!surface.contains(Vec2::new(50.0, 19.5), 20.0));
    }
}
