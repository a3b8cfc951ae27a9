//! Fixed step simulation tick
//!
//! One tick: check the walls against the current center, flip the velocity
//! components that hit, then move. The check uses the position before the move,
//! so the ball may end a tick up to one step past a wall; the next tick turns it
//! around.

use super::collision::{Reflection, reflect_axis};
use super::state::{Ball, Surface};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub x: Reflection,
    pub y: Reflection,
}

impl TickReport {
    pub fn bounced(&self) -> bool {
        self.x.hit() || self.y.hit()
    }
}

/// Advance the ball by one tick inside `surface`
pub fn tick(ball: &mut Ball, surface: Surface) -> TickReport {
    let radius = ball.radius();
    let max = surface.max_center(radius);

    let x = reflect_axis(ball.pos.x, &mut ball.vel.x, radius, max.x);
    let y = reflect_axis(ball.pos.y, &mut ball.vel.y, radius, max.y);

    ball.pos += ball.vel;

    let report = TickReport { x, y };
    if report.bounced() {
        log::trace!(
            "bounce x={:?} y={:?} -> pos=({:.1}, {:.1}) vel=({}, {})",
            x,
            y,
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y
        );
    }
    report
}
