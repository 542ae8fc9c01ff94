//! Wall and paddle collision resolution
//!
//! The court is a rectangle: the ball reflects off the top and bottom
//! walls and off both paddles. A paddle hit adds spin proportional to the
//! contact offset and escalates rally speed; the ball is then pushed
//! flush against the struck face so the same overlap cannot re-trigger.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Axis-aligned rectangle. Top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Open-interval overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Reflect the ball off the top/bottom walls.
///
/// Clamps the position back inside the court so a single crossing inverts
/// the vertical velocity exactly once (no sticking, no tunneling back).
/// Returns true if a wall was struck.
pub fn wall_collision(ball: &mut Ball) -> bool {
    let half = Ball::HALF_SIZE;
    if ball.pos.y - half <= 0.0 || ball.pos.y + half >= PLAYFIELD_HEIGHT {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(half, PLAYFIELD_HEIGHT - half);
        true
    } else {
        false
    }
}

/// Whether the ball is closing on this paddle. Gate on velocity so a
/// lingering overlap after the bounce cannot fire twice.
fn moving_toward(ball: &Ball, paddle: &Paddle) -> bool {
    if paddle.x < PLAYFIELD_WIDTH / 2.0 {
        ball.vel.x < 0.0
    } else {
        ball.vel.x > 0.0
    }
}

/// Resolve a ball/paddle impact.
///
/// On hit: invert horizontal velocity, add spin from the normalized
/// contact offset (edge hits deflect hardest), escalate rally speed, and
/// reposition the ball flush against the struck face. Returns true on hit
/// so the caller can bump the match multiplier and emit the event.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect().intersects(&paddle.rect()) || !moving_toward(ball, paddle) {
        return false;
    }

    ball.vel.x = -ball.vel.x;

    // Contact offset in [0, 1]: 0 at the paddle's top edge, 1 at the bottom
    let hit_pos = (ball.pos.y - paddle.y) / PADDLE_HEIGHT;
    ball.vel.y += (hit_pos - 0.5) * SPIN_COEFFICIENT;

    ball.vel.x *= RALLY_SPEEDUP_X;
    ball.vel.y *= RALLY_SPEEDUP_Y;

    // Separate from the paddle (1px margin) to prevent sticking
    let half = Ball::HALF_SIZE;
    if paddle.x < PLAYFIELD_WIDTH / 2.0 {
        ball.pos.x = paddle.x + PADDLE_WIDTH + half + 1.0;
    } else {
        ball.pos.x = paddle.x - half - 1.0;
    }

    true
}
