//! Predictive control policy for the computer paddle
//!
//! The controller projects where the ball will cross the paddle's goal
//! line, folds any wall bounces into the court with a closed-form
//! triangle-wave reflection, then chases a noise-perturbed target at a
//! speed that scales with the rally multiplier. It reacts only to an
//! incoming ball, so it never plays off information a human opponent
//! would not have.

use rand::Rng;
use rand_distr::StandardNormal;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Fold a projected coordinate back into [0, limit] by mirroring at the
/// boundaries.
///
/// An elastic bounce trajectory is periodic with period `2 * limit` and
/// symmetric about `limit`, so any number of wall bounces collapses to
/// one modulo and one reflection. Terminates in O(1) even for
/// pathological inputs far outside the court.
pub fn fold_reflect(value: f32, limit: f32) -> f32 {
    let period = 2.0 * limit;
    let phase = value.rem_euclid(period);
    if phase <= limit { phase } else { period - phase }
}

/// Predicted paddle target (top edge) for intercepting the ball, before
/// aim error is applied
pub fn predict_target(ball: &Ball, paddle: &Paddle) -> f32 {
    if ball.vel.x > 0.0 {
        let time_to_reach = (paddle.x - ball.pos.x) / ball.vel.x;
        let predicted_y = ball.pos.y + ball.vel.y * time_to_reach;
        fold_reflect(predicted_y, PLAYFIELD_HEIGHT) - PADDLE_HEIGHT / 2.0
    } else {
        // Ball stalled horizontally: shadow its current height
        ball.pos.y - PADDLE_HEIGHT / 2.0
    }
}

/// One policy step for the computer paddle.
pub fn update(paddle: &mut Paddle, ball: &Ball, speed_multiplier: f32, rng: &mut impl Rng) {
    // Only react while the ball is incoming
    if ball.vel.x < 0.0 {
        return;
    }

    // Finite reaction latency
    paddle.reaction_delay += 1;
    if paddle.reaction_delay < REACTION_TICKS {
        return;
    }
    paddle.reaction_delay = 0;

    // Imperfect aim: Gaussian error around the predicted intercept
    let error: f32 = rng.sample::<f32, _>(StandardNormal) * AIM_SIGMA;
    let target_y =
        (predict_target(ball, paddle) + error).clamp(0.0, PLAYFIELD_HEIGHT - PADDLE_HEIGHT);

    // Chase speed grows with rally length; the jitter keeps the motion
    // from looking mechanical
    let step = paddle.speed * CPU_SPEED_FACTOR * speed_multiplier * rng.random_range(0.95..1.05);

    // Dead zone around the setpoint prevents oscillation
    if paddle.y < target_y - CPU_DEAD_ZONE {
        paddle.y = (paddle.y + step).min(PLAYFIELD_HEIGHT - PADDLE_HEIGHT);
    } else if paddle.y > target_y + CPU_DEAD_ZONE {
        paddle.y = (paddle.y - step).max(0.0);
    }
}
