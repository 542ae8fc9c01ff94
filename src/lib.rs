//! Retro Pong - a classic player-vs-computer paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, collisions, the
//!   computer's predictive control policy, match state machine)
//!
//! Rendering, audio, input polling, and frame pacing are host concerns:
//! each frame the host feeds discrete intents into [`sim::tick()`], then
//! reads back a [`sim::Snapshot`] to draw and drains the emitted
//! [`sim::GameEvent`]s to drive sound. The core performs no I/O and is
//! unaffected by absent or degraded collaborators.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// The ball is a square of this side length
    pub const BALL_SIZE: f32 = 15.0;

    /// Fixed x positions: the player defends the left edge, the computer
    /// the right
    pub const PLAYER_PADDLE_X: f32 = 20.0;
    pub const CPU_PADDLE_X: f32 = PLAYFIELD_WIDTH - 35.0;

    /// Per-tick paddle travel
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Serve speed floor; the actual serve speed is sampled in
    /// [base, base + 2)
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// The global multiplier gains SPEED_INCREMENT / 10 per paddle hit
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// First to this score wins the match
    pub const WINNING_SCORE: u32 = 10;

    /// Vertical deflection per unit of normalized contact offset
    pub const SPIN_COEFFICIENT: f32 = 4.0;
    /// Per-hit rally escalation factors
    pub const RALLY_SPEEDUP_X: f32 = 1.05;
    pub const RALLY_SPEEDUP_Y: f32 = 1.02;

    /// Computer paddle tuning
    pub const CPU_SPEED_FACTOR: f32 = 1.4;
    /// Standard deviation of the Gaussian aim error (pixels)
    pub const AIM_SIGMA: f32 = 5.0;
    /// Setpoint tolerance; the controller holds still inside this band
    pub const CPU_DEAD_ZONE: f32 = 3.0;
    /// Ticks between target recomputations (minimal reaction latency)
    pub const REACTION_TICKS: u32 = 1;
}
