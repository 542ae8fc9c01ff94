//! Match state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Match is frozen; only a pause toggle or restart resumes it
    Paused,
    /// A side reached the winning score
    GameOver,
}

/// Which side of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Horizontal serve direction after this side scores: the ball is
    /// re-served toward the loser
    pub fn serve_direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }
}

/// Control source for a paddle. Physics and collision semantics are
/// identical for both; only who sets the movement differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleRole {
    /// Driven by host intents
    Human,
    /// Driven by the predictive controller in `sim::ai`
    Policy,
}

/// The ball: a square kinematic body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub const HALF_SIZE: f32 = BALL_SIZE / 2.0;

    /// Advance one unit step
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Collision bounds, centered on the position
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - Self::HALF_SIZE,
            self.pos.y - Self::HALF_SIZE,
            BALL_SIZE,
            BALL_SIZE,
        )
    }

    /// Re-serve from the playfield center, biased toward `direction`
    /// (+1.0 right, -1.0 left). The only point where raw ball speed can
    /// drop; the match multiplier is untouched.
    pub fn reset(&mut self, direction: f32, rng: &mut impl Rng) {
        self.pos = Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0);
        let speed = BALL_BASE_SPEED + rng.random_range(0.0..2.0);
        let magnitudes = [0.8, 1.0, 1.2];
        self.vel.x = direction * speed * magnitudes[rng.random_range(0..magnitudes.len())];
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel.y = speed * sign * rng.random_range(0.5..1.0);
    }
}

/// A paddle pinned to a vertical track at a fixed x offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed horizontal position (left edge)
    pub x: f32,
    /// Top edge, clamped to [0, PLAYFIELD_HEIGHT - PADDLE_HEIGHT]
    pub y: f32,
    /// Base per-tick travel
    pub speed: f32,
    pub role: PaddleRole,
    /// Ticks accumulated toward the next target recomputation (policy only)
    pub reaction_delay: u32,
}

impl Paddle {
    pub fn new(x: f32, role: PaddleRole) -> Self {
        Self {
            x,
            y: PLAYFIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            speed: PADDLE_SPEED,
            role,
            reaction_delay: 0,
        }
    }

    /// Shift up one step, stopping at the top wall
    pub fn move_up(&mut self) {
        self.y = (self.y - self.speed).max(0.0);
    }

    /// Shift down one step, stopping at the bottom wall
    pub fn move_down(&mut self) {
        self.y = (self.y + self.speed).min(PLAYFIELD_HEIGHT - PADDLE_HEIGHT);
    }

    /// Collision bounds
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// Abstract events for the host's audio/UX collaborators. The core only
/// records them; a host that ignores them loses nothing but sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// A side won the rally
    Score { side: Side },
    /// A side won the match
    Win { side: Side },
}

/// Complete match state. Deterministic per seed: the same seed and intent
/// sequence replays the same match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub player_paddle: Paddle,
    pub cpu_paddle: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub cpu_score: u32,
    /// Non-decreasing within a match; reset to 1.0 only on restart
    pub speed_multiplier: f32,
    pub phase: GamePhase,
    /// Set exactly when phase is GameOver
    pub winner: Option<Side>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip, default = "fresh_rng")]
    pub(crate) rng: Pcg32,
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a new match with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            player_paddle: Paddle::new(PLAYER_PADDLE_X, PaddleRole::Human),
            cpu_paddle: Paddle::new(CPU_PADDLE_X, PaddleRole::Policy),
            ball: Ball {
                pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
                vel: Vec2::ZERO,
            },
            player_score: 0,
            cpu_score: 0,
            speed_multiplier: 1.0,
            phase: GamePhase::Playing,
            winner: None,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        let direction = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        state.ball.reset(direction, &mut state.rng);
        state
    }

    /// Reinitialize for a fresh match. The RNG stream continues, so
    /// back-to-back matches differ.
    pub fn restart(&mut self) {
        self.player_paddle = Paddle::new(PLAYER_PADDLE_X, PaddleRole::Human);
        self.cpu_paddle = Paddle::new(CPU_PADDLE_X, PaddleRole::Policy);
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.reset(direction, &mut self.rng);
        self.player_score = 0;
        self.cpu_score = 0;
        self.speed_multiplier = 1.0;
        self.phase = GamePhase::Playing;
        self.winner = None;
        self.time_ticks = 0;
        self.events.clear();
        log::info!("match restarted");
    }

    /// Record a paddle bounce: escalate the match multiplier and signal
    /// the audio collaborator
    pub(crate) fn on_paddle_hit(&mut self, side: Side) {
        self.speed_multiplier += SPEED_INCREMENT / 10.0;
        self.events.push(GameEvent::PaddleHit { side });
    }

    /// Award a rally to `scorer`, re-serve toward the loser, and end the
    /// match if the winning score is reached
    pub(crate) fn score_point(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Computer => self.cpu_score += 1,
        }
        self.events.push(GameEvent::Score { side: scorer });
        self.ball.reset(scorer.serve_direction(), &mut self.rng);
        log::debug!(
            "point to {scorer:?}: {} - {}",
            self.player_score,
            self.cpu_score
        );

        let score = match scorer {
            Side::Player => self.player_score,
            Side::Computer => self.cpu_score,
        };
        if score >= WINNING_SCORE {
            self.phase = GamePhase::GameOver;
            self.winner = Some(scorer);
            self.events.push(GameEvent::Win { side: scorer });
            log::info!(
                "{scorer:?} wins {} - {}",
                self.player_score,
                self.cpu_score
            );
        }
    }

    /// Read-only view for the host's renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_size: BALL_SIZE,
            player_paddle: Vec2::new(self.player_paddle.x, self.player_paddle.y),
            cpu_paddle: Vec2::new(self.cpu_paddle.x, self.cpu_paddle.y),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            player_score: self.player_score,
            cpu_score: self.cpu_score,
            phase: self.phase,
            winner: self.winner,
            speed_multiplier: self.speed_multiplier,
        }
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Everything a host needs to render one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Ball center
    pub ball_pos: Vec2,
    pub ball_size: f32,
    /// Top-left corners
    pub player_paddle: Vec2,
    pub cpu_paddle: Vec2,
    pub paddle_size: Vec2,
    pub player_score: u32,
    pub cpu_score: u32,
    pub phase: GamePhase,
    pub winner: Option<Side>,
    pub speed_multiplier: f32,
}
