//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Exactly one discrete step per `tick` invocation
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, paddle_collision, wall_collision};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, PaddleRole, Side, Snapshot};
pub use tick::{TickInput, tick};
