//! Retro Pong headless exhibition match
//!
//! Drives the simulation core without a renderer: a scripted chaser sits
//! in for the human player while the predictive policy controls the other
//! side. Doubles as a smoke run and as a reference for host integration.

use retro_pong::consts::*;
use retro_pong::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Scripted stand-in for the human: chase the ball's height
fn chaser_input(state: &GameState) -> TickInput {
    let paddle_center = state.player_paddle.y + PADDLE_HEIGHT / 2.0;
    TickInput {
        move_up: state.ball.pos.y < paddle_center - PADDLE_SPEED,
        move_down: state.ball.pos.y > paddle_center + PADDLE_SPEED,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("exhibition match, seed {seed}");

    // Escalation guarantees termination long before this
    let max_ticks = 1_000_000u64;
    for _ in 0..max_ticks {
        let input = chaser_input(&state);
        tick(&mut state, &input);

        for event in state.take_events() {
            match event {
                GameEvent::PaddleHit { side } => log::debug!("paddle hit: {side:?}"),
                GameEvent::Score { side } => {
                    let snap = state.snapshot();
                    log::info!(
                        "{side:?} scores: {} - {} (speed x{:.2})",
                        snap.player_score,
                        snap.cpu_score,
                        snap.speed_multiplier
                    );
                }
                GameEvent::Win { side } => log::info!("{side:?} wins the match"),
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snap = state.snapshot();
    println!(
        "final score: {} - {} after {} ticks (winner: {:?})",
        snap.player_score, snap.cpu_score, state.time_ticks, snap.winner
    );
}
