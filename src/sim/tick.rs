//! Discrete simulation step
//!
//! `tick` advances the match by exactly one step: intents in, state
//! mutation, events out. The host calls it once per frame; nothing here
//! blocks or performs I/O.

use super::ai;
use super::collision::{paddle_collision, wall_collision};
use super::state::{GamePhase, GameState, Side};
use crate::consts::*;

/// Host intents for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move the human paddle up this tick
    pub move_up: bool,
    /// Move the human paddle down this tick
    pub move_down: bool,
    /// Toggle Playing <-> Paused
    pub toggle_pause: bool,
    /// Reinitialize the match (honored in any phase)
    pub restart: bool,
}

/// Advance the match by one discrete step.
///
/// Order per step: restart/pause intents, human movement, policy update,
/// ball motion, wall and paddle resolution, scoring. While Paused or
/// GameOver the simulation is frozen entirely; only the explicit intents
/// act.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    if input.toggle_pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::GameOver,
        };
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if input.move_up {
        state.player_paddle.move_up();
    }
    if input.move_down {
        state.player_paddle.move_down();
    }

    ai::update(
        &mut state.cpu_paddle,
        &state.ball,
        state.speed_multiplier,
        &mut state.rng,
    );

    state.ball.advance();
    wall_collision(&mut state.ball);

    // The separating push-out guarantees at most one paddle hit per tick
    if paddle_collision(&mut state.ball, &state.player_paddle) {
        state.on_paddle_hit(Side::Player);
    } else if paddle_collision(&mut state.ball, &state.cpu_paddle) {
        state.on_paddle_hit(Side::Computer);
    }

    // A ball past either end line ends the rally
    if state.ball.pos.x < 0.0 {
        state.score_point(Side::Computer);
    } else if state.ball.pos.x > PLAYFIELD_WIDTH {
        state.score_point(Side::Player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameEvent;
    use glam::Vec2;

    fn playing_state(seed: u64) -> GameState {
        GameState::new(seed)
    }

    #[test]
    fn ball_past_left_edge_scores_for_computer() {
        let mut state = playing_state(5);
        // Park the player paddle out of the flight path
        state.player_paddle.y = 450.0;
        state.ball.pos = Vec2::new(0.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.cpu_score, 1);
        assert_eq!(state.player_score, 0);
        // Re-served from center, biased toward the loser (leftward)
        assert_eq!(
            state.ball.pos,
            Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0)
        );
        assert!(state.ball.vel.x < 0.0);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::Score {
                    side: Side::Computer
                })
        );
    }

    #[test]
    fn ball_past_right_edge_scores_for_player() {
        let mut state = playing_state(5);
        state.cpu_paddle.y = 0.0;
        state.ball.pos = Vec2::new(PLAYFIELD_WIDTH, 500.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player_score, 1);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn pause_toggle_is_idempotent() {
        let mut state = playing_state(5);
        let before_ball = state.ball.clone();
        let toggle = TickInput {
            toggle_pause: true,
            ..Default::default()
        };

        tick(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball, before_ball);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.cpu_score, 0);
    }

    #[test]
    fn paused_match_is_frozen() {
        let mut state = playing_state(5);
        tick(
            &mut state,
            &TickInput {
                toggle_pause: true,
                ..Default::default()
            },
        );
        let before = state.snapshot();

        for _ in 0..50 {
            tick(
                &mut state,
                &TickInput {
                    move_up: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn paddle_hit_bumps_multiplier_and_emits_event() {
        let mut state = playing_state(5);
        state.player_paddle.y = 250.0;
        state.ball.pos = Vec2::new(40.0, 300.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert!((state.speed_multiplier - 1.05).abs() < 1e-5);
        assert!(state.ball.vel.x > 0.0);
        assert!(
            state
                .take_events()
                .contains(&GameEvent::PaddleHit { side: Side::Player })
        );
    }

    #[test]
    fn game_over_freezes_scores_until_restart() {
        let mut state = playing_state(5);
        state.cpu_score = WINNING_SCORE - 1;
        state.player_paddle.y = 450.0;
        state.ball.pos = Vec2::new(0.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.winner, Some(Side::Computer));
        assert!(state.take_events().contains(&GameEvent::Win {
            side: Side::Computer
        }));

        // Further ticks change nothing
        let frozen = state.snapshot();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.snapshot(), frozen);

        // Restart brings back a clean match
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.cpu_score, 0);
        assert_eq!(state.speed_multiplier, 1.0);
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        let inputs = [
            TickInput {
                move_up: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_down: true,
                ..Default::default()
            },
        ];

        for _ in 0..500 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}
