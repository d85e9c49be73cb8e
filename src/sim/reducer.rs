//! Pure state transitions
//!
//! `(state, event) -> state` with no side effects. Preconditions that don't
//! hold are no-ops: the input state comes back unchanged.

use super::state::{GameEvent, GameState, GameStatus};

/// Stateless reducer over `GameState`
#[derive(Debug, Clone, Copy, Default)]
pub struct GameReducer;

impl GameReducer {
    pub fn new() -> Self {
        Self
    }

    /// Move an idle game into play
    pub fn start(&self, state: &GameState) -> GameState {
        if state.status != GameStatus::Idle {
            return state.clone();
        }
        GameState {
            status: GameStatus::Playing,
            ..state.clone()
        }
    }

    /// Apply one gameplay event. Ignored unless the game is playing.
    pub fn reduce(&self, state: &GameState, event: &GameEvent) -> GameState {
        if !state.is_playing() {
            return state.clone();
        }

        match event {
            GameEvent::BrickHit(id) => {
                let Some(brick) = state.bricks.get(id) else {
                    return state.clone();
                };
                let score = state.score.saturating_add(brick.value());
                let mut bricks = state.bricks.clone();
                bricks.remove(id);
                let status = if bricks.is_empty() {
                    GameStatus::Won
                } else {
                    state.status
                };
                GameState {
                    score,
                    status,
                    bricks,
                    ..state.clone()
                }
            }
            GameEvent::BallLost => {
                let lives = state.lives.saturating_sub(1);
                if lives == 0 {
                    // Never request a reset once the game is over
                    GameState {
                        lives,
                        status: GameStatus::GameOver,
                        ball_reset_needed: false,
                        ..state.clone()
                    }
                } else {
                    // A new request restarts the reset protocol
                    GameState {
                        lives,
                        ball_reset_needed: true,
                        ball_reset_in_progress: false,
                        ..state.clone()
                    }
                }
            }
        }
    }

    /// Requested -> in progress. No-op unless a reset was requested.
    pub fn announced_ball_reset_in_progress(&self, state: &GameState) -> GameState {
        if !state.ball_reset_needed {
            return state.clone();
        }
        GameState {
            ball_reset_needed: false,
            ball_reset_in_progress: true,
            ..state.clone()
        }
    }

    /// In progress -> idle. Leaves `ball_reset_needed` alone.
    pub fn acknowledge_ball_reset(&self, state: &GameState) -> GameState {
        GameState {
            ball_reset_in_progress: false,
            ..state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Brick, BrickColor, BrickId, LevelId, brick_map};
    use glam::Vec2;

    fn playing_state(lives: u32, bricks: Vec<Brick>) -> GameState {
        GameState {
            status: GameStatus::Playing,
            ..GameState::new(LevelId::from("L1"), lives, brick_map(bricks))
        }
    }

    fn red(id: &str) -> Brick {
        Brick::new(id, BrickColor::Red, Vec2::ZERO)
    }

    #[test]
    fn test_start_from_idle() {
        let reducer = GameReducer::new();
        let state = GameState::default();
        let started = reducer.start(&state);
        assert_eq!(started.status, GameStatus::Playing);
    }

    #[test]
    fn test_start_ignored_when_not_idle() {
        let reducer = GameReducer::new();
        for status in [GameStatus::Playing, GameStatus::Won, GameStatus::GameOver] {
            let state = GameState {
                status,
                ..GameState::default()
            };
            assert_eq!(reducer.start(&state), state);
        }
    }

    #[test]
    fn test_brick_hit_scores_and_removes() {
        let reducer = GameReducer::new();
        let state = playing_state(3, vec![red("a"), Brick::new("b", BrickColor::Yellow, Vec2::ZERO)]);

        let next = reducer.reduce(&state, &GameEvent::BrickHit(BrickId::from("b")));
        assert_eq!(next.score, 4);
        assert!(!next.bricks.contains_key(&BrickId::from("b")));
        assert_eq!(next.bricks.len(), 1);
        assert_eq!(next.status, GameStatus::Playing);
    }

    #[test]
    fn test_last_brick_wins() {
        let reducer = GameReducer::new();
        let state = playing_state(3, vec![red("a")]);

        let next = reducer.reduce(&state, &GameEvent::BrickHit(BrickId::from("a")));
        assert_eq!(next.status, GameStatus::Won);
        assert!(next.bricks.is_empty());
        assert_eq!(next.score, 7);
    }

    #[test]
    fn test_brick_hit_score_saturates() {
        let reducer = GameReducer::new();
        let state = GameState {
            score: u64::MAX - 1,
            ..playing_state(3, vec![red("a"), red("b")])
        };

        let next = reducer.reduce(&state, &GameEvent::BrickHit(BrickId::from("a")));
        assert_eq!(next.score, u64::MAX);
        assert_eq!(next.bricks.len(), 1);
        assert_eq!(next.status, GameStatus::Playing);
    }

    #[test]
    fn test_unknown_brick_is_noop() {
        let reducer = GameReducer::new();
        let state = playing_state(3, vec![red("a")]);

        let next = reducer.reduce(&state, &GameEvent::BrickHit(BrickId::from("zzz")));
        assert_eq!(next, state);
    }

    #[test]
    fn test_ball_lost_requests_reset() {
        let reducer = GameReducer::new();
        let state = playing_state(3, vec![red("a")]);

        let next = reducer.reduce(&state, &GameEvent::BallLost);
        assert_eq!(next.lives, 2);
        assert_eq!(next.status, GameStatus::Playing);
        assert!(next.ball_reset_needed);
    }

    #[test]
    fn test_final_life_is_game_over_without_reset() {
        let reducer = GameReducer::new();
        let state = playing_state(1, vec![red("a")]);

        let next = reducer.reduce(&state, &GameEvent::BallLost);
        assert_eq!(next.lives, 0);
        assert_eq!(next.status, GameStatus::GameOver);
        assert!(!next.ball_reset_needed);
    }

    #[test]
    fn test_reset_protocol_phases() {
        let reducer = GameReducer::new();
        let state = playing_state(3, vec![red("a")]);

        // Not requested yet: announce is a no-op
        assert_eq!(reducer.announced_ball_reset_in_progress(&state), state);

        let requested = reducer.reduce(&state, &GameEvent::BallLost);
        let in_progress = reducer.announced_ball_reset_in_progress(&requested);
        assert!(!in_progress.ball_reset_needed);
        assert!(in_progress.ball_reset_in_progress);

        let done = reducer.acknowledge_ball_reset(&in_progress);
        assert!(!done.ball_reset_needed);
        assert!(!done.ball_reset_in_progress);
    }

    #[test]
    fn test_ball_lost_during_reset_restarts_protocol() {
        let reducer = GameReducer::new();
        let state = GameState {
            ball_reset_in_progress: true,
            ..playing_state(3, vec![red("a")])
        };
        let next = reducer.reduce(&state, &GameEvent::BallLost);
        assert!(next.ball_reset_needed);
        assert!(!next.ball_reset_in_progress);
        assert!(next.invariants_hold());
    }

    #[test]
    fn test_acknowledge_keeps_reset_request() {
        let reducer = GameReducer::new();
        let state = GameState {
            ball_reset_needed: true,
            ..playing_state(2, vec![red("a")])
        };
        let acked = reducer.acknowledge_ball_reset(&state);
        assert!(acked.ball_reset_needed);
        assert!(!acked.ball_reset_in_progress);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = BrickColor> {
            prop_oneof![
                Just(BrickColor::Red),
                Just(BrickColor::Orange),
                Just(BrickColor::Yellow),
                Just(BrickColor::Green),
            ]
        }

        fn any_status() -> impl Strategy<Value = GameStatus> {
            prop_oneof![
                Just(GameStatus::Idle),
                Just(GameStatus::Playing),
                Just(GameStatus::Won),
                Just(GameStatus::GameOver),
            ]
        }

        prop_compose! {
            fn any_state()(
                score in 0u64..10_000,
                lives in 0u32..6,
                status in any_status(),
                colors in prop::collection::vec(any_color(), 0..12),
                reset_phase in 0u8..3,
            ) -> GameState {
                let bricks = brick_map(
                    colors
                        .into_iter()
                        .enumerate()
                        .map(|(i, c)| Brick::new(format!("b{i}"), c, Vec2::new(i as f32, 0.0))),
                );
                GameState {
                    score,
                    lives,
                    status,
                    level_id: LevelId::from("L1"),
                    bricks,
                    ball_reset_needed: reset_phase == 1,
                    ball_reset_in_progress: reset_phase == 2,
                }
            }
        }

        fn any_event() -> impl Strategy<Value = GameEvent> {
            prop_oneof![
                Just(GameEvent::BallLost),
                (0usize..16).prop_map(|i| GameEvent::BrickHit(BrickId::new(format!("b{i}")))),
            ]
        }

        proptest! {
            /// Property: events are ignored unless the game is playing
            #[test]
            fn prop_not_playing_is_noop(state in any_state(), event in any_event()) {
                prop_assume!(state.status != GameStatus::Playing);
                prop_assert_eq!(GameReducer.reduce(&state, &event), state);
            }

            /// Property: hitting an absent brick changes nothing
            #[test]
            fn prop_missing_brick_is_noop(state in any_state()) {
                let mut state = state;
                state.status = GameStatus::Playing;
                let event = GameEvent::BrickHit(BrickId::from("missing"));
                prop_assert_eq!(GameReducer.reduce(&state, &event), state);
            }

            /// Property: a brick hit adds exactly its value and removes it
            #[test]
            fn prop_brick_hit_adds_value(state in any_state(), pick in 0usize..12) {
                let mut state = state;
                state.status = GameStatus::Playing;
                state.lives = state.lives.max(1);
                prop_assume!(!state.bricks.is_empty());

                let mut ids: Vec<_> = state.bricks.keys().cloned().collect();
                ids.sort();
                let id = ids[pick % ids.len()].clone();
                let value = state.bricks[&id].value();

                let next = GameReducer.reduce(&state, &GameEvent::BrickHit(id.clone()));
                prop_assert_eq!(next.score, state.score + value);
                prop_assert!(!next.bricks.contains_key(&id));
                prop_assert_eq!(next.bricks.len(), state.bricks.len() - 1);
                prop_assert_eq!(next.status == GameStatus::Won, next.bricks.is_empty());
            }

            /// Property: ball loss costs exactly one life and never requests a
            /// reset after game over
            #[test]
            fn prop_ball_lost_decrements(state in any_state()) {
                let mut state = state;
                state.status = GameStatus::Playing;
                state.lives = state.lives.max(1);

                let next = GameReducer.reduce(&state, &GameEvent::BallLost);
                prop_assert_eq!(next.lives, state.lives - 1);
                if next.lives == 0 {
                    prop_assert_eq!(next.status, GameStatus::GameOver);
                    prop_assert!(!next.ball_reset_needed);
                } else {
                    prop_assert_eq!(next.status, GameStatus::Playing);
                    prop_assert!(next.ball_reset_needed);
                }
            }

            /// Property: score never decreases across one reduction
            #[test]
            fn prop_score_non_decreasing(state in any_state(), event in any_event()) {
                let next = GameReducer.reduce(&state, &event);
                prop_assert!(next.score >= state.score);
            }

            /// Property: announce is a no-op unless a reset was requested
            #[test]
            fn prop_announce_requires_request(state in any_state()) {
                let next = GameReducer.announced_ball_reset_in_progress(&state);
                if state.ball_reset_needed {
                    prop_assert!(!next.ball_reset_needed);
                    prop_assert!(next.ball_reset_in_progress);
                } else {
                    prop_assert_eq!(next, state);
                }
            }

            /// Property: acknowledge always clears the in-progress flag
            #[test]
            fn prop_acknowledge_clears(state in any_state()) {
                let next = GameReducer.acknowledge_ball_reset(&state);
                prop_assert!(!next.ball_reset_in_progress);
                prop_assert_eq!(next.ball_reset_needed, state.ball_reset_needed);
            }
        }
    }
}
