//! Brick Breaker headless demo
//!
//! Plays a scripted game against the bundled levels: drives the paddle and
//! ball controllers frame by frame, feeds contacts through the classifier
//! and lets the session handle level progression and ball resets.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the product on wasm
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use brick_breaker::consts::*;
    use brick_breaker::sim::{
        Ball, BallLaunchController, BallResetSequencer, ContactBody, GameSession, LevelId,
        Paddle, PaddleMotionController, ResetMode, category, classify,
    };
    use brick_breaker::{GameConfig, InMemoryGameStateRepository, LevelCatalog};

    const SCENE_WIDTH: f32 = 320.0;
    const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    const LEVELS: [(&str, &str); 2] = [
        ("level1", include_str!("../levels/level1.json")),
        ("level2", include_str!("../levels/level2.json")),
    ];

    pub fn run() {
        let mut catalog = LevelCatalog::new();
        for (name, json) in LEVELS {
            catalog.insert_json_or_empty(LevelId::from(name), json);
        }

        let config = GameConfig::default().with_level_order(catalog.level_order().to_vec());
        let mut session =
            GameSession::from_config(InMemoryGameStateRepository::new(), catalog, &config);
        session.subscribe(|state| {
            log::debug!(
                "state: level '{}' score {} lives {} bricks {}",
                state.level_id,
                state.score,
                state.lives,
                state.bricks.len()
            );
        });

        let mut motion = PaddleMotionController::new(config.paddle_speed);
        let mut launcher = BallLaunchController::new(config.launch_speed);
        let mut sequencer = BallResetSequencer::new(config.reset_delay_ticks, ResetMode::Paddle);
        let mut paddle = Paddle::new(SCENE_WIDTH / 2.0, 24.0, PADDLE_WIDTH, PADDLE_HEIGHT);
        let mut ball = Ball::new(config.ball_radius);

        session.start_game();
        launcher.clamp(&mut ball, &paddle);

        // Slide right for half a second, then drag back to centre
        motion.start_right();
        for _ in 0..FRAME_RATE / 2 {
            paddle = motion.update(&paddle, FRAME_DT, SCENE_WIDTH);
            sequencer.step(&mut session, &mut launcher, &mut ball, &paddle);
        }
        motion.stop();
        paddle = motion.override_position(&paddle, SCENE_WIDTH / 2.0, SCENE_WIDTH);
        motion.end_override();
        log::info!("Paddle at x={:.1}", paddle.x);

        launcher.launch(&mut ball);
        let ball_body = ContactBody::new(category::BALL);

        // Miss once so the reset protocol runs
        contact(&mut session, &ball_body, &ContactBody::new(category::GUTTER));
        while session.state().ball_reset_needed || sequencer.is_pending() {
            sequencer.step(&mut session, &mut launcher, &mut ball, &paddle);
        }
        launcher.launch(&mut ball);

        // Clear every level brick by brick
        while session.state().is_playing() {
            let state = session.state();
            let mut ids: Vec<_> = state.bricks.keys().cloned().collect();
            ids.sort();
            let Some(id) = ids.into_iter().next() else {
                break;
            };
            contact(&mut session, &ball_body, &ContactBody::new(category::PADDLE));
            contact(
                &mut session,
                &ContactBody::named(category::BRICK, id.as_str()),
                &ball_body,
            );
        }

        let state = session.state();
        log::info!(
            "Finished: {:?} on level '{}' with score {} and {} lives left",
            state.status,
            state.level_id,
            state.score,
            state.lives
        );
    }

    fn contact(
        session: &mut GameSession<InMemoryGameStateRepository, LevelCatalog>,
        a: &ContactBody,
        b: &ContactBody,
    ) {
        let outcome = classify(a, b);
        if let Some(event) = outcome.game_event() {
            session.handle(event);
        }
    }
}
