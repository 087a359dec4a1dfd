//! Per-frame simulation tick
//!
//! Core game loop that advances the session by exactly one frame.

use super::paddle::PaddleIntent;
use super::state::{GameEvent, GamePhase, GameSession, Side};
use crate::consts::FRAME_DT;

/// Input commands for a single tick, polled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the player paddle up (wins over `down`)
    pub up: bool,
    /// Move the player paddle down
    pub down: bool,
    /// Start the game
    pub start: bool,
}

impl TickInput {
    pub fn intent(&self) -> PaddleIntent {
        if self.up {
            PaddleIntent::Up
        } else if self.down {
            PaddleIntent::Down
        } else {
            PaddleIntent::Stop
        }
    }
}

/// Advance the session by one frame
///
/// `dt` is the wall-clock length of the frame in seconds and only drives the
/// serve delay. All motion is per frame. A non-finite `dt` counts as one
/// nominal frame and a negative one as zero.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    match session.phase {
        GamePhase::NotStarted => {
            if input.start {
                session.start();
            }
            return;
        }
        GamePhase::ServeDelay => {
            let dt = if dt.is_finite() { dt.max(0.0) } else { FRAME_DT };
            session.serve_delay_remaining -= dt;
            if session.serve_delay_remaining <= 0.0 {
                session.serve_delay_remaining = 0.0;
                session.serve_ball();
                session.phase = GamePhase::Running;
            }
            return;
        }
        GamePhase::Running => {}
    }

    session.frame += 1;

    session.player_paddle.set_intent(input.intent());
    update_ai(session);
    update_centipedes(session);

    let height = session.settings.height;
    session.player_paddle.advance(height);
    session.computer_paddle.advance(height);
    if let Some(sound) = session.ball.advance(height) {
        session.events.push(GameEvent::Sound(sound));
    }

    // Both sides are checked independently
    if session.ball.collides_with_paddle(&session.player_paddle) {
        let sound = session.ball.resolve_paddle_collision(&session.player_paddle);
        session.events.push(GameEvent::Sound(sound));
    }
    if session.ball.collides_with_paddle(&session.computer_paddle) {
        let sound = session.ball.resolve_paddle_collision(&session.computer_paddle);
        session.events.push(GameEvent::Sound(sound));
    }

    // At most one centipede bounce per frame: oldest centipede, then head first
    let hit = session
        .centipedes
        .iter()
        .find_map(|c| c.collides_with_ball(&session.ball).copied());
    if let Some(segment) = hit {
        let sound = session.ball.resolve_segment_collision(&segment);
        session.events.push(GameEvent::Sound(sound));
    }

    if session.ball.pos.x < 0.0 {
        session.award_point(Side::Computer);
    } else if session.ball.pos.x > session.settings.width {
        session.award_point(Side::Player);
    }
}

/// Chase the ball's height with the computer paddle outside the deadband
fn update_ai(session: &mut GameSession) {
    let paddle = &mut session.computer_paddle;
    let diff = session.ball.pos.y - paddle.center_y();

    let intent = if diff.abs() > session.settings.ai_deadband {
        if diff > 0.0 {
            PaddleIntent::Down
        } else {
            PaddleIntent::Up
        }
    } else {
        PaddleIntent::Stop
    };
    paddle.set_intent(intent);
}

/// Count down to the next spawn, move every centipede, then drop the ones
/// that have crawled off the bottom
fn update_centipedes(session: &mut GameSession) {
    session.spawn_timer += 1;
    if session.spawn_timer >= session.settings.centipede_spawn_interval {
        session.spawn_centipede();
        session.spawn_timer = 0;
    }

    let (width, height) = (session.settings.width, session.settings.height);
    for centipede in &mut session.centipedes {
        centipede.advance(width, height);
    }

    let before = session.centipedes.len();
    session.centipedes.retain(|c| !c.is_off_screen(height));
    let removed = before - session.centipedes.len();
    if removed > 0 {
        log::debug!("Removed {} centipede(s) below the playfield", removed);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::audio::SoundEvent;
    use crate::settings::Settings;
    use crate::sim::Centipede;

    fn started(seed: u64) -> GameSession {
        let mut session = GameSession::new(Settings::default(), seed).unwrap();
        tick(
            &mut session,
            &TickInput {
                start: true,
                ..Default::default()
            },
            FRAME_DT,
        );
        session.drain_events();
        session
    }

    fn sounds(events: &[GameEvent]) -> Vec<SoundEvent> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_waits_for_start() {
        let mut session = GameSession::new(Settings::default(), 1).unwrap();
        for _ in 0..10 {
            tick(&mut session, &TickInput::default(), FRAME_DT);
        }
        assert_eq!(session.phase, GamePhase::NotStarted);
        assert_eq!(session.frame, 0);
        assert!(session.centipedes.is_empty());

        tick(
            &mut session,
            &TickInput {
                start: true,
                ..Default::default()
            },
            FRAME_DT,
        );
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.centipedes.len(), 1);
        assert_eq!(session.ball.pos, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_input_priority() {
        let both = TickInput {
            up: true,
            down: true,
            start: false,
        };
        assert_eq!(both.intent(), PaddleIntent::Up);
        let down = TickInput {
            down: true,
            ..Default::default()
        };
        assert_eq!(down.intent(), PaddleIntent::Down);
        assert_eq!(TickInput::default().intent(), PaddleIntent::Stop);
    }

    #[test]
    fn test_player_paddle_follows_input() {
        let mut session = started(3);
        session.ball.vel = Vec2::ZERO;
        let up = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut session, &up, FRAME_DT);
        assert_eq!(session.player_paddle.pos.y, 155.0);
        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.player_paddle.pos.y, 155.0);
    }

    #[test]
    fn test_ai_deadband() {
        let mut session = started(3);
        session.centipedes.clear();
        session.ball.vel = Vec2::ZERO;

        // Within 10 of the paddle centre (200): no movement
        session.ball.pos = Vec2::new(400.0, 209.0);
        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.computer_paddle.pos.y, 160.0);

        session.ball.pos = Vec2::new(400.0, 260.0);
        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.computer_paddle.pos.y, 165.0);

        session.ball.pos = Vec2::new(400.0, 50.0);
        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.computer_paddle.pos.y, 160.0);
    }

    #[test]
    fn test_left_exit_scores_for_computer() {
        let mut session = started(11);
        session.centipedes.clear();
        session.ball.pos = Vec2::new(5.0, 200.0);
        session.ball.vel = Vec2::new(-4.0, 0.0);
        // Keep the player paddle out of the way
        session.player_paddle.pos.y = 0.0;

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.ball.pos.x, 1.0);
        assert_eq!(session.computer_score, 0);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert!(session.ball.pos.x < 0.0);
        assert_eq!(session.computer_score, 1);
        assert_eq!(session.player_score, 0);
        assert_eq!(session.phase, GamePhase::ServeDelay);
        let events = session.drain_events();
        assert_eq!(sounds(&events), vec![SoundEvent::Score]);
        assert!(events.contains(&GameEvent::ScoreChanged {
            player: 0,
            computer: 1
        }));

        // Frozen for one second of frames
        let frozen_pos = session.ball.pos;
        let paddle_y = session.computer_paddle.pos.y;
        for _ in 0..59 {
            tick(&mut session, &TickInput::default(), FRAME_DT);
            assert_eq!(session.ball.pos, frozen_pos);
            assert_eq!(session.computer_paddle.pos.y, paddle_y);
            assert_eq!(session.phase, GamePhase::ServeDelay);
        }
        assert_eq!(session.computer_score, 1);

        tick(&mut session, &TickInput::default(), 0.1);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.ball.pos, Vec2::new(400.0, 200.0));
        assert!(session.drain_events().contains(&GameEvent::Served));
    }

    #[test]
    fn test_right_exit_scores_for_player() {
        let mut session = started(12);
        session.centipedes.clear();
        session.computer_paddle.pos.y = 0.0;
        session.ball.pos = Vec2::new(798.0, 390.0);
        session.ball.vel = Vec2::new(4.0, 0.0);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.player_score, 1);
        assert_eq!(session.computer_score, 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_serve_delay_with_bad_frame_time() {
        let mut session = started(8);
        session.award_point(Side::Computer);

        tick(&mut session, &TickInput::default(), -5.0);
        assert_eq!(session.serve_delay_remaining, 1.0);

        // NaN frames still count down, one nominal frame each
        let mut frames = 0;
        while session.phase == GamePhase::ServeDelay && frames < 120 {
            tick(&mut session, &TickInput::default(), f32::NAN);
            frames += 1;
        }
        assert_eq!(session.phase, GamePhase::Running);
        assert!((59..=61).contains(&frames));
        assert!(session.serve_delay_remaining.is_finite());
    }

    #[test]
    fn test_serve_delay_freezes_centipedes() {
        let mut session = started(5);
        session.award_point(Side::Player);
        let before: Vec<_> = session.centipedes[0].segments.clone();
        let timer = session.spawn_timer;
        for _ in 0..30 {
            tick(&mut session, &TickInput::default(), FRAME_DT);
        }
        assert_eq!(session.centipedes[0].segments, before);
        assert_eq!(session.spawn_timer, timer);
    }

    #[test]
    fn test_paddle_return() {
        let mut session = started(8);
        session.centipedes.clear();
        session.ball.pos = Vec2::new(40.0, 200.0);
        session.ball.vel = Vec2::new(-4.0, 0.0);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert!(session.ball.vel.x > 0.0);
        assert_eq!(sounds(&session.drain_events()), vec![SoundEvent::Paddle]);
    }

    #[test]
    fn test_wall_bounce_sound() {
        let mut session = started(8);
        session.centipedes.clear();
        session.ball.pos = Vec2::new(400.0, 10.0);
        session.ball.vel = Vec2::new(2.0, -4.0);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.ball.vel.y, 4.0);
        assert_eq!(sounds(&session.drain_events()), vec![SoundEvent::Wall]);
    }

    #[test]
    fn test_one_centipede_bounce_per_frame() {
        let mut session = started(9);
        let settings = session.settings.clone();
        session.centipedes.clear();
        // Two centipedes stacked on the same spot
        let first = Centipede::new(100, Vec2::new(400.0, 100.0), 3, &settings);
        let second = Centipede::new(101, Vec2::new(400.0, 100.0), 3, &settings);
        session.centipedes.push(first);
        session.centipedes.push(second);

        session.ball.pos = Vec2::new(397.0, 115.0);
        session.ball.vel = Vec2::new(0.0, -4.0);
        tick(&mut session, &TickInput::default(), FRAME_DT);

        assert_eq!(sounds(&session.drain_events()), vec![SoundEvent::Centipede]);
        assert!(session.ball.vel.y > 0.0);
    }

    #[test]
    fn test_second_centipede_after_interval() {
        let mut session = started(21);
        assert_eq!(session.centipedes.len(), 1);
        session.ball.vel = Vec2::ZERO;

        for _ in 0..299 {
            tick(&mut session, &TickInput::default(), FRAME_DT);
        }
        assert_eq!(session.centipedes.len(), 1);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert_eq!(session.centipedes.len(), 2);
        assert!(session.centipedes[0].id < session.centipedes[1].id);
    }

    #[test]
    fn test_centipedes_pruned_below_playfield() {
        let mut session = started(4);
        session.ball.vel = Vec2::ZERO;
        session.centipedes[0]
            .segments
            .iter_mut()
            .for_each(|s| s.pos.y = 460.0);

        tick(&mut session, &TickInput::default(), FRAME_DT);
        assert!(session.centipedes.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = started(99999);
        let mut b = started(99999);
        let inputs = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                down: true,
                ..Default::default()
            },
        ];

        for i in 0..2000 {
            let input = inputs[i % inputs.len()];
            tick(&mut a, &input, FRAME_DT);
            tick(&mut b, &input, FRAME_DT);
        }

        assert_eq!(a.frame, b.frame);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.player_score, b.player_score);
        assert_eq!(a.computer_score, b.computer_score);
        assert_eq!(a.centipedes.len(), b.centipedes.len());
    }

    #[test]
    fn test_invariants_over_long_run() {
        let mut session = started(31337);
        let height = session.settings.height;
        for i in 0..5000 {
            let input = TickInput {
                up: i % 90 < 30,
                down: i % 90 >= 60,
                start: false,
            };
            tick(&mut session, &input, FRAME_DT);

            for paddle in [&session.player_paddle, &session.computer_paddle] {
                assert!(paddle.pos.y >= 0.0);
                assert!(paddle.pos.y + paddle.height <= height);
            }
            for c in &session.centipedes {
                for pair in c.segments.windows(2) {
                    assert!(pair[0].pos.distance(pair[1].pos) <= c.spacing + 1e-3);
                }
            }
        }
    }
}
