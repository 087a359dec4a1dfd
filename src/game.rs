//! Frame driver
//!
//! Owns the session and the host collaborators, and runs the per-frame
//! sequence: poll input, tick, dispatch events, draw.

use crate::audio::AudioSink;
use crate::platform::{InputSource, ScoreDisplay};
use crate::renderer::{RenderSink, build_frame};
use crate::sim::{GameEvent, GamePhase, GameSession, tick};

/// Game instance holding the session and everything it talks to
pub struct Game<I, A, R, S> {
    pub session: GameSession,
    input: I,
    /// `None` when the host has no audio; sounds are dropped
    audio: Option<A>,
    renderer: R,
    scores: S,
    last_phase: GamePhase,
}

impl<I, A, R, S> Game<I, A, R, S>
where
    I: InputSource,
    A: AudioSink,
    R: RenderSink,
    S: ScoreDisplay,
{
    pub fn new(session: GameSession, input: I, audio: Option<A>, renderer: R, scores: S) -> Self {
        if audio.is_none() {
            log::warn!("No audio sink - sound events will be dropped");
        }
        let last_phase = session.phase;
        Self {
            session,
            input,
            audio,
            renderer,
            scores,
            last_phase,
        }
    }

    /// Run one display frame
    pub fn frame(&mut self, dt: f32) {
        let input = self.input.current_input();
        tick(&mut self.session, &input, dt);

        for event in self.session.drain_events() {
            match event {
                GameEvent::Sound(sound) => {
                    if let Some(audio) = self.audio.as_mut() {
                        audio.play(sound);
                    }
                }
                GameEvent::ScoreChanged { player, computer } => {
                    self.scores.show(player, computer);
                }
                GameEvent::Started | GameEvent::Served => {}
            }
        }

        let current_phase = self.session.phase;
        if current_phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, current_phase);
            self.last_phase = current_phase;
        }

        let commands = build_frame(&self.session);
        self.renderer.submit(&commands);
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn audio(&self) -> Option<&A> {
        self.audio.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::audio::{AudioManager, SoundEvent};
    use crate::consts::FRAME_DT;
    use crate::platform::{KeyboardState, ScoreBoard};
    use crate::renderer::{DrawCommand, FrameCapture};
    use crate::settings::Settings;

    type TestGame = Game<KeyboardState, AudioManager, FrameCapture, ScoreBoard>;

    fn game(audio: Option<AudioManager>) -> TestGame {
        let session = GameSession::new(Settings::default(), 2024).unwrap();
        Game::new(
            session,
            KeyboardState::default(),
            audio,
            FrameCapture::default(),
            ScoreBoard::default(),
        )
    }

    #[test]
    fn test_start_key_starts_game() {
        let mut game = game(Some(AudioManager::default()));
        game.frame(FRAME_DT);
        assert_eq!(game.session.phase, GamePhase::NotStarted);
        assert!(matches!(
            game.renderer().last.last(),
            Some(DrawCommand::Text { .. })
        ));

        game.input_mut().key_down("Space");
        game.frame(FRAME_DT);
        assert_eq!(game.session.phase, GamePhase::Running);
        assert_eq!(game.renderer().frames, 2);
    }

    #[test]
    fn test_score_reaches_sinks() {
        let mut game = game(Some(AudioManager::default()));
        game.input_mut().key_down("Space");
        game.frame(FRAME_DT);
        game.input_mut().key_up("Space");

        game.session.centipedes.clear();
        game.session.player_paddle.pos.y = 0.0;
        game.session.ball.pos = Vec2::new(3.0, 200.0);
        game.session.ball.vel = Vec2::new(-4.0, 0.0);
        game.frame(FRAME_DT);

        assert_eq!(game.scores().computer, 1);
        assert_eq!(game.scores().updates, 1);
        let audio = game.audio().unwrap();
        assert_eq!(audio.count(SoundEvent::Score), 1);
    }

    #[test]
    fn test_missing_audio_is_tolerated() {
        let mut game = game(None);
        game.input_mut().key_down("Space");
        game.frame(FRAME_DT);
        game.session.centipedes.clear();
        game.session.player_paddle.pos.y = 0.0;
        game.session.ball.pos = Vec2::new(3.0, 200.0);
        game.session.ball.vel = Vec2::new(-4.0, 0.0);
        game.frame(FRAME_DT);

        assert!(game.audio().is_none());
        assert_eq!(game.scores().computer, 1);
    }

    #[test]
    fn test_boxed_collaborators() {
        let session = GameSession::new(Settings::default(), 1).unwrap();
        let mut game: Game<
            Box<dyn InputSource>,
            Box<dyn AudioSink>,
            Box<dyn RenderSink>,
            Box<dyn ScoreDisplay>,
        > = Game::new(
            session,
            Box::new(KeyboardState::default()),
            None,
            Box::new(FrameCapture::default()),
            Box::new(ScoreBoard::default()),
        );
        for _ in 0..5 {
            game.frame(FRAME_DT);
        }
        assert_eq!(game.session.phase, GamePhase::NotStarted);
    }
}
