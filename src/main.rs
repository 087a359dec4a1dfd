//! Centipong native runner
//!
//! Plays a headless attract-mode game: the player paddle is steered by a
//! simple tracker instead of a keyboard, sounds and scores are logged, and
//! the final session snapshot is printed as JSON.
//!
//! Usage: `centipong [SEED] [FRAMES] [SETTINGS.json]`

use anyhow::{Context, Result};

use centipong::Settings;
use centipong::audio::{AudioManager, SoundEvent, ToneGenerator, ToneProfile};
use centipong::consts::FRAME_DT;
use centipong::game::Game;
use centipong::platform::{InputSource, ScoreDisplay};
use centipong::renderer::FrameCapture;
use centipong::sim::{GameSession, TickInput};

const DEFAULT_SEED: u64 = 0xC3A7;
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Presses start once, then chases a target height with the player paddle
#[derive(Debug, Default)]
struct DemoInput {
    started: bool,
    target_y: f32,
    paddle_center_y: f32,
    deadband: f32,
}

impl InputSource for DemoInput {
    fn current_input(&mut self) -> TickInput {
        if !self.started {
            self.started = true;
            return TickInput {
                start: true,
                ..Default::default()
            };
        }
        let diff = self.target_y - self.paddle_center_y;
        TickInput {
            up: diff < -self.deadband,
            down: diff > self.deadband,
            start: false,
        }
    }
}

/// Stands in for a sound device by logging each tone
struct ToneTrace;

impl ToneGenerator for ToneTrace {
    fn play_tone(&mut self, tone: &ToneProfile, volume: f32) {
        log::debug!(
            "tone {} Hz -> {:?} Hz over {}s at volume {}",
            tone.start_hz,
            tone.ramp_to_hz,
            tone.duration_secs,
            volume
        );
    }
}

/// Logs every score change
#[derive(Debug, Default)]
struct ScoreLog {
    player: u32,
    computer: u32,
}

impl ScoreDisplay for ScoreLog {
    fn show(&mut self, player: u32, computer: u32) {
        self.player = player;
        self.computer = computer;
        log::info!("Score: player {} - computer {}", player, computer);
    }
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed '{}'", s))?,
        None => DEFAULT_SEED,
    };
    let frames: u64 = match args.next() {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid frame count '{}'", s))?,
        None => DEFAULT_FRAMES,
    };
    let settings = match args.next() {
        Some(path) => Settings::load(&path).with_context(|| format!("loading {}", path))?,
        None => Settings::default(),
    };

    log::info!("Centipong starting (seed {}, {} frames)", seed, frames);

    let deadband = settings.ai_deadband;
    let session = GameSession::new(settings, seed).context("invalid settings")?;
    let input = DemoInput {
        deadband,
        ..Default::default()
    };
    let mut game = Game::new(
        session,
        input,
        Some(AudioManager::new(Some(Box::new(ToneTrace)))),
        FrameCapture::default(),
        ScoreLog::default(),
    );

    for _ in 0..frames {
        let target_y = game.session.ball.pos.y;
        let paddle_center_y = game.session.player_paddle.center_y();
        let input = game.input_mut();
        input.target_y = target_y;
        input.paddle_center_y = paddle_center_y;

        game.frame(FRAME_DT);
    }

    if let Some(audio) = game.audio() {
        log::info!(
            "Sounds: {} paddle, {} wall, {} centipede, {} score",
            audio.count(SoundEvent::Paddle),
            audio.count(SoundEvent::Wall),
            audio.count(SoundEvent::Centipede),
            audio.count(SoundEvent::Score),
        );
    }
    log::info!(
        "Rendered {} frames, final scores {} - {}",
        game.renderer().frames,
        game.scores().player,
        game.scores().computer
    );

    let snapshot = game.session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
