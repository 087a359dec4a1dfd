//! Game session state
//!
//! Everything the frame tick reads or mutates lives in one explicitly
//! constructed [`GameSession`]; there is no global game instance.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::centipede::Centipede;
use super::paddle::Paddle;
use crate::audio::SoundEvent;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start trigger
    NotStarted,
    /// Active gameplay
    Running,
    /// Frozen after a point until the serve delay runs out
    ServeDelay,
}

/// Which side won a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// Something collaborators outside the simulation need to hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start trigger accepted
    Started,
    /// Ball re-centred and launched
    Served,
    Sound(SoundEvent),
    ScoreChanged { player: u32, computer: u32 },
}

/// Serializable view of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub frame: u64,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    pub ball: Ball,
    pub centipedes: Vec<Centipede>,
}

/// One game of Centipong
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    pub ball: Ball,
    /// Active centipedes, oldest first
    pub centipedes: Vec<Centipede>,
    /// Frames since the last centipede spawn
    pub spawn_timer: u32,
    /// Seconds left before the next serve while in `ServeDelay`
    pub serve_delay_remaining: f32,
    /// Frames simulated while running
    pub frame: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameSession {
    /// Create a session with the given seed; rejects invalid settings
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let paddle_y = settings.paddle_start_y();
        let player_paddle = Paddle::new(
            settings.player_paddle_x,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let computer_paddle = Paddle::new(
            settings.computer_paddle_x(),
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let ball = Ball::new(&settings);

        log::info!(
            "New session {}x{} (seed {})",
            settings.width,
            settings.height,
            seed
        );

        Ok(Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            player_score: 0,
            computer_score: 0,
            player_paddle,
            computer_paddle,
            ball,
            centipedes: Vec::new(),
            spawn_timer: 0,
            serve_delay_remaining: 0.0,
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Leave `NotStarted`: serve and release the first centipede
    ///
    /// Ignored once the game has started.
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        log::info!("Game started");
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        self.serve_ball();
        self.spawn_centipede();
    }

    /// Re-centre the ball and launch it
    pub fn serve_ball(&mut self) {
        let (width, height) = (self.settings.width, self.settings.height);
        self.ball.serve(width, height, &mut self.rng);
        log::debug!("Served ball with velocity {:?}", self.ball.vel);
        self.events.push(GameEvent::Served);
    }

    /// Drop a new centipede in above the top edge at a random column
    pub fn spawn_centipede(&mut self) {
        let s = &self.settings;
        let x_range = s.centipede_spawn_margin..(s.width - s.centipede_spawn_margin);
        let count_range = s.centipede_min_segments..=s.centipede_max_segments;
        let spawn_y = s.centipede_spawn_y;

        let x = self.rng.random_range(x_range);
        let count = self.rng.random_range(count_range);
        let id = self.next_entity_id();

        let centipede = Centipede::new(id, Vec2::new(x, spawn_y), count, &self.settings);
        log::debug!("Spawned centipede {} at x={:.1} with {} segments", id, x, count);
        self.centipedes.push(centipede);
    }

    /// Credit a point and freeze the session for the serve delay
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Computer => self.computer_score += 1,
        }
        log::info!(
            "{:?} scores: {} - {}",
            side,
            self.player_score,
            self.computer_score
        );

        self.events.push(GameEvent::Sound(SoundEvent::Score));
        self.events.push(GameEvent::ScoreChanged {
            player: self.player_score,
            computer: self.computer_score,
        });

        self.phase = GamePhase::ServeDelay;
        self.serve_delay_remaining = self.settings.serve_delay_secs;
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seed: self.seed,
            phase: self.phase,
            frame: self.frame,
            player_score: self.player_score,
            computer_score: self.computer_score,
            player_paddle: self.player_paddle.clone(),
            computer_paddle: self.computer_paddle.clone(),
            ball: self.ball.clone(),
            centipedes: self.centipedes.clone(),
        }
    }
}
