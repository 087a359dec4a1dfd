//! Centipong - Pong with a centipede in the way
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, centipedes, scoring)
//! - `settings`: Playfield dimensions and tuning, validated at session start
//! - `audio`: Sound event categories and their tone profiles
//! - `platform`: Input polling and score display contracts
//! - `renderer`: Draw command generation for a render sink
//! - `game`: Frame driver wiring the simulation to its collaborators

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Speeds are in playfield units per frame.
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Left edge of the player paddle
    pub const PLAYER_PADDLE_X: f32 = 20.0;
    /// Distance from the right edge to the computer paddle's left edge
    pub const COMPUTER_PADDLE_INSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_MAX_SPEED: f32 = 8.0;
    /// Serve angle is drawn from [-SERVE_HALF_ANGLE, SERVE_HALF_ANGLE]
    pub const SERVE_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
    /// Vertical speed factor applied to the paddle hit offset
    pub const PADDLE_STEER: f32 = 0.75;
    /// Speed-up multiplier on every paddle return below the cap
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Centipede defaults
    pub const CENTIPEDE_HORIZONTAL_SPEED: f32 = 3.0;
    pub const CENTIPEDE_VERTICAL_SPEED: f32 = 1.5;
    pub const CENTIPEDE_ZIGZAG_DISTANCE: f32 = 60.0;
    pub const CENTIPEDE_SEGMENT_SPACING: f32 = 15.0;
    pub const CENTIPEDE_SEGMENT_RADIUS: f32 = 6.0;
    pub const CENTIPEDE_EDGE_MARGIN: f32 = 30.0;
    pub const CENTIPEDE_OFFSCREEN_MARGIN: f32 = 50.0;
    pub const CENTIPEDE_SPAWN_Y: f32 = -20.0;
    pub const CENTIPEDE_SPAWN_MARGIN: f32 = 100.0;
    pub const CENTIPEDE_MIN_SEGMENTS: usize = 8;
    pub const CENTIPEDE_MAX_SEGMENTS: usize = 12;
    /// Frames between centipede spawns
    pub const CENTIPEDE_SPAWN_INTERVAL: u32 = 300;

    /// Opponent AI alignment deadband
    pub const AI_DEADBAND: f32 = 10.0;

    /// Pause after a point before the next serve (seconds)
    pub const SERVE_DELAY_SECS: f32 = 1.0;

    /// Nominal frame duration for the native runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Unit vector at `angle` radians from the +x axis
#[inline]
pub fn unit_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
