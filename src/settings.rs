//! Session settings
//!
//! Playfield dimensions and gameplay tuning. Immutable for the lifetime of a
//! session; rejected up front if any value would break the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield and tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical speed while a move intent is held
    pub paddle_speed: f32,
    /// Left edge of the player paddle
    pub player_paddle_x: f32,
    /// Distance from the right edge to the computer paddle's left edge
    pub computer_paddle_inset: f32,
    /// Opponent stops chasing once within this distance of the ball
    pub ai_deadband: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_max_speed: f32,
    pub serve_half_angle: f32,
    pub paddle_steer: f32,
    pub paddle_boost: f32,
    /// Seconds frozen after a point
    pub serve_delay_secs: f32,

    // === Centipedes ===
    pub centipede_horizontal_speed: f32,
    pub centipede_vertical_speed: f32,
    pub centipede_zigzag_distance: f32,
    pub centipede_segment_spacing: f32,
    pub centipede_segment_radius: f32,
    pub centipede_edge_margin: f32,
    pub centipede_offscreen_margin: f32,
    pub centipede_spawn_y: f32,
    pub centipede_spawn_margin: f32,
    pub centipede_min_segments: usize,
    pub centipede_max_segments: usize,
    /// Frames between spawns
    pub centipede_spawn_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            player_paddle_x: PLAYER_PADDLE_X,
            computer_paddle_inset: COMPUTER_PADDLE_INSET,
            ai_deadband: AI_DEADBAND,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            serve_half_angle: SERVE_HALF_ANGLE,
            paddle_steer: PADDLE_STEER,
            paddle_boost: PADDLE_BOOST,
            serve_delay_secs: SERVE_DELAY_SECS,

            centipede_horizontal_speed: CENTIPEDE_HORIZONTAL_SPEED,
            centipede_vertical_speed: CENTIPEDE_VERTICAL_SPEED,
            centipede_zigzag_distance: CENTIPEDE_ZIGZAG_DISTANCE,
            centipede_segment_spacing: CENTIPEDE_SEGMENT_SPACING,
            centipede_segment_radius: CENTIPEDE_SEGMENT_RADIUS,
            centipede_edge_margin: CENTIPEDE_EDGE_MARGIN,
            centipede_offscreen_margin: CENTIPEDE_OFFSCREEN_MARGIN,
            centipede_spawn_y: CENTIPEDE_SPAWN_Y,
            centipede_spawn_margin: CENTIPEDE_SPAWN_MARGIN,
            centipede_min_segments: CENTIPEDE_MIN_SEGMENTS,
            centipede_max_segments: CENTIPEDE_MAX_SEGMENTS,
            centipede_spawn_interval: CENTIPEDE_SPAWN_INTERVAL,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl Settings {
    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims_ok = [self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !dims_ok {
            return Err(ConfigError::Playfield {
                width: self.width,
                height: self.height,
            });
        }

        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        if self.paddle_height > self.height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playfield: self.height,
            });
        }
        non_negative("ai_deadband", self.ai_deadband)?;

        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        positive("ball_max_speed", self.ball_max_speed)?;
        if self.ball_max_speed < self.ball_speed {
            return Err(ConfigError::MaxSpeedBelowBase {
                max: self.ball_max_speed,
                base: self.ball_speed,
            });
        }
        non_negative("serve_half_angle", self.serve_half_angle)?;
        // A serve must always carry the ball toward one of the sides
        if self.serve_half_angle >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::ServeAngle {
                angle: self.serve_half_angle,
            });
        }
        positive("paddle_steer", self.paddle_steer)?;
        positive("paddle_boost", self.paddle_boost)?;
        non_negative("serve_delay_secs", self.serve_delay_secs)?;

        positive("centipede_horizontal_speed", self.centipede_horizontal_speed)?;
        positive("centipede_vertical_speed", self.centipede_vertical_speed)?;
        positive("centipede_zigzag_distance", self.centipede_zigzag_distance)?;
        positive("centipede_segment_spacing", self.centipede_segment_spacing)?;
        positive("centipede_segment_radius", self.centipede_segment_radius)?;
        non_negative("centipede_edge_margin", self.centipede_edge_margin)?;
        non_negative("centipede_offscreen_margin", self.centipede_offscreen_margin)?;
        non_negative("centipede_spawn_margin", self.centipede_spawn_margin)?;
        if !self.centipede_spawn_y.is_finite() {
            return Err(ConfigError::Negative {
                field: "centipede_spawn_y",
                value: self.centipede_spawn_y,
            });
        }
        if self.centipede_min_segments == 0
            || self.centipede_min_segments > self.centipede_max_segments
        {
            return Err(ConfigError::SegmentRange {
                min: self.centipede_min_segments,
                max: self.centipede_max_segments,
            });
        }
        if self.centipede_spawn_interval == 0 {
            return Err(ConfigError::SpawnInterval);
        }
        if self.width <= 2.0 * self.centipede_spawn_margin {
            return Err(ConfigError::SpawnMargin {
                margin: self.centipede_spawn_margin,
                width: self.width,
            });
        }

        Ok(())
    }

    /// Parse settings from JSON (missing fields take defaults) and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Left edge of the computer paddle
    pub fn computer_paddle_x(&self) -> f32 {
        self.width - self.computer_paddle_inset
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }
}
