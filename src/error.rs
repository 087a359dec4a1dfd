//! Error types

use thiserror::Error;

/// Rejected session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("playfield must have positive finite dimensions, got {width}x{height}")]
    Playfield { width: f32, height: f32 },

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in playfield height {playfield}")]
    PaddleTooTall { paddle: f32, playfield: f32 },

    #[error("ball max speed {max} is below base speed {base}")]
    MaxSpeedBelowBase { max: f32, base: f32 },

    #[error("centipede segment range {min}..={max} is empty")]
    SegmentRange { min: usize, max: usize },

    #[error("centipede spawn interval must be at least one frame")]
    SpawnInterval,

    #[error("spawn margin {margin} leaves no room in playfield width {width}")]
    SpawnMargin { margin: f32, width: f32 },

    #[error("serve half-angle {angle} rad must be below a right angle")]
    ServeAngle { angle: f32 },

    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
}
