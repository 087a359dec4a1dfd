//! Paddles
//!
//! Rectangles that slide vertically and are hard-clamped to the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Requested vertical movement for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Stop,
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Speed applied while an intent is held
    pub speed: f32,
    /// Current vertical velocity (negative is up)
    pub vel_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
            speed,
            vel_y: 0.0,
        }
    }

    pub fn set_intent(&mut self, intent: PaddleIntent) {
        self.vel_y = match intent {
            PaddleIntent::Up => -self.speed,
            PaddleIntent::Down => self.speed,
            PaddleIntent::Stop => 0.0,
        };
    }

    /// Move by the current velocity, then clamp into `[0, playfield_height - height]`
    pub fn advance(&mut self, playfield_height: f32) {
        self.pos.y += self.vel_y;
        self.pos.y = self.pos.y.clamp(0.0, playfield_height - self.height);
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}
