//! The ball
//!
//! Integrates by velocity each frame, bounces off the top and bottom edges,
//! and reacts to paddles (steered, sped up) and centipede segments (mirror
//! reflection, no speed cap).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::centipede::CentipedeSegment;
use super::collision::{circle_box_overlap, circles_overlap, reflect};
use super::paddle::Paddle;
use crate::audio::SoundEvent;
use crate::settings::Settings;
use crate::unit_from_angle;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed on every serve
    pub speed: f32,
    /// Paddle returns only speed the ball up while below this
    pub max_speed: f32,
    pub serve_half_angle: f32,
    pub paddle_steer: f32,
    pub paddle_boost: f32,
}

impl Ball {
    /// Create a resting ball at the centre of the playfield
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.width / 2.0, settings.height / 2.0),
            vel: Vec2::ZERO,
            radius: settings.ball_radius,
            speed: settings.ball_speed,
            max_speed: settings.ball_max_speed,
            serve_half_angle: settings.serve_half_angle,
            paddle_steer: settings.paddle_steer,
            paddle_boost: settings.paddle_boost,
        }
    }

    /// Re-centre and launch at a random angle within the serve cone,
    /// toward a random side
    pub fn serve<R: Rng>(&mut self, playfield_width: f32, playfield_height: f32, rng: &mut R) {
        self.pos = Vec2::new(playfield_width / 2.0, playfield_height / 2.0);

        let angle = if self.serve_half_angle > 0.0 {
            rng.random_range(-self.serve_half_angle..=self.serve_half_angle)
        } else {
            0.0
        };
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let dir = unit_from_angle(angle);
        self.vel = Vec2::new(dir.x * direction, dir.y) * self.speed;
    }

    /// Integrate one frame; flips vertical velocity when past the top or
    /// bottom edge
    ///
    /// Position is not pulled back inside, so the ball may overlap an edge
    /// by up to one frame of travel.
    pub fn advance(&mut self, playfield_height: f32) -> Option<SoundEvent> {
        self.pos += self.vel;

        if self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > playfield_height {
            self.vel.y = -self.vel.y;
            return Some(SoundEvent::Wall);
        }
        None
    }

    pub fn collides_with_paddle(&self, paddle: &Paddle) -> bool {
        circle_box_overlap(self.pos, self.radius, &paddle.rect())
    }

    /// Return the ball off a paddle
    ///
    /// Horizontal velocity is reversed, vertical velocity is set from where
    /// the ball met the paddle (-1 at the top edge, +1 at the bottom). The
    /// boost is gated on the pre-boost speed, so the result may exceed
    /// `max_speed` by the boost factor.
    pub fn resolve_paddle_collision(&mut self, paddle: &Paddle) -> SoundEvent {
        let hit_offset = (self.pos.y - paddle.center_y()) / (paddle.height / 2.0);

        self.vel.x = -self.vel.x;
        self.vel.y = hit_offset * self.speed * self.paddle_steer;

        if self.vel.length() < self.max_speed {
            self.vel *= self.paddle_boost;
        }

        SoundEvent::Paddle
    }

    pub fn collides_with_segment(&self, segment: &CentipedeSegment) -> bool {
        circles_overlap(self.pos, self.radius, segment.pos, segment.radius)
    }

    /// Mirror the velocity about the segment's surface normal
    ///
    /// Concentric centres have no normal; the ball just reverses horizontally.
    pub fn resolve_segment_collision(&mut self, segment: &CentipedeSegment) -> SoundEvent {
        let offset = self.pos - segment.pos;
        let dist = offset.length();

        if dist > 0.0 {
            self.vel = reflect(self.vel, offset / dist);
        } else {
            self.vel.x = -self.vel.x;
        }

        SoundEvent::Centipede
    }
}
