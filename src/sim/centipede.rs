//! Centipedes
//!
//! A chain of circular segments. The head drifts downward while zigzagging
//! horizontally; every other segment is dragged along behind the one ahead
//! of it, never trailing by more than the segment spacing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::constrain_within;
use crate::settings::Settings;

/// One body segment, also a ball obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentipedeSegment {
    pub pos: Vec2,
    pub radius: f32,
}

impl CentipedeSegment {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// A centipede; `segments[0]` is the head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Centipede {
    pub id: u32,
    pub segments: Vec<CentipedeSegment>,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    /// Horizontal travel between direction flips
    pub zigzag_distance: f32,
    /// Maximum gap between consecutive segments
    pub spacing: f32,
    /// Horizontal travel since the last flip
    pub distance_traveled: f32,
    /// Head turns around when this close to a side edge
    pub edge_margin: f32,
    /// Removed once the tail is this far below the playfield
    pub offscreen_margin: f32,
}

impl Centipede {
    /// Lay out `segment_count` segments in a row trailing left of `start`
    pub fn new(id: u32, start: Vec2, segment_count: usize, settings: &Settings) -> Self {
        let spacing = settings.centipede_segment_spacing;
        let segments = (0..segment_count)
            .map(|i| {
                CentipedeSegment::new(
                    Vec2::new(start.x - i as f32 * spacing, start.y),
                    settings.centipede_segment_radius,
                )
            })
            .collect();

        Self {
            id,
            segments,
            direction: 1.0,
            horizontal_speed: settings.centipede_horizontal_speed,
            vertical_speed: settings.centipede_vertical_speed,
            zigzag_distance: settings.centipede_zigzag_distance,
            spacing,
            distance_traveled: 0.0,
            edge_margin: settings.centipede_edge_margin,
            offscreen_margin: settings.centipede_offscreen_margin,
        }
    }

    pub fn head(&self) -> Option<&CentipedeSegment> {
        self.segments.first()
    }

    pub fn tail(&self) -> Option<&CentipedeSegment> {
        self.segments.last()
    }

    /// Step the head, turn it around if due, then drag the body after it
    pub fn advance(&mut self, playfield_width: f32, _playfield_height: f32) {
        let Some(head) = self.segments.first_mut() else {
            return;
        };

        head.pos.x += self.horizontal_speed * self.direction;
        head.pos.y += self.vertical_speed;
        self.distance_traveled += self.horizontal_speed.abs();

        let near_edge = head.pos.x <= self.edge_margin
            || head.pos.x >= playfield_width - self.edge_margin;
        if self.distance_traveled >= self.zigzag_distance || near_edge {
            self.direction = -self.direction;
            self.distance_traveled = 0.0;
        }

        for i in 1..self.segments.len() {
            let leader = self.segments[i - 1].pos;
            let follower = &mut self.segments[i];
            follower.pos = constrain_within(follower.pos, leader, self.spacing);
        }
    }

    /// First segment touching the ball, scanning from the head
    pub fn collides_with_ball(&self, ball: &Ball) -> Option<&CentipedeSegment> {
        self.segments.iter().find(|s| ball.collides_with_segment(s))
    }

    /// True once the tail has dropped past the bottom edge by the margin
    pub fn is_off_screen(&self, playfield_height: f32) -> bool {
        self.tail()
            .is_none_or(|tail| tail.pos.y > playfield_height + self.offscreen_margin)
    }
}
