//! Collision geometry
//!
//! Overlap tests between the ball (a circle) and the two kinds of obstacle it
//! meets: axis-aligned paddle rectangles and circular centipede segments.

use glam::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}

/// Circle vs. rectangle, approximated by the circle's bounding box
///
/// Edges that merely touch do not count.
pub fn circle_box_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let max = rect.max();
    center.x - radius < max.x
        && center.x + radius > rect.min.x
        && center.y - radius < max.y
        && center.y + radius > rect.min.y
}

/// Circle vs. circle: centres closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Mirror `vel` about a surface with unit `normal`
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Pull `point` toward `anchor` so it sits at most `max_dist` away
///
/// Points already within reach are left alone.
pub fn constrain_within(point: Vec2, anchor: Vec2, max_dist: f32) -> Vec2 {
    let offset = point - anchor;
    let dist = offset.length();
    if dist > max_dist {
        anchor + offset / dist * max_dist
    } else {
        point
    }
}
