//! Rendering module
//!
//! The core never touches pixels. Once per frame it turns the session into a
//! list of [`DrawCommand`]s and hands them to a [`RenderSink`].

pub mod shapes;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use shapes::build_frame;

/// RGBA color, components in 0.0 - 1.0
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.067, 0.0, 1.0]; // #001100
    pub const PHOSPHOR: Color = [0.0, 1.0, 0.0, 1.0]; // #00ff00
    pub const SEGMENT: Color = [1.0, 1.0, 0.0, 1.0]; // #ffff00
}

/// A single drawing instruction in playfield coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole playfield
    Clear { color: Color },
    /// Stroked line with a dash pattern
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: f32,
        gap: f32,
        color: Color,
    },
    /// Filled rectangle, `pos` is the top-left corner
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        glow: f32,
    },
    /// Filled circle with an optional 1-unit outline
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Option<Color>,
        glow: f32,
    },
    /// Text centred on `pos`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

/// Receives the draw commands for a frame
pub trait RenderSink {
    fn submit(&mut self, commands: &[DrawCommand]);
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn submit(&mut self, commands: &[DrawCommand]) {
        (**self).submit(commands);
    }
}

/// Keeps only the most recent frame
#[derive(Debug, Clone, Default)]
pub struct FrameCapture {
    pub frames: u64,
    pub last: Vec<DrawCommand>,
}

impl RenderSink for FrameCapture {
    fn submit(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        self.last.clear();
        self.last.extend_from_slice(commands);
    }
}
