//! Draw command generation for a session

use glam::Vec2;

use super::{DrawCommand, colors};
use crate::sim::{GamePhase, GameSession};

pub const START_PROMPT: &str = "PRESS SPACE TO START";

const DIVIDER_DASH: f32 = 5.0;
const PADDLE_GLOW: f32 = 10.0;
const BALL_GLOW: f32 = 15.0;
const SEGMENT_GLOW: f32 = 8.0;
const PROMPT_SIZE: f32 = 24.0;
/// Prompt sits this far below the playfield centre
const PROMPT_OFFSET_Y: f32 = 50.0;

/// Everything to draw this frame, back to front
pub fn build_frame(session: &GameSession) -> Vec<DrawCommand> {
    let width = session.settings.width;
    let height = session.settings.height;
    let segment_count: usize = session.centipedes.iter().map(|c| c.segments.len()).sum();

    let mut commands = Vec::with_capacity(segment_count + 6);

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });
    commands.push(DrawCommand::DashedLine {
        from: Vec2::new(width / 2.0, 0.0),
        to: Vec2::new(width / 2.0, height),
        dash: DIVIDER_DASH,
        gap: DIVIDER_DASH,
        color: colors::PHOSPHOR,
    });

    for paddle in [&session.player_paddle, &session.computer_paddle] {
        commands.push(DrawCommand::Rect {
            pos: paddle.pos,
            size: Vec2::new(paddle.width, paddle.height),
            color: colors::PHOSPHOR,
            glow: PADDLE_GLOW,
        });
    }

    for segment in session.centipedes.iter().flat_map(|c| c.segments.iter()) {
        commands.push(DrawCommand::Circle {
            center: segment.pos,
            radius: segment.radius,
            fill: colors::SEGMENT,
            outline: Some(colors::PHOSPHOR),
            glow: SEGMENT_GLOW,
        });
    }

    commands.push(DrawCommand::Circle {
        center: session.ball.pos,
        radius: session.ball.radius,
        fill: colors::PHOSPHOR,
        outline: None,
        glow: BALL_GLOW,
    });

    if session.phase == GamePhase::NotStarted {
        commands.push(DrawCommand::Text {
            pos: Vec2::new(width / 2.0, height / 2.0 + PROMPT_OFFSET_Y),
            text: START_PROMPT.to_string(),
            size: PROMPT_SIZE,
            color: colors::PHOSPHOR,
        });
    }

    commands
}
