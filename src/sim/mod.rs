//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (centipedes oldest first, segments head first)
//! - No rendering, audio or platform dependencies; effects leave as events

pub mod ball;
pub mod centipede;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use centipede::{Centipede, CentipedeSegment};
pub use collision::{Rect, circle_box_overlap, circles_overlap, constrain_within, reflect};
pub use paddle::{Paddle, PaddleIntent};
pub use state::{GameEvent, GamePhase, GameSession, SessionSnapshot, Side};
pub use tick::{TickInput, tick};
