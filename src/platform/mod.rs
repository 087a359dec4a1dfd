//! Platform abstraction layer
//!
//! Contracts for the host side of the game:
//! - Input polling (keyboard state mapped to paddle/start actions)
//! - Score display

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Something the player can ask for with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    Start,
}

/// Polled once per frame by the frame driver
pub trait InputSource {
    fn current_input(&mut self) -> TickInput;
}

/// Receives both scores whenever either changes
pub trait ScoreDisplay {
    fn show(&mut self, player: u32, computer: u32);
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn current_input(&mut self) -> TickInput {
        (**self).current_input()
    }
}

impl<T: ScoreDisplay + ?Sized> ScoreDisplay for Box<T> {
    fn show(&mut self, player: u32, computer: u32) {
        (**self).show(player, computer);
    }
}

/// Key code to action mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            ("KeyW", Action::MoveUp),
            ("ArrowUp", Action::MoveUp),
            ("KeyS", Action::MoveDown),
            ("ArrowDown", Action::MoveDown),
            ("Space", Action::Start),
        ]
        .into_iter()
        .map(|(code, action)| (code.to_string(), action))
        .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn action(&self, code: &str) -> Option<Action> {
        self.bindings.get(code).copied()
    }

    pub fn bind(&mut self, code: impl Into<String>, action: Action) {
        self.bindings.insert(code.into(), action);
    }
}

/// Live pressed/released state of the keyboard
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub bindings: KeyBindings,
    pressed: HashSet<String>,
}

impl KeyboardState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, code: &str) {
        self.pressed.insert(code.to_string());
    }

    pub fn key_up(&mut self, code: &str) {
        self.pressed.remove(code);
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    /// True if any key bound to `action` is held
    pub fn action_active(&self, action: Action) -> bool {
        self.pressed
            .iter()
            .any(|code| self.bindings.action(code) == Some(action))
    }
}

impl InputSource for KeyboardState {
    fn current_input(&mut self) -> TickInput {
        TickInput {
            up: self.action_active(Action::MoveUp),
            down: self.action_active(Action::MoveDown),
            start: self.action_active(Action::Start),
        }
    }
}

/// Remembers the latest scores shown
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub player: u32,
    pub computer: u32,
    /// Number of updates received
    pub updates: u32,
}

impl ScoreDisplay for ScoreBoard {
    fn show(&mut self, player: u32, computer: u32) {
        self.player = player;
        self.computer = computer;
        self.updates += 1;
    }
}
