//! Logical input actions held during a frame
//!
//! Raw key identifiers are translated to actions by `KeyBindings`; the
//! simulation only ever sees `Action`s.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A logical input the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Fire];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "left",
            Action::MoveRight => "right",
            Action::Fire => "fire",
        }
    }

    /// Parse a canonical action name (used by touch surrogates)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Action::MoveLeft),
            "right" => Some(Action::MoveRight),
            "fire" => Some(Action::Fire),
            _ => None,
        }
    }
}

/// Set of currently held actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Release `action` and report whether it was held.
    /// Used for fire-to-start so the press isn't read again next frame.
    pub fn consume(&mut self, action: Action) -> bool {
        self.held.remove(&action)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl FromIterator<Action> for InputState {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}
