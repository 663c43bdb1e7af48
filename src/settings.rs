//! Game settings and preferences
//!
//! Persisted as JSON in the key/value store, separately from the high score.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::platform::{KeyValueStore, StorageError};
use crate::sim::Action;

/// Raw key identifiers (browser `KeyboardEvent.key` values) per action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub fire: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into()],
            right: vec!["ArrowRight".into(), "d".into()],
            fire: vec![" ".into()],
        }
    }
}

impl KeyBindings {
    /// Keys bound to an action
    pub fn keys(&self, action: Action) -> &[String] {
        match action {
            Action::MoveLeft => &self.left,
            Action::MoveRight => &self.right,
            Action::Fire => &self.fire,
        }
    }

    /// Map a raw key to its action, if bound
    pub fn action_for(&self, key: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.keys(action).iter().any(|k| k == key))
    }
}

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub key_bindings: KeyBindings,
}

impl Settings {
    /// Load settings, falling back to defaults when missing or malformed
    pub fn load(store: &impl KeyValueStore) -> Self {
        match Self::try_load(store) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("No settings found, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    fn try_load(store: &impl KeyValueStore) -> Result<Option<Self>, StorageError> {
        let Some(json) = store.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
