//! Browser entry point
//!
//! The page owns the requestAnimationFrame loop: it forwards keyboard and
//! touch events here, calls `frame()` once per animation frame and draws the
//! returned JSON snapshot.

use wasm_bindgen::prelude::*;

use super::LocalStorage;
use crate::Game;
use crate::sim::{Action, GamePhase};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Shooting Game starting...");
}

/// LocalStorage-backed game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        WebGame {
            game: Game::new(LocalStorage),
        }
    }

    /// Returns true when the key is bound, so the page can `preventDefault`
    pub fn key_down(&mut self, key: &str) -> bool {
        self.game.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.game.key_up(key)
    }

    /// Touch controls: "left", "right" or "fire"
    pub fn press(&mut self, action: &str) -> bool {
        match Action::from_name(action) {
            Some(action) => {
                self.game.press(action);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, action: &str) -> bool {
        match Action::from_name(action) {
            Some(action) => {
                self.game.release(action);
                true
            }
            None => false,
        }
    }

    /// Touch tap anywhere: fire for a single frame
    pub fn tap(&mut self) {
        self.game.tap_fire();
    }

    /// Run one frame and return the render snapshot
    pub fn frame(&mut self) -> Result<String, JsValue> {
        self.game.frame();
        self.game
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn phase(&self) -> String {
        self.game.phase().as_str().to_owned()
    }

    /// Scores cross the JS boundary as f64 (exact below 2^53)
    pub fn score(&self) -> f64 {
        self.game.score() as f64
    }

    pub fn hi_score(&self) -> f64 {
        self.game.hi_score() as f64
    }

    pub fn is_playing(&self) -> bool {
        self.game.phase() == GamePhase::Playing
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
