//! Game driver
//!
//! Owns the simulation state, the held inputs, the RNG and the storage
//! backend. The host calls [`Game::frame`] once per display frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::{load_hi_score, save_hi_score};
use crate::platform::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{Action, GameEvent, GamePhase, GameState, InputState, tick};

/// Game instance holding all state
pub struct Game<S: KeyValueStore> {
    state: GameState,
    input: InputState,
    rng: Pcg32,
    store: S,
    settings: Settings,
    /// Fire was tapped and must be released after the next frame
    pending_tap: bool,
}

impl<S: KeyValueStore> Game<S> {
    /// Create a game on the title screen with a random seed
    pub fn new(store: S) -> Self {
        Self::with_seed(store, rand::random())
    }

    /// Create a game with an explicit RNG seed
    pub fn with_seed(store: S, seed: u64) -> Self {
        let hi_score = load_hi_score(&store);
        let settings = Settings::load(&store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(hi_score),
            input: InputState::new(),
            rng: Pcg32::seed_from_u64(seed),
            store,
            settings,
            pending_tap: false,
        }
    }

    /// Key pressed. Returns whether the key is bound to an action.
    pub fn key_down(&mut self, key: &str) -> bool {
        match self.settings.key_bindings.action_for(key) {
            Some(action) => {
                self.input.press(action);
                true
            }
            None => false,
        }
    }

    /// Key released. Returns whether the key is bound to an action.
    pub fn key_up(&mut self, key: &str) -> bool {
        match self.settings.key_bindings.action_for(key) {
            Some(action) => {
                self.input.release(action);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    /// Replace every held action at once (autopilot, replays)
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// One-frame fire press, for touch taps
    pub fn tap_fire(&mut self) {
        self.input.press(Action::Fire);
        self.pending_tap = true;
    }

    /// Advance one frame and handle whatever happened during it
    pub fn frame(&mut self) {
        tick(&mut self.state, &mut self.input, &mut self.rng);

        for event in self.state.drain_events() {
            self.handle_event(event);
        }

        if self.pending_tap {
            self.pending_tap = false;
            self.input.release(Action::Fire);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::NewGame => log::debug!("Run started"),
            GameEvent::EnemyDestroyed { at } => log::trace!("Enemy destroyed at {}", at),
            GameEvent::BossSpawned(kind) => log::debug!("{} boss spawned", kind.as_str()),
            GameEvent::BossDefeated { kind, award } => {
                log::info!("{} boss defeated (+{})", kind.as_str(), award)
            }
            GameEvent::PlayerDestroyed => log::debug!("Player destroyed"),
            GameEvent::StageClear => log::info!("Stage clear at score {}", self.state.score),
            GameEvent::NewHiScore(score) => {
                if let Err(e) = save_hi_score(&mut self.store, score) {
                    log::warn!("Failed to save high score: {}", e);
                }
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn hi_score(&self) -> u64 {
        self.state.hi_score
    }

    /// Serialize the full state for the renderer
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::MemoryStore;
    use crate::sim::Enemy;
    use glam::Vec2;

    fn game() -> Game<MemoryStore> {
        Game::with_seed(MemoryStore::new(), 7)
    }

    #[test]
    fn test_loads_hi_score() {
        let mut store = MemoryStore::new();
        store.set(HI_SCORE_KEY, "4200").unwrap();
        let game = Game::with_seed(store, 1);
        assert_eq!(game.hi_score(), 4200);
        assert_eq!(game.phase(), GamePhase::Title);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_key_mapping() {
        let mut game = game();
        assert!(game.key_down("ArrowLeft"));
        assert!(game.input().is_held(Action::MoveLeft));
        assert!(game.key_down("d"));
        assert!(game.input().is_held(Action::MoveRight));
        assert!(!game.key_down("q"));

        assert!(game.key_up("ArrowLeft"));
        assert!(!game.input().is_held(Action::MoveLeft));
        assert!(!game.key_up("Escape"));
    }

    #[test]
    fn test_custom_bindings_from_store() {
        let mut store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"key_bindings":{"fire":["Enter"]}}"#)
            .unwrap();
        let mut game = Game::with_seed(store, 1);
        assert!(!game.key_down(" "));
        assert!(game.key_down("Enter"));
        game.frame();
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_space_starts_game() {
        let mut game = game();
        game.frame();
        assert_eq!(game.phase(), GamePhase::Title);

        game.key_down(" ");
        game.frame();
        assert_eq!(game.phase(), GamePhase::Playing);
        // Start consumed the press
        assert!(!game.input().is_held(Action::Fire));
    }

    #[test]
    fn test_tap_fire_lasts_one_frame() {
        let mut game = game();
        game.tap_fire();
        game.frame();
        assert_eq!(game.phase(), GamePhase::Playing);

        game.tap_fire();
        game.frame();
        assert_eq!(game.state().bullets.len(), 1);
        assert!(!game.input().is_held(Action::Fire));

        game.frame();
        assert_eq!(game.state().bullets.len(), 1);
    }

    #[test]
    fn test_held_fire_keeps_shooting() {
        let mut game = game();
        game.tap_fire();
        game.frame();

        game.press(Action::Fire);
        for _ in 0..=PLAYER_SHOOT_COOLDOWN {
            game.frame();
        }
        assert_eq!(game.state().bullets.len(), 2);

        game.release(Action::Fire);
        assert!(!game.input().is_held(Action::Fire));
    }

    #[test]
    fn test_game_over_persists_hi_score() {
        let mut store = MemoryStore::new();
        store.set(HI_SCORE_KEY, "500").unwrap();
        let mut game = Game::with_seed(store, 3);
        game.tap_fire();
        game.frame();

        game.state.score = 900;
        let p = game.state.player.pos;
        game.state.enemies.push(Enemy {
            pos: Vec2::new(p.x, p.y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 1.0,
        });
        game.frame();

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.hi_score(), 900);
        assert_eq!(
            game.store().get(HI_SCORE_KEY).unwrap().as_deref(),
            Some("900")
        );
        assert!(game.state().events.is_empty());
    }

    #[test]
    fn test_game_over_below_hi_score_leaves_store() {
        let mut store = MemoryStore::new();
        store.set(HI_SCORE_KEY, "5000").unwrap();
        let mut game = Game::with_seed(store, 4);
        game.tap_fire();
        game.frame();

        game.state.score = 100;
        let p = game.state.player.pos;
        game.state.enemies.push(Enemy {
            pos: Vec2::new(p.x, p.y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 1.0,
        });
        game.frame();

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.hi_score(), 5000);
        assert_eq!(
            game.store().get(HI_SCORE_KEY).unwrap().as_deref(),
            Some("5000")
        );
    }

    #[test]
    fn test_snapshot_json() {
        let game = game();
        let json = game.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Title");
        assert_eq!(value["score"], 0);
        assert!(value["enemies"].as_array().is_some_and(|e| e.is_empty()));
        assert!(value.get("events").is_none());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = game();
        let mut b = game();
        a.tap_fire();
        b.tap_fire();
        for _ in 0..300 {
            a.press(Action::Fire);
            b.press(Action::Fire);
            a.frame();
            b.frame();
        }
        assert_eq!(a.state(), b.state());
    }
}
