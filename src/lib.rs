//! Shooting Game - a top-down arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Per-frame simulation (phases, spawning, bosses, collisions, particles)
//! - `game`: Owning driver that feeds input into `sim::tick` and persists the high score
//! - `platform`: Storage backends and the browser entry point
//! - `highscores`: The persisted high-score slot
//! - `settings`: User configuration (key bindings)

pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{KeyBindings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical pixels, shared with the renderer)
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Frames between shots
    pub const PLAYER_SHOOT_COOLDOWN: u32 = 8;
    pub const PLAYER_START_Y: f32 = CANVAS_HEIGHT - 80.0;

    /// Player bullet
    pub const BULLET_WIDTH: f32 = 8.0;
    pub const BULLET_HEIGHT: f32 = 20.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy bullet (square)
    pub const ENEMY_BULLET_SIZE: f32 = 10.0;
    /// Enemy bullets are culled this far outside the canvas
    pub const ENEMY_BULLET_MARGIN: f32 = 20.0;

    /// Regular enemies
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED_MIN: f32 = 2.0;
    pub const ENEMY_SPEED_MAX: f32 = 5.0;
    /// Spawn interval in frames at score 0
    pub const ENEMY_SPAWN_INTERVAL_INITIAL: u32 = 50;
    pub const ENEMY_SPAWN_INTERVAL_MIN: u32 = 15;
    /// Spawn interval shrinks by this every `ENEMY_SPAWN_SCORE_STEP` points
    pub const ENEMY_SPAWN_SPEEDUP: u32 = 5;
    pub const ENEMY_SPAWN_SCORE_STEP: u64 = 500;

    /// Mid-boss
    pub const MID_BOSS_WIDTH: f32 = 80.0;
    pub const MID_BOSS_HEIGHT: f32 = 64.0;
    pub const MID_BOSS_HP: i32 = 40;
    pub const MID_BOSS_SPEED: f32 = 2.0;
    pub const MID_BOSS_SCORE: u64 = 2000;
    pub const MID_BOSS_SHOOT_INTERVAL: u32 = 40;
    /// A mid-boss appears every N points
    pub const MID_BOSS_INTERVAL: u64 = 3000;

    /// Final boss
    pub const FINAL_BOSS_WIDTH: f32 = 120.0;
    pub const FINAL_BOSS_HEIGHT: f32 = 96.0;
    pub const FINAL_BOSS_HP: i32 = 120;
    pub const FINAL_BOSS_SPEED: f32 = 1.5;
    pub const FINAL_BOSS_SCORE: u64 = 10000;
    pub const FINAL_BOSS_SHOOT_INTERVAL: u32 = 25;
    /// The final boss appears at this score
    pub const FINAL_BOSS_THRESHOLD: u64 = 10000;
    /// Mid-bosses that must fall before the final boss shows up
    pub const MID_BOSS_COUNT: u32 = (FINAL_BOSS_THRESHOLD / MID_BOSS_INTERVAL) as u32;

    /// Shared boss behaviour
    pub const BOSS_ENTRY_SPEED: f32 = 1.5;
    pub const BOSS_TARGET_Y: f32 = 60.0;
    /// Frames per attack pattern
    pub const BOSS_PATTERN_DURATION: u32 = 180;
    pub const BOSS_DEATH_DURATION: u32 = 90;
    /// Horizontal turn-around margin from either canvas edge
    pub const BOSS_EDGE_MARGIN: f32 = 10.0;
    pub const BOSS_BOB_AMPLITUDE: f32 = 20.0;
    /// Radians per fight frame
    pub const BOSS_BOB_FREQUENCY: f32 = 0.03;
    pub const BOSS_HIT_FLASH: u32 = 4;
    /// A small explosion is spawned every N frames while dying
    pub const BOSS_DEATH_EXPLOSION_EVERY: u32 = 6;

    /// Warning banner duration in frames
    pub const WARNING_DURATION: u32 = 120;

    /// Particles
    pub const PARTICLE_COUNT: usize = 12;
    pub const PARTICLE_LIFE: u32 = 20;
    pub const MAX_PARTICLES: usize = 1024;

    /// Scoring
    pub const SCORE_PER_KILL: u64 = 100;

    /// Storage slots
    pub const HI_SCORE_KEY: &str = "shooting-game-hi-score";
    pub const SETTINGS_KEY: &str = "shooting-game-settings";
}

/// Unit vector for an angle in canvas space (y grows downward)
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
