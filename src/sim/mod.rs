//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Randomness only through the caller's RNG
//! - Stable iteration order (insertion order of every entity list)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod boss;
pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod geometry;
pub mod input;
pub mod particle;
pub mod patterns;
pub mod player;
pub mod state;
pub mod tick;

pub use autopilot::demo_input;
pub use boss::{Boss, BossKind, BossPhase, BossProfile};
pub use geometry::{Bounds, Rect, overlaps};
pub use input::{Action, InputState};
pub use patterns::AttackPattern;
pub use state::{
    BossProgress, Bullet, Enemy, EnemyBullet, GameEvent, GamePhase, GameState, Hsl, Particle,
    Player, WarningBanner,
};
pub use tick::tick;
