//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the driver owns and hands to every
//! update stage by `&mut`. Everything the renderer needs is serialisable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boss::{Boss, BossKind};
use super::geometry::{Bounds, Rect};
use crate::consts::*;

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for fire
    Title,
    /// Active gameplay
    Playing,
    /// Player destroyed
    GameOver,
    /// Final boss defeated
    Clear,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Title => "title",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameover",
            GamePhase::Clear => "clear",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per frame
    pub speed: f32,
    /// Frames remaining before the next shot is allowed
    pub cooldown: u32,
}

impl Player {
    pub fn start_pos() -> Vec2 {
        Vec2::new(CANVAS_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, PLAYER_START_Y)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::start_pos(),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            cooldown: 0,
        }
    }
}

/// A player-fired bullet travelling straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward pixels per frame
    pub speed: f32,
}

/// A boss-fired bullet with a free 2D velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl EnemyBullet {
    /// A bullet whose top edge is horizontally centred on `origin`
    pub fn fired_from(origin: Vec2, vel: Vec2) -> Self {
        Self {
            pos: Vec2::new(origin.x - ENEMY_BULLET_SIZE / 2.0, origin.y),
            size: Vec2::splat(ENEMY_BULLET_SIZE),
            vel,
        }
    }
}

/// A regular enemy falling straight down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward pixels per frame
    pub speed: f32,
}

/// Display colour for particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees
    pub hue: f32,
    /// Percent
    pub saturation: f32,
    /// Percent
    pub lightness: f32,
}

impl Hsl {
    /// CSS colour string, e.g. `hsl(30, 100%, 60%)`
    pub fn css(&self) -> String {
        format!(
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left
    pub life: u32,
    pub max_life: u32,
    pub color: Hsl,
    pub radius: f32,
}

impl Particle {
    /// Fade factor for rendering (1 = fresh, 0 = expired)
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Bounds for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Bounds for EnemyBullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Bounds for Boss {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// How far the run has progressed through the boss schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossProgress {
    /// Number of mid-bosses defeated so far this run
    MidBossesDefeated(u32),
    /// The final boss has fallen; nothing else spawns until reset
    FinalBossDefeated,
}

impl Default for BossProgress {
    fn default() -> Self {
        BossProgress::MidBossesDefeated(0)
    }
}

/// Transient on-screen notice preceding a boss encounter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningBanner {
    pub text: String,
    /// Frames left on screen
    pub timer: u32,
}

impl WarningBanner {
    pub fn raise(&mut self, text: &str) {
        self.text = text.to_string();
        self.timer = WARNING_DURATION;
    }

    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.timer > 0
    }
}

/// Notable things that happened during a tick, drained by the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    NewGame,
    EnemyDestroyed { at: Vec2 },
    BossSpawned(BossKind),
    BossDefeated { kind: BossKind, award: u64 },
    PlayerDestroyed,
    StageClear,
    /// The stored high score was beaten and should be written back
    NewHiScore(u64),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    /// At most one boss at a time
    pub boss: Option<Boss>,
    /// Visual only
    pub particles: Vec<Particle>,
    pub score: u64,
    pub hi_score: u64,
    /// Ticks since the last reset
    pub frame: u64,
    /// Frames since the last enemy spawn
    pub spawn_timer: u32,
    pub boss_progress: BossProgress,
    pub warning: WarningBanner,
    /// Events produced since the driver last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a title-screen state with a previously persisted high score
    pub fn new(hi_score: u64) -> Self {
        Self {
            phase: GamePhase::Title,
            player: Player::default(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            boss: None,
            particles: Vec::new(),
            score: 0,
            hi_score,
            frame: 0,
            spawn_timer: 0,
            boss_progress: BossProgress::default(),
            warning: WarningBanner::default(),
            events: Vec::new(),
        }
    }

    /// Clear everything transient and start playing. The high score survives.
    pub fn reset_for_new_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.player.pos = Player::start_pos();
        self.player.cooldown = 0;
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.boss = None;
        self.particles.clear();
        self.score = 0;
        self.frame = 0;
        self.spawn_timer = 0;
        self.boss_progress = BossProgress::default();
        self.warning = WarningBanner::default();
        self.events.clear();
        self.events.push(GameEvent::NewGame);
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true when it changed.
    pub fn record_hi_score(&mut self) -> bool {
        if self.score > self.hi_score {
            self.hi_score = self.score;
            self.events.push(GameEvent::NewHiScore(self.hi_score));
            true
        } else {
            false
        }
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
