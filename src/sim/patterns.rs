//! Boss attack patterns
//!
//! Each pattern maps the boss (plus the player's centre, for aimed fire) to a
//! volley of enemy bullets. Per-boss tuning (bullet counts, arcs) comes from
//! the boss's `BossProfile`, so patterns never branch on the boss kind.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::geometry::Bounds;
use super::state::EnemyBullet;
use crate::direction;

/// Named bullet-emission algorithm a boss cycles through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPattern {
    Spread,
    Aimed,
    Spiral,
    Barrage,
}

/// Bullet emitter: boss, player centre, random source, output
pub type Emitter = fn(&Boss, Vec2, &mut dyn RngCore, &mut Vec<EnemyBullet>);

const SPREAD_SPEED: f32 = 4.0;
const AIMED_SPEED: f32 = 5.0;
/// Radians between the bullets of a multi-shot aimed volley
const AIMED_FAN_STEP: f32 = 0.15;
const SPIRAL_SPEED: f32 = 3.0;
/// Radians per fight frame
const SPIRAL_TURN_RATE: f32 = 0.3;
const BARRAGE_COUNT: usize = 3;
const BARRAGE_JITTER: f32 = 1.0;
const BARRAGE_SPEED: (f32, f32) = (3.0, 5.0);

impl AttackPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackPattern::Spread => "spread",
            AttackPattern::Aimed => "aimed",
            AttackPattern::Spiral => "spiral",
            AttackPattern::Barrage => "barrage",
        }
    }

    /// This pattern's emitter
    pub fn emitter(self) -> Emitter {
        match self {
            AttackPattern::Spread => spread,
            AttackPattern::Aimed => aimed,
            AttackPattern::Spiral => spiral,
            AttackPattern::Barrage => barrage,
        }
    }

    /// Fire one volley
    pub fn fire(
        self,
        boss: &Boss,
        player_center: Vec2,
        rng: &mut dyn RngCore,
        out: &mut Vec<EnemyBullet>,
    ) {
        (self.emitter())(boss, player_center, rng, out)
    }
}

/// Evenly spaced fan pointing straight down from the bottom-centre
fn spread(boss: &Boss, _player: Vec2, _rng: &mut dyn RngCore, out: &mut Vec<EnemyBullet>) {
    let profile = boss.kind.profile();
    let origin = boss.bounds().bottom_center();
    let count = profile.spread_count;
    let arc = profile.spread_arc;
    let step = if count > 1 { arc / (count - 1) as f32 } else { 0.0 };
    let first = PI / 2.0 - if count > 1 { arc / 2.0 } else { 0.0 };

    for i in 0..count {
        let angle = first + step * i as f32;
        out.push(EnemyBullet::fired_from(origin, direction(angle) * SPREAD_SPEED));
    }
}

/// One or more bullets along the line to the player's centre
fn aimed(boss: &Boss, player: Vec2, _rng: &mut dyn RngCore, out: &mut Vec<EnemyBullet>) {
    let count = boss.kind.profile().aimed_count;
    let origin = boss.bounds().bottom_center();
    let to_player = player - origin;
    // Zero-length aim falls back to straight down
    let base = if to_player.length_squared() > f32::EPSILON {
        to_player.y.atan2(to_player.x)
    } else {
        PI / 2.0
    };

    for i in 0..count {
        let offset = (i as f32 - (count - 1) as f32 / 2.0) * AIMED_FAN_STEP;
        out.push(EnemyBullet::fired_from(
            origin,
            direction(base + offset) * AIMED_SPEED,
        ));
    }
}

/// Two opposed bullets from the centre; the angle turns with the fight clock
fn spiral(boss: &Boss, _player: Vec2, _rng: &mut dyn RngCore, out: &mut Vec<EnemyBullet>) {
    let origin = boss.bounds().center();
    let angle = boss.move_timer as f32 * SPIRAL_TURN_RATE;
    out.push(EnemyBullet::fired_from(origin, direction(angle) * SPIRAL_SPEED));
    out.push(EnemyBullet::fired_from(
        origin,
        direction(angle + PI) * SPIRAL_SPEED,
    ));
}

/// Bullets dropped from evenly spaced points along the bottom edge with jitter
fn barrage(boss: &Boss, _player: Vec2, rng: &mut dyn RngCore, out: &mut Vec<EnemyBullet>) {
    let bottom = boss.pos.y + boss.size.y;
    let spacing = boss.size.x / (BARRAGE_COUNT + 1) as f32;

    for i in 0..BARRAGE_COUNT {
        let x = boss.pos.x + spacing * (i + 1) as f32;
        let vel = Vec2::new(
            rng.random_range(-BARRAGE_JITTER..BARRAGE_JITTER),
            rng.random_range(BARRAGE_SPEED.0..BARRAGE_SPEED.1),
        );
        out.push(EnemyBullet::fired_from(Vec2::new(x, bottom), vel));
    }
}
