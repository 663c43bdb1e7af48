//! Regular enemy spawning and movement

use glam::Vec2;
use rand::{Rng, RngCore};

use super::state::{Enemy, GameState};
use crate::consts::*;

/// Frames between spawns for a given score.
/// Every 500 points shave 5 frames off, never below the minimum.
pub fn spawn_interval(score: u64) -> u32 {
    let steps = score / ENEMY_SPAWN_SCORE_STEP;
    let reduction = steps.saturating_mul(ENEMY_SPAWN_SPEEDUP as u64);
    let interval = (ENEMY_SPAWN_INTERVAL_INITIAL as u64).saturating_sub(reduction);
    interval.max(ENEMY_SPAWN_INTERVAL_MIN as u64) as u32
}

/// A new enemy just above the top edge at a random column and speed
pub fn spawn_enemy(rng: &mut dyn RngCore) -> Enemy {
    Enemy {
        pos: Vec2::new(
            rng.random_range(0.0..=CANVAS_WIDTH - ENEMY_WIDTH),
            -ENEMY_HEIGHT,
        ),
        size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
        speed: rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
    }
}

/// Run the spawn timer, then move every enemy (new ones included) and drop
/// those past the bottom. Spawning pauses entirely while a boss is present.
pub fn update_enemies(state: &mut GameState, rng: &mut dyn RngCore) {
    if state.boss.is_none() {
        state.spawn_timer += 1;
        if state.spawn_timer >= spawn_interval(state.score) {
            let enemy = spawn_enemy(rng);
            log::debug!("Enemy spawned at x={:.1} speed={:.2}", enemy.pos.x, enemy.speed);
            state.enemies.push(enemy);
            state.spawn_timer = 0;
        }
    }

    state.enemies.retain_mut(|e| {
        e.pos.y += e.speed;
        e.pos.y <= CANVAS_HEIGHT
    });
}
