//! Collision detection and outcome resolution
//!
//! Runs once per playing frame in a fixed order: bullets vs enemies, bullets
//! vs boss, then anything vs the player. Order matters for scoring.

use rand::RngCore;

use super::boss::BossPhase;
use super::geometry::{Bounds, overlaps};
use super::particle::{SPARKS, spawn_burst};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Resolve every collision for this frame
pub fn check_collisions(state: &mut GameState, rng: &mut dyn RngCore) {
    bullets_vs_enemies(state, rng);
    bullets_vs_boss(state);
    player_vs_hazards(state, rng);
}

/// Each overlapping pair destroys both; one kill per bullet and per enemy.
/// Enemies are scanned newest-first, bullets newest-first within each enemy.
fn bullets_vs_enemies(state: &mut GameState, rng: &mut dyn RngCore) {
    let mut ei = state.enemies.len();
    while ei > 0 {
        ei -= 1;
        let enemy = &state.enemies[ei];
        let Some(bi) = state.bullets.iter().rposition(|b| overlaps(b, enemy)) else {
            continue;
        };

        let enemy = state.enemies.remove(ei);
        state.bullets.remove(bi);
        let at = enemy.center();
        spawn_burst(&mut state.particles, at, &SPARKS, rng);
        state.score += SCORE_PER_KILL;
        state.events.push(GameEvent::EnemyDestroyed { at });
    }
}

/// Every bullet touching a fighting boss is consumed. Hits after the lethal
/// one in the same pass are absorbed without further damage.
fn bullets_vs_boss(state: &mut GameState) {
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    if boss.phase != BossPhase::Fighting {
        return;
    }

    let mut killed = false;
    state.bullets.retain(|bullet| {
        if !overlaps(bullet, &*boss) {
            return true;
        }
        killed |= boss.take_hit();
        false
    });

    if killed {
        log::info!("{} boss down, starting death sequence", boss.kind.as_str());
        state.enemy_bullets.clear();
    }
}

/// Any contact with an enemy, an enemy bullet or the boss body ends the run
fn player_vs_hazards(state: &mut GameState, rng: &mut dyn RngCore) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let player = &state.player;
    let hit = state.enemies.iter().any(|e| overlaps(player, e))
        || state.enemy_bullets.iter().any(|b| overlaps(player, b))
        || state
            .boss
            .as_ref()
            .is_some_and(|boss| !boss.is_dying() && overlaps(player, boss));

    if hit {
        trigger_game_over(state, rng);
    }
}

fn trigger_game_over(state: &mut GameState, rng: &mut dyn RngCore) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::PlayerDestroyed);
    state.record_hi_score();
    log::info!("Game over at score {} (best {})", state.score, state.hi_score);

    let at = state.player.center();
    spawn_burst(&mut state.particles, at, &SPARKS, rng);
    spawn_burst(&mut state.particles, at, &SPARKS, rng);
}
