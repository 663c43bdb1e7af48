//! Attract-mode autopilot
//!
//! A simple bot that plays the game: keeps firing, sidesteps anything about to
//! land on the ship and otherwise lines up under the most useful target.

use super::geometry::{Bounds, Rect};
use super::input::{Action, InputState};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// How far above the ship a threat is considered incoming
const DANGER_HEIGHT: f32 = 140.0;
/// Extra horizontal clearance around the ship when checking threats
const DANGER_PADDING: f32 = 12.0;
/// Dead zone so the ship doesn't jitter around its target column
const TRACK_TOLERANCE: f32 = 4.0;

/// Choose the inputs for this frame
pub fn demo_input(state: &GameState) -> InputState {
    let mut input = InputState::new();

    if state.phase != GamePhase::Playing {
        input.press(Action::Fire);
        return input;
    }

    input.press(Action::Fire);

    let ship = state.player.bounds();
    let ship_mid = ship.center().x;

    let danger_zone = Rect::new(
        glam::Vec2::new(ship.pos.x - DANGER_PADDING, ship.pos.y - DANGER_HEIGHT),
        glam::Vec2::new(ship.size.x + DANGER_PADDING * 2.0, ship.size.y + DANGER_HEIGHT),
    );

    // Nearest incoming threat decides which way to dodge
    let threat = state
        .enemy_bullets
        .iter()
        .map(|b| b.bounds())
        .chain(state.enemies.iter().map(|e| e.bounds()))
        .filter(|r| r.overlaps(&danger_zone))
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(threat) = threat {
        let threat_mid = threat.center().x;
        let dodge_left = if threat_mid >= ship_mid {
            ship.pos.x > 0.0
        } else {
            ship.right() >= CANVAS_WIDTH
        };
        input.press(if dodge_left {
            Action::MoveLeft
        } else {
            Action::MoveRight
        });
        return input;
    }

    // Boss first, otherwise the lowest enemy
    let target = state
        .boss
        .as_ref()
        .filter(|boss| !boss.is_dying())
        .map(|boss| boss.center().x)
        .or_else(|| {
            state
                .enemies
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|e| e.center().x)
        });

    if let Some(target_x) = target {
        if target_x < ship_mid - TRACK_TOLERANCE {
            input.press(Action::MoveLeft);
        } else if target_x > ship_mid + TRACK_TOLERANCE {
            input.press(Action::MoveRight);
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::boss::{Boss, BossKind};
    use crate::sim::state::{Enemy, EnemyBullet};
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(0);
        state.reset_for_new_game();
        state
    }

    #[test]
    fn test_presses_fire_to_start() {
        let state = GameState::new(0);
        let input = demo_input(&state);
        assert!(input.is_held(Action::Fire));
        assert!(!input.is_held(Action::MoveLeft));
        assert!(!input.is_held(Action::MoveRight));
    }

    #[test]
    fn test_tracks_boss() {
        let mut state = playing_state();
        let mut boss = Boss::spawn(BossKind::Mid);
        boss.pos.x = 20.0;
        boss.pos.y = BOSS_TARGET_Y;
        state.boss = Some(boss);

        let input = demo_input(&state);
        assert!(input.is_held(Action::Fire));
        assert!(input.is_held(Action::MoveLeft));
    }

    #[test]
    fn test_tracks_lowest_enemy() {
        let mut state = playing_state();
        for (x, y) in [(10.0, 50.0), (400.0, 300.0)] {
            state.enemies.push(Enemy {
                pos: Vec2::new(x, y),
                size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                speed: 2.0,
            });
        }
        let input = demo_input(&state);
        assert!(input.is_held(Action::MoveRight));
    }

    #[test]
    fn test_dodges_incoming_bullet() {
        let mut state = playing_state();
        let ship_mid = state.player.center().x;
        // Bullet slightly right of centre, just above the ship
        state.enemy_bullets.push(EnemyBullet::fired_from(
            Vec2::new(ship_mid + 5.0, state.player.pos.y - 40.0),
            Vec2::new(0.0, 4.0),
        ));
        let input = demo_input(&state);
        assert!(input.is_held(Action::MoveLeft));
        assert!(!input.is_held(Action::MoveRight));
    }

    #[test]
    fn test_dodges_away_from_wall() {
        let mut state = playing_state();
        state.player.pos.x = 0.0;
        let ship_mid = state.player.center().x;
        state.enemy_bullets.push(EnemyBullet::fired_from(
            Vec2::new(ship_mid + 5.0, state.player.pos.y - 40.0),
            Vec2::new(0.0, 4.0),
        ));
        let input = demo_input(&state);
        assert!(input.is_held(Action::MoveRight));
    }
}
