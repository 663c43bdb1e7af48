//! Player movement and firing

use glam::Vec2;

use super::input::{Action, InputState};
use super::state::{Bullet, GameState};
use crate::consts::*;

/// Apply held movement, clamp to the canvas, tick the cooldown and fire if allowed
pub fn update_player(state: &mut GameState, input: &InputState) {
    let player = &mut state.player;

    // Left and right both held cancel out
    if input.is_held(Action::MoveLeft) {
        player.pos.x -= player.speed;
    }
    if input.is_held(Action::MoveRight) {
        player.pos.x += player.speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, CANVAS_WIDTH - player.size.x);

    player.cooldown = player.cooldown.saturating_sub(1);

    if input.is_held(Action::Fire) && player.cooldown == 0 {
        let bullet = Bullet {
            pos: Vec2::new(
                player.pos.x + player.size.x / 2.0 - BULLET_WIDTH / 2.0,
                player.pos.y - BULLET_HEIGHT,
            ),
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
        };
        state.bullets.push(bullet);
        player.cooldown = PLAYER_SHOOT_COOLDOWN;
    }
}
