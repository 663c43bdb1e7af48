//! Player and enemy bullet movement

use super::state::GameState;
use crate::consts::*;

/// Move player bullets up and drop the ones fully past the top edge
pub fn update_bullets(state: &mut GameState) {
    state.bullets.retain_mut(|b| {
        b.pos.y -= b.speed;
        b.pos.y + b.size.y >= 0.0
    });
}

/// Move boss bullets along their velocity and drop the ones well outside the canvas
pub fn update_enemy_bullets(state: &mut GameState) {
    state.enemy_bullets.retain_mut(|b| {
        b.pos += b.vel;
        b.pos.x >= -ENEMY_BULLET_MARGIN
            && b.pos.x <= CANVAS_WIDTH + ENEMY_BULLET_MARGIN
            && b.pos.y >= -ENEMY_BULLET_MARGIN
            && b.pos.y <= CANVAS_HEIGHT + ENEMY_BULLET_MARGIN
    });
}
