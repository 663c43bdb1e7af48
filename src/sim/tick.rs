//! Per-frame simulation tick
//!
//! Phase dispatch: routes each frame to the right update sequence.

use rand::RngCore;

use super::boss::{check_boss_spawn, update_boss};
use super::bullet::{update_bullets, update_enemy_bullets};
use super::collision::check_collisions;
use super::enemy::update_enemies;
use super::input::{Action, InputState};
use super::particle::update_particles;
use super::player::update_player;
use super::state::{GamePhase, GameState};

/// Advance the game by one frame.
///
/// Fire is consumed from `input` when it starts a new game so holding it
/// does not immediately shoot.
pub fn tick(state: &mut GameState, input: &mut InputState, rng: &mut dyn RngCore) {
    state.frame += 1;

    match state.phase {
        GamePhase::Title => {
            if input.consume(Action::Fire) {
                start_new_game(state);
            }
        }

        GamePhase::Playing => {
            update_player(state, input);
            update_bullets(state);
            update_enemies(state, rng);
            check_boss_spawn(state);
            update_boss(state, rng);
            update_enemy_bullets(state);
            check_collisions(state, rng);
            update_particles(state);
        }

        GamePhase::GameOver | GamePhase::Clear => {
            // Let death effects play out
            update_particles(state);
            if input.consume(Action::Fire) {
                start_new_game(state);
            }
        }
    }
}

fn start_new_game(state: &mut GameState) {
    log::info!("New game (best {})", state.hi_score);
    state.reset_for_new_game();
}
