//! Particle bursts and particle movement (cosmetic only)

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, RngCore};

use super::state::{GameState, Hsl, Particle};
use crate::consts::*;
use crate::direction;

/// Shape of one particle burst
#[derive(Debug, Clone, Copy)]
pub struct BurstStyle {
    pub count: usize,
    pub life: u32,
    /// Speed range (pixels per frame)
    pub speed: (f32, f32),
    pub hue: (f32, f32),
    pub lightness: (f32, f32),
    pub radius: (f32, f32),
}

/// Small orange spark shower (enemy kills, player death)
pub const SPARKS: BurstStyle = BurstStyle {
    count: PARTICLE_COUNT,
    life: PARTICLE_LIFE,
    speed: (1.0, 4.0),
    hue: (20.0, 50.0),
    lightness: (50.0, 80.0),
    radius: (2.0, 5.0),
};

/// Larger red-to-yellow fireball (boss death)
pub const EXPLOSION: BurstStyle = BurstStyle {
    count: 8,
    life: 25,
    speed: (1.0, 5.0),
    hue: (0.0, 60.0),
    lightness: (50.0, 90.0),
    radius: (3.0, 8.0),
};

/// Emit a burst of particles flying out from `at` in random directions
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    at: Vec2,
    style: &BurstStyle,
    rng: &mut dyn RngCore,
) {
    for _ in 0..style.count {
        if particles.len() >= MAX_PARTICLES {
            return;
        }
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(style.speed.0..style.speed.1);
        particles.push(Particle {
            pos: at,
            vel: direction(angle) * speed,
            life: style.life,
            max_life: style.life,
            color: Hsl {
                hue: rng.random_range(style.hue.0..style.hue.1),
                saturation: 100.0,
                lightness: rng.random_range(style.lightness.0..style.lightness.1),
            },
            radius: rng.random_range(style.radius.0..style.radius.1),
        });
    }
}

/// Advance particles and drop the expired ones
pub fn update_particles(state: &mut GameState) {
    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}
