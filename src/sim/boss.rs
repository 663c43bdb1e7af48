//! Boss spawning and the entering → fighting → dying state machine

use glam::Vec2;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::geometry::Bounds;
use super::particle::{EXPLOSION, spawn_burst};
use super::patterns::AttackPattern;
use super::state::{BossProgress, EnemyBullet, GameEvent, GamePhase, GameState, Particle};
use crate::consts::*;

/// Which boss this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    /// Recurs every `MID_BOSS_INTERVAL` points
    Mid,
    /// Appears once, after every mid-boss has fallen
    Final,
}

/// Per-kind constants
#[derive(Debug)]
pub struct BossProfile {
    pub size: Vec2,
    pub hp: i32,
    /// Horizontal pixels per frame while fighting
    pub speed: f32,
    /// Frames between volleys
    pub shoot_interval: u32,
    /// Awarded on defeat
    pub score: u64,
    /// Cycled in order, one every `BOSS_PATTERN_DURATION` frames
    pub patterns: &'static [AttackPattern],
    pub spread_count: usize,
    /// Total fan width in radians
    pub spread_arc: f32,
    pub aimed_count: usize,
    pub warning: &'static str,
}

static PROFILES: [BossProfile; 2] = [
    BossProfile {
        size: Vec2::new(MID_BOSS_WIDTH, MID_BOSS_HEIGHT),
        hp: MID_BOSS_HP,
        speed: MID_BOSS_SPEED,
        shoot_interval: MID_BOSS_SHOOT_INTERVAL,
        score: MID_BOSS_SCORE,
        patterns: &[AttackPattern::Spread, AttackPattern::Aimed],
        spread_count: 5,
        spread_arc: std::f32::consts::PI * 0.5,
        aimed_count: 1,
        warning: "WARNING - BOSS APPROACHING",
    },
    BossProfile {
        size: Vec2::new(FINAL_BOSS_WIDTH, FINAL_BOSS_HEIGHT),
        hp: FINAL_BOSS_HP,
        speed: FINAL_BOSS_SPEED,
        shoot_interval: FINAL_BOSS_SHOOT_INTERVAL,
        score: FINAL_BOSS_SCORE,
        patterns: &[
            AttackPattern::Spread,
            AttackPattern::Aimed,
            AttackPattern::Spiral,
            AttackPattern::Barrage,
        ],
        spread_count: 7,
        spread_arc: std::f32::consts::PI * 0.7,
        aimed_count: 3,
        warning: "WARNING - FINAL BOSS",
    },
];

impl BossKind {
    pub fn profile(self) -> &'static BossProfile {
        &PROFILES[self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BossKind::Mid => "mid",
            BossKind::Final => "final",
        }
    }
}

/// Boss lifecycle sub-state; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    Entering,
    Fighting,
    Dying,
}

/// The active boss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub speed: f32,
    pub phase: BossPhase,
    /// Y where entry ends and the bob is centred
    pub target_y: f32,
    /// Frames spent fighting
    pub move_timer: u32,
    /// +1 = right, -1 = left
    pub move_dir: f32,
    /// Frames since the last volley
    pub shoot_timer: u32,
    /// Index into the profile's pattern list
    pub attack_index: usize,
    /// Frames left in the current pattern
    pub pattern_timer: u32,
    pub death_timer: u32,
    pub score_value: u64,
    /// Hit feedback frames left
    pub flash_timer: u32,
}

impl Boss {
    /// A fresh boss centred just above the top edge
    pub fn spawn(kind: BossKind) -> Self {
        let profile = kind.profile();
        Self {
            kind,
            pos: Vec2::new(CANVAS_WIDTH / 2.0 - profile.size.x / 2.0, -profile.size.y),
            size: profile.size,
            hp: profile.hp,
            max_hp: profile.hp,
            speed: profile.speed,
            phase: BossPhase::Entering,
            target_y: BOSS_TARGET_Y,
            move_timer: 0,
            move_dir: 1.0,
            shoot_timer: 0,
            attack_index: 0,
            pattern_timer: BOSS_PATTERN_DURATION,
            death_timer: 0,
            score_value: profile.score,
            flash_timer: 0,
        }
    }

    pub fn current_pattern(&self) -> AttackPattern {
        let patterns = self.kind.profile().patterns;
        patterns[self.attack_index % patterns.len()]
    }

    pub fn is_dying(&self) -> bool {
        self.phase == BossPhase::Dying
    }

    /// Remaining health as a 0..=1 fraction (for the health bar)
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            0.0
        } else {
            (self.hp.max(0) as f32 / self.max_hp as f32).clamp(0.0, 1.0)
        }
    }

    /// Take one bullet hit. Returns true if this hit started the death sequence.
    pub fn take_hit(&mut self) -> bool {
        if self.phase != BossPhase::Fighting {
            return false;
        }
        self.hp -= 1;
        self.flash_timer = BOSS_HIT_FLASH;
        if self.hp <= 0 {
            self.phase = BossPhase::Dying;
            self.death_timer = 0;
            true
        } else {
            false
        }
    }

    /// Descend until the target line is reached
    fn enter(&mut self) {
        self.pos.y += BOSS_ENTRY_SPEED;
        if self.pos.y >= self.target_y {
            self.pos.y = self.target_y;
            self.phase = BossPhase::Fighting;
        }
    }

    /// Patrol, bob, rotate patterns and fire
    fn fight(&mut self, player_center: Vec2, rng: &mut dyn RngCore, out: &mut Vec<EnemyBullet>) {
        self.move_timer += 1;
        self.pos.x += self.speed * self.move_dir;
        if self.pos.x <= BOSS_EDGE_MARGIN {
            self.move_dir = 1.0;
        }
        if self.pos.x + self.size.x >= CANVAS_WIDTH - BOSS_EDGE_MARGIN {
            self.move_dir = -1.0;
        }
        self.pos.y = self.target_y
            + (self.move_timer as f32 * BOSS_BOB_FREQUENCY).sin() * BOSS_BOB_AMPLITUDE;

        let profile = self.kind.profile();
        self.pattern_timer = self.pattern_timer.saturating_sub(1);
        if self.pattern_timer == 0 {
            self.attack_index = (self.attack_index + 1) % profile.patterns.len();
            self.pattern_timer = BOSS_PATTERN_DURATION;
        }

        self.shoot_timer += 1;
        if self.shoot_timer >= profile.shoot_interval {
            self.current_pattern().fire(self, player_center, rng, out);
            self.shoot_timer = 0;
        }
    }

    /// Run the death animation. Returns true once it has finished.
    fn advance_death(&mut self, rng: &mut dyn RngCore, particles: &mut Vec<Particle>) -> bool {
        self.death_timer += 1;
        if self.death_timer.is_multiple_of(BOSS_DEATH_EXPLOSION_EVERY) {
            let at = self.pos
                + Vec2::new(
                    rng.random_range(0.0..self.size.x),
                    rng.random_range(0.0..self.size.y),
                );
            spawn_burst(particles, at, &EXPLOSION, rng);
        }
        self.death_timer >= BOSS_DEATH_DURATION
    }
}

/// Which boss, if any, should appear now
pub fn due_boss(state: &GameState) -> Option<BossKind> {
    if state.boss.is_some() {
        return None;
    }
    let BossProgress::MidBossesDefeated(defeated) = state.boss_progress else {
        return None;
    };

    if state.score >= FINAL_BOSS_THRESHOLD && defeated >= MID_BOSS_COUNT {
        return Some(BossKind::Final);
    }

    let next_mid_at = (defeated as u64 + 1) * MID_BOSS_INTERVAL;
    if state.score >= next_mid_at && next_mid_at < FINAL_BOSS_THRESHOLD {
        return Some(BossKind::Mid);
    }

    None
}

/// Spawn a boss if one is due: clears the field and raises the warning banner
pub fn check_boss_spawn(state: &mut GameState) {
    let Some(kind) = due_boss(state) else {
        return;
    };
    let boss = Boss::spawn(kind);
    log::info!(
        "{} boss spawned at score {} (hp {})",
        kind.as_str(),
        state.score,
        boss.hp
    );
    state.boss = Some(boss);
    state.enemies.clear();
    state.enemy_bullets.clear();
    state.warning.raise(kind.profile().warning);
    state.events.push(GameEvent::BossSpawned(kind));
}

/// Advance the boss (and the warning banner) by one frame
pub fn update_boss(state: &mut GameState, rng: &mut dyn RngCore) {
    state.warning.tick();

    let player_center = state.player.center();
    let Some(boss) = state.boss.as_mut() else {
        return;
    };

    boss.flash_timer = boss.flash_timer.saturating_sub(1);

    let finished = match boss.phase {
        BossPhase::Entering => {
            boss.enter();
            false
        }
        BossPhase::Fighting => {
            boss.fight(player_center, rng, &mut state.enemy_bullets);
            false
        }
        BossPhase::Dying => boss.advance_death(rng, &mut state.particles),
    };

    if finished {
        finish_boss(state, rng);
    }
}

/// Final explosion, award, removal and (for the final boss) stage clear
fn finish_boss(state: &mut GameState, rng: &mut dyn RngCore) {
    let Some(boss) = state.boss.take() else {
        return;
    };

    let center = boss.bounds().center();
    for _ in 0..5 {
        let jitter = Vec2::new(rng.random_range(-30.0..30.0), rng.random_range(-30.0..30.0));
        spawn_burst(&mut state.particles, center + jitter, &EXPLOSION, rng);
    }

    state.score += boss.score_value;
    state.enemy_bullets.clear();
    state.events.push(GameEvent::BossDefeated {
        kind: boss.kind,
        award: boss.score_value,
    });
    log::info!(
        "{} boss defeated, score now {}",
        boss.kind.as_str(),
        state.score
    );

    match boss.kind {
        BossKind::Final => {
            state.boss_progress = BossProgress::FinalBossDefeated;
            state.phase = GamePhase::Clear;
            state.events.push(GameEvent::StageClear);
            state.record_hi_score();
        }
        BossKind::Mid => {
            if let BossProgress::MidBossesDefeated(n) = state.boss_progress {
                state.boss_progress = BossProgress::MidBossesDefeated(n + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Enemy;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state(score: u64) -> GameState {
        let mut state = GameState::new(0);
        state.reset_for_new_game();
        state.score = score;
        state
    }

    fn fighting(kind: BossKind) -> Boss {
        let mut boss = Boss::spawn(kind);
        boss.pos.y = boss.target_y;
        boss.phase = BossPhase::Fighting;
        boss
    }

    #[test]
    fn test_mid_boss_spawns_at_3000() {
        let mut state = playing_state(3000);
        state.enemies.push(Enemy {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: 2.0,
        });
        state
            .enemy_bullets
            .push(EnemyBullet::fired_from(Vec2::new(50.0, 50.0), Vec2::Y));

        check_boss_spawn(&mut state);

        let boss = state.boss.as_ref().expect("mid boss");
        assert_eq!(boss.kind, BossKind::Mid);
        assert_eq!(boss.hp, 40);
        assert_eq!(boss.max_hp, 40);
        assert_eq!(boss.phase, BossPhase::Entering);
        assert_eq!(boss.pos.y, -MID_BOSS_HEIGHT);
        assert!(state.enemies.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert_eq!(state.warning.text, "WARNING - BOSS APPROACHING");
        assert_eq!(state.warning.timer, WARNING_DURATION);
        assert!(state.events.contains(&GameEvent::BossSpawned(BossKind::Mid)));
    }

    #[test]
    fn test_no_boss_below_threshold() {
        let mut state = playing_state(2999);
        check_boss_spawn(&mut state);
        assert!(state.boss.is_none());
    }

    #[test]
    fn test_second_spawn_suppressed_while_boss_alive() {
        let mut state = playing_state(3000);
        check_boss_spawn(&mut state);
        if let Some(boss) = state.boss.as_mut() {
            boss.hp = 7;
        }
        state.score = 20_000;
        check_boss_spawn(&mut state);
        let boss = state.boss.as_ref().expect("boss");
        assert_eq!(boss.kind, BossKind::Mid);
        assert_eq!(boss.hp, 7);
    }

    #[test]
    fn test_mid_boss_schedule() {
        let mut state = playing_state(5000);
        state.boss_progress = BossProgress::MidBossesDefeated(1);
        assert_eq!(due_boss(&state), None);
        state.score = 6000;
        assert_eq!(due_boss(&state), Some(BossKind::Mid));

        state.boss_progress = BossProgress::MidBossesDefeated(2);
        state.score = 9500;
        assert_eq!(due_boss(&state), Some(BossKind::Mid));
    }

    #[test]
    fn test_final_boss_needs_all_mid_bosses() {
        let mut state = playing_state(12_000);
        state.boss_progress = BossProgress::MidBossesDefeated(2);
        // Third mid-boss (due at 9000) comes first
        assert_eq!(due_boss(&state), Some(BossKind::Mid));

        state.boss_progress = BossProgress::MidBossesDefeated(MID_BOSS_COUNT);
        assert_eq!(due_boss(&state), Some(BossKind::Final));

        state.score = FINAL_BOSS_THRESHOLD - 1;
        assert_eq!(due_boss(&state), None);

        state.score = FINAL_BOSS_THRESHOLD;
        check_boss_spawn(&mut state);
        let boss = state.boss.as_ref().expect("final boss");
        assert_eq!(boss.kind, BossKind::Final);
        assert_eq!(boss.hp, FINAL_BOSS_HP);
        assert_eq!(state.warning.text, "WARNING - FINAL BOSS");
    }

    #[test]
    fn test_final_boss_only_once() {
        let mut state = playing_state(50_000);
        state.boss_progress = BossProgress::FinalBossDefeated;
        assert_eq!(due_boss(&state), None);
    }

    #[test]
    fn test_entering_descends_then_fights() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = playing_state(3000);
        check_boss_spawn(&mut state);

        update_boss(&mut state, &mut rng);
        let boss = state.boss.as_ref().expect("boss");
        assert_eq!(boss.pos.y, -MID_BOSS_HEIGHT + BOSS_ENTRY_SPEED);
        assert_eq!(boss.phase, BossPhase::Entering);

        let mut frames = 1;
        while state.boss.as_ref().map(|b| b.phase) == Some(BossPhase::Entering) {
            update_boss(&mut state, &mut rng);
            frames += 1;
            assert!(frames < 1000);
        }
        let boss = state.boss.as_ref().expect("boss");
        assert_eq!(boss.phase, BossPhase::Fighting);
        assert_eq!(boss.pos.y, BOSS_TARGET_Y);
        assert!(state.warning.timer < WARNING_DURATION);
    }

    #[test]
    fn test_fighting_turns_at_margins() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = playing_state(0);
        let mut boss = fighting(BossKind::Mid);
        boss.pos.x = CANVAS_WIDTH - BOSS_EDGE_MARGIN - MID_BOSS_WIDTH - 1.0;
        state.boss = Some(boss);

        update_boss(&mut state, &mut rng);
        assert_eq!(state.boss.as_ref().map(|b| b.move_dir), Some(-1.0));

        if let Some(boss) = state.boss.as_mut() {
            boss.pos.x = BOSS_EDGE_MARGIN + 1.0;
        }
        update_boss(&mut state, &mut rng);
        assert_eq!(state.boss.as_ref().map(|b| b.move_dir), Some(1.0));
    }

    #[test]
    fn test_fighting_bobs_around_target() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = playing_state(0);
        state.boss = Some(fighting(BossKind::Mid));
        for _ in 0..300 {
            update_boss(&mut state, &mut rng);
            let boss = state.boss.as_ref().expect("boss");
            assert!((boss.pos.y - BOSS_TARGET_Y).abs() <= BOSS_BOB_AMPLITUDE + 1e-3);
        }
    }

    #[test]
    fn test_fires_on_shoot_interval() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = playing_state(0);
        state.boss = Some(fighting(BossKind::Mid));

        for _ in 0..MID_BOSS_SHOOT_INTERVAL - 1 {
            update_boss(&mut state, &mut rng);
        }
        assert!(state.enemy_bullets.is_empty());

        update_boss(&mut state, &mut rng);
        // First pattern is the 5-way spread
        assert_eq!(state.enemy_bullets.len(), 5);
        assert_eq!(state.boss.as_ref().map(|b| b.shoot_timer), Some(0));
    }

    #[test]
    fn test_patterns_cycle() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = playing_state(0);
        state.boss = Some(fighting(BossKind::Final));

        let mut seen = Vec::new();
        for _ in 0..BOSS_PATTERN_DURATION * 5 {
            update_boss(&mut state, &mut rng);
            let pattern = state.boss.as_ref().map(|b| b.current_pattern());
            if seen.last() != pattern.as_ref() {
                seen.extend(pattern);
            }
        }
        assert_eq!(
            seen,
            vec![
                AttackPattern::Spread,
                AttackPattern::Aimed,
                AttackPattern::Spiral,
                AttackPattern::Barrage,
                AttackPattern::Spread,
                AttackPattern::Aimed,
            ]
        );
    }

    #[test]
    fn test_take_hit_only_while_fighting() {
        let mut boss = Boss::spawn(BossKind::Mid);
        assert!(!boss.take_hit());
        assert_eq!(boss.hp, MID_BOSS_HP);

        boss.phase = BossPhase::Fighting;
        boss.hp = 2;
        assert!(!boss.take_hit());
        assert_eq!(boss.flash_timer, BOSS_HIT_FLASH);
        assert!(boss.take_hit());
        assert_eq!(boss.phase, BossPhase::Dying);
        assert!(!boss.take_hit());
        assert_eq!(boss.hp, 0);
    }

    #[test]
    fn test_mid_boss_death_sequence() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut state = playing_state(3000);
        let mut boss = fighting(BossKind::Mid);
        boss.phase = BossPhase::Dying;
        state.boss = Some(boss);
        state
            .enemy_bullets
            .push(EnemyBullet::fired_from(Vec2::new(50.0, 50.0), Vec2::Y));

        for _ in 0..BOSS_DEATH_DURATION - 1 {
            update_boss(&mut state, &mut rng);
        }
        assert!(state.boss.is_some());
        // One small explosion every 6 frames
        let small = ((BOSS_DEATH_DURATION - 1) / BOSS_DEATH_EXPLOSION_EVERY) as usize;
        assert_eq!(state.particles.len(), small * EXPLOSION.count);

        update_boss(&mut state, &mut rng);
        assert!(state.boss.is_none());
        assert_eq!(state.score, 3000 + MID_BOSS_SCORE);
        assert_eq!(state.boss_progress, BossProgress::MidBossesDefeated(1));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.enemy_bullets.is_empty());
        // Last frame adds one small burst (frame 90) plus the five-point finale
        assert_eq!(state.particles.len(), (small + 1 + 5) * EXPLOSION.count);
        assert!(state.events.contains(&GameEvent::BossDefeated {
            kind: BossKind::Mid,
            award: MID_BOSS_SCORE,
        }));
    }

    #[test]
    fn test_final_boss_death_clears_stage() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = playing_state(10_500);
        state.hi_score = 12_000;
        state.boss_progress = BossProgress::MidBossesDefeated(MID_BOSS_COUNT);
        let mut boss = fighting(BossKind::Final);
        boss.phase = BossPhase::Dying;
        state.boss = Some(boss);

        for _ in 0..BOSS_DEATH_DURATION {
            update_boss(&mut state, &mut rng);
        }

        assert!(state.boss.is_none());
        assert_eq!(state.phase, GamePhase::Clear);
        assert_eq!(state.score, 10_500 + FINAL_BOSS_SCORE);
        assert_eq!(state.hi_score, 10_500 + FINAL_BOSS_SCORE);
        assert_eq!(state.boss_progress, BossProgress::FinalBossDefeated);
        assert!(state.events.contains(&GameEvent::StageClear));
        assert!(state
            .events
            .contains(&GameEvent::NewHiScore(10_500 + FINAL_BOSS_SCORE)));
    }

    #[test]
    fn test_hp_fraction() {
        let mut boss = Boss::spawn(BossKind::Final);
        assert_eq!(boss.hp_fraction(), 1.0);
        boss.hp = 60;
        assert!((boss.hp_fraction() - 0.5).abs() < 1e-6);
        boss.hp = -3;
        assert_eq!(boss.hp_fraction(), 0.0);
    }
}
