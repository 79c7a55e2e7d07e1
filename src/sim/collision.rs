//! Bullet/enemy collision detection and the per-tick enemy sweep
//!
//! The default test is the bullet's single position point against the
//! enemy rectangle, strictly. A bullet moving faster than an enemy is wide
//! per tick can pass through it untouched; `CollisionMode::Overlap` widens
//! the test to the bullet's own rectangle.

use glam::Vec2;

use super::entities::EntityStore;
use super::state::{Bullet, Enemy};
use crate::config::CollisionMode;

/// Outcome of sweeping every enemy once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepResult {
    /// Enemies that crossed the left edge this tick
    pub escaped: u32,
    /// Positions of enemies destroyed by bullets this tick
    pub destroyed: Vec<Vec2>,
}

/// Does this bullet hit this enemy?
#[inline]
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy, mode: CollisionMode) -> bool {
    match mode {
        CollisionMode::Point => enemy.rect().contains_strict(bullet.pos),
        CollisionMode::Overlap => enemy.rect().overlaps_strict(&bullet.rect()),
    }
}

/// Index of the first bullet (in iteration order) that hits `enemy`
pub fn first_hit(bullets: &[Bullet], enemy: &Enemy, mode: CollisionMode) -> Option<usize> {
    bullets.iter().position(|b| bullet_hits_enemy(b, enemy, mode))
}

/// Move each enemy, then resolve escapes and bullet hits.
///
/// Every enemy is visited exactly once. An escaped enemy is removed without
/// being hit-tested; a hit removes the enemy and the first matching bullet
/// immediately, so neither can be counted twice.
pub fn sweep_enemies(store: &mut EntityStore, dt: f32, mode: CollisionMode) -> SweepResult {
    let mut result = SweepResult::default();
    let enemies = std::mem::take(&mut store.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());

    for mut enemy in enemies {
        enemy.pos.x += enemy.speed * dt;

        if enemy.escaped() {
            result.escaped += 1;
            continue;
        }

        if let Some(hit) = first_hit(&store.bullets, &enemy, mode) {
            store.bullets.remove(hit);
            result.destroyed.push(enemy.pos);
            continue;
        }

        survivors.push(enemy);
    }

    store.enemies = survivors;
    result
}
