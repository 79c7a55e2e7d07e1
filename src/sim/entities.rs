//! Bullet and enemy collections: spawning, integration and pruning

use glam::{Vec2, Vec3};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::state::{Bullet, Enemy, EnemyVisual, Player};
use crate::config::GameConfig;

/// Active dynamic entities. Order carries no meaning beyond collision tie-breaks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
}

impl EntityStore {
    pub fn clear(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
    }

    /// Fire a bullet from the player's muzzle
    pub fn fire(&mut self, player: &Player, config: &GameConfig) -> &Bullet {
        self.bullets.push(Bullet {
            pos: player.muzzle(config.bullet_offset_y),
            vel: Vec2::new(config.bullet_speed, 0.0),
            size: config.bullet_size,
            color: config.bullet_color,
        });
        let last = self.bullets.len() - 1;
        &self.bullets[last]
    }

    /// Spawn an enemy just beyond the right edge at a random height
    pub fn spawn_enemy<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> &Enemy {
        let size = config.enemy_size;
        let span = config.viewport_height - size.y;
        let y = if span > 0.0 {
            rng.random_range(0.0..span).floor()
        } else {
            0.0
        };

        let magnitude = if config.enemy_speed_min < config.enemy_speed_max {
            rng.random_range(config.enemy_speed_min..config.enemy_speed_max)
        } else {
            config.enemy_speed_min
        };

        let visual = config
            .enemy_visuals
            .choose(rng)
            .copied()
            .unwrap_or(EnemyVisual::Color(Vec3::new(1.0, 0.2, 0.2)));

        self.enemies.push(Enemy {
            pos: Vec2::new(config.viewport_width, y),
            size,
            speed: -magnitude,
            visual,
        });
        let last = self.enemies.len() - 1;
        &self.enemies[last]
    }

    /// Advance every bullet by its velocity
    pub fn integrate_bullets(&mut self, dt: f32) {
        for bullet in &mut self.bullets {
            bullet.pos += bullet.vel * dt;
        }
    }

    /// Drop bullets past `limit_x`. Returns how many were removed.
    pub fn prune_bullets(&mut self, limit_x: f32) -> usize {
        let before = self.bullets.len();
        self.bullets.retain(|b| b.pos.x <= limit_x);
        before - self.bullets.len()
    }
}
