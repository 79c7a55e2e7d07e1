//! ZapValks - a side-scrolling arcade shooter core
//!
//! Core modules:
//! - `sim`: Simulation (movement, spawning, collisions, scoring, game phases)
//! - `platform`: Clock and input adapters feeding the simulation
//! - `highscores`: Persisted best score
//! - `config`: Tunable game parameters and variant presets
//! - `game`: The frame-driven loop that ties the above together

pub mod config;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod sim;

pub use config::{CollisionMode, GameConfig, Variant};
pub use game::GameLoop;
pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};

use glam::Vec2;

/// Default tuning values
pub mod consts {
    /// Viewport dimensions (ZapValks layout)
    pub const VIEWPORT_WIDTH: f32 = 1920.0;
    pub const VIEWPORT_HEIGHT: f32 = 1080.0;

    /// Player defaults - pinned near the left edge, moves vertically only
    pub const PLAYER_START_X: f32 = 20.0;
    pub const PLAYER_SIZE: f32 = 80.0;
    /// Vertical speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 600.0;
    pub const MAX_HEALTH: f32 = 100.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    /// Vertical offset from the player's centre line
    pub const BULLET_OFFSET_Y: f32 = -5.0;
    /// Bullets are dropped once past the right edge by this much
    pub const BULLET_MARGIN: f32 = 10.0;
    /// Minimum time between shots (seconds)
    pub const FIRE_COOLDOWN: f32 = 0.2;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 100.0;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 0.5;
    /// Leftward speed magnitude range (pixels/s), upper bound exclusive
    pub const ENEMY_SPEED_MIN: f32 = 150.0;
    pub const ENEMY_SPEED_MAX: f32 = 250.0;

    /// Health lost when an enemy slips past the left edge
    pub const DAMAGE_PER_MISS: f32 = 20.0;
    /// Score gained per destroyed enemy
    pub const SCORE_PER_KILL: u64 = 10;

    /// Background starfield
    pub const STAR_COUNT: usize = 150;
    pub const STAR_SPEED: f32 = 50.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict containment: points on the border are outside
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x > self.min.x && p.x < max.x && p.y > self.min.y && p.y < max.y
    }

    /// Strict overlap: rectangles that only touch along an edge do not overlap
    #[inline]
    pub fn overlaps_strict(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_strict_excludes_border() {
        let r = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0));
        assert!(r.contains_strict(Vec2::new(125.0, 125.0)));
        assert!(!r.contains_strict(Vec2::new(100.0, 125.0)));
        assert!(!r.contains_strict(Vec2::new(150.0, 125.0)));
        assert!(!r.contains_strict(Vec2::new(125.0, 150.0)));
    }

    #[test]
    fn test_overlaps_strict() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let touching = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let inside = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps_strict(&touching));
        assert!(a.overlaps_strict(&inside));
        assert!(inside.overlaps_strict(&a));
    }
}
