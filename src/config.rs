//! Game configuration and variant presets
//!
//! Every knob that differed between the shipped game variants lives here, so
//! one simulation core serves all of them.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::EnemyVisual;

/// Bundled game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// 1920x1080, fast spawns, sprite enemies
    #[default]
    ZapValks,
    /// 1600x1200, slower spawns, flat red enemies
    Classic,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ZapValks => "ZapValks",
            Variant::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zapvalks" | "zap" => Some(Variant::ZapValks),
            "classic" | "horizontal" => Some(Variant::Classic),
            _ => None,
        }
    }
}

/// How bullets are tested against enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionMode {
    /// Bullet position must lie strictly inside the enemy rectangle.
    /// Fast bullets can skip over thin enemies between ticks.
    #[default]
    Point,
    /// Bullet rectangle must strictly overlap the enemy rectangle
    Overlap,
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Player ===
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub max_health: f32,
    pub player_color: Vec3,
    /// Opaque sprite handle for the renderer (None = flat color)
    pub player_sprite: Option<u32>,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_size: Vec2,
    pub bullet_offset_y: f32,
    pub bullet_margin: f32,
    pub bullet_color: Vec3,
    pub fire_cooldown: f32,

    // === Enemies ===
    pub enemy_size: Vec2,
    pub enemy_spawn_interval: f32,
    /// Leftward speed magnitude, `min..max`
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub enemy_visuals: Vec<EnemyVisual>,

    // === Rules ===
    pub damage_per_miss: f32,
    pub score_per_kill: u64,
    pub collision_mode: CollisionMode,

    // === Background ===
    pub star_count: usize,
    pub star_speed: f32,

    // === Loop ===
    pub max_dt: f32,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_variant(Variant::ZapValks)
    }
}

impl GameConfig {
    /// Build the configuration for a bundled variant
    pub fn from_variant(variant: Variant) -> Self {
        let (width, height, spawn_interval, visuals, sprite) = match variant {
            Variant::ZapValks => (
                VIEWPORT_WIDTH,
                VIEWPORT_HEIGHT,
                ENEMY_SPAWN_INTERVAL,
                (0..3).map(EnemyVisual::Sprite).collect(),
                Some(0),
            ),
            Variant::Classic => (
                1600.0,
                1200.0,
                1.0,
                vec![EnemyVisual::Color(Vec3::new(1.0, 0.2, 0.2))],
                None,
            ),
        };
        // Classic draws smaller flat-colored ships over a sparser starfield
        let (player_size, enemy_size, star_count) = match variant {
            Variant::ZapValks => (PLAYER_SIZE, ENEMY_SIZE, STAR_COUNT),
            Variant::Classic => (50.0, 40.0, 100),
        };

        Self {
            variant,
            viewport_width: width,
            viewport_height: height,
            // Slightly below centre
            player_start: Vec2::new(PLAYER_START_X, (height / 2.0).floor() - 25.0),
            player_size: Vec2::splat(player_size),
            player_speed: PLAYER_SPEED,
            max_health: MAX_HEALTH,
            player_color: Vec3::new(0.2, 0.6, 1.0),
            player_sprite: sprite,
            bullet_speed: BULLET_SPEED,
            bullet_size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            bullet_offset_y: BULLET_OFFSET_Y,
            bullet_margin: BULLET_MARGIN,
            bullet_color: Vec3::new(1.0, 0.8, 0.2),
            fire_cooldown: FIRE_COOLDOWN,
            enemy_size: Vec2::splat(enemy_size),
            enemy_spawn_interval: spawn_interval,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            enemy_visuals: visuals,
            damage_per_miss: DAMAGE_PER_MISS,
            score_per_kill: SCORE_PER_KILL,
            collision_mode: CollisionMode::Point,
            star_count,
            star_speed: STAR_SPEED,
            max_dt: MAX_FRAME_DT,
            high_score_path: PathBuf::from("highscore.txt"),
        }
    }

    /// Viewport as a vector (width, height)
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Parse a JSON config; missing fields take ZapValks defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No config at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!(
                    "Loaded {} config from {}",
                    config.variant.as_str(),
                    path.display()
                );
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair contradictory values rather than rejecting the config
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::from_variant(self.variant);

        if !(self.viewport_width > 0.0) || !(self.viewport_height > 0.0) {
            log::warn!("Invalid viewport, using variant default");
            self.viewport_width = defaults.viewport_width;
            self.viewport_height = defaults.viewport_height;
        }
        if !(self.max_health > 0.0) || self.max_health > MAX_HEALTH {
            self.max_health = self.max_health.clamp(1.0, MAX_HEALTH);
            if self.max_health.is_nan() {
                self.max_health = MAX_HEALTH;
            }
        }
        if !(self.enemy_spawn_interval > 0.0) {
            self.enemy_spawn_interval = defaults.enemy_spawn_interval;
        }
        if !(self.fire_cooldown >= 0.0) {
            self.fire_cooldown = FIRE_COOLDOWN;
        }
        self.enemy_speed_min = self.enemy_speed_min.abs();
        self.enemy_speed_max = self.enemy_speed_max.abs();
        if self.enemy_speed_min > self.enemy_speed_max {
            std::mem::swap(&mut self.enemy_speed_min, &mut self.enemy_speed_max);
        }
        if self.enemy_visuals.is_empty() {
            self.enemy_visuals = defaults.enemy_visuals;
        }
        if !(self.max_dt > 0.0) {
            self.max_dt = MAX_FRAME_DT;
        }
        // Enemies must fit inside the viewport for spawn placement
        self.enemy_size.y = self.enemy_size.y.min(self.viewport_height);
        self.player_size.y = self.player_size.y.min(self.viewport_height);
        self.player_start.y = self
            .player_start
            .y
            .clamp(0.0, self.viewport_height - self.player_size.y);

        self
    }
}
