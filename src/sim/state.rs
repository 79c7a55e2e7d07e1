//! Game state and core simulation types
//!
//! `GameWorld` is the single aggregate the loop owns and mutates; nothing in
//! the simulation is global.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::EntityStore;
use crate::Rect;
use crate::config::GameConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Title screen
    #[default]
    Welcome,
    /// Controls/rules screen
    Instructions,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for confirm
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Welcome => "Welcome",
            GamePhase::Instructions => "Instructions",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// How the renderer should draw an enemy. Opaque to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyVisual {
    /// Index into the renderer's sprite table
    Sprite(u32),
    /// Flat RGB color
    Color(Vec3),
}

/// Something the presentation layer may want to react to (sound cues etc.)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    EnemySpawned,
    EnemyDestroyed { pos: Vec2 },
    EnemyEscaped,
    PhaseChanged { from: GamePhase, to: GamePhase },
    NewHighScore(u64),
}

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left corner (y grows upward)
    pub pos: Vec2,
    pub size: Vec2,
    /// May dip below zero within a tick, before the game-over check
    pub health: f32,
    pub max_health: f32,
    pub color: Vec3,
    pub sprite: Option<u32>,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let max_health = config.max_health.clamp(0.0, crate::consts::MAX_HEALTH);
        Self {
            pos: config.player_start,
            size: config.player_size,
            health: max_health,
            max_health,
            color: config.player_color,
            sprite: config.player_sprite,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Health bar fill in [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    /// Where bullets leave the ship: trailing edge, near the vertical centre
    pub fn muzzle(&self, offset_y: f32) -> Vec2 {
        self.pos + Vec2::new(self.size.x, self.size.y / 2.0 + offset_y)
    }

    /// Apply vertical movement, clamped to the viewport
    pub fn move_vertical(&mut self, up: bool, down: bool, speed: f32, dt: f32, viewport_height: f32) {
        let step = speed * dt;
        let top = (viewport_height - self.size.y).max(0.0);
        if up {
            self.pos.y = (self.pos.y + step).min(top);
        }
        if down {
            self.pos.y = (self.pos.y - step).max(0.0);
        }
        self.pos.y = self.pos.y.clamp(0.0, top);
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Render size; also the hit box in overlap collision mode
    pub size: Vec2,
    pub color: Vec3,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An enemy advancing from the right edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed, always negative (leftward)
    pub speed: f32,
    pub visual: EnemyVisual,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Fully past the left edge
    pub fn escaped(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Decorative background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub entities: EntityStore,
    pub stars: Vec<Star>,
    pub score: u64,
    pub high_score: u64,
    /// Seconds accumulated toward the next enemy spawn
    pub spawn_timer: f32,
    /// Seconds since the last shot, capped at the cooldown
    pub shot_timer: f32,
    /// Simulated seconds since creation
    pub time: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameWorld {
    /// Create a world in the Welcome phase
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = scatter_stars(&mut rng, &config);

        Self {
            player: Player::new(&config),
            shot_timer: config.fire_cooldown,
            config,
            seed,
            rng,
            phase: GamePhase::Welcome,
            entities: EntityStore::default(),
            stars,
            score: 0,
            high_score: 0,
            spawn_timer: 0.0,
            time: 0.0,
            time_ticks: 0,
        }
    }

    /// Start the world with a previously persisted best score
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    /// Clear everything belonging to a run: score, player, entities, timers
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.player = Player::new(&self.config);
        self.entities.clear();
        self.spawn_timer = 0.0;
        self.shot_timer = self.config.fire_cooldown;
    }

    /// Scroll the starfield left, wrapping to the right edge
    pub fn scroll_stars(&mut self, dt: f32) {
        let step = self.config.star_speed * dt;
        let width = self.config.viewport_width;
        for star in &mut self.stars {
            star.pos.x -= step;
            if star.pos.x < 0.0 {
                star.pos.x = width;
            }
        }
    }
}

fn scatter_stars(rng: &mut Pcg32, config: &GameConfig) -> Vec<Star> {
    (0..config.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..config.viewport_width),
                rng.random_range(0.0..config.viewport_height),
            ),
        })
        .collect()
}
