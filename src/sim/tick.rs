//! Per-frame simulation tick
//!
//! Order within a tick matters: damage and kills are settled before the
//! game-over check, so the tick that kills the player also sees the final
//! score when comparing against the high score.

use super::collision::sweep_enemies;
use super::machine::{check_game_over, handle_event};
use super::state::{GameEvent, GamePhase, GameWorld};
use crate::platform::{MenuEvent, sanitize_dt};

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held: move up
    pub up: bool,
    /// Held: move down
    pub down: bool,
    /// Held: fire (rate limited)
    pub fire: bool,
    /// Edge events since the previous tick, in arrival order
    pub events: Vec<MenuEvent>,
}

/// Advance the world by `dt` seconds, returning what happened.
///
/// Bullets and enemies only move while Playing: an enemy escaping on the
/// game-over screen would otherwise keep draining health the run no longer
/// checks. Returning to Welcome clears them either way.
pub fn tick(world: &mut GameWorld, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = sanitize_dt(dt, world.config.max_dt);

    // Menu events first, as they arrive between frames
    for &event in &input.events {
        if let Some(changed) = handle_event(world, event) {
            events.push(changed);
        }
    }

    world.time += dt as f64;
    world.time_ticks += 1;

    // Background scrolls on every screen
    world.scroll_stars(dt);

    // Everything else is frozen outside gameplay
    if world.phase != GamePhase::Playing {
        return events;
    }

    // --- INPUT -> MOVEMENT ---
    let (speed, height) = (world.config.player_speed, world.config.viewport_height);
    world.player.move_vertical(input.up, input.down, speed, dt, height);

    // --- FIRE ---
    let cooldown = world.config.fire_cooldown;
    world.shot_timer = (world.shot_timer + dt).min(cooldown);
    if input.fire && world.shot_timer >= cooldown {
        world.entities.fire(&world.player, &world.config);
        world.shot_timer = 0.0;
        events.push(GameEvent::ShotFired);
    }

    // --- SPAWN ---
    // At most one spawn per tick; the timer restarts from zero
    world.spawn_timer += dt;
    if world.spawn_timer >= world.config.enemy_spawn_interval {
        let enemy = world.entities.spawn_enemy(&mut world.rng, &world.config);
        log::debug!("Enemy spawned at y={} speed={}", enemy.pos.y, enemy.speed);
        world.spawn_timer = 0.0;
        events.push(GameEvent::EnemySpawned);
    }

    // --- BULLETS ---
    world.entities.integrate_bullets(dt);
    let limit_x = world.config.viewport_width + world.config.bullet_margin;
    world.entities.prune_bullets(limit_x);

    // --- ENEMIES & COLLISIONS ---
    let sweep = sweep_enemies(&mut world.entities, dt, world.config.collision_mode);

    if sweep.escaped > 0 {
        world.player.health -= world.config.damage_per_miss * sweep.escaped as f32;
        log::debug!(
            "{} enemies escaped, health now {}",
            sweep.escaped,
            world.player.health
        );
        events.extend((0..sweep.escaped).map(|_| GameEvent::EnemyEscaped));
    }

    for pos in sweep.destroyed {
        world.score += world.config.score_per_kill;
        log::debug!("Enemy destroyed at {:?}, score {}", pos, world.score);
        events.push(GameEvent::EnemyDestroyed { pos });
    }

    // --- GAME OVER ---
    check_game_over(world, &mut events);

    events
}
