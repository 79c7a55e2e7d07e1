//! Read-only view of the world for renderers and audio
//!
//! Borrowed from the world after a tick completes; it cannot be used to
//! mutate anything.

use serde::Serialize;

use super::state::{Bullet, Enemy, GameEvent, GamePhase, GameWorld, Player, Star};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub stars: &'a [Star],
    pub score: u64,
    pub high_score: u64,
    /// Events produced by the most recent tick
    pub events: &'a [GameEvent],
    /// A shot left the gun this tick (sound cue)
    pub shot_fired: bool,
}

impl<'a> Snapshot<'a> {
    pub fn new(world: &'a GameWorld, events: &'a [GameEvent]) -> Self {
        Self {
            phase: world.phase,
            player: &world.player,
            bullets: &world.entities.bullets,
            enemies: &world.entities.enemies,
            stars: &world.stars,
            score: world.score,
            high_score: world.high_score,
            events,
            shot_fired: events.contains(&GameEvent::ShotFired),
        }
    }
}
