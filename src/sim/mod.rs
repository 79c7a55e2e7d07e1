//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform dependencies:
//! - Time arrives as an already-guarded `dt`
//! - Input arrives as game actions, never key codes
//! - Seeded RNG only, so identical inputs replay identically

pub mod collision;
pub mod entities;
pub mod machine;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{SweepResult, bullet_hits_enemy, first_hit, sweep_enemies};
pub use entities::EntityStore;
pub use machine::{Transition, check_game_over, handle_event, transition};
pub use snapshot::Snapshot;
pub use state::{Bullet, Enemy, EnemyVisual, GameEvent, GamePhase, GameWorld, Player, Star};
pub use tick::{TickInput, tick};
