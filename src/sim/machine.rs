//! Game phase transitions
//!
//! ```text
//! Welcome      --confirm--> Playing
//! Welcome      --help-----> Instructions
//! Instructions --confirm--> Playing
//! Instructions --back-----> Welcome
//! Playing      --health<=0> GameOver   (commits the high score)
//! GameOver     --confirm--> Welcome    (resets the run)
//! ```
//!
//! Events with no rule in the current phase are ignored. Quit is not a phase.

use super::state::{GameEvent, GamePhase, GameWorld};
use crate::platform::MenuEvent;

/// What an input event does in a given phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No rule matches
    Stay,
    /// Plain phase change
    Enter(GamePhase),
    /// Phase change that also wipes the run
    ResetTo(GamePhase),
}

/// Look up the rule for `event` in `phase`
pub fn transition(phase: GamePhase, event: MenuEvent) -> Transition {
    use GamePhase::*;
    match (phase, event) {
        (Welcome, MenuEvent::Confirm) => Transition::Enter(Playing),
        (Welcome, MenuEvent::Help) => Transition::Enter(Instructions),
        (Instructions, MenuEvent::Confirm) => Transition::Enter(Playing),
        (Instructions, MenuEvent::Back) => Transition::Enter(Welcome),
        (GameOver, MenuEvent::Confirm) => Transition::ResetTo(Welcome),
        _ => Transition::Stay,
    }
}

/// Apply one input event to the world, returning any resulting events
pub fn handle_event(world: &mut GameWorld, event: MenuEvent) -> Option<GameEvent> {
    let from = world.phase;
    let to = match transition(from, event) {
        Transition::Stay => return None,
        Transition::Enter(to) => to,
        Transition::ResetTo(to) => {
            world.reset_run();
            to
        }
    };

    world.phase = to;
    log::info!("Phase {} -> {}", from.as_str(), to.as_str());
    Some(GameEvent::PhaseChanged { from, to })
}

/// End the run if the player is out of health.
///
/// Only evaluated while Playing. A new best score is written to
/// `world.high_score` and reported so the caller can persist it.
pub fn check_game_over(world: &mut GameWorld, events: &mut Vec<GameEvent>) {
    if world.phase != GamePhase::Playing || !world.player.is_dead() {
        return;
    }

    world.phase = GamePhase::GameOver;
    // Health is meaningless below zero outside Playing
    world.player.health = 0.0;
    log::info!("Game over with score {}", world.score);
    events.push(GameEvent::PhaseChanged {
        from: GamePhase::Playing,
        to: GamePhase::GameOver,
    });

    if world.score > world.high_score {
        world.high_score = world.score;
        log::info!("New high score {}", world.high_score);
        events.push(GameEvent::NewHighScore(world.high_score));
    }
}
