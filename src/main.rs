//! ZapValks headless runner
//!
//! Drives the game loop without a window: an autopilot plays one run from
//! the title screen to game over, then the session summary is logged.
//! Rendering and audio hosts embed `zapvalks::GameLoop` the same way.

use std::time::{SystemTime, UNIX_EPOCH};

use zapvalks::platform::{Action, InputSnapshot, ManualClock, MenuEvent};
use zapvalks::sim::{GameEvent, GamePhase, Snapshot};
use zapvalks::{FileHighScoreStore, GameConfig, GameLoop};

const CONFIG_PATH: &str = "zapvalks.json";
const FRAME_DT: f64 = 1.0 / 60.0;
/// Give up after five simulated minutes
const MAX_FRAMES: u64 = 60 * 60 * 5;

/// Demo AI: chase the enemy closest to the left edge and keep firing
fn autopilot(snap: &Snapshot<'_>, input: &mut InputSnapshot) {
    let player_mid = snap.player.pos.y + snap.player.size.y / 2.0;

    let target = snap
        .enemies
        .iter()
        .min_by(|a, b| a.pos.x.partial_cmp(&b.pos.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|e| e.pos.y + e.size.y / 2.0);

    // Small dead zone so the ship doesn't jitter around the target line
    let (up, down) = match target {
        Some(y) if y > player_mid + 8.0 => (true, false),
        Some(y) if y < player_mid - 8.0 => (false, true),
        _ => (false, false),
    };
    input.set_held(Action::Up, up);
    input.set_held(Action::Down, down);
    input.set_held(Action::Fire, target.is_some());
}

fn main() {
    env_logger::init();
    log::info!("ZapValks (headless) starting...");

    let config = GameConfig::load(CONFIG_PATH);
    let store = FileHighScoreStore::new(&config.high_score_path);
    log::info!("High score file: {}", store.path().display());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut game = GameLoop::new(config, seed, ManualClock::new(), store);
    let mut input = InputSnapshot::new();

    let (mut shots, mut kills, mut escapes) = (0u64, 0u64, 0u64);

    input.press(MenuEvent::Confirm);
    let mut frames = 0;
    while frames < MAX_FRAMES {
        game.clock_mut().advance(FRAME_DT);
        let snap = game.frame(&mut input);
        frames += 1;

        for event in snap.events {
            match event {
                GameEvent::ShotFired => shots += 1,
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::EnemyEscaped => escapes += 1,
                _ => {}
            }
        }

        if snap.phase == GamePhase::GameOver {
            match serde_json::to_string(&snap) {
                Ok(json) => log::debug!("Final frame: {}", json),
                Err(e) => log::warn!("Could not serialize final frame: {}", e),
            }
            break;
        }
        autopilot(&snap, &mut input);
    }

    let world = game.world();
    log::info!(
        "Run over after {:.1}s: score {}, high score {}, {} shots, {} kills, {} escapes",
        world.time,
        world.score,
        world.high_score,
        shots,
        kills,
        escapes
    );
    println!("Score: {}  High Score: {}", world.score, world.high_score);

    // Back to the title screen, then quit
    input.press(MenuEvent::Confirm);
    input.press(MenuEvent::Quit);
    game.clock_mut().advance(FRAME_DT);
    game.frame(&mut input);
    if game.should_quit() {
        log::info!("Bye");
    }
}
