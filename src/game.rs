//! Frame-driven game loop
//!
//! Owns the world, the clock and the high score store. One call to
//! [`GameLoop::frame`] runs exactly one simulation tick; the renderer reads a
//! [`Snapshot`] afterwards.

use crate::config::GameConfig;
use crate::highscores::HighScoreStore;
use crate::platform::{Clock, InputSnapshot, MenuEvent, sanitize_dt};
use crate::sim::{GameEvent, GameWorld, Snapshot, tick};

pub struct GameLoop<C: Clock, S: HighScoreStore> {
    world: GameWorld,
    clock: C,
    store: S,
    last_time: Option<f64>,
    /// Events from the most recent tick
    events: Vec<GameEvent>,
    quit: bool,
}

impl<C: Clock, S: HighScoreStore> GameLoop<C, S> {
    /// Build a loop, reading the persisted high score once
    pub fn new(config: GameConfig, seed: u64, clock: C, mut store: S) -> Self {
        let high_score = store.load();
        log::info!(
            "Starting {} (seed {}, high score {})",
            config.variant.as_str(),
            seed,
            high_score
        );
        Self {
            world: GameWorld::new(config, seed).with_high_score(high_score),
            clock,
            store,
            last_time: None,
            events: Vec::new(),
            quit: false,
        }
    }

    /// Run one tick using the clock's elapsed time since the previous frame.
    ///
    /// Edge events in `input` are consumed; held actions are left alone.
    pub fn frame(&mut self, input: &mut InputSnapshot) -> Snapshot<'_> {
        let now = self.clock.now();
        let raw_dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        let dt = sanitize_dt(raw_dt, self.world.config.max_dt);
        if dt != raw_dt {
            log::debug!("Frame delta {} clamped to {}", raw_dt, dt);
        }

        self.step(input, dt)
    }

    /// Run one tick with an explicit delta (headless runs, replays)
    pub fn step(&mut self, input: &mut InputSnapshot, dt: f32) -> Snapshot<'_> {
        if input.was_pressed(MenuEvent::Quit) {
            log::info!("Quit requested");
            self.quit = true;
        }

        let tick_input = input.tick_input();
        input.clear_edges();
        self.events = tick(&mut self.world, &tick_input, dt);
        self.persist_high_score();

        Snapshot::new(&self.world, &self.events)
    }

    fn persist_high_score(&mut self) {
        let Some(score) = self.events.iter().find_map(|e| match e {
            GameEvent::NewHighScore(score) => Some(*score),
            _ => None,
        }) else {
            return;
        };

        if let Err(e) = self.store.save(score) {
            log::warn!("Could not persist high score {}: {}", score, e);
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.world, &self.events)
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Quit was pressed; the caller should stop calling `frame`
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{FileHighScoreStore, MemoryHighScoreStore};
    use crate::platform::{KeyMap, ManualClock};
    use crate::sim::{Enemy, EnemyVisual, GamePhase};
    use glam::Vec2;

    fn new_loop(high_score: u64) -> GameLoop<ManualClock, MemoryHighScoreStore> {
        GameLoop::new(
            GameConfig::default(),
            1,
            ManualClock::new(),
            MemoryHighScoreStore::new(high_score),
        )
    }

    fn press(input: &mut InputSnapshot, key: &str) {
        let map = KeyMap::default();
        input.key_down(&map, key);
        input.key_up(&map, key);
    }

    #[test]
    fn test_welcome_confirm_scenario() {
        let mut game = new_loop(0);
        let mut input = InputSnapshot::new();

        let snap = game.frame(&mut input);
        assert_eq!(snap.phase, GamePhase::Welcome);
        assert_eq!(snap.player.pos, Vec2::new(20.0, 515.0));
        assert_eq!(snap.player.size, Vec2::new(80.0, 80.0));
        assert_eq!(snap.player.health, 100.0);

        press(&mut input, "Enter");
        game.clock_mut().advance(1.0 / 60.0);
        assert_eq!(game.frame(&mut input).phase, GamePhase::Playing);

        press(&mut input, "Enter");
        game.clock_mut().advance(1.0 / 60.0);
        assert_eq!(game.frame(&mut input).phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_persists_new_high_score() {
        let mut game = new_loop(100);
        assert_eq!(game.world().high_score, 100);

        game.world.phase = GamePhase::Playing;
        game.world.score = 120;
        game.world.player.health = 20.0;
        game.world.entities.enemies.push(Enemy {
            pos: Vec2::new(-99.0, 0.0),
            size: Vec2::splat(100.0),
            speed: -150.0,
            visual: EnemyVisual::Sprite(1),
        });

        let snap = game.step(&mut InputSnapshot::new(), 0.1);
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(snap.high_score, 120);
        assert_eq!(game.store().saves, vec![120]);
    }

    #[test]
    fn test_no_save_when_score_not_beaten() {
        let mut game = new_loop(500);
        game.world.phase = GamePhase::Playing;
        game.world.score = 120;
        game.world.player.health = 0.0;
        game.step(&mut InputSnapshot::new(), 0.1);
        assert_eq!(game.world().phase, GamePhase::GameOver);
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_running() {
        let mut game = GameLoop::new(
            GameConfig::default(),
            1,
            ManualClock::new(),
            MemoryHighScoreStore::failing(),
        );
        game.world.phase = GamePhase::Playing;
        game.world.score = 50;
        game.world.player.health = 0.0;
        game.step(&mut InputSnapshot::new(), 0.1);
        assert_eq!(game.world().phase, GamePhase::GameOver);
        assert_eq!(game.world().high_score, 50);

        let mut input = InputSnapshot::new();
        input.press(MenuEvent::Confirm);
        assert_eq!(game.step(&mut input, 0.1).phase, GamePhase::Welcome);
    }

    #[test]
    fn test_confirm_in_game_over_resets_in_one_frame() {
        let mut game = new_loop(0);
        let config = game.world.config.clone();
        game.world.phase = GamePhase::GameOver;
        game.world.score = 90;
        game.world.player.health = 0.0;
        game.world.entities.fire(&game.world.player, &config);
        game.world.entities.spawn_enemy(&mut game.world.rng, &config);

        let mut input = InputSnapshot::new();
        press(&mut input, "Enter");
        let snap = game.step(&mut input, 0.0);
        assert_eq!(snap.phase, GamePhase::Welcome);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.player.health, 100.0);
        assert!(snap.bullets.is_empty());
        assert!(snap.enemies.is_empty());
    }

    #[test]
    fn test_quit_sets_flag_without_state_change() {
        let mut game = new_loop(0);
        let mut input = InputSnapshot::new();
        press(&mut input, "Escape");
        let phase = game.frame(&mut input).phase;
        assert_eq!(phase, GamePhase::Welcome);
        assert!(game.should_quit());
    }

    #[test]
    fn test_edges_consumed_once() {
        let mut game = new_loop(0);
        let mut input = InputSnapshot::new();
        press(&mut input, "I");
        assert_eq!(game.frame(&mut input).phase, GamePhase::Instructions);
        assert!(input.pressed().is_empty());
        press(&mut input, "Backspace");
        assert_eq!(game.frame(&mut input).phase, GamePhase::Welcome);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut game = new_loop(0);
        let mut input = InputSnapshot::new();
        input.press(MenuEvent::Confirm);
        game.clock_mut().set(10.0);
        game.frame(&mut input);

        input.set_held(crate::platform::Action::Up, true);
        game.clock_mut().set(5.0);
        game.frame(&mut input);
        assert_eq!(game.world().player.pos.y, 515.0);

        // Forward again: moves by at most max_dt worth
        game.clock_mut().set(105.0);
        game.frame(&mut input);
        assert_eq!(game.world().player.pos.y, 515.0 + 600.0 * 0.25);
    }

    #[test]
    fn test_file_store_round_trip_through_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        std::fs::write(&path, "100").unwrap();

        let mut game = GameLoop::new(
            GameConfig::default(),
            1,
            ManualClock::new(),
            FileHighScoreStore::new(&path),
        );
        assert_eq!(game.world().high_score, 100);
        game.world.phase = GamePhase::Playing;
        game.world.score = 120;
        game.world.player.health = 0.0;
        game.step(&mut InputSnapshot::new(), 0.1);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "120");
    }
}
