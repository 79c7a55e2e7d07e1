//! Input adapter
//!
//! Host key names are mapped once, here, onto a small set of game actions.
//! The simulation never sees key codes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Level-triggered actions (act while held)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Fire,
}

/// Edge-triggered events (act once per press)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuEvent {
    Confirm,
    Help,
    Back,
    Quit,
}

/// What a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    Hold(Action),
    Press(MenuEvent),
}

/// Key name -> binding table. Names are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMap {
    bindings: HashMap<String, Binding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self {
            bindings: HashMap::new(),
        };
        map.bind("W", Binding::Hold(Action::Up));
        map.bind("Up", Binding::Hold(Action::Up));
        map.bind("S", Binding::Hold(Action::Down));
        map.bind("Down", Binding::Hold(Action::Down));
        map.bind("Space", Binding::Hold(Action::Fire));
        map.bind("Enter", Binding::Press(MenuEvent::Confirm));
        map.bind("I", Binding::Press(MenuEvent::Help));
        map.bind("Backspace", Binding::Press(MenuEvent::Back));
        map.bind("Escape", Binding::Press(MenuEvent::Quit));
        map
    }
}

impl KeyMap {
    pub fn bind(&mut self, key: &str, binding: Binding) {
        self.bindings.insert(key.to_lowercase(), binding);
    }

    pub fn unbind(&mut self, key: &str) -> Option<Binding> {
        self.bindings.remove(&key.to_lowercase())
    }

    pub fn lookup(&self, key: &str) -> Option<Binding> {
        self.bindings.get(&key.to_lowercase()).copied()
    }
}

/// Current input state: held actions plus edge events since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Held keys (lowercased) and the action each was bound to when pressed.
    /// Key-keyed so auto-repeat downs are idempotent.
    held_keys: HashMap<String, Action>,
    /// Actions held directly, without a key
    forced: HashSet<Action>,
    pressed: Vec<MenuEvent>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a host key press. Returns false for unmapped keys.
    pub fn key_down(&mut self, map: &KeyMap, key: &str) -> bool {
        match map.lookup(key) {
            Some(Binding::Hold(action)) => {
                self.held_keys.insert(key.to_lowercase(), action);
                true
            }
            Some(Binding::Press(event)) => {
                self.pressed.push(event);
                true
            }
            None => false,
        }
    }

    /// Feed a host key release. Returns false for unmapped keys.
    pub fn key_up(&mut self, map: &KeyMap, key: &str) -> bool {
        let released = self.held_keys.remove(&key.to_lowercase()).is_some();
        match map.lookup(key) {
            Some(_) => true,
            None => released,
        }
    }

    /// Directly set an action's held state (bypasses the key map).
    /// Releasing also drops any keys holding that action.
    pub fn set_held(&mut self, action: Action, held: bool) {
        if held {
            self.forced.insert(action);
        } else {
            self.forced.remove(&action);
            self.held_keys.retain(|_, a| *a != action);
        }
    }

    /// Queue an edge event (bypasses the key map)
    pub fn press(&mut self, event: MenuEvent) {
        self.pressed.push(event);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.forced.contains(&action) || self.held_keys.values().any(|&a| a == action)
    }

    pub fn pressed(&self) -> &[MenuEvent] {
        &self.pressed
    }

    pub fn was_pressed(&self, event: MenuEvent) -> bool {
        self.pressed.contains(&event)
    }

    /// Build the simulation input for one tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held(Action::Up),
            down: self.is_held(Action::Down),
            fire: self.is_held(Action::Fire),
            events: self.pressed.clone(),
        }
    }

    /// Drop one-shot events after they have been processed
    pub fn clear_edges(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.lookup("w"), Some(Binding::Hold(Action::Up)));
        assert_eq!(map.lookup("DOWN"), Some(Binding::Hold(Action::Down)));
        assert_eq!(map.lookup("Space"), Some(Binding::Hold(Action::Fire)));
        assert_eq!(map.lookup("Enter"), Some(Binding::Press(MenuEvent::Confirm)));
        assert_eq!(map.lookup("Escape"), Some(Binding::Press(MenuEvent::Quit)));
        assert_eq!(map.lookup("F12"), None);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let map = KeyMap::default();
        let mut input = InputSnapshot::new();
        assert!(!input.key_down(&map, "Q"));
        assert!(!input.key_up(&map, "Q"));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_two_keys_same_action() {
        let map = KeyMap::default();
        let mut input = InputSnapshot::new();
        input.key_down(&map, "W");
        input.key_down(&map, "Up");
        input.key_up(&map, "W");
        assert!(input.is_held(Action::Up));
        input.key_up(&map, "Up");
        assert!(!input.is_held(Action::Up));
    }

    #[test]
    fn test_key_repeat_releases_on_single_up() {
        let map = KeyMap::default();
        let mut input = InputSnapshot::new();
        input.key_down(&map, "W");
        input.key_down(&map, "W");
        input.key_down(&map, "w");
        assert!(input.is_held(Action::Up));
        input.key_up(&map, "W");
        assert!(!input.is_held(Action::Up));
        assert!(!input.tick_input().up);
    }

    #[test]
    fn test_release_after_unbind() {
        let mut map = KeyMap::default();
        let mut input = InputSnapshot::new();
        input.key_down(&map, "Space");
        map.unbind("Space");
        assert!(input.key_up(&map, "Space"));
        assert!(!input.is_held(Action::Fire));
    }

    #[test]
    fn test_set_held_overrides_keys() {
        let map = KeyMap::default();
        let mut input = InputSnapshot::new();
        input.set_held(Action::Fire, true);
        assert!(input.is_held(Action::Fire));
        input.key_down(&map, "Space");
        input.set_held(Action::Fire, false);
        assert!(!input.is_held(Action::Fire));
    }

    #[test]
    fn test_edges_clear_but_holds_persist() {
        let map = KeyMap::default();
        let mut input = InputSnapshot::new();
        input.key_down(&map, "Space");
        input.key_down(&map, "Enter");
        let tick = input.tick_input();
        assert!(tick.fire);
        assert_eq!(tick.events, vec![MenuEvent::Confirm]);

        input.clear_edges();
        let tick = input.tick_input();
        assert!(tick.fire);
        assert!(tick.events.is_empty());
    }

    #[test]
    fn test_rebind() {
        let mut map = KeyMap::default();
        map.unbind("Space");
        map.bind("J", Binding::Hold(Action::Fire));
        let mut input = InputSnapshot::new();
        assert!(!input.key_down(&map, "Space"));
        assert!(input.key_down(&map, "j"));
        assert!(input.is_held(Action::Fire));
    }
}
