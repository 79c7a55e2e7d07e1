//! Platform abstraction layer
//!
//! Adapters between the host environment and the simulation:
//! - Time (frame deltas)
//! - Input (key states and edge events mapped to game actions)

pub mod input;
pub mod time;

pub use input::{Action, InputSnapshot, KeyMap, MenuEvent};
pub use time::{Clock, ManualClock, SystemClock, sanitize_dt};
