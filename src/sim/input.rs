//! Per-tick input snapshot and edge detection

use serde::{Deserialize, Serialize};

/// Logical key state for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Enter/leave the vehicle
    pub interact: bool,
    /// Start over after dying
    pub restart: bool,
}

/// Keys that fired on this tick (pressed now, not pressed last tick)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presses {
    pub interact: bool,
    pub restart: bool,
}

impl InputState {
    /// Compare against the previous tick's snapshot
    pub fn presses_since(&self, previous: &InputState) -> Presses {
        Presses {
            interact: self.interact && !previous.interact,
            restart: self.restart && !previous.restart,
        }
    }
}
