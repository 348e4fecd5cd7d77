//! Session settings
//!
//! Everything a host may tune per session. Fixed gameplay constants live in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::PolicyKind;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for obstacle/NPC placement and random-walk steering
    pub seed: u64,

    // === Viewport / world ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// World size as a multiple of the viewport on each axis
    pub world_scale: f32,

    // === Population ===
    pub obstacle_count: u32,
    /// NPC count used when the host doesn't pass one
    pub npc_count: u32,
    /// Steering policy given to every spawned NPC
    pub npc_policy: PolicyKind,

    // === Movement ===
    /// Scale diagonal on-foot input down to unit length
    pub normalize_diagonal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            viewport_width: 800.0,
            viewport_height: 600.0,
            world_scale: 4.0,

            obstacle_count: 200,
            npc_count: 50,
            npc_policy: PolicyKind::Follow,

            normalize_diagonal: false,
        }
    }
}

impl Settings {
    /// World width in units
    pub fn world_width(&self) -> f32 {
        self.viewport_width * self.world_scale
    }

    /// World height in units
    pub fn world_height(&self) -> f32 {
        self.viewport_height * self.world_scale
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
