//! Sprawl Drive - A top-down city sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, NPC steering, damage, camera)
//! - `settings`: Session configuration loaded from JSON
//! - `platform`: Browser host bindings

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Units per tick on each axis
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;

    /// Health lost per NPC contact
    pub const CONTACT_DAMAGE: u32 = 10;
    /// Ticks between two contact hits
    pub const CONTACT_COOLDOWN_TICKS: u32 = 60;

    /// Vehicle defaults
    pub const VEHICLE_START_X: f32 = 200.0;
    pub const VEHICLE_START_Y: f32 = 200.0;
    pub const VEHICLE_WIDTH: f32 = 40.0;
    pub const VEHICLE_HEIGHT: f32 = 20.0;
    pub const VEHICLE_MAX_SPEED: f32 = 4.0;
    /// Throttle/brake change per tick
    pub const VEHICLE_ACCELERATION: f32 = 0.1;
    /// Speed multiplier per tick when coasting
    pub const VEHICLE_FRICTION: f32 = 0.95;
    /// Steering change per tick (radians)
    pub const VEHICLE_TURN_RATE: f32 = 0.05;

    /// Player must be closer than this to the vehicle to get in
    pub const INTERACT_DISTANCE: f32 = 30.0;
    /// Horizontal offset applied to the player when leaving the vehicle
    pub const EXIT_OFFSET_X: f32 = 30.0;

    /// NPC defaults
    pub const NPC_SIZE: f32 = 20.0;
    pub const NPC_SPEED: f32 = 1.0;
    /// Placement attempts before an NPC spawn is abandoned
    pub const NPC_SPAWN_ATTEMPTS: u32 = 64;

    /// Obstacle side length range, [min, max)
    pub const OBSTACLE_MIN_SIZE: f32 = 30.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 80.0;

    /// Minimap layout (screen space)
    pub const MINIMAP_SIZE: f32 = 150.0;
    pub const MINIMAP_PADDING: f32 = 10.0;
    pub const MINIMAP_TOP: f32 = 10.0;
}

/// Unit vector pointing along `angle` (radians, 0 = +x, y grows downward)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
