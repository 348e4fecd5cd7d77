//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per `tick`, no clocks
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod geometry;
pub mod input;
pub mod npc;
pub mod obstacles;
pub mod player;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use camera::{Camera, Minimap};
pub use geometry::{Rect, WorldBounds, distance, rects_overlap};
pub use input::InputState;
pub use npc::{Environment, FollowTarget, Npc, NpcView, PolicyKind, RandomWalk, SteeringPolicy};
pub use obstacles::ObstacleField;
pub use player::{Contact, Player};
pub use state::{SessionPhase, SimEvent, SimulationState, Snapshot};
pub use tick::tick;
pub use vehicle::{Drive, Vehicle};
