//! Simulation state and session lifecycle
//!
//! `SimulationState` owns every entity. Hosts read it through [`Snapshot`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::camera::{Camera, Minimap};
use super::geometry::{Rect, WorldBounds, overlaps_any};
use super::input::InputState;
use super::npc::{Npc, NpcView};
use super::obstacles::ObstacleField;
use super::player::Player;
use super::vehicle::Vehicle;
use crate::Settings;
use crate::consts::{NPC_SIZE, NPC_SPAWN_ATTEMPTS};

/// Whether a session is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Built but `start_session` not called yet; ticks do nothing
    Idle,
    Running,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    EnteredVehicle,
    ExitedVehicle,
    VehicleCrashed,
    PlayerDamaged { health: u32 },
    PlayerDied,
    Restarted,
}

/// Complete simulation state
#[derive(Debug)]
pub struct SimulationState {
    pub settings: Settings,
    pub phase: SessionPhase,
    pub bounds: WorldBounds,
    pub obstacles: ObstacleField,
    pub player: Player,
    pub vehicle: Vehicle,
    pub npcs: Vec<Npc>,
    pub camera: Camera,
    /// Input from the previous tick, for edge detection
    pub previous_input: InputState,
    /// Events raised by the most recent tick
    pub events: Vec<SimEvent>,
    /// Ticks processed since the session started
    pub tick_count: u64,
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Create an idle state; call [`start_session`](Self::start_session) to populate it
    pub fn new(settings: Settings) -> Self {
        let bounds = WorldBounds::new(settings.world_width(), settings.world_height());
        let viewport = Vec2::new(settings.viewport_width, settings.viewport_height);
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            phase: SessionPhase::Idle,
            bounds,
            obstacles: ObstacleField::default(),
            player: Player::default(),
            vehicle: Vehicle::default(),
            npcs: Vec::new(),
            camera: Camera::new(viewport),
            previous_input: InputState::default(),
            events: Vec::new(),
            tick_count: 0,
            rng,
        }
    }

    /// (Re)build the world and start running.
    ///
    /// The RNG is reseeded from settings, so repeated calls with the same
    /// count produce the same world.
    pub fn start_session(&mut self, npc_count: u32) {
        self.rng = Pcg32::seed_from_u64(self.settings.seed);
        self.obstacles =
            ObstacleField::generate(self.settings.obstacle_count, self.bounds, &mut self.rng);
        self.npcs = self.spawn_npcs(npc_count);

        self.player = Player::default();
        self.vehicle = Vehicle::default();
        self.previous_input = InputState::default();
        self.events.clear();
        self.tick_count = 0;
        self.camera.follow(self.tracked_position(), self.bounds);
        self.phase = SessionPhase::Running;

        log::info!(
            "Session started: seed={} obstacles={} npcs={}/{} policy={:?}",
            self.settings.seed,
            self.obstacles.len(),
            self.npcs.len(),
            npc_count,
            self.settings.npc_policy
        );
    }

    /// Start a session with the configured default NPC count
    pub fn start_default_session(&mut self) {
        self.start_session(self.settings.npc_count);
    }

    /// Place NPCs uniformly, re-sampling spots that land on an obstacle
    fn spawn_npcs(&mut self, count: u32) -> Vec<Npc> {
        let size = Vec2::splat(NPC_SIZE);
        let max = Vec2::new(
            (self.bounds.width - size.x).max(0.0),
            (self.bounds.height - size.y).max(0.0),
        );

        let mut npcs = Vec::with_capacity(count as usize);
        for i in 0..count {
            let spot = (0..NPC_SPAWN_ATTEMPTS).find_map(|_| {
                let x = self.rng.random::<f32>() * max.x;
                let y = self.rng.random::<f32>() * max.y;
                let pos = Vec2::new(x, y);
                let rect = Rect::at(pos, size);
                (!overlaps_any(&rect, self.obstacles.rects()) && self.bounds.contains(&rect))
                    .then_some(pos)
            });
            match spot {
                Some(pos) => npcs.push(Npc::new(pos, self.settings.npc_policy.build())),
                None => log::warn!("No free spot for NPC {i} after {NPC_SPAWN_ATTEMPTS} attempts"),
            }
        }
        npcs
    }

    /// Put the player and vehicle back to their starting state.
    ///
    /// Obstacles and NPCs are left as they are.
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.vehicle = Vehicle::default();
        log::info!("Player restarted");
    }

    /// Position the camera and NPCs track: the vehicle while driving
    pub fn tracked_position(&self) -> Vec2 {
        if self.player.in_car {
            self.vehicle.pos
        } else {
            self.player.pos
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick: self.tick_count,
            phase: self.phase,
            bounds: self.bounds,
            player: &self.player,
            vehicle: &self.vehicle,
            npcs: self.npcs.iter().map(NpcView::from).collect(),
            camera: self.camera,
            minimap: Minimap::for_viewport(self.camera.viewport),
            obstacles: self.obstacles.rects(),
            events: &self.events,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub phase: SessionPhase,
    pub bounds: WorldBounds,
    pub player: &'a Player,
    pub vehicle: &'a Vehicle,
    pub npcs: Vec<NpcView>,
    pub camera: Camera,
    /// Minimap layout for the current viewport
    pub minimap: Minimap,
    pub obstacles: &'a [Rect],
    pub events: &'a [SimEvent],
}
