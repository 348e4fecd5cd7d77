//! NPC actors and their steering policies
//!
//! An NPC asks its policy for a direction each tick and either takes the whole
//! step or stays put. There is no sliding along walls.

use std::fmt;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, WorldBounds, overlaps_any};
use crate::consts::{NPC_SIZE, NPC_SPEED};

/// What a policy may look at when deciding
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    /// Position of the possessed entity (player on foot, or the vehicle)
    pub tracked: Vec2,
    pub obstacles: &'a [Rect],
    pub bounds: WorldBounds,
}

/// Decides which way an NPC wants to go.
///
/// Implementations return a unit vector, or `Vec2::ZERO` to stand still.
pub trait SteeringPolicy: fmt::Debug {
    /// Short identifier exposed in snapshots
    fn name(&self) -> &'static str;

    fn decide(&self, npc: &Npc, env: &Environment<'_>, rng: &mut Pcg32) -> Vec2;
}

/// Wander in a fresh random direction every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk;

impl SteeringPolicy for RandomWalk {
    fn name(&self) -> &'static str {
        "random_walk"
    }

    fn decide(&self, _npc: &Npc, _env: &Environment<'_>, rng: &mut Pcg32) -> Vec2 {
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        crate::heading_vector(theta)
    }
}

/// Head straight for the tracked position
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowTarget;

impl SteeringPolicy for FollowTarget {
    fn name(&self) -> &'static str {
        "follow"
    }

    fn decide(&self, npc: &Npc, env: &Environment<'_>, _rng: &mut Pcg32) -> Vec2 {
        let delta = env.tracked - npc.pos;
        let dist = delta.x.hypot(delta.y);
        if dist == 0.0 {
            return Vec2::ZERO;
        }
        delta / dist
    }
}

/// Built-in policies selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    RandomWalk,
    #[default]
    Follow,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn SteeringPolicy> {
        match self {
            PolicyKind::RandomWalk => Box::new(RandomWalk),
            PolicyKind::Follow => Box::new(FollowTarget),
        }
    }
}

/// An autonomous actor
#[derive(Debug)]
pub struct Npc {
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick
    pub speed: f32,
    policy: Box<dyn SteeringPolicy>,
}

impl Npc {
    pub fn new(pos: Vec2, policy: Box<dyn SteeringPolicy>) -> Self {
        Self {
            pos,
            size: Vec2::splat(NPC_SIZE),
            speed: NPC_SPEED,
            policy,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    pub fn policy(&self) -> &dyn SteeringPolicy {
        self.policy.as_ref()
    }

    /// Take one step. Returns false if the step was rejected.
    pub fn update(&mut self, env: &Environment<'_>, rng: &mut Pcg32) -> bool {
        let dir = self.policy.decide(self, env, rng);
        let candidate = Rect::at(self.pos + dir * self.speed, self.size);

        if overlaps_any(&candidate, env.obstacles) || !env.bounds.contains(&candidate) {
            return false;
        }
        self.pos = candidate.pos;
        true
    }
}

/// Serializable view of an NPC for snapshots
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NpcView {
    pub pos: Vec2,
    pub size: Vec2,
    pub policy: &'static str,
}

impl From<&Npc> for NpcView {
    fn from(npc: &Npc) -> Self {
        Self {
            pos: npc.pos,
            size: npc.size,
            policy: npc.policy().name(),
        }
    }
}
