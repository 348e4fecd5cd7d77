//! Vehicle kinematics
//!
//! Scalar speed along a heading. Collision uses circumscribed circles for both
//! the vehicle and each obstacle, which is coarse but cheap.

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Rect, WorldBounds, circumradius, distance};
use super::input::InputState;
use crate::consts::*;
use crate::heading_vector;

/// Outcome of one driving tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Moved,
    /// Hit an obstacle; position kept and speed zeroed
    Crashed,
}

/// The drivable vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    /// Anchor point: center for collision, top-left for world clamping
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed, in [-max_speed / 2, max_speed]
    pub speed: f32,
    /// Heading in radians, unbounded
    pub angle: f32,
    pub max_speed: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(VEHICLE_START_X, VEHICLE_START_Y),
            size: Vec2::new(VEHICLE_WIDTH, VEHICLE_HEIGHT),
            speed: 0.0,
            angle: 0.0,
            max_speed: VEHICLE_MAX_SPEED,
        }
    }
}

impl Vehicle {
    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    /// Collision radius, derived from the current size
    pub fn radius(&self) -> f32 {
        circumradius(self.size)
    }

    pub fn min_speed(&self) -> f32 {
        -self.max_speed / 2.0
    }

    /// Update speed and heading from throttle/steering keys
    pub fn steer(&mut self, input: &InputState) {
        if input.up {
            self.speed = (self.speed + VEHICLE_ACCELERATION).min(self.max_speed);
        } else if input.down {
            self.speed = (self.speed - VEHICLE_ACCELERATION).max(self.min_speed());
        } else {
            self.speed *= VEHICLE_FRICTION;
        }

        if input.left {
            self.angle -= VEHICLE_TURN_RATE;
        }
        if input.right {
            self.angle += VEHICLE_TURN_RATE;
        }
    }

    /// True if the vehicle centred at `pos` would hit `obs`
    fn collides_at(&self, pos: Vec2, obs: &Rect) -> bool {
        distance(pos, obs.center()) < self.radius() + obs.circumradius()
    }

    /// Steer, then advance along the heading
    pub fn drive(&mut self, input: &InputState, obstacles: &[Rect], bounds: WorldBounds) -> Drive {
        self.steer(input);

        let candidate = self.pos + heading_vector(self.angle) * self.speed;
        if obstacles.iter().any(|obs| self.collides_at(candidate, obs)) {
            self.speed = 0.0;
            return Drive::Crashed;
        }

        self.pos = bounds.clamp(candidate, self.size);
        Drive::Moved
    }
}
