//! Viewport camera and minimap projection
//!
//! The camera is recomputed every tick from whatever the player possesses;
//! nothing else writes to it.

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Rect, WorldBounds};
use crate::consts::{MINIMAP_PADDING, MINIMAP_SIZE, MINIMAP_TOP};

/// Top-left of the visible world window plus its size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub pos: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            viewport,
        }
    }

    /// Centre the view on `target`, kept inside the world
    pub fn follow(&mut self, target: Vec2, bounds: WorldBounds) {
        self.pos = bounds.clamp(target - self.viewport / 2.0, self.viewport);
    }

    /// World to screen coordinates
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }

    /// Culling test; touching the viewport edge counts as visible
    pub fn is_visible(&self, rect: &Rect) -> bool {
        !(rect.right() < self.pos.x
            || rect.pos.x > self.pos.x + self.viewport.x
            || rect.bottom() < self.pos.y
            || rect.pos.y > self.pos.y + self.viewport.y)
    }
}

/// Fixed-size minimap in the top-right corner of the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Minimap {
    pub origin: Vec2,
    pub size: Vec2,
    /// Minimap units per world unit
    pub scale: Vec2,
}

impl Minimap {
    /// Lay out the minimap for a viewport
    pub fn for_viewport(viewport: Vec2) -> Self {
        let size = Vec2::splat(MINIMAP_SIZE);
        Self {
            origin: Vec2::new(viewport.x - size.x - MINIMAP_PADDING, MINIMAP_TOP),
            size,
            scale: size / viewport,
        }
    }

    /// Map a world point seen by `camera` onto the minimap
    pub fn project(&self, world: Vec2, camera: &Camera) -> Vec2 {
        self.origin + camera.to_screen(world) * self.scale
    }
}
