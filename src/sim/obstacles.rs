//! Static obstacle field
//!
//! Generated once per session from the session RNG. Obstacles may overlap each
//! other; they never leave the world.

use rand::Rng;
use serde::Serialize;

use super::geometry::{Rect, WorldBounds};
use crate::consts::{OBSTACLE_MAX_SIZE, OBSTACLE_MIN_SIZE};

/// Immutable set of axis-aligned obstacles
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ObstacleField {
    rects: Vec<Rect>,
}

impl ObstacleField {
    /// Scatter `count` obstacles uniformly over the world.
    ///
    /// An obstacle larger than the world is dropped, so the field may hold
    /// fewer than `count` rectangles in a very small world.
    pub fn generate<R: Rng>(count: u32, bounds: WorldBounds, rng: &mut R) -> Self {
        let rects: Vec<Rect> = (0..count)
            .filter_map(|_| {
                let w = rng.random_range(OBSTACLE_MIN_SIZE..OBSTACLE_MAX_SIZE);
                let h = rng.random_range(OBSTACLE_MIN_SIZE..OBSTACLE_MAX_SIZE);
                let x = rng.random::<f32>() * (bounds.width - w).max(0.0);
                let y = rng.random::<f32>() * (bounds.height - h).max(0.0);
                let rect = Rect::new(x, y, w, h);
                bounds.contains(&rect).then_some(rect)
            })
            .collect();

        let dropped = count as usize - rects.len();
        if dropped > 0 {
            log::warn!(
                "Dropped {dropped} of {count} obstacles that don't fit a {}x{} world",
                bounds.width,
                bounds.height
            );
        }
        Self { rects }
    }

    /// Build a field from explicit rectangles (scripted layouts, tests)
    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
