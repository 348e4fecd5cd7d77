//! The player on foot: movement, health, and NPC contact damage

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Rect, WorldBounds, distance, overlaps_any, rects_overlap};
use super::input::InputState;
use crate::consts::*;

/// Result of checking NPC contact for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No hit landed (no overlap, or cooldown still running)
    None,
    /// Took damage and survived
    Damaged { health: u32 },
    /// Took damage and health hit zero
    Died,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick on each axis
    pub speed: f32,
    /// Possessing the vehicle
    pub in_car: bool,
    /// 0..=PLAYER_MAX_HEALTH
    pub health: u32,
    pub alive: bool,
    /// Ticks until the next contact hit can land
    pub contact_cooldown: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_SPEED,
            in_car: false,
            health: PLAYER_MAX_HEALTH,
            alive: true,
            contact_cooldown: 0,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    /// Per-tick displacement requested by the directional keys.
    ///
    /// Axes are independent, so a diagonal covers `speed` on both axes unless
    /// `normalize_diagonal` is set.
    pub fn walk_delta(&self, input: &InputState, normalize_diagonal: bool) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if input.up {
            delta.y -= self.speed;
        }
        if input.down {
            delta.y += self.speed;
        }
        if input.left {
            delta.x -= self.speed;
        }
        if input.right {
            delta.x += self.speed;
        }

        if normalize_diagonal && delta.x != 0.0 && delta.y != 0.0 {
            delta = delta.normalize() * self.speed;
        }
        delta
    }

    /// Walk one tick. The whole step is dropped if it would overlap an
    /// obstacle; otherwise it commits and is clamped to the world.
    pub fn walk(
        &mut self,
        input: &InputState,
        obstacles: &[Rect],
        bounds: WorldBounds,
        normalize_diagonal: bool,
    ) -> bool {
        let candidate = Rect::at(self.pos + self.walk_delta(input, normalize_diagonal), self.size);
        let moved = !overlaps_any(&candidate, obstacles);
        if moved {
            self.pos = candidate.pos;
        }
        self.pos = bounds.clamp(self.pos, self.size);
        moved
    }

    /// Close enough to climb into a vehicle at `vehicle_pos`
    pub fn can_reach(&self, vehicle_pos: Vec2) -> bool {
        distance(self.pos, vehicle_pos) < INTERACT_DISTANCE
    }

    pub fn enter_vehicle(&mut self, vehicle_pos: Vec2) {
        self.in_car = true;
        self.pos = vehicle_pos;
    }

    /// Step out beside the vehicle, kept inside the world
    pub fn exit_vehicle(&mut self, vehicle_pos: Vec2, bounds: WorldBounds) {
        self.in_car = false;
        self.pos = bounds.clamp(vehicle_pos + Vec2::new(EXIT_OFFSET_X, 0.0), self.size);
    }

    /// Apply NPC contact damage for this tick.
    ///
    /// Only the cooldown gates damage; callers decide whether contact applies
    /// at all (on foot and alive).
    pub fn resolve_contact(&mut self, npcs: impl IntoIterator<Item = Rect>) -> Contact {
        if self.contact_cooldown > 0 {
            return Contact::None;
        }
        let me = self.rect();
        if !npcs.into_iter().any(|npc| rects_overlap(&me, &npc)) {
            return Contact::None;
        }

        self.health = self.health.saturating_sub(CONTACT_DAMAGE);
        self.contact_cooldown = CONTACT_COOLDOWN_TICKS;
        if self.health == 0 {
            self.alive = false;
            Contact::Died
        } else {
            Contact::Damaged {
                health: self.health,
            }
        }
    }

    /// Count the contact cooldown down by one tick
    pub fn cool_down(&mut self) {
        self.contact_cooldown = self.contact_cooldown.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldBounds {
        WorldBounds::new(3200.0, 2400.0)
    }

    #[test]
    fn test_walk_right_five_ticks() {
        let mut player = Player::default();
        let input = InputState {
            right: true,
            ..Default::default()
        };
        for _ in 0..5 {
            assert!(player.walk(&input, &[], world(), false));
        }
        assert_eq!(player.pos, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_diagonal_is_full_speed_per_axis() {
        let player = Player::default();
        let input = InputState {
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(player.walk_delta(&input, false), Vec2::new(2.0, 2.0));

        let normalized = player.walk_delta(&input, true);
        assert!((normalized.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_blocked_walk_drops_both_axes() {
        let mut player = Player::default();
        // Blocks only the x step; the y step alone would be free
        let obstacles = [Rect::new(121.0, 90.0, 30.0, 30.0)];
        let input = InputState {
            right: true,
            up: true,
            ..Default::default()
        };
        assert!(!player.walk(&input, &obstacles, world(), false));
        assert_eq!(player.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_walk_is_clamped_to_world() {
        let mut player = Player {
            pos: Vec2::new(1.0, 1.0),
            ..Default::default()
        };
        let input = InputState {
            up: true,
            left: true,
            ..Default::default()
        };
        player.walk(&input, &[], world(), false);
        assert_eq!(player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_reach_is_strict() {
        let player = Player::default();
        assert!(player.can_reach(Vec2::new(120.0, 120.0)));
        assert!(!player.can_reach(Vec2::new(130.0, 100.0)));
    }

    #[test]
    fn test_exit_places_player_beside_vehicle() {
        let mut player = Player::default();
        player.enter_vehicle(Vec2::new(200.0, 200.0));
        assert!(player.in_car);
        assert_eq!(player.pos, Vec2::new(200.0, 200.0));

        player.exit_vehicle(Vec2::new(3190.0, 200.0), world());
        assert!(!player.in_car);
        assert_eq!(player.pos, Vec2::new(3180.0, 200.0));
    }

    #[test]
    fn test_contact_damage_respects_cooldown() {
        let mut player = Player::default();
        let npc = [Rect::new(110.0, 110.0, 20.0, 20.0)];

        assert_eq!(player.resolve_contact(npc), Contact::Damaged { health: 90 });
        assert_eq!(player.contact_cooldown, CONTACT_COOLDOWN_TICKS);

        for _ in 0..CONTACT_COOLDOWN_TICKS {
            assert_eq!(player.resolve_contact(npc), Contact::None);
            player.cool_down();
        }
        assert_eq!(player.contact_cooldown, 0);
        assert_eq!(player.resolve_contact(npc), Contact::Damaged { health: 80 });
    }

    #[test]
    fn test_lethal_contact_kills() {
        let mut player = Player {
            health: 5,
            ..Default::default()
        };
        let npc = [Rect::new(100.0, 100.0, 20.0, 20.0)];
        assert_eq!(player.resolve_contact(npc), Contact::Died);
        assert_eq!(player.health, 0);
        assert!(!player.alive);
    }

    #[test]
    fn test_no_overlap_no_damage() {
        let mut player = Player::default();
        let npc = [Rect::new(120.0, 100.0, 20.0, 20.0)];
        assert_eq!(player.resolve_contact(npc), Contact::None);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert_eq!(player.contact_cooldown, 0);
    }
}
