//! Collision detection for the player and gap obstacles
//!
//! Everything is axis-aligned boxes. The gap edges are widened by a
//! forgiveness margin so grazing a wall is not fatal.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    /// Strict overlap with the box spanning `min..max` (touching edges do not
    /// overlap). The bounds may be infinite.
    #[inline]
    pub fn overlaps_bounds(&self, min: Vec2, max: Vec2) -> bool {
        self.min().cmplt(max).all() && self.max().cmpgt(min).all()
    }

    /// Strict overlap on both axes
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_bounds(other.min(), other.max())
    }
}

/// Solid part of an obstacle above the gap, shrunk by `margin`
fn upper_hitbox(obstacle: &Obstacle, margin: f32) -> (Vec2, Vec2) {
    (
        Vec2::new(obstacle.x, f32::NEG_INFINITY),
        Vec2::new(obstacle.x + obstacle.width, obstacle.gap_y - margin),
    )
}

/// Solid part of an obstacle below the gap, shrunk by `margin`
fn lower_hitbox(obstacle: &Obstacle, margin: f32) -> (Vec2, Vec2) {
    (
        Vec2::new(obstacle.x, obstacle.gap_bottom() + margin),
        Vec2::new(obstacle.x + obstacle.width, f32::INFINITY),
    )
}

/// Does the player hit the solid part of this obstacle?
///
/// Below the gap: `y + height > gap_bottom + margin`.
/// Above the gap: `y < gap_y - margin`.
/// Both also need strict overlap with the obstacle's columns on x.
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, margin: f32) -> bool {
    let player_rect = player.rect();
    let (upper_min, upper_max) = upper_hitbox(obstacle, margin);
    let (lower_min, lower_max) = lower_hitbox(obstacle, margin);
    player_rect.overlaps_bounds(upper_min, upper_max)
        || player_rect.overlaps_bounds(lower_min, lower_max)
}

/// True if the player collides with any active obstacle
pub fn check(player: &Player, obstacles: &[Obstacle], margin: f32) -> bool {
    obstacles
        .iter()
        .filter(|o| !o.marked_for_removal)
        .any(|o| player_hits_obstacle(player, o, margin))
}
