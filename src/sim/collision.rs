//! Collision detection between the craft, the screen bounds and obstacles
//!
//! Everything is axis-aligned. An obstacle is solid everywhere in its
//! column except the gap, so the craft hits it when their horizontal
//! ranges intersect and the craft pokes above or below the gap.

use glam::Vec2;

use super::state::{Craft, HitCause, Obstacle};
use crate::tuning::Tuning;

/// Axis-aligned box, `min` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap of the horizontal ranges (touching edges miss)
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }
}

/// Bounding box of the craft at its current height
pub fn craft_box(craft: &Craft, tuning: &Tuning) -> Aabb {
    Aabb::new(
        Vec2::new(tuning.craft_x, craft.y),
        Vec2::new(tuning.craft_width, tuning.craft_height),
    )
}

/// Craft has left the playfield through the top or bottom
pub fn out_of_bounds(craft: &Craft, tuning: &Tuning) -> bool {
    craft.y < 0.0 || craft.y > tuning.screen_height - tuning.craft_height
}

/// Craft box intersects one of the obstacle's two bars
pub fn hits_obstacle(craft: &Aabb, obstacle: &Obstacle, obstacle_width: f32) -> bool {
    craft.overlaps_x(obstacle.x, obstacle.right_edge(obstacle_width))
        && (craft.min.y < obstacle.gap_top || craft.max.y > obstacle.gap_bottom())
}

/// Full collision test for one tick, bounds first
pub fn detect(craft: &Craft, obstacles: &[Obstacle], tuning: &Tuning) -> Option<HitCause> {
    if out_of_bounds(craft, tuning) {
        return Some(HitCause::Bounds);
    }
    let bbox = craft_box(craft, tuning);
    obstacles
        .iter()
        .any(|o| hits_obstacle(&bbox, o, tuning.obstacle_width))
        .then_some(HitCause::Obstacle)
}
