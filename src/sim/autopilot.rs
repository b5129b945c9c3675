//! Demo-mode controller that flies the craft on its own
//!
//! Looks only at the published [`RenderState`], the same view an input
//! layer has, and decides whether to boost this frame.

use super::state::{Obstacle, RenderState};

/// Pixels above the lower bar at which the autopilot flaps
const FLAP_MARGIN: f32 = 12.0;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Impulse passed to `boost`
    pub impulse: f32,
    screen_height: f32,
}

impl Autopilot {
    pub fn new(impulse: f32, screen_height: f32) -> Self {
        Self {
            impulse,
            screen_height,
        }
    }

    /// Next obstacle the craft still has to clear
    fn target<'a>(&self, frame: &'a RenderState) -> Option<&'a Obstacle> {
        frame
            .obstacles
            .iter()
            .find(|o| o.right_edge(frame.obstacle_width) >= frame.craft_x)
    }

    /// Boost when falling and about to drop below the target gap
    pub fn should_boost(&self, frame: &RenderState) -> bool {
        if frame.craft.velocity < 0.0 {
            return false;
        }
        let bottom = frame.craft.y + frame.craft_height;
        let floor = match self.target(frame) {
            Some(o) => o.gap_bottom(),
            None => self.screen_height * 0.66,
        };
        bottom > floor - FLAP_MARGIN
    }
}
