//! Valid coordinate range for a fish inside the tank
//!
//! Positions are top-left corners, so the usable range on each axis is the
//! world extent minus the sprite extent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maximum top-left coordinate a sprite of a given footprint may occupy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_max: f32,
    pub y_max: f32,
}

impl Bounds {
    /// Bounds for a `agent_width` x `agent_height` sprite in a
    /// `world_width` x `world_height` tank.
    ///
    /// A sprite larger than the world gets a zero span on that axis instead
    /// of a negative one.
    pub fn compute(world_width: f32, world_height: f32, agent_width: f32, agent_height: f32) -> Self {
        Self {
            x_max: (world_width - agent_width).max(0.0),
            y_max: (world_height - agent_height).max(0.0),
        }
    }

    /// Same as [`Bounds::compute`] with sizes packed as vectors
    #[inline]
    pub fn from_sizes(world: Vec2, footprint: Vec2) -> Self {
        Self::compute(world.x, world.y, footprint.x, footprint.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_max, self.y_max)
    }

    /// True if `pos` lies in `[0, x_max] x [0, y_max]`
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.x_max).contains(&pos.x) && (0.0..=self.y_max).contains(&pos.y)
    }

    /// Pull `pos` back into the valid range
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.max())
    }
}
