//! Rendering seam
//!
//! The simulation never touches a drawing surface. The driver hands each
//! renderer a snapshot of every fish after a tick, plus the events that
//! require a sprite swap.

pub mod log_renderer;

pub use log_renderer::LogRenderer;

use std::path::{Path, PathBuf};

use glam::Vec2;

use crate::sim::{AquariumState, Direction, FishEvent, Region};

/// What a renderer needs to draw one fish
#[derive(Debug, Clone, PartialEq)]
pub struct FishView {
    pub id: u32,
    /// Top-left corner in tank pixels
    pub position: Vec2,
    pub direction: Direction,
    pub region: Region,
    /// Image for the current heading
    pub sprite: PathBuf,
}

/// Snapshot of every fish, in draw order
pub fn frame(state: &AquariumState) -> Vec<FishView> {
    state
        .fish
        .iter()
        .map(|fish| FishView {
            id: fish.id,
            position: fish.agent.position(),
            direction: fish.agent.direction(),
            region: fish.agent.region(),
            sprite: fish.sprite_path(),
        })
        .collect()
}

/// A drawing surface the driver forwards simulation output to
pub trait Renderer {
    /// Background image to draw under the fish
    fn set_background(&mut self, _path: &Path) {}

    /// Pixel size of a sprite image, if the renderer can load it.
    ///
    /// Returning `None` keeps the fish's current footprint.
    fn sprite_size(&mut self, _path: &Path) -> Option<Vec2> {
        None
    }

    /// Heading or sprite-set change for one fish
    fn on_event(&mut self, _event: &FishEvent) {}

    /// Draw one frame
    fn draw(&mut self, tick: u64, fish: &[FishView]);
}
