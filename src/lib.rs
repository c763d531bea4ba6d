//! Aquarium - a fish swimming around a fixed tank
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bounds, regions, headings, the fish state machine)
//! - `renderer`: Drawing seam and the log-backed renderer
//! - `driver`: Fixed-interval tick scheduling
//! - `settings`: Tank configuration

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use settings::Settings;

use std::path::PathBuf;

/// Tank configuration defaults
pub mod consts {
    /// Tank dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Default sprite footprint (used until the renderer reports real image sizes)
    pub const FISH_WIDTH: f32 = 100.0;
    pub const FISH_HEIGHT: f32 = 60.0;

    /// Pixels per tick
    pub const FISH_VELOCITY: f32 = 5.0;
    /// Tick interval in milliseconds
    pub const UPDATE_INTERVAL_MS: u64 = 100;
    /// Maximum ticks per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Root directory for images
    pub const ASSET_DIR: &str = "assets";
    pub const DEFAULT_SPRITE: &str = "blue";
}

/// Path of `name` under the asset root
pub fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(consts::ASSET_DIR).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        let expected: PathBuf = ["assets", "sea.png"].iter().collect();
        assert_eq!(asset_path("sea.png"), expected);
    }
}
