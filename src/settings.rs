//! Tank settings
//!
//! Stored as JSON. Missing fields take their defaults, so a settings file
//! only needs the values it wants to change.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Tank ===
    /// Tank width in pixels
    pub world_width: f32,
    /// Tank height in pixels
    pub world_height: f32,
    /// Background image file (under `assets/bg/`), cosmetic only
    pub background: Option<String>,

    // === Fish ===
    /// Number of independent fish
    pub fish_count: u32,
    /// Sprite set name (folder under `assets/fish/`)
    pub sprite_name: String,
    /// Sprite width, until the renderer reports a real image size
    pub fish_width: f32,
    /// Sprite height, until the renderer reports a real image size
    pub fish_height: f32,
    /// Pixels moved per tick
    pub velocity: f32,

    // === Timing ===
    /// Milliseconds between ticks
    pub update_interval_ms: u64,
    /// Fixed seed; a clock-derived one is used when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks; run forever when absent
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            background: None,

            fish_count: 1,
            sprite_name: DEFAULT_SPRITE.to_string(),
            fish_width: FISH_WIDTH,
            fish_height: FISH_HEIGHT,
            velocity: FISH_VELOCITY,

            update_interval_ms: UPDATE_INTERVAL_MS,
            seed: None,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.world_width.is_finite() && self.world_width > 0.0)
            || !(self.world_height.is_finite() && self.world_height > 0.0)
        {
            log::warn!(
                "Tank size {}x{} is invalid, using {}x{}",
                self.world_width,
                self.world_height,
                defaults.world_width,
                defaults.world_height
            );
            self.world_width = defaults.world_width;
            self.world_height = defaults.world_height;
        }

        if !(self.fish_width.is_finite() && self.fish_width >= 0.0)
            || !(self.fish_height.is_finite() && self.fish_height >= 0.0)
        {
            log::warn!("Fish size {}x{} is invalid, using 0x0", self.fish_width, self.fish_height);
            self.fish_width = 0.0;
            self.fish_height = 0.0;
        }
        if self.fish_width > self.world_width || self.fish_height > self.world_height {
            log::warn!(
                "Fish {}x{} is larger than the tank {}x{}, it will be pinned",
                self.fish_width,
                self.fish_height,
                self.world_width,
                self.world_height
            );
        }

        if !(self.velocity.is_finite() && self.velocity > 0.0) {
            log::warn!("Velocity {} is invalid, using {}", self.velocity, defaults.velocity);
            self.velocity = defaults.velocity;
        }

        if self.update_interval_ms == 0 {
            log::warn!("Update interval of 0ms, using {}ms", defaults.update_interval_ms);
            self.update_interval_ms = defaults.update_interval_ms;
        }

        if self.sprite_name.is_empty() {
            self.sprite_name = defaults.sprite_name;
        }

        self
    }

    #[inline]
    pub fn world(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    #[inline]
    pub fn footprint(&self) -> Vec2 {
        Vec2::new(self.fish_width, self.fish_height)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}
