//! Fixed-interval tick driver
//!
//! Accumulates wall-clock time, runs as many simulation ticks as fit (capped
//! per update), then forwards the result to a renderer. Input arrives between
//! updates and is consumed by the next tick.

use std::time::Duration;

use glam::Vec2;

use crate::asset_path;
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Renderer, frame};
use crate::sim::{AquariumState, FishEvent, TickInput, tick};

/// Owns the tank and a renderer, and schedules ticks
pub struct Driver<Rd: Renderer> {
    state: AquariumState,
    renderer: Rd,
    interval: Duration,
    accumulator: Duration,
    input: TickInput,
}

impl<Rd: Renderer> Driver<Rd> {
    pub fn new(state: AquariumState, renderer: Rd, interval: Duration) -> Self {
        let mut driver = Self {
            state,
            renderer,
            interval: interval.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            input: TickInput::default(),
        };
        driver.sync_footprints();
        driver
    }

    /// Background image under `assets/bg/`
    pub fn set_background(&mut self, file: &str) {
        let path = asset_path("bg").join(file);
        self.renderer.set_background(&path);
    }

    pub fn state(&self) -> &AquariumState {
        &self.state
    }

    pub fn renderer(&self) -> &Rd {
        &self.renderer
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Queue a click for the next tick
    pub fn click(&mut self, point: Vec2) {
        self.input.click = Some(point);
    }

    /// Queue a sprite set change for the next tick
    pub fn select_sprite(&mut self, sprite: &str) {
        self.input.sprite = Some(sprite.to_string());
    }

    /// Run the ticks that fit in `elapsed` and draw; returns the tick count
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.interval && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.state, &self.input);
            self.accumulator -= self.interval;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            for event in &events {
                self.apply(event);
            }
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= self.interval {
            log::warn!(
                "Driver fell behind by {:?}, dropping the backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        if substeps > 0 {
            let views = frame(&self.state);
            self.renderer.draw(self.state.time_ticks, &views);
        }
        substeps
    }

    fn apply(&mut self, event: &FishEvent) {
        match event {
            FishEvent::Turned { id, .. } | FishEvent::SpriteChanged { id, .. } => {
                self.sync_footprint(*id);
            }
        }
        self.renderer.on_event(event);
    }

    fn sync_footprints(&mut self) {
        let ids: Vec<u32> = self.state.fish.iter().map(|f| f.id).collect();
        for id in ids {
            self.sync_footprint(id);
        }
    }

    /// Match a fish's footprint to the size of its current image
    fn sync_footprint(&mut self, id: u32) {
        let Some(fish) = self.state.fish(id) else {
            return;
        };
        let path = fish.sprite_path();
        let current = fish.agent.footprint();
        if let Some(size) = self.renderer.sprite_size(&path) {
            if size != current {
                log::debug!("Fish {} footprint {:?} -> {:?}", id, current, size);
                self.state.resize_fish(id, size);
            }
        }
    }
}
