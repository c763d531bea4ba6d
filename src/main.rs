//! Aquarium entry point
//!
//! Headless native runner: loads settings, stocks the tank and drives it on
//! a fixed interval, logging what a windowed renderer would draw.
//!
//! Settings path: first argument, else `AQUARIUM_SETTINGS`, else defaults.

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use aquarium::renderer::LogRenderer;
use aquarium::sim::AquariumState;
use aquarium::{Driver, Settings};

fn settings_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("AQUARIUM_SETTINGS"))
        .map(PathBuf::from)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Aquarium starting...");

    let settings = match settings_path() {
        Some(path) => Settings::load(&path),
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let state = AquariumState::from_settings(&settings, seed);
    let mut driver = Driver::new(state, LogRenderer::new(), settings.interval());
    if let Some(background) = &settings.background {
        driver.set_background(background);
    }

    log::info!(
        "Swimming every {}ms{}",
        settings.update_interval_ms,
        match settings.max_ticks {
            Some(n) => format!(" for {} ticks", n),
            None => String::new(),
        }
    );

    let mut last = Instant::now();
    loop {
        std::thread::sleep(driver.interval());
        let now = Instant::now();
        driver.update(now - last);
        last = now;

        if let Some(max) = settings.max_ticks {
            if driver.state().time_ticks >= max {
                break;
            }
        }
    }

    log::info!(
        "Done after {} ticks, {} turns",
        driver.state().time_ticks,
        driver.renderer().turns()
    );
}
