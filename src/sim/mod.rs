//! Deterministic simulation module
//!
//! All swimming logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (by fish ID)
//! - No rendering or platform dependencies

pub mod agent;
pub mod bounds;
pub mod direction;
pub mod region;
pub mod sprite;
pub mod state;
pub mod tick;

pub use agent::{Agent, MoveOutcome, StepReport, Turn};
pub use bounds::Bounds;
pub use direction::{Direction, DirectionPolicy, DirectionSet};
pub use region::{Region, XRegion, YRegion};
pub use state::{AquariumState, Fish, RngState};
pub use tick::{FishEvent, TickInput, tick};
