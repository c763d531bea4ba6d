//! The swimming fish: position, heading and the bounce/redirect state machine
//!
//! A fish only changes heading when the next step would carry it out of
//! bounds, or when something outside asks it to turn (a click). On a wall
//! hit it backs off one step and picks a new heading, never the one it was
//! on, and never toward the perpendicular wall it is already hugging.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::direction::{Direction, DirectionPolicy, DirectionSet};
use super::region::{Region, XRegion, YRegion};

/// Result of attempting one forward step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The step stays in bounds; this is the new position
    Moved(Vec2),
    /// The step would leave the valid range
    Blocked,
}

/// A heading change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub from: Direction,
    pub to: Direction,
    #[serde(skip)]
    pub excluded: DirectionSet,
}

/// State after one tick, for whoever draws the fish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub position: Vec2,
    pub direction: Direction,
    pub region: Region,
    /// Set when this tick ended in a wall hit
    pub turn: Option<Turn>,
}

/// One fish in the tank
#[derive(Debug, Clone)]
pub struct Agent<R = Pcg32> {
    world: Vec2,
    footprint: Vec2,
    bounds: Bounds,
    pos: Vec2,
    /// Cached classification of `pos`, refreshed on every position change
    region: Region,
    direction: Direction,
    previous_direction: Option<Direction>,
    velocity: f32,
    policy: DirectionPolicy<R>,
}

impl<R: Rng> Agent<R> {
    /// Fish at a fixed start position (clamped into bounds)
    pub fn new(
        world: Vec2,
        footprint: Vec2,
        pos: Vec2,
        direction: Direction,
        velocity: f32,
        policy: DirectionPolicy<R>,
    ) -> Self {
        let velocity = if velocity.is_finite() {
            velocity.abs()
        } else {
            log::warn!("Velocity {} is not finite, fish will not move", velocity);
            0.0
        };
        let bounds = Bounds::from_sizes(world, footprint);
        let pos = bounds.clamp(pos);
        Self {
            world,
            footprint,
            bounds,
            pos,
            region: Region::of(pos, &bounds),
            direction,
            previous_direction: None,
            velocity,
            policy,
        }
    }

    /// Fish at a random whole-pixel position heading east or west
    pub fn spawn(world: Vec2, footprint: Vec2, velocity: f32, mut policy: DirectionPolicy<R>) -> Self {
        let bounds = Bounds::from_sizes(world, footprint);
        let rng = policy.rng();
        let pos = Vec2::new(
            rng.random_range(0..=bounds.x_max.floor() as i64) as f32,
            rng.random_range(0..=bounds.y_max.floor() as i64) as f32,
        );
        let direction = policy.random_horizontal();
        Self::new(world, footprint, pos, direction, velocity, policy)
    }

    /// Fish at a random position inside `region`, heading east or west.
    ///
    /// Falls back to a plain [`Agent::spawn`] when the cell holds no pixel.
    pub fn spawn_in(
        world: Vec2,
        footprint: Vec2,
        region: Region,
        velocity: f32,
        mut policy: DirectionPolicy<R>,
    ) -> Self {
        let bounds = Bounds::from_sizes(world, footprint);
        let point = region.random_point(&bounds, policy.rng());
        match point {
            Some(pos) => {
                let direction = policy.random_horizontal();
                Self::new(world, footprint, pos, direction, velocity, policy)
            }
            None => {
                log::warn!("Region {} is empty for bounds {:?}, spawning anywhere", region, bounds);
                Self::spawn(world, footprint, velocity, policy)
            }
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn previous_direction(&self) -> Option<Direction> {
        self.previous_direction
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn footprint(&self) -> Vec2 {
        self.footprint
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.region = Region::of(pos, &self.bounds);
    }

    /// Where one step along the current heading would land, if it stays in bounds.
    ///
    /// An agent sitting exactly on a wall and heading into it is blocked.
    pub fn try_move(&self) -> MoveOutcome {
        let next = self.pos + self.direction.offset() * self.velocity;
        let blocked = match self.direction {
            Direction::West => next.x < 0.0,
            Direction::East => next.x > self.bounds.x_max,
            Direction::North => next.y < 0.0,
            Direction::South => next.y > self.bounds.y_max,
        };
        if blocked {
            MoveOutcome::Blocked
        } else {
            MoveOutcome::Moved(next)
        }
    }

    /// Advance one tick
    pub fn step(&mut self) -> StepReport {
        let turn = match self.try_move() {
            MoveOutcome::Moved(next) => {
                self.set_position(next);
                None
            }
            MoveOutcome::Blocked => {
                self.bounce_back();
                Some(self.redirect())
            }
        };
        self.report(turn)
    }

    /// Turn without backing off first (click-to-redirect)
    pub fn request_redirect(&mut self) -> Turn {
        self.redirect()
    }

    /// Directions the next redirect may not pick
    pub fn exclusions(&self) -> DirectionSet {
        let mut exclude = DirectionSet::of(&[self.direction]);
        if self.direction.is_horizontal() {
            match self.region.y {
                YRegion::Top => exclude.insert(Direction::North),
                YRegion::Bottom => exclude.insert(Direction::South),
                YRegion::Middle => {}
            }
        } else {
            match self.region.x {
                XRegion::Left => exclude.insert(Direction::West),
                XRegion::Right => exclude.insert(Direction::East),
                XRegion::Center => {}
            }
        }
        exclude
    }

    /// Inclusive hit test against the sprite rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        let far = self.pos + self.footprint;
        (self.pos.x..=far.x).contains(&point.x) && (self.pos.y..=far.y).contains(&point.y)
    }

    /// Swap in a sprite of a different size.
    ///
    /// After an east or south turn the leading edge stays put, so the fish
    /// does not visibly jump toward the wall it just left.
    pub fn set_footprint(&mut self, footprint: Vec2) {
        let mut pos = self.pos;
        match self.previous_direction {
            Some(Direction::East) => pos.x += self.footprint.x - footprint.x,
            Some(Direction::South) => pos.y += self.footprint.y - footprint.y,
            _ => {}
        }
        self.footprint = footprint;
        self.bounds = Bounds::from_sizes(self.world, footprint);
        self.set_position(self.bounds.clamp(pos));
    }

    pub fn report(&self, turn: Option<Turn>) -> StepReport {
        StepReport {
            position: self.pos,
            direction: self.direction,
            region: self.region,
            turn,
        }
    }

    fn bounce_back(&mut self) {
        let back = self.pos - self.direction.offset() * self.velocity;
        let clamped = self.bounds.clamp(back);
        if clamped != back {
            log::debug!(
                "Bounce-back from {:?} clamped to {:?} (velocity {} exceeds span)",
                self.pos,
                clamped,
                self.velocity
            );
        }
        self.set_position(clamped);
    }

    fn redirect(&mut self) -> Turn {
        let from = self.direction;
        let excluded = self.exclusions();
        log::debug!("Excluding {:?} at {}", excluded, self.region);
        self.previous_direction = Some(from);
        self.direction = self.policy.random(excluded);
        log::debug!("Heading {} -> {}", from, self.direction);
        Turn {
            from,
            to: self.direction,
            excluded,
        }
    }
}
