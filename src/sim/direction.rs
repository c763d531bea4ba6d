//! Travel directions and the seeded random picker

use std::fmt;

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Cardinal direction of travel (screen coordinates, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step along this direction
    #[inline]
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::North => Vec2::NEG_Y,
            Direction::South => Vec2::Y,
            Direction::East => Vec2::X,
            Direction::West => Vec2::NEG_X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 1 << 1,
            Direction::East => 1 << 2,
            Direction::West => 1 << 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small set of directions, used as the exclusion list when redirecting
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    pub fn of(directions: &[Direction]) -> Self {
        let mut set = Self::EMPTY;
        for &d in directions {
            set.insert(d);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in `Direction::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// Uniform direction picker over an injected RNG
#[derive(Debug, Clone)]
pub struct DirectionPolicy<R = Pcg32> {
    rng: R,
}

impl DirectionPolicy<Pcg32> {
    /// Policy backed by a PCG stream seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> DirectionPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform pick from the directions not in `exclude`.
    ///
    /// If `exclude` covers every direction the pick falls back to all four.
    pub fn random(&mut self, exclude: DirectionSet) -> Direction {
        let mut candidates = [Direction::North; 4];
        let mut n = 0;
        for d in Direction::ALL {
            if !exclude.contains(d) {
                candidates[n] = d;
                n += 1;
            }
        }
        if n == 0 {
            log::warn!("All directions excluded, picking from all four");
            return Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        }
        candidates[self.rng.random_range(0..n)]
    }

    /// East or west, evenly
    pub fn random_horizontal(&mut self) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::East
        } else {
            Direction::West
        }
    }

    /// North or south, evenly
    pub fn random_vertical(&mut self) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::North
        } else {
            Direction::South
        }
    }

    /// Access to the underlying stream for other draws (spawn points, sprite variants)
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
}
