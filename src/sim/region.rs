//! Coarse 3x3 partition of the tank
//!
//! Each axis of the valid coordinate range `[0, max]` is split into thirds.
//! At a third-mark the lower bucket wins: `x == max / 3` is LEFT and
//! `x == 2 * max / 3` is CENTER.

use std::fmt;
use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// Horizontal third of the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XRegion {
    Left,
    Center,
    Right,
}

/// Vertical third of the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YRegion {
    Top,
    Middle,
    Bottom,
}

/// Which third `value` falls in: 0, 1 or 2
#[inline]
fn third(value: f32, max: f32) -> u8 {
    if value <= max / 3.0 {
        0
    } else if value <= max * 2.0 / 3.0 {
        1
    } else {
        2
    }
}

/// Whole-pixel coordinates that classify into third `index` of `[0, max]`
fn third_pixels(index: u8, max: f32) -> Option<RangeInclusive<i64>> {
    let first = (max / 3.0).floor() as i64;
    let second = (max * 2.0 / 3.0).floor() as i64;
    let (lo, hi) = match index {
        0 => (0, first),
        1 => (first + 1, second),
        _ => (second + 1, max.floor() as i64),
    };
    (lo <= hi).then_some(lo..=hi)
}

impl XRegion {
    pub const ALL: [XRegion; 3] = [XRegion::Left, XRegion::Center, XRegion::Right];

    pub fn classify(x: f32, x_max: f32) -> Self {
        Self::ALL[third(x, x_max) as usize]
    }

    fn index(self) -> u8 {
        match self {
            XRegion::Left => 0,
            XRegion::Center => 1,
            XRegion::Right => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            XRegion::Left => "left",
            XRegion::Center => "center",
            XRegion::Right => "right",
        }
    }
}

impl YRegion {
    pub const ALL: [YRegion; 3] = [YRegion::Top, YRegion::Middle, YRegion::Bottom];

    pub fn classify(y: f32, y_max: f32) -> Self {
        Self::ALL[third(y, y_max) as usize]
    }

    fn index(self) -> u8 {
        match self {
            YRegion::Top => 0,
            YRegion::Middle => 1,
            YRegion::Bottom => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YRegion::Top => "top",
            YRegion::Middle => "middle",
            YRegion::Bottom => "bottom",
        }
    }
}

impl fmt::Display for XRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for YRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: XRegion,
    pub y: YRegion,
}

impl Region {
    pub const fn new(x: XRegion, y: YRegion) -> Self {
        Self { x, y }
    }

    /// Classify a top-left position against its bounds.
    ///
    /// Pure: identical inputs always give the identical cell.
    pub fn classify(x: f32, x_max: f32, y: f32, y_max: f32) -> Self {
        Self {
            x: XRegion::classify(x, x_max),
            y: YRegion::classify(y, y_max),
        }
    }

    #[inline]
    pub fn of(pos: Vec2, bounds: &Bounds) -> Self {
        Self::classify(pos.x, bounds.x_max, pos.y, bounds.y_max)
    }

    /// All nine cells, row by row from the top-left
    pub fn all() -> impl Iterator<Item = Region> {
        YRegion::ALL
            .into_iter()
            .flat_map(|y| XRegion::ALL.into_iter().map(move |x| Region::new(x, y)))
    }

    /// Uniformly random cell
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: XRegion::ALL[rng.random_range(0..3usize)],
            y: YRegion::ALL[rng.random_range(0..3usize)],
        }
    }

    /// Random whole-pixel position that classifies into this cell.
    ///
    /// Returns `None` when the bounds are too small for the cell to contain
    /// any whole pixel (e.g. CENTER of a span of 1).
    pub fn random_point<R: Rng>(&self, bounds: &Bounds, rng: &mut R) -> Option<Vec2> {
        let xs = third_pixels(self.x.index(), bounds.x_max)?;
        let ys = third_pixels(self.y.index(), bounds.y_max)?;
        Some(Vec2::new(
            rng.random_range(xs) as f32,
            rng.random_range(ys) as f32,
        ))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.y, self.x)
    }
}
