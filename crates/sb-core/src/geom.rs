//! Grid coordinates

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A cell on the level grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance, the number of king moves between two cells.
    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Squared Euclidean distance.
    pub fn distance_sq(self, other: Coord) -> i32 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.distance(other) <= 1
    }

    /// The eight neighbours, clockwise from north-west.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        const OFFSETS: [(i32, i32); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
        ];
        OFFSETS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Unit step toward `other` on each axis.
    pub fn step_toward(self, other: Coord) -> Coord {
        let d = other - self;
        Coord::new(d.x.signum(), d.y.signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
