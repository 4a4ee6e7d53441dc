//! Explosion footprints
//!
//! An explosion spreads from its centre through open cells the way a blast
//! wave would: going straight is cheap, turning back around an obstacle is
//! expensive, and the total spend is bounded by the radius. Cells it reaches
//! must also be in view of the centre.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::geom::Coord;
use crate::world::{CloudKind, Feature, MapOracle, Ray};

/// Largest radius the footprint map can hold.
pub const MAX_EXPLOSION_RADIUS: i32 = 9;

const MAP_SIZE: usize = (MAX_EXPLOSION_RADIUS * 2 + 1) as usize;

const FORWARD_COST: i32 = 5;
const BACKWARD_COST: i32 = 17;

const SPREAD: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// How a bolt detonates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplosionSpec {
    /// Fixed when the bolt is built so every pass sees the same blast.
    pub radius: i32,
    pub stop_at_walls: bool,
    pub stop_at_statues: bool,
    /// Leave the centre cell untouched
    pub hole_in_the_middle: bool,
    /// Cloud left behind on each affected floor cell
    pub cloud: Option<CloudKind>,
}

impl ExplosionSpec {
    pub const fn new(radius: i32) -> Self {
        Self {
            radius,
            stop_at_walls: true,
            stop_at_statues: false,
            hole_in_the_middle: false,
            cloud: None,
        }
    }

    pub const fn with_hole(mut self) -> Self {
        self.hole_in_the_middle = true;
        self
    }

    pub const fn stopping_at_statues(mut self) -> Self {
        self.stop_at_statues = true;
        self
    }

    pub const fn leaving(mut self, cloud: CloudKind) -> Self {
        self.cloud = Some(cloud);
        self
    }

    /// Noise of the blast.
    pub const fn noise(&self) -> i32 {
        10 + 5 * self.radius
    }
}

/// Footprint of one explosion, keyed by offset from the centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionMap {
    centre: Coord,
    radius: i32,
    cells: [[bool; MAP_SIZE]; MAP_SIZE],
}

impl ExplosionMap {
    fn empty(centre: Coord, radius: i32) -> Self {
        Self {
            centre,
            radius,
            cells: [[false; MAP_SIZE]; MAP_SIZE],
        }
    }

    pub fn centre(&self) -> Coord {
        self.centre
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn slot(dx: i32, dy: i32) -> Option<(usize, usize)> {
        let r = MAX_EXPLOSION_RADIUS;
        if dx.abs() > r || dy.abs() > r {
            return None;
        }
        Some(((dx + r) as usize, (dy + r) as usize))
    }

    pub fn contains_offset(&self, dx: i32, dy: i32) -> bool {
        Self::slot(dx, dy).is_some_and(|(x, y)| self.cells[x][y])
    }

    pub fn contains(&self, c: Coord) -> bool {
        let d = c - self.centre;
        self.contains_offset(d.x, d.y)
    }

    fn mark(&mut self, dx: i32, dy: i32) {
        if let Some((x, y)) = Self::slot(dx, dy) {
            self.cells[x][y] = true;
        }
    }

    fn unmark(&mut self, dx: i32, dy: i32) {
        if let Some((x, y)) = Self::slot(dx, dy) {
            self.cells[x][y] = false;
        }
    }

    pub fn len(&self) -> usize {
        self.cells.iter().flatten().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Affected cells, centre first then ring by ring. Each ring runs down
    /// its left and right sides, then along its top and bottom.
    pub fn ring_order(&self, hole_in_the_middle: bool) -> Vec<Coord> {
        let mut order = Vec::new();
        let mut push = |dx: i32, dy: i32| {
            if self.contains_offset(dx, dy) {
                order.push(self.centre.offset(dx, dy));
            }
        };
        if !hole_in_the_middle {
            push(0, 0);
        }
        for rad in 1..=self.radius {
            for ay in (1 - rad)..rad {
                push(-rad, ay);
                push(rad, ay);
            }
            for ax in -rad..=rad {
                push(ax, -rad);
                push(ax, rad);
            }
        }
        order
    }
}

/// Work out which cells an explosion at `centre` reaches.
///
/// `affects_wall` says whether the blast can break through a solid feature;
/// the centre itself is always included so blasts can start inside rock.
pub fn affected_cells<M: MapOracle + ?Sized>(
    map: &M,
    centre: Coord,
    spec: &ExplosionSpec,
    affects_wall: impl Fn(Feature) -> bool,
) -> ExplosionMap {
    let r = spec.radius.clamp(0, MAX_EXPLOSION_RADIUS);
    let mut footprint = ExplosionMap::empty(centre, r);
    let budget = 10 * r;

    let mut best = [[i32::MAX; MAP_SIZE]; MAP_SIZE];
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((0, 0, 0)));

    while let Some(Reverse((count, dx, dy))) = queue.pop() {
        let Some((sx, sy)) = ExplosionMap::slot(dx, dy) else {
            continue;
        };
        if count >= best[sx][sy] {
            continue;
        }
        if dx * dx + dy * dy > r * r + r || count > budget {
            continue;
        }
        let c = centre.offset(dx, dy);
        if !map.in_bounds(c) {
            continue;
        }
        let feature = map.feature_at(c);
        if (dx, dy) != (0, 0) && feature.is_solid() && !affects_wall(feature) {
            continue;
        }
        best[sx][sy] = count;
        footprint.mark(dx, dy);

        for (sxd, syd) in SPREAD {
            let cost = if dx * sxd < 0 || dy * syd < 0 {
                BACKWARD_COST
            } else {
                FORWARD_COST
            };
            queue.push(Reverse((count + cost, dx + sxd, dy + syd)));
        }
    }

    // Drop cells the centre has no clear line to.
    for dy in -r..=r {
        for dx in -r..=r {
            if footprint.contains_offset(dx, dy)
                && !blast_reaches(map, centre, centre.offset(dx, dy), spec)
            {
                footprint.unmark(dx, dy);
            }
        }
    }

    tracing::trace!(%centre, radius = r, cells = footprint.len(), "explosion footprint");
    footprint
}

fn blast_reaches<M: MapOracle + ?Sized>(
    map: &M,
    centre: Coord,
    cell: Coord,
    spec: &ExplosionSpec,
) -> bool {
    if cell == centre {
        return true;
    }
    Ray::line(centre, cell)
        .into_iter()
        .filter(|&c| c != cell)
        .all(|c| {
            let f = map.feature_at(c);
            if f.is_wall() {
                !spec.stop_at_walls
            } else if f.is_solid() {
                !spec.stop_at_statues
            } else {
                true
            }
        })
}
