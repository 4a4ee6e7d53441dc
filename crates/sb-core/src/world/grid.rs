//! Level terrain and the map oracle

use serde::{Deserialize, Serialize};

use super::feature::Feature;
use super::ray::Ray;
use crate::geom::Coord;

/// How translucent solids are treated by line of sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LosMode {
    /// Opaque features block.
    #[default]
    Normal,
    /// Every solid feature blocks, including clear walls and statues.
    SolidBlocks,
    /// Nothing but opaque walls block; translucent solids are ignored.
    IgnoreTranslucent,
}

/// Read access to terrain, shared by the beam engine and the spells.
pub trait MapOracle {
    fn in_bounds(&self, c: Coord) -> bool;

    /// Feature at `c`. Out-of-bounds cells read as permanent rock.
    fn feature_at(&self, c: Coord) -> Feature;

    fn los_radius(&self) -> i32;

    fn is_solid(&self, c: Coord) -> bool {
        self.feature_at(c).is_solid()
    }

    fn blocks_los(&self, c: Coord, mode: LosMode) -> bool {
        let f = self.feature_at(c);
        match mode {
            LosMode::Normal => f.is_opaque(),
            LosMode::SolidBlocks => f.is_solid(),
            LosMode::IgnoreTranslucent => f.is_opaque() && f.is_wall(),
        }
    }

    /// Whether `to` is visible from `from`: within the sight radius and no
    /// blocking cell strictly between them.
    fn can_see(&self, from: Coord, to: Coord, mode: LosMode) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }
        if from.distance_sq(to) > self.los_radius() * self.los_radius() + 1 {
            return false;
        }
        let mut ray = Ray::new(from, to);
        while ray.pos() != to {
            let c = ray.advance();
            if c != to && self.blocks_los(c, mode) {
                return false;
            }
        }
        true
    }
}

/// Rectangular terrain grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Feature>,
}

impl Grid {
    /// A grid of floor surrounded by a permanent rock border.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut grid = Self {
            width,
            height,
            cells: vec![Feature::Floor; (width * height) as usize],
        };
        for x in 0..width {
            grid.set(Coord::new(x, 0), Feature::PermaRock);
            grid.set(Coord::new(x, height - 1), Feature::PermaRock);
        }
        for y in 0..height {
            grid.set(Coord::new(0, y), Feature::PermaRock);
            grid.set(Coord::new(width - 1, y), Feature::PermaRock);
        }
        grid
    }

    /// Build a grid from rows of feature symbols. Unknown symbols are floor.
    /// The top-left character is `(0, 0)`.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self {
            width,
            height,
            cells: vec![Feature::Floor; (width * height) as usize],
        };
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let f = Feature::from_symbol(ch).unwrap_or(Feature::Floor);
                grid.set(Coord::new(x as i32, y as i32), f);
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= self.width || c.y >= self.height {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }

    pub fn get(&self, c: Coord) -> Feature {
        self.index(c)
            .map_or(Feature::PermaRock, |i| self.cells[i])
    }

    /// Change the feature at `c`. Returns false out of bounds.
    pub fn set(&mut self, c: Coord, feature: Feature) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = feature;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(Coord::new(x, y)).symbol())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare(Grid);

    impl MapOracle for Bare {
        fn in_bounds(&self, c: Coord) -> bool {
            self.0.contains(c)
        }
        fn feature_at(&self, c: Coord) -> Feature {
            self.0.get(c)
        }
        fn los_radius(&self) -> i32 {
            8
        }
    }

    #[test]
    fn test_new_has_border() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.get(Coord::new(0, 0)), Feature::PermaRock);
        assert_eq!(grid.get(Coord::new(4, 3)), Feature::PermaRock);
        assert_eq!(grid.get(Coord::new(2, 2)), Feature::Floor);
    }

    #[test]
    fn test_out_of_bounds_is_permarock() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.get(Coord::new(-1, 0)), Feature::PermaRock);
        assert_eq!(grid.get(Coord::new(3, 0)), Feature::PermaRock);
        assert!(!grid.contains(Coord::new(0, 3)));
    }

    #[test]
    fn test_from_ascii() {
        let grid = Grid::from_ascii(&["..#", ".8.", "..."]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(Coord::new(2, 0)), Feature::RockWall);
        assert_eq!(grid.get(Coord::new(1, 1)), Feature::GraniteStatue);
        assert_eq!(grid.to_ascii()[0], "..#");
    }

    #[test]
    fn test_los_blocked_by_wall() {
        let map = Bare(Grid::from_ascii(&[".....", "..#..", "....."]));
        assert!(!map.can_see(Coord::new(0, 1), Coord::new(4, 1), LosMode::Normal));
        assert!(map.can_see(Coord::new(0, 0), Coord::new(4, 0), LosMode::Normal));
    }

    #[test]
    fn test_los_statue_modes() {
        let map = Bare(Grid::from_ascii(&["..8.."]));
        let (a, b) = (Coord::new(0, 0), Coord::new(4, 0));
        assert!(map.can_see(a, b, LosMode::Normal));
        assert!(!map.can_see(a, b, LosMode::SolidBlocks));
    }

    #[test]
    fn test_los_radius() {
        let map = Bare(Grid::from_ascii(&[".................."]));
        assert!(map.can_see(Coord::new(0, 0), Coord::new(8, 0), LosMode::Normal));
        assert!(!map.can_see(Coord::new(0, 0), Coord::new(9, 0), LosMode::Normal));
    }
}
