//! Grid rays
//!
//! Bresenham stepping from an origin through a target and beyond. A ray
//! remembers the previous step so it can back out of a wall and reflect.

use crate::geom::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    pos: Coord,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    prev: Option<(Coord, i32)>,
}

impl Ray {
    /// A ray starting at `from` aimed through `to`.
    pub fn new(from: Coord, to: Coord) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        Self {
            pos: from,
            dx,
            dy,
            sx: (to.x - from.x).signum(),
            sy: (to.y - from.y).signum(),
            err: dx + dy,
            prev: None,
        }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// A ray aimed at its own origin never moves.
    pub fn is_stationary(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Step one cell along the line.
    pub fn advance(&mut self) -> Coord {
        if self.is_stationary() {
            return self.pos;
        }
        self.prev = Some((self.pos, self.err));
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.pos.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.pos.y += self.sy;
        }
        self.pos
    }

    /// Undo the last step. Only one level of history is kept.
    pub fn regress(&mut self) -> Coord {
        if let Some((pos, err)) = self.prev.take() {
            self.pos = pos;
            self.err = err;
        }
        self.pos
    }

    /// Back out of the solid cell the ray is in and mirror its direction.
    ///
    /// The axis that is flipped depends on which orthogonal neighbours of
    /// the impact are solid: a flat wall flips one axis, a corner both.
    pub fn bounce(&mut self, is_solid: impl Fn(Coord) -> bool) -> Coord {
        let hit = self.pos;
        let from = self.regress();
        let step = hit - from;

        if step.x != 0 && step.y != 0 {
            let x_blocked = is_solid(Coord::new(hit.x, from.y));
            let y_blocked = is_solid(Coord::new(from.x, hit.y));
            match (x_blocked, y_blocked) {
                (true, false) => self.sx = -self.sx,
                (false, true) => self.sy = -self.sy,
                _ => {
                    self.sx = -self.sx;
                    self.sy = -self.sy;
                }
            }
        } else if step.x != 0 {
            self.sx = -self.sx;
        } else {
            self.sy = -self.sy;
        }
        from
    }

    /// The cells strictly after `from` up to and including `to`.
    pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
        let mut ray = Ray::new(from, to);
        let mut cells = Vec::with_capacity(from.distance(to) as usize);
        while ray.pos() != to {
            cells.push(ray.advance());
        }
        cells
    }
}
