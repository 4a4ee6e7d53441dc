//! Cloud layer

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::actor::ActorId;
use crate::geom::Coord;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CloudKind {
    Fire = 0,
    Cold = 1,
    Poison = 2,
    Stink = 3,
    Steam = 4,
    Smoke = 5,
}

impl CloudKind {
    /// Clouds that poison whoever stands in them
    pub const fn is_poisonous(&self) -> bool {
        matches!(self, CloudKind::Poison | CloudKind::Stink)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    pub kind: CloudKind,
    pub duration: i32,
    pub owner: Option<ActorId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clouds {
    cells: HashMap<Coord, Cloud>,
}

impl Clouds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, c: Coord) -> Option<&Cloud> {
        self.cells.get(&c)
    }

    /// Place a cloud, replacing any cloud already there. Non-positive
    /// durations are ignored.
    pub fn place(&mut self, c: Coord, kind: CloudKind, duration: i32, owner: Option<ActorId>) {
        if duration <= 0 {
            return;
        }
        self.cells.insert(
            c,
            Cloud {
                kind,
                duration,
                owner,
            },
        );
    }

    pub fn remove(&mut self, c: Coord) -> Option<Cloud> {
        self.cells.remove(&c)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &Cloud)> {
        self.cells.iter()
    }
}
