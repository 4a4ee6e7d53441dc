//! The actor abstraction shared by the player and monsters

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::monster::MonsterId;
use crate::geom::Coord;
use crate::resist::Element;

/// Handle to either the player or a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActorId {
    Player,
    Monster(MonsterId),
}

impl ActorId {
    pub const fn is_player(&self) -> bool {
        matches!(self, ActorId::Player)
    }

    pub const fn monster(&self) -> Option<MonsterId> {
        match self {
            ActorId::Monster(id) => Some(*id),
            ActorId::Player => None,
        }
    }
}

impl From<MonsterId> for ActorId {
    fn from(id: MonsterId) -> Self {
        ActorId::Monster(id)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Attitude {
    #[default]
    Hostile = 0,
    Neutral = 1,
    Friendly = 2,
}

impl Attitude {
    /// Actors on the same side never count each other as foes.
    pub const fn is_aligned_with(&self, other: Attitude) -> bool {
        *self as u8 == other as u8
    }

    pub const fn is_friendly(&self) -> bool {
        matches!(self, Attitude::Friendly)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Holiness {
    #[default]
    Natural = 0,
    Undead = 1,
    Demonic = 2,
    Holy = 3,
    Nonliving = 4,
    Plant = 5,
}

impl Holiness {
    pub const fn is_evil(&self) -> bool {
        matches!(self, Holiness::Undead | Holiness::Demonic)
    }

    /// Has blood and life force to drain.
    pub const fn is_living(&self) -> bool {
        matches!(self, Holiness::Natural | Holiness::Holy | Holiness::Plant)
    }
}

/// What an actor's body is made of.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Material {
    #[default]
    Flesh = 0,
    Stone = 1,
    Metal = 2,
    Silver = 3,
    Crystal = 4,
    Ice = 5,
    Bone = 6,
    Liquid = 7,
    Insubstantial = 8,
    Wood = 9,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Reflection {
    #[default]
    None = 0,
    /// Reflects with a chance scaled by shield class.
    Shield = 1,
    /// Reflects every reflectable bolt.
    Always = 2,
}

/// Status durations in turns. Zero means absent; `poison` is a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statuses {
    pub poison: i32,
    pub slow: i32,
    pub haste: i32,
    pub confusion: i32,
    pub paralysis: i32,
    pub sleep: i32,
    pub petrifying: i32,
    pub petrified: i32,
    pub sticky_flame: i32,
    pub invisible: i32,
    pub charmed: i32,
    pub corona: i32,
}

impl Statuses {
    pub fn is_poisoned(&self) -> bool {
        self.poison > 0
    }

    pub fn is_petrified(&self) -> bool {
        self.petrified > 0
    }

    pub fn is_petrifying(&self) -> bool {
        self.petrifying > 0
    }

    pub fn is_helpless(&self) -> bool {
        self.paralysis > 0 || self.sleep > 0 || self.petrified > 0
    }
}

/// Resistance tiers, negative for vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resists {
    pub fire: i32,
    pub cold: i32,
    pub elec: i32,
    pub poison: i32,
    pub neg: i32,
    pub acid: i32,
}

impl Resists {
    /// Tier for an element, folding composite elements onto their base.
    pub fn tier(&self, element: Element, holiness: Holiness) -> i32 {
        match element {
            Element::Fire | Element::Lava | Element::Hellfire | Element::Steam => self.fire,
            Element::Cold | Element::Ice => self.cold,
            Element::Electricity => self.elec,
            Element::Poison => self.poison,
            Element::NegativeEnergy => {
                if holiness.is_evil() || holiness == Holiness::Nonliving {
                    3
                } else {
                    self.neg
                }
            }
            Element::Acid => self.acid,
            Element::Holy => {
                if holiness.is_evil() {
                    -1
                } else {
                    1
                }
            }
            Element::Magic => 0,
        }
    }
}

/// Uniform view over the player and monsters for the beam engine.
pub trait Actor {
    fn id(&self) -> ActorId;
    fn name(&self) -> &str;
    fn pos(&self) -> Coord;
    fn set_pos(&mut self, pos: Coord);
    fn hit_points(&self) -> i32;
    fn max_hit_points(&self) -> i32;
    fn armour_class(&self) -> i32;
    fn evasion(&self) -> i32;
    fn shield_class(&self) -> i32;
    fn willpower(&self) -> i32;
    fn hit_dice(&self) -> i32;
    fn resistance(&self, element: Element) -> i32;
    fn reflection(&self) -> Reflection;
    fn holiness(&self) -> Holiness;
    fn material(&self) -> Material;
    fn attitude(&self) -> Attitude;
    fn flies(&self) -> bool;
    fn sees_invisible(&self) -> bool;
    fn statuses(&self) -> &Statuses;
    fn statuses_mut(&mut self) -> &mut Statuses;

    /// Apply damage, returning the amount actually taken.
    fn hurt(&mut self, amount: i32) -> i32;

    /// Restore hit points, returning the amount healed.
    fn heal(&mut self, amount: i32) -> i32;

    /// Permanently lower maximum hit points.
    fn drain(&mut self, amount: i32);

    fn is_player(&self) -> bool {
        self.id().is_player()
    }

    fn alive(&self) -> bool {
        self.hit_points() > 0
    }

    fn is_invisible(&self) -> bool {
        self.statuses().invisible > 0
    }

    fn is_evil(&self) -> bool {
        self.holiness().is_evil()
    }

    fn is_living(&self) -> bool {
        self.holiness().is_living()
    }
}
