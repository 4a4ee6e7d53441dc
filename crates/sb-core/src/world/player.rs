//! The player character

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::actor::{
    Actor, ActorId, Attitude, Holiness, Material, Reflection, Resists, Statuses,
};
use crate::geom::Coord;
use crate::item::ItemId;
use crate::resist::Element;

/// Bodily transformation in effect
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Transformation {
    #[default]
    None = 0,
    Statue = 1,
    IceBeast = 2,
    Lich = 3,
}

/// Bonuses summed from equipped artefacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GearBonuses {
    pub ac: i32,
    pub ev: i32,
    pub str: i32,
    pub int: i32,
    pub dex: i32,
    pub willpower: i32,
    pub resists: Resists,
    pub see_invisible: bool,
    pub levitate: bool,
    pub reflect: bool,
    pub stealth: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub pos: Coord,
    pub hp: i32,
    pub max_hp: i32,
    pub xl: i32,
    pub base_ac: i32,
    pub base_ev: i32,
    pub sh: i32,
    pub base_willpower: i32,
    pub str: i32,
    pub int: i32,
    pub dex: i32,
    pub resists: Resists,
    pub transformation: Transformation,
    pub statuses: Statuses,
    pub inventory: Vec<ItemId>,
    pub equipped: Vec<ItemId>,
    pub gear: GearBonuses,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Coord::default())
    }
}

impl Player {
    pub fn new(pos: Coord) -> Self {
        Self {
            name: "you".to_string(),
            pos,
            hp: 30,
            max_hp: 30,
            xl: 1,
            base_ac: 0,
            base_ev: 5,
            sh: 0,
            base_willpower: 20,
            str: 10,
            int: 10,
            dex: 10,
            resists: Resists::default(),
            transformation: Transformation::None,
            statuses: Statuses::default(),
            inventory: Vec::new(),
            equipped: Vec::new(),
            gear: GearBonuses::default(),
        }
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        self.equipped.contains(&item)
    }
}

impl Actor for Player {
    fn id(&self) -> ActorId {
        ActorId::Player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn pos(&self) -> Coord {
        self.pos
    }

    fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }

    fn hit_points(&self) -> i32 {
        self.hp
    }

    fn max_hit_points(&self) -> i32 {
        self.max_hp
    }

    fn armour_class(&self) -> i32 {
        let form = match self.transformation {
            Transformation::Statue => 20,
            Transformation::IceBeast => 5,
            _ => 0,
        };
        (self.base_ac + self.gear.ac + form).max(0)
    }

    fn evasion(&self) -> i32 {
        if self.statuses.is_helpless() {
            return 0;
        }
        (self.base_ev + self.gear.ev + self.dex / 4).max(0)
    }

    fn shield_class(&self) -> i32 {
        self.sh
    }

    fn willpower(&self) -> i32 {
        self.base_willpower + self.gear.willpower
    }

    fn hit_dice(&self) -> i32 {
        self.xl
    }

    fn resistance(&self, element: Element) -> i32 {
        let base = self.resists.tier(element, self.holiness());
        let gear = self.gear.resists.tier(element, Holiness::Natural);
        let tier = match element {
            Element::Holy | Element::Magic => base,
            Element::NegativeEnergy if self.holiness().is_evil() => base,
            _ => base + gear,
        };
        match (self.transformation, element) {
            (Transformation::IceBeast, Element::Cold | Element::Ice) => tier + 1,
            (Transformation::Statue, Element::Electricity) => tier + 1,
            _ => tier,
        }
    }

    fn reflection(&self) -> Reflection {
        if self.gear.reflect {
            Reflection::Shield
        } else {
            Reflection::None
        }
    }

    fn holiness(&self) -> Holiness {
        match self.transformation {
            Transformation::Lich => Holiness::Undead,
            _ => Holiness::Natural,
        }
    }

    fn material(&self) -> Material {
        match self.transformation {
            Transformation::None => Material::Flesh,
            Transformation::Statue => Material::Stone,
            Transformation::IceBeast => Material::Ice,
            Transformation::Lich => Material::Bone,
        }
    }

    fn attitude(&self) -> Attitude {
        Attitude::Friendly
    }

    fn flies(&self) -> bool {
        self.gear.levitate
    }

    fn sees_invisible(&self) -> bool {
        self.gear.see_invisible
    }

    fn statuses(&self) -> &Statuses {
        &self.statuses
    }

    fn statuses_mut(&mut self) -> &mut Statuses {
        &mut self.statuses
    }

    fn hurt(&mut self, amount: i32) -> i32 {
        let dealt = amount.clamp(0, self.hp.max(0));
        self.hp -= amount.max(0);
        dealt
    }

    fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.clamp(0, (self.max_hp - self.hp).max(0));
        self.hp += healed;
        healed
    }

    fn drain(&mut self, amount: i32) {
        self.max_hp = (self.max_hp - amount.max(0)).max(1);
        self.hp = self.hp.min(self.max_hp);
    }
}
