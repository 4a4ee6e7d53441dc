//! Monster instances

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::actor::{
    Actor, ActorId, Attitude, Holiness, Material, Reflection, Resists, Statuses,
};
use crate::geom::Coord;
use crate::item::ItemId;
use crate::resist::Element;

/// Unique identifier for monster instances
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);

    pub fn next(self) -> Self {
        MonsterId(self.0 + 1)
    }
}

/// Awareness of the monster
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Behaviour {
    Sleeping = 0,
    #[default]
    Wandering = 1,
    Alert = 2,
}

/// Monster instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub pos: Coord,
    pub hp: i32,
    pub max_hp: i32,
    pub hit_dice: i32,
    pub ac: i32,
    pub ev: i32,
    pub sh: i32,
    pub willpower: i32,
    pub resists: Resists,
    pub holiness: Holiness,
    pub material: Material,
    pub attitude: Attitude,
    pub behaviour: Behaviour,
    pub flies: bool,
    pub sees_invisible: bool,
    pub reflection: Reflection,
    /// Weighs friendly fire before casting
    pub smart: bool,
    /// Summoned on behalf of someone else
    pub summoned: bool,
    /// Innate poison degree, for monsters whose body is venomous
    pub poisonous: i32,
    /// Takes extra harm from cold and may be slowed by it
    pub cold_blooded: bool,
    pub statuses: Statuses,
    pub inventory: Vec<ItemId>,
}

impl Monster {
    /// A plain hostile fleshy monster.
    pub fn new(id: MonsterId, name: impl Into<String>, pos: Coord, hp: i32) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            hp,
            max_hp: hp,
            hit_dice: 1,
            ac: 0,
            ev: 0,
            sh: 0,
            willpower: 0,
            resists: Resists::default(),
            holiness: Holiness::Natural,
            material: Material::Flesh,
            attitude: Attitude::Hostile,
            behaviour: Behaviour::Wandering,
            flies: false,
            sees_invisible: false,
            reflection: Reflection::None,
            smart: false,
            summoned: false,
            poisonous: 0,
            cold_blooded: false,
            statuses: Statuses::default(),
            inventory: Vec::new(),
        }
    }

    pub fn with_hit_dice(mut self, hd: i32) -> Self {
        self.hit_dice = hd;
        self
    }

    pub fn with_defences(mut self, ac: i32, ev: i32) -> Self {
        self.ac = ac;
        self.ev = ev;
        self
    }

    pub fn with_shield(mut self, sh: i32, reflection: Reflection) -> Self {
        self.sh = sh;
        self.reflection = reflection;
        self
    }

    pub fn with_willpower(mut self, wp: i32) -> Self {
        self.willpower = wp;
        self
    }

    pub fn with_resists(mut self, resists: Resists) -> Self {
        self.resists = resists;
        self
    }

    pub fn with_holiness(mut self, holiness: Holiness) -> Self {
        self.holiness = holiness;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_attitude(mut self, attitude: Attitude) -> Self {
        self.attitude = attitude;
        self
    }

    pub fn flying(mut self) -> Self {
        self.flies = true;
        self
    }

    pub fn smart(mut self) -> Self {
        self.smart = true;
        self
    }

    pub fn asleep(mut self) -> Self {
        self.behaviour = Behaviour::Sleeping;
        self.statuses.sleep = 100;
        self
    }

    pub fn is_asleep(&self) -> bool {
        self.behaviour == Behaviour::Sleeping
    }

    /// Wake and turn on whoever disturbed it.
    pub fn alert(&mut self) {
        self.behaviour = Behaviour::Alert;
        self.statuses.sleep = 0;
    }
}

impl Actor for Monster {
    fn id(&self) -> ActorId {
        ActorId::Monster(self.id)
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
        self.ac
    }

    fn evasion(&self) -> i32 {
        if self.statuses.is_helpless() { 0 } else { self.ev }
    }

    fn shield_class(&self) -> i32 {
        self.sh
    }

    fn willpower(&self) -> i32 {
        self.willpower
    }

    fn hit_dice(&self) -> i32 {
        self.hit_dice
    }

    fn resistance(&self, element: Element) -> i32 {
        self.resists.tier(element, self.holiness)
    }

    fn reflection(&self) -> Reflection {
        self.reflection
    }

    fn holiness(&self) -> Holiness {
        self.holiness
    }

    fn material(&self) -> Material {
        self.material
    }

    fn attitude(&self) -> Attitude {
        if self.statuses.charmed > 0 {
            Attitude::Friendly
        } else {
            self.attitude
        }
    }

    fn flies(&self) -> bool {
        self.flies
    }

    fn sees_invisible(&self) -> bool {
        self.sees_invisible
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
