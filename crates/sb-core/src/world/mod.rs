//! The world the engine acts on: terrain, actors, items and clouds

mod actor;
mod cloud;
mod feature;
mod grid;
mod monster;
mod player;
mod ray;

pub use actor::{
    Actor, ActorId, Attitude, Holiness, Material, Reflection, Resists, Statuses,
};
pub use cloud::{Cloud, CloudKind, Clouds};
pub use feature::Feature;
pub use grid::{Grid, LosMode, MapOracle};
pub use monster::{Behaviour, Monster, MonsterId};
pub use player::{GearBonuses, Player, Transformation};
pub use ray::Ray;

use serde::{Deserialize, Serialize};

use crate::artefact::{ArtProp, UniqueArtefactRegistry, artefact_property};
use crate::config::EngineConfig;
use crate::geom::Coord;
use crate::item::{ItemId, ItemLocation, ItemStore};

/// Who killed what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillRecord {
    pub victim: ActorId,
    pub name: String,
    pub killer: Option<ActorId>,
}

/// A level with everything on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    monsters: Vec<Monster>,
    next_monster_id: MonsterId,
    pub items: ItemStore,
    pub clouds: Clouds,
    pub uniques: UniqueArtefactRegistry,
    pub config: EngineConfig,
    pub kills: Vec<KillRecord>,
}

impl MapOracle for World {
    fn in_bounds(&self, c: Coord) -> bool {
        self.grid.contains(c)
    }

    fn feature_at(&self, c: Coord) -> Feature {
        self.grid.get(c)
    }

    fn los_radius(&self) -> i32 {
        self.config.los_radius
    }
}

impl World {
    pub fn new(grid: Grid, player: Player) -> Self {
        Self::with_config(grid, player, EngineConfig::default())
    }

    pub fn with_config(grid: Grid, player: Player, config: EngineConfig) -> Self {
        Self {
            grid,
            player,
            monsters: Vec::new(),
            next_monster_id: MonsterId(1),
            items: ItemStore::new(),
            clouds: Clouds::new(),
            uniques: UniqueArtefactRegistry::new(),
            config,
            kills: Vec::new(),
        }
    }

    /// Build a world from an ASCII map. `@` marks the player.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let grid = Grid::from_ascii(rows);
        let mut player_pos = Coord::default();
        for (y, row) in rows.iter().enumerate() {
            if let Some(x) = row.chars().position(|c| c == '@') {
                player_pos = Coord::new(x as i32, y as i32);
            }
        }
        Self::new(grid, Player::new(player_pos))
    }

    pub fn set_feature(&mut self, c: Coord, feature: Feature) -> bool {
        self.grid.set(c, feature)
    }

    /// Place a monster, assigning it a fresh id.
    pub fn add_monster(&mut self, mut monster: Monster) -> MonsterId {
        let id = self.next_monster_id;
        self.next_monster_id = id.next();
        monster.id = id;
        for &item in &monster.inventory {
            if let Some(item) = self.items.get_mut(item) {
                item.location = ItemLocation::Carried(ActorId::Monster(id));
            }
        }
        self.monsters.push(monster);
        id
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.monsters.iter().position(|m| m.id == id)?;
        Some(self.monsters.remove(index))
    }

    /// Living monster standing on `c`.
    pub fn monster_at(&self, c: Coord) -> Option<MonsterId> {
        self.monsters
            .iter()
            .find(|m| m.pos == c && m.hp > 0)
            .map(|m| m.id)
    }

    /// Living actor standing on `c`.
    pub fn actor_at(&self, c: Coord) -> Option<ActorId> {
        if self.player.pos == c && self.player.alive() {
            return Some(ActorId::Player);
        }
        self.monster_at(c).map(ActorId::Monster)
    }

    pub fn actor(&self, id: ActorId) -> Option<&dyn Actor> {
        match id {
            ActorId::Player => Some(&self.player as &dyn Actor),
            ActorId::Monster(mid) => self.monster(mid).map(|m| m as &dyn Actor),
        }
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut dyn Actor> {
        match id {
            ActorId::Player => Some(&mut self.player as &mut dyn Actor),
            ActorId::Monster(mid) => self.monster_mut(mid).map(|m| m as &mut dyn Actor),
        }
    }

    /// Living actors `from` can see, monsters in id order then the player.
    pub fn actors_in_los(&self, from: Coord, mode: LosMode) -> Vec<ActorId> {
        let mut seen: Vec<ActorId> = self
            .monsters
            .iter()
            .filter(|m| m.hp > 0 && self.can_see(from, m.pos, mode))
            .map(|m| ActorId::Monster(m.id))
            .collect();
        if self.player.alive() && self.can_see(from, self.player.pos, mode) {
            seen.push(ActorId::Player);
        }
        seen
    }

    /// Whether `viewer` can perceive `target`, invisibility included.
    pub fn can_perceive(&self, viewer: ActorId, target: ActorId) -> bool {
        let (Some(v), Some(t)) = (self.actor(viewer), self.actor(target)) else {
            return false;
        };
        (!t.is_invisible() || v.sees_invisible())
            && self.can_see(v.pos(), t.pos(), LosMode::Normal)
    }

    /// Remove a dead monster, dropping what it carried and crediting the
    /// killer. Returns the corpse's name.
    pub fn kill_monster(&mut self, id: MonsterId, killer: Option<ActorId>) -> Option<String> {
        let monster = self.remove_monster(id)?;
        for item in &monster.inventory {
            if let Some(item) = self.items.get_mut(*item) {
                item.location = ItemLocation::Floor(monster.pos);
            }
        }
        tracing::debug!(victim = %monster.name, ?killer, "monster killed");
        self.kills.push(KillRecord {
            victim: ActorId::Monster(id),
            name: monster.name.clone(),
            killer,
        });
        Some(monster.name)
    }

    /// Put an item into the player's equipment slots and refresh bonuses.
    pub fn equip(&mut self, item: ItemId) -> bool {
        let Some(it) = self.items.get_mut(item) else {
            return false;
        };
        it.location = ItemLocation::Carried(ActorId::Player);
        if !self.player.inventory.contains(&item) {
            self.player.inventory.push(item);
        }
        if !self.player.equipped.contains(&item) {
            self.player.equipped.push(item);
        }
        self.refresh_player_gear();
        true
    }

    pub fn unequip(&mut self, item: ItemId) {
        self.player.equipped.retain(|&i| i != item);
        self.refresh_player_gear();
    }

    /// Recompute the player's gear bonuses from equipped artefacts.
    pub fn refresh_player_gear(&mut self) {
        let mut gear = GearBonuses::default();
        for item in self.player.equipped.iter().filter_map(|&id| self.items.get(id)) {
            let prop = |p| artefact_property(item, p);
            gear.ac += prop(ArtProp::Ac);
            gear.ev += prop(ArtProp::Ev);
            gear.str += prop(ArtProp::Str);
            gear.int += prop(ArtProp::Int);
            gear.dex += prop(ArtProp::Dex);
            gear.willpower += prop(ArtProp::MagicResistance);
            gear.stealth += prop(ArtProp::Stealth);
            gear.resists.fire += prop(ArtProp::Fire);
            gear.resists.cold += prop(ArtProp::Cold);
            gear.resists.elec += prop(ArtProp::Electricity);
            gear.resists.poison += prop(ArtProp::Poison);
            gear.resists.neg += prop(ArtProp::NegativeEnergy);
            gear.see_invisible |= prop(ArtProp::SeeInvisible) != 0;
            gear.levitate |= prop(ArtProp::Levitate) != 0;
            if let Some(armour) = item.kind().armour() {
                let (fire, cold, elec, poison) = armour.base_resists();
                gear.resists.fire += fire;
                gear.resists.cold += cold;
                gear.resists.elec += elec;
                gear.resists.poison += poison;
            }
        }
        self.player.gear = gear;
    }
}
