//! Items and the item arena

mod kind;

pub use kind::{
    ArmourEgo, ArmourType, EquipRace, FoodType, ItemClass, ItemKind, ItemShape, JewelleryType,
    MissileType, PotionType, WeaponType,
};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::artefact::{ArtefactData, God, WeaponBrand};
use crate::geom::Coord;
use crate::world::ActorId;

/// Stable handle into an [`ItemStore`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ItemId(pub u32);

bitflags! {
    /// Item state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemFlags: u16 {
        const RANDART = 0x0001;
        const UNRANDART = 0x0002;
        const CURSED = 0x0004;
        const POISONED = 0x0008;
        const IDENTIFIED = 0x0010;
    }
}

impl Serialize for ItemFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(ItemFlags::from_bits_truncate(bits))
    }
}

/// Where an item currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemLocation {
    #[default]
    Nowhere,
    Floor(Coord),
    Carried(ActorId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub shape: ItemShape,
    /// Ego of a plain weapon. Artefacts keep theirs in the property bag.
    pub brand: WeaponBrand,
    pub flags: ItemFlags,
    pub quantity: i32,
    /// 63-bit seed the randart properties regenerate from
    pub seed: Option<u64>,
    pub artefact: Option<ArtefactData>,
    /// Index into the unrandart table
    pub unrand: Option<usize>,
    pub location: ItemLocation,
    /// Deity the item is being gifted by, if any
    pub origin_god: Option<God>,
}

impl Item {
    pub fn new(shape: ItemShape) -> Self {
        Self {
            id: ItemId::default(),
            shape,
            brand: WeaponBrand::Normal,
            flags: ItemFlags::empty(),
            quantity: 1,
            seed: None,
            artefact: None,
            unrand: None,
            location: ItemLocation::Nowhere,
            origin_god: None,
        }
    }

    pub fn of_kind(kind: ItemKind) -> Self {
        Self::new(ItemShape::new(kind))
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn at(mut self, c: Coord) -> Self {
        self.location = ItemLocation::Floor(c);
        self
    }

    pub fn poisoned(mut self) -> Self {
        self.flags |= ItemFlags::POISONED;
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.shape.kind
    }

    /// How much poison the stack carries, zero for harmless items.
    pub fn poison_strength(&self) -> i32 {
        let per_item = match self.kind() {
            ItemKind::Missile(_) if self.flags.contains(ItemFlags::POISONED) => 1,
            ItemKind::Potion(PotionType::Poison) => 10,
            ItemKind::Potion(PotionType::StrongPoison) => 20,
            ItemKind::Food(FoodType::PoisonousChunk) => 30,
            _ => 0,
        };
        per_item * self.quantity
    }

    pub fn class(&self) -> ItemClass {
        self.shape.kind.class()
    }

    pub fn is_artefact(&self) -> bool {
        self.flags
            .intersects(ItemFlags::RANDART | ItemFlags::UNRANDART)
    }

    pub fn is_randart(&self) -> bool {
        self.flags.contains(ItemFlags::RANDART)
    }

    pub fn is_unrandart(&self) -> bool {
        self.flags.contains(ItemFlags::UNRANDART)
    }

    pub fn is_cursed(&self) -> bool {
        self.flags.contains(ItemFlags::CURSED)
    }

    pub fn floor_pos(&self) -> Option<Coord> {
        match self.location {
            ItemLocation::Floor(c) => Some(c),
            _ => None,
        }
    }
}

/// Arena of items addressed by [`ItemId`]. Slots are never reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemStore {
    slots: Vec<Option<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item, assigning it a fresh id.
    pub fn insert(&mut self, mut item: Item) -> ItemId {
        let id = ItemId(self.slots.len() as u32);
        item.id = id;
        self.slots.push(Some(item));
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.slots.get_mut(id.0 as usize).and_then(Option::take)
    }

    /// Live items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().flatten()
    }

    /// Ids of the items lying on a floor cell, in id order.
    pub fn items_at(&self, c: Coord) -> Vec<ItemId> {
        self.iter()
            .filter(|item| item.location == ItemLocation::Floor(c))
            .map(|item| item.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
