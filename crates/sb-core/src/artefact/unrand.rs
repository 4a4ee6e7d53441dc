//! Fixed artefacts

use sb_rng::GameRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::props::{ArtProp, ArtefactData, RandartProperties};
use crate::errors::ArtefactError;
use crate::item::{
    ArmourType, Item, ItemClass, ItemFlags, ItemKind, ItemShape, JewelleryType, WeaponType,
};

/// Static definition of a fixed artefact.
#[derive(Debug, Clone, Copy)]
pub struct UnrandartEntry {
    pub name: &'static str,
    pub unid_name: &'static str,
    pub kind: ItemKind,
    pub plus: i32,
    pub plus2: i32,
    pub props: &'static [(ArtProp, i32)],
    pub description: &'static str,
}

impl UnrandartEntry {
    pub fn properties(&self) -> RandartProperties {
        RandartProperties::from_pairs(self.props)
    }

    pub fn shape(&self) -> ItemShape {
        ItemShape::new(self.kind).with_plus(self.plus, self.plus2)
    }
}

pub static UNRANDARTS: &[UnrandartEntry] = &[
    UnrandartEntry {
        name: "Singing Sword",
        unid_name: "golden long sword",
        kind: ItemKind::Weapon(WeaponType::LongSword),
        plus: 7,
        plus2: 6,
        props: &[
            (ArtProp::Brand, 0),
            (ArtProp::Noises, 2),
            (ArtProp::PreventSpellcasting, 1),
        ],
        description: "A sword that will not stop humming.",
    },
    UnrandartEntry {
        name: "Wrath of Trog",
        unid_name: "bloodstained battleaxe",
        kind: ItemKind::Weapon(WeaponType::BattleAxe),
        plus: 3,
        plus2: 11,
        props: &[
            (ArtProp::Brand, 9),
            (ArtProp::Angry, 7),
            (ArtProp::Noises, 1),
        ],
        description: "An axe that hungers for battle.",
    },
    UnrandartEntry {
        name: "Staff of Olgreb",
        unid_name: "green glowing staff",
        kind: ItemKind::Weapon(WeaponType::Quarterstaff),
        plus: 0,
        plus2: 4,
        props: &[(ArtProp::Brand, 7), (ArtProp::Poison, 1), (ArtProp::Int, 2)],
        description: "A staff that drips with venom.",
    },
    UnrandartEntry {
        name: "cloak of Starlight",
        unid_name: "silvery cloak",
        kind: ItemKind::Armour(ArmourType::Cloak),
        plus: 2,
        plus2: 0,
        props: &[(ArtProp::Ev, 4), (ArtProp::Cold, 1)],
        description: "A cloak woven from the light of distant stars.",
    },
    UnrandartEntry {
        name: "robe of Night",
        unid_name: "black robe",
        kind: ItemKind::Armour(ArmourType::Robe),
        plus: 4,
        plus2: 0,
        props: &[
            (ArtProp::SeeInvisible, 1),
            (ArtProp::Invisible, 1),
            (ArtProp::Stealth, 60),
        ],
        description: "A robe as dark as a moonless night.",
    },
    UnrandartEntry {
        name: "ring of Shadows",
        unid_name: "smoky ring",
        kind: ItemKind::Jewellery(JewelleryType::Invisibility),
        plus: 0,
        plus2: 0,
        props: &[
            (ArtProp::Ev, 4),
            (ArtProp::Accuracy, -3),
            (ArtProp::SeeInvisible, 1),
        ],
        description: "A ring through which the world looks dim.",
    },
    UnrandartEntry {
        name: "amulet of the Air",
        unid_name: "sky-blue amulet",
        kind: ItemKind::Jewellery(JewelleryType::Clarity),
        plus: 0,
        plus2: 0,
        props: &[
            (ArtProp::Electricity, 1),
            (ArtProp::Levitate, 1),
            (ArtProp::Ev, 3),
        ],
        description: "An amulet that never quite rests against the chest.",
    },
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum UniqueStatus {
    #[default]
    NotExists = 0,
    Exists = 1,
    Acquired = 2,
}

/// Tracks which fixed artefacts are in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueArtefactRegistry {
    status: Vec<UniqueStatus>,
}

impl Default for UniqueArtefactRegistry {
    fn default() -> Self {
        Self {
            status: vec![UniqueStatus::NotExists; UNRANDARTS.len()],
        }
    }
}

impl UniqueArtefactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, index: usize) -> Option<UniqueStatus> {
        self.status.get(index).copied()
    }

    fn set(&mut self, index: usize, status: UniqueStatus) -> Result<(), ArtefactError> {
        let slot = self
            .status
            .get_mut(index)
            .ok_or(ArtefactError::UnknownUnrand(index))?;
        *slot = status;
        Ok(())
    }

    /// The artefact was picked up by the player.
    pub fn mark_acquired(&mut self, index: usize) -> Result<(), ArtefactError> {
        self.set(index, UniqueStatus::Acquired)
    }

    /// The artefact left the game and may be generated again.
    pub fn mark_destroyed(&mut self, index: usize) -> Result<(), ArtefactError> {
        self.set(index, UniqueStatus::NotExists)
    }
}

/// Look up a fixed artefact by name, ignoring case.
pub fn find_unrandart_index(name: &str) -> Option<usize> {
    UNRANDARTS
        .iter()
        .position(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Turn `item` into the fixed artefact at `index`.
pub fn make_item_unrandart(
    item: &mut Item,
    index: usize,
    registry: &mut UniqueArtefactRegistry,
) -> Result<(), ArtefactError> {
    let entry = UNRANDARTS
        .get(index)
        .ok_or(ArtefactError::UnknownUnrand(index))?;
    if registry.status(index) != Some(UniqueStatus::NotExists) {
        return Err(ArtefactError::UniqueExists(entry.name));
    }

    let props = entry.properties();
    item.shape = entry.shape();
    item.flags.remove(ItemFlags::RANDART);
    item.flags |= ItemFlags::UNRANDART;
    if props.has(ArtProp::Cursed) {
        item.flags |= ItemFlags::CURSED;
    }
    item.seed = None;
    item.unrand = Some(index);
    item.artefact = Some(ArtefactData::new(props));
    registry.set(index, UniqueStatus::Exists)?;
    tracing::debug!(name = entry.name, "unrandart created");
    Ok(())
}

/// Pick a random not-yet-existing fixed artefact of the given class, and of
/// the given kind if one is named.
pub fn find_okay_unrandart(
    class: ItemClass,
    kind: Option<ItemKind>,
    registry: &UniqueArtefactRegistry,
    rng: &mut GameRng,
) -> Option<usize> {
    let mut chosen = None;
    let mut count = 0;
    for (index, entry) in UNRANDARTS.iter().enumerate() {
        if entry.kind.class() != class || kind.is_some_and(|k| k != entry.kind) {
            continue;
        }
        if registry.status(index) != Some(UniqueStatus::NotExists) {
            continue;
        }
        count += 1;
        if rng.one_in(count) {
            chosen = Some(index);
        }
    }
    chosen
}
