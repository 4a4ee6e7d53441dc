//! Item classes and base types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Top-level item class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ItemClass {
    Weapon = 0,
    Armour = 1,
    Jewellery = 2,
    Missile = 3,
    Potion = 4,
    Food = 5,
}

impl ItemClass {
    /// Classes that can carry artefact properties
    pub const fn can_be_artefact(&self) -> bool {
        matches!(
            self,
            ItemClass::Weapon | ItemClass::Armour | ItemClass::Jewellery
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WeaponType {
    Dagger = 0,
    ShortSword = 1,
    QuickBlade = 2,
    LongSword = 3,
    GreatSword = 4,
    Scimitar = 5,
    Mace = 6,
    Flail = 7,
    Morningstar = 8,
    HandAxe = 9,
    WarAxe = 10,
    BattleAxe = 11,
    Spear = 12,
    Trident = 13,
    Halberd = 14,
    Glaive = 15,
    Scythe = 16,
    Bardiche = 17,
    Quarterstaff = 18,
    Whip = 19,
    DemonBlade = 20,
    DemonWhip = 21,
    DemonTrident = 22,
    Blowgun = 23,
    Sling = 24,
    Bow = 25,
    Longbow = 26,
    Crossbow = 27,
}

impl WeaponType {
    pub const fn is_launcher(&self) -> bool {
        matches!(
            self,
            WeaponType::Blowgun
                | WeaponType::Sling
                | WeaponType::Bow
                | WeaponType::Longbow
                | WeaponType::Crossbow
        )
    }

    pub const fn is_bow(&self) -> bool {
        matches!(self, WeaponType::Bow | WeaponType::Longbow)
    }

    pub const fn is_crossbow(&self) -> bool {
        matches!(self, WeaponType::Crossbow)
    }

    pub const fn is_polearm(&self) -> bool {
        matches!(
            self,
            WeaponType::Spear
                | WeaponType::Trident
                | WeaponType::Halberd
                | WeaponType::Glaive
                | WeaponType::Scythe
                | WeaponType::Bardiche
                | WeaponType::DemonTrident
        )
    }

    pub const fn is_demonic(&self) -> bool {
        matches!(
            self,
            WeaponType::DemonBlade | WeaponType::DemonWhip | WeaponType::DemonTrident
        )
    }

    /// Whip-class weapons reach one extra cell
    pub const fn is_whip(&self) -> bool {
        matches!(self, WeaponType::Whip | WeaponType::DemonWhip)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ArmourType {
    Robe = 0,
    LeatherArmour = 1,
    RingMail = 2,
    ScaleMail = 3,
    ChainMail = 4,
    PlateArmour = 5,
    CrystalPlate = 6,
    FireDragonArmour = 7,
    IceDragonArmour = 8,
    StormDragonArmour = 9,
    GoldDragonArmour = 10,
    SwampDragonArmour = 11,
    Cloak = 12,
    Cap = 13,
    Helmet = 14,
    Gloves = 15,
    Boots = 16,
    NagaBarding = 17,
    Buckler = 18,
    Shield = 19,
    LargeShield = 20,
}

impl ArmourType {
    pub const fn is_shield(&self) -> bool {
        matches!(
            self,
            ArmourType::Buckler | ArmourType::Shield | ArmourType::LargeShield
        )
    }

    pub const fn is_headgear(&self) -> bool {
        matches!(self, ArmourType::Cap | ArmourType::Helmet)
    }

    pub const fn is_boots(&self) -> bool {
        matches!(self, ArmourType::Boots | ArmourType::NagaBarding)
    }

    /// Resistance tiers granted by the base armour itself:
    /// `(fire, cold, elec, poison)`.
    pub const fn base_resists(&self) -> (i32, i32, i32, i32) {
        match self {
            ArmourType::FireDragonArmour => (2, -1, 0, 0),
            ArmourType::IceDragonArmour => (-1, 2, 0, 0),
            ArmourType::StormDragonArmour => (0, 0, 1, 0),
            ArmourType::GoldDragonArmour => (1, 1, 0, 1),
            ArmourType::SwampDragonArmour => (0, 0, 0, 1),
            _ => (0, 0, 0, 0),
        }
    }
}

/// Rings and amulets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum JewelleryType {
    Regeneration = 0,
    Protection = 1,
    ProtectionFromFire = 2,
    PoisonResistance = 3,
    ProtectionFromCold = 4,
    Strength = 5,
    Slaying = 6,
    SeeInvisible = 7,
    Invisibility = 8,
    Hunger = 9,
    Teleportation = 10,
    Evasion = 11,
    SustainAbilities = 12,
    Sustenance = 13,
    Dexterity = 14,
    Intelligence = 15,
    Wizardry = 16,
    MagicalPower = 17,
    Levitation = 18,
    LifeProtection = 19,
    ProtectionFromMagic = 20,
    Fire = 21,
    Ice = 22,
    TeleportControl = 23,
    Rage = 24,
    ResistSlow = 25,
    Clarity = 26,
    Warding = 27,
    ResistCorrosion = 28,
    Gourmand = 29,
    Conservation = 30,
    Inaccuracy = 31,
    ResistMutation = 32,
    Stasis = 33,
}

impl JewelleryType {
    pub const fn is_amulet(&self) -> bool {
        (*self as u8) >= JewelleryType::Rage as u8
    }

    pub const fn is_ring(&self) -> bool {
        !self.is_amulet()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum MissileType {
    Stone = 0,
    Dart = 1,
    Arrow = 2,
    Bolt = 3,
    SlingBullet = 4,
    Needle = 5,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum PotionType {
    Healing = 0,
    Poison = 1,
    StrongPoison = 2,
    Water = 3,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum FoodType {
    Bread = 0,
    Chunk = 1,
    PoisonousChunk = 2,
}

/// Class plus subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponType),
    Armour(ArmourType),
    Jewellery(JewelleryType),
    Missile(MissileType),
    Potion(PotionType),
    Food(FoodType),
}

impl ItemKind {
    pub const fn class(&self) -> ItemClass {
        match self {
            ItemKind::Weapon(_) => ItemClass::Weapon,
            ItemKind::Armour(_) => ItemClass::Armour,
            ItemKind::Jewellery(_) => ItemClass::Jewellery,
            ItemKind::Missile(_) => ItemClass::Missile,
            ItemKind::Potion(_) => ItemClass::Potion,
            ItemKind::Food(_) => ItemClass::Food,
        }
    }

    pub const fn weapon(&self) -> Option<WeaponType> {
        match self {
            ItemKind::Weapon(w) => Some(*w),
            _ => None,
        }
    }

    pub const fn armour(&self) -> Option<ArmourType> {
        match self {
            ItemKind::Armour(a) => Some(*a),
            _ => None,
        }
    }

    pub const fn jewellery(&self) -> Option<JewelleryType> {
        match self {
            ItemKind::Jewellery(j) => Some(*j),
            _ => None,
        }
    }

    pub const fn is_ranged_weapon(&self) -> bool {
        match self {
            ItemKind::Weapon(w) => w.is_launcher(),
            _ => false,
        }
    }

    pub const fn is_melee_weapon(&self) -> bool {
        match self {
            ItemKind::Weapon(w) => !w.is_launcher(),
            _ => false,
        }
    }

    pub const fn is_ring_of(&self, ring: JewelleryType) -> bool {
        match self {
            ItemKind::Jewellery(j) => *j as u8 == ring as u8,
            _ => false,
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemKind::Weapon(w) => write!(f, "{w}"),
            ItemKind::Armour(a) => write!(f, "{a}"),
            ItemKind::Jewellery(j) if j.is_amulet() => write!(f, "amulet of {j}"),
            ItemKind::Jewellery(j) => write!(f, "ring of {j}"),
            ItemKind::Missile(m) => write!(f, "{m}"),
            ItemKind::Potion(p) => write!(f, "potion of {p}"),
            ItemKind::Food(food) => write!(f, "{food}"),
        }
    }
}

/// Armour special property
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ArmourEgo {
    #[default]
    Normal = 0,
    Running = 1,
    FireResistance = 2,
    ColdResistance = 3,
    PoisonResistance = 4,
    SeeInvisible = 5,
    Darkness = 6,
    Strength = 7,
    Dexterity = 8,
    Intelligence = 9,
    Ponderousness = 10,
    Levitation = 11,
    MagicResistance = 12,
    Protection = 13,
    Stealth = 14,
    Resistance = 15,
    PositiveEnergy = 16,
    Archmagi = 17,
    Reflection = 18,
    SpiritShield = 19,
}

/// Crafting tradition of a piece of equipment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum EquipRace {
    #[default]
    None = 0,
    Elven = 1,
    Dwarven = 2,
    Orcish = 3,
}

/// Everything the property generator needs to know about an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemShape {
    pub kind: ItemKind,
    pub plus: i32,
    pub plus2: i32,
    pub ego: ArmourEgo,
    pub race: EquipRace,
}

impl ItemShape {
    pub const fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            plus: 0,
            plus2: 0,
            ego: ArmourEgo::Normal,
            race: EquipRace::None,
        }
    }

    pub const fn with_plus(mut self, plus: i32, plus2: i32) -> Self {
        self.plus = plus;
        self.plus2 = plus2;
        self
    }

    pub const fn with_ego(mut self, ego: ArmourEgo) -> Self {
        self.ego = ego;
        self
    }

    pub const fn with_race(mut self, race: EquipRace) -> Self {
        self.race = race;
        self
    }

    pub const fn weapon(w: WeaponType) -> Self {
        Self::new(ItemKind::Weapon(w))
    }

    pub const fn armour(a: ArmourType) -> Self {
        Self::new(ItemKind::Armour(a))
    }

    pub const fn jewellery(j: JewelleryType) -> Self {
        Self::new(ItemKind::Jewellery(j))
    }
}
