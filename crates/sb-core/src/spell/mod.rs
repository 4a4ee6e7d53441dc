//! Spell metadata
//!
//! Static per-spell rows (schools, behaviour flags, level, power cap, range
//! band, noise) validated once at load time.

mod data;

use std::sync::OnceLock;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::errors::TableError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum SpellId {
    MagicDart = 0,
    Fireball = 1,
    Dig = 2,
    BoltOfFire = 3,
    BoltOfCold = 4,
    LightningBolt = 5,
    BoltOfMagma = 6,
    PolymorphOther = 7,
    Slow = 8,
    Haste = 9,
    Petrify = 10,
    Confuse = 11,
    Invisibility = 12,
    TeleportOther = 13,
    BoltOfDraining = 14,
    FireStorm = 15,
    HellfireBurst = 16,
    Enslavement = 17,
    Pain = 18,
    VampiricDraining = 19,
    Freeze = 20,
    Burn = 21,
    StickyFlame = 22,
    DispelUndead = 23,
    PoisonArrow = 24,
    Disintegrate = 25,
    ThrowIcicle = 26,
    Airstrike = 27,
    IgnitePoison = 28,
    Shatter = 29,
    StaticDischarge = 30,
    Corona = 31,
    Fragmentation = 32,
    ChainLightning = 33,
    Paralyse = 34,
    Sleep = 35,
    DazzlingSpray = 36,
}

bitflags! {
    /// Schools of magic a spell belongs to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellSchools: u16 {
        const CONJURATION = 0x0001;
        const ENCHANTMENT = 0x0002;
        const FIRE = 0x0004;
        const ICE = 0x0008;
        const TRANSMUTATION = 0x0010;
        const NECROMANCY = 0x0020;
        const SUMMONING = 0x0040;
        const DIVINATION = 0x0080;
        const TRANSLOCATION = 0x0100;
        const POISON = 0x0200;
        const EARTH = 0x0400;
        const AIR = 0x0800;
    }
}

bitflags! {
    /// Targeting and behaviour flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellFlags: u32 {
        /// Aimed at a direction or a target
        const DIR_OR_TARGET = 0x0001;
        /// Aimed at a visible target
        const TARGET = 0x0002;
        /// Aimed at a grid cell
        const GRID = 0x0004;
        /// Aimed in a direction only
        const DIR = 0x0008;
        const AREA = 0x0010;
        const NEEDS_TRACER = 0x0020;
        const HELPFUL = 0x0040;
        const NEUTRAL = 0x0080;
        const NOT_SELF = 0x0100;
        const ESCAPE = 0x0200;
        const CHAOTIC = 0x0400;
        const UNHOLY = 0x0800;
        const BATTLE = 0x1000;
        const MONSTER = 0x2000;
    }
}

impl Serialize for SpellSchools {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpellSchools {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(SpellSchools::from_bits_truncate(bits))
    }
}

impl Serialize for SpellFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpellFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(SpellFlags::from_bits_truncate(bits))
    }
}

/// One static spell row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellDescriptor {
    pub id: SpellId,
    pub name: &'static str,
    pub schools: SpellSchools,
    pub flags: SpellFlags,
    pub level: i32,
    pub power_cap: i32,
    pub min_range: i32,
    pub max_range: i32,
    pub noise_mod: i32,
    pub target_prompt: Option<&'static str>,
}

impl SpellDescriptor {
    /// Aimed spells need a usable range band.
    pub fn is_targeted(&self) -> bool {
        self.flags.intersects(
            SpellFlags::DIR_OR_TARGET | SpellFlags::TARGET | SpellFlags::GRID | SpellFlags::DIR,
        )
    }

    pub fn needs_tracer(&self) -> bool {
        self.flags.contains(SpellFlags::NEEDS_TRACER)
    }

    /// Range at `power`, growing linearly across the band up to the cap.
    pub fn range(&self, power: i32) -> i32 {
        let (min, max, cap) = (self.min_range, self.max_range, self.power_cap);
        if min == max {
            return min;
        }
        if power >= cap {
            return max;
        }
        let power = power.max(0);
        (power * (max - min) + cap / 2) / cap + min
    }

    /// Noise made by casting.
    pub fn noise(&self) -> i32 {
        let level = self.level;
        let base = if self.schools.contains(SpellSchools::CONJURATION) {
            level
        } else if !self.schools.is_empty()
            && !self
                .schools
                .intersects(SpellSchools::POISON | SpellSchools::AIR)
        {
            (level * 3 + 3) / 4
        } else {
            (level + 1) / 2
        };
        base + self.noise_mod
    }

    fn validate(&self) -> Result<(), TableError> {
        let spell = self.id;
        if !(1..=9).contains(&self.level) {
            return Err(TableError::LevelOutOfRange {
                spell,
                level: self.level,
            });
        }
        if self.min_range > self.max_range {
            return Err(TableError::RangeInverted {
                spell,
                min: self.min_range,
                max: self.max_range,
            });
        }
        if self.is_targeted() && (self.min_range < 0 || self.max_range <= 0) {
            return Err(TableError::TargetedWithoutRange {
                spell,
                min: self.min_range,
                max: self.max_range,
            });
        }
        if self.power_cap <= 0 {
            return Err(TableError::BadPowerCap {
                spell,
                cap: self.power_cap,
            });
        }
        Ok(())
    }
}

/// Validated spell table, one row per [`SpellId`].
#[derive(Debug, Clone)]
pub struct SpellTable {
    rows: Vec<SpellDescriptor>,
}

impl SpellTable {
    /// Validate the built-in rows.
    pub fn load() -> Result<Self, TableError> {
        Self::from_rows(data::SPELL_DATA)
    }

    /// Validate a set of rows. Every spell must appear exactly once.
    pub fn from_rows(rows: &[SpellDescriptor]) -> Result<Self, TableError> {
        let mut slots: Vec<Option<SpellDescriptor>> = vec![None; SpellId::COUNT];
        for row in rows {
            row.validate()?;
            let slot = &mut slots[row.id as usize];
            if slot.is_some() {
                return Err(TableError::Duplicate { spell: row.id });
            }
            *slot = Some(*row);
        }

        let mut table = Vec::with_capacity(SpellId::COUNT);
        for (spell, slot) in SpellId::iter().zip(slots) {
            table.push(slot.ok_or(TableError::Missing { spell })?);
        }
        tracing::debug!(spells = table.len(), "spell table loaded");
        Ok(Self { rows: table })
    }

    /// Shared built-in table.
    ///
    /// # Panics
    ///
    /// If the compiled-in rows are invalid.
    pub fn builtin() -> &'static SpellTable {
        static TABLE: OnceLock<SpellTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SpellTable::load().unwrap_or_else(|err| panic!("built-in spell table: {err}"))
        })
    }

    pub fn get(&self, id: SpellId) -> &SpellDescriptor {
        &self.rows[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellDescriptor> {
        self.rows.iter()
    }
}

/// Range of `spell` cast at `power`.
pub fn spell_range(spell: SpellId, power: i32) -> i32 {
    SpellTable::builtin().get(spell).range(power)
}

/// Noise `spell` makes when cast.
pub fn spell_noise(spell: SpellId) -> i32 {
    SpellTable::builtin().get(spell).noise()
}
