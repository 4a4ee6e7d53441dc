//! Artefact property bags

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// Artefact property slots
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
pub enum ArtProp {
    Ac = 0,
    Ev = 1,
    Str = 2,
    Int = 3,
    Dex = 4,
    Brand = 5,
    Accuracy = 6,
    Damage = 7,
    Fire = 8,
    Cold = 9,
    Electricity = 10,
    Poison = 11,
    NegativeEnergy = 12,
    MagicResistance = 13,
    SeeInvisible = 14,
    Invisible = 15,
    Levitate = 16,
    Blink = 17,
    Berserk = 18,
    Noises = 19,
    PreventSpellcasting = 20,
    CauseTeleportation = 21,
    PreventTeleportation = 22,
    Angry = 23,
    Metabolism = 24,
    Mutagenic = 25,
    Stealth = 26,
    Cursed = 27,
    MagicalPower = 28,
    SpiritShield = 29,
}

impl ArtProp {
    /// The five stat slots the bonus-property step draws from
    pub const STATS: [ArtProp; 5] = [
        ArtProp::Ac,
        ArtProp::Ev,
        ArtProp::Str,
        ArtProp::Int,
        ArtProp::Dex,
    ];

    pub const fn is_stat(&self) -> bool {
        (*self as u8) <= ArtProp::Dex as u8
    }

    pub const fn is_acc_dam(&self) -> bool {
        matches!(self, ArtProp::Accuracy | ArtProp::Damage)
    }

    /// Drawbacks rather than benefits
    pub const fn is_bad_property(&self) -> bool {
        matches!(
            self,
            ArtProp::Noises
                | ArtProp::PreventSpellcasting
                | ArtProp::CauseTeleportation
                | ArtProp::PreventTeleportation
                | ArtProp::Angry
                | ArtProp::Metabolism
                | ArtProp::Mutagenic
                | ArtProp::Cursed
        )
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Values for every property slot, zero when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandartProperties([i32; ArtProp::COUNT]);

impl Default for RandartProperties {
    fn default() -> Self {
        Self([0; ArtProp::COUNT])
    }
}

impl RandartProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(prop, value)` pairs.
    pub fn from_pairs(pairs: &[(ArtProp, i32)]) -> Self {
        let mut props = Self::default();
        for &(prop, value) in pairs {
            props[prop] = value;
        }
        props
    }

    pub fn get(&self, prop: ArtProp) -> i32 {
        self[prop]
    }

    pub fn has(&self, prop: ArtProp) -> bool {
        self[prop] != 0
    }

    /// Number of set properties, not counting self-cursing.
    pub fn num_props(&self) -> usize {
        use strum::IntoEnumIterator;
        ArtProp::iter()
            .filter(|&p| p != ArtProp::Cursed && self.has(p))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.num_props() == 0
    }

    /// Set properties with their values, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtProp, i32)> + '_ {
        use strum::IntoEnumIterator;
        ArtProp::iter()
            .map(|p| (p, self[p]))
            .filter(|&(_, v)| v != 0)
    }
}

impl Index<ArtProp> for RandartProperties {
    type Output = i32;

    fn index(&self, prop: ArtProp) -> &i32 {
        &self.0[prop.index()]
    }
}

impl IndexMut<ArtProp> for RandartProperties {
    fn index_mut(&mut self, prop: ArtProp) -> &mut i32 {
        &mut self.0[prop.index()]
    }
}

/// Which properties the player has identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnownProps(u32);

impl KnownProps {
    pub fn knows(&self, prop: ArtProp) -> bool {
        self.0 & (1 << prop.index()) != 0
    }

    pub fn learn(&mut self, prop: ArtProp) {
        self.0 |= 1 << prop.index();
    }

    pub fn learn_all(&mut self) {
        self.0 = (1 << ArtProp::COUNT) - 1;
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

/// Property bag and identification state stored on an artefact item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtefactData {
    pub props: RandartProperties,
    pub known: KnownProps,
}

impl ArtefactData {
    pub fn new(props: RandartProperties) -> Self {
        Self {
            props,
            known: KnownProps::default(),
        }
    }
}
