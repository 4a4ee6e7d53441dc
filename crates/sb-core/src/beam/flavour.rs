//! Beam flavours

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::resist::Element;
use crate::world::Feature;

/// What a beam does to whatever it hits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BeamFlavour {
    /// Raw magical force, never resisted
    #[default]
    Magic = 0,
    Fire = 1,
    Cold = 2,
    Poison = 3,
    /// Poison that overwhelms ordinary resistance
    PoisonArrow = 4,
    Electricity = 5,
    NegativeEnergy = 6,
    Acid = 7,
    Lava = 8,
    Ice = 9,
    Hellfire = 10,
    Holy = 11,
    Steam = 12,
    /// Knocks the target back
    Force = 13,
    /// Shrapnel from shattered material
    Fragmentation = 14,
    /// Rotting vapour that slows the living
    Miasma = 15,
    StickyFlame = 16,
    Disintegration = 17,

    // Enchantments
    Slow = 32,
    Haste = 33,
    Heal = 34,
    Paralysis = 35,
    Confusion = 36,
    Invisibility = 37,
    Teleport = 38,
    Polymorph = 39,
    Charm = 40,
    Sleep = 41,
    Pain = 42,
    DispelUndead = 43,
    Petrify = 44,
    Corona = 45,
    Digging = 46,
}

impl BeamFlavour {
    pub const fn is_enchantment(&self) -> bool {
        *self as u8 >= BeamFlavour::Slow as u8
    }

    /// Enchantments that never use up the beam on hit.
    pub const fn is_pass_through(&self) -> bool {
        matches!(
            self,
            BeamFlavour::Digging
                | BeamFlavour::Invisibility
                | BeamFlavour::Haste
                | BeamFlavour::Heal
        )
    }

    pub const fn is_helpful(&self) -> bool {
        matches!(
            self,
            BeamFlavour::Haste | BeamFlavour::Heal | BeamFlavour::Invisibility
        )
    }

    /// Enchantments that hurt rather than alter.
    pub const fn is_damaging_enchantment(&self) -> bool {
        matches!(self, BeamFlavour::Pain | BeamFlavour::DispelUndead)
    }

    /// Sets wax, trees and plants alight.
    pub const fn burns(&self) -> bool {
        matches!(
            self,
            BeamFlavour::Fire
                | BeamFlavour::Lava
                | BeamFlavour::Hellfire
                | BeamFlavour::StickyFlame
        )
    }

    pub const fn is_cold(&self) -> bool {
        matches!(self, BeamFlavour::Cold | BeamFlavour::Ice)
    }

    pub const fn element(&self) -> Element {
        match self {
            BeamFlavour::Fire | BeamFlavour::StickyFlame => Element::Fire,
            BeamFlavour::Cold => Element::Cold,
            BeamFlavour::Poison | BeamFlavour::PoisonArrow => Element::Poison,
            BeamFlavour::Electricity => Element::Electricity,
            BeamFlavour::NegativeEnergy | BeamFlavour::Pain => Element::NegativeEnergy,
            BeamFlavour::Acid => Element::Acid,
            BeamFlavour::Lava => Element::Lava,
            BeamFlavour::Ice => Element::Ice,
            BeamFlavour::Hellfire => Element::Hellfire,
            BeamFlavour::Holy => Element::Holy,
            BeamFlavour::Steam => Element::Steam,
            _ => Element::Magic,
        }
    }

    /// Whether a bolt of this flavour bounces off `feature` instead of
    /// stopping. Lightning skips off anything but metal; fire and cold
    /// glance off crystal.
    pub const fn bounces_off(&self, feature: Feature) -> bool {
        match self {
            BeamFlavour::Electricity => !matches!(feature, Feature::MetalWall),
            BeamFlavour::Fire | BeamFlavour::Cold => matches!(feature, Feature::CrystalWall),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enchantment_split() {
        let enchants: Vec<_> = BeamFlavour::iter().filter(|f| f.is_enchantment()).collect();
        assert_eq!(enchants.first(), Some(&BeamFlavour::Slow));
        assert!(enchants.contains(&BeamFlavour::Digging));
        assert!(!BeamFlavour::Hellfire.is_enchantment());
    }

    #[test]
    fn test_pass_through_are_enchantments() {
        for f in BeamFlavour::iter().filter(|f| f.is_pass_through()) {
            assert!(f.is_enchantment(), "{f}");
        }
    }

    #[test]
    fn test_bounces() {
        assert!(BeamFlavour::Electricity.bounces_off(Feature::RockWall));
        assert!(!BeamFlavour::Electricity.bounces_off(Feature::MetalWall));
        assert!(BeamFlavour::Fire.bounces_off(Feature::CrystalWall));
        assert!(!BeamFlavour::Fire.bounces_off(Feature::RockWall));
        assert!(!BeamFlavour::Magic.bounces_off(Feature::CrystalWall));
    }

    #[test]
    fn test_elements() {
        assert_eq!(BeamFlavour::StickyFlame.element(), Element::Fire);
        assert_eq!(BeamFlavour::PoisonArrow.element(), Element::Poison);
        assert_eq!(BeamFlavour::Slow.element(), Element::Magic);
    }
}
