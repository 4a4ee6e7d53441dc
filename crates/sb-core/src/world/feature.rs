//! Map features

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain occupying a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Feature {
    #[default]
    Floor = 0,
    RockWall = 1,
    ClearRockWall = 2,
    StoneWall = 3,
    ClearStoneWall = 4,
    MetalWall = 5,
    CrystalWall = 6,
    WaxWall = 7,
    PermaRock = 8,
    Tree = 9,
    Plant = 10,
    ClosedDoor = 11,
    OpenDoor = 12,
    SecretDoor = 13,
    Grate = 14,
    GraniteStatue = 15,
    OrcishIdol = 16,
    StoneArch = 17,
    ShallowWater = 18,
    DeepWater = 19,
    Lava = 20,
    MechanicalTrap = 21,
    MagicalTrap = 22,
}

impl Feature {
    /// Blocks movement and bolts
    pub const fn is_solid(&self) -> bool {
        self.is_wall()
            || matches!(
                self,
                Feature::Tree
                    | Feature::Plant
                    | Feature::ClosedDoor
                    | Feature::Grate
                    | Feature::GraniteStatue
                    | Feature::OrcishIdol
            )
    }

    /// Structural walls. Statues, trees and doors are solid but not walls.
    pub const fn is_wall(&self) -> bool {
        matches!(
            self,
            Feature::RockWall
                | Feature::ClearRockWall
                | Feature::StoneWall
                | Feature::ClearStoneWall
                | Feature::MetalWall
                | Feature::CrystalWall
                | Feature::WaxWall
                | Feature::PermaRock
                | Feature::SecretDoor
        )
    }

    /// Blocks line of sight
    pub const fn is_opaque(&self) -> bool {
        matches!(
            self,
            Feature::RockWall
                | Feature::StoneWall
                | Feature::MetalWall
                | Feature::CrystalWall
                | Feature::WaxWall
                | Feature::PermaRock
                | Feature::SecretDoor
                | Feature::ClosedDoor
                | Feature::Tree
        )
    }

    pub const fn is_statue(&self) -> bool {
        matches!(self, Feature::GraniteStatue | Feature::OrcishIdol)
    }

    /// Digging turns these into floor
    pub const fn is_diggable(&self) -> bool {
        matches!(
            self,
            Feature::RockWall | Feature::ClearRockWall | Feature::WaxWall
        )
    }

    pub const fn is_flammable(&self) -> bool {
        matches!(self, Feature::Tree | Feature::Plant | Feature::WaxWall)
    }

    pub const fn is_door(&self) -> bool {
        matches!(
            self,
            Feature::ClosedDoor | Feature::OpenDoor | Feature::SecretDoor
        )
    }

    pub const fn is_water(&self) -> bool {
        matches!(self, Feature::ShallowWater | Feature::DeepWater)
    }

    /// Display character, also accepted by [`Feature::from_symbol`]
    pub const fn symbol(&self) -> char {
        match self {
            Feature::Floor => '.',
            Feature::RockWall => '#',
            Feature::ClearRockWall => 'c',
            Feature::StoneWall => '%',
            Feature::ClearStoneWall => 'C',
            Feature::MetalWall => '&',
            Feature::CrystalWall => '*',
            Feature::WaxWall => 'w',
            Feature::PermaRock => 'X',
            Feature::Tree => 'T',
            Feature::Plant => 'P',
            Feature::ClosedDoor => '+',
            Feature::OpenDoor => '\'',
            Feature::SecretDoor => 'D',
            Feature::Grate => '=',
            Feature::GraniteStatue => '8',
            Feature::OrcishIdol => 'I',
            Feature::StoneArch => 'A',
            Feature::ShallowWater => '~',
            Feature::DeepWater => 'W',
            Feature::Lava => 'L',
            Feature::MechanicalTrap => '^',
            Feature::MagicalTrap => '"',
        }
    }

    /// Name used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            Feature::Floor => "floor",
            Feature::RockWall | Feature::ClearRockWall => "rock wall",
            Feature::StoneWall | Feature::ClearStoneWall => "stone wall",
            Feature::MetalWall => "metal wall",
            Feature::CrystalWall => "crystal wall",
            Feature::WaxWall => "wax wall",
            Feature::PermaRock => "wall",
            Feature::Tree => "tree",
            Feature::Plant => "plant",
            Feature::ClosedDoor | Feature::OpenDoor | Feature::SecretDoor => "door",
            Feature::Grate => "iron grate",
            Feature::GraniteStatue => "granite statue",
            Feature::OrcishIdol => "orcish idol",
            Feature::StoneArch => "stone arch",
            Feature::ShallowWater | Feature::DeepWater => "water",
            Feature::Lava => "lava",
            Feature::MechanicalTrap | Feature::MagicalTrap => "trap",
        }
    }

    pub fn from_symbol(c: char) -> Option<Feature> {
        use strum::IntoEnumIterator;
        Feature::iter().find(|f| f.symbol() == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_walls_are_solid() {
        for f in Feature::iter() {
            if f.is_wall() {
                assert!(f.is_solid(), "{f} should be solid");
            }
        }
    }

    #[test]
    fn test_statues_are_solid_not_walls() {
        assert!(Feature::GraniteStatue.is_solid());
        assert!(!Feature::GraniteStatue.is_wall());
        assert!(!Feature::GraniteStatue.is_opaque());
    }

    #[test]
    fn test_clear_walls_transparent() {
        assert!(Feature::ClearRockWall.is_solid());
        assert!(!Feature::ClearRockWall.is_opaque());
    }

    #[test]
    fn test_symbols_unique_and_roundtrip() {
        for f in Feature::iter() {
            assert_eq!(Feature::from_symbol(f.symbol()), Some(f));
        }
    }

    #[test]
    fn test_digging() {
        assert!(Feature::RockWall.is_diggable());
        assert!(!Feature::StoneWall.is_diggable());
        assert!(!Feature::MetalWall.is_diggable());
        assert!(!Feature::PermaRock.is_diggable());
    }
}
