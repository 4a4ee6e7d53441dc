//! Weapon brands

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

use crate::item::WeaponType;

/// Weapon ego. Discriminants are stored in the artefact brand slot, and
/// the generator relies on their order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    FromRepr,
)]
#[repr(u8)]
pub enum WeaponBrand {
    #[default]
    Normal = 0,
    Flaming = 1,
    Freezing = 2,
    HolyWrath = 3,
    Electrocution = 4,
    OrcSlaying = 5,
    DragonSlaying = 6,
    Venom = 7,
    Protection = 8,
    Draining = 9,
    Speed = 10,
    Vorpal = 11,
    Flame = 12,
    Frost = 13,
    Vampiricism = 14,
    Pain = 15,
    Distortion = 16,
    Reaching = 17,
    Returning = 18,
    Chaos = 19,
    Evasion = 20,
    Confuse = 21,
    Penetration = 22,
    Reaping = 23,
}

impl WeaponBrand {
    /// Decode a brand slot value. Unknown values read as no brand.
    pub fn from_value(value: i32) -> WeaponBrand {
        u8::try_from(value)
            .ok()
            .and_then(WeaponBrand::from_repr)
            .unwrap_or_default()
    }

    pub const fn value(&self) -> i32 {
        *self as i32
    }

    /// `base` offset by `n` slots, used for the generator's range rolls.
    pub fn offset(base: WeaponBrand, n: i32) -> WeaponBrand {
        WeaponBrand::from_value(base.value() + n)
    }

    /// Brands only a launcher can carry
    pub const fn is_launcher_only(&self) -> bool {
        matches!(
            self,
            WeaponBrand::Flame | WeaponBrand::Frost | WeaponBrand::Penetration | WeaponBrand::Reaping
        )
    }

    /// Brands a launcher can carry
    pub const fn fits_launcher(&self) -> bool {
        self.is_launcher_only()
            || matches!(
                self,
                WeaponBrand::Normal
                    | WeaponBrand::Speed
                    | WeaponBrand::Venom
                    | WeaponBrand::Vorpal
                    | WeaponBrand::Electrocution
            )
    }

    /// Brands that drain life and are shunned by the good gods
    pub const fn is_necromantic(&self) -> bool {
        matches!(
            self,
            WeaponBrand::Draining
                | WeaponBrand::Vampiricism
                | WeaponBrand::Pain
                | WeaponBrand::Reaping
        )
    }
}

/// Whether a weapon of type `weapon` may carry `brand`.
pub fn is_weapon_brand_ok(weapon: WeaponType, brand: WeaponBrand) -> bool {
    if brand == WeaponBrand::Normal {
        return true;
    }
    if weapon.is_launcher() {
        if !brand.fits_launcher() {
            return false;
        }
        return brand != WeaponBrand::Electrocution || weapon.is_crossbow();
    }
    match brand {
        b if b.is_launcher_only() => false,
        WeaponBrand::DragonSlaying | WeaponBrand::Reaching => weapon.is_polearm(),
        WeaponBrand::Returning => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(WeaponBrand::from_value(1), WeaponBrand::Flaming);
        assert_eq!(WeaponBrand::from_value(23), WeaponBrand::Reaping);
        assert_eq!(WeaponBrand::from_value(99), WeaponBrand::Normal);
        assert_eq!(WeaponBrand::from_value(-3), WeaponBrand::Normal);
    }

    #[test]
    fn test_offset_ranges() {
        assert_eq!(WeaponBrand::offset(WeaponBrand::Flaming, 14), WeaponBrand::Pain);
        assert_eq!(WeaponBrand::offset(WeaponBrand::OrcSlaying, 4), WeaponBrand::Draining);
        assert_eq!(WeaponBrand::offset(WeaponBrand::Vorpal, 2), WeaponBrand::Frost);
    }

    #[test]
    fn test_dragon_slaying_polearms_only() {
        assert!(is_weapon_brand_ok(WeaponType::Halberd, WeaponBrand::DragonSlaying));
        assert!(!is_weapon_brand_ok(WeaponType::LongSword, WeaponBrand::DragonSlaying));
    }

    #[test]
    fn test_launcher_brands() {
        assert!(is_weapon_brand_ok(WeaponType::Bow, WeaponBrand::Flame));
        assert!(!is_weapon_brand_ok(WeaponType::Bow, WeaponBrand::Flaming));
        assert!(!is_weapon_brand_ok(WeaponType::Dagger, WeaponBrand::Frost));
        assert!(is_weapon_brand_ok(WeaponType::Crossbow, WeaponBrand::Electrocution));
        assert!(!is_weapon_brand_ok(WeaponType::Sling, WeaponBrand::Electrocution));
    }

    #[test]
    fn test_returning_never() {
        assert!(!is_weapon_brand_ok(WeaponType::Dagger, WeaponBrand::Returning));
    }
}
