//! Deity gift filter

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::brand::WeaponBrand;
use super::props::{ArtProp, RandartProperties};
use crate::errors::ArtefactError;
use crate::item::{ArmourEgo, ItemKind, ItemShape, JewelleryType, WeaponType};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum God {
    Zin = 0,
    ShiningOne = 1,
    Kikubaaqudgha = 2,
    Yredelemnul = 3,
    Xom = 4,
    Vehumet = 5,
    Okawaru = 6,
    Makhleb = 7,
    SifMuna = 8,
    Trog = 9,
    Nemelex = 10,
    Elyvilon = 11,
    Lugonu = 12,
    Beogh = 13,
    Jiyva = 14,
    Fedhas = 15,
    Cheibriados = 16,
}

impl God {
    pub const fn is_good(&self) -> bool {
        matches!(self, God::Zin | God::ShiningOne | God::Elyvilon)
    }

    pub const fn is_evil(&self) -> bool {
        matches!(
            self,
            God::Kikubaaqudgha | God::Makhleb | God::Yredelemnul | God::Beogh | God::Lugonu
        )
    }

    /// Spellcasting patrons
    pub const fn is_magic(&self) -> bool {
        matches!(self, God::SifMuna | God::Kikubaaqudgha | God::Vehumet)
    }
}

/// Whether `god` would ever gift an item of this kind, whatever its
/// properties.
pub fn god_accepts_item_type(god: God, kind: ItemKind) -> bool {
    if god == God::Jiyva {
        return false;
    }
    if god.is_magic() && kind.weapon().is_some() {
        return false;
    }
    if god.is_good() && kind.weapon().is_some_and(|w| w.is_demonic()) {
        return false;
    }
    match (god, kind) {
        (God::Elyvilon, ItemKind::Weapon(_)) => false,
        (God::Elyvilon, ItemKind::Jewellery(JewelleryType::Rage)) => false,
        (God::Okawaru, ItemKind::Jewellery(JewelleryType::Inaccuracy)) => false,
        (God::Zin, ItemKind::Jewellery(JewelleryType::Hunger)) => false,
        (
            God::Trog,
            ItemKind::Jewellery(
                JewelleryType::Wizardry
                | JewelleryType::Fire
                | JewelleryType::Ice
                | JewelleryType::MagicalPower,
            ),
        ) => false,
        (God::Cheibriados, ItemKind::Weapon(WeaponType::QuickBlade)) => false,
        (God::Cheibriados, ItemKind::Jewellery(JewelleryType::Rage)) => false,
        _ => true,
    }
}

/// Whether a rolled property set suits a gift from `god`.
///
/// A type the god never gifts is an error rather than a reroll.
pub fn god_fits_artefact(
    god: God,
    shape: &ItemShape,
    props: &RandartProperties,
) -> Result<bool, ArtefactError> {
    if !god_accepts_item_type(god, shape.kind) {
        return Err(ArtefactError::InvalidGift {
            god: god.to_string(),
            item: shape.kind.to_string(),
        });
    }

    let is_weapon = shape.kind.weapon().is_some();
    let brand = if is_weapon {
        WeaponBrand::from_value(props[ArtProp::Brand])
    } else {
        WeaponBrand::Normal
    };

    if god.is_evil() && brand == WeaponBrand::HolyWrath {
        return Ok(false);
    }
    if god.is_good()
        && (brand.is_necromantic() || brand == WeaponBrand::Chaos || props.has(ArtProp::Cursed))
    {
        return Ok(false);
    }

    let fits = match god {
        God::Beogh => brand != WeaponBrand::OrcSlaying,
        God::Elyvilon => !props.has(ArtProp::Angry) && !props.has(ArtProp::Berserk),
        God::Zin => !props.has(ArtProp::Mutagenic),
        God::ShiningOne => {
            (!is_weapon || brand == WeaponBrand::HolyWrath)
                && !props.has(ArtProp::Invisible)
                && props[ArtProp::Stealth] <= 0
        }
        God::Lugonu => !is_weapon || brand == WeaponBrand::Distortion,
        God::SifMuna | God::Kikubaaqudgha | God::Vehumet => {
            !props.has(ArtProp::PreventSpellcasting)
        }
        God::Trog => brand != WeaponBrand::Pain && !props.has(ArtProp::MagicalPower),
        God::Fedhas => brand != WeaponBrand::Reaping,
        God::Cheibriados => {
            brand != WeaponBrand::Speed
                && shape.ego != ArmourEgo::Running
                && !props.has(ArtProp::Angry)
                && !props.has(ArtProp::Berserk)
        }
        _ => true,
    };
    Ok(fits)
}
