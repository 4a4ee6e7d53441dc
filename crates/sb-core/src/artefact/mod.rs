//! Artefacts: random property bags, fixed artefacts and gift rules

mod brand;
mod gods;
mod props;
mod randart;
mod unrand;

pub use brand::{WeaponBrand, is_weapon_brand_ok};
pub use gods::{God, god_accepts_item_type, god_fits_artefact};
pub use props::{ArtProp, ArtefactData, KnownProps, RandartProperties};
pub use randart::{
    RANDART_SEED_MASK, fallback_properties, is_bad, make_item_randart, roll_properties,
};
pub use unrand::{
    UNRANDARTS, UniqueArtefactRegistry, UniqueStatus, UnrandartEntry, find_okay_unrandart,
    find_unrandart_index, make_item_unrandart,
};

use sb_rng::GameRng;

use crate::item::Item;

/// Value of one property on an item; zero for non-artefacts.
pub fn artefact_property(item: &Item, prop: ArtProp) -> i32 {
    item.artefact.map_or(0, |data| data.props[prop])
}

/// Value of a property the player has identified.
pub fn artefact_known_property(item: &Item, prop: ArtProp) -> Option<i32> {
    item.artefact
        .filter(|data| data.known.knows(prop))
        .map(|data| data.props[prop])
}

/// Mark a property as identified. No effect on non-artefacts.
pub fn learn_property(item: &mut Item, prop: ArtProp) {
    if let Some(data) = item.artefact.as_mut() {
        data.known.learn(prop);
    }
}

/// The weapon brand an item carries, artefact or not.
pub fn weapon_brand(item: &Item) -> WeaponBrand {
    match item.artefact {
        Some(data) if item.kind().weapon().is_some() => {
            WeaponBrand::from_value(data.props[ArtProp::Brand])
        }
        _ => item.brand,
    }
}

/// Property bag a randart regenerates to from its stored seed.
pub fn regenerate_properties(item: &Item, rng: &mut GameRng) -> Option<RandartProperties> {
    if !item.is_randart() {
        return None;
    }
    item.seed.map(|seed| roll_properties(&item.shape, seed, rng))
}

/// Re-check a randart's stored properties against the validity rules.
pub fn randart_is_bad(item: &Item, rng: &mut GameRng) -> bool {
    if !item.is_randart() {
        return false;
    }
    let props = regenerate_properties(item, rng).or(item.artefact.map(|data| data.props));
    props.is_none_or(|props| is_bad(&item.shape, &props))
}
