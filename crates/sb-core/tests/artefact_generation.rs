//! Random artefact properties across every base type

use proptest::prelude::*;
use strum::IntoEnumIterator;

use sb_core::artefact::{
    ArtProp, UNRANDARTS, UniqueArtefactRegistry, UniqueStatus, artefact_property, is_bad,
    make_item_randart, make_item_unrandart, randart_is_bad, regenerate_properties,
    roll_properties,
};
use sb_core::config::EngineConfig;
use sb_core::item::{ArmourType, Item, ItemShape, JewelleryType, WeaponType};
use sb_core::{ArtefactError, GameRng};

// ============================================================================
// Helpers
// ============================================================================

fn all_shapes() -> Vec<ItemShape> {
    WeaponType::iter()
        .map(ItemShape::weapon)
        .chain(ArmourType::iter().map(ItemShape::armour))
        .chain(JewelleryType::iter().map(ItemShape::jewellery))
        .collect()
}

fn any_shape() -> impl Strategy<Value = ItemShape> {
    prop::sample::select(all_shapes())
}

/// Make a randart, accepting the fallback set when rerolls run out.
fn randart(shape: ItemShape, seed: u64) -> Item {
    let mut item = Item::new(shape);
    let mut rng = GameRng::new(seed);
    match make_item_randart(&mut item, &mut rng, &EngineConfig::default()) {
        Ok(()) | Err(ArtefactError::RerollExhausted { .. }) => {}
        Err(err) => panic!("{} cannot become a randart: {err}", shape.kind),
    }
    item
}

// ============================================================================
// Validity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_generated_artefacts_are_valid(shape in any_shape(), seed in any::<u64>()) {
        let item = randart(shape, seed);
        prop_assert!(item.is_randart());
        let props = item.artefact.map(|data| data.props).unwrap_or_default();
        prop_assert!(!is_bad(&item.shape, &props));
        prop_assert!(props.iter().any(|(_, value)| value != 0));
    }

    #[test]
    fn prop_roll_is_seed_stable(
        shape in any_shape(),
        seed in any::<u64>(),
        ambient in any::<u64>(),
        before in 0usize..16,
        between in 0usize..16,
    ) {
        let mut rng = GameRng::new(ambient);
        for _ in 0..before {
            rng.rn2(100);
        }
        let first = roll_properties(&shape, seed, &mut rng);
        for _ in 0..between {
            rng.rn2(100);
        }
        let second = roll_properties(&shape, seed, &mut rng);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_roll_does_not_leak(shape in any_shape(), seed in any::<u64>(), ambient in any::<u64>()) {
        let mut with_roll = GameRng::new(ambient);
        let mut without = GameRng::new(ambient);
        with_roll.rn2(7);
        without.rn2(7);
        roll_properties(&shape, seed, &mut with_roll);
        prop_assert_eq!(with_roll.next_u64(), without.next_u64());
    }

    #[test]
    fn prop_stored_seed_regenerates(shape in any_shape(), seed in any::<u64>()) {
        let item = randart(shape, seed);
        let mut rng = GameRng::new(seed ^ 0x5a5a);
        if item.seed.is_some() {
            let stored = item.artefact.map(|data| data.props);
            prop_assert_eq!(regenerate_properties(&item, &mut rng), stored);
        }
        prop_assert!(!randart_is_bad(&item, &mut rng));
    }

    #[test]
    fn prop_fire_ring_never_bumps_fire(seed in any::<u64>()) {
        let shape = ItemShape::jewellery(JewelleryType::ProtectionFromFire);
        let item = randart(shape, seed);
        prop_assert_eq!(artefact_property(&item, ArtProp::Fire), 0);

        let mut rng = GameRng::new(seed);
        let rolled = roll_properties(&shape, seed, &mut rng);
        if rolled.has(ArtProp::Fire) {
            prop_assert!(is_bad(&shape, &rolled));
        }
    }
}

// ============================================================================
// Fixed artefacts
// ============================================================================

#[test]
fn test_unique_exists_at_most_once() {
    let mut registry = UniqueArtefactRegistry::new();
    let entry = &UNRANDARTS[0];

    let mut first = Item::new(entry.shape());
    make_item_unrandart(&mut first, 0, &mut registry).unwrap();
    assert!(first.is_unrandart());
    assert_eq!(registry.status(0), Some(UniqueStatus::Exists));

    let mut second = Item::new(entry.shape());
    let err = make_item_unrandart(&mut second, 0, &mut registry).unwrap_err();
    assert_eq!(err, ArtefactError::UniqueExists(entry.name));
    assert!(!second.is_artefact());

    registry.mark_acquired(0).unwrap();
    assert!(make_item_unrandart(&mut second, 0, &mut registry).is_err());

    registry.mark_destroyed(0).unwrap();
    make_item_unrandart(&mut second, 0, &mut registry).unwrap();
    assert_eq!(second.artefact.map(|d| d.props), Some(entry.properties()));
}

#[test]
fn test_randart_cannot_overwrite_unrandart() {
    let mut registry = UniqueArtefactRegistry::new();
    let mut item = Item::new(UNRANDARTS[0].shape());
    make_item_unrandart(&mut item, 0, &mut registry).unwrap();

    let mut rng = GameRng::new(3);
    let err = make_item_randart(&mut item, &mut rng, &EngineConfig::default()).unwrap_err();
    assert_eq!(err, ArtefactError::AlreadyUnrandart);
}

#[test]
fn test_unknown_unique_index() {
    let mut registry = UniqueArtefactRegistry::new();
    let past_end = UNRANDARTS.len();
    assert_eq!(
        registry.mark_acquired(past_end),
        Err(ArtefactError::UnknownUnrand(past_end))
    );
    let mut item = Item::new(ItemShape::weapon(WeaponType::Dagger));
    assert_eq!(
        make_item_unrandart(&mut item, past_end, &mut registry),
        Err(ArtefactError::UnknownUnrand(past_end))
    );
}
