//! Randomized artefact generation
//!
//! Properties are a pure function of the item shape and a 63-bit seed: the
//! generator runs inside an RNG excursion so regenerating from the stored
//! seed reproduces the bag exactly, whatever the ambient stream has done
//! since.

use sb_rng::GameRng;

use super::brand::{WeaponBrand, is_weapon_brand_ok};
use super::gods::{God, god_accepts_item_type, god_fits_artefact};
use super::props::{ArtProp, ArtefactData, RandartProperties};
use crate::config::EngineConfig;
use crate::errors::ArtefactError;
use crate::item::{
    ArmourEgo, ArmourType, EquipRace, Item, ItemFlags, ItemKind, ItemShape, JewelleryType,
    WeaponType,
};

/// Seeds are stored in 63 bits.
pub const RANDART_SEED_MASK: u64 = 0x7fff_ffff_ffff_ffff;

fn is_ring(shape: &ItemShape, ring: JewelleryType) -> bool {
    shape.kind.is_ring_of(ring)
}

fn is_armour(shape: &ItemShape, types: &[ArmourType]) -> bool {
    shape.kind.armour().is_some_and(|a| types.contains(&a))
}

/// Whether the base type leaves room for a stat property.
fn stat_allowed(shape: &ItemShape, prop: ArtProp) -> bool {
    match prop {
        ArtProp::Ac => {
            !matches!(shape.kind, ItemKind::Armour(_)) && !is_ring(shape, JewelleryType::Protection)
        }
        ArtProp::Ev => !is_ring(shape, JewelleryType::Evasion),
        ArtProp::Str => !is_ring(shape, JewelleryType::Strength),
        ArtProp::Int => !is_ring(shape, JewelleryType::Intelligence),
        ArtProp::Dex => !is_ring(shape, JewelleryType::Dexterity),
        _ => true,
    }
}

/// Positive roll for a stat slot. AC and EV swing wider.
fn stat_roll(prop: ArtProp, rng: &mut GameRng) -> i32 {
    match prop {
        ArtProp::Ac | ArtProp::Ev => 1 + rng.rn2(3) + rng.rn2(3) + rng.rn2(3),
        _ => 1 + rng.rn2(3) + rng.rn2(2),
    }
}

fn penalty_roll(rng: &mut GameRng) -> i32 {
    1 + rng.rn2(3) + rng.rn2(3) + rng.rn2(3)
}

/// Roll one stat slot, a quarter of the time pulled negative. Returns the
/// change in power budget.
fn roll_stat(props: &mut RandartProperties, prop: ArtProp, rng: &mut GameRng) -> i32 {
    props[prop] = stat_roll(prop, rng);
    if rng.one_in(4) {
        props[prop] -= penalty_roll(rng);
        0
    } else {
        1
    }
}

fn roll_weapon_brand(
    weapon: WeaponType,
    props: &mut RandartProperties,
    power: &mut i32,
    rng: &mut GameRng,
) {
    let mut brand = WeaponBrand::offset(WeaponBrand::Flaming, rng.rn2(15));
    if rng.one_in(6) {
        brand = WeaponBrand::offset(WeaponBrand::Flaming, rng.rn2(2));
    }
    if rng.one_in(6) {
        brand = WeaponBrand::offset(WeaponBrand::OrcSlaying, rng.rn2(5));
    }
    if rng.one_in(6) {
        brand = WeaponBrand::Vorpal;
    }
    if matches!(brand, WeaponBrand::Protection | WeaponBrand::Evasion) {
        brand = WeaponBrand::Normal;
    }

    if weapon.is_launcher() {
        brand = WeaponBrand::Normal;
        if rng.one_in(3) {
            let tmp = rng.rn2(20);
            brand = match tmp {
                18.. => WeaponBrand::Speed,
                14.. => WeaponBrand::Penetration,
                12.. => WeaponBrand::Reaping,
                8.. => WeaponBrand::Venom,
                _ => WeaponBrand::offset(WeaponBrand::Vorpal, rng.rn2(3)),
            };
            if weapon == WeaponType::Blowgun && brand != WeaponBrand::Speed {
                brand = WeaponBrand::Normal;
            }
            if weapon.is_crossbow() && rng.one_in(5) {
                brand = WeaponBrand::Electrocution;
            }
            if !weapon.is_crossbow() && brand == WeaponBrand::Penetration {
                brand = WeaponBrand::Normal;
            }
            if !weapon.is_bow() && brand == WeaponBrand::Reaping {
                brand = WeaponBrand::Normal;
            }
        }
    }

    if weapon.is_demonic() {
        brand = match rng.rn2(9) {
            0 => WeaponBrand::Draining,
            1 => WeaponBrand::Flaming,
            2 => WeaponBrand::Freezing,
            3 => WeaponBrand::Electrocution,
            4 => WeaponBrand::Vampiricism,
            5 => WeaponBrand::Pain,
            6 => WeaponBrand::Venom,
            _ => {
                *power -= 2;
                brand
            }
        };
        *power += 2;
    } else if rng.one_in(3) {
        brand = WeaponBrand::Normal;
    } else {
        *power += 1;
    }

    if !is_weapon_brand_ok(weapon, brand) {
        brand = WeaponBrand::Normal;
        *power -= 1;
    }
    props[ArtProp::Brand] = brand.value();
}

/// Bases that already grant fire resistance or vulnerability
fn has_fire_base(shape: &ItemShape) -> bool {
    is_ring(shape, JewelleryType::ProtectionFromFire)
        || is_ring(shape, JewelleryType::Fire)
        || is_ring(shape, JewelleryType::Ice)
        || is_armour(
            shape,
            &[
                ArmourType::FireDragonArmour,
                ArmourType::IceDragonArmour,
                ArmourType::GoldDragonArmour,
            ],
        )
}

fn has_cold_base(shape: &ItemShape) -> bool {
    is_ring(shape, JewelleryType::ProtectionFromCold)
        || is_ring(shape, JewelleryType::Fire)
        || is_ring(shape, JewelleryType::Ice)
        || is_armour(
            shape,
            &[
                ArmourType::FireDragonArmour,
                ArmourType::IceDragonArmour,
                ArmourType::GoldDragonArmour,
            ],
        )
}

/// How many extra stat properties a bland set needs.
fn need_bonus_stat_props(props: &RandartProperties, rng: &mut GameRng) -> i32 {
    let mut num_stats = 0;
    let mut num_acc_dam = 0;
    for (prop, _) in props.iter() {
        if prop == ArtProp::Cursed {
            continue;
        }
        if prop.is_stat() {
            num_stats += 1;
        } else if prop.is_acc_dam() {
            num_acc_dam += 1;
        } else {
            return 0;
        }
    }

    let total = num_stats + num_acc_dam;
    match total {
        0 => 2,
        1 if num_acc_dam > 0 => rng.rn2(3),
        1 => 1 + rng.rn2(2),
        _ => 0,
    }
}

/// Try once to add a random stat property. Returns the budget change.
fn add_one_property(shape: &ItemShape, props: &mut RandartProperties, rng: &mut GameRng) -> i32 {
    let negative = rng.one_in(4);
    let prop = ArtProp::STATS[rng.rn2(ArtProp::STATS.len() as i32) as usize];

    if props[prop] == 0 && stat_allowed(shape, prop) {
        let value = match prop {
            ArtProp::Ac | ArtProp::Ev => 1 + rng.rn2(3) + rng.rn2(3) + rng.rn2(3),
            _ => 1 + rng.rn2(3) + rng.rn2(3),
        };
        props[prop] = if negative { -value } else { value };
    }

    if negative { -1 } else { 1 }
}

/// Roll the property bag for `shape` from `seed`.
///
/// The ambient stream in `rng` is left exactly as it was.
pub fn roll_properties(shape: &ItemShape, seed: u64, rng: &mut GameRng) -> RandartProperties {
    let mut rng = rng.excursion(seed);
    let rng: &mut GameRng = &mut rng;
    let mut props = RandartProperties::new();

    let kind = shape.kind;
    let mut power = match kind {
        ItemKind::Armour(_) => shape.plus / 2 + 2,
        ItemKind::Jewellery(_) => 1 + rng.rn2(3) + rng.rn2(2),
        _ => shape.plus / 3 + shape.plus2 / 3,
    }
    .max(0);

    if let ItemKind::Weapon(weapon) = kind {
        roll_weapon_brand(weapon, &mut props, &mut power, rng);
    }

    if !rng.one_in(5) {
        for prop in ArtProp::STATS {
            if rng.one_in(4 + power) && stat_allowed(shape, prop) {
                power += roll_stat(&mut props, prop, rng);
            }
        }
    }

    if rng.rn2(15) >= power
        && !matches!(kind, ItemKind::Weapon(_))
        && !is_ring(shape, JewelleryType::Slaying)
    {
        for prop in [ArtProp::Accuracy, ArtProp::Damage] {
            if rng.one_in(4 + power) {
                power += roll_stat(&mut props, prop, rng);
            }
        }
    }

    let mut done = rng.x_chance_in_y(power, 12);

    if !done && rng.one_in(4 + power) && !has_fire_base(shape) {
        props[ArtProp::Fire] = 1 + i32::from(rng.one_in(5));
        power += 1;
    }
    if !done && rng.one_in(4 + power) && !has_cold_base(shape) {
        props[ArtProp::Cold] = 1 + i32::from(rng.one_in(5));
        power += 1;
    }

    if rng.x_chance_in_y(power, 12) || power > 7 {
        done = true;
    }

    if !done && rng.one_in(4 + power) && !is_armour(shape, &[ArmourType::StormDragonArmour]) {
        props[ArtProp::Electricity] = 1;
        power += 1;
    }
    if !done
        && rng.one_in(5 + power)
        && !is_ring(shape, JewelleryType::PoisonResistance)
        && !is_armour(
            shape,
            &[
                ArmourType::GoldDragonArmour,
                ArmourType::SwampDragonArmour,
                ArmourType::NagaBarding,
            ],
        )
    {
        props[ArtProp::Poison] = 1;
        power += 1;
    }
    if !done
        && rng.one_in(4 + power)
        && !is_ring(shape, JewelleryType::LifeProtection)
        && !WeaponBrand::from_value(props[ArtProp::Brand]).is_necromantic()
    {
        props[ArtProp::NegativeEnergy] = 1;
        power += 1;
    }
    if !done && rng.one_in(4 + power) && !is_ring(shape, JewelleryType::ProtectionFromMagic) {
        props[ArtProp::MagicResistance] = 35 + rng.rn2(65);
        power += 1;
    }
    if !done
        && rng.one_in(4 + power)
        && !is_ring(shape, JewelleryType::Invisibility)
        && !is_armour(shape, &[ArmourType::NagaBarding])
    {
        props[ArtProp::SeeInvisible] = 1;
        power += 1;
    }

    if rng.x_chance_in_y(power, 12) || power > 10 {
        done = true;
    }

    if !done && rng.one_in(10) && !is_ring(shape, JewelleryType::Invisibility) {
        props[ArtProp::Invisible] = 1;
        power += 1;
    }
    if !done && rng.one_in(10) && !is_ring(shape, JewelleryType::Levitation) {
        props[ArtProp::Levitate] = 1;
        power += 1;
    }
    if !done && rng.one_in(10) {
        props[ArtProp::Blink] = 1;
        power += 1;
    }
    if !done
        && rng.one_in(10)
        && !kind.is_ranged_weapon()
        && !is_ring(shape, JewelleryType::Rage)
    {
        props[ArtProp::Berserk] = 1;
        power += 1;
    }
    if !done
        && rng.one_in(10)
        && is_armour(shape, &[ArmourType::Cap, ArmourType::Shield])
    {
        props[ArtProp::SpiritShield] = 1;
        power += 1;
    }

    if matches!(kind, ItemKind::Armour(_)) {
        power -= 4;
    }

    if power >= 2 && rng.x_chance_in_y(power, 17) {
        roll_drawback(shape, &mut props, rng);
    }

    let elven = shape.race == EquipRace::Elven
        && is_armour(shape, &[ArmourType::Cloak, ArmourType::Boots]);
    if rng.one_in(10) && !elven && shape.ego != ArmourEgo::Stealth {
        power += 1;
        props[ArtProp::Stealth] = 10 + rng.rn2(70);
        if rng.one_in(4) {
            props[ArtProp::Stealth] = -props[ArtProp::Stealth] - rng.rn2(20);
            power -= 1;
        }
    }

    let bonus = need_bonus_stat_props(&props, rng);
    for _ in 0..bonus {
        power += add_one_property(shape, &mut props, rng);
    }

    if (power < 2 && rng.one_in(5)) || rng.one_in(30) {
        props[ArtProp::Cursed] = if rng.one_in(4) { 1 + rng.rn2(5) } else { -1 };
    }

    props
}

fn roll_drawback(shape: &ItemShape, props: &mut RandartProperties, rng: &mut GameRng) {
    let kind = shape.kind;
    let is_weapon = matches!(kind, ItemKind::Weapon(_));
    match rng.rn2(9) {
        0 if is_weapon => props[ArtProp::Noises] = 1 + rng.rn2(4),
        1 => props[ArtProp::PreventSpellcasting] = 1,
        2 if is_weapon => props[ArtProp::CauseTeleportation] = 5 + rng.rn2(15),
        3 if !is_ring(shape, JewelleryType::Teleportation)
            && !is_ring(shape, JewelleryType::TeleportControl) =>
        {
            props[ArtProp::Blink] = 0;
            props[ArtProp::PreventTeleportation] = 1;
        }
        4 if kind.is_melee_weapon() => props[ArtProp::Angry] = 1 + rng.rn2(8),
        5 if !has_fire_base(shape) => props[ArtProp::Fire] = -1,
        6 if !has_cold_base(shape) => props[ArtProp::Cold] = -1,
        7 if !is_ring(shape, JewelleryType::Hunger)
            && !is_ring(shape, JewelleryType::Sustenance) =>
        {
            props[ArtProp::Metabolism] = 1 + rng.rn2(3);
        }
        8 => props[ArtProp::Mutagenic] = 2 + rng.rn2(4),
        _ => {}
    }
}

/// The property a jewellery base already provides, if any.
fn jewellery_provides(ring: JewelleryType) -> &'static [ArtProp] {
    use JewelleryType as J;
    match ring {
        J::Protection | J::LifeProtection => &[ArtProp::Ac],
        J::Fire | J::ProtectionFromFire => &[ArtProp::Fire],
        J::PoisonResistance => &[ArtProp::Poison],
        J::Ice | J::ProtectionFromCold => &[ArtProp::Cold],
        J::Strength => &[ArtProp::Str],
        J::Slaying => &[ArtProp::Damage, ArtProp::Accuracy],
        J::SeeInvisible => &[ArtProp::SeeInvisible],
        J::Invisibility => &[ArtProp::Invisible],
        J::Hunger => &[ArtProp::Metabolism],
        J::Teleportation => &[ArtProp::CauseTeleportation],
        J::Evasion => &[ArtProp::Ev],
        J::Dexterity => &[ArtProp::Dex],
        J::Intelligence => &[ArtProp::Int],
        J::MagicalPower => &[ArtProp::MagicalPower],
        J::Levitation => &[ArtProp::Levitate],
        J::ProtectionFromMagic => &[ArtProp::MagicResistance],
        J::Rage => &[ArtProp::Berserk],
        J::Inaccuracy => &[ArtProp::Accuracy],
        J::Stasis => &[ArtProp::PreventTeleportation],
        _ => &[],
    }
}

/// Properties that clash with a jewellery base.
fn jewellery_conflicts(ring: JewelleryType) -> &'static [ArtProp] {
    use JewelleryType as J;
    match ring {
        J::Sustenance => &[ArtProp::Metabolism],
        J::Fire | J::Ice | J::Wizardry | J::MagicalPower => &[ArtProp::PreventSpellcasting],
        J::Teleportation | J::TeleportControl => &[ArtProp::PreventTeleportation],
        J::ResistMutation => &[ArtProp::Mutagenic],
        J::Rage => &[ArtProp::Stealth],
        J::Stasis => &[
            ArtProp::Blink,
            ArtProp::CauseTeleportation,
            ArtProp::Angry,
            ArtProp::Berserk,
        ],
        _ => &[],
    }
}

fn is_redundant(shape: &ItemShape, props: &RandartProperties) -> bool {
    shape
        .kind
        .jewellery()
        .is_some_and(|j| jewellery_provides(j).iter().any(|&p| props.has(p)))
}

fn is_conflicting(shape: &ItemShape, props: &RandartProperties) -> bool {
    if shape.kind.weapon().is_some()
        && WeaponBrand::from_value(props[ArtProp::Brand]) == WeaponBrand::HolyWrath
        && props.has(ArtProp::Cursed)
    {
        return true;
    }
    shape
        .kind
        .jewellery()
        .is_some_and(|j| jewellery_conflicts(j).iter().any(|&p| props.has(p)))
}

/// Whether a property set is unusable for this base type.
pub fn is_bad(shape: &ItemShape, props: &RandartProperties) -> bool {
    if props.is_empty() {
        return true;
    }
    if shape.kind.weapon().is_some()
        && (props[ArtProp::Brand] == WeaponBrand::Normal.value() || props.num_props() < 2)
    {
        return true;
    }
    is_redundant(shape, props) || is_conflicting(shape, props)
}

/// Smallest property set that always passes [`is_bad`], used when the
/// reroll loop gives up.
pub fn fallback_properties(shape: &ItemShape, god: Option<God>) -> RandartProperties {
    let mut props = RandartProperties::new();
    if shape.kind.weapon().is_some() {
        let brand = match god {
            Some(God::ShiningOne) => WeaponBrand::HolyWrath,
            Some(God::Lugonu) => WeaponBrand::Distortion,
            _ => WeaponBrand::Flaming,
        };
        props[ArtProp::Brand] = brand.value();
        props[ArtProp::Ac] = 1;
        return props;
    }

    let stat = ArtProp::STATS.into_iter().find(|&p| {
        let mut trial = RandartProperties::new();
        trial[p] = 1;
        stat_allowed(shape, p) && !is_redundant(shape, &trial)
    });
    props[stat.unwrap_or(ArtProp::Stealth)] = 1;
    props
}

/// Turn `item` into a random artefact, rerolling seeds from `rng` until
/// the properties are valid and suit any gifting god.
///
/// Returns [`ArtefactError::RerollExhausted`] after installing the fallback
/// set when no valid roll turned up; the item is a usable artefact either
/// way.
pub fn make_item_randart(
    item: &mut Item,
    rng: &mut GameRng,
    config: &EngineConfig,
) -> Result<(), ArtefactError> {
    let class = item.class();
    if !class.can_be_artefact() {
        return Err(ArtefactError::NotArtefactClass(class.to_string()));
    }
    if item.is_randart() {
        return Ok(());
    }
    if item.is_unrandart() {
        return Err(ArtefactError::AlreadyUnrandart);
    }
    if let Some(god) = item.origin_god
        && !god_accepts_item_type(god, item.kind())
    {
        return Err(ArtefactError::InvalidGift {
            god: god.to_string(),
            item: item.kind().to_string(),
        });
    }

    let shape = item.shape;
    for _ in 0..config.randart_reroll_cap {
        let seed = rng.next_u64() & RANDART_SEED_MASK;
        let props = roll_properties(&shape, seed, rng);
        if is_bad(&shape, &props) {
            continue;
        }
        if let Some(god) = item.origin_god
            && !god_fits_artefact(god, &shape, &props)?
        {
            continue;
        }
        tracing::debug!(kind = %shape.kind, seed, nprops = props.num_props(), "randart rolled");
        install(item, props, Some(seed));
        return Ok(());
    }

    tracing::warn!(
        kind = %shape.kind,
        tries = config.randart_reroll_cap,
        "randart reroll cap reached, installing fallback properties"
    );
    install(item, fallback_properties(&shape, item.origin_god), None);
    Err(ArtefactError::RerollExhausted {
        tries: config.randart_reroll_cap,
    })
}

fn install(item: &mut Item, props: RandartProperties, seed: Option<u64>) {
    item.flags |= ItemFlags::RANDART;
    if props.has(ArtProp::Cursed) {
        item.flags |= ItemFlags::CURSED;
    }
    item.seed = seed;
    item.artefact = Some(ArtefactData::new(props));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemShape, PotionType};

    #[test]
    fn test_roll_is_reproducible() {
        let shape = ItemShape::weapon(WeaponType::LongSword).with_plus(3, 3);
        let mut rng = GameRng::new(7);
        let a = roll_properties(&shape, 1234, &mut rng);
        rng.rn2(1000);
        let b = roll_properties(&shape, 1234, &mut rng);
        assert_eq!(a, b);
    }

    #[test]
    fn test_roll_leaves_ambient_stream() {
        let shape = ItemShape::armour(ArmourType::Cloak);
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        roll_properties(&shape, 42, &mut a);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_is_bad_empty() {
        let shape = ItemShape::armour(ArmourType::Cloak);
        assert!(is_bad(&shape, &RandartProperties::new()));
    }

    #[test]
    fn test_is_bad_weapon_needs_brand_and_two_props() {
        let shape = ItemShape::weapon(WeaponType::Mace);
        let only_brand = RandartProperties::from_pairs(&[(ArtProp::Brand, 1)]);
        assert!(is_bad(&shape, &only_brand));
        let no_brand = RandartProperties::from_pairs(&[(ArtProp::Ac, 1), (ArtProp::Ev, 1)]);
        assert!(is_bad(&shape, &no_brand));
        let good = RandartProperties::from_pairs(&[(ArtProp::Brand, 1), (ArtProp::Ev, 1)]);
        assert!(!is_bad(&shape, &good));
    }

    #[test]
    fn test_is_bad_redundant_ring() {
        let shape = ItemShape::jewellery(JewelleryType::ProtectionFromFire);
        let props = RandartProperties::from_pairs(&[(ArtProp::Fire, 1), (ArtProp::Str, 2)]);
        assert!(is_bad(&shape, &props));
    }

    #[test]
    fn test_is_bad_conflicts() {
        let stasis = ItemShape::jewellery(JewelleryType::Stasis);
        let props = RandartProperties::from_pairs(&[(ArtProp::Blink, 1)]);
        assert!(is_bad(&stasis, &props));

        let sword = ItemShape::weapon(WeaponType::LongSword);
        let holy_cursed = RandartProperties::from_pairs(&[
            (ArtProp::Brand, WeaponBrand::HolyWrath.value()),
            (ArtProp::Ac, 2),
            (ArtProp::Cursed, -1),
        ]);
        assert!(is_bad(&sword, &holy_cursed));
    }

    #[test]
    fn test_fallback_is_valid() {
        use strum::IntoEnumIterator;
        for ring in JewelleryType::iter() {
            let shape = ItemShape::jewellery(ring);
            assert!(!is_bad(&shape, &fallback_properties(&shape, None)), "{ring}");
        }
        let sword = ItemShape::weapon(WeaponType::LongSword);
        assert!(!is_bad(&sword, &fallback_properties(&sword, None)));
        let plate = ItemShape::armour(ArmourType::PlateArmour);
        let props = fallback_properties(&plate, None);
        assert!(!props.has(ArtProp::Ac));
        assert!(!is_bad(&plate, &props));
    }

    #[test]
    fn test_make_randart_sets_flags() {
        let mut item = Item::new(ItemShape::weapon(WeaponType::Scimitar).with_plus(2, 2));
        let mut rng = GameRng::new(5);
        make_item_randart(&mut item, &mut rng, &EngineConfig::default()).unwrap();
        assert!(item.is_randart());
        let data = item.artefact.unwrap();
        assert!(!is_bad(&item.shape, &data.props));
        let seed = item.seed.unwrap();
        assert_eq!(seed & !RANDART_SEED_MASK, 0);
        assert_eq!(roll_properties(&item.shape, seed, &mut rng), data.props);
    }

    #[test]
    fn test_make_randart_rejects_potions() {
        let mut item = Item::of_kind(ItemKind::Potion(PotionType::Healing));
        let mut rng = GameRng::new(5);
        let err = make_item_randart(&mut item, &mut rng, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ArtefactError::NotArtefactClass(_)));
    }

    #[test]
    fn test_reroll_exhaustion_falls_back() {
        // Lugonu wants distortion, which the generator never rolls.
        let mut item = Item::new(ItemShape::weapon(WeaponType::WarAxe));
        item.origin_god = Some(God::Lugonu);
        let config = EngineConfig {
            randart_reroll_cap: 20,
            ..EngineConfig::default()
        };
        let mut rng = GameRng::new(11);
        let err = make_item_randart(&mut item, &mut rng, &config).unwrap_err();
        assert_eq!(err, ArtefactError::RerollExhausted { tries: 20 });
        assert!(item.is_randart());
        let props = item.artefact.unwrap().props;
        assert_eq!(props[ArtProp::Brand], WeaponBrand::Distortion.value());
        assert!(!is_bad(&item.shape, &props));
    }

    #[test]
    fn test_invalid_gift_type() {
        let mut item = Item::new(ItemShape::weapon(WeaponType::Dagger));
        item.origin_god = Some(God::Elyvilon);
        let mut rng = GameRng::new(3);
        let err = make_item_randart(&mut item, &mut rng, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, ArtefactError::InvalidGift { .. }));
        assert!(!item.is_randart());
    }
}
