//! Built-in spell rows

use super::{SpellDescriptor, SpellFlags, SpellId, SpellSchools};

const LOS: i32 = 8;

const fn row(
    id: SpellId,
    name: &'static str,
    schools: SpellSchools,
    flags: SpellFlags,
    level: i32,
    power_cap: i32,
    range: (i32, i32),
) -> SpellDescriptor {
    SpellDescriptor {
        id,
        name,
        schools,
        flags,
        level,
        power_cap,
        min_range: range.0,
        max_range: range.1,
        noise_mod: 0,
        target_prompt: None,
    }
}

const CONJ: SpellSchools = SpellSchools::CONJURATION;
const ENCH: SpellSchools = SpellSchools::ENCHANTMENT;
const FIRE: SpellSchools = SpellSchools::FIRE;
const ICE: SpellSchools = SpellSchools::ICE;
const AIR: SpellSchools = SpellSchools::AIR;
const EARTH: SpellSchools = SpellSchools::EARTH;
const NECRO: SpellSchools = SpellSchools::NECROMANCY;
const TMUT: SpellSchools = SpellSchools::TRANSMUTATION;
const TLOC: SpellSchools = SpellSchools::TRANSLOCATION;
const POISON: SpellSchools = SpellSchools::POISON;

const DIR_TARGET: SpellFlags = SpellFlags::DIR_OR_TARGET.union(SpellFlags::NEEDS_TRACER);
const NO_RANGE: (i32, i32) = (-1, -1);
const LOS_RANGE: (i32, i32) = (LOS, LOS);

pub(super) static SPELL_DATA: &[SpellDescriptor] = &[
    row(SpellId::MagicDart, "Magic Dart", CONJ, DIR_TARGET, 1, 25, LOS_RANGE),
    row(
        SpellId::Fireball,
        "Fireball",
        CONJ.union(FIRE),
        DIR_TARGET,
        6,
        200,
        (6, 6),
    ),
    row(
        SpellId::Dig,
        "Dig",
        TMUT.union(EARTH),
        SpellFlags::DIR_OR_TARGET
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::NEUTRAL),
        4,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::BoltOfFire,
        "Bolt of Fire",
        CONJ.union(FIRE),
        DIR_TARGET,
        6,
        200,
        (6, 6),
    ),
    row(
        SpellId::BoltOfCold,
        "Bolt of Cold",
        CONJ.union(ICE),
        DIR_TARGET,
        6,
        200,
        (7, 7),
    ),
    row(
        SpellId::LightningBolt,
        "Lightning Bolt",
        CONJ.union(AIR),
        DIR_TARGET,
        5,
        200,
        (5, 12),
    ),
    row(
        SpellId::BoltOfMagma,
        "Bolt of Magma",
        CONJ.union(FIRE).union(EARTH),
        DIR_TARGET,
        5,
        200,
        (5, 5),
    ),
    row(
        SpellId::PolymorphOther,
        "Polymorph Other",
        TMUT,
        DIR_TARGET
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::CHAOTIC),
        5,
        200,
        LOS_RANGE,
    ),
    row(SpellId::Slow, "Slow", ENCH, DIR_TARGET, 3, 200, LOS_RANGE),
    row(
        SpellId::Haste,
        "Haste",
        ENCH,
        SpellFlags::DIR_OR_TARGET.union(SpellFlags::HELPFUL),
        6,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::Petrify,
        "Petrify",
        ENCH.union(EARTH),
        DIR_TARGET,
        4,
        200,
        LOS_RANGE,
    ),
    row(SpellId::Confuse, "Confuse", ENCH, DIR_TARGET, 3, 200, LOS_RANGE),
    row(
        SpellId::Invisibility,
        "Invisibility",
        ENCH,
        SpellFlags::DIR_OR_TARGET.union(SpellFlags::HELPFUL),
        6,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::TeleportOther,
        "Teleport Other",
        TLOC,
        DIR_TARGET
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::ESCAPE),
        4,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::BoltOfDraining,
        "Bolt of Draining",
        CONJ.union(NECRO),
        DIR_TARGET,
        6,
        200,
        (6, 6),
    ),
    row(
        SpellId::FireStorm,
        "Fire Storm",
        CONJ.union(FIRE),
        SpellFlags::GRID
            .union(SpellFlags::AREA)
            .union(SpellFlags::NEEDS_TRACER),
        9,
        200,
        (6, 6),
    ),
    row(
        SpellId::HellfireBurst,
        "Hellfire Burst",
        CONJ.union(FIRE),
        SpellFlags::GRID
            .union(SpellFlags::AREA)
            .union(SpellFlags::UNHOLY)
            .union(SpellFlags::NEEDS_TRACER),
        9,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::Enslavement,
        "Enslavement",
        ENCH,
        DIR_TARGET.union(SpellFlags::NOT_SELF),
        4,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::Pain,
        "Pain",
        NECRO,
        DIR_TARGET.union(SpellFlags::BATTLE),
        1,
        25,
        (6, 6),
    ),
    row(
        SpellId::VampiricDraining,
        "Vampiric Draining",
        NECRO,
        SpellFlags::DIR
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::BATTLE),
        3,
        200,
        (1, 1),
    ),
    row(
        SpellId::Freeze,
        "Freeze",
        ICE,
        SpellFlags::DIR
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::BATTLE),
        1,
        25,
        (1, 1),
    ),
    row(
        SpellId::Burn,
        "Burn",
        FIRE,
        SpellFlags::DIR
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::BATTLE),
        1,
        25,
        (1, 1),
    ),
    row(
        SpellId::StickyFlame,
        "Sticky Flame",
        CONJ.union(FIRE),
        DIR_TARGET,
        4,
        100,
        (5, 5),
    ),
    row(
        SpellId::DispelUndead,
        "Dispel Undead",
        NECRO,
        DIR_TARGET,
        4,
        100,
        (5, 5),
    ),
    row(
        SpellId::PoisonArrow,
        "Poison Arrow",
        CONJ.union(POISON),
        DIR_TARGET,
        6,
        200,
        (7, 7),
    ),
    row(
        SpellId::Disintegrate,
        "Disintegrate",
        TMUT,
        DIR_TARGET.union(SpellFlags::NOT_SELF),
        6,
        200,
        (6, 6),
    ),
    row(
        SpellId::ThrowIcicle,
        "Throw Icicle",
        CONJ.union(ICE),
        DIR_TARGET,
        4,
        100,
        (6, 6),
    ),
    row(
        SpellId::Airstrike,
        "Airstrike",
        AIR,
        SpellFlags::TARGET
            .union(SpellFlags::NOT_SELF)
            .union(SpellFlags::BATTLE),
        4,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::IgnitePoison,
        "Ignite Poison",
        FIRE.union(TMUT),
        SpellFlags::AREA.union(SpellFlags::BATTLE),
        6,
        200,
        NO_RANGE,
    ),
    row(
        SpellId::Shatter,
        "Shatter",
        TMUT.union(EARTH),
        SpellFlags::AREA,
        9,
        200,
        NO_RANGE,
    ),
    row(
        SpellId::StaticDischarge,
        "Static Discharge",
        CONJ.union(AIR),
        SpellFlags::AREA,
        4,
        200,
        NO_RANGE,
    ),
    row(
        SpellId::Corona,
        "Corona",
        ENCH,
        DIR_TARGET.union(SpellFlags::NOT_SELF),
        1,
        200,
        LOS_RANGE,
    ),
    SpellDescriptor {
        target_prompt: Some("Fragment what (e.g. a wall or monster)?"),
        ..row(
            SpellId::Fragmentation,
            "Lee's Rapid Deconstruction",
            TMUT.union(EARTH),
            SpellFlags::GRID,
            5,
            200,
            LOS_RANGE,
        )
    },
    row(
        SpellId::ChainLightning,
        "Chain Lightning",
        AIR.union(CONJ),
        SpellFlags::AREA,
        8,
        200,
        NO_RANGE,
    ),
    row(
        SpellId::Paralyse,
        "Paralyse",
        ENCH,
        DIR_TARGET.union(SpellFlags::MONSTER),
        4,
        200,
        LOS_RANGE,
    ),
    row(
        SpellId::Sleep,
        "Sleep",
        ENCH,
        DIR_TARGET.union(SpellFlags::NOT_SELF),
        5,
        200,
        LOS_RANGE,
    ),
    SpellDescriptor {
        noise_mod: -1,
        ..row(
            SpellId::DazzlingSpray,
            "Dazzling Spray",
            CONJ.union(ENCH),
            DIR_TARGET.union(SpellFlags::NOT_SELF),
            3,
            100,
            (6, 6),
        )
    },
];
