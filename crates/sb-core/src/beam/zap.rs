//! Bolt setups for the directed spells

use sb_rng::{DiceDef, GameRng, calc_dice};

use super::bolt::{AUTOMATIC_HIT, Bolt, TerrainInteraction};
use super::explosion::ExplosionSpec;
use super::flavour::BeamFlavour;
use crate::geom::Coord;
use crate::spell::{SpellId, SpellTable, spell_range};
use crate::world::ActorId;

/// Build the bolt `spell` fires at `power` from `origin` toward `target`.
/// Returns `None` for spells that are not a single bolt or blast.
pub fn zap_bolt(
    spell: SpellId,
    power: i32,
    caster: ActorId,
    origin: Coord,
    target: Coord,
    rng: &mut GameRng,
) -> Option<Bolt> {
    let p = power.max(0);
    let name = SpellTable::builtin().get(spell).name.to_lowercase();
    let make = |flavour| Bolt::new(name.clone(), flavour, origin, target);

    let bolt = match spell {
        SpellId::MagicDart => make(BeamFlavour::Magic).with_damage(DiceDef::new(1, 3 + p / 5)),
        SpellId::StickyFlame => make(BeamFlavour::StickyFlame)
            .with_damage(DiceDef::new(2, 3 + p / 12))
            .with_hit(11 + p / 10),
        SpellId::ThrowIcicle => make(BeamFlavour::Ice)
            .with_damage(calc_dice(3, 10 + p / 2, rng))
            .with_hit(9 + p / 12),
        SpellId::BoltOfMagma => make(BeamFlavour::Lava)
            .with_damage(calc_dice(4, 10 + 3 * p / 5, rng))
            .with_hit(8 + p / 25)
            .with_terrain(TerrainInteraction::Burn)
            .piercing(),
        SpellId::BoltOfFire => make(BeamFlavour::Fire)
            .with_damage(calc_dice(6, 18 + 2 * p / 3, rng))
            .with_hit(10 + p / 25)
            .with_terrain(TerrainInteraction::Burn)
            .piercing(),
        SpellId::BoltOfCold => make(BeamFlavour::Cold)
            .with_damage(calc_dice(6, 18 + 2 * p / 3, rng))
            .with_hit(10 + p / 25)
            .piercing(),
        SpellId::BoltOfDraining => make(BeamFlavour::NegativeEnergy)
            .with_damage(calc_dice(4, 15 + 3 * p / 5, rng))
            .with_hit(8 + p / 20)
            .piercing(),
        SpellId::PoisonArrow => make(BeamFlavour::PoisonArrow)
            .with_damage(calc_dice(4, 15 + p, rng))
            .with_hit(5 + p / 10),
        SpellId::LightningBolt => {
            let damage = calc_dice(1, 10 + 3 * p / 5, rng);
            let hit = 7 + rng.rn2(p) / 20;
            make(BeamFlavour::Electricity)
                .with_damage(damage)
                .with_hit(hit)
                .piercing()
        }
        SpellId::Disintegrate => make(BeamFlavour::Disintegration)
            .with_damage(calc_dice(3, 15 + 3 * p / 4, rng))
            .with_hit(30 + p / 10)
            .with_terrain(TerrainInteraction::Disintegrate),
        SpellId::Fireball => make(BeamFlavour::Fire)
            .with_damage(calc_dice(3, 10 + p / 2, rng))
            .with_hit(40)
            .with_explosion(ExplosionSpec::new(1)),
        SpellId::Dig => make(BeamFlavour::Digging)
            .with_terrain(TerrainInteraction::Dig)
            .with_power(p),
        SpellId::Pain => make(BeamFlavour::Pain).with_damage(DiceDef::new(1, 4 + p / 5)),
        SpellId::DispelUndead => {
            make(BeamFlavour::DispelUndead).with_damage(calc_dice(3, 20 + 3 * p / 4, rng))
        }
        SpellId::Slow => make(BeamFlavour::Slow),
        SpellId::Haste => make(BeamFlavour::Haste),
        SpellId::Paralyse => make(BeamFlavour::Paralysis),
        SpellId::Confuse => make(BeamFlavour::Confusion),
        SpellId::Invisibility => make(BeamFlavour::Invisibility),
        SpellId::TeleportOther => make(BeamFlavour::Teleport),
        SpellId::PolymorphOther => make(BeamFlavour::Polymorph),
        SpellId::Enslavement => make(BeamFlavour::Charm),
        SpellId::Sleep => make(BeamFlavour::Sleep),
        SpellId::Petrify => make(BeamFlavour::Petrify),
        SpellId::Corona => make(BeamFlavour::Corona),
        _ => return None,
    };

    let bolt = if bolt.is_enchantment() {
        bolt.with_power(p).with_hit(AUTOMATIC_HIT)
    } else {
        bolt
    };
    Some(bolt.with_range(spell_range(spell, p)).fired_by(caster))
}
