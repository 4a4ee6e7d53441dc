//! Fire storm and hellfire burst

use sb_rng::{GameRng, calc_dice};

use super::{SpellResult, caster_pos};
use crate::beam::{BeamFlavour, Bolt, ExplosionSpec, Prompt, monster_fire, player_fire};
use crate::geom::Coord;
use crate::world::{ActorId, CloudKind, LosMode, MapOracle, World};

/// A great blast of fire at `target` that leaves flames behind.
pub fn fire_storm(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
    prompt: &mut dyn Prompt,
) -> SpellResult {
    let Some(origin) = caster_pos(world, caster) else {
        return SpellResult::new();
    };
    if !world.can_see(origin, target, LosMode::Normal) {
        return SpellResult::no_target("You can't see there.");
    }

    let radius = 2 + i32::from(rng.rn2(power) > 75);
    let damage = calc_dice(8, 5 + power, rng);
    let spec = ExplosionSpec::new(radius).leaving(CloudKind::Fire);
    let mut bolt = Bolt::explosion("great blast of fire", BeamFlavour::Lava, target, spec)
        .with_damage(damage)
        .fired_by(caster);
    tracing::debug!(%target, radius, %damage, "fire storm");

    let mut result = SpellResult::new();
    match caster {
        ActorId::Player => {
            result.absorb(player_fire(&mut bolt, world, rng, prompt));
        }
        ActorId::Monster(mid) => {
            let (_, outcome) = monster_fire(&mut bolt, mid, world, rng);
            match outcome {
                Some(outcome) => result.absorb(outcome),
                None => return SpellResult::aborted(),
            }
        }
    }
    result
}

/// A small burst of hellfire around `target`.
pub fn hellfire_burst(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    let damage = calc_dice(3, 3 + power / 2, rng);
    let mut bolt = Bolt::explosion(
        "burst of hellfire",
        BeamFlavour::Hellfire,
        target,
        ExplosionSpec::new(1),
    )
    .with_damage(damage)
    .fired_by(caster);
    let mut result = SpellResult::new();
    result.absorb(bolt.fire(world, rng));
    result
}
