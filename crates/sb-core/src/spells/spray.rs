//! Dazzling spray

use sb_rng::GameRng;

use super::{SpellResult, caster_pos};
use crate::beam::{BeamFlavour, Bolt, Prompt};
use crate::geom::Coord;
use crate::spell::{SpellId, spell_range};
use crate::world::{ActorId, World};

/// Aim points for the three rays: straight at the target, then one to
/// either side, all pushed out to full range.
fn fan(origin: Coord, target: Coord, range: i32) -> [Coord; 3] {
    let d = target - origin;
    let dist = origin.distance(target).max(1);
    let centre = origin.offset(d.x * range / dist, d.y * range / dist);
    let side = (range / 3).max(1);
    let (px, py) = (-d.y * side / dist, d.x * side / dist);
    [centre, centre.offset(px, py), centre.offset(-px, -py)]
}

/// One ray of the spray. Each stops at the first body it dazzles.
fn dazzle_ray(origin: Coord, aim: Coord, power: i32, range: i32, caster: ActorId) -> Bolt {
    Bolt::new("spray of dazzling light", BeamFlavour::Confusion, origin, aim)
        .with_power(power)
        .with_range(range)
        .fired_by(caster)
}

/// Three rays of light fanned toward `target`, confusing whatever they
/// pass through.
pub fn dazzling_spray(
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
    if origin == target {
        return SpellResult::no_target("There is nothing to aim at.");
    }
    let range = spell_range(SpellId::DazzlingSpray, power);

    let mut rays: Vec<Bolt> = fan(origin, target, range)
        .into_iter()
        .map(|aim| dazzle_ray(origin, aim, power, range, caster))
        .collect();

    let reports: Vec<_> = rays.iter().map(|ray| ray.trace(world)).collect();
    let anyone = reports
        .iter()
        .flat_map(|r| r.path.iter())
        .any(|&c| world.monster_at(c).is_some());
    if !anyone {
        return SpellResult::no_target("There is nothing to aim at.");
    }
    if caster.is_player()
        && reports.iter().any(|r| r.friends_hurt())
        && !prompt.confirm("Really dazzle your allies?")
    {
        return SpellResult::aborted();
    }

    let mut result = SpellResult::new();
    for ray in &mut rays {
        result.absorb(ray.fire(world, rng));
    }
    tracing::debug!(%target, range, "dazzling spray");
    result
}
