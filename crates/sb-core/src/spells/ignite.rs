//! Ignite poison

use sb_rng::GameRng;

use super::{SpellResult, caster_pos, cells_in_view, harm, subject};
use crate::beam::Prompt;
use crate::geom::Coord;
use crate::resist::{Element, resist_adjust};
use crate::world::{Actor, ActorId, CloudKind, World};

/// Whether igniting `c` would burn something: poisonous items, a poisonous
/// cloud, or a poisoned actor.
fn has_poison(world: &World, c: Coord) -> bool {
    world
        .items
        .items_at(c)
        .into_iter()
        .filter_map(|id| world.items.get(id))
        .any(|item| item.poison_strength() > 0)
        || world.clouds.at(c).is_some_and(|cloud| cloud.kind.is_poisonous())
}

fn caster_at_risk(world: &World, caster: ActorId, centre: Coord) -> bool {
    let poisoned = world
        .actor(caster)
        .is_some_and(|a| a.statuses().is_poisoned());
    poisoned || has_poison(world, centre) || centre.neighbours().any(|c| has_poison(world, c))
}

/// Burn the poisonous items on `c` into a fire cloud. Returns the strength
/// consumed.
fn burn_items(world: &mut World, rng: &mut GameRng, caster: ActorId, c: Coord) -> i32 {
    let mut strength = 0;
    for id in world.items.items_at(c) {
        let poison = world.items.get(id).map_or(0, |item| item.poison_strength());
        if poison > 0 {
            world.items.remove(id);
            strength += poison;
        }
    }
    if strength > 0 {
        let duration = strength + rng.dice(3, strength / 4);
        world.clouds.place(c, CloudKind::Fire, duration, Some(caster));
    }
    strength
}

fn burn_monster(
    world: &mut World,
    rng: &mut GameRng,
    result: &mut SpellResult,
    caster: ActorId,
    target: ActorId,
    pow: i32,
) -> bool {
    let Some(mid) = target.monster() else {
        return false;
    };
    let Some((degree, tier)) = world.monster(mid).map(|m| {
        let innate = if m.poisonous > 0 { 3 } else { 0 };
        (m.statuses.poison + innate, m.resistance(Element::Fire))
    }) else {
        return false;
    };
    if degree <= 0 {
        return false;
    }
    let roll = rng.dice(degree, 5 + pow / 7);
    let damage = resist_adjust(roll, Element::Fire, tier, false);
    if damage <= 0 {
        return false;
    }
    result.say(format!("{} seems to burn from within!", subject(world, target)));
    harm(world, result, caster, target, damage);
    if let Some(m) = world.monster_mut(mid) {
        m.statuses.poison = 0;
    }
    true
}

fn burn_player(world: &mut World, rng: &mut GameRng, result: &mut SpellResult, caster: ActorId) -> bool {
    let degree = world.player.statuses.poison;
    if degree <= 0 {
        return false;
    }
    let mut damage = rng.dice(degree, 6);
    let tier = world.player.resistance(Element::Fire);
    if tier > 0 {
        damage /= 3;
    } else if tier < 0 {
        damage *= 3;
    }
    let msg = if damage > world.player.hp / 2 {
        "You feel like your blood is boiling!"
    } else if damage > 10 {
        "The poison in your system burns terribly!"
    } else {
        "The poison in your system burns!"
    };
    result.say(msg);
    harm(world, result, caster, ActorId::Player, damage);
    world.player.statuses.poison = 0;
    true
}

/// Set every poison in view alight: poisoned creatures burn from within,
/// poisonous items and clouds turn to flame.
pub fn ignite_poison(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    prompt: &mut dyn Prompt,
) -> SpellResult {
    let Some(centre) = caster_pos(world, caster) else {
        return SpellResult::new();
    };
    if caster.is_player()
        && caster_at_risk(world, caster, centre)
        && !prompt.confirm("You are close to poison that will burn. Really ignite it?")
    {
        return SpellResult::aborted();
    }

    let mut result = SpellResult::new();
    let cells = cells_in_view(world, centre, world.config.los_radius);
    let mut items_burnt = 0;
    let mut clouds_lit = 0;
    let mut bodies = 0;

    for &c in &cells {
        items_burnt += burn_items(world, rng, caster, c);

        if let Some(cloud) = world.clouds.at(c).copied()
            && cloud.kind.is_poisonous()
        {
            world.clouds.place(c, CloudKind::Fire, cloud.duration, Some(caster));
            clouds_lit += 1;
        }

        match world.actor_at(c) {
            Some(ActorId::Player) => {
                if burn_player(world, rng, &mut result, caster) {
                    bodies += 1;
                }
            }
            Some(id) if id != caster => {
                if burn_monster(world, rng, &mut result, caster, id, power) {
                    bodies += 1;
                }
            }
            _ => {}
        }
    }

    if items_burnt > 0 || clouds_lit > 0 {
        result.say("The poison bursts into flame!");
    }
    if items_burnt == 0 && clouds_lit == 0 && bodies == 0 {
        result.say("You feel a distinct lack of poison nearby.");
    }
    result.noise = 4;
    tracing::debug!(items_burnt, clouds_lit, bodies, "ignite poison");
    result
}
