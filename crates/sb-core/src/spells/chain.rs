//! Chain lightning

use sb_rng::{GameRng, calc_dice};

use super::{SpellOutcome, SpellResult, caster_pos};
use crate::beam::{BeamFlavour, Bolt, Prompt};
use crate::geom::Coord;
use crate::world::{Actor, ActorId, LosMode, MapOracle, World};

const ARC_RANGE: i32 = 8;
const THUNDER: i32 = 25;

/// Power left for the next arc.
pub fn chain_power_step(pow: i32, rng: &mut GameRng) -> i32 {
    pow - (8 + rng.rn2(13))
}

/// Pick where the next arc from `source` lands. Nearer targets usually
/// win; ties are broken uniformly.
fn next_arc(world: &World, rng: &mut GameRng, source: Coord) -> Option<Coord> {
    let mut min_dist = world.config.los_radius - 1;
    let mut target = None;
    let mut count = 0;

    let candidates: Vec<Coord> = world.monsters().filter(|m| m.hp > 0).map(|m| m.pos).collect();
    for pos in candidates {
        let dist = source.distance(pos);
        if dist == 0 {
            continue;
        }
        let dist = dist + rng.rn2(3) - 1;
        if dist > min_dist || !world.can_see(source, pos, LosMode::IgnoreTranslucent) {
            continue;
        }
        count += 1;
        if dist < min_dist {
            if !rng.one_in(10) {
                min_dist = dist;
                target = Some(pos);
                count = 0;
            }
        } else if target.is_none() || rng.one_in(count) {
            target = Some(pos);
        }
    }

    let you = world.player.pos;
    let dist = source.distance(you);
    if world.player.alive() && dist != 0 {
        let dist = dist + rng.rn2(3) - 1;
        if (target.is_none() || dist < min_dist || (dist == min_dist && rng.one_in(count + 1)))
            && world.can_see(source, you, LosMode::IgnoreTranslucent)
        {
            target = Some(you);
        }
    }
    target
}

/// Lightning that leaps from target to target, weakening as it goes.
pub fn chain_lightning(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    prompt: &mut dyn Prompt,
) -> SpellResult {
    let Some(start) = caster_pos(world, caster) else {
        return SpellResult::no_target("The lightning grounds out.");
    };
    let mut result = SpellResult::new();
    let mut source = start;
    let mut pow = power;
    let mut arcs = 0;

    while pow > 0 {
        let Some(target) = next_arc(world, rng, source) else {
            result.say("The lightning grounds out.");
            break;
        };

        if caster.is_player()
            && let Some(ally) = world.actor_at(target).and_then(|id| world.actor(id))
            && !ally.is_player()
            && ally.attitude().is_friendly()
        {
            let question = format!("Really let the lightning arc into the {}?", ally.name());
            if !prompt.confirm(&question) {
                if arcs == 0 {
                    return SpellResult::aborted();
                }
                break;
            }
        }

        if !world.can_see(start, target, LosMode::IgnoreTranslucent) {
            pow = pow / 2 + 1;
        }
        let mut damage = calc_dice(5, 12 + pow * 2 / 3, rng);
        if world.actor_at(target) == Some(caster) {
            damage.num = (damage.num / 2).max(1);
            damage.size = (damage.size / 2).max(3);
        }
        tracing::trace!(%source, %target, pow, %damage, "lightning arc");

        let mut arc = Bolt::new("lightning arc", BeamFlavour::Electricity, source, target)
            .with_damage(damage)
            .with_range(ARC_RANGE)
            .fired_by(caster);
        result.absorb(arc.fire(world, rng));
        result.noise = result.noise.max(THUNDER);
        arcs += 1;

        source = target;
        pow = chain_power_step(pow, rng);
    }

    if arcs == 0 {
        result.outcome = SpellOutcome::NoTarget;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::AlwaysYes;
    use crate::world::{Monster, MonsterId};

    #[test]
    fn test_power_step_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let next = chain_power_step(100, &mut rng);
            assert!((80..=92).contains(&next));
        }
    }

    #[test]
    fn test_grounds_out_alone() {
        let mut world = World::from_ascii(&["@......", "......."]);
        let mut rng = GameRng::new(1);
        let result = chain_lightning(&mut world, &mut rng, ActorId::Player, 100, &mut AlwaysYes);
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
        assert_eq!(result.messages, vec!["The lightning grounds out.".to_string()]);
        assert_eq!(world.player.hp, world.player.max_hp);
    }

    #[test]
    fn test_low_power_still_arcs_once() {
        let mut world = World::from_ascii(&["@......"]);
        let rat = world.add_monster(Monster::new(MonsterId::NONE, "rat", Coord::new(2, 0), 100));
        let mut rng = GameRng::new(1);
        let result = chain_lightning(&mut world, &mut rng, ActorId::Player, 9, &mut AlwaysYes);
        assert_eq!(result.outcome, SpellOutcome::Succeeded);
        assert!(world.monster(rat).is_some_and(|m| m.hp < 100));
    }

    #[test]
    fn test_arcs_hit_monster() {
        let hit = (0..10).any(|seed| {
            let mut world = World::from_ascii(&["@......"]);
            let orc =
                world.add_monster(Monster::new(MonsterId::NONE, "orc", Coord::new(3, 0), 500));
            let mut rng = GameRng::new(seed);
            let result =
                chain_lightning(&mut world, &mut rng, ActorId::Player, 30, &mut AlwaysYes);
            result.outcome == SpellOutcome::Succeeded
                && world.monster(orc).is_some_and(|m| m.hp < 500)
        });
        assert!(hit);
    }
}
