//! Static discharge

use sb_rng::GameRng;

use super::{SpellResult, caster_pos, harm};
use crate::geom::Coord;
use crate::resist::{Element, resist_adjust};
use crate::world::{ActorId, World};

/// Whether a discharge arc jumps again, and with what power.
pub fn discharge_continues(pow: i32, rng: &mut GameRng) -> Option<i32> {
    if (pow >= 10 && !rng.one_in(3)) || (pow >= 3 && rng.one_in(10)) {
        let divisor = if rng.coinflip() { 2 } else { 3 };
        Some(pow / divisor)
    } else {
        None
    }
}

/// Arc to up to `count` random actors next to `centre`.
fn arc_from(
    world: &mut World,
    rng: &mut GameRng,
    result: &mut SpellResult,
    caster: ActorId,
    centre: Coord,
    pow: i32,
    count: i32,
) -> i32 {
    let mut cells: Vec<Coord> = centre
        .neighbours()
        .filter(|&c| world.actor_at(c).is_some())
        .collect();
    let mut total = 0;
    for _ in 0..count {
        if cells.is_empty() {
            break;
        }
        let pick = rng.rn2(cells.len() as i32) as usize;
        let cell = cells.swap_remove(pick);
        total += strike(world, rng, result, caster, cell, pow);
    }
    total
}

fn strike(
    world: &mut World,
    rng: &mut GameRng,
    result: &mut SpellResult,
    caster: ActorId,
    cell: Coord,
    pow: i32,
) -> i32 {
    let Some(target) = world.actor_at(cell) else {
        return 0;
    };
    let Some((tier, flies)) = world
        .actor(target)
        .map(|a| (a.resistance(Element::Electricity), a.flies()))
    else {
        return 0;
    };

    let mut damage = 0;
    if target.is_player() {
        result.say("You are struck by lightning.");
        let roll = 3 + rng.rn2(5 + pow / 10);
        damage = resist_adjust(roll, Element::Electricity, tier, true);
        if flies {
            damage /= 2;
        }
        damage = harm(world, result, caster, target, damage);
    } else if tier > 0 || flies {
        return 0;
    } else {
        let roll = 3 + rng.rn2(5 + pow / 10);
        let adjusted = resist_adjust(roll, Element::Electricity, tier, false);
        if adjusted > 0 {
            result.say(format!("{} is struck by lightning.", super::subject(world, target)));
            damage = harm(world, result, caster, target, adjusted);
        }
    }

    if let Some(next) = discharge_continues(pow, rng) {
        result.say("The lightning arcs!");
        damage += arc_from(world, rng, result, caster, cell, next, 1);
    } else if damage > 0 {
        result.say("The lightning grounds out.");
    }
    damage
}

/// Electricity arcing from the caster to whoever stands beside them.
pub fn static_discharge(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
) -> SpellResult {
    let mut result = SpellResult::new();
    let Some(centre) = caster_pos(world, caster) else {
        return result;
    };
    let arcs = 1 + rng.rn2(1 + power / 25);
    let total = arc_from(world, rng, &mut result, caster, centre, power, arcs);
    tracing::debug!(arcs, total, "static discharge");

    if total == 0 {
        result.say("The air crackles harmlessly.");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Monster, MonsterId, Resists};

    #[test]
    fn test_decay_terminates() {
        let mut rng = GameRng::new(21);
        for start in [1, 3, 10, 50, 200, 1000] {
            let mut pow = start;
            let mut steps = 0;
            while let Some(next) = discharge_continues(pow, &mut rng) {
                assert!(next < pow);
                pow = next;
                steps += 1;
            }
            assert!(steps <= 16, "power {start} arced {steps} times");
        }
    }

    #[test]
    fn test_weak_power_never_arcs() {
        let mut rng = GameRng::new(5);
        for pow in 0..3 {
            for _ in 0..50 {
                assert_eq!(discharge_continues(pow, &mut rng), None);
            }
        }
    }

    #[test]
    fn test_nothing_adjacent_crackles() {
        let mut world = World::from_ascii(&["@...."]);
        let mut rng = GameRng::new(2);
        let result = static_discharge(&mut world, &mut rng, ActorId::Player, 100);
        assert_eq!(result.messages, vec!["The air crackles harmlessly.".to_string()]);
    }

    #[test]
    fn test_insulated_neighbour_spared() {
        let mut world = World::from_ascii(&["@...."]);
        let eel = world.add_monster(
            Monster::new(MonsterId::NONE, "eel", Coord::new(1, 0), 20).with_resists(Resists {
                elec: 1,
                ..Default::default()
            }),
        );
        let mut rng = GameRng::new(2);
        static_discharge(&mut world, &mut rng, ActorId::Player, 100);
        assert_eq!(world.monster(eel).map(|m| m.hp), Some(20));
    }

    #[test]
    fn test_neighbour_struck() {
        let mut world = World::from_ascii(&["@...."]);
        let rat = world.add_monster(Monster::new(MonsterId::NONE, "rat", Coord::new(1, 0), 200));
        let mut rng = GameRng::new(2);
        let result = static_discharge(&mut world, &mut rng, ActorId::Player, 50);
        assert!(world.monster(rat).is_some_and(|m| m.hp < 200));
        assert!(result.messages.iter().any(|m| m == "The rat is struck by lightning."));
    }
}
