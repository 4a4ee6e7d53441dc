//! Touch and single-target spells that need no bolt

use sb_rng::{DiceDef, GameRng};

use super::{SpellResult, caster_pos, harm, subject};
use crate::geom::Coord;
use crate::resist::{AcRule, Element, apply_armour, resist_adjust};
use crate::world::{ActorId, LosMode, MapOracle, World};

/// The actor standing next to the caster at `target`.
fn touched(world: &World, caster: ActorId, target: Coord) -> Result<ActorId, SpellResult> {
    let Some(origin) = caster_pos(world, caster) else {
        return Err(SpellResult::new());
    };
    if !origin.is_adjacent(target) {
        return Err(SpellResult::no_target("That is beyond your reach."));
    }
    world
        .actor_at(target)
        .filter(|&id| id != caster)
        .ok_or_else(|| SpellResult::no_target("There is nothing there."))
}

/// Object form of [`subject`]: "you" or "the orc".
fn object(world: &World, id: ActorId) -> String {
    match id {
        ActorId::Player => "you".to_string(),
        ActorId::Monster(_) => subject(world, id).replacen("The", "the", 1),
    }
}

/// Draw life out of an adjacent living creature into the caster.
pub fn vampiric_drain(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    let victim = match touched(world, caster, target) {
        Ok(id) => id,
        Err(result) => return result,
    };
    let Some((living, hp)) = world
        .actor(victim)
        .map(|a| (a.holiness().is_living(), a.hit_points()))
    else {
        return SpellResult::new();
    };

    let mut result = SpellResult::new();
    if !living {
        result.say(format!("{} is unaffected.", subject(world, victim)));
        return result;
    }

    let damage = (3 + rng.random2avg(9, 2) + rng.rn2(power) / 7).min(hp);
    let dealt = harm(world, &mut result, caster, victim, damage);
    let healed = world
        .actor_mut(caster)
        .map_or(0, |a| a.heal(dealt / 2));
    tracing::debug!(?victim, dealt, healed, "vampiric drain");
    if healed > 0 {
        if caster.is_player() {
            result.say("You feel life coursing into your body.");
        } else {
            result.say(format!("{} is healed.", subject(world, caster)));
        }
    }
    result
}

fn elemental_touch(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
    element: Element,
) -> SpellResult {
    let victim = match touched(world, caster, target) {
        Ok(id) => id,
        Err(result) => return result,
    };
    let Some((tier, ac)) = world
        .actor(victim)
        .map(|a| (a.resistance(element), a.armour_class()))
    else {
        return SpellResult::new();
    };

    let roll = DiceDef::new(1, 3 + power.min(25) / 3).roll(rng);
    let adjusted = resist_adjust(roll, element, tier, victim.is_player());
    let damage = apply_armour(ac, adjusted, AcRule::Normal, rng);

    let mut result = SpellResult::new();
    let verb = if element == Element::Cold { "freeze" } else { "burn" };
    let msg = match caster {
        ActorId::Player => format!("You {verb} {}.", object(world, victim)),
        ActorId::Monster(_) => {
            format!("{} {verb}s {}.", subject(world, caster), object(world, victim))
        }
    };
    result.say(msg);
    harm(world, &mut result, caster, victim, damage);

    if element == Element::Cold
        && let Some(mid) = victim.monster()
        && let Some(m) = world.monster_mut(mid)
        && m.cold_blooded
        && rng.coinflip()
    {
        let turns = 8 + rng.rn2(1 + power / 4);
        m.statuses.slow = m.statuses.slow.max(turns);
        let name = m.name.clone();
        result.say(format!("The {name} seems to slow down."));
    }
    result
}

/// Chill an adjacent creature.
pub fn freeze(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    elemental_touch(world, rng, caster, power, target, Element::Cold)
}

/// Scorch an adjacent creature.
pub fn burn(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    elemental_touch(world, rng, caster, power, target, Element::Fire)
}

/// Twist the air around a visible target into a sudden blow. Flyers are
/// thrown about worst.
pub fn airstrike(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    let Some(origin) = caster_pos(world, caster) else {
        return SpellResult::new();
    };
    let victim = world
        .actor_at(target)
        .filter(|&id| id != caster && world.can_see(origin, target, LosMode::Normal));
    let Some(victim) = victim else {
        return SpellResult::no_target("There is nothing there to strike.");
    };
    let Some((flies, ac)) = world.actor(victim).map(|a| (a.flies(), a.armour_class())) else {
        return SpellResult::new();
    };

    let spread = rng.rn2(4) + rng.rn2(power) / 6 + rng.rn2(power) / 7;
    let mut damage = 8 + rng.rn2(spread);
    if flies {
        damage = damage * 3 / 2;
    }
    damage = (damage - rng.rn2(1 + ac)).max(0);

    let mut result = SpellResult::new();
    result.say(format!(
        "The air twists around and strikes {}!",
        object(world, victim)
    ));
    harm(world, &mut result, caster, victim, damage);
    result.noise = 4;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::SpellOutcome;
    use crate::world::{Holiness, Monster, MonsterId, Resists};

    fn one_foe(at: Coord, monster: impl FnOnce(Monster) -> Monster) -> (World, MonsterId) {
        let mut world = World::from_ascii(&["@......", "......."]);
        let id = world.add_monster(monster(Monster::new(MonsterId::NONE, "orc", at, 100)));
        (world, id)
    }

    #[test]
    fn test_drain_heals_caster() {
        let (mut world, orc) = one_foe(Coord::new(1, 0), |m| m);
        world.player.hp = 10;
        let mut rng = GameRng::new(9);
        let result = vampiric_drain(&mut world, &mut rng, ActorId::Player, 50, Coord::new(1, 0));
        let lost = 100 - world.monster(orc).map_or(0, |m| m.hp);
        assert!(lost >= 3);
        assert_eq!(world.player.hp, 10 + lost / 2);
        assert!(result.messages.iter().any(|m| m.contains("life coursing")));
    }

    #[test]
    fn test_drain_capped_by_victim_hp() {
        let (mut world, orc) = one_foe(Coord::new(1, 0), |mut m| {
            m.hp = 2;
            m
        });
        world.player.hp = 10;
        let mut rng = GameRng::new(9);
        let result = vampiric_drain(&mut world, &mut rng, ActorId::Player, 50, Coord::new(1, 0));
        assert_eq!(result.killed, vec![orc]);
        assert_eq!(world.player.hp, 11);
    }

    #[test]
    fn test_drain_undead_unaffected() {
        let (mut world, zombie) =
            one_foe(Coord::new(1, 0), |m| m.with_holiness(Holiness::Undead));
        let mut rng = GameRng::new(9);
        let result = vampiric_drain(&mut world, &mut rng, ActorId::Player, 50, Coord::new(1, 0));
        assert_eq!(world.monster(zombie).map(|m| m.hp), Some(100));
        assert_eq!(result.messages, vec!["The orc is unaffected.".to_string()]);
    }

    #[test]
    fn test_touch_needs_adjacent_target() {
        let (mut world, _) = one_foe(Coord::new(3, 0), |m| m);
        let mut rng = GameRng::new(9);
        let result = freeze(&mut world, &mut rng, ActorId::Player, 50, Coord::new(3, 0));
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
        let result = burn(&mut world, &mut rng, ActorId::Player, 50, Coord::new(1, 1));
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
    }

    #[test]
    fn test_burn_respects_resistance() {
        let (mut world, orc) = one_foe(Coord::new(1, 1), |m| {
            m.with_resists(Resists {
                fire: 3,
                ..Default::default()
            })
        });
        let mut rng = GameRng::new(9);
        let result = burn(&mut world, &mut rng, ActorId::Player, 50, Coord::new(1, 1));
        assert_eq!(world.monster(orc).map(|m| m.hp), Some(100));
        assert_eq!(result.messages[0], "You burn the orc.");
    }

    #[test]
    fn test_freeze_damage_bounds() {
        for seed in 0..20 {
            let (mut world, orc) = one_foe(Coord::new(1, 0), |m| m);
            let mut rng = GameRng::new(seed);
            freeze(&mut world, &mut rng, ActorId::Player, 100, Coord::new(1, 0));
            let lost = 100 - world.monster(orc).map_or(0, |m| m.hp);
            assert!((1..=11).contains(&lost));
        }
    }

    #[test]
    fn test_freeze_can_slow_cold_blooded() {
        let slowed = (0..20).any(|seed| {
            let (mut world, lizard) = one_foe(Coord::new(1, 0), |mut m| {
                m.cold_blooded = true;
                m
            });
            let mut rng = GameRng::new(seed);
            freeze(&mut world, &mut rng, ActorId::Player, 40, Coord::new(1, 0));
            world.monster(lizard).is_some_and(|m| m.statuses.slow > 0)
        });
        assert!(slowed);
    }

    #[test]
    fn test_airstrike_reaches_distant_target() {
        let (mut world, orc) = one_foe(Coord::new(5, 1), |m| m);
        let mut rng = GameRng::new(9);
        let result = airstrike(&mut world, &mut rng, ActorId::Player, 60, Coord::new(5, 1));
        assert_eq!(result.outcome, SpellOutcome::Succeeded);
        assert!(world.monster(orc).is_some_and(|m| m.hp <= 92));
    }

    #[test]
    fn test_airstrike_needs_a_target() {
        let mut world = World::from_ascii(&["@......"]);
        let mut rng = GameRng::new(9);
        let result = airstrike(&mut world, &mut rng, ActorId::Player, 60, Coord::new(5, 0));
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
    }
}
