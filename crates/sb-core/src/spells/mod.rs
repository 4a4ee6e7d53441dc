//! Damage and area-effect spells
//!
//! Each entry point takes the world, the ambient RNG, the caster and a
//! power, and reports what happened in a [`SpellResult`]. None of them keep
//! state between casts.

mod chain;
mod direct;
mod discharge;
mod fragment;
mod ignite;
mod shatter;
mod spray;
mod storm;

pub use chain::{chain_lightning, chain_power_step};
pub use direct::{airstrike, burn, freeze, vampiric_drain};
pub use discharge::{discharge_continues, static_discharge};
pub use fragment::{FragmentBlast, fragment_target, fragmentation};
pub use ignite::ignite_poison;
pub use shatter::{shatter, shatter_dice, shatter_self_dice, shatter_wall_chance};
pub use spray::dazzling_spray;
pub use storm::{fire_storm, hellfire_burst};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use sb_rng::GameRng;

use crate::beam::{BeamOutcome, Prompt, player_fire, zap_bolt};
use crate::geom::Coord;
use crate::spell::SpellId;
use crate::world::{ActorId, LosMode, MapOracle, MonsterId, World};

/// How a cast ended
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SpellOutcome {
    #[default]
    Succeeded = 0,
    /// The caster backed out; no time passes
    Aborted = 1,
    /// Nothing to affect; the turn is still spent
    NoTarget = 2,
}

impl SpellOutcome {
    pub const fn takes_turn(&self) -> bool {
        !matches!(self, SpellOutcome::Aborted)
    }
}

/// Result of casting a spell
#[derive(Debug, Clone, Default)]
pub struct SpellResult {
    pub outcome: SpellOutcome,
    /// Messages to display
    pub messages: Vec<String>,
    /// Monsters killed
    pub killed: Vec<MonsterId>,
    /// Whether player died
    pub player_died: bool,
    pub noise: i32,
}

impl SpellResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.messages.push(msg.into());
        self
    }

    pub fn aborted() -> Self {
        Self {
            outcome: SpellOutcome::Aborted,
            ..Self::default()
        }
    }

    pub fn no_target(msg: impl Into<String>) -> Self {
        Self {
            outcome: SpellOutcome::NoTarget,
            ..Self::default()
        }
        .with_message(msg)
    }

    pub fn say(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Fold a bolt's outcome into this cast.
    pub fn absorb(&mut self, beam: BeamOutcome) {
        if beam.cancelled {
            self.outcome = SpellOutcome::Aborted;
        }
        self.messages.extend(beam.messages);
        self.killed.extend(beam.killed);
        self.player_died |= beam.player_died;
        self.noise = self.noise.max(beam.noise);
    }
}

/// Damage applied straight to an actor, outside any bolt. Handles death
/// and wakes the victim. Returns the damage taken.
pub(crate) fn harm(
    world: &mut World,
    result: &mut SpellResult,
    source: ActorId,
    target: ActorId,
    amount: i32,
) -> i32 {
    let Some(actor) = world.actor_mut(target) else {
        return 0;
    };
    let dealt = actor.hurt(amount.max(0));
    let alive = actor.alive();
    match target {
        ActorId::Player if !alive => {
            result.player_died = true;
            result.say("You die...");
        }
        ActorId::Monster(mid) if !alive => {
            if let Some(name) = world.kill_monster(mid, Some(source)) {
                if source.is_player() {
                    result.say(format!("You kill the {name}!"));
                } else {
                    result.say(format!("The {name} is killed!"));
                }
                result.killed.push(mid);
            }
        }
        ActorId::Monster(mid) => {
            if let Some(m) = world.monster_mut(mid) {
                m.alert();
                if dealt > 0 {
                    m.statuses.charmed = 0;
                }
            }
        }
        ActorId::Player => {}
    }
    dealt
}

/// "You" or "The orc", for the start of a sentence.
pub(crate) fn subject(world: &World, id: ActorId) -> String {
    match id {
        ActorId::Player => "You".to_string(),
        ActorId::Monster(_) => world
            .actor(id)
            .map_or_else(|| "Something".to_string(), |a| format!("The {}", a.name())),
    }
}

pub(crate) fn caster_pos(world: &World, caster: ActorId) -> Option<Coord> {
    world.actor(caster).filter(|a| a.alive()).map(|a| a.pos())
}

/// Cells within `radius` of `centre` that `centre` can see, row by row.
pub(crate) fn cells_in_view(world: &World, centre: Coord, radius: i32) -> Vec<Coord> {
    let mut cells = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let c = centre.offset(dx, dy);
            if world.in_bounds(c) && world.can_see(centre, c, LosMode::Normal) {
                cells.push(c);
            }
        }
    }
    cells
}

/// Cast `spell` at `target`. Directed bolts fly through the beam engine;
/// everything else dispatches to its own routine.
pub fn cast_spell(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    spell: SpellId,
    power: i32,
    target: Coord,
    prompt: &mut dyn Prompt,
) -> SpellResult {
    let Some(origin) = caster_pos(world, caster) else {
        return SpellResult::no_target("There is no one to cast that.");
    };
    tracing::debug!(?caster, %spell, power, %target, "casting");

    match spell {
        SpellId::ChainLightning => chain_lightning(world, rng, caster, power, prompt),
        SpellId::StaticDischarge => static_discharge(world, rng, caster, power),
        SpellId::Shatter => shatter(world, rng, caster, power),
        SpellId::Fragmentation => fragmentation(world, rng, caster, power, target),
        SpellId::IgnitePoison => ignite_poison(world, rng, caster, power, prompt),
        SpellId::FireStorm => fire_storm(world, rng, caster, power, target, prompt),
        SpellId::HellfireBurst => hellfire_burst(world, rng, caster, power, target),
        SpellId::VampiricDraining => vampiric_drain(world, rng, caster, power, target),
        SpellId::Freeze => freeze(world, rng, caster, power, target),
        SpellId::Burn => burn(world, rng, caster, power, target),
        SpellId::Airstrike => airstrike(world, rng, caster, power, target),
        SpellId::DazzlingSpray => dazzling_spray(world, rng, caster, power, target, prompt),
        _ => {
            let Some(mut bolt) = zap_bolt(spell, power, caster, origin, target, rng) else {
                return SpellResult::no_target("Nothing happens.");
            };
            let mut result = SpellResult::new();
            let outcome = if caster.is_player() {
                player_fire(&mut bolt, world, rng, prompt)
            } else {
                bolt.fire(world, rng)
            };
            result.absorb(outcome);
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::{AlwaysNo, AlwaysYes};
    use crate::world::{Attitude, Monster};

    #[test]
    fn test_outcome_turns() {
        assert!(SpellOutcome::Succeeded.takes_turn());
        assert!(SpellOutcome::NoTarget.takes_turn());
        assert!(!SpellOutcome::Aborted.takes_turn());
    }

    #[test]
    fn test_harm_kills_and_credits() {
        let mut world = World::from_ascii(&["@...."]);
        let rat = world.add_monster(Monster::new(MonsterId::NONE, "rat", Coord::new(2, 0), 3));
        let mut result = SpellResult::new();
        let dealt = harm(&mut world, &mut result, ActorId::Player, ActorId::Monster(rat), 10);
        assert_eq!(dealt, 3);
        assert_eq!(result.killed, vec![rat]);
        assert_eq!(result.messages, vec!["You kill the rat!".to_string()]);
    }

    #[test]
    fn test_harm_player_death() {
        let mut world = World::from_ascii(&["@...."]);
        let mut result = SpellResult::new();
        harm(&mut world, &mut result, ActorId::Player, ActorId::Player, 100);
        assert!(result.player_died);
    }

    #[test]
    fn test_cast_zap_spell() {
        let mut world = World::from_ascii(&["@......"]);
        let orc = world.add_monster(Monster::new(MonsterId::NONE, "orc", Coord::new(3, 0), 50));
        let mut rng = GameRng::new(8);
        let result = cast_spell(
            &mut world,
            &mut rng,
            ActorId::Player,
            SpellId::MagicDart,
            20,
            Coord::new(3, 0),
            &mut AlwaysYes,
        );
        assert_eq!(result.outcome, SpellOutcome::Succeeded);
        assert!(world.monster(orc).is_some_and(|m| m.hp < 50));
    }

    #[test]
    fn test_cast_aborted_through_ally() {
        let mut world = World::from_ascii(&["@......"]);
        world.add_monster(
            Monster::new(MonsterId::NONE, "dog", Coord::new(2, 0), 50)
                .with_attitude(Attitude::Friendly),
        );
        let mut rng = GameRng::new(8);
        let result = cast_spell(
            &mut world,
            &mut rng,
            ActorId::Player,
            SpellId::BoltOfFire,
            50,
            Coord::new(5, 0),
            &mut AlwaysNo,
        );
        assert_eq!(result.outcome, SpellOutcome::Aborted);
        assert!(result.messages.is_empty());
    }
}
