//! Dry-run passes
//!
//! A tracer flies a throwaway copy of the bolt over a shared borrow of the
//! world, tallying who would be hit on each side. Monsters use the tally to
//! decide whether to fire; the player gets asked before hurting friends.

use serde::{Deserialize, Serialize};

use super::affect::AffectResult;
use super::bolt::{Bolt, ExecutionMode};
use super::walk::{BeamPass, WallOutcome, firer_side, redirect, walk};
use crate::geom::Coord;
use crate::resist::expected_after_armour;
use crate::world::{Actor, ActorId, Reflection, World};

/// Tally for one side of a tracer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TracerInfo {
    /// Actors the bolt would reach
    pub count: i32,
    /// Damage it would do, or hit dice for enchantments
    pub power: i32,
    pub hurt: i32,
    pub helped: i32,
    /// Fire regardless of what the tally says
    pub dont_stop: bool,
}

/// Everything a tracer learned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracerReport {
    pub foe_info: TracerInfo,
    pub friend_info: TracerInfo,
    pub path: Vec<Coord>,
    pub end: Coord,
    pub blast: Vec<Coord>,
    /// Share of power, in percent, that must land on foes
    pub foe_ratio: i32,
}

impl TracerReport {
    pub fn friends_hurt(&self) -> bool {
        self.friend_info.hurt > 0
    }
}

/// Whether a monster should loose a bolt given its tracer report.
pub fn mons_should_fire(report: &TracerReport, smart: bool) -> bool {
    if report.foe_info.dont_stop {
        return true;
    }
    if report.foe_info.count == 0 {
        return false;
    }
    if !smart || report.friend_info.count == 0 {
        return true;
    }
    let total = report.foe_info.power + report.friend_info.power;
    report.foe_info.power >= report.foe_ratio * total / 100
}

struct TracerPass<'a> {
    world: &'a World,
}

impl TracerPass<'_> {
    fn expected_power(&self, bolt: &Bolt, actor: &dyn Actor) -> i32 {
        if bolt.is_enchantment() {
            return actor.hit_dice().max(1);
        }
        let raw = bolt.resist_damage(actor, bolt.damage.expected());
        expected_after_armour(
            actor.armour_class(),
            raw,
            bolt.ac_rule,
            self.world.config.proportional_ac_pass_permille,
        )
    }
}

impl BeamPass for TracerPass<'_> {
    fn world(&self) -> &World {
        self.world
    }

    fn wall(&mut self, _bolt: &mut Bolt, _c: Coord) -> WallOutcome {
        WallOutcome::Blocked
    }

    fn actor(&mut self, bolt: &mut Bolt, target: ActorId) -> AffectResult {
        let world = self.world;
        let Some(actor) = world.actor(target) else {
            return AffectResult::Ignored;
        };
        if bolt.times_hit(target) >= world.config.max_hits_per_target {
            return AffectResult::Ignored;
        }
        if bolt.is_harmless_to(actor) {
            bolt.record_hit(target);
            return AffectResult::Unaffected;
        }
        if let Some(source) = bolt.source
            && source != target
            && actor.is_invisible()
            && !world.can_perceive(source, target)
        {
            return AffectResult::Ignored;
        }
        // Only sure-fire reflection is predictable.
        if bolt.reflectable
            && !bolt.in_explosion_phase
            && actor.reflection() == Reflection::Always
            && bolt.reflections < world.config.max_reflections
        {
            let toward = redirect(bolt, world, target, None);
            return AffectResult::Reflected { toward };
        }

        let power = self.expected_power(bolt, actor);
        let friendly = firer_side(world, bolt.source)
            .is_some_and(|side| actor.attitude().is_aligned_with(side));
        let helpful = bolt.is_helpful();
        let info = if friendly {
            &mut bolt.friend_info
        } else {
            &mut bolt.foe_info
        };
        info.count += 1;
        info.power += power;
        if helpful {
            info.helped += 1;
        } else {
            info.hurt += 1;
        }
        bolt.record_hit(target);
        AffectResult::Hit { damage: power }
    }

    fn hit_range(&mut self, bolt: &Bolt) -> Option<i32> {
        bolt.range_used_on_hit(None)
    }
}

impl Bolt {
    /// Fly a copy of this bolt without touching anything, assuming the
    /// longest range the band allows.
    pub fn trace(&self, world: &World) -> TracerReport {
        self.trace_with_range(world, self.range + self.range_band)
    }

    /// Fly a copy over exactly `range` cells, as a real firing with that
    /// rolled range would.
    pub fn trace_with_range(&self, world: &World, range: i32) -> TracerReport {
        let mut copy = self.clone();
        copy.mode = ExecutionMode::Tracer;
        copy.range = range;
        let mut pass = TracerPass { world };
        let blast = walk(&mut copy, &mut pass);

        let summoned = self
            .source
            .and_then(|id| id.monster())
            .and_then(|id| world.monster(id))
            .is_some_and(|m| m.summoned);
        let foe_ratio = if summoned {
            world.config.summoned_foe_ratio
        } else {
            world.config.foe_ratio
        };

        TracerReport {
            foe_info: copy.foe_info,
            friend_info: copy.friend_info,
            path: copy.path_taken,
            end: copy.pos,
            blast,
            foe_ratio,
        }
    }
}
