//! Firing bolts for real

use sb_rng::GameRng;

use super::affect::{AffectResult, RealPass};
use super::bolt::{Bolt, ExecutionMode};
use super::tracer::{TracerReport, mons_should_fire};
use super::walk::walk;
use crate::geom::Coord;
use crate::world::{ActorId, MonsterId, World};

/// Yes/no questions put to the player mid-action.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Answers yes to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysYes;

impl Prompt for AlwaysYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

/// Answers no to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysNo;

impl Prompt for AlwaysNo {
    fn confirm(&mut self, _question: &str) -> bool {
        false
    }
}

/// Result of firing a bolt
#[derive(Debug, Clone, Default)]
pub struct BeamOutcome {
    pub messages: Vec<String>,
    /// Monsters killed
    pub killed: Vec<MonsterId>,
    pub player_died: bool,
    /// The firer thought better of it; no time passes
    pub cancelled: bool,
    pub path: Vec<Coord>,
    pub end: Coord,
    /// Cells caught in the explosion, in the order they were hit
    pub blast: Vec<Coord>,
    pub noise: i32,
    pub hits: Vec<(ActorId, AffectResult)>,
    pub obvious_effect: bool,
}

impl BeamOutcome {
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.messages.push(msg.into());
        self
    }

    /// Result recorded for `target`'s first encounter with the bolt.
    pub fn result_for(&self, target: ActorId) -> Option<AffectResult> {
        self.hits
            .iter()
            .find(|(id, _)| *id == target)
            .map(|&(_, result)| result)
    }

    /// Fold another firing into this one, as multi-bolt spells do.
    pub fn absorb(&mut self, other: BeamOutcome) {
        self.messages.extend(other.messages);
        self.killed.extend(other.killed);
        self.player_died |= other.player_died;
        self.path.extend(other.path);
        self.end = other.end;
        self.blast.extend(other.blast);
        self.noise = self.noise.max(other.noise);
        self.hits.extend(other.hits);
        self.obvious_effect |= other.obvious_effect;
    }
}

impl Bolt {
    /// Fly the bolt, applying everything it does to the world.
    pub fn fire(&mut self, world: &mut World, rng: &mut GameRng) -> BeamOutcome {
        let range = self.roll_range(rng);
        self.fire_with_range(world, rng, range)
    }

    /// Total range for one firing: the base plus a roll over the band.
    pub fn roll_range(&self, rng: &mut GameRng) -> i32 {
        if self.range_band > 0 {
            self.range + rng.rn2(self.range_band + 1)
        } else {
            self.range
        }
    }

    /// Fire with a range already rolled, so a tracer can be flown over the
    /// same distance first.
    pub fn fire_with_range(
        &mut self,
        world: &mut World,
        rng: &mut GameRng,
        range: i32,
    ) -> BeamOutcome {
        if self.beam_cancelled {
            return BeamOutcome::cancelled();
        }
        self.mode = ExecutionMode::Real;
        let base = self.range;
        self.range = range;

        let mut pass = RealPass::new(world, rng);
        let blast = walk(self, &mut pass);
        self.range = base;

        tracing::debug!(
            bolt = %self.name,
            end = %self.pos,
            hits = pass.hits.len(),
            killed = pass.killed.len(),
            "bolt resolved"
        );

        BeamOutcome {
            messages: pass.messages,
            killed: pass.killed,
            player_died: pass.player_died,
            cancelled: false,
            path: self.path_taken.clone(),
            end: self.pos,
            blast,
            noise: pass.noise,
            hits: pass.hits,
            obvious_effect: self.obvious_effect,
        }
    }
}

/// Fire on the player's behalf, asking first if allies are in the way.
pub fn player_fire(
    bolt: &mut Bolt,
    world: &mut World,
    rng: &mut GameRng,
    prompt: &mut dyn Prompt,
) -> BeamOutcome {
    bolt.source.get_or_insert(ActorId::Player);
    let range = bolt.roll_range(rng);
    let report = bolt.trace_with_range(world, range);
    if report.friends_hurt() && !report.foe_info.dont_stop {
        let question = format!("Really fire {} through your allies?", bolt.name);
        if !prompt.confirm(&question) {
            bolt.beam_cancelled = true;
            tracing::debug!(bolt = %bolt.name, "player cancelled bolt");
            return BeamOutcome::cancelled();
        }
    }
    bolt.fire_with_range(world, rng, range)
}

/// Fire on a monster's behalf if its tracer says it is worth it. Returns
/// the report alongside the outcome so callers can see why it held back.
pub fn monster_fire(
    bolt: &mut Bolt,
    caster: MonsterId,
    world: &mut World,
    rng: &mut GameRng,
) -> (TracerReport, Option<BeamOutcome>) {
    bolt.source = Some(ActorId::Monster(caster));
    let range = bolt.roll_range(rng);
    let report = bolt.trace_with_range(world, range);
    let smart = world.monster(caster).is_some_and(|m| m.smart);
    if !mons_should_fire(&report, smart) {
        tracing::trace!(?caster, bolt = %bolt.name, "monster holds fire");
        return (report, None);
    }
    let outcome = bolt.fire_with_range(world, rng, range);
    (report, Some(outcome))
}
