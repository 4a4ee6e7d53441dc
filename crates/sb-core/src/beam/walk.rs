//! Bolt travel shared by tracer and real passes
//!
//! The walker owns the geometry: stepping along the ray, bouncing, range
//! accounting, explosion triggers and stop conditions. Everything that
//! depends on whether the pass is a dry run goes through [`BeamPass`].

use super::affect::AffectResult;
use super::bolt::{Bolt, TargetingMode};
use super::explosion::affected_cells;
use crate::geom::Coord;
use crate::world::{ActorId, Attitude, MapOracle, Ray, World};

/// What a pass made of a solid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WallOutcome {
    /// The wall is gone and the bolt carries on.
    Open,
    /// Still solid.
    Blocked,
    /// The wall was destroyed and the bolt spent itself doing it.
    Consumed,
}

pub(crate) trait BeamPass {
    fn world(&self) -> &World;

    /// The bolt ran into a solid cell.
    fn wall(&mut self, bolt: &mut Bolt, c: Coord) -> WallOutcome;

    /// The bolt reached an actor.
    fn actor(&mut self, bolt: &mut Bolt, target: ActorId) -> AffectResult;

    /// Range burned by a hit; `None` stops the bolt.
    fn hit_range(&mut self, bolt: &Bolt) -> Option<i32>;

    /// Terrain, items and clouds in one exploded cell.
    fn blast_cell(&mut self, _bolt: &mut Bolt, _c: Coord) {}

    /// The bolt has come to rest.
    fn finished(&mut self, _bolt: &mut Bolt) {}
}

/// Which side the firer is on. Players fight with their allies.
pub(crate) fn firer_side(world: &World, source: Option<ActorId>) -> Option<Attitude> {
    source.and_then(|id| world.actor(id)).map(|a| a.attitude())
}

pub(crate) fn is_ally(world: &World, source: Option<ActorId>, target: ActorId) -> bool {
    if source == Some(target) {
        return true;
    }
    match (firer_side(world, source), world.actor(target)) {
        (Some(side), Some(actor)) => actor.attitude().is_aligned_with(side),
        _ => false,
    }
}

/// Send the bolt back the way it came after bouncing off `reflector`.
/// Returns the new aim point.
pub(crate) fn redirect(
    bolt: &mut Bolt,
    world: &World,
    reflector: ActorId,
    scatter: Option<(i32, i32)>,
) -> Coord {
    let firer = bolt
        .source
        .filter(|&id| id != reflector)
        .and_then(|id| world.actor(id))
        .filter(|a| a.alive())
        .map(|a| a.pos());
    let toward = match (firer, scatter) {
        (Some(pos), _) => pos,
        (None, Some((dx, dy))) => bolt.origin.offset(dx, dy),
        (None, None) => bolt.origin,
    };
    let from = world.actor(reflector).map_or(bolt.pos, |a| a.pos());
    bolt.reflections += 1;
    bolt.reflector = Some(reflector);
    bolt.origin = from;
    bolt.target = toward;
    tracing::debug!(?reflector, %toward, "bolt reflected");
    toward
}

/// Fly `bolt` from its origin and resolve everything it touches. Returns
/// the cells of the explosion, if it exploded.
///
/// Origin, target and explosion phase move during flight (reflections,
/// detonation) and are put back afterwards, so a kept bolt fires the same
/// way every time.
pub(crate) fn walk<P: BeamPass>(bolt: &mut Bolt, pass: &mut P) -> Vec<Coord> {
    let launch = (bolt.origin, bolt.target, bolt.in_explosion_phase);
    bolt.reset_flight();
    let blast = fly(bolt, pass);
    (bolt.origin, bolt.target, bolt.in_explosion_phase) = launch;
    blast
}

fn fly<P: BeamPass>(bolt: &mut Bolt, pass: &mut P) -> Vec<Coord> {
    if bolt.in_explosion_phase {
        let centre = bolt.origin;
        let blast = explode(bolt, pass, centre);
        pass.finished(bolt);
        return blast;
    }

    if let TargetingMode::TrackActor(id) = bolt.targeting
        && let Some(actor) = pass.world().actor(id)
    {
        bolt.target = actor.pos();
    }

    let mut ray = bolt.initial_ray();
    if ray.is_stationary() {
        let blast = if bolt.is_explosion() {
            let centre = bolt.origin;
            explode(bolt, pass, centre)
        } else {
            if let Some(target) = pass.world().actor_at(bolt.origin) {
                pass.actor(bolt, target);
            }
            Vec::new()
        };
        pass.finished(bolt);
        return blast;
    }

    tracing::debug!(
        bolt = %bolt.name,
        from = %bolt.origin,
        to = %bolt.target,
        range = bolt.range,
        tracer = bolt.is_tracer(),
        "bolt fired"
    );

    while bolt.range_used() < bolt.range {
        let c = ray.advance();
        if !pass.world().in_bounds(c) {
            break;
        }

        if pass.world().is_solid(c) {
            match pass.wall(bolt, c) {
                WallOutcome::Open => {}
                WallOutcome::Consumed => break,
                WallOutcome::Blocked => {
                    let feature = pass.world().feature_at(c);
                    let max_bounces = pass.world().config.max_bounces;
                    if bolt.flavour.bounces_off(feature)
                        && bolt.bounces < max_bounces
                        && bolt.last_bounce != Some(c)
                    {
                        bolt.bounces += 1;
                        bolt.last_bounce = Some(c);
                        bolt.pos = ray.bounce(|p| pass.world().is_solid(p));
                        tracing::trace!(at = %c, bounces = bolt.bounces, "bolt bounced");
                        continue;
                    }
                    break;
                }
            }
        }

        bolt.pos = c;
        bolt.path_taken.push(c);
        tracing::trace!(cell = %c, used = bolt.range_used(), "bolt step");

        if bolt.is_explosion() {
            let occupied = pass
                .world()
                .actor_at(c)
                .is_some_and(|a| Some(a) != bolt.source);
            if occupied || c == bolt.target {
                break;
            }
            continue;
        }

        if let Some(target) = pass.world().actor_at(c)
            && !(bolt.ignores_allies && is_ally(pass.world(), bolt.source, target))
        {
            match pass.actor(bolt, target) {
                AffectResult::Reflected { toward } => {
                    ray = Ray::new(c, toward);
                    continue;
                }
                result if result.spends_bolt() => match pass.hit_range(bolt) {
                    Some(used) => bolt.use_range(used),
                    None => break,
                },
                _ => {}
            }
        }

        if let TargetingMode::TrackActor(id) = bolt.targeting
            && !pass.world().actor(id).is_some_and(|a| a.alive())
        {
            break;
        }
    }

    let blast = if bolt.is_explosion() {
        let centre = bolt.pos;
        explode(bolt, pass, centre)
    } else {
        Vec::new()
    };
    pass.finished(bolt);
    blast
}

/// Detonate at `centre`, affecting each cell of the footprint once in ring
/// order.
fn explode<P: BeamPass>(bolt: &mut Bolt, pass: &mut P, centre: Coord) -> Vec<Coord> {
    let Some(mut spec) = bolt.explosion else {
        return Vec::new();
    };
    spec.radius = spec
        .radius
        .min(pass.world().config.max_explosion_radius)
        .max(0);
    bolt.in_explosion_phase = true;
    bolt.pos = centre;
    bolt.target = centre;

    let terrain = bolt.terrain;
    let footprint = affected_cells(pass.world(), centre, &spec, |f| terrain.affects(f));
    let cells = footprint.ring_order(spec.hole_in_the_middle);
    tracing::debug!(bolt = %bolt.name, %centre, radius = spec.radius, cells = cells.len(), "explosion");

    for &c in &cells {
        if let Some(target) = pass.world().actor_at(c) {
            pass.actor(bolt, target);
        }
        pass.blast_cell(bolt, c);
    }
    cells
}
