//! Bolts and explosions
//!
//! A [`Bolt`] is configured once, then either traced over a shared borrow
//! of the world to see who it would hit, or fired for real. Both passes
//! share the same travel code, so a tracer's path and blast are exactly
//! the ones the real bolt would take given the same rolls.

mod affect;
mod bolt;
mod explosion;
mod fire;
mod flavour;
mod tracer;
mod walk;
mod zap;

pub use affect::AffectResult;
pub use bolt::{
    AUTOMATIC_HIT, Bolt, ExecutionMode, Payload, TargetingMode, TerrainInteraction,
};
pub use explosion::{ExplosionMap, ExplosionSpec, MAX_EXPLOSION_RADIUS, affected_cells};
pub use fire::{AlwaysNo, AlwaysYes, BeamOutcome, Prompt, monster_fire, player_fire};
pub use flavour::BeamFlavour;
pub use tracer::{TracerInfo, TracerReport, mons_should_fire};
pub use zap::zap_bolt;
