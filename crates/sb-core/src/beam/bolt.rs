//! Bolt definition and travel bookkeeping

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use sb_rng::{DiceDef, GameRng};

use super::explosion::ExplosionSpec;
use super::flavour::BeamFlavour;
use super::tracer::TracerInfo;
use crate::geom::Coord;
use crate::resist::{AcRule, resist_adjust};
use crate::world::{Actor, ActorId, Feature, Ray};

/// To-hit value that never misses.
pub const AUTOMATIC_HIT: i32 = 1500;

/// Whether a pass may change the world.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ExecutionMode {
    /// Dry run that only counts who would be hit
    Tracer = 0,
    #[default]
    Real = 1,
}

/// What the bolt is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetingMode {
    /// A cell; the bolt keeps going past it
    #[default]
    FixedPoint,
    /// A living actor; the bolt gives up once it dies
    TrackActor(ActorId),
}

/// What the bolt does to solid terrain it runs into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TerrainInteraction {
    #[default]
    None = 0,
    /// Turns soft rock into floor
    Dig = 1,
    /// Melts wax and sets trees alight
    Burn = 2,
    /// Sprouts a plant where the bolt ends
    Grow = 3,
    /// Reduces rock and statues to rubble, then stops
    Disintegrate = 4,
}

impl TerrainInteraction {
    /// Whether this interaction changes `feature`.
    pub const fn affects(&self, feature: Feature) -> bool {
        match self {
            TerrainInteraction::Dig => feature.is_diggable(),
            TerrainInteraction::Burn => feature.is_flammable(),
            TerrainInteraction::Disintegrate => {
                feature.is_diggable() || feature.is_statue()
            }
            TerrainInteraction::None | TerrainInteraction::Grow => false,
        }
    }
}

/// What lands on an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Payload {
    #[default]
    Damage,
    Enchantment { saving_throw: bool },
}

/// A bolt in flight, or about to be. Lives only as long as the cast.
#[derive(Debug, Clone)]
pub struct Bolt {
    pub name: String,
    pub flavour: BeamFlavour,
    pub damage: DiceDef,
    pub hit: i32,
    /// Power behind enchantments
    pub power: i32,
    pub range: i32,
    /// Extra range rolled once per real firing; tracers assume the maximum
    pub range_band: i32,
    pub ac_rule: AcRule,
    pub mode: ExecutionMode,
    pub targeting: TargetingMode,
    pub terrain: TerrainInteraction,
    pub payload: Payload,
    pub pierce: bool,
    pub explosion: Option<ExplosionSpec>,
    /// Passes through actors on the firer's side
    pub ignores_allies: bool,
    pub reflectable: bool,
    /// Who fired it, for kill credit and tracer sides
    pub source: Option<ActorId>,
    pub origin: Coord,
    pub target: Coord,
    /// Explicit path, overriding the line from origin to target
    pub ray: Option<Ray>,

    pub pos: Coord,
    pub path_taken: Vec<Coord>,
    pub extra_range_used: i32,
    pub bounces: u32,
    pub last_bounce: Option<Coord>,
    pub reflections: u32,
    pub reflector: Option<ActorId>,
    pub hit_count: HashMap<ActorId, u32>,
    pub in_explosion_phase: bool,
    pub foe_info: TracerInfo,
    pub friend_info: TracerInfo,
    pub beam_cancelled: bool,
    pub obvious_effect: bool,
    pub seen: bool,
}

impl Bolt {
    pub fn new(name: impl Into<String>, flavour: BeamFlavour, origin: Coord, target: Coord) -> Self {
        let payload = if flavour.is_enchantment() {
            Payload::Enchantment {
                saving_throw: !flavour.is_helpful(),
            }
        } else {
            Payload::Damage
        };
        Self {
            name: name.into(),
            flavour,
            damage: DiceDef::none(),
            hit: AUTOMATIC_HIT,
            power: 0,
            range: 8,
            range_band: 0,
            ac_rule: AcRule::Normal,
            mode: ExecutionMode::Real,
            targeting: TargetingMode::FixedPoint,
            terrain: TerrainInteraction::None,
            payload,
            pierce: false,
            explosion: None,
            ignores_allies: false,
            reflectable: !flavour.is_enchantment(),
            source: None,
            origin,
            target,
            ray: None,
            pos: origin,
            path_taken: Vec::new(),
            extra_range_used: 0,
            bounces: 0,
            last_bounce: None,
            reflections: 0,
            reflector: None,
            hit_count: HashMap::new(),
            in_explosion_phase: false,
            foe_info: TracerInfo::default(),
            friend_info: TracerInfo::default(),
            beam_cancelled: false,
            obvious_effect: false,
            seen: false,
        }
    }

    /// A blast at `centre` with no flight beforehand.
    pub fn explosion(
        name: impl Into<String>,
        flavour: BeamFlavour,
        centre: Coord,
        spec: ExplosionSpec,
    ) -> Self {
        let mut bolt = Self::new(name, flavour, centre, centre);
        bolt.explosion = Some(spec);
        bolt.in_explosion_phase = true;
        bolt.reflectable = false;
        bolt
    }

    pub fn with_damage(mut self, damage: DiceDef) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_hit(mut self, hit: i32) -> Self {
        self.hit = hit;
        self
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_range(mut self, range: i32) -> Self {
        self.range = range;
        self
    }

    pub fn with_range_band(mut self, extra: i32) -> Self {
        self.range_band = extra.max(0);
        self
    }

    pub fn with_ac_rule(mut self, rule: AcRule) -> Self {
        self.ac_rule = rule;
        self
    }

    pub fn with_terrain(mut self, terrain: TerrainInteraction) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_explosion(mut self, spec: ExplosionSpec) -> Self {
        self.explosion = Some(spec);
        self
    }

    pub fn with_ray(mut self, ray: Ray) -> Self {
        self.ray = Some(ray);
        self
    }

    pub fn without_saving_throw(mut self) -> Self {
        if let Payload::Enchantment { .. } = self.payload {
            self.payload = Payload::Enchantment {
                saving_throw: false,
            };
        }
        self
    }

    pub fn piercing(mut self) -> Self {
        self.pierce = true;
        self
    }

    pub fn ignoring_allies(mut self) -> Self {
        self.ignores_allies = true;
        self
    }

    pub fn fired_by(mut self, source: ActorId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn tracking(mut self, target: ActorId) -> Self {
        self.targeting = TargetingMode::TrackActor(target);
        self
    }

    pub fn is_tracer(&self) -> bool {
        self.mode == ExecutionMode::Tracer
    }

    pub fn is_enchantment(&self) -> bool {
        matches!(self.payload, Payload::Enchantment { .. })
    }

    pub fn is_explosion(&self) -> bool {
        self.explosion.is_some()
    }

    pub fn is_helpful(&self) -> bool {
        self.is_enchantment() && self.flavour.is_helpful()
    }

    /// Steps taken plus range burned on hits.
    pub fn range_used(&self) -> i32 {
        self.path_taken.len() as i32 + self.extra_range_used
    }

    pub fn range_left(&self) -> i32 {
        (self.range - self.range_used()).max(0)
    }

    /// Burn extra range, never past the bolt's total.
    pub fn use_range(&mut self, amount: i32) {
        let room = self.range - self.path_taken.len() as i32 - self.extra_range_used;
        self.extra_range_used += amount.clamp(0, room.max(0));
    }

    pub fn times_hit(&self, target: ActorId) -> u32 {
        self.hit_count.get(&target).copied().unwrap_or(0)
    }

    pub fn record_hit(&mut self, target: ActorId) {
        *self.hit_count.entry(target).or_insert(0) += 1;
    }

    /// Damage `amount` after the defender's resistance.
    pub fn resist_damage(&self, actor: &dyn Actor, amount: i32) -> i32 {
        let element = self.flavour.element();
        let tier = actor.resistance(element);
        if self.flavour == BeamFlavour::PoisonArrow && tier > 0 {
            return amount / 3;
        }
        resist_adjust(amount, element, tier, actor.is_player())
    }

    /// Damage beams that cannot hurt `actor` at all.
    pub fn is_harmless_to(&self, actor: &dyn Actor) -> bool {
        if self.is_enchantment() {
            return false;
        }
        self.flavour.element() != crate::resist::Element::Magic
            && self.damage.max() > 0
            && self.resist_damage(actor, self.damage.max()) == 0
    }

    /// Range spent on a hit; `None` stops the bolt.
    pub fn range_used_on_hit(&self, rng: Option<&mut GameRng>) -> Option<i32> {
        if self.is_enchantment() {
            return self.flavour.is_pass_through().then_some(0);
        }
        if !self.pierce || self.is_explosion() {
            return None;
        }
        match self.flavour {
            BeamFlavour::Electricity => Some(0),
            BeamFlavour::Lava => Some(1),
            _ => Some(match rng {
                Some(rng) => 2 + rng.rn2(4),
                None => 2,
            }),
        }
    }

    /// Where the bolt travels: the explicit ray if one was given.
    pub(crate) fn initial_ray(&self) -> Ray {
        self.ray.unwrap_or_else(|| Ray::new(self.origin, self.target))
    }

    /// Clear per-flight state so the same bolt can be fired again.
    pub(crate) fn reset_flight(&mut self) {
        self.pos = self.origin;
        self.path_taken.clear();
        self.extra_range_used = 0;
        self.bounces = 0;
        self.last_bounce = None;
        self.reflections = 0;
        self.reflector = None;
        self.hit_count.clear();
        self.foe_info = TracerInfo::default();
        self.friend_info = TracerInfo::default();
        self.obvious_effect = false;
        self.seen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Monster, MonsterId, Resists};

    #[test]
    fn test_enchantment_payload_from_flavour() {
        let slow = Bolt::new("slow", BeamFlavour::Slow, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(slow.payload, Payload::Enchantment { saving_throw: true });
        assert!(!slow.reflectable);
        let haste = Bolt::new("haste", BeamFlavour::Haste, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(haste.payload, Payload::Enchantment { saving_throw: false });
        let fire = Bolt::new("fire", BeamFlavour::Fire, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(fire.payload, Payload::Damage);
    }

    #[test]
    fn test_range_on_hit() {
        let base = Bolt::new("b", BeamFlavour::Fire, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(base.range_used_on_hit(None), None);
        let pierce = base.clone().piercing();
        assert_eq!(pierce.range_used_on_hit(None), Some(2));
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            let used = pierce.range_used_on_hit(Some(&mut rng)).unwrap();
            assert!((2..=5).contains(&used));
        }
        let mut elec = pierce.clone();
        elec.flavour = BeamFlavour::Electricity;
        assert_eq!(elec.range_used_on_hit(None), Some(0));
        let mut lava = pierce;
        lava.flavour = BeamFlavour::Lava;
        assert_eq!(lava.range_used_on_hit(None), Some(1));

        let dig = Bolt::new("dig", BeamFlavour::Digging, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(dig.range_used_on_hit(None), Some(0));
        let slow = Bolt::new("slow", BeamFlavour::Slow, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(slow.range_used_on_hit(None), None);
    }

    #[test]
    fn test_use_range_caps_at_total() {
        let mut bolt =
            Bolt::new("b", BeamFlavour::Fire, Coord::new(0, 0), Coord::new(3, 0)).with_range(5);
        bolt.path_taken = vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)];
        bolt.use_range(4);
        assert_eq!(bolt.extra_range_used, 2);
        assert_eq!(bolt.range_used(), 5);
        assert_eq!(bolt.range_left(), 0);
    }

    #[test]
    fn test_harmless() {
        let imp = Monster::new(MonsterId(1), "imp", Coord::new(1, 0), 10).with_resists(Resists {
            fire: 3,
            ..Default::default()
        });
        let fire = Bolt::new("fire", BeamFlavour::Fire, Coord::new(0, 0), Coord::new(3, 0))
            .with_damage(DiceDef::new(3, 6));
        assert!(fire.is_harmless_to(&imp));
        let dart = Bolt::new("dart", BeamFlavour::Magic, Coord::new(0, 0), Coord::new(3, 0))
            .with_damage(DiceDef::new(1, 4));
        assert!(!dart.is_harmless_to(&imp));
    }

    #[test]
    fn test_poison_arrow_beats_resistance() {
        let snake = Monster::new(MonsterId(1), "snake", Coord::new(1, 0), 10).with_resists(
            Resists {
                poison: 1,
                ..Default::default()
            },
        );
        let arrow = Bolt::new("arrow", BeamFlavour::PoisonArrow, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(arrow.resist_damage(&snake, 30), 10);
        let sting = Bolt::new("sting", BeamFlavour::Poison, Coord::new(0, 0), Coord::new(3, 0));
        assert_eq!(sting.resist_damage(&snake, 30), 0);
    }

    #[test]
    fn test_terrain_affects() {
        assert!(TerrainInteraction::Dig.affects(Feature::RockWall));
        assert!(!TerrainInteraction::Dig.affects(Feature::StoneWall));
        assert!(TerrainInteraction::Disintegrate.affects(Feature::GraniteStatue));
        assert!(TerrainInteraction::Burn.affects(Feature::Tree));
        assert!(!TerrainInteraction::Burn.affects(Feature::RockWall));
    }
}
