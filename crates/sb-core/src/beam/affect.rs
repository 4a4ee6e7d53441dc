//! What a real bolt does to the things it touches

use sb_rng::GameRng;

use super::bolt::{AUTOMATIC_HIT, Bolt, Payload, TerrainInteraction};
use super::flavour::BeamFlavour;
use super::walk::{BeamPass, WallOutcome, redirect};
use crate::geom::Coord;
use crate::item::{FoodType, ItemKind};
use crate::resist::{Element, apply_armour_with, resists_enchantment};
use crate::world::{
    Actor, ActorId, Behaviour, CloudKind, Feature, Holiness, MapOracle, Material, MonsterId,
    Reflection, World,
};

/// How one actor came out of being reached by a bolt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffectResult {
    Hit { damage: i32 },
    Missed,
    /// Shrugged off an enchantment
    Resisted,
    /// Immune; the bolt carries on as if nothing were there
    Unaffected,
    Reflected { toward: Coord },
    /// Not considered at all
    Ignored,
}

impl AffectResult {
    /// Whether the bolt spent itself on the actor.
    pub const fn spends_bolt(&self) -> bool {
        matches!(self, AffectResult::Hit { .. } | AffectResult::Resisted)
    }
}

/// Facts about a target read up front so the world can be mutated after.
struct Defender {
    id: ActorId,
    name: String,
    pos: Coord,
    ac: i32,
    ev: i32,
    sh: i32,
    willpower: i32,
    reflection: Reflection,
    holiness: Holiness,
    material: Material,
    neg_tier: i32,
    poison_tier: i32,
    fire_tier: i32,
}

impl Defender {
    fn read(actor: &dyn Actor) -> Self {
        Self {
            id: actor.id(),
            name: actor.name().to_string(),
            pos: actor.pos(),
            ac: actor.armour_class(),
            ev: actor.evasion(),
            sh: actor.shield_class(),
            willpower: actor.willpower(),
            reflection: actor.reflection(),
            holiness: actor.holiness(),
            material: actor.material(),
            neg_tier: actor.resistance(Element::NegativeEnergy),
            poison_tier: actor.resistance(Element::Poison),
            fire_tier: actor.resistance(Element::Fire),
        }
    }

    fn is_player(&self) -> bool {
        self.id.is_player()
    }

    /// Sentence subject: "You" or "The orc".
    fn subject(&self) -> String {
        if self.is_player() {
            "You".to_string()
        } else {
            format!("The {}", self.name)
        }
    }

    /// Sentence object: "you" or "the orc".
    fn object(&self) -> String {
        if self.is_player() {
            "you".to_string()
        } else {
            format!("the {}", self.name)
        }
    }

    fn verb<'a>(&self, second: &'a str, third: &'a str) -> &'a str {
        if self.is_player() { second } else { third }
    }
}

/// A firing that changes the world.
pub(crate) struct RealPass<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut GameRng,
    pub messages: Vec<String>,
    pub killed: Vec<MonsterId>,
    pub player_died: bool,
    pub noise: i32,
    pub hits: Vec<(ActorId, AffectResult)>,
}

impl<'a> RealPass<'a> {
    pub fn new(world: &'a mut World, rng: &'a mut GameRng) -> Self {
        Self {
            world,
            rng,
            messages: Vec::new(),
            killed: Vec::new(),
            player_died: false,
            noise: 0,
            hits: Vec::new(),
        }
    }

    fn say(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Apply the bolt's terrain interaction to `c`, if it has one that
    /// changes the feature there.
    fn alter_terrain(&mut self, bolt: &mut Bolt, c: Coord) -> WallOutcome {
        let feature = self.world.feature_at(c);
        if !bolt.terrain.affects(feature) {
            return WallOutcome::Blocked;
        }
        bolt.obvious_effect = true;
        match bolt.terrain {
            TerrainInteraction::Dig => {
                self.world.set_feature(c, Feature::Floor);
                self.noise = self.noise.max(4);
                WallOutcome::Open
            }
            TerrainInteraction::Burn => {
                let duration = self.rng.random_range(10, 19);
                self.world.set_feature(c, Feature::Floor);
                self.world
                    .clouds
                    .place(c, CloudKind::Fire, duration, bolt.source);
                if feature == Feature::WaxWall {
                    self.say("The wax bubbles and burns!");
                } else {
                    self.say(format!("The {} burns like a torch!", feature_name(feature)));
                }
                WallOutcome::Consumed
            }
            TerrainInteraction::Disintegrate => {
                self.world.set_feature(c, Feature::Floor);
                self.say(format!("The {} is blasted into rubble!", feature_name(feature)));
                self.noise = self.noise.max(6);
                WallOutcome::Consumed
            }
            TerrainInteraction::None | TerrainInteraction::Grow => WallOutcome::Blocked,
        }
    }

    fn reflects(&mut self, d: &Defender) -> bool {
        match d.reflection {
            Reflection::Always => true,
            Reflection::Shield => {
                let denom = self.world.config.reflect_denominator;
                self.rng.x_chance_in_y(d.sh, d.sh + denom)
            }
            Reflection::None => false,
        }
    }

    fn duration(&mut self, power: i32) -> i32 {
        8 + self.rng.rn2(1 + power / 4)
    }

    /// Wake a monster that was attacked; hurt charmed ones turn again.
    fn annoy(&mut self, d: &Defender, hurt: bool) {
        let Some(mid) = d.id.monster() else {
            return;
        };
        if let Some(m) = self.world.monster_mut(mid) {
            if m.is_asleep() {
                m.alert();
            } else if m.behaviour == Behaviour::Wandering {
                m.behaviour = Behaviour::Alert;
            }
            if hurt {
                m.statuses.charmed = 0;
            }
        }
    }

    /// Deal `amount` to the target and handle its death.
    fn wound(&mut self, bolt: &Bolt, d: &Defender, amount: i32) -> i32 {
        let Some(actor) = self.world.actor_mut(d.id) else {
            return 0;
        };
        let dealt = actor.hurt(amount);
        if !actor.alive() {
            self.kill(bolt, d);
        }
        dealt
    }

    fn kill(&mut self, bolt: &Bolt, d: &Defender) {
        match d.id {
            ActorId::Player => {
                self.player_died = true;
                self.say("You die...");
            }
            ActorId::Monster(mid) => {
                if let Some(name) = self.world.kill_monster(mid, bolt.source) {
                    if bolt.source == Some(ActorId::Player) {
                        self.say(format!("You kill the {name}!"));
                    } else {
                        self.say(format!("The {name} is killed!"));
                    }
                    self.killed.push(mid);
                }
            }
        }
    }

    fn enchant(&mut self, bolt: &mut Bolt, d: &Defender) -> AffectResult {
        let flavour = bolt.flavour;
        if flavour == BeamFlavour::Digging {
            return AffectResult::Ignored;
        }
        if enchantment_immune(flavour, d) {
            self.say(format!("{} {} unaffected.", d.subject(), d.verb("are", "is")));
            return AffectResult::Unaffected;
        }
        if let Payload::Enchantment { saving_throw: true } = bolt.payload
            && resists_enchantment(d.willpower, bolt.power, self.rng)
        {
            self.say(format!("{} {}.", d.subject(), d.verb("resist", "resists")));
            self.annoy(d, false);
            return AffectResult::Resisted;
        }

        let dur = self.duration(bolt.power);
        let mut damage = 0;
        match flavour {
            BeamFlavour::Pain | BeamFlavour::DispelUndead => {
                let raw = bolt.damage.roll(self.rng);
                damage = match self.world.actor(d.id) {
                    Some(actor) if flavour == BeamFlavour::Pain => bolt.resist_damage(actor, raw),
                    _ => raw,
                };
                let msg = if flavour == BeamFlavour::Pain {
                    format!("{} {} in agony!", d.subject(), d.verb("writhe", "convulses"))
                } else {
                    format!("{} {} blasted!", d.subject(), d.verb("are", "is"))
                };
                self.say(msg);
                damage = self.wound(bolt, d, damage);
            }
            BeamFlavour::Teleport => {
                if let Some(dest) = self.random_open_cell() {
                    if let Some(actor) = self.world.actor_mut(d.id) {
                        actor.set_pos(dest);
                    }
                    self.say(format!("{} {}!", d.subject(), d.verb("blink", "disappears")));
                }
            }
            BeamFlavour::Polymorph => {
                if let Some(m) = d.id.monster().and_then(|id| self.world.monster_mut(id)) {
                    let hp = self.rng.dice(m.hit_dice.max(1), 8).max(1);
                    m.max_hp = hp;
                    m.hp = hp;
                }
                self.say(format!("{} changes shape!", d.subject()));
            }
            BeamFlavour::Heal => {
                let amount = 5 + self.rng.rn2(1 + bolt.power / 3);
                let healed = self
                    .world
                    .actor_mut(d.id)
                    .map_or(0, |actor| actor.heal(amount));
                if healed > 0 {
                    self.say(format!("{} {} better.", d.subject(), d.verb("feel", "looks")));
                }
            }
            BeamFlavour::Sleep => {
                if let Some(m) = d.id.monster().and_then(|id| self.world.monster_mut(id)) {
                    m.behaviour = Behaviour::Sleeping;
                }
                if let Some(actor) = self.world.actor_mut(d.id) {
                    actor.statuses_mut().sleep = dur;
                }
                self.say(format!("{} {} asleep.", d.subject(), d.verb("fall", "falls")));
            }
            _ => {
                let Some(actor) = self.world.actor_mut(d.id) else {
                    return AffectResult::Ignored;
                };
                let st = actor.statuses_mut();
                let msg = match flavour {
                    BeamFlavour::Slow if st.haste > 0 => {
                        st.haste = 0;
                        "is no longer moving quickly"
                    }
                    BeamFlavour::Slow => {
                        st.slow = st.slow.max(dur);
                        "seems to slow down"
                    }
                    BeamFlavour::Haste if st.slow > 0 => {
                        st.slow = 0;
                        "is no longer moving slowly"
                    }
                    BeamFlavour::Haste => {
                        st.haste = st.haste.max(dur);
                        "seems to speed up"
                    }
                    BeamFlavour::Paralysis => {
                        st.paralysis = st.paralysis.max(dur / 2);
                        "suddenly stops moving"
                    }
                    BeamFlavour::Confusion => {
                        st.confusion = st.confusion.max(dur);
                        "looks rather confused"
                    }
                    BeamFlavour::Invisibility => {
                        st.invisible = st.invisible.max(dur);
                        "flickers and vanishes"
                    }
                    BeamFlavour::Charm => {
                        st.charmed = st.charmed.max(dur);
                        "is charmed"
                    }
                    BeamFlavour::Petrify => {
                        st.petrifying = st.petrifying.max(3);
                        "is moving more slowly"
                    }
                    BeamFlavour::Corona => {
                        st.corona = st.corona.max(dur);
                        "is outlined in light"
                    }
                    _ => return AffectResult::Ignored,
                };
                let msg = format!("{} {}.", d.subject(), msg);
                self.say(msg);
            }
        }

        bolt.obvious_effect = true;
        if !flavour.is_helpful() {
            self.annoy(d, damage > 0);
        }
        AffectResult::Hit { damage }
    }

    fn strike(&mut self, bolt: &mut Bolt, d: &Defender) -> AffectResult {
        if !bolt.in_explosion_phase && bolt.hit < AUTOMATIC_HIT {
            let roll = self.rng.rn2(bolt.hit);
            let defence = self.rng.random2avg(d.ev, 2);
            if roll < defence {
                self.say(format!("The {} misses {}.", bolt.name, d.object()));
                self.annoy(d, false);
                return AffectResult::Missed;
            }
        }

        let raw = bolt.damage.roll(self.rng);
        let adjusted = self
            .world
            .actor(d.id)
            .map_or(raw, |actor| bolt.resist_damage(actor, raw));
        let permille = self.world.config.proportional_ac_pass_permille;
        let dealt_roll = apply_armour_with(d.ac, adjusted, bolt.ac_rule, permille, self.rng);

        if dealt_roll > 0 {
            self.say(format!("The {} hits {}.", bolt.name, d.object()));
        } else {
            self.say(format!(
                "The {} hits {} but does no damage.",
                bolt.name,
                d.object()
            ));
        }
        if adjusted < raw {
            self.say(format!("{} {} the {}.", d.subject(), d.verb("resist", "resists"), bolt.name));
        }
        bolt.obvious_effect = true;

        let dealt = self.wound(bolt, d, dealt_roll);
        let alive = self.world.actor(d.id).is_some_and(|a| a.alive());
        if alive {
            self.secondary_effects(bolt, d, raw, dealt);
            self.annoy(d, dealt > 0);
        }
        AffectResult::Hit { damage: dealt }
    }

    fn secondary_effects(&mut self, bolt: &Bolt, d: &Defender, raw: i32, dealt: i32) {
        match bolt.flavour {
            BeamFlavour::Poison | BeamFlavour::PoisonArrow => {
                let arrow = bolt.flavour == BeamFlavour::PoisonArrow;
                let lands = if arrow {
                    true
                } else {
                    d.poison_tier <= 0 && raw > 0 && self.rng.x_chance_in_y(2, 3)
                };
                if lands && let Some(actor) = self.world.actor_mut(d.id) {
                    actor.statuses_mut().poison += if arrow { 2 } else { 1 };
                    let msg = if d.is_player() {
                        "You are poisoned.".to_string()
                    } else {
                        format!("{} looks sick.", d.subject())
                    };
                    self.say(msg);
                }
            }
            BeamFlavour::StickyFlame if d.fire_tier <= 0 => {
                let turns = 2 + self.rng.rn2(3 + bolt.power / 10);
                if let Some(actor) = self.world.actor_mut(d.id) {
                    let st = actor.statuses_mut();
                    st.sticky_flame = st.sticky_flame.max(turns);
                }
                self.say(format!(
                    "{} {} covered in liquid flames!",
                    d.subject(),
                    d.verb("are", "is")
                ));
            }
            BeamFlavour::Force => self.knock_back(bolt, d),
            BeamFlavour::NegativeEnergy if d.neg_tier <= 0 && d.holiness.is_living() => {
                let amount = 1 + dealt / 4;
                if let Some(actor) = self.world.actor_mut(d.id) {
                    actor.drain(amount);
                }
                self.say(format!("{} {} drained.", d.subject(), d.verb("are", "is")));
            }
            BeamFlavour::Miasma if d.holiness.is_living() && d.poison_tier <= 0 => {
                let turns = 5 + self.rng.rn2(5);
                if let Some(actor) = self.world.actor_mut(d.id) {
                    let st = actor.statuses_mut();
                    st.slow = st.slow.max(turns);
                }
            }
            _ => {}
        }
    }

    fn knock_back(&mut self, bolt: &Bolt, d: &Defender) {
        let delta = d.pos - bolt.origin;
        let dest = d.pos.offset(delta.x.signum(), delta.y.signum());
        if dest == d.pos
            || !self.world.in_bounds(dest)
            || self.world.is_solid(dest)
            || self.world.actor_at(dest).is_some()
        {
            return;
        }
        if let Some(actor) = self.world.actor_mut(d.id) {
            actor.set_pos(dest);
        }
        self.say(format!("{} {} knocked back!", d.subject(), d.verb("are", "is")));
    }

    fn random_open_cell(&mut self) -> Option<Coord> {
        let grid = &self.world.grid;
        let open: Vec<Coord> = (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| Coord::new(x, y)))
            .filter(|&c| !self.world.is_solid(c) && self.world.actor_at(c).is_none())
            .collect();
        self.rng.choose(&open).copied()
    }

    fn destroy_items(&mut self, bolt: &Bolt, c: Coord) {
        let fire = bolt.flavour.burns();
        let cold = bolt.flavour.is_cold();
        if !fire && !cold {
            return;
        }
        for id in self.world.items.items_at(c) {
            let Some(item) = self.world.items.get(id) else {
                continue;
            };
            let msg = match item.kind() {
                ItemKind::Potion(_) if cold => "A potion shatters.",
                ItemKind::Food(FoodType::Bread) if fire => "Some bread burns to a crisp.",
                ItemKind::Food(_) if fire => "A chunk of flesh sizzles and chars.",
                _ => continue,
            };
            self.world.items.remove(id);
            self.say(msg);
        }
    }
}

fn feature_name(feature: Feature) -> &'static str {
    match feature {
        Feature::Tree => "tree",
        Feature::Plant => "plant",
        Feature::WaxWall => "wax wall",
        Feature::GraniteStatue => "statue",
        Feature::OrcishIdol => "idol",
        _ => "rock wall",
    }
}

fn enchantment_immune(flavour: BeamFlavour, d: &Defender) -> bool {
    match flavour {
        BeamFlavour::DispelUndead => d.holiness != Holiness::Undead,
        BeamFlavour::Pain => d.neg_tier >= 3,
        BeamFlavour::Petrify => matches!(d.material, Material::Stone | Material::Insubstantial),
        BeamFlavour::Sleep => matches!(d.holiness, Holiness::Undead | Holiness::Nonliving),
        BeamFlavour::Polymorph | BeamFlavour::Charm => d.is_player(),
        _ => false,
    }
}

impl BeamPass for RealPass<'_> {
    fn world(&self) -> &World {
        &*self.world
    }

    fn wall(&mut self, bolt: &mut Bolt, c: Coord) -> WallOutcome {
        self.alter_terrain(bolt, c)
    }

    fn actor(&mut self, bolt: &mut Bolt, target: ActorId) -> AffectResult {
        if bolt.times_hit(target) >= self.world.config.max_hits_per_target {
            return AffectResult::Ignored;
        }
        let (d, harmless) = match self.world.actor(target) {
            Some(actor) if actor.alive() => (Defender::read(actor), bolt.is_harmless_to(actor)),
            _ => return AffectResult::Ignored,
        };
        bolt.seen |= d.is_player() || self.world.can_perceive(ActorId::Player, target);

        let result = if harmless {
            self.say(format!("{} {} unaffected.", d.subject(), d.verb("are", "is")));
            AffectResult::Unaffected
        } else if bolt.reflectable
            && !bolt.in_explosion_phase
            && bolt.reflections < self.world.config.max_reflections
            && self.reflects(&d)
        {
            let scatter = (self.rng.rn2(3) - 1, self.rng.rn2(3) - 1);
            self.say(format!("The {} reflects off {}!", bolt.name, d.object()));
            let toward = redirect(bolt, self.world, target, Some(scatter));
            AffectResult::Reflected { toward }
        } else if bolt.is_enchantment() {
            self.enchant(bolt, &d)
        } else {
            self.strike(bolt, &d)
        };

        if !matches!(result, AffectResult::Reflected { .. } | AffectResult::Ignored) {
            bolt.record_hit(target);
        }
        self.hits.push((target, result));
        result
    }

    fn hit_range(&mut self, bolt: &Bolt) -> Option<i32> {
        bolt.range_used_on_hit(Some(self.rng))
    }

    fn blast_cell(&mut self, bolt: &mut Bolt, c: Coord) {
        if self.world.is_solid(c) {
            self.alter_terrain(bolt, c);
        }
        self.destroy_items(bolt, c);
        if let Some(kind) = bolt.explosion.and_then(|spec| spec.cloud)
            && !self.world.is_solid(c)
        {
            let duration = self.rng.random_range(5, 12);
            self.world.clouds.place(c, kind, duration, bolt.source);
        }
    }

    fn finished(&mut self, bolt: &mut Bolt) {
        if let Some(spec) = bolt.explosion {
            self.noise = self.noise.max(spec.noise());
        }
        let end = bolt.pos;
        if bolt.terrain == TerrainInteraction::Grow
            && end != bolt.origin
            && self.world.feature_at(end) == Feature::Floor
            && self.world.actor_at(end).is_none()
            && self.world.items.items_at(end).is_empty()
        {
            self.world.set_feature(end, Feature::Plant);
            bolt.obvious_effect = true;
            self.say("A plant sprouts from the ground.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::walk::walk;
    use crate::item::{Item, PotionType};
    use crate::world::{Monster, Resists};
    use sb_rng::DiceDef;

    fn fire(world: &mut World, rng: &mut GameRng, bolt: &mut Bolt) -> (Vec<String>, Vec<MonsterId>) {
        let mut pass = RealPass::new(world, rng);
        walk(bolt, &mut pass);
        (pass.messages, pass.killed)
    }

    #[test]
    fn test_spends_bolt() {
        assert!(AffectResult::Hit { damage: 0 }.spends_bolt());
        assert!(AffectResult::Resisted.spends_bolt());
        assert!(!AffectResult::Missed.spends_bolt());
        assert!(!AffectResult::Unaffected.spends_bolt());
    }

    #[test]
    fn test_damage_kills_and_credits() {
        let mut world = World::from_ascii(&["@......"]);
        let orc = world.add_monster(Monster::new(MonsterId::NONE, "orc", Coord::new(3, 0), 5));
        let mut rng = GameRng::new(9);
        let mut bolt = Bolt::new("magic dart", BeamFlavour::Magic, Coord::new(0, 0), Coord::new(3, 0))
            .with_damage(DiceDef::new(2, 1).with_bonus(10))
            .fired_by(ActorId::Player);
        let (messages, killed) = fire(&mut world, &mut rng, &mut bolt);
        assert_eq!(killed, vec![orc]);
        assert!(world.monster(orc).is_none());
        assert_eq!(world.kills[0].killer, Some(ActorId::Player));
        assert!(messages.iter().any(|m| m == "You kill the orc!"));
    }

    #[test]
    fn test_immune_target_unaffected() {
        let mut world = World::from_ascii(&["@......"]);
        let imp = world.add_monster(
            Monster::new(MonsterId::NONE, "fire imp", Coord::new(2, 0), 10).with_resists(
                Resists {
                    fire: 3,
                    ..Default::default()
                },
            ),
        );
        let mut rng = GameRng::new(1);
        let mut bolt = Bolt::new("bolt of fire", BeamFlavour::Fire, Coord::new(0, 0), Coord::new(5, 0))
            .with_damage(DiceDef::new(3, 6));
        fire(&mut world, &mut rng, &mut bolt);
        assert_eq!(world.monster(imp).map(|m| m.hp), Some(10));
        // passed straight through
        assert_eq!(bolt.pos, Coord::new(6, 0));
    }

    #[test]
    fn test_invulnerable_resists_enchantment() {
        let mut world = World::from_ascii(&["@......"]);
        let golem = world.add_monster(
            Monster::new(MonsterId::NONE, "golem", Coord::new(2, 0), 10).with_willpower(5000),
        );
        let mut rng = GameRng::new(4);
        let mut bolt = Bolt::new("slow", BeamFlavour::Slow, Coord::new(0, 0), Coord::new(2, 0))
            .with_power(200);
        let (messages, _) = fire(&mut world, &mut rng, &mut bolt);
        assert_eq!(world.monster(golem).map(|m| m.statuses.slow), Some(0));
        assert!(messages.iter().any(|m| m == "The golem resists."));
        assert_eq!(bolt.pos, Coord::new(2, 0));
    }

    #[test]
    fn test_haste_without_saving_throw() {
        let mut world = World::from_ascii(&["@......"]);
        let ogre = world.add_monster(
            Monster::new(MonsterId::NONE, "ogre", Coord::new(2, 0), 10).with_willpower(5000),
        );
        let mut rng = GameRng::new(4);
        let mut bolt = Bolt::new("haste", BeamFlavour::Haste, Coord::new(0, 0), Coord::new(2, 0));
        fire(&mut world, &mut rng, &mut bolt);
        assert!(world.monster(ogre).is_some_and(|m| m.statuses.haste > 0));
    }

    #[test]
    fn test_sleeping_target_wakes() {
        let mut world = World::from_ascii(&["@......"]);
        let rat = world.add_monster(
            Monster::new(MonsterId::NONE, "rat", Coord::new(2, 0), 50).asleep(),
        );
        let mut rng = GameRng::new(2);
        let mut bolt = Bolt::new("dart", BeamFlavour::Magic, Coord::new(0, 0), Coord::new(2, 0))
            .with_damage(DiceDef::new(1, 3));
        fire(&mut world, &mut rng, &mut bolt);
        assert!(world.monster(rat).is_some_and(|m| !m.is_asleep()));
    }

    #[test]
    fn test_dig_opens_rock() {
        let mut world = World::from_ascii(&["@.#...", "......"]);
        let mut rng = GameRng::new(1);
        let mut bolt = Bolt::new("dig", BeamFlavour::Digging, Coord::new(0, 0), Coord::new(5, 0))
            .with_terrain(TerrainInteraction::Dig);
        fire(&mut world, &mut rng, &mut bolt);
        assert_eq!(world.feature_at(Coord::new(2, 0)), Feature::Floor);
    }

    #[test]
    fn test_cold_blast_shatters_potions() {
        let mut world = World::from_ascii(&["@......"]);
        let potion = world
            .items
            .insert(Item::of_kind(ItemKind::Potion(PotionType::Healing)).at(Coord::new(3, 0)));
        let mut rng = GameRng::new(1);
        let mut bolt = Bolt::explosion(
            "freezing blast",
            BeamFlavour::Cold,
            Coord::new(3, 0),
            crate::beam::ExplosionSpec::new(1),
        );
        fire(&mut world, &mut rng, &mut bolt);
        assert!(world.items.get(potion).is_none());
    }

    #[test]
    fn test_grow_sprouts_plant() {
        let mut world = World::from_ascii(&["@...#"]);
        let mut rng = GameRng::new(1);
        let mut bolt = Bolt::new("growth", BeamFlavour::Magic, Coord::new(0, 0), Coord::new(3, 0))
            .with_terrain(TerrainInteraction::Grow);
        fire(&mut world, &mut rng, &mut bolt);
        assert_eq!(world.feature_at(Coord::new(3, 0)), Feature::Plant);
    }
}
