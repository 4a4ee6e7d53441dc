//! Fragmentation: blow a brittle target apart into shrapnel

use sb_rng::{DiceDef, GameRng};

use super::{SpellResult, caster_pos, harm};
use crate::beam::{BeamFlavour, Bolt, ExplosionSpec};
use crate::geom::Coord;
use crate::world::{ActorId, Feature, LosMode, MapOracle, Material, Transformation, World};

/// The blast a fragmented target produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentBlast {
    pub name: &'static str,
    /// What broke, for messages
    pub what: String,
    pub flavour: BeamFlavour,
    pub dice: DiceDef,
    pub radius: i32,
    pub hole_in_the_middle: bool,
    /// The target itself is destroyed
    pub destroyed: bool,
}

impl FragmentBlast {
    fn new(name: &'static str, what: impl Into<String>, num: i32, pow: i32) -> Self {
        Self {
            name,
            what: what.into(),
            flavour: BeamFlavour::Fragmentation,
            dice: DiceDef::new(num, 5 + pow / 10),
            radius: 1,
            hole_in_the_middle: true,
            destroyed: false,
        }
    }

    fn radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    fn solid(mut self) -> Self {
        self.hole_in_the_middle = false;
        self
    }
}

fn body_blast(
    what: &str,
    material: Material,
    petrified: bool,
    petrifying: bool,
    pow: i32,
    rng: &mut GameRng,
) -> Option<FragmentBlast> {
    let blast = if petrified {
        FragmentBlast::new("blast of petrified fragments", what, 3, pow).radius(2)
    } else if petrifying {
        FragmentBlast::new("blast of petrified fragments", what, 2, pow)
    } else {
        match material {
            Material::Metal => FragmentBlast::new("blast of metal fragments", what, 4, pow),
            Material::Stone => {
                FragmentBlast::new("blast of rock fragments", what, 3, pow).radius(2)
            }
            Material::Silver => {
                FragmentBlast::new("blast of silver fragments", what, 3, pow).radius(2)
            }
            Material::Crystal => {
                FragmentBlast::new("blast of crystal shards", what, 4, pow).radius(2)
            }
            Material::Ice => FragmentBlast {
                flavour: BeamFlavour::Ice,
                ..FragmentBlast::new("icy blast", what, 2, pow)
            },
            Material::Bone => {
                if rng.x_chance_in_y(pow / 5, 50) {
                    FragmentBlast {
                        destroyed: true,
                        ..FragmentBlast::new("blast of bone shards", what, 4, pow)
                    }
                } else {
                    FragmentBlast::new("blast of bone shards", what, 2, pow)
                }
            }
            _ => return None,
        }
    };
    Some(blast)
}

fn terrain_blast(feature: Feature, pow: i32, rng: &mut GameRng) -> Option<FragmentBlast> {
    let what = feature.name();
    let blast = match feature {
        Feature::RockWall | Feature::ClearRockWall => {
            let destroyed = pow >= 40 && rng.one_in(3);
            FragmentBlast {
                destroyed,
                ..FragmentBlast::new("blast of rock fragments", what, 3, pow)
            }
        }
        Feature::StoneWall | Feature::ClearStoneWall => {
            let destroyed = pow >= 60 && rng.one_in(10);
            FragmentBlast {
                destroyed,
                ..FragmentBlast::new("blast of rock fragments", what, 3, pow)
            }
        }
        Feature::GraniteStatue | Feature::OrcishIdol => FragmentBlast {
            destroyed: true,
            ..FragmentBlast::new("blast of rock fragments", what, 3, pow).radius(2)
        },
        Feature::MetalWall | Feature::Grate => {
            let destroyed = feature == Feature::Grate
                || (pow >= 80 && rng.x_chance_in_y(pow / 5, 500));
            let mut blast = FragmentBlast::new("blast of metal fragments", what, 4, pow);
            if destroyed {
                blast.destroyed = true;
                blast.dice.num += 2;
            }
            blast
        }
        Feature::CrystalWall => {
            let blast = FragmentBlast::new("blast of crystal shards", what, 5, pow).radius(2);
            if rng.coinflip() {
                let radius = if rng.coinflip() { 3 } else { 2 };
                FragmentBlast {
                    destroyed: true,
                    ..blast.radius(radius)
                }
            } else {
                blast
            }
        }
        Feature::MechanicalTrap => FragmentBlast {
            destroyed: true,
            ..FragmentBlast::new("blast of metal fragments", what, 2, pow).solid()
        },
        Feature::ClosedDoor | Feature::OpenDoor | Feature::SecretDoor => FragmentBlast {
            destroyed: true,
            ..FragmentBlast::new("blast of splinters", what, 2, pow).solid()
        },
        Feature::StoneArch => FragmentBlast::new("blast of rock fragments", what, 2, pow).solid(),
        _ => return None,
    };
    Some(blast)
}

/// Work out what blowing up `target` would produce. Bodies take precedence
/// over the ground they stand on.
pub fn fragment_target(
    world: &World,
    rng: &mut GameRng,
    target: Coord,
    pow: i32,
) -> Option<FragmentBlast> {
    if let Some(id) = world.actor_at(target) {
        let body = match id {
            ActorId::Player => match world.player.transformation {
                Transformation::Statue => Some(
                    FragmentBlast::new("blast of rock fragments", "you", 3, pow).radius(2),
                ),
                Transformation::IceBeast => Some(FragmentBlast {
                    flavour: BeamFlavour::Ice,
                    ..FragmentBlast::new("icy blast", "you", 2, pow)
                }),
                Transformation::Lich => {
                    Some(FragmentBlast::new("blast of bone shards", "you", 2, pow))
                }
                Transformation::None => None,
            },
            ActorId::Monster(_) => world.actor(id).and_then(|a| {
                let statuses = *a.statuses();
                body_blast(
                    a.name(),
                    a.material(),
                    statuses.is_petrified(),
                    statuses.is_petrifying(),
                    pow,
                    rng,
                )
            }),
        };
        if body.is_some() {
            return body;
        }
    }
    terrain_blast(world.feature_at(target), pow, rng)
}

/// Shatter the target at `target` and let the pieces fly.
pub fn fragmentation(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
    target: Coord,
) -> SpellResult {
    let Some(origin) = caster_pos(world, caster) else {
        return SpellResult::no_target("There is no one to cast that.");
    };
    if !world.can_see(origin, target, LosMode::Normal) {
        return SpellResult::no_target("You can't see there.");
    }

    let Some(blast) = fragment_target(world, rng, target, power) else {
        let feature = world.feature_at(target);
        let msg = match feature {
            Feature::Floor | Feature::PermaRock => {
                format!("This {} is unnaturally hard.", feature.name())
            }
            _ => "You can't deflect your power into that!".to_string(),
        };
        return SpellResult::no_target(msg);
    };
    tracing::debug!(%target, name = blast.name, dice = %blast.dice, radius = blast.radius, "fragmentation");

    let mut result = SpellResult::new();
    let victim = world.actor_at(target).filter(|&id| id != caster);
    let on_player = world.actor_at(target) == Some(ActorId::Player);
    match (on_player, blast.destroyed) {
        (true, _) => result.say("Your body is blasted apart!"),
        (_, true) => result.say(format!("The {} shatters!", blast.what)),
        (_, false) => result.say(format!("The {} cracks apart!", blast.what)),
    }

    match victim {
        Some(ActorId::Monster(mid)) if blast.destroyed => {
            let hp = world.monster(mid).map_or(0, |m| m.hp);
            harm(world, &mut result, caster, ActorId::Monster(mid), hp);
        }
        Some(id) => {
            let damage = blast.dice.roll(rng);
            harm(world, &mut result, caster, id, damage);
        }
        None if blast.destroyed => {
            world.set_feature(target, Feature::Floor);
        }
        None => {}
    }

    let mut spec = ExplosionSpec::new(blast.radius);
    if blast.hole_in_the_middle {
        spec = spec.with_hole();
    }
    let mut bolt = Bolt::explosion(blast.name, blast.flavour, target, spec)
        .with_damage(blast.dice)
        .fired_by(caster);
    result.absorb(bolt.fire(world, rng));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::SpellOutcome;
    use crate::world::{Monster, MonsterId, Statuses};

    #[test]
    fn test_floor_is_unnaturally_hard() {
        let mut world = World::from_ascii(&["@....", "....."]);
        let mut rng = GameRng::new(3);
        let result = fragmentation(&mut world, &mut rng, ActorId::Player, 50, Coord::new(3, 0));
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
        assert_eq!(result.messages, vec!["This floor is unnaturally hard.".to_string()]);
    }

    #[test]
    fn test_unbreakable_terrain() {
        let mut world = World::from_ascii(&["@..~."]);
        let mut rng = GameRng::new(3);
        let result = fragmentation(&mut world, &mut rng, ActorId::Player, 50, Coord::new(3, 0));
        assert_eq!(result.outcome, SpellOutcome::NoTarget);
    }

    #[test]
    fn test_statue_always_breaks() {
        let mut world = World::from_ascii(&["@....", "...8.", "....."]);
        let mut rng = GameRng::new(3);
        let blast = fragment_target(&world, &mut rng, Coord::new(3, 1), 10).unwrap();
        assert!(blast.destroyed);
        assert_eq!(blast.radius, 2);
        assert_eq!(blast.dice, DiceDef::new(3, 6));

        let result = fragmentation(&mut world, &mut rng, ActorId::Player, 10, Coord::new(3, 1));
        assert_eq!(result.outcome, SpellOutcome::Succeeded);
        assert_eq!(world.feature_at(Coord::new(3, 1)), Feature::Floor);
        assert!(result.messages[0].contains("granite statue shatters"));
    }

    #[test]
    fn test_grate_adds_dice() {
        let world = World::from_ascii(&["@..=."]);
        let mut rng = GameRng::new(3);
        let blast = fragment_target(&world, &mut rng, Coord::new(3, 0), 50).unwrap();
        assert!(blast.destroyed);
        assert_eq!(blast.dice.num, 6);
    }

    #[test]
    fn test_door_blast_has_no_hole() {
        let world = World::from_ascii(&["@..+."]);
        let mut rng = GameRng::new(3);
        let blast = fragment_target(&world, &mut rng, Coord::new(3, 0), 50).unwrap();
        assert!(!blast.hole_in_the_middle);
        assert!(blast.destroyed);
    }

    #[test]
    fn test_metal_body_preferred_to_floor() {
        let mut world = World::from_ascii(&["@....."]);
        world.add_monster(
            Monster::new(MonsterId::NONE, "iron golem", Coord::new(3, 0), 80)
                .with_material(Material::Metal),
        );
        let mut rng = GameRng::new(3);
        let blast = fragment_target(&world, &mut rng, Coord::new(3, 0), 50).unwrap();
        assert_eq!(blast.name, "blast of metal fragments");
        assert_eq!(blast.dice.num, 4);
        assert!(blast.hole_in_the_middle);
    }

    #[test]
    fn test_petrified_body() {
        let mut rng = GameRng::new(3);
        assert!(body_blast("orc", Material::Flesh, false, false, 50, &mut rng).is_none());
        let stony = Statuses {
            petrified: 3,
            ..Default::default()
        };
        let blast = body_blast("orc", Material::Flesh, stony.is_petrified(), false, 50, &mut rng);
        assert_eq!(blast.map(|b| (b.dice.num, b.radius)), Some((3, 2)));
    }

    #[test]
    fn test_statue_form_player() {
        let mut world = World::from_ascii(&["@....."]);
        world.player.transformation = Transformation::Statue;
        let mut rng = GameRng::new(3);
        let blast = fragment_target(&world, &mut rng, world.player.pos, 30).unwrap();
        assert_eq!(blast.what, "you");
        assert_eq!(blast.radius, 2);
    }

    #[test]
    fn test_golem_takes_shrapnel() {
        let mut world = World::from_ascii(&["@......"]);
        let golem = world.add_monster(
            Monster::new(MonsterId::NONE, "iron golem", Coord::new(4, 0), 300)
                .with_material(Material::Metal),
        );
        let rat = world.add_monster(Monster::new(MonsterId::NONE, "rat", Coord::new(5, 0), 300));
        let mut rng = GameRng::new(3);
        let result = fragmentation(&mut world, &mut rng, ActorId::Player, 50, Coord::new(4, 0));
        assert_eq!(result.outcome, SpellOutcome::Succeeded);
        assert!(world.monster(golem).is_some_and(|m| m.hp < 300));
        assert!(world.monster(rat).is_some_and(|m| m.hp < 300));
    }
}
