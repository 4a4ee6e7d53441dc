//! Shatter

use sb_rng::{DiceDef, GameRng};

use super::{SpellResult, caster_pos, cells_in_view, harm};
use crate::item::ItemKind;
use crate::world::{ActorId, Feature, MapOracle, Material, Statuses, Transformation, World};

const SHATTER_NOISE: i32 = 30;

/// Dice a shattering blast rolls against a body.
///
/// Brittle and heavy bodies take more dice; liquid bodies take one small
/// die, insubstantial ones nothing.
pub fn shatter_dice(material: Material, flies: bool, statuses: &Statuses, pow: i32) -> DiceDef {
    let size = 5 + pow / 3;
    let num = if material == Material::Insubstantial {
        0
    } else if statuses.is_petrified() {
        6
    } else if statuses.is_petrifying() {
        4
    } else {
        match material {
            Material::Stone | Material::Crystal | Material::Bone => 6,
            Material::Metal | Material::Silver | Material::Ice => 4,
            Material::Liquid => return DiceDef::new(1, size / 2),
            _ if flies => 1,
            _ => 3,
        }
    };
    DiceDef::new(num, size)
}

/// Dice a monster's own shatter rolls against itself and its allies.
pub fn shatter_self_dice(pow: i32) -> DiceDef {
    DiceDef::new(3, 5 + pow / 3)
}

/// Percent chance a shattering blast brings down `feature`.
pub fn shatter_wall_chance(feature: Feature, pow: i32) -> i32 {
    match feature {
        Feature::ClosedDoor | Feature::OpenDoor | Feature::SecretDoor | Feature::Grate => 100,
        Feature::MetalWall => pow / 10,
        Feature::GraniteStatue | Feature::OrcishIdol | Feature::CrystalWall => 50,
        Feature::StoneWall | Feature::ClearStoneWall => pow / 6,
        Feature::RockWall | Feature::ClearRockWall | Feature::WaxWall => pow / 4,
        _ => 0,
    }
}

/// A shock wave centred on the caster: brittle bodies, potions and walls
/// nearby crack apart.
pub fn shatter(
    world: &mut World,
    rng: &mut GameRng,
    caster: ActorId,
    power: i32,
) -> SpellResult {
    let mut result = SpellResult::new();
    let Some(centre) = caster_pos(world, caster) else {
        return result;
    };
    let radius = 3 + power / 50;
    let cells = cells_in_view(world, centre, radius);
    result.say("The dungeon rumbles!");
    result.noise = SHATTER_NOISE;

    let mut broken_potions = 0;
    for &c in &cells {
        for id in world.items.items_at(c) {
            let is_potion = world
                .items
                .get(id)
                .is_some_and(|item| matches!(item.kind(), ItemKind::Potion(_)));
            if is_potion && !rng.one_in(10) {
                world.items.remove(id);
                broken_potions += 1;
            }
        }
    }

    // A monster caster is caught in its own blast along with its friends,
    // though more lightly than its enemies.
    let caster_side = world.actor(caster).map(|a| a.attitude());
    let victims: Vec<ActorId> = cells
        .iter()
        .filter_map(|&c| world.actor_at(c))
        .filter(|&id| !(caster.is_player() && id.is_player()))
        .collect();
    for id in victims {
        let Some((dice, ac)) = world.actor(id).map(|a| {
            let mut dice = shatter_dice(a.material(), a.flies(), a.statuses(), power);
            let own_side = id == caster
                || caster_side.is_some_and(|side| a.attitude().is_aligned_with(side));
            if !caster.is_player() && own_side {
                let light = shatter_self_dice(power);
                dice = DiceDef::new(dice.num.min(light.num), light.size);
            }
            (dice, a.armour_class())
        }) else {
            continue;
        };
        if dice.num <= 0 {
            continue;
        }
        let damage = dice.roll(rng) - rng.rn2(ac);
        tracing::trace!(?id, %dice, damage, "shatter");
        if damage > 0 {
            harm(world, &mut result, caster, id, damage);
        }
    }

    let mut toppled = 0;
    for &c in &cells {
        let chance = shatter_wall_chance(world.feature_at(c), power);
        if chance > 0 && rng.x_chance_in_y(chance, 100) {
            world.set_feature(c, Feature::Floor);
            toppled += 1;
        }
    }
    if toppled > 0 {
        result.say("Ka-crash!");
    }

    if caster.is_player() {
        let self_damage = match world.player.transformation {
            Transformation::Statue => 15 + rng.random2avg(power / 5, 4),
            Transformation::IceBeast => 10 + rng.random2avg(power / 5, 4) / 2,
            _ => 0,
        };
        if self_damage > 0 {
            result.say("Argh!");
            harm(world, &mut result, caster, ActorId::Player, self_damage);
        }
    }

    tracing::debug!(radius, broken_potions, toppled, "shatter");
    result
}
