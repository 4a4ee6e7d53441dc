//! Area and arcing spells cast through the public entry point

use proptest::prelude::*;
use strum::IntoEnumIterator;

use sb_core::beam::AlwaysYes;
use sb_core::spell::SpellId;
use sb_core::spells::{
    SpellOutcome, SpellResult, cast_spell, chain_power_step, discharge_continues, shatter_dice,
    shatter_wall_chance,
};
use sb_core::world::{
    ActorId, Feature, MapOracle, Material, Monster, MonsterId, Statuses, World,
};
use sb_core::{Coord, GameRng};

// ============================================================================
// Helpers
// ============================================================================

fn cast(world: &mut World, spell: SpellId, power: i32, target: Coord, seed: u64) -> SpellResult {
    let mut rng = GameRng::new(seed);
    cast_spell(world, &mut rng, ActorId::Player, spell, power, target, &mut AlwaysYes)
}

fn monster(world: &mut World, name: &str, x: i32, y: i32, hp: i32) -> MonsterId {
    world.add_monster(Monster::new(MonsterId::NONE, name, Coord::new(x, y), hp))
}

fn hp(world: &World, id: MonsterId) -> Option<i32> {
    world.monster(id).map(|m| m.hp)
}

// ============================================================================
// Chain lightning
// ============================================================================

#[test]
fn test_chain_lightning_grounds_out_behind_wall() {
    let mut world = World::from_ascii(&["@..#.", "...#."]);
    let hidden = monster(&mut world, "orc", 4, 0, 40);

    let result = cast(&mut world, SpellId::ChainLightning, 100, Coord::new(4, 0), 5);

    assert_eq!(result.outcome, SpellOutcome::NoTarget);
    assert_eq!(result.messages, vec!["The lightning grounds out.".to_string()]);
    assert!(result.killed.is_empty());
    assert_eq!(hp(&world, hidden), Some(40));
    assert_eq!(world.player.hp, world.player.max_hp);
}

proptest! {
    #[test]
    fn prop_chain_power_always_drops(pow in 1i32..500, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut p = pow;
        let mut arcs = 0;
        while p > 0 {
            let next = chain_power_step(p, &mut rng);
            prop_assert!((p - 20..=p - 8).contains(&next));
            p = next;
            arcs += 1;
        }
        prop_assert!(arcs <= pow / 8 + 1);
    }
}

// ============================================================================
// Static discharge
// ============================================================================

proptest! {
    #[test]
    fn prop_discharge_always_ends(pow in 0i32..10_000, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut p = pow;
        let mut depth = 0;
        while let Some(next) = discharge_continues(p, &mut rng) {
            prop_assert!(next < p);
            p = next;
            depth += 1;
        }
        prop_assert!(depth <= 16);
    }
}

#[test]
fn test_discharge_needs_a_neighbour() {
    let mut world = World::from_ascii(&["@.....", "......"]);
    let distant = monster(&mut world, "rat", 3, 1, 10);

    let result = cast(&mut world, SpellId::StaticDischarge, 100, Coord::new(0, 0), 1);

    assert_eq!(result.messages, vec!["The air crackles harmlessly.".to_string()]);
    assert_eq!(hp(&world, distant), Some(10));
}

// ============================================================================
// Shatter
// ============================================================================

proptest! {
    #[test]
    fn prop_shatter_dice_grow_with_power(
        material in prop::sample::select(Material::iter().collect::<Vec<_>>()),
        flies in any::<bool>(),
        pow in 0i32..200,
        extra in 0i32..100,
    ) {
        let calm = Statuses::default();
        let weak = shatter_dice(material, flies, &calm, pow);
        let strong = shatter_dice(material, flies, &calm, pow + extra);
        prop_assert_eq!(weak.num, strong.num);
        prop_assert!(weak.max() <= strong.max());
        if material == Material::Insubstantial {
            prop_assert_eq!(strong.max(), 0);
        }
    }

    #[test]
    fn prop_shatter_wall_chance_grows_with_power(pow in 0i32..1000, extra in 0i32..200) {
        for feature in Feature::iter() {
            let weak = shatter_wall_chance(feature, pow);
            let strong = shatter_wall_chance(feature, pow + extra);
            prop_assert!(weak >= 0);
            prop_assert!(weak <= strong, "{} weakened with power", feature);
        }
        for unbreakable in [Feature::Floor, Feature::PermaRock, Feature::DeepWater, Feature::Lava] {
            prop_assert_eq!(shatter_wall_chance(unbreakable, pow), 0);
        }
    }
}

#[test]
fn test_shatter_dice_by_material() {
    let calm = Statuses::default();
    let stone = shatter_dice(Material::Stone, false, &calm, 60);
    let metal = shatter_dice(Material::Metal, false, &calm, 60);
    let flesh = shatter_dice(Material::Flesh, false, &calm, 60);
    let bird = shatter_dice(Material::Flesh, true, &calm, 60);
    assert!(stone.num > metal.num);
    assert!(metal.num > flesh.num);
    assert!(flesh.num > bird.num);

    let petrified = Statuses {
        petrified: 5,
        ..Default::default()
    };
    assert_eq!(shatter_dice(Material::Flesh, true, &petrified, 60).num, 6);
}

#[test]
fn test_shatter_smashes_stone_golem() {
    let mut world = World::from_ascii(&["@.....", "......"]);
    let golem = world.add_monster(
        Monster::new(MonsterId::NONE, "stone golem", Coord::new(2, 1), 300)
            .with_material(Material::Stone),
    );
    let ghost = world.add_monster(
        Monster::new(MonsterId::NONE, "ghost", Coord::new(1, 1), 30)
            .with_material(Material::Insubstantial),
    );

    let result = cast(&mut world, SpellId::Shatter, 60, Coord::new(0, 0), 3);

    assert_eq!(result.messages[0], "The dungeon rumbles!");
    assert!(!result.messages.iter().any(|m| m == "Ka-crash!"));
    assert_eq!(result.noise, 30);
    assert!(hp(&world, golem).is_some_and(|hp| hp <= 294));
    assert_eq!(hp(&world, ghost), Some(30));
    assert_eq!(world.player.hp, world.player.max_hp);
}

// ============================================================================
// Fragmentation
// ============================================================================

#[test]
fn test_fragmentation_on_bare_floor() {
    let mut world = World::from_ascii(&["@.....", "......"]);
    let result = cast(&mut world, SpellId::Fragmentation, 50, Coord::new(3, 1), 7);

    assert_eq!(result.outcome, SpellOutcome::NoTarget);
    assert_eq!(result.messages, vec!["This floor is unnaturally hard.".to_string()]);
    assert!(result.outcome.takes_turn());
}

#[test]
fn test_fragmentation_out_of_sight() {
    let mut world = World::from_ascii(&["@.#.8."]);
    let result = cast(&mut world, SpellId::Fragmentation, 50, Coord::new(4, 0), 7);

    assert_eq!(result.outcome, SpellOutcome::NoTarget);
    assert_eq!(result.messages, vec!["You can't see there.".to_string()]);
    assert_eq!(world.feature_at(Coord::new(4, 0)), Feature::GraniteStatue);
}

#[test]
fn test_fragmented_statue_sprays_bystanders() {
    let mut world = World::from_ascii(&["@.......", "....8...", "........"]);
    let orc = monster(&mut world, "orc", 5, 1, 200);

    let result = cast(&mut world, SpellId::Fragmentation, 50, Coord::new(4, 1), 7);

    assert_eq!(result.outcome, SpellOutcome::Succeeded);
    assert_eq!(result.messages[0], "The granite statue shatters!");
    assert_eq!(world.feature_at(Coord::new(4, 1)), Feature::Floor);
    assert!(hp(&world, orc).is_some_and(|hp| hp < 200));
    assert_eq!(world.player.hp, world.player.max_hp);
}
