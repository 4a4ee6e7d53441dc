//! Armour rules and spell range, checked as properties

use proptest::prelude::*;

use sb_core::GameRng;
use sb_core::config::EngineConfig;
use sb_core::resist::{AcRule, apply_armour, expected_after_armour};
use sb_core::spell::SpellTable;

// ============================================================================
// Helpers
// ============================================================================

const PASS: i32 = 970;

const MITIGATING: [AcRule; 4] = [AcRule::Normal, AcRule::Half, AcRule::Triple, AcRule::Proportional];

/// Mean HP lost over `trials` rounds of `hits` blows of `damage` each.
fn mean_loss(ac: i32, damage: i32, hits: usize, rule: AcRule, seed: u64, trials: usize) -> f64 {
    let mut rng = GameRng::new(seed);
    let total: i64 = (0..trials)
        .map(|_| {
            (0..hits)
                .map(|_| i64::from(apply_armour(ac, damage, rule, &mut rng)))
                .sum::<i64>()
        })
        .sum();
    total as f64 / trials as f64
}

fn split_is_preserved(ac: i32, parts: &[i32], rule: AcRule) -> bool {
    let whole: i32 = parts.iter().sum();
    let once = expected_after_armour(ac, whole, rule, PASS);
    let summed: i32 = parts
        .iter()
        .map(|&d| expected_after_armour(ac, d, rule, PASS))
        .sum();
    (once - summed).abs() < parts.len() as i32
}

// ============================================================================
// Proportional armour
// ============================================================================

#[test]
fn test_proportional_split_one_hundred_vs_ten_tens() {
    let single = mean_loss(10, 100, 1, AcRule::Proportional, 1, 2000);
    let split = mean_loss(10, 10, 10, AcRule::Proportional, 2, 2000);
    assert!(
        (single - split).abs() < 1.0,
        "one hit of 100 lost {single:.2}, ten hits of 10 lost {split:.2}"
    );
}

#[test]
fn test_other_rules_break_the_split() {
    for rule in [AcRule::Normal, AcRule::Half, AcRule::Triple] {
        let single = mean_loss(10, 100, 1, rule, 1, 2000);
        let split = mean_loss(10, 10, 10, rule, 2, 2000);
        assert!(
            (single - split).abs() > 5.0,
            "{rule}: one hit of 100 lost {single:.2}, ten hits of 10 lost {split:.2}"
        );
    }
}

#[test]
fn test_proportional_is_the_only_split_invariant_rule() {
    let parts = [10; 10];
    let preserving: Vec<AcRule> = MITIGATING
        .into_iter()
        .filter(|&rule| split_is_preserved(10, &parts, rule))
        .collect();
    assert_eq!(preserving, vec![AcRule::Proportional]);
}

#[test]
fn test_pass_rate_from_config() {
    let config = EngineConfig::default();
    assert_eq!(config.proportional_ac_pass_permille, PASS);
    assert_eq!(expected_after_armour(1, 100, AcRule::Proportional, PASS), 97);
    assert_eq!(expected_after_armour(1, 100, AcRule::Proportional, 500), 50);
}

proptest! {
    #[test]
    fn prop_proportional_split_within_rounding(
        ac in 0i32..40,
        parts in prop::collection::vec(0i32..200, 1..12),
    ) {
        prop_assert!(split_is_preserved(ac, &parts, AcRule::Proportional));
    }

    #[test]
    fn prop_armour_never_adds_damage(
        ac in 0i32..60,
        damage in 0i32..300,
        rule in prop::sample::select(MITIGATING.to_vec()),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let dealt = apply_armour(ac, damage, rule, &mut rng);
        prop_assert!((0..=damage).contains(&dealt));
    }

    #[test]
    fn prop_no_armour_is_identity(damage in 0i32..300, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        prop_assert_eq!(apply_armour(25, damage, AcRule::None, &mut rng), damage);
    }
}

// ============================================================================
// Spell range
// ============================================================================

#[test]
fn test_range_endpoints() {
    for spell in SpellTable::builtin().iter() {
        if spell.min_range < spell.max_range {
            assert_eq!(spell.range(0), spell.min_range, "{}", spell.name);
            assert_eq!(spell.range(spell.power_cap), spell.max_range, "{}", spell.name);
            assert_eq!(spell.range(spell.power_cap * 3), spell.max_range, "{}", spell.name);
        } else {
            assert_eq!(spell.range(0), spell.range(spell.power_cap), "{}", spell.name);
        }
    }
}

proptest! {
    #[test]
    fn prop_range_monotonic_in_power(low in 0i32..300, step in 0i32..100) {
        for spell in SpellTable::builtin().iter() {
            let a = spell.range(low);
            let b = spell.range(low + step);
            prop_assert!(a <= b, "{} shrank from {} to {}", spell.name, a, b);
            prop_assert!((spell.min_range..=spell.max_range).contains(&b));
        }
    }
}
