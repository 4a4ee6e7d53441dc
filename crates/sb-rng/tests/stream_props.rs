//! Stream isolation and dice bounds

use proptest::prelude::*;

use sb_rng::{DiceDef, GameRng, calc_dice};

// ============================================================================
// Helpers
// ============================================================================

fn burn(rng: &mut GameRng, draws: usize) {
    for _ in 0..draws {
        rng.rn2(1000);
    }
}

// ============================================================================
// Excursions
// ============================================================================

proptest! {
    #[test]
    fn prop_excursion_leaves_outer_stream(
        outer in any::<u64>(),
        inner in any::<u64>(),
        before in 0usize..20,
        inside in 0usize..50,
    ) {
        let mut a = GameRng::new(outer);
        let mut b = GameRng::new(outer);
        burn(&mut a, before);
        burn(&mut b, before);

        {
            let mut scoped = a.excursion(inner);
            burn(&mut scoped, inside);
            prop_assert_eq!(scoped.seed(), inner);
        }

        prop_assert_eq!(a.seed(), outer);
        prop_assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn prop_same_seed_same_excursion(outer in any::<u64>(), inner in any::<u64>(), skew in 0usize..10) {
        let mut a = GameRng::new(outer);
        let mut b = GameRng::new(outer.wrapping_add(1));
        burn(&mut b, skew);

        let first: Vec<i32> = a.with_seed(inner, |r| (0..16).map(|_| r.rn2(100)).collect());
        let second: Vec<i32> = b.with_seed(inner, |r| (0..16).map(|_| r.rn2(100)).collect());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_nested_excursions_unwind(seed in any::<u64>()) {
        let mut a = GameRng::new(seed);
        let mut b = GameRng::new(seed);

        a.with_seed(1, |r| {
            r.rn2(10);
            r.with_seed(2, |inner| inner.rn2(10));
            r.rn2(10)
        });

        prop_assert_eq!(a.next_u64(), b.next_u64());
    }
}

// ============================================================================
// Dice
// ============================================================================

proptest! {
    #[test]
    fn prop_roll_within_bounds(num in 0i32..10, size in 0i32..30, seed in any::<u64>()) {
        let dice = DiceDef::new(num, size);
        let mut rng = GameRng::new(seed);
        let roll = dice.roll(&mut rng);
        prop_assert!(roll <= dice.max());
        if num > 0 && size > 0 {
            prop_assert!(roll >= num);
        } else {
            prop_assert_eq!(roll, 0);
        }
    }

    #[test]
    fn prop_calc_dice_keeps_maximum_close(num in 1i32..8, max in 1i32..200, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let dice = calc_dice(num, max, &mut rng);
        prop_assert!(dice.max() >= max - num);
        prop_assert!(dice.max() <= max + num);
    }
}
