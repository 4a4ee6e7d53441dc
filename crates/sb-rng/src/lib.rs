//! Random number generation for the stonebolt engine
//!
//! A single seeded ChaCha stream is shared by the whole game turn. Nested
//! computations that must be reproducible from a stored seed (artefact
//! property rolls) borrow the stream through an [`RngExcursion`], which
//! reseeds it for the duration of the guard and puts the caller's stream
//! back exactly as it was afterwards.

mod dice;

pub use dice::{DiceDef, calc_dice};

use core::ops::{Deref, DerefMut};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; a restored stream restarts from it.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Raw 64 bits from the stream.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform value in `0..n`.
    ///
    /// Returns 0 if n is not positive.
    pub fn rn2(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `1..=n`.
    ///
    /// Returns 0 if n is not positive.
    pub fn rnd(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Roll n dice with m sides
    pub fn dice(&mut self, n: i32, m: i32) -> i32 {
        (0..n.max(0)).map(|_| self.rnd(m)).sum()
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: i32) -> bool {
        self.rn2(n) == 0
    }

    pub fn coinflip(&mut self) -> bool {
        self.rn2(2) == 0
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: i32) -> bool {
        self.rn2(100) < percent
    }

    /// Returns true with probability x/y.
    ///
    /// Never true for `x <= 0`, always true for `x >= y`. Neither edge draws
    /// from the stream.
    pub fn x_chance_in_y(&mut self, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.rn2(y) < x
    }

    /// Average of `rolls` draws in `0..max`, skewed toward the middle.
    pub fn random2avg(&mut self, max: i32, rolls: i32) -> i32 {
        let rolls = rolls.max(1);
        let mut sum = self.rn2(max);
        for _ in 1..rolls {
            sum += self.rn2(max + 1);
        }
        sum / rolls
    }

    /// Uniform value in `low..=high`.
    pub fn random_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        low + self.rn2(high - low + 1)
    }

    /// `num / den`, rounding up with probability equal to the remainder.
    pub fn div_rand_round(&mut self, num: i32, den: i32) -> i32 {
        if den <= 0 {
            return num;
        }
        let rem = num.rem_euclid(den);
        num.div_euclid(den) + i32::from(self.rn2(den) < rem)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as i32) as usize])
        }
    }

    /// Choose from `(value, weight)` pairs with probability proportional to
    /// weight. Zero-weight entries are never chosen.
    pub fn choose_weighted<'a, T>(&mut self, items: &'a [(T, u32)]) -> Option<&'a T> {
        let total: u32 = items.iter().map(|(_, w)| *w).sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.rng.gen_range(0..total);
        for (value, weight) in items {
            if roll < *weight {
                return Some(value);
            }
            roll -= weight;
        }
        None
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Reseed the stream for a nested deterministic computation.
    ///
    /// The returned guard dereferences to this generator; dropping it puts
    /// the previous stream state back untouched.
    pub fn excursion(&mut self, seed: u64) -> RngExcursion<'_> {
        let saved = core::mem::replace(&mut self.rng, ChaCha8Rng::seed_from_u64(seed));
        let saved_seed = core::mem::replace(&mut self.seed, seed);
        RngExcursion {
            rng: self,
            saved,
            saved_seed,
        }
    }

    /// Closure form of [`GameRng::excursion`].
    pub fn with_seed<T>(&mut self, seed: u64, f: impl FnOnce(&mut GameRng) -> T) -> T {
        let mut scoped = self.excursion(seed);
        f(&mut scoped)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Scoped reseed of a [`GameRng`]; restores the outer stream on drop.
pub struct RngExcursion<'a> {
    rng: &'a mut GameRng,
    saved: ChaCha8Rng,
    saved_seed: u64,
}

impl Deref for RngExcursion<'_> {
    type Target = GameRng;

    fn deref(&self) -> &GameRng {
        &*self.rng
    }
}

impl DerefMut for RngExcursion<'_> {
    fn deref_mut(&mut self) -> &mut GameRng {
        &mut *self.rng
    }
}

impl Drop for RngExcursion<'_> {
    fn drop(&mut self) {
        core::mem::swap(&mut self.rng.rng, &mut self.saved);
        self.rng.seed = self.saved_seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!((0..10).contains(&n));
        }
    }

    #[test]
    fn test_rnd_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_dice() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.dice(2, 6);
            assert!((2..=12).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
    }

    #[test]
    fn test_zero_and_negative_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rn2(-5), 0);
        assert_eq!(rng.rnd(0), 0);
        assert_eq!(rng.dice(0, 6), 0);
        assert_eq!(rng.dice(2, 0), 0);
        assert_eq!(rng.dice(-1, 6), 0);
    }

    #[test]
    fn test_x_chance_in_y_edges() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            assert!(!rng.x_chance_in_y(0, 12));
            assert!(rng.x_chance_in_y(12, 12));
            assert!(rng.x_chance_in_y(20, 12));
        }
    }

    #[test]
    fn test_random2avg_bounds() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            let v = rng.random2avg(9, 2);
            assert!((0..=9).contains(&v));
        }
    }

    #[test]
    fn test_div_rand_round() {
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            let v = rng.div_rand_round(7, 2);
            assert!(v == 3 || v == 4);
        }
        assert_eq!(rng.div_rand_round(8, 2), 4);
    }

    #[test]
    fn test_choose_weighted_skips_zero_weight() {
        let mut rng = GameRng::new(5);
        let table = [("never", 0), ("always", 3)];
        for _ in 0..100 {
            assert_eq!(rng.choose_weighted(&table), Some(&"always"));
        }
        let empty: [(u8, u32); 0] = [];
        assert_eq!(rng.choose_weighted(&empty), None);
    }

    #[test]
    fn test_excursion_restores_stream() {
        let mut reference = GameRng::new(99);
        let mut rng = GameRng::new(99);

        let first: Vec<i32> = (0..5).map(|_| reference.rn2(1000)).collect();
        let tail: Vec<i32> = (0..5).map(|_| reference.rn2(1000)).collect();

        let got_first: Vec<i32> = (0..5).map(|_| rng.rn2(1000)).collect();
        {
            let mut nested = rng.excursion(1234);
            for _ in 0..50 {
                nested.rn2(77);
            }
            assert_eq!(nested.seed(), 1234);
        }
        let got_tail: Vec<i32> = (0..5).map(|_| rng.rn2(1000)).collect();

        assert_eq!(first, got_first);
        assert_eq!(tail, got_tail);
        assert_eq!(rng.seed(), 99);
    }

    #[test]
    fn test_with_seed_is_reproducible() {
        let mut rng = GameRng::new(1);
        let a = rng.with_seed(555, |r| (0..10).map(|_| r.rn2(100)).collect::<Vec<_>>());
        rng.rn2(10);
        let b = rng.with_seed(555, |r| (0..10).map(|_| r.rn2(100)).collect::<Vec<_>>());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_keeps_seed() {
        let rng = GameRng::new(4242);
        let json = serde_json::to_string(&rng).unwrap();
        let back: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 4242);
    }
}
