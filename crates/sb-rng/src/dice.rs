//! Dice specifications

use serde::{Deserialize, Serialize};

use crate::GameRng;

/// `num` dice of `size` faces plus a flat `bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DiceDef {
    pub num: i32,
    pub size: i32,
    pub bonus: i32,
}

impl DiceDef {
    pub const fn new(num: i32, size: i32) -> Self {
        Self { num, size, bonus: 0 }
    }

    pub const fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    pub const fn none() -> Self {
        Self::new(0, 0)
    }

    pub const fn is_zero(&self) -> bool {
        (self.num <= 0 || self.size <= 0) && self.bonus == 0
    }

    pub fn roll(&self, rng: &mut GameRng) -> i32 {
        (rng.dice(self.num, self.size) + self.bonus).max(0)
    }

    pub const fn max(&self) -> i32 {
        let dice = if self.num > 0 && self.size > 0 {
            self.num * self.size
        } else {
            0
        };
        dice + self.bonus
    }

    /// Mean roll, rounded down.
    pub const fn expected(&self) -> i32 {
        let dice = if self.num > 0 && self.size > 0 {
            self.num * (self.size + 1) / 2
        } else {
            0
        };
        dice + self.bonus
    }
}

impl core::fmt::Display for DiceDef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}d{}", self.num, self.size)?;
        if self.bonus != 0 {
            write!(f, "{:+}", self.bonus)?;
        }
        Ok(())
    }
}

/// Spread `max_damage` over `num_dice` dice.
///
/// The fractional part of `max_damage / num_dice` is kept in expectation by
/// bumping the die size by one with chance `remainder` in `num_dice`.
pub fn calc_dice(num_dice: i32, max_damage: i32, rng: &mut GameRng) -> DiceDef {
    if num_dice <= 1 {
        DiceDef::new(1, max_damage)
    } else if max_damage <= num_dice {
        DiceDef::new(max_damage, 1)
    } else {
        let size = max_damage / num_dice
            + i32::from(rng.x_chance_in_y(max_damage % num_dice, num_dice));
        DiceDef::new(num_dice, size)
    }
}
