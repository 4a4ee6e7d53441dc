//! Armour and elemental resistance
//!
//! Damage passes through two filters: the elemental adjustment for the
//! defender's resistance tier, then the armour rule the attack uses.

use sb_rng::GameRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Damage element
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Element {
    #[default]
    Magic = 0,
    Fire = 1,
    Cold = 2,
    Electricity = 3,
    Poison = 4,
    NegativeEnergy = 5,
    Acid = 6,
    Holy = 7,
    /// Half cold, half impact
    Ice = 8,
    Lava = 9,
    Hellfire = 10,
    Steam = 11,
}

/// How armour class reduces a hit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AcRule {
    /// Armour is ignored
    None = 0,
    /// Subtract a uniform roll below AC
    #[default]
    Normal = 1,
    /// As normal, against half the AC
    Half = 2,
    /// Sum of three rolls below AC
    Triple = 3,
    /// Each damage point passes independently
    Proportional = 4,
}

/// Per-mille chance that one damage point gets past one point of AC under
/// [`AcRule::Proportional`].
pub const DEFAULT_AC_PASS_PERMILLE: i32 = 970;

/// Reduce `damage` by armour under the given rule.
pub fn apply_armour(ac: i32, damage: i32, rule: AcRule, rng: &mut GameRng) -> i32 {
    apply_armour_with(ac, damage, rule, DEFAULT_AC_PASS_PERMILLE, rng)
}

/// [`apply_armour`] with an explicit proportional pass rate.
pub fn apply_armour_with(
    ac: i32,
    damage: i32,
    rule: AcRule,
    pass_permille: i32,
    rng: &mut GameRng,
) -> i32 {
    if damage <= 0 {
        return 0;
    }
    if ac <= 0 {
        return damage;
    }
    let reduced = match rule {
        AcRule::None => damage,
        AcRule::Normal => damage - rng.rn2(ac),
        AcRule::Half => damage - rng.rn2(ac / 2),
        AcRule::Triple => damage - (rng.rn2(ac) + rng.rn2(ac) + rng.rn2(ac)),
        AcRule::Proportional => {
            let chance = proportional_pass_chance(ac, pass_permille);
            (0..damage).filter(|_| rng.rn2(10_000) < chance).count() as i32
        }
    };
    reduced.max(0)
}

/// Chance in 10000 that one damage point passes `ac` points of armour.
pub fn proportional_pass_chance(ac: i32, pass_permille: i32) -> i32 {
    let rate = f64::from(pass_permille.clamp(0, 1000)) / 1000.0;
    (rate.powi(ac.max(0)) * 10_000.0).round() as i32
}

/// Mean damage left after armour, without rolling.
pub fn expected_after_armour(ac: i32, damage: i32, rule: AcRule, pass_permille: i32) -> i32 {
    if damage <= 0 {
        return 0;
    }
    if ac <= 0 {
        return damage;
    }
    let reduced = match rule {
        AcRule::None => damage,
        AcRule::Normal => damage - (ac - 1) / 2,
        AcRule::Half => damage - (ac / 2 - 1).max(0) / 2,
        AcRule::Triple => damage - 3 * (ac - 1) / 2,
        AcRule::Proportional => {
            damage * proportional_pass_chance(ac, pass_permille) / 10_000
        }
    };
    reduced.max(0)
}

/// Scale `damage` for a defender with resistance `tier` to `element`.
///
/// Players and monsters read fire, cold and electricity tiers differently:
/// player resistance is graded, monster resistance is closer to immunity.
pub fn resist_adjust(damage: i32, element: Element, tier: i32, is_player: bool) -> i32 {
    if damage <= 0 {
        return 0;
    }
    let adjusted = match element {
        Element::Fire | Element::Cold if is_player => match tier {
            t if t > 0 => damage / (1 + t * t),
            t if t < 0 => damage * 15 / 10,
            _ => damage,
        },
        Element::Fire | Element::Cold => match tier {
            t if t > 1 => 0,
            1 => damage / 3,
            t if t < 0 => damage * 15 / 10,
            _ => damage,
        },
        Element::Ice => match tier {
            t if t > 0 => damage / 2,
            t if t < 0 => damage * 13 / 10,
            _ => damage,
        },
        Element::Lava => match tier {
            t if t > 0 => damage / 2,
            t if t < 0 => damage * 12 / 10,
            _ => damage,
        },
        Element::Hellfire => match tier {
            t if t > 2 => 0,
            t if t > 0 => damage / 2,
            t if t < 0 => damage * 15 / 10,
            _ => damage,
        },
        Element::Steam => match tier {
            t if t > 0 => damage / 2,
            _ => damage,
        },
        Element::Electricity if is_player => match tier {
            t if t >= 3 => 0,
            t if t > 0 => damage / 3,
            _ => damage,
        },
        Element::Electricity | Element::Acid | Element::Poison | Element::NegativeEnergy => {
            if tier > 0 {
                0
            } else {
                damage
            }
        }
        Element::Holy => match tier {
            t if t < 0 => damage * 15 / 10,
            t if t > 0 => 0,
            _ => damage,
        },
        Element::Magic => damage,
    };
    adjusted.max(0)
}

/// Willpower that no enchantment gets past.
pub const WILL_INVULNERABLE: i32 = 5000;

/// Shrink `value` above `first_step`: each `stepping` band past the first
/// step counts half, and nothing exceeds `ceiling` (`-1` for none).
pub fn stepdown_value(value: i32, stepping: i32, first_step: i32, last_step: i32, ceiling: i32) -> i32 {
    if value <= first_step {
        return value;
    }
    let mut stepped = value;
    let mut step = first_step;
    while step <= last_step && stepped > step {
        stepped = (stepped - step) / 2 + step;
        step += stepping.max(1);
    }
    if ceiling != -1 && stepped > ceiling {
        ceiling
    } else {
        stepped
    }
}

/// Saving throw of `willpower` against an enchantment of `power`.
/// Returns true when the enchantment is shrugged off.
pub fn resists_enchantment(willpower: i32, power: i32, rng: &mut GameRng) -> bool {
    if willpower >= WILL_INVULNERABLE {
        return true;
    }
    // Feeble minds give in half the time regardless of power
    if willpower < 6 && rng.coinflip() {
        return false;
    }
    let power = stepdown_value(power, 30, 40, 100, 120);
    let chance = 100 + willpower - power;
    let roll = rng.rn2(100) + rng.rn2(101);
    roll < chance
}
