//! Dice pool sizing and hit resolution.

use rand::Rng;

use crate::config::Ruleset;

/// Number of dice granted for an attack.
///
/// # Formula
///
/// ```text
/// pool = max(1, attack - defense + 1)
/// ```
///
/// The attacker always rolls at least one die, however outclassed. With
/// stats capped at [`Ruleset::STAT_MAX`] the pool never exceeds
/// [`Ruleset::MAX_DICE`].
pub fn dice_pool(attack: i32, defense: i32) -> u32 {
    (attack - defense + 1).max(1) as u32
}

/// Roll a single combat die, uniform over 1..=[`Ruleset::DIE_SIDES`].
pub fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=Ruleset::DIE_SIDES)
}

/// Resolve one attack attempt: roll `pool` dice and succeed when any die
/// shows [`Ruleset::HIT_THRESHOLD`] or higher.
///
/// Each die succeeds with probability 1/3, so the overall hit chance is
/// `1 - (2/3)^pool`. A larger pool converges on certainty without ever
/// reaching it. Rolling stops at the first success; only the hit/miss
/// outcome is observable, not the number of dice consumed.
pub fn roll_hit(rng: &mut impl Rng, pool: u32) -> bool {
    (0..pool).any(|_| roll_die(rng) >= Ruleset::HIT_THRESHOLD)
}
