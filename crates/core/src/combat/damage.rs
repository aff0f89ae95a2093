//! Damage rolls for successful hits.

use rand::Rng;

use crate::stats::DamageRange;

/// Draw a damage amount uniformly from the attacker's range, both ends
/// inclusive. The range's validated floor of 1 guarantees every hit
/// deals damage.
pub fn roll_damage(rng: &mut impl Rng, range: DamageRange) -> u32 {
    rng.gen_range(range.min()..=range.max())
}
