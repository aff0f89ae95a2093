//! Combat resolution system.
//!
//! Pure functions implementing the dice-pool mechanic. An attack converts
//! the attacker's stat advantage into a pool of dice, rolls it against a
//! fixed threshold, and draws damage from the attacker's range on a hit.
//!
//! # Architecture
//!
//! - **Pure Functions**: no state lives here; all randomness comes from
//!   caller-supplied [`rand::Rng`] generators
//! - **Used by Creatures**: [`Creature::attack_target`] composes these
//!   functions and applies the result
//!
//! # Core Functions
//!
//! - `dice_pool`: stat advantage to dice count
//! - `roll_hit`: pool roll against the hit threshold
//! - `roll_damage`: uniform draw from the damage range
//!
//! [`Creature::attack_target`]: crate::creature::Creature::attack_target

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::roll_damage;
pub use hit::{dice_pool, roll_die, roll_hit};
pub use result::{AttackOutcome, AttackResult};
