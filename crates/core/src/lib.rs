//! Dice-pool duel rules.
//!
//! `skirmish-core` implements a small turn-based combat system. Attacks
//! resolve through a stat-driven dice pool and the player side carries a
//! limited self-heal. The crate is a pure rules library with no I/O and
//! no global randomness; every roll draws from a caller-supplied
//! [`rand::Rng`], so a duel replays exactly under a fixed seed.
//!
//! # Modules
//!
//! - [`config`]: rule constants (stat bounds, die faces, heal budget)
//! - [`stats`]: stat validation, damage ranges, health pools
//! - [`creature`]: combatants and their operations
//! - [`combat`]: pure dice-pool resolution functions
//! - [`error`]: combat operation errors

pub mod combat;
pub mod config;
pub mod creature;
pub mod error;
pub mod stats;

pub use combat::{AttackOutcome, AttackResult, dice_pool, roll_damage, roll_die, roll_hit};
pub use config::Ruleset;
pub use creature::{Creature, HealCharges, Role};
pub use error::CombatError;
pub use stats::{DamageRange, HealthPool, StatError, StatKind, validate_stat};
