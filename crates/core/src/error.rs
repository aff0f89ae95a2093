//! Combat operation errors.
//!
//! Precondition failures raised by [`Creature::attack_target`] and
//! [`Creature::heal`]. Every check runs before any state change, so a
//! failed call leaves both combatants exactly as they were.
//!
//! [`Creature::attack_target`]: crate::creature::Creature::attack_target
//! [`Creature::heal`]: crate::creature::Creature::heal

/// Errors that occur while resolving combat operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// A downed creature tried to attack.
    #[error("{name} is down and cannot attack")]
    AttackerDown {
        /// Name of the would-be attacker.
        name: String,
    },

    /// The attack target is already down.
    #[error("Cannot attack {name}, who is already down")]
    TargetDown {
        /// Name of the downed target.
        name: String,
    },

    /// A downed player tried to heal.
    #[error("{name} is down and cannot heal")]
    HealerDown {
        /// Name of the would-be healer.
        name: String,
    },

    /// Heal invoked on a creature without the self-heal ability.
    #[error("{name} has no self-heal ability")]
    NoHealAbility {
        /// Name of the creature.
        name: String,
    },

    /// Every heal charge has been spent.
    #[error("No heals left ({used} of {max} used)")]
    NoHealsLeft {
        /// Charges already used.
        used: u32,
        /// Charges granted per combat.
        max: u32,
    },
}
