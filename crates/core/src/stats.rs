//! Stat validation and the bounded value types every combatant carries.
//!
//! Construction is the only gate: once a [`DamageRange`] or [`HealthPool`]
//! exists it stays within its bounds, so combat resolution never
//! re-validates.

use std::fmt;

use crate::config::Ruleset;

/// Which combat stat a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
}

/// Errors raised while validating combatant parameters at construction.
///
/// A failed construction produces no creature, so callers never observe a
/// half-built combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    /// Stat value falls outside the allowed band.
    #[error("{stat} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Which stat was rejected.
        stat: StatKind,
        /// The rejected value.
        value: i32,
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },

    /// Creature name is empty.
    #[error("Creature name must not be empty")]
    EmptyName,

    /// Maximum health of zero would create a creature that is born dead.
    #[error("Maximum health must be at least 1")]
    ZeroMaxHealth,

    /// Damage range minimum below the minimum meaningful damage.
    #[error("Damage range minimum must be at least 1, got {min}")]
    DamageFloorTooLow {
        /// The rejected minimum.
        min: u32,
    },

    /// Damage range bounds are reversed.
    #[error("Damage range minimum {min} exceeds maximum {max}")]
    ReversedDamageRange {
        /// Lower bound as given.
        min: u32,
        /// Upper bound as given.
        max: u32,
    },
}

/// Check a combat stat against [`Ruleset::STAT_MIN`]..=[`Ruleset::STAT_MAX`]
/// and hand the value back on success.
pub fn validate_stat(stat: StatKind, value: i32) -> Result<i32, StatError> {
    if !(Ruleset::STAT_MIN..=Ruleset::STAT_MAX).contains(&value) {
        return Err(StatError::OutOfRange {
            stat,
            value,
            min: Ruleset::STAT_MIN,
            max: Ruleset::STAT_MAX,
        });
    }
    Ok(value)
}

/// Inclusive damage band rolled on a successful hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    min: u32,
    max: u32,
}

impl DamageRange {
    /// Build a validated range. The minimum must be at least 1 and must not
    /// exceed the maximum; a degenerate range (`min == max`) is allowed and
    /// always rolls exactly that value.
    pub fn new(min: u32, max: u32) -> Result<Self, StatError> {
        if min < 1 {
            return Err(StatError::DamageFloorTooLow { min });
        }
        if min > max {
            return Err(StatError::ReversedDamageRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Inclusive upper bound.
    pub const fn max(&self) -> u32 {
        self.max
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Integer health meter tracked per combatant.
///
/// `current` never exceeds `maximum` and never underflows; damage saturates
/// at zero and restoration clamps at the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthPool {
    current: u32,
    maximum: u32,
}

impl HealthPool {
    /// New pool filled to `maximum`.
    pub const fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// True when no health remains.
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtract up to `amount`, saturating at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Add up to `amount`, clamped at the maximum.
    ///
    /// # Returns
    ///
    /// The amount actually restored, which is less than `amount` when the
    /// pool is close to full and zero when it is already full.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let missing = self.maximum - self.current;
        let actual = amount.min(missing);
        self.current += actual;
        actual
    }
}

impl fmt::Display for HealthPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}
