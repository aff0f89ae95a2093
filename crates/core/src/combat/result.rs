//! Attack report types.

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Every die in the pool came up short.
    Miss,
    /// At least one die reached the hit threshold.
    Hit,
}

/// Result of a resolved attack.
///
/// `damage` is `Some` exactly when the outcome is a hit, and always at
/// least 1 in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack hit or missed.
    pub outcome: AttackOutcome,

    /// Damage dealt (None on a miss).
    pub damage: Option<u32>,
}

impl AttackResult {
    /// Report a miss.
    pub const fn miss() -> Self {
        Self {
            outcome: AttackOutcome::Miss,
            damage: None,
        }
    }

    /// Report a hit that dealt `damage`.
    pub const fn hit(damage: u32) -> Self {
        Self {
            outcome: AttackOutcome::Hit,
            damage: Some(damage),
        }
    }

    /// True when the attack connected.
    pub const fn is_hit(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Hit)
    }

    /// Damage dealt, zero on a miss.
    pub fn damage_dealt(&self) -> u32 {
        self.damage.unwrap_or(0)
    }
}
