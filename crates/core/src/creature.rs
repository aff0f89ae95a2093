//! Combatants and the operations they perform.
//!
//! A [`Creature`] bundles validated stats with a role. Players carry a
//! limited pool of self-heal charges; monsters fight with attacks alone.
//! Both sides resolve attacks through the same dice-pool rules.

use std::fmt;

use rand::Rng;

use crate::combat::{AttackResult, dice_pool, roll_damage, roll_hit};
use crate::config::Ruleset;
use crate::error::CombatError;
use crate::stats::{DamageRange, HealthPool, StatError, StatKind, validate_stat};

/// Self-heal budget tracked per player.
///
/// Starts untouched and only ever counts up; a charge is consumed on every
/// successful heal call, including one that restores nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealCharges {
    used: u32,
}

impl HealCharges {
    /// Charges already spent.
    pub const fn used(&self) -> u32 {
        self.used
    }

    /// Charges still available.
    pub const fn remaining(&self) -> u32 {
        Ruleset::MAX_HEALS.saturating_sub(self.used)
    }

    /// True once every charge is spent.
    pub const fn is_exhausted(&self) -> bool {
        self.used >= Ruleset::MAX_HEALS
    }

    fn spend(&mut self) {
        self.used += 1;
    }
}

/// What kind of combatant a creature is.
///
/// The role carries the capabilities that differ between the two sides,
/// so a creature's abilities are visible in its type rather than checked
/// by name at call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// Player-controlled combatant with a self-heal budget.
    Player {
        /// Heal charges remaining for this combat.
        charges: HealCharges,
    },
    /// Hostile combatant without healing.
    Monster,
}

impl Role {
    /// Fresh player role with the full heal budget.
    pub fn player() -> Self {
        Role::Player {
            charges: HealCharges::default(),
        }
    }

    /// Monster role.
    pub const fn monster() -> Self {
        Role::Monster
    }

    /// True for the player side.
    pub const fn is_player(&self) -> bool {
        matches!(self, Role::Player { .. })
    }
}

/// A named combatant with validated stats.
///
/// Health changes only through [`take_damage`] and [`heal`], so the
/// `0 <= health <= max_health` bound holds for the creature's whole life.
///
/// [`take_damage`]: Creature::take_damage
/// [`heal`]: Creature::heal
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    name: String,
    attack: i32,
    defense: i32,
    health: HealthPool,
    damage: DamageRange,
    role: Role,
}

impl Creature {
    /// Build a creature with an explicit role.
    ///
    /// Parameters are validated in order: name, attack, defense, maximum
    /// health. The damage range arrives already validated by
    /// [`DamageRange::new`]. The creature starts at full health.
    ///
    /// # Errors
    ///
    /// Returns a [`StatError`] describing the first parameter that fails
    /// validation.
    pub fn new(
        name: impl Into<String>,
        attack: i32,
        defense: i32,
        max_health: u32,
        damage: DamageRange,
        role: Role,
    ) -> Result<Self, StatError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StatError::EmptyName);
        }
        let attack = validate_stat(StatKind::Attack, attack)?;
        let defense = validate_stat(StatKind::Defense, defense)?;
        if max_health == 0 {
            return Err(StatError::ZeroMaxHealth);
        }

        Ok(Self {
            name,
            attack,
            defense,
            health: HealthPool::new(max_health),
            damage,
            role,
        })
    }

    /// Build a player with a fresh heal budget.
    pub fn player(
        name: impl Into<String>,
        attack: i32,
        defense: i32,
        max_health: u32,
        damage: DamageRange,
    ) -> Result<Self, StatError> {
        Self::new(name, attack, defense, max_health, damage, Role::player())
    }

    /// Build a monster.
    pub fn monster(
        name: impl Into<String>,
        attack: i32,
        defense: i32,
        max_health: u32,
        damage: DamageRange,
    ) -> Result<Self, StatError> {
        Self::new(name, attack, defense, max_health, damage, Role::monster())
    }

    // ===== queries =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn attack(&self) -> i32 {
        self.attack
    }

    pub const fn defense(&self) -> i32 {
        self.defense
    }

    /// Current health meter.
    pub const fn health(&self) -> HealthPool {
        self.health
    }

    pub const fn damage_range(&self) -> DamageRange {
        self.damage
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    /// True while any health remains.
    pub const fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    /// Heal charges still available; always zero for monsters.
    pub const fn heals_left(&self) -> u32 {
        match &self.role {
            Role::Player { charges } => charges.remaining(),
            Role::Monster => 0,
        }
    }

    // ===== operations =====

    /// Apply incoming damage, saturating at zero health.
    ///
    /// Infallible: overkill clamps, and hitting a creature that is already
    /// down is rejected earlier by [`attack_target`], not here.
    ///
    /// [`attack_target`]: Creature::attack_target
    pub fn take_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }

    /// Attack another creature.
    ///
    /// Sizes the dice pool from the attacker's advantage, rolls it, and on
    /// a hit draws damage from the attacker's range and applies it to the
    /// target. The attacker itself is never mutated.
    ///
    /// # Errors
    ///
    /// Fails without touching either creature when the attacker or the
    /// target is already down; the attacker is checked first.
    pub fn attack_target(
        &self,
        target: &mut Creature,
        rng: &mut impl Rng,
    ) -> Result<AttackResult, CombatError> {
        if !self.is_alive() {
            return Err(CombatError::AttackerDown {
                name: self.name.clone(),
            });
        }
        if !target.is_alive() {
            return Err(CombatError::TargetDown {
                name: target.name.clone(),
            });
        }

        // 1. Size the pool and roll for a hit
        let pool = dice_pool(self.attack, target.defense);
        if !roll_hit(rng, pool) {
            return Ok(AttackResult::miss());
        }

        // 2. Draw damage and apply it
        let damage = roll_damage(rng, self.damage);
        target.take_damage(damage);

        Ok(AttackResult::hit(damage))
    }

    /// Spend one heal charge to restore health.
    ///
    /// The amount is a fixed percentage of maximum health (see
    /// [`Ruleset::heal_amount`]), clamped so health never exceeds the
    /// maximum. The charge is consumed even when the creature is already
    /// at full health and nothing is restored.
    ///
    /// # Returns
    ///
    /// The amount actually restored.
    ///
    /// # Errors
    ///
    /// Fails when the creature is down, has no self-heal ability
    /// (monsters), or has spent every charge. A failed call consumes
    /// nothing.
    pub fn heal(&mut self) -> Result<u32, CombatError> {
        if !self.is_alive() {
            return Err(CombatError::HealerDown {
                name: self.name.clone(),
            });
        }
        let Role::Player { charges } = &mut self.role else {
            return Err(CombatError::NoHealAbility {
                name: self.name.clone(),
            });
        };
        if charges.is_exhausted() {
            return Err(CombatError::NoHealsLeft {
                used: charges.used(),
                max: Ruleset::MAX_HEALS,
            });
        }

        let amount = Ruleset::heal_amount(self.health.maximum());
        let restored = self.health.restore(amount);
        charges.spend();

        Ok(restored)
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) atk {} def {} hp {} dmg {}",
            self.name, self.role, self.attack, self.defense, self.health, self.damage,
        )
    }
}
