/// Combat rule constants shared by every resolution path.
///
/// The rules are fixed at compile time; drivers tune behavior (heal
/// thresholds, round caps) on their side without touching these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ruleset;

impl Ruleset {
    // ===== stat validation bounds =====
    /// Inclusive lower bound for attack and defense stats.
    pub const STAT_MIN: i32 = 1;
    /// Inclusive upper bound for attack and defense stats.
    pub const STAT_MAX: i32 = 30;

    // ===== dice mechanics =====
    /// Faces on a combat die.
    pub const DIE_SIDES: u32 = 6;
    /// A die showing this face or higher counts as a success.
    pub const HIT_THRESHOLD: u32 = 5;
    /// Largest possible dice pool, reached at maximum attack against
    /// minimum defense.
    pub const MAX_DICE: u32 = (Self::STAT_MAX - Self::STAT_MIN + 1) as u32;

    // ===== player healing =====
    /// Self-heal uses available to a player over one combat.
    pub const MAX_HEALS: u32 = 4;
    /// Percentage of maximum health restored per heal.
    pub const HEAL_PERCENT: u32 = 30;

    /// Health restored by a single heal.
    ///
    /// # Formula
    ///
    /// ```text
    /// amount = floor(max_health * HEAL_PERCENT / 100)
    /// raised to 1 when the percentage floors to zero
    /// ```
    ///
    /// Integer arithmetic only, so the result is identical on every
    /// platform.
    pub const fn heal_amount(max_health: u32) -> u32 {
        let amount = (max_health as u64 * Self::HEAL_PERCENT as u64 / 100) as u32;
        if amount == 0 { 1 } else { amount }
    }
}
