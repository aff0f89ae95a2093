//! Duel driver configuration and loaders.
//!
//! Settings resolve in three layers: built-in defaults, then environment
//! variables (a `.env` file is honored), then command-line flags. Later
//! layers win.

use std::env;

use clap::Parser;
use skirmish_core::{Creature, DamageRange, StatError};

/// Command-line flags for the duel driver.
#[derive(Clone, Debug, Parser)]
#[command(name = "skirmish", version, about = "Run one player-versus-monster dice duel")]
pub struct Cli {
    /// RNG seed; omit for a different duel every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Heal when the player's health falls to this value or below
    #[arg(long)]
    pub heal_threshold: Option<u32>,

    /// Call the duel off after this many rounds (0 = no limit)
    #[arg(long)]
    pub max_rounds: Option<u64>,

    /// Print the final summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Stat sheet for one side of the duel.
#[derive(Clone, Debug)]
pub struct CombatantSpec {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub max_health: u32,
    pub damage_min: u32,
    pub damage_max: u32,
}

impl CombatantSpec {
    /// Build the player-side creature from this sheet.
    pub fn build_player(&self) -> Result<Creature, StatError> {
        Creature::player(
            self.name.clone(),
            self.attack,
            self.defense,
            self.max_health,
            DamageRange::new(self.damage_min, self.damage_max)?,
        )
    }

    /// Build the monster-side creature from this sheet.
    pub fn build_monster(&self) -> Result<Creature, StatError> {
        Creature::monster(
            self.name.clone(),
            self.attack,
            self.defense,
            self.max_health,
            DamageRange::new(self.damage_min, self.damage_max)?,
        )
    }
}

/// Fully resolved driver configuration.
#[derive(Clone, Debug)]
pub struct DuelConfig {
    /// Seed for the duel RNG; None draws one from the OS.
    pub seed: Option<u64>,
    /// The player heals at or below this health, charges permitting.
    pub heal_threshold: u32,
    /// Round cap before the duel is called off (0 = no limit).
    pub max_rounds: u64,
    /// Emit the summary as JSON.
    pub json: bool,
    /// Player-side stat sheet.
    pub player: CombatantSpec,
    /// Monster-side stat sheet.
    pub monster: CombatantSpec,
}

impl DuelConfig {
    pub const DEFAULT_HEAL_THRESHOLD: u32 = 35;
    pub const DEFAULT_MAX_ROUNDS: u64 = 1_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SEED` - RNG seed (default: drawn from the OS)
    /// - `SKIRMISH_HEAL_THRESHOLD` - heal-at-or-below health (default: 35)
    /// - `SKIRMISH_MAX_ROUNDS` - round cap, 0 for none (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SKIRMISH_SEED") {
            config.seed = Some(seed);
        }
        if let Some(threshold) = read_env::<u32>("SKIRMISH_HEAL_THRESHOLD") {
            config.heal_threshold = threshold;
        }
        if let Some(rounds) = read_env::<u64>("SKIRMISH_MAX_ROUNDS") {
            config.max_rounds = rounds;
        }

        config
    }

    /// Overlay command-line flags; flags beat environment and defaults.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(threshold) = cli.heal_threshold {
            self.heal_threshold = threshold;
        }
        if let Some(rounds) = cli.max_rounds {
            self.max_rounds = rounds;
        }
        if cli.json {
            self.json = true;
        }
        self
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            heal_threshold: Self::DEFAULT_HEAL_THRESHOLD,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            json: false,
            player: CombatantSpec {
                name: "Hero".into(),
                attack: 10,
                defense: 8,
                max_health: 100,
                damage_min: 5,
                damage_max: 12,
            },
            monster: CombatantSpec {
                name: "Goblin".into(),
                attack: 7,
                defense: 5,
                max_health: 40,
                damage_min: 3,
                damage_max: 6,
            },
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_stock_duel() {
        let config = DuelConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.heal_threshold, 35);
        assert_eq!(config.max_rounds, 1_000);
        assert!(!config.json);
        assert_eq!(config.player.name, "Hero");
        assert_eq!(config.monster.name, "Goblin");
    }

    #[test]
    fn default_sheets_build_valid_creatures() {
        let config = DuelConfig::default();
        let player = config.player.build_player().unwrap();
        let monster = config.monster.build_monster().unwrap();

        assert_eq!(player.health().maximum(), 100);
        assert!(player.role().is_player());
        assert_eq!(monster.health().maximum(), 40);
        assert!(!monster.role().is_player());
    }

    #[test]
    fn cli_flags_override_the_base_configuration() {
        let cli = Cli::parse_from(["skirmish", "--seed", "7", "--heal-threshold", "50"]);
        let config = DuelConfig::default().apply_cli(&cli);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.heal_threshold, 50);
        // Untouched flags keep their defaults
        assert_eq!(config.max_rounds, DuelConfig::DEFAULT_MAX_ROUNDS);
        assert!(!config.json);
    }

    #[test]
    fn absent_cli_flags_leave_the_configuration_alone() {
        let cli = Cli::parse_from(["skirmish"]);
        let mut base = DuelConfig::default();
        base.seed = Some(99);
        base.heal_threshold = 12;

        let config = base.apply_cli(&cli);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.heal_threshold, 12);
    }

    #[test]
    fn the_json_flag_switches_the_summary_format() {
        let cli = Cli::parse_from(["skirmish", "--json"]);
        let config = DuelConfig::default().apply_cli(&cli);
        assert!(config.json);
    }

    #[test]
    fn a_bad_sheet_surfaces_the_stat_error() {
        let mut config = DuelConfig::default();
        config.monster.damage_min = 0;
        assert!(config.monster.build_monster().is_err());
    }
}
