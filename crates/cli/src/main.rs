//! Console duel driver.
//!
//! The binary assembles one duel end to end:
//! 1. configuration (defaults, environment, flags)
//! 2. RNG (seeded for replays, OS entropy otherwise)
//! 3. combatants built from their stat sheets
//! 4. the duel itself, narrated round by round to stdout
//! 5. a text or JSON summary
//!
//! # Examples
//!
//! ```bash
//! # A fresh duel every run
//! cargo run -p skirmish-cli
//!
//! # Replay a specific duel and emit the summary as JSON
//! cargo run -p skirmish-cli -- --seed 42 --json
//! ```

mod config;
mod duel;
mod narrate;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, DuelConfig};
use crate::duel::{DuelPolicy, DuelSummary, Winner, run_duel};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    // 1. Resolve configuration: defaults, then environment, then flags
    let cli = Cli::parse();
    let config = DuelConfig::from_env().apply_cli(&cli);
    tracing::debug!(?config, "configuration resolved");

    // 2. Seed the duel RNG
    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "running a seeded duel");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // 3. Build both sides
    let mut player = config.player.build_player()?;
    let mut monster = config.monster.build_monster()?;

    println!("--- The duel begins ---");
    println!("{player}");
    println!("{monster}");

    // 4. Run the duel, narrating as it goes
    let policy = DuelPolicy {
        heal_threshold: config.heal_threshold,
        max_rounds: config.max_rounds,
    };
    let outcome = run_duel(&mut player, &mut monster, &policy, &mut rng, |event| {
        tracing::debug!(?event, "round event");
        println!("{}", narrate::narrate(&event));
    })?;

    // 5. Print the summary
    if config.json {
        let summary = DuelSummary {
            outcome,
            player: &player,
            monster: &monster,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        match outcome.winner {
            Some(Winner::Player) => println!(
                "{} wins after {} rounds ({} hp left)",
                player.name(),
                outcome.rounds,
                player.health().current()
            ),
            Some(Winner::Monster) => println!(
                "{} wins after {} rounds ({} hp left)",
                monster.name(),
                outcome.rounds,
                monster.health().current()
            ),
            None => println!("The duel is called off after {} rounds", outcome.rounds),
        }
    }

    tracing::info!(rounds = outcome.rounds, winner = ?outcome.winner, "duel finished");
    Ok(())
}

/// Route tracing output to stderr so the transcript on stdout stays clean.
/// `RUST_LOG` controls the filter, defaulting to `info`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
