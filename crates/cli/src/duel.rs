//! The alternating duel loop.
//!
//! A round resolves in order:
//! 1. the player attacks
//! 2. the player heals when at or below the threshold with charges left
//! 3. the monster answers
//!
//! The loop owns no policy beyond that order; thresholds and the round cap
//! come in through [`DuelPolicy`]. Every observable step is reported
//! through the event sink before the loop moves on.

use rand::Rng;
use serde::Serialize;
use skirmish_core::{AttackResult, CombatError, Creature};

/// Driver-side knobs for one duel.
#[derive(Clone, Copy, Debug)]
pub struct DuelPolicy {
    /// The player heals at or below this health, charges permitting.
    pub heal_threshold: u32,
    /// Call the duel off after this many rounds (0 = no limit).
    pub max_rounds: u64,
}

/// Which side won the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Monster,
}

/// How the duel ended.
///
/// `winner` is `None` when the round cap expired with both sides still
/// standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DuelOutcome {
    pub winner: Option<Winner>,
    pub rounds: u64,
}

/// One observable step of the duel, emitted in narration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round has begun.
    RoundStarted { round: u64 },
    /// An attack was resolved, hit or miss.
    AttackResolved {
        attacker: String,
        defender: String,
        result: AttackResult,
    },
    /// The player spent a heal charge.
    Healed { name: String, restored: u32 },
    /// A combatant dropped to zero health.
    Fell { name: String },
}

/// Final report for the summary printer.
#[derive(Debug, Serialize)]
pub struct DuelSummary<'a> {
    pub outcome: DuelOutcome,
    pub player: &'a Creature,
    pub monster: &'a Creature,
}

/// Run one duel to completion.
///
/// Rounds alternate strictly: the player swings first, heals while the
/// monster still stands if pressed below the threshold with charges left,
/// then the monster answers. The loop ends when a side falls or the round
/// cap expires.
///
/// # Errors
///
/// Combat precondition failures bubble up unchanged. The loop checks
/// liveness before every swing, so an error here means the loop itself is
/// wrong, not the duel.
pub fn run_duel(
    player: &mut Creature,
    monster: &mut Creature,
    policy: &DuelPolicy,
    rng: &mut impl Rng,
    mut sink: impl FnMut(RoundEvent),
) -> Result<DuelOutcome, CombatError> {
    let mut round: u64 = 0;

    loop {
        round += 1;
        if policy.max_rounds != 0 && round > policy.max_rounds {
            return Ok(DuelOutcome {
                winner: None,
                rounds: policy.max_rounds,
            });
        }
        sink(RoundEvent::RoundStarted { round });

        // 1. Player swings
        let result = player.attack_target(monster, rng)?;
        sink(RoundEvent::AttackResolved {
            attacker: player.name().to_string(),
            defender: monster.name().to_string(),
            result,
        });
        if !monster.is_alive() {
            sink(RoundEvent::Fell {
                name: monster.name().to_string(),
            });
            return Ok(DuelOutcome {
                winner: Some(Winner::Player),
                rounds: round,
            });
        }

        // 2. Player heals when pressed and charges remain
        if player.health().current() <= policy.heal_threshold && player.heals_left() > 0 {
            let restored = player.heal()?;
            sink(RoundEvent::Healed {
                name: player.name().to_string(),
                restored,
            });
        }

        // 3. Monster answers
        let result = monster.attack_target(player, rng)?;
        sink(RoundEvent::AttackResolved {
            attacker: monster.name().to_string(),
            defender: player.name().to_string(),
            result,
        });
        if !player.is_alive() {
            sink(RoundEvent::Fell {
                name: player.name().to_string(),
            });
            return Ok(DuelOutcome {
                winner: Some(Winner::Monster),
                rounds: round,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use skirmish_core::{DamageRange, Ruleset};

    use super::*;

    fn collect_duel(
        player: &mut Creature,
        monster: &mut Creature,
        policy: &DuelPolicy,
        seed: u64,
    ) -> (DuelOutcome, Vec<RoundEvent>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut events = Vec::new();
        let outcome = run_duel(player, monster, policy, &mut rng, |event| {
            events.push(event);
        })
        .unwrap();
        (outcome, events)
    }

    #[test]
    fn a_lopsided_duel_goes_to_the_stronger_side() {
        // 30 dice per swing and enough damage to one-shot the target
        let mut ogre =
            Creature::player("Ogre", 30, 30, 1_000, DamageRange::new(20, 30).unwrap()).unwrap();
        let mut gnat =
            Creature::monster("Gnat", 1, 1, 10, DamageRange::new(1, 1).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 0,
            max_rounds: 1_000,
        };
        let (outcome, events) = collect_duel(&mut ogre, &mut gnat, &policy, 42);

        assert_eq!(outcome.winner, Some(Winner::Player));
        assert!(!gnat.is_alive());
        assert_eq!(
            events.last(),
            Some(&RoundEvent::Fell {
                name: "Gnat".to_string()
            })
        );
    }

    #[test]
    fn events_arrive_in_narration_order() {
        let mut ogre =
            Creature::player("Ogre", 30, 30, 1_000, DamageRange::new(20, 30).unwrap()).unwrap();
        let mut gnat =
            Creature::monster("Gnat", 1, 1, 10, DamageRange::new(1, 1).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 0,
            max_rounds: 1_000,
        };
        let (outcome, events) = collect_duel(&mut ogre, &mut gnat, &policy, 7);

        assert_eq!(events[0], RoundEvent::RoundStarted { round: 1 });
        assert!(matches!(
            &events[1],
            RoundEvent::AttackResolved { attacker, defender, .. }
                if attacker == "Ogre" && defender == "Gnat"
        ));

        // Every round number is announced once, in order
        let rounds: Vec<u64> = events
            .iter()
            .filter_map(|event| match event {
                RoundEvent::RoundStarted { round } => Some(*round),
                _ => None,
            })
            .collect();
        let expected: Vec<u64> = (1..=outcome.rounds).collect();
        assert_eq!(rounds, expected);
    }

    #[test]
    fn the_round_cap_calls_the_duel_off() {
        // Single-die swings at 1 damage cannot chew through 100k health
        // inside ten rounds
        let mut tank_a =
            Creature::player("TankA", 1, 30, 100_000, DamageRange::new(1, 1).unwrap()).unwrap();
        let mut tank_b =
            Creature::monster("TankB", 1, 30, 100_000, DamageRange::new(1, 1).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 0,
            max_rounds: 10,
        };
        let (outcome, events) = collect_duel(&mut tank_a, &mut tank_b, &policy, 3);

        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.rounds, 10);
        let announced = events
            .iter()
            .filter(|event| matches!(event, RoundEvent::RoundStarted { .. }))
            .count();
        assert_eq!(announced, 10);
        assert!(tank_a.is_alive());
        assert!(tank_b.is_alive());
    }

    #[test]
    fn a_threshold_at_max_health_drains_the_heal_budget() {
        // The threshold covers full health, so the player heals every
        // round until the charges run out, spending the first charge on
        // a zero-point restore
        let mut player =
            Creature::player("Hero", 1, 30, 100, DamageRange::new(1, 1).unwrap()).unwrap();
        let mut monster =
            Creature::monster("Slab", 1, 30, 10_000, DamageRange::new(1, 1).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 100,
            max_rounds: 6,
        };
        let (outcome, events) = collect_duel(&mut player, &mut monster, &policy, 5);

        assert_eq!(outcome.winner, None);
        let heals: Vec<&RoundEvent> = events
            .iter()
            .filter(|event| matches!(event, RoundEvent::Healed { .. }))
            .collect();
        assert_eq!(heals.len() as u32, Ruleset::MAX_HEALS);
        assert_eq!(player.heals_left(), 0);

        // Round one heals at full health and restores nothing
        assert_eq!(
            heals[0],
            &RoundEvent::Healed {
                name: "Hero".to_string(),
                restored: 0
            }
        );
    }

    #[test]
    fn no_healing_above_the_threshold() {
        // The monster chips one point a round at most, so the player
        // never falls near the threshold inside the cap
        let mut player =
            Creature::player("Hero", 1, 30, 100, DamageRange::new(1, 1).unwrap()).unwrap();
        let mut monster =
            Creature::monster("Slab", 1, 30, 10_000, DamageRange::new(1, 1).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 10,
            max_rounds: 6,
        };
        let (_, events) = collect_duel(&mut player, &mut monster, &policy, 5);

        assert!(
            events
                .iter()
                .all(|event| !matches!(event, RoundEvent::Healed { .. }))
        );
        assert_eq!(player.heals_left(), Ruleset::MAX_HEALS);
    }

    #[test]
    fn a_zero_cap_means_no_limit() {
        // Stock matchup: always terminates organically well before any
        // implicit bound
        let mut player =
            Creature::player("Hero", 10, 8, 100, DamageRange::new(5, 12).unwrap()).unwrap();
        let mut monster =
            Creature::monster("Goblin", 7, 5, 40, DamageRange::new(3, 6).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 35,
            max_rounds: 0,
        };
        let (outcome, _) = collect_duel(&mut player, &mut monster, &policy, 11);

        assert!(outcome.winner.is_some());
        assert!(outcome.rounds >= 1);
    }

    #[test]
    fn the_summary_serializes_the_final_sheets() {
        let mut player =
            Creature::player("Hero", 10, 8, 100, DamageRange::new(5, 12).unwrap()).unwrap();
        let mut monster =
            Creature::monster("Goblin", 7, 5, 40, DamageRange::new(3, 6).unwrap()).unwrap();

        let policy = DuelPolicy {
            heal_threshold: 35,
            max_rounds: 0,
        };
        let (outcome, _) = collect_duel(&mut player, &mut monster, &policy, 42);

        let summary = DuelSummary {
            outcome,
            player: &player,
            monster: &monster,
        };
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["player"]["name"], "Hero");
        assert_eq!(value["monster"]["name"], "Goblin");
        assert_eq!(value["outcome"]["rounds"], outcome.rounds);
        let winner = value["outcome"]["winner"].clone();
        assert!(winner == "player" || winner == "monster");
    }
}
