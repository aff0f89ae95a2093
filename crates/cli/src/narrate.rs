//! Transcript rendering for round events.

use crate::duel::RoundEvent;

/// Render one event as a transcript line.
pub fn narrate(event: &RoundEvent) -> String {
    match event {
        RoundEvent::RoundStarted { round } => format!("--- Round {round} ---"),
        RoundEvent::AttackResolved {
            attacker,
            defender,
            result,
        } => {
            if result.is_hit() {
                format!(
                    "{attacker} hits {defender} for {} damage",
                    result.damage_dealt()
                )
            } else {
                format!("{attacker} swings at {defender} and misses")
            }
        }
        RoundEvent::Healed { name, restored } => format!("{name} heals for {restored} hp"),
        RoundEvent::Fell { name } => format!("{name} falls!"),
    }
}
