//! Text descriptions of a card's ability.
//!
//! Executing a card does not resolve anything against a target; it only
//! produces the preview text shown to the player.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::{Ability, CardDefinition};

/// Placeholder used when a spawn ability has no target card.
const GENERIC_UNIT: &str = "unit";

/// Builds the description shown when `card` is executed.
///
/// The first two lines are always the execution notice and the attack line.
/// A third line is appended for spawn, stun, and heal abilities.
///
/// ```
/// use cardhand::{Ability, CardDefinition, describe};
///
/// let golem = CardDefinition::new("Golem")
///     .with_stats(10, 4)
///     .with_ability(Ability::Heal { amount: 3.0 });
///
/// assert_eq!(
///     describe::execution_description(&golem),
///     "Golem was executed.\nDeal 4 damage to enemy units.\nHeal ally units by 3."
/// );
/// ```
#[must_use]
pub fn execution_description(card: &CardDefinition) -> String {
    let mut text = format!(
        "{} was executed.\nDeal {} damage to enemy units.",
        card.name, card.attack
    );

    let extra = match &card.ability {
        Ability::None => return text,
        Ability::Spawn { target, amount } => {
            let target = target.as_ref().map_or(GENERIC_UNIT, |t| t.name.as_str());
            format!("Spawn {amount} {target} unit(s).")
        }
        Ability::Stun { turns } => format!("Stun enemy units for {turns} turn(s)."),
        Ability::Heal { amount } => format!("Heal ally units by {amount}."),
    };

    text.push('\n');
    text.push_str(&extra);
    text
}

/// Executes `card` against an optional target and returns the description.
///
/// No effect is applied to the target; the result is the same text as
/// [`execution_description`].
#[must_use]
pub fn execute<T>(card: &CardDefinition, _target: Option<&T>) -> String {
    execution_description(card)
}

/// Builds the single-line ability summary used by the detail panel.
///
/// ```
/// use cardhand::{Ability, CardDefinition, describe};
///
/// let frost = CardDefinition::new("Frost").with_ability(Ability::Stun { turns: 2 });
/// assert_eq!(describe::ability_summary(&frost), "Card Type: Stun | Turns: 2");
/// ```
#[must_use]
pub fn ability_summary(card: &CardDefinition) -> String {
    match &card.ability {
        Ability::None => String::from("Card Type: None"),
        Ability::Spawn { target, .. } => {
            let target = target.as_ref().map_or("None", |t| t.name.as_str());
            format!("Card Type: Spawn | Target: {target}")
        }
        Ability::Stun { turns } => format!("Card Type: Stun | Turns: {turns}"),
        Ability::Heal { amount } => format!("Card Type: Heal | Amount: {amount}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(ability: Ability) -> CardDefinition {
        CardDefinition::new("Sprite")
            .with_stats(3, 2)
            .with_ability(ability)
    }

    #[test]
    fn none_stops_after_attack_line() {
        let text = execution_description(&base(Ability::None));
        assert_eq!(text, "Sprite was executed.\nDeal 2 damage to enemy units.");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn spawn_names_target_or_falls_back_to_unit() {
        let wolf = CardDefinition::new("Wolf").shared();
        let with_target = base(Ability::Spawn {
            target: Some(wolf),
            amount: 2,
        });
        let without_target = base(Ability::Spawn {
            target: None,
            amount: 3,
        });

        assert!(execution_description(&with_target).ends_with("\nSpawn 2 Wolf unit(s)."));
        assert!(execution_description(&without_target).ends_with("\nSpawn 3 unit unit(s)."));
    }

    #[test]
    fn heal_prints_shortest_float() {
        assert!(
            execution_description(&base(Ability::Heal { amount: 2.5 }))
                .ends_with("\nHeal ally units by 2.5.")
        );
        assert!(
            execution_description(&base(Ability::Heal { amount: 0.0 }))
                .ends_with("\nHeal ally units by 0.")
        );
    }

    #[test]
    fn execute_ignores_target() {
        let card = base(Ability::Stun { turns: 1 });
        assert_eq!(
            execute(&card, Some(&"enemy")),
            execution_description(&card)
        );
        assert_eq!(execute::<()>(&card, None), execution_description(&card));
    }

    #[test]
    fn summary_lines() {
        let golem = CardDefinition::new("Golem").shared();
        assert_eq!(ability_summary(&base(Ability::None)), "Card Type: None");
        assert_eq!(
            ability_summary(&base(Ability::Spawn {
                target: Some(golem),
                amount: 1
            })),
            "Card Type: Spawn | Target: Golem"
        );
        assert_eq!(
            ability_summary(&base(Ability::Spawn {
                target: None,
                amount: 1
            })),
            "Card Type: Spawn | Target: None"
        );
        assert_eq!(
            ability_summary(&base(Ability::Heal { amount: 1.5 })),
            "Card Type: Heal | Amount: 1.5"
        );
    }
}
