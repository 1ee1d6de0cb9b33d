//! View models and the view traits a UI implements.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use crate::card::CardDefinition;
use crate::describe;
use crate::icon;

/// Everything a hand slot widget displays for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Card name.
    pub name: String,
    /// Asset key of the card art.
    pub sprite: String,
    /// Flavor text.
    pub description: String,
    /// Health, formatted for display.
    pub health: String,
    /// Attack, formatted for display.
    pub attack: String,
    /// Origin icon asset key.
    pub origin_icon: &'static str,
    /// Rarity icon asset key.
    pub rarity_icon: &'static str,
    /// Evolution icon asset key.
    pub evolution_icon: &'static str,
}

impl CardFace {
    /// Builds the face of `card`.
    #[must_use]
    pub fn from_card(card: &CardDefinition) -> Self {
        Self {
            name: card.name.clone(),
            sprite: card.sprite.clone(),
            description: card.description.clone(),
            health: card.health.to_string(),
            attack: card.attack.to_string(),
            origin_icon: icon::origin_icon(card.origin),
            rarity_icon: icon::rarity_icon(card.rarity),
            evolution_icon: icon::evolution_icon(card.evolution),
        }
    }
}

/// The isolated detail view of one card: its face plus labelled stat lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// The enlarged card face.
    pub face: CardFace,
    /// `Card Origin: {origin}`.
    pub origin: String,
    /// `Card Rarity: {rarity}`.
    pub rarity: String,
    /// `Card Evolution: {evolution}`.
    pub evolution: String,
    /// `Health: {health}`.
    pub health: String,
    /// `Attack: {attack}`.
    pub attack: String,
    /// Ability summary, e.g. `Card Type: Stun | Turns: 2`.
    pub ability: String,
}

impl CardDetails {
    /// Builds the detail lines of `card`.
    #[must_use]
    pub fn from_card(card: &CardDefinition) -> Self {
        Self {
            face: CardFace::from_card(card),
            origin: format!("Card Origin: {}", card.origin),
            rarity: format!("Card Rarity: {}", card.rarity),
            evolution: format!("Card Evolution: {}", card.evolution),
            health: format!("Health: {}", card.health),
            attack: format!("Attack: {}", card.attack),
            ability: describe::ability_summary(card),
        }
    }
}

/// The hand panel: one widget per slot plus the execute and details buttons.
pub trait HandView {
    /// Replaces every slot widget with the given faces, in order.
    fn render_hand(&mut self, faces: &[CardFace]);

    /// Shows or hides the execute and view-details actions.
    fn set_actions_visible(&mut self, visible: bool);

    /// Applies a scale to the widget in `slot`.
    fn set_slot_scale(&mut self, slot: usize, scale: f32);

    /// Shows or hides the whole hand panel.
    fn set_visible(&mut self, visible: bool);
}

/// The isolated card detail panel.
pub trait DetailView {
    /// Fills the panel with `details` and shows it.
    fn show_details(&mut self, details: &CardDetails);

    /// Hides the panel.
    fn hide(&mut self);

    /// Applies a scale to the enlarged card.
    fn set_scale(&mut self, scale: f32);
}

/// A text widget that receives execution output and fallback messages.
pub trait TextSink {
    /// Replaces the displayed text.
    fn set_text(&mut self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Ability, Evolution, Origin, Rarity};

    #[test]
    fn details_label_every_stat() {
        let card = CardDefinition::new("Cinder")
            .with_origin(Origin::Fire)
            .with_rarity(Rarity::Epic)
            .with_evolution(Evolution::III)
            .with_stats(6, 9)
            .with_ability(Ability::Heal { amount: 2.0 });

        let details = CardDetails::from_card(&card);
        assert_eq!(details.origin, "Card Origin: Fire");
        assert_eq!(details.rarity, "Card Rarity: Epic");
        assert_eq!(details.evolution, "Card Evolution: EvolutionIII");
        assert_eq!(details.health, "Health: 6");
        assert_eq!(details.attack, "Attack: 9");
        assert_eq!(details.ability, "Card Type: Heal | Amount: 2");
        assert_eq!(details.face.attack, "9");
        assert_eq!(details.face.origin_icon, "icons/origin/fire");
        assert_eq!(details.face.evolution_icon, "icons/evolution/3");
    }
}
