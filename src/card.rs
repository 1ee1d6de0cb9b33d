//! Card definitions and their stat enums.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elemental origin of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Origin {
    /// Water.
    #[default]
    Water,
    /// Fire.
    Fire,
    /// Air.
    Air,
    /// Earth.
    Earth,
}

/// Rarity tier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rarity {
    /// Common.
    #[default]
    Common,
    /// Uncommon.
    Uncommon,
    /// Rare.
    Rare,
    /// Epic.
    Epic,
    /// Legendary.
    Legendary,
    /// Mythical.
    Mythical,
}

/// Evolution stage of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evolution {
    /// First stage.
    #[default]
    I,
    /// Second stage.
    II,
    /// Third stage.
    III,
}

/// Discriminant of a card's ability, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbilityType {
    /// No ability beyond the base attack.
    #[default]
    None,
    /// Spawns units.
    Spawn,
    /// Stuns enemy units.
    Stun,
    /// Heals ally units.
    Heal,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Air => "Air",
            Self::Earth => "Earth",
        })
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythical => "Mythical",
        })
    }
}

impl fmt::Display for Evolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::I => "EvolutionI",
            Self::II => "EvolutionII",
            Self::III => "EvolutionIII",
        })
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::Spawn => "Spawn",
            Self::Stun => "Stun",
            Self::Heal => "Heal",
        })
    }
}

/// A card's ability together with the parameters that ability uses.
///
/// Only the parameters of the active variant exist, so a heal card can never
/// carry a stray stun duration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ability {
    /// No ability.
    #[default]
    None,
    /// Spawn `amount` copies of `target` (or generic units when absent).
    Spawn {
        /// The card to spawn, shared with the pool.
        target: Option<Arc<CardDefinition>>,
        /// Number of units to spawn.
        amount: u32,
    },
    /// Stun enemy units.
    Stun {
        /// Stun duration in turns.
        turns: u32,
    },
    /// Heal ally units.
    Heal {
        /// Amount healed.
        amount: f32,
    },
}

impl Ability {
    /// Returns the ability discriminant.
    #[must_use]
    pub const fn kind(&self) -> AbilityType {
        match self {
            Self::None => AbilityType::None,
            Self::Spawn { .. } => AbilityType::Spawn,
            Self::Stun { .. } => AbilityType::Stun,
            Self::Heal { .. } => AbilityType::Heal,
        }
    }
}

/// Static definition of a card archetype.
///
/// Definitions are shared read-only data; pools and hands hold them behind
/// [`Arc`] so a hand slot refers to a pool entry instead of copying it.
///
/// ```
/// use cardhand::{Ability, CardDefinition, Origin, Rarity};
///
/// let golem = CardDefinition::new("Golem")
///     .with_origin(Origin::Earth)
///     .with_rarity(Rarity::Rare)
///     .with_stats(8, 4)
///     .with_ability(Ability::Heal { amount: 3.0 });
///
/// assert_eq!(golem.attack, 4);
/// assert_eq!(golem.health, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardDefinition {
    /// Display name.
    pub name: String,
    /// Asset key of the card art.
    pub sprite: String,
    /// Flavor text, independent of the ability description.
    pub description: String,
    /// Elemental origin.
    pub origin: Origin,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Evolution stage.
    pub evolution: Evolution,
    /// Health value.
    pub health: u32,
    /// Attack value.
    pub attack: u32,
    /// The card's ability.
    pub ability: Ability,
}

impl CardDefinition {
    /// Creates a card with the given name and default stats.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the sprite asset key.
    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Sets the flavor text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the rarity.
    #[must_use]
    pub const fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Sets the evolution stage.
    #[must_use]
    pub const fn with_evolution(mut self, evolution: Evolution) -> Self {
        self.evolution = evolution;
        self
    }

    /// Sets health and attack.
    #[must_use]
    pub const fn with_stats(mut self, health: u32, attack: u32) -> Self {
        self.health = health;
        self.attack = attack;
        self
    }

    /// Sets the ability.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = ability;
        self
    }

    /// Returns the ability discriminant.
    #[must_use]
    pub const fn ability_type(&self) -> AbilityType {
        self.ability.kind()
    }

    /// Wraps the definition for sharing in a pool.
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_kind_matches_variant() {
        assert_eq!(Ability::None.kind(), AbilityType::None);
        assert_eq!(
            Ability::Spawn {
                target: None,
                amount: 2
            }
            .kind(),
            AbilityType::Spawn
        );
        assert_eq!(Ability::Stun { turns: 1 }.kind(), AbilityType::Stun);
        assert_eq!(Ability::Heal { amount: 1.5 }.kind(), AbilityType::Heal);
    }

    #[test]
    fn defaults_are_first_variants() {
        let card = CardDefinition::new("Blank");
        assert_eq!(card.origin, Origin::Water);
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.evolution, Evolution::I);
        assert_eq!(card.ability_type(), AbilityType::None);
        assert!(card.description.is_empty());
    }

    #[test]
    fn builder_sets_every_stat() {
        let card = CardDefinition::new("Wisp")
            .with_origin(Origin::Air)
            .with_rarity(Rarity::Epic)
            .with_evolution(Evolution::III)
            .with_stats(2, 7);
        assert_eq!(card.origin, Origin::Air);
        assert_eq!(card.rarity, Rarity::Epic);
        assert_eq!(card.evolution, Evolution::III);
        assert_eq!((card.health, card.attack), (2, 7));
    }

    #[test]
    fn display_uses_variant_names() {
        use alloc::string::ToString;

        assert_eq!(Origin::Earth.to_string(), "Earth");
        assert_eq!(Rarity::Mythical.to_string(), "Mythical");
        assert_eq!(Evolution::II.to_string(), "EvolutionII");
        assert_eq!(AbilityType::Stun.to_string(), "Stun");
    }
}
