//! Asset keys for the stat icons shown on a card.

use crate::card::{Evolution, Origin, Rarity};

/// Returns the icon asset key for an origin.
#[must_use]
pub const fn origin_icon(origin: Origin) -> &'static str {
    match origin {
        Origin::Water => "icons/origin/water",
        Origin::Fire => "icons/origin/fire",
        Origin::Air => "icons/origin/air",
        Origin::Earth => "icons/origin/earth",
    }
}

/// Returns the icon asset key for a rarity.
#[must_use]
pub const fn rarity_icon(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "icons/rarity/common",
        Rarity::Uncommon => "icons/rarity/uncommon",
        Rarity::Rare => "icons/rarity/rare",
        Rarity::Epic => "icons/rarity/epic",
        Rarity::Legendary => "icons/rarity/legendary",
        Rarity::Mythical => "icons/rarity/mythical",
    }
}

/// Returns the icon asset key for an evolution stage.
#[must_use]
pub const fn evolution_icon(evolution: Evolution) -> &'static str {
    match evolution {
        Evolution::I => "icons/evolution/1",
        Evolution::II => "icons/evolution/2",
        Evolution::III => "icons/evolution/3",
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn every_variant_has_a_distinct_key() {
        let origins = [Origin::Water, Origin::Fire, Origin::Air, Origin::Earth].map(origin_icon);
        let rarities = [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythical,
        ]
        .map(rarity_icon);
        let evolutions = [Evolution::I, Evolution::II, Evolution::III].map(evolution_icon);

        let mut all: Vec<&str> = origins
            .iter()
            .chain(&rarities)
            .chain(&evolutions)
            .copied()
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
