//! The player's hand: cards drawn from a pool plus a single selection.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::CardDefinition;
use crate::error::{DrawError, SelectError};

/// Selection state of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No card is selected.
    #[default]
    NoneSelected,
    /// The card in the given slot is selected.
    OneSelected(usize),
}

impl Selection {
    /// Returns the selected slot, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::NoneSelected => None,
            Self::OneSelected(index) => Some(index),
        }
    }
}

/// A hand of cards drawn with replacement from a shared pool.
///
/// Slots hold clones of the pool's [`Arc`]s, so two slots may point at the
/// same definition.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Drawn cards, in draw order.
    cards: Vec<Arc<CardDefinition>>,
    /// Current selection.
    selection: Selection,
    /// Random number generator used for draws.
    rng: ChaCha8Rng,
}

impl Hand {
    /// Creates an empty hand whose draws are seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            selection: Selection::NoneSelected,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the hand with `amount` cards picked uniformly from `pool`.
    ///
    /// The hand and selection are cleared first. Each slot is drawn
    /// independently, so the same card may appear more than once.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyPool`] if `pool` is empty. The hand is left
    /// empty in that case.
    ///
    /// ```
    /// use cardhand::{CardDefinition, Hand};
    ///
    /// let pool = vec![CardDefinition::new("Imp").shared()];
    /// let mut hand = Hand::new(7);
    /// assert_eq!(hand.draw(3, &pool).unwrap().len(), 3);
    /// ```
    pub fn draw(
        &mut self,
        amount: usize,
        pool: &[Arc<CardDefinition>],
    ) -> Result<&[Arc<CardDefinition>], DrawError> {
        self.clear();

        if pool.is_empty() {
            tracing::warn!("no cards available in the card pool");
            return Err(DrawError::EmptyPool);
        }

        for _ in 0..amount {
            let pick = self.rng.random_range(0..pool.len());
            self.cards.push(Arc::clone(&pool[pick]));
        }
        tracing::debug!(amount, pool = pool.len(), "hand drawn");

        Ok(&self.cards)
    }

    /// Removes all cards and clears the selection.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.selection = Selection::NoneSelected;
    }

    /// Selects the card in `index`.
    ///
    /// Returns the previously selected slot when it differs from `index`, so
    /// callers can reset whatever marks the old selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::OutOfRange`] if `index` is not a slot of the
    /// hand. The selection is unchanged in that case.
    pub fn select(&mut self, index: usize) -> Result<Option<usize>, SelectError> {
        if index >= self.cards.len() {
            return Err(SelectError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        let previous = self.selection.index().filter(|&prev| prev != index);
        self.selection = Selection::OneSelected(index);
        tracing::debug!(index, ?previous, "card selected");
        Ok(previous)
    }

    /// Clears the selection, returning the slot that was selected.
    pub const fn deselect(&mut self) -> Option<usize> {
        let previous = self.selection.index();
        self.selection = Selection::NoneSelected;
        previous
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Arc<CardDefinition>] {
        &self.cards
    }

    /// Returns the card in `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<CardDefinition>> {
        self.cards.get(index)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the selected slot, if any.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Arc<CardDefinition>> {
        self.selection.index().and_then(|index| self.cards.get(index))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Arc<CardDefinition>> {
        ["Imp", "Golem", "Wisp"]
            .into_iter()
            .map(|name| CardDefinition::new(name).shared())
            .collect()
    }

    #[test]
    fn same_seed_draws_same_hand() {
        let pool = pool();
        let mut a = Hand::new(11);
        let mut b = Hand::new(11);

        let first: Vec<_> = a.draw(8, &pool).unwrap().to_vec();
        let second: Vec<_> = b.draw(8, &pool).unwrap().to_vec();

        assert!(
            first
                .iter()
                .zip(&second)
                .all(|(x, y)| Arc::ptr_eq(x, y))
        );
    }

    #[test]
    fn select_reports_previous_only_when_it_changes() {
        let pool = pool();
        let mut hand = Hand::new(1);
        hand.draw(3, &pool).unwrap();

        assert_eq!(hand.select(0), Ok(None));
        assert_eq!(hand.select(0), Ok(None));
        assert_eq!(hand.select(2), Ok(Some(0)));
        assert_eq!(hand.selection(), Selection::OneSelected(2));
    }

    #[test]
    fn deselect_is_idempotent() {
        let pool = pool();
        let mut hand = Hand::new(1);
        hand.draw(2, &pool).unwrap();
        hand.select(1).unwrap();

        assert_eq!(hand.deselect(), Some(1));
        assert_eq!(hand.deselect(), None);
        assert_eq!(hand.selection(), Selection::NoneSelected);
    }

    #[test]
    fn out_of_range_select_keeps_selection() {
        let pool = pool();
        let mut hand = Hand::new(1);
        hand.draw(2, &pool).unwrap();
        hand.select(1).unwrap();

        assert_eq!(
            hand.select(2),
            Err(SelectError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(hand.selected_index(), Some(1));
    }

    #[test]
    fn draw_zero_is_empty_but_ok() {
        let pool = pool();
        let mut hand = Hand::new(1);
        assert!(hand.draw(0, &pool).unwrap().is_empty());
        assert!(hand.is_empty());
    }
}
