//! Hand presentation: routes UI events to the hand and renders the result.
//!
//! The controller never looks up its collaborators. The hand view is
//! required; the detail view and the output text are optional and their
//! absence is reported as [`PresentError::MissingComponent`] with a warning
//! instead of a crash.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::card::CardDefinition;
use crate::error::PresentError;
use crate::hand::Hand;
use crate::options::HandOptions;
use crate::tween::PopAnimator;

mod events;
pub mod view;

pub use view::{CardDetails, CardFace, DetailView, HandView, TextSink};

/// Resting scale of every card widget.
const BASE_SCALE: f32 = 1.0;

/// Drives a hand and its views from pointer and button events.
///
/// The controller owns the [`Hand`], the card pool, one [`PopAnimator`] per
/// slot, and the injected views.
pub struct HandController<H, D, T> {
    /// The hand being displayed.
    hand: Hand,
    /// Cards available to draw.
    pool: Vec<Arc<CardDefinition>>,
    /// Configuration.
    options: HandOptions,
    /// Pop animation per hand slot.
    slots: Vec<PopAnimator>,
    /// Pop animation of the enlarged detail card.
    detail_pop: PopAnimator,
    /// Hand panel.
    hand_view: H,
    /// Isolated detail panel.
    detail_view: Option<D>,
    /// Execution output text.
    output: Option<T>,
}

impl<H, D, T> HandController<H, D, T>
where
    H: HandView,
    D: DetailView,
    T: TextSink,
{
    /// Creates a controller with an empty hand.
    ///
    /// Call [`start`](Self::start) to draw the opening hand.
    #[must_use]
    pub fn new(
        hand_view: H,
        detail_view: Option<D>,
        output: Option<T>,
        pool: Vec<Arc<CardDefinition>>,
        options: HandOptions,
    ) -> Self {
        let detail_pop = PopAnimator::new(BASE_SCALE, options.pop_scale, options.pop_duration);
        Self {
            hand: Hand::new(options.seed),
            pool,
            options,
            slots: Vec::new(),
            detail_pop,
            hand_view,
            detail_view,
            output,
        }
    }

    /// Draws the configured opening hand.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::Draw`] if the pool is empty.
    pub fn start(&mut self) -> Result<usize, PresentError> {
        self.draw(self.options.cards_to_draw)
    }

    /// Replaces the hand with `amount` fresh cards and renders it.
    ///
    /// Returns the number of cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::Draw`] if the pool is empty. The hand view is
    /// still cleared in that case.
    pub fn draw(&mut self, amount: usize) -> Result<usize, PresentError> {
        self.clear();
        let drawn = self.hand.draw(amount, &self.pool)?.len();

        self.slots = (0..drawn)
            .map(|_| {
                PopAnimator::new(
                    BASE_SCALE,
                    self.options.pop_scale,
                    self.options.pop_duration,
                )
            })
            .collect();
        let faces: Vec<CardFace> = self
            .hand
            .cards()
            .iter()
            .map(|card| CardFace::from_card(card))
            .collect();
        self.hand_view.render_hand(&faces);

        Ok(drawn)
    }

    /// Removes every card and hides the card actions.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.slots.clear();
        self.hand_view.render_hand(&[]);
        self.hand_view.set_actions_visible(false);
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the card pool.
    #[must_use]
    pub fn pool(&self) -> &[Arc<CardDefinition>] {
        &self.pool
    }

    /// Replaces the card pool. The current hand is kept until the next draw.
    pub fn set_pool(&mut self, pool: Vec<Arc<CardDefinition>>) {
        self.pool = pool;
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &HandOptions {
        &self.options
    }

    /// Returns the current scale of the widget in `slot`.
    #[must_use]
    pub fn slot_scale(&self, slot: usize) -> Option<f32> {
        self.slots.get(slot).map(PopAnimator::scale)
    }

    /// Returns the current scale of the enlarged detail card.
    #[must_use]
    pub const fn detail_scale(&self) -> f32 {
        self.detail_pop.scale()
    }

    /// Returns the hand view.
    #[must_use]
    pub const fn hand_view(&self) -> &H {
        &self.hand_view
    }

    /// Returns the detail view, if one was supplied.
    #[must_use]
    pub const fn detail_view(&self) -> Option<&D> {
        self.detail_view.as_ref()
    }

    /// Returns the output text sink, if one was supplied.
    #[must_use]
    pub const fn output(&self) -> Option<&T> {
        self.output.as_ref()
    }
}
