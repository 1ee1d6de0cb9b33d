//! Hand configuration options.

use core::time::Duration;

/// Configuration for a hand and its card widgets.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use cardhand::HandOptions;
///
/// let options = HandOptions::default()
///     .with_cards_to_draw(7)
///     .with_pop_scale(1.25)
///     .with_pop_duration(Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HandOptions {
    /// Number of cards drawn when the hand starts.
    pub cards_to_draw: usize,
    /// Scale factor applied to a hovered or selected card.
    pub pop_scale: f32,
    /// Duration of the hover scale animation.
    pub pop_duration: Duration,
    /// Seed for the hand's random number generator.
    pub seed: u64,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            cards_to_draw: 5,
            pop_scale: 1.1,
            pop_duration: Duration::from_millis(150),
            seed: 0,
        }
    }
}

impl HandOptions {
    /// Sets the number of cards drawn at start.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_cards_to_draw(3);
    /// assert_eq!(options.cards_to_draw, 3);
    /// ```
    #[must_use]
    pub const fn with_cards_to_draw(mut self, cards: usize) -> Self {
        self.cards_to_draw = cards;
        self
    }

    /// Sets the hover and selection scale factor.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_pop_scale(1.2);
    /// assert_eq!(options.pop_scale, 1.2);
    /// ```
    #[must_use]
    pub const fn with_pop_scale(mut self, scale: f32) -> Self {
        self.pop_scale = scale;
        self
    }

    /// Sets the hover animation duration.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_pop_duration(Duration::ZERO);
    /// assert_eq!(options.pop_duration, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_pop_duration(mut self, duration: Duration) -> Self {
        self.pop_duration = duration;
        self
    }

    /// Sets the random seed used for draws.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
