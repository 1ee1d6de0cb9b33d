//! Linear scale tweening for card widgets.
//!
//! Nothing here owns a clock. The host advances animations by calling
//! [`PopAnimator::tick`] from its frame loop with the frame's unscaled
//! delta time.

use core::time::Duration;

/// A linear interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    /// Creates a tween from `start` to `end`.
    #[must_use]
    pub const fn new(start: f32, end: f32, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the interpolated value at the current elapsed time.
    #[must_use]
    #[expect(
        clippy::suboptimal_flops,
        reason = "f32::mul_add is not available without std"
    )]
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start + (self.end - self.start) * t
    }

    /// Advances the tween by `dt` and returns the new value.
    ///
    /// The value lands exactly on the end value once the duration elapses.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.value()
    }

    /// Returns whether the tween has reached its end value.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the end value.
    #[must_use]
    pub const fn end(&self) -> f32 {
        self.end
    }
}

/// Hover and selection pop effect for one card widget.
///
/// Hovering an unselected card grows it to `base * pop_scale` over the
/// configured duration and leaving shrinks it back. Selecting snaps to the
/// popped scale; while selected, hover events are ignored. Starting any new
/// animation replaces the running one.
#[derive(Debug, Clone, PartialEq)]
pub struct PopAnimator {
    base: f32,
    pop_scale: f32,
    duration: Duration,
    scale: f32,
    selected: bool,
    active: Option<Tween>,
}

impl PopAnimator {
    /// Creates an animator resting at `base`.
    #[must_use]
    pub const fn new(base: f32, pop_scale: f32, duration: Duration) -> Self {
        Self {
            base,
            pop_scale,
            duration,
            scale: base,
            selected: false,
            active: None,
        }
    }

    /// Returns the current scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns whether the card is marked selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns whether an animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    fn popped(&self) -> f32 {
        self.base * self.pop_scale
    }

    const fn tween_to(&mut self, target: f32) {
        self.active = Some(Tween::new(self.scale, target, self.duration));
    }

    /// Pointer entered the card.
    pub fn pointer_enter(&mut self) {
        if !self.selected {
            self.tween_to(self.popped());
        }
    }

    /// Pointer left the card.
    pub fn pointer_exit(&mut self) {
        if !self.selected {
            self.tween_to(self.base);
        }
    }

    /// Marks the card selected and snaps it to the popped scale.
    pub fn select(&mut self) {
        self.selected = true;
        self.active = None;
        self.scale = self.popped();
    }

    /// Marks the card unselected and animates it back to rest.
    pub fn deselect(&mut self) {
        self.selected = false;
        self.tween_to(self.base);
    }

    /// Stops any animation and snaps back to rest.
    pub const fn reset(&mut self) {
        self.selected = false;
        self.active = None;
        self.scale = self.base;
    }

    /// Advances the running animation by `dt`.
    ///
    /// Returns `true` if the scale changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.active.as_mut() else {
            return false;
        };
        self.scale = tween.advance(dt);
        if tween.is_finished() {
            self.active = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(50);

    #[test]
    fn tween_interpolates_linearly_and_lands_on_end() {
        let mut tween = Tween::new(1.0, 2.0, Duration::from_millis(100));
        assert_eq!(tween.value(), 1.0);
        assert!((tween.advance(FRAME) - 1.5).abs() < 1e-6);
        assert_eq!(tween.advance(Duration::from_millis(80)), 2.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_tween_finishes_immediately() {
        let tween = Tween::new(0.0, 3.0, Duration::ZERO);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 3.0);
    }

    #[test]
    fn hover_pops_and_exit_restores() {
        let mut pop = PopAnimator::new(1.0, 1.5, Duration::from_millis(100));
        pop.pointer_enter();
        pop.tick(FRAME);
        pop.tick(FRAME);
        assert_eq!(pop.scale(), 1.5);
        assert!(!pop.is_animating());

        pop.pointer_exit();
        pop.tick(Duration::from_secs(1));
        assert_eq!(pop.scale(), 1.0);
    }

    #[test]
    fn selected_card_ignores_hover() {
        let mut pop = PopAnimator::new(2.0, 1.1, Duration::from_millis(100));
        pop.select();
        assert_eq!(pop.scale(), 2.0 * 1.1);

        pop.pointer_exit();
        assert!(!pop.is_animating());
        assert_eq!(pop.scale(), 2.0 * 1.1);

        pop.deselect();
        assert!(pop.is_animating());
        pop.tick(Duration::from_secs(1));
        assert_eq!(pop.scale(), 2.0);
    }

    #[test]
    fn new_animation_replaces_running_one() {
        let mut pop = PopAnimator::new(1.0, 2.0, Duration::from_millis(100));
        pop.pointer_enter();
        pop.tick(FRAME);
        let midway = pop.scale();

        pop.pointer_exit();
        pop.tick(FRAME);
        assert!(pop.scale() < midway);
        pop.reset();
        assert_eq!(pop.scale(), 1.0);
        assert!(!pop.tick(FRAME));
    }
}
