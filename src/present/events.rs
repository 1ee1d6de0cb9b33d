use alloc::string::String;
use core::time::Duration;

use crate::describe;
use crate::error::PresentError;

use super::{CardDetails, DetailView, HandController, HandView, TextSink};

/// Shown in the output text when the details action has no panel to open.
const MISSING_DETAIL_VIEW: &str = "No detail view found!";

impl<H, D, T> HandController<H, D, T>
where
    H: HandView,
    D: DetailView,
    T: TextSink,
{
    /// Pointer click on the card in `slot`: selects it.
    ///
    /// The previously selected card animates back to rest and the card
    /// actions become visible.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::Select`] if `slot` is not in the hand.
    pub fn click(&mut self, slot: usize) -> Result<(), PresentError> {
        if let Some(previous) = self.hand.select(slot)? {
            if let Some(anim) = self.slots.get_mut(previous) {
                anim.deselect();
            }
        }

        if let Some(anim) = self.slots.get_mut(slot) {
            anim.select();
            self.hand_view.set_slot_scale(slot, anim.scale());
        }
        self.hand_view.set_actions_visible(true);
        Ok(())
    }

    /// Clears the selection and hides the card actions.
    pub fn deselect(&mut self) {
        if let Some(previous) = self.hand.deselect() {
            if let Some(anim) = self.slots.get_mut(previous) {
                anim.deselect();
            }
        }
        self.hand_view.set_actions_visible(false);
    }

    /// Pointer entered the card in `slot`.
    pub fn pointer_enter(&mut self, slot: usize) {
        if let Some(anim) = self.slots.get_mut(slot) {
            anim.pointer_enter();
        } else {
            tracing::debug!(slot, "pointer entered unknown slot");
        }
    }

    /// Pointer left the card in `slot`.
    pub fn pointer_exit(&mut self, slot: usize) {
        if let Some(anim) = self.slots.get_mut(slot) {
            anim.pointer_exit();
        } else {
            tracing::debug!(slot, "pointer left unknown slot");
        }
    }

    /// Pointer entered the enlarged detail card.
    pub fn detail_pointer_enter(&mut self) {
        self.detail_pop.pointer_enter();
    }

    /// Pointer left the enlarged detail card.
    pub fn detail_pointer_exit(&mut self) {
        self.detail_pop.pointer_exit();
    }

    /// Executes the selected card and writes its description to the output.
    ///
    /// Returns the description that was written.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::NoSelection`] if no card is selected, or
    /// [`PresentError::MissingComponent`] if there is no output text.
    pub fn execute_selected(&mut self) -> Result<String, PresentError> {
        let card = self
            .hand
            .selected_card()
            .ok_or(PresentError::NoSelection)?;
        let text = describe::execution_description(card);

        let Some(output) = self.output.as_mut() else {
            tracing::warn!(card = %card.name, "execute description text is missing");
            return Err(PresentError::MissingComponent("execute description"));
        };
        output.set_text(&text);
        Ok(text)
    }

    /// Opens the detail panel for the selected card and hides the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError::NoSelection`] if no card is selected, or
    /// [`PresentError::MissingComponent`] if there is no detail view. In the
    /// latter case a fallback message is written to the output text.
    pub fn view_selected_details(&mut self) -> Result<(), PresentError> {
        let card = self
            .hand
            .selected_card()
            .ok_or(PresentError::NoSelection)?;

        let Some(detail_view) = self.detail_view.as_mut() else {
            tracing::warn!(card = %card.name, "detail view is missing");
            if let Some(output) = self.output.as_mut() {
                output.set_text(MISSING_DETAIL_VIEW);
            }
            return Err(PresentError::MissingComponent("detail view"));
        };

        detail_view.show_details(&CardDetails::from_card(card));
        self.detail_pop.reset();
        detail_view.set_scale(self.detail_pop.scale());
        self.hand_view.set_visible(false);
        Ok(())
    }

    /// Closes the detail panel and shows the hand again.
    pub fn close_details(&mut self) {
        if let Some(detail_view) = self.detail_view.as_mut() {
            detail_view.hide();
        }
        self.detail_pop.reset();
        self.hand_view.set_visible(true);
    }

    /// Advances every running animation by `dt` and pushes changed scales
    /// to the views.
    pub fn tick(&mut self, dt: Duration) {
        for (slot, anim) in self.slots.iter_mut().enumerate() {
            if anim.tick(dt) {
                self.hand_view.set_slot_scale(slot, anim.scale());
            }
        }

        if self.detail_pop.tick(dt) {
            if let Some(detail_view) = self.detail_view.as_mut() {
                detail_view.set_scale(self.detail_pop.scale());
            }
        }
    }
}
