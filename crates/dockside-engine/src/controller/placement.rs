//! Position updates and the tracked-window shrink.

use dockside_common::{Event, PlacementError};
use dockside_platform::CompanionSurface;
use tracing::{debug, error, info, warn};

use super::CompanionController;
use crate::negotiator::{self, Negotiation};

impl<S: CompanionSurface> CompanionController<S> {
    /// Bring the companion in line with the tracked window.
    ///
    /// With `skip_if_unchanged` a pass that would write the same frame to
    /// an already visible companion does nothing; periodic ticks use it.
    pub fn update_position(&mut self, skip_if_unchanged: bool) {
        if !self.state.automatically_managed {
            return;
        }

        let tracked_on_screen = match self.tracked.as_mut() {
            Some(tracked) => tracked.is_on_screen(&*self.screens),
            None => false,
        };
        if !tracked_on_screen {
            if self.surface.is_on_screen() {
                debug!("tracked window is off screen; hiding companion");
                self.surface.set_visible(false);
                self.publish(Event::CompanionHidden);
            }
            return;
        }

        if !self.state.active {
            return;
        }

        let negotiation = match self.negotiate() {
            Ok(negotiation) => negotiation,
            Err(e) => {
                debug!(error = %e, "cannot place companion");
                return;
            }
        };

        if skip_if_unchanged
            && self.state.last_applied_frame == Some(negotiation.companion)
            && self.surface.is_on_screen()
        {
            return;
        }

        if !self.apply_shrink_once(&negotiation) {
            return;
        }

        self.state.last_applied_frame = Some(negotiation.companion);
        self.surface.set_frame(negotiation.companion);
        self.surface.set_visible(true);
        self.surface.order_front();
        self.publish(Event::CompanionPlaced(negotiation.companion));
    }

    fn negotiate(&mut self) -> Result<Negotiation, PlacementError> {
        let tracked = self
            .tracked
            .as_mut()
            .ok_or(PlacementError::NoTrackedWindow)?;
        let frame = tracked
            .resolve_frame()
            .ok_or(PlacementError::FrameUnavailable)?;
        let screens = self.screens.screens();
        negotiator::negotiate(
            frame,
            &screens,
            self.settings.inverted,
            self.settings.default_width,
        )
    }

    /// Shrink the tracked window at most once per show cycle.
    ///
    /// Returns `false` when the shrink could not be written; the companion
    /// is then left where it is and the next pass tries again.
    fn apply_shrink_once(&mut self, negotiation: &Negotiation) -> bool {
        if self.shrink_settled {
            return true;
        }

        let adjustment = negotiation.shrink;
        let Some(edge) = adjustment.edge() else {
            self.shrink_settled = true;
            return true;
        };
        if let Some(outstanding) = self.shrink {
            debug_assert!(false, "shrink applied twice without a restore");
            error!(
                outstanding = outstanding.signed(),
                "shrink already outstanding; not applying another"
            );
            self.shrink_settled = true;
            return true;
        }
        let Some(tracked) = self.tracked.as_ref() else {
            return false;
        };

        match tracked.handle.set_frame(negotiation.tracked) {
            Ok(()) => {
                info!(
                    window = %tracked.id(),
                    ?edge,
                    amount = adjustment.amount(),
                    "shrank tracked window"
                );
                self.shrink = Some(adjustment);
                self.shrink_settled = true;
                self.publish(Event::TrackedWindowShrunk {
                    edge,
                    amount: adjustment.amount(),
                });
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to shrink tracked window; companion not placed");
                false
            }
        }
    }

    /// Undo the outstanding shrink, if any. The adjustment is consumed
    /// before anything is written, so it is never restored twice.
    pub(super) fn restore_tracked_window(&mut self) {
        self.shrink_settled = false;
        let Some(adjustment) = self.shrink.take() else {
            return;
        };
        let Some(tracked) = self.tracked.as_mut() else {
            return;
        };
        let Some(current) = tracked.resolve_frame() else {
            debug!("tracked window no longer resolves; dropping shrink");
            return;
        };

        let screens = self.screens.screens();
        let Some(restored) = adjustment.restore(current, &screens) else {
            debug!(%current, "restore would not grow the tracked window; skipped");
            return;
        };
        match tracked.handle.set_frame(restored) {
            Ok(()) => {
                info!(window = %tracked.id(), %restored, "restored tracked window");
                self.publish(Event::TrackedWindowRestored(restored));
            }
            Err(e) => warn!(error = %e, "failed to restore tracked window"),
        }
    }
}
