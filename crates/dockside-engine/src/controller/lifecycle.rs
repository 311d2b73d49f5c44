//! Reactions to the tracked window changing, its lifecycle notifications,
//! activation changes and the periodic tick.

use std::sync::Arc;
use std::time::Duration;

use dockside_common::Event;
use dockside_platform::{ActivationState, CompanionSurface, LifecycleNotification, WindowHandle};
use tracing::{debug, info, trace};

use super::types::TrackedWindowRef;
use super::CompanionController;

impl<S: CompanionSurface> CompanionController<S> {
    /// Follow a different window, or none.
    ///
    /// Setting the window already tracked is a no-op. Otherwise all state
    /// derived from the previous window is dropped; an outstanding shrink
    /// is discarded without being written back, since the handle it was
    /// applied through is gone.
    pub fn set_tracked_window(&mut self, window: Option<Arc<dyn WindowHandle>>) {
        let unchanged = match (&self.tracked, &window) {
            (Some(current), Some(next)) => current.handle.is_same_window(&**next),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        self.reset_tracked_state();
        self.tracked = window.map(TrackedWindowRef::new);
        let id = self.tracked_window_id();
        info!(window = ?id, "tracked window changed");
        self.publish(Event::TrackedWindowChanged(id.map(|id| id.0)));
        self.update_position(false);
    }

    pub fn on_lifecycle_notification(&mut self, notification: LifecycleNotification) {
        match notification {
            LifecycleNotification::Miniaturized => {
                if let Some(tracked) = self.tracked.as_mut() {
                    tracked.miniaturized = Some(true);
                }
                self.show_after_deminiaturize.set_if(self.state.shown);
                self.hide();
            }
            LifecycleNotification::Deminiaturized => {
                if let Some(tracked) = self.tracked.as_mut() {
                    tracked.miniaturized = Some(false);
                }
                let latched = self.show_after_deminiaturize.take();
                if self.state.shown || latched {
                    self.show();
                }
            }
            LifecycleNotification::Moved
            | LifecycleNotification::Resized
            | LifecycleNotification::Destroyed => self.update_position(false),
            LifecycleNotification::ApplicationTerminated => {
                info!("tracked application terminated");
                self.hide();
                self.reset_tracked_state();
                self.tracked = None;
                self.publish(Event::TrackedAppTerminated);
                self.publish(Event::TrackedWindowChanged(None));
            }
            LifecycleNotification::Created
            | LifecycleNotification::FocusChanged
            | LifecycleNotification::ApplicationActivated
            | LifecycleNotification::ApplicationDeactivated => {
                trace!(?notification, "lifecycle notification ignored");
            }
        }
    }

    /// React to a focus change between the tracked app and the host app.
    ///
    /// When the host app itself took focus the tracked window is raised so
    /// it stays in front of the host's other windows, and the returned
    /// delay asks the caller to call [`reactivate`](Self::reactivate) once
    /// the OS has finished re-ordering windows.
    pub fn on_activation_state_changed(&mut self, state: ActivationState) -> Option<Duration> {
        debug!(?state, "activation state changed");
        match state {
            ActivationState::BothActive | ActivationState::TrackedAppActive => {
                self.activate();
                None
            }
            ActivationState::HostAppActive => {
                if !self.state.shown {
                    return None;
                }
                self.activate();
                self.raise_tracked_window();
                Some(self.settings.reactivation_delay)
            }
            ActivationState::Inactive => {
                self.deactivate();
                None
            }
        }
    }

    /// Delayed follow-up to a host-app activation.
    pub fn reactivate(&mut self) {
        self.activate();
    }

    pub fn on_periodic_tick(&mut self) {
        self.update_position(true);
    }

    fn reset_tracked_state(&mut self) {
        if let Some(discarded) = self.shrink.take() {
            debug!(
                shrink = discarded.signed(),
                "discarding shrink of previous tracked window"
            );
        }
        self.shrink_settled = false;
        self.show_after_deminiaturize.reset();
        self.state.last_applied_frame = None;
    }
}
