//! Show, hide, activation and management mode.

use dockside_common::Event;
use dockside_platform::{CompanionSurface, WindowLevel};
use tracing::{debug, info, warn};

use super::CompanionController;

impl<S: CompanionSurface> CompanionController<S> {
    /// Make the companion visible beside the tracked window.
    ///
    /// While unmanaged this only records the intent for when management
    /// is turned back on.
    pub fn show(&mut self) {
        self.state.shown = true;
        if !self.state.automatically_managed {
            self.visible_when_managed = true;
            return;
        }
        debug!("showing companion");
        self.surface.set_visible(true);
        self.publish(Event::CompanionShown);
        self.activate();
    }

    /// Hide the companion, hand focus back to the tracked window and give
    /// it its width back.
    pub fn hide(&mut self) {
        let was_shown = self.state.shown;
        self.state.shown = false;
        if !self.state.automatically_managed {
            self.visible_when_managed = false;
            return;
        }
        debug!("hiding companion");
        if was_shown {
            self.raise_tracked_window();
        }
        self.restore_tracked_window();
        self.deactivate();
        if self.surface.is_on_screen() {
            self.surface.set_visible(false);
            self.publish(Event::CompanionHidden);
        }
    }

    /// Switch between engine-positioned and user-positioned modes.
    ///
    /// Turning management on replays the intent recorded while it was off.
    pub fn set_automatically_managed(&mut self, managed: bool) {
        if self.state.automatically_managed == managed {
            return;
        }
        info!(managed, "automatic management changed");
        if managed {
            self.state.automatically_managed = true;
            if self.visible_when_managed {
                self.show();
                self.update_position(false);
            } else {
                self.hide();
            }
        } else {
            self.visible_when_managed = self.state.shown;
            self.state.automatically_managed = false;
        }
        self.update_level();
    }

    /// Give the tracked window its width back before the engine stops.
    pub fn release(&mut self) {
        if self.state.automatically_managed {
            self.restore_tracked_window();
        }
        self.publish(Event::Shutdown);
    }

    /// Bring the tracked window to the front, unless it is miniaturized.
    pub(super) fn raise_tracked_window(&self) {
        let Some(tracked) = self.tracked.as_ref() else {
            return;
        };
        if tracked.miniaturized == Some(true) {
            return;
        }
        if let Err(e) = tracked.handle.raise() {
            warn!(error = %e, "failed to raise tracked window");
        }
    }

    pub(super) fn activate(&mut self) {
        if !self.state.shown {
            return;
        }
        self.state.active = true;
        self.surface.order_front();
        self.update_level();
        self.update_position(false);
    }

    pub(super) fn deactivate(&mut self) {
        self.state.active = false;
        self.update_level();
    }

    fn update_level(&mut self) {
        let level = if self.state.active {
            WindowLevel::Elevated
        } else {
            WindowLevel::Normal
        };
        self.surface.set_level(level);
    }
}
