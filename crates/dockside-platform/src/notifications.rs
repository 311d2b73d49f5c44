//! Lifecycle and activation signals for the tracked application.

use serde::{Deserialize, Serialize};

/// Typed lifecycle event for the tracked window or its owning process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleNotification {
    Moved,
    Resized,
    Miniaturized,
    Deminiaturized,
    Created,
    Destroyed,
    FocusChanged,
    ApplicationActivated,
    ApplicationDeactivated,
    ApplicationTerminated,
}

/// Which of the two applications currently has system focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivationState {
    BothActive,
    TrackedAppActive,
    HostAppActive,
    #[default]
    Inactive,
}

impl ActivationState {
    pub fn from_flags(tracked_app_active: bool, host_app_active: bool) -> Self {
        match (tracked_app_active, host_app_active) {
            (true, true) => Self::BothActive,
            (true, false) => Self::TrackedAppActive,
            (false, true) => Self::HostAppActive,
            (false, false) => Self::Inactive,
        }
    }
}

/// Folds per-app activation signals into [`ActivationState`] changes.
///
/// When focus moves between the two apps the OS reports the deactivation
/// and the activation separately; the intermediate `Inactive` is reported
/// like any other state.
#[derive(Debug, Default)]
pub struct ActivationTracker {
    tracked_app_active: bool,
    host_app_active: bool,
    last: Option<ActivationState>,
}

impl ActivationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ActivationState {
        ActivationState::from_flags(self.tracked_app_active, self.host_app_active)
    }

    /// Returns the new state if it differs from the last one reported.
    pub fn set_tracked_app_active(&mut self, active: bool) -> Option<ActivationState> {
        self.tracked_app_active = active;
        self.report()
    }

    /// Returns the new state if it differs from the last one reported.
    pub fn set_host_app_active(&mut self, active: bool) -> Option<ActivationState> {
        self.host_app_active = active;
        self.report()
    }

    fn report(&mut self) -> Option<ActivationState> {
        let state = self.state();
        if self.last == Some(state) {
            return None;
        }
        self.last = Some(state);
        Some(state)
    }
}
