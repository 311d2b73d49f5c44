//! Core types and constructors for CompanionController.

use std::sync::Arc;
use std::time::Duration;

use dockside_common::{Event, EventBus, Rect};
use dockside_config::DocksideConfig;
use dockside_platform::{CompanionSurface, ScreenList, WindowHandle, WindowId, WindowNumber};
use serde::{Deserialize, Serialize};

use crate::latch::Latch;
use crate::negotiator::ShrinkAdjustment;

/// Static placement settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSettings {
    pub default_width: f64,
    /// Dock to the leading edge instead of the trailing one.
    pub inverted: bool,
    /// Delay before re-activating after the host app takes focus.
    pub reactivation_delay: Duration,
    pub start_automatically_managed: bool,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self::from(&DocksideConfig::default())
    }
}

impl From<&DocksideConfig> for PlacementSettings {
    fn from(config: &DocksideConfig) -> Self {
        Self {
            default_width: config.companion.default_width,
            inverted: config.companion.side.is_inverted(),
            reactivation_delay: config.timing.reactivation_delay(),
            start_automatically_managed: config.companion.start_automatically_managed,
        }
    }
}

/// Presentation flags owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementState {
    /// The engine positions the companion. When false it never writes to
    /// the tracked window or moves the companion.
    pub automatically_managed: bool,
    /// The user wants the companion visible.
    pub shown: bool,
    /// One of the two apps is frontmost; placement runs only while set.
    pub active: bool,
    /// Last companion frame written, for the tick fast path.
    pub last_applied_frame: Option<Rect>,
}

/// Observable presentation phase, derived from surface visibility and
/// [`PlacementState::active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Hidden,
    ShownInactive,
    ShownActive,
}

/// Point-in-time copy of the controller state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    pub phase: Phase,
    pub state: PlacementState,
    pub tracked_window: Option<WindowId>,
    pub tracked_frame: Option<Rect>,
    pub companion_frame: Rect,
    pub outstanding_shrink: Option<ShrinkAdjustment>,
}

/// The tracked window plus the state derived from it. Replaced wholesale
/// when the tracked window changes, so nothing leaks across windows.
#[derive(Debug)]
pub(super) struct TrackedWindowRef {
    pub(super) handle: Arc<dyn WindowHandle>,
    pub(super) last_known_frame: Option<Rect>,
    /// `None` until the first miniaturize/deminiaturize notification.
    pub(super) miniaturized: Option<bool>,
    pub(super) window_number: Option<WindowNumber>,
}

impl TrackedWindowRef {
    pub(super) fn new(handle: Arc<dyn WindowHandle>) -> Self {
        Self {
            handle,
            last_known_frame: None,
            miniaturized: None,
            window_number: None,
        }
    }

    pub(super) fn id(&self) -> WindowId {
        self.handle.id()
    }

    /// Query the live frame, remembering it when it resolves.
    pub(super) fn resolve_frame(&mut self) -> Option<Rect> {
        let frame = self.handle.frame();
        if frame.is_some() {
            self.last_known_frame = frame;
        }
        frame
    }

    /// Miniaturized state wins; then the screen list's fast lookup by
    /// window number; then the handle itself.
    pub(super) fn is_on_screen(&mut self, screens: &dyn ScreenList) -> bool {
        if self.miniaturized == Some(true) {
            return false;
        }
        if self.window_number.is_none() {
            self.window_number = self.handle.window_number();
        }
        if let Some(on_screen) = self
            .window_number
            .and_then(|number| screens.is_window_on_screen(number))
        {
            return on_screen;
        }
        self.handle.is_on_screen()
    }
}

/// Decides where the companion goes and applies it.
///
/// Owns the companion surface and is the only writer of the tracked
/// window's frame. Every entry point is synchronous; callers serialize
/// them (see [`crate::service`]).
pub struct CompanionController<S: CompanionSurface> {
    pub(super) surface: S,
    pub(super) screens: Arc<dyn ScreenList>,
    pub(super) settings: PlacementSettings,
    pub(super) tracked: Option<TrackedWindowRef>,
    pub(super) state: PlacementState,
    /// Presentation intent recorded while unmanaged.
    pub(super) visible_when_managed: bool,
    pub(super) show_after_deminiaturize: Latch,
    /// Adjustment currently applied to the tracked window.
    pub(super) shrink: Option<ShrinkAdjustment>,
    /// The shrink for the current show cycle has been decided.
    pub(super) shrink_settled: bool,
    pub(super) events: Option<Arc<EventBus>>,
}

impl<S: CompanionSurface> CompanionController<S> {
    /// Starts hidden with no tracked window.
    pub fn new(surface: S, screens: Arc<dyn ScreenList>, settings: PlacementSettings) -> Self {
        let automatically_managed = settings.start_automatically_managed;
        Self {
            surface,
            screens,
            settings,
            tracked: None,
            state: PlacementState {
                automatically_managed,
                shown: false,
                active: false,
                last_applied_frame: None,
            },
            visible_when_managed: false,
            show_after_deminiaturize: Latch::new(),
            shrink: None,
            shrink_settled: false,
            events: None,
        }
    }

    /// Publish placement transitions on `bus`.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        if !self.surface.is_on_screen() {
            Phase::Hidden
        } else if self.state.active {
            Phase::ShownActive
        } else {
            Phase::ShownInactive
        }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_automatically_managed(&self) -> bool {
        self.state.automatically_managed
    }

    pub fn tracked_window_id(&self) -> Option<WindowId> {
        self.tracked.as_ref().map(TrackedWindowRef::id)
    }

    pub fn outstanding_shrink(&self) -> Option<ShrinkAdjustment> {
        self.shrink
    }

    pub fn snapshot(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            phase: self.phase(),
            state: self.state,
            tracked_window: self.tracked_window_id(),
            tracked_frame: self
                .tracked
                .as_ref()
                .and_then(|t| t.handle.frame().or(t.last_known_frame)),
            companion_frame: self.surface.frame(),
            outstanding_shrink: self.shrink,
        }
    }

    pub(super) fn publish(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}
