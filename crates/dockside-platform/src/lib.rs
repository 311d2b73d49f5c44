//! Window-system collaborators for the companion engine.
//!
//! The engine never talks to an OS API directly. It consumes a
//! [`WindowHandle`] for the externally owned window, a [`ScreenList`] for the
//! display configuration, and a [`CompanionSurface`] for its own window.
//! Lifecycle and activation signals arrive as [`LifecycleNotification`] and
//! [`ActivationState`] values.

pub mod memory;
pub mod noop;
pub mod notifications;
pub mod screen;
pub mod surface;
pub mod window;

use dockside_common::errors::PlatformError;

pub use notifications::{ActivationState, ActivationTracker, LifecycleNotification};
pub use screen::ScreenList;
pub use surface::{CompanionSurface, WindowLevel};
pub use window::{Pid, WindowHandle, WindowId, WindowNumber};

pub type Result<T> = std::result::Result<T, PlatformError>;
