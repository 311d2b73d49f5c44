//! Handle to a window owned by another process.

use std::fmt;

use dockside_common::types::Rect;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Identity of an external window. Two handles with the same id refer to
/// the same underlying window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Window-server number, usable for cheap on-screen lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowNumber(pub u32);

pub type Pid = i32;

/// Reference to a window that belongs to another process.
///
/// A handle never owns the window: the other process can move, miniaturize
/// or destroy it at any time. A handle that no longer resolves returns
/// `None` from [`frame`](WindowHandle::frame) and errors from writes.
pub trait WindowHandle: Send + Sync + fmt::Debug {
    fn id(&self) -> WindowId;

    fn frame(&self) -> Option<Rect>;

    fn set_frame(&self, frame: Rect) -> Result<()>;

    /// Bring the window to the front of its application's window stack.
    fn raise(&self) -> Result<()>;

    fn process_id(&self) -> Option<Pid>;

    fn is_on_screen(&self) -> bool;

    fn window_number(&self) -> Option<WindowNumber> {
        None
    }

    fn is_same_window(&self, other: &dyn WindowHandle) -> bool {
        self.id() == other.id()
    }
}
