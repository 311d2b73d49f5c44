//! Display configuration, queried on demand.

use dockside_common::types::Rect;

use crate::window::WindowNumber;

/// Current list of display rectangles. Queried on every placement pass, so
/// screen reconfiguration is picked up by the next tick.
pub trait ScreenList: Send + Sync {
    fn screens(&self) -> Vec<Rect>;

    /// Fast on-screen lookup by window-server number. `None` means the
    /// backend cannot answer and the caller should ask the handle instead.
    fn is_window_on_screen(&self, _number: WindowNumber) -> Option<bool> {
        None
    }
}
