//! The locally owned companion window.

use dockside_common::types::Rect;
use serde::{Deserialize, Serialize};

/// Stacking level of the companion window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowLevel {
    #[default]
    Normal,
    /// Floats above regular windows while either app is frontmost.
    Elevated,
}

/// Write access to the companion window. Only the controller holds one.
pub trait CompanionSurface: Send {
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    fn set_visible(&mut self, visible: bool);

    fn is_on_screen(&self) -> bool;

    /// Order the window front without activating the host app.
    fn order_front(&mut self);

    fn set_level(&mut self, level: WindowLevel);
}
