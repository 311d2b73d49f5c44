//! No-op collaborators.
//!
//! Used as a fallback on platforms where window introspection is not
//! available. No screens are reported and the companion surface only
//! remembers what it was told.

use dockside_common::types::Rect;

use super::{CompanionSurface, ScreenList, WindowLevel};

/// A screen list that reports no displays.
pub struct NoopScreenList;

impl ScreenList for NoopScreenList {
    fn screens(&self) -> Vec<Rect> {
        Vec::new()
    }
}

/// A companion surface that draws nothing.
#[derive(Debug, Default)]
pub struct NoopSurface {
    frame: Option<Rect>,
    visible: bool,
}

impl CompanionSurface for NoopSurface {
    fn frame(&self) -> Rect {
        self.frame.unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_on_screen(&self) -> bool {
        self.visible
    }

    fn order_front(&mut self) {}

    fn set_level(&mut self, _level: WindowLevel) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_screens() {
        assert!(NoopScreenList.screens().is_empty());
    }

    #[test]
    fn surface_remembers_visibility() {
        let mut surface = NoopSurface::default();
        assert!(!surface.is_on_screen());
        surface.set_visible(true);
        assert!(surface.is_on_screen());
    }

    #[test]
    fn surface_remembers_frame() {
        let mut surface = NoopSurface::default();
        assert!(surface.frame().is_empty());
        let frame = Rect::new(10.0, 10.0, 400.0, 600.0);
        surface.set_frame(frame);
        assert_eq!(surface.frame(), frame);
    }

    #[test]
    fn screen_list_has_no_fast_lookup() {
        use crate::WindowNumber;
        assert_eq!(NoopScreenList.is_window_on_screen(WindowNumber(1)), None);
    }
}
