//! Simulated companion window.

use std::sync::{Arc, Mutex};

use dockside_common::types::Rect;

use super::lock;
use crate::{CompanionSurface, WindowLevel};

#[derive(Debug, Default)]
struct SurfaceState {
    frame: Option<Rect>,
    visible: bool,
    level: WindowLevel,
    frame_writes: usize,
    order_front_count: usize,
}

/// Companion surface backed by shared state. Clones observe the same
/// window, so a test can keep one clone while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<Rect> {
        lock(&self.state).frame
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }

    pub fn level(&self) -> WindowLevel {
        lock(&self.state).level
    }

    pub fn frame_write_count(&self) -> usize {
        lock(&self.state).frame_writes
    }

    pub fn order_front_count(&self) -> usize {
        lock(&self.state).order_front_count
    }
}

impl CompanionSurface for MemorySurface {
    fn frame(&self) -> Rect {
        lock(&self.state)
            .frame
            .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    fn set_frame(&mut self, frame: Rect) {
        let mut state = lock(&self.state);
        state.frame = Some(frame);
        state.frame_writes += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        lock(&self.state).visible = visible;
    }

    fn is_on_screen(&self) -> bool {
        lock(&self.state).visible
    }

    fn order_front(&mut self) {
        lock(&self.state).order_front_count += 1;
    }

    fn set_level(&mut self, level: WindowLevel) {
        lock(&self.state).level = level;
    }
}
