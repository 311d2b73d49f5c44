//! Simulated external window.

use std::sync::Mutex;

use dockside_common::errors::PlatformError;
use dockside_common::types::Rect;
use tokio::sync::mpsc;

use super::lock;
use crate::notifications::LifecycleNotification;
use crate::{Pid, Result, WindowHandle, WindowId, WindowNumber};

#[derive(Debug)]
struct WindowState {
    frame: Rect,
    miniaturized: bool,
    hidden: bool,
    alive: bool,
    reject_writes: bool,
    frame_writes: Vec<Rect>,
    raises: usize,
}

/// A window owned by a simulated external process.
#[derive(Debug)]
pub struct MemoryWindow {
    id: WindowId,
    number: WindowNumber,
    pid: Pid,
    state: Mutex<WindowState>,
    notifier: Option<mpsc::UnboundedSender<LifecycleNotification>>,
}

impl MemoryWindow {
    pub(super) fn new(
        id: WindowId,
        number: WindowNumber,
        pid: Pid,
        frame: Rect,
        notifier: Option<mpsc::UnboundedSender<LifecycleNotification>>,
    ) -> Self {
        Self {
            id,
            number,
            pid,
            state: Mutex::new(WindowState {
                frame,
                miniaturized: false,
                hidden: false,
                alive: true,
                reject_writes: false,
                frame_writes: Vec::new(),
                raises: 0,
            }),
            notifier,
        }
    }

    // -- User actions --

    pub fn move_to(&self, x: f64, y: f64) {
        {
            let mut state = lock(&self.state);
            state.frame.x = x;
            state.frame.y = y;
        }
        self.notify(LifecycleNotification::Moved);
    }

    pub fn resize_to(&self, width: f64, height: f64) {
        {
            let mut state = lock(&self.state);
            state.frame.width = width;
            state.frame.height = height;
        }
        self.notify(LifecycleNotification::Resized);
    }

    pub fn miniaturize(&self) {
        lock(&self.state).miniaturized = true;
        self.notify(LifecycleNotification::Miniaturized);
    }

    pub fn deminiaturize(&self) {
        lock(&self.state).miniaturized = false;
        self.notify(LifecycleNotification::Deminiaturized);
    }

    /// Hide without a notification, as when the user switches spaces.
    pub fn set_hidden(&self, hidden: bool) {
        lock(&self.state).hidden = hidden;
    }

    /// Refuse frame writes, as a window that ignores accessibility
    /// requests does.
    pub fn reject_writes(&self, reject: bool) {
        lock(&self.state).reject_writes = reject;
    }

    /// Close the window; the owning process keeps running.
    pub fn close(&self) {
        lock(&self.state).alive = false;
        self.notify(LifecycleNotification::Destroyed);
    }

    /// Terminate the owning process.
    pub fn terminate(&self) {
        lock(&self.state).alive = false;
        self.notify(LifecycleNotification::ApplicationTerminated);
    }

    // -- Inspection --

    /// Current frame, readable even after the window is gone.
    pub fn current_frame(&self) -> Rect {
        lock(&self.state).frame
    }

    /// Every frame written through the handle, oldest first.
    pub fn frame_writes(&self) -> Vec<Rect> {
        lock(&self.state).frame_writes.clone()
    }

    pub fn raise_count(&self) -> usize {
        lock(&self.state).raises
    }

    fn notify(&self, notification: LifecycleNotification) {
        if let Some(tx) = &self.notifier {
            if tx.send(notification).is_err() {
                tracing::debug!(window = %self.id, ?notification, "no listener for notification");
            }
        }
    }

    fn unresolvable(&self) -> PlatformError {
        PlatformError::WindowUnresolvable(format!("{} (pid {})", self.id, self.pid))
    }
}

impl WindowHandle for MemoryWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn frame(&self) -> Option<Rect> {
        let state = lock(&self.state);
        state.alive.then_some(state.frame)
    }

    fn set_frame(&self, frame: Rect) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.alive {
            return Err(self.unresolvable());
        }
        if state.reject_writes {
            return Err(PlatformError::WriteFailed(format!("{} frame", self.id)));
        }
        state.frame = frame;
        state.frame_writes.push(frame);
        Ok(())
    }

    fn raise(&self) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.alive {
            return Err(self.unresolvable());
        }
        state.raises += 1;
        Ok(())
    }

    fn process_id(&self) -> Option<Pid> {
        lock(&self.state).alive.then_some(self.pid)
    }

    fn is_on_screen(&self) -> bool {
        let state = lock(&self.state);
        state.alive && !state.miniaturized && !state.hidden
    }

    fn window_number(&self) -> Option<WindowNumber> {
        Some(self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> MemoryWindow {
        MemoryWindow::new(
            WindowId(1),
            WindowNumber(1),
            42,
            Rect::new(100.0, 0.0, 800.0, 600.0),
            None,
        )
    }

    #[test]
    fn handle_writes_are_recorded() {
        let w = window();
        let frame = Rect::new(100.0, 0.0, 700.0, 600.0);
        w.set_frame(frame).unwrap();
        assert_eq!(w.frame(), Some(frame));
        assert_eq!(w.frame_writes(), vec![frame]);
    }

    #[test]
    fn user_actions_are_not_recorded_as_writes() {
        let w = window();
        w.move_to(0.0, 0.0);
        w.resize_to(500.0, 500.0);
        assert!(w.frame_writes().is_empty());
        assert_eq!(w.current_frame(), Rect::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn miniaturized_window_is_off_screen() {
        let w = window();
        assert!(w.is_on_screen());
        w.miniaturize();
        assert!(!w.is_on_screen());
        w.deminiaturize();
        assert!(w.is_on_screen());
    }

    #[test]
    fn terminated_window_stops_resolving() {
        let w = window();
        w.terminate();
        assert_eq!(w.frame(), None);
        assert_eq!(w.process_id(), None);
        assert!(!w.is_on_screen());
        assert!(matches!(
            w.set_frame(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Err(PlatformError::WindowUnresolvable(_))
        ));
        assert!(w.raise().is_err());
    }

    #[test]
    fn rejected_writes_leave_frame_untouched() {
        let w = window();
        w.reject_writes(true);
        assert!(matches!(
            w.set_frame(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Err(PlatformError::WriteFailed(_))
        ));
        assert_eq!(w.current_frame(), Rect::new(100.0, 0.0, 800.0, 600.0));
        assert!(w.frame_writes().is_empty());
    }

    #[test]
    fn raise_is_counted() {
        let w = window();
        w.raise().unwrap();
        w.raise().unwrap();
        assert_eq!(w.raise_count(), 2);
    }
}
