//! Simulated display list and window registry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use dockside_common::types::Rect;
use tokio::sync::mpsc;

use super::lock;
use super::window::MemoryWindow;
use crate::notifications::LifecycleNotification;
use crate::{Pid, ScreenList, WindowHandle, WindowId, WindowNumber};

pub struct MemoryDesktop {
    screens: Mutex<Vec<Rect>>,
    windows: Mutex<Vec<Arc<MemoryWindow>>>,
    next_id: AtomicU64,
    notifier: Option<mpsc::UnboundedSender<LifecycleNotification>>,
}

impl MemoryDesktop {
    pub fn new(screens: Vec<Rect>) -> Self {
        Self {
            screens: Mutex::new(screens),
            windows: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            notifier: None,
        }
    }

    /// Desktop whose windows report user actions on the returned receiver.
    pub fn with_notifications(
        screens: Vec<Rect>,
    ) -> (Self, mpsc::UnboundedReceiver<LifecycleNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut desktop = Self::new(screens);
        desktop.notifier = Some(tx);
        (desktop, rx)
    }

    /// Open a window for `pid` at `frame`.
    pub fn open_window(&self, pid: Pid, frame: Rect) -> Arc<MemoryWindow> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let window = Arc::new(MemoryWindow::new(
            WindowId(id),
            WindowNumber(id as u32),
            pid,
            frame,
            self.notifier.clone(),
        ));
        lock(&self.windows).push(Arc::clone(&window));
        tracing::debug!(window = %window.id(), %frame, "opened simulated window");
        window
    }

    /// Replace the display configuration.
    pub fn set_screens(&self, screens: Vec<Rect>) {
        *lock(&self.screens) = screens;
    }
}

impl ScreenList for MemoryDesktop {
    fn screens(&self) -> Vec<Rect> {
        lock(&self.screens).clone()
    }

    fn is_window_on_screen(&self, number: WindowNumber) -> Option<bool> {
        lock(&self.windows)
            .iter()
            .find(|w| w.window_number() == Some(number))
            .map(|w| w.is_on_screen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1440.0, 900.0)
    }

    #[test]
    fn open_window_assigns_distinct_ids() {
        let desktop = MemoryDesktop::new(vec![screen()]);
        let a = desktop.open_window(10, Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = desktop.open_window(10, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_ne!(a.id(), b.id());
        assert!(!a.is_same_window(&*b));
        assert!(a.is_same_window(&*a));
    }

    #[test]
    fn set_screens_replaces_list() {
        let desktop = MemoryDesktop::new(vec![screen()]);
        desktop.set_screens(vec![screen(), Rect::new(1440.0, 0.0, 1920.0, 1080.0)]);
        assert_eq!(desktop.screens().len(), 2);
    }

    #[test]
    fn fast_lookup_follows_window_state() {
        let desktop = MemoryDesktop::new(vec![screen()]);
        let window = desktop.open_window(10, Rect::new(0.0, 0.0, 100.0, 100.0));
        let number = window.window_number().unwrap();
        assert_eq!(desktop.is_window_on_screen(number), Some(true));

        window.set_hidden(true);
        assert_eq!(desktop.is_window_on_screen(number), Some(false));
        assert_eq!(desktop.is_window_on_screen(WindowNumber(999)), None);
    }

    #[tokio::test]
    async fn user_actions_emit_notifications() {
        let (desktop, mut rx) = MemoryDesktop::with_notifications(vec![screen()]);
        let window = desktop.open_window(10, Rect::new(0.0, 0.0, 100.0, 100.0));

        window.move_to(50.0, 0.0);
        window.miniaturize();

        assert_eq!(rx.recv().await, Some(LifecycleNotification::Moved));
        assert_eq!(rx.recv().await, Some(LifecycleNotification::Miniaturized));
    }
}
