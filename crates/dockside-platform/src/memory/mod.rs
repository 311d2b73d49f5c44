//! In-memory window system.
//!
//! Simulates an external application's windows, the display list and the
//! companion surface. Every write is recorded so callers can inspect what
//! the engine did. External actions (the user moving or miniaturizing the
//! window) emit lifecycle notifications when a notifier is attached; writes
//! made through [`WindowHandle`](crate::WindowHandle) do not.

mod desktop;
mod surface;
mod window;

use std::sync::{Mutex, MutexGuard};

pub use desktop::MemoryDesktop;
pub use surface::MemorySurface;
pub use window::MemoryWindow;

/// Lock that survives poisoning; the simulated state stays usable after a
/// panicking test thread.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
