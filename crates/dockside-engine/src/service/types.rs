//! Commands processed by the service loop.

use std::sync::Arc;

use dockside_platform::{ActivationState, LifecycleNotification, WindowHandle};
use tokio::sync::oneshot;

use crate::controller::PlacementSnapshot;

/// Capacity of the command channel shared by every input.
pub(super) const COMMAND_CHANNEL_CAPACITY: usize = 64;

/// One serialized unit of work for the controller.
#[derive(Debug)]
pub enum Command {
    Show,
    Hide,
    SetTrackedWindow(Option<Arc<dyn WindowHandle>>),
    SetAutomaticallyManaged(bool),
    Lifecycle(LifecycleNotification),
    Activation(ActivationState),
    Tick,
    /// Delayed follow-up to a host-app activation, tagged with the
    /// activation it belongs to. Stale tags are dropped.
    Reactivate(u64),
    Snapshot(oneshot::Sender<PlacementSnapshot>),
    Shutdown,
}
