//! Public handle for driving a running companion service.

use std::sync::Arc;

use dockside_common::{DocksideError, Result};
use dockside_platform::{ActivationState, LifecycleNotification, WindowHandle};
use tokio::sync::{mpsc, oneshot};

use super::types::Command;
use crate::controller::PlacementSnapshot;

/// Sends commands to the service loop. Cheap to clone; the loop stops once
/// every clone is dropped.
#[derive(Debug, Clone)]
pub struct CompanionHandle {
    command_tx: mpsc::Sender<Command>,
}

impl CompanionHandle {
    pub(super) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    pub async fn show(&self) -> Result<()> {
        self.send(Command::Show).await
    }

    pub async fn hide(&self) -> Result<()> {
        self.send(Command::Hide).await
    }

    pub async fn set_tracked_window(&self, window: Option<Arc<dyn WindowHandle>>) -> Result<()> {
        self.send(Command::SetTrackedWindow(window)).await
    }

    pub async fn set_automatically_managed(&self, managed: bool) -> Result<()> {
        self.send(Command::SetAutomaticallyManaged(managed)).await
    }

    /// Deliver a lifecycle notification directly, bypassing any forwarder.
    pub async fn notify(&self, notification: LifecycleNotification) -> Result<()> {
        self.send(Command::Lifecycle(notification)).await
    }

    pub async fn set_activation_state(&self, state: ActivationState) -> Result<()> {
        self.send(Command::Activation(state)).await
    }

    /// Controller state after every command sent before this one.
    pub async fn snapshot(&self) -> Result<PlacementSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot(reply_tx)).await?;
        reply_rx.await.map_err(|_| stopped())
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx.send(command).await.map_err(|_| stopped())
    }
}

fn stopped() -> DocksideError {
    DocksideError::Service("companion service has stopped".into())
}
