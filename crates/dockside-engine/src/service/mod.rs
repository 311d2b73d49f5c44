//! Async runtime for the companion controller.
//!
//! Every input (presentation intents from [`CompanionHandle`], lifecycle
//! notifications, activation changes, the periodic tick and delayed
//! reactivation) becomes a [`Command`] on one channel. A single task owns
//! the controller and processes commands in arrival order, so no two
//! placement passes ever interleave.
//!
//! Background tasks hold only weak senders: the loop ends on
//! [`CompanionHandle::shutdown`] or when the last handle is dropped.

mod handle;
mod types;

#[cfg(test)]
mod tests;

pub use handle::CompanionHandle;
pub use types::Command;

use std::time::Duration;

use dockside_platform::{ActivationState, CompanionSurface, LifecycleNotification};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::controller::CompanionController;
use types::COMMAND_CHANNEL_CAPACITY;

pub struct CompanionService;

impl CompanionService {
    /// Start the service loop, the ticker and one forwarder per receiver.
    ///
    /// The returned task yields the controller once the loop has stopped.
    pub fn spawn<S>(
        controller: CompanionController<S>,
        tick_interval: Duration,
        lifecycle_rx: Option<mpsc::UnboundedReceiver<LifecycleNotification>>,
        activation_rx: Option<mpsc::UnboundedReceiver<ActivationState>>,
    ) -> (CompanionHandle, JoinHandle<CompanionController<S>>)
    where
        S: CompanionSurface + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let weak_tx = command_tx.downgrade();

        let mut tasks = vec![spawn_ticker(weak_tx.clone(), tick_interval)];
        if let Some(rx) = lifecycle_rx {
            tasks.push(spawn_forwarder(rx, weak_tx.clone(), Command::Lifecycle));
        }
        if let Some(rx) = activation_rx {
            tasks.push(spawn_forwarder(rx, weak_tx.clone(), Command::Activation));
        }

        info!(?tick_interval, "companion service started");
        let join = tokio::spawn(run_loop(controller, command_rx, weak_tx, tasks));
        (CompanionHandle::new(command_tx), join)
    }
}

async fn run_loop<S: CompanionSurface>(
    mut controller: CompanionController<S>,
    mut command_rx: mpsc::Receiver<Command>,
    weak_tx: mpsc::WeakSender<Command>,
    tasks: Vec<JoinHandle<()>>,
) -> CompanionController<S> {
    let mut pending_reactivation: Option<JoinHandle<()>> = None;
    let mut activation_generation: u64 = 0;

    while let Some(command) = command_rx.recv().await {
        trace!(?command, "companion command");
        match command {
            Command::Show => controller.show(),
            Command::Hide => controller.hide(),
            Command::SetTrackedWindow(window) => controller.set_tracked_window(window),
            Command::SetAutomaticallyManaged(managed) => {
                controller.set_automatically_managed(managed)
            }
            Command::Lifecycle(notification) => controller.on_lifecycle_notification(notification),
            Command::Activation(state) => {
                // Any newer activation state supersedes a pending reactivation,
                // including one already queued behind this command.
                activation_generation = activation_generation.wrapping_add(1);
                if let Some(previous) = pending_reactivation.take() {
                    previous.abort();
                }
                if let Some(delay) = controller.on_activation_state_changed(state) {
                    pending_reactivation = Some(spawn_reactivation(
                        weak_tx.clone(),
                        delay,
                        activation_generation,
                    ));
                }
            }
            Command::Tick => controller.on_periodic_tick(),
            Command::Reactivate(generation) if generation == activation_generation => {
                pending_reactivation = None;
                controller.reactivate();
            }
            Command::Reactivate(generation) => {
                debug!(generation, "dropping superseded reactivation");
            }
            Command::Snapshot(reply) => {
                if reply.send(controller.snapshot()).is_err() {
                    debug!("snapshot requester went away");
                }
            }
            Command::Shutdown => break,
        }
    }

    for task in tasks.into_iter().chain(pending_reactivation) {
        task.abort();
    }
    controller.release();
    info!("companion service stopped");
    controller
}

fn spawn_ticker(command_tx: mpsc::WeakSender<Command>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            let Some(tx) = command_tx.upgrade() else {
                break;
            };
            if tx.send(Command::Tick).await.is_err() {
                break;
            }
        }
    })
}

fn spawn_forwarder<T>(
    mut rx: mpsc::UnboundedReceiver<T>,
    command_tx: mpsc::WeakSender<Command>,
    wrap: fn(T) -> Command,
) -> JoinHandle<()>
where
    T: Send + 'static,
{
    tokio::spawn(async move {
        while let Some(item) = rx.recv().await {
            let Some(tx) = command_tx.upgrade() else {
                break;
            };
            if tx.send(wrap(item)).await.is_err() {
                break;
            }
        }
    })
}

fn spawn_reactivation(
    command_tx: mpsc::WeakSender<Command>,
    delay: Duration,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Some(tx) = command_tx.upgrade() {
            let _ = tx.send(Command::Reactivate(generation)).await;
        }
    })
}
