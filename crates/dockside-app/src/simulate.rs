//! `dockside simulate`: a scripted session against the in-memory desktop.
//!
//! Shows the companion beside a simulated window, hands focus to the host
//! app and back, miniaturizes the window twice, deminiaturizes it, moves it
//! and hides the companion, logging every placement transition along the way.

use std::sync::Arc;

use dockside_common::{DocksideError, Event, EventBus, Rect};
use dockside_config::DocksideConfig;
use dockside_engine::{CompanionController, CompanionHandle, CompanionService, PlacementSettings};
use dockside_platform::memory::{MemoryDesktop, MemorySurface};
use dockside_platform::{ActivationState, ActivationTracker, LifecycleNotification, WindowHandle};
use tokio::sync::broadcast;

const TRACKED_PID: i32 = 4242;

pub async fn simulate(
    config: &DocksideConfig,
    screen_width: f64,
    screen_height: f64,
) -> Result<(), DocksideError> {
    let screen = Rect::new(0.0, 0.0, screen_width, screen_height);
    let desktop = Arc::new(MemoryDesktop::new(vec![screen]));
    let initial = Rect::new(100.0, 0.0, 800.0, screen_height.min(600.0));
    let window = desktop.open_window(TRACKED_PID, initial);
    tracing::info!(%screen, %initial, "simulated desktop ready");

    let bus = Arc::new(EventBus::default());
    let logger = tokio::spawn(log_transitions(bus.subscribe()));

    let settings = PlacementSettings::from(config);
    let reactivation_delay = settings.reactivation_delay;
    let controller =
        CompanionController::new(MemorySurface::new(), desktop.clone(), settings).with_events(bus);
    let (companion, join) =
        CompanionService::spawn(controller, config.timing.tick_interval(), None, None);

    let tracked: Arc<dyn WindowHandle> = window.clone();
    companion.set_automatically_managed(true).await?;
    companion.set_tracked_window(Some(tracked)).await?;

    let mut focus = ActivationTracker::new();
    step(&companion, "show").await?;
    companion.show().await?;
    report_focus(&companion, focus.set_tracked_app_active(true)).await?;

    step(&companion, "host app takes focus").await?;
    report_focus(&companion, focus.set_tracked_app_active(false)).await?;
    report_focus(&companion, focus.set_host_app_active(true)).await?;
    tokio::time::sleep(reactivation_delay * 2).await;

    step(&companion, "tracked app takes focus").await?;
    report_focus(&companion, focus.set_host_app_active(false)).await?;
    report_focus(&companion, focus.set_tracked_app_active(true)).await?;

    step(&companion, "miniaturize").await?;
    window.miniaturize();
    companion.notify(LifecycleNotification::Miniaturized).await?;

    step(&companion, "miniaturize again").await?;
    companion.notify(LifecycleNotification::Miniaturized).await?;

    step(&companion, "deminiaturize").await?;
    window.deminiaturize();
    companion.notify(LifecycleNotification::Deminiaturized).await?;

    step(&companion, "move").await?;
    window.move_to(initial.x + 50.0, initial.y + 40.0);
    companion.notify(LifecycleNotification::Moved).await?;

    step(&companion, "hide").await?;
    companion.hide().await?;

    let snapshot = companion.snapshot().await?;
    companion.shutdown().await?;
    join.await
        .map_err(|e| DocksideError::Service(format!("service task failed: {e}")))?;
    if let Err(e) = logger.await {
        tracing::warn!("transition logger failed: {e}");
    }

    let summary = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| DocksideError::Other(format!("failed to serialize snapshot: {e}")))?;
    println!("{summary}");
    println!("final tracked frame: {}", window.current_frame());
    Ok(())
}

/// Log the state before a scripted step.
async fn step(companion: &CompanionHandle, name: &str) -> Result<(), DocksideError> {
    let snapshot = companion.snapshot().await?;
    tracing::info!(
        step = name,
        phase = ?snapshot.phase,
        companion = %snapshot.companion_frame,
        "next step"
    );
    Ok(())
}

/// Forward a focus change, if the tracker reported one.
async fn report_focus(
    companion: &CompanionHandle,
    change: Option<ActivationState>,
) -> Result<(), DocksideError> {
    if let Some(state) = change {
        tracing::info!(?state, "focus changed");
        companion.set_activation_state(state).await?;
    }
    Ok(())
}

async fn log_transitions(mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Shutdown) | Err(broadcast::error::RecvError::Closed) => break,
            Ok(event) => tracing::info!(?event, "transition"),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("transition log skipped {n} events")
            }
        }
    }
}
