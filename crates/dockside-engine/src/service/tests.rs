use std::sync::Arc;
use std::time::Duration;

use dockside_common::Rect;
use dockside_platform::memory::{MemoryDesktop, MemorySurface, MemoryWindow};
use dockside_platform::{ActivationState, WindowHandle, WindowLevel};
use tokio::sync::mpsc;

use super::*;
use crate::controller::{Phase, PlacementSettings, PlacementSnapshot};

const LAPTOP: Rect = Rect::new(0.0, 0.0, 1440.0, 900.0);
const NARROW: Rect = Rect::new(0.0, 0.0, 1200.0, 800.0);
const SLOW_TICK: Duration = Duration::from_secs(3600);

fn tracked_frame() -> Rect {
    Rect::new(100.0, 0.0, 800.0, 600.0)
}

fn controller(
    desktop: &Arc<MemoryDesktop>,
    surface: &MemorySurface,
    settings: PlacementSettings,
) -> CompanionController<MemorySurface> {
    CompanionController::new(surface.clone(), desktop.clone(), settings)
}

fn handle(window: &Arc<MemoryWindow>) -> Option<Arc<dyn WindowHandle>> {
    let handle: Arc<dyn WindowHandle> = window.clone();
    Some(handle)
}

/// Poll snapshots until `done` holds or two seconds pass.
async fn wait_for(
    handle: &CompanionHandle,
    done: impl Fn(&PlacementSnapshot) -> bool,
) -> PlacementSnapshot {
    let poll = async {
        loop {
            let snapshot = handle.snapshot().await.unwrap();
            if done(&snapshot) {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(2), poll)
        .await
        .expect("condition not reached in time")
}

async fn wait_until(done: impl Fn() -> bool) {
    let poll = async {
        while !done() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(2), poll)
        .await
        .expect("condition not reached in time");
}

#[tokio::test]
async fn commands_are_processed_in_order() {
    let desktop = Arc::new(MemoryDesktop::new(vec![LAPTOP]));
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let (companion, _join) = CompanionService::spawn(
        controller(&desktop, &surface, PlacementSettings::default()),
        SLOW_TICK,
        None,
        None,
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();
    let snapshot = companion.snapshot().await.unwrap();

    assert_eq!(snapshot.phase, Phase::ShownActive);
    assert_eq!(snapshot.tracked_window, Some(window.id()));
    assert_eq!(snapshot.companion_frame, Rect::new(900.0, 0.0, 400.0, 600.0));

    companion.hide().await.unwrap();
    assert_eq!(companion.snapshot().await.unwrap().phase, Phase::Hidden);
}

#[tokio::test]
async fn lifecycle_notifications_are_forwarded() {
    let (desktop, lifecycle_rx) = MemoryDesktop::with_notifications(vec![LAPTOP]);
    let desktop = Arc::new(desktop);
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let (companion, _join) = CompanionService::spawn(
        controller(&desktop, &surface, PlacementSettings::default()),
        SLOW_TICK,
        Some(lifecycle_rx),
        None,
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();

    window.miniaturize();
    window.miniaturize();
    wait_for(&companion, |s| s.phase == Phase::Hidden).await;

    window.deminiaturize();
    let snapshot = wait_for(&companion, |s| s.phase == Phase::ShownActive).await;
    assert!(snapshot.state.shown);

    window.move_to(200.0, 0.0);
    wait_for(&companion, |s| {
        s.companion_frame == Rect::new(1000.0, 0.0, 400.0, 600.0)
    })
    .await;
}

#[tokio::test]
async fn ticker_catches_unannounced_moves() {
    let desktop = Arc::new(MemoryDesktop::new(vec![LAPTOP]));
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let (companion, _join) = CompanionService::spawn(
        controller(&desktop, &surface, PlacementSettings::default()),
        Duration::from_millis(10),
        None,
        None,
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();

    // No notifier on this desktop: only the tick can notice.
    window.move_to(200.0, 0.0);
    let snapshot = wait_for(&companion, |s| s.companion_frame.x == 1000.0).await;
    assert_eq!(snapshot.state.last_applied_frame, Some(snapshot.companion_frame));
}

#[tokio::test]
async fn host_activation_schedules_reactivation() {
    let desktop = Arc::new(MemoryDesktop::new(vec![LAPTOP]));
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let settings = PlacementSettings {
        reactivation_delay: Duration::from_millis(20),
        ..PlacementSettings::default()
    };
    let (activation_tx, activation_rx) = mpsc::unbounded_channel();
    let (companion, _join) = CompanionService::spawn(
        controller(&desktop, &surface, settings),
        SLOW_TICK,
        None,
        Some(activation_rx),
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();
    companion.snapshot().await.unwrap();
    let fronts = surface.order_front_count();

    activation_tx.send(ActivationState::HostAppActive).unwrap();

    // Activation and the delayed reactivation each order the companion
    // front and re-place it.
    wait_until(|| window.raise_count() == 1).await;
    wait_until(|| surface.order_front_count() >= fronts + 4).await;
}

#[tokio::test]
async fn focus_loss_cancels_pending_reactivation() {
    let desktop = Arc::new(MemoryDesktop::new(vec![LAPTOP]));
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let settings = PlacementSettings {
        reactivation_delay: Duration::from_millis(50),
        ..PlacementSettings::default()
    };
    let (activation_tx, activation_rx) = mpsc::unbounded_channel();
    let (companion, _join) = CompanionService::spawn(
        controller(&desktop, &surface, settings),
        SLOW_TICK,
        None,
        Some(activation_rx),
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();

    activation_tx.send(ActivationState::HostAppActive).unwrap();
    activation_tx.send(ActivationState::Inactive).unwrap();
    let snapshot = wait_for(&companion, |s| !s.state.active).await;
    assert_eq!(snapshot.phase, Phase::ShownInactive);
    assert_eq!(window.raise_count(), 1);

    tokio::time::sleep(Duration::from_millis(150)).await;
    let snapshot = companion.snapshot().await.unwrap();
    assert!(!snapshot.state.active);
    assert_eq!(snapshot.phase, Phase::ShownInactive);
    assert_eq!(surface.level(), WindowLevel::Normal);
}

#[tokio::test]
async fn shutdown_restores_and_returns_controller() {
    let desktop = Arc::new(MemoryDesktop::new(vec![NARROW]));
    let window = desktop.open_window(42, tracked_frame());
    let surface = MemorySurface::new();
    let (companion, join) = CompanionService::spawn(
        controller(&desktop, &surface, PlacementSettings::default()),
        SLOW_TICK,
        None,
        None,
    );

    companion.set_tracked_window(handle(&window)).await.unwrap();
    companion.show().await.unwrap();
    let snapshot = companion.snapshot().await.unwrap();
    assert!(snapshot.outstanding_shrink.is_some());

    companion.shutdown().await.unwrap();
    let controller = join.await.unwrap();

    assert_eq!(controller.outstanding_shrink(), None);
    assert_eq!(window.current_frame(), tracked_frame());
    assert!(companion.show().await.is_err());
    assert!(companion.is_closed());
}

#[tokio::test]
async fn dropping_every_handle_stops_the_loop() {
    let desktop = Arc::new(MemoryDesktop::new(vec![LAPTOP]));
    let surface = MemorySurface::new();
    let (companion, join) = CompanionService::spawn(
        controller(&desktop, &surface, PlacementSettings::default()),
        Duration::from_millis(10),
        None,
        None,
    );

    let clone = companion.clone();
    drop(companion);
    clone.snapshot().await.unwrap();
    drop(clone);

    tokio::time::timeout(Duration::from_secs(2), join)
        .await
        .expect("service did not stop")
        .unwrap();
}
