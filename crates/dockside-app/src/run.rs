//! `dockside run`: the placement service against the platform backend.

use std::sync::Arc;

use dockside_common::{DocksideError, EventBus};
use dockside_config::DocksideConfig;
use dockside_engine::{CompanionController, CompanionService, PlacementSettings};
use dockside_platform::noop::{NoopScreenList, NoopSurface};

/// Runs until Ctrl-C.
///
/// Only the no-op backend is available, so the service idles: no tracked
/// window is ever offered and no screens are reported.
pub async fn run(config: &DocksideConfig) -> Result<(), DocksideError> {
    let bus = Arc::new(EventBus::default());
    let controller = CompanionController::new(
        NoopSurface::default(),
        Arc::new(NoopScreenList),
        PlacementSettings::from(config),
    )
    .with_events(bus);

    let (companion, join) =
        CompanionService::spawn(controller, config.timing.tick_interval(), None, None);
    if config.companion.start_automatically_managed {
        companion.show().await?;
    }

    tracing::info!("Companion service running; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    tracing::info!("Interrupted, stopping companion service");
    companion.shutdown().await?;
    join.await
        .map_err(|e| DocksideError::Service(format!("service task failed: {e}")))?;
    Ok(())
}
