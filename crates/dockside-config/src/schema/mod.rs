//! Configuration schema types for Dockside.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod companion;
mod system;

pub use companion::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Dockside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DocksideConfig {
    pub companion: CompanionConfig,
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
