//! Companion window configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which side of the tracked window the companion docks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DockSide {
    /// Right of the tracked window.
    #[default]
    Trailing,
    /// Left of the tracked window.
    Leading,
}

impl DockSide {
    /// The negotiator's `inverted` flag.
    pub fn is_inverted(self) -> bool {
        matches!(self, DockSide::Leading)
    }
}

/// Companion window placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Companion width in points (valid range: 120-2000).
    pub default_width: f64,
    pub side: DockSide,
    /// Whether the engine positions the companion at startup. When false the
    /// user drags it around until management is turned back on.
    pub start_automatically_managed: bool,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            side: DockSide::Trailing,
            start_automatically_managed: true,
        }
    }
}

/// Timer settings for the placement loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Periodic re-sync interval (valid range: 16-5000).
    pub tick_interval_ms: u32,
    /// Delay before re-activating the companion after the host app takes
    /// focus (valid range: 0-2000).
    pub reactivation_delay_ms: u32,
}

impl TimingConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    pub fn reactivation_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reactivation_delay_ms))
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            reactivation_delay_ms: 100,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companion_config_defaults() {
        let config = CompanionConfig::default();
        assert!((config.default_width - 400.0).abs() < f64::EPSILON);
        assert_eq!(config.side, DockSide::Trailing);
        assert!(config.start_automatically_managed);
    }

    #[test]
    fn dock_side_inversion() {
        assert!(!DockSide::Trailing.is_inverted());
        assert!(DockSide::Leading.is_inverted());
    }

    #[test]
    fn dock_side_serialization() {
        let json = serde_json::to_string(&DockSide::Leading).unwrap();
        assert_eq!(json, "\"leading\"");
        let side: DockSide = serde_json::from_str("\"trailing\"").unwrap();
        assert_eq!(side, DockSide::Trailing);
    }

    #[test]
    fn timing_durations() {
        let timing = TimingConfig {
            tick_interval_ms: 250,
            reactivation_delay_ms: 0,
        };
        assert_eq!(timing.tick_interval(), Duration::from_millis(250));
        assert_eq!(timing.reactivation_delay(), Duration::ZERO);
    }

    #[test]
    fn companion_config_partial_toml() {
        let toml_str = r#"
side = "leading"
"#;
        let config: CompanionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.side, DockSide::Leading);
        // Defaults preserved
        assert!((config.default_width - 400.0).abs() < f64::EPSILON);
        assert!(config.start_automatically_managed);
    }
}
