//! Per-section validation: companion geometry and timer settings.

use crate::schema::DocksideConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate companion constraints.
pub(crate) fn validate_companion(errors: &mut Vec<String>, config: &DocksideConfig) {
    validate_range_f64(
        errors,
        "companion.default_width",
        config.companion.default_width,
        120.0,
        2000.0,
    );
}

/// Validate timer constraints.
pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &DocksideConfig) {
    validate_range(
        errors,
        "timing.tick_interval_ms",
        config.timing.tick_interval_ms,
        16,
        5000,
    );
    validate_range(
        errors,
        "timing.reactivation_delay_ms",
        config.timing.reactivation_delay_ms,
        0,
        2000,
    );
}
