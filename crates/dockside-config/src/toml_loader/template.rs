//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Dockside Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[companion]
# default_width = 400.0             # 120-2000
# side = "trailing"                 # trailing (right of the window), leading (left)
# start_automatically_managed = true

[timing]
# tick_interval_ms = 100            # 16-5000
# reactivation_delay_ms = 100       # 0-2000

[logging]
# level = "info"                    # trace, debug, info, warn, error
"##
    .to_string()
}
