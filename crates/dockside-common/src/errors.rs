use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the window-system collaborators.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window no longer resolves: {0}")]
    WindowUnresolvable(String),

    #[error("window write failed: {0}")]
    WriteFailed(String),
}

/// Reasons a placement pass could not produce a frame.
///
/// None of these are fatal; the next tick or notification retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("no tracked window")]
    NoTrackedWindow,

    #[error("tracked window frame could not be read")]
    FrameUnavailable,

    #[error("degenerate {what} rectangle ({width} x {height})")]
    DegenerateFrame {
        what: &'static str,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DocksideError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("service error: {0}")]
    Service(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("companion.default_width".into());
        assert_eq!(
            err.to_string(),
            "config validation error: companion.default_width"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::WindowUnresolvable("pid 42".into());
        assert_eq!(err.to_string(), "window no longer resolves: pid 42");
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::DegenerateFrame {
            what: "companion",
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate companion rectangle (0 x 600)"
        );
        assert_eq!(
            PlacementError::NoTrackedWindow.to_string(),
            "no tracked window"
        );
    }

    #[test]
    fn dockside_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DocksideError = config_err.into();
        assert!(matches!(err, DocksideError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dockside_error_from_platform() {
        let platform_err = PlatformError::WriteFailed("AXPosition".into());
        let err: DocksideError = platform_err.into();
        assert!(matches!(err, DocksideError::Platform(_)));
        assert!(err.to_string().contains("AXPosition"));
    }

    #[test]
    fn dockside_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DocksideError = io_err.into();
        assert!(matches!(err, DocksideError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn dockside_error_other_variants() {
        let err = DocksideError::Service("channel closed".into());
        assert_eq!(err.to_string(), "service error: channel closed");

        let err = DocksideError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
