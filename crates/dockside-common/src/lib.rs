pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DocksideError, PlacementError, PlatformError};
pub use events::{Event, EventBus};
pub use types::{Edge, Point, Rect};

pub type Result<T> = std::result::Result<T, DocksideError>;
