//! The CompanionController keeps the companion docked to the tracked window.

mod lifecycle;
mod placement;
mod presentation;
mod types;

pub use types::*;
