//! Companion window tracking and positioning engine.
//!
//! [`negotiator`] does the screen-bounds math, [`CompanionController`] is the
//! placement state machine, and [`service`] runs the controller on a single
//! serialized task fed by ticks, lifecycle notifications, activation changes
//! and presentation intents.

pub mod controller;
pub mod latch;
pub mod negotiator;
pub mod service;

pub use controller::{
    CompanionController, Phase, PlacementSettings, PlacementSnapshot, PlacementState,
};
pub use latch::Latch;
pub use negotiator::{negotiate, Negotiation, ShrinkAdjustment};
pub use service::{CompanionHandle, CompanionService};
