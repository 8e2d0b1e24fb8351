//! Timer-driven animation over output positions

/// Playback state machine with hover override
pub mod controller;
/// Cancellable periodic timer
pub mod timer;

pub use controller::{AnimationController, PlaybackState};
pub use timer::{PeriodicTimer, Tick};
