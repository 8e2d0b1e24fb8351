//! Deterministic colours for filters and channels

/// Stable string hashing
pub mod hash;
/// Hue derivation and colour conversion
pub mod palette;

pub use palette::{Hsl, filter_channel_color};
