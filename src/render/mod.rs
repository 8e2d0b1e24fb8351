//! Display structures and renderers
//!
//! This module contains:
//! - Scene construction (cell styles per grid)
//! - Raster rendering for PNG and GIF output
//! - Text rendering for terminal playback

/// Rasterize scenes into RGBA images
pub mod raster;
/// Per-cell display styles for one frame
pub mod scene;
/// Terminal text rendering
pub mod terminal;

pub use scene::{CellStyle, Scene};
