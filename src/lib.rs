//! Geometry and animation model of a 2D convolution
//!
//! Given an input size, channel count, filter size, filter count, stride,
//! dilation and padding mode, the crate derives padding and output size,
//! maps each output cell back to the input cells it reads, and walks the
//! output cells in a repeating animation. Renderers turn each step into
//! coloured grids for images or the terminal.

#![forbid(unsafe_code)]

/// Timer-driven playback with pause and hover override
pub mod animation;
/// Deterministic filter and channel colours
pub mod color;
/// Padding, output size, input footprints and animation order
pub mod geometry;
/// Command-line interface, configuration, errors and export
pub mod io;
/// Cell-style grids and their raster and text renderers
pub mod render;

pub use io::error::{ConvVizError, Result};
