//! Convolution geometry
//!
//! This module contains the pure calculations behind the visualization:
//! - Padding and output size for a configuration
//! - Input cells read by each output cell
//! - The raster order the animation walks

/// Input cells read by one output cell
pub mod footprint;
/// Padding modes and padding amounts
pub mod padding;
/// Immutable convolution parameters
pub mod parameters;
/// Derived sizes: padded input, filter spread, output
pub mod shape;
/// Animation steps and their raster order
pub mod step;

pub use footprint::{FilterCellKey, Footprint, FootprintCell, input_footprint};
pub use padding::{Padding, compute_padding, filter_spread};
pub use parameters::Parameters;
pub use shape::{Geometry, GeometryState, compute_output_size};
pub use step::{AnimationStep, StepCycle, advance, cycle_length};
