//! Derived sizes of a convolution: padding, padded input and output
//!
//! Nothing here is stored alongside the parameters. Every consumer derives a
//! fresh [`GeometryState`] from the [`Parameters`] it holds, so an edit can
//! never leave stale sizes behind.

use crate::geometry::padding::{compute_padding, filter_spread};
use crate::geometry::parameters::Parameters;
use crate::io::error::{ConvVizError, Result};

/// Output side length for a padded input, or `None` when the filter does not fit
///
/// The output covers every stride-aligned start position whose dilated
/// filter lies entirely within the padded input. With stride 1 this equals
/// `padded_input_size - filter_spread + 1`.
pub const fn compute_output_size(
    padded_input_size: usize,
    filter_spread: usize,
    stride: usize,
) -> Option<usize> {
    if stride == 0 || filter_spread == 0 || padded_input_size < filter_spread {
        return None;
    }
    Some((padded_input_size - filter_spread) / stride + 1)
}

/// Sizes derived from a valid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Padding cells before the input along each axis
    pub padding_start: usize,
    /// Padding cells after the input along each axis
    pub padding_end: usize,
    /// Input side length including padding
    pub padded_input_size: usize,
    /// Span of the dilated filter along one axis
    pub filter_spread: usize,
    /// Output side length
    pub output_size: usize,
}

impl Geometry {
    /// Whether a padded-input coordinate lies in the padding border
    pub const fn is_padding(&self, coordinate: usize) -> bool {
        coordinate < self.padding_start || coordinate >= self.padded_input_size - self.padding_end
    }
}

/// Outcome of deriving geometry from parameters
///
/// `Invalid` is a normal display state ("Invalid parameters"), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryState {
    /// Output size is positive
    Valid(Geometry),
    /// The dilated filter is larger than the padded input
    Invalid {
        /// Input side length including padding
        padded_input_size: usize,
        /// Span of the dilated filter
        filter_spread: usize,
    },
}

impl GeometryState {
    /// Derive padding and output size from parameters
    pub fn derive(parameters: &Parameters) -> Self {
        let spread = filter_spread(parameters.filter_size(), parameters.dilation());
        let (padding_start, padding_end) = compute_padding(
            parameters.input_size(),
            spread,
            parameters.stride(),
            parameters.padding(),
        );
        let padded_input_size = parameters.input_size() + padding_start + padding_end;

        let state = compute_output_size(padded_input_size, spread, parameters.stride()).map_or(
            Self::Invalid {
                padded_input_size,
                filter_spread: spread,
            },
            |output_size| {
                Self::Valid(Geometry {
                    padding_start,
                    padding_end,
                    padded_input_size,
                    filter_spread: spread,
                    output_size,
                })
            },
        );

        tracing::debug!(?parameters, ?state, "derived convolution geometry");
        state
    }

    /// The geometry, if the configuration is valid
    pub const fn valid(&self) -> Option<&Geometry> {
        match self {
            Self::Valid(geometry) => Some(geometry),
            Self::Invalid { .. } => None,
        }
    }

    /// Whether the configuration has a positive output size
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The geometry, or an error for callers that cannot display the invalid state
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` when the output size is not positive
    pub fn require(self) -> Result<Geometry> {
        match self {
            Self::Valid(geometry) => Ok(geometry),
            Self::Invalid {
                padded_input_size,
                filter_spread,
            } => Err(ConvVizError::InvalidGeometry {
                padded_input_size,
                filter_spread,
            }),
        }
    }
}
