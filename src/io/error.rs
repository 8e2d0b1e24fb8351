//! Error types for parameter validation and rendering output

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all visualization operations
///
/// An invalid convolution geometry (non-positive output size) is not an
/// error; it is reported through [`crate::geometry::GeometryState`]. Only
/// operations that cannot proceed without a valid geometry surface it here.
#[derive(Debug, Error)]
pub enum ConvVizError {
    /// Parameter outside the range the controls allow
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation requires a geometry with a positive output size
    #[error(
        "Invalid parameters: filter spread {filter_spread} exceeds padded input size {padded_input_size}"
    )]
    InvalidGeometry {
        /// Input size including padding on both sides
        padded_input_size: usize,
        /// Span of the dilated filter along one axis
        filter_spread: usize,
    },

    /// Failed to encode or save a rendered image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Terminal output failed while playing the animation
    #[error("Terminal output failed: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Convenience type alias for visualization results
pub type Result<T> = std::result::Result<T, ConvVizError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ConvVizError {
    ConvVizError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it concerns
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ConvVizError {
    ConvVizError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
