//! Input/output operations and error handling

/// Command-line arguments and the runner behind them
pub mod cli;
/// Parameter ranges, timing and rendering constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of single frames
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Frame rendering progress bars
pub mod progress;
/// Animation capture and GIF export
pub mod visualization;
