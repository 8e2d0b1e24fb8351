//! Parameter ranges, animation timing and rendering defaults

use std::ops::RangeInclusive;
use std::time::Duration;

// Slider ranges the controls clamp to
/// Allowed input grid side length
pub const INPUT_SIZE_RANGE: RangeInclusive<usize> = 1..=8;
/// Allowed number of input channels
pub const INPUT_CHANNELS_RANGE: RangeInclusive<usize> = 1..=3;
/// Allowed filter side length
pub const FILTER_SIZE_RANGE: RangeInclusive<usize> = 1..=8;
/// Allowed number of filters
pub const NUMBER_OF_FILTERS_RANGE: RangeInclusive<usize> = 1..=4;
/// Allowed stride
pub const STRIDE_RANGE: RangeInclusive<usize> = 1..=8;
/// Allowed dilation
pub const DILATION_RANGE: RangeInclusive<usize> = 1..=8;

// Initial control values
/// Default input grid side length
pub const DEFAULT_INPUT_SIZE: usize = 4;
/// Default number of input channels
pub const DEFAULT_INPUT_CHANNELS: usize = 1;
/// Default filter side length
pub const DEFAULT_FILTER_SIZE: usize = 2;
/// Default number of filters
pub const DEFAULT_NUMBER_OF_FILTERS: usize = 1;
/// Default stride
pub const DEFAULT_STRIDE: usize = 1;
/// Default dilation
pub const DEFAULT_DILATION: usize = 1;

/// Interval between automatic animation steps
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// Filter colours share saturation and lightness; only the hue varies
/// Saturation of filter/channel colours in percent
pub const COLOR_SATURATION: u32 = 60;
/// Lightness of filter/channel colours in percent
pub const COLOR_LIGHTNESS: u32 = 70;
/// Weight of the neutral colour when dimming padding cells (0-255)
pub const PADDING_DIM_WEIGHT: u8 = 160;

// Raster layout
/// Side length of one grid cell in pixels
pub const CELL_PIXELS: u32 = 16;
/// Gap between cells in pixels
pub const CELL_GAP: u32 = 1;
/// Gap between grids in pixels
pub const GRID_GAP: u32 = 12;

// Output settings
/// Delay between GIF animation frames, matching the tick interval
pub const GIF_FRAME_DELAY_MS: u32 = 1000;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Message shown in place of the grids when the geometry is invalid
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid parameters";
