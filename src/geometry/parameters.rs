//! Immutable convolution parameters as edited through the controls

use std::ops::RangeInclusive;

use crate::geometry::padding::Padding;
use crate::io::configuration::{
    DEFAULT_DILATION, DEFAULT_FILTER_SIZE, DEFAULT_INPUT_CHANNELS, DEFAULT_INPUT_SIZE,
    DEFAULT_NUMBER_OF_FILTERS, DEFAULT_STRIDE, DILATION_RANGE, FILTER_SIZE_RANGE,
    INPUT_CHANNELS_RANGE, INPUT_SIZE_RANGE, NUMBER_OF_FILTERS_RANGE, STRIDE_RANGE,
};
use crate::io::error::{Result, invalid_parameter};

/// One complete convolution configuration
///
/// Values are fixed once built. Every edit produces a new `Parameters`, so
/// derived geometry can always be recomputed from the value at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    input_size: usize,
    input_channels: usize,
    filter_size: usize,
    number_of_filters: usize,
    stride: usize,
    dilation: usize,
    padding: Padding,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            input_size: DEFAULT_INPUT_SIZE,
            input_channels: DEFAULT_INPUT_CHANNELS,
            filter_size: DEFAULT_FILTER_SIZE,
            number_of_filters: DEFAULT_NUMBER_OF_FILTERS,
            stride: DEFAULT_STRIDE,
            dilation: DEFAULT_DILATION,
            padding: Padding::Valid,
        }
    }
}

fn check(parameter: &'static str, value: usize, range: &RangeInclusive<usize>) -> Result<usize> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be within {}..={}", range.start(), range.end()),
        ))
    }
}

fn clamp(value: usize, range: &RangeInclusive<usize>) -> usize {
    value.clamp(*range.start(), *range.end())
}

impl Parameters {
    /// Build parameters, rejecting values outside the control ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first field out of range
    pub fn new(
        input_size: usize,
        input_channels: usize,
        filter_size: usize,
        number_of_filters: usize,
        stride: usize,
        dilation: usize,
        padding: Padding,
    ) -> Result<Self> {
        Ok(Self {
            input_size: check("input_size", input_size, &INPUT_SIZE_RANGE)?,
            input_channels: check("input_channels", input_channels, &INPUT_CHANNELS_RANGE)?,
            filter_size: check("filter_size", filter_size, &FILTER_SIZE_RANGE)?,
            number_of_filters: check(
                "number_of_filters",
                number_of_filters,
                &NUMBER_OF_FILTERS_RANGE,
            )?,
            stride: check("stride", stride, &STRIDE_RANGE)?,
            dilation: check("dilation", dilation, &DILATION_RANGE)?,
            padding,
        })
    }

    /// Build parameters, clamping every value into its control range
    pub fn clamped(
        input_size: usize,
        input_channels: usize,
        filter_size: usize,
        number_of_filters: usize,
        stride: usize,
        dilation: usize,
        padding: Padding,
    ) -> Self {
        Self {
            input_size: clamp(input_size, &INPUT_SIZE_RANGE),
            input_channels: clamp(input_channels, &INPUT_CHANNELS_RANGE),
            filter_size: clamp(filter_size, &FILTER_SIZE_RANGE),
            number_of_filters: clamp(number_of_filters, &NUMBER_OF_FILTERS_RANGE),
            stride: clamp(stride, &STRIDE_RANGE),
            dilation: clamp(dilation, &DILATION_RANGE),
            padding,
        }
    }

    /// Copy with a different padding mode
    #[must_use]
    pub const fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }

    /// Copy with a different stride, clamped to its range
    #[must_use]
    pub fn with_stride(self, stride: usize) -> Self {
        Self {
            stride: clamp(stride, &STRIDE_RANGE),
            ..self
        }
    }

    /// Copy with a different dilation, clamped to its range
    #[must_use]
    pub fn with_dilation(self, dilation: usize) -> Self {
        Self {
            dilation: clamp(dilation, &DILATION_RANGE),
            ..self
        }
    }

    /// Side length of the square input grid
    pub const fn input_size(&self) -> usize {
        self.input_size
    }

    /// Number of input channels
    pub const fn input_channels(&self) -> usize {
        self.input_channels
    }

    /// Side length of each square filter
    pub const fn filter_size(&self) -> usize {
        self.filter_size
    }

    /// Number of filters, and therefore output grids
    pub const fn number_of_filters(&self) -> usize {
        self.number_of_filters
    }

    /// Step between successive output positions
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Spacing between filter taps
    pub const fn dilation(&self) -> usize {
        self.dilation
    }

    /// Border handling mode
    pub const fn padding(&self) -> Padding {
        self.padding
    }
}
