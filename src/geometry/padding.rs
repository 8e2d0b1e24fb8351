//! Border handling modes and the padding amounts they imply

use std::fmt;
use std::str::FromStr;

use crate::io::error::{ConvVizError, invalid_parameter};

/// Convolution border-handling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Padding {
    /// No padding; the filter only visits positions where it fits entirely
    #[default]
    Valid,
    /// Pad so that a stride-1 convolution keeps the input size
    Same,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("VALID"),
            Self::Same => f.write_str("SAME"),
        }
    }
}

impl FromStr for Padding {
    type Err = ConvVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("valid") {
            Ok(Self::Valid)
        } else if s.eq_ignore_ascii_case("same") {
            Ok(Self::Same)
        } else {
            Err(invalid_parameter(
                "padding",
                &s,
                &"expected VALID or SAME",
            ))
        }
    }
}

/// Span covered by a filter along one axis once dilation gaps are inserted
pub const fn filter_spread(filter_size: usize, dilation: usize) -> usize {
    filter_size + (dilation.saturating_sub(1)) * (filter_size.saturating_sub(1))
}

/// Padding added before and after the input along one axis
///
/// SAME follows the TensorFlow convention: the total padding is
/// `max(spread - r, 0)` where `r` is `input_size % stride`, or `stride` when
/// that remainder is zero. Odd totals put the extra cell at the end.
pub const fn compute_padding(
    input_size: usize,
    filter_spread: usize,
    stride: usize,
    mode: Padding,
) -> (usize, usize) {
    match mode {
        Padding::Valid => (0, 0),
        Padding::Same => {
            let remainder = if stride == 0 { 0 } else { input_size % stride };
            let consumed = if remainder == 0 { stride } else { remainder };
            let total = filter_spread.saturating_sub(consumed);
            let start = total / 2;
            (start, total - start)
        }
    }
}
