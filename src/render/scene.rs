//! Cell styles for every grid shown in one animation frame
//!
//! A [`Scene`] is the display structure handed to renderers. It holds:
//! - One padded input grid per channel, with the current footprint coloured
//! - One filter grid per filter and channel
//! - One output grid per filter, with the current cell highlighted
//!
//! Scenes are rebuilt from scratch for every frame; nothing is patched in place.

use ndarray::Array2;

use crate::color::palette::filter_channel_color;
use crate::color::Hsl;
use crate::geometry::{AnimationStep, Footprint, Geometry, GeometryState, Parameters};
use crate::io::error::Result;

/// Display style of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    /// Background colour, `None` for the neutral background
    pub color: Option<Hsl>,
    /// Cell lies in the padding border
    pub dimmed: bool,
    /// Cell takes part in the current step
    pub highlighted: bool,
}

/// All grids for one animation step of a valid configuration
#[derive(Debug, Clone)]
pub struct Scene {
    /// Parameters the scene was built from
    pub parameters: Parameters,
    /// Geometry derived from the parameters
    pub geometry: Geometry,
    /// Step the scene shows
    pub step: AnimationStep,
    /// Padded input grid per channel, indexed `[y, x]`
    pub inputs: Vec<Array2<CellStyle>>,
    /// Filter grids indexed `[filter][channel]`, each indexed `[y, x]`
    pub filters: Vec<Vec<Array2<CellStyle>>>,
    /// Output grid per filter, indexed `[y, x]`
    pub outputs: Vec<Array2<CellStyle>>,
}

/// Colour of a filter's output cells
pub fn output_color(filter: usize) -> Hsl {
    filter_channel_color(filter, 0)
}

impl Scene {
    /// Build the scene for `step`, or `None` when the parameters are invalid
    pub fn build(parameters: &Parameters, step: AnimationStep) -> Option<Self> {
        Self::try_build(parameters, step).ok()
    }

    /// Build the scene for `step`
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` when the parameters have no positive output size
    pub fn try_build(parameters: &Parameters, step: AnimationStep) -> Result<Self> {
        let geometry = GeometryState::derive(parameters).require()?;
        let footprint = Footprint::of(step, parameters);

        Ok(Self {
            parameters: *parameters,
            geometry,
            step,
            inputs: input_grids(parameters, &geometry, &footprint),
            filters: filter_grids(parameters, step),
            outputs: output_grids(parameters, &geometry, step),
        })
    }

    /// Number of cells highlighted across all input grids
    pub fn highlighted_input_cells(&self) -> usize {
        self.inputs
            .iter()
            .map(|grid| grid.iter().filter(|cell| cell.highlighted).count())
            .sum()
    }
}

fn input_grids(
    parameters: &Parameters,
    geometry: &Geometry,
    footprint: &Footprint,
) -> Vec<Array2<CellStyle>> {
    let size = geometry.padded_input_size;
    (0..parameters.input_channels())
        .map(|channel| {
            Array2::from_shape_fn((size, size), |(y, x)| {
                let key = footprint.key_at(channel, x, y);
                CellStyle {
                    color: key.map(|k| filter_channel_color(k.filter, k.channel)),
                    dimmed: geometry.is_padding(x) || geometry.is_padding(y),
                    highlighted: key.is_some(),
                }
            })
        })
        .collect()
}

fn filter_grids(parameters: &Parameters, step: AnimationStep) -> Vec<Vec<Array2<CellStyle>>> {
    let size = parameters.filter_size();
    (0..parameters.number_of_filters())
        .map(|filter| {
            (0..parameters.input_channels())
                .map(|channel| {
                    let style = CellStyle {
                        color: Some(filter_channel_color(filter, channel)),
                        dimmed: false,
                        highlighted: filter == step.filter_index,
                    };
                    Array2::from_elem((size, size), style)
                })
                .collect()
        })
        .collect()
}

fn output_grids(
    parameters: &Parameters,
    geometry: &Geometry,
    step: AnimationStep,
) -> Vec<Array2<CellStyle>> {
    let size = geometry.output_size;
    (0..parameters.number_of_filters())
        .map(|filter| {
            Array2::from_shape_fn((size, size), |(y, x)| {
                let current =
                    filter == step.filter_index && x == step.output_x && y == step.output_y;
                CellStyle {
                    color: current.then(|| output_color(filter)),
                    dimmed: false,
                    highlighted: current,
                }
            })
        })
        .collect()
}
