//! Mapping from one output cell back to the input cells it reads

use std::collections::HashMap;

use crate::geometry::parameters::Parameters;
use crate::geometry::step::AnimationStep;

/// Identifies one filter tap, and therefore its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterCellKey {
    /// Filter the tap belongs to
    pub filter: usize,
    /// Input channel the tap reads
    pub channel: usize,
    /// Horizontal offset within the filter
    pub offset_x: usize,
    /// Vertical offset within the filter
    pub offset_y: usize,
}

/// One input cell read by the current output cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FootprintCell {
    /// Input channel
    pub channel: usize,
    /// Column in padded-input coordinates
    pub x: usize,
    /// Row in padded-input coordinates
    pub y: usize,
    /// Filter tap that multiplies this cell
    pub key: FilterCellKey,
}

/// Every input cell read by one output cell of one filter
///
/// Coordinates are in padded-input space: `(0, 0)` is the top-left padding
/// cell, not the first real input cell.
#[derive(Debug, Clone, Default)]
pub struct Footprint {
    cells: Vec<FootprintCell>,
    by_position: HashMap<(usize, usize, usize), FilterCellKey>,
}

impl Footprint {
    /// Compute the footprint of `step` under `parameters`
    ///
    /// Entries are ordered by channel, then filter row, then filter column.
    pub fn of(step: AnimationStep, parameters: &Parameters) -> Self {
        let filter_size = parameters.filter_size();
        let stride = parameters.stride();
        let dilation = parameters.dilation();
        let capacity = parameters.input_channels() * filter_size * filter_size;

        let mut cells = Vec::with_capacity(capacity);
        let mut by_position = HashMap::with_capacity(capacity);

        for channel in 0..parameters.input_channels() {
            for offset_y in 0..filter_size {
                for offset_x in 0..filter_size {
                    let key = FilterCellKey {
                        filter: step.filter_index,
                        channel,
                        offset_x,
                        offset_y,
                    };
                    let x = stride * step.output_x + dilation * offset_x;
                    let y = stride * step.output_y + dilation * offset_y;

                    cells.push(FootprintCell { channel, x, y, key });
                    by_position.insert((channel, x, y), key);
                }
            }
        }

        Self { cells, by_position }
    }

    /// Filter tap covering an input cell, if the cell is in the footprint
    pub fn key_at(&self, channel: usize, x: usize, y: usize) -> Option<FilterCellKey> {
        self.by_position.get(&(channel, x, y)).copied()
    }

    /// Whether an input cell is read by the current output cell
    pub fn contains(&self, channel: usize, x: usize, y: usize) -> bool {
        self.by_position.contains_key(&(channel, x, y))
    }

    /// Number of cells read
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are read
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells read
    pub fn iter(&self) -> std::slice::Iter<'_, FootprintCell> {
        self.cells.iter()
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of the footprint
    pub fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let first = self.cells.first()?;
        Some(self.cells.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), cell| {
                (
                    min_x.min(cell.x),
                    min_y.min(cell.y),
                    max_x.max(cell.x),
                    max_y.max(cell.y),
                )
            },
        ))
    }
}

impl<'a> IntoIterator for &'a Footprint {
    type Item = &'a FootprintCell;
    type IntoIter = std::slice::Iter<'a, FootprintCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Input cells read by `step`, tagged with the filter tap that reads each one
pub fn input_footprint(step: AnimationStep, parameters: &Parameters) -> Footprint {
    Footprint::of(step, parameters)
}
