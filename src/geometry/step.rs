//! Animation position and the raster order it walks

use crate::geometry::parameters::Parameters;
use crate::geometry::shape::GeometryState;

/// Currently highlighted output cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationStep {
    /// Output column
    pub output_x: usize,
    /// Output row
    pub output_y: usize,
    /// Filter whose output grid holds the cell
    pub filter_index: usize,
}

impl AnimationStep {
    /// First step of every cycle
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a step at the given output position
    pub const fn new(output_x: usize, output_y: usize, filter_index: usize) -> Self {
        Self {
            output_x,
            output_y,
            filter_index,
        }
    }

    /// Whether the step addresses a cell of an output with these dimensions
    pub const fn fits(&self, output_size: usize, number_of_filters: usize) -> bool {
        self.output_x < output_size
            && self.output_y < output_size
            && self.filter_index < number_of_filters
    }
}

/// Next step in row-major order over outputs, then filters, wrapping to the origin
pub const fn advance_within(
    step: AnimationStep,
    output_size: usize,
    number_of_filters: usize,
) -> AnimationStep {
    if step.output_x + 1 < output_size {
        return AnimationStep::new(step.output_x + 1, step.output_y, step.filter_index);
    }
    if step.output_y + 1 < output_size {
        return AnimationStep::new(0, step.output_y + 1, step.filter_index);
    }
    if step.filter_index + 1 < number_of_filters {
        return AnimationStep::new(0, 0, step.filter_index + 1);
    }
    AnimationStep::ORIGIN
}

/// Next step for `parameters`; invalid configurations stay at the origin
pub fn advance(step: AnimationStep, parameters: &Parameters) -> AnimationStep {
    GeometryState::derive(parameters)
        .valid()
        .map_or(AnimationStep::ORIGIN, |geometry| {
            advance_within(step, geometry.output_size, parameters.number_of_filters())
        })
}

/// Number of distinct steps before the animation repeats
pub fn cycle_length(parameters: &Parameters) -> Option<usize> {
    GeometryState::derive(parameters)
        .valid()
        .map(|geometry| geometry.output_size * geometry.output_size * parameters.number_of_filters())
}

/// Iterator over one full animation cycle, starting at the origin
#[derive(Debug, Clone)]
pub struct StepCycle {
    next: Option<AnimationStep>,
    output_size: usize,
    number_of_filters: usize,
}

impl StepCycle {
    /// Cycle for `parameters`; empty when the geometry is invalid
    pub fn new(parameters: &Parameters) -> Self {
        let geometry = GeometryState::derive(parameters);
        Self {
            next: geometry.is_valid().then_some(AnimationStep::ORIGIN),
            output_size: geometry.valid().map_or(0, |g| g.output_size),
            number_of_filters: parameters.number_of_filters(),
        }
    }
}

impl Iterator for StepCycle {
    type Item = AnimationStep;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = advance_within(current, self.output_size, self.number_of_filters);
        self.next = (following != AnimationStep::ORIGIN).then_some(following);
        Some(current)
    }
}
