//! Progress display while rendering animation frames

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::geometry::AnimationStep;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the frames of one export
///
/// A hidden bar is used when progress is suppressed so callers never need
/// to branch on whether output is shown.
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Visible bar for `frames` frames labelled with `label`
    pub fn new(frames: usize, label: &str) -> Self {
        let bar = ProgressBar::new(frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Bar that draws nothing
    pub fn hidden(frames: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(frames as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Record one rendered frame
    pub fn advance(&self, step: AnimationStep) {
        self.bar.set_message(format!(
            "f{} ({}, {})",
            step.filter_index, step.output_x, step.output_y
        ));
        self.bar.inc(1);
    }

    /// Frames rendered so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once rendering is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
