//! Frame capture and GIF generation for the convolution animation

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::geometry::{AnimationStep, GeometryState, Parameters, StepCycle};
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{ConvVizError, Result, file_system_error};
use crate::io::image::ensure_parent_dir;
use crate::io::progress::FrameProgress;
use crate::render::raster::render_scene;
use crate::render::Scene;

/// Steps of one animation cycle, rendered only when exported
#[derive(Debug, Clone)]
pub struct AnimationCapture {
    parameters: Parameters,
    steps: Vec<AnimationStep>,
}

impl AnimationCapture {
    /// Capture every step of one animation cycle
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` when the parameters have no positive output size
    pub fn full_cycle(parameters: Parameters) -> Result<Self> {
        GeometryState::derive(&parameters).require()?;
        Ok(Self {
            parameters,
            steps: StepCycle::new(&parameters).collect(),
        })
    }

    /// Returns all recorded steps
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    /// Returns the number of recorded steps
    pub const fn frame_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of frames `export_gif` writes at `frame_delay_ms`
    pub fn exported_frame_count(&self, frame_delay_ms: u32) -> usize {
        self.steps.len().div_ceil(skip_factor(frame_delay_ms))
    }

    /// Export the captured steps as a looping GIF
    ///
    /// Delays shorter than viewers reliably honour are raised to the
    /// minimum and the surplus frames skipped, keeping the apparent speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters have no valid geometry
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        frame_delay_ms: u32,
        progress: Option<&FrameProgress>,
    ) -> Result<()> {
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(effective_delay_ms, skip_factor(frame_delay_ms), progress)?;

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let export_error = |source: image::ImageError| ConvVizError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.exported_frame_count(frame_delay_ms),
            "exported animation"
        );
        Ok(())
    }

    fn generate_frames(
        &self,
        delay_ms: u32,
        skip_factor: usize,
        progress: Option<&FrameProgress>,
    ) -> Result<Vec<Frame>> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let mut frames = Vec::with_capacity(self.steps.len().div_ceil(skip_factor));

        for (index, step) in self.steps.iter().enumerate() {
            if index % skip_factor != 0 {
                continue;
            }
            let scene = Scene::try_build(&self.parameters, *step)?;
            frames.push(Frame::from_parts(render_scene(&scene), 0, 0, delay));
            if let Some(progress) = progress {
                progress.advance(*step);
            }
        }

        Ok(frames)
    }
}

// Steps per written frame once the delay is raised to the viewer minimum
fn skip_factor(frame_delay_ms: u32) -> usize {
    if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
    } else {
        1
    }
}
