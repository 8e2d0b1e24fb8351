//! Command-line interface standing in for the interactive controls

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use crate::animation::AnimationController;
use crate::geometry::{GeometryState, Padding, Parameters, StepCycle, cycle_length};
use crate::io::configuration::{
    DEFAULT_DILATION, DEFAULT_FILTER_SIZE, DEFAULT_INPUT_CHANNELS, DEFAULT_INPUT_SIZE,
    DEFAULT_NUMBER_OF_FILTERS, DEFAULT_STRIDE, GIF_FRAME_DELAY_MS, INVALID_PARAMETERS_MESSAGE,
};
use crate::io::error::{ConvVizError, Result};
use crate::io::image::export_frame_as_png;
use crate::io::progress::FrameProgress;
use crate::io::visualization::AnimationCapture;
use crate::render::Scene;
use crate::render::terminal::{TextStyle, render_text};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Parser, Debug)]
#[command(name = "convviz")]
#[command(
    author,
    version,
    about = "Animate how a 2D convolution walks its input"
)]
/// Command-line arguments mirroring the visualization controls
// One flag per control plus independent output switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Side length of the square input (1-8)
    #[arg(long, default_value_t = DEFAULT_INPUT_SIZE)]
    pub input_size: usize,

    /// Number of input channels (1-3)
    #[arg(long, default_value_t = DEFAULT_INPUT_CHANNELS)]
    pub input_channels: usize,

    /// Side length of each square filter (1-8)
    #[arg(long, default_value_t = DEFAULT_FILTER_SIZE)]
    pub filter_size: usize,

    /// Number of filters (1-4)
    #[arg(long = "filters", default_value_t = DEFAULT_NUMBER_OF_FILTERS)]
    pub number_of_filters: usize,

    /// Step between output positions (1-8)
    #[arg(long, default_value_t = DEFAULT_STRIDE)]
    pub stride: usize,

    /// Spacing between filter taps (1-8)
    #[arg(long, default_value_t = DEFAULT_DILATION)]
    pub dilation: usize,

    /// Border handling mode
    #[arg(long, value_enum, default_value_t = Padding::Valid)]
    pub padding: Padding,

    /// Write one frame as PNG
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Index of the frame within the cycle written by --png
    #[arg(long, default_value_t = 0)]
    pub frame: usize,

    /// Write the full animation cycle as a looping GIF
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Play the animation in the terminal
    #[arg(short, long)]
    pub play: bool,

    /// Number of ticks to play (defaults to one full cycle)
    #[arg(long)]
    pub ticks: Option<usize>,

    /// Milliseconds per step during playback and in the GIF
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub tick_ms: u32,

    /// Draw grids with ASCII glyphs instead of ANSI colours
    #[arg(long)]
    pub plain: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parameters described by the flags
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a value lies outside its control range
    pub fn parameters(&self) -> Result<Parameters> {
        Parameters::new(
            self.input_size,
            self.input_channels,
            self.filter_size,
            self.number_of_filters,
            self.stride,
            self.dilation,
            self.padding,
        )
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    const fn text_style(&self) -> TextStyle {
        if self.plain {
            TextStyle::Plain
        } else {
            TextStyle::Color
        }
    }
}

/// Describe derived geometry in a few lines
pub fn summary(parameters: &Parameters) -> String {
    match GeometryState::derive(parameters) {
        GeometryState::Valid(geometry) => {
            let padded = geometry.padded_input_size;
            let output = geometry.output_size;
            format!(
                "padding {}: start {} end {}\n\
                 padded input {padded}x{padded}\n\
                 filter spread {}\n\
                 output {output}x{output} per filter, {} steps per cycle",
                parameters.padding(),
                geometry.padding_start,
                geometry.padding_end,
                geometry.filter_spread,
                cycle_length(parameters).unwrap_or(0),
            )
        }
        GeometryState::Invalid { .. } => INVALID_PARAMETERS_MESSAGE.to_string(),
    }
}

/// Runs the requested outputs for one set of flags
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Print the summary and produce every requested output
    ///
    /// An invalid configuration is reported, not treated as a failure;
    /// exports are skipped for it.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range, an export fails,
    /// or writing to `out` fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let parameters = self.cli.parameters()?;
        writeln!(out, "{}", summary(&parameters))?;

        if !GeometryState::derive(&parameters).is_valid() {
            tracing::warn!(?parameters, "no output fits; skipping exports");
            return Ok(());
        }

        if let Some(path) = &self.cli.png {
            let step = StepCycle::new(&parameters)
                .nth(self.cli.frame)
                .ok_or_else(|| {
                    crate::io::error::invalid_parameter(
                        "frame",
                        &self.cli.frame,
                        &format!(
                            "cycle has {} frames",
                            cycle_length(&parameters).unwrap_or(0)
                        ),
                    )
                })?;
            export_frame_as_png(&parameters, step, path)?;
        }

        if let Some(path) = &self.cli.gif {
            let capture = AnimationCapture::full_cycle(parameters)?;
            let frames = capture.exported_frame_count(self.cli.tick_ms);
            let progress = if self.cli.should_show_progress() {
                FrameProgress::new(frames, "rendering")
            } else {
                FrameProgress::hidden(frames)
            };
            capture.export_gif(path, self.cli.tick_ms, Some(&progress))?;
            progress.finish();
        }

        if self.cli.play {
            self.play(parameters, out)?;
        }

        Ok(())
    }

    fn play(&self, parameters: Parameters, out: &mut impl Write) -> Result<()> {
        let interval = Duration::from_millis(u64::from(self.cli.tick_ms));
        let ticks = self
            .cli
            .ticks
            .or_else(|| cycle_length(&parameters))
            .unwrap_or(0);
        let mut controller = AnimationController::with_interval(parameters, interval, Instant::now());

        self.draw(&controller, out)?;
        for _ in 0..ticks {
            let Some(deadline) = controller.next_deadline() else {
                break;
            };
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            if controller.poll(Instant::now()) {
                self.draw(&controller, out)?;
            }
        }
        Ok(())
    }

    fn draw(&self, controller: &AnimationController, out: &mut impl Write) -> Result<()> {
        let style = self.cli.text_style();
        let frame = controller
            .displayed_step()
            .and_then(|step| Scene::build(controller.parameters(), step))
            .map_or_else(
                || format!("{INVALID_PARAMETERS_MESSAGE}\n"),
                |scene| render_text(&scene, style),
            );

        if style == TextStyle::Color {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write!(out, "{frame}")?;
        out.flush().map_err(ConvVizError::from)
    }
}
