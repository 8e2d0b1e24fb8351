//! PNG export of a single animation frame

use std::path::Path;

use crate::geometry::{AnimationStep, Parameters};
use crate::io::error::{ConvVizError, Result, file_system_error};
use crate::render::raster::render_scene;
use crate::render::Scene;

pub(crate) fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
    }
    Ok(())
}

/// Export one frame as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parameters have no valid geometry
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_frame_as_png(
    parameters: &Parameters,
    step: AnimationStep,
    output_path: &Path,
) -> Result<()> {
    let scene = Scene::try_build(parameters, step)?;
    let img = render_scene(&scene);
    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| ConvVizError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "exported frame");
    Ok(())
}
