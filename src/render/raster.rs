//! Rasterize a scene into an RGBA image
//!
//! Layout, top to bottom: input channels, filters (channels of one filter
//! side by side, filters separated by a wider gap), outputs.

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::color::palette::{BACKGROUND, NEUTRAL, OUTPUT_IDLE, dim};
use crate::io::configuration::{CELL_GAP, CELL_PIXELS, GRID_GAP};
use crate::render::scene::{CellStyle, Scene};

const HIGHLIGHT_BORDER: [u8; 4] = [40, 40, 40, 255];
// Gap between grids that belong together (channels of one filter)
const SMALL_GAP: u32 = CELL_PIXELS / 2;

/// Pixel extent of a square grid with `cells` cells per side
pub const fn grid_extent(cells: usize) -> u32 {
    if cells == 0 {
        return 0;
    }
    cells as u32 * (CELL_PIXELS + CELL_GAP) - CELL_GAP
}

// Grids in one band, laid out left to right with the given gap after each group
fn band_width(sizes: &[usize], groups: usize) -> u32 {
    let grids: u32 = sizes.iter().map(|&size| grid_extent(size)).sum();
    let gaps = sizes.len().saturating_sub(1) as u32 * SMALL_GAP
        + groups.saturating_sub(1) as u32 * GRID_GAP.saturating_sub(SMALL_GAP);
    grids + gaps
}

/// Image dimensions needed for scenes of this shape
pub fn scene_dimensions(scene: &Scene) -> (u32, u32) {
    let padded = scene.geometry.padded_input_size;
    let filter = scene.parameters.filter_size();
    let output = scene.geometry.output_size;
    let channels = scene.parameters.input_channels();
    let filters = scene.parameters.number_of_filters();

    let inputs = band_width(&vec![padded; channels], 1);
    let filter_band = band_width(&vec![filter; channels * filters], filters);
    let outputs = band_width(&vec![output; filters], 1);

    let width = inputs.max(filter_band).max(outputs) + 2 * GRID_GAP;
    let height = grid_extent(padded) + grid_extent(filter) + grid_extent(output) + 4 * GRID_GAP;
    (width, height)
}

fn cell_rgba(style: &CellStyle, idle: [u8; 4]) -> [u8; 4] {
    let base = style.color.map_or(idle, |hsl| hsl.to_rgba());
    if style.dimmed { dim(base) } else { base }
}

fn draw_cell(img: &mut RgbaImage, left: u32, top: u32, style: &CellStyle, idle: [u8; 4]) {
    let fill = Rgba(cell_rgba(style, idle));
    let border = Rgba(HIGHLIGHT_BORDER);
    for dy in 0..CELL_PIXELS {
        for dx in 0..CELL_PIXELS {
            let on_edge = dx == 0 || dy == 0 || dx == CELL_PIXELS - 1 || dy == CELL_PIXELS - 1;
            let pixel = if style.highlighted && on_edge { border } else { fill };
            let (x, y) = (left + dx, top + dy);
            if x < img.width() && y < img.height() {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

fn draw_grid(img: &mut RgbaImage, left: u32, top: u32, grid: &Array2<CellStyle>, idle: [u8; 4]) {
    let pitch = CELL_PIXELS + CELL_GAP;
    for ((y, x), style) in grid.indexed_iter() {
        draw_cell(img, left + x as u32 * pitch, top + y as u32 * pitch, style, idle);
    }
}

/// Render the scene into a new image
pub fn render_scene(scene: &Scene) -> RgbaImage {
    let (width, height) = scene_dimensions(scene);
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND));

    let mut top = GRID_GAP;
    let mut left = GRID_GAP;
    for grid in &scene.inputs {
        draw_grid(&mut img, left, top, grid, NEUTRAL);
        left += grid_extent(grid.nrows()) + SMALL_GAP;
    }

    top += grid_extent(scene.geometry.padded_input_size) + GRID_GAP;
    left = GRID_GAP;
    for channels in &scene.filters {
        for grid in channels {
            draw_grid(&mut img, left, top, grid, NEUTRAL);
            left += grid_extent(grid.nrows()) + SMALL_GAP;
        }
        left += GRID_GAP.saturating_sub(SMALL_GAP);
    }

    top += grid_extent(scene.parameters.filter_size()) + GRID_GAP;
    left = GRID_GAP;
    for grid in &scene.outputs {
        draw_grid(&mut img, left, top, grid, OUTPUT_IDLE);
        left += grid_extent(grid.nrows()) + SMALL_GAP;
    }

    img
}
