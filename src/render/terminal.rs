//! Text rendering of a scene for terminal playback

use ndarray::Array2;

use crate::color::palette::{NEUTRAL, OUTPUT_IDLE, dim};
use crate::render::scene::{CellStyle, Scene};

/// How cells are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// ANSI 24-bit background colours
    Color,
    /// One ASCII glyph per cell
    Plain,
}

// Plain glyphs
const GLYPH_IDLE: char = '.';
const GLYPH_PADDING: char = '~';
const GLYPH_ACTIVE: char = '#';
const GLYPH_FILTER: char = 'o';

fn plain_glyph(style: &CellStyle) -> char {
    match (style.highlighted, style.dimmed, style.color.is_some()) {
        (true, _, _) => GLYPH_ACTIVE,
        (false, true, _) => GLYPH_PADDING,
        (false, false, true) => GLYPH_FILTER,
        (false, false, false) => GLYPH_IDLE,
    }
}

fn colored_cell(out: &mut String, style: &CellStyle, idle: [u8; 4]) {
    let base = style.color.map_or(idle, |hsl| hsl.to_rgba());
    let [r, g, b, _] = if style.dimmed { dim(base) } else { base };
    let body = if style.highlighted { "[]" } else { "  " };
    out.push_str(&format!("\x1b[48;2;{r};{g};{b}m\x1b[30m{body}\x1b[0m"));
}

// Render grids side by side, one text row per grid row
fn grids_row(out: &mut String, grids: &[&Array2<CellStyle>], idle: [u8; 4], style: TextStyle) {
    let rows = grids.iter().map(|grid| grid.nrows()).max().unwrap_or(0);
    for y in 0..rows {
        for (index, grid) in grids.iter().enumerate() {
            if index > 0 {
                out.push_str("   ");
            }
            for x in 0..grid.ncols() {
                match (grid.get((y, x)), style) {
                    (Some(cell), TextStyle::Color) => colored_cell(out, cell, idle),
                    (Some(cell), TextStyle::Plain) => out.push(plain_glyph(cell)),
                    (None, TextStyle::Color) => out.push_str("  "),
                    (None, TextStyle::Plain) => out.push(' '),
                }
            }
        }
        out.push('\n');
    }
}

/// Render the whole scene as text
pub fn render_text(scene: &Scene, style: TextStyle) -> String {
    let mut out = String::new();
    let step = scene.step;

    out.push_str(&format!(
        "step x={} y={} filter={}\n",
        step.output_x, step.output_y, step.filter_index
    ));

    out.push_str("input\n");
    let inputs: Vec<_> = scene.inputs.iter().collect();
    grids_row(&mut out, &inputs, NEUTRAL, style);

    out.push_str("filters\n");
    let filters: Vec<_> = scene.filters.iter().flatten().collect();
    grids_row(&mut out, &filters, NEUTRAL, style);

    out.push_str("output\n");
    let outputs: Vec<_> = scene.outputs.iter().collect();
    grids_row(&mut out, &outputs, OUTPUT_IDLE, style);

    out
}
