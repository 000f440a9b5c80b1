//! Classification-grid rendering.
//!
//! The plane `[-1, 1)²` is cut into square cells of `grid_step`; each cell
//! is evaluated once through the feature map and painted according to the
//! display mode. Collected points are drawn on top as outlined dots.
//! Screen y grows downward, matching how clicks are mapped to the plane.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgb, RgbImage};

use ferrite_playground::math::argmax;
use ferrite_playground::{FeatureMap, LabeledPoint, Network, Result};

use crate::state::{DisplayMode, PlaygroundState};

const PALETTE: [[u8; 3]; 6] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
];

const DOT_RADIUS: f64 = 3.5;
const OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);

pub fn class_colour(class: usize) -> [u8; 3] {
    PALETTE[class % PALETTE.len()]
}

/// Renders the current state to PNG bytes.
pub fn render_png(state: &mut PlaygroundState) -> std::result::Result<Vec<u8>, String> {
    let img = render_grid(
        &mut state.network,
        state.config.features,
        state.samples.points(),
        state.mode,
        state.config.grid_step,
        state.config.canvas_px,
    ).map_err(|e| e.to_string())?;

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .map_err(|e| e.to_string())?;
    Ok(bytes)
}

pub fn render_grid(
    network: &mut Network,
    features: FeatureMap,
    points: &[LabeledPoint],
    mode: DisplayMode,
    grid_step: f64,
    canvas_px: u32,
) -> Result<RgbImage> {
    let mut img = RgbImage::new(canvas_px, canvas_px);
    let cells = (2.0 / grid_step).ceil() as usize;

    for i in 0..cells {
        let x = -1.0 + i as f64 * grid_step;
        for j in 0..cells {
            let y = -1.0 + j as f64 * grid_step;
            let output = network.predict(&features.apply(x, y))?;
            let colour = cell_colour(&output, mode);
            fill_rect(&mut img, to_px(x, canvas_px), to_px(y, canvas_px), to_px(x + grid_step, canvas_px), to_px(y + grid_step, canvas_px), colour);
        }
    }

    for p in points {
        draw_dot(&mut img, p);
    }
    Ok(img)
}

fn cell_colour(output: &[f64], mode: DisplayMode) -> Rgb<u8> {
    match mode {
        DisplayMode::Argmax => Rgb(class_colour(argmax(output))),
        DisplayMode::Gradient => {
            let channel = |i: usize| {
                output.get(i).map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8).unwrap_or(0)
            };
            Rgb([channel(0), channel(1), channel(2)])
        }
    }
}

/// Plane coordinate in `[-1, 1]` to a pixel column/row, clamped to the canvas.
fn to_px(v: f64, canvas_px: u32) -> u32 {
    let px = ((v + 1.0) / 2.0 * canvas_px as f64).round();
    px.clamp(0.0, canvas_px as f64) as u32
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, colour: Rgb<u8>) {
    for px in x0..x1.min(img.width()) {
        for py in y0..y1.min(img.height()) {
            img.put_pixel(px, py, colour);
        }
    }
}

fn draw_dot(img: &mut RgbImage, p: &LabeledPoint) {
    let size = img.width() as f64;
    let cx = (p.x + 1.0) / 2.0 * size;
    let cy = (p.y + 1.0) / 2.0 * size;
    let [r, g, b] = class_colour(p.class);
    // Dots are slightly darker than the cells of the same class.
    let fill = Rgb([dim(r), dim(g), dim(b)]);

    let reach = DOT_RADIUS.ceil() as i64 + 1;
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            let px = cx.floor() as i64 + dx;
            let py = cy.floor() as i64 + dy;
            if px < 0 || py < 0 || px >= img.width() as i64 || py >= img.height() as i64 {
                continue;
            }
            let dist = ((px as f64 + 0.5 - cx).powi(2) + (py as f64 + 0.5 - cy).powi(2)).sqrt();
            if dist <= DOT_RADIUS - 1.0 {
                img.put_pixel(px as u32, py as u32, fill);
            } else if dist <= DOT_RADIUS {
                img.put_pixel(px as u32, py as u32, OUTLINE);
            }
        }
    }
}

fn dim(c: u8) -> u8 {
    (c as u16 * 225 / 255) as u8
}
