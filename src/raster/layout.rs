use image::{Rgb as Px, RgbImage, imageops};

use crate::foundation::{
    core::Rgb,
    error::{CatError, CatResult},
};

/// Place a ragged grid of images onto one background canvas.
///
/// Every cell has the same pitch: the widest and tallest image across the whole grid. Images
/// sit at the top-left of their cell; cells past the end of a short row keep the background.
pub fn render_grid(grid: &[Vec<&RgbImage>], background: Rgb) -> CatResult<RgbImage> {
    if grid.first().is_none_or(|row| row.is_empty()) {
        return Err(CatError::EmptyLayout);
    }

    let all = || grid.iter().flatten();
    let pitch_w = all().map(|img| img.width()).max().unwrap_or(0);
    let pitch_h = all().map(|img| img.height()).max().unwrap_or(0);
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0) as u32;
    let rows = grid.len() as u32;

    let mut canvas = RgbImage::from_pixel(pitch_w * cols, pitch_h * rows, Px(background));
    for (r, row) in grid.iter().enumerate() {
        for (c, img) in row.iter().enumerate() {
            let x = i64::from(pitch_w) * c as i64;
            let y = i64::from(pitch_h) * r as i64;
            imageops::replace(&mut canvas, *img, x, y);
        }
    }

    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        "created family image"
    );
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/layout.rs"]
mod tests;
