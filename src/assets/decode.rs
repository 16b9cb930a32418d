use anyhow::Context;
use image::RgbImage;

use crate::foundation::error::CatResult;

/// Decode PNG (or any format `image` recognizes) bytes into opaque RGB8.
///
/// Alpha is dropped, not composited: transparent sprite pixels keep their stored color.
pub fn decode_sprite(bytes: &[u8]) -> CatResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgb8())
}
