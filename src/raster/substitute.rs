use std::collections::BTreeMap;

use image::RgbImage;

use crate::foundation::core::Rgb;

/// Exact-match recoloring table: marker color -> replacement.
pub type ColorMap = BTreeMap<Rgb, Rgb>;

/// Returns a copy of `img` with every pixel equal to a key of `map` replaced by its value.
///
/// Matching is exact on all three channels; there is no tolerance and no blending.
pub fn substitute(img: &RgbImage, map: &ColorMap) -> RgbImage {
    let mut out = img.clone();
    if map.is_empty() {
        return out;
    }
    for px in out.pixels_mut() {
        if let Some(new) = map.get(&px.0) {
            px.0 = *new;
        }
    }
    tracing::debug!(entries = map.len(), "applied color map");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/substitute.rs"]
mod tests;
