use std::{collections::BTreeMap, sync::Arc};

use image::{RgbImage, imageops};

use crate::foundation::{
    core::PartName,
    error::{CatError, CatResult},
};

/// Sprite layers of one cat. Images are shared with the library and with relatives.
#[derive(Clone, Debug, Default)]
pub struct SpritePartSet {
    parts: BTreeMap<PartName, Arc<RgbImage>>,
}

impl SpritePartSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, part: PartName, img: Arc<RgbImage>) -> Self {
        self.insert(part, img);
        self
    }

    pub fn insert(&mut self, part: PartName, img: Arc<RgbImage>) {
        self.parts.insert(part, img);
    }

    pub fn get(&self, part: PartName) -> Option<&Arc<RgbImage>> {
        self.parts.get(&part)
    }

    /// Like [`Self::get`] but reports the absent part as an error.
    pub fn require(&self, part: PartName) -> CatResult<&Arc<RgbImage>> {
        self.get(part).ok_or(CatError::MissingPart(part))
    }

    pub fn is_complete(&self) -> bool {
        PartName::ALL.iter().all(|p| self.parts.contains_key(p))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Assemble the five layers into one figure.
///
/// Ear, eyes and body are stacked and horizontally centered within the widest of the three.
/// The tail hangs off the right edge of that stack with its bottom flush with the body's
/// bottom. The legs go underneath, centered over the full stack-plus-tail width.
/// Pixels no layer covers stay black.
pub fn combine(parts: &SpritePartSet) -> CatResult<RgbImage> {
    let ear = parts.require(PartName::Ear)?;
    let eyes = parts.require(PartName::Eyes)?;
    let body = parts.require(PartName::Body)?;
    let tail = parts.require(PartName::Tail)?;
    let legs = parts.require(PartName::Legs)?;

    let stack_w = ear.width().max(eyes.width()).max(body.width());
    let stack_h = ear.height() + eyes.height() + body.height();
    let full_w = stack_w + tail.width();
    let full_h = stack_h + legs.height();

    let mut canvas = RgbImage::new(full_w, full_h);

    let mut y = 0i64;
    for layer in [ear, eyes, body] {
        let x = centered(stack_w, layer.width());
        imageops::replace(&mut canvas, &**layer, x, y);
        y += i64::from(layer.height());
    }

    let body_top = i64::from(ear.height() + eyes.height());
    let tail_y = body_top + i64::from(body.height()) - i64::from(tail.height());
    imageops::replace(&mut canvas, &**tail, i64::from(stack_w), tail_y);

    let legs_x = centered(full_w, legs.width());
    imageops::replace(&mut canvas, &**legs, legs_x, i64::from(stack_h));

    tracing::debug!(width = full_w, height = full_h, "combined sprite parts");
    Ok(canvas)
}

// Floor division, so a layer wider than its container overhangs on the left by the larger half.
fn centered(container: u32, width: u32) -> i64 {
    (i64::from(container) - i64::from(width)).div_euclid(2)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/compose.rs"]
mod tests;
