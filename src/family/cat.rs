use image::RgbImage;

use crate::{
    foundation::{
        core::{CatId, Tier},
        error::CatResult,
    },
    genetics::genome::Genome,
    raster::{compose, compose::SpritePartSet, label::Labeler, substitute},
};

/// One cat of the family. Immutable once created.
#[derive(Clone, Debug)]
pub struct CatEntity {
    pub id: CatId,
    pub name: String,
    pub genome: Genome,
    pub parts: SpritePartSet,
    /// Non-owning links to the two cats this one was bred from.
    pub parents: Option<[CatId; 2]>,
    pub image: RgbImage,
}

impl CatEntity {
    pub fn tier(&self) -> Tier {
        self.genome.tier()
    }

    pub fn generation(&self) -> u8 {
        self.genome.generation()
    }

    pub fn caption(&self) -> String {
        caption(&self.name, self.generation())
    }
}

pub fn caption(name: &str, generation: u8) -> String {
    format!("{name} (Gen {generation})")
}

/// Composite the parts, paint the markers from the genome, then write the caption.
pub fn render_cat(
    name: &str,
    genome: &Genome,
    parts: &SpritePartSet,
    labeler: &Labeler,
) -> CatResult<RgbImage> {
    let raw = compose::combine(parts)?;
    let mut img = substitute::substitute(&raw, &genome.color_map());
    labeler.draw(&mut img, &caption(name, genome.generation()))?;
    Ok(img)
}
