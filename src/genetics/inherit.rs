use rand::Rng;

use crate::{
    foundation::{core::PartName, error::CatResult},
    raster::compose::SpritePartSet,
};

/// Every part independently comes from either parent with equal odds.
pub fn inherit_parts<R: Rng + ?Sized>(
    parent1: &SpritePartSet,
    parent2: &SpritePartSet,
    rng: &mut R,
) -> CatResult<SpritePartSet> {
    let mut parts = SpritePartSet::new();
    for part in PartName::ALL {
        let a = parent1.require(part)?;
        let b = parent2.require(part)?;
        let chosen = if rng.gen_bool(0.5) { a } else { b };
        parts.insert(part, chosen.clone());
    }
    tracing::debug!("inherited parts from parents");
    Ok(parts)
}

#[cfg(test)]
#[path = "../../tests/unit/genetics/inherit.rs"]
mod tests;
