use rand::Rng;

use crate::{
    family::cat::{CatEntity, render_cat},
    foundation::{
        core::{CatId, Rgb, Tier},
        error::{CatError, CatResult},
    },
    genetics::{
        genome::{Genome, kitten_genome, mixed_genome},
        inherit::inherit_parts,
    },
    raster::{compose::SpritePartSet, label::Labeler},
};

/// Owns every cat of one run, in creation order.
///
/// Children refer to their parents by [`CatId`]; a cat can only be bred from cats that already
/// exist, so the store is always in topological order. Great-grandkittens are listed with the
/// grandkittens.
#[derive(Debug, Default)]
pub struct FamilyTree {
    cats: Vec<CatEntity>,
    parents: Vec<CatId>,
    kittens: Vec<CatId>,
    grandkittens: Vec<CatId>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    pub fn cats(&self) -> &[CatEntity] {
        &self.cats
    }

    pub fn parents(&self) -> &[CatId] {
        &self.parents
    }

    pub fn kittens(&self) -> &[CatId] {
        &self.kittens
    }

    pub fn grandkittens(&self) -> &[CatId] {
        &self.grandkittens
    }

    pub fn get(&self, id: CatId) -> Option<&CatEntity> {
        self.cats.get(id.0)
    }

    pub fn cat(&self, id: CatId) -> CatResult<&CatEntity> {
        self.get(id)
            .ok_or_else(|| CatError::validation(format!("unknown cat {id}")))
    }

    pub fn create_parent(
        &mut self,
        name: String,
        color: Rgb,
        parts: SpritePartSet,
        labeler: &Labeler,
    ) -> CatResult<CatId> {
        let genome = Genome::Parent { color };
        let id = self.push(name, genome, parts, None, labeler)?;
        self.parents.push(id);
        tracing::info!(cat = %id, name = %self.cats[id.0].name, ?color, "created parent");
        Ok(id)
    }

    /// Breed two parents. Each part and each marker color comes from either parent.
    pub fn create_kitten<R: Rng + ?Sized>(
        &mut self,
        name: String,
        parent1: CatId,
        parent2: CatId,
        rng: &mut R,
        labeler: &Labeler,
    ) -> CatResult<CatId> {
        let p1 = self.cat(parent1)?;
        let p2 = self.cat(parent2)?;
        let (Genome::Parent { color: c1 }, Genome::Parent { color: c2 }) = (&p1.genome, &p2.genome)
        else {
            return Err(CatError::validation(format!(
                "kittens are bred from parents, got {:?} and {:?}",
                p1.tier(),
                p2.tier()
            )));
        };
        let (c1, c2) = (*c1, *c2);

        let parts = inherit_parts(&p1.parts, &p2.parts, rng)?;
        let genome = kitten_genome(c1, c2, rng);
        tracing::debug!(colors = ?genome.inherited_colors(), "kitten colors");

        let id = self.push(name, genome, parts, Some([parent1, parent2]), labeler)?;
        self.kittens.push(id);
        tracing::info!(cat = %id, name = %self.cats[id.0].name, "created kitten");
        Ok(id)
    }

    /// Breed two kitten-or-later cats, offering `main_pool` for the main body color.
    ///
    /// The child is a great-grandkitten when both parents are grandkittens.
    pub fn create_grandkitten<R: Rng + ?Sized>(
        &mut self,
        name: String,
        parent1: CatId,
        parent2: CatId,
        main_pool: &[Rgb],
        rng: &mut R,
        labeler: &Labeler,
    ) -> CatResult<CatId> {
        let p1 = self.cat(parent1)?;
        let p2 = self.cat(parent2)?;
        let genome = mixed_genome(&p1.genome, &p2.genome, main_pool, rng)?;
        let parts = inherit_parts(&p1.parts, &p2.parts, rng)?;
        tracing::debug!(
            sampled = ?genome.inherited_colors(),
            main = ?genome.main_color(),
            pool = ?main_pool,
            "grandkitten colors"
        );

        let tier = genome.tier();
        let id = self.push(name, genome, parts, Some([parent1, parent2]), labeler)?;
        self.grandkittens.push(id);
        let name = &self.cats[id.0].name;
        match tier {
            Tier::GreatGrandkitten => {
                tracing::info!(cat = %id, name = %name, "created great-grandkitten")
            }
            _ => tracing::info!(cat = %id, name = %name, "created grandkitten"),
        }
        Ok(id)
    }

    fn push(
        &mut self,
        name: String,
        genome: Genome,
        parts: SpritePartSet,
        parents: Option<[CatId; 2]>,
        labeler: &Labeler,
    ) -> CatResult<CatId> {
        let image = render_cat(&name, &genome, &parts, labeler)?;
        let id = CatId(self.cats.len());
        self.cats.push(CatEntity {
            id,
            name,
            genome,
            parts,
            parents,
            image,
        });
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/family/tree.rs"]
mod tests;
