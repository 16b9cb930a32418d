use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    assets::{names::NamePool, parts::PartLibrary},
    family::tree::FamilyTree,
    foundation::{
        config::FamilyConfig,
        core::{CatId, Rgb},
        error::{CatError, CatResult},
    },
    raster::{label::Labeler, layout::render_grid},
};

/// Result of one generation run.
#[derive(Debug)]
pub struct FamilyRun {
    pub tree: FamilyTree,
    /// Rows of the family picture, by cat id.
    pub layout: Vec<Vec<CatId>>,
    /// Synthetic names used because the name pool ran dry.
    pub fallback_names: usize,
}

impl FamilyRun {
    pub fn images(&self) -> CatResult<Vec<Vec<&RgbImage>>> {
        self.layout
            .iter()
            .map(|row| {
                row.iter()
                    .map(|id| self.tree.cat(*id).map(|c| &c.image))
                    .collect()
            })
            .collect()
    }

    /// Lay the whole family out on one canvas.
    pub fn render(&self, background: Rgb) -> CatResult<RgbImage> {
        render_grid(&self.images()?, background)
    }
}

/// Generate the fixed four-generation family.
///
/// Two branches each breed two parent pairs into two kittens and those into a grandkitten;
/// the two grandkittens then produce one great-grandkitten. With `seed` set, the run is
/// reproducible given the same inputs.
#[tracing::instrument(skip_all, fields(seed = ?seed))]
pub fn generate_family(
    config: &FamilyConfig,
    parts: &PartLibrary,
    names: NamePool,
    labeler: &Labeler,
    seed: Option<u64>,
) -> CatResult<FamilyRun> {
    config.validate()?;
    let rng = match seed {
        Some(seed) => {
            tracing::info!(seed, "using random seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut b = Builder {
        palette: &config.palette,
        parts,
        labeler,
        names,
        rng,
        tree: FamilyTree::new(),
        main_pool: Vec::new(),
    };

    tracing::info!("generating first branch");
    let (p1, p2, k1) = b.pair_with_kitten()?;
    let (p3, p4, k2) = b.pair_with_kitten()?;
    let gk1 = b.grandkitten(k1, k2)?;

    tracing::info!("generating second branch");
    let (p5, p6, k3) = b.pair_with_kitten()?;
    let (p7, p8, k4) = b.pair_with_kitten()?;
    let gk2 = b.grandkitten(k3, k4)?;

    tracing::info!("generating great-grandkitten");
    let ggk = b.grandkitten(gk1, gk2)?;

    let layout = vec![
        vec![p1, p2, k1, gk1, ggk],
        vec![p3, p4, k2],
        vec![p5, p6, k3, gk2],
        vec![p7, p8, k4],
    ];
    tracing::info!(
        cats = b.tree.len(),
        rows = layout.len(),
        "generated family tree"
    );
    Ok(FamilyRun {
        tree: b.tree,
        layout,
        fallback_names: b.names.fallbacks_issued(),
    })
}

struct Builder<'a> {
    palette: &'a [Rgb],
    parts: &'a PartLibrary,
    labeler: &'a Labeler,
    names: NamePool,
    rng: StdRng,
    tree: FamilyTree,
    /// Main colors of finished grandkittens, offered to the next one.
    main_pool: Vec<Rgb>,
}

impl Builder<'_> {
    fn pair_with_kitten(&mut self) -> CatResult<(CatId, CatId, CatId)> {
        if self.palette.len() < 2 {
            return Err(CatError::validation("palette must hold at least 2 colors"));
        }
        let picked = rand::seq::index::sample(&mut self.rng, self.palette.len(), 2);
        let (color1, color2) = (self.palette[picked.index(0)], self.palette[picked.index(1)]);
        let parts1 = self.parts.choose_random_parts(&mut self.rng);
        let parts2 = self.parts.choose_random_parts(&mut self.rng);

        let name = self.names.next_name(&mut self.rng, None);
        let p1 = self.tree.create_parent(name, color1, parts1, self.labeler)?;
        let name = self.names.next_name(&mut self.rng, None);
        let p2 = self.tree.create_parent(name, color2, parts2, self.labeler)?;
        let name = self.names.next_name(&mut self.rng, None);
        let kitten = self.tree.create_kitten(name, p1, p2, &mut self.rng, self.labeler)?;
        Ok((p1, p2, kitten))
    }

    /// Breed two cats, then add the child's main color to the pool for later siblings.
    fn grandkitten(&mut self, parent1: CatId, parent2: CatId) -> CatResult<CatId> {
        let name = self.names.next_name(&mut self.rng, None);
        let id = self.tree.create_grandkitten(
            name,
            parent1,
            parent2,
            &self.main_pool,
            &mut self.rng,
            self.labeler,
        )?;
        if let Some(main) = self.tree.cat(id)?.genome.main_color() {
            self.main_pool.push(main);
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/family/builder.rs"]
mod tests;
