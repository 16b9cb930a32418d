use rand::{Rng, seq::SliceRandom};

use crate::{
    foundation::{
        core::{Rgb, Tier},
        error::{CatError, CatResult},
    },
    genetics::palette::{MARKER_PALETTE, PRIMARY_MARKER},
    raster::substitute::ColorMap,
};

/// Colors of a grandkitten-tier cat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixedColors {
    /// Subset of the parents' color union, in draw order. Passed on to descendants.
    pub sampled: Vec<Rgb>,
    /// Color of the primary body marker.
    pub main: Rgb,
    /// Main-color pool this cat was offered when `main` was picked.
    pub offered_pool: Vec<Rgb>,
}

/// Realized colors of one cat. The variant is the cat's tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Genome {
    Parent { color: Rgb },
    /// One color per marker, in palette order.
    Kitten { colors: Vec<Rgb> },
    Grandkitten(MixedColors),
    GreatGrandkitten(MixedColors),
}

impl Genome {
    pub fn tier(&self) -> Tier {
        match self {
            Genome::Parent { .. } => Tier::Parent,
            Genome::Kitten { .. } => Tier::Kitten,
            Genome::Grandkitten(_) => Tier::Grandkitten,
            Genome::GreatGrandkitten(_) => Tier::GreatGrandkitten,
        }
    }

    pub fn generation(&self) -> u8 {
        self.tier().generation()
    }

    /// The color sequence children sample from.
    pub fn inherited_colors(&self) -> &[Rgb] {
        match self {
            Genome::Parent { color } => std::slice::from_ref(color),
            Genome::Kitten { colors } => colors,
            Genome::Grandkitten(m) | Genome::GreatGrandkitten(m) => &m.sampled,
        }
    }

    pub fn main_color(&self) -> Option<Rgb> {
        match self {
            Genome::Grandkitten(m) | Genome::GreatGrandkitten(m) => Some(m.main),
            _ => None,
        }
    }

    pub fn mixed(&self) -> Option<&MixedColors> {
        match self {
            Genome::Grandkitten(m) | Genome::GreatGrandkitten(m) => Some(m),
            _ => None,
        }
    }

    /// Marker -> color table used to paint this cat's sprite.
    pub fn color_map(&self) -> ColorMap {
        match self {
            Genome::Parent { color } => MARKER_PALETTE.iter().map(|m| (*m, *color)).collect(),
            Genome::Kitten { colors } => MARKER_PALETTE
                .iter()
                .copied()
                .zip(colors.iter().copied())
                .collect(),
            Genome::Grandkitten(m) | Genome::GreatGrandkitten(m) => {
                MARKER_PALETTE
                    .iter()
                    .enumerate()
                    .map(|(i, marker)| {
                        let color = if *marker == PRIMARY_MARKER {
                            m.main
                        } else {
                            // keyed by palette index, not by marker identity
                            m.sampled[i % m.sampled.len()]
                        };
                        (*marker, color)
                    })
                    .collect()
            }
        }
    }
}

/// Each marker independently takes one of the two parent colors.
pub fn kitten_genome<R: Rng + ?Sized>(color1: Rgb, color2: Rgb, rng: &mut R) -> Genome {
    let colors = MARKER_PALETTE
        .iter()
        .map(|_| if rng.gen_bool(0.5) { color1 } else { color2 })
        .collect();
    Genome::Kitten { colors }
}

/// Genome of a child of two kitten-or-later cats.
///
/// The child is a great-grandkitten exactly when both parents are grandkittens. `main_pool`
/// is the main-color pool offered to this child; when empty, the first sampled color is used.
pub fn mixed_genome<R: Rng + ?Sized>(
    parent1: &Genome,
    parent2: &Genome,
    main_pool: &[Rgb],
    rng: &mut R,
) -> CatResult<Genome> {
    for p in [parent1, parent2] {
        if p.tier() < Tier::Kitten {
            return Err(CatError::validation(format!(
                "grandkitten parents must be kittens or later, got {:?}",
                p.tier()
            )));
        }
    }

    let union = union_colors(parent1.inherited_colors(), parent2.inherited_colors());
    if union.is_empty() {
        return Err(CatError::validation("parents carry no colors to inherit"));
    }
    let sampled = sample_colors(&union, rng);
    let main = match main_pool.choose(rng) {
        Some(c) => *c,
        None => sampled[0],
    };

    let colors = MixedColors {
        sampled,
        main,
        offered_pool: main_pool.to_vec(),
    };
    Ok(
        if parent1.tier() == Tier::Grandkitten && parent2.tier() == Tier::Grandkitten {
            Genome::GreatGrandkitten(colors)
        } else {
            Genome::Grandkitten(colors)
        },
    )
}

/// Distinct colors of both sequences, in first-seen order.
pub fn union_colors(a: &[Rgb], b: &[Rgb]) -> Vec<Rgb> {
    let mut out = Vec::<Rgb>::new();
    for c in a.iter().chain(b) {
        if !out.contains(c) {
            out.push(*c);
        }
    }
    out
}

/// Above three colors, keep 2, 3 or all of them (size chosen uniformly) without replacement.
pub fn sample_colors<R: Rng + ?Sized>(union: &[Rgb], rng: &mut R) -> Vec<Rgb> {
    if union.len() <= 3 {
        return union.to_vec();
    }
    let n = [2, 3, union.len()].choose(rng).copied().unwrap_or(union.len());
    rand::seq::index::sample(rng, union.len(), n)
        .into_iter()
        .map(|i| union[i])
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/genetics/genome.rs"]
mod tests;
