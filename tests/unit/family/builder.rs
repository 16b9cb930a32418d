use std::{collections::BTreeMap, sync::Arc};

use image::Rgb as Px;

use super::*;
use crate::{
    foundation::{
        config::LabelStyle,
        core::{PartName, Tier},
    },
    genetics::{genome::union_colors, palette::MARKER_PALETTE},
};

fn library() -> PartLibrary {
    let mut images = BTreeMap::new();
    for (i, part) in PartName::ALL.into_iter().enumerate() {
        let variants = (0..3u32)
            .map(|v| {
                Arc::new(RgbImage::from_fn(6 + v + i as u32, 4 + v, |x, y| {
                    Px(MARKER_PALETTE[((x + y + v) as usize) % MARKER_PALETTE.len()])
                }))
            })
            .collect();
        images.insert(part, variants);
    }
    PartLibrary::from_parts(images).unwrap()
}

fn names(n: usize) -> NamePool {
    NamePool::new((0..n).map(|i| format!("Name{i}")).collect())
}

fn run(seed: u64, pool: NamePool) -> FamilyRun {
    generate_family(
        &FamilyConfig::default(),
        &library(),
        pool,
        &Labeler::without_fonts(LabelStyle::default()),
        Some(seed),
    )
    .unwrap()
}

#[test]
fn topology_is_fixed() {
    let fam = run(1, names(30));
    let tree = &fam.tree;
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.parents().len(), 8);
    assert_eq!(tree.kittens().len(), 4);
    assert_eq!(tree.grandkittens().len(), 3);

    let row_lens: Vec<usize> = fam.layout.iter().map(Vec::len).collect();
    assert_eq!(row_lens, [5, 3, 4, 3]);

    let ggk = tree.cat(fam.layout[0][4]).unwrap();
    assert_eq!(ggk.tier(), Tier::GreatGrandkitten);
    let gk1 = fam.layout[0][3];
    let gk2 = fam.layout[2][3];
    assert_eq!(ggk.parents, Some([gk1, gk2]));
    assert_eq!(tree.cat(gk1).unwrap().parents, Some([fam.layout[0][2], fam.layout[1][2]]));
    assert_eq!(tree.cat(gk2).unwrap().parents, Some([fam.layout[2][2], fam.layout[3][2]]));
    for row in &fam.layout {
        let kitten = tree.cat(row[2]).unwrap();
        assert_eq!(kitten.parents, Some([row[0], row[1]]));
    }
}

#[test]
fn parent_pairs_get_distinct_palette_colors() {
    let fam = run(2, names(30));
    let palette = FamilyConfig::default().palette;
    for row in &fam.layout {
        let a = fam.tree.cat(row[0]).unwrap().genome.inherited_colors()[0];
        let b = fam.tree.cat(row[1]).unwrap().genome.inherited_colors()[0];
        assert_ne!(a, b);
        assert!(palette.contains(&a) && palette.contains(&b));
    }
}

#[test]
fn grandkitten_colors_stay_within_parent_union() {
    for seed in 0..10 {
        let fam = run(seed, names(30));
        for id in fam.tree.grandkittens() {
            let cat = fam.tree.cat(*id).unwrap();
            let [a, b] = cat.parents.unwrap();
            let union = union_colors(
                fam.tree.cat(a).unwrap().genome.inherited_colors(),
                fam.tree.cat(b).unwrap().genome.inherited_colors(),
            );
            let sampled = cat.genome.inherited_colors();
            assert!(sampled.iter().all(|c| union.contains(c)));
            if union.len() > 3 {
                assert!([2, 3, union.len()].contains(&sampled.len()));
            } else {
                assert_eq!(sampled.len(), union.len());
            }
        }
    }
}

#[test]
fn main_color_pool_threads_between_branches() {
    for seed in 0..10 {
        let fam = run(seed, names(30));
        let gk1 = fam.tree.cat(fam.layout[0][3]).unwrap();
        let gk2 = fam.tree.cat(fam.layout[2][3]).unwrap();
        let ggk = fam.tree.cat(fam.layout[0][4]).unwrap();

        let gk1_mixed = gk1.genome.mixed().unwrap();
        assert!(gk1_mixed.offered_pool.is_empty());
        assert_eq!(gk1_mixed.main, gk1_mixed.sampled[0]);

        let gk1_main = gk1.genome.main_color().unwrap();
        let gk2_main = gk2.genome.main_color().unwrap();
        assert!(gk2.genome.mixed().unwrap().offered_pool.contains(&gk1_main));
        assert_eq!(
            ggk.genome.mixed().unwrap().offered_pool,
            vec![gk1_main, gk2_main]
        );
    }
}

#[test]
fn short_name_pool_falls_back_for_overflow_only() {
    let fam = run(3, names(10));
    assert_eq!(fam.fallback_names, 5);
    let synthetic = fam
        .tree
        .cats()
        .iter()
        .filter(|c| c.name.starts_with("Cat_"))
        .count();
    assert_eq!(synthetic, 5);

    let mut all: Vec<&str> = fam.tree.cats().iter().map(|c| c.name.as_str()).collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 15);
}

#[test]
fn seeded_runs_are_identical() {
    let a = run(77, names(30)).render([240, 255, 255]).unwrap();
    let b = run(77, names(30)).render([240, 255, 255]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_uses_uniform_pitch() {
    let fam = run(4, names(30));
    let imgs = fam.images().unwrap();
    let w = imgs.iter().flatten().map(|i| i.width()).max().unwrap();
    let h = imgs.iter().flatten().map(|i| i.height()).max().unwrap();
    let canvas = fam.render([240, 255, 255]).unwrap();
    assert_eq!(canvas.dimensions(), (w * 5, h * 4));
}

#[test]
fn tiny_palette_is_rejected() {
    let cfg = FamilyConfig {
        palette: vec![[1, 1, 1]],
        ..FamilyConfig::default()
    };
    let err = generate_family(
        &cfg,
        &library(),
        names(30),
        &Labeler::without_fonts(LabelStyle::default()),
        Some(1),
    )
    .unwrap_err();
    assert!(matches!(err, CatError::Validation(_)));
}
