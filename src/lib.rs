//! catfamily procedurally generates a family of composite cat sprites.
//!
//! Each cat is assembled from five layered parts (ear, eyes, body, tail, legs) drawn in
//! neutral marker grays. A per-generation genome decides which real color each marker becomes:
//!
//! 1. **Parents** are painted in a single color.
//! 2. **Kittens** take each marker from one of their two parents.
//! 3. **Grandkittens** sample a small subset of their parents' colors and take a separate main
//!    body color from a pool threaded between siblings.
//! 4. The **great-grandkitten** applies the same rule to the two grandkittens.
//!
//! The finished cats are captioned and laid out on one canvas. All randomness flows through
//! one seeded stream, so a run is reproducible bit-for-bit.
#![forbid(unsafe_code)]

mod assets;
mod family;
mod foundation;
mod genetics;
mod raster;

pub use assets::decode::decode_sprite;
pub use assets::names::NamePool;
pub use assets::parts::PartLibrary;
pub use family::builder::{FamilyRun, generate_family};
pub use family::cat::{CatEntity, caption, render_cat};
pub use family::output::save_family_image;
pub use family::tree::FamilyTree;
pub use foundation::config::{
    DEFAULT_PALETTE, FamilyConfig, LabelStyle, OutputFormat, OutputSettings,
};
pub use foundation::core::{CatId, PartName, Rgb, Tier};
pub use foundation::error::{CatError, CatResult};
pub use genetics::genome::{
    Genome, MixedColors, kitten_genome, mixed_genome, sample_colors, union_colors,
};
pub use genetics::inherit::inherit_parts;
pub use genetics::palette::{MARKER_PALETTE, PRIMARY_MARKER, is_marker};
pub use raster::compose::{SpritePartSet, combine};
pub use raster::label::Labeler;
pub use raster::layout::render_grid;
pub use raster::substitute::{ColorMap, substitute};
