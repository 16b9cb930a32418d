use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb,
    error::{CatError, CatResult},
};

/// Cat coat colors parents are drawn from: vibrant first, pastel after.
pub const DEFAULT_PALETTE: [Rgb; 27] = [
    [255, 0, 0],
    [0, 0, 255],
    [0, 128, 0],
    [255, 255, 0],
    [255, 165, 0],
    [255, 192, 203],
    [128, 0, 128],
    [165, 42, 42],
    [128, 128, 128],
    [50, 205, 50],
    [0, 255, 255],
    [255, 0, 255],
    [128, 128, 0],
    [230, 230, 250],
    [135, 206, 250],
    [152, 251, 152],
    [255, 218, 185],
    [255, 182, 193],
    [240, 128, 128],
    [255, 255, 224],
    [216, 191, 216],
    [245, 245, 220],
    [175, 238, 238],
    [255, 228, 225],
    [250, 250, 210],
    [255, 229, 180],
    [245, 255, 250],
];

/// Tunables for one family run. Every field falls back to its default when absent from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FamilyConfig {
    /// Colors the parent pairs are sampled from.
    pub palette: Vec<Rgb>,
    /// Fill of layout cells without a cat.
    pub background: Rgb,
    pub label: LabelStyle,
    pub output: OutputSettings,
    /// Names file, one entry per line.
    pub names_file: PathBuf,
    /// Directory holding the `ear`, `eyes`, `body`, `tail` and `legs` folders.
    pub parts_dir: PathBuf,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            background: [240, 255, 255],
            label: LabelStyle::default(),
            output: OutputSettings::default(),
            names_file: PathBuf::from("cats_name.TXT"),
            parts_dir: PathBuf::from("."),
        }
    }
}

impl FamilyConfig {
    pub fn from_json_file(path: &Path) -> CatResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CatResult<()> {
        if self.palette.len() < 2 {
            return Err(CatError::validation("palette must hold at least 2 colors"));
        }
        if !(self.label.size.is_finite() && self.label.size > 0.0) {
            return Err(CatError::validation("label size must be > 0"));
        }
        if !(1..=100).contains(&self.output.quality) {
            return Err(CatError::validation("output quality must be in 1..=100"));
        }
        Ok(())
    }
}

/// Placement and look of the `"{name} (Gen {n})"` caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Font file name or family name.
    pub font: String,
    pub size: f32,
    pub color: Rgb,
    /// Top-left offset of the text box, in pixels.
    pub position: (u32, u32),
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: "arial.ttf".to_string(),
            size: 26.0,
            color: [0, 0, 0],
            position: (10, 5),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub file_name: PathBuf,
    pub format: OutputFormat,
    /// JPEG quality; ignored for PNG.
    pub quality: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("cats_family.png"),
            format: OutputFormat::Png,
            quality: 95,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
