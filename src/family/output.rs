use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{ImageFormat, RgbImage, codecs::jpeg::JpegEncoder};

use crate::foundation::{
    config::{OutputFormat, OutputSettings},
    error::CatResult,
};

/// Write the family picture, creating missing parent directories.
pub fn save_family_image(
    img: &RgbImage,
    path: &Path,
    settings: &OutputSettings,
) -> CatResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match settings.format {
        OutputFormat::Png => img
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?,
        OutputFormat::Jpeg => {
            let f = File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            let encoder = JpegEncoder::new_with_quality(BufWriter::new(f), settings.quality);
            img.write_with_encoder(encoder)
                .with_context(|| format!("write jpeg '{}'", path.display()))?;
        }
    }

    let kib = std::fs::metadata(path)
        .map(|m| m.len() as f64 / 1024.0)
        .unwrap_or(0.0);
    tracing::info!(path = %path.display(), size_kb = format!("{kib:.1}"), "saved family image");
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/unit/family/output.rs"]
mod tests;
