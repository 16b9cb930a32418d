use std::{collections::BTreeMap, path::Path, sync::Arc};

use anyhow::Context as _;
use image::RgbImage;
use rand::{Rng, seq::SliceRandom};

use crate::{
    assets::decode::decode_sprite,
    foundation::{
        core::PartName,
        error::{CatError, CatResult},
    },
    raster::compose::SpritePartSet,
};

/// Every available sprite image, grouped by part. Each group is non-empty.
#[derive(Clone, Debug)]
pub struct PartLibrary {
    images: BTreeMap<PartName, Vec<Arc<RgbImage>>>,
}

impl PartLibrary {
    /// Load `root/<part>/*.png` for every part.
    ///
    /// A missing or empty folder, or one with no decodable PNG, is a missing resource.
    /// Individual files that fail to decode are skipped.
    pub fn load(root: &Path) -> CatResult<Self> {
        validate_folders(root)?;

        let mut images = BTreeMap::new();
        for part in PartName::ALL {
            let dir = root.join(part.folder());
            let loaded = load_folder(&dir)?;
            if loaded.is_empty() {
                return Err(CatError::missing_resource(format!(
                    "no valid images found in '{}'",
                    dir.display()
                )));
            }
            tracing::info!(part = %part, count = loaded.len(), "loaded part images");
            images.insert(part, loaded);
        }
        Ok(Self { images })
    }

    /// Build a library from in-memory images.
    pub fn from_parts(images: BTreeMap<PartName, Vec<Arc<RgbImage>>>) -> CatResult<Self> {
        for part in PartName::ALL {
            if images.get(&part).is_none_or(|v| v.is_empty()) {
                return Err(CatError::missing_resource(format!(
                    "no images for part '{part}'"
                )));
            }
        }
        Ok(Self { images })
    }

    pub fn count(&self, part: PartName) -> usize {
        self.images.get(&part).map_or(0, Vec::len)
    }

    /// One uniformly chosen image per part, drawn in part order.
    pub fn choose_random_parts<R: Rng + ?Sized>(&self, rng: &mut R) -> SpritePartSet {
        let mut set = SpritePartSet::new();
        for part in PartName::ALL {
            if let Some(img) = self.images.get(&part).and_then(|v| v.choose(rng)) {
                set.insert(part, Arc::clone(img));
            }
        }
        tracing::debug!("selected random parts for cat");
        set
    }
}

fn validate_folders(root: &Path) -> CatResult<()> {
    for part in PartName::ALL {
        let dir = root.join(part.folder());
        if !dir.is_dir() {
            return Err(CatError::missing_resource(format!(
                "required folder '{}' not found at {}",
                part.folder(),
                dir.display()
            )));
        }
        let mut entries =
            std::fs::read_dir(&dir).with_context(|| format!("list folder '{}'", dir.display()))?;
        if entries.next().is_none() {
            return Err(CatError::missing_resource(format!(
                "folder '{}' is empty",
                part.folder()
            )));
        }
    }
    tracing::info!("all cat part folders validated");
    Ok(())
}

fn load_folder(dir: &Path) -> CatResult<Vec<Arc<RgbImage>>> {
    let mut paths = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("list folder '{}'", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("read entry in '{}'", dir.display()))?
            .path();
        let is_png = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let decoded = std::fs::read(&path)
            .with_context(|| format!("read image '{}'", path.display()))
            .map_err(CatError::from)
            .and_then(|bytes| decode_sprite(&bytes));
        match decoded {
            Ok(img) => {
                tracing::debug!(path = %path.display(), "loaded image");
                out.push(Arc::new(img));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot load image, skipping");
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/parts.rs"]
mod tests;
