use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use image::RgbImage;
use usvg::fontdb;

use crate::foundation::{config::LabelStyle, core::Rgb, error::CatResult};

/// Draws cat captions onto finished images.
///
/// The font is resolved once at construction. When nothing usable is found the labeler still
/// works but leaves images untouched; a missing font never fails a run.
pub struct Labeler {
    style: LabelStyle,
    fontdb: Arc<fontdb::Database>,
    family: Option<String>,
}

impl Labeler {
    /// Load system fonts plus the configured font file, looked up as given and inside each of
    /// `search_dirs` (and their `fonts/` subfolder).
    pub fn new(style: LabelStyle, search_dirs: &[&Path]) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let family = resolve_family(&mut db, &style.font, search_dirs);
        Self {
            style,
            fontdb: Arc::new(db),
            family,
        }
    }

    /// A labeler with an empty font database; [`Self::draw`] is a no-op.
    pub fn without_fonts(style: LabelStyle) -> Self {
        Self {
            style,
            fontdb: Arc::new(fontdb::Database::new()),
            family: None,
        }
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Family name text is rendered with, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Render `text` onto `img` in place at the configured offset.
    pub fn draw(&self, img: &mut RgbImage, text: &str) -> CatResult<()> {
        let Some(family) = self.family.as_deref() else {
            return Ok(());
        };
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Ok(());
        }

        let svg = label_svg(width, height, text, family, &self.style);
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse label svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .with_context(|| format!("allocate {width}x{height} label pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        for (dst, src) in img.pixels_mut().zip(pixmap.data().chunks_exact(4)) {
            dst.0 = over_opaque(dst.0, [src[0], src[1], src[2], src[3]]);
        }
        tracing::debug!(text, "drew label");
        Ok(())
    }
}

fn resolve_family(db: &mut fontdb::Database, font: &str, search_dirs: &[&Path]) -> Option<String> {
    for path in font_file_candidates(font, search_dirs) {
        if !path.is_file() {
            continue;
        }
        let Some(name) = family_of_file(&path) else {
            tracing::warn!(path = %path.display(), "cannot read font file");
            continue;
        };
        if db.load_font_file(&path).is_ok() {
            tracing::debug!(path = %path.display(), family = %name, "loaded label font");
            return Some(name);
        }
    }

    let stem = Path::new(font)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(font);
    for name in [font, stem] {
        if query(db, fontdb::Family::Name(name)).is_some() {
            return Some(name.to_string());
        }
    }

    tracing::warn!(font, "font not found, using default");
    let fallback = query(db, fontdb::Family::SansSerif)
        .and_then(|id| db.face(id))
        .or_else(|| db.faces().next())
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone());
    if fallback.is_none() {
        tracing::warn!("no fonts available, labels will not be drawn");
    }
    fallback
}

fn font_file_candidates(font: &str, search_dirs: &[&Path]) -> Vec<PathBuf> {
    let mut out = vec![PathBuf::from(font)];
    for dir in search_dirs {
        out.push(dir.join(font));
        out.push(dir.join("fonts").join(font));
    }
    out
}

fn family_of_file(path: &Path) -> Option<String> {
    let mut probe = fontdb::Database::new();
    probe.load_font_file(path).ok()?;
    let face = probe.faces().next()?;
    face.families.first().map(|(name, _)| name.clone())
}

fn query(db: &fontdb::Database, family: fontdb::Family<'_>) -> Option<fontdb::ID> {
    db.query(&fontdb::Query {
        families: &[family],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    })
}

fn label_svg(width: u32, height: u32, text: &str, family: &str, style: &LabelStyle) -> String {
    let [r, g, b] = style.color;
    let (x, y) = style.position;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
            r#"<text x="{x}" y="{y}" font-family="'{family}'" font-size="{size}" "#,
            r#"fill="rgb({r},{g},{b})" dominant-baseline="hanging" xml:space="preserve">"#,
            "{text}</text></svg>"
        ),
        w = width,
        h = height,
        x = x,
        y = y,
        family = xml_escape(family),
        size = style.size,
        r = r,
        g = g,
        b = b,
        text = xml_escape(text),
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Premultiplied `src` over an opaque `dst`.
fn over_opaque(dst: Rgb, src: [u8; 4]) -> Rgb {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/label.rs"]
mod tests;
