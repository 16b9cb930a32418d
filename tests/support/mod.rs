use std::path::{Path, PathBuf};

use catfamily::{MARKER_PALETTE, PartName};

pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "catfamily_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Part folders with two marker-painted sprites each, plus a names file with `names` entries.
pub fn write_fixture(root: &Path, names: usize) {
    for (i, part) in PartName::ALL.into_iter().enumerate() {
        let dir = root.join(part.folder());
        std::fs::create_dir_all(&dir).unwrap();
        for v in 0..2u32 {
            let img = image::RgbImage::from_fn(8 + v * 2 + i as u32, 5 + v, |x, y| {
                if y == 0 {
                    image::Rgb([0, 0, 0])
                } else {
                    image::Rgb(MARKER_PALETTE[((x * 3 + y + v) as usize) % MARKER_PALETTE.len()])
                }
            });
            img.save_with_format(dir.join(format!("{part}_{v}.png")), image::ImageFormat::Png)
                .unwrap();
        }
    }

    let lines: Vec<String> = (0..names).map(|i| format!("{} Kitty{i}", i + 1)).collect();
    std::fs::write(root.join("cats_name.TXT"), lines.join("\n")).unwrap();
}
