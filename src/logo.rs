//! Website logo conversion: WEBP to a white-flattened PNG plus the app ICO.

use std::fs;
use std::path::Path;

use image::{ImageReader, Rgb, RgbImage, RgbaImage};
use tracing::{debug, instrument};

use crate::cli::output;
use crate::errors::{AssetError, AssetResult};
use crate::ico;

pub const SOURCE_WEBP: &str = "logo.webp";
pub const PNG_PATH: &str = "logo.png";
pub const BUILD_DIR: &str = "build";
pub const ICO_PATH: &str = "build/icon.ico";

/// Convert `logo.webp` into `logo.png` and `build/icon.ico`.
#[instrument]
pub fn convert() -> AssetResult<()> {
    convert_in(Path::new("."))
}

/// Same conversion with all fixed paths resolved under `root`.
pub fn convert_in(root: &Path) -> AssetResult<()> {
    let source = root.join(SOURCE_WEBP);
    if !source.exists() {
        return Err(AssetError::SourceMissing(source));
    }

    // Sniff the format from content, the extension is not trusted.
    let img = ImageReader::open(&source)
        .map_err(|e| AssetError::io(format!("open {}", source.display()), e))?
        .with_guessed_format()
        .map_err(|e| AssetError::io(format!("read {}", source.display()), e))?
        .decode()
        .map_err(|e| AssetError::image(&source, e))?;
    debug!("loaded {} ({}x{})", source.display(), img.width(), img.height());

    // Website PNG: transparency flattened onto opaque white.
    let png_path = root.join(PNG_PATH);
    if img.color().has_alpha() {
        let flat = flatten_on_white(&img.to_rgba8());
        flat.save(&png_path)
            .map_err(|e| AssetError::image(&png_path, e))?;
    } else {
        img.to_rgb8()
            .save(&png_path)
            .map_err(|e| AssetError::image(&png_path, e))?;
    }
    output::success(&format!("Created {}", PNG_PATH));

    // App ICO from the unflattened source.
    let build_dir = root.join(BUILD_DIR);
    fs::create_dir_all(&build_dir).map_err(|e| AssetError::create(&build_dir, e))?;
    ico::write_ico(&img.to_rgba8(), &root.join(ICO_PATH))?;
    output::success(&format!("Created {}", ICO_PATH));

    output::success("Logo conversion complete!");
    Ok(())
}

/// Alpha-composite onto an opaque white background.
fn flatten_on_white(img: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::from_pixel(img.width(), img.height(), Rgb([255, 255, 255]));
    for (x, y, px) in img.enumerate_pixels() {
        let a = u32::from(px[3]);
        let blend = |c: u8| ((u32::from(c) * a + 255 * (255 - a)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }
    out
}
