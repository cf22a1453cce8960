//! Application icon conversion: master PNG to ICO + optimized PNG.
//!
//! ICNS is not produced here; it needs the macOS `iconutil` tool, so the
//! command only prints the manual steps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use tracing::{debug, instrument};

use crate::cli::output;
use crate::errors::{AssetError, AssetResult};
use crate::ico;

pub const SOURCE_PNG: &str = "build/icon.png";
pub const ICO_PATH: &str = "build/icon.ico";
pub const PNG_PATH: &str = "build/icon.png";
pub const ICNS_PATH: &str = "build/icon.icns";

/// Convert `build/icon.png` into the full app icon set.
#[instrument]
pub fn convert() -> AssetResult<()> {
    convert_in(Path::new("."))
}

/// Same conversion with all fixed paths resolved under `root`.
pub fn convert_in(root: &Path) -> AssetResult<()> {
    let source = root.join(SOURCE_PNG);
    if !source.exists() {
        return Err(AssetError::SourceMissing(source));
    }

    let img = ImageReader::open(&source)
        .map_err(|e| AssetError::io(format!("open {}", source.display()), e))?
        .decode()
        .map_err(|e| AssetError::image(&source, e))?;
    let rgba = img.to_rgba8();
    debug!("loaded {} ({}x{})", source.display(), rgba.width(), rgba.height());

    // ICO first, then the in-place PNG re-encode over the source.
    let ico_path = root.join(ICO_PATH);
    ico::write_ico(&rgba, &ico_path)?;
    output::success(&format!("Created {}", ICO_PATH));

    save_optimized_png(&rgba, &root.join(PNG_PATH))?;
    output::success(&format!("Updated {}", PNG_PATH));

    print_icns_guidance();
    Ok(())
}

/// Re-encode the icon PNG with best compression.
fn save_optimized_png(rgba: &RgbaImage, path: &Path) -> AssetResult<()> {
    let file = File::create(path).map_err(|e| AssetError::create(path, e))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| AssetError::image(path, e))
}

fn print_icns_guidance() {
    output::info(&format!(
        "{} must be created on macOS with iconutil:",
        ICNS_PATH
    ));
    output::detail("iconutil -c icns build/icon.iconset");
    output::info("");
    output::success("Icon conversion complete!");
    output::detail(&format!("Windows: {}", ICO_PATH));
    output::detail(&format!("Linux:   {}", PNG_PATH));
    output::detail(&format!("macOS:   {} (manual conversion)", ICNS_PATH));
}
