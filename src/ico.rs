//! Multi-resolution ICO container writing.
//!
//! Both conversions bundle the same six square resolutions into one ICO
//! container, with each frame stored PNG-compressed (modern ICO layout).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::errors::{AssetError, AssetResult};

/// Edge lengths bundled into every generated ICO.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Write `img` as a multi-resolution ICO at `path`.
///
/// Frames already at target size are not resampled; everything else is
/// downscaled with Lanczos3.
pub fn write_ico(img: &RgbaImage, path: &Path) -> AssetResult<()> {
    let mut encoded: Vec<(Vec<u8>, u32)> = Vec::with_capacity(ICO_SIZES.len());
    for size in ICO_SIZES {
        let frame = if img.dimensions() == (size, size) {
            img.clone()
        } else {
            imageops::resize(img, size, size, FilterType::Lanczos3)
        };
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| AssetError::image(path, e))?;
        encoded.push((png, size));
    }

    let mut frames = Vec::with_capacity(encoded.len());
    for (png, size) in &encoded {
        let frame = IcoFrame::with_encoded(png.as_slice(), *size, *size, ExtendedColorType::Rgba8)
            .map_err(|e| AssetError::image(path, e))?;
        frames.push(frame);
    }

    let file = File::create(path).map_err(|e| AssetError::create(path, e))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .map_err(|e| AssetError::image(path, e))?;
    debug!("wrote {} frames to {}", frames.len(), path.display());
    Ok(())
}
