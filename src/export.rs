use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

/// Failures raised while writing an icon file to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The target path could not be created or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bitmap could not be encoded in the requested format.
    #[error(transparent)]
    Encode(#[from] image::ImageError),
    #[error("ico export needs at least one source bitmap and one target size")]
    EmptyIcoRequest,
    #[error("cannot encode an empty {width}x{height} bitmap")]
    EmptyBitmap { width: u32, height: u32 },
}

/// Writes `image` to `path` as a PNG, overwriting any existing file.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), ExportError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Writes a multi-resolution ICO container to `path` with one entry per
/// requested size, overwriting any existing file.
///
/// Each entry uses the source bitmap whose edge length matches the size;
/// when none matches, the largest source is resampled.
pub fn write_ico(
    sources: &[RgbaImage],
    sizes: &[u32],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    if sources.is_empty() || sizes.is_empty() {
        return Err(ExportError::EmptyIcoRequest);
    }
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let entry = match sources
            .iter()
            .find(|s| s.width() == size && s.height() == size)
        {
            Some(exact) => exact.clone(),
            None => {
                // Unwrap is safe, sources is non-empty.
                let largest = sources.iter().max_by_key(|s| s.width()).unwrap();
                imageops::resize(largest, size, size, FilterType::Lanczos3)
            }
        };
        let (width, height) = entry.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyBitmap { width, height });
        }
        let icon_image = IconImage::from_rgba_data(width, height, entry.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&icon_image)?);
    }
    let file = BufWriter::new(File::create(path)?);
    icon_dir.write(file)?;
    Ok(())
}
