//! Image resizing.

use image::{imageops::FilterType, ImageFormat};
use skim_core::{Result, SkimError};
use std::io::Cursor;

/// A re-encoded image plus the file extension matching its format.
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub data: Vec<u8>,
    pub extension: &'static str,
}

/// Resize an encoded image to exactly `width` x `height`, re-encoding in
/// the source format (PNG when the source format has no encoder).
pub fn resize(bytes: &[u8], width: u32, height: u32) -> Result<ResizedImage> {
    if width == 0 || height == 0 {
        return Err(SkimError::Media(
            "resize dimensions must be non-zero".into(),
        ));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| SkimError::UnsupportedFormat(format!("unrecognized image: {e}")))?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| SkimError::Media(e.to_string()))?;

    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    // Write-capable formats keep their encoding; everything else (e.g.
    // HDR sources) falls back to PNG.
    let out_format = match format {
        ImageFormat::Png
        | ImageFormat::Jpeg
        | ImageFormat::Gif
        | ImageFormat::Bmp
        | ImageFormat::Tiff => format,
        _ => ImageFormat::Png,
    };

    let mut data = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut data), out_format)
        .map_err(|e| SkimError::Media(e.to_string()))?;

    let extension = out_format.extensions_str().first().copied().unwrap_or("png");
    tracing::debug!(width, height, format = extension, "resized image");
    Ok(ResizedImage { data, extension })
}
