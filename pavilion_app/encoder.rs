//! Re-encoding of uploaded photos into AVIF.

use image::codecs::avif::AvifEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, imageops::FilterType};

use pavilion_types::EncoderError;

/// Larger dimension of a stored photo. Uploads above this are downscaled
/// with the aspect ratio preserved; smaller images are left alone.
pub const MAX_DIMENSION: u32 = 800;

pub const AVIF_QUALITY: u8 = 80;

const AVIF_SPEED: u8 = 8;

/// Decodes `raw`, downscales it to at most [`MAX_DIMENSION`] on the larger
/// side and encodes it as AVIF at quality [`AVIF_QUALITY`].
pub fn encode_avif(raw: &[u8]) -> Result<Vec<u8>, EncoderError> {
    let img = image::load_from_memory(raw).map_err(|e| EncoderError::Decode(e.to_string()))?;
    let img = downscale(img);

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut out = Vec::new();
    let encoder = AvifEncoder::new_with_speed_quality(&mut out, AVIF_SPEED, AVIF_QUALITY);
    encoder
        .write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncoderError::Encode(e.to_string()))?;

    Ok(out)
}

fn downscale(img: DynamicImage) -> DynamicImage {
    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        img
    }
}
