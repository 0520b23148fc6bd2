use anyhow::Context;
use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage,
};

use crate::format::ImageKind;

/// Quality used when writing JPEG output.
pub const JPEG_QUALITY: u8 = 75;

pub fn decode(bytes: &[u8], kind: ImageKind) -> anyhow::Result<DynamicImage> {
    image::load_from_memory_with_format(bytes, kind.image_format())
        .with_context(|| format!("Failed to decode {kind} image."))
}

/// Encodes `image` as `kind`. JPEG has no alpha channel, so it is dropped there.
pub fn encode(image: &RgbaImage, kind: ImageKind) -> anyhow::Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut bytes = vec![];
    match kind {
        ImageKind::Png => PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        ImageKind::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
    }
    .with_context(|| format!("Failed to encode {kind} image."))?;
    Ok(bytes)
}
