use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::buffer::ImageBuffer;
use crate::error::FacePrepError;

/// Output encoding for [`encode_image`].
#[derive(Debug, Clone, Default)]
pub enum EncodeFormat {
    /// Lossless PNG. The quality parameter is ignored.
    #[default]
    Png,

    /// JPEG at the requested quality.
    Jpeg,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into an [`ImageBuffer`].
pub fn decode_image(input: &[u8]) -> Result<ImageBuffer, FacePrepError> {
    let decoded =
        image::load_from_memory(input).map_err(|e| FacePrepError::DecodeError(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(FacePrepError::ZeroDimensions);
    }

    Ok(ImageBuffer::from_dynamic(decoded))
}

/// Encode an [`ImageBuffer`] to the given format.
///
/// `quality` is 0.0–1.0 and only affects JPEG output. JPEG has no alpha
/// channel, so 4-channel buffers are composited onto a white background
/// before encoding.
pub fn encode_image(
    image: &ImageBuffer,
    format: &EncodeFormat,
    quality: f32,
) -> Result<Vec<u8>, FacePrepError> {
    if !(0.0..=1.0).contains(&quality) {
        return Err(FacePrepError::InvalidQuality(quality));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(FacePrepError::ZeroDimensions);
    }

    let mut buffer = Vec::new();

    match format {
        EncodeFormat::Png => {
            let color_type = match image.channels() {
                1 => ExtendedColorType::L8,
                3 => ExtendedColorType::Rgb8,
                _ => ExtendedColorType::Rgba8,
            };
            PngEncoder::new(&mut buffer)
                .write_image(image.data(), image.width(), image.height(), color_type)
                .map_err(|e| FacePrepError::EncodeError(e.to_string()))?;
        }
        EncodeFormat::Jpeg => {
            let flattened;
            let (data, color_type) = match image.channels() {
                1 => (image.data(), ExtendedColorType::L8),
                3 => (image.data(), ExtendedColorType::Rgb8),
                _ => {
                    flattened = flatten_alpha(image);
                    (flattened.data(), ExtendedColorType::Rgb8)
                }
            };

            let quality_percent = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
            JpegEncoder::new_with_quality(&mut buffer, quality_percent)
                .write_image(data, image.width(), image.height(), color_type)
                .map_err(|e| FacePrepError::EncodeError(e.to_string()))?;
        }
    }

    Ok(buffer)
}

/// Flatten the alpha channel of a 4-channel buffer by compositing onto a
/// white background.
pub(crate) fn flatten_alpha(image: &ImageBuffer) -> ImageBuffer {
    let rgba = image.to_dynamic().to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;
        let out_r = (r as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_g = (g as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_b = (b as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        rgb.put_pixel(x, y, image::Rgb([out_r, out_g, out_b]));
    }

    ImageBuffer::from_dynamic(image::DynamicImage::ImageRgb8(rgb))
}
