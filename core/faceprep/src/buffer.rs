use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::FacePrepError;

/// An owned image: row-major, interleaved-channel pixel storage plus
/// dimensions and channel count.
///
/// This is the neutral value type every operation in this crate accepts and
/// returns. Operations never mutate a buffer in place; they produce a new
/// one. Conversion to and from the vision backend's representation
/// ([`DynamicImage`]) is confined to this module, so the rest of the crate
/// never touches backend types directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer from raw interleaved pixel data.
    ///
    /// `channels` must be 1 (grayscale), 3 (RGB), or 4 (RGBA), and
    /// `data.len()` must equal `width * height * channels`.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<Self, FacePrepError> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(FacePrepError::UnsupportedChannelCount(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(FacePrepError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels per pixel (1, 3, or 4).
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw pixel data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Convert into the backend's operation-scoped representation.
    pub(crate) fn to_dynamic(&self) -> DynamicImage {
        let data = self.data.clone();
        match self.channels {
            1 => GrayImage::from_raw(self.width, self.height, data).map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(self.width, self.height, data).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(self.width, self.height, data).map(DynamicImage::ImageRgba8),
            _ => None,
        }
        .expect("buffer shape is validated on construction")
    }

    /// Convert back from the backend representation.
    ///
    /// Backend images in sample formats other than 8-bit Luma/RGB/RGBA are
    /// widened to RGBA.
    pub(crate) fn from_dynamic(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, data) = match image {
            DynamicImage::ImageLuma8(img) => (1, img.into_raw()),
            DynamicImage::ImageRgb8(img) => (3, img.into_raw()),
            DynamicImage::ImageRgba8(img) => (4, img.into_raw()),
            other => (4, other.to_rgba8().into_raw()),
        };

        Self {
            width,
            height,
            channels,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_valid_rgb() {
        let buf = ImageBuffer::from_raw(2, 2, 3, vec![0; 12]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.channels(), 3);
    }

    #[test]
    fn from_raw_rejects_two_channels() {
        let result = ImageBuffer::from_raw(2, 2, 2, vec![0; 8]);
        assert!(matches!(
            result,
            Err(FacePrepError::UnsupportedChannelCount(2))
        ));
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        let result = ImageBuffer::from_raw(2, 2, 3, vec![0; 11]);
        assert!(matches!(
            result,
            Err(FacePrepError::SizeMismatch {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn zero_dimensions_are_constructible() {
        // Operations reject zero-sized inputs; the buffer itself permits them.
        let buf = ImageBuffer::from_raw(0, 0, 3, vec![]).unwrap();
        assert_eq!(buf.width(), 0);
    }

    #[test]
    fn dynamic_round_trip_preserves_pixels() {
        let data: Vec<u8> = (0..12).collect();
        let buf = ImageBuffer::from_raw(2, 2, 3, data.clone()).unwrap();
        let round_tripped = ImageBuffer::from_dynamic(buf.to_dynamic());
        assert_eq!(round_tripped, buf);
        assert_eq!(round_tripped.data(), &data[..]);
    }

    #[test]
    fn dynamic_round_trip_grayscale() {
        let buf = ImageBuffer::from_raw(3, 2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let round_tripped = ImageBuffer::from_dynamic(buf.to_dynamic());
        assert_eq!(round_tripped, buf);
    }
}
