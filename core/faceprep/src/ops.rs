use image::imageops::{self, FilterType};

use crate::buffer::ImageBuffer;
use crate::error::FacePrepError;

/// Resampling algorithm used when resizing.
///
/// The integer selectors accepted by [`Interpolation::from_raw`] match the
/// conventional vision-library numbering: 0 nearest, 1 bilinear, 2 bicubic,
/// 3 area, 4 Lanczos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-neighbor sampling.
    Nearest,

    /// Bilinear (triangle) filtering. The backend's default.
    #[default]
    Bilinear,

    /// Bicubic (Catmull-Rom) filtering.
    Bicubic,

    /// Area-based averaging. The backend has no dedicated area filter, so
    /// this selects the linear filter, which averages comparably when
    /// downscaling.
    Area,

    /// Lanczos filtering with a window of 3.
    Lanczos,
}

impl Interpolation {
    /// Map a raw integer selector to an interpolation mode.
    ///
    /// An out-of-range selector falls back to [`Interpolation::Bilinear`],
    /// the backend's default for resampling: callers passing raw selectors
    /// through from an FFI boundary get the library default rather than an
    /// error.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Nearest,
            1 => Self::Bilinear,
            2 => Self::Bicubic,
            3 => Self::Area,
            4 => Self::Lanczos,
            _ => Self::Bilinear,
        }
    }

    pub(crate) fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Area => FilterType::Triangle,
            Self::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// Convert an image to single-channel grayscale.
///
/// The output has the same dimensions as the input and one channel, with
/// pixel values computed by the backend's luminance weighting. A
/// single-channel input is returned as a copy, so applying grayscale twice
/// is idempotent.
pub fn grayscale(image: &ImageBuffer) -> Result<ImageBuffer, FacePrepError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(FacePrepError::ZeroDimensions);
    }

    if image.channels() == 1 {
        return Ok(image.clone());
    }

    let gray = imageops::grayscale(&image.to_dynamic());
    Ok(ImageBuffer::from_dynamic(image::DynamicImage::ImageLuma8(
        gray,
    )))
}

/// Resize an image to exactly `width` × `height` with the given filter.
///
/// Requesting the input's own dimensions is valid and produces a correct
/// (possibly identical) output. Zero target dimensions are rejected.
pub fn resize(
    image: &ImageBuffer,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> Result<ImageBuffer, FacePrepError> {
    if width == 0 || height == 0 {
        return Err(FacePrepError::InvalidTargetSize { width, height });
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(FacePrepError::ZeroDimensions);
    }

    let resized = image
        .to_dynamic()
        .resize_exact(width, height, interpolation.filter_type());
    Ok(ImageBuffer::from_dynamic(resized))
}
