use crate::buffer::ImageBuffer;
use crate::error::FacePrepError;
use crate::ops::{self, Interpolation};

/// A face detection result, consumed read-only.
///
/// Coordinates are normalized to `[0, 1]` relative to the dimensions of the
/// image the face was detected in, so the same observation applies at any
/// resolution of that image.
#[derive(Debug, Clone)]
pub struct FaceObservation {
    /// Normalized X coordinate of the top-left corner.
    pub x: f64,
    /// Normalized Y coordinate of the top-left corner.
    pub y: f64,
    /// Normalized width of the bounding box.
    pub width: f64,
    /// Normalized height of the bounding box.
    pub height: f64,
    /// Detection confidence score.
    pub confidence: f64,
}

/// Absolute pixel rectangle within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// X coordinate of the top-left corner (pixels).
    pub x: u32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Output of [`FacePreprocessor::preprocess`].
#[derive(Debug, Clone)]
pub struct ProcessedFace {
    /// The face region, cropped and resized to the configured target size.
    pub image: ImageBuffer,

    /// The rectangle actually cropped, in source-image pixel coordinates,
    /// after clamping to the image bounds. Consumers need this to map
    /// results back onto the original image.
    pub region: PixelRect,
}

/// Crops a detected face region out of an image and resizes it for a
/// downstream consumer (typically a neural network input).
///
/// ```
/// use faceprep::{FaceObservation, FacePreprocessor, ImageBuffer, Interpolation};
///
/// let image = ImageBuffer::from_raw(100, 100, 3, vec![128; 100 * 100 * 3]).unwrap();
/// let observation = FaceObservation {
///     x: 0.1,
///     y: 0.1,
///     width: 0.5,
///     height: 0.5,
///     confidence: 0.9,
/// };
///
/// let result = FacePreprocessor::new(64, 64)
///     .interpolation(Interpolation::Bilinear)
///     .preprocess(&image, &observation)
///     .unwrap();
///
/// assert_eq!(result.image.width(), 64);
/// assert_eq!(result.region.x, 10);
/// ```
#[derive(Debug, Clone)]
pub struct FacePreprocessor {
    target_width: u32,
    target_height: u32,
    interpolation: Interpolation,
}

impl FacePreprocessor {
    /// Create a preprocessor producing `target_width` × `target_height`
    /// outputs with the default interpolation.
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width,
            target_height,
            interpolation: Interpolation::default(),
        }
    }

    /// Set the interpolation mode used for the final resize
    /// (default: bilinear).
    pub fn interpolation(mut self, mode: Interpolation) -> Self {
        self.interpolation = mode;
        self
    }

    /// Crop the observed face region out of `image` and resize it to the
    /// target size.
    ///
    /// The normalized box is scaled to the image's pixel dimensions and
    /// clipped to its bounds; a box partially outside the image is cropped
    /// to the valid range rather than read out of bounds. Fails with
    /// [`FacePrepError::EmptyFaceRegion`] when nothing remains after
    /// clipping, and never returns a partial result.
    pub fn preprocess(
        &self,
        image: &ImageBuffer,
        observation: &FaceObservation,
    ) -> Result<ProcessedFace, FacePrepError> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(FacePrepError::InvalidTargetSize {
                width: self.target_width,
                height: self.target_height,
            });
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(FacePrepError::ZeroDimensions);
        }

        let region = absolute_region(observation, image.width(), image.height())?;
        let cropped = crop(image, region);
        let resized = ops::resize(
            &cropped,
            self.target_width,
            self.target_height,
            self.interpolation,
        )?;

        Ok(ProcessedFace {
            image: resized,
            region,
        })
    }
}

/// Scale a normalized bounding box to absolute pixel coordinates and clamp
/// it to the image bounds.
///
/// The box is clipped, not rejected: only a box whose clipped area is empty
/// is an error.
pub(crate) fn absolute_region(
    observation: &FaceObservation,
    image_width: u32,
    image_height: u32,
) -> Result<PixelRect, FacePrepError> {
    let finite = observation.x.is_finite()
        && observation.y.is_finite()
        && observation.width.is_finite()
        && observation.height.is_finite();
    if !finite {
        return Err(FacePrepError::InvalidObservation);
    }

    let img_w = image_width as f64;
    let img_h = image_height as f64;

    let left = (observation.x * img_w).clamp(0.0, img_w);
    let top = (observation.y * img_h).clamp(0.0, img_h);
    let right = ((observation.x + observation.width) * img_w).clamp(0.0, img_w);
    let bottom = ((observation.y + observation.height) * img_h).clamp(0.0, img_h);

    // Cover fractional edges with whole pixels: floor the origin, ceil the
    // far edge. Both stay within bounds because of the clamp above.
    let x0 = left.floor() as u32;
    let y0 = top.floor() as u32;
    let x1 = right.ceil() as u32;
    let y1 = bottom.ceil() as u32;

    if x1 <= x0 || y1 <= y0 {
        return Err(FacePrepError::EmptyFaceRegion);
    }

    Ok(PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

/// Crop `region` out of `image`. The region must lie within the image
/// bounds, which [`absolute_region`] guarantees.
fn crop(image: &ImageBuffer, region: PixelRect) -> ImageBuffer {
    let cropped = image
        .to_dynamic()
        .crop_imm(region.x, region.y, region.width, region.height);
    ImageBuffer::from_dynamic(cropped)
}
