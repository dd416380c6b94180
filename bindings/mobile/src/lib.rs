uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FacePrepError {
    #[error("failed to decode image: {message}")]
    DecodeError { message: String },
    #[error("failed to encode image: {message}")]
    EncodeError { message: String },
    #[error("image dimensions are zero")]
    ZeroDimensions,
    #[error("unsupported channel count")]
    UnsupportedChannelCount,
    #[error("pixel data length does not match dimensions")]
    SizeMismatch,
    #[error("invalid quality value")]
    InvalidQuality,
    #[error("target dimensions must be > 0")]
    InvalidTargetSize,
    #[error("face observation contains non-finite values")]
    InvalidObservation,
    #[error("face region is empty after clamping")]
    EmptyFaceRegion,
}

impl From<faceprep::FacePrepError> for FacePrepError {
    fn from(e: faceprep::FacePrepError) -> Self {
        match e {
            faceprep::FacePrepError::DecodeError(msg) => FacePrepError::DecodeError { message: msg },
            faceprep::FacePrepError::EncodeError(msg) => FacePrepError::EncodeError { message: msg },
            faceprep::FacePrepError::ZeroDimensions => FacePrepError::ZeroDimensions,
            faceprep::FacePrepError::UnsupportedChannelCount(_) => {
                FacePrepError::UnsupportedChannelCount
            }
            faceprep::FacePrepError::SizeMismatch { .. } => FacePrepError::SizeMismatch,
            faceprep::FacePrepError::InvalidQuality(_) => FacePrepError::InvalidQuality,
            faceprep::FacePrepError::InvalidTargetSize { .. } => FacePrepError::InvalidTargetSize,
            faceprep::FacePrepError::InvalidObservation => FacePrepError::InvalidObservation,
            faceprep::FacePrepError::EmptyFaceRegion => FacePrepError::EmptyFaceRegion,
        }
    }
}

#[derive(uniffi::Record)]
pub struct FaceObservation {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
}

impl From<FaceObservation> for faceprep::FaceObservation {
    fn from(obs: FaceObservation) -> Self {
        faceprep::FaceObservation {
            x: obs.x,
            y: obs.y,
            width: obs.width,
            height: obs.height,
            confidence: obs.confidence,
        }
    }
}

#[derive(uniffi::Record)]
pub struct EncodedImage {
    /// PNG-encoded pixel data.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

#[derive(uniffi::Record)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(uniffi::Record)]
pub struct ProcessedFace {
    pub image: EncodedImage,
    pub region: FaceRegion,
}

/// Re-encode a processed buffer as PNG for the platform image layer.
fn encode_png(image: &faceprep::ImageBuffer) -> Result<EncodedImage, FacePrepError> {
    let data = faceprep::encode_image(image, &faceprep::EncodeFormat::Png, 1.0)?;
    Ok(EncodedImage {
        data,
        width: image.width(),
        height: image.height(),
        channels: image.channels(),
    })
}

/// Human-readable version of the vision backend linked into this binary.
#[uniffi::export]
pub fn backend_version() -> String {
    faceprep::backend_version()
}

/// Convert an encoded image (PNG, JPEG, ...) to single-channel grayscale.
#[uniffi::export]
pub fn grayscale(input: Vec<u8>) -> Result<EncodedImage, FacePrepError> {
    let image = faceprep::decode_image(&input)?;
    let gray = faceprep::grayscale(&image)?;
    encode_png(&gray)
}

/// Resize an encoded image to exactly `width` x `height`.
///
/// `interpolation` is the raw integer selector (0 nearest, 1 bilinear,
/// 2 bicubic, 3 area, 4 Lanczos); out-of-range values use the backend
/// default.
#[uniffi::export]
pub fn resize(
    input: Vec<u8>,
    width: u32,
    height: u32,
    interpolation: i32,
) -> Result<EncodedImage, FacePrepError> {
    let image = faceprep::decode_image(&input)?;
    let resized = faceprep::resize(
        &image,
        width,
        height,
        faceprep::Interpolation::from_raw(interpolation),
    )?;
    encode_png(&resized)
}

/// Crop the observed face region out of an encoded image and resize it to
/// `width` x `height`. `interpolation` takes the same raw selectors as
/// [`resize`].
///
/// Returns the processed image plus the pixel rectangle actually cropped
/// (after clamping to the image bounds).
#[uniffi::export]
pub fn preprocess_face(
    input: Vec<u8>,
    observation: FaceObservation,
    width: u32,
    height: u32,
    interpolation: i32,
) -> Result<ProcessedFace, FacePrepError> {
    let image = faceprep::decode_image(&input)?;

    let result = faceprep::FacePreprocessor::new(width, height)
        .interpolation(faceprep::Interpolation::from_raw(interpolation))
        .preprocess(&image, &observation.into())?;

    Ok(ProcessedFace {
        image: encode_png(&result.image)?,
        region: FaceRegion {
            x: result.region.x,
            y: result.region.y,
            width: result.region.width,
            height: result.region.height,
        },
    })
}
