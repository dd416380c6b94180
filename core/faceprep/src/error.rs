use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacePrepError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("unsupported channel count: {0} (expected 1, 3, or 4)")]
    UnsupportedChannelCount(u8),

    #[error("pixel data length {actual} does not match dimensions (expected {expected})")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("quality must be between 0.0 and 1.0, got {0}")]
    InvalidQuality(f32),

    #[error("target dimensions must be > 0, got {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },

    #[error("face observation contains non-finite values")]
    InvalidObservation,

    #[error("face region is empty after clamping to image bounds")]
    EmptyFaceRegion,
}
