//! Face-region image preprocessing for vision pipelines.
//!
//! Converts images between an app-facing representation and the vision
//! backend, and exposes the small set of operations a face pipeline needs
//! before inference: grayscale conversion, resizing, interleaved→planar
//! layout transform, and cropping a detected face region to a network's
//! input size.
//!
//! # Example
//!
//! ```no_run
//! use faceprep::{FaceObservation, FacePreprocessor, Interpolation};
//!
//! let bytes = std::fs::read("frame.png").unwrap();
//! let image = faceprep::decode_image(&bytes).unwrap();
//!
//! // Observation from an external face detector, normalized to [0, 1].
//! let face = FaceObservation {
//!     x: 0.32,
//!     y: 0.18,
//!     width: 0.28,
//!     height: 0.35,
//!     confidence: 0.97,
//! };
//!
//! let result = FacePreprocessor::new(224, 224)
//!     .interpolation(Interpolation::Bilinear)
//!     .preprocess(&image, &face)
//!     .unwrap();
//!
//! // Planar layout for the inference backend.
//! let planar = faceprep::interleaved_to_planar(
//!     result.image.data(),
//!     result.image.width() as usize,
//!     result.image.height() as usize,
//!     result.image.channels() as usize,
//! );
//! println!("fed {} elements, crop was {:?}", planar.len(), result.region);
//! ```
#![warn(missing_docs)]

mod buffer;
mod codec;
mod error;
mod layout;
mod ops;
mod preprocess;

/// The neutral image value type used by every operation.
pub use buffer::ImageBuffer;
/// Decoding and encoding between bytes and [`ImageBuffer`].
pub use codec::{decode_image, encode_image, EncodeFormat};
/// Error type returned by faceprep operations.
pub use error::FacePrepError;
/// Interleaved/planar layout transforms.
pub use layout::{interleaved_to_planar, planar_to_interleaved};
/// Pixel operations and the interpolation selector.
pub use ops::{grayscale, resize, Interpolation};
/// Face-region preprocessing types.
pub use preprocess::{FaceObservation, FacePreprocessor, PixelRect, ProcessedFace};

/// Human-readable version of the vision backend linked into this binary.
///
/// Reports the `image` crate version resolved at build time, e.g.
/// `"image 0.25.5"`. Purely informational, for diagnostics and logging.
pub fn backend_version() -> String {
    format!("image {}", env!("FACEPREP_IMAGE_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_version_is_non_empty() {
        let version = backend_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("image "));
    }
}
