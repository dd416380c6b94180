//! Run the preprocessing pipeline on a synthetic portrait and write the
//! intermediate results as PNGs.
//!
//! Usage:
//!   cargo run --example preprocess_demo
//!
//! Output goes to `demo_out/` in the working directory.

use faceprep::{EncodeFormat, FaceObservation, FacePreprocessor, ImageBuffer, Interpolation};

/// A flat background with a darker ellipse roughly where a face would be.
fn synthetic_portrait(width: u32, height: u32) -> ImageBuffer {
    let (cx, cy) = (width as f64 * 0.5, height as f64 * 0.4);
    let (rx, ry) = (width as f64 * 0.18, height as f64 * 0.22);

    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let dx = (x as f64 - cx) / rx;
            let dy = (y as f64 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                data.extend_from_slice(&[205, 170, 140]);
            } else {
                data.extend_from_slice(&[90, 110, 140]);
            }
        }
    }
    ImageBuffer::from_raw(width, height, 3, data).unwrap()
}

fn main() {
    println!("backend: {}", faceprep::backend_version());

    let out_dir = std::path::Path::new("demo_out");
    std::fs::create_dir_all(out_dir).unwrap();

    let portrait = synthetic_portrait(320, 400);

    // The ellipse above sits at roughly this normalized box, as a detector
    // would report it.
    let observation = FaceObservation {
        x: 0.32,
        y: 0.18,
        width: 0.36,
        height: 0.44,
        confidence: 0.99,
    };

    let gray = faceprep::grayscale(&portrait).unwrap();
    let small = faceprep::resize(&portrait, 160, 200, Interpolation::Lanczos).unwrap();
    let face = FacePreprocessor::new(112, 112)
        .interpolation(Interpolation::Bilinear)
        .preprocess(&portrait, &observation)
        .unwrap();

    println!(
        "face crop: ({}, {}) {}x{} -> {}x{}",
        face.region.x,
        face.region.y,
        face.region.width,
        face.region.height,
        face.image.width(),
        face.image.height(),
    );

    let planar = faceprep::interleaved_to_planar(
        face.image.data(),
        face.image.width() as usize,
        face.image.height() as usize,
        face.image.channels() as usize,
    );
    println!("planar input: {} elements", planar.len());

    for (name, image) in [
        ("portrait.png", &portrait),
        ("grayscale.png", &gray),
        ("resized.png", &small),
        ("face_crop.png", &face.image),
    ] {
        let encoded = faceprep::encode_image(image, &EncodeFormat::Png, 1.0).unwrap();
        let path = out_dir.join(name);
        std::fs::write(&path, &encoded).unwrap();
        println!(
            "  {name}: {}x{}, {} bytes",
            image.width(),
            image.height(),
            encoded.len(),
        );
    }
}
