use faceprep_mobile::*;

fn make_test_png(width: u32, height: u32) -> Vec<u8> {
    use image::codecs::png::PngEncoder;
    use image::{ImageEncoder, RgbImage};

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ]);
    }
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

#[test]
fn backend_version_works() {
    let version = backend_version();
    assert!(version.starts_with("image "));
}

#[test]
fn grayscale_works() {
    let png = make_test_png(40, 30);
    let result = grayscale(png).unwrap();
    assert_eq!(result.width, 40);
    assert_eq!(result.height, 30);
    assert_eq!(result.channels, 1);
    // PNG signature
    assert_eq!(&result.data[1..4], b"PNG");
}

#[test]
fn resize_works() {
    let png = make_test_png(100, 100);
    let result = resize(png, 48, 64, 1).unwrap();
    assert_eq!(result.width, 48);
    assert_eq!(result.height, 64);
    assert_eq!(result.channels, 3);
}

#[test]
fn resize_with_out_of_range_selector_uses_default() {
    let png = make_test_png(100, 100);
    let result = resize(png, 25, 25, 42).unwrap();
    assert_eq!(result.width, 25);
    assert_eq!(result.height, 25);
}

#[test]
fn resize_rejects_zero_target() {
    let png = make_test_png(100, 100);
    let result = resize(png, 0, 64, 1);
    assert!(matches!(result, Err(FacePrepError::InvalidTargetSize)));
}

#[test]
fn preprocess_face_works() {
    let png = make_test_png(100, 100);
    let observation = FaceObservation {
        x: 0.1,
        y: 0.1,
        width: 0.5,
        height: 0.5,
        confidence: 0.9,
    };

    let result = preprocess_face(png, observation, 64, 64, 1).unwrap();
    assert_eq!(result.image.width, 64);
    assert_eq!(result.image.height, 64);
    assert_eq!(result.region.x, 10);
    assert_eq!(result.region.y, 10);
    assert_eq!(result.region.width, 50);
    assert_eq!(result.region.height, 50);
}

#[test]
fn preprocess_face_clamps_out_of_bounds_box() {
    let png = make_test_png(100, 100);
    let observation = FaceObservation {
        x: 0.9,
        y: 0.9,
        width: 0.5,
        height: 0.5,
        confidence: 0.9,
    };

    let result = preprocess_face(png, observation, 32, 32, 0).unwrap();
    assert_eq!(result.region.x, 90);
    assert_eq!(result.region.y, 90);
    assert_eq!(result.region.width, 10);
    assert_eq!(result.region.height, 10);
}

#[test]
fn preprocess_face_rejects_empty_region() {
    let png = make_test_png(100, 100);
    let observation = FaceObservation {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        confidence: 0.9,
    };

    let result = preprocess_face(png, observation, 64, 64, 1);
    assert!(matches!(result, Err(FacePrepError::EmptyFaceRegion)));
}

#[test]
fn invalid_input_returns_error() {
    let result = grayscale(b"not an image".to_vec());
    assert!(matches!(result, Err(FacePrepError::DecodeError { .. })));
}
