/// Reorder an interleaved-channel buffer into planar-channel layout.
///
/// The input is row-major with each pixel's channels contiguous
/// (`in[y][x][c]`); the output holds one full plane per channel
/// (`out[c][y][x]`). Element values are copied unchanged; this is a pure
/// reshape, and `out[c * H * W + y * W + x] == in[(y * W + x) * C + c]`
/// for every valid index.
///
/// # Panics
///
/// Panics if `data.len() != width * height * channels`. A mis-sized buffer
/// here is a caller bug, not recoverable input.
pub fn interleaved_to_planar<T: Copy>(
    data: &[T],
    width: usize,
    height: usize,
    channels: usize,
) -> Vec<T> {
    let plane = width * height;
    assert_eq!(
        data.len(),
        plane * channels,
        "buffer length {} does not match {width}x{height}x{channels}",
        data.len(),
    );

    let mut out = Vec::with_capacity(data.len());
    for c in 0..channels {
        for pixel in 0..plane {
            out.push(data[pixel * channels + c]);
        }
    }
    out
}

/// Inverse of [`interleaved_to_planar`]: reorder a planar-channel buffer
/// back into interleaved layout.
///
/// # Panics
///
/// Panics if `data.len() != width * height * channels`.
pub fn planar_to_interleaved<T: Copy>(
    data: &[T],
    width: usize,
    height: usize,
    channels: usize,
) -> Vec<T> {
    let plane = width * height;
    assert_eq!(
        data.len(),
        plane * channels,
        "buffer length {} does not match {width}x{height}x{channels}",
        data.len(),
    );

    let mut out = Vec::with_capacity(data.len());
    for pixel in 0..plane {
        for c in 0..channels {
            out.push(data[c * plane + pixel]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_reorders_small_rgb() {
        // 2x1 image, 3 channels: pixels (r0,g0,b0), (r1,g1,b1)
        let interleaved = [10u8, 20, 30, 11, 21, 31];
        let planar = interleaved_to_planar(&interleaved, 2, 1, 3);
        assert_eq!(planar, vec![10, 11, 20, 21, 30, 31]);
    }

    #[test]
    fn index_contract_holds() {
        let (w, h, c) = (4usize, 3usize, 3usize);
        let interleaved: Vec<u8> = (0..(w * h * c) as u8).collect();
        let planar = interleaved_to_planar(&interleaved, w, h, c);

        for ch in 0..c {
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(
                        planar[ch * h * w + y * w + x],
                        interleaved[(y * w + x) * c + ch],
                        "mismatch at c={ch} y={y} x={x}"
                    );
                }
            }
        }
    }

    #[test]
    fn round_trip_is_exact() {
        let interleaved: Vec<u8> = (0..60).map(|i| (i * 7 % 251) as u8).collect();
        let planar = interleaved_to_planar(&interleaved, 5, 4, 3);
        let back = planar_to_interleaved(&planar, 5, 4, 3);
        assert_eq!(back, interleaved);
    }

    #[test]
    fn round_trip_is_exact_for_f32() {
        let interleaved: Vec<f32> = (0..24).map(|i| i as f32 * 0.5).collect();
        let planar = interleaved_to_planar(&interleaved, 2, 4, 3);
        let back = planar_to_interleaved(&planar, 2, 4, 3);
        assert_eq!(back, interleaved);
    }

    #[test]
    fn single_channel_is_identity() {
        let data: Vec<u8> = (0..12).collect();
        assert_eq!(interleaved_to_planar(&data, 4, 3, 1), data);
        assert_eq!(planar_to_interleaved(&data, 4, 3, 1), data);
    }

    #[test]
    fn empty_buffer_is_valid() {
        let data: Vec<u8> = vec![];
        assert!(interleaved_to_planar(&data, 0, 0, 3).is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn mismatched_length_panics() {
        let data = [0u8; 11];
        interleaved_to_planar(&data, 2, 2, 3);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn mismatched_length_panics_on_inverse() {
        let data = [0u8; 13];
        planar_to_interleaved(&data, 2, 2, 3);
    }
}
