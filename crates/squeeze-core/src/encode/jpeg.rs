//! JPEG encoding backed by the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is on the encoder's 1-100 scale; out-of-range values are
/// clamped. Use [`crate::QualityRatio::to_jpeg_quality`] to get there from a
/// slider ratio.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x ^ y) & 0xFF) as u8);
            }
        }
        pixels
    }

    #[test]
    fn test_encode_has_jpeg_markers() {
        let jpeg = encode_jpeg(&[128u8; 32 * 32 * 3], 32, 32, 80).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_higher_quality_is_larger_for_detailed_image() {
        let pixels = gradient(64, 64);

        let low = encode_jpeg(&pixels, 64, 64, 10).unwrap();
        let high = encode_jpeg(&pixels, 64, 64, 100).unwrap();

        assert!(high.len() > low.len(), "low={} high={}", low.len(), high.len());
    }

    #[test]
    fn test_quality_out_of_range_is_clamped() {
        let pixels = [128u8; 8 * 8 * 3];
        assert!(encode_jpeg(&pixels, 8, 8, 0).is_ok());
        assert!(encode_jpeg(&pixels, 8, 8, 255).is_ok());
    }

    #[test]
    fn test_pixel_length_mismatch() {
        let result = encode_jpeg(&[0u8; 10], 2, 2, 90);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 12,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 4, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 4, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}
