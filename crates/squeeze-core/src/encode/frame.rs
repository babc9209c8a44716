//! The encoder seam used by the pipeline.
//!
//! The pipeline never calls a codec directly. It hands a canvas snapshot and a
//! quality ratio to a [`FrameEncoder`] and treats the answer as opaque: either
//! a payload or nothing.

use tracing::warn;

use super::encode_jpeg;
use crate::decode::DecodedImage;
use crate::ratio::QualityRatio;

/// A black-box encoder for canvas frames.
pub trait FrameEncoder {
    /// Encode `frame` at `quality`. `None` means the encoder produced no payload.
    fn encode(&self, frame: &DecodedImage, quality: QualityRatio) -> Option<Vec<u8>>;
}

impl<F> FrameEncoder for F
where
    F: Fn(&DecodedImage, QualityRatio) -> Option<Vec<u8>>,
{
    fn encode(&self, frame: &DecodedImage, quality: QualityRatio) -> Option<Vec<u8>> {
        self(frame, quality)
    }
}

/// Baseline JPEG encoder, the equivalent of `canvas.toBlob(cb, "image/jpeg", q)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegFrameEncoder;

impl FrameEncoder for JpegFrameEncoder {
    fn encode(&self, frame: &DecodedImage, quality: QualityRatio) -> Option<Vec<u8>> {
        match encode_jpeg(
            &frame.pixels,
            frame.width,
            frame.height,
            quality.to_jpeg_quality(),
        ) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(
                    width = frame.width,
                    height = frame.height,
                    error = %e,
                    "jpeg encode produced no payload"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_frame_encoder() {
        let frame = DecodedImage::new(4, 4, vec![200u8; 4 * 4 * 3]);
        let payload = JpegFrameEncoder.encode(&frame, QualityRatio::new(0.8)).unwrap();
        assert_eq!(&payload[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_jpeg_frame_encoder_empty_frame_yields_nothing() {
        let frame = DecodedImage::default();
        assert!(JpegFrameEncoder.encode(&frame, QualityRatio::default()).is_none());
    }

    #[test]
    fn test_closure_encoder() {
        let stub = |_: &DecodedImage, q: QualityRatio| Some(vec![0u8; q.to_jpeg_quality() as usize]);
        let frame = DecodedImage::default();
        assert_eq!(stub.encode(&frame, QualityRatio::new(0.3)).map(|p| p.len()), Some(30));
    }
}
