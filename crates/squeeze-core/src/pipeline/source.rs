//! The loaded source image.

use crate::decode::{decode_image, DecodeError, DecodedImage};

/// The user's original payload together with its decoded frame.
///
/// Replaced wholesale on every new selection, never mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Vec<u8>,
    frame: DecodedImage,
}

impl SourceImage {
    /// Decode `bytes` into a source image.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let frame = decode_image(&bytes)?;
        Ok(Self { bytes, frame })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the original payload, not of the decoded pixels.
    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn frame(&self) -> &DecodedImage {
        &self.frame
    }

    /// Natural `(width, height)` of the decoded frame.
    pub fn dimensions(&self) -> (u32, u32) {
        self.frame.dimensions()
    }
}
