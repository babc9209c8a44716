//! One-shot JPEG encoding for callers that don't need the session.
//!
//! ```typescript
//! import { encode_jpeg } from '@jpeg-squeeze/wasm';
//!
//! const jpeg = encode_jpeg(rgbPixels, width, height, 0.75);
//! console.log(`Encoded ${jpeg.byteLength} bytes`);
//! ```

use squeeze_core::{encode, QualityRatio};
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG.
///
/// `quality` is a ratio in 0-1 and is clamped like slider input.
///
/// # Errors
///
/// Returns an error if width or height is zero or the pixel buffer length
/// doesn't match `width * height * 3`.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: f64) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, jpeg_quality(quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The encoder's 1-100 quality for a 0-1 ratio.
#[wasm_bindgen]
pub fn jpeg_quality(ratio: f64) -> u8 {
    QualityRatio::new(ratio).to_jpeg_quality()
}
