//! Size formatting and clamping helpers for the slider and labels.

use squeeze_core::{ratio, size};
use wasm_bindgen::prelude::*;

/// Human-readable size, e.g. `format_size(1536000) === "1.46MB"`.
///
/// Negative and non-finite inputs format as `"0.00B"`.
#[wasm_bindgen]
pub fn format_size(bytes: f64) -> String {
    let bytes = if bytes.is_finite() { bytes.max(0.0) as u64 } else { 0 };
    size::format_size(bytes)
}

/// Clamp `value` into `[min, max]`, defaulting to `[0, 100]`.
#[wasm_bindgen]
pub fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let bounds = ratio::Bounds::default();
    ratio::clamp(value, min.unwrap_or(bounds.min), max.unwrap_or(bounds.max))
}
