//! The compression session exposed to the UI shell.
//!
//! The shell owns the DOM: it forwards file selections, slider events and
//! resizes, arms a single `setTimeout` for `nextDeadline()`, and re-renders
//! from the getters after every successful `set_source()` (before size and
//! original preview) and whenever `tick()` returns `true`.
//!
//! ```typescript
//! const session = new JsCompressionSession({ debounceMs: 100 });
//! session.set_source(new Uint8Array(await file.arrayBuffer()), performance.now());
//! render(session);
//! schedule();
//!
//! slider.oninput = () => session.set_slider(slider.valueAsNumber, performance.now());
//!
//! function schedule() {
//!   const deadline = session.next_deadline();
//!   if (deadline === undefined) return;
//!   setTimeout(() => {
//!     if (session.tick(performance.now())) render(session);
//!     schedule();
//!   }, Math.max(0, deadline - performance.now()));
//! }
//! ```

use squeeze_core::pipeline::{CompressionPipeline, PipelineConfig, Settlement};
use squeeze_core::JpegFrameEncoder;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::urls::BrowserObjectUrls;

#[wasm_bindgen]
pub struct JsCompressionSession {
    inner: CompressionPipeline<BrowserObjectUrls>,
}

#[wasm_bindgen]
impl JsCompressionSession {
    /// Create a session.
    ///
    /// `config` is an optional `{ debounceMs, initialQuality, slider: { min, max } }`
    /// object; missing keys use their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCompressionSession, JsValue> {
        let config = parse_config(config)?;
        Ok(JsCompressionSession {
            inner: CompressionPipeline::new(config, BrowserObjectUrls),
        })
    }

    /// Load a new source image. Fails if the bytes cannot be decoded.
    pub fn set_source(&mut self, bytes: Vec<u8>, now: f64) -> Result<(), JsValue> {
        self.inner.set_source(bytes, to_millis(now)).map_err(|e| {
            let message = JsValue::from_str(&e.to_string());
            console::error_2(&JsValue::from_str("jpeg-squeeze: source rejected"), &message);
            message
        })
    }

    /// Set the quality ratio directly (clamped into 0-1).
    pub fn set_quality(&mut self, ratio: f64, now: f64) {
        self.inner.set_quality(ratio, to_millis(now));
    }

    /// Set the quality from a raw slider value in the configured range.
    pub fn set_slider(&mut self, raw: f64, now: f64) {
        self.inner.set_slider(raw, to_millis(now));
    }

    /// Re-issue the current quality, e.g. from a `resize` listener.
    pub fn refresh(&mut self, now: f64) {
        self.inner.refresh(to_millis(now));
    }

    /// Clock value at which `tick` should next be called.
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline().map(|ms| ms as f64)
    }

    /// Encode the settled quality, if due. Returns `true` when the view changed.
    pub fn tick(&mut self, now: f64) -> bool {
        matches!(
            self.inner.pump(to_millis(now), &JpegFrameEncoder),
            Some(Settlement::Applied)
        )
    }

    /// Cancel pending work and revoke every object URL.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn before_size(&self) -> String {
        self.inner.view().before_size
    }

    #[wasm_bindgen(getter)]
    pub fn after_size(&self) -> String {
        self.inner.view().after_size
    }

    #[wasm_bindgen(getter)]
    pub fn before_size_bytes(&self) -> f64 {
        self.inner.view().before_size_bytes as f64
    }

    #[wasm_bindgen(getter)]
    pub fn after_size_bytes(&self) -> f64 {
        self.inner.view().after_size_bytes as f64
    }

    /// Object URL of the original payload.
    #[wasm_bindgen(getter)]
    pub fn original_url(&self) -> Option<String> {
        self.inner.view().original_url
    }

    /// Object URL of the newest successful re-encode.
    #[wasm_bindgen(getter)]
    pub fn compressed_url(&self) -> Option<String> {
        self.inner.view().compressed_url
    }

    /// Re-encoded size divided by original size.
    #[wasm_bindgen(getter)]
    pub fn size_ratio(&self) -> f64 {
        self.inner.view().size_ratio
    }

    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f64 {
        self.inner.quality().value()
    }

    /// Natural width of the working canvas.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.canvas().width()
    }

    /// Natural height of the working canvas.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.canvas().height()
    }
}

fn parse_config(value: JsValue) -> Result<PipelineConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PipelineConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid session config: {}", e)))
}

/// Convert a `performance.now()` style timestamp into whole milliseconds.
fn to_millis(now: f64) -> u64 {
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}


/// Browser-only tests. Run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_jpeg() -> Vec<u8> {
        let pixels: Vec<u8> = (0..16 * 16 * 3).map(|i| (i * 13 % 256) as u8).collect();
        squeeze_core::encode_jpeg(&pixels, 16, 16, 95).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_default_config() {
        let session = JsCompressionSession::new(JsValue::UNDEFINED).unwrap();
        assert_eq!(session.quality(), 0.5);
        assert_eq!(session.before_size(), "-");
        assert_eq!(session.after_size(), "-");
    }

    #[wasm_bindgen_test]
    fn test_partial_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"debounceMs".into(), &JsValue::from_f64(250.0)).unwrap();
        let mut session = JsCompressionSession::new(config.into()).unwrap();

        session.set_source(sample_jpeg(), 0.0).unwrap();
        assert_eq!(session.next_deadline(), Some(250.0));
    }

    #[wasm_bindgen_test]
    fn test_partial_slider_bounds() {
        let slider = js_sys::Object::new();
        js_sys::Reflect::set(&slider, &"min".into(), &JsValue::from_f64(50.0)).unwrap();
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"slider".into(), &slider).unwrap();

        let mut session = JsCompressionSession::new(config.into()).unwrap();
        session.set_slider(75.0, 0.0);
        assert_eq!(session.quality(), 0.5);
    }

    #[wasm_bindgen_test]
    fn test_invalid_config() {
        assert!(JsCompressionSession::new(JsValue::from_str("nope")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_full_cycle() {
        let mut session = JsCompressionSession::new(JsValue::NULL).unwrap();
        session.set_source(sample_jpeg(), 0.0).unwrap();
        assert_eq!((session.width(), session.height()), (16, 16));
        assert!(session.original_url().is_some());
        assert_ne!(session.before_size(), "-");
        assert_eq!(session.after_size(), "-");

        session.set_slider(80.0, 10.0);
        assert!(!session.tick(50.0));
        assert!(session.tick(110.0));

        assert!(session.after_size_bytes() > 0.0);
        assert!(session.compressed_url().unwrap().starts_with("blob:"));

        session.teardown();
        assert!(session.compressed_url().is_none());
        assert!(!session.tick(10_000.0));
    }

    #[wasm_bindgen_test]
    fn test_bad_source() {
        let mut session = JsCompressionSession::new(JsValue::UNDEFINED).unwrap();
        assert!(session.set_source(vec![1, 2, 3], 0.0).is_err());
        assert_eq!(session.before_size(), "-");
    }
}
