//! jpeg-squeeze WASM - WebAssembly bindings for the preview pipeline
//!
//! # Module Structure
//!
//! - `session` - [`JsCompressionSession`], the debounced re-encode pipeline
//! - `urls` - `Blob`/object-URL handling for previews
//! - `encode` - one-shot JPEG encoding
//! - `format` - size labels and slider clamping
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCompressionSession } from '@jpeg-squeeze/wasm';
//!
//! await init();
//!
//! const session = new JsCompressionSession();
//! session.set_source(new Uint8Array(await file.arrayBuffer()), performance.now());
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod format;
mod session;
mod urls;

pub use encode::{encode_jpeg, jpeg_quality};
pub use format::{clamp, format_size};
pub use session::JsCompressionSession;
pub use urls::BrowserObjectUrls;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
