//! Browser object URLs backed by `Blob` and `URL.createObjectURL`.

use js_sys::{Array, Uint8Array};
use squeeze_core::ObjectUrls;
use wasm_bindgen::prelude::*;
use web_sys::{console, Blob, BlobPropertyBag, Url};

/// [`ObjectUrls`] for the browser main thread.
///
/// Every URL handed out keeps its `Blob` alive until the pipeline revokes it.
#[derive(Debug, Default)]
pub struct BrowserObjectUrls;

impl BrowserObjectUrls {
    fn blob(payload: &[u8], mime: Option<&str>) -> Result<Blob, JsValue> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(payload));

        match mime {
            Some(mime) => {
                let options = BlobPropertyBag::new();
                options.set_type(mime);
                Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            }
            None => Blob::new_with_u8_array_sequence(&parts),
        }
    }
}

impl ObjectUrls for BrowserObjectUrls {
    fn create(&mut self, payload: &[u8], mime: Option<&str>) -> Option<String> {
        match Self::blob(payload, mime).and_then(|blob| Url::create_object_url_with_blob(&blob)) {
            Ok(url) => Some(url),
            Err(e) => {
                console::warn_2(&JsValue::from_str("jpeg-squeeze: could not create object URL"), &e);
                None
            }
        }
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            console::warn_2(&JsValue::from_str("jpeg-squeeze: could not revoke object URL"), &e);
        }
    }
}
