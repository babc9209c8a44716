//! Source decoding for the re-encode pipeline.
//!
//! Turns the user's payload (a JPEG or PNG file, or a fetched sample asset)
//! into the opaque RGB frame that gets drawn onto the working canvas.
//! Decoding runs synchronously on the UI thread.

mod source;
mod types;

pub use source::decode_image;
pub use types::{DecodeError, DecodedImage, Orientation};
