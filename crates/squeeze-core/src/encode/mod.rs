//! Re-encoding for the compression preview.
//!
//! - [`encode_jpeg`] turns RGB pixels into JPEG bytes at a 1-100 quality.
//! - [`FrameEncoder`] is the black box the pipeline talks to; [`JpegFrameEncoder`]
//!   is its JPEG implementation.

mod frame;
mod jpeg;

pub use frame::{FrameEncoder, JpegFrameEncoder};
pub use jpeg::{encode_jpeg, EncodeError};
