//! jpeg-squeeze core
//!
//! Everything behind the before/after JPEG preview that does not need a
//! browser: decoding the picked image, the debounced re-encode pipeline,
//! quality-ratio clamping and human-readable sizes.
//!
//! The WASM crate wraps [`pipeline::CompressionPipeline`] with browser object
//! URLs; native hosts and tests use [`pipeline::MemoryObjectUrls`].

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod ratio;
pub mod size;

pub use decode::{decode_image, DecodeError, DecodedImage};
pub use encode::{encode_jpeg, EncodeError, FrameEncoder, JpegFrameEncoder};
pub use pipeline::{
    CompressionPipeline, EncodeJob, EncodedResult, ObjectUrls, PipelineConfig, PipelineView,
    Settlement,
};
pub use ratio::{clamp, Bounds, QualityRatio};
pub use size::{format_size, size_ratio};
