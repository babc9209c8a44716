//! Encode requests and their results.

use crate::decode::DecodedImage;
use crate::encode::FrameEncoder;
use crate::ratio::QualityRatio;

/// Identifies one issued encode request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A request to encode one canvas snapshot at one quality.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    pub(crate) ticket: Ticket,
    pub(crate) quality: QualityRatio,
    pub(crate) frame: DecodedImage,
}

impl EncodeJob {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn quality(&self) -> QualityRatio {
        self.quality
    }

    pub fn frame(&self) -> &DecodedImage {
        &self.frame
    }

    /// Run the encoder and package its answer for [`super::CompressionPipeline::complete`].
    pub fn run<E: FrameEncoder + ?Sized>(self, encoder: &E) -> Completion {
        let payload = encoder.encode(&self.frame, self.quality);
        self.finish(payload)
    }

    /// Package a payload produced elsewhere, e.g. by an asynchronous host encoder.
    pub fn finish(self, payload: Option<Vec<u8>>) -> Completion {
        Completion {
            ticket: self.ticket,
            quality: self.quality,
            payload,
        }
    }
}

/// The encoder's answer to an [`EncodeJob`].
#[derive(Debug, Clone)]
pub struct Completion {
    pub(crate) ticket: Ticket,
    pub(crate) quality: QualityRatio,
    pub(crate) payload: Option<Vec<u8>>,
}

impl Completion {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

/// What the pipeline did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Published as the new result.
    Applied,
    /// Superseded by a newer request or a new source; dropped.
    Stale,
    /// The pipeline was torn down; dropped.
    Closed,
}

/// The published outcome of the newest encode.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedResult {
    /// Displayable handle for the payload. `None` when the encoder failed.
    pub url: Option<String>,
    pub size_bytes: u64,
    pub quality: QualityRatio,
}

impl EncodedResult {
    /// The defined state for an encoder that produced nothing.
    pub fn empty(quality: QualityRatio) -> Self {
        Self {
            url: None,
            size_bytes: 0,
            quality,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.size_bytes == 0
    }
}
