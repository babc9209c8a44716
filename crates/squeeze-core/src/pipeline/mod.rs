//! The compression preview pipeline.
//!
//! [`CompressionPipeline`] is an explicit state machine driven by its host:
//!
//! 1. `set_source` / `set_quality` / `refresh` feed events in, each tagged with
//!    the host's monotonic clock in milliseconds.
//! 2. Quality changes go through a [`Debouncer`]; the host arms one timer for
//!    [`CompressionPipeline::next_deadline`] and calls `poll` when it fires.
//! 3. `poll` redraws the source onto the working [`Canvas`] and hands out an
//!    [`EncodeJob`]. The host runs it, synchronously or not, and passes the
//!    [`Completion`] back to `complete`.
//! 4. `view` renders the before/after sizes and preview URLs.
//!
//! Only the completion for the newest ticket is applied. Anything older, or
//! anything arriving after `teardown`, is dropped.

mod canvas;
mod config;
mod debounce;
mod job;
mod source;
mod urls;

pub use canvas::Canvas;
pub use config::{PipelineConfig, DEFAULT_DEBOUNCE_MS, JPEG_MIME};
pub use debounce::Debouncer;
pub use job::{Completion, EncodeJob, EncodedResult, Settlement, Ticket};
pub use source::SourceImage;
pub use urls::{MemoryObjectUrls, ObjectUrls};

use tracing::{debug, warn};

use crate::decode::DecodeError;
use crate::encode::FrameEncoder;
use crate::ratio::QualityRatio;
use crate::size::{format_size_or_placeholder, size_ratio};

/// Everything the UI shell needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineView {
    pub before_size: String,
    pub after_size: String,
    pub before_size_bytes: u64,
    pub after_size_bytes: u64,
    pub original_url: Option<String>,
    pub compressed_url: Option<String>,
    /// `after / before`, see [`crate::size::size_ratio`].
    pub size_ratio: f64,
    pub quality: QualityRatio,
}

pub struct CompressionPipeline<U: ObjectUrls> {
    config: PipelineConfig,
    urls: U,
    source: Option<SourceImage>,
    original_url: Option<String>,
    quality: QualityRatio,
    canvas: Canvas,
    debouncer: Debouncer<QualityRatio>,
    generation: u64,
    awaiting: Option<Ticket>,
    last_result: Option<EncodedResult>,
    /// Last successfully encoded preview; survives failed encodes.
    compressed_url: Option<String>,
    closed: bool,
}

impl<U: ObjectUrls> CompressionPipeline<U> {
    pub fn new(config: PipelineConfig, urls: U) -> Self {
        Self {
            quality: config.initial_quality,
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            urls,
            source: None,
            original_url: None,
            canvas: Canvas::new(),
            generation: 0,
            awaiting: None,
            last_result: None,
            compressed_url: None,
            closed: false,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn urls(&self) -> &U {
        &self.urls
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn quality(&self) -> QualityRatio {
        self.quality
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn last_result(&self) -> Option<&EncodedResult> {
        self.last_result.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Replace the source image.
    ///
    /// On success the canvas is sized to the image's natural dimensions, the
    /// previous source and its results are released, and the current quality
    /// is re-issued through the debounced channel. A payload that fails to
    /// decode leaves the pipeline untouched.
    pub fn set_source(&mut self, bytes: Vec<u8>, now: u64) -> Result<(), DecodeError> {
        if self.closed {
            debug!("set_source after teardown ignored");
            return Ok(());
        }

        let source = SourceImage::decode(bytes)?;
        let (width, height) = source.dimensions();
        debug!(width, height, bytes = source.byte_len(), "source loaded");

        self.release_source();
        self.release_result();

        self.original_url = self.urls.create(source.bytes(), None);
        self.canvas.size_to(width, height);
        self.source = Some(source);
        self.debouncer.push(self.quality, now);
        Ok(())
    }

    /// Store a new quality ratio (clamped into `[0, 1]`) and schedule an encode.
    pub fn set_quality(&mut self, raw: f64, now: u64) {
        if self.closed {
            return;
        }
        self.quality = QualityRatio::new(raw);
        self.debouncer.push(self.quality, now);
    }

    /// Like [`Self::set_quality`], for a raw value in the configured slider range.
    pub fn set_slider(&mut self, raw: f64, now: u64) {
        let ratio = QualityRatio::from_slider(raw, self.config.slider);
        self.set_quality(ratio.value(), now);
    }

    /// Re-issue the current quality, e.g. after a viewport resize.
    pub fn refresh(&mut self, now: u64) {
        if self.closed {
            return;
        }
        self.debouncer.push(self.quality, now);
    }

    /// When the host should next call [`Self::poll`].
    pub fn next_deadline(&self) -> Option<u64> {
        if self.closed {
            return None;
        }
        self.debouncer.deadline()
    }

    /// Release the settled quality value as an encode job.
    ///
    /// Returns `None` while the debounce window is still open, when nothing is
    /// pending, when no source is loaded, or after teardown.
    pub fn poll(&mut self, now: u64) -> Option<EncodeJob> {
        if self.closed {
            return None;
        }

        let quality = self.debouncer.poll(now)?;
        let Some(source) = &self.source else {
            debug!(quality = quality.value(), "quality settled with no source loaded");
            return None;
        };

        self.canvas.draw(source.frame());
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.awaiting = Some(ticket);

        debug!(generation = ticket.0, quality = quality.value(), "encode issued");
        Some(EncodeJob {
            ticket,
            quality,
            frame: self.canvas.snapshot(),
        })
    }

    /// Apply an encoder's answer if it belongs to the newest request.
    pub fn complete(&mut self, completion: Completion) -> Settlement {
        if self.closed {
            debug!(generation = completion.ticket.0, "completion after teardown dropped");
            return Settlement::Closed;
        }
        if self.awaiting != Some(completion.ticket) {
            debug!(
                generation = completion.ticket.0,
                newest = self.generation,
                "stale completion dropped"
            );
            return Settlement::Stale;
        }
        self.awaiting = None;

        let Completion {
            quality, payload, ..
        } = completion;

        let result = match payload {
            Some(bytes) if !bytes.is_empty() => match self.urls.create(&bytes, Some(JPEG_MIME)) {
                Some(url) => {
                    if let Some(old) = self.compressed_url.replace(url.clone()) {
                        self.urls.revoke(&old);
                    }
                    EncodedResult {
                        url: Some(url),
                        size_bytes: bytes.len() as u64,
                        quality,
                    }
                }
                // Size and preview must come from the same payload.
                None => {
                    warn!(quality = quality.value(), "no object url for encoded payload");
                    EncodedResult::empty(quality)
                }
            },
            _ => {
                warn!(quality = quality.value(), "encoder returned no payload");
                EncodedResult::empty(quality)
            }
        };

        self.last_result = Some(result);
        Settlement::Applied
    }

    /// Poll, encode synchronously and complete in one step.
    pub fn pump<E: FrameEncoder + ?Sized>(&mut self, now: u64, encoder: &E) -> Option<Settlement> {
        let job = self.poll(now)?;
        Some(self.complete(job.run(encoder)))
    }

    /// Cancel pending work and release every handle. Further calls are no-ops.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.debouncer.cancel();
        self.awaiting = None;
        self.release_result();
        self.release_source();
        debug!("pipeline torn down");
    }

    pub fn view(&self) -> PipelineView {
        let before = self.source.as_ref().map(SourceImage::byte_len);
        let after = self
            .last_result
            .as_ref()
            .filter(|r| !r.is_empty())
            .map(|r| r.size_bytes);

        PipelineView {
            before_size: format_size_or_placeholder(before),
            after_size: format_size_or_placeholder(after),
            before_size_bytes: before.unwrap_or(0),
            after_size_bytes: after.unwrap_or(0),
            original_url: self.original_url.clone(),
            compressed_url: self.compressed_url.clone(),
            size_ratio: size_ratio(before.unwrap_or(0), after.unwrap_or(0)),
            quality: self.quality,
        }
    }

    fn release_source(&mut self) {
        if let Some(url) = self.original_url.take() {
            self.urls.revoke(&url);
        }
        self.source = None;
    }

    fn release_result(&mut self) {
        if let Some(url) = self.compressed_url.take() {
            self.urls.revoke(&url);
        }
        self.awaiting = None;
        self.last_result = None;
    }
}

impl<U: ObjectUrls> Drop for CompressionPipeline<U> {
    fn drop(&mut self) {
        self.teardown();
    }
}
