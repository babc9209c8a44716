//! Pipeline configuration.
//!
//! Deserializable from a plain JS object (camelCase keys); every field is
//! optional and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::ratio::{Bounds, QualityRatio};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// MIME type attached to re-encoded payloads.
pub const JPEG_MIME: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Quiet period before a quality change triggers an encode.
    pub debounce_ms: u64,
    /// Quality used until the first slider event.
    pub initial_quality: QualityRatio,
    /// Range of raw slider values.
    pub slider: Bounds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            initial_quality: QualityRatio::default(),
            slider: Bounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.debounce_ms, 100);
        assert_eq!(config.initial_quality.value(), 0.5);
        assert_eq!(config.slider, Bounds::new(0.0, 100.0));
    }

    #[test]
    fn test_clone_with_overrides() {
        let mut config = PipelineConfig::default();
        config.debounce_ms = 250;
        config.initial_quality = QualityRatio::new(0.9);

        assert_ne!(config, PipelineConfig::default());
        assert_eq!(config.clone(), config);
    }
}
