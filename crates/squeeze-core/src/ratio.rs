//! Quality ratio handling.
//!
//! The UI slider produces raw numbers in its own range; the encoder wants a
//! ratio in `[0, 1]`. Everything that crosses that boundary goes through
//! [`clamp`] first.

use serde::{Deserialize, Serialize};

/// Clamp `value` into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, otherwise `value`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Inclusive numeric range, e.g. the range of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into these bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }

    /// Width of the range. Zero for degenerate bounds.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }
}

/// Encoder quality in `[0, 1]`. Higher means a larger, more faithful output.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct QualityRatio(f64);

impl QualityRatio {
    pub const MIN: QualityRatio = QualityRatio(0.0);
    pub const MAX: QualityRatio = QualityRatio(1.0);

    /// Build a ratio from any number, clamping into `[0, 1]`.
    ///
    /// NaN is treated as the minimum.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        Self(clamp(raw, 0.0, 1.0))
    }

    /// Normalize a raw slider value from `bounds` into a ratio.
    pub fn from_slider(raw: f64, bounds: Bounds) -> Self {
        let span = bounds.span();
        if span == 0.0 {
            return Self::MIN;
        }
        Self::new((bounds.clamp(raw) - bounds.min) / span)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Map onto the JPEG encoder's integer scale (1-100).
    pub fn to_jpeg_quality(self) -> u8 {
        (self.0 * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for QualityRatio {
    fn default() -> Self {
        Self(0.5)
    }
}

impl From<f64> for QualityRatio {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<QualityRatio> for f64 {
    fn from(value: QualityRatio) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
        assert_eq!(clamp(50.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_clamp_outside_range() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(250.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamp_at_edges() {
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 100.0);
        assert_eq!(bounds.clamp(120.0), 100.0);
    }

    #[test]
    fn test_quality_default() {
        assert_eq!(QualityRatio::default().value(), 0.5);
    }

    #[test]
    fn test_quality_clamps() {
        assert_eq!(QualityRatio::new(2.0), QualityRatio::MAX);
        assert_eq!(QualityRatio::new(-1.0), QualityRatio::MIN);
        assert_eq!(QualityRatio::new(f64::NAN), QualityRatio::MIN);
        assert_eq!(QualityRatio::new(f64::INFINITY), QualityRatio::MAX);
    }

    #[test]
    fn test_quality_from_slider() {
        let bounds = Bounds::default();
        assert_eq!(QualityRatio::from_slider(0.0, bounds).value(), 0.0);
        assert_eq!(QualityRatio::from_slider(25.0, bounds).value(), 0.25);
        assert_eq!(QualityRatio::from_slider(100.0, bounds).value(), 1.0);
        assert_eq!(QualityRatio::from_slider(140.0, bounds).value(), 1.0);

        let offset = Bounds::new(10.0, 20.0);
        assert_eq!(QualityRatio::from_slider(15.0, offset).value(), 0.5);
    }

    #[test]
    fn test_quality_from_degenerate_slider() {
        let bounds = Bounds::new(5.0, 5.0);
        assert_eq!(QualityRatio::from_slider(5.0, bounds), QualityRatio::MIN);
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(QualityRatio::new(0.0).to_jpeg_quality(), 1);
        assert_eq!(QualityRatio::new(0.5).to_jpeg_quality(), 50);
        assert_eq!(QualityRatio::new(0.904).to_jpeg_quality(), 90);
        assert_eq!(QualityRatio::new(1.0).to_jpeg_quality(), 100);
    }
}
