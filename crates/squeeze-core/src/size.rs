//! Human-readable byte sizes.
//!
//! Sizes are scaled by powers of 1024 and always rendered with two fractional
//! digits and no space before the unit, e.g. `"1.46MB"`.
//!
//! A value is promoted to the next unit only when it is strictly greater than
//! 1024 in the current unit, so `1024` stays `"1024.00B"` while `1025` becomes
//! `"1.00kB"`.

/// Unit labels, smallest first. Values beyond the last unit stay in it.
const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

const DIVIDER: f64 = 1024.0;

/// Placeholder shown when no size is available.
pub const SIZE_PLACEHOLDER: &str = "-";

/// Format a byte count as a human-scaled string.
///
/// # Example
///
/// ```
/// use squeeze_core::size::format_size;
///
/// assert_eq!(format_size(0), "0.00B");
/// assert_eq!(format_size(1024 * 1500), "1.46MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut quotient = bytes as f64;
    let mut level = 0;

    while quotient > DIVIDER && level < UNITS.len() - 1 {
        quotient /= DIVIDER;
        level += 1;
    }

    let floor = quotient.floor();
    let mut whole = floor as u64;
    let mut fraction = ((quotient - floor) * 100.0).round() as u64;

    // 1023.996 must render as 1024.00, not 1023.100
    if fraction >= 100 {
        whole += 1;
        fraction -= 100;
    }

    format!("{}.{:02}{}", whole, fraction, UNITS[level])
}

/// Format an optional byte count, using [`SIZE_PLACEHOLDER`] when absent.
pub fn format_size_or_placeholder(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format_size(bytes),
        None => SIZE_PLACEHOLDER.to_string(),
    }
}

/// Ratio of the re-encoded size to the original size.
///
/// With no original size to compare against, the raw `after` value is
/// returned so the caller still has something monotonic to display.
pub fn size_ratio(before: u64, after: u64) -> f64 {
    if before == 0 {
        return after as f64;
    }
    after as f64 / before as f64
}
