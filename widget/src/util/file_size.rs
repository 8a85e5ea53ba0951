//! Human-readable byte counts for attachment cards.

#[cfg(test)]
#[path = "file_size_test.rs"]
mod file_size_test;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const BASE: f64 = 1024.0;

/// Base-1024 size with at most two decimals and trailing zeros dropped.
/// Anything past the gigabyte range is still shown in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BASE && unit < UNITS.len() - 1 {
        value /= BASE;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", UNITS[unit])
}
