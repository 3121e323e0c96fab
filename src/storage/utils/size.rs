use crate::error::Result;
use crate::units::MetricFormatter;

/// Format a byte rate such as `350MB/s` using the given metric formatter.
pub fn format_rate(bytes_per_sec: f64, formatter: &MetricFormatter) -> Result<String> {
    Ok(format!("{}B/s", formatter.format(bytes_per_sec)?))
}

/// Bytes per second for `bytes` transferred over `elapsed_secs`.
pub fn throughput(bytes: u64, elapsed_secs: f64) -> f64 {
    if bytes == 0 {
        return 0.0;
    }
    bytes as f64 / elapsed_secs
}
