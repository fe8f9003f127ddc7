use super::bytes::{format_bytes, narrower};
use crate::error::{Error, Result};
use crate::quantity::constants::RATE_UNIT;

/// Format a transfer rate of `bytes` over `secs` seconds, e.g. `"5.00MB/s"`.
///
/// The sign of `secs` is ignored. Minimum width is 6 and the default (`None`)
/// is 8. The quotient is truncated to whole bytes per second.
///
/// # Errors
/// * [`Error::ZeroDuration`] if `secs` is zero
/// * [`Error::InvalidDuration`] if `secs` is NaN
pub fn format_bps(bytes: u64, secs: f64, width: Option<usize>) -> Result<String> {
    let per_sec = bytes_per_sec(bytes, secs)?;
    let mut out = format_bytes(per_sec, narrower(width, RATE_UNIT.len()));
    out.push_str(RATE_UNIT);
    Ok(out)
}

/// Whole bytes per second, after validating the duration.
pub(crate) fn bytes_per_sec(bytes: u64, secs: f64) -> Result<u64> {
    if secs.is_nan() {
        return Err(Error::InvalidDuration { secs });
    }
    let secs = secs.abs();
    if secs == 0.0 {
        return Err(Error::ZeroDuration);
    }
    // `as` saturates, so tiny durations pin to u64::MAX instead of wrapping
    let per_sec = (bytes as f64 / secs) as u64;
    log::trace!("bytes_per_sec bytes={bytes} secs={secs} per_sec={per_sec}");
    Ok(per_sec)
}
