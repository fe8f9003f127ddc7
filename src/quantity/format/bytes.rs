use super::amount::format_amount;
use crate::quantity::constants::BYTE_UNIT;

/// Format a byte count: [`format_amount`] one column narrower, plus a `B`.
///
/// The width default (`None`) carries through unchanged, giving 6 columns.
pub fn format_bytes(bytes: u64, width: Option<usize>) -> String {
    let mut out = format_amount(bytes, narrower(width, BYTE_UNIT.len()));
    out.push_str(BYTE_UNIT);
    out
}

/// Reserve `columns` of a requested width for a unit suffix.
pub(crate) fn narrower(width: Option<usize>, columns: usize) -> Option<usize> {
    width.map(|w| w.saturating_sub(columns))
}
