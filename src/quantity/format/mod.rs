// Fixed-width formatters, leaves first
pub mod amount;
pub mod bytes;
pub mod duration;
pub mod rate;

pub use amount::format_amount;
pub use bytes::format_bytes;
pub use duration::format_duration;
pub use rate::format_bps;
