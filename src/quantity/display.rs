//! Value types that plug the formatters into `format!`.
//!
//! The width given in the format string is passed through as the target
//! width, so `format!("{:7}", Bytes(1 << 20))` is `format_bytes(1 << 20, Some(7))`
//! and `format!("{}", Bytes(..))` uses the default. Alignment and fill flags are
//! ignored; the output is already padded.

use std::fmt;

use super::constants::RATE_UNIT;
use super::format::bytes::narrower;
use super::format::duration::{check_duration, render};
use super::format::rate::bytes_per_sec;
use super::format::{format_amount, format_bytes};
use crate::error::{Error, Result};

/// A unitless count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(pub u64);

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0, f.width()))
    }
}

/// A number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bytes(pub u64);

impl From<u64> for Bytes {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bytes(self.0, f.width()))
    }
}

/// A span of time in fractional seconds, always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(f64);

impl Seconds {
    pub fn new(secs: f64) -> Result<Self> {
        check_duration(secs).map(Self)
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Seconds {
    type Error = Error;

    fn try_from(secs: f64) -> Result<Self> {
        Self::new(secs)
    }
}

impl From<std::time::Duration> for Seconds {
    fn from(value: std::time::Duration) -> Self {
        Self(value.as_secs_f64())
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0))
    }
}

/// Bytes transferred over some duration.
///
/// Built through [`Rate::new`] or [`Rate::from_elapsed`], both of which
/// reject a zero duration, so displaying one never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    bytes: Bytes,
    per_sec: u64,
}

impl Rate {
    /// Rate of `bytes` over `secs` seconds. The sign of `secs` is ignored.
    pub fn new(bytes: u64, secs: f64) -> Result<Self> {
        let per_sec = bytes_per_sec(bytes, secs)?;
        Ok(Self {
            bytes: Bytes(bytes),
            per_sec,
        })
    }

    pub fn from_elapsed(bytes: u64, elapsed: std::time::Duration) -> Result<Self> {
        Self::new(bytes, elapsed.as_secs_f64())
    }

    pub fn bytes(&self) -> Bytes {
        self.bytes
    }

    pub fn bytes_per_sec(&self) -> u64 {
        self.per_sec
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = narrower(f.width(), RATE_UNIT.len());
        write!(f, "{}{RATE_UNIT}", format_bytes(self.per_sec, width))
    }
}
