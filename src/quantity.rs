//! Fixed-width rendering of counts, byte sizes, byte rates and durations.
//!
//! Every formatter is a pure function: same input, same string, safe to call
//! from any thread. For a given width the amount, bytes and rate outputs are
//! always exactly that many characters long, which is what makes them usable
//! in aligned columns.

pub mod constants;
mod display;
mod format;

pub use self::display::{Amount, Bytes, Rate, Seconds};
pub use self::format::{format_amount, format_bps, format_bytes, format_duration};
