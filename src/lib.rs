pub mod cli;
pub mod config;
pub mod error;
pub mod quantity;

pub use crate::quantity::{
    Amount, Bytes, Rate, Seconds, format_amount, format_bps, format_bytes, format_duration,
};
