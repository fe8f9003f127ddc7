use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const WIDTH_ENV: &str = "QUANTITY_WIDTH";
pub const OUTPUT_ENV: &str = "QUANTITY_OUTPUT";

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The formatted string, one per line
    #[default]
    Human,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Defaults applied when the command line does not say otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// `None` lets each formatter use its own default width
    pub width: Option<usize>,
    pub output: OutputFormat,
}

/// Parse a width given as text, rejecting anything but a non-negative integer.
pub fn parse_width(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidNumber {
            input: value.to_string(),
            kind: "width",
        })
}

/// Load display defaults from `QUANTITY_WIDTH` and `QUANTITY_OUTPUT`.
///
/// Unset or empty variables fall back to the built-in defaults.
pub fn load_display_config() -> Result<DisplayConfig> {
    let width = match non_empty_env(WIDTH_ENV) {
        Some(value) => Some(parse_width(&value)?),
        None => None,
    };
    let output = match non_empty_env(OUTPUT_ENV) {
        Some(value) => OutputFormat::from_str(&value)?,
        None => OutputFormat::Human,
    };
    log::debug!("load_display_config width={width:?} output={output:?}");
    Ok(DisplayConfig { width, output })
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
