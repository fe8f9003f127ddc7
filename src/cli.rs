use std::io::{self, Write};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::quantity::{format_amount, format_bps, format_bytes, format_duration};

#[derive(Parser, Debug)]
#[command(
    name = "quantity",
    version,
    about = "Render counts, byte sizes, rates and durations as fixed-width strings"
)]
pub struct Args {
    /// Total output width; each command has its own default and minimum
    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    /// Print one JSON object per value instead of the bare string
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format unitless counts (default width 5, minimum 3)
    Amount {
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Format byte counts (default width 6, minimum 4)
    Bytes {
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Format bytes transferred over a duration in seconds (default width 8, minimum 6)
    Rate {
        bytes: u64,
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Format durations given in seconds (always 5 wide)
    Duration {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

/// One formatted value, as printed in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub input: String,
    pub formatted: String,
}

/// Format every value named by `args`, stopping at the first error.
pub fn render(args: &Args, width: Option<usize>) -> Result<Vec<Rendered>> {
    log::debug!("render command={:?} width={width:?}", args.command);
    let rendered = match &args.command {
        Command::Amount { values } => values
            .iter()
            .map(|v| Rendered {
                input: v.to_string(),
                formatted: format_amount(*v, width),
            })
            .collect(),
        Command::Bytes { values } => values
            .iter()
            .map(|v| Rendered {
                input: v.to_string(),
                formatted: format_bytes(*v, width),
            })
            .collect(),
        Command::Rate { bytes, seconds } => vec![Rendered {
            input: format!("{bytes} {seconds}"),
            formatted: format_bps(*bytes, *seconds, width)?,
        }],
        Command::Duration { values } => values
            .iter()
            .map(|v| {
                Ok(Rendered {
                    input: v.to_string(),
                    formatted: format_duration(*v)?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(rendered)
}

/// Run the parsed command, writing results to stdout.
///
/// Flags on the command line take precedence over `config`.
pub fn run(args: Args, config: DisplayConfig) -> Result<()> {
    let width = args.width.or(config.width);
    let output = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let rendered = render(&args, width)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in &rendered {
        match output {
            OutputFormat::Human => writeln!(out, "{}", item.formatted)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(item)?)?,
        }
    }
    out.flush()?;
    Ok(())
}
