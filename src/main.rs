use clap::Parser;
use tracing_subscriber::EnvFilter;

use quantity::cli::{self, Args};
use quantity::config::load_display_config;
use quantity::error::Result;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    if let Err(e) = run_app(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app(args: Args) -> Result<()> {
    let config = load_display_config()?;
    cli::run(args, config)?;
    Ok(())
}
