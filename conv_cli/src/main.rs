//! # Unitwise CLI
//!
//! Command-line front end over `conv_core`: conversions, unit tables,
//! cross-search, calculators from JSON, and saved widget layouts.
//!
//! ```text
//! unitwise convert 14.7 psi kPa --category pressure
//! unitwise table 100 GPM --category flow
//! unitwise search npsh --kind converter
//! unitwise --format json calc pump.json
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        output::print_error(&format!("Error [{}]: {}", e.error_code(), e));
        if let Some(hint) = output::error_hint(&e) {
            eprintln!("  {}", hint);
        }
        if let Ok(json) = serde_json::to_string(&e) {
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
