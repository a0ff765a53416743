//! Run a calculator from JSON input.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use conv_core::calculations::CalculatorInput;
use conv_core::{ConvError, ConvResult};

use crate::output::{self, OutputFormat};

/// Arguments for `calc`
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// JSON input file, or "-" to read stdin
    pub input: PathBuf,
}

fn read_input(path: &Path) -> ConvResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| ConvError::file_error("read", "<stdin>", e.to_string()))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|e| ConvError::file_error("read", path.display().to_string(), e.to_string()))
    }
}

/// Execute `calc`
pub fn execute(args: &CalcArgs, format: OutputFormat) -> ConvResult<()> {
    let json = read_input(&args.input)?;
    let input: CalculatorInput = serde_json::from_str(&json)?;
    tracing::debug!(calculator = ?input.kind(), "running calculator");

    let result = input.run()?;
    if format == OutputFormat::Table {
        output::print_kv("Calculator", input.kind().metadata().title);
    }
    output::print_item(&result, format);
    Ok(())
}
