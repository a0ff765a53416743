//! CLI command definitions and dispatch.

pub mod calc;
pub mod catalog;
pub mod convert;
pub mod preset;
pub mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use conv_core::{ConvResult, Settings};

use crate::output::OutputFormat;

/// Unitwise - unit converter and engineering calculators
#[derive(Debug, Parser)]
#[command(name = "unitwise", version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (JSON)
    #[arg(short, long, default_value = "unitwise.json")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a value between two units
    Convert(convert::ConvertArgs),
    /// Show a value in every unit of its category
    Table(convert::TableArgs),
    /// List quantity categories
    Categories,
    /// List the units of a category
    Units(catalog::UnitsArgs),
    /// Search calculators and converters
    Search(search::SearchArgs),
    /// Run a calculator from a JSON input file ("-" for stdin)
    Calc(calc::CalcArgs),
    /// Manage saved widget layouts
    Preset(preset::PresetArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> ConvResult<()> {
        let settings = Settings::load(&self.config)?;

        match &self.command {
            Commands::Convert(args) => convert::execute_convert(args, &settings, self.format),
            Commands::Table(args) => convert::execute_table(args, &settings, self.format),
            Commands::Categories => catalog::execute_categories(self.format),
            Commands::Units(args) => catalog::execute_units(args, self.format),
            Commands::Search(args) => search::execute(args, &settings, self.format),
            Commands::Calc(args) => calc::execute(args, self.format),
            Commands::Preset(args) => preset::execute(args, &settings, self.format),
        }
    }
}
