//! Conversion commands.

use clap::Args;
use conv_core::{format_value, ConvResult, Settings, REGISTRY};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};

/// Arguments for `convert`
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Value to convert (e.g. 14.7, -40, 1e5)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Source unit symbol
    pub from: String,
    /// Target unit symbol
    pub to: String,
    /// Category id (e.g. pressure, flow)
    #[arg(short = 'C', long)]
    pub category: String,
}

/// Arguments for `table`
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Source unit symbol
    pub from: String,
    /// Category id
    #[arg(short = 'C', long)]
    pub category: String,
}

#[derive(Debug, Serialize)]
struct ConversionOutput<'a> {
    category: &'a str,
    value: f64,
    from: &'a str,
    to: &'a str,
    result: f64,
}

#[derive(Debug, Tabled)]
struct ConversionTableRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Execute `convert`
pub fn execute_convert(args: &ConvertArgs, settings: &Settings, format: OutputFormat) -> ConvResult<()> {
    let value = conv_core::parse_value(&args.value)?;
    let result = REGISTRY.convert(value, &args.from, &args.to, &args.category)?;

    match format {
        OutputFormat::Table => println!(
            "{} {} = {} {}",
            format_value(value, &settings.display),
            args.from,
            format_value(result, &settings.display),
            args.to
        ),
        OutputFormat::Json => output::print_json(&ConversionOutput {
            category: &args.category,
            value,
            from: &args.from,
            to: &args.to,
            result,
        }),
    }
    Ok(())
}

/// Execute `table`
pub fn execute_table(args: &TableArgs, settings: &Settings, format: OutputFormat) -> ConvResult<()> {
    let value = conv_core::parse_value(&args.value)?;
    let rows = REGISTRY.convert_all(value, &args.from, &args.category)?;

    let table: Vec<ConversionTableRow> = rows
        .iter()
        .map(|row| ConversionTableRow {
            symbol: row.symbol.clone(),
            unit: row.display_label.clone(),
            value: format_value(row.value, &settings.display),
        })
        .collect();
    output::print_list(&table, &rows, format);
    Ok(())
}
