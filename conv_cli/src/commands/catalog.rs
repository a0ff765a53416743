//! Category and unit listings.

use clap::Args;
use conv_core::{ConvResult, REGISTRY};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};

/// Arguments for `units`
#[derive(Debug, Args)]
pub struct UnitsArgs {
    /// Category id
    pub category: String,
}

/// Category display row
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Canonical unit")]
    canonical: String,
    #[tabled(rename = "Units")]
    units: usize,
}

/// Unit display row
#[derive(Debug, Tabled)]
struct UnitRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Unit")]
    label: String,
    #[tabled(rename = "To canonical")]
    to_canonical: String,
    #[tabled(rename = "Offset")]
    offset: String,
}

/// Execute `categories`
pub fn execute_categories(format: OutputFormat) -> ConvResult<()> {
    let rows: Vec<CategoryRow> = REGISTRY
        .categories()
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            canonical: c.canonical_unit_label.clone(),
            units: c.units.len(),
        })
        .collect();
    output::print_list(&rows, &rows, format);
    Ok(())
}

/// Execute `units`
pub fn execute_units(args: &UnitsArgs, format: OutputFormat) -> ConvResult<()> {
    let units = REGISTRY.units_for_category(&args.category)?;
    let rows: Vec<UnitRow> = units
        .iter()
        .map(|u| UnitRow {
            symbol: u.symbol.clone(),
            label: u.display_label.clone(),
            to_canonical: format!("{:e}", u.to_canonical),
            offset: if u.is_affine() { u.offset.to_string() } else { "-".to_string() },
        })
        .collect();

    if format == OutputFormat::Table {
        output::print_kv("Canonical", REGISTRY.canonical_label(&args.category)?);
    }
    output::print_list(&rows, units, format);
    Ok(())
}
