//! Cross-search command.

use clap::{Args, ValueEnum};
use conv_core::search::{SearchableEntry, SEARCH_INDEX};
use conv_core::{ConvResult, SearchKind, Settings};
use tabled::Tabled;

use crate::output::{self, OutputFormat};

/// Section the search is run from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Calculator,
    Converter,
}

impl From<KindArg> for SearchKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Calculator => SearchKind::Calculator,
            KindArg::Converter => SearchKind::Converter,
        }
    }
}

/// Arguments for `search`
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,
    /// Collection to search first
    #[arg(short, long, value_enum, default_value = "converter")]
    pub kind: KindArg,
}

/// Search result display row
#[derive(Debug, Tabled)]
struct EntryRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Link")]
    href: String,
}

impl From<&SearchableEntry> for EntryRow {
    fn from(entry: &SearchableEntry) -> Self {
        EntryRow {
            title: entry.title.clone(),
            category: entry.category.clone(),
            href: entry.href.clone(),
        }
    }
}

fn kind_name(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Calculator => "calculators",
        SearchKind::Converter => "converters",
    }
}

/// Execute `search`
pub fn execute(args: &SearchArgs, settings: &Settings, format: OutputFormat) -> ConvResult<()> {
    let kind = SearchKind::from(args.kind);
    let results = SEARCH_INDEX.search_limited(&args.query, kind, settings.search.max_results);

    if format == OutputFormat::Json {
        output::print_json(&results);
        return Ok(());
    }

    if results.show_cross_results {
        println!("No {} match '{}'. Found in {}:", kind_name(kind), args.query, kind_name(kind.other()));
        let rows: Vec<EntryRow> = results.cross_results.iter().map(EntryRow::from).collect();
        output::print_list(&rows, &results.cross_results, format);
    } else {
        let rows: Vec<EntryRow> = results.primary_results.iter().map(EntryRow::from).collect();
        output::print_list(&rows, &results.primary_results, format);
    }
    Ok(())
}
