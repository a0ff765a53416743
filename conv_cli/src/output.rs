//! Table and JSON output formatting for CLI commands.

use conv_core::{ConvError, REGISTRY};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or `json` as JSON
pub fn print_list<R: Tabled, J: Serialize + ?Sized>(rows: &[R], json: &J, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(json),
    }
}

/// Print a single item: top-level fields as key-value pairs, or JSON
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(item) {
            Ok(serde_json::Value::Object(fields)) => {
                for (key, value) in fields {
                    print_kv(&key, &scalar_text(&value));
                }
            }
            Ok(other) => println!("{}", scalar_text(&other)),
            Err(_) => println!("(unprintable)"),
        },
        OutputFormat::Json => print_json(item),
    }
}

/// Pretty-print as JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Follow-up hint printed under an error, when one helps
pub fn error_hint(error: &ConvError) -> Option<String> {
    match error {
        ConvError::UnknownCategory { .. } => {
            Some(format!("Known categories: {}", REGISTRY.category_ids().join(", ")))
        }
        ConvError::UnknownUnit { category, .. } => REGISTRY
            .category(category)
            .ok()
            .map(|c| format!("Units in '{}': {}", category, c.symbols().join(", "))),
        e if e.is_recoverable() => Some("Another unitwise process holds the lock; retry when it exits.".to_string()),
        _ => None,
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
