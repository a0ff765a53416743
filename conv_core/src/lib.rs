//! # conv_core - Unit Conversion & Engineering Calculator Engine
//!
//! `conv_core` is the computational heart of Unitwise: bidirectional unit
//! conversion through canonical SI anchors, category and unit metadata, a
//! keyword cross-search over calculators and converters, and the
//! calculators themselves. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the registry is immutable; conversions are pure functions
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use conv_core::REGISTRY;
//!
//! let kpa = REGISTRY.convert(1.0, "bar", "kPa", "pressure").unwrap();
//! assert!((kpa - 100.0).abs() < 1e-9);
//!
//! let labels: Vec<_> = REGISTRY
//!     .units_for_category("flow")
//!     .unwrap()
//!     .iter()
//!     .map(|u| u.display_label.as_str())
//!     .collect();
//! assert!(labels.contains(&"US gallon per minute"));
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit definitions and quantity categories
//! - [`tables`] - Built-in conversion tables
//! - [`registry`] - Validated, immutable category registry
//! - [`convert`] - Conversion, parsing and number formatting
//! - [`search`] - Cross-search over calculators and converters
//! - [`calculations`] - Calculator catalog and fluid/pump calculators
//! - [`presets`] - Saved widget layouts and their stores
//! - [`settings`] - Display, search and storage settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod convert;
pub mod errors;
pub mod presets;
pub mod registry;
pub mod search;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use convert::{format_value, parse_value, ConversionRow};
pub use errors::{ConvError, ConvResult};
pub use registry::{canonical_label, units_for_category, UnitRegistry, REGISTRY};
pub use search::{search, SearchKind, SearchResults, SearchableEntry};
pub use settings::Settings;
pub use units::{QuantityCategory, UnitDefinition};
