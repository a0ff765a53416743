//! # Unit Registry
//!
//! Immutable registry of quantity categories. The built-in registry is
//! constructed once on first use and shared by reference; nothing mutates it
//! afterwards, so concurrent readers need no synchronization.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::registry::REGISTRY;
//!
//! let units = REGISTRY.units_for_category("pressure").unwrap();
//! assert_eq!(units[0].symbol, "Pa");
//!
//! let kpa = REGISTRY.convert(1.0, "bar", "kPa", "pressure").unwrap();
//! assert!((kpa - 100.0).abs() < 1e-9);
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::convert::{self, ConversionRow};
use crate::errors::{ConvError, ConvResult};
use crate::tables::builtin_categories;
use crate::units::{QuantityCategory, UnitDefinition};

/// Tolerance for the `to_canonical * from_canonical == 1` invariant
const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// Process-wide built-in registry
pub static REGISTRY: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::builtin);

/// Read-only collection of quantity categories, in registration order.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    categories: Vec<QuantityCategory>,
}

impl UnitRegistry {
    /// Build a registry from custom tables, validating every definition.
    ///
    /// Rejects duplicate category ids, empty categories, duplicate symbols
    /// within a category, non-finite or zero factors, and factor pairs that
    /// are not reciprocal.
    pub fn new(categories: Vec<QuantityCategory>) -> ConvResult<Self> {
        validate_tables(&categories)?;
        Ok(UnitRegistry { categories })
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        UnitRegistry {
            categories: builtin_categories(),
        }
    }

    /// All categories in registration order
    pub fn categories(&self) -> &[QuantityCategory] {
        &self.categories
    }

    /// Category ids in registration order
    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> ConvResult<&QuantityCategory> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| ConvError::unknown_category(category_id))
    }

    /// Units of a category in display order
    pub fn units_for_category(&self, category_id: &str) -> ConvResult<&[UnitDefinition]> {
        Ok(self.category(category_id)?.units.as_slice())
    }

    /// Display label of a category's SI anchor unit
    pub fn canonical_label(&self, category_id: &str) -> ConvResult<&str> {
        Ok(self.category(category_id)?.canonical_unit_label.as_str())
    }

    /// Look up one unit within a category
    pub fn unit(&self, category_id: &str, symbol: &str) -> ConvResult<&UnitDefinition> {
        let category = self.category(category_id)?;
        category
            .unit(symbol)
            .ok_or_else(|| ConvError::unknown_unit(category_id, symbol))
    }

    /// Convert a value between two units of the named category
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str, category_id: &str) -> ConvResult<f64> {
        let category = self.category(category_id)?;
        convert::convert(value, from_unit, to_unit, category)
    }

    /// Parse raw user input, then convert it
    pub fn convert_str(&self, raw: &str, from_unit: &str, to_unit: &str, category_id: &str) -> ConvResult<f64> {
        let category = self.category(category_id)?;
        let value = convert::parse_value(raw)?;
        convert::convert(value, from_unit, to_unit, category)
    }

    /// Convert a value into every unit of the named category
    pub fn convert_all(&self, value: f64, from_unit: &str, category_id: &str) -> ConvResult<Vec<ConversionRow>> {
        let category = self.category(category_id)?;
        convert::convert_all(value, from_unit, category)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        UnitRegistry::builtin()
    }
}

/// Units of a built-in category in display order
pub fn units_for_category(category_id: &str) -> ConvResult<&'static [UnitDefinition]> {
    REGISTRY.units_for_category(category_id)
}

/// Display label of a built-in category's SI anchor unit
pub fn canonical_label(category_id: &str) -> ConvResult<&'static str> {
    REGISTRY.canonical_label(category_id)
}

fn validate_tables(categories: &[QuantityCategory]) -> ConvResult<()> {
    let mut ids = HashSet::new();
    for category in categories {
        if category.id.trim().is_empty() {
            return Err(ConvError::invalid_input("category.id", "", "Category id must not be empty"));
        }
        if !ids.insert(category.id.as_str()) {
            return Err(ConvError::invalid_input(
                "category.id",
                &category.id,
                "Duplicate category id",
            ));
        }
        if category.units.is_empty() {
            return Err(ConvError::invalid_input(
                format!("{}.units", category.id),
                "[]",
                "Category must define at least one unit",
            ));
        }

        let mut symbols = HashSet::new();
        for unit in &category.units {
            let field = format!("{}.{}", category.id, unit.symbol);
            if !symbols.insert(unit.symbol.as_str()) {
                return Err(ConvError::invalid_input(field, &unit.symbol, "Duplicate unit symbol"));
            }
            if !unit.to_canonical.is_finite() || unit.to_canonical == 0.0 {
                return Err(ConvError::invalid_input(
                    field,
                    unit.to_canonical.to_string(),
                    "Factor must be finite and non-zero",
                ));
            }
            if !unit.offset.is_finite() {
                return Err(ConvError::invalid_input(field, unit.offset.to_string(), "Offset must be finite"));
            }
            if (unit.to_canonical * unit.from_canonical - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(ConvError::invalid_input(
                    field,
                    unit.from_canonical.to_string(),
                    "from_canonical must be the reciprocal of to_canonical",
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        assert!(UnitRegistry::new(builtin_categories()).is_ok());
    }

    #[test]
    fn test_units_keep_display_order() {
        let symbols: Vec<_> = REGISTRY
            .units_for_category("pressure")
            .unwrap()
            .iter()
            .map(|u| u.symbol.as_str())
            .collect();
        assert_eq!(&symbols[..4], &["Pa", "kPa", "MPa", "bar"]);
    }

    #[test]
    fn test_unknown_category() {
        let err = REGISTRY.units_for_category("luminosity").unwrap_err();
        assert_eq!(err, ConvError::unknown_category("luminosity"));
        assert!(canonical_label("luminosity").is_err());
    }

    #[test]
    fn test_canonical_labels() {
        assert_eq!(canonical_label("pressure").unwrap(), "pascal");
        assert_eq!(canonical_label("flow").unwrap(), "cubic metre per second");
    }

    #[test]
    fn test_cross_category_unit_rejected() {
        // "psi" exists under pressure but not under flow
        assert!(REGISTRY.unit("pressure", "psi").is_ok());
        let err = REGISTRY.convert(1.0, "psi", "m³/s", "flow").unwrap_err();
        assert_eq!(err, ConvError::unknown_unit("flow", "psi"));
    }

    #[test]
    fn test_convert_str() {
        let kpa = REGISTRY.convert_str(" 2.5 ", "bar", "kPa", "pressure").unwrap();
        assert!((kpa - 250.0).abs() < 1e-9);

        let err = REGISTRY.convert_str("abc", "bar", "kPa", "pressure").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_VALUE");
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let cat = QuantityCategory::new("length", "Length", "metre")
            .linear("m", "Metre", 1.0)
            .linear("m", "Metre again", 1.0);
        let err = UnitRegistry::new(vec![cat]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_duplicate_categories() {
        let a = QuantityCategory::new("x", "X", "x").linear("x", "X", 1.0);
        assert!(UnitRegistry::new(vec![a.clone(), a]).is_err());
    }

    #[test]
    fn test_rejects_zero_factor_and_empty_category() {
        let zero = QuantityCategory::new("x", "X", "x").linear("x", "X", 0.0);
        assert!(UnitRegistry::new(vec![zero]).is_err());

        let empty = QuantityCategory::new("y", "Y", "y");
        assert!(UnitRegistry::new(vec![empty]).is_err());
    }

    #[test]
    fn test_rejects_non_reciprocal_factors() {
        let mut unit = UnitDefinition::linear("x", "X", 2.0);
        unit.from_canonical = 2.0;
        let cat = QuantityCategory::new("x", "X", "x").with_unit(unit);
        assert!(UnitRegistry::new(vec![cat]).is_err());
    }
}
