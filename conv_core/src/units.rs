//! # Unit Definitions
//!
//! Every measurable quantity (length, pressure, flow, ...) is a
//! [`QuantityCategory`] holding an ordered list of [`UnitDefinition`]s. Each
//! unit stores one scale factor relative to the category's canonical SI
//! anchor, so a category with n units needs n factors rather than n² pairs.
//!
//! ## Affine Units
//!
//! Ratio-scale quantities only need a multiplier. Temperature scales such as
//! Celsius also need an additive offset:
//!
//! ```text
//! canonical = raw * to_canonical + offset
//! raw       = (canonical - offset) * from_canonical
//! ```
//!
//! `offset` is zero for every ratio-scale unit.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::units::UnitDefinition;
//!
//! let kpa = UnitDefinition::linear("kPa", "Kilopascal", 1000.0);
//! assert_eq!(kpa.to_si(2.0), 2000.0);
//! assert!((kpa.from_si(101_325.0) - 101.325).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Unit Definition
// ============================================================================

/// One unit within one quantity category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Short identifier, unique within its category (e.g. "kPa")
    pub symbol: String,
    /// Human-readable label (e.g. "Kilopascal")
    pub display_label: String,
    /// Multiplier from 1 of this unit to the canonical unit
    pub to_canonical: f64,
    /// Multiplier from the canonical unit back to this unit.
    ///
    /// Always `1 / to_canonical`; derived, never set independently.
    pub from_canonical: f64,
    /// Additive term applied after scaling (affine scales only)
    #[serde(default)]
    pub offset: f64,
}

impl UnitDefinition {
    /// Create a ratio-scale unit from its factor to the canonical unit.
    pub fn linear(symbol: impl Into<String>, display_label: impl Into<String>, to_canonical: f64) -> Self {
        Self::affine(symbol, display_label, to_canonical, 0.0)
    }

    /// Create an affine unit (`canonical = raw * to_canonical + offset`).
    pub fn affine(
        symbol: impl Into<String>,
        display_label: impl Into<String>,
        to_canonical: f64,
        offset: f64,
    ) -> Self {
        UnitDefinition {
            symbol: symbol.into(),
            display_label: display_label.into(),
            to_canonical,
            from_canonical: 1.0 / to_canonical,
            offset,
        }
    }

    /// Convert a value in this unit to the canonical unit
    pub fn to_si(&self, value: f64) -> f64 {
        value * self.to_canonical + self.offset
    }

    /// Convert a canonical value to this unit
    pub fn from_si(&self, canonical: f64) -> f64 {
        (canonical - self.offset) * self.from_canonical
    }

    /// True for units that need an additive offset
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// True when this unit is the canonical anchor itself
    pub fn is_canonical(&self) -> bool {
        self.to_canonical == 1.0 && self.offset == 0.0
    }
}

// ============================================================================
// Quantity Category
// ============================================================================

/// A named measurable dimension with its own set of convertible units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityCategory {
    /// Stable identifier used for lookup and URL routing (e.g. "pressure")
    pub id: String,
    /// Human-readable name (e.g. "Pressure")
    pub name: String,
    /// Display name of the SI anchor unit
    pub canonical_unit_label: String,
    /// Units in UI display order
    pub units: Vec<UnitDefinition>,
    /// Extra lowercase search tags
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl QuantityCategory {
    /// Create an empty category
    pub fn new(id: impl Into<String>, name: impl Into<String>, canonical_unit_label: impl Into<String>) -> Self {
        QuantityCategory {
            id: id.into(),
            name: name.into(),
            canonical_unit_label: canonical_unit_label.into(),
            units: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Append a unit (builder style)
    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.units.push(unit);
        self
    }

    /// Append a ratio-scale unit (builder style)
    pub fn linear(self, symbol: &str, display_label: &str, to_canonical: f64) -> Self {
        self.with_unit(UnitDefinition::linear(symbol, display_label, to_canonical))
    }

    /// Append search keywords (stored lowercase)
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords
            .extend(keywords.iter().map(|k| k.to_lowercase()));
        self
    }

    /// Find a unit by exact symbol
    pub fn unit(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    /// Check whether the category contains a unit symbol
    pub fn contains(&self, symbol: &str) -> bool {
        self.unit(symbol).is_some()
    }

    /// Unit symbols in display order
    pub fn symbols(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.symbol.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_are_reciprocal() {
        for factor in [0.0254, 6894.757293168, 1.0 / 3600.0, 1e-9, 4.1868] {
            let unit = UnitDefinition::linear("u", "Unit", factor);
            let product = unit.to_canonical * unit.from_canonical;
            assert!((product - 1.0).abs() < 1e-12, "factor {} gave {}", factor, product);
        }
    }

    #[test]
    fn test_affine_unit() {
        let celsius = UnitDefinition::affine("°C", "Celsius", 1.0, 273.15);
        assert!(celsius.is_affine());
        assert!((celsius.to_si(100.0) - 373.15).abs() < 1e-9);
        assert!((celsius.from_si(273.15)).abs() < 1e-9);
    }

    #[test]
    fn test_canonical_detection() {
        assert!(UnitDefinition::linear("Pa", "Pascal", 1.0).is_canonical());
        assert!(!UnitDefinition::linear("kPa", "Kilopascal", 1000.0).is_canonical());
    }

    #[test]
    fn test_category_builder_keeps_order() {
        let cat = QuantityCategory::new("length", "Length", "metre")
            .linear("m", "Metre", 1.0)
            .linear("ft", "Foot", 0.3048)
            .linear("in", "Inch", 0.0254)
            .with_keywords(&["Distance"]);

        assert_eq!(cat.symbols(), vec!["m", "ft", "in"]);
        assert_eq!(cat.keywords, vec!["distance"]);
        assert!(cat.contains("ft"));
        assert!(!cat.contains("FT"));
    }

    #[test]
    fn test_serialization_defaults_offset() {
        let json = r#"{"symbol":"m","display_label":"Metre","to_canonical":1.0,"from_canonical":1.0}"#;
        let unit: UnitDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(unit.offset, 0.0);
    }
}
