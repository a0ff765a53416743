//! # Conversion Engine
//!
//! Stateless conversion between two units of one [`QuantityCategory`]:
//!
//! ```text
//! canonical = value * from.to_canonical + from.offset
//! result    = (canonical - to.offset) * to.from_canonical
//! ```
//!
//! Every function here is pure and touches only immutable reference data.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::convert::convert;
//! use conv_core::registry::REGISTRY;
//!
//! let pressure = REGISTRY.category("pressure").unwrap();
//! let psi = convert(1.0, "atm", "psi", pressure).unwrap();
//! assert!((psi - 14.696).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};
use crate::settings::DisplaySettings;
use crate::units::QuantityCategory;

/// One line of a "value in every unit" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub symbol: String,
    pub display_label: String,
    pub value: f64,
}

/// Convert `value` from one unit to another within `category`.
///
/// # Errors
///
/// * `InvalidValue` - `value` is NaN or infinite
/// * `UnknownUnit` - either symbol is not in `category.units`
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &QuantityCategory) -> ConvResult<f64> {
    ensure_finite(value)?;

    let from = category
        .unit(from_unit)
        .ok_or_else(|| ConvError::unknown_unit(&category.id, from_unit))?;
    let to = category
        .unit(to_unit)
        .ok_or_else(|| ConvError::unknown_unit(&category.id, to_unit))?;

    // Same unit: skip the factor round trip so identity is exact
    if from.symbol == to.symbol {
        return Ok(value);
    }

    Ok(to.from_si(from.to_si(value)))
}

/// Convert `value` into every unit of `category`, in display order.
pub fn convert_all(value: f64, from_unit: &str, category: &QuantityCategory) -> ConvResult<Vec<ConversionRow>> {
    category
        .units
        .iter()
        .map(|unit| {
            Ok(ConversionRow {
                symbol: unit.symbol.clone(),
                display_label: unit.display_label.clone(),
                value: convert(value, from_unit, &unit.symbol, category)?,
            })
        })
        .collect()
}

/// Parse raw user input into a finite number.
///
/// Leading/trailing whitespace and a leading `+` are accepted. Empty input,
/// anything `f64::from_str` rejects, and `inf`/`NaN` spellings fail with
/// `InvalidValue`.
pub fn parse_value(raw: &str) -> ConvResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConvError::invalid_value(raw, "Value is empty"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConvError::invalid_value(raw, "Not a number"))?;

    if !value.is_finite() {
        return Err(ConvError::invalid_value(raw, "Value must be finite"));
    }
    Ok(value)
}

/// Format a converted value for display.
///
/// Values inside the configured magnitude window print in fixed notation
/// with trailing zeros trimmed; anything outside it prints in scientific
/// notation.
pub fn format_value(value: f64, display: &DisplaySettings) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < display.scientific_below || magnitude >= display.scientific_at_or_above {
        let formatted = format!("{:.*e}", display.significant_digits.saturating_sub(1), value);
        return trim_scientific(&formatted);
    }

    let fixed = format!("{:.*}", display.decimal_places, value);
    let trimmed = trim_fixed(&fixed);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed
    }
}

fn ensure_finite(value: f64) -> ConvResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvError::invalid_value(value.to_string(), "Value must be finite"))
    }
}

fn trim_fixed(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn trim_scientific(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim_fixed(mantissa), exponent),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTRY;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn category(id: &str) -> &'static QuantityCategory {
        REGISTRY.category(id).unwrap()
    }

    #[test]
    fn test_bar_to_kpa() {
        let result = convert(1.0, "bar", "kPa", category("pressure")).unwrap();
        assert!(approx(result, 100.0), "got {}", result);
    }

    #[test]
    fn test_atm_to_psi() {
        let result = convert(1.0, "atm", "psi", category("pressure")).unwrap();
        assert!((result - 14.696).abs() < 1e-3, "got {}", result);
    }

    #[test]
    fn test_gpm_to_cubic_metres_per_hour() {
        let result = convert(100.0, "GPM", "m³/h", category("flow")).unwrap();
        assert!((result - 22.71).abs() < 0.01, "got {}", result);
    }

    #[test]
    fn test_common_length_and_mass() {
        assert!(approx(convert(1.0, "ft", "in", category("length")).unwrap(), 12.0));
        assert!(approx(convert(1.0, "mi", "km", category("length")).unwrap(), 1.609344));
        assert!(approx(convert(1.0, "lb", "oz", category("mass")).unwrap(), 16.0));
        assert!(approx(convert(1.0, "hp", "kW", category("power")).unwrap(), 0.7456998715822702));
    }

    #[test]
    fn test_identity_is_exact() {
        let values = [0.0, 1.0, -3.5, 0.1, 1e-300, 123456.789, 1e300];
        for cat in REGISTRY.categories() {
            for unit in &cat.units {
                for &v in &values {
                    assert_eq!(convert(v, &unit.symbol, &unit.symbol, cat).unwrap(), v);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let values = [1.0, -42.0, 0.001, 987654.321];
        for cat in REGISTRY.categories() {
            for u in &cat.units {
                for w in &cat.units {
                    for &v in &values {
                        let there = convert(v, &u.symbol, &w.symbol, cat).unwrap();
                        let back = convert(there, &w.symbol, &u.symbol, cat).unwrap();
                        assert!(approx(back, v), "{}: {} {} -> {} -> {}", cat.id, v, u.symbol, w.symbol, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_composition_consistency() {
        for cat in REGISTRY.categories() {
            for a in &cat.units {
                for b in &cat.units {
                    for c in &cat.units {
                        let via_b = convert(convert(7.25, &a.symbol, &b.symbol, cat).unwrap(), &b.symbol, &c.symbol, cat)
                            .unwrap();
                        let direct = convert(7.25, &a.symbol, &c.symbol, cat).unwrap();
                        assert!(approx(via_b, direct), "{}: {} -> {} -> {}", cat.id, a.symbol, b.symbol, c.symbol);
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_offsets() {
        let temp = category("temperature");
        assert!(approx(convert(100.0, "°C", "°F", temp).unwrap(), 212.0));
        assert!(approx(convert(32.0, "°F", "°C", temp).unwrap(), 0.0));
        assert!(approx(convert(0.0, "K", "°C", temp).unwrap(), -273.15));
        assert!(approx(convert(-40.0, "°C", "°F", temp).unwrap(), -40.0));
        assert!(approx(convert(491.67, "°R", "°F", temp).unwrap(), 32.0));
    }

    #[test]
    fn test_unknown_units() {
        let pressure = category("pressure");
        assert_eq!(
            convert(1.0, "furlong", "Pa", pressure).unwrap_err(),
            ConvError::unknown_unit("pressure", "furlong")
        );
        assert_eq!(
            convert(1.0, "Pa", "GPM", pressure).unwrap_err(),
            ConvError::unknown_unit("pressure", "GPM")
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let pressure = category("pressure");
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(v, "Pa", "kPa", pressure).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_VALUE");
        }
    }

    #[test]
    fn test_convert_all_follows_display_order() {
        let rows = convert_all(1.0, "bar", category("pressure")).unwrap();
        assert_eq!(rows.len(), category("pressure").units.len());
        assert_eq!(rows[0].symbol, "Pa");
        assert!(approx(rows[0].value, 100_000.0));
        assert!(convert_all(1.0, "nope", category("pressure")).is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42").unwrap(), 42.0);
        assert_eq!(parse_value("  -1.5e3 ").unwrap(), -1500.0);
        assert_eq!(parse_value("+0.25").unwrap(), 0.25);
        for bad in ["", "   ", "abc", "1,5", "inf", "NaN", "1e999"] {
            assert!(parse_value(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_format_value() {
        let display = DisplaySettings::default();
        assert_eq!(format_value(100.0, &display), "100");
        assert_eq!(format_value(14.695948775513449, &display), "14.695949");
        assert_eq!(format_value(0.0, &display), "0");
        assert_eq!(format_value(-0.0000001, &display), "-1e-7");
        assert_eq!(format_value(2.5e12, &display), "2.5e12");
    }
}
