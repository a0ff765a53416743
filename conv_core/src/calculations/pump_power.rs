//! # Pump Power
//!
//! Hydraulic power delivered to the fluid and the shaft power the driver
//! must supply:
//!
//! ```text
//! P_hydraulic = ρ g Q H
//! P_shaft     = P_hydraulic / η
//! ```

use serde::{Deserialize, Serialize};

use super::pipe_flow::{require_non_negative, require_positive, GRAVITY_M_S2};
use crate::errors::{ConvError, ConvResult};

/// Pump power input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpPowerInput {
    /// Volumetric flow rate (m³/s)
    pub flow_m3_s: f64,
    /// Total dynamic head (m)
    pub head_m: f64,
    /// Fluid density (kg/m³)
    pub density_kg_m3: f64,
    /// Pump efficiency as a fraction in (0, 1]
    pub efficiency: f64,
}

impl PumpPowerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        require_non_negative("flow_m3_s", self.flow_m3_s)?;
        require_non_negative("head_m", self.head_m)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(ConvError::invalid_input(
                "efficiency",
                self.efficiency.to_string(),
                "Efficiency must be a fraction between 0 (exclusive) and 1",
            ));
        }
        Ok(())
    }
}

/// Pump power result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpPowerResult {
    /// Power transferred to the fluid (W)
    pub hydraulic_power_w: f64,
    /// Power required at the pump shaft (W)
    pub shaft_power_w: f64,
}

/// Compute hydraulic and shaft power.
pub fn calculate(input: &PumpPowerInput) -> ConvResult<PumpPowerResult> {
    input.validate()?;
    let hydraulic_power_w = input.density_kg_m3 * GRAVITY_M_S2 * input.flow_m3_s * input.head_m;
    Ok(PumpPowerResult {
        hydraulic_power_w,
        shaft_power_w: hydraulic_power_w / input.efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pump_power() {
        let input = PumpPowerInput {
            flow_m3_s: 0.05,
            head_m: 30.0,
            density_kg_m3: 1000.0,
            efficiency: 0.75,
        };
        let result = calculate(&input).unwrap();
        // 1000 * 9.80665 * 0.05 * 30 = 14709.975 W
        assert!((result.hydraulic_power_w - 14_709.975).abs() < 1e-6);
        assert!((result.shaft_power_w - 19_613.3).abs() < 1e-6);
    }

    #[test]
    fn test_efficiency_bounds() {
        let mut input = PumpPowerInput {
            flow_m3_s: 0.05,
            head_m: 30.0,
            density_kg_m3: 1000.0,
            efficiency: 0.0,
        };
        assert!(calculate(&input).is_err());
        input.efficiency = 1.2;
        assert!(calculate(&input).is_err());
        input.efficiency = 1.0;
        assert!(calculate(&input).is_ok());
    }
}
