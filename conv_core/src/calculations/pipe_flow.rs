//! # Pipe Flow Calculations
//!
//! Single-phase, incompressible, fully developed flow in a circular pipe.
//! All inputs and outputs are SI; convert user values with the conversion
//! engine first.
//!
//! - [`VelocityInput`] - mean velocity from flow rate and bore
//! - [`ReynoldsInput`] - Reynolds number and flow regime
//! - [`PressureDropInput`] - Darcy-Weisbach friction loss
//!
//! ## Example
//!
//! ```rust
//! use conv_core::calculations::pipe_flow::{calculate_velocity, VelocityInput};
//!
//! let input = VelocityInput { flow_m3_s: 0.01, diameter_m: 0.1 };
//! let result = calculate_velocity(&input).unwrap();
//! assert!((result.velocity_m_s - 1.2732).abs() < 1e-4);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{ConvError, ConvResult};

/// Standard gravity (m/s²)
pub const GRAVITY_M_S2: f64 = 9.80665;

/// Upper Reynolds bound of laminar flow
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Lower Reynolds bound of fully turbulent flow
pub const TURBULENT_LIMIT: f64 = 4000.0;

// ============================================================================
// Velocity
// ============================================================================

/// Mean velocity input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityInput {
    /// Volumetric flow rate (m³/s)
    pub flow_m3_s: f64,
    /// Pipe inner diameter (m)
    pub diameter_m: f64,
}

impl VelocityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        require_non_negative("flow_m3_s", self.flow_m3_s)?;
        require_positive("diameter_m", self.diameter_m)
    }
}

/// Mean velocity result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityResult {
    /// Flow area (m²)
    pub area_m2: f64,
    /// Mean velocity (m/s)
    pub velocity_m_s: f64,
}

/// v = Q / A, A = π d² / 4
pub fn calculate_velocity(input: &VelocityInput) -> ConvResult<VelocityResult> {
    input.validate()?;
    let area_m2 = pipe_area(input.diameter_m);
    Ok(VelocityResult {
        area_m2,
        velocity_m_s: input.flow_m3_s / area_m2,
    })
}

// ============================================================================
// Reynolds Number
// ============================================================================

/// Flow regime classification by Reynolds number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    /// Re < 2300
    Laminar,
    /// 2300 ≤ Re ≤ 4000
    Transitional,
    /// Re > 4000
    Turbulent,
}

impl FlowRegime {
    /// Classify a Reynolds number
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds <= TURBULENT_LIMIT {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transitional => "Transitional",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

/// Reynolds number input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReynoldsInput {
    /// Fluid density (kg/m³)
    pub density_kg_m3: f64,
    /// Mean velocity (m/s)
    pub velocity_m_s: f64,
    /// Pipe inner diameter (m)
    pub diameter_m: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity_pa_s: f64,
}

impl ReynoldsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_non_negative("velocity_m_s", self.velocity_m_s)?;
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("viscosity_pa_s", self.viscosity_pa_s)
    }
}

/// Reynolds number result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReynoldsResult {
    pub reynolds: f64,
    pub regime: FlowRegime,
}

/// Re = ρ v d / μ
pub fn calculate_reynolds(input: &ReynoldsInput) -> ConvResult<ReynoldsResult> {
    input.validate()?;
    let reynolds = input.density_kg_m3 * input.velocity_m_s * input.diameter_m / input.viscosity_pa_s;
    Ok(ReynoldsResult {
        reynolds,
        regime: FlowRegime::from_reynolds(reynolds),
    })
}

// ============================================================================
// Pressure Drop
// ============================================================================

/// Darcy-Weisbach pressure drop input.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flow_m3_s": 0.01,
///   "diameter_m": 0.1,
///   "length_m": 100.0,
///   "roughness_m": 0.000045,
///   "density_kg_m3": 998.0,
///   "viscosity_pa_s": 0.001
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDropInput {
    /// Volumetric flow rate (m³/s)
    pub flow_m3_s: f64,
    /// Pipe inner diameter (m)
    pub diameter_m: f64,
    /// Pipe length (m)
    pub length_m: f64,
    /// Absolute wall roughness (m), e.g. 4.5e-5 for commercial steel
    pub roughness_m: f64,
    /// Fluid density (kg/m³)
    pub density_kg_m3: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity_pa_s: f64,
}

impl PressureDropInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        require_positive("flow_m3_s", self.flow_m3_s)?;
        require_positive("diameter_m", self.diameter_m)?;
        require_non_negative("length_m", self.length_m)?;
        require_non_negative("roughness_m", self.roughness_m)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_positive("viscosity_pa_s", self.viscosity_pa_s)
    }
}

/// Darcy-Weisbach pressure drop result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDropResult {
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Darcy friction factor
    pub friction_factor: f64,
    /// Friction head loss (m of fluid)
    pub head_loss_m: f64,
    /// Friction pressure drop (Pa)
    pub pressure_drop_pa: f64,
}

/// Δp = f (L/d) ρ v² / 2
///
/// Friction factor is 64/Re for laminar flow and Swamee-Jain otherwise.
pub fn calculate_pressure_drop(input: &PressureDropInput) -> ConvResult<PressureDropResult> {
    input.validate()?;

    let velocity_m_s = input.flow_m3_s / pipe_area(input.diameter_m);
    let reynolds = input.density_kg_m3 * velocity_m_s * input.diameter_m / input.viscosity_pa_s;
    let regime = FlowRegime::from_reynolds(reynolds);
    let friction_factor = friction_factor(reynolds, input.roughness_m / input.diameter_m);

    let pressure_drop_pa =
        friction_factor * (input.length_m / input.diameter_m) * input.density_kg_m3 * velocity_m_s.powi(2) / 2.0;
    let head_loss_m = pressure_drop_pa / (input.density_kg_m3 * GRAVITY_M_S2);

    Ok(PressureDropResult {
        velocity_m_s,
        reynolds,
        regime,
        friction_factor,
        head_loss_m,
        pressure_drop_pa,
    })
}

/// Darcy friction factor.
///
/// Transitional flow uses Swamee-Jain, which over-predicts slightly and so
/// errs toward a higher loss.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds < LAMINAR_LIMIT {
        return 64.0 / reynolds;
    }
    let term = relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9);
    0.25 / term.log10().powi(2)
}

/// Flow area of a circular bore (m²)
pub fn pipe_area(diameter_m: f64) -> f64 {
    PI * diameter_m * diameter_m / 4.0
}

pub(crate) fn require_positive(field: &str, value: f64) -> ConvResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConvError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> ConvResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConvError::invalid_input(field, value.to_string(), "Must be zero or positive"));
    }
    Ok(())
}

pub(crate) fn require_finite(field: &str, value: f64) -> ConvResult<()> {
    if !value.is_finite() {
        return Err(ConvError::invalid_input(field, value.to_string(), "Must be a finite number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_in_100mm_pipe() -> PressureDropInput {
        PressureDropInput {
            flow_m3_s: 0.01,
            diameter_m: 0.1,
            length_m: 100.0,
            roughness_m: 4.5e-5,
            density_kg_m3: 998.0,
            viscosity_pa_s: 0.001,
        }
    }

    #[test]
    fn test_velocity() {
        let result = calculate_velocity(&VelocityInput { flow_m3_s: 0.01, diameter_m: 0.1 }).unwrap();
        assert!((result.area_m2 - 0.00785398).abs() < 1e-8);
        assert!((result.velocity_m_s - 1.27324).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_rejects_zero_diameter() {
        let err = calculate_velocity(&VelocityInput { flow_m3_s: 0.01, diameter_m: 0.0 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_reynolds_and_regime() {
        let input = ReynoldsInput {
            density_kg_m3: 1000.0,
            velocity_m_s: 1.0,
            diameter_m: 0.05,
            viscosity_pa_s: 0.001,
        };
        let result = calculate_reynolds(&input).unwrap();
        assert!((result.reynolds - 50_000.0).abs() < 1e-6);
        assert_eq!(result.regime, FlowRegime::Turbulent);

        assert_eq!(FlowRegime::from_reynolds(1000.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(3000.0), FlowRegime::Transitional);
    }

    #[test]
    fn test_laminar_friction_factor() {
        assert!((friction_factor(1000.0, 0.001) - 0.064).abs() < 1e-12);
    }

    #[test]
    fn test_turbulent_friction_factor_smooth_pipe() {
        // Moody chart: smooth pipe, Re = 1e5 -> f ≈ 0.018
        let f = friction_factor(1e5, 0.0);
        assert!((f - 0.018).abs() < 0.001, "got {}", f);
    }

    #[test]
    fn test_pressure_drop() {
        let result = calculate_pressure_drop(&water_in_100mm_pipe()).unwrap();
        assert_eq!(result.regime, FlowRegime::Turbulent);
        // Re ≈ 127,000, f ≈ 0.019, Δp ≈ 15 kPa over 100 m
        assert!((result.reynolds - 127_069.0).abs() < 10.0, "Re {}", result.reynolds);
        assert!(result.friction_factor > 0.018 && result.friction_factor < 0.021);
        assert!(result.pressure_drop_pa > 14_000.0 && result.pressure_drop_pa < 17_000.0);
        let head = result.pressure_drop_pa / (998.0 * GRAVITY_M_S2);
        assert!((result.head_loss_m - head).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_drop_scales_with_length() {
        let short = calculate_pressure_drop(&water_in_100mm_pipe()).unwrap();
        let mut input = water_in_100mm_pipe();
        input.length_m = 200.0;
        let long = calculate_pressure_drop(&input).unwrap();
        assert!((long.pressure_drop_pa - 2.0 * short.pressure_drop_pa).abs() < 1e-6);
    }

    #[test]
    fn test_pressure_drop_rejects_nan() {
        let mut input = water_in_100mm_pipe();
        input.viscosity_pa_s = f64::NAN;
        assert!(calculate_pressure_drop(&input).is_err());
    }
}
