//! # NPSH Available
//!
//! Net positive suction head available at a pump inlet:
//!
//! ```text
//! NPSHa = (P_surface - P_vapour) / (ρ g) + z_static - h_friction
//! ```
//!
//! `z_static` is the liquid surface height above the pump centreline
//! (negative for suction lift).

use serde::{Deserialize, Serialize};

use super::pipe_flow::{require_finite, require_non_negative, require_positive, GRAVITY_M_S2};
use crate::errors::ConvResult;

/// NPSH available input.
///
/// ## JSON Example
///
/// ```json
/// {
///   "surface_pressure_pa": 101325.0,
///   "vapour_pressure_pa": 2339.0,
///   "density_kg_m3": 998.0,
///   "static_head_m": 2.0,
///   "friction_loss_m": 0.5,
///   "npsh_required_m": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshInput {
    /// Absolute pressure on the liquid surface (Pa)
    pub surface_pressure_pa: f64,
    /// Vapour pressure of the liquid at pumping temperature (Pa, absolute)
    pub vapour_pressure_pa: f64,
    /// Liquid density (kg/m³)
    pub density_kg_m3: f64,
    /// Liquid surface above pump centreline (m); negative for suction lift
    pub static_head_m: f64,
    /// Suction line friction loss (m)
    pub friction_loss_m: f64,
    /// Pump NPSH required (m), from the pump curve
    #[serde(default)]
    pub npsh_required_m: Option<f64>,
}

impl NpshInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ConvResult<()> {
        require_non_negative("surface_pressure_pa", self.surface_pressure_pa)?;
        require_non_negative("vapour_pressure_pa", self.vapour_pressure_pa)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_finite("static_head_m", self.static_head_m)?;
        require_non_negative("friction_loss_m", self.friction_loss_m)?;
        if let Some(required) = self.npsh_required_m {
            require_non_negative("npsh_required_m", required)?;
        }
        Ok(())
    }
}

/// NPSH available result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshResult {
    /// Pressure head above vapour pressure (m)
    pub pressure_head_m: f64,
    /// NPSH available (m)
    pub npsh_available_m: f64,
    /// NPSHa - NPSHr (m), when NPSHr was given
    pub margin_m: Option<f64>,
    /// True when NPSHa does not exceed NPSHr
    pub cavitation_risk: bool,
}

/// Compute NPSH available and the margin against NPSH required.
pub fn calculate(input: &NpshInput) -> ConvResult<NpshResult> {
    input.validate()?;

    let pressure_head_m =
        (input.surface_pressure_pa - input.vapour_pressure_pa) / (input.density_kg_m3 * GRAVITY_M_S2);
    let npsh_available_m = pressure_head_m + input.static_head_m - input.friction_loss_m;
    let margin_m = input.npsh_required_m.map(|required| npsh_available_m - required);

    Ok(NpshResult {
        pressure_head_m,
        npsh_available_m,
        margin_m,
        cavitation_risk: margin_m.map_or(npsh_available_m <= 0.0, |m| m <= 0.0),
    })
}
