//! # Engineering Calculators
//!
//! Every calculator follows the pattern:
//!
//! - `*Input` - input parameters (JSON-serializable, SI units)
//! - `*Result` - calculation results (JSON-serializable)
//! - `calculate(&input) -> ConvResult<*Result>` - pure calculation function
//!
//! [`CalculatorKind`] carries the catalog metadata (title, description, page
//! link, search keywords) that the cross-search index draws from.
//!
//! ## Available Calculators
//!
//! - [`pipe_flow`] - pipe velocity, Reynolds number, Darcy-Weisbach pressure drop
//! - [`npsh`] - NPSH available and cavitation margin
//! - [`pump_power`] - hydraulic and shaft power

pub mod npsh;
pub mod pipe_flow;
pub mod pump_power;

use serde::{Deserialize, Serialize};

use crate::errors::ConvResult;

// Re-export commonly used types
pub use npsh::{NpshInput, NpshResult};
pub use pipe_flow::{
    FlowRegime, PressureDropInput, PressureDropResult, ReynoldsInput, ReynoldsResult, VelocityInput,
    VelocityResult,
};
pub use pump_power::{PumpPowerInput, PumpPowerResult};

/// Identifies one calculator in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    PipeVelocity,
    Reynolds,
    PressureDrop,
    Npsh,
    PumpPower,
}

/// Static catalog metadata for a calculator page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorMetadata {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Topic shown alongside the title (e.g. "Pumps")
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
}

impl CalculatorKind {
    /// Catalog order (as listed on the calculators index page)
    pub const ALL: [CalculatorKind; 5] = [
        CalculatorKind::PipeVelocity,
        CalculatorKind::Reynolds,
        CalculatorKind::PressureDrop,
        CalculatorKind::Npsh,
        CalculatorKind::PumpPower,
    ];

    /// Catalog metadata
    pub fn metadata(&self) -> CalculatorMetadata {
        match self {
            CalculatorKind::PipeVelocity => CalculatorMetadata {
                id: "pipe-velocity",
                title: "Pipe Flow Velocity",
                description: "Mean fluid velocity from flow rate and pipe inner diameter.",
                topic: "Piping",
                keywords: &["velocity", "pipe sizing", "flow rate", "bore"],
            },
            CalculatorKind::Reynolds => CalculatorMetadata {
                id: "reynolds-number",
                title: "Reynolds Number",
                description: "Reynolds number and laminar/turbulent regime for pipe flow.",
                topic: "Fluid Mechanics",
                keywords: &["reynolds", "laminar", "turbulent", "viscosity", "re"],
            },
            CalculatorKind::PressureDrop => CalculatorMetadata {
                id: "pressure-drop",
                title: "Pipe Pressure Drop",
                description: "Darcy-Weisbach friction loss with Swamee-Jain friction factor.",
                topic: "Piping",
                keywords: &["darcy", "weisbach", "friction", "head loss", "pressure loss"],
            },
            CalculatorKind::Npsh => CalculatorMetadata {
                id: "npsh",
                title: "NPSH Available",
                description: "Net positive suction head available and margin against cavitation.",
                topic: "Pumps",
                keywords: &["npsh", "npsha", "cavitation", "suction", "vapour pressure"],
            },
            CalculatorKind::PumpPower => CalculatorMetadata {
                id: "pump-power",
                title: "Pump Power",
                description: "Hydraulic and shaft power from flow, head and efficiency.",
                topic: "Pumps",
                keywords: &["pump", "shaft power", "motor sizing", "efficiency", "kw"],
            },
        }
    }

    /// Site-relative page link
    pub fn href(&self) -> String {
        format!("/calculators/{}", self.metadata().id)
    }

    /// Look up by catalog id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.metadata().id == id)
    }
}

/// Input for any calculator, tagged by kind.
///
/// ```json
/// { "calculator": "pump_power", "flow_m3_s": 0.05, "head_m": 30.0,
///   "density_kg_m3": 1000.0, "efficiency": 0.75 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorInput {
    PipeVelocity(VelocityInput),
    Reynolds(ReynoldsInput),
    PressureDrop(PressureDropInput),
    Npsh(NpshInput),
    PumpPower(PumpPowerInput),
}

/// Output of any calculator, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorOutput {
    PipeVelocity(VelocityResult),
    Reynolds(ReynoldsResult),
    PressureDrop(PressureDropResult),
    Npsh(NpshResult),
    PumpPower(PumpPowerResult),
}

impl CalculatorInput {
    /// Which calculator this input targets
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculatorInput::PipeVelocity(_) => CalculatorKind::PipeVelocity,
            CalculatorInput::Reynolds(_) => CalculatorKind::Reynolds,
            CalculatorInput::PressureDrop(_) => CalculatorKind::PressureDrop,
            CalculatorInput::Npsh(_) => CalculatorKind::Npsh,
            CalculatorInput::PumpPower(_) => CalculatorKind::PumpPower,
        }
    }

    /// Run the targeted calculator
    pub fn run(&self) -> ConvResult<CalculatorOutput> {
        Ok(match self {
            CalculatorInput::PipeVelocity(input) => CalculatorOutput::PipeVelocity(pipe_flow::calculate_velocity(input)?),
            CalculatorInput::Reynolds(input) => CalculatorOutput::Reynolds(pipe_flow::calculate_reynolds(input)?),
            CalculatorInput::PressureDrop(input) => {
                CalculatorOutput::PressureDrop(pipe_flow::calculate_pressure_drop(input)?)
            }
            CalculatorInput::Npsh(input) => CalculatorOutput::Npsh(npsh::calculate(input)?),
            CalculatorInput::PumpPower(input) => CalculatorOutput::PumpPower(pump_power::calculate(input)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = CalculatorKind::ALL.iter().map(|k| k.metadata().id).collect();
        assert_eq!(ids.len(), CalculatorKind::ALL.len());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for kind in CalculatorKind::ALL {
            for keyword in kind.metadata().keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_from_id_and_href() {
        assert_eq!(CalculatorKind::from_id("npsh"), Some(CalculatorKind::Npsh));
        assert_eq!(CalculatorKind::from_id("beam"), None);
        assert_eq!(CalculatorKind::PumpPower.href(), "/calculators/pump-power");
    }

    #[test]
    fn test_run_from_json() {
        let json = r#"{"calculator":"pump_power","flow_m3_s":0.05,"head_m":30.0,"density_kg_m3":1000.0,"efficiency":0.75}"#;
        let input: CalculatorInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind(), CalculatorKind::PumpPower);

        match input.run().unwrap() {
            CalculatorOutput::PumpPower(result) => assert!(result.shaft_power_w > result.hydraulic_power_w),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_run_propagates_validation_errors() {
        let input = CalculatorInput::PipeVelocity(VelocityInput {
            flow_m3_s: 1.0,
            diameter_m: -1.0,
        });
        assert_eq!(input.run().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
