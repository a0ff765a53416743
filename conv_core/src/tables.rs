//! Built-in Quantity Tables
//!
//! Static reference tables for every converter the site exposes. Factors use
//! the exact international definitions where one exists (1 in = 0.0254 m,
//! 1 lb = 0.45359237 kg, 1 US gal = 231 in³, 1 atm = 101325 Pa).
//!
//! Unit order inside each category is the dropdown order shown to users,
//! most common units first.

use crate::units::{QuantityCategory, UnitDefinition};

// Shared base definitions
const INCH_M: f64 = 0.0254;
const FOOT_M: f64 = 0.3048;
const POUND_KG: f64 = 0.45359237;
const STANDARD_GRAVITY: f64 = 9.80665;
const US_GALLON_M3: f64 = 0.003785411784;
const UK_GALLON_M3: f64 = 0.00454609;
const CUBIC_FOOT_M3: f64 = 0.028316846592;
const OIL_BARREL_M3: f64 = 0.158987294928;
const POUND_FORCE_N: f64 = POUND_KG * STANDARD_GRAVITY;
const FOOT_POUND_FORCE_J: f64 = FOOT_M * POUND_FORCE_N;
const PSI_PA: f64 = POUND_FORCE_N / (INCH_M * INCH_M);
const BTU_J: f64 = 1055.05585262;
const MINUTE_S: f64 = 60.0;
const HOUR_S: f64 = 3600.0;
const DAY_S: f64 = 86400.0;

/// All built-in categories in registration order
pub fn builtin_categories() -> Vec<QuantityCategory> {
    vec![
        length(),
        area(),
        volume(),
        mass(),
        pressure(),
        flow(),
        mass_flow(),
        velocity(),
        force(),
        energy(),
        power(),
        torque(),
        density(),
        dynamic_viscosity(),
        temperature(),
    ]
}

fn length() -> QuantityCategory {
    QuantityCategory::new("length", "Length", "metre")
        .linear("m", "Metre", 1.0)
        .linear("km", "Kilometre", 1000.0)
        .linear("cm", "Centimetre", 0.01)
        .linear("mm", "Millimetre", 0.001)
        .linear("µm", "Micrometre", 1e-6)
        .linear("in", "Inch", INCH_M)
        .linear("ft", "Foot", FOOT_M)
        .linear("yd", "Yard", 3.0 * FOOT_M)
        .linear("mi", "Mile", 1609.344)
        .linear("nmi", "Nautical mile", 1852.0)
        .with_keywords(&["distance", "height", "width", "diameter"])
}

fn area() -> QuantityCategory {
    QuantityCategory::new("area", "Area", "square metre")
        .linear("m²", "Square metre", 1.0)
        .linear("km²", "Square kilometre", 1e6)
        .linear("cm²", "Square centimetre", 1e-4)
        .linear("mm²", "Square millimetre", 1e-6)
        .linear("ha", "Hectare", 1e4)
        .linear("in²", "Square inch", INCH_M * INCH_M)
        .linear("ft²", "Square foot", FOOT_M * FOOT_M)
        .linear("yd²", "Square yard", 9.0 * FOOT_M * FOOT_M)
        .linear("ac", "Acre", 4046.8564224)
        .with_keywords(&["surface", "land", "cross-section"])
}

fn volume() -> QuantityCategory {
    QuantityCategory::new("volume", "Volume", "cubic metre")
        .linear("m³", "Cubic metre", 1.0)
        .linear("L", "Litre", 1e-3)
        .linear("mL", "Millilitre", 1e-6)
        .linear("cm³", "Cubic centimetre", 1e-6)
        .linear("in³", "Cubic inch", INCH_M * INCH_M * INCH_M)
        .linear("ft³", "Cubic foot", CUBIC_FOOT_M3)
        .linear("gal", "US gallon", US_GALLON_M3)
        .linear("imp gal", "Imperial gallon", UK_GALLON_M3)
        .linear("bbl", "Oil barrel", OIL_BARREL_M3)
        .with_keywords(&["capacity", "tank", "liquid"])
}

fn mass() -> QuantityCategory {
    QuantityCategory::new("mass", "Mass", "kilogram")
        .linear("kg", "Kilogram", 1.0)
        .linear("g", "Gram", 1e-3)
        .linear("mg", "Milligram", 1e-6)
        .linear("t", "Tonne", 1000.0)
        .linear("lb", "Pound", POUND_KG)
        .linear("oz", "Ounce", POUND_KG / 16.0)
        .linear("short ton", "Short ton (US)", 2000.0 * POUND_KG)
        .linear("long ton", "Long ton (UK)", 2240.0 * POUND_KG)
        .with_keywords(&["weight"])
}

fn pressure() -> QuantityCategory {
    QuantityCategory::new("pressure", "Pressure", "pascal")
        .linear("Pa", "Pascal", 1.0)
        .linear("kPa", "Kilopascal", 1e3)
        .linear("MPa", "Megapascal", 1e6)
        .linear("bar", "Bar", 1e5)
        .linear("mbar", "Millibar", 100.0)
        .linear("atm", "Standard atmosphere", 101_325.0)
        .linear("psi", "Pound per square inch", PSI_PA)
        .linear("ksi", "Kilopound per square inch", 1000.0 * PSI_PA)
        .linear("mmHg", "Millimetre of mercury", 133.322387415)
        .linear("inHg", "Inch of mercury", 3386.389)
        .linear("mH2O", "Metre of water", 1000.0 * STANDARD_GRAVITY)
        .linear("inH2O", "Inch of water", 249.08891)
        .linear("kgf/cm²", "Kilogram-force per square centimetre", STANDARD_GRAVITY * 1e4)
        .with_keywords(&["stress", "head", "vacuum", "gauge"])
}

fn flow() -> QuantityCategory {
    QuantityCategory::new("flow", "Volumetric Flow", "cubic metre per second")
        .linear("m³/s", "Cubic metre per second", 1.0)
        .linear("m³/h", "Cubic metre per hour", 1.0 / HOUR_S)
        .linear("L/s", "Litre per second", 1e-3)
        .linear("L/min", "Litre per minute", 1e-3 / MINUTE_S)
        .linear("GPM", "US gallon per minute", US_GALLON_M3 / MINUTE_S)
        .linear("IGPM", "Imperial gallon per minute", UK_GALLON_M3 / MINUTE_S)
        .linear("CFM", "Cubic foot per minute", CUBIC_FOOT_M3 / MINUTE_S)
        .linear("ft³/s", "Cubic foot per second", CUBIC_FOOT_M3)
        .linear("bbl/d", "Oil barrel per day", OIL_BARREL_M3 / DAY_S)
        .with_keywords(&["flow rate", "discharge", "pump", "capacity"])
}

fn mass_flow() -> QuantityCategory {
    QuantityCategory::new("mass_flow", "Mass Flow", "kilogram per second")
        .linear("kg/s", "Kilogram per second", 1.0)
        .linear("kg/h", "Kilogram per hour", 1.0 / HOUR_S)
        .linear("t/h", "Tonne per hour", 1000.0 / HOUR_S)
        .linear("lb/s", "Pound per second", POUND_KG)
        .linear("lb/h", "Pound per hour", POUND_KG / HOUR_S)
        .with_keywords(&["steam", "throughput"])
}

fn velocity() -> QuantityCategory {
    QuantityCategory::new("velocity", "Velocity", "metre per second")
        .linear("m/s", "Metre per second", 1.0)
        .linear("km/h", "Kilometre per hour", 1000.0 / HOUR_S)
        .linear("ft/s", "Foot per second", FOOT_M)
        .linear("ft/min", "Foot per minute", FOOT_M / MINUTE_S)
        .linear("mph", "Mile per hour", 1609.344 / HOUR_S)
        .linear("kn", "Knot", 1852.0 / HOUR_S)
        .with_keywords(&["speed"])
}

fn force() -> QuantityCategory {
    QuantityCategory::new("force", "Force", "newton")
        .linear("N", "Newton", 1.0)
        .linear("kN", "Kilonewton", 1e3)
        .linear("kgf", "Kilogram-force", STANDARD_GRAVITY)
        .linear("lbf", "Pound-force", POUND_FORCE_N)
        .linear("kip", "Kip", 1000.0 * POUND_FORCE_N)
        .linear("dyn", "Dyne", 1e-5)
        .with_keywords(&["load", "thrust"])
}

fn energy() -> QuantityCategory {
    QuantityCategory::new("energy", "Energy", "joule")
        .linear("J", "Joule", 1.0)
        .linear("kJ", "Kilojoule", 1e3)
        .linear("MJ", "Megajoule", 1e6)
        .linear("kWh", "Kilowatt hour", 3.6e6)
        .linear("cal", "Calorie (IT)", 4.1868)
        .linear("kcal", "Kilocalorie (IT)", 4186.8)
        .linear("BTU", "British thermal unit", BTU_J)
        .linear("ft·lbf", "Foot pound-force", FOOT_POUND_FORCE_J)
        .with_keywords(&["work", "heat"])
}

fn power() -> QuantityCategory {
    QuantityCategory::new("power", "Power", "watt")
        .linear("W", "Watt", 1.0)
        .linear("kW", "Kilowatt", 1e3)
        .linear("MW", "Megawatt", 1e6)
        .linear("hp", "Mechanical horsepower", 550.0 * FOOT_POUND_FORCE_J)
        .linear("PS", "Metric horsepower", 75.0 * STANDARD_GRAVITY)
        .linear("BTU/h", "BTU per hour", BTU_J / HOUR_S)
        .linear("TR", "Ton of refrigeration", 12_000.0 * BTU_J / HOUR_S)
        .linear("ft·lbf/s", "Foot pound-force per second", FOOT_POUND_FORCE_J)
        .with_keywords(&["motor", "cooling", "duty"])
}

fn torque() -> QuantityCategory {
    QuantityCategory::new("torque", "Torque", "newton metre")
        .linear("N·m", "Newton metre", 1.0)
        .linear("kN·m", "Kilonewton metre", 1e3)
        .linear("kgf·m", "Kilogram-force metre", STANDARD_GRAVITY)
        .linear("lbf·ft", "Pound-force foot", FOOT_POUND_FORCE_J)
        .linear("lbf·in", "Pound-force inch", INCH_M * POUND_FORCE_N)
        .with_keywords(&["moment", "tightening"])
}

fn density() -> QuantityCategory {
    QuantityCategory::new("density", "Density", "kilogram per cubic metre")
        .linear("kg/m³", "Kilogram per cubic metre", 1.0)
        .linear("g/cm³", "Gram per cubic centimetre", 1000.0)
        .linear("kg/L", "Kilogram per litre", 1000.0)
        .linear("lb/ft³", "Pound per cubic foot", POUND_KG / CUBIC_FOOT_M3)
        .linear("lb/in³", "Pound per cubic inch", POUND_KG / (INCH_M * INCH_M * INCH_M))
        .linear("lb/gal", "Pound per US gallon", POUND_KG / US_GALLON_M3)
        .with_keywords(&["specific gravity", "specific weight"])
}

fn dynamic_viscosity() -> QuantityCategory {
    QuantityCategory::new("dynamic_viscosity", "Dynamic Viscosity", "pascal second")
        .linear("Pa·s", "Pascal second", 1.0)
        .linear("mPa·s", "Millipascal second", 1e-3)
        .linear("cP", "Centipoise", 1e-3)
        .linear("P", "Poise", 0.1)
        .linear("lb/(ft·s)", "Pound per foot second", POUND_KG / FOOT_M)
        .with_keywords(&["viscosity", "fluid", "oil"])
}

fn temperature() -> QuantityCategory {
    let rankine = 5.0 / 9.0;
    QuantityCategory::new("temperature", "Temperature", "kelvin")
        .linear("K", "Kelvin", 1.0)
        .with_unit(UnitDefinition::affine("°C", "Degree Celsius", 1.0, 273.15))
        .with_unit(UnitDefinition::affine("°F", "Degree Fahrenheit", rankine, 459.67 * rankine))
        .linear("°R", "Degree Rankine", rankine)
        .with_keywords(&["heat", "thermal"])
}
