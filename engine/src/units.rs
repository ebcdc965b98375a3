//! Unit conversion and normalization module
//!
//! Weight-bearing profile fields are stored in the user's currently selected
//! unit system and converted to SI at the formula boundary. Conversion
//! factors are fixed constants shared with the goal calculations.
//!
//! # Design Principles
//!
//! 1. **Conversion at Boundaries**: formulas always run on kg/cm/kcal
//! 2. **Type Safety**: units are explicit enums, not bare f64 conventions
//! 3. **Normalization is Explicit**: rounding is a pure function the caller
//!    applies when accepting a value, never a hidden setter side effect

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.45359237;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Round to one decimal place, half-up at 0.1 granularity.
///
/// Applied to weight and rate values at the moment a new value is accepted
/// (and after unit-system conversion) so displayed and stored numbers agree.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Weight Unit System
// ============================================================================

/// Weight unit system preference
///
/// All weight-bearing fields on a profile (current weight, goal weight,
/// goal rate amount) are stored in this system's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert a weight in this system's unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * KG_PER_LB,
        }
    }

    /// Convert a weight in kilograms to this system's unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg / KG_PER_LB,
        }
    }

    /// Get the weight unit abbreviation
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "kg" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "lbs" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from this unit to kcal
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => value,
            EnergyUnit::Kj => value / KJ_PER_KCAL,
        }
    }

    /// Convert from kcal to this unit
    ///
    /// Applied only at the final output of the goal calculations.
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kcal" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(format!("Unknown energy unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Helper
// ============================================================================

/// Height expressed as whole feet and inches, inches clamped to [0, 11]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i32,
    pub inches: i32,
}

impl FeetInches {
    /// Create from components, clamping inches to [0, 11]
    pub fn new(feet: i32, inches: i32) -> Self {
        Self {
            feet: feet.max(0),
            inches: inches.clamp(0, 11),
        }
    }

    /// Decompose centimeters into whole feet and inches
    ///
    /// Rounds to the nearest whole inch, carrying into feet at 12.
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = (cm / CM_PER_INCH).round().max(0.0) as i32;
        Self {
            feet: total_inches / 12,
            inches: (total_inches % 12).clamp(0, 11),
        }
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        f64::from(self.feet * 12 + self.inches) * CM_PER_INCH
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}
