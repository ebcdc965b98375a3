//! User profile value object
//!
//! A plain snapshot of the demographics, body composition, and goal settings
//! that feed the goal calculations. The profile owns no observation or
//! notification machinery: the caller mutates it between calls and recomputes.
//!
//! Weight-bearing fields (`current_weight`, `goal_weight`, `goal_rate_amount`)
//! are stored in the currently selected [`UnitSystem`] and converted to
//! kilograms at the formula boundary.

use crate::units::{round_tenth, EnergyUnit, FeetInches, UnitSystem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum age in whole years for eligibility.
///
/// The engine only exposes the predicate; enforcement is the caller's job.
pub const MINIMUM_AGE_YEARS: i32 = 13;

/// Sex for physiological calculations
///
/// `Other` computes with the male formula branch. That is an explicit
/// policy choice, not an omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Other,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// Weight-change goal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightTarget {
    Lose,
    Gain,
    #[default]
    Maintain,
}

/// Which goal sub-model is authoritative
///
/// The inactive sub-model's fields are retained on the profile but ignored
/// by the calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalTimeframe {
    #[default]
    Rate,
    Duration,
}

/// Unit for the rate sub-model's amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    #[default]
    PerWeek,
    PerMonth,
}

/// Unit for the duration sub-model's length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Weeks,
    Months,
}

/// User profile snapshot feeding the goal calculations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    /// Resolved height in centimeters (see [`UserProfile::set_height_feet_inches`])
    pub height_cm: Option<f64>,
    /// Unit system for all weight-bearing fields below
    pub unit_system: UnitSystem,
    /// Current weight in the selected unit
    pub current_weight: Option<f64>,
    /// Goal weight in the selected unit
    pub goal_weight: Option<f64>,
    /// Body fat percentage; enables the lean-mass BMR formula when present
    pub body_fat_percent: Option<f64>,
    pub activity_level: ActivityLevel,
    pub target: WeightTarget,
    pub timeframe: GoalTimeframe,
    /// Rate sub-model: positive magnitude in the selected weight unit
    pub goal_rate_amount: Option<f64>,
    pub goal_rate_unit: RateUnit,
    /// Duration sub-model: length of the goal period
    pub goal_duration_value: Option<u32>,
    pub goal_duration_unit: DurationUnit,
    pub energy_unit: EnergyUnit,
    /// Explicit macro gram targets; take precedence when all three are set
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    /// Macro percentage splits, used when explicit grams are incomplete
    pub protein_percent: Option<f64>,
    pub carbs_percent: Option<f64>,
    pub fat_percent: Option<f64>,
    /// Explicit micro-nutrient goals; formulaic defaults apply when absent
    pub fiber_goal_g: Option<f64>,
    pub sugar_goal_g: Option<f64>,
    pub sodium_goal_mg: Option<f64>,
}

impl UserProfile {
    /// Current weight converted to kilograms
    pub fn current_weight_kg(&self) -> Option<f64> {
        self.current_weight.map(|w| self.unit_system.to_kg(w))
    }

    /// Goal weight converted to kilograms
    pub fn goal_weight_kg(&self) -> Option<f64> {
        self.goal_weight.map(|w| self.unit_system.to_kg(w))
    }

    /// Age in whole years on the given date
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.birth_date
            .and_then(|dob| today.years_since(dob))
            .map(|years| years as i32)
    }

    /// Whether the user meets the minimum-age requirement on the given date
    ///
    /// `None` when no birth date is set; enforcement is the caller's concern.
    pub fn meets_minimum_age(&self, today: NaiveDate) -> Option<bool> {
        self.age_on(today).map(|age| age >= MINIMUM_AGE_YEARS)
    }

    /// Set height from a feet+inches pair
    pub fn set_height_feet_inches(&mut self, height: FeetInches) {
        self.height_cm = Some(height.to_cm());
    }

    /// Resolved height as whole feet and inches
    pub fn height_feet_inches(&self) -> Option<FeetInches> {
        self.height_cm.map(FeetInches::from_cm)
    }

    /// Switch the weight unit system, converting stored values in place
    ///
    /// Previously stored weights and rates are converted to the new unit and
    /// re-rounded to one decimal, so displayed numbers stay consistent with
    /// the new system rather than being silently reinterpreted.
    pub fn set_unit_system(&mut self, new_system: UnitSystem) {
        if new_system == self.unit_system {
            return;
        }
        let old = self.unit_system;
        let convert = |value: f64| round_tenth(new_system.from_kg(old.to_kg(value)));
        self.current_weight = self.current_weight.map(convert);
        self.goal_weight = self.goal_weight.map(convert);
        self.goal_rate_amount = self.goal_rate_amount.map(convert);
        self.unit_system = new_system;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // Age Tests
    // =========================================================================

    #[test]
    fn test_age_whole_years() {
        let profile = UserProfile {
            birth_date: Some(date(1990, 6, 15)),
            ..Default::default()
        };
        // Day before the birthday: still 29
        assert_eq!(profile.age_on(date(2020, 6, 14)), Some(29));
        // On the birthday: 30
        assert_eq!(profile.age_on(date(2020, 6, 15)), Some(30));
    }

    #[test]
    fn test_age_missing_birth_date() {
        let profile = UserProfile::default();
        assert_eq!(profile.age_on(date(2020, 1, 1)), None);
        assert_eq!(profile.meets_minimum_age(date(2020, 1, 1)), None);
    }

    #[rstest]
    #[case(date(2013, 3, 1), Some(true))] // turns exactly 13
    #[case(date(2014, 3, 1), Some(false))] // 12
    fn test_minimum_age_predicate(#[case] dob: NaiveDate, #[case] expected: Option<bool>) {
        let profile = UserProfile {
            birth_date: Some(dob),
            ..Default::default()
        };
        assert_eq!(profile.meets_minimum_age(date(2026, 3, 1)), expected);
    }

    // =========================================================================
    // Weight Conversion Tests
    // =========================================================================

    #[test]
    fn test_weight_kg_accessors() {
        let profile = UserProfile {
            unit_system: UnitSystem::Imperial,
            current_weight: Some(180.0),
            goal_weight: Some(170.0),
            ..Default::default()
        };
        assert!((profile.current_weight_kg().unwrap() - 81.6466266).abs() < 1e-6);
        assert!((profile.goal_weight_kg().unwrap() - 77.1107029).abs() < 1e-6);

        let metric = UserProfile {
            current_weight: Some(70.0),
            ..Default::default()
        };
        assert_eq!(metric.current_weight_kg(), Some(70.0));
    }

    // =========================================================================
    // Unit System Switch Tests
    // =========================================================================

    #[test]
    fn test_set_unit_system_converts_in_place() {
        let mut profile = UserProfile {
            unit_system: UnitSystem::Imperial,
            current_weight: Some(180.0),
            goal_weight: Some(170.0),
            goal_rate_amount: Some(1.0),
            ..Default::default()
        };
        profile.set_unit_system(UnitSystem::Metric);

        assert_eq!(profile.unit_system, UnitSystem::Metric);
        // 180 lbs = 81.64663 kg -> 81.6
        assert_eq!(profile.current_weight, Some(81.6));
        // 170 lbs = 77.11070 kg -> 77.1
        assert_eq!(profile.goal_weight, Some(77.1));
        // 1 lb/week = 0.45359 kg -> 0.5
        assert_eq!(profile.goal_rate_amount, Some(0.5));
    }

    #[test]
    fn test_set_unit_system_same_is_noop() {
        let mut profile = UserProfile {
            unit_system: UnitSystem::Imperial,
            current_weight: Some(180.05),
            ..Default::default()
        };
        profile.set_unit_system(UnitSystem::Imperial);
        // Not re-rounded: normalization happens on acceptance, not here
        assert_eq!(profile.current_weight, Some(180.05));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: switching imperial -> metric -> imperial returns the
        /// stored weight within the 0.1 rounding granularity
        #[test]
        fn prop_unit_switch_roundtrip(weight in 40.0f64..900.0) {
            let mut profile = UserProfile {
                unit_system: UnitSystem::Imperial,
                current_weight: Some(round_tenth(weight)),
                ..Default::default()
            };
            let original = profile.current_weight.unwrap();
            profile.set_unit_system(UnitSystem::Metric);
            profile.set_unit_system(UnitSystem::Imperial);
            let back = profile.current_weight.unwrap();
            prop_assert!((original - back).abs() <= 0.1 + 1e-9,
                "Round-trip drifted: {} -> {}", original, back);
        }
    }

    // =========================================================================
    // Height Tests
    // =========================================================================

    #[test]
    fn test_height_feet_inches_roundtrip() {
        let mut profile = UserProfile::default();
        profile.set_height_feet_inches(FeetInches::new(5, 10));
        assert!((profile.height_cm.unwrap() - 177.8).abs() < 0.01);
        assert_eq!(profile.height_feet_inches(), Some(FeetInches::new(5, 10)));
    }

    // =========================================================================
    // Activity Level Tests
    // =========================================================================

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2)]
    #[case(ActivityLevel::LightlyActive, 1.375)]
    #[case(ActivityLevel::ModeratelyActive, 1.55)]
    #[case(ActivityLevel::VeryActive, 1.725)]
    #[case(ActivityLevel::ExtraActive, 1.9)]
    fn test_activity_multipliers(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert_eq!(level.multiplier(), expected);
    }

    // =========================================================================
    // Serialization Tests
    // =========================================================================

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = UserProfile {
            sex: Sex::Female,
            birth_date: Some(date(1996, 2, 29)),
            height_cm: Some(165.0),
            unit_system: UnitSystem::Imperial,
            current_weight: Some(150.0),
            activity_level: ActivityLevel::ModeratelyActive,
            target: WeightTarget::Lose,
            goal_rate_amount: Some(1.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"sex\":\"female\""));
        assert!(json.contains("\"activity_level\":\"moderately_active\""));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current_weight, Some(150.0));
        assert_eq!(back.unit_system, UnitSystem::Imperial);
    }
}
