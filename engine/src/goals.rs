//! Goal calculations: BMR, TDEE, caloric adjustment, and macro targets
//!
//! Pure functions mapping a [`UserProfile`] snapshot to daily calorie and
//! macro-nutrient targets. Every output that depends on an absent required
//! input degrades to `None` for that output only; nothing here panics and
//! nothing silently substitutes zero.
//!
//! Formulas:
//! - Katch-McArdle: BMR = 370 + 21.6 × lean mass (kg), preferred when body
//!   fat percentage is known
//! - Mifflin-St Jeor: BMR = 10 × kg + 6.25 × cm − 5 × age + 5 (male/other)
//!   or − 161 (female)

use crate::profile::{DurationUnit, GoalTimeframe, RateUnit, Sex, UserProfile, WeightTarget};
use crate::units::EnergyUnit;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// kcal equivalent of one kilogram of body-mass change.
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Average weeks per month, used to normalize monthly rates and durations.
pub const WEEKS_PER_MONTH: f64 = 4.345;

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Default daily sodium goal in milligrams, independent of calories.
pub const SODIUM_GOAL_MG: f64 = 2300.0;

/// Resolved daily targets for a profile
///
/// Fields are independently optional: each is `None` exactly when a required
/// input was missing, per the propagate-absence policy. `calories` is in the
/// profile's selected [`EnergyUnit`]; everything else is unit-independent
/// (grams / milligrams), with the energy breakdown in kcal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTargets {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: Option<f64>,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: Option<f64>,
    /// Signed daily caloric adjustment in kcal/day (0 for maintenance)
    pub daily_adjustment_kcal: f64,
    /// Daily calorie target in `energy_unit`
    pub calories: Option<f64>,
    pub energy_unit: EnergyUnit,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate BMR using the Katch-McArdle equation (requires body fat %)
///
/// LBM = weight × (1 − body_fat_percent / 100); BMR = 370 + 21.6 × LBM
pub fn bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Calculate BMR using the Mifflin-St Jeor equation
///
/// `Sex::Other` uses the male branch.
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Female => base - 161.0,
        Sex::Male | Sex::Other => base + 5.0,
    }
}

/// Resolve BMR for a profile on the given date
///
/// Katch-McArdle when body fat and weight are known, otherwise Mifflin-St
/// Jeor, which additionally requires age and height. `None` when the selected
/// formula's inputs are incomplete.
pub fn compute_bmr_on(profile: &UserProfile, today: NaiveDate) -> Option<f64> {
    let weight_kg = profile.current_weight_kg();
    if let (Some(kg), Some(bf)) = (weight_kg, profile.body_fat_percent) {
        return Some(bmr_katch_mcardle(kg, bf));
    }
    let kg = weight_kg?;
    let age = profile.age_on(today)?;
    let height_cm = profile.height_cm?;
    Some(bmr_mifflin(kg, height_cm, age, profile.sex))
}

/// Resolve TDEE (BMR × activity multiplier) for a profile on the given date
pub fn compute_tdee_on(profile: &UserProfile, today: NaiveDate) -> Option<f64> {
    compute_bmr_on(profile, today).map(|bmr| bmr * profile.activity_level.multiplier())
}

// ============================================================================
// Caloric Adjustment
// ============================================================================

/// Resolve the signed weekly weight-change rate in kg/week
///
/// Rate mode signs the magnitude by `target` (lose negative, gain positive,
/// maintain zero); a missing amount means maintenance, not an error.
/// Duration mode takes its sign from `goal_weight − current_weight` and
/// ignores `target` entirely; missing weights or a non-positive length also
/// mean maintenance. The two modes are intentionally asymmetric.
pub fn weekly_rate_kg(profile: &UserProfile) -> f64 {
    match profile.timeframe {
        GoalTimeframe::Rate => {
            let amount = match profile.goal_rate_amount {
                Some(amount) => profile.unit_system.to_kg(amount),
                None => return 0.0,
            };
            let per_week = match profile.goal_rate_unit {
                RateUnit::PerWeek => amount,
                RateUnit::PerMonth => amount / WEEKS_PER_MONTH,
            };
            match profile.target {
                WeightTarget::Lose => -per_week,
                WeightTarget::Gain => per_week,
                WeightTarget::Maintain => 0.0,
            }
        }
        GoalTimeframe::Duration => {
            let (Some(current), Some(goal)) =
                (profile.current_weight_kg(), profile.goal_weight_kg())
            else {
                return 0.0;
            };
            let Some(length) = profile.goal_duration_value else {
                return 0.0;
            };
            let weeks = match profile.goal_duration_unit {
                DurationUnit::Weeks => f64::from(length),
                DurationUnit::Months => f64::from(length) * WEEKS_PER_MONTH,
            };
            if weeks <= 0.0 {
                return 0.0;
            }
            (goal - current) / weeks
        }
    }
}

/// Signed daily caloric adjustment in kcal/day derived from the weekly rate
pub fn daily_adjustment_kcal(profile: &UserProfile) -> f64 {
    weekly_rate_kg(profile) * KCAL_PER_KG_BODY_MASS / 7.0
}

/// Daily calorie target in kcal on the given date (TDEE + adjustment)
pub fn target_calories_kcal_on(profile: &UserProfile, today: NaiveDate) -> Option<f64> {
    compute_tdee_on(profile, today).map(|tdee| tdee + daily_adjustment_kcal(profile))
}

// ============================================================================
// Macro and Micro Goals
// ============================================================================

/// Default fiber goal in grams: 14 g per 1000 kcal
pub fn default_fiber_g(target_kcal: f64) -> f64 {
    (target_kcal / 1000.0 * 14.0).max(0.0)
}

/// Default sugar goal in grams: 10% of calories at 4 kcal/g
pub fn default_sugar_g(target_kcal: f64) -> f64 {
    (target_kcal * 0.10 / KCAL_PER_G_CARBS).max(0.0)
}

fn resolve_macros(
    profile: &UserProfile,
    target_kcal: Option<f64>,
) -> (Option<f64>, Option<f64>, Option<f64>) {
    // Explicit grams win, but only as a complete set
    if let (Some(p), Some(c), Some(f)) = (profile.protein_g, profile.carbs_g, profile.fat_g) {
        return (Some(p), Some(c), Some(f));
    }
    let from_percent = |percent: Option<f64>, kcal_per_g: f64| {
        percent.zip(target_kcal).map(|(pct, kcal)| pct * kcal / 100.0 / kcal_per_g)
    };
    (
        from_percent(profile.protein_percent, KCAL_PER_G_PROTEIN),
        from_percent(profile.carbs_percent, KCAL_PER_G_CARBS),
        from_percent(profile.fat_percent, KCAL_PER_G_FAT),
    )
}

// ============================================================================
// Entry Points
// ============================================================================

/// Compute the full set of daily targets for a profile on the given date
///
/// Deterministic form used by tests and by the insights aggregator; the date
/// only feeds the age derivation.
pub fn compute_goals_on(profile: &UserProfile, today: NaiveDate) -> GoalTargets {
    let bmr = compute_bmr_on(profile, today);
    let tdee = bmr.map(|bmr| bmr * profile.activity_level.multiplier());
    let adjustment = daily_adjustment_kcal(profile);
    let target_kcal = tdee.map(|tdee| tdee + adjustment);

    let (protein_g, carbs_g, fat_g) = resolve_macros(profile, target_kcal);

    let fiber_g = profile
        .fiber_goal_g
        .or_else(|| target_kcal.map(default_fiber_g));
    let sugar_g = profile
        .sugar_goal_g
        .or_else(|| target_kcal.map(default_sugar_g));
    let sodium_mg = profile.sodium_goal_mg.or(Some(SODIUM_GOAL_MG));

    GoalTargets {
        bmr,
        tdee,
        daily_adjustment_kcal: adjustment,
        // Energy unit conversion happens here and nowhere earlier
        calories: target_kcal.map(|kcal| profile.energy_unit.from_kcal(kcal)),
        energy_unit: profile.energy_unit,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        sugar_g,
        sodium_mg,
    }
}

/// Compute the full set of daily targets for a profile as of now
pub fn compute_goals(profile: &UserProfile) -> GoalTargets {
    compute_goals_on(profile, Utc::now().date_naive())
}
