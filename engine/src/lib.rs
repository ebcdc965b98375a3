//! Nutrition Engine
//!
//! Pure calculation core for a nutrition-tracking application: converts a
//! user's demographics, body composition, activity level, and weight-change
//! goal into daily calorie and macro-nutrient targets, and rolls logged
//! meals up into windowed averages compared against those targets.
//!
//! Everything here is synchronous, side-effect-free computation over plain
//! value objects. The host application owns persistence, networking, UI, and
//! change propagation; it calls [`goals::compute_goals`] and
//! [`insights::compute_snapshot`] with snapshots of its data and renders the
//! plain results. Missing required inputs surface as `None`, never as zero
//! or a panic.

pub mod goals;
pub mod insights;
pub mod meals;
pub mod profile;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use goals::{compute_goals, compute_goals_on, GoalTargets};
pub use insights::{compute_snapshot, compute_snapshot_now, StatsSnapshot, StatsWindow};
pub use meals::{FoodNutrients, LoggedMeal, MealType};
pub use profile::{
    ActivityLevel, DurationUnit, GoalTimeframe, RateUnit, Sex, UserProfile, WeightTarget,
};
pub use units::{EnergyUnit, FeetInches, UnitSystem};
pub use validation::ValidationError;
