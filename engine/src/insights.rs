//! Insights aggregation: windowed meal statistics compared against goals
//!
//! Buckets logged meals by calendar day inside a daily/weekly/monthly window,
//! averages each nutrient over the days that actually have entries, and
//! merges in the goal values resolved by the goal calculations.
//!
//! Averages are defined as 0 when no days were logged. That is a deliberate
//! departure from the goal calculations' propagate-absence rule: an average
//! over zero observations is conventionally reported as zero here, while an
//! uncomputable goal stays `None`.

use crate::goals::{compute_goals_on, target_calories_kcal_on};
use crate::meals::{FoodNutrients, LoggedMeal};
use crate::profile::UserProfile;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregation window kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatsWindow {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl StatsWindow {
    /// Calendar days covered by this window kind
    pub fn days_in_window(&self) -> u32 {
        match self {
            StatsWindow::Daily => 1,
            StatsWindow::Weekly => 7,
            StatsWindow::Monthly => 30,
        }
    }
}

/// Immutable result of one aggregation call
///
/// Averages are over logged days only (0 when none). Goal fields are `None`
/// when unresolvable — "no goal set" is preserved, never coerced to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub window: StatsWindow,
    /// Inclusive start of the window
    pub start: DateTime<Utc>,
    /// Exclusive end of the window
    pub end: DateTime<Utc>,
    pub days_in_window: u32,
    /// Count of days in the window with at least one logged meal
    pub logged_days: u32,
    pub avg_calories: f64,
    pub avg_protein_g: f64,
    pub avg_carbs_g: f64,
    pub avg_fat_g: f64,
    pub avg_fiber_g: f64,
    pub avg_sugar_g: f64,
    pub avg_sodium_mg: f64,
    /// Daily calorie goal in kcal (meal calories are logged in kcal)
    pub calorie_goal_kcal: Option<f64>,
    pub protein_goal_g: Option<f64>,
    pub carbs_goal_g: Option<f64>,
    pub fat_goal_g: Option<f64>,
    pub fiber_goal_g: Option<f64>,
    pub sugar_goal_g: Option<f64>,
    pub sodium_goal_mg: Option<f64>,
}

/// Resolve the half-open interval [start, end) for a window
///
/// Daily covers the reference day. Weekly and monthly windows start at the
/// beginning of (reference − 6) / (reference − 29) days and end one day past
/// the reference instant, so the reference day is included in full.
pub fn window_bounds(window: StatsWindow, reference: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let day_start =
        |instant: DateTime<Utc>| instant.date_naive().and_time(NaiveTime::MIN).and_utc();
    match window {
        StatsWindow::Daily => {
            let start = day_start(reference);
            (start, start + Duration::days(1))
        }
        StatsWindow::Weekly => (
            day_start(reference - Duration::days(6)),
            reference + Duration::days(1),
        ),
        StatsWindow::Monthly => (
            day_start(reference - Duration::days(29)),
            reference + Duration::days(1),
        ),
    }
}

/// Sum meal nutrient totals into per-calendar-day buckets
fn bucket_by_day(
    meals: &[LoggedMeal],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> BTreeMap<NaiveDate, FoodNutrients> {
    let mut buckets: BTreeMap<NaiveDate, FoodNutrients> = BTreeMap::new();
    for meal in meals {
        if meal.logged_at < start || meal.logged_at >= end {
            continue;
        }
        buckets
            .entry(meal.logged_at.date_naive())
            .or_default()
            .accumulate(&meal.total_nutrients());
    }
    buckets
}

/// Compute a statistics snapshot for the window ending at `reference`
pub fn compute_snapshot(
    window: StatsWindow,
    profile: &UserProfile,
    meals: &[LoggedMeal],
    reference: DateTime<Utc>,
) -> StatsSnapshot {
    let (start, end) = window_bounds(window, reference);
    let buckets = bucket_by_day(meals, start, end);

    let logged_days = buckets.len() as u32;
    let mut totals = FoodNutrients::default();
    for day in buckets.values() {
        totals.accumulate(day);
    }
    let avg = |sum: f64| {
        if logged_days == 0 {
            0.0
        } else {
            sum / f64::from(logged_days)
        }
    };

    let today = reference.date_naive();
    let targets = compute_goals_on(profile, today);

    StatsSnapshot {
        window,
        start,
        end,
        days_in_window: window.days_in_window(),
        logged_days,
        avg_calories: avg(totals.calories),
        avg_protein_g: avg(totals.protein_g),
        avg_carbs_g: avg(totals.carbs_g),
        avg_fat_g: avg(totals.fat_g),
        avg_fiber_g: avg(totals.fiber_g),
        avg_sugar_g: avg(totals.sugar_g),
        avg_sodium_mg: avg(totals.sodium_mg),
        calorie_goal_kcal: target_calories_kcal_on(profile, today),
        protein_goal_g: targets.protein_g,
        carbs_goal_g: targets.carbs_g,
        fat_goal_g: targets.fat_g,
        fiber_goal_g: targets.fiber_g,
        sugar_goal_g: targets.sugar_g,
        sodium_goal_mg: targets.sodium_mg,
    }
}

/// Compute a statistics snapshot for the window ending now
pub fn compute_snapshot_now(
    window: StatsWindow,
    profile: &UserProfile,
    meals: &[LoggedMeal],
) -> StatsSnapshot {
    compute_snapshot(window, profile, meals, Utc::now())
}
