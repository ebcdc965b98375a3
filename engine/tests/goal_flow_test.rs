//! End-to-end flow: onboarding profile -> daily targets -> logged meals -> snapshot

use chrono::{NaiveDate, TimeZone, Utc};
use nutrition_engine::{
    compute_goals_on, compute_snapshot, ActivityLevel, FoodNutrients, GoalTimeframe, LoggedMeal,
    MealType, RateUnit, Sex, StatsWindow, UnitSystem, UserProfile, WeightTarget,
};

fn onboarded_profile() -> UserProfile {
    // Imperial user losing 1 lb/week, macros as a 30/40/30 split
    UserProfile {
        sex: Sex::Male,
        birth_date: NaiveDate::from_ymd_opt(1991, 4, 12),
        height_cm: Some(180.0),
        unit_system: UnitSystem::Imperial,
        current_weight: Some(190.0),
        goal_weight: Some(175.0),
        activity_level: ActivityLevel::ModeratelyActive,
        target: WeightTarget::Lose,
        timeframe: GoalTimeframe::Rate,
        goal_rate_amount: Some(1.0),
        goal_rate_unit: RateUnit::PerWeek,
        protein_percent: Some(30.0),
        carbs_percent: Some(40.0),
        fat_percent: Some(30.0),
        ..Default::default()
    }
}

#[test]
fn test_full_flow_goals_then_snapshot() {
    let profile = onboarded_profile();
    let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

    // Targets resolve: weight, height, and age are all present
    let targets = compute_goals_on(&profile, today);
    let kcal = targets
        .calories
        .expect("complete profile must yield a calorie target");

    // Deficit applied: target sits below TDEE by ~499 kcal
    let tdee = targets.tdee.unwrap();
    assert!((tdee - kcal - 0.45359237 * 7700.0 / 7.0).abs() < 1e-6);

    // Macro split accounts for the target calories it was derived from
    let macro_kcal = targets.protein_g.unwrap() * 4.0
        + targets.carbs_g.unwrap() * 4.0
        + targets.fat_g.unwrap() * 9.0;
    assert!((macro_kcal - kcal).abs() < 1e-6);

    // Log two days of meals inside a weekly window
    let chicken_bowl = FoodNutrients {
        calories: 650.0,
        protein_g: 45.0,
        carbs_g: 60.0,
        fat_g: 22.0,
        fiber_g: 8.0,
        sugar_g: 6.0,
        sodium_mg: 900.0,
    };
    let reference = Utc.with_ymd_and_hms(2026, 8, 20, 21, 0, 0).unwrap();
    let meals = vec![
        LoggedMeal {
            food_name: "Chicken bowl".to_string(),
            food: chicken_bowl,
            meal_type: MealType::Lunch,
            servings: 1.0,
            logged_at: Utc.with_ymd_and_hms(2026, 8, 19, 12, 30, 0).unwrap(),
        },
        LoggedMeal {
            food_name: "Chicken bowl".to_string(),
            food: chicken_bowl,
            meal_type: MealType::Dinner,
            servings: 1.5,
            logged_at: Utc.with_ymd_and_hms(2026, 8, 20, 19, 0, 0).unwrap(),
        },
    ];

    let snapshot = compute_snapshot(StatsWindow::Weekly, &profile, &meals, reference);
    assert_eq!(snapshot.days_in_window, 7);
    assert_eq!(snapshot.logged_days, 2);
    // (650 + 975) / 2
    assert!((snapshot.avg_calories - 812.5).abs() < 1e-9);

    // The snapshot's goals agree with the standalone goal resolution
    assert!((snapshot.calorie_goal_kcal.unwrap() - kcal).abs() < 1e-9);
    assert_eq!(snapshot.protein_goal_g, targets.protein_g);
    assert_eq!(snapshot.sodium_goal_mg, Some(2300.0));
}

#[test]
fn test_unit_switch_keeps_goals_consistent() {
    let mut profile = onboarded_profile();
    let today = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

    let before = compute_goals_on(&profile, today);
    profile.set_unit_system(UnitSystem::Metric);
    let after = compute_goals_on(&profile, today);

    // Stored values changed unit but the physiology did not: targets agree
    // within what the 0.1 display rounding can move them
    let drift = (before.calories.unwrap() - after.calories.unwrap()).abs();
    assert!(drift < 60.0, "unit switch moved calories by {drift} kcal");
    assert_eq!(profile.unit_system, UnitSystem::Metric);
    assert_eq!(profile.current_weight, Some(86.2)); // 190 lbs
}
