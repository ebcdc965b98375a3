//! Logged meal records
//!
//! Caller-owned inputs to the insights aggregation. The engine reads these,
//! never stores or mutates them; the host application owns persistence and
//! account filtering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal-type label for a logged entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Nutrient values for one serving of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FoodNutrients {
    /// kcal per serving
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub sodium_mg: f64,
}

impl FoodNutrients {
    /// Scale every nutrient by a serving multiplier
    pub fn scaled(&self, servings: f64) -> Self {
        Self {
            calories: self.calories * servings,
            protein_g: self.protein_g * servings,
            carbs_g: self.carbs_g * servings,
            fat_g: self.fat_g * servings,
            fiber_g: self.fiber_g * servings,
            sugar_g: self.sugar_g * servings,
            sodium_mg: self.sodium_mg * servings,
        }
    }

    /// Add another nutrient vector in place
    pub fn accumulate(&mut self, other: &Self) {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
        self.fiber_g += other.fiber_g;
        self.sugar_g += other.sugar_g;
        self.sodium_mg += other.sodium_mg;
    }
}

/// One logged meal: a food reference, meal type, servings, and timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub food_name: String,
    /// Per-serving nutrient values of the referenced food
    pub food: FoodNutrients,
    pub meal_type: MealType,
    /// Serving multiplier applied to every nutrient
    pub servings: f64,
    pub logged_at: DateTime<Utc>,
}

impl LoggedMeal {
    /// Total nutrients for this entry (per-serving values × servings)
    pub fn total_nutrients(&self) -> FoodNutrients {
        self.food.scaled(self.servings)
    }

    /// Total calories for this entry
    pub fn total_calories(&self) -> f64 {
        self.food.calories * self.servings
    }
}
