use std::fmt;

use serde::Serialize;

use crate::models::FoodItem;
use crate::planner::constants::*;

/// Heuristic dish role. Derived on demand, never stored on the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Main,
    Vegetable,
    Side,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::Vegetable => "Vegetable",
            Category::Side => "Side",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Protein anchor: protein-heavy, calorie-heavy, or protein-dense.
pub fn meets_main_rule(item: &FoodItem) -> bool {
    item.protein >= MAIN_MIN_PROTEIN
        || item.calories >= MAIN_MIN_CALORIES
        || item.protein_ratio() >= MAIN_MIN_PROTEIN_RATIO
}

/// Low-calorie, low-fat and modest-carb at once.
///
/// Shared by [`classify`] and the vegetable bonus of the fill phase, which
/// checks this rule on its own without the main precedence.
pub fn meets_vegetable_rule(item: &FoodItem) -> bool {
    item.calories <= VEGETABLE_MAX_CALORIES
        && item.fat <= VEGETABLE_MAX_FAT
        && item.carbs <= VEGETABLE_MAX_CARBS
}

/// Classify an item. Main takes precedence over Vegetable; Side is the rest.
pub fn classify(item: &FoodItem) -> Category {
    if meets_main_rule(item) {
        Category::Main
    } else if meets_vegetable_rule(item) {
        Category::Vegetable
    } else {
        Category::Side
    }
}
