use serde::{Deserialize, Serialize};

use crate::nutrition::{decode_nutrients, NutrientFacts};

/// A food item with its four macro quantities.
///
/// Protein, carbs and fat are stored rounded to one decimal and calories
/// truncated to a whole number when built from a nutrient payload. Items are
/// never unique by name: two records with identical fields are still two
/// independently selectable items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl FoodItem {
    /// Build an item from already-canonical values.
    pub fn new(name: impl Into<String>, protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self {
            name: name.into(),
            protein,
            carbs,
            fat,
            calories,
        }
    }

    /// Build an item from decoded facts, applying the stored rounding.
    pub fn from_facts(name: impl Into<String>, facts: &NutrientFacts) -> Self {
        Self {
            name: name.into(),
            protein: round_one_decimal(facts.protein),
            carbs: round_one_decimal(facts.carbs),
            fat: round_one_decimal(facts.fat),
            calories: facts.calories.trunc(),
        }
    }

    /// Decode a raw nutrient payload and build the item from it.
    pub fn from_payload(name: impl Into<String>, payload: &str) -> Self {
        Self::from_facts(name, &decode_nutrients(payload))
    }

    /// Protein grams per calorie, with calories floored at 1.
    #[inline]
    pub fn protein_ratio(&self) -> f64 {
        self.protein / self.calories.max(1.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: P:{} C:{} F:{} Cal:{}",
            self.name, self.protein, self.carbs, self.fat, self.calories
        )
    }
}

/// Round to one decimal place on the exact binary value, ties to even.
///
/// Scaling by ten first would round 0.15 (stored just below 0.15) up to 0.2.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_facts_rounding() {
        let facts = NutrientFacts {
            calories: 312.9,
            fat: 8.04,
            carbs: 41.26,
            protein: 20.37,
        };
        let item = FoodItem::from_facts("Chicken Bowl", &facts);

        assert_eq!(item.protein, 20.4);
        assert_eq!(item.carbs, 41.3);
        assert_eq!(item.fat, 8.0);
        // Calories are truncated, not rounded
        assert_eq!(item.calories, 312.0);
    }

    #[test]
    fn test_rounding_uses_exact_value_and_ties_to_even() {
        let round = |protein| {
            let facts = NutrientFacts {
                protein,
                ..NutrientFacts::default()
            };
            FoodItem::from_facts("Label", &facts).protein
        };

        // Exact tie goes to the even digit
        assert_eq!(round(20.25), 20.2);
        // 0.15 is stored just below the tie, 2.45 just above
        assert_eq!(round(0.15), 0.1);
        assert_eq!(round(2.45), 2.5);
        assert_eq!(round(20.37), 20.4);
    }

    #[test]
    fn test_from_payload_single_fact() {
        let item = FoodItem::from_payload("Tofu", r#"{"name":"Protein","value":20.37}"#);
        assert_eq!(item.name, "Tofu");
        assert_eq!(item.protein, 20.4);
        assert_eq!(item.carbs, 0.0);
        assert_eq!(item.fat, 0.0);
        assert_eq!(item.calories, 0.0);
    }

    #[test]
    fn test_protein_ratio_floors_calories() {
        let item = FoodItem::new("Broth", 2.0, 0.0, 0.0, 0.0);
        assert_eq!(item.protein_ratio(), 2.0);

        let item = FoodItem::new("Egg", 6.0, 0.5, 5.0, 60.0);
        assert!((item.protein_ratio() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_duplicates_compare_equal_but_stay_separate() {
        let a = FoodItem::new("Rice", 4.0, 45.0, 0.4, 200.0);
        let b = a.clone();
        assert_eq!(a, b);
        let pool = vec![a, b];
        assert_eq!(pool.len(), 2);
    }
}
