use serde::{Deserialize, Serialize};

use crate::error::{PlateError, Result};
use crate::models::FoodItem;

/// The four-quantity nutrient goal a selection is measured against.
///
/// Every value is finite and non-negative; the constructor and the serde
/// path both enforce this, so selectors never see an invalid profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTarget")]
pub struct TargetProfile {
    protein: f64,
    carbs: f64,
    fat: f64,
    calories: f64,
}

#[derive(Deserialize)]
struct RawTarget {
    protein: f64,
    carbs: f64,
    fat: f64,
    calories: f64,
}

impl TryFrom<RawTarget> for TargetProfile {
    type Error = PlateError;

    fn try_from(raw: RawTarget) -> Result<Self> {
        Self::new(raw.protein, raw.carbs, raw.fat, raw.calories)
    }
}

impl TargetProfile {
    pub fn new(protein: f64, carbs: f64, fat: f64, calories: f64) -> Result<Self> {
        for (label, value) in [
            ("protein", protein),
            ("carbs", carbs),
            ("fat", fat),
            ("calories", calories),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlateError::InvalidTarget(format!(
                    "{} must be a non-negative number, got {}",
                    label, value
                )));
            }
        }

        Ok(Self {
            protein,
            carbs,
            fat,
            calories,
        })
    }

    /// Split a daily target evenly across `meals` meals.
    pub fn per_meal(&self, meals: u32) -> Result<Self> {
        if meals == 0 {
            return Err(PlateError::InvalidTarget(
                "meal count must be at least 1".to_string(),
            ));
        }
        let divisor = f64::from(meals);
        Ok(Self {
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
            calories: self.calories / divisor,
        })
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}

/// Aggregate macros over a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl MacroTotals {
    pub fn new(protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            calories,
        }
    }

    /// Totals after adding one more item.
    #[inline]
    pub fn plus(&self, item: &FoodItem) -> Self {
        Self {
            protein: self.protein + item.protein,
            carbs: self.carbs + item.carbs,
            fat: self.fat + item.fat,
            calories: self.calories + item.calories,
        }
    }

    /// Sum a sequence of items in order.
    pub fn sum_of<'a>(items: impl IntoIterator<Item = &'a FoodItem>) -> Self {
        items
            .into_iter()
            .fold(Self::default(), |acc, item| acc.plus(item))
    }

    /// True when protein, carbs and fat all reach the target. Calories are
    /// not part of this test.
    pub fn meets_macros(&self, target: &TargetProfile) -> bool {
        self.protein >= target.protein()
            && self.carbs >= target.carbs()
            && self.fat >= target.fat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_and_nan() {
        assert!(TargetProfile::new(30.0, 40.0, 20.0, 600.0).is_ok());
        assert!(TargetProfile::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(TargetProfile::new(-1.0, 40.0, 20.0, 600.0).is_err());
        assert!(TargetProfile::new(30.0, f64::NAN, 20.0, 600.0).is_err());
        assert!(TargetProfile::new(30.0, 40.0, f64::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_per_meal_divides_every_field() {
        let daily = TargetProfile::new(150.0, 300.0, 60.0, 2400.0).unwrap();
        let meal = daily.per_meal(3).unwrap();
        assert_eq!(meal.protein(), 50.0);
        assert_eq!(meal.carbs(), 100.0);
        assert_eq!(meal.fat(), 20.0);
        assert_eq!(meal.calories(), 800.0);

        assert!(daily.per_meal(0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: TargetProfile =
            serde_json::from_str(r#"{"protein":30,"carbs":40,"fat":20,"calories":600}"#).unwrap();
        assert_eq!(ok.calories(), 600.0);

        let bad = serde_json::from_str::<TargetProfile>(
            r#"{"protein":-5,"carbs":40,"fat":20,"calories":600}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_meets_macros_ignores_calories() {
        let target = TargetProfile::new(10.0, 10.0, 10.0, 1000.0).unwrap();
        let totals = MacroTotals::new(10.0, 12.0, 10.0, 100.0);
        assert!(totals.meets_macros(&target));

        let short = MacroTotals::new(9.9, 12.0, 10.0, 5000.0);
        assert!(!short.meets_macros(&target));
    }

    #[test]
    fn test_sum_of_matches_running_plus() {
        let items = vec![
            FoodItem::new("A", 25.0, 10.0, 8.0, 300.0),
            FoodItem::new("B", 2.0, 8.0, 0.5, 30.0),
        ];
        let totals = MacroTotals::sum_of(&items);
        assert_eq!(totals, MacroTotals::new(27.0, 18.0, 8.5, 330.0));
    }
}
