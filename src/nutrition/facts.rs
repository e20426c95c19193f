use serde::Deserialize;

use crate::nutrition::decoder::parse_facts;

/// One `{"name": ..., "value": ...}` record. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutrientFact {
    pub name: String,
    pub value: f64,
}

/// The four nutrients consumed downstream. Missing nutrients are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientFacts {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

impl NutrientFacts {
    /// Pick the four nutrients out of a fact list. The first matching fact
    /// wins; later duplicates are ignored.
    pub fn from_facts(facts: &[NutrientFact]) -> Self {
        let mut calories = None;
        let mut fat = None;
        let mut carbs = None;
        let mut protein = None;

        for fact in facts {
            let name = fact.name.to_lowercase();

            if calories.is_none() && name.contains("calories") && !name.contains("from fat") {
                calories = Some(fact.value);
            }
            if fat.is_none() && name.contains("total fat") {
                fat = Some(fact.value);
            }
            if carbs.is_none() && name.contains("total carbohydrate") {
                carbs = Some(fact.value);
            }
            if protein.is_none() && name == "protein" {
                protein = Some(fact.value);
            }
        }

        Self {
            calories: calories.unwrap_or(0.0),
            fat: fat.unwrap_or(0.0),
            carbs: carbs.unwrap_or(0.0),
            protein: protein.unwrap_or(0.0),
        }
    }
}

/// Decode a raw payload into the four canonical nutrients. Never fails.
pub fn decode_nutrients(payload: &str) -> NutrientFacts {
    NutrientFacts::from_facts(&parse_facts(payload))
}
