use crate::models::{FoodItem, MacroTotals, TargetProfile};
use crate::planner::constants::*;

/// Unweighted L1 distance between totals and target across all four macros.
pub fn distance(target: &TargetProfile, totals: &MacroTotals) -> f64 {
    (target.protein() - totals.protein).abs()
        + (target.carbs() - totals.carbs).abs()
        + (target.fat() - totals.fat).abs()
        + (target.calories() - totals.calories).abs()
}

/// Score a main as the bundle's protein anchor. Higher is better.
///
/// Coverage of the anchor's protein share (capped at 1.0) plus a protein
/// density term.
pub fn anchor_score(target: &TargetProfile, item: &FoodItem) -> f64 {
    let expected = (target.protein() * ANCHOR_PROTEIN_SHARE).max(1.0);
    let coverage = (item.protein / expected).min(1.0);
    coverage * ANCHOR_COVERAGE_WEIGHT + item.protein_ratio() * ANCHOR_DENSITY_WEIGHT
}

/// Weighted distance used to rank locations. Lower is better.
///
/// Protein and calories weigh more than carbs and fat.
pub fn location_score(target: &TargetProfile, totals: &MacroTotals) -> f64 {
    (target.protein() - totals.protein).abs() * LOCATION_PROTEIN_WEIGHT
        + (target.carbs() - totals.carbs).abs() * LOCATION_CARBS_WEIGHT
        + (target.fat() - totals.fat).abs() * LOCATION_FAT_WEIGHT
        + (target.calories() - totals.calories).abs() * LOCATION_CALORIES_WEIGHT
}
