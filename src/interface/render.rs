use crate::models::{FoodItem, SelectionResult, TargetProfile};
use crate::planner::{classify, distance, LocationComparison};

/// Display a selection in a formatted table followed by its totals.
pub fn display_selection(title: &str, selection: &SelectionResult, target: &TargetProfile) {
    if selection.is_empty() {
        println!("No items selected (no eligible foods or zero item budget).");
        return;
    }

    println!();
    println!("=== {} ===", title);
    println!();

    let max_name_len = selection.items().map(|f| f.name.len()).max().unwrap_or(10);

    for (i, pick) in selection.picks().iter().enumerate() {
        let item = &pick.item;
        println!(
            "{:>3}. {:<width$}  [{:<9}]  P {:>5.1}  C {:>5.1}  F {:>5.1}  {:>4.0} cal",
            i + 1,
            item.name,
            pick.phase.label(),
            item.protein,
            item.carbs,
            item.fat,
            item.calories,
            width = max_name_len
        );
    }

    let totals = selection.totals();
    println!();
    println!("--- Totals ---");
    println!(
        "Protein {:.1}/{:.1}  Carbs {:.1}/{:.1}  Fat {:.1}/{:.1}  Calories {:.0}/{:.0}",
        totals.protein,
        target.protein(),
        totals.carbs,
        target.carbs(),
        totals.fat,
        target.fat(),
        totals.calories,
        target.calories()
    );
    println!("Distance to target: {:.1}", distance(target, &totals));
    println!();
}

/// Display every location's score and the winning selection.
pub fn display_comparison(comparison: &LocationComparison<String>, target: &TargetProfile) {
    println!();
    println!("=== Location Scores (lower is better) ===");
    println!();

    for run in &comparison.runs {
        match run.score {
            Some(score) => println!("  {:<20} {:>8.1}  ({} items)", run.location, score, run.selection.len()),
            None => println!("  {:<20} {:>8}", run.location, "n/a"),
        }
    }

    match comparison.winner() {
        Some(run) => display_selection(&format!("Best: {}", run.location), &run.selection, target),
        None => {
            println!();
            println!("No eligible location: every location came back empty.");
            println!();
        }
    }
}

/// Display foods with their derived category.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  [{:<9}] {} - P:{} C:{} F:{} {} cal",
            classify(food),
            food.name,
            food.protein,
            food.carbs,
            food.fat,
            food.calories
        );
    }

    println!();
}
