use std::collections::HashSet;

use assert_float_eq::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plate_picker_rs::models::{FoodItem, Phase, SelectionResult, TargetProfile};
use plate_picker_rs::planner::{
    classify, meets_main_rule, select_balanced, select_greedy, BalancedConfig, Category,
    GreedyConfig,
};

fn random_item(rng: &mut StdRng, n: usize) -> FoodItem {
    FoodItem::new(
        format!("item-{}", n),
        rng.gen_range(0.0..40.0),
        rng.gen_range(0.0..80.0),
        rng.gen_range(0.0..30.0),
        rng.gen_range(0.0..700.0),
    )
}

fn random_pool(rng: &mut StdRng) -> Vec<FoodItem> {
    let len = rng.gen_range(1..25);
    (0..len).map(|n| random_item(rng, n)).collect()
}

fn random_target(rng: &mut StdRng) -> TargetProfile {
    TargetProfile::new(
        rng.gen_range(0.0..60.0),
        rng.gen_range(0.0..120.0),
        rng.gen_range(0.0..50.0),
        rng.gen_range(0.0..1200.0),
    )
    .unwrap()
}

fn assert_totals_are_sum(result: &SelectionResult) {
    let totals = result.totals();
    let protein: f64 = result.items().map(|i| i.protein).sum();
    let carbs: f64 = result.items().map(|i| i.carbs).sum();
    let fat: f64 = result.items().map(|i| i.fat).sum();
    let calories: f64 = result.items().map(|i| i.calories).sum();

    assert_float_absolute_eq!(totals.protein, protein, 1e-9);
    assert_float_absolute_eq!(totals.carbs, carbs, 1e-9);
    assert_float_absolute_eq!(totals.fat, fat, 1e-9);
    assert_float_absolute_eq!(totals.calories, calories, 1e-9);
}

fn assert_no_duplicate_slots(result: &SelectionResult) {
    let slots: HashSet<usize> = result.picks().iter().map(|p| p.pool_index).collect();
    assert_eq!(slots.len(), result.len(), "pool slot picked twice");
}

#[test]
fn test_reference_scenario_orders_vegetables_by_carbs() {
    let pool = vec![
        FoodItem::new("A", 25.0, 10.0, 8.0, 300.0),
        FoodItem::new("B", 2.0, 8.0, 0.5, 30.0),
        FoodItem::new("C", 1.0, 12.0, 0.3, 25.0),
        FoodItem::new("D", 5.0, 40.0, 10.0, 350.0),
    ];
    let target = TargetProfile::new(30.0, 40.0, 20.0, 600.0).unwrap();

    let result = select_balanced(&target, &pool, &BalancedConfig::default());

    assert_eq!(result.names(), vec!["A", "C", "B", "D"]);
    assert_totals_are_sum(&result);
    assert_float_absolute_eq!(result.totals().protein, 33.0, 1e-9);
    assert_float_absolute_eq!(result.totals().calories, 705.0, 1e-9);
}

#[test]
fn test_balanced_invariants_on_random_pools() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let pool = random_pool(&mut rng);
        let target = random_target(&mut rng);
        let max_items = rng.gen_range(0..8);
        let result = select_balanced(&target, &pool, &BalancedConfig { max_items });

        assert!(result.len() <= max_items);
        assert!(result.len() <= pool.len());
        assert_no_duplicate_slots(&result);
        assert_totals_are_sum(&result);

        for pick in result.picks() {
            assert_eq!(pick.item, pool[pick.pool_index]);
        }

        if max_items > 0 && pool.iter().any(meets_main_rule) {
            assert_eq!(result.picks()[0].phase, Phase::Anchor);
        }
    }
}

#[test]
fn test_balanced_fills_to_budget_when_pool_allows() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let pool = random_pool(&mut rng);
        let target = random_target(&mut rng);
        let result = select_balanced(&target, &pool, &BalancedConfig::default());
        assert_eq!(result.len(), pool.len().min(5));
    }
}

#[test]
fn test_greedy_invariants_on_random_pools() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..200 {
        let pool = random_pool(&mut rng);
        let target = random_target(&mut rng);
        let config = GreedyConfig {
            max_items: rng.gen_range(0..12),
            stop_within: None,
        };
        let result = select_greedy(&target, &pool, &config);

        assert!(result.len() <= config.max_items);
        assert_no_duplicate_slots(&result);
        assert_totals_are_sum(&result);
        assert!(result.picks().iter().all(|p| p.phase == Phase::Greedy));

        // Only the last pick may have reached the macro target
        let picks = result.picks();
        for end in 1..picks.len() {
            let partial = SelectionResult::from_picks(picks[..end].to_vec());
            assert!(!partial.totals().meets_macros(&target));
        }
    }
}

#[test]
fn test_greedy_ignores_calories_when_stopping() {
    let pool = vec![
        FoodItem::new("Shake", 30.0, 40.0, 20.0, 100.0),
        FoodItem::new("Water", 0.0, 0.0, 0.0, 0.0),
    ];
    let target = TargetProfile::new(30.0, 40.0, 20.0, 600.0).unwrap();

    let result = select_greedy(&target, &pool, &GreedyConfig::default());
    assert_eq!(result.names(), vec!["Shake"]);
}

#[test]
fn test_classifier_is_total_and_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);

    for n in 0..500 {
        let item = random_item(&mut rng, n);
        let first = classify(&item);
        assert_eq!(first, classify(&item.clone()));
        assert!(matches!(
            first,
            Category::Main | Category::Vegetable | Category::Side
        ));
        if meets_main_rule(&item) {
            assert_eq!(first, Category::Main);
        }
    }
}
