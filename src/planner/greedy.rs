use tracing::debug;

use crate::models::{FoodItem, MacroTotals, Phase, Pick, SelectionResult, TargetProfile};
use crate::planner::calculations::distance;
use crate::planner::constants::DEFAULT_GREEDY_MAX_ITEMS;

/// Runtime knobs for the greedy selector.
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    pub max_items: usize,
    /// Stop once the latest pick lands closer than this to the target.
    pub stop_within: Option<f64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_GREEDY_MAX_ITEMS,
            stop_within: None,
        }
    }
}

/// Pick items one at a time, each minimizing the distance to `target`.
///
/// No classification and no bonuses. Stops when `max_items` are picked, the
/// pool runs out, or protein, carbs and fat all reach the target (calories
/// do not take part in that test).
pub fn select_greedy(
    target: &TargetProfile,
    pool: &[FoodItem],
    config: &GreedyConfig,
) -> SelectionResult {
    let mut remaining: Vec<usize> = (0..pool.len()).collect();
    let mut picks = Vec::with_capacity(config.max_items.min(pool.len()));
    let mut totals = MacroTotals::default();

    while picks.len() < config.max_items {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &idx) in remaining.iter().enumerate() {
            let d = distance(target, &totals.plus(&pool[idx]));
            match best {
                Some((_, best_distance)) if d >= best_distance => {}
                _ => best = Some((pos, d)),
            }
        }

        let Some((pos, best_distance)) = best else {
            break;
        };

        let idx = remaining.remove(pos);
        let item = &pool[idx];
        debug!(item = %item.debug_string(), distance = best_distance, "greedy pick");
        totals = totals.plus(item);
        picks.push(Pick {
            pool_index: idx,
            phase: Phase::Greedy,
            item: item.clone(),
        });

        if totals.meets_macros(target) {
            debug!("protein, carbs and fat targets reached");
            break;
        }
        if config.stop_within.is_some_and(|limit| best_distance < limit) {
            debug!(distance = best_distance, "close enough to target");
            break;
        }
    }

    SelectionResult::from_picks(picks)
}
