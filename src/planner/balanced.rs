use tracing::debug;

use crate::models::{FoodItem, MacroTotals, Phase, Pick, SelectionResult, TargetProfile};
use crate::planner::calculations::{anchor_score, distance};
use crate::planner::classify::{classify, meets_vegetable_rule, Category};
use crate::planner::constants::*;

/// Runtime knobs for the balanced selector.
#[derive(Debug, Clone)]
pub struct BalancedConfig {
    pub max_items: usize,
}

impl Default for BalancedConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_BALANCED_MAX_ITEMS,
        }
    }
}

/// Running state of one selection: picks so far, which pool slots are
/// taken, and the accumulated totals.
struct Bundle<'a> {
    pool: &'a [FoodItem],
    picks: Vec<Pick>,
    taken: Vec<bool>,
    totals: MacroTotals,
    max_items: usize,
}

impl<'a> Bundle<'a> {
    fn new(pool: &'a [FoodItem], max_items: usize) -> Self {
        Self {
            pool,
            picks: Vec::with_capacity(max_items.min(pool.len())),
            taken: vec![false; pool.len()],
            totals: MacroTotals::default(),
            max_items,
        }
    }

    fn is_full(&self) -> bool {
        self.picks.len() >= self.max_items
    }

    fn slots_left(&self) -> usize {
        self.max_items.saturating_sub(self.picks.len())
    }

    fn add(&mut self, pool_index: usize, phase: Phase) {
        let pool = self.pool;
        let item = &pool[pool_index];
        debug!(phase = phase.label(), item = %item.debug_string(), "selected");
        self.totals = self.totals.plus(item);
        self.taken[pool_index] = true;
        self.picks.push(Pick {
            pool_index,
            phase,
            item: item.clone(),
        });
    }

    fn into_result(self) -> SelectionResult {
        SelectionResult::from_picks(self.picks)
    }
}

/// Highest anchor-scoring main. Ties go to the earliest pool position.
fn pick_anchor(target: &TargetProfile, pool: &[FoodItem], categories: &[Category]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, item) in pool.iter().enumerate() {
        if categories[idx] != Category::Main {
            continue;
        }
        let score = anchor_score(target, item);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Vegetables ranked by descending carbs, pool order on ties, cut to the shortlist.
fn vegetable_shortlist(pool: &[FoodItem], categories: &[Category]) -> Vec<usize> {
    let mut vegetables: Vec<usize> = (0..pool.len())
        .filter(|&idx| categories[idx] == Category::Vegetable)
        .collect();

    // Stable sort keeps pool order among equal carbs
    vegetables.sort_by(|&a, &b| {
        pool[b]
            .carbs
            .partial_cmp(&pool[a].carbs)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    vegetables.truncate(VEGETABLE_SHORTLIST);
    vegetables
}

/// Candidate from `remaining` with the lowest bonus-adjusted distance.
///
/// Returns its position within `remaining`.
fn best_fill(
    target: &TargetProfile,
    bundle: &Bundle<'_>,
    remaining: &[usize],
    vegetables_added: usize,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (pos, &idx) in remaining.iter().enumerate() {
        let item = &bundle.pool[idx];
        let mut adjusted = distance(target, &bundle.totals.plus(item));
        if vegetables_added < VEGETABLE_QUOTA && meets_vegetable_rule(item) {
            adjusted -= VEGETABLE_FILL_BONUS;
        }

        match best {
            Some((_, best_distance)) if adjusted >= best_distance => {}
            _ => best = Some((pos, adjusted)),
        }
    }

    best.map(|(pos, _)| pos)
}

/// Assemble a bundle approximating `target` in three phases.
///
/// 1. The best-scoring main as protein anchor.
/// 2. Up to two vegetables, highest carbs first.
/// 3. Greedy fill of the remaining slots by distance to target, with a bonus
///    for vegetables while fewer than two have been added.
///
/// An empty pool gives an empty selection. The selection never exceeds
/// `config.max_items` and never holds the same pool slot twice.
pub fn select_balanced(
    target: &TargetProfile,
    pool: &[FoodItem],
    config: &BalancedConfig,
) -> SelectionResult {
    let categories: Vec<Category> = pool.iter().map(classify).collect();
    let mut bundle = Bundle::new(pool, config.max_items);

    // Phase 1: anchor main
    if !bundle.is_full() {
        if let Some(idx) = pick_anchor(target, pool, &categories) {
            bundle.add(idx, Phase::Anchor);
        }
    }

    // Phase 2: vegetables
    let mut vegetables_added = 0;
    for idx in vegetable_shortlist(pool, &categories)
        .into_iter()
        .take(VEGETABLE_QUOTA)
    {
        if bundle.is_full() {
            break;
        }
        bundle.add(idx, Phase::Vegetable);
        vegetables_added += 1;
    }

    // Phase 3: fill
    let mut remaining: Vec<usize> = (0..pool.len()).filter(|&idx| !bundle.taken[idx]).collect();
    for _ in 0..bundle.slots_left() {
        let Some(pos) = best_fill(target, &bundle, &remaining, vegetables_added) else {
            break;
        };
        let idx = remaining.remove(pos);
        if meets_vegetable_rule(&pool[idx]) {
            vegetables_added += 1;
        }
        bundle.add(idx, Phase::Fill);
    }

    let result = bundle.into_result();
    debug!(
        items = result.len(),
        pool = pool.len(),
        distance = distance(target, &result.totals()),
        "balanced selection finished"
    );
    result
}
