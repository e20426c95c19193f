use tracing::{debug, info};

use crate::models::{FoodItem, MacroTotals, SelectionResult, TargetProfile};
use crate::planner::balanced::{select_balanced, BalancedConfig};
use crate::planner::calculations::location_score;

/// Balanced selection for one location and its weighted score.
#[derive(Debug, Clone)]
pub struct LocationRun<L> {
    pub location: L,
    pub selection: SelectionResult,
    /// `None` when the location produced no selection.
    pub score: Option<f64>,
}

/// Outcome of comparing several locations against one target.
#[derive(Debug, Clone)]
pub struct LocationComparison<L> {
    pub runs: Vec<LocationRun<L>>,
    winner: Option<usize>,
}

impl<L> LocationComparison<L> {
    /// The winning run, or `None` when no location was eligible.
    pub fn winner(&self) -> Option<&LocationRun<L>> {
        self.winner.map(|idx| &self.runs[idx])
    }
}

/// Index and score of the lowest-scoring present entry. Ties keep the
/// earliest entry.
fn best_location_index<L>(
    target: &TargetProfile,
    per_location: &[(L, Option<MacroTotals>)],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, (_, totals)) in per_location.iter().enumerate() {
        let Some(totals) = totals else {
            continue;
        };
        let score = location_score(target, totals);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best
}

/// Pick the location whose totals score closest to `target`.
///
/// Entries with absent totals are never chosen. Ties go to the entry that
/// comes first in `per_location`, so the caller's ordering decides. Returns
/// `None` when no entry has totals.
pub fn pick_best_location<'a, L>(
    target: &TargetProfile,
    per_location: &'a [(L, Option<MacroTotals>)],
) -> Option<&'a L> {
    best_location_index(target, per_location).map(|(idx, _)| &per_location[idx].0)
}

/// Run the balanced selector once per location and pick the best result.
///
/// A location whose selection comes back empty has no totals and is skipped.
pub fn compare_locations<L: Clone + std::fmt::Debug>(
    target: &TargetProfile,
    locations: &[(L, Vec<FoodItem>)],
    config: &BalancedConfig,
) -> LocationComparison<L> {
    let runs: Vec<LocationRun<L>> = locations
        .iter()
        .map(|(location, pool)| {
            let selection = select_balanced(target, pool, config);
            let score = if selection.is_empty() {
                debug!(location = ?location, "no eligible items");
                None
            } else {
                Some(location_score(target, &selection.totals()))
            };
            LocationRun {
                location: location.clone(),
                selection,
                score,
            }
        })
        .collect();

    let per_location: Vec<(usize, Option<MacroTotals>)> = runs
        .iter()
        .enumerate()
        .map(|(idx, run)| (idx, run.score.map(|_| run.selection.totals())))
        .collect();
    let winner = best_location_index(target, &per_location).map(|(idx, _)| idx);

    match winner {
        Some(idx) => info!(location = ?runs[idx].location, score = ?runs[idx].score, "best location"),
        None => info!("no eligible location"),
    }

    LocationComparison { runs, winner }
}
