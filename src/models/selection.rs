use serde::Serialize;

use crate::models::{FoodItem, MacroTotals};

/// Which step of a selector placed an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Phase 1 of the balanced selector: the protein anchor.
    Anchor,
    /// Phase 2 of the balanced selector: carb-ranked vegetables.
    Vegetable,
    /// Phase 3 of the balanced selector: distance-driven fill.
    Fill,
    /// The single phase of the greedy selector.
    Greedy,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Anchor => "main",
            Phase::Vegetable => "vegetable",
            Phase::Fill => "fill",
            Phase::Greedy => "greedy",
        }
    }
}

/// A single selected item together with its position in the input pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    /// Index of the item in the pool it was selected from.
    pub pool_index: usize,
    pub phase: Phase,
    pub item: FoodItem,
}

/// An ordered selection plus its aggregate totals.
///
/// Totals are always recomputed from the picks, so they equal the exact
/// in-order sum of the selected items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionResult {
    picks: Vec<Pick>,
    totals: MacroTotals,
}

impl SelectionResult {
    pub fn from_picks(picks: Vec<Pick>) -> Self {
        let totals = MacroTotals::sum_of(picks.iter().map(|p| &p.item));
        Self { picks, totals }
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn totals(&self) -> MacroTotals {
        self.totals
    }

    /// Selected items in selection order.
    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.picks.iter().map(|p| &p.item)
    }

    pub fn names(&self) -> Vec<&str> {
        self.picks.iter().map(|p| p.item.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
