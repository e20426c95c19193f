// ─────────────────────────────────────────────────────────────────────────────
// Classification thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Protein grams at or above which an item is a main.
pub const MAIN_MIN_PROTEIN: f64 = 15.0;

/// Calories at or above which an item is a main.
pub const MAIN_MIN_CALORIES: f64 = 200.0;

/// Protein-per-calorie ratio at or above which an item is a main.
pub const MAIN_MIN_PROTEIN_RATIO: f64 = 0.15;

/// Vegetables sit at or below all three of these.
pub const VEGETABLE_MAX_CALORIES: f64 = 50.0;
pub const VEGETABLE_MAX_FAT: f64 = 2.0;
pub const VEGETABLE_MAX_CARBS: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Balanced selector
// ─────────────────────────────────────────────────────────────────────────────

/// Default bundle size for the balanced selector.
pub const DEFAULT_BALANCED_MAX_ITEMS: usize = 5;

/// Share of the protein target a single main is expected to cover.
pub const ANCHOR_PROTEIN_SHARE: f64 = 0.6;

/// Weight of the protein-coverage term in the anchor score (coverage is capped at 1.0).
pub const ANCHOR_COVERAGE_WEIGHT: f64 = 100.0;

/// Weight of the protein-density term in the anchor score.
pub const ANCHOR_DENSITY_WEIGHT: f64 = 30.0;

/// How many carb-ranked vegetables phase 2 looks at.
pub const VEGETABLE_SHORTLIST: usize = 3;

/// Vegetables wanted per bundle.
pub const VEGETABLE_QUOTA: usize = 2;

/// Distance reduction for a vegetable while the quota is unmet.
pub const VEGETABLE_FILL_BONUS: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Greedy selector
// ─────────────────────────────────────────────────────────────────────────────

/// Default bundle size for the greedy selector.
pub const DEFAULT_GREEDY_MAX_ITEMS: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Location comparison weights
// ─────────────────────────────────────────────────────────────────────────────

pub const LOCATION_PROTEIN_WEIGHT: f64 = 2.0;
pub const LOCATION_CARBS_WEIGHT: f64 = 1.0;
pub const LOCATION_FAT_WEIGHT: f64 = 1.0;
pub const LOCATION_CALORIES_WEIGHT: f64 = 3.0;

/// Default number of meals a daily target is split across for comparisons.
pub const DEFAULT_MEALS_PER_DAY: u32 = 3;
