pub mod balanced;
pub mod calculations;
pub mod classify;
pub mod constants;
pub mod greedy;
pub mod location;

pub use balanced::{select_balanced, BalancedConfig};
pub use calculations::{anchor_score, distance, location_score};
pub use classify::{classify, meets_main_rule, meets_vegetable_rule, Category};
pub use constants::*;
pub use greedy::{select_greedy, GreedyConfig};
pub use location::{compare_locations, pick_best_location, LocationComparison, LocationRun};
