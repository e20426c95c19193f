pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod state;

pub use error::{PlateError, Result};
pub use models::{FoodItem, MacroTotals, SelectionResult, TargetProfile};
