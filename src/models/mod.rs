mod food;
mod selection;
mod target;

pub use food::FoodItem;
pub use selection::{Phase, Pick, SelectionResult};
pub use target::{MacroTotals, TargetProfile};
