pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_selection_csv, write_selection_json};
pub use prompts::{collect_target, prompt_macro, prompt_yes_no};
pub use render::{display_comparison, display_food_list, display_selection};
