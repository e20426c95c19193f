mod decoder;
mod facts;

pub use decoder::{parse_facts, split_fragments};
pub use facts::{decode_nutrients, NutrientFact, NutrientFacts};
