mod catalog;
mod persistence;

pub use catalog::{Catalog, CatalogRecord, DietFilter, EXCLUDED_NAME_SUBSTRING};
pub use persistence::load_catalog;
