use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PlateError, Result};
use crate::models::FoodItem;

/// Items whose name contains this are dropped before selection.
pub const EXCLUDED_NAME_SUBSTRING: &str = "Sauce";

/// Minimum Jaro-Winkler similarity for a location suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// One catalog row: a served item, where it is served, its raw nutrient
/// payload and its diet/allergen tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub location: String,
    pub name: String,
    pub nutrition: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl CatalogRecord {
    fn has_trait(&self, wanted: &str) -> bool {
        self.traits.iter().any(|t| t.eq_ignore_ascii_case(wanted))
    }
}

/// Diet tags to exclude or require, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct DietFilter {
    pub exclude: Vec<String>,
    pub require: Vec<String>,
}

impl DietFilter {
    /// Whether a record survives upstream filtering: not a sauce, no
    /// excluded tag, every required tag present.
    pub fn admits(&self, record: &CatalogRecord) -> bool {
        !record.name.contains(EXCLUDED_NAME_SUBSTRING)
            && !self.exclude.iter().any(|t| record.has_trait(t))
            && self.require.iter().all(|t| record.has_trait(t))
    }
}

/// In-memory food catalog across dining locations.
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Location names in first-seen order. This order breaks comparison ties.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.location.as_str()) {
                seen.push(&record.location);
            }
        }
        seen
    }

    /// Match a location name case-insensitively.
    pub fn resolve_location(&self, name: &str) -> Result<&str> {
        let locations = self.locations();
        if let Some(found) = locations.iter().find(|l| l.eq_ignore_ascii_case(name.trim())) {
            return Ok(*found);
        }

        let lowered = name.to_lowercase();
        let suggestion = locations
            .iter()
            .map(|l| (*l, jaro_winkler(&l.to_lowercase(), &lowered)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        Err(match suggestion {
            Some((close, _)) => {
                PlateError::LocationNotFound(format!("{} (did you mean '{}'?)", name, close))
            }
            None => PlateError::LocationNotFound(name.to_string()),
        })
    }

    /// Build the selection pool for one location, or every location when
    /// `location` is `None`, keeping file order.
    pub fn pool(&self, location: Option<&str>, filter: &DietFilter) -> Vec<FoodItem> {
        let pool: Vec<FoodItem> = self
            .records
            .iter()
            .filter(|r| location.is_none_or(|l| r.location.eq_ignore_ascii_case(l)))
            .filter(|r| filter.admits(r))
            .map(|r| FoodItem::from_payload(r.name.clone(), &r.nutrition))
            .collect();

        debug!(location = ?location, items = pool.len(), "built pool");
        pool
    }

    /// One pool per location, in [`Catalog::locations`] order.
    pub fn pools_by_location(&self, filter: &DietFilter) -> Vec<(String, Vec<FoodItem>)> {
        self.locations()
            .into_iter()
            .map(|l| (l.to_string(), self.pool(Some(l), filter)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
