use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{PlateError, Result};
use crate::state::catalog::{Catalog, CatalogRecord};

/// Separator between tags in the CSV `traits` column.
const CSV_TRAIT_SEPARATOR: char = ';';

/// Flat CSV row; the traits column holds `;`-separated tags.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    location: String,
    name: String,
    nutrition: String,
    #[serde(default)]
    traits: String,
}

impl From<CsvRecord> for CatalogRecord {
    fn from(row: CsvRecord) -> Self {
        CatalogRecord {
            location: row.location,
            name: row.name,
            nutrition: row.nutrition,
            traits: row
                .traits
                .split(CSV_TRAIT_SEPARATOR)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Load a catalog from a `.json` or `.csv` file, keeping file order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let records = match extension.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => {
            return Err(PlateError::UnsupportedFormat(format!(
                "'{}' (expected .json or .csv)",
                other
            )));
        }
    };

    info!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(Catalog::new(records))
}

fn load_json(path: &Path) -> Result<Vec<CatalogRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_csv(path: &Path) -> Result<Vec<CatalogRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRecord>() {
        records.push(row?.into());
    }
    Ok(records)
}
