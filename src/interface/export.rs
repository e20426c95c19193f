use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{SelectionResult, TargetProfile};
use crate::planner::distance;

/// Round a float to n decimal places for output.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write a selection as CSV, one row per item plus a trailing totals row.
pub fn write_selection_csv(selection: &SelectionResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["position", "phase", "name", "protein", "carbs", "fat", "calories"])?;

    for (i, pick) in selection.picks().iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            pick.phase.label().to_string(),
            pick.item.name.clone(),
            format!("{:.1}", pick.item.protein),
            format!("{:.1}", pick.item.carbs),
            format!("{:.1}", pick.item.fat),
            format!("{:.0}", pick.item.calories),
        ])?;
    }

    let totals = selection.totals();
    wtr.write_record([
        String::new(),
        "total".to_string(),
        String::new(),
        format!("{:.1}", totals.protein),
        format!("{:.1}", totals.carbs),
        format!("{:.1}", totals.fat),
        format!("{:.0}", totals.calories),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Write a selection, its totals and the target as pretty JSON.
pub fn write_selection_json(
    selection: &SelectionResult,
    target: &TargetProfile,
    path: &Path,
) -> Result<()> {
    let totals = selection.totals();
    let json = serde_json::json!({
        "target": target,
        "items": selection.picks(),
        "totals": {
            "protein": round_to(totals.protein, 1),
            "carbs": round_to(totals.carbs, 1),
            "fat": round_to(totals.fat, 1),
            "calories": totals.calories,
        },
        "distance": round_to(distance(target, &totals), 2),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, Phase, Pick};
    use tempfile::NamedTempFile;

    fn selection() -> SelectionResult {
        SelectionResult::from_picks(vec![
            Pick {
                pool_index: 0,
                phase: Phase::Anchor,
                item: FoodItem::new("Salmon", 24.0, 0.0, 12.0, 210.0),
            },
            Pick {
                pool_index: 3,
                phase: Phase::Vegetable,
                item: FoodItem::new("Green Beans", 1.8, 7.0, 0.2, 31.0),
            },
        ])
    }

    #[test]
    fn test_round_to_rounds_instead_of_cutting() {
        assert_eq!(round_to(25.86, 1), 25.9);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(-1.26, 1), -1.3);
    }

    #[test]
    fn test_write_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_selection_csv(&selection(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,main,Salmon,24.0,0.0,12.0,210");
        assert_eq!(lines[3], ",total,,25.8,7.0,12.2,241");
    }

    #[test]
    fn test_write_json() {
        let file = NamedTempFile::new().unwrap();
        let target = TargetProfile::new(30.0, 40.0, 20.0, 600.0).unwrap();
        write_selection_json(&selection(), &target, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["items"][1]["phase"], "vegetable");
        assert_eq!(value["totals"]["calories"], 241.0);
        assert_eq!(value["target"]["protein"], 30.0);
    }
}
