use dialoguer::{Confirm, Input};

use crate::error::{PlateError, Result};
use crate::models::TargetProfile;

/// Prompt for one macro value, re-asking until it parses as a non-negative number.
pub fn prompt_macro(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Target {}", label))
        .default(format!("{}", default))
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Ok(()),
                _ => Err("Enter a non-negative number".to_string()),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlateError::InvalidInput(format!("Invalid number for {}", label)))
}

/// Build a target from whatever the caller passed, prompting for the rest.
pub fn collect_target(
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
    calories: Option<f64>,
) -> Result<TargetProfile> {
    let protein = match protein {
        Some(v) => v,
        None => prompt_macro("protein (g)", 30.0)?,
    };
    let carbs = match carbs {
        Some(v) => v,
        None => prompt_macro("carbs (g)", 60.0)?,
    };
    let fat = match fat {
        Some(v) => v,
        None => prompt_macro("fat (g)", 20.0)?,
    };
    let calories = match calories {
        Some(v) => v,
        None => prompt_macro("calories", 600.0)?,
    };

    TargetProfile::new(protein, carbs, fat, calories)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
