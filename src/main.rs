use std::path::Path;

use clap::Parser;
use tracing::warn;

use plate_picker_rs::cli::{Cli, Command, DietArgs, ExportArgs, TargetArgs};
use plate_picker_rs::error::Result;
use plate_picker_rs::interface::{
    collect_target, display_comparison, display_food_list, display_selection, prompt_yes_no,
    write_selection_csv, write_selection_json,
};
use plate_picker_rs::logging::init_logging;
use plate_picker_rs::models::{FoodItem, SelectionResult, TargetProfile};
use plate_picker_rs::planner::{
    compare_locations, select_balanced, select_greedy, BalancedConfig, GreedyConfig,
};
use plate_picker_rs::state::{load_catalog, Catalog};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(&cli.file)?;
    if catalog.is_empty() {
        println!("Catalog {} has no items.", cli.file.display());
        return Ok(());
    }

    match cli.command {
        Command::Balanced {
            location,
            target,
            diet,
            max_items,
            export,
        } => cmd_balanced(&catalog, location.as_deref(), &target, &diet, max_items, &export),
        Command::Greedy {
            location,
            target,
            diet,
            max_items,
            stop_within,
            export,
        } => {
            let config = GreedyConfig {
                max_items,
                stop_within,
            };
            cmd_greedy(&catalog, location.as_deref(), &target, &diet, &config, &export)
        }
        Command::Compare {
            target,
            diet,
            meals,
            max_items,
        } => cmd_compare(&catalog, &target, &diet, meals, max_items),
        Command::Classify { location, diet } => cmd_classify(&catalog, location.as_deref(), &diet),
    }
}

fn target_from(args: &TargetArgs) -> Result<TargetProfile> {
    collect_target(args.protein, args.carbs, args.fat, args.calories)
}

/// Pool for one location (resolved case-insensitively) or the whole catalog.
fn pool_from(catalog: &Catalog, location: Option<&str>, diet: &DietArgs) -> Result<Vec<FoodItem>> {
    let location = location
        .map(|l| catalog.resolve_location(l))
        .transpose()?;
    Ok(catalog.pool(location, &diet.to_filter()))
}

/// Build a balanced bundle.
fn cmd_balanced(
    catalog: &Catalog,
    location: Option<&str>,
    target: &TargetArgs,
    diet: &DietArgs,
    max_items: usize,
    export: &ExportArgs,
) -> Result<()> {
    let pool = pool_from(catalog, location, diet)?;
    if pool.is_empty() {
        println!("No eligible foods after filtering.");
        return Ok(());
    }
    println!("{} eligible foods", pool.len());

    let target = target_from(target)?;
    let selection = select_balanced(&target, &pool, &BalancedConfig { max_items });

    display_selection("Balanced Selection", &selection, &target);
    export_selection(&selection, &target, export)
}

/// Build a greedy bundle.
fn cmd_greedy(
    catalog: &Catalog,
    location: Option<&str>,
    target: &TargetArgs,
    diet: &DietArgs,
    config: &GreedyConfig,
    export: &ExportArgs,
) -> Result<()> {
    let pool = pool_from(catalog, location, diet)?;
    if pool.is_empty() {
        println!("No eligible foods after filtering.");
        return Ok(());
    }
    println!("{} eligible foods", pool.len());

    let target = target_from(target)?;
    let selection = select_greedy(&target, &pool, config);

    display_selection("Greedy Selection", &selection, &target);
    export_selection(&selection, &target, export)
}

/// Compare every location against the per-meal share of a daily target.
fn cmd_compare(
    catalog: &Catalog,
    target: &TargetArgs,
    diet: &DietArgs,
    meals: u32,
    max_items: usize,
) -> Result<()> {
    let daily = target_from(target)?;
    let per_meal = daily.per_meal(meals)?;

    let locations = catalog.pools_by_location(&diet.to_filter());
    println!(
        "Comparing {} locations against 1/{} of the daily target...",
        locations.len(),
        meals
    );

    let comparison = compare_locations(&per_meal, &locations, &BalancedConfig { max_items });
    display_comparison(&comparison, &per_meal);
    Ok(())
}

/// List foods with their categories.
fn cmd_classify(catalog: &Catalog, location: Option<&str>, diet: &DietArgs) -> Result<()> {
    let pool = pool_from(catalog, location, diet)?;
    let title = location.unwrap_or("All locations");
    display_food_list(&pool, title);
    Ok(())
}

fn export_selection(selection: &SelectionResult, target: &TargetProfile, export: &ExportArgs) -> Result<()> {
    if let Some(path) = &export.json {
        if confirm_overwrite(path)? {
            write_selection_json(selection, target, path)?;
            println!("Wrote selection to {}", path.display());
        }
    }
    if let Some(path) = &export.csv {
        if confirm_overwrite(path)? {
            write_selection_csv(selection, path)?;
            println!("Wrote selection to {}", path.display());
        }
    }
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)?;
    if !overwrite {
        warn!(path = %path.display(), "skipped export");
    }
    Ok(overwrite)
}
