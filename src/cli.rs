use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::planner::{DEFAULT_BALANCED_MAX_ITEMS, DEFAULT_GREEDY_MAX_ITEMS, DEFAULT_MEALS_PER_DAY};
use crate::state::DietFilter;

/// PlatePicker: assemble dining-hall meals that land close to a macro target.
#[derive(Parser, Debug)]
#[command(name = "plate-picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog (.json or .csv).
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub file: PathBuf,

    /// Log selection steps to stderr. RUST_LOG overrides this.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Target macros. Anything left out is prompted for.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target protein in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Target carbohydrates in grams.
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Target fat in grams.
    #[arg(long)]
    pub fat: Option<f64>,

    /// Target calories.
    #[arg(long)]
    pub calories: Option<f64>,
}

/// Upstream diet filtering.
#[derive(Args, Debug, Clone)]
pub struct DietArgs {
    /// Drop items carrying this tag (repeatable).
    #[arg(long = "exclude", value_name = "TAG")]
    pub exclude: Vec<String>,

    /// Keep only items carrying this tag (repeatable).
    #[arg(long = "require", value_name = "TAG")]
    pub require: Vec<String>,
}

impl DietArgs {
    pub fn to_filter(&self) -> DietFilter {
        DietFilter {
            exclude: self.exclude.clone(),
            require: self.require.clone(),
        }
    }
}

/// Where to write a selection besides the terminal.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Write the selection as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the selection as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a balanced bundle: one main, vegetables, then best-fit fill.
    Balanced {
        /// Restrict the pool to one location (default: every location).
        #[arg(short, long)]
        location: Option<String>,

        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        diet: DietArgs,

        /// Maximum items in the bundle.
        #[arg(long, default_value_t = DEFAULT_BALANCED_MAX_ITEMS)]
        max_items: usize,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Build a bundle by plain distance-greedy picking.
    Greedy {
        /// Restrict the pool to one location (default: every location).
        #[arg(short, long)]
        location: Option<String>,

        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        diet: DietArgs,

        /// Maximum items in the bundle.
        #[arg(long, default_value_t = DEFAULT_GREEDY_MAX_ITEMS)]
        max_items: usize,

        /// Stop once a pick lands closer than this to the target.
        #[arg(long)]
        stop_within: Option<f64>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Compare locations and report the one closest to a per-meal target.
    Compare {
        // Daily target; divided by --meals before comparing.
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        diet: DietArgs,

        /// Meals the daily target is split across.
        #[arg(long, default_value_t = DEFAULT_MEALS_PER_DAY)]
        meals: u32,

        /// Maximum items per location bundle.
        #[arg(long, default_value_t = DEFAULT_BALANCED_MAX_ITEMS)]
        max_items: usize,
    },

    /// List foods with their derived category.
    Classify {
        /// Restrict the listing to one location.
        #[arg(short, long)]
        location: Option<String>,

        #[command(flatten)]
        diet: DietArgs,
    },
}
