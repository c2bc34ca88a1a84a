//! smidge command-line interface.
//!
//! Masks numeric CSV columns by adding bounded random noise:
//!
//! ```text
//! smidge input.csv output.csv salary --min_noise=-50 --max_noise=50 --seed 42
//! ```
//!
//! A single column is perturbed via the flags above; `--plan` runs a TOML
//! masking plan over several columns at once, with per-column generators
//! derived from one root seed.

mod csv_io;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use smidge_core::config::{ColumnSpec, MaskPlan};
use smidge_core::seed::{column_rng, entropy_seed, rng_from_seed};
use smidge_noise::model::NoiseModel;
use smidge_noise::perturb::{add_noise, perturb_slice};
use smidge_noise::presets;

use crate::csv_io::Table;
use crate::error::AppError;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Adds bounded random noise to numeric CSV columns for data masking.
#[derive(Parser)]
#[command(name = "smidge", version, about)]
struct Cli {
    /// Input CSV file.
    input: PathBuf,

    /// Output CSV file.
    output: PathBuf,

    /// Column to perturb.
    #[arg(required_unless_present = "plan", conflicts_with = "plan")]
    column: Option<String>,

    /// Minimum noise value.
    #[arg(
        long = "min_noise",
        default_value_t = -0.1,
        allow_negative_numbers = true,
        conflicts_with_all = ["preset", "plan"]
    )]
    min_noise: f64,

    /// Maximum noise value.
    #[arg(
        long = "max_noise",
        default_value_t = 0.1,
        allow_negative_numbers = true,
        conflicts_with_all = ["preset", "plan"]
    )]
    max_noise: f64,

    /// Random seed for reproducibility.
    #[arg(long)]
    seed: Option<u64>,

    /// Apply noise as a fraction of each value instead of an absolute offset.
    #[arg(long, conflicts_with_all = ["preset", "plan"])]
    proportional: bool,

    /// Named masking level: light, moderate, or aggressive.
    #[arg(long, value_name = "NAME", conflicts_with = "plan")]
    preset: Option<String>,

    /// TOML masking plan for perturbing several columns at once.
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_single(cli: &Cli, table: &mut Table, column: &str) -> Result<(), AppError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| AppError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let values = table.numeric_column(index)?;
    info!(column, rows = values.len(), "adding noise to column");

    let noised = if let Some(name) = &cli.preset {
        let model = preset_by_name(name)?;
        let mut rng = rng_from_seed(cli.seed);
        perturb_slice(&values, &model, &mut rng)?
    } else if cli.proportional {
        let model = NoiseModel::proportional(cli.min_noise, cli.max_noise)?;
        let mut rng = rng_from_seed(cli.seed);
        perturb_slice(&values, &model, &mut rng)?
    } else {
        add_noise(&values, cli.min_noise, cli.max_noise, cli.seed)?
    };

    table.replace_column(index, &noised);
    Ok(())
}

fn run_plan(cli: &Cli, table: &mut Table, path: &Path) -> Result<(), AppError> {
    let plan = MaskPlan::from_file(path)?;
    if plan.meta.name.is_empty() {
        info!(columns = plan.columns.len(), "loaded masking plan");
    } else {
        info!(
            plan = %plan.meta.name,
            columns = plan.columns.len(),
            "loaded masking plan"
        );
    }

    let root = match plan.seed.or(cli.seed) {
        Some(seed) => seed,
        None => {
            let seed = entropy_seed();
            info!(seed, "generated root seed");
            seed
        }
    };

    for spec in &plan.columns {
        let index = table
            .column_index(&spec.name)
            .ok_or_else(|| AppError::ColumnNotFound {
                column: spec.name.clone(),
            })?;
        let values = table.numeric_column(index)?;
        info!(column = %spec.name, rows = values.len(), "adding noise to column");

        let model = column_model(spec)?;
        let mut rng = column_rng(root, &spec.name);
        let noised = perturb_slice(&values, &model, &mut rng)?;
        table.replace_column(index, &noised);
    }
    Ok(())
}

fn column_model(spec: &ColumnSpec) -> Result<NoiseModel, AppError> {
    let model = if spec.proportional {
        NoiseModel::proportional(spec.min_noise, spec.max_noise)?
    } else {
        NoiseModel::uniform(spec.min_noise, spec.max_noise)?
    };
    Ok(model)
}

fn preset_by_name(name: &str) -> Result<NoiseModel, AppError> {
    match name {
        "light" => Ok(presets::light()?),
        "moderate" => Ok(presets::moderate()?),
        "aggressive" => Ok(presets::aggressive()?),
        _ => Err(AppError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn run(cli: &Cli) -> Result<(), AppError> {
    info!(path = %cli.input.display(), "reading input file");
    let mut table = csv_io::read_table(&cli.input)?;

    if let Some(plan_path) = &cli.plan {
        run_plan(cli, &mut table, plan_path)?;
    } else {
        let column = cli
            .column
            .as_deref()
            .expect("clap requires COLUMN without --plan");
        run_single(cli, &mut table, column)?;
    }

    info!(path = %cli.output.display(), "saving output");
    csv_io::write_table(&cli.output, &table)?;
    info!("data masking completed");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
