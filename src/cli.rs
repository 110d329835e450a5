//! Command-line front end.
//!
//! Each command parses one path-data string, runs a single kernel query
//! and returns the text to print.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use vecforge_geometry::{parse_path_data, Path};
use vecforge_settings::{default_config_path, KernelSettings};

#[derive(Parser, Debug)]
#[command(name = "vecforge")]
#[command(about = "Inspect and rewrite SVG path data", version)]
pub struct Args {
    /// Settings file (.json or .toml). Defaults to the user config file
    /// when it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the bounding box as `x y width height`
    Bounds { data: String },
    /// Print the total length
    Length { data: String },
    /// Re-serialise the path data in compact form
    Normalize { data: String },
    /// Rebuild the path from `amount` evenly spaced points
    Resample {
        amount: usize,
        data: String,
        /// Give every contour `amount` points
        #[arg(long)]
        per_contour: bool,
    },
    /// Print whether the point lies inside the path
    Contains {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        data: String,
    },
}

/// Loads the explicit settings file, or the default one if present.
pub fn load_settings(config: Option<&std::path::Path>) -> anyhow::Result<KernelSettings> {
    let mut settings = KernelSettings::default();
    match config {
        Some(path) => {
            let loaded = KernelSettings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            settings.merge(&loaded);
        }
        None => {
            if let Some(path) = default_config_path().filter(|p| p.exists()) {
                let loaded = KernelSettings::load_from_file(&path).with_context(|| {
                    format!("Failed to load settings from {}", path.display())
                })?;
                settings.merge(&loaded);
            } else {
                debug!("No settings file, using defaults");
            }
        }
    }
    Ok(settings)
}

fn parse(data: &str) -> anyhow::Result<Path> {
    parse_path_data(data).with_context(|| format!("Invalid path data {:?}", data))
}

/// Runs `command` and returns its output.
pub fn run(command: &Command, settings: &KernelSettings) -> anyhow::Result<String> {
    let output = match command {
        Command::Bounds { data } => {
            let b = parse(data)?.bounds();
            format!("{} {} {} {}", b.x, b.y, b.width, b.height)
        }
        Command::Length { data } => parse(data)?.length_with(settings.precision).to_string(),
        Command::Normalize { data } => {
            parse(data)?.to_path_data_clamped(settings.coordinate_limit)
        }
        Command::Resample {
            amount,
            data,
            per_contour,
        } => {
            if *amount == 0 {
                bail!("Resample amount must be at least 1");
            }
            let path = parse(data)?;
            info!("Resampling {} elements into {} points", path.len(), amount);
            path.resample_by_amount_with(*amount, *per_contour, settings.curve_samples)
                .to_path_data_clamped(settings.coordinate_limit)
        }
        Command::Contains { x, y, data } => parse(data)?
            .contains_with(*x, *y, settings.contains_precision)
            .to_string(),
    };
    Ok(output)
}
