//! Sunrise/sunset table generator.
//!
//! # Usage
//!
//! ```bash
//! # CSV files for two ports in January 2024
//! sun-times --start 20240101 --end 20240131 -l Busan -l Incheon --output-dir out
//!
//! # Print to the console instead
//! sun-times --config run.toml --print
//! ```
//!
//! `RUST_LOG` controls log verbosity (default: info).

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sun_times::{assemble_reports, render_table, write_all_csv, LocationList, RunConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Sunrise and sunset times for named locations")]
struct Args {
    /// TOML file with run settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First date, YYYYMMDD or YYYY-MM-DD.
    #[arg(short, long)]
    start: Option<String>,

    /// Last date (inclusive), YYYYMMDD or YYYY-MM-DD.
    #[arg(short, long)]
    end: Option<String>,

    /// Location name; repeat for several.
    #[arg(short, long = "location")]
    locations: Vec<String>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Hours east of UTC.
    #[arg(long, allow_negative_numbers = true)]
    tz_offset: Option<i32>,

    /// Solar elevation (degrees) that counts as sunrise/sunset.
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Print tables instead of writing CSV files.
    #[arg(short, long)]
    print: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(RunConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if self.start.is_some() {
            config.start = self.start;
        }
        if self.end.is_some() {
            config.end = self.end;
        }
        if !self.locations.is_empty() {
            config.locations = LocationList::Many(self.locations);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(hours) = self.tz_offset {
            config.timezone_offset_hours = hours;
        }
        if let Some(threshold) = self.threshold {
            config.elevation_threshold = threshold;
        }
        Ok((config, self.print))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let (config, print) = Args::parse().into_config()?;
    let request = config.request()?;
    let registry = config.registry()?;
    if request.locations.is_empty() {
        anyhow::bail!("no locations requested (use --location or `locations` in the config file)");
    }

    let reports = assemble_reports(&request, &registry)?;
    if print {
        for report in &reports {
            print!("{}", render_table(report, &request.params));
        }
        return Ok(());
    }

    let paths = write_all_csv(&config.output_dir, &request.range, &reports)?;
    info!(files = paths.len(), "done");
    for path in &paths {
        println!(" - {}", path.display());
    }
    Ok(())
}
