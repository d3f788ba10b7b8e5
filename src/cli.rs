//! Defines command-line interface options using `clap` for the mhw_clim application.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for computing marine heatwave climatologies from NetCDF files
#[derive(Parser, Debug)]
#[command(
    version = "0.3.0",
    name = "mhw_clim",
    about = "Computes a seasonal climatology and heatwave threshold from a NetCDF SST series"
)]
pub struct Args {
    /// Path to the input NetCDF file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Name of the SST variable to read
    #[arg(long, default_value = "sst")]
    pub variable: String,

    /// Path of the output NetCDF file
    #[arg(short, long, default_value = "threshold_climatology.nc")]
    pub output: PathBuf,

    /// First day of the time axis (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, default_value = "1982-01-01")]
    pub start_date: NaiveDate,

    /// Last day of the time axis, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, default_value = "2016-12-31")]
    pub end_date: NaiveDate,

    /// Climatology reference period, formatted as <start-year>:<end-year>
    #[arg(long, value_parser = parse_clim_period, default_value = "1982:2005")]
    pub clim_period: (i32, i32),

    /// Threshold percentile
    #[arg(long, default_value_t = 90.0)]
    pub percentile: f64,

    /// Half-width of the day-of-year gathering window, in days
    #[arg(long, default_value_t = 5)]
    pub window_half_width: usize,

    /// Width of the climatology smoothing window, in days (odd)
    #[arg(long, default_value_t = 31)]
    pub smooth_width: usize,

    /// Disable climatology smoothing
    #[arg(long, default_value_t = false)]
    pub no_smooth: bool,

    /// Minimum event duration, in days
    #[arg(long, default_value_t = 5)]
    pub min_duration: usize,

    /// Maximum gap, in days, across which events are joined
    #[arg(long, default_value_t = 2)]
    pub max_gap: usize,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Enable verbose output (per-event reporting).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// List all variables and dimensions in the input file and exit
    #[arg(long)]
    pub list_vars: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {} (expected YYYY-MM-DD)", s, e))
}

fn parse_clim_period(s: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [start, end] => {
            let start = start
                .parse::<i32>()
                .map_err(|_| format!("Invalid start year '{}'", start))?;
            let end = end
                .parse::<i32>()
                .map_err(|_| format!("Invalid end year '{}'", end))?;
            Ok((start, end))
        }
        _ => Err("Invalid format: Expected '<start-year>:<end-year>'.".to_string()),
    }
}
