//! End-to-end processing pipeline
//!
//! Ties together the time axis, the input read, the detection run, and the
//! output write. This is the programmatic equivalent of a full CLI run and is
//! what the integration tests exercise.

use crate::detection::{detect, DetectOptions, MhwEvent};
use crate::errors::{MhwError, Result};
use crate::netcdf_io::{read_series, write_climatology_to_netcdf};
use crate::time_axis::TimeAxis;
use chrono::NaiveDate;
use netcdf::open;
use std::path::Path;

/// Configuration for a full pipeline run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// First day of the time axis
    pub start_date: NaiveDate,
    /// Last day of the time axis (inclusive)
    pub end_date: NaiveDate,
    /// Input variable name
    pub variable: String,
    /// Detection configuration
    pub detect: DetectOptions,
}

/// Summary of a completed run
#[derive(Debug)]
pub struct RunSummary {
    /// Length of the time axis and of both output series
    pub series_len: usize,
    /// Identified heatwave events
    pub events: Vec<MhwEvent>,
}

/// Runs the full pipeline: read the series, detect, write the output file.
///
/// # Errors
///
/// Surfaces any I/O, alignment, or detection error from the steps involved.
/// A variable whose length does not match the configured date range is
/// rejected before detection.
pub fn run(config: &RunConfig, input_path: &Path, output_path: &Path) -> Result<RunSummary> {
    let axis = TimeAxis::from_range(config.start_date, config.end_date)?;

    let file = open(input_path)?;
    let sst = read_series(&file, &config.variable)?;
    if sst.len() != axis.len() {
        return Err(MhwError::LengthMismatch {
            what: format!("variable '{}' vs time axis", config.variable),
            expected: axis.len(),
            actual: sst.len(),
        });
    }

    let (events, clim) = detect(&axis, &sst, &config.detect)?;

    write_climatology_to_netcdf(&clim.thresh, &clim.seas, output_path)?;

    Ok(RunSummary {
        series_len: clim.len(),
        events,
    })
}
