//! mhw_clim: marine heatwave climatology and threshold computation
//!
//! A Rust tool for computing a seasonal climatology and heatwave threshold
//! from a daily sea-surface-temperature series stored in a NetCDF file. The
//! detection follows the Hobday et al. scheme: samples are binned by a
//! 366-day normalized day-of-year over a fixed reference period, the
//! seasonal cycle is the bin mean and the threshold a high percentile, both
//! smoothed with a circular running mean and projected back onto the daily
//! time axis. Contiguous exceedance runs are identified as discrete events.
//!
//! ## Key Features
//!
//! - **NetCDF I/O**: reads a named 1-D SST variable, writes `threshold` and
//!   `climatology` variables over a `time` dimension
//! - **Parallel Processing**: per-bin climatology work runs on Rayon
//! - **Event Identification**: minimum-duration filtering and gap joining
//! - **Validated Alignment**: series length is checked against the time axis
//!
//! ## Module Organization
//!
//! - [`time_axis`]: date-ordinal axis and day-of-year calendar
//! - [`detection`]: climatology construction and event identification
//! - [`netcdf_io`]: NetCDF read/write operations
//! - [`pipeline`]: end-to-end run from input file to output file
//! - [`metadata`]: NetCDF file inspection
//! - [`parallel`]: parallel processing configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//! ```rust,no_run
//! use mhw_clim::prelude::*;
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let config = RunConfig {
//!     start_date: NaiveDate::from_ymd_opt(1982, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2016, 12, 31).unwrap(),
//!     variable: "sst".to_string(),
//!     detect: DetectOptions::default(),
//! };
//! let summary = mhw_clim::pipeline::run(
//!     &config,
//!     Path::new("sst_1_2.nc"),
//!     Path::new("threshold_climatology.nc"),
//! ).unwrap();
//! println!("{} events", summary.events.len());
//! ```

// Core modules
pub mod detection;
pub mod errors;
pub mod metadata;
pub mod netcdf_io;
pub mod parallel;
pub mod pipeline;
pub mod time_axis;

// Internal modules
pub mod cli;

// Direct re-exports for the public API
pub use detection::*;
pub use errors::*;
pub use netcdf_io::*;
pub use parallel::*;
pub use pipeline::*;
pub use time_axis::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::detection::{
        detect, Climatology, ClimatologyOptions, DetectOptions, EventOptions, MhwEvent,
    };
    pub use crate::errors::{MhwError, Result};
    pub use crate::netcdf_io::{read_series, ClimatologyWriter};
    pub use crate::parallel::ParallelConfig;
    pub use crate::pipeline::{run, RunConfig, RunSummary};
    pub use crate::time_axis::TimeAxis;
}
