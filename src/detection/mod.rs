//! Marine heatwave detection
//!
//! Native implementation of the Hobday et al. style detection routine:
//! a day-of-year seasonal climatology and percentile threshold computed over
//! a fixed reference period, projected onto the full time axis, followed by
//! identification of discrete exceedance events.
//!
//! # Organization
//!
//! - [`climatology`]: day-of-year binning, percentile threshold, smoothing
//! - [`events`]: exceedance run detection and gap joining

pub mod climatology;
pub mod events;

// Re-export the main types and functions for convenience
pub use climatology::{build_climatology, Climatology, ClimatologyOptions};
pub use events::{identify_events, EventOptions, MhwEvent};

use crate::errors::Result;
use crate::time_axis::TimeAxis;

/// Full configuration for a detection run
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    pub climatology: ClimatologyOptions,
    pub events: EventOptions,
}

/// Runs the full detection: climatology construction plus event identification.
///
/// Returns the event list and the climatology (threshold and seasonal cycle,
/// both aligned to the time axis).
///
/// # Errors
///
/// Returns an error if the series length does not match the axis or the
/// reference period does not overlap it.
pub fn detect(
    axis: &TimeAxis,
    sst: &[f64],
    options: &DetectOptions,
) -> Result<(Vec<MhwEvent>, Climatology)> {
    let clim = build_climatology(axis, sst, &options.climatology)?;
    let events = identify_events(axis, sst, &clim, &options.events)?;
    Ok((events, clim))
}
