//! Day-of-year climatology and threshold construction
//!
//! For each of the 366 normalized day-of-year bins, all samples in the
//! reference period within ±`window_half_width` days are gathered; the bin's
//! seasonal value is their mean and the bin's threshold is a high percentile.
//! The Feb 29 bin is interpolated from its neighbours, both bin series are
//! optionally smoothed with a circular running mean, and the bins are then
//! projected back onto the full time axis.

use crate::errors::{MhwError, Result};
use crate::time_axis::{TimeAxis, CLIM_YEAR_LEN, FEB29_DOY};
use rayon::prelude::*;

/// Configuration for climatology construction
#[derive(Debug, Clone)]
pub struct ClimatologyOptions {
    /// Reference period as inclusive (start year, end year)
    pub reference_period: (i32, i32),
    /// Threshold percentile (0..100)
    pub percentile: f64,
    /// Half-width of the day-of-year gathering window, in days
    pub window_half_width: usize,
    /// Whether to smooth the bin series with a running mean
    pub smooth: bool,
    /// Width of the smoothing window, in days (odd)
    pub smooth_width: usize,
}

impl Default for ClimatologyOptions {
    fn default() -> Self {
        Self {
            reference_period: (1982, 2005),
            percentile: 90.0,
            window_half_width: 5,
            smooth: true,
            smooth_width: 31,
        }
    }
}

/// Threshold and seasonal cycle aligned to the time axis
#[derive(Debug, Clone)]
pub struct Climatology {
    /// Per-step heatwave threshold
    pub thresh: Vec<f64>,
    /// Per-step seasonal cycle
    pub seas: Vec<f64>,
}

impl Climatology {
    /// Series length (equals the time-axis length)
    pub fn len(&self) -> usize {
        self.thresh.len()
    }

    /// True if the climatology holds no steps
    pub fn is_empty(&self) -> bool {
        self.thresh.is_empty()
    }
}

/// Builds the climatology for `sst` over `axis`.
///
/// # Errors
///
/// Returns [`MhwError::LengthMismatch`] if `sst` is not aligned to the axis
/// and [`MhwError::InvalidTimeRange`] if the reference period does not
/// overlap it.
pub fn build_climatology(
    axis: &TimeAxis,
    sst: &[f64],
    options: &ClimatologyOptions,
) -> Result<Climatology> {
    if sst.len() != axis.len() {
        return Err(MhwError::LengthMismatch {
            what: "SST series vs time axis".to_string(),
            expected: axis.len(),
            actual: sst.len(),
        });
    }

    let (ref_start, ref_end) = options.reference_period;
    let (lo, hi) = axis.year_span_indices(ref_start, ref_end)?;
    let half = options.window_half_width as isize;

    println!(
        "⚡ Computing climatology bins for reference period {}..{} across {} threads",
        ref_start,
        ref_end,
        rayon::current_num_threads()
    );

    // One (threshold, seasonal) pair per day-of-year bin; Feb 29 filled below.
    let bins: Vec<(f64, f64)> = (1..=CLIM_YEAR_LEN as u32)
        .into_par_iter()
        .map(|d| {
            if d == FEB29_DOY {
                return (f64::NAN, f64::NAN);
            }

            let mut samples = Vec::new();
            for i in lo..=hi {
                if axis.doy[i] != d {
                    continue;
                }
                for offset in -half..=half {
                    let idx = i as isize + offset;
                    if idx < 0 || idx >= sst.len() as isize {
                        continue;
                    }
                    let value = sst[idx as usize];
                    if value.is_finite() {
                        samples.push(value);
                    }
                }
            }

            let thresh = percentile_linear(&mut samples, options.percentile);
            let seas = mean(&samples);
            (thresh, seas)
        })
        .collect();

    let mut thresh_bins: Vec<f64> = bins.iter().map(|&(t, _)| t).collect();
    let mut seas_bins: Vec<f64> = bins.iter().map(|&(_, s)| s).collect();

    // Feb 29 as the average of Feb 28 and Mar 1, before smoothing
    let feb29 = (FEB29_DOY - 1) as usize;
    thresh_bins[feb29] = 0.5 * thresh_bins[feb29 - 1] + 0.5 * thresh_bins[feb29 + 1];
    seas_bins[feb29] = 0.5 * seas_bins[feb29 - 1] + 0.5 * seas_bins[feb29 + 1];

    if options.smooth {
        thresh_bins = running_mean_circular(&thresh_bins, options.smooth_width);
        seas_bins = running_mean_circular(&seas_bins, options.smooth_width);
    }

    Ok(Climatology {
        thresh: project_onto_axis(&thresh_bins, axis),
        seas: project_onto_axis(&seas_bins, axis),
    })
}

/// Maps per-bin values onto the time axis via each step's day-of-year.
fn project_onto_axis(bins: &[f64], axis: &TimeAxis) -> Vec<f64> {
    axis.doy.iter().map(|&d| bins[(d - 1) as usize]).collect()
}

/// Arithmetic mean, NaN for an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear-interpolation percentile over the given samples, NaN when empty.
///
/// Matches the common "linear" definition: rank = p/100 * (n - 1), value
/// interpolated between the surrounding order statistics. Sorts in place.
pub fn percentile_linear(values: &mut [f64], percentile: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = percentile / 100.0 * (values.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        return values[below];
    }
    let weight = rank - below as f64;
    values[below] * (1.0 - weight) + values[above] * weight
}

/// Centered running mean with periodic wrap-around at both ends.
///
/// `width` is expected to be odd; the window at index `i` covers
/// `i - width/2 ..= i + width/2` modulo the series length.
pub fn running_mean_circular(series: &[f64], width: usize) -> Vec<f64> {
    let n = series.len();
    if n == 0 || width <= 1 {
        return series.to_vec();
    }
    let half = (width / 2) as isize;

    (0..n as isize)
        .map(|i| {
            let mut sum = 0.0;
            for offset in -half..=half {
                let idx = (i + offset).rem_euclid(n as isize) as usize;
                sum += series[idx];
            }
            sum / (2 * half + 1) as f64
        })
        .collect()
}
