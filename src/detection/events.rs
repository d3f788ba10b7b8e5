//! Exceedance event identification
//!
//! Flags contiguous runs where the sample series exceeds the per-step
//! threshold, drops runs shorter than the minimum duration, optionally joins
//! events separated by short gaps, and computes per-event intensity metrics
//! relative to the seasonal cycle.

use super::climatology::Climatology;
use crate::errors::{MhwError, Result};
use crate::time_axis::TimeAxis;

/// Configuration for event identification
#[derive(Debug, Clone)]
pub struct EventOptions {
    /// Minimum run length, in days, for a run to count as an event
    pub min_duration: usize,
    /// Whether to merge events separated by short gaps
    pub join_across_gaps: bool,
    /// Maximum gap length, in days, eligible for merging
    pub max_gap: usize,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            min_duration: 5,
            join_across_gaps: true,
            max_gap: 2,
        }
    }
}

/// A single marine heatwave event
#[derive(Debug, Clone)]
pub struct MhwEvent {
    /// Index of the first event day on the time axis
    pub index_start: usize,
    /// Index of the last event day on the time axis
    pub index_end: usize,
    /// Date ordinal of the first event day
    pub date_start: i64,
    /// Date ordinal of the last event day
    pub date_end: i64,
    /// Event length in days
    pub duration: usize,
    /// Index of the day with the largest anomaly
    pub index_peak: usize,
    /// Date ordinal of the peak day
    pub date_peak: i64,
    /// Largest anomaly relative to the seasonal cycle
    pub intensity_max: f64,
    /// Mean anomaly relative to the seasonal cycle
    pub intensity_mean: f64,
    /// Summed anomaly relative to the seasonal cycle
    pub intensity_cumulative: f64,
}

/// Identifies heatwave events in `sst` against the climatology.
///
/// # Errors
///
/// Returns [`MhwError::LengthMismatch`] if `sst` and the climatology are not
/// aligned to the axis.
pub fn identify_events(
    axis: &TimeAxis,
    sst: &[f64],
    clim: &Climatology,
    options: &EventOptions,
) -> Result<Vec<MhwEvent>> {
    if sst.len() != axis.len() {
        return Err(MhwError::LengthMismatch {
            what: "SST series vs time axis".to_string(),
            expected: axis.len(),
            actual: sst.len(),
        });
    }
    if clim.len() != axis.len() {
        return Err(MhwError::LengthMismatch {
            what: "climatology vs time axis".to_string(),
            expected: axis.len(),
            actual: clim.len(),
        });
    }

    // Non-finite samples or thresholds never exceed.
    let exceed: Vec<bool> = sst
        .iter()
        .zip(&clim.thresh)
        .map(|(&s, &t)| s.is_finite() && t.is_finite() && s > t)
        .collect();

    let mut spans = exceedance_runs(&exceed, options.min_duration);

    if options.join_across_gaps {
        spans = join_short_gaps(spans, options.max_gap);
    }

    Ok(spans
        .into_iter()
        .map(|(start, end)| describe_event(axis, sst, clim, start, end))
        .collect())
}

/// Contiguous `true` runs of at least `min_duration`, as inclusive index spans.
fn exceedance_runs(exceed: &[bool], min_duration: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut run_start = None;

    for (i, &hot) in exceed.iter().enumerate() {
        match (hot, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_duration {
                    runs.push((start, i - 1));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        if exceed.len() - start >= min_duration {
            runs.push((start, exceed.len() - 1));
        }
    }

    runs
}

/// Merges consecutive spans whose separating gap is at most `max_gap` days.
fn join_short_gaps(spans: Vec<(usize, usize)>, max_gap: usize) -> Vec<(usize, usize)> {
    let mut joined: Vec<(usize, usize)> = Vec::with_capacity(spans.len());

    for (start, end) in spans {
        match joined.last_mut() {
            Some((_, prev_end)) if start - *prev_end - 1 <= max_gap => *prev_end = end,
            _ => joined.push((start, end)),
        }
    }

    joined
}

/// Computes metrics for the event spanning `start..=end`.
fn describe_event(
    axis: &TimeAxis,
    sst: &[f64],
    clim: &Climatology,
    start: usize,
    end: usize,
) -> MhwEvent {
    let mut peak = start;
    let mut intensity_max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for i in start..=end {
        let anomaly = sst[i] - clim.seas[i];
        if !anomaly.is_finite() {
            continue;
        }
        sum += anomaly;
        count += 1;
        if anomaly > intensity_max {
            intensity_max = anomaly;
            peak = i;
        }
    }

    let (intensity_max, intensity_mean, intensity_cumulative) = if count > 0 {
        (intensity_max, sum / count as f64, sum)
    } else {
        (f64::NAN, f64::NAN, f64::NAN)
    };

    MhwEvent {
        index_start: start,
        index_end: end,
        date_start: axis.ordinals[start],
        date_end: axis.ordinals[end],
        duration: end - start + 1,
        index_peak: peak,
        date_peak: axis.ordinals[peak],
        intensity_max,
        intensity_mean,
        intensity_cumulative,
    }
}
