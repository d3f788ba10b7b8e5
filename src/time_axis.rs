//! Date-ordinal time axis construction
//!
//! The detection algorithm indexes the SST series by proleptic date ordinals
//! (days since 0001-01-01, where 0001-01-01 is ordinal 1) and bins samples by
//! a 366-day normalized day-of-year. This module builds both from an inclusive
//! calendar range.

use crate::errors::{MhwError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Day-of-year count of the leap-year template calendar
pub const CLIM_YEAR_LEN: usize = 366;

/// Normalized day-of-year of Feb 29 in the leap-year template (1-based)
pub const FEB29_DOY: u32 = 60;

/// A contiguous daily time axis with derived calendar fields.
///
/// All vectors have identical length, one entry per calendar day.
#[derive(Debug, Clone)]
pub struct TimeAxis {
    /// Proleptic date ordinals, strictly increasing by 1
    pub ordinals: Vec<i64>,
    /// Calendar year per step
    pub years: Vec<i32>,
    /// Normalized day-of-year per step (1..=366, leap-year template)
    pub doy: Vec<u32>,
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeAxis {
    /// Builds the daily axis covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`MhwError::InvalidTimeRange`] if `start` is after `end`.
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(MhwError::InvalidTimeRange {
                message: format!("start date {} is after end date {}", start, end),
            });
        }

        let len = (end - start).num_days() as usize + 1;
        let mut ordinals = Vec::with_capacity(len);
        let mut years = Vec::with_capacity(len);
        let mut doy = Vec::with_capacity(len);

        let mut date = start;
        while date <= end {
            ordinals.push(i64::from(date.num_days_from_ce()));
            years.push(date.year());
            doy.push(normalized_doy(date));
            date = date + Duration::days(1);
        }

        Ok(Self {
            ordinals,
            years,
            doy,
            start,
            end,
        })
    }

    /// Number of days on the axis
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    /// True if the axis is empty (never the case for a constructed axis)
    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    /// First date on the axis
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date on the axis
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Indices of steps whose calendar year falls within `years` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`MhwError::InvalidTimeRange`] if the year range is reversed or
    /// does not intersect the axis at all.
    pub fn year_span_indices(&self, start_year: i32, end_year: i32) -> Result<(usize, usize)> {
        if start_year > end_year {
            return Err(MhwError::InvalidTimeRange {
                message: format!(
                    "reference period {}..{} is reversed",
                    start_year, end_year
                ),
            });
        }

        let first = self.years.iter().position(|&y| y >= start_year);
        let last = self.years.iter().rposition(|&y| y <= end_year);

        match (first, last) {
            (Some(lo), Some(hi)) if lo <= hi => Ok((lo, hi)),
            _ => Err(MhwError::InvalidTimeRange {
                message: format!(
                    "reference period {}..{} does not overlap axis {}..{}",
                    start_year,
                    end_year,
                    self.start,
                    self.end
                ),
            }),
        }
    }
}

/// Maps a date onto the 366-day leap-year template.
///
/// In leap years this is the plain day-of-year. In non-leap years every day
/// from Mar 1 onward shifts by +1, so Mar 1 is always day 61 and day 60
/// (Feb 29) only occurs in leap years.
pub fn normalized_doy(date: NaiveDate) -> u32 {
    let ordinal = date.ordinal();
    if date.leap_year() || ordinal < FEB29_DOY {
        ordinal
    } else {
        ordinal + 1
    }
}
