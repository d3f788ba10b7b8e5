//! NetCDF I/O operations
//!
//! This module provides functions for reading a 1-D time series variable from
//! a NetCDF file and writing the computed threshold and climatology series to
//! a new NetCDF file with descriptive metadata.

use crate::errors::{MhwError, Result};
use chrono::Utc;
use ndarray::Array1;
use netcdf::{create, File};
use std::{fs, path::Path};

/// Name of the time dimension in the output file
pub const TIME_DIM: &str = "time";

/// Name of the threshold variable in the output file
pub const THRESHOLD_VAR: &str = "threshold";

/// Name of the seasonal climatology variable in the output file
pub const CLIMATOLOGY_VAR: &str = "climatology";

/// Reads a named 1-D variable as an `f64` series.
///
/// # Errors
///
/// Returns [`MhwError::VariableNotFound`] if the variable is missing and
/// [`MhwError::NotOneDimensional`] if it is not a 1-D series.
pub fn read_series(file: &File, var_name: &str) -> Result<Vec<f64>> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| MhwError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    let ndims = var.dimensions().len();
    if ndims != 1 {
        return Err(MhwError::NotOneDimensional {
            var: var_name.to_string(),
            ndims,
        });
    }

    Ok(var.get_values::<f64, _>(..)?)
}

/// Writer for the threshold/climatology output file
pub struct ClimatologyWriter<'a> {
    output_path: &'a Path,
}

impl<'a> ClimatologyWriter<'a> {
    /// Create a new writer targeting `output_path`
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }

    /// Write the threshold and seasonal series to a new NetCDF file.
    ///
    /// A pre-existing file at the output path is replaced. Values are written
    /// unmodified as 8-byte floats over a single `time` dimension.
    ///
    /// # Errors
    ///
    /// Returns [`MhwError::LengthMismatch`] if the two series differ in
    /// length, or a NetCDF/I/O error if the file cannot be written.
    pub fn write_result(&self, thresh: &[f64], seas: &[f64]) -> Result<()> {
        if thresh.len() != seas.len() {
            return Err(MhwError::LengthMismatch {
                what: "threshold vs climatology series".to_string(),
                expected: thresh.len(),
                actual: seas.len(),
            });
        }

        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        file.add_dimension(TIME_DIM, thresh.len())?;

        {
            let mut var = file.add_variable::<f64>(THRESHOLD_VAR, &[TIME_DIM])?;
            var.put_attribute("units", "degree_Celsius")?;
            var.put_attribute("long_name", "marine heatwave threshold")?;
            let data = Array1::from(thresh.to_vec());
            var.put(data.view(), ..)?;
        }

        {
            let mut var = file.add_variable::<f64>(CLIMATOLOGY_VAR, &[TIME_DIM])?;
            var.put_attribute("units", "degree_Celsius")?;
            var.put_attribute("long_name", "seasonal climatology")?;
            let data = Array1::from(seas.to_vec());
            var.put(data.view(), ..)?;
        }

        file.add_attribute(
            "history",
            format!("Created by mhw_clim on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}

/// Writes the threshold and climatology series to `output_path`.
pub fn write_climatology_to_netcdf(
    thresh: &[f64],
    seas: &[f64],
    output_path: &Path,
) -> Result<()> {
    let writer = ClimatologyWriter::new(output_path);
    writer.write_result(thresh, seas)
}
