//! Centralized error handling for mhw_clim
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! used in early versions, enabling better error context and type safety.

use std::fmt;

/// Main error type for mhw_clim operations
#[derive(Debug)]
pub enum MhwError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Variable has the wrong number of dimensions for a time series
    NotOneDimensional { var: String, ndims: usize },

    /// Series length does not match the time axis
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid calendar range or reference period
    InvalidTimeRange { message: String },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for MhwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MhwError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            MhwError::IoError(e) => write!(f, "I/O error: {}", e),
            MhwError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            MhwError::NotOneDimensional { var, ndims } => write!(
                f,
                "Variable '{}' has {} dimensions, expected a 1-D time series",
                var, ndims
            ),
            MhwError::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "Length mismatch for {}: expected {}, got {}",
                what, expected, actual
            ),
            MhwError::InvalidTimeRange { message } => {
                write!(f, "Invalid time range: {}", message)
            }
            MhwError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            MhwError::ArrayError(e) => write!(f, "Array error: {}", e),
            MhwError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MhwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MhwError::NetCDFError(e) => Some(e),
            MhwError::IoError(e) => Some(e),
            MhwError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for MhwError {
    fn from(error: netcdf::Error) -> Self {
        MhwError::NetCDFError(error)
    }
}

impl From<std::io::Error> for MhwError {
    fn from(error: std::io::Error) -> Self {
        MhwError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for MhwError {
    fn from(error: ndarray::ShapeError) -> Self {
        MhwError::ArrayError(error)
    }
}

impl From<String> for MhwError {
    fn from(error: String) -> Self {
        MhwError::Generic(error)
    }
}

impl From<&str> for MhwError {
    fn from(error: &str) -> Self {
        MhwError::Generic(error.to_string())
    }
}

/// Result type alias for mhw_clim operations
pub type Result<T> = std::result::Result<T, MhwError>;
